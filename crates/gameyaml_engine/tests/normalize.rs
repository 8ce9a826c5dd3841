use gameyaml_engine::{
    misc_tags, normalize_platforms, resolve_language, resolve_languages, rewrite_links,
    thumbnail_filename, Link, LookupError, ITCH_LINK_RULES, MISC_TAG_TABLE, PLATFORM_TABLE,
};
use pretty_assertions::assert_eq;

#[test]
fn platform_normalization_deduplicates_in_first_seen_order() {
    assert_eq!(
        normalize_platforms(["Windows", "Linux", "Windows"]).unwrap(),
        vec!["windows", "linux"]
    );
    assert_eq!(
        normalize_platforms(["Linux", "Windows", "Linux"]).unwrap(),
        vec!["linux", "windows"]
    );
}

#[test]
fn every_platform_label_maps_to_a_token() {
    let labels: Vec<&str> = PLATFORM_TABLE.iter().map(|(label, _)| *label).collect();
    assert_eq!(
        normalize_platforms(labels).unwrap(),
        vec!["windows", "macos", "linux", "android", "web", "ios"]
    );
}

#[test]
fn unmapped_platform_is_an_error_not_a_drop() {
    assert_eq!(
        normalize_platforms(["Windows", "Nintendo Switch"]),
        Err(LookupError::UnknownPlatform("Nintendo Switch".to_string()))
    );
}

#[test]
fn misc_tags_are_a_subset_of_the_table_tokens() {
    let tags = [
        "Pixel Art",
        "Unity free asset",
        "RPG Maker MV",
        "Ren'Py",
        "Visual Novel",
    ];
    let found = misc_tags(&tags);

    assert_eq!(
        found,
        vec![
            "pixel-art",
            "freeware",
            "engine-renpy",
            "engine-unity",
            "engine-rpg-maker"
        ]
    );
    for token in &found {
        assert!(MISC_TAG_TABLE.iter().any(|(_, value)| value == token));
    }
}

#[test]
fn misc_tag_keywords_are_case_sensitive() {
    assert_eq!(misc_tags(&["3d", "Free"]), Vec::<String>::new());
}

#[test]
fn languages_resolve_to_two_letter_codes() {
    assert_eq!(resolve_language("English"), Ok("en"));
    assert_eq!(resolve_language("  japanese "), Ok("ja"));
    assert_eq!(resolve_language("Portuguese - Brazil"), Ok("pt"));
    assert_eq!(resolve_language("Spanish - Latin America"), Ok("es"));
    assert_eq!(resolve_language("Chinese (Simplified)"), Ok("zh"));
    assert_eq!(resolve_language("Traditional Chinese"), Ok("zh"));
    assert_eq!(resolve_language("Greek"), Ok("el"));
    assert_eq!(resolve_language("de"), Ok("de"));
}

#[test]
fn language_codes_are_unique_and_iso() {
    let codes = resolve_languages([
        "English",
        "French",
        "English",
        "Simplified Chinese",
        "Traditional Chinese",
    ])
    .unwrap();

    assert_eq!(codes, vec!["en", "fr", "zh"]);
    assert!(codes
        .iter()
        .all(|code| code.len() == 2 && code.chars().all(|c| c.is_ascii_lowercase())));
}

#[test]
fn unknown_language_is_an_error() {
    assert_eq!(
        resolve_language("Klingonese"),
        Err(LookupError::UnknownLanguage("Klingonese".to_string()))
    );
}

/// Every language label the Steam store lists, with its ISO 639-1 code.
const STEAM_LANGUAGES: &[(&str, &str)] = &[
    ("English", "en"),
    ("French", "fr"),
    ("Italian", "it"),
    ("German", "de"),
    ("Spanish - Spain", "es"),
    ("Japanese", "ja"),
    ("Korean", "ko"),
    ("Polish", "pl"),
    ("Portuguese - Brazil", "pt"),
    ("Portuguese - Portugal", "pt"),
    ("Russian", "ru"),
    ("Simplified Chinese", "zh"),
    ("Traditional Chinese", "zh"),
    ("Spanish - Latin America", "es"),
    ("Arabic", "ar"),
    ("Bulgarian", "bg"),
    ("Czech", "cs"),
    ("Danish", "da"),
    ("Dutch", "nl"),
    ("Finnish", "fi"),
    ("Greek", "el"),
    ("Hungarian", "hu"),
    ("Indonesian", "id"),
    ("Norwegian", "no"),
    ("Romanian", "ro"),
    ("Swedish", "sv"),
    ("Thai", "th"),
    ("Turkish", "tr"),
    ("Ukrainian", "uk"),
    ("Vietnamese", "vi"),
    ("Afrikaans", "af"),
    ("Albanian", "sq"),
    ("Amharic", "am"),
    ("Armenian", "hy"),
    ("Assamese", "as"),
    ("Azerbaijani", "az"),
    ("Bangla", "bn"),
    ("Basque", "eu"),
    ("Belarusian", "be"),
    ("Bosnian", "bs"),
    ("Catalan", "ca"),
    ("Croatian", "hr"),
    ("Dari", "fa"),
    ("Estonian", "et"),
    ("Galician", "gl"),
    ("Georgian", "ka"),
    ("Gujarati", "gu"),
    ("Hausa", "ha"),
    ("Hebrew", "he"),
    ("Hindi", "hi"),
    ("Icelandic", "is"),
    ("Igbo", "ig"),
    ("Irish", "ga"),
    ("Kannada", "kn"),
    ("Kazakh", "kk"),
    ("Khmer", "km"),
    ("Kinyarwanda", "rw"),
    ("Kyrgyz", "ky"),
    ("Latvian", "lv"),
    ("Lithuanian", "lt"),
    ("Luxembourgish", "lb"),
    ("Macedonian", "mk"),
    ("Malay", "ms"),
    ("Malayalam", "ml"),
    ("Maltese", "mt"),
    ("Maori", "mi"),
    ("Marathi", "mr"),
    ("Mongolian", "mn"),
    ("Nepali", "ne"),
    ("Odia", "or"),
    ("Persian", "fa"),
    ("Punjabi (Gurmukhi)", "pa"),
    ("Punjabi (Shahmukhi)", "pa"),
    ("Quechua", "qu"),
    ("Serbian", "sr"),
    ("Sindhi", "sd"),
    ("Sinhala", "si"),
    ("Slovak", "sk"),
    ("Slovenian", "sl"),
    ("Sorani", "ku"),
    ("Sotho", "st"),
    ("Swahili", "sw"),
    ("Tajik", "tg"),
    ("Tamil", "ta"),
    ("Tatar", "tt"),
    ("Telugu", "te"),
    ("Tigrinya", "ti"),
    ("Tswana", "tn"),
    ("Turkmen", "tk"),
    ("Urdu", "ur"),
    ("Uyghur", "ug"),
    ("Uzbek", "uz"),
    ("Valencian", "ca"),
    ("Welsh", "cy"),
    ("Wolof", "wo"),
    ("Xhosa", "xh"),
    ("Yoruba", "yo"),
    ("Zulu", "zu"),
];

/// Steam labels for languages without a two-letter code.
const STEAM_LANGUAGES_WITHOUT_CODE: &[&str] = &["Cherokee", "Filipino", "K'iche'", "Konkani", "Scots"];

#[test]
fn every_steam_language_label_resolves() {
    let failures: Vec<(&str, Result<&str, LookupError>, &str)> = STEAM_LANGUAGES
        .iter()
        .map(|(label, code)| (*label, resolve_language(label), *code))
        .filter(|(_, resolved, code)| resolved.as_ref() != Ok(code))
        .collect();
    assert_eq!(failures, Vec::new());
}

#[test]
fn steam_languages_without_a_two_letter_code_are_unknown() {
    for label in STEAM_LANGUAGES_WITHOUT_CODE {
        assert_eq!(
            resolve_language(label),
            Err(LookupError::UnknownLanguage(label.to_string()))
        );
    }
}

#[test]
fn each_matching_rule_yields_one_link() {
    let channel = "https://www.youtube.com/channel/UCabc";
    let links = rewrite_links([channel], &ITCH_LINK_RULES);
    assert_eq!(links.len(), 2);

    let handle = "https://www.youtube.com/@studio";
    assert_eq!(
        rewrite_links([handle], &ITCH_LINK_RULES),
        vec![Link::new(".youtube", "youtube:@studio")]
    );
}

#[test]
fn hrefs_rewriting_to_the_same_link_keep_one_entry() {
    let links = rewrite_links(
        ["https://www.youtube.com/@foo", "https://www.youtube.com/@foo/"],
        &ITCH_LINK_RULES,
    );
    assert_eq!(links, vec![Link::new(".youtube", "youtube:@foo")]);
}

#[test]
fn unmatched_hrefs_produce_nothing() {
    let links = rewrite_links(
        ["https://example.com/", "/games/tag-puzzle", "mailto:a@b.c"],
        &ITCH_LINK_RULES,
    );
    assert!(links.is_empty());
}

#[test]
fn link_rules_build_site_handles() {
    let links = rewrite_links(
        [
            "https://twitter.com/studio",
            "https://www.patreon.com/studio",
            "https://discord.gg/AbCd12",
            "https://www.facebook.com/studio/",
        ],
        &ITCH_LINK_RULES,
    );

    assert_eq!(
        links,
        vec![
            Link::new(".twitter", "twitter:studio"),
            Link::new(".patreon", "patreon:studio"),
            Link::new(".discord", "discord:AbCd12"),
            Link::new(".facebook", "facebook:studio"),
        ]
    );
}

#[test]
fn thumbnail_name_keeps_the_extension() {
    assert_eq!(
        thumbnail_filename("thumbnail", "https://cdn.steam/apps/1/header.jpg"),
        "thumbnail.jpg"
    );
}
