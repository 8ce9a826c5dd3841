//! Static vocabularies that map storefront wording onto catalogue tokens.
use crate::LookupError;

/// Platform labels as printed in the itch.io info panel.
pub const PLATFORM_TABLE: &[(&str, &str)] = &[
    ("Windows", "windows"),
    ("macOS", "macos"),
    ("Linux", "linux"),
    ("Android", "android"),
    ("HTML5", "web"),
    ("iOS", "ios"),
];

/// Substring keyword -> misc tag. Matching is case-sensitive; several
/// keywords may share one token.
pub const MISC_TAG_TABLE: &[(&str, &str)] = &[
    ("3D", "3d"),
    ("Pixel Art", "pixel-art"),
    ("free", "freeware"),
    ("Multiplayer", "multiplayer"),
    ("Co-op", "co-op"),
    ("PvP", "pvp"),
    ("Ren'Py", "engine-renpy"),
    ("Unity", "engine-unity"),
    ("RPG Maker", "engine-rpg-maker"),
    ("Godot", "engine-godot"),
    ("ue4", "engine-ue4"),
    ("unreal - engine - 4", "engine-ue4"),
    ("TyranoBuilder", "engine-tyranobuilder"),
    ("Flash", "adobe-flash"),
    ("t-series", "multiple-series"),
    ("Multiple Endings", "multiple-endings"),
];

pub fn normalize_platform(raw: &str) -> Result<&'static str, LookupError> {
    let trimmed = raw.trim();
    PLATFORM_TABLE
        .iter()
        .find(|(label, _)| *label == trimmed)
        .map(|(_, token)| *token)
        .ok_or_else(|| LookupError::UnknownPlatform(trimmed.to_string()))
}

/// Maps every raw platform, failing on the first unknown one. Duplicates
/// collapse; the first occurrence fixes the position.
pub fn normalize_platforms<'a, I>(raw: I) -> Result<Vec<String>, LookupError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut platforms = Vec::new();
    for value in raw {
        push_unique(&mut platforms, normalize_platform(value)?);
    }
    Ok(platforms)
}

/// Every misc token whose keyword occurs inside any of `tags`.
pub fn misc_tags<S: AsRef<str>>(tags: &[S]) -> Vec<String> {
    let mut found = Vec::new();
    for (keyword, token) in MISC_TAG_TABLE {
        if tags.iter().any(|tag| tag.as_ref().contains(keyword)) {
            push_unique(&mut found, token);
        }
    }
    found
}

pub(crate) fn push_unique(values: &mut Vec<String>, value: &str) {
    if !values.iter().any(|existing| existing == value) {
        values.push(value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_lookup_trims_before_matching() {
        assert_eq!(normalize_platform("  HTML5 "), Ok("web"));
    }

    #[test]
    fn shared_tokens_appear_once() {
        let tags = ["ue4", "unreal - engine - 4"];
        assert_eq!(misc_tags(&tags), vec!["engine-ue4".to_string()]);
    }
}
