use isolang::Language;

use crate::normalize::push_unique;
use crate::LookupError;

/// Storefront labels whose wording differs from the ISO 639 reference names.
const LANGUAGE_ALIASES: &[(&str, &str)] = &[
    ("simplified chinese", "zh"),
    ("traditional chinese", "zh"),
    ("chinese", "zh"),
    ("brazilian portuguese", "pt"),
    ("greek", "el"),
    ("malay", "ms"),
    ("persian", "fa"),
    ("farsi", "fa"),
    ("latin american spanish", "es"),
    ("spanish", "es"),
    ("norwegian", "no"),
    ("nepali", "ne"),
    ("swahili", "sw"),
    ("bangla", "bn"),
    ("kyrgyz", "ky"),
    ("odia", "or"),
    ("punjabi", "pa"),
    ("uyghur", "ug"),
    ("sorani", "ku"),
    ("sotho", "st"),
    ("valencian", "ca"),
    ("dari", "fa"),
    ("khmer", "km"),
    ("sinhala", "si"),
    ("maori", "mi"),
    ("luxembourgish", "lb"),
    ("kinyarwanda", "rw"),
    ("tswana", "tn"),
];

/// Resolves a language label such as `English`, `Portuguese - Brazil` or
/// `Chinese (Simplified)` to its ISO 639-1 code.
pub fn resolve_language(label: &str) -> Result<&'static str, LookupError> {
    let cleaned: String = label.chars().filter(|c| !c.is_control()).collect();
    let cleaned = cleaned.trim();
    let base = base_name(cleaned);

    lookup_alias(cleaned)
        .or_else(|| lookup_alias(base))
        .or_else(|| lookup_name(base))
        .or_else(|| lookup_code(base))
        .ok_or_else(|| LookupError::UnknownLanguage(label.trim().to_string()))
}

/// Resolves every label, collapsing duplicates in first-seen order.
pub fn resolve_languages<'a, I>(labels: I) -> Result<Vec<String>, LookupError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut codes = Vec::new();
    for label in labels {
        push_unique(&mut codes, resolve_language(label)?);
    }
    Ok(codes)
}

/// `Spanish - Spain` -> `Spanish`, `Chinese (Simplified)` -> `Chinese`.
fn base_name(label: &str) -> &str {
    let end = label
        .find(" - ")
        .into_iter()
        .chain(label.find('('))
        .min()
        .unwrap_or(label.len());
    label[..end].trim()
}

fn lookup_alias(label: &str) -> Option<&'static str> {
    LANGUAGE_ALIASES
        .iter()
        .find(|(alias, _)| alias.eq_ignore_ascii_case(label))
        .map(|(_, code)| *code)
}

fn lookup_name(name: &str) -> Option<&'static str> {
    Language::from_name(name)
        .or_else(|| Language::from_name(&capitalize(name)))
        .and_then(|language| language.to_639_1())
}

fn lookup_code(code: &str) -> Option<&'static str> {
    if code.len() != 2 {
        return None;
    }
    Language::from_639_1(&code.to_ascii_lowercase()).and_then(|language| language.to_639_1())
}

fn capitalize(name: &str) -> String {
    let lower = name.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
