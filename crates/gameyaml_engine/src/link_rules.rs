//! Rewriting of outbound profile links into `site:handle` catalogue links.
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::Link;

/// One recognizer: a URL predicate plus the builder for the canonical URI.
pub struct LinkRule {
    pub name: &'static str,
    pattern: Regex,
    build: fn(&Captures<'_>) -> String,
}

impl LinkRule {
    fn new(name: &'static str, pattern: &str, build: fn(&Captures<'_>) -> String) -> Self {
        Self {
            name,
            // Patterns are literals below; a typo is a programming error.
            pattern: Regex::new(pattern).expect("valid link rule pattern"),
            build,
        }
    }

    /// The canonical link for `href`, if this rule recognizes it.
    pub fn apply(&self, href: &str) -> Option<Link> {
        let captures = self.pattern.captures(href)?;
        Some(Link::new(self.name, (self.build)(&captures)))
    }
}

fn group(captures: &Captures<'_>) -> String {
    captures
        .get(1)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Ordered rule set for the itch.io page. A channel URL is recognized by
/// both YouTube rules.
pub static ITCH_LINK_RULES: LazyLock<Vec<LinkRule>> = LazyLock::new(|| {
    vec![
        LinkRule::new(".youtube", r"^https://www\.youtube\.com/@?([^/]+)/?", |c| {
            format!("youtube:@{}", group(c))
        }),
        LinkRule::new(".youtube", r"^https://www\.youtube\.com/channel/(.+[^/])", |c| {
            format!("youtube:{}", group(c))
        }),
        LinkRule::new(".twitter", r"^https://twitter\.com/(.+)", |c| {
            format!("twitter:{}", group(c))
        }),
        LinkRule::new(".patreon", r"^https://www\.patreon\.com/(.+)", |c| {
            format!("patreon:{}", group(c))
        }),
        LinkRule::new(".discord", r"^https://discord\.gg/(.+)", |c| {
            format!("discord:{}", group(c))
        }),
        LinkRule::new(".facebook", r"^https://www\.facebook\.com/(.+)/", |c| {
            format!("facebook:{}", group(c))
        }),
    ]
});

/// Cross product of `hrefs` and `rules`: one link per matching pair, href
/// order first. Unrecognized hrefs produce nothing.
pub fn rewrite_links<'a, I>(hrefs: I, rules: &[LinkRule]) -> Vec<Link>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut links: Vec<Link> = Vec::new();
    for href in hrefs {
        for rule in rules {
            if let Some(link) = rule.apply(href) {
                if !links.contains(&link) {
                    links.push(link);
                }
            }
        }
    }
    links
}
