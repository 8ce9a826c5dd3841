use crate::{Author, Link, Screenshot, SpiderError};

/// Field accessors over one parsed storefront page.
///
/// Accessors are independent: each may be called any number of times, in any
/// order, and reports its own failure. Nothing is cached across documents.
pub trait SiteExtractor {
    /// Whether this extractor understands pages at `url`.
    fn verify(url: &str) -> bool
    where
        Self: Sized;

    fn name(&self) -> Result<String, SpiderError>;
    fn brief_description(&self) -> Result<Option<String>, SpiderError>;
    fn description(&self) -> Result<String, SpiderError>;
    fn authors(&self) -> Result<Vec<Author>, SpiderError>;
    /// Raw storefront tags, kept verbatim.
    fn generated_tags(&self) -> Result<Vec<String>, SpiderError>;

    fn misc_tags(&self) -> Result<Vec<String>, SpiderError> {
        Ok(Vec::new())
    }

    fn languages(&self) -> Result<Vec<String>, SpiderError>;

    fn platforms(&self) -> Result<Vec<String>, SpiderError> {
        Ok(Vec::new())
    }

    fn links(&self) -> Result<Vec<Link>, SpiderError>;
    /// Remote URL of the cover image.
    fn thumbnail(&self) -> Result<String, SpiderError>;
    fn screenshots(&self) -> Result<Vec<Screenshot>, SpiderError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Site {
    Itch,
    Steam,
}

impl Site {
    /// Picks the extractor for `url` without touching the network.
    pub fn detect(url: &str) -> Option<Site> {
        if crate::ItchExtractor::verify(url) {
            Some(Site::Itch)
        } else if crate::SteamExtractor::verify(url) {
            Some(Site::Steam)
        } else {
            None
        }
    }
}
