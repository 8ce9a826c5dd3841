use spider_logging::spider_info;

use crate::{
    AssembledRecord, Document, Fetcher, HookChain, ItchExtractor, RecordAssembler, Site,
    SiteExtractor, SpiderConfig, SpiderError, SteamExtractor,
};

/// Single-page pipeline: detect site, fetch, parse, extract, assemble, hooks.
pub struct Spider<F: Fetcher> {
    fetcher: F,
    config: SpiderConfig,
    hooks: HookChain,
}

impl<F: Fetcher> Spider<F> {
    pub fn new(fetcher: F, config: SpiderConfig, hooks: HookChain) -> Self {
        Self {
            fetcher,
            config,
            hooks,
        }
    }

    /// Runs every stage in order on the calling thread.
    pub fn run(&self, url: &str) -> Result<AssembledRecord, SpiderError> {
        let site = Site::detect(url).ok_or_else(|| SpiderError::UnsupportedUrl(url.to_string()))?;
        spider_info!("Detected {:?} page at {}", site, url);

        let page = self.fetcher.fetch(url)?;
        let document = Document::parse(&page.text);
        let extractor = build_extractor(site, document, url, &self.config)?;

        let assembled = RecordAssembler::new(self.config.clone())
            .assemble(extractor.as_ref(), &self.hooks)?;
        spider_info!(
            "Extracted {} ({} links, {} screenshots)",
            assembled.record.name,
            assembled.record.links.len(),
            assembled.record.screenshots.len()
        );
        Ok(assembled)
    }
}

/// The extractor for `site`, bound to an already parsed page.
pub fn build_extractor(
    site: Site,
    document: Document,
    url: &str,
    config: &SpiderConfig,
) -> Result<Box<dyn SiteExtractor>, SpiderError> {
    let extractor: Box<dyn SiteExtractor> = match site {
        Site::Itch => Box::new(ItchExtractor::new(document, config)),
        Site::Steam => Box::new(SteamExtractor::new(document, url)?),
    };
    Ok(extractor)
}
