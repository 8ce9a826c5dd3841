use spider_logging::spider_debug;

use crate::filename::thumbnail_filename;
use crate::{
    AssembledRecord, CanonicalRecord, HookChain, SiteExtractor, SpiderConfig, SpiderError, Tags,
};

/// Builds the canonical record from an extractor's accessors.
pub struct RecordAssembler {
    config: SpiderConfig,
}

impl RecordAssembler {
    pub fn new(config: SpiderConfig) -> Self {
        Self { config }
    }

    /// Any accessor or hook failure aborts; no partial record is returned.
    pub fn assemble(
        &self,
        extractor: &dyn SiteExtractor,
        hooks: &HookChain,
    ) -> Result<AssembledRecord, SpiderError> {
        let name = extractor.name()?;
        spider_debug!("Assembling record for {}", name);

        let thumbnail_url = extractor.thumbnail()?;
        let tags = Tags {
            misc: extractor.misc_tags()?,
            generated_tags: extractor.generated_tags()?,
            lang: extractor.languages()?,
            platform: extractor.platforms()?,
            sys: self.config.sys_tags.clone(),
            ..Tags::default()
        };

        let record = CanonicalRecord {
            brief_description: extractor.brief_description()?,
            description: extractor.description()?,
            authors: extractor.authors()?,
            tags,
            links: extractor.links()?,
            thumbnail: thumbnail_filename(&self.config.thumbnail_stem, &thumbnail_url),
            screenshots: extractor.screenshots()?,
            name,
        };

        let name = record.name.clone();
        let record = hooks.apply(&name, record)?;
        Ok(AssembledRecord {
            record,
            thumbnail_url,
        })
    }
}
