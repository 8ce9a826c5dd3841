//! Gameyaml engine: storefront page extraction into canonical catalogue records.
mod assemble;
mod config;
mod convert;
mod document;
mod engine;
mod extract;
mod fetch;
mod filename;
mod hooks;
mod itch;
mod language;
mod link_rules;
mod normalize;
mod record;
mod render;
mod steam;
mod types;

pub use assemble::RecordAssembler;
pub use config::{SpiderConfig, AUTOMATICALLY_GENERATED, DEFAULT_INFO_PANEL_ROWS};
pub use convert::{Converter, Html2MdConverter};
pub use document::{strip_query, Document};
pub use engine::{build_extractor, Spider};
pub use extract::{Site, SiteExtractor};
pub use fetch::{decode_body, FetchSettings, Fetcher, ReqwestFetcher};
pub use filename::thumbnail_filename;
pub use hooks::{Hook, HookChain, HookLoader};
pub use itch::{scan_info_panel, ItchExtractor, RowLookup};
pub use language::{resolve_language, resolve_languages};
pub use link_rules::{rewrite_links, LinkRule, ITCH_LINK_RULES};
pub use normalize::{
    misc_tags, normalize_platform, normalize_platforms, MISC_TAG_TABLE, PLATFORM_TABLE,
};
pub use record::{
    AssembledRecord, Author, AuthorRole, CanonicalRecord, Link, MediaKind, Screenshot,
    Tags, VideoEntry, VideoSource,
};
pub use render::render_yaml;
pub use steam::{classify_social_link, SteamExtractor};
pub use types::{
    FailureKind, FetchError, FetchMetadata, FetchedPage, HookError, LookupError, RenderError,
    SpiderError, StructuralParseError,
};
