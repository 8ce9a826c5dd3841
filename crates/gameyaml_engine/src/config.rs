use std::time::Duration;

use serde::Deserialize;

use crate::fetch::FetchSettings;

pub const DEFAULT_INFO_PANEL_ROWS: usize = 17;
pub const DEFAULT_THUMBNAIL_STEM: &str = "thumbnail";
pub const AUTOMATICALLY_GENERATED: &str = "automatically-generated";

/// Immutable settings handed to the spider, its extractors and the assembler.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SpiderConfig {
    pub request_timeout_secs: u64,
    pub connect_timeout_secs: u64,
    pub redirect_limit: usize,
    pub max_bytes: u64,
    pub user_agent: String,
    /// Number of itch.io info panel rows probed by position.
    pub info_panel_rows: usize,
    pub thumbnail_stem: String,
    pub sys_tags: Vec<String>,
}

impl Default for SpiderConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: 20,
            connect_timeout_secs: 10,
            redirect_limit: 5,
            max_bytes: 5 * 1024 * 1024,
            user_agent: concat!("gameyaml/", env!("CARGO_PKG_VERSION")).to_string(),
            info_panel_rows: DEFAULT_INFO_PANEL_ROWS,
            thumbnail_stem: DEFAULT_THUMBNAIL_STEM.to_string(),
            sys_tags: vec![AUTOMATICALLY_GENERATED.to_string()],
        }
    }
}

impl SpiderConfig {
    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            redirect_limit: self.redirect_limit,
            max_bytes: self.max_bytes,
            user_agent: self.user_agent.clone(),
        }
    }
}
