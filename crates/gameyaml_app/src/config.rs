//! Optional `gameyaml.ron` settings file in the working directory.

use std::fs;
use std::path::Path;

use gameyaml_engine::SpiderConfig;
use spider_logging::{spider_info, spider_warn};

pub(crate) const CONFIG_FILENAME: &str = "gameyaml.ron";

/// Reads `{dir}/gameyaml.ron`. A missing file means defaults; an unreadable
/// or invalid one is reported and also falls back to defaults.
pub(crate) fn load_config(dir: &Path) -> SpiderConfig {
    let path = dir.join(CONFIG_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return SpiderConfig::default();
        }
        Err(err) => {
            spider_warn!("Failed to read config from {:?}: {}", path, err);
            return SpiderConfig::default();
        }
    };

    match ron::from_str::<SpiderConfig>(&content) {
        Ok(config) => {
            spider_info!("Loaded config from {:?}", path);
            config
        }
        Err(err) => {
            spider_warn!("Failed to parse config from {:?}: {}", path, err);
            SpiderConfig::default()
        }
    }
}
