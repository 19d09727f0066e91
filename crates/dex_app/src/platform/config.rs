//! Optional `./.pokedex.ron` overrides for endpoints, paging and policies.

use std::fs;
use std::path::Path;
use std::time::Duration;

use dex_core::{
    CatalogConfig, RedirectRule, StaleDetailPolicy, DEFAULT_CATALOG_BASE, DEFAULT_IMAGE_DIR,
    DEFAULT_PAGE_LIMIT,
};
use dex_engine::FetchSettings;
use dex_logging::{dex_info, dex_warn};
use serde::Deserialize;

pub(crate) const CONFIG_FILENAME: &str = ".pokedex.ron";

#[derive(Debug, thiserror::Error)]
pub(crate) enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        source: ron::error::SpannedError,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
enum RedirectRuleSetting {
    #[default]
    Eager,
    WhenEmpty,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct PersistedConfig {
    base_url: String,
    limit: u32,
    offset: u32,
    image_dir: String,
    redirect_rule: RedirectRuleSetting,
    discard_stale_details: bool,
    request_timeout_secs: u64,
}

impl Default for PersistedConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_CATALOG_BASE.to_string(),
            limit: DEFAULT_PAGE_LIMIT,
            offset: 0,
            image_dir: DEFAULT_IMAGE_DIR.to_string(),
            redirect_rule: RedirectRuleSetting::Eager,
            discard_stale_details: true,
            request_timeout_secs: FetchSettings::default().request_timeout.as_secs(),
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct AppSettings {
    pub catalog: CatalogConfig,
    pub fetch: FetchSettings,
}

impl From<PersistedConfig> for AppSettings {
    fn from(config: PersistedConfig) -> Self {
        let catalog = CatalogConfig {
            base_url: config.base_url,
            limit: config.limit,
            offset: config.offset,
            image_dir: config.image_dir,
            redirect_rule: match config.redirect_rule {
                RedirectRuleSetting::Eager => RedirectRule::Eager,
                RedirectRuleSetting::WhenEmpty => RedirectRule::WhenEmpty,
            },
            stale_detail_policy: if config.discard_stale_details {
                StaleDetailPolicy::Discard
            } else {
                StaleDetailPolicy::ApplyToCurrent
            },
        };
        let fetch = FetchSettings {
            request_timeout: Duration::from_secs(config.request_timeout_secs.max(1)),
            ..FetchSettings::default()
        };
        Self { catalog, fetch }
    }
}

fn read_config(path: &Path) -> Result<Option<PersistedConfig>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.display().to_string(),
                source,
            })
        }
    };
    ron::from_str(&content)
        .map(Some)
        .map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
}

/// Loads settings from `path`; a missing or broken file yields defaults.
pub(crate) fn load_settings(path: &Path) -> AppSettings {
    match read_config(path) {
        Ok(Some(config)) => {
            dex_info!("Loaded config from {:?}", path);
            config.into()
        }
        Ok(None) => PersistedConfig::default().into(),
        Err(err) => {
            dex_warn!("{}; using defaults", err);
            PersistedConfig::default().into()
        }
    }
}
