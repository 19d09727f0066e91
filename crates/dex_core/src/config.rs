use url::Url;

use crate::RedirectRule;

pub const DEFAULT_CATALOG_BASE: &str = "https://pokeapi.co/api/v2/pokemon";
pub const DEFAULT_PAGE_LIMIT: u32 = 10;
pub const DEFAULT_IMAGE_DIR: &str = "pokemon-images";
pub const TAB_COUNT: usize = 2;

/// What to do with a detail response that belongs to an earlier selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StaleDetailPolicy {
    /// Drop responses whose request id no longer matches the selection.
    #[default]
    Discard,
    /// Write late responses into whatever is currently selected.
    ApplyToCurrent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub base_url: String,
    pub limit: u32,
    pub offset: u32,
    pub image_dir: String,
    pub redirect_rule: RedirectRule,
    pub stale_detail_policy: StaleDetailPolicy,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_CATALOG_BASE.to_string(),
            limit: DEFAULT_PAGE_LIMIT,
            offset: 0,
            image_dir: DEFAULT_IMAGE_DIR.to_string(),
            redirect_rule: RedirectRule::default(),
            stale_detail_policy: StaleDetailPolicy::default(),
        }
    }
}

impl CatalogConfig {
    /// Listing URL for the configured page, e.g. `<base>?limit=10&offset=0`.
    ///
    /// Falls back to plain concatenation when `base_url` does not parse so
    /// the engine reports the bad locator instead of the core.
    pub fn listing_url(&self) -> String {
        match Url::parse(&self.base_url) {
            Ok(mut url) => {
                url.query_pairs_mut()
                    .clear()
                    .append_pair("limit", &self.limit.to_string())
                    .append_pair("offset", &self.offset.to_string());
                url.to_string()
            }
            Err(_) => format!(
                "{}?limit={}&offset={}",
                self.base_url, self.limit, self.offset
            ),
        }
    }
}
