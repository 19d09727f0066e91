//! Pokedex core: pure view-state machine for the catalog viewer.
mod config;
mod effect;
mod msg;
mod partition;
mod record;
mod state;
mod update;
mod view_model;

pub use config::{
    CatalogConfig, StaleDetailPolicy, DEFAULT_CATALOG_BASE, DEFAULT_IMAGE_DIR, DEFAULT_PAGE_LIMIT,
    TAB_COUNT,
};
pub use effect::Effect;
pub use msg::{Msg, TabDirection};
pub use partition::{matches_search, partition, redirect_tab, RedirectRule, TabView};
pub use record::{
    image_path, pokemon_id_from_url, CatalogEntry, DetailFields, LocatorError, SelectedRecord,
    SummaryRecord, TypeSlot,
};
pub use state::{AppState, LoadState, RequestId};
pub use update::update;
pub use view_model::{AppViewModel, RecordRowView, TabRowsView};
