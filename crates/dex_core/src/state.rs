use dex_logging::{dex_debug, dex_info, dex_warn};

use crate::config::TAB_COUNT;
use crate::view_model::{AppViewModel, RecordRowView, TabRowsView};
use crate::{
    image_path, pokemon_id_from_url, redirect_tab, CatalogConfig, CatalogEntry, DetailFields,
    RedirectRule, SelectedRecord, StaleDetailPolicy, SummaryRecord, TabView,
};

/// Monotonic id attached to every detail/species request.
pub type RequestId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Pending,
    Loaded,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    config: CatalogConfig,
    load_state: LoadState,
    working_set: Vec<SummaryRecord>,
    tabs: TabView,
    active_tab: usize,
    tab_count: usize,
    search_term: String,
    selected: Option<SelectedRecord>,
    selected_image_path: Option<String>,
    selection_generation: RequestId,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_config(CatalogConfig::default())
    }

    pub fn with_config(config: CatalogConfig) -> Self {
        Self {
            config,
            load_state: LoadState::Idle,
            working_set: Vec::new(),
            tabs: TabView::default(),
            active_tab: 0,
            tab_count: TAB_COUNT,
            search_term: String::new(),
            selected: None,
            selected_image_path: None,
            selection_generation: 0,
            dirty: false,
        }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    pub fn working_set(&self) -> &[SummaryRecord] {
        &self.working_set
    }

    pub fn tabs(&self) -> &TabView {
        &self.tabs
    }

    pub fn active_tab(&self) -> usize {
        self.active_tab
    }

    pub fn selected(&self) -> Option<&SelectedRecord> {
        self.selected.as_ref()
    }

    pub fn current_request(&self) -> RequestId {
        self.selection_generation
    }

    pub fn view(&self) -> AppViewModel {
        let rows = |indices: &[usize]| -> Vec<RecordRowView> {
            indices
                .iter()
                .filter_map(|&index| {
                    self.working_set.get(index).map(|record| RecordRowView {
                        record_index: index,
                        name: record.name.clone(),
                        image: record.image.clone(),
                    })
                })
                .collect()
        };

        AppViewModel {
            load_state: self.load_state,
            image_paths: self
                .working_set
                .iter()
                .map(|record| record.image.clone())
                .collect(),
            tabs: TabRowsView {
                first: rows(&self.tabs.first),
                second: rows(&self.tabs.second),
            },
            active_tab: self.active_tab,
            tab_count: self.tab_count,
            search_term: self.search_term.clone(),
            selected: self.selected.clone(),
            selected_image_path: self.selected_image_path.clone(),
            dirty: self.dirty,
        }
    }

    /// Returns whether a render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Moves `Idle` to `Pending`; returns false if a load was already started.
    pub(crate) fn begin_load(&mut self) -> bool {
        if self.load_state != LoadState::Idle {
            return false;
        }
        self.load_state = LoadState::Pending;
        self.mark_dirty();
        true
    }

    pub(crate) fn apply_catalog(&mut self, entries: Vec<CatalogEntry>) {
        let image_dir = self.config.image_dir.clone();
        self.working_set = entries
            .into_iter()
            .enumerate()
            .map(|(position, entry)| SummaryRecord {
                name: entry.name,
                url: entry.url,
                image: image_path(&image_dir, position as u32 + 1),
            })
            .collect();
        self.load_state = LoadState::Loaded;
        self.tabs = TabView::build(&self.working_set, &self.search_term);
        // A term typed while loading may leave the active tab empty.
        self.active_tab = redirect_tab(self.active_tab, &self.tabs, RedirectRule::WhenEmpty);
        dex_info!(
            "Catalog loaded: {} records, tabs {}/{}",
            self.working_set.len(),
            self.tabs.first.len(),
            self.tabs.second.len()
        );
        self.mark_dirty();
    }

    pub(crate) fn fail_load(&mut self, reason: &str) {
        dex_warn!("Catalog load failed: {}", reason);
        self.load_state = LoadState::Failed;
        self.mark_dirty();
    }

    pub(crate) fn apply_search(&mut self, term: String) {
        self.search_term = term;
        self.tabs = TabView::build(&self.working_set, &self.search_term);
        let next = redirect_tab(self.active_tab, &self.tabs, self.config.redirect_rule);
        if next != self.active_tab {
            dex_debug!(
                "Search {:?} redirected tab {} -> {}",
                self.search_term,
                self.active_tab,
                next
            );
        }
        self.active_tab = next;
        self.mark_dirty();
    }

    /// Selects a record and returns the request id and locator to fetch.
    pub(crate) fn select(&mut self, record_index: usize) -> Option<(RequestId, String)> {
        let summary = self.working_set.get(record_index)?.clone();

        self.selected_image_path = match pokemon_id_from_url(&summary.url) {
            Ok(id) => Some(image_path(&self.config.image_dir, id)),
            Err(err) => {
                dex_warn!("No provisional image for {}: {}", summary.name, err);
                None
            }
        };

        let url = summary.url.clone();
        self.selected = Some(SelectedRecord::from_summary(summary));
        self.selection_generation += 1;
        self.mark_dirty();
        Some((self.selection_generation, url))
    }

    fn accepts(&self, request: RequestId) -> bool {
        match self.config.stale_detail_policy {
            StaleDetailPolicy::Discard => request == self.selection_generation,
            StaleDetailPolicy::ApplyToCurrent => true,
        }
    }

    pub(crate) fn apply_detail(&mut self, request: RequestId, detail: DetailFields) {
        if !self.accepts(request) {
            dex_debug!(
                "Dropping stale detail response {} (current {})",
                request,
                self.selection_generation
            );
            return;
        }
        let image_dir = self.config.image_dir.clone();
        if let Some(selected) = self.selected.as_mut() {
            selected.merge_detail(detail, &image_dir);
            self.mark_dirty();
        }
    }

    pub(crate) fn apply_element_type(&mut self, request: RequestId, genus: String) {
        if !self.accepts(request) {
            dex_debug!(
                "Dropping stale species response {} (current {})",
                request,
                self.selection_generation
            );
            return;
        }
        if let Some(selected) = self.selected.as_mut() {
            selected.element_type = Some(genus);
            self.mark_dirty();
        }
    }

    /// Moves the active tab by `delta`; out-of-range targets are ignored.
    pub(crate) fn navigate(&mut self, delta: isize) {
        let Some(next) = self.active_tab.checked_add_signed(delta) else {
            return;
        };
        if next < self.tab_count && next != self.active_tab {
            self.active_tab = next;
            self.mark_dirty();
        }
    }
}
