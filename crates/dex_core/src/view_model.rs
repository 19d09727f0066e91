use crate::{LoadState, SelectedRecord};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordRowView {
    /// Position in the working set; sent back with `Msg::RecordSelected`.
    pub record_index: usize,
    pub name: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TabRowsView {
    pub first: Vec<RecordRowView>,
    pub second: Vec<RecordRowView>,
}

impl TabRowsView {
    pub fn tab(&self, index: usize) -> &[RecordRowView] {
        match index {
            0 => &self.first,
            1 => &self.second,
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub load_state: LoadState,
    /// Display-order image paths of the whole working set.
    pub image_paths: Vec<String>,
    pub tabs: TabRowsView,
    pub active_tab: usize,
    pub tab_count: usize,
    pub search_term: String,
    pub selected: Option<SelectedRecord>,
    /// Background image keyed off the selected record's locator id.
    pub selected_image_path: Option<String>,
    pub dirty: bool,
}

impl AppViewModel {
    pub fn active_rows(&self) -> &[RecordRowView] {
        self.tabs.tab(self.active_tab)
    }
}
