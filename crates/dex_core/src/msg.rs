use crate::{CatalogEntry, DetailFields, RequestId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabDirection {
    Previous,
    Next,
}

impl TabDirection {
    pub fn delta(self) -> isize {
        match self {
            TabDirection::Previous => -1,
            TabDirection::Next => 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Application is up; request the catalog page.
    Started,
    /// Listing endpoint answered.
    CatalogLoaded(Vec<CatalogEntry>),
    /// Listing fetch or decode failed.
    CatalogFailed { reason: String },
    /// User edited the search box (full current text).
    SearchChanged(String),
    /// User picked a record; `record_index` points into the working set.
    RecordSelected { record_index: usize },
    /// Detail endpoint answered for an earlier selection.
    DetailLoaded {
        request: RequestId,
        detail: DetailFields,
    },
    /// User asked for the category text of the selected record.
    ElementTypeRequested { species_url: String },
    /// Species endpoint answered with the English genus.
    ElementTypeLoaded { request: RequestId, genus: String },
    /// A detail or species fetch failed.
    DetailFailed { request: RequestId, reason: String },
    /// User moved between tabs.
    TabNavigated(TabDirection),
}
