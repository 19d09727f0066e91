use crate::RequestId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch the listing page once at startup.
    FetchCatalog { url: String },
    /// Fetch a record's own detail locator.
    FetchDetail { request: RequestId, url: String },
    /// Fetch a species locator and pick its English genus.
    FetchElementType { request: RequestId, url: String },
}
