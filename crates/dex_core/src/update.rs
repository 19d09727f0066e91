use dex_logging::{dex_debug, dex_warn};

use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started => {
            if state.begin_load() {
                vec![Effect::FetchCatalog {
                    url: state.config().listing_url(),
                }]
            } else {
                Vec::new()
            }
        }
        Msg::CatalogLoaded(entries) => {
            state.apply_catalog(entries);
            Vec::new()
        }
        Msg::CatalogFailed { reason } => {
            state.fail_load(&reason);
            Vec::new()
        }
        Msg::SearchChanged(term) => {
            state.apply_search(term);
            Vec::new()
        }
        Msg::RecordSelected { record_index } => match state.select(record_index) {
            Some((request, url)) => vec![Effect::FetchDetail { request, url }],
            None => {
                dex_debug!("Ignoring selection of unknown record {}", record_index);
                Vec::new()
            }
        },
        Msg::DetailLoaded { request, detail } => {
            state.apply_detail(request, detail);
            Vec::new()
        }
        Msg::ElementTypeRequested { species_url } => {
            if state.selected().is_some() {
                vec![Effect::FetchElementType {
                    request: state.current_request(),
                    url: species_url,
                }]
            } else {
                Vec::new()
            }
        }
        Msg::ElementTypeLoaded { request, genus } => {
            state.apply_element_type(request, genus);
            Vec::new()
        }
        Msg::DetailFailed { request, reason } => {
            dex_warn!("Detail request {} failed: {}", request, reason);
            Vec::new()
        }
        Msg::TabNavigated(direction) => {
            state.navigate(direction.delta());
            Vec::new()
        }
    };

    (state, effects)
}
