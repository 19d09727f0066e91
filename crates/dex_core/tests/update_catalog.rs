use std::sync::Once;

use dex_core::{
    update, AppState, CatalogConfig, CatalogEntry, Effect, LoadState, Msg, TabDirection,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(dex_logging::initialize_for_tests);
}

const FIRST_PAGE: [&str; 10] = [
    "bulbasaur",
    "ivysaur",
    "venusaur",
    "charmander",
    "charmeleon",
    "charizard",
    "squirtle",
    "wartortle",
    "blastoise",
    "caterpie",
];

fn first_page() -> Vec<CatalogEntry> {
    FIRST_PAGE
        .iter()
        .enumerate()
        .map(|(i, name)| CatalogEntry {
            name: name.to_string(),
            url: format!("https://pokeapi.co/api/v2/pokemon/{}/", i + 1),
        })
        .collect()
}

#[test]
fn started_requests_first_page_once() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::Started);

    assert_eq!(
        effects,
        vec![Effect::FetchCatalog {
            url: "https://pokeapi.co/api/v2/pokemon?limit=10&offset=0".to_string(),
        }]
    );
    assert_eq!(state.view().load_state, LoadState::Pending);

    let (state, effects) = update(state, Msg::Started);
    assert!(effects.is_empty());
    assert_eq!(state.load_state(), LoadState::Pending);
}

#[test]
fn started_uses_configured_page() {
    init_logging();
    let config = CatalogConfig {
        base_url: "http://localhost:8080/api/v2/pokemon".to_string(),
        limit: 4,
        offset: 8,
        ..CatalogConfig::default()
    };
    let (_state, effects) = update(AppState::with_config(config), Msg::Started);

    assert_eq!(
        effects,
        vec![Effect::FetchCatalog {
            url: "http://localhost:8080/api/v2/pokemon?limit=4&offset=8".to_string(),
        }]
    );
}

#[test]
fn loaded_page_splits_five_and_five() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::Started);
    let (mut state, effects) = update(state, Msg::CatalogLoaded(first_page()));

    assert!(effects.is_empty());
    assert!(state.consume_dirty());
    let view = state.view();
    assert_eq!(view.load_state, LoadState::Loaded);
    assert_eq!(view.tabs.first.len(), 5);
    assert_eq!(view.tabs.second.len(), 5);
    assert_eq!(view.tabs.first[0].name, "bulbasaur");
    assert_eq!(view.tabs.second[0].name, "charizard");
    assert_eq!(view.active_tab, 0);
    assert_eq!(view.tab_count, 2);
}

#[test]
fn images_follow_display_order_not_catalog_id() {
    init_logging();
    let entries = vec![
        CatalogEntry {
            name: "pikachu".to_string(),
            url: "https://pokeapi.co/api/v2/pokemon/25/".to_string(),
        },
        CatalogEntry {
            name: "mew".to_string(),
            url: "https://pokeapi.co/api/v2/pokemon/151/".to_string(),
        },
    ];

    let (state, _) = update(AppState::new(), Msg::CatalogLoaded(entries));
    let view = state.view();

    assert_eq!(
        view.image_paths,
        vec![
            "pokemon-images/pokemon1.jpg".to_string(),
            "pokemon-images/pokemon2.jpg".to_string(),
        ]
    );
    assert_eq!(state.working_set()[0].image, "pokemon-images/pokemon1.jpg");
}

#[test]
fn failed_load_leaves_working_set_empty() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::Started);
    let (mut state, effects) = update(
        state,
        Msg::CatalogFailed {
            reason: "network error".to_string(),
        },
    );

    assert!(effects.is_empty());
    assert!(state.consume_dirty());
    let view = state.view();
    assert_eq!(view.load_state, LoadState::Failed);
    assert!(view.image_paths.is_empty());
    assert!(view.tabs.first.is_empty());
    assert!(view.tabs.second.is_empty());

    // No retry on a later start.
    let (_state, effects) = update(state, Msg::Started);
    assert!(effects.is_empty());
}

#[test]
fn empty_page_yields_empty_tabs() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::CatalogLoaded(Vec::new()));
    let view = state.view();

    assert_eq!(view.load_state, LoadState::Loaded);
    assert!(view.active_rows().is_empty());
}

#[test]
fn search_typed_while_loading_moves_off_empty_tab() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::Started);
    let (state, _) = update(state, Msg::TabNavigated(TabDirection::Next));
    let (state, _) = update(state, Msg::SearchChanged("bulba".to_string()));
    assert_eq!(state.active_tab(), 1);

    let entries = first_page().into_iter().take(3).collect();
    let (state, _) = update(state, Msg::CatalogLoaded(entries));
    let view = state.view();

    assert_eq!(view.tabs.first.len(), 1);
    assert!(view.tabs.second.is_empty());
    assert_eq!(view.active_tab, 0);
    assert_eq!(view.active_rows()[0].name, "bulbasaur");
}

#[test]
fn load_keeps_active_tab_that_has_rows() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::Started);
    let (state, _) = update(state, Msg::TabNavigated(TabDirection::Next));
    let (state, _) = update(state, Msg::CatalogLoaded(first_page()));
    let view = state.view();

    assert_eq!(view.active_tab, 1);
    assert_eq!(view.active_rows().len(), 5);
}
