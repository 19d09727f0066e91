use dex_core::{matches_search, partition, SummaryRecord, TabView};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn record(name: &str) -> SummaryRecord {
    SummaryRecord {
        name: name.to_string(),
        url: format!("https://pokeapi.co/api/v2/pokemon/{name}/"),
        image: String::new(),
    }
}

#[test]
fn empty_input_yields_two_empty_halves() {
    let (first, second) = partition::<u8>(&[]);
    assert!(first.is_empty());
    assert!(second.is_empty());
}

#[test]
fn single_element_lands_in_first_half() {
    let (first, second) = partition(&["bulbasaur"]);
    assert_eq!(first, &["bulbasaur"]);
    assert!(second.is_empty());
}

#[test]
fn odd_length_gives_first_half_the_extra_element() {
    let (first, second) = partition(&[1, 2, 3, 4, 5]);
    assert_eq!(first, &[1, 2, 3]);
    assert_eq!(second, &[4, 5]);
}

#[test]
fn partition_is_idempotent() {
    let input = vec![10, 20, 30, 40];
    assert_eq!(partition(&input), partition(&input));
}

#[test]
fn search_is_case_insensitive() {
    assert!(matches_search("pikachu", "PIKA"));
    assert!(matches_search("Pikachu", "chu"));
    assert!(!matches_search("pikachu", "raichu"));
}

#[test]
fn empty_search_matches_everything() {
    assert!(matches_search("anything", ""));
    assert!(matches_search("", ""));
}

#[test]
fn tab_view_filters_then_splits_by_index() {
    let records = vec![
        record("bulbasaur"),
        record("ivysaur"),
        record("charmander"),
        record("venusaur"),
    ];

    let view = TabView::build(&records, "SAUR");

    assert_eq!(view.first, vec![0, 1]);
    assert_eq!(view.second, vec![3]);
    assert_eq!(view.tab(1), &[3]);
    assert!(view.tab(2).is_empty());
}

proptest! {
    #[test]
    fn halves_concatenate_to_input(input in proptest::collection::vec(any::<u16>(), 0..64)) {
        let (first, second) = partition(&input);

        prop_assert_eq!(first.len() + second.len(), input.len());
        prop_assert_eq!(first.len(), input.len().div_ceil(2));
        let rejoined: Vec<u16> = first.iter().chain(second.iter()).copied().collect();
        prop_assert_eq!(rejoined, input);
    }

    #[test]
    fn second_half_never_longer_than_first(len in 0usize..200) {
        let input: Vec<usize> = (0..len).collect();
        let (first, second) = partition(&input);
        prop_assert!(second.len() <= first.len());
        prop_assert!(first.len() - second.len() <= 1);
    }
}
