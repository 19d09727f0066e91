//! Typed boundary for the three catalog payloads.
//!
//! Every payload is validated against an explicit shape; missing or mistyped
//! fields fail with [`DecodeError`] instead of flowing on as empty values.

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("malformed {payload} payload: {message}")]
    Json {
        payload: &'static str,
        message: String,
    },
    #[error("species payload has no English genus")]
    MissingEnglishGenus,
}

/// Language code whose genus text is used as the element type.
pub const GENUS_LANGUAGE: &str = "en";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ListingEntry {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Deserialize)]
struct ListingPage {
    results: Vec<ListingEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TypeEntry {
    pub slot: u8,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PokemonDetail {
    pub id: u32,
    pub height: u32,
    pub types: Vec<TypeEntry>,
    #[serde(default)]
    pub species: Option<NamedResource>,
}

#[derive(Debug, Deserialize)]
struct Genus {
    genus: String,
    language: NamedResource,
}

#[derive(Debug, Deserialize)]
struct SpeciesPayload {
    genera: Vec<Genus>,
}

fn parse<'a, T: Deserialize<'a>>(
    payload: &'static str,
    bytes: &'a [u8],
) -> Result<T, DecodeError> {
    serde_json::from_slice(bytes).map_err(|err| DecodeError::Json {
        payload,
        message: err.to_string(),
    })
}

/// Decodes `{ results: [{name, url}, ...] }` in server order.
pub fn decode_listing(bytes: &[u8]) -> Result<Vec<ListingEntry>, DecodeError> {
    parse::<ListingPage>("listing", bytes).map(|page| page.results)
}

/// Decodes `{ id, height, types: [...], species? }`.
pub fn decode_detail(bytes: &[u8]) -> Result<PokemonDetail, DecodeError> {
    parse("detail", bytes)
}

/// Picks the genus whose `language.name` is English.
pub fn decode_english_genus(bytes: &[u8]) -> Result<String, DecodeError> {
    let species: SpeciesPayload = parse("species", bytes)?;
    species
        .genera
        .into_iter()
        .find(|genus| genus.language.name == GENUS_LANGUAGE)
        .map(|genus| genus.genus)
        .ok_or(DecodeError::MissingEnglishGenus)
}
