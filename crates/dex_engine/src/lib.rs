//! Pokedex engine: catalog HTTP fetching, payload decoding and effect execution.
mod catalog;
mod decode;
mod engine;
mod fetch;
mod types;

pub use catalog::{fetch_detail, fetch_english_genus, load_catalog};
pub use decode::{
    decode_detail, decode_english_genus, decode_listing, DecodeError, ListingEntry, NamedResource,
    PokemonDetail, TypeEntry, GENUS_LANGUAGE,
};
pub use engine::{ChannelEventSink, EngineHandle, EventSink};
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher};
pub use types::{EngineEvent, FailureKind, FetchError, FetchMetadata, FetchOutput, RequestId};
