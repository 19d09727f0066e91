use dex_logging::dex_info;

use crate::decode::{
    decode_detail, decode_english_genus, decode_listing, ListingEntry, PokemonDetail,
};
use crate::{FetchError, Fetcher};

/// Fetches and decodes one listing page.
pub async fn load_catalog(
    fetcher: &dyn Fetcher,
    url: &str,
) -> Result<Vec<ListingEntry>, FetchError> {
    let output = fetcher.fetch(url).await?;
    let entries = decode_listing(&output.bytes)?;
    dex_info!(
        "Listing {} returned {} entries ({} bytes)",
        output.metadata.final_url,
        entries.len(),
        output.metadata.byte_len
    );
    Ok(entries)
}

/// Fetches a record's own detail locator.
pub async fn fetch_detail(fetcher: &dyn Fetcher, url: &str) -> Result<PokemonDetail, FetchError> {
    let output = fetcher.fetch(url).await?;
    Ok(decode_detail(&output.bytes)?)
}

/// Fetches a species locator and returns its English genus text.
pub async fn fetch_english_genus(fetcher: &dyn Fetcher, url: &str) -> Result<String, FetchError> {
    let output = fetcher.fetch(url).await?;
    Ok(decode_english_genus(&output.bytes)?)
}
