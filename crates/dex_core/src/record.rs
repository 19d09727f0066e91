use thiserror::Error;

/// Minimal catalog entry as handed over by the listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: String,
    pub url: String,
}

/// A summary record in the working set.
///
/// `image` is derived from display order at load time, not from the catalog id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRecord {
    pub name: String,
    pub url: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSlot {
    pub slot: u8,
    pub type_name: String,
}

/// Attributes only available from the per-record detail endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailFields {
    /// Authoritative catalog id.
    pub id: u32,
    pub height: u32,
    pub types: Vec<TypeSlot>,
    pub species_url: Option<String>,
}

/// The selected record plus whatever detail fields have arrived so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedRecord {
    pub summary: SummaryRecord,
    pub height: Option<u32>,
    pub types: Vec<TypeSlot>,
    pub element_type: Option<String>,
    pub species_url: Option<String>,
    pub image: String,
}

impl SelectedRecord {
    pub fn from_summary(summary: SummaryRecord) -> Self {
        let image = summary.image.clone();
        Self {
            summary,
            height: None,
            types: Vec::new(),
            element_type: None,
            species_url: None,
            image,
        }
    }

    pub(crate) fn merge_detail(&mut self, detail: DetailFields, image_dir: &str) {
        self.height = Some(detail.height);
        self.types = detail.types;
        self.species_url = detail.species_url;
        self.image = image_path(image_dir, detail.id);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocatorError {
    #[error("locator {0:?} has fewer than two path segments")]
    TooShort(String),
    #[error("locator {url:?} has non-numeric id segment {segment:?}")]
    NotNumeric { url: String, segment: String },
}

/// Extracts the numeric id encoded as the second-to-last `/` segment.
///
/// `https://pokeapi.co/api/v2/pokemon/25/` yields `25`; the trailing slash
/// produces the empty last segment.
pub fn pokemon_id_from_url(url: &str) -> Result<u32, LocatorError> {
    let parts: Vec<&str> = url.split('/').collect();
    if parts.len() < 2 {
        return Err(LocatorError::TooShort(url.to_string()));
    }
    let segment = parts[parts.len() - 2];
    segment.parse::<u32>().map_err(|_| LocatorError::NotNumeric {
        url: url.to_string(),
        segment: segment.to_string(),
    })
}

pub fn image_path(image_dir: &str, number: u32) -> String {
    format!("{image_dir}/pokemon{number}.jpg")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_is_second_to_last_segment() {
        assert_eq!(
            pokemon_id_from_url("https://pokeapi.co/api/v2/pokemon/25/"),
            Ok(25)
        );
        assert_eq!(pokemon_id_from_url("pokemon/7/x"), Ok(7));
    }

    #[test]
    fn malformed_locators_are_rejected() {
        assert_eq!(
            pokemon_id_from_url("pikachu"),
            Err(LocatorError::TooShort("pikachu".to_string()))
        );
        assert!(matches!(
            pokemon_id_from_url("https://pokeapi.co/api/v2/pokemon/"),
            Err(LocatorError::NotNumeric { .. })
        ));
    }

    #[test]
    fn merge_overwrites_image_with_authoritative_id() {
        let mut selected = SelectedRecord::from_summary(SummaryRecord {
            name: "bulbasaur".to_string(),
            url: "https://pokeapi.co/api/v2/pokemon/1/".to_string(),
            image: "pokemon-images/pokemon3.jpg".to_string(),
        });
        selected.merge_detail(
            DetailFields {
                id: 1,
                height: 7,
                types: vec![TypeSlot {
                    slot: 1,
                    type_name: "grass".to_string(),
                }],
                species_url: None,
            },
            "pokemon-images",
        );
        assert_eq!(selected.image, "pokemon-images/pokemon1.jpg");
        assert_eq!(selected.height, Some(7));
        assert_eq!(selected.types.len(), 1);
    }
}
