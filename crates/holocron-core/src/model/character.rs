//! Character records, raw and enriched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::resource::Film;

/// A character as returned by the people endpoints.
///
/// Relation fields hold URLs of other resources.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Character {
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Birth year in BBY/ABY notation.
    #[serde(default)]
    pub birth_year: String,
    /// Height in centimetres.
    #[serde(default)]
    pub height: String,
    /// Mass in kilograms.
    #[serde(default)]
    pub mass: String,
    /// Hair colour.
    #[serde(default)]
    pub hair_color: String,
    /// Skin colour.
    #[serde(default)]
    pub skin_color: String,
    /// Eye colour.
    #[serde(default)]
    pub eye_color: String,
    /// Gender.
    #[serde(default)]
    pub gender: String,
    /// Homeworld planet URL.
    #[serde(default)]
    pub homeworld: Option<String>,
    /// Species URLs.
    #[serde(default)]
    pub species: Vec<String>,
    /// Film URLs.
    #[serde(default)]
    pub films: Vec<String>,
    /// Starship URLs.
    #[serde(default)]
    pub starships: Vec<String>,
    /// Vehicle URLs.
    #[serde(default)]
    pub vehicles: Vec<String>,
    /// Canonical URL; identifies the character.
    #[serde(default)]
    pub url: String,
    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A character with its relations resolved for display.
///
/// Every field is always populated: lookups that fail fall back to
/// [`crate::UNKNOWN`] or an empty list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedCharacter {
    /// The raw record.
    #[serde(flatten)]
    pub character: Character,
    /// Name of the homeworld.
    pub homeworld_name: String,
    /// Name of the first listed species.
    pub species_name: String,
    /// Films the character appears in.
    pub films_data: Vec<Film>,
    /// Number of starships piloted.
    pub starships_count: usize,
}

impl EnrichedCharacter {
    /// Titles of the resolved films.
    pub fn film_titles(&self) -> impl Iterator<Item = &str> {
        self.films_data
            .iter()
            .map(|film| film.title.as_str())
            .filter(|title| !title.is_empty())
    }
}

impl std::ops::Deref for EnrichedCharacter {
    type Target = Character;

    fn deref(&self) -> &Self::Target {
        &self.character
    }
}
