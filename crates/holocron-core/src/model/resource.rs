//! Related resources referenced from characters.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A planet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Planet {
    /// Planet name.
    #[serde(default)]
    pub name: String,
    /// Climate description.
    #[serde(default)]
    pub climate: String,
    /// Terrain description.
    #[serde(default)]
    pub terrain: String,
    /// Population count, as reported.
    #[serde(default)]
    pub population: String,
    /// Canonical URL.
    #[serde(default)]
    pub url: String,
    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A film.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Film {
    /// Film title.
    #[serde(default)]
    pub title: String,
    /// Episode number.
    #[serde(default)]
    pub episode_id: u32,
    /// Director.
    #[serde(default)]
    pub director: String,
    /// Release date (`YYYY-MM-DD`).
    #[serde(default)]
    pub release_date: String,
    /// Canonical URL.
    #[serde(default)]
    pub url: String,
    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A species.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Species {
    /// Species name.
    #[serde(default)]
    pub name: String,
    /// Biological classification.
    #[serde(default)]
    pub classification: String,
    /// Primary language.
    #[serde(default)]
    pub language: String,
    /// Canonical URL.
    #[serde(default)]
    pub url: String,
    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A starship.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Starship {
    /// Starship name.
    #[serde(default)]
    pub name: String,
    /// Model designation.
    #[serde(default)]
    pub model: String,
    /// Class, e.g. "Starfighter".
    #[serde(default)]
    pub starship_class: String,
    /// Canonical URL.
    #[serde(default)]
    pub url: String,
    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_film_keeps_unmodelled_fields() {
        let film: Film = serde_json::from_str(
            r#"{"title": "A New Hope", "episode_id": 4, "opening_crawl": "It is a period of civil war."}"#,
        )
        .unwrap();
        assert_eq!(film.title, "A New Hope");
        assert_eq!(film.episode_id, 4);
        assert!(film.extra.contains_key("opening_crawl"));
    }

    #[test]
    fn test_planet_defaults() {
        let planet: Planet = serde_json::from_str("{}").unwrap();
        assert!(planet.name.is_empty());
    }
}
