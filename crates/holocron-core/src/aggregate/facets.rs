//! Filter options derived from the loaded characters.

use std::collections::BTreeSet;

use super::fallback::UNKNOWN;
use crate::model::EnrichedCharacter;

/// Distinct values available for each filter, sorted.
///
/// The [`UNKNOWN`] placeholder is never offered as an option.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterFacets {
    /// Homeworld names.
    pub homeworlds: Vec<String>,
    /// Species names.
    pub species: Vec<String>,
    /// Film titles.
    pub films: Vec<String>,
}

impl FilterFacets {
    /// Collects the facets present in `characters`.
    #[must_use]
    pub fn from_characters(characters: &[EnrichedCharacter]) -> Self {
        let known = |name: &&str| !name.is_empty() && *name != UNKNOWN;

        let homeworlds: BTreeSet<&str> = characters
            .iter()
            .map(|c| c.homeworld_name.as_str())
            .filter(known)
            .collect();
        let species: BTreeSet<&str> = characters
            .iter()
            .map(|c| c.species_name.as_str())
            .filter(known)
            .collect();
        let films: BTreeSet<&str> = characters
            .iter()
            .flat_map(EnrichedCharacter::film_titles)
            .collect();

        Self {
            homeworlds: homeworlds.into_iter().map(str::to_string).collect(),
            species: species.into_iter().map(str::to_string).collect(),
            films: films.into_iter().map(str::to_string).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Character, Film};

    fn enriched(homeworld: &str, species: &str, films: &[&str]) -> EnrichedCharacter {
        EnrichedCharacter {
            character: Character::default(),
            homeworld_name: homeworld.to_string(),
            species_name: species.to_string(),
            films_data: films
                .iter()
                .map(|title| Film {
                    title: (*title).to_string(),
                    ..Film::default()
                })
                .collect(),
            starships_count: 0,
        }
    }

    #[test]
    fn test_facets_are_sorted_distinct_and_skip_unknown() {
        let characters = vec![
            enriched("Tatooine", "Human", &["A New Hope", "Return of the Jedi"]),
            enriched("Naboo", "Unknown", &["The Phantom Menace", "A New Hope"]),
            enriched("Unknown", "Droid", &[]),
            enriched("Tatooine", "Human", &[""]),
        ];

        let facets = FilterFacets::from_characters(&characters);

        assert_eq!(facets.homeworlds, vec!["Naboo", "Tatooine"]);
        assert_eq!(facets.species, vec!["Droid", "Human"]);
        assert_eq!(
            facets.films,
            vec!["A New Hope", "Return of the Jedi", "The Phantom Menace"]
        );
    }

    #[test]
    fn test_empty_page() {
        assert_eq!(FilterFacets::from_characters(&[]), FilterFacets::default());
    }
}
