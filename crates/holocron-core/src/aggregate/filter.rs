//! Client-side filtering of the loaded page.

use crate::model::EnrichedCharacter;

/// Search text plus exact-match facet filters.
///
/// Empty fields are inactive. Active fields combine with logical AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterFilter {
    /// Case-insensitive substring of the character name.
    pub search: String,
    /// Exact homeworld name.
    pub homeworld: String,
    /// Exact species name.
    pub species: String,
    /// Exact film title.
    pub film: String,
}

impl CharacterFilter {
    /// Returns true if any criterion is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.search.trim().is_empty()
            || !self.homeworld.is_empty()
            || !self.species.is_empty()
            || !self.film.is_empty()
    }

    /// Checks one character against every active criterion.
    #[must_use]
    pub fn matches(&self, character: &EnrichedCharacter) -> bool {
        if !self.search.trim().is_empty()
            && !character
                .name
                .to_lowercase()
                .contains(&self.search.to_lowercase())
        {
            return false;
        }
        if !self.homeworld.is_empty() && character.homeworld_name != self.homeworld {
            return false;
        }
        if !self.species.is_empty() && character.species_name != self.species {
            return false;
        }
        if !self.film.is_empty() && !character.film_titles().any(|title| title == self.film) {
            return false;
        }
        true
    }

    /// Returns the matching characters in their original order.
    #[must_use]
    pub fn apply<'a>(&self, characters: &'a [EnrichedCharacter]) -> Vec<&'a EnrichedCharacter> {
        characters.iter().filter(|c| self.matches(c)).collect()
    }
}

#[cfg(test)]
#[allow(clippy::needless_collect)]
mod tests {
    use super::*;
    use crate::model::{Character, Film};

    fn enriched(name: &str, homeworld: &str, species: &str, films: &[&str]) -> EnrichedCharacter {
        EnrichedCharacter {
            character: Character {
                name: name.to_string(),
                ..Character::default()
            },
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

    fn roster() -> Vec<EnrichedCharacter> {
        vec![
            enriched("Luke Skywalker", "Tatooine", "Human", &["A New Hope"]),
            enriched("C-3PO", "Tatooine", "Droid", &["A New Hope", "The Phantom Menace"]),
            enriched("Leia Organa", "Alderaan", "Human", &["A New Hope"]),
            enriched("Anakin Skywalker", "Tatooine", "Human", &["The Phantom Menace"]),
        ]
    }

    fn names(found: &[&EnrichedCharacter]) -> Vec<String> {
        found.iter().map(|c| c.name.clone()).collect()
    }

    #[test]
    fn test_inactive_filter_keeps_everything() {
        let filter = CharacterFilter {
            search: "   ".to_string(),
            ..CharacterFilter::default()
        };
        assert!(!filter.is_active());
        assert_eq!(filter.apply(&roster()).len(), 4);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let filter = CharacterFilter {
            search: "SKY".to_string(),
            ..CharacterFilter::default()
        };
        let roster = roster();
        assert_eq!(
            names(&filter.apply(&roster)),
            vec!["Luke Skywalker", "Anakin Skywalker"]
        );
    }

    #[test]
    fn test_homeworld_exact_match() {
        let filter = CharacterFilter {
            homeworld: "Tatooine".to_string(),
            ..CharacterFilter::default()
        };
        let roster = roster();
        let found = filter.apply(&roster);
        assert_eq!(found.len(), 3);
        assert!(found.iter().all(|c| c.homeworld_name == "Tatooine"));

        let partial = CharacterFilter {
            homeworld: "Tatoo".to_string(),
            ..CharacterFilter::default()
        };
        assert!(partial.apply(&roster).is_empty());
    }

    #[test]
    fn test_filters_compose_with_and() {
        let filter = CharacterFilter {
            search: "skywalker".to_string(),
            homeworld: "Tatooine".to_string(),
            species: "Human".to_string(),
            film: "The Phantom Menace".to_string(),
        };
        let roster = roster();
        assert_eq!(names(&filter.apply(&roster)), vec!["Anakin Skywalker"]);
    }

    #[test]
    fn test_film_filter() {
        let filter = CharacterFilter {
            film: "A New Hope".to_string(),
            species: "Droid".to_string(),
            ..CharacterFilter::default()
        };
        let roster = roster();
        assert_eq!(names(&filter.apply(&roster)), vec!["C-3PO"]);
    }
}
