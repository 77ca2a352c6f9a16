//! On-demand hydration of the selected character.

use tracing::debug;

use super::fallback::resolve_with_fallback;
use crate::client::{FetchClient, Transport};
use crate::model::{EnrichedCharacter, Film, Planet, Starship};

/// Everything shown in the detail view for one character.
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterDetail {
    /// The enriched list entry the detail was opened from.
    pub character: EnrichedCharacter,
    /// Films the character appears in.
    pub films: Vec<Film>,
    /// Starships the character has piloted.
    pub starships: Vec<Starship>,
    /// Full homeworld record, when it could be fetched.
    pub homeworld: Option<Planet>,
}

impl CharacterDetail {
    /// Detail view with nothing hydrated yet.
    #[must_use]
    pub fn pending(character: EnrichedCharacter) -> Self {
        Self {
            films: character.films_data.clone(),
            character,
            starships: Vec::new(),
            homeworld: None,
        }
    }
}

/// Resolves films, starships and homeworld for the detail view.
///
/// Films already attached by enrichment are reused. Each lookup degrades
/// independently, so a failure leaves that section empty rather than
/// withholding the rest.
pub async fn hydrate_detail<T: Transport>(
    client: &FetchClient<T>,
    character: EnrichedCharacter,
) -> CharacterDetail {
    let films = async {
        if character.films_data.is_empty() {
            resolve_with_fallback(
                "films",
                async { client.films(character.films.as_slice()).await.map(Some) },
                Vec::new(),
            )
            .await
            .into_inner()
        } else {
            character.films_data.clone()
        }
    };

    let starships = resolve_with_fallback(
        "starships",
        async { client.starships(character.starships.as_slice()).await.map(Some) },
        Vec::new(),
    );

    let homeworld = resolve_with_fallback(
        "homeworld",
        async {
            client
                .planet(character.homeworld.as_deref())
                .await
                .map(|planet| planet.map(Some))
        },
        None,
    );

    let (films, starships, homeworld) = futures::join!(films, starships, homeworld);
    debug!(name = %character.name, "Hydrated character detail");

    CharacterDetail {
        character,
        films,
        starships: starships.into_inner(),
        homeworld: homeworld.into_inner(),
    }
}
