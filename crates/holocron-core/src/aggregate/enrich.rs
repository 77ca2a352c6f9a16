//! Per-character relation enrichment.

use futures::future::join_all;
use tracing::debug;

use super::fallback::{UNKNOWN, resolve_with_fallback};
use crate::client::{FetchClient, Transport};
use crate::error::FetchError;
use crate::model::{Character, EnrichedCharacter, Page};

/// Resolves a character's homeworld, first species and films.
///
/// The three lookups run concurrently. None of them can fail the call:
/// an unresolvable homeworld or species becomes [`UNKNOWN`], unresolvable
/// films become an empty list.
pub async fn enrich_character<T: Transport>(
    client: &FetchClient<T>,
    character: Character,
) -> EnrichedCharacter {
    let homeworld = resolve_with_fallback(
        "homeworld",
        async {
            let planet = client.planet(character.homeworld.as_deref()).await?;
            Ok::<_, FetchError>(planet.map(|planet| planet.name).filter(|name| !name.is_empty()))
        },
        UNKNOWN.to_string(),
    );

    let species = resolve_with_fallback(
        "species",
        async {
            let first = character.species.first().map(String::as_str);
            let species = client.species(first).await?;
            Ok::<_, FetchError>(species.map(|species| species.name).filter(|name| !name.is_empty()))
        },
        UNKNOWN.to_string(),
    );

    let films = resolve_with_fallback(
        "films",
        async { client.films(character.films.as_slice()).await.map(Some) },
        Vec::new(),
    );

    let (homeworld, species, films) = futures::join!(homeworld, species, films);
    let starships_count = character.starships.len();

    EnrichedCharacter {
        character,
        homeworld_name: homeworld.into_inner(),
        species_name: species.into_inner(),
        films_data: films.into_inner(),
        starships_count,
    }
}

/// Enriches every character on a page concurrently, keeping order.
pub async fn enrich_page<T: Transport>(
    client: &FetchClient<T>,
    mut page: Page<Character>,
) -> Page<EnrichedCharacter> {
    let characters = std::mem::take(&mut page.results);
    debug!(count = characters.len(), "Enriching page");
    let enriched = join_all(
        characters
            .into_iter()
            .map(|character| enrich_character(client, character)),
    )
    .await;
    page.with_results(enriched)
}
