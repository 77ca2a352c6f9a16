//! Plain-text rendering of catalog state.

use std::fmt::Write;

use holocron_core::{CatalogState, CharacterDetail, EnrichedCharacter, FilterFacets, PageItem};

/// Placeholder for missing values.
const NOT_AVAILABLE: &str = "N/A";

/// Returns `value`, or `N/A` when it is empty.
#[must_use]
pub fn or_na(value: &str) -> &str {
    if value.is_empty() { NOT_AVAILABLE } else { value }
}

/// Returns `value` with `unit` appended, or `N/A` when it is empty.
#[must_use]
pub fn with_unit(value: &str, unit: &str) -> String {
    if value.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        format!("{value} {unit}")
    }
}

/// One summary line for the list view. `number` is one-based.
#[must_use]
pub fn character_line(number: usize, character: &EnrichedCharacter) -> String {
    format!(
        "{number:>3}. {name:<24} {gender:<8} born {birth:<8} {height:>7} {mass:>7}  {homeworld} / {species}  films: {films}  starships: {starships}",
        name = character.name,
        gender = or_na(&character.gender),
        birth = or_na(&character.birth_year),
        height = with_unit(&character.height, "cm"),
        mass = with_unit(&character.mass, "kg"),
        homeworld = character.homeworld_name,
        species = character.species_name,
        films = character.films_data.len(),
        starships = character.starships_count,
    )
}

/// Page-number strip with the current page bracketed.
#[must_use]
pub fn page_strip(items: &[PageItem], current: u32) -> String {
    items
        .iter()
        .map(|item| match item {
            PageItem::Page(page) if *page == current => format!("[{page}]"),
            PageItem::Page(page) => page.to_string(),
            PageItem::Ellipsis => "...".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// The list view: status, visible characters and pagination.
#[must_use]
pub fn catalog(state: &CatalogState, strip: &[PageItem]) -> String {
    let mut out = String::new();

    if let Some(error) = &state.error {
        let _ = writeln!(out, "Error: {error} (type 'retry')");
    }

    let visible = state.visible();
    if visible.is_empty() {
        if state.filter.is_active() {
            out.push_str("No characters on this page match the filters.\n");
        } else if state.error.is_none() {
            out.push_str("No characters loaded.\n");
        }
    }
    for (i, character) in visible.iter().enumerate() {
        let _ = writeln!(out, "{}", character_line(i + 1, character));
    }

    if state.shows_pagination() {
        let _ = writeln!(
            out,
            "Page {} of {} ({} characters)   {}",
            state.current_page,
            state.total_pages,
            state.total_count,
            page_strip(strip, state.current_page)
        );
    } else {
        let _ = writeln!(
            out,
            "Showing {} of {} on this page (filters active, 'clear' to reset)",
            visible.len(),
            state.characters.len()
        );
    }
    out
}

/// The filter options of the loaded page.
#[must_use]
pub fn facets(facets: &FilterFacets) -> String {
    let list = |values: &[String]| {
        if values.is_empty() {
            NOT_AVAILABLE.to_string()
        } else {
            values.join(", ")
        }
    };
    format!(
        "Homeworlds: {}\nSpecies:    {}\nFilms:      {}\n",
        list(&facets.homeworlds),
        list(&facets.species),
        list(&facets.films)
    )
}

/// The detail view of one character.
#[must_use]
pub fn detail(detail: &CharacterDetail) -> String {
    let c = &detail.character;
    let mut out = String::new();

    let _ = writeln!(out, "== {} ==", c.name);
    let _ = writeln!(out, "Gender:     {}", or_na(&c.gender));
    let _ = writeln!(out, "Born:       {}", or_na(&c.birth_year));
    let _ = writeln!(out, "Height:     {}", with_unit(&c.height, "cm"));
    let _ = writeln!(out, "Mass:       {}", with_unit(&c.mass, "kg"));
    let _ = writeln!(out, "Hair:       {}", or_na(&c.hair_color));
    let _ = writeln!(out, "Eyes:       {}", or_na(&c.eye_color));
    let _ = writeln!(out, "Skin:       {}", or_na(&c.skin_color));
    let _ = writeln!(out, "Species:    {}", c.species_name);

    match &detail.homeworld {
        Some(planet) => {
            let _ = writeln!(
                out,
                "Homeworld:  {} (climate {}, terrain {}, population {})",
                planet.name,
                or_na(&planet.climate),
                or_na(&planet.terrain),
                or_na(&planet.population)
            );
        }
        None => {
            let _ = writeln!(out, "Homeworld:  {}", c.homeworld_name);
        }
    }

    let _ = writeln!(out, "Films ({}):", detail.films.len());
    for film in &detail.films {
        let _ = writeln!(
            out,
            "  Episode {}: {} ({})",
            film.episode_id,
            film.title,
            or_na(&film.release_date)
        );
    }

    let _ = writeln!(out, "Starships ({}):", detail.starships.len());
    for ship in &detail.starships {
        let _ = writeln!(out, "  {} ({})", ship.name, or_na(&ship.model));
    }
    out
}
