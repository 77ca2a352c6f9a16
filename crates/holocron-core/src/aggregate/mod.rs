//! Turning raw listing pages into display-ready state.
//!
//! Everything here is either a pure function over already-loaded characters
//! (facets, filters, pagination) or a fan-out over the [`crate::FetchClient`]
//! whose relation failures degrade to defaults instead of errors
//! (enrichment, detail hydration).

mod detail;
mod enrich;
mod facets;
mod fallback;
mod filter;
mod pagination;

pub use detail::{CharacterDetail, hydrate_detail};
pub use enrich::{enrich_character, enrich_page};
pub use facets::FilterFacets;
pub use fallback::{Resolution, UNKNOWN, resolve_with_fallback};
pub use filter::CharacterFilter;
pub use pagination::{PageItem, page_url, page_window, total_pages};
