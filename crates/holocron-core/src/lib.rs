//! # holocron-core
//!
//! Data layer for the Holocron catalog viewer.
//!
//! This crate provides:
//! - **Resource cache** - session-scoped URL → JSON memo with single-flight fetches
//! - **Fetch client** - typed accessors over the SWAPI resources and parallel batch fetches
//! - **Aggregation** - character enrichment, filter facets, client-side filtering,
//!   pagination and detail hydration
//! - **Catalog** - browsing state with stale-load protection

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod aggregate;
pub mod cache;
pub mod catalog;
pub mod client;
mod config;
mod error;
pub mod model;

#[cfg(test)]
pub(crate) mod testing;

pub use aggregate::{
    CharacterDetail, CharacterFilter, FilterFacets, PageItem, Resolution, UNKNOWN, enrich_character,
    enrich_page, hydrate_detail, page_url, page_window, resolve_with_fallback, total_pages,
};
pub use cache::ResourceCache;
pub use catalog::{Catalog, CatalogState, LoadStatus};
pub use client::{FetchClient, HttpTransport, Response, Transport};
pub use config::{CatalogConfig, DEFAULT_BASE_URL, PAGE_SIZE};
pub use error::{FetchError, Result};
pub use model::{Character, EnrichedCharacter, Film, Page, Planet, Species, Starship};
