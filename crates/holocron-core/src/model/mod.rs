//! Domain models for SWAPI resources.
//!
//! Upstream reports every scalar as a string (`"172"`, `"unknown"`, `"n/a"`),
//! so scalars are kept as strings. Fields this crate does not model are kept
//! in `extra` and survive re-serialization.

mod character;
mod page;
mod resource;

pub use character::{Character, EnrichedCharacter};
pub use page::Page;
pub use resource::{Film, Planet, Species, Starship};
