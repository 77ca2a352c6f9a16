//! Snapshot of the catalog's browsing state.

use crate::aggregate::{CharacterDetail, CharacterFilter};
use crate::model::EnrichedCharacter;

/// A listing request, remembered so a failed load can be retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Cursor or page URL; `None` means the first page.
    pub url: Option<String>,
    /// Page number the request lands on.
    pub page: u32,
}

/// Everything the catalog view renders from.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogState {
    /// Enriched characters of the loaded page.
    pub characters: Vec<EnrichedCharacter>,
    /// Cursor of the following page.
    pub next: Option<String>,
    /// Cursor of the preceding page.
    pub previous: Option<String>,
    /// One-based number of the loaded page.
    pub current_page: u32,
    /// Pages in the listing.
    pub total_pages: u32,
    /// Characters in the listing.
    pub total_count: u32,
    /// True while a load is in flight.
    pub loading: bool,
    /// Message of the last failed load, cleared when a new load starts.
    pub error: Option<String>,
    /// Active search and facet filters.
    pub filter: CharacterFilter,
    /// Character open in the detail view.
    pub selected: Option<CharacterDetail>,
    /// Most recent listing request.
    pub last_request: Option<PageRequest>,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self {
            characters: Vec::new(),
            next: None,
            previous: None,
            current_page: 1,
            total_pages: 1,
            total_count: 0,
            loading: false,
            error: None,
            filter: CharacterFilter::default(),
            selected: None,
            last_request: None,
        }
    }
}

impl CatalogState {
    /// Loaded characters passing the active filter.
    #[must_use]
    pub fn visible(&self) -> Vec<&EnrichedCharacter> {
        self.filter.apply(&self.characters)
    }

    /// Pagination controls only make sense over the unfiltered page.
    #[must_use]
    pub fn shows_pagination(&self) -> bool {
        !self.filter.is_active()
    }

    /// Returns true if a following page exists.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// Returns true if a preceding page exists.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.previous.is_some()
    }
}
