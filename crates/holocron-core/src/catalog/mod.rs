//! Catalog browsing controller.
//!
//! [`Catalog`] owns the page the user is looking at: the enriched characters,
//! pagination cursors, filters and the open detail view. Navigation replays
//! the full fetch-and-enrich pipeline.
//!
//! Loads are never aborted. Each one is stamped with a generation number and
//! only commits if no newer load has started since, so a slow response for an
//! old page cannot overwrite a newer one.

mod state;

pub use state::{CatalogState, PageRequest};

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, info, warn};
use url::Url;

use crate::aggregate::{
    CharacterDetail, CharacterFilter, FilterFacets, PageItem, enrich_page, hydrate_detail,
    page_url, page_window, total_pages,
};
use crate::client::{FetchClient, Transport};
use crate::error::Result;
use crate::model::EnrichedCharacter;

/// Outcome of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    /// The page was fetched, enriched and committed.
    Loaded,
    /// The load failed; the error is recorded in [`CatalogState::error`].
    Failed,
    /// A newer load started first; this result was discarded.
    Superseded,
    /// Already on the requested page; nothing was fetched.
    Unchanged,
    /// No cursor in the requested direction.
    Unavailable,
}

/// Browsing state over a [`FetchClient`].
#[derive(Debug)]
pub struct Catalog<T: Transport> {
    client: FetchClient<T>,
    listing: Url,
    generation: AtomicU64,
    state: Mutex<CatalogState>,
}

impl<T: Transport> Catalog<T> {
    /// Creates a catalog with nothing loaded.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured base URL is invalid.
    pub fn new(client: FetchClient<T>) -> Result<Self> {
        let listing = client.config().listing_url()?;
        Ok(Self {
            client,
            listing,
            generation: AtomicU64::new(0),
            state: Mutex::new(CatalogState::default()),
        })
    }

    /// Underlying fetch client.
    #[must_use]
    pub const fn client(&self) -> &FetchClient<T> {
        &self.client
    }

    /// Copy of the current state.
    #[must_use]
    pub fn state(&self) -> CatalogState {
        self.lock().clone()
    }

    /// Loaded characters passing the active filter.
    #[must_use]
    pub fn visible(&self) -> Vec<EnrichedCharacter> {
        self.lock().visible().into_iter().cloned().collect()
    }

    /// Filter options present on the loaded page.
    #[must_use]
    pub fn facets(&self) -> FilterFacets {
        FilterFacets::from_characters(&self.lock().characters)
    }

    /// Page-number strip for the loaded page.
    #[must_use]
    pub fn page_strip(&self) -> Vec<PageItem> {
        let state = self.lock();
        page_window(state.current_page, state.total_pages)
    }

    /// Loads the first page of the listing.
    pub async fn load_first_page(&self) -> LoadStatus {
        self.load(None, 1).await
    }

    /// Follows the `next` cursor.
    pub async fn next(&self) -> LoadStatus {
        let (cursor, page) = {
            let state = self.lock();
            (state.next.clone(), state.current_page + 1)
        };
        match cursor {
            Some(url) => self.load(Some(url), page).await,
            None => LoadStatus::Unavailable,
        }
    }

    /// Follows the `previous` cursor.
    pub async fn previous(&self) -> LoadStatus {
        let (cursor, page) = {
            let state = self.lock();
            (state.previous.clone(), state.current_page.saturating_sub(1).max(1))
        };
        match cursor {
            Some(url) => self.load(Some(url), page).await,
            None => LoadStatus::Unavailable,
        }
    }

    /// Jumps to a page by number.
    ///
    /// The URL is built from the listing endpoint with a `page` query
    /// parameter rather than taken from a cursor.
    pub async fn goto_page(&self, page: u32) -> LoadStatus {
        if page == self.lock().current_page {
            return LoadStatus::Unchanged;
        }
        let url = page_url(&self.listing, page);
        self.load(Some(url.into()), page).await
    }

    /// Repeats the most recent listing request, or loads the first page.
    pub async fn retry(&self) -> LoadStatus {
        let request = self.lock().last_request.clone();
        match request {
            Some(PageRequest { url, page }) => self.load(url, page).await,
            None => self.load_first_page().await,
        }
    }

    /// Replaces the whole filter.
    pub fn set_filter(&self, filter: CharacterFilter) {
        self.lock().filter = filter;
    }

    /// Sets the name search text.
    pub fn set_search(&self, search: impl Into<String>) {
        self.lock().filter.search = search.into();
    }

    /// Sets the homeworld filter; empty clears it.
    pub fn set_homeworld(&self, homeworld: impl Into<String>) {
        self.lock().filter.homeworld = homeworld.into();
    }

    /// Sets the species filter; empty clears it.
    pub fn set_species(&self, species: impl Into<String>) {
        self.lock().filter.species = species.into();
    }

    /// Sets the film filter; empty clears it.
    pub fn set_film(&self, film: impl Into<String>) {
        self.lock().filter.film = film.into();
    }

    /// Clears search and all facet filters.
    pub fn clear_filters(&self) {
        self.lock().filter = CharacterFilter::default();
    }

    /// Opens the detail view for the `index`-th visible character.
    ///
    /// The view opens immediately with what enrichment already knows, then
    /// fills in films, starships and homeworld. Returns `None` if there is no
    /// such character.
    pub async fn select(&self, index: usize) -> Option<CharacterDetail> {
        let character = {
            let mut state = self.lock();
            let character = state.visible().get(index).map(|c| (*c).clone())?;
            state.selected = Some(CharacterDetail::pending(character.clone()));
            character
        };

        let url = character.url.clone();
        let detail = hydrate_detail(&self.client, character).await;

        let mut state = self.lock();
        let still_open = state
            .selected
            .as_ref()
            .is_some_and(|open| open.character.url == url);
        if still_open {
            state.selected = Some(detail.clone());
        } else {
            debug!(url = %url, "Detail closed before hydration finished");
        }
        Some(detail)
    }

    /// Closes the detail view.
    pub fn close_detail(&self) {
        self.lock().selected = None;
    }

    async fn load(&self, url: Option<String>, page: u32) -> LoadStatus {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        {
            let mut state = self.lock();
            state.loading = true;
            state.error = None;
            state.last_request = Some(PageRequest {
                url: url.clone(),
                page,
            });
        }

        let result = match self.client.characters(url.as_deref()).await {
            Ok(raw) => Ok(enrich_page(&self.client, raw).await),
            Err(e) => Err(e),
        };

        let mut state = self.lock();
        if self.generation.load(Ordering::SeqCst) != generation {
            debug!(generation, page, "Discarding stale page load");
            return LoadStatus::Superseded;
        }
        state.loading = false;

        match result {
            Ok(loaded) => {
                info!(page, count = loaded.results.len(), "Loaded characters");
                if loaded.count > 0 {
                    state.total_count = loaded.count;
                    state.total_pages = total_pages(loaded.count, self.client.config().page_size);
                }
                state.characters = loaded.results;
                state.next = loaded.next;
                state.previous = loaded.previous;
                state.current_page = page;
                LoadStatus::Loaded
            }
            Err(e) => {
                warn!(page, "Failed to fetch characters: {e}");
                state.error = Some(e.to_string());
                LoadStatus::Failed
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, CatalogState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
