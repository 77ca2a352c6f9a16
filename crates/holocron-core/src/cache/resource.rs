//! URL → JSON memo with single-flight population.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};

use serde_json::Value;
use tokio::sync::OnceCell;
use tracing::debug;

use crate::error::Result;

type Slot = Arc<OnceCell<Arc<Value>>>;

/// Cache of decoded resources keyed by request URL.
///
/// Each URL owns a slot that is filled at most once. Tasks asking for the
/// same uncached URL at the same time wait on one retrieval instead of racing
/// to fetch it. A failed retrieval stores nothing and its slot is dropped, so
/// the next caller tries again and failing URLs do not accumulate.
#[derive(Debug, Default)]
pub struct ResourceCache {
    slots: Mutex<HashMap<String, Slot>>,
}

impl ResourceCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached value for `url` without fetching.
    #[must_use]
    pub fn get(&self, url: &str) -> Option<Arc<Value>> {
        self.slots()
            .get(url)
            .and_then(|slot| slot.get().map(Arc::clone))
    }

    /// Returns true if `url` has a stored value.
    #[must_use]
    pub fn contains(&self, url: &str) -> bool {
        self.get(url).is_some()
    }

    /// Number of stored values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots()
            .values()
            .filter(|slot| slot.initialized())
            .count()
    }

    /// Returns true if nothing has been stored yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the value for `url`, running `fetch` to obtain it on a miss.
    ///
    /// `fetch` only runs when no value is stored and no other task is already
    /// fetching the same URL. Its error is returned as-is and nothing is
    /// stored.
    ///
    /// # Errors
    ///
    /// Returns whatever error `fetch` produced.
    pub async fn get_or_fetch<F, Fut>(&self, url: &str, fetch: F) -> Result<Arc<Value>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Value>>,
    {
        let slot = Arc::clone(self.slots().entry(url.to_string()).or_default());

        if let Some(value) = slot.get() {
            return Ok(Arc::clone(value));
        }

        let result = slot
            .get_or_try_init(|| async {
                debug!(url, "Cache miss");
                fetch().await.map(Arc::new)
            })
            .await;
        match result {
            Ok(value) => Ok(Arc::clone(value)),
            Err(e) => {
                self.release(url, &slot);
                Err(e)
            }
        }
    }

    /// Drops the empty slot for `url` unless another task is waiting on it.
    fn release(&self, url: &str, slot: &Slot) {
        let mut slots = self.slots();
        let idle = slots.get(url).is_some_and(|current| {
            Arc::ptr_eq(current, slot) && !slot.initialized() && Arc::strong_count(slot) == 2
        });
        if idle {
            slots.remove(url);
        }
    }

    fn slots(&self) -> std::sync::MutexGuard<'_, HashMap<String, Slot>> {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
