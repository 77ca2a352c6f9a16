//! Session-scoped resource cache.
//!
//! Decoded response bodies are memoised by their exact request URL. Entries
//! are never evicted or replaced; the cache lives as long as the session that
//! owns it.

mod resource;

pub use resource::ResourceCache;
