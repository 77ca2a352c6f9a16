//! Catalog client configuration.

use std::time::Duration;

use url::Url;

use crate::error::Result;

/// Default upstream API root.
pub const DEFAULT_BASE_URL: &str = "https://swapi.dev/api";

/// Characters per listing page, fixed by the upstream API.
pub const PAGE_SIZE: u32 = 10;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for [`crate::FetchClient`] and [`crate::Catalog`].
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// API root, without the `people` segment.
    pub base_url: String,
    /// Listing page size used for page arithmetic.
    pub page_size: u32,
    /// Per-request timeout for the HTTP transport.
    pub request_timeout: Duration,
    /// User-Agent header sent upstream.
    pub user_agent: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: PAGE_SIZE,
            request_timeout: DEFAULT_TIMEOUT,
            user_agent: concat!("holocron/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl CatalogConfig {
    /// Sets the API root.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Sets the User-Agent header.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// The people listing endpoint (`{base}/people/`).
    ///
    /// The trailing slash matches the cursor URLs the API hands out, so
    /// numbered-page URLs and cursors share cache entries.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is not a valid absolute URL.
    pub fn listing_url(&self) -> Result<Url> {
        let base = self.base_url.trim_end_matches('/');
        Ok(Url::parse(&format!("{base}/people/"))?)
    }
}
