//! Network transport seam.
//!
//! The fetch client only needs "GET this URL, give me status and body". The
//! [`Transport`] trait captures that so the HTTP stack can be swapped for a
//! scripted one in tests.

use std::future::Future;

use tracing::debug;

use crate::config::CatalogConfig;
use crate::error::Result;

/// A raw upstream response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// HTTP status code.
    pub status: u16,
    /// Undecoded body.
    pub body: Vec<u8>,
}

impl Response {
    /// Returns true for 2xx statuses.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Performs a single GET request.
pub trait Transport: Send + Sync {
    /// Retrieves `url`.
    ///
    /// Non-success statuses are returned as a [`Response`], not an error;
    /// errors are reserved for requests that got no answer at all.
    fn get(&self, url: &str) -> impl Future<Output = Result<Response>> + Send;
}

/// [`Transport`] backed by [`reqwest`].
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Creates a transport honouring the timeout and user agent in `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &CatalogConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<Response> {
        debug!(url, "GET");
        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();
        Ok(Response { status, body })
    }
}
