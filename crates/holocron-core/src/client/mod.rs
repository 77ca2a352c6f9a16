//! Typed, cached access to SWAPI resources.
//!
//! Every request goes through the shared [`ResourceCache`], so each URL is
//! fetched at most once per session regardless of which accessor asked for it.

mod transport;

pub use transport::{HttpTransport, Response, Transport};

use std::sync::Arc;

use futures::future::try_join_all;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::cache::ResourceCache;
use crate::config::CatalogConfig;
use crate::error::{FetchError, Result};
use crate::model::{Character, Film, Page, Planet, Species, Starship};

/// Cached client for the character catalog.
#[derive(Debug)]
pub struct FetchClient<T = HttpTransport> {
    transport: T,
    cache: Arc<ResourceCache>,
    config: CatalogConfig,
}

impl FetchClient<HttpTransport> {
    /// Creates an HTTP-backed client with a fresh cache.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn http(config: CatalogConfig) -> Result<Self> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self::new(transport, Arc::new(ResourceCache::new()), config))
    }
}

impl<T: Transport> FetchClient<T> {
    /// Creates a client over `transport`, sharing `cache`.
    #[must_use]
    pub const fn new(transport: T, cache: Arc<ResourceCache>, config: CatalogConfig) -> Self {
        Self {
            transport,
            cache,
            config,
        }
    }

    /// Configuration in use.
    #[must_use]
    pub const fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Cache backing this client.
    #[must_use]
    pub const fn cache(&self) -> &Arc<ResourceCache> {
        &self.cache
    }

    /// Returns the decoded body of `url`, from cache when possible.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Status`] for non-success responses,
    /// [`FetchError::Json`] for undecodable bodies, or the transport's error.
    /// Failures are not cached.
    pub async fn get_json(&self, url: &str) -> Result<Arc<Value>> {
        self.cache
            .get_or_fetch(url, || async {
                let response = self.transport.get(url).await?;
                if !response.is_success() {
                    debug!(url, status = response.status, "Upstream refused request");
                    return Err(FetchError::Status {
                        status: response.status,
                        url: url.to_string(),
                    });
                }
                Ok(serde_json::from_slice(&response.body)?)
            })
            .await
    }

    /// Fetches and decodes a single resource.
    ///
    /// Absent or empty URLs short-circuit to `None` without touching the
    /// cache.
    ///
    /// # Errors
    ///
    /// Returns an error if the fetch fails or the body has the wrong shape.
    pub async fn resource<R: DeserializeOwned>(&self, url: Option<&str>) -> Result<Option<R>> {
        let Some(url) = url.filter(|url| !url.is_empty()) else {
            return Ok(None);
        };
        let value = self.get_json(url).await?;
        Ok(Some(R::deserialize(value.as_ref())?))
    }

    /// Fetches a page of the people listing.
    ///
    /// With no URL, fetches the first page of the configured endpoint;
    /// otherwise follows the given cursor.
    ///
    /// # Errors
    ///
    /// Returns an error if the fetch fails or the body is not a listing.
    pub async fn characters(&self, url: Option<&str>) -> Result<Page<Character>> {
        let value = match url.filter(|url| !url.is_empty()) {
            Some(url) => self.get_json(url).await?,
            None => {
                let listing = self.config.listing_url()?;
                self.get_json(listing.as_str()).await?
            }
        };
        Ok(Page::deserialize(value.as_ref())?)
    }

    /// Fetches a single character.
    ///
    /// # Errors
    ///
    /// See [`FetchClient::resource`].
    pub async fn character(&self, url: Option<&str>) -> Result<Option<Character>> {
        self.resource(url).await
    }

    /// Fetches a planet.
    ///
    /// # Errors
    ///
    /// See [`FetchClient::resource`].
    pub async fn planet(&self, url: Option<&str>) -> Result<Option<Planet>> {
        self.resource(url).await
    }

    /// Fetches a film.
    ///
    /// # Errors
    ///
    /// See [`FetchClient::resource`].
    pub async fn film(&self, url: Option<&str>) -> Result<Option<Film>> {
        self.resource(url).await
    }

    /// Fetches a species.
    ///
    /// # Errors
    ///
    /// See [`FetchClient::resource`].
    pub async fn species(&self, url: Option<&str>) -> Result<Option<Species>> {
        self.resource(url).await
    }

    /// Fetches a starship.
    ///
    /// # Errors
    ///
    /// See [`FetchClient::resource`].
    pub async fn starship(&self, url: Option<&str>) -> Result<Option<Starship>> {
        self.resource(url).await
    }

    /// Fetches several URLs concurrently.
    ///
    /// Results come back in input order. An empty input returns immediately.
    ///
    /// # Errors
    ///
    /// Fails as soon as any lookup fails; results that already arrived are
    /// dropped.
    pub async fn fetch_many<S: AsRef<str>>(&self, urls: &[S]) -> Result<Vec<Arc<Value>>> {
        if urls.is_empty() {
            return Ok(Vec::new());
        }
        try_join_all(urls.iter().map(|url| self.get_json(url.as_ref()))).await
    }

    /// Fetches and decodes several resources of one kind.
    ///
    /// # Errors
    ///
    /// See [`FetchClient::fetch_many`].
    pub async fn fetch_many_as<R: DeserializeOwned, S: AsRef<str>>(
        &self,
        urls: &[S],
    ) -> Result<Vec<R>> {
        self.fetch_many(urls)
            .await?
            .iter()
            .map(|value| R::deserialize(value.as_ref()).map_err(FetchError::from))
            .collect()
    }

    /// Fetches films in order.
    ///
    /// # Errors
    ///
    /// See [`FetchClient::fetch_many`].
    pub async fn films<S: AsRef<str>>(&self, urls: &[S]) -> Result<Vec<Film>> {
        self.fetch_many_as(urls).await
    }

    /// Fetches starships in order.
    ///
    /// # Errors
    ///
    /// See [`FetchClient::fetch_many`].
    pub async fn starships<S: AsRef<str>>(&self, urls: &[S]) -> Result<Vec<Starship>> {
        self.fetch_many_as(urls).await
    }
}
