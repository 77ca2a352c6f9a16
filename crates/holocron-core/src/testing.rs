//! Scripted transport for unit tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use serde_json::Value;

use crate::cache::ResourceCache;
use crate::client::{FetchClient, Response, Transport};
use crate::config::CatalogConfig;
use crate::error::Result;

#[derive(Debug, Clone)]
struct Route {
    status: u16,
    body: Vec<u8>,
    delay: Duration,
}

#[derive(Debug, Default)]
struct Inner {
    routes: HashMap<String, Route>,
    calls: Mutex<HashMap<String, usize>>,
}

/// Transport answering from a fixed URL table. Unknown URLs get a 404.
///
/// Clones share the call log.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    inner: Arc<Inner>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    fn route(mut self, url: &str, edit: impl FnOnce(&mut Route)) -> Self {
        let inner =
            Arc::get_mut(&mut self.inner).unwrap_or_else(|| panic!("configure before cloning"));
        let route = inner.routes.entry(url.to_string()).or_insert(Route {
            status: 200,
            body: b"{}".to_vec(),
            delay: Duration::ZERO,
        });
        edit(route);
        self
    }

    pub fn with_json(self, url: &str, value: Value) -> Self {
        let body = value.to_string().into_bytes();
        self.route(url, |route| {
            route.status = 200;
            route.body = body;
        })
    }

    pub fn with_body(self, url: &str, status: u16, body: &str) -> Self {
        self.route(url, |route| {
            route.status = status;
            route.body = body.as_bytes().to_vec();
        })
    }

    pub fn with_status(self, url: &str, status: u16) -> Self {
        self.with_body(url, status, r#"{"detail": "error"}"#)
    }

    pub fn with_delay(self, url: &str, delay: Duration) -> Self {
        self.route(url, |route| route.delay = delay)
    }

    pub fn calls(&self, url: &str) -> usize {
        self.log().get(url).copied().unwrap_or(0)
    }

    pub fn total_calls(&self) -> usize {
        self.log().values().sum()
    }

    fn log(&self) -> std::sync::MutexGuard<'_, HashMap<String, usize>> {
        self.inner.calls.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Transport for MockTransport {
    async fn get(&self, url: &str) -> Result<Response> {
        *self.log().entry(url.to_string()).or_default() += 1;
        let route = self.inner.routes.get(url).cloned();
        match route {
            Some(route) => {
                tokio::time::sleep(route.delay).await;
                Ok(Response {
                    status: route.status,
                    body: route.body,
                })
            }
            None => Ok(Response {
                status: 404,
                body: br#"{"detail": "Not found"}"#.to_vec(),
            }),
        }
    }
}

pub fn client_with(transport: MockTransport) -> FetchClient<MockTransport> {
    FetchClient::new(
        transport,
        Arc::new(ResourceCache::new()),
        CatalogConfig::default(),
    )
}
