//! Paginated listing.

use serde::{Deserialize, Serialize};

/// One page of a listing endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Total number of items across all pages.
    #[serde(default)]
    pub count: u32,
    /// Cursor URL of the following page.
    #[serde(default)]
    pub next: Option<String>,
    /// Cursor URL of the preceding page.
    #[serde(default)]
    pub previous: Option<String>,
    /// Items on this page, in upstream order.
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

impl<T> Page<T> {
    /// Replaces the items while keeping count and cursors.
    #[must_use]
    pub fn with_results<U>(self, results: Vec<U>) -> Page<U> {
        Page {
            count: self.count,
            next: self.next,
            previous: self.previous,
            results,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_listing() {
        let json = r#"{
            "count": 82,
            "next": "https://swapi.dev/api/people/?page=2",
            "previous": null,
            "results": [1, 2, 3]
        }"#;
        let page: Page<u8> = serde_json::from_str(json).unwrap();
        assert_eq!(page.count, 82);
        assert_eq!(page.next.as_deref(), Some("https://swapi.dev/api/people/?page=2"));
        assert!(page.previous.is_none());
        assert_eq!(page.results, vec![1, 2, 3]);
    }

    #[test]
    fn test_with_results() {
        let page = Page {
            count: 3,
            next: Some("n".to_string()),
            previous: None,
            results: vec![1, 2, 3],
        };
        let mapped = page.with_results(vec!["a"]);
        assert_eq!(mapped.count, 3);
        assert_eq!(mapped.next.as_deref(), Some("n"));
        assert_eq!(mapped.results, vec!["a"]);
    }
}
