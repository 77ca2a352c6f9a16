//! The resolve-with-fallback combinator.

use std::fmt::Display;
use std::future::Future;

use tracing::debug;

/// Placeholder shown for relations that could not be resolved.
pub const UNKNOWN: &str = "Unknown";

/// Outcome of resolving an optional relation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<T> {
    /// The lookup produced a value.
    Resolved(T),
    /// The lookup failed or found nothing; the fallback was used.
    Fallback(T),
}

impl<T> Resolution<T> {
    /// Returns the value, whichever way it was obtained.
    pub fn into_inner(self) -> T {
        match self {
            Self::Resolved(value) | Self::Fallback(value) => value,
        }
    }

    /// Returns true if the fallback was used.
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}

/// Awaits `lookup`, substituting `fallback` when it errors or yields nothing.
///
/// Errors are logged at debug level under `relation` and never propagated.
pub async fn resolve_with_fallback<T, E, Fut>(
    relation: &str,
    lookup: Fut,
    fallback: T,
) -> Resolution<T>
where
    E: Display,
    Fut: Future<Output = Result<Option<T>, E>>,
{
    match lookup.await {
        Ok(Some(value)) => Resolution::Resolved(value),
        Ok(None) => Resolution::Fallback(fallback),
        Err(e) => {
            debug!(relation, error = %e, "Relation lookup failed, using fallback");
            Resolution::Fallback(fallback)
        }
    }
}
