//! Pseudo-token encoding and expiry checks.
//!
//! A token has the shape of a JWT (`header.payload.signature`) but nothing is
//! signed: every segment is plain base64-encoded text, and the "signature" is
//! a fixed marker. Anyone holding a token can read and forge it.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Marker placed in the signature segment.
const MOCK_SIGNATURE: &str = "mock-secret-key";

#[derive(Debug, Serialize, Deserialize)]
struct Header {
    alg: String,
    typ: String,
}

impl Default for Header {
    fn default() -> Self {
        Self {
            alg: "HS256".to_string(),
            typ: "JWT".to_string(),
        }
    }
}

/// Payload carried by a pseudo-token.
///
/// Timestamps are milliseconds since the Unix epoch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User the token was issued to.
    pub username: String,
    /// Issue time (epoch milliseconds).
    pub iat: i64,
    /// Expiry time (epoch milliseconds).
    pub exp: i64,
}

impl Claims {
    /// Creates claims for `username` issued now and valid for `lifetime`.
    #[must_use]
    pub fn issue(username: impl Into<String>, lifetime: TimeDelta) -> Self {
        Self::issue_at(username, Utc::now(), lifetime)
    }

    /// Creates claims issued at `now` and valid for `lifetime`.
    #[must_use]
    pub fn issue_at(username: impl Into<String>, now: DateTime<Utc>, lifetime: TimeDelta) -> Self {
        let iat = now.timestamp_millis();
        Self {
            username: username.into(),
            iat,
            exp: iat + lifetime.num_milliseconds(),
        }
    }

    /// Returns the expiry as a timestamp.
    #[must_use]
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.exp)
    }

    /// Checks if the token is expired at `now`.
    ///
    /// A token is still valid at exactly its expiry instant.
    #[must_use]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp_millis() > self.exp
    }

    /// Checks if the token is expired.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Time left before expiry at `now` (negative once expired).
    #[must_use]
    pub fn remaining_at(&self, now: DateTime<Utc>) -> TimeDelta {
        TimeDelta::milliseconds(self.exp - now.timestamp_millis())
    }

    /// Time left before expiry.
    #[must_use]
    pub fn remaining(&self) -> TimeDelta {
        self.remaining_at(Utc::now())
    }
}

/// Encodes claims into a pseudo-token string.
///
/// # Errors
///
/// Returns an error if the claims cannot be serialized.
pub fn encode(claims: &Claims) -> Result<String> {
    let header = STANDARD.encode(serde_json::to_vec(&Header::default())?);
    let payload = STANDARD.encode(serde_json::to_vec(claims)?);
    let signature = STANDARD.encode(MOCK_SIGNATURE);
    Ok(format!("{header}.{payload}.{signature}"))
}

/// Decodes the claims carried by a pseudo-token.
///
/// Only the structure is checked; the signature segment is ignored.
///
/// # Errors
///
/// Returns an error if the token does not have three segments or the payload
/// is not base64-encoded JSON claims.
pub fn decode(token: &str) -> Result<Claims> {
    let parts: Vec<&str> = token.split('.').collect();
    let [_, payload, _] = parts.as_slice() else {
        return Err(Error::MalformedToken(format!(
            "expected 3 segments, found {}",
            parts.len()
        )));
    };

    let bytes = STANDARD
        .decode(payload)
        .map_err(|e| Error::MalformedToken(e.to_string()))?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Checks whether a raw token is unusable.
///
/// Tokens that fail to decode count as expired.
#[must_use]
pub fn is_expired(token: &str) -> bool {
    decode(token).map_or(true, |claims| claims.is_expired())
}
