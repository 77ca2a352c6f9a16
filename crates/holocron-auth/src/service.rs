//! Mock authentication service.
//!
//! Checks credentials against a fixed table and keeps one pseudo-token in a
//! [`TokenStore`]. Expiry is detected lazily: whoever asks whether the session
//! is still valid after the token has lapsed clears the store.

use tracing::{debug, info, warn};

use crate::config::AuthConfig;
use crate::error::Result;
use crate::store::{TOKEN_KEY, TokenStore, USERNAME_KEY};
use crate::token::{self, Claims};

/// Accounts accepted by [`AuthService::login`].
pub const MOCK_USERS: &[(&str, &str)] = &[
    ("admin", "password123"),
    ("user", "user123"),
    ("luke", "skywalker"),
];

/// Message reported for a rejected login.
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Result of a login attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Credentials accepted; the token has been stored.
    Success {
        /// Newly issued token.
        token: String,
        /// Authenticated user.
        username: String,
    },
    /// Credentials rejected; nothing was stored.
    Failure {
        /// Message suitable for display.
        error: String,
    },
}

impl LoginOutcome {
    /// Returns true for a successful login.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// The user holding the current session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    /// Username from the token.
    pub username: String,
}

/// Authentication service over a single token slot.
#[derive(Debug)]
pub struct AuthService<S> {
    store: S,
    config: AuthConfig,
}

impl<S: TokenStore> AuthService<S> {
    /// Creates a service with default timing.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self {
            store,
            config: AuthConfig::default(),
        }
    }

    /// Replaces the timing configuration.
    #[must_use]
    pub fn with_config(mut self, config: AuthConfig) -> Self {
        self.config = config;
        self
    }

    /// Timing configuration in use.
    #[must_use]
    pub const fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Underlying token store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Attempts to log in.
    ///
    /// Waits for the configured latency first. Wrong credentials produce
    /// [`LoginOutcome::Failure`] and leave the store untouched.
    ///
    /// # Errors
    ///
    /// Returns an error only if the token cannot be encoded or stored.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginOutcome> {
        tokio::time::sleep(self.config.login_latency).await;

        let known = MOCK_USERS
            .iter()
            .any(|(user, pass)| *user == username && *pass == password);
        if !known {
            warn!("Rejected login for {username}");
            return Ok(LoginOutcome::Failure {
                error: INVALID_CREDENTIALS.to_string(),
            });
        }

        let token = self.issue(username)?;
        self.store.set(USERNAME_KEY, username)?;
        info!("Logged in as {username}");

        Ok(LoginOutcome::Success {
            token,
            username: username.to_string(),
        })
    }

    /// Ends the session, removing the token and username.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    pub fn logout(&self) -> Result<()> {
        self.store.delete(TOKEN_KEY)?;
        self.store.delete(USERNAME_KEY)?;
        debug!("Session cleared");
        Ok(())
    }

    /// Returns the stored token without validating it.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn token(&self) -> Result<Option<String>> {
        self.store.get(TOKEN_KEY)
    }

    /// Checks whether a valid session exists.
    ///
    /// An expired or undecodable token is removed as a side effect.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or cleared.
    pub fn is_authenticated(&self) -> Result<bool> {
        Ok(self.live_claims()?.is_some())
    }

    /// Returns the user holding the session, if it is still valid.
    ///
    /// Clears the store when the token has expired.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or cleared.
    pub fn current_user(&self) -> Result<Option<CurrentUser>> {
        Ok(self
            .live_claims()?
            .map(|claims| CurrentUser {
                username: claims.username,
            }))
    }

    /// Reissues the token if it is about to expire.
    ///
    /// Returns the token now in effect: a fresh one when less than the
    /// refresh threshold remained, otherwise the existing one. Returns `None`
    /// when there is no usable session. An expired token is cleared instead of
    /// being revived.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or written.
    pub fn refresh(&self) -> Result<Option<String>> {
        let Some(raw) = self.token()? else {
            return Ok(None);
        };
        let Some(claims) = self.validate(&raw)? else {
            return Ok(None);
        };

        if claims.remaining() < self.config.refresh_threshold {
            let fresh = self.issue(&claims.username)?;
            info!("Refreshed token for {}", claims.username);
            return Ok(Some(fresh));
        }

        Ok(Some(raw))
    }

    fn issue(&self, username: &str) -> Result<String> {
        let claims = Claims::issue(username, self.config.token_lifetime);
        let token = token::encode(&claims)?;
        self.store.set(TOKEN_KEY, &token)?;
        Ok(token)
    }

    fn live_claims(&self) -> Result<Option<Claims>> {
        match self.token()? {
            Some(raw) => self.validate(&raw),
            None => Ok(None),
        }
    }

    /// Decodes `raw`, clearing the session if it is unusable.
    fn validate(&self, raw: &str) -> Result<Option<Claims>> {
        match token::decode(raw) {
            Ok(claims) if !claims.is_expired() => Ok(Some(claims)),
            Ok(claims) => {
                info!("Session for {} expired", claims.username);
                self.logout()?;
                Ok(None)
            }
            Err(e) => {
                warn!("Discarding unreadable token: {e}");
                self.logout()?;
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use chrono::TimeDelta;

    use super::*;
    use crate::store::MemoryStore;

    fn service() -> AuthService<MemoryStore> {
        AuthService::new(MemoryStore::new())
    }

    fn plant(service: &AuthService<MemoryStore>, username: &str, lifetime: TimeDelta) -> String {
        let raw = token::encode(&Claims::issue(username, lifetime)).unwrap();
        service.store().set(TOKEN_KEY, &raw).unwrap();
        service.store().set(USERNAME_KEY, username).unwrap();
        raw
    }

    #[tokio::test(start_paused = true)]
    async fn test_login_success_stores_token() {
        let auth = service();
        let outcome = auth.login("admin", "password123").await.unwrap();

        let LoginOutcome::Success {
            token: raw,
            username,
        } = outcome
        else {
            panic!("expected success");
        };
        assert_eq!(username, "admin");
        assert_eq!(token::decode(&raw).unwrap().username, "admin");
        assert_eq!(auth.token().unwrap(), Some(raw));
        assert_eq!(
            auth.store().get(USERNAME_KEY).unwrap().as_deref(),
            Some("admin")
        );
        assert!(auth.is_authenticated().unwrap());
    }

    #[tokio::test(start_paused = true)]
    async fn test_login_failure_stores_nothing() {
        let auth = service();
        let outcome = auth.login("admin", "wrong").await.unwrap();

        assert_eq!(
            outcome,
            LoginOutcome::Failure {
                error: INVALID_CREDENTIALS.to_string()
            }
        );
        assert!(auth.store().is_empty());
        assert!(!auth.is_authenticated().unwrap());
    }

    #[tokio::test(start_paused = true)]
    async fn test_login_unknown_user() {
        let auth = service();
        assert!(!auth.login("vader", "password123").await.unwrap().is_success());
        assert!(auth.login("luke", "skywalker").await.unwrap().is_success());
        assert!(auth.login("user", "user123").await.unwrap().is_success());
    }

    #[tokio::test(start_paused = true)]
    async fn test_login_waits_for_latency() {
        let auth = service();
        let started = tokio::time::Instant::now();
        auth.login("admin", "password123").await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(500));
    }

    #[test]
    fn test_login_then_logout_without_latency() {
        let auth = AuthService::new(MemoryStore::new())
            .with_config(AuthConfig::default().with_login_latency(Duration::ZERO));

        let outcome = tokio_test::block_on(auth.login("luke", "skywalker")).unwrap();
        assert!(outcome.is_success());
        assert_eq!(auth.current_user().unwrap().unwrap().username, "luke");

        auth.logout().unwrap();
        assert_eq!(auth.current_user().unwrap(), None);
    }

    #[test]
    fn test_token_lifetime_is_one_hour() {
        let auth = service();
        let raw = auth.issue("admin").unwrap();
        let claims = token::decode(&raw).unwrap();
        assert_eq!(claims.exp - claims.iat, 60 * 60 * 1000);
    }

    #[test]
    fn test_logout_clears_store() {
        let auth = service();
        plant(&auth, "admin", TimeDelta::hours(1));
        auth.logout().unwrap();
        assert!(auth.store().is_empty());
        assert!(!auth.is_authenticated().unwrap());
    }

    #[test]
    fn test_expired_token_is_cleared() {
        let auth = service();
        plant(&auth, "admin", TimeDelta::seconds(-1));

        assert!(!auth.is_authenticated().unwrap());
        assert!(auth.store().is_empty());
    }

    #[test]
    fn test_current_user() {
        let auth = service();
        assert_eq!(auth.current_user().unwrap(), None);

        plant(&auth, "luke", TimeDelta::hours(1));
        assert_eq!(
            auth.current_user().unwrap(),
            Some(CurrentUser {
                username: "luke".to_string()
            })
        );
    }

    #[test]
    fn test_current_user_expired() {
        let auth = service();
        plant(&auth, "luke", TimeDelta::seconds(-30));
        assert_eq!(auth.current_user().unwrap(), None);
        assert!(auth.store().is_empty());
    }

    #[test]
    fn test_garbage_token_is_cleared() {
        let auth = service();
        auth.store().set(TOKEN_KEY, "garbage").unwrap();
        assert!(!auth.is_authenticated().unwrap());
        assert_eq!(auth.token().unwrap(), None);
    }

    #[test]
    fn test_refresh_keeps_fresh_token() {
        let auth = service();
        let raw = plant(&auth, "admin", TimeDelta::minutes(30));
        assert_eq!(auth.refresh().unwrap(), Some(raw));
    }

    #[test]
    fn test_refresh_reissues_near_expiry() {
        let auth = service();
        let raw = plant(&auth, "admin", TimeDelta::minutes(2));

        let fresh = auth.refresh().unwrap().unwrap();
        assert_ne!(fresh, raw);
        assert_eq!(auth.token().unwrap().as_deref(), Some(fresh.as_str()));

        let claims = token::decode(&fresh).unwrap();
        assert_eq!(claims.username, "admin");
        assert!(claims.remaining() > TimeDelta::minutes(55));
    }

    #[test]
    fn test_refresh_without_session() {
        let auth = service();
        assert_eq!(auth.refresh().unwrap(), None);

        plant(&auth, "admin", TimeDelta::seconds(-1));
        assert_eq!(auth.refresh().unwrap(), None);
        assert!(auth.store().is_empty());
    }
}
