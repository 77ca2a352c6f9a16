//! Session lifecycle tying the refresh task to auth transitions.

use std::sync::{Arc, Mutex};

use tracing::debug;

use crate::error::{Error, Result};
use crate::refresh::RefreshTask;
use crate::service::{AuthService, CurrentUser, LoginOutcome};
use crate::store::TokenStore;

/// An [`AuthService`] plus the refresh task that keeps its token alive.
///
/// The task runs exactly while the session is authenticated: it starts on a
/// successful [`Session::login`] or [`Session::restore`] and stops on
/// [`Session::logout`] (or by itself when the token lapses).
#[derive(Debug)]
pub struct Session<S: TokenStore + 'static> {
    service: Arc<AuthService<S>>,
    refresher: Mutex<Option<RefreshTask>>,
}

impl<S: TokenStore + 'static> Session<S> {
    /// Wraps a service. No task is started until login or restore.
    #[must_use]
    pub const fn new(service: Arc<AuthService<S>>) -> Self {
        Self {
            service,
            refresher: Mutex::new(None),
        }
    }

    /// Underlying service.
    #[must_use]
    pub const fn service(&self) -> &Arc<AuthService<S>> {
        &self.service
    }

    /// Resumes a session persisted by an earlier run.
    ///
    /// Returns the user if the stored token is still valid.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn restore(&self) -> Result<Option<CurrentUser>> {
        let user = self.service.current_user()?;
        if let Some(user) = &user {
            debug!("Restored session for {}", user.username);
            self.start_refresh()?;
        }
        Ok(user)
    }

    /// Logs in and, on success, starts the refresh task.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginOutcome> {
        let outcome = self.service.login(username, password).await?;
        if outcome.is_success() {
            self.start_refresh()?;
        }
        Ok(outcome)
    }

    /// Stops the refresh task and clears the session.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    pub fn logout(&self) -> Result<()> {
        if let Some(task) = self.refresher.lock().map_err(Error::store)?.take() {
            task.stop();
        }
        self.service.logout()
    }

    /// Checks whether the session is live. See [`AuthService::is_authenticated`].
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn is_authenticated(&self) -> Result<bool> {
        self.service.is_authenticated()
    }

    /// Returns true while a refresh task is running.
    #[must_use]
    pub fn is_refreshing(&self) -> bool {
        self.refresher
            .lock()
            .is_ok_and(|slot| slot.as_ref().is_some_and(|task| !task.is_finished()))
    }

    fn start_refresh(&self) -> Result<()> {
        let mut slot = self.refresher.lock().map_err(Error::store)?;
        if let Some(previous) = slot.take() {
            previous.stop();
        }
        *slot = Some(RefreshTask::start(Arc::clone(&self.service)));
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::config::AuthConfig;
    use crate::store::MemoryStore;

    fn session() -> Session<MemoryStore> {
        let service = AuthService::new(MemoryStore::new())
            .with_config(AuthConfig::default().with_login_latency(Duration::ZERO));
        Session::new(Arc::new(service))
    }

    #[tokio::test]
    async fn test_login_starts_and_logout_stops_refresh() {
        let session = session();
        assert!(!session.is_refreshing());

        assert!(session.login("admin", "password123").await.unwrap().is_success());
        assert!(session.is_refreshing());

        session.logout().unwrap();
        assert!(!session.is_refreshing());
        assert!(!session.is_authenticated().unwrap());
    }

    #[tokio::test]
    async fn test_failed_login_does_not_start_refresh() {
        let session = session();
        assert!(!session.login("admin", "nope").await.unwrap().is_success());
        assert!(!session.is_refreshing());
    }

    #[tokio::test]
    async fn test_restore() {
        let session = session();
        assert_eq!(session.restore().unwrap(), None);
        assert!(!session.is_refreshing());

        session.service().login("luke", "skywalker").await.unwrap();
        let user = session.restore().unwrap().unwrap();
        assert_eq!(user.username, "luke");
        assert!(session.is_refreshing());
    }
}
