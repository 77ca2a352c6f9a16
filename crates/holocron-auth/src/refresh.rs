//! Background token refresh.
//!
//! [`RefreshTask`] wakes up on a fixed period while the session is live,
//! reissues the token when it nears expiry, and ends on its own the first
//! time it finds the session gone.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tokio::time::{Instant, interval_at};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::service::AuthService;
use crate::store::TokenStore;

/// Handle to a running refresh loop.
///
/// Dropping the handle detaches the loop; it keeps running until the session
/// ends. Call [`RefreshTask::stop`] to end it sooner.
#[derive(Debug)]
pub struct RefreshTask {
    cancel: CancellationToken,
    handle: JoinHandle<()>,
}

impl RefreshTask {
    /// Spawns the refresh loop on the current runtime.
    ///
    /// The first check happens one interval after start.
    #[must_use]
    pub fn start<S>(service: Arc<AuthService<S>>) -> Self
    where
        S: TokenStore + 'static,
    {
        let cancel = CancellationToken::new();
        let handle = tokio::spawn(run(service, cancel.clone()));
        Self { cancel, handle }
    }

    /// Asks the loop to stop. Returns immediately.
    pub fn stop(&self) {
        self.cancel.cancel();
    }

    /// Returns true once the loop has exited.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Waits for the loop to exit.
    pub async fn join(self) {
        if let Err(e) = self.handle.await {
            warn!("Refresh task ended abnormally: {e}");
        }
    }
}

async fn run<S: TokenStore>(service: Arc<AuthService<S>>, cancel: CancellationToken) {
    let period = service.config().refresh_interval;
    let mut ticker = interval_at(Instant::now() + period, period);

    debug!(interval_secs = period.as_secs(), "Token refresh started");

    loop {
        tokio::select! {
            () = cancel.cancelled() => {
                debug!("Token refresh stopped");
                break;
            }
            _ = ticker.tick() => {
                match service.is_authenticated() {
                    Ok(true) => {
                        if let Err(e) = service.refresh() {
                            warn!("Token refresh failed: {e}");
                        }
                    }
                    Ok(false) => {
                        info!("Session ended, token refresh stopping");
                        break;
                    }
                    Err(e) => warn!("Could not check session: {e}"),
                }
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
    use crate::config::AuthConfig;
    use crate::store::{MemoryStore, TOKEN_KEY};
    use crate::token::{self, Claims};

    fn service_with_token(lifetime: TimeDelta) -> Arc<AuthService<MemoryStore>> {
        let service = AuthService::new(MemoryStore::new()).with_config(
            AuthConfig::default().with_refresh_interval(Duration::from_secs(60)),
        );
        let raw = token::encode(&Claims::issue("admin", lifetime)).unwrap();
        service.store().set(TOKEN_KEY, &raw).unwrap();
        Arc::new(service)
    }

    #[tokio::test(start_paused = true)]
    async fn test_stops_when_session_ends() {
        let service = service_with_token(TimeDelta::hours(1));
        let task = RefreshTask::start(Arc::clone(&service));

        tokio::time::sleep(Duration::from_secs(61)).await;
        assert!(!task.is_finished());

        service.logout().unwrap();
        tokio::time::timeout(Duration::from_secs(120), task.join())
            .await
            .unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_reissues_near_expiry() {
        let service = service_with_token(TimeDelta::minutes(3));
        let before = service.token().unwrap().unwrap();
        let task = RefreshTask::start(Arc::clone(&service));

        tokio::time::sleep(Duration::from_secs(61)).await;
        tokio::task::yield_now().await;

        let after = service.token().unwrap().unwrap();
        assert_ne!(before, after);
        assert!(token::decode(&after).unwrap().remaining() > TimeDelta::minutes(55));

        task.stop();
        task.join().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_cancels_loop() {
        let service = service_with_token(TimeDelta::hours(1));
        let task = RefreshTask::start(service);
        task.stop();
        tokio::time::timeout(Duration::from_secs(1), task.join())
            .await
            .unwrap();
    }
}
