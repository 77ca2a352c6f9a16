//! Authentication timing configuration.

use std::time::Duration;

use chrono::TimeDelta;

/// Simulated latency applied to every login attempt.
const DEFAULT_LOGIN_LATENCY: Duration = Duration::from_millis(500);

/// How often the refresh task wakes up.
const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(60);

/// Timing knobs for [`crate::AuthService`] and [`crate::RefreshTask`].
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Artificial delay before a login attempt is answered.
    pub login_latency: Duration,
    /// Validity window of a freshly issued token.
    pub token_lifetime: TimeDelta,
    /// Tokens with less remaining validity than this are reissued on refresh.
    pub refresh_threshold: TimeDelta,
    /// Period of the background refresh check.
    pub refresh_interval: Duration,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            login_latency: DEFAULT_LOGIN_LATENCY,
            token_lifetime: TimeDelta::hours(1),
            refresh_threshold: TimeDelta::minutes(5),
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
        }
    }
}

impl AuthConfig {
    /// Sets the simulated login latency.
    #[must_use]
    pub const fn with_login_latency(mut self, latency: Duration) -> Self {
        self.login_latency = latency;
        self
    }

    /// Sets the token lifetime.
    #[must_use]
    pub const fn with_token_lifetime(mut self, lifetime: TimeDelta) -> Self {
        self.token_lifetime = lifetime;
        self
    }

    /// Sets the refresh low-water mark.
    #[must_use]
    pub const fn with_refresh_threshold(mut self, threshold: TimeDelta) -> Self {
        self.refresh_threshold = threshold;
        self
    }

    /// Sets the background refresh period.
    #[must_use]
    pub const fn with_refresh_interval(mut self, interval: Duration) -> Self {
        self.refresh_interval = interval;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AuthConfig::default();
        assert_eq!(config.login_latency, Duration::from_millis(500));
        assert_eq!(config.token_lifetime, TimeDelta::hours(1));
        assert_eq!(config.refresh_threshold, TimeDelta::minutes(5));
        assert_eq!(config.refresh_interval, Duration::from_secs(60));
    }

    #[test]
    fn test_builders() {
        let config = AuthConfig::default()
            .with_login_latency(Duration::ZERO)
            .with_refresh_interval(Duration::from_secs(5));
        assert_eq!(config.login_latency, Duration::ZERO);
        assert_eq!(config.refresh_interval, Duration::from_secs(5));
    }
}
