//! Configuration for the synchronization core.

use std::time::Duration;

/// Timing configuration for the controller's timers.
///
/// The defaults are the intervals the device UI was tuned for; hosts and
/// tests may shorten or stretch them.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// Window in which state changes coalesce into one render pass
    /// Default: 50 ms
    pub refresh_debounce: Duration,

    /// Idle time before Track button-mode reverts to Volume
    /// Default: 5 seconds
    pub mode_revert_timeout: Duration,

    /// Idle time before the volume overlay yields the bottom area back
    /// Default: 3 seconds
    pub overlay_revert_timeout: Duration,

    /// Cadence of periodic status requests
    /// Default: 5 seconds
    pub status_poll_interval: Duration,

    /// Delay before announcing the device UI to the companion
    /// Default: 500 ms
    pub app_ready_delay: Duration,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            refresh_debounce: Duration::from_millis(50),
            mode_revert_timeout: Duration::from_secs(5),
            overlay_revert_timeout: Duration::from_secs(3),
            status_poll_interval: Duration::from_secs(5),
            app_ready_delay: Duration::from_millis(500),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RemoteConfig::default();
        assert_eq!(config.refresh_debounce, Duration::from_millis(50));
        assert_eq!(config.mode_revert_timeout, Duration::from_secs(5));
        assert_eq!(config.overlay_revert_timeout, Duration::from_secs(3));
        assert_eq!(config.status_poll_interval, Duration::from_secs(5));
        assert_eq!(config.app_ready_delay, Duration::from_millis(500));
    }
}
