use std::time::Duration;

/// How long a notification banner stays up before it dismisses itself.
pub const NOTIFICATION_TIMEOUT: Duration = Duration::from_secs(5);

/// Compiled-in console settings. There is no config file.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsoleConfig {
    pub title: String,
    pub window_size: (f32, f32),
    pub notification_timeout: Duration,
    /// Empty header rows shown when the window opens.
    pub initial_header_rows: usize,
    /// Log filter used when `RUST_LOG` is unset.
    pub default_log_filter: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            title: "Restprobe".to_string(),
            window_size: (1220.0, 840.0),
            notification_timeout: NOTIFICATION_TIMEOUT,
            initial_header_rows: 1,
            default_log_filter: "restprobe=info".to_string(),
        }
    }
}
