//! Configuration loader and application settings.

/// Consolidated application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Where the niche rate table lives: an http(s) URL or a local path.
    pub data_source: String,
    /// Timeout for the one-shot table fetch, in seconds.
    pub fetch_timeout_secs: u64,
}

impl AppConfig {
    /// Load configuration from environment variables. Every setting has a
    /// default, so the estimator stays usable with no environment at all.
    pub fn load() -> Self {
        let data_source = std::env::var("DATA_SOURCE").unwrap_or_else(|_| "data.json".into());
        let fetch_timeout_secs = std::env::var("FETCH_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".into())
            .parse()
            .unwrap_or(10);

        Self {
            data_source,
            fetch_timeout_secs,
        }
    }
}
