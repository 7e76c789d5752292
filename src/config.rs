//! Configuration types.

/// Server configuration, read from the environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port for the REST API.
    pub port: u16,
    /// Default analytics window in days when a request does not specify one.
    pub default_window_days: i64,
    /// Fallback business display name for ad-hoc analysis requests.
    pub default_business_name: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8000,
            default_window_days: 30,
            default_business_name: "our business".to_string(),
        }
    }
}

impl ServerConfig {
    /// Build config from `REVUIQ_*` environment variables, falling back
    /// to defaults for anything unset or unparseable.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let port = std::env::var("REVUIQ_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.port);
        let default_window_days = std::env::var("REVUIQ_WINDOW_DAYS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.default_window_days);
        let default_business_name = std::env::var("REVUIQ_BUSINESS_NAME")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.default_business_name);

        Self {
            port,
            default_window_days,
            default_business_name,
        }
    }
}
