//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.
//! Site address and asset paths come from `[package.metadata.leptos]` and are
//! handled by `leptos::prelude::get_configuration`.

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Whether responses are compressed (brotli + gzip)
    /// Set `WAWEE_COMPRESSION=false` to disable, e.g. behind a compressing proxy
    pub compression: bool,

    /// Log filter passed to tracing-subscriber
    /// Example: info,wawee=debug
    pub log_filter: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var("WAWEE_COMPRESSION").ok().as_deref(),
            std::env::var("RUST_LOG").ok(),
        )
    }

    fn from_vars(compression: Option<&str>, log_filter: Option<String>) -> Self {
        Self {
            compression: compression.map(parse_flag).unwrap_or(true),
            log_filter: log_filter.filter(|f| !f.trim().is_empty()),
        }
    }

    /// Log filter or the default used when RUST_LOG is unset
    pub fn log_filter_or_default(&self) -> &str {
        self.log_filter.as_deref().unwrap_or("info")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Config Struct Tests (no env var dependencies - thread safe)
    // ========================================================================

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_vars(None, None);
        assert!(config.compression);
        assert!(config.log_filter.is_none());
        assert_eq!(config.log_filter_or_default(), "info");
    }

    #[test]
    fn test_compression_disabled() {
        for value in ["false", "0", "OFF", " no "] {
            let config = Config::from_vars(Some(value), None);
            assert!(!config.compression, "value {:?}", value);
        }
    }

    #[test]
    fn test_compression_enabled_values() {
        for value in ["true", "1", "yes", "anything"] {
            assert!(Config::from_vars(Some(value), None).compression);
        }
    }

    #[test]
    fn test_log_filter() {
        let config = Config::from_vars(None, Some("debug,wawee=trace".to_string()));
        assert_eq!(config.log_filter_or_default(), "debug,wawee=trace");

        let config = Config::from_vars(None, Some("   ".to_string()));
        assert!(config.log_filter.is_none());
    }
}
