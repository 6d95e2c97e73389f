//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Everything except the analytics identifiers has a usable default; those
//! have to come from the config file or the environment.

use serde::{Deserialize, Serialize};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub analytics: AnalyticsConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Identifiers for the managed ingestion endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    #[serde(default)]
    pub identity_pool_id: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub stream_name: String,
    /// Overrides the endpoint derived from `region`.
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            identity_pool_id: String::new(),
            region: String::new(),
            stream_name: String::new(),
            endpoint: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl AnalyticsConfig {
    /// The configured endpoint, or the regional Firehose endpoint.
    pub fn resolved_endpoint(&self) -> String {
        match &self.endpoint {
            Some(endpoint) if !endpoint.trim().is_empty() => endpoint.clone(),
            _ => format!("https://firehose.{}.amazonaws.com/", self.region),
        }
    }
}

fn default_timeout_secs() -> u64 {
    5
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_title")]
    pub title: String,
    /// Capture mouse clicks on coin rows.
    #[serde(default = "default_true")]
    pub mouse: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            mouse: true,
        }
    }
}

fn default_title() -> String {
    "Shill your coins!".into()
}

fn default_true() -> bool {
    true
}

/// Diagnostic log output. The terminal belongs to the UI, so logs go to a file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            log_dir: default_log_dir(),
            level: default_level(),
        }
    }
}

fn default_log_dir() -> String {
    "~/.local/share/shill-your-coin/logs".into()
}

fn default_level() -> String {
    "info".into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let cfg: AppConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.ui.title, "Shill your coins!");
        assert!(cfg.ui.mouse);
        assert!(cfg.logging.enabled);
        assert_eq!(cfg.analytics.timeout_secs, 5);
        assert!(cfg.analytics.identity_pool_id.is_empty());
    }

    #[test]
    fn test_parse_analytics_section() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [analytics]
            identity_pool_id = "us-east-1:1234"
            region = "us-east-1"
            stream_name = "coin-votes"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.analytics.identity_pool_id, "us-east-1:1234");
        assert_eq!(cfg.analytics.stream_name, "coin-votes");
        assert_eq!(
            cfg.analytics.resolved_endpoint(),
            "https://firehose.us-east-1.amazonaws.com/"
        );
    }

    #[test]
    fn test_explicit_endpoint_wins() {
        let analytics = AnalyticsConfig {
            region: "eu-west-1".into(),
            endpoint: Some("http://localhost:4573/ingest".into()),
            ..AnalyticsConfig::default()
        };
        assert_eq!(analytics.resolved_endpoint(), "http://localhost:4573/ingest");
    }
}
