pub mod model;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub use model::{AnalyticsConfig, AppConfig, LoggingConfig};

fn config_path() -> PathBuf {
    if let Ok(path) = std::env::var("SHILL_CONFIG") {
        return PathBuf::from(path);
    }
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("shill-your-coin")
        .join("config.toml")
}

pub fn load_config() -> Result<AppConfig> {
    let mut config = load_config_from(&config_path())?;
    apply_env_overrides(&mut config, |key| std::env::var(key).ok());
    Ok(config)
}

fn load_config_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let config: AppConfig =
        toml::from_str(&contents).with_context(|| "Failed to parse config file")?;
    Ok(config)
}

/// Environment variables take precedence over the file for the analytics
/// identifiers so deployments can inject them without writing a config.
fn apply_env_overrides(config: &mut AppConfig, var: impl Fn(&str) -> Option<String>) {
    if let Some(v) = var("SHILL_IDENTITY_POOL_ID") {
        config.analytics.identity_pool_id = v;
    }
    if let Some(v) = var("SHILL_REGION") {
        config.analytics.region = v;
    }
    if let Some(v) = var("SHILL_STREAM_NAME") {
        config.analytics.stream_name = v;
    }
    if let Some(v) = var("SHILL_ENDPOINT") {
        config.analytics.endpoint = Some(v);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_config_from(&dir.path().join("nope.toml")).unwrap();
        assert!(cfg.analytics.region.is_empty());
        assert_eq!(cfg.ui.title, "Shill your coins!");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[analytics]\nregion = \"ap-south-1\"\n[ui]\ntitle = \"Vote!\"\n",
        )
        .unwrap();
        let cfg = load_config_from(&path).unwrap();
        assert_eq!(cfg.analytics.region, "ap-south-1");
        assert_eq!(cfg.ui.title, "Vote!");
    }

    #[test]
    fn test_bad_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[analytics\nregion = ").unwrap();
        assert!(load_config_from(&path).is_err());
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("SHILL_IDENTITY_POOL_ID", "pool"),
            ("SHILL_REGION", "us-west-2"),
            ("SHILL_STREAM_NAME", "votes"),
        ]
        .into_iter()
        .collect();
        let mut cfg = AppConfig::default();
        cfg.analytics.region = "eu-central-1".into();
        apply_env_overrides(&mut cfg, |k| env.get(k).map(|v| v.to_string()));
        assert_eq!(cfg.analytics.identity_pool_id, "pool");
        assert_eq!(cfg.analytics.region, "us-west-2");
        assert_eq!(cfg.analytics.stream_name, "votes");
        assert_eq!(cfg.analytics.endpoint, None);
    }
}
