//! Configuration loader for svchook.
//!
//! Reads a TOML file into [`HarnessConfig`] and applies `SVCHOOK_*`
//! environment overrides on top. Falls back to the built-in defaults when
//! the file is missing or malformed.

use std::path::Path;

use svchook_types::config::HarnessConfig;

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "svchook.toml";

/// Overrides `database_path`.
pub const ENV_DATABASE: &str = "SVCHOOK_DATABASE";
/// Overrides `api.url`.
pub const ENV_API_URL: &str = "SVCHOOK_API_URL";
/// Overrides `api.port`.
pub const ENV_API_PORT: &str = "SVCHOOK_API_PORT";

/// Load configuration from a TOML file.
///
/// - If the file does not exist, returns [`HarnessConfig::default()`].
/// - If the file exists but cannot be read or parsed, logs a warning and
///   returns the default.
pub async fn load_harness_config(path: &Path) -> HarnessConfig {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config found at {}, using defaults", path.display());
            return HarnessConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", path.display());
            return HarnessConfig::default();
        }
    };

    match toml::from_str::<HarnessConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("Failed to parse {}: {err}, using defaults", path.display());
            HarnessConfig::default()
        }
    }
}

/// Apply `SVCHOOK_*` overrides from the process environment.
pub fn apply_env_overrides(config: HarnessConfig) -> HarnessConfig {
    apply_overrides(config, |key| std::env::var(key).ok())
}

/// Apply overrides from an arbitrary lookup (the environment in production).
///
/// An unparsable port is ignored with a warning.
pub fn apply_overrides(
    mut config: HarnessConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> HarnessConfig {
    if let Some(path) = lookup(ENV_DATABASE) {
        config.database_path = path.into();
    }
    if let Some(url) = lookup(ENV_API_URL) {
        config.api.url = url;
    }
    if let Some(port) = lookup(ENV_API_PORT) {
        match port.trim().parse::<u16>() {
            Ok(port) => config.api.port = port,
            Err(err) => tracing::warn!("Ignoring {ENV_API_PORT}={port:?}: {err}"),
        }
    }
    config
}

/// Load the file and apply environment overrides.
pub async fn resolve_harness_config(path: &Path) -> HarnessConfig {
    apply_env_overrides(load_harness_config(path).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[tokio::test]
    async fn load_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_harness_config(&tmp.path().join(DEFAULT_CONFIG_FILE)).await;
        assert_eq!(config, HarnessConfig::default());
    }

    #[tokio::test]
    async fn load_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(DEFAULT_CONFIG_FILE);
        tokio::fs::write(
            &path,
            r#"
database_path = "/srv/web/clients.db"

[api]
url = "http://billing.internal"
port = 5050

[api.headers]
"Content-type" = "application/json"
"X-Test-Run" = "nightly"
"#,
        )
        .await
        .unwrap();

        let config = load_harness_config(&path).await;
        assert_eq!(config.database_path, PathBuf::from("/srv/web/clients.db"));
        assert_eq!(config.api.base_url(), "http://billing.internal:5050");
        assert_eq!(config.api.headers.len(), 2);
    }

    #[tokio::test]
    async fn load_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(DEFAULT_CONFIG_FILE);
        tokio::fs::write(&path, "port = [not toml").await.unwrap();

        let config = load_harness_config(&path).await;
        assert_eq!(config, HarnessConfig::default());
    }

    #[test]
    fn overrides_replace_fields() {
        let config = apply_overrides(
            HarnessConfig::default(),
            lookup_from(&[
                (ENV_DATABASE, "/tmp/other.db"),
                (ENV_API_URL, "http://10.0.0.5"),
                (ENV_API_PORT, "6000"),
            ]),
        );
        assert_eq!(config.database_path, PathBuf::from("/tmp/other.db"));
        assert_eq!(config.api.base_url(), "http://10.0.0.5:6000");
    }

    #[test]
    fn overrides_ignore_bad_port() {
        let config = apply_overrides(
            HarnessConfig::default(),
            lookup_from(&[(ENV_API_PORT, "fifty")]),
        );
        assert_eq!(config.api.port, 5000);
    }

    #[test]
    fn no_overrides_keeps_config() {
        let config = apply_overrides(HarnessConfig::default(), lookup_from(&[]));
        assert_eq!(config, HarnessConfig::default());
    }
}
