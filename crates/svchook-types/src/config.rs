//! Static configuration for the harness.
//!
//! `HarnessConfig` replaces the module-level constants of a plain script:
//! where the database lives, where the service directory listens, and the
//! headers sent with every directory request. All fields have defaults that
//! match a local development setup.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level configuration, usually loaded from `svchook.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HarnessConfig {
    /// Path to the SQLite database holding `CLIENTS` and `BALANCES`.
    #[serde(default = "default_database_path")]
    pub database_path: PathBuf,

    /// Remote service directory settings.
    #[serde(default)]
    pub api: ApiConfig,
}

fn default_database_path() -> PathBuf {
    PathBuf::from("../web/clients.db")
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            api: ApiConfig::default(),
        }
    }
}

/// Where the service directory listens and what it is sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Scheme and host, without port (e.g. `http://localhost`).
    #[serde(default = "default_api_url")]
    pub url: String,

    #[serde(default = "default_api_port")]
    pub port: u16,

    /// Static headers attached to every directory request.
    #[serde(default = "default_headers")]
    pub headers: BTreeMap<String, String>,
}

fn default_api_url() -> String {
    "http://localhost".to_string()
}

fn default_api_port() -> u16 {
    5000
}

fn default_headers() -> BTreeMap<String, String> {
    BTreeMap::from([("Content-type".to_string(), "application/json".to_string())])
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: default_api_url(),
            port: default_api_port(),
            headers: default_headers(),
        }
    }
}

impl ApiConfig {
    /// `url:port`, with any trailing slash on `url` dropped.
    pub fn base_url(&self) -> String {
        format!("{}:{}", self.url.trim_end_matches('/'), self.port)
    }

    /// Full URL for an endpoint path such as `/services`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }
}
