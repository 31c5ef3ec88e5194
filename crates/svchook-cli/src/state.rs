//! Resolved configuration shared by every command.

use std::path::Path;

use anyhow::{Context, Result, bail};

use svchook_core::directory::ServiceDirectory;
use svchook_infra::config::resolve_harness_config;
use svchook_infra::http::HttpServiceApi;
use svchook_infra::sqlite::DataStore;
use svchook_types::config::HarnessConfig;

pub struct AppState {
    pub config: HarnessConfig,
}

impl AppState {
    /// Load the config file and apply `SVCHOOK_*` overrides.
    pub async fn init(config_path: &Path) -> Result<Self> {
        let config = resolve_harness_config(config_path).await;
        tracing::debug!(
            database = %config.database_path.display(),
            api = %config.api.base_url(),
            "Configuration resolved"
        );
        Ok(Self { config })
    }

    /// A directory client for the configured API.
    pub fn directory(&self) -> Result<ServiceDirectory<HttpServiceApi>> {
        let api = HttpServiceApi::new(self.config.api.clone())?;
        Ok(ServiceDirectory::new(api))
    }

    /// Open the clients database. The caller must close it.
    pub async fn open_store(&self) -> Result<DataStore> {
        let path = &self.config.database_path;
        if !DataStore::database_exists(path) {
            bail!("database not found at {}", path.display());
        }

        DataStore::open(path)
            .await
            .with_context(|| format!("failed to open {}", path.display()))
    }
}
