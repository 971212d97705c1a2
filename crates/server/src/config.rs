use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use catalog::{demo_catalog, Catalog};
use serde::Deserialize;
use tracing::{info, warn};

const CONFIG_FILE: &str = "server.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub server_bind: String,
    /// JSON catalog to serve. Without one the demo catalog is served.
    pub catalog_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_bind: "127.0.0.1:8080".into(),
            catalog_path: None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    bind_addr: Option<String>,
    catalog_path: Option<PathBuf>,
}

pub fn load_settings() -> Settings {
    load_settings_from(Path::new(CONFIG_FILE), |key| std::env::var(key).ok())
}

/// Defaults, then the TOML file, then the environment. `APP__*` variables win
/// over their unprefixed aliases.
pub(crate) fn load_settings_from(
    config_file: &Path,
    env: impl Fn(&str) -> Option<String>,
) -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(config_file) {
        match toml::from_str::<FileSettings>(&raw) {
            Ok(file_cfg) => {
                if let Some(v) = file_cfg.bind_addr {
                    settings.server_bind = v;
                }
                if let Some(v) = file_cfg.catalog_path {
                    settings.catalog_path = Some(v);
                }
            }
            Err(error) => {
                warn!(path = %config_file.display(), %error, "ignoring unreadable config file");
            }
        }
    }

    if let Some(v) = env("SERVER_BIND") {
        settings.server_bind = v;
    }
    if let Some(v) = env("APP__BIND_ADDR") {
        settings.server_bind = v;
    }

    if let Some(v) = env("CATALOG_PATH") {
        settings.catalog_path = non_blank_path(&v);
    }
    if let Some(v) = env("APP__CATALOG_PATH") {
        settings.catalog_path = non_blank_path(&v);
    }

    settings
}

fn non_blank_path(raw: &str) -> Option<PathBuf> {
    let raw = raw.trim();
    (!raw.is_empty()).then(|| PathBuf::from(raw))
}

pub fn load_catalog(settings: &Settings) -> anyhow::Result<Catalog> {
    let Some(path) = &settings.catalog_path else {
        info!("no catalog path configured, serving the demo catalog");
        return Ok(demo_catalog());
    };
    let bytes = fs::read(path)
        .with_context(|| format!("failed to read catalog file '{}'", path.display()))?;
    let catalog = Catalog::from_json_slice(&bytes)
        .with_context(|| format!("catalog file '{}' is invalid", path.display()))?;
    info!(path = %path.display(), resources = catalog.len(), "catalog loaded");
    Ok(catalog)
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
