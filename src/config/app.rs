// src/config/app.rs
use std::path::{Path, PathBuf};
use std::{env, fs};

use serde::Deserialize;
use tracing::debug;

use super::defaults::*;
use crate::consts::{CONFIG_ENV_VAR, CONFIG_FILE_NAME};
use crate::core::Result;
use crate::enums::ExportFormat;
use crate::error::ExportError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub paths: Paths,
}

/// File locations. Relative entries are resolved against the executable's
/// directory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Paths {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_csv_output")]
    pub csv_output: String,
    #[serde(default = "default_json_output")]
    pub json_output: String,
}

impl Default for Paths {
    fn default() -> Self {
        Self {
            database: default_database(),
            csv_output: default_csv_output(),
            json_output: default_json_output(),
        }
    }
}

impl Paths {
    pub fn database_path(&self, base_dir: &Path) -> PathBuf {
        resolve(base_dir, &self.database)
    }

    pub fn output_path(&self, format: ExportFormat, base_dir: &Path) -> PathBuf {
        let configured = match format {
            ExportFormat::BitwardenCsv => &self.csv_output,
            ExportFormat::BitwardenJson => &self.json_output,
        };
        resolve(base_dir, configured)
    }
}

impl Config {
    pub fn from_toml_str(path: &Path, content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|source| ExportError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(path, &content)
    }
}

/// Load the config for an executable living in `base_dir`.
///
/// `TFA_EXPORT_CONFIG` wins over `export-config.toml` in `base_dir`.
/// No file at all means built-in defaults.
pub fn load(base_dir: &Path) -> Result<Config> {
    let config_path = env::var_os(CONFIG_ENV_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|| base_dir.join(CONFIG_FILE_NAME));

    if config_path.exists() {
        debug!(path = %config_path.display(), "loading config");
        Config::from_file(&config_path)
    } else {
        debug!(path = %config_path.display(), "no config file, using defaults");
        Ok(Config::default())
    }
}

fn resolve(base_dir: &Path, configured: &str) -> PathBuf {
    let path = Path::new(configured);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}
