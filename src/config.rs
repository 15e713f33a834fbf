//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/bikeshare/bikeshare.toml`
//! 3. Environment variables: `BIKESHARE_*` prefix
//! 4. Command line (`--data-dir`)

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;
use crate::domain::City;

/// Backing file of each city, relative to the data directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CityFiles {
    pub chicago: PathBuf,
    pub new_york_city: PathBuf,
    pub washington: PathBuf,
}

impl Default for CityFiles {
    fn default() -> Self {
        Self {
            chicago: PathBuf::from("chicago.csv"),
            new_york_city: PathBuf::from("new_york_city.csv"),
            washington: PathBuf::from("washington.csv"),
        }
    }
}

impl CityFiles {
    pub fn file_for(&self, city: City) -> &Path {
        match city {
            City::Chicago => &self.chicago,
            City::NewYorkCity => &self.new_york_city,
            City::Washington => &self.washington,
        }
    }

    fn apply(&self, overlay: &RawCityFiles) -> Self {
        Self {
            chicago: overlay.chicago.clone().unwrap_or_else(|| self.chicago.clone()),
            new_york_city: overlay
                .new_york_city
                .clone()
                .unwrap_or_else(|| self.new_york_city.clone()),
            washington: overlay
                .washington
                .clone()
                .unwrap_or_else(|| self.washington.clone()),
        }
    }
}

/// Raw city table for intermediate parsing (None → not specified, inherit).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawCityFiles {
    pub chicago: Option<PathBuf>,
    pub new_york_city: Option<PathBuf>,
    pub washington: Option<PathBuf>,
}

/// Raw settings for intermediate parsing.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub data_dir: Option<PathBuf>,
    #[serde(default)]
    pub cities: RawCityFiles,
}

/// Unified configuration for bikeshare.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Directory holding the city CSV files (default: current directory)
    pub data_dir: PathBuf,
    /// City → file mapping
    pub cities: CityFiles,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            cities: CityFiles::default(),
        }
    }
}

/// Get the XDG config directory for bikeshare.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "bikeshare").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("bikeshare.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

/// Expand `~`, `$VAR` and `${VAR}` in a path string.
pub fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}

impl Settings {
    /// Absolute-or-relative path of the CSV file for `city`.
    pub fn data_file(&self, city: City) -> PathBuf {
        self.data_dir.join(self.cities.file_for(city))
    }

    /// Expand shell variables and tilde in path-like fields.
    fn expand_paths(&mut self) {
        let expand = |p: &Path| PathBuf::from(expand_env_vars(p.to_string_lossy().as_ref()));
        self.data_dir = expand(&self.data_dir);
        self.cities.chicago = expand(&self.cities.chicago);
        self.cities.new_york_city = expand(&self.cities.new_york_city);
        self.cities.washington = expand(&self.cities.washington);
    }

    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            data_dir: overlay
                .data_dir
                .clone()
                .unwrap_or_else(|| self.data_dir.clone()),
            cities: self.cities.apply(&overlay.cities),
        }
    }

    /// Load settings with layered precedence using the XDG global config.
    pub fn load() -> Result<Self, ApplicationError> {
        Self::load_from(global_config_path().as_deref())
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional TOML file layered over the defaults; ignored if absent
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults
    /// 2. `config_file`
    /// 3. Environment variables: `BIKESHARE_*` prefix
    pub fn load_from(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(path) = config_file {
            if path.exists() {
                let raw = load_raw_settings(path)?;
                current = current.merge_with(&raw);
            }
        }

        current = Self::apply_env_overrides(current)?;
        current.expand_paths();

        Ok(current)
    }

    /// Apply BIKESHARE_* environment variables as explicit overrides.
    ///
    /// `BIKESHARE_DATA_DIR`, `BIKESHARE_CITIES__CHICAGO`, ...
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("BIKESHARE")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("data_dir") {
            settings.data_dir = PathBuf::from(val);
        }
        if let Ok(val) = config.get_string("cities.chicago") {
            settings.cities.chicago = PathBuf::from(val);
        }
        if let Ok(val) = config.get_string("cities.new_york_city") {
            settings.cities.new_york_city = PathBuf::from(val);
        }
        if let Ok(val) = config.get_string("cities.washington") {
            settings.cities.washington = PathBuf::from(val);
        }

        Ok(settings)
    }

    /// Override the data directory (command line flag).
    pub fn with_data_dir(mut self, data_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = data_dir {
            self.data_dir = PathBuf::from(expand_env_vars(dir.to_string_lossy().as_ref()));
        }
        self
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# bikeshare configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/bikeshare/bikeshare.toml
#   Env:    BIKESHARE_* environment variables (e.g. BIKESHARE_DATA_DIR)
#   CLI:    --data-dir

# Directory holding the city CSV files
# data_dir = "~/data/bikeshare"

[cities]
# File per city, relative to data_dir (absolute paths are used as is)
# chicago = "chicago.csv"
# new_york_city = "new_york_city.csv"
# washington = "washington.csv"
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
