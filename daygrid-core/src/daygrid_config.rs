//! User configuration for the grid and the time selects.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::constants::{minutes, DEFAULT_MINUTE_STEP};
use crate::error::{DaygridError, DaygridResult};
use crate::grid::WeekStart;

fn default_minute_step() -> u32 {
    DEFAULT_MINUTE_STEP
}

fn env_source() -> Environment {
    Environment::with_prefix("DAYGRID").try_parsing(true)
}

/// Configuration at ~/.config/daygrid/config.toml
///
/// Every key may be overridden from the environment with a `DAYGRID_`
/// prefix, e.g. `DAYGRID_WEEK_START=monday`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct DaygridConfig {
    #[serde(default)]
    pub week_start: WeekStart,

    /// Granularity of the minute select. Must divide 60.
    #[serde(default = "default_minute_step")]
    pub minute_step: u32,
}

impl Default for DaygridConfig {
    fn default() -> Self {
        DaygridConfig {
            week_start: WeekStart::default(),
            minute_step: DEFAULT_MINUTE_STEP,
        }
    }
}

impl DaygridConfig {
    pub fn config_path() -> DaygridResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| DaygridError::Config("Could not determine config directory".into()))?
            .join("daygrid");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location. A missing file yields the defaults.
    pub fn load() -> DaygridResult<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> DaygridResult<Self> {
        Self::load_with_env(path, env_source())
    }

    /// Load from `path` with `env` layered on top.
    pub fn load_with_env(path: &Path, env: Environment) -> DaygridResult<Self> {
        let config: DaygridConfig = Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(env)
            .build()
            .map_err(|e| DaygridError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| DaygridError::Config(e.to_string()))?;

        config.validate()?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    pub fn validate(&self) -> DaygridResult<()> {
        if self.minute_step == 0 || self.minute_step > 30 || 60 % self.minute_step != 0 {
            return Err(DaygridError::Config(format!(
                "minute_step must divide 60 and be at most 30, got {}",
                self.minute_step
            )));
        }
        Ok(())
    }

    /// Minute labels for the configured step.
    pub fn minutes(&self) -> Vec<String> {
        minutes(self.minute_step)
    }

    pub fn save_to(&self, path: &Path) -> DaygridResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| DaygridError::Config(e.to_string()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)
            .map_err(|e| DaygridError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> DaygridResult<()> {
        let contents = format!(
            "\
# daygrid configuration

# First column of the month grid (sunday or monday):
# week_start = \"{}\"

# Minute select granularity, must divide 60:
# minute_step = {}
",
            WeekStart::default(),
            DEFAULT_MINUTE_STEP
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                DaygridError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| DaygridError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
