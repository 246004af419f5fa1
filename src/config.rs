use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::SimError;

#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Deserialize, Default)]
pub struct GeneralConfig {
    /// Emit a trace line per pipeline stage per cycle.
    #[serde(default)]
    pub trace_instructions: bool,

    /// Power-on state of the data-forwarding unit. The shell's `f` command
    /// overrides this at runtime.
    #[serde(default)]
    pub forwarding: bool,
}

impl Config {
    /// Loads the configuration from `path`. A missing file yields the
    /// defaults so the simulator runs without any configuration present.
    pub fn load(path: &str) -> Result<Self, SimError> {
        if !Path::new(path).exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| SimError::ConfigRead {
            path: path.to_string(),
            source,
        })?;
        Ok(toml::from_str(&content)?)
    }
}
