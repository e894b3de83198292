use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".locgenrc.json";

/// Optional project configuration, loaded from `.locgenrc.json` in the
/// working directory. Command-line flags override every field.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Where generated modules are written when `-o` is not given.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    /// Extension of the tabular input files, without the dot.
    #[serde(default = "default_extension")]
    pub extension: String,
}

fn default_output_dir() -> String {
    ".".to_string()
}

fn default_extension() -> String {
    "csv".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            extension: default_extension(),
        }
    }
}

impl Config {
    /// Load the config file from the working directory, falling back to
    /// defaults when it does not exist.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE_NAME))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.extension.is_empty() || self.extension.starts_with('.') {
            anyhow::bail!(
                "Invalid 'extension' value \"{}\": expected a bare extension like \"csv\"",
                self.extension
            );
        }
        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let json = serde_json::to_string_pretty(&Config::default())?;
    Ok(json + "\n")
}
