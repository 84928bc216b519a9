//! boolmin configuration
//!
//! Handles loading of `boolmin.yaml` (or `.boolmin.yaml` / `boolmin.json`),
//! which supplies CLI defaults. Command-line flags always win over the file.

use crate::error::{Error, Result};
use crate::minimize::{Mode, MAX_VARS, MIN_VARS};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File names searched by [`Config::discover`], in order
pub const CONFIG_FILES: [&str; 3] = ["boolmin.yaml", ".boolmin.yaml", "boolmin.json"];

/// Top-level configuration file
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct Config {
    /// Defaults for simplification requests
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Output rendering
    #[serde(default)]
    pub output: OutputConfig,
}

/// Request defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DefaultsConfig {
    /// Number of variables when `--vars` is not given
    #[serde(default = "default_num_vars")]
    pub num_vars: usize,

    /// Mode when `--mode` is not given
    #[serde(default)]
    pub mode: Mode,
}

fn default_num_vars() -> usize {
    3
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        DefaultsConfig {
            num_vars: default_num_vars(),
            mode: Mode::Sop,
        }
    }
}

/// How results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,

    /// Pretty-print JSON output
    #[serde(default = "default_true")]
    pub pretty: bool,
}

fn default_true() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            format: OutputFormat::Text,
            pretty: true,
        }
    }
}

impl Config {
    /// Load a config file; `.json` files are read as JSON, everything else as YAML
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(Error::Io)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let config: Config = if is_json {
            serde_json::from_str(&content)?
        } else {
            serde_norway::from_str(&content)?
        };

        config.validate()?;
        Ok(config)
    }

    /// Load the first config file found in `dir`, or the defaults if there is none
    pub fn discover(dir: &Path) -> Result<Self> {
        for name in CONFIG_FILES {
            let candidate = dir.join(name);
            if candidate.is_file() {
                log::debug!("using config {}", candidate.display());
                return Self::load(&candidate);
            }
        }
        Ok(Config::default())
    }

    pub fn validate(&self) -> Result<()> {
        let n = self.defaults.num_vars;
        if !(MIN_VARS..=MAX_VARS).contains(&n) {
            return Err(Error::Config(format!(
                "defaults.num_vars must be between {} and {}, got {}",
                MIN_VARS, MAX_VARS, n
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.defaults.num_vars, 3);
        assert_eq!(config.defaults.mode, Mode::Sop);
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(config.output.pretty);
    }

    #[test]
    fn test_partial_yaml() {
        let config: Config = serde_norway::from_str("defaults:\n  mode: POS\n").unwrap();
        assert_eq!(config.defaults.mode, Mode::Pos);
        assert_eq!(config.defaults.num_vars, 3);
        assert_eq!(config.output, OutputConfig::default());
    }

    #[test]
    fn test_mode_is_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("boolmin.yaml");
        fs::write(&path, "defaults:\n  mode: pos\n").unwrap();
        assert_eq!(Config::load(&path).unwrap().defaults.mode, Mode::Pos);

        let config: Config = serde_norway::from_str("defaults:\n  mode: sop\n").unwrap();
        assert_eq!(config.defaults.mode, Mode::Sop);
    }

    #[test]
    fn test_load_yaml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("boolmin.yaml");
        fs::write(
            &path,
            "defaults:\n  num_vars: 4\noutput:\n  format: json\n  pretty: false\n",
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.defaults.num_vars, 4);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(!config.output.pretty);
    }

    #[test]
    fn test_load_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("boolmin.json");
        let body = r#"{"defaults": {"num_vars": 2, "mode": "POS"}}"#;
        fs::write(&path, body).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.defaults.num_vars, 2);
        assert_eq!(config.defaults.mode, Mode::Pos);
    }

    #[test]
    fn test_invalid_num_vars_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("boolmin.yaml");
        fs::write(&path, "defaults:\n  num_vars: 7\n").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_discover() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(Config::discover(dir.path()).unwrap(), Config::default());

        fs::write(
            dir.path().join(".boolmin.yaml"),
            "defaults:\n  num_vars: 2\n",
        )
        .unwrap();
        assert_eq!(Config::discover(dir.path()).unwrap().defaults.num_vars, 2);
    }
}
