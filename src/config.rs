//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Config file: `--config <FILE>` if given, else `$XDG_CONFIG_HOME/maptree/maptree.toml`
//! 3. Environment variables: `MAPTREE_*` prefix

use std::fmt;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::errors::{TreeError, TreeResult};
use crate::path::DEFAULT_SEPARATOR;
use crate::visit::ROOT_LABEL;

/// How visited nodes are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `path: value` line per node
    Lines,
    /// Box-drawing tree
    Tree,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Lines => write!(f, "lines"),
            OutputFormat::Tree => write!(f, "tree"),
        }
    }
}

/// Effective settings after all layers are applied.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Token naming the root in visited paths
    pub root_label: String,
    /// Separator for dotted paths on the command line
    pub separator: String,
    /// Default output format
    pub format: OutputFormat,
    /// Colorize output
    pub color: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            root_label: ROOT_LABEL.into(),
            separator: DEFAULT_SEPARATOR.into(),
            format: OutputFormat::Lines,
            color: true,
        }
    }
}

/// Get the XDG config directory for maptree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "maptree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("maptree.toml"))
}

impl Settings {
    /// Load settings with layered precedence.
    ///
    /// An explicit `config_file` must exist; the global file is optional.
    #[instrument(level = "debug")]
    pub fn load(config_file: Option<&Path>) -> TreeResult<Self> {
        let defaults = Settings::default();
        let mut builder = Config::builder()
            .set_default("root_label", defaults.root_label)
            .map_err(config_err)?
            .set_default("separator", defaults.separator)
            .map_err(config_err)?
            .set_default("format", defaults.format.to_string())
            .map_err(config_err)?
            .set_default("color", defaults.color)
            .map_err(config_err)?;

        match config_file {
            Some(path) => {
                debug!("Using config file: {}", path.display());
                builder = builder.add_source(File::from(path).required(true));
            }
            None => {
                if let Some(global_path) = global_config_path() {
                    debug!("Global config candidate: {}", global_path.display());
                    builder = builder.add_source(File::from(global_path).required(false));
                }
            }
        }

        builder = builder.add_source(
            Environment::with_prefix("MAPTREE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(config_err)?;
        let settings: Self = config.try_deserialize().map_err(config_err)?;
        debug!("Effective settings: {:?}", settings);
        Ok(settings)
    }

    /// Serialize the effective settings as TOML.
    pub fn to_toml(&self) -> TreeResult<String> {
        toml::to_string_pretty(self).map_err(|e| TreeError::Config {
            message: format!("serialize settings: {}", e),
        })
    }

    /// Commented template for a config file.
    pub fn template() -> String {
        let defaults = Settings::default();
        format!(
            r#"# maptree configuration
# Location: $XDG_CONFIG_HOME/maptree/maptree.toml (or pass --config)
# Every key can be overridden with MAPTREE_<KEY>, e.g. MAPTREE_ROOT_LABEL=top

# Token naming the root in visited paths
root_label = "{}"

# Separator for dotted paths on the command line
separator = "{}"

# Output format: "lines" or "tree"
format = "{}"

# Colorize output
color = {}
"#,
            defaults.root_label, defaults.separator, defaults.format, defaults.color
        )
    }
}

fn config_err(e: ConfigError) -> TreeError {
    TreeError::Config {
        message: e.to_string(),
    }
}
