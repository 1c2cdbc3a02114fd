//! Configuration module for doxbuild
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Project config (doxbuild.toml in the invocation directory)
//! 3. Built-in defaults (lowest priority)
//!
//! Every key has a default, so a missing config file is not an error.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{DoxbuildError, DoxbuildResult};

/// Name of the optional project configuration file.
pub const CONFIG_FILE: &str = "doxbuild.toml";

/// External generator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Generator executable, resolved through PATH
    #[serde(default = "default_program")]
    pub program: String,

    /// Base configuration file passed through on stdin, relative to cwd
    #[serde(default = "default_base_config")]
    pub base_config: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            base_config: default_base_config(),
        }
    }
}

fn default_program() -> String {
    "doxygen".to_string()
}

fn default_base_config() -> PathBuf {
    PathBuf::from("Doxyfile")
}

/// Documented-project configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Version marker file, relative to the project directory
    #[serde(default = "default_version_file")]
    pub version_file: PathBuf,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            version_file: default_version_file(),
        }
    }
}

fn default_version_file() -> PathBuf {
    PathBuf::from("VERSION")
}

/// Output tree configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory the generator emits into (it owns the layout inside)
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,

    /// Index artifact inside `dir` that the alias points at
    #[serde(default = "default_index")]
    pub index: PathBuf,

    /// Alias name created next to `dir`
    #[serde(default = "default_alias")]
    pub alias: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            index: default_index(),
            alias: default_alias(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("html")
}

fn default_index() -> PathBuf {
    PathBuf::from("index.html")
}

fn default_alias() -> PathBuf {
    PathBuf::from("index.html")
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub generator: GeneratorConfig,

    #[serde(default)]
    pub project: ProjectConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> DoxbuildResult<Self> {
        let (config, _warnings) = Self::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> DoxbuildResult<(Self, Vec<ConfigWarning>)> {
        let content = fs::read_to_string(path)?;

        let mut unknown_paths: Vec<String> = Vec::new();
        let deserializer = toml::de::Deserializer::new(&content);

        let config: Self = serde_ignored::deserialize(deserializer, |path| {
            unknown_paths.push(path.to_string());
        })
        .map_err(|e| DoxbuildError::InvalidConfig {
            file: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let warnings = unknown_paths
            .into_iter()
            .map(|key| ConfigWarning {
                key,
                file: path.to_path_buf(),
            })
            .collect();

        Ok((config, warnings))
    }

    /// Load from the given file if it exists, falling back to defaults.
    ///
    /// Parse errors are still fatal; only a missing file falls through.
    pub fn load_or_default(path: &Path) -> DoxbuildResult<(Self, Vec<ConfigWarning>)> {
        if path.exists() {
            Self::load_with_warnings(path)
        } else {
            Ok((Self::default(), Vec::new()))
        }
    }

    /// Full path of the index artifact the alias points at.
    pub fn index_target(&self) -> PathBuf {
        self.output.dir.join(&self.output.index)
    }
}
