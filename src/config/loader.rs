//! Configuration loading from disk.
//!
//! Resolution order: the production candidate, then the sample candidate, each
//! looked up across the search directories in order. The first directory that
//! holds a candidate decides that candidate's fate; a broken file is not
//! skipped in favour of a later directory.
//!
//! Only a missing, unreadable or unparseable production file falls back to the
//! sample. A production file that parses but fails validation is rejected.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::schema::GatewayConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Production configuration file name.
pub const PRODUCTION_FILE: &str = "config.toml";

/// Sample configuration file name, used when no production file loads.
pub const SAMPLE_FILE: &str = "sample.config.toml";

/// Default search directories, in lookup order.
pub const DEFAULT_SEARCH_DIRS: [&str; 2] = ["cfg", "settings"];

/// Why a single candidate file could not be used.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} not found in any search directory")]
    NotFound { name: &'static str },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid configuration in {}: {}", .path.display(), join_errors(.errors))]
    Validation {
        path: PathBuf,
        errors: Vec<ValidationError>,
    },
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl ConfigError {
    /// Whether resolution may move on to the next candidate.
    pub fn allows_fallback(&self) -> bool {
        !matches!(self, ConfigError::Validation { .. })
    }
}

/// No usable configuration. Fatal at startup.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("production configuration rejected: {0}")]
    Rejected(#[source] ConfigError),

    #[error("no configuration could be loaded (production: {production}; sample: {sample})")]
    Exhausted {
        production: ConfigError,
        sample: ConfigError,
    },
}

/// Which file the snapshot came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Production(PathBuf),
    Sample(PathBuf),
}

impl ConfigSource {
    pub fn path(&self) -> &Path {
        match self {
            ConfigSource::Production(p) | ConfigSource::Sample(p) => p,
        }
    }
}

/// A resolved configuration snapshot and its origin.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub config: GatewayConfig,
    pub source: ConfigSource,
}

/// Resolve the configuration across `search_dirs`.
pub fn resolve<P: AsRef<Path>>(search_dirs: &[P]) -> Result<ResolvedConfig, ConfigLoadError> {
    let production = match load_candidate(search_dirs, PRODUCTION_FILE) {
        Ok((config, path)) => {
            return Ok(ResolvedConfig {
                config,
                source: ConfigSource::Production(path),
            })
        }
        Err(e) if e.allows_fallback() => e,
        Err(e) => return Err(ConfigLoadError::Rejected(e)),
    };

    tracing::warn!(reason = %production, "No productive config loaded, falling back to sample");

    match load_candidate(search_dirs, SAMPLE_FILE) {
        Ok((config, path)) => Ok(ResolvedConfig {
            config,
            source: ConfigSource::Sample(path),
        }),
        Err(sample) => Err(ConfigLoadError::Exhausted { production, sample }),
    }
}

fn load_candidate<P: AsRef<Path>>(
    search_dirs: &[P],
    name: &'static str,
) -> Result<(GatewayConfig, PathBuf), ConfigError> {
    let path = search_dirs
        .iter()
        .map(|dir| dir.as_ref().join(name))
        .find(|path| path.is_file())
        .ok_or(ConfigError::NotFound { name })?;

    let config = load_config(&path)?;
    Ok((config, path))
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<GatewayConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config: GatewayConfig = toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    validate_config(&config).map_err(|errors| ConfigError::Validation {
        path: path.to_path_buf(),
        errors,
    })?;

    Ok(config)
}
