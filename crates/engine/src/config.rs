//! Configuration for simulation runs.
//!
//! This module defines the values the input layer falls back to when the user does not
//! supply them. It provides:
//! 1. **Defaults:** Baseline quantum and cache capacity.
//! 2. **Structures:** Per-engine configuration sections.
//! 3. **Loading:** Deserialization from a JSON document or file.
//!
//! Every field is optional in JSON; missing fields take their defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::common::ConfigError;

/// Default configuration constants.
mod defaults {
    /// Round-Robin time quantum in ticks.
    pub const QUANTUM: u64 = 2;

    /// Number of resident pages in the LRU cache.
    pub const CAPACITY: usize = 3;
}

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use ossim_core::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.scheduler.quantum, 2);
/// assert_eq!(config.cache.capacity, 3);
///
/// let config = Config::from_json_str(r#"{ "cache": { "capacity": 4 } }"#).unwrap();
/// assert_eq!(config.cache.capacity, 4);
/// assert_eq!(config.scheduler.quantum, 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Round-Robin scheduler settings.
    #[serde(default)]
    pub scheduler: SchedulerConfig,
    /// LRU cache settings.
    #[serde(default)]
    pub cache: CacheConfig,
}

impl Config {
    /// Parses a configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the text is not a valid configuration document.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read and
    /// [`ConfigError::Parse`] if its contents are invalid.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Self::from_json_str(&text)
    }
}

/// Round-Robin scheduler settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SchedulerConfig {
    /// Time quantum used when none is given on the command line.
    #[serde(default = "SchedulerConfig::default_quantum")]
    pub quantum: u64,
}

impl SchedulerConfig {
    fn default_quantum() -> u64 {
        defaults::QUANTUM
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            quantum: defaults::QUANTUM,
        }
    }
}

/// LRU cache settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CacheConfig {
    /// Capacity used when none is given on the command line.
    #[serde(default = "CacheConfig::default_capacity")]
    pub capacity: usize,

    /// Accept capacity 0 instead of rejecting it.
    ///
    /// With capacity 0 every new page still becomes resident, so the resident set grows
    /// past the nominal capacity. Off by default.
    #[serde(default)]
    pub allow_zero_capacity: bool,
}

impl CacheConfig {
    fn default_capacity() -> usize {
        defaults::CAPACITY
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: defaults::CAPACITY,
            allow_zero_capacity: false,
        }
    }
}
