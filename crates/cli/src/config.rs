// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! Handles tynisearch.toml parsing with version validation and unknown key
//! warnings.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::automaton::RebuildPolicy;
use crate::error::{Error, Result};

/// Config file name looked up by discovery.
pub const CONFIG_FILE_NAME: &str = "tynisearch.toml";

/// Supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Known top-level keys in the config.
const KNOWN_KEYS: &[&str] = &["version", "automaton"];

/// Known `[automaton]` keys in the config.
const KNOWN_AUTOMATON_KEYS: &[&str] = &["rebuild"];

/// Minimum config structure for version checking.
#[derive(Deserialize)]
struct VersionOnly {
    version: Option<i64>,
}

/// Config with flexible parsing that captures unknown keys.
#[derive(Deserialize)]
struct FlexibleConfig {
    version: i64,

    #[serde(default)]
    automaton: Option<toml::Value>,

    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

/// Full configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Automaton configuration.
    #[serde(default)]
    pub automaton: AutomatonConfig,
}

/// `[automaton]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AutomatonConfig {
    /// When failure links are rebuilt after a mutation.
    #[serde(default = "AutomatonConfig::default_rebuild")]
    pub rebuild: RebuildPolicy,
}

impl AutomatonConfig {
    pub(crate) fn default_rebuild() -> RebuildPolicy {
        RebuildPolicy::Eager
    }
}

impl Default for AutomatonConfig {
    fn default() -> Self {
        Self {
            rebuild: Self::default_rebuild(),
        }
    }
}

/// Load and validate config from a file path.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse(&content, path)
}

/// Load config with warnings for unknown keys.
pub fn load_with_warnings(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_with_warnings(&content, path)
}

/// Parse config from string content (strict mode).
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    check_version(content, path)?;

    toml::from_str(content).map_err(|e| Error::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    })
}

/// Parse config, warning on unknown keys instead of rejecting them.
pub fn parse_with_warnings(content: &str, path: &Path) -> Result<Config> {
    check_version(content, path)?;

    let flexible: FlexibleConfig = toml::from_str(content).map_err(|e| Error::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    })?;

    for key in flexible.unknown.keys() {
        if !KNOWN_KEYS.contains(&key.as_str()) {
            warn_unknown_key(path, key);
        }
    }

    let automaton = match flexible.automaton {
        Some(toml::Value::Table(t)) => {
            for key in t.keys() {
                if !KNOWN_AUTOMATON_KEYS.contains(&key.as_str()) {
                    warn_unknown_key(path, &format!("automaton.{}", key));
                }
            }
            let rebuild = match t.get("rebuild") {
                Some(value) => value.clone().try_into().map_err(|e: toml::de::Error| {
                    Error::Config {
                        message: format!("automaton.rebuild: {}", e),
                        path: Some(path.to_path_buf()),
                    }
                })?,
                None => AutomatonConfig::default_rebuild(),
            };
            AutomatonConfig { rebuild }
        }
        Some(_) => {
            return Err(Error::Config {
                message: "automaton must be a table".to_string(),
                path: Some(path.to_path_buf()),
            });
        }
        None => AutomatonConfig::default(),
    };

    Ok(Config {
        version: flexible.version,
        automaton,
    })
}

fn check_version(content: &str, path: &Path) -> Result<()> {
    let version_check: VersionOnly = toml::from_str(content).map_err(|e| Error::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    })?;

    let version = version_check.version.ok_or_else(|| Error::Config {
        message: "missing required field: version".to_string(),
        path: Some(path.to_path_buf()),
    })?;

    if version != SUPPORTED_VERSION {
        return Err(Error::Config {
            message: format!(
                "unsupported config version {} (supported: {})",
                version, SUPPORTED_VERSION
            ),
            path: Some(path.to_path_buf()),
        });
    }
    Ok(())
}

fn warn_unknown_key(path: &Path, key: &str) {
    eprintln!(
        "tynisearch: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
