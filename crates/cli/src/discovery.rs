// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Locating the rebuild-policy config.
//!
//! An explicit path (`-C` or `TYNISEARCH_CONFIG`) must exist. Otherwise the
//! nearest `tynisearch.toml` between the working directory and the enclosing
//! git root is used, and without one the built-in defaults apply.

use std::path::{Path, PathBuf};

use crate::config::{self, CONFIG_FILE_NAME, Config};
use crate::error::{Error, Result};

/// Loads the effective config for a command run from `cwd`.
pub fn load_config(explicit: Option<&Path>, cwd: &Path) -> Result<Config> {
    let path = match explicit {
        Some(path) if path.is_file() => Some(path.to_path_buf()),
        Some(path) => {
            return Err(Error::Config {
                message: format!("config file not found: {}", path.display()),
                path: Some(path.to_path_buf()),
            });
        }
        None => nearest_config(cwd),
    };

    let Some(path) = path else {
        tracing::debug!("no {} found, rebuild policy defaults to eager", CONFIG_FILE_NAME);
        return Ok(Config {
            version: config::SUPPORTED_VERSION,
            ..Config::default()
        });
    };
    tracing::debug!("loading config from {}", path.display());
    config::load_with_warnings(&path)
}

/// Nearest config file in `cwd` or its ancestors, not looking past the
/// directory that holds `.git`.
fn nearest_config(cwd: &Path) -> Option<PathBuf> {
    for dir in cwd.ancestors() {
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        if dir.join(".git").exists() {
            break;
        }
    }
    None
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
