// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::automaton::RebuildPolicy;
use crate::discovery;
use crate::error::Result;

/// Aho-Corasick keyword search over JSON trie snapshots
#[derive(Parser)]
#[command(name = "tynisearch")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "TYNISEARCH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the configured failure-link rebuild policy
    #[arg(long, global = true, value_name = "POLICY")]
    pub rebuild: Option<RebuildPolicy>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Effective rebuild policy: `--rebuild` first, then the config file.
    pub fn rebuild_policy(&self, cwd: &Path) -> Result<RebuildPolicy> {
        if let Some(policy) = self.rebuild {
            return Ok(policy);
        }
        let config = discovery::load_config(self.config.as_deref(), cwd)?;
        Ok(config.automaton.rebuild)
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Build a snapshot from a keyword list
    Build(BuildArgs),
    /// Insert keywords into a snapshot
    Add(EditArgs),
    /// Delete keywords from a snapshot
    Remove(EditArgs),
    /// Report every keyword occurring in a text
    Scan(ScanArgs),
    /// Check whether a single keyword is stored
    Lookup(LookupArgs),
    /// Print all stored keywords
    List(SnapshotArgs),
    /// Print node and keyword counts
    Stats(StatsArgs),
}

#[derive(clap::Args)]
pub struct BuildArgs {
    /// Newline-separated keyword file (reads stdin when omitted)
    #[arg(value_name = "KEYWORDS")]
    pub keywords: Option<PathBuf>,

    /// Snapshot file to write
    #[arg(short = 'o', long = "out", value_name = "SNAPSHOT")]
    pub out: PathBuf,
}

#[derive(clap::Args)]
pub struct EditArgs {
    /// Snapshot file to update in place
    #[arg(value_name = "SNAPSHOT")]
    pub snapshot: PathBuf,

    /// Keywords to insert or delete
    #[arg(value_name = "KEYWORD", required = true)]
    pub keywords: Vec<String>,
}

#[derive(clap::Args)]
pub struct ScanArgs {
    /// Snapshot file to load
    #[arg(value_name = "SNAPSHOT")]
    pub snapshot: PathBuf,

    /// Text to scan (reads stdin when omitted)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(clap::Args)]
pub struct LookupArgs {
    /// Snapshot file to load
    #[arg(value_name = "SNAPSHOT")]
    pub snapshot: PathBuf,

    /// Keyword to look up
    #[arg(value_name = "WORD")]
    pub word: String,
}

#[derive(clap::Args)]
pub struct SnapshotArgs {
    /// Snapshot file to load
    #[arg(value_name = "SNAPSHOT")]
    pub snapshot: PathBuf,
}

#[derive(clap::Args)]
pub struct StatsArgs {
    /// Snapshot file to load
    #[arg(value_name = "SNAPSHOT")]
    pub snapshot: PathBuf,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
