// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `list` and `stats` command implementations.

use serde::Serialize;

use tynisearch::cli::{Cli, OutputFormat, SnapshotArgs, StatsArgs};
use tynisearch::error::ExitCode;
use tynisearch::snapshot;

#[derive(Serialize)]
struct Stats {
    keywords: usize,
    nodes: usize,
}

/// Run the `list` command.
pub fn list(cli: &Cli, args: &SnapshotArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let automaton = snapshot::read_file(&args.snapshot, cli.rebuild_policy(&cwd)?)?;

    for keyword in automaton.all_keywords() {
        println!("{}", keyword);
    }
    Ok(ExitCode::Success)
}

/// Run the `stats` command.
pub fn stats(cli: &Cli, args: &StatsArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let automaton = snapshot::read_file(&args.snapshot, cli.rebuild_policy(&cwd)?)?;

    let stats = Stats {
        keywords: automaton.len(),
        nodes: automaton.node_count(),
    };
    match args.output {
        OutputFormat::Text => {
            println!("keywords: {}", stats.keywords);
            println!("nodes: {}", stats.nodes);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string(&stats)?);
        }
    }
    Ok(ExitCode::Success)
}
