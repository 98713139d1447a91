// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `scan` and `lookup` command implementations.

use tynisearch::cli::{Cli, LookupArgs, OutputFormat, ScanArgs};
use tynisearch::error::ExitCode;
use tynisearch::{input, snapshot};

/// Run the `scan` command.
pub fn scan(cli: &Cli, args: &ScanArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let mut automaton = snapshot::read_file(&args.snapshot, cli.rebuild_policy(&cwd)?)?;
    // A scan over stale links silently misses matches.
    if automaton.needs_rebuild() {
        automaton.rebuild_failure_links();
    }

    let text = input::text_or_stdin(args.text.as_deref())?;
    let found = automaton.search_in_sentence(&text);

    match args.output {
        OutputFormat::Text => {
            for keyword in &found {
                println!("{}", keyword);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string(&found)?);
        }
    }
    Ok(ExitCode::Success)
}

/// Run the `lookup` command.
pub fn lookup(cli: &Cli, args: &LookupArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let automaton = snapshot::read_file(&args.snapshot, cli.rebuild_policy(&cwd)?)?;

    let found = automaton.search_keyword(&args.word);
    println!("{}", found);
    Ok(if found {
        ExitCode::Success
    } else {
        ExitCode::NotFound
    })
}
