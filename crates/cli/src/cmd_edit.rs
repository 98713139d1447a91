// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `add` and `remove` command implementations.

use tynisearch::cli::{Cli, EditArgs};
use tynisearch::error::ExitCode;
use tynisearch::snapshot;

/// Run the `add` command.
pub fn insert(cli: &Cli, args: &EditArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let mut automaton = snapshot::read_file(&args.snapshot, cli.rebuild_policy(&cwd)?)?;

    let before = automaton.len();
    automaton.insert(&args.keywords);
    snapshot::write_file(&args.snapshot, &automaton)?;

    eprintln!("added {} keywords", automaton.len() - before);
    Ok(ExitCode::Success)
}

/// Run the `remove` command.
pub fn delete(cli: &Cli, args: &EditArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let mut automaton = snapshot::read_file(&args.snapshot, cli.rebuild_policy(&cwd)?)?;

    let before = automaton.len();
    automaton.delete(&args.keywords);
    snapshot::write_file(&args.snapshot, &automaton)?;

    eprintln!("removed {} keywords", before - automaton.len());
    Ok(ExitCode::Success)
}
