// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Build command implementation.

use tynisearch::automaton::Automaton;
use tynisearch::cli::{BuildArgs, Cli};
use tynisearch::error::ExitCode;
use tynisearch::{input, snapshot};

/// Run the `build` command.
pub fn run(cli: &Cli, args: &BuildArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let policy = cli.rebuild_policy(&cwd)?;

    let keywords = input::read_keywords(args.keywords.as_deref())?;
    tracing::debug!("building automaton from {} keywords", keywords.len());

    let mut automaton = Automaton::new(policy);
    automaton.insert(&keywords);
    snapshot::write_file(&args.out, &automaton)?;

    eprintln!(
        "wrote {} keywords ({} nodes) to {}",
        automaton.len(),
        automaton.node_count(),
        args.out.display()
    );
    Ok(ExitCode::Success)
}
