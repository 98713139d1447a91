// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! tynisearch CLI entry point.

use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt};

use tynisearch::cli::{Cli, Command};
use tynisearch::error::ExitCode;

mod cmd_build;
mod cmd_edit;
mod cmd_inspect;
mod cmd_scan;

fn init_logging() {
    let filter =
        EnvFilter::try_from_env("TYNISEARCH_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("tynisearch: {}", e);
            match e.downcast_ref::<tynisearch::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    tracing::trace!("command starting");

    match &cli.command {
        None => {
            // Show help for bare invocation
            Cli::command().print_help()?;
            println!();
            Ok(ExitCode::Success)
        }
        Some(Command::Build(args)) => cmd_build::run(&cli, args),
        Some(Command::Add(args)) => cmd_edit::insert(&cli, args),
        Some(Command::Remove(args)) => cmd_edit::delete(&cli, args),
        Some(Command::Scan(args)) => cmd_scan::scan(&cli, args),
        Some(Command::Lookup(args)) => cmd_scan::lookup(&cli, args),
        Some(Command::List(args)) => cmd_inspect::list(&cli, args),
        Some(Command::Stats(args)) => cmd_inspect::stats(&cli, args),
    }
}
