mod change;
mod cli;
mod columns;
mod error;
mod index;
mod list;
mod remove;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};

fn main() -> Result<ExitCode> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match cli::usage_error(&err) {
            Some(text) => {
                eprintln!("{}", text);
                return Ok(ExitCode::from(2));
            }
            None => err.exit(),
        },
    };
    init_logging(cli.verbose);

    let mirror = cli.mirror.clone();
    match cli.into_command() {
        Commands::Change(args) => change::run(args).map(|()| ExitCode::SUCCESS),
        Commands::List(args) => list::run(args, &mirror),
        Commands::Remove(args) => remove::run(args).map(|()| ExitCode::SUCCESS),
    }
}

/// Warnings only by default; `--verbose` turns on this crate's debug output.
/// `RUST_LOG` still takes precedence.
fn init_logging(verbose: bool) {
    let level = if verbose { "ron=debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .format_target(false)
        .init();
}
