// crates/boom-cli/src/main.rs - CLI Application Entry Point
//
// boom keeps named lists of key/value items and hands values back to you:
//
//   boom urls                          # create (or show) a list
//   boom urls gh https://github.com    # add an item
//   boom gh                            # copy the value to the clipboard
//   boom echo gh                       # print it instead
//   boom urls gh delete                # delete the item
//
// ARCHITECTURE:
//   cli.rs        positional words (clap)
//   context.rs    config, backend and services, built once
//   commands/     hands the words to the core session
//   services/     clipboard, browser, editor, terminal effects
//
// Exit status is 0 on success and 1 on any error. Diagnostics go to stderr
// (filter with BOOM_LOG, e.g. BOOM_LOG=debug), so stdout stays pipe-clean.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

mod cli; // Command-line interface definitions
mod commands; // Handing the words to the session
mod context; // Configuration, backend and services
mod services; // Clipboard, browser, editor, terminal
mod stdin; // Confirmation prompt input

use cli::Cli;
use context::Context;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_env("BOOM_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut ctx = Context::new()?;
    commands::handle(&mut ctx, &cli)
}
