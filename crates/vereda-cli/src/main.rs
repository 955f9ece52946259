//! Vereda - interactive shell for building and querying graphs.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod demo;
mod output;
mod repl;
mod repl_commands;

#[cfg(test)]
mod output_tests;

/// Vereda - build graphs and run BFS, DFS and path queries interactively
#[derive(Parser, Debug)]
#[command(name = "vereda")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    repl: repl::ReplArgs,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the interactive shell (the default)
    Repl,
    /// Walk through the engine on two small sample graphs
    Demo,
}

fn main() -> anyhow::Result<()> {
    // Default to warn so the shell output stays clean; RUST_LOG=debug
    // surfaces the traversal logs from vereda-core.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "starting");

    match cli.command {
        Some(Command::Demo) => demo::run(),
        Some(Command::Repl) | None => repl::run(&cli.repl),
    }
}
