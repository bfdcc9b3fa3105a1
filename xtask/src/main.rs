mod cmd;
mod repo;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Repository maintenance tasks", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the local quality gate (fetch/check/test/fmt/clippy/build/smoke).
    Preflight,
    /// Run the release binary's built-in parser self-test (`-T`).
    Smoke {
        /// Use the debug build instead of --release.
        #[arg(long)]
        debug: bool,
    },
}

fn main() {
    if let Err(err) = real_main() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn real_main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Preflight => cmd::preflight::run()?,
        Command::Smoke { debug } => cmd::smoke::run(!debug)?,
    }
    Ok(())
}
