use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use pagedb::{Repl, Shutdown};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Interactive front end to a single in-memory table.
#[derive(Parser, Debug)]
#[command(name = "pagedb", version, about)]
struct Args {
    /// Log diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Do not print the `db > ` prompt
    #[arg(long)]
    no_prompt: bool,
}

fn main() -> ExitCode {
    match run() {
        Ok(shutdown) if shutdown.is_success() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<Shutdown> {
    let args = Args::parse();
    init_logging(args.verbose);
    debug!(?args, "starting");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let shutdown = Repl::new(stdin.lock(), stdout.lock())
        .with_prompt(!args.no_prompt)
        .run()?;
    Ok(shutdown)
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("pagedb=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pagedb=warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
