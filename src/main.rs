use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use std::io;
use tracing_subscriber::EnvFilter;

mod error;
mod loader;
mod models;
mod snippet;
mod summary;

use models::Config;

/// Print a one-line summary and a body snippet for every issue in ./open_issues.json
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Accepted and ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    rest: Vec<String>,
}

fn main() {
    let _args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_ansi(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    run(&Config::default()).unwrap_or_else(|err| {
        eprintln!("{}: {}", "Error".red().bold(), err);
        std::process::exit(1);
    });
}

fn run(cfg: &Config) -> Result<()> {
    let records = loader::load_records(&cfg.input_path)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    summary::write_summaries(records, cfg, &mut out)?;

    Ok(())
}
