mod aggregate;
mod scan;

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// A Rust CLI tool that aggregates step timings from a training-run log:
/// scan for `steps = <n> (<secs> sec)` lines, sum the elapsed time, and
/// report the final step count, total time, and throughput.
#[derive(Parser, Debug)]
#[command(name = "agglog", version, about)]
pub struct Cli {
    /// Training log file to aggregate
    #[arg(value_name = "LOG_FILE")]
    log_file: PathBuf,

    /// Extra logging (per-line scan decisions)
    #[arg(short, long)]
    verbose: bool,

    /// Suppress warnings, only errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };
    // Diagnostics go to stderr so stdout stays exactly one summary line.
    tracing_subscriber::fmt()
        .with_target(false)
        .with_thread_ids(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(?cli, "parsed CLI arguments");

    if let Err(msg) = run(&cli) {
        eprintln!("error: {msg}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let line = aggregate::summarize(&cli.log_file).map_err(|e| e.to_string())?;
    println!("{line}");
    Ok(())
}
