use std::process;
use std::path::PathBuf;
use clap::Parser;
use clap::error::ErrorKind;
use anyhow::{Result, Context};
use colored::*;
use indoc::indoc;
use log::{info, error};
use simple_logger::SimpleLogger;

use vecsum::core::config::BenchConfig;
use vecsum::core::error::BenchError;
use vecsum::core::runner::BenchRunner;
use vecsum::reporters::text::TextReporter;

const USAGE: &str = "Usage: vecsum vector_size indices_sz loops";

const AFTER_HELP: &str = indoc! {"
    Examples:
      vecsum 1000000 1000 1000000     profile-sized run
      vecsum --seed 42 10 10 1        reproducible run with debug dump

    A vector_size below 50 with a single loop also prints both vectors and
    the index buffer.
"};

/// Exit status for usage and parameter errors.
const EXIT_USAGE: i32 = 1;
/// Exit status for failures while running the benchmark.
const EXIT_RUNTIME: i32 = 2;


#[derive(Parser)]
#[command(author, version, about, long_about = None, after_help = AFTER_HELP)]
struct Cli {
    /// Length of the 8-bit and 32-bit vectors
    vector_size: Option<String>,

    /// Number of random indices drawn per loop
    index_size: Option<String>,

    /// Number of shuffle and sum rounds
    loops: Option<String>,

    /// Seed the index generator for a reproducible run
    #[arg(short, long)]
    seed: Option<u64>,

    /// Load parameters from a TOML or JSON file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Debug-level logging
    #[arg(short, long)]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> Result<()> {

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            let _ = e.print();
            process::exit(EXIT_USAGE);
        }
    };


    let log_level = if cli.verbose {
        log::LevelFilter::Debug
    } else if cli.quiet {
        log::LevelFilter::Warn
    } else {
        log::LevelFilter::Info
    };

    SimpleLogger::new()
        .with_level(log_level)
        .init()
        .context("Failed to initialize logger")?;

    info!("vecsum v{}", env!("CARGO_PKG_VERSION"));


    let config = match build_config(&cli) {
        Ok(Some(config)) => config,
        Ok(None) => {
            println!("{}", USAGE);
            process::exit(EXIT_USAGE);
        }
        Err(e @ BenchError::InvalidParameter(_)) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            eprintln!("{}", USAGE);
            process::exit(EXIT_USAGE);
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(EXIT_RUNTIME);
        }
    };


    let mut runner = match BenchRunner::new(config, TextReporter::stdout()) {
        Ok(runner) => runner,
        Err(e) => {
            error!("Failed to set up benchmark: {}", e);
            process::exit(EXIT_RUNTIME);
        }
    };

    if let Err(e) = runner.execute() {
        error!("Benchmark failed: {}", e);
        process::exit(EXIT_RUNTIME);
    }

    Ok(())
}


/// Resolve the benchmark parameters from the command line and optional config file.
///
/// Returns `Ok(None)` when there is not enough to run: fewer than three
/// positional arguments and no config file.
fn build_config(cli: &Cli) -> vecsum::core::error::Result<Option<BenchConfig>> {
    let positional = match (&cli.vector_size, &cli.index_size, &cli.loops) {
        (Some(vector_size), Some(index_size), Some(loops)) => Some((
            BenchConfig::parse_count::<usize>("vector_size", vector_size)?,
            BenchConfig::parse_count::<usize>("index_size", index_size)?,
            BenchConfig::parse_count::<u32>("loops", loops)?,
        )),
        (None, None, None) => None,
        _ => return Ok(None),
    };

    let mut config = match (&cli.config, positional) {
        (Some(path), positional) => {
            let mut config = BenchConfig::from_file(path)?;
            if let Some((vector_size, index_size, loops)) = positional {
                config.vector_size = vector_size;
                config.index_size = index_size;
                config.loops = loops;
            }
            config
        }
        (None, Some((vector_size, index_size, loops))) => BenchConfig::new(vector_size, index_size, loops)?,
        (None, None) => return Ok(None),
    };


    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    Ok(Some(config))
}
