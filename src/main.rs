use std::io::{self, Read};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::{self as logger};

use mygrep::Pattern;

const MYGREP_DEBUG_LOG: &str = "MYGREP_DEBUG_LOG";
const MYGREP_DEBUG_LOG_STYLE: &str = "MYGREP_DEBUG_LOG_STYLE";

/// Exit status when the pattern did not match (0 means it did).
const EXIT_NO_MATCH: u8 = 1;
/// Exit status for usage, I/O and pattern errors.
const EXIT_ERROR: u8 = 2;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Pattern to search for in standard input
    #[arg(
        short = 'E',
        long = "extended-regexp",
        value_name = "PATTERN",
        allow_hyphen_values = true
    )]
    pattern: String,
}

fn main() -> ExitCode {
    init_logging();

    // Usage errors exit with status 2.
    let args = Args::parse();

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(EXIT_NO_MATCH),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn init_logging() {
    if std::env::var(MYGREP_DEBUG_LOG).is_ok() {
        logger::Builder::from_env(
            logger::Env::new()
                .filter(MYGREP_DEBUG_LOG)
                .write_style(MYGREP_DEBUG_LOG_STYLE),
        )
        .format_timestamp_micros()
        .init();
        log::debug!("logging initialized");
    } else {
        logger::Builder::new()
            .filter_level(log::LevelFilter::Error)
            .format_timestamp_millis()
            .init()
    }
}

fn run(args: &Args) -> Result<bool> {
    let pattern: Pattern = args
        .pattern
        .parse()
        .with_context(|| format!("invalid pattern {:?}", args.pattern))?;

    let mut input = Vec::new();
    io::stdin()
        .lock()
        .read_to_end(&mut input)
        .context("read input text")?;
    log::debug!("read {} byte(s) of input", input.len());

    Ok(pattern.is_match(&input))
}
