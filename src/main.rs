//! sectionstamp: stamp section numbers and page breaks onto markdown book chapters.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use sectionstamp::batch::{self, RunOptions};
use sectionstamp::config::{Config, Outline};
use sectionstamp::report::HEADER;
use sectionstamp::{check, formats};
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sectionstamp")]
#[command(
    about = "Stamp section numbers and page breaks onto markdown book chapters",
    long_about = None
)]
struct Args {
    /// Outline file (defaults to ./sectionstamp.toml, then the built-in outline)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Resolve page paths against this directory instead of the outline's `base_dir`
    #[arg(long, value_name = "DIR")]
    base_dir: Option<PathBuf>,

    /// Report what would change without writing any file
    #[arg(long, conflicts_with = "check")]
    dry_run: bool,

    /// Verify that every document matches the outline, exiting non-zero on drift
    #[arg(long)]
    check: bool,

    /// Print the report as JSON instead of status lines
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Args) -> Result<ExitCode, Box<dyn Error>> {
    let mut outline = Config::load(args.config.as_deref())?.into_outline()?;

    // Override outline with command line args
    if let Some(base_dir) = args.base_dir {
        outline.base_dir = base_dir;
    }

    if args.check {
        run_check(&outline, args.json)
    } else {
        run_stamp(&outline, args.dry_run, args.json)
    }
}

fn run_stamp(outline: &Outline, dry_run: bool, json: bool) -> Result<ExitCode, Box<dyn Error>> {
    let options = RunOptions { dry_run };

    if json {
        let report = batch::run(outline, options, |_| {})?;
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!("{HEADER}");
    let report = batch::run(outline, options, |file| println!("{}", file.status_line(dry_run)))?;
    println!("{}", report.summary());

    // Per-file failures are reported, never turned into a failing exit code
    Ok(ExitCode::SUCCESS)
}

fn run_check(outline: &Outline, json: bool) -> Result<ExitCode, Box<dyn Error>> {
    let format = formats::markdown::MarkdownFormat;

    let results = if json {
        let results = check::check(outline, &format, |_| {})?;
        println!("{}", serde_json::to_string_pretty(&results)?);
        results
    } else {
        let results = check::check(outline, &format, |file| println!("{}", file.status_line()))?;
        println!("{}", check::summary(&results));
        results
    };

    if check::all_clean(&results) {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
