// src/cli.rs
use std::env;

use crate::config::options::{AnalyzeOptions, CollectOptions};
use crate::error::Result;
use crate::file::display_path;
use crate::progress::Progress;
use crate::{analyze, collect};

const COLLECT_HELP: &str = "\
Usage: collect

Fetch the Fake Jobs listing page and write jobs.csv
(title, company, location, posted_date, skills, city).
Set RUST_LOG to change log verbosity.";

const ANALYZE_HELP: &str = "\
Usage: analyze

Read jobs.csv and write skill charts to plots/ plus skills_by_city.csv.
Run `collect` first. Set RUST_LOG to change log verbosity.";

/// Prints status lines and written files to stdout.
pub struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }

    fn item_done(&mut self, what: &str) {
        println!("  wrote {what}");
    }
}

/// No flags besides help. Unknown args print usage and exit with status 2.
fn check_args(help: &str) {
    for a in env::args().skip(1) {
        match a.as_str() {
            "-h" | "--help" => {
                println!("{help}");
                std::process::exit(0);
            }
            _ => {
                eprintln!("Unknown arg: {a}\n\n{help}");
                std::process::exit(2);
            }
        }
    }
}

pub fn run_collect() -> Result<()> {
    check_args(COLLECT_HELP);
    let opts = CollectOptions::default();
    let summary = collect::run(&opts, Some(&mut ConsoleProgress))?;
    println!("Saved {} jobs to {}", summary.jobs, display_path(&summary.path).display());
    Ok(())
}

pub fn run_analyze() -> Result<()> {
    check_args(ANALYZE_HELP);
    let opts = AnalyzeOptions::default();
    analyze::run(&opts, Some(&mut ConsoleProgress))?;
    println!(
        "Done! See {}/ and {}.",
        opts.plots_dir.display(),
        opts.pivot_out.display()
    );
    Ok(())
}
