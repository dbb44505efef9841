// src/bin/analyze.rs
use job_skills::{Error, cli, log};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    log::init();

    match cli::run_analyze() {
        Err(e @ Error::MissingInput { .. }) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        other => Ok(other?),
    }
}
