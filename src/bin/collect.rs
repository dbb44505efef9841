// src/bin/collect.rs
use job_skills::{cli, log};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    log::init();

    // An exhausted fetch ends the run here with a full report.
    cli::run_collect()?;
    Ok(())
}
