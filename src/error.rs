// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP error: {status} {url}")]
    Status { status: u16, url: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid selector `{0}`")]
    Selector(String),

    #[error("Chart rendering failed: {0}")]
    Chart(String),

    #[error("{} not found. Run `collect` first.", path.display())]
    MissingInput { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, Error>;
