// src/lib.rs

#[macro_use]
pub mod macros;

pub mod analyze;
pub mod cli;
pub mod collect;
pub mod config;
pub mod core;
pub mod data;
pub mod error;
pub mod file;
pub mod log;
pub mod progress;
pub mod specs;
pub mod store;

pub use data::JobRecord;
pub use error::{Error, Result};
