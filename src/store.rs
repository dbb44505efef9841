// src/store.rs
//! The jobs table on disk: the handoff between collector and analyzer.

use std::{collections::HashSet, fs::File, io::BufWriter, path::Path};

use csv::{ReaderBuilder, WriterBuilder};
use tracing::{debug, info};

use crate::data::{JOB_COLUMNS, JobRecord};
use crate::error::{Error, Result};
use crate::file::ensure_parent;

/// Drop exact-duplicate records, keeping the first occurrence and the original order.
pub fn dedup(records: Vec<JobRecord>) -> Vec<JobRecord> {
    let before = records.len();
    let mut seen = HashSet::with_capacity(before);
    let out: Vec<JobRecord> = records
        .into_iter()
        .filter(|r| seen.insert(r.clone()))
        .collect();
    if out.len() != before {
        debug!("Dropped {} duplicate rows", before - out.len());
    }
    out
}

/// Write `records` with a header row. Creates parent dirs; truncates any existing file.
pub fn write_jobs(path: &Path, records: &[JobRecord]) -> Result<()> {
    ensure_parent(path)?;
    let file = File::create(path)?;
    let mut w = WriterBuilder::new().has_headers(false).from_writer(BufWriter::new(file));

    // Explicit header so an empty table still carries its columns
    w.write_record(JOB_COLUMNS)?;
    for r in records {
        w.serialize(r)?;
    }
    w.flush()?;
    info!("Wrote {} rows to {}", records.len(), path.display());
    Ok(())
}

/// Read the jobs table. A missing file is a user-facing precondition failure.
pub fn read_jobs(path: &Path) -> Result<Vec<JobRecord>> {
    if !path.exists() {
        return Err(Error::MissingInput { path: path.to_path_buf() });
    }
    let mut rdr = ReaderBuilder::new().has_headers(true).flexible(true).from_path(path)?;
    let headers = rdr.headers()?.clone();

    let mut out = Vec::new();
    for row in rdr.records() {
        let mut row = row?;
        // Short rows read their missing trailing cells as ""
        row.truncate(headers.len());
        while row.len() < headers.len() {
            row.push_field("");
        }
        let rec: JobRecord = row.deserialize(Some(&headers))?;
        out.push(rec);
    }
    debug!("Read {} rows from {}", out.len(), path.display());
    Ok(out)
}
