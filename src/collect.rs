// src/collect.rs
//! Collector stage: fetch the listing page → parse cards → dedup → write the jobs table.

use std::path::PathBuf;

use tracing::info;

use crate::config::options::CollectOptions;
use crate::core::net;
use crate::data::JobRecord;
use crate::error::Result;
use crate::progress::Progress;
use crate::{specs, store};

/// What was produced.
pub struct CollectSummary {
    pub path: PathBuf,
    pub jobs: usize,
}

/// Full collector run against the network.
pub fn run(
    opts: &CollectOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<CollectSummary> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(1);
        p.log("Fetching Fake Jobs page...");
    }
    let html = net::fetch_page(opts)?;
    collect_from_html(opts, &html, progress)
}

/// Everything after the fetch: parse, dedup and persist. Used directly by offline callers.
pub fn collect_from_html(
    opts: &CollectOptions,
    html: &str,
    mut progress: Option<&mut dyn Progress>,
) -> Result<CollectSummary> {
    let parsed = specs::jobs::parse_jobs(html)?;
    let parsed_count = parsed.len();
    let jobs: Vec<JobRecord> = store::dedup(parsed);
    info!("Parsed {parsed_count} cards, {} unique", jobs.len());

    store::write_jobs(&opts.out, &jobs)?;
    if let Some(p) = progress.as_deref_mut() {
        p.item_done(&opts.out.to_string_lossy());
        p.finish();
    }

    Ok(CollectSummary { path: opts.out.clone(), jobs: jobs.len() })
}
