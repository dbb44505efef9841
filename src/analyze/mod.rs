// src/analyze/mod.rs
//! Analyzer stage: jobs table → skill rankings, charts and the city × skill pivot.
//!
//! Everything is recomputed from `jobs.csv` on each run; nothing here is cached.
//! [`report`] is pure (no I/O) so rankings can be checked without rendering.

pub mod chart;
pub mod pivot;
pub mod tally;

use std::path::PathBuf;

use tracing::{debug, info, warn};

pub use pivot::{Pivot, pivot, write_pivot};
pub use tally::{SkillRow, Tally, city_top_skills, explode, top_cities, top_skills};

use crate::config::options::AnalyzeOptions;
use crate::core::sanitize::sanitize_city_filename;
use crate::data::JobRecord;
use crate::error::Result;
use crate::file::ensure_directory;
use crate::progress::Progress;
use crate::store;

pub const OVERALL_TITLE: &str = "Top Skills in Job Titles";

pub fn city_title(city: &str) -> String {
    format!("Top Skills in Titles — {city}")
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CitySkills {
    pub city: String,
    pub skills: Vec<(String, usize)>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkillReport {
    pub jobs: usize,
    /// Number of exploded (record, skill) rows.
    pub skill_rows: usize,
    pub top_skills: Vec<(String, usize)>,
    pub top_cities: Vec<(String, usize)>,
    /// One entry per top city, in city rank order. May hold an empty list.
    pub by_city: Vec<CitySkills>,
    pub pivot: Pivot,
}

pub fn report(records: &[JobRecord], opts: &AnalyzeOptions) -> SkillReport {
    let rows = explode(records);
    let top_cities = top_cities(records, opts.top_cities);

    let by_city = top_cities
        .iter()
        .map(|(city, _)| CitySkills {
            city: city.clone(),
            skills: city_top_skills(&rows, city, opts.top_city_skills),
        })
        .collect();

    let city_names: Vec<String> = top_cities.iter().map(|(c, _)| c.clone()).collect();

    SkillReport {
        jobs: records.len(),
        skill_rows: rows.len(),
        top_skills: top_skills(&rows, opts.top_skills),
        pivot: pivot(&rows, &city_names),
        top_cities,
        by_city,
    }
}

/// One chart to render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChartJob {
    pub path: PathBuf,
    pub title: String,
    pub counts: Vec<(String, usize)>,
}

/// Charts `run` will render for `report`: the overall ranking first, then one per top
/// city in rank order. Empty rankings get no chart.
pub fn chart_plan(report: &SkillReport, opts: &AnalyzeOptions) -> Vec<ChartJob> {
    let mut jobs = Vec::with_capacity(report.by_city.len() + 1);

    if report.top_skills.is_empty() {
        warn!("No skills found in any title; skipping {OVERALL_TITLE:?} chart");
    } else {
        jobs.push(ChartJob {
            path: opts.overall_chart_path(),
            title: s!(OVERALL_TITLE),
            counts: report.top_skills.clone(),
        });
    }

    for cs in &report.by_city {
        if cs.skills.is_empty() {
            debug!("No skill rows for {}; no chart", cs.city);
            continue;
        }
        jobs.push(ChartJob {
            path: opts.city_chart_path(&sanitize_city_filename(&cs.city)),
            title: city_title(&cs.city),
            counts: cs.skills.clone(),
        });
    }
    jobs
}

pub struct AnalyzeSummary {
    pub report: SkillReport,
    pub charts: Vec<PathBuf>,
    pub pivot: PathBuf,
}

/// Read the jobs table, render charts and write the pivot table.
/// Fails with `Error::MissingInput` when the jobs table does not exist.
pub fn run(
    opts: &AnalyzeOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<AnalyzeSummary> {
    let records = store::read_jobs(&opts.input)?;
    let report = report(&records, opts);
    info!(
        "Analyzing {} jobs ({} skill mentions, {} top cities)",
        report.jobs, report.skill_rows, report.top_cities.len()
    );

    let plan = chart_plan(&report, opts);
    if let Some(p) = progress.as_deref_mut() {
        // charts + pivot
        p.begin(plan.len() + 1);
    }

    ensure_directory(&opts.plots_dir)?;
    let mut charts = Vec::with_capacity(plan.len());
    for job in plan {
        chart::bar_chart(&job.path, &job.title, &job.counts)?;
        if let Some(p) = progress.as_deref_mut() {
            p.item_done(&job.path.to_string_lossy());
        }
        charts.push(job.path);
    }

    write_pivot(&opts.pivot_out, &report.pivot)?;
    if let Some(p) = progress.as_deref_mut() {
        p.item_done(&opts.pivot_out.to_string_lossy());
        p.finish();
    }
    info!("Wrote {} charts and {}", charts.len(), opts.pivot_out.display());

    Ok(AnalyzeSummary { report, charts, pivot: opts.pivot_out.clone() })
}
