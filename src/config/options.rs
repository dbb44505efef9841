// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;
use crate::core::retry::RetryPolicy;

/// Everything the collector needs. `Default` is the production setup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollectOptions {
    pub url: String,
    pub user_agent: String,
    pub timeout: Duration,
    pub retry: RetryPolicy,
    pub out: PathBuf,
}

impl Default for CollectOptions {
    fn default() -> Self {
        Self {
            url: s!(BASE_URL),
            user_agent: s!(USER_AGENT),
            timeout: Duration::from_secs(TIMEOUT_SECS),
            retry: RetryPolicy::default(),
            out: PathBuf::from(JOBS_FILE),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnalyzeOptions {
    pub input: PathBuf,
    pub plots_dir: PathBuf,
    pub pivot_out: PathBuf,
    pub top_skills: usize,
    pub top_cities: usize,
    pub top_city_skills: usize,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from(JOBS_FILE),
            plots_dir: PathBuf::from(PLOTS_DIR),
            pivot_out: PathBuf::from(PIVOT_FILE),
            top_skills: TOP_SKILLS,
            top_cities: TOP_CITIES,
            top_city_skills: TOP_CITY_SKILLS,
        }
    }
}

impl AnalyzeOptions {
    pub fn overall_chart_path(&self) -> PathBuf {
        self.plots_dir.join(OVERALL_CHART)
    }

    /// `<plots_dir>/skills_by_city_<stem>.png`; `stem` must already be sanitized.
    pub fn city_chart_path(&self, stem: &str) -> PathBuf {
        self.plots_dir.join(join!(CITY_CHART_PREFIX, stem, ".png"))
    }
}
