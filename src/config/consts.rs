// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://realpython.github.io/fake-jobs/";
pub const USER_AGENT: &str = "Mozilla/5.0 (compatible; JobScraperBot/1.0; +https://example.org/bot)";
pub const TIMEOUT_SECS: u64 = 20;

// Retry: total attempts, sleep drawn from [MIN, MAX) between them
pub const FETCH_ATTEMPTS: u32 = 3;
pub const RETRY_MIN_DELAY_MS: u64 = 1_000;
pub const RETRY_MAX_DELAY_MS: u64 = 3_000;

// Files
pub const JOBS_FILE: &str = "jobs.csv";
pub const PLOTS_DIR: &str = "plots";
pub const PIVOT_FILE: &str = "skills_by_city.csv";
pub const OVERALL_CHART: &str = "top_skills_overall.png";
pub const CITY_CHART_PREFIX: &str = "skills_by_city_";

// Analysis thresholds
pub const TOP_SKILLS: usize = 20;
pub const TOP_CITIES: usize = 5;
pub const TOP_CITY_SKILLS: usize = 10;
