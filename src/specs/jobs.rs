// src/specs/jobs.rs
//! Parser for the Fake Jobs listing page.
//!
//! Each job card is a `div.card-content` holding:
//! - `h2.title`    → title
//! - `h3.subtitle` → company
//! - `p.location`  → location ("City, ST")
//! - `time`        → posted date (`datetime` attribute, else its text)

use scraper::Html;
use tracing::debug;

use super::skills::extract_skills;
use crate::core::html::{first_attr, first_text, selector};
use crate::data::JobRecord;
use crate::error::Result;

pub fn parse_jobs(html: &str) -> Result<Vec<JobRecord>> {
    let doc = Html::parse_document(html);

    let card = selector("div.card-content")?;
    let title = selector("h2.title")?;
    let company = selector("h3.subtitle")?;
    let location = selector("p.location")?;
    let time = selector("time")?;

    let mut out = Vec::new();
    for el in doc.select(&card) {
        let title_text = first_text(el, &title);

        let posted_date = match first_attr(el, &time, "datetime").map(str::trim) {
            Some(dt) if !dt.is_empty() => s!(dt),
            _ => first_text(el, &time),
        };

        let skills = extract_skills(Some(&title_text));
        out.push(JobRecord::new(
            title_text,
            first_text(el, &company),
            first_text(el, &location),
            posted_date,
            skills,
        ));
    }

    debug!("Parsed {} job cards", out.len());
    Ok(out)
}
