// src/data.rs
//
// Canonical row shape shared by the collector (producer) and the analyzer (consumer).
// On disk the `skills` list is one comma-joined column.

use serde::{Deserialize, Serialize};

/// Header row of the jobs table, in column order.
pub const JOB_COLUMNS: [&str; 6] = ["title", "company", "location", "posted_date", "skills", "city"];

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobRecord {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
    /// ISO date from `<time datetime>`, or the element's raw text.
    #[serde(default)]
    pub posted_date: String,
    #[serde(default, with = "skills_column")]
    pub skills: Vec<String>,
    #[serde(default)]
    pub city: String,
}

impl JobRecord {
    /// Build a record; `city` is derived from `location`.
    pub fn new(
        title: String,
        company: String,
        location: String,
        posted_date: String,
        skills: Vec<String>,
    ) -> Self {
        let city = derive_city(&location);
        Self { title, company, location, posted_date, skills, city }
    }
}

/// Substring before the first comma, trimmed. "Boston, MA" → "Boston".
pub fn derive_city(location: &str) -> String {
    location.split(',').next().unwrap_or_default().trim().to_string()
}

pub fn join_skills(skills: &[String]) -> String {
    skills.join(", ")
}

/// Inverse of [`join_skills`]; blank pieces are dropped.
pub fn split_skills(cell: &str) -> Vec<String> {
    cell.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

mod skills_column {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(skills: &[String], ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_str(&super::join_skills(skills))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<Vec<String>, D::Error> {
        let cell = Option::<String>::deserialize(de)?;
        Ok(cell.as_deref().map(super::split_skills).unwrap_or_default())
    }
}
