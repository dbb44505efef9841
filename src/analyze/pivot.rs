// src/analyze/pivot.rs
// City × skill count table.

use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use csv::WriterBuilder;

use super::tally::SkillRow;
use crate::error::Result;
use crate::file::ensure_parent;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Pivot {
    /// Row keys, sorted.
    pub cities: Vec<String>,
    /// Column keys, sorted.
    pub skills: Vec<String>,
    /// `cells[city][skill]`, aligned with `cities` / `skills`.
    pub cells: Vec<Vec<usize>>,
}

impl Pivot {
    pub fn get(&self, city: &str, skill: &str) -> Option<usize> {
        let r = self.cities.iter().position(|c| c == city)?;
        let c = self.skills.iter().position(|s| s == skill)?;
        Some(self.cells[r][c])
    }
}

/// Rows are `cities` (sorted); columns are every skill seen among those cities' rows.
/// Absent combinations are 0.
pub fn pivot(rows: &[SkillRow<'_>], cities: &[String]) -> Pivot {
    let mut city_keys: Vec<String> = cities.to_vec();
    city_keys.sort();
    city_keys.dedup();

    let mut counts: HashMap<(&str, &str), usize> = HashMap::new();
    let mut skills: BTreeSet<&str> = BTreeSet::new();
    for r in rows {
        if city_keys.iter().any(|c| *c == r.record.city) {
            *counts.entry((r.record.city.as_str(), r.skill)).or_insert(0) += 1;
            skills.insert(r.skill);
        }
    }

    let skills: Vec<String> = skills.into_iter().map(String::from).collect();
    let cells = city_keys
        .iter()
        .map(|city| {
            skills
                .iter()
                .map(|skill| counts.get(&(city.as_str(), skill.as_str())).copied().unwrap_or(0))
                .collect()
        })
        .collect();

    Pivot { cities: city_keys, skills, cells }
}

/// Header `city,<skill…>`, one line per city. Overwrites `path`.
pub fn write_pivot(path: &Path, pivot: &Pivot) -> Result<()> {
    ensure_parent(path)?;
    let mut w = WriterBuilder::new().from_path(path)?;

    let mut header = vec![s!("city")];
    header.extend(pivot.skills.iter().cloned());
    w.write_record(&header)?;

    for (city, row) in pivot.cities.iter().zip(&pivot.cells) {
        let mut rec = vec![city.clone()];
        rec.extend(row.iter().map(|n| n.to_string()));
        w.write_record(&rec)?;
    }
    w.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::tally::explode;
    use crate::data::JobRecord;

    fn job(city: &str, skills: &[&str]) -> JobRecord {
        JobRecord::new(s!("t"), s!("c"), s!(city), s!(), skills.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn cells_count_and_zero_fill() {
        let jobs = vec![
            job("Boston", &["Python"]),
            job("Boston", &["Python", "SQL"]),
            job("Austin", &["Go"]),
            job("Denver", &["Rust"]),
        ];
        let rows = explode(&jobs);
        let p = pivot(&rows, &[s!("Boston"), s!("Austin")]);

        assert_eq!(p.cities, ["Austin", "Boston"]);
        assert_eq!(p.skills, ["Go", "Python", "SQL"]);
        assert_eq!(p.get("Boston", "Python"), Some(2));
        assert_eq!(p.get("Austin", "Python"), Some(0));
        assert_eq!(p.get("Denver", "Rust"), None);
    }

    #[test]
    fn city_without_skills_is_an_all_zero_row() {
        let jobs = vec![job("Boston", &["Python"]), job("Austin", &[])];
        let p = pivot(&explode(&jobs), &[s!("Boston"), s!("Austin")]);
        assert_eq!(p.cells, vec![vec![0], vec![1]]);
    }

    #[test]
    fn written_csv_layout() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("skills_by_city.csv");
        let jobs = vec![job("Boston", &["Python", "SQL"]), job("Austin", &["Python"])];
        write_pivot(&path, &pivot(&explode(&jobs), &[s!("Boston"), s!("Austin")])).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "city,Python,SQL\nAustin,1,0\nBoston,1,1\n");
    }
}
