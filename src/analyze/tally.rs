// src/analyze/tally.rs
// Fan-out and insertion-ordered counting.

use std::collections::HashMap;

use crate::data::JobRecord;

/// One (record, single skill) pair produced by [`explode`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillRow<'a> {
    pub record: &'a JobRecord,
    pub skill: &'a str,
}

/// One row per skill per record, in record order then skill order.
/// Records without skills contribute nothing.
pub fn explode(records: &[JobRecord]) -> Vec<SkillRow<'_>> {
    records
        .iter()
        .flat_map(|record| record.skills.iter().map(move |skill| SkillRow { record, skill }))
        .collect()
}

/// Counter that remembers first-encounter order.
#[derive(Clone, Debug, Default)]
pub struct Tally {
    entries: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl Tally {
    pub fn new() -> Self { Self::default() }

    pub fn add(&mut self, key: &str) {
        match self.index.get(key) {
            Some(&i) => self.entries[i].1 += 1,
            None => {
                self.index.insert(s!(key), self.entries.len());
                self.entries.push((s!(key), 1));
            }
        }
    }

    pub fn get(&self, key: &str) -> usize {
        self.index.get(key).map(|&i| self.entries[i].1).unwrap_or(0)
    }

    /// Highest counts first, at most `limit` entries.
    /// Stable: equal counts keep first-encounter order.
    pub fn ranked(&self, limit: usize) -> Vec<(String, usize)> {
        let mut v = self.entries.clone();
        v.sort_by(|a, b| b.1.cmp(&a.1));
        v.truncate(limit);
        v
    }
}

impl<'a> FromIterator<&'a str> for Tally {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut t = Tally::new();
        for k in iter { t.add(k); }
        t
    }
}

/// Overall skill frequencies.
pub fn top_skills(rows: &[SkillRow<'_>], limit: usize) -> Vec<(String, usize)> {
    rows.iter().map(|r| r.skill).collect::<Tally>().ranked(limit)
}

/// Cities by number of jobs (all records, with or without skills). Blank cities are ignored.
pub fn top_cities(records: &[JobRecord], limit: usize) -> Vec<(String, usize)> {
    records
        .iter()
        .map(|r| r.city.as_str())
        .filter(|c| !c.is_empty())
        .collect::<Tally>()
        .ranked(limit)
}

/// Skill frequencies among one city's jobs.
pub fn city_top_skills(rows: &[SkillRow<'_>], city: &str, limit: usize) -> Vec<(String, usize)> {
    rows.iter()
        .filter(|r| r.record.city == city)
        .map(|r| r.skill)
        .collect::<Tally>()
        .ranked(limit)
}
