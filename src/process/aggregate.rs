//! Cross-year aggregation of disclosure rows by person.

use std::collections::BTreeMap;
use tracing::info;

use crate::process::{SalaryData, SalaryRow};

/// One person's rows across disclosure years.
pub type PersonHistory = BTreeMap<u16, SalaryRow>;

/// The aggregate the whole session reads from: person key → per-year rows.
///
/// Built once from the loaded data and never mutated afterwards; everything
/// downstream borrows it. The key is the canonical lowercase `first last`
/// string, so the grouping is a name heuristic: distinct people sharing a
/// name collide, an accepted property of the source data rather than
/// something this layer tries to repair.
#[derive(Debug, Default)]
pub struct PersonIndex {
    people: BTreeMap<String, PersonHistory>,
    years: Vec<u16>,
    row_count: usize,
}

impl PersonIndex {
    /// Group every loaded row under its person key.
    ///
    /// Years ascend and rows keep file order within a year, so a person
    /// appearing twice in one year's file keeps the later row: last write
    /// wins, no duplicate detection.
    pub fn build(data: SalaryData) -> PersonIndex {
        let years: Vec<u16> = data.keys().copied().collect();
        let mut people: BTreeMap<String, PersonHistory> = BTreeMap::new();
        let mut row_count = 0;

        for (year, rows) in data {
            row_count += rows.len();
            for row in rows {
                people.entry(row.search_key()).or_default().insert(year, row);
            }
        }

        info!(
            people = people.len(),
            rows = row_count,
            years = years.len(),
            "aggregated disclosures"
        );
        PersonIndex {
            people,
            years,
            row_count,
        }
    }

    /// Person key → history, iterating ascending by key.
    pub fn people(&self) -> &BTreeMap<String, PersonHistory> {
        &self.people
    }

    /// Disclosure years that were loaded, ascending.
    pub fn years(&self) -> &[u16] {
        &self.years
    }

    /// Distinct people in the aggregate.
    pub fn person_count(&self) -> usize {
        self.people.len()
    }

    /// Rows aggregated across all years, counted before same-year dedup.
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }
}

/// A person's most recent disclosure: `(year, row)` for their maximum year.
pub fn latest(history: &PersonHistory) -> Option<(u16, &SalaryRow)> {
    history.iter().next_back().map(|(year, row)| (*year, row))
}
