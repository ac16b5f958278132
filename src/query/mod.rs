// src/query/mod.rs
//! Search and explore over the aggregated person index.

pub mod page;

use crate::process::aggregate::{latest, PersonHistory, PersonIndex};
use crate::process::parse_amount;

/// An ordered result view borrowed from the index; its order dictates
/// display order and pagination never re-orders it.
pub type ResultSet<'a> = Vec<(&'a str, &'a PersonHistory)>;

/// Case-insensitive substring search over person keys.
///
/// The query gets no treatment beyond lowercasing, so stray spaces search
/// as typed. Results keep the index's ascending-key order. An empty query
/// matches everyone; the interactive caller routes empty input to
/// [`explore`] before this is ever consulted.
pub fn search<'a>(index: &'a PersonIndex, query: &str) -> ResultSet<'a> {
    let needle = query.to_lowercase();
    index
        .people()
        .iter()
        .filter(|(key, _)| key.contains(&needle))
        .map(|(key, history)| (key.as_str(), history))
        .collect()
}

/// Everyone, ranked by their latest year's gross earnings, highest first.
///
/// The sort is stable over ascending-key iteration, so equal figures (and
/// everyone without a parseable figure) order alphabetically.
pub fn explore(index: &PersonIndex) -> ResultSet<'_> {
    let mut results: ResultSet<'_> = index
        .people()
        .iter()
        .map(|(key, history)| (key.as_str(), history))
        .collect();
    results.sort_by(|(_, a), (_, b)| latest_gross_rank(b).total_cmp(&latest_gross_rank(a)));
    results
}

/// Ranking figure: the latest year's gross earnings, or negative infinity
/// when the field does not parse, sinking those entries to the bottom.
fn latest_gross_rank(history: &PersonHistory) -> f64 {
    latest(history)
        .and_then(|(_, row)| parse_amount(row.ytd_gross_earnings()))
        .unwrap_or(f64::NEG_INFINITY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::{SalaryData, SalaryRow};

    fn row(first: &str, last: &str, ytd: &str) -> SalaryRow {
        let mut fields = vec![first.to_string(), String::new(), last.to_string(), String::new()];
        fields.extend(std::iter::repeat(String::from("X")).take(10));
        fields.push(ytd.to_string());
        SalaryRow::new(fields)
    }

    fn index(years: Vec<(u16, Vec<SalaryRow>)>) -> PersonIndex {
        let mut data = SalaryData::new();
        for (year, rows) in years {
            data.insert(year, rows);
        }
        PersonIndex::build(data)
    }

    #[test]
    fn search_matches_substrings_case_insensitively() {
        let index = index(vec![(
            2019,
            vec![row("John", "Doe", "49500"), row("Jane", "Smith", "60000")],
        )]);

        for query in ["doe", "DOE", "ohn d"] {
            let results = search(&index, query);
            assert_eq!(results.len(), 1, "query {:?}", query);
            assert_eq!(results[0].0, "john doe");
        }
        assert!(search(&index, "nosuch").is_empty());
    }

    #[test]
    fn search_keeps_ascending_key_order() {
        let index = index(vec![(
            2019,
            vec![
                row("Cara", "Stone", "1"),
                row("Alan", "Stone", "2"),
                row("Beth", "Stone", "3"),
            ],
        )]);

        let keys: Vec<&str> = search(&index, "stone").iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["alan stone", "beth stone", "cara stone"]);
    }

    #[test]
    fn empty_query_returns_the_full_set() {
        let index = index(vec![(
            2019,
            vec![row("John", "Doe", "1"), row("Jane", "Smith", "2")],
        )]);
        assert_eq!(search(&index, "").len(), 2);
    }

    #[test]
    fn explore_ranks_by_latest_gross_descending() {
        let index = index(vec![(
            2019,
            vec![row("John", "Doe", "49500"), row("Jane", "Smith", "60000")],
        )]);

        let keys: Vec<&str> = explore(&index).iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["jane smith", "john doe"]);
    }

    #[test]
    fn explore_ranks_by_the_maximum_year_present() {
        // High in 2017, absent in 2018, modest in 2019: the 2019 figure rules.
        let index = index(vec![
            (2017, vec![row("Gap", "Person", "999999")]),
            (2018, vec![row("Steady", "Earner", "50000")]),
            (2019, vec![row("Gap", "Person", "10000"), row("Steady", "Earner", "50000")]),
        ]);

        let results = explore(&index);
        let keys: Vec<&str> = results.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["steady earner", "gap person"]);
        assert_eq!(results[1].1.keys().copied().collect::<Vec<_>>(), vec![2017, 2019]);
    }

    #[test]
    fn unparseable_gross_sinks_to_the_bottom() {
        let index = index(vec![(
            2019,
            vec![
                row("No", "Figure", "NA"),
                row("Low", "Earner", "1"),
                row("Also", "Blank", ""),
            ],
        )]);

        let keys: Vec<&str> = explore(&index).iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["low earner", "also blank", "no figure"]);
    }

    #[test]
    fn equal_gross_ties_break_alphabetically() {
        let index = index(vec![(
            2019,
            vec![
                row("Zoe", "Park", "50000"),
                row("Amy", "Park", "50000"),
                row("Mia", "Park", "50000"),
            ],
        )]);

        let keys: Vec<&str> = explore(&index).iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["amy park", "mia park", "zoe park"]);
    }

    #[test]
    fn explore_order_is_non_increasing() {
        let index = index(vec![(
            2019,
            vec![
                row("A", "A", "5"),
                row("B", "B", "NA"),
                row("C", "C", "500"),
                row("D", "D", "50"),
                row("E", "E", "500"),
            ],
        )]);

        let results = explore(&index);
        let ranks: Vec<f64> = results.iter().map(|(_, h)| latest_gross_rank(h)).collect();
        assert!(ranks.windows(2).all(|w| w[0] >= w[1]));
    }
}
