// src/view/mod.rs
//! Display tuples handed to renderers: one `PersonView` per person on the
//! current page, figures already coerced. Serializable so the JSON output
//! mode can emit them as-is.

use serde::Serialize;

use crate::process::aggregate::{latest, PersonHistory};
use crate::process::parse_amount;

/// Everything a renderer needs for one person.
#[derive(Debug, Clone, Serialize)]
pub struct PersonView {
    pub display_name: String,
    /// Directory title, when enrichment found one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Directory department, when enrichment found one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    /// Newest year first.
    pub years: Vec<YearView>,
}

/// One disclosure year's figures. `None` means the source field did not
/// coerce to a finite number; renderers show it as `$0`.
#[derive(Debug, Clone, Serialize)]
pub struct YearView {
    pub year: u16,
    pub annual_salary: Option<f64>,
    pub ytd_gross_earnings: Option<f64>,
    pub regular_earnings: Option<f64>,
    pub overtime_earnings: Option<f64>,
    pub other_earnings: Option<f64>,
}

/// Build one person's view.
///
/// Name details are shown once per person and come from the newest row;
/// years list newest first. Regular earnings go through the per-year column
/// table, so shifted years read the right field.
pub fn person_view(history: &PersonHistory) -> PersonView {
    let display_name = latest(history)
        .map(|(_, row)| row.display_name())
        .unwrap_or_default();

    let years = history
        .iter()
        .rev()
        .map(|(&year, row)| YearView {
            year,
            annual_salary: parse_amount(row.annual_salary()),
            ytd_gross_earnings: parse_amount(row.ytd_gross_earnings()),
            regular_earnings: parse_amount(row.regular_earnings(year)),
            overtime_earnings: parse_amount(row.overtime_earnings()),
            other_earnings: parse_amount(row.other_earnings()),
        })
        .collect();

    PersonView {
        display_name,
        title: None,
        department: None,
        years,
    }
}

/// Views for one page of results, in page order.
pub fn page_views(entries: &[(&str, &PersonHistory)]) -> Vec<PersonView> {
    entries
        .iter()
        .map(|(_, history)| person_view(history))
        .collect()
}
