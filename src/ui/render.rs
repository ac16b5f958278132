// src/ui/render.rs
//! Plain-text rendering of pages, figures, and status lines.

use crate::view::{PersonView, YearView};

pub const EXPLORE_HEADING: &str = "Explore Salary Data (From High to Low)";
pub const NO_RESULTS: &str = "No Results Found";
pub const LOADED: &str = "Data loaded!";
pub const LOAD_FAILED: &str = "Data load failed!";

/// Heading shown above search results.
pub fn search_heading(query: &str) -> String {
    format!("Results for \"{}\"", query)
}

/// The command help printed at startup and on `:help`.
pub fn usage() -> &'static str {
    "Type a name to search, or just press enter to explore everyone.\n\
     Commands: :page N (or :N) jump to a page, :next / :n, :prev / :p,\n\
     :help / :h, :quit / :q"
}

/// Dollar-format a coerced figure: thousands-grouped, cents shown only when
/// the value has any. Figures that never coerced render as `$0`.
pub fn format_dollars(amount: Option<f64>) -> String {
    let value = match amount {
        Some(value) => value,
        None => return "$0".to_string(),
    };

    let negative = value < 0.0;
    let total_cents = (value.abs() * 100.0).round() as u64;
    let mut text = group_thousands(total_cents / 100);
    let cents = total_cents % 100;
    if cents > 0 {
        text.push_str(&format!(".{:02}", cents));
    }
    if negative {
        format!("-${}", text)
    } else {
        format!("${}", text)
    }
}

/// 1234567 -> "1,234,567".
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// One person's block: a name line, then one line per year, newest first.
pub fn person_block(view: &PersonView) -> String {
    let mut block = view.display_name.clone();
    let details: Vec<&str> = view
        .title
        .as_deref()
        .into_iter()
        .chain(view.department.as_deref())
        .collect();
    if !details.is_empty() {
        block.push_str(" (");
        block.push_str(&details.join(", "));
        block.push(')');
    }
    block.push('\n');
    for year in &view.years {
        block.push_str(&year_line(year));
        block.push('\n');
    }
    block
}

fn year_line(year: &YearView) -> String {
    format!(
        "  {}  gross {:>12}  regular {:>12}  overtime {:>10}  other {:>10}  annual {:>12}",
        year.year,
        format_dollars(year.ytd_gross_earnings),
        format_dollars(year.regular_earnings),
        format_dollars(year.overtime_earnings),
        format_dollars(year.other_earnings),
        format_dollars(year.annual_salary),
    )
}

/// A full page: heading, person blocks (or the no-results line), footer.
pub fn page_text(
    heading: &str,
    views: &[PersonView],
    page_no: usize,
    pages: usize,
    total: usize,
) -> String {
    let mut out = String::new();
    out.push_str(heading);
    out.push_str("\n\n");
    if views.is_empty() {
        out.push_str(NO_RESULTS);
        out.push('\n');
    } else {
        for view in views {
            out.push_str(&person_block(view));
            out.push('\n');
        }
    }
    out.push_str(&page_footer(page_no, pages, total));
    out.push('\n');
    out
}

/// Footer shown under a page of results.
pub fn page_footer(page_no: usize, pages: usize, total: usize) -> String {
    format!(
        "page {} of {} ({} people)",
        page_no,
        pages.max(1),
        group_thousands(total as u64)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dollars_group_thousands_and_skip_whole_cents() {
        assert_eq!(format_dollars(Some(49500.0)), "$49,500");
        assert_eq!(format_dollars(Some(1234567.0)), "$1,234,567");
        assert_eq!(format_dollars(Some(950.5)), "$950.50");
        assert_eq!(format_dollars(Some(0.0)), "$0");
    }

    #[test]
    fn uncoerced_figures_render_as_zero_dollars() {
        assert_eq!(format_dollars(None), "$0");
    }

    #[test]
    fn negative_adjustments_keep_the_sign_outside() {
        assert_eq!(format_dollars(Some(-1200.25)), "-$1,200.25");
    }

    #[test]
    fn near_whole_values_round_rather_than_showing_phantom_cents() {
        assert_eq!(format_dollars(Some(49500.999)), "$49,501");
    }

    fn sample_view() -> PersonView {
        PersonView {
            display_name: "John A. Doe".to_string(),
            title: None,
            department: None,
            years: vec![YearView {
                year: 2019,
                annual_salary: Some(50000.0),
                ytd_gross_earnings: Some(49500.0),
                regular_earnings: Some(48000.0),
                overtime_earnings: Some(1000.0),
                other_earnings: Some(500.0),
            }],
        }
    }

    #[test]
    fn person_block_shows_name_year_and_figures() {
        let block = person_block(&sample_view());
        assert!(block.starts_with("John A. Doe\n"));
        assert!(block.contains("2019"));
        assert!(block.contains("$49,500"));
        assert!(block.contains("$48,000"));
    }

    #[test]
    fn directory_details_join_the_name_line() {
        let mut view = sample_view();
        view.title = Some("Lecturer".to_string());
        view.department = Some("Economics".to_string());
        let block = person_block(&view);
        assert!(block.starts_with("John A. Doe (Lecturer, Economics)\n"));
    }

    #[test]
    fn empty_pages_say_so() {
        let text = page_text("Results for \"zzz\"", &[], 1, 0, 0);
        assert!(text.contains(NO_RESULTS));
        assert!(text.contains("page 1 of 1 (0 people)"));
    }

    #[test]
    fn footer_counts_pages_and_people() {
        assert_eq!(page_footer(2, 5, 42), "page 2 of 5 (42 people)");
        assert_eq!(page_footer(1, 3, 2500), "page 1 of 3 (2,500 people)");
    }
}
