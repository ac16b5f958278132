//! Positional column layout of the disclosure CSVs.
//!
//! The published files carry no header row; fields are identified by
//! position. Most years share one layout, but individual years can deviate;
//! those deviations live in explicit override tables here so every reader
//! sees the same correction.

pub const FIRST_NAME: usize = 0;
pub const MIDDLE_INITIAL: usize = 1;
pub const LAST_NAME: usize = 2;
pub const SUFFIX: usize = 3;

pub const ANNUAL_SALARY: usize = 9;
pub const REGULAR_EARNINGS: usize = 11;
pub const OVERTIME_EARNINGS: usize = 12;
pub const OTHER_EARNINGS: usize = 13;
pub const YTD_GROSS_EARNINGS: usize = 14;

/// Placeholder the source files use for absent values.
pub const MISSING: &str = "NA";

/// Years whose regular-earnings column sits somewhere other than
/// [`REGULAR_EARNINGS`]. The 2015 files were published with the column one
/// position earlier.
static REGULAR_EARNINGS_OVERRIDES: &[(u16, usize)] = &[(2015, REGULAR_EARNINGS - 1)];

/// Regular-earnings column index for the given disclosure year.
pub fn regular_earnings_column(year: u16) -> usize {
    REGULAR_EARNINGS_OVERRIDES
        .iter()
        .find(|&&(y, _)| y == year)
        .map(|&(_, col)| col)
        .unwrap_or(REGULAR_EARNINGS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regular_earnings_shifts_for_2015() {
        assert_eq!(regular_earnings_column(2015), 10);
    }

    #[test]
    fn regular_earnings_is_standard_elsewhere() {
        for year in [2013, 2014, 2016, 2017, 2018, 2019] {
            assert_eq!(regular_earnings_column(year), REGULAR_EARNINGS);
        }
    }
}
