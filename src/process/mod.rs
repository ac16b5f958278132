// src/process/mod.rs
use anyhow::{Context, Result};
use csv::ReaderBuilder;
use std::collections::BTreeMap;

pub mod aggregate;
pub mod layout;
pub mod name;

/// One disclosure row: the raw string fields in file order.
///
/// Rows stay strings end to end; numeric coercion happens at sort/display
/// time through [`parse_amount`]. Short rows are legal (the reader runs in
/// flexible mode) and absent positions read as `""`.
#[derive(Debug, Clone, PartialEq)]
pub struct SalaryRow(Vec<String>);

/// Everything loaded: year → rows, in file order per year.
pub type SalaryData = BTreeMap<u16, Vec<SalaryRow>>;

impl SalaryRow {
    pub fn new(fields: Vec<String>) -> Self {
        SalaryRow(fields)
    }

    /// Field at `index`, or `""` when the row is too short.
    pub fn field(&self, index: usize) -> &str {
        self.0.get(index).map(String::as_str).unwrap_or("")
    }

    pub fn first_name(&self) -> &str {
        self.field(layout::FIRST_NAME)
    }

    pub fn middle_initial(&self) -> &str {
        self.field(layout::MIDDLE_INITIAL)
    }

    pub fn last_name(&self) -> &str {
        self.field(layout::LAST_NAME)
    }

    pub fn suffix(&self) -> &str {
        self.field(layout::SUFFIX)
    }

    pub fn annual_salary(&self) -> &str {
        self.field(layout::ANNUAL_SALARY)
    }

    /// Regular earnings sit in a year-dependent column; see [`layout`].
    pub fn regular_earnings(&self, year: u16) -> &str {
        self.field(layout::regular_earnings_column(year))
    }

    pub fn overtime_earnings(&self) -> &str {
        self.field(layout::OVERTIME_EARNINGS)
    }

    pub fn other_earnings(&self) -> &str {
        self.field(layout::OTHER_EARNINGS)
    }

    pub fn ytd_gross_earnings(&self) -> &str {
        self.field(layout::YTD_GROSS_EARNINGS)
    }

    /// Grouping/search key derived from this row's name fields.
    pub fn search_key(&self) -> String {
        name::search_key(self.first_name(), self.last_name())
    }

    /// Display name derived from this row's name fields.
    pub fn display_name(&self) -> String {
        name::display_name(
            self.first_name(),
            self.middle_initial(),
            self.last_name(),
            self.suffix(),
        )
    }
}

impl From<&csv::StringRecord> for SalaryRow {
    fn from(record: &csv::StringRecord) -> Self {
        SalaryRow(record.iter().map(str::to_string).collect())
    }
}

/// Parse one year's CSV text into rows, preserving file order.
///
/// The published files carry no header line, so every record is data. Field
/// counts vary between years (and between rows in dirty files), hence the
/// flexible reader. A record the parser cannot read at all is a hard error:
/// the whole year is rejected and the load fails.
pub fn parse_rows(text: &str) -> Result<Vec<SalaryRow>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        let record = result.with_context(|| format!("CSV parse error at record {}", idx))?;
        rows.push(SalaryRow::from(&record));
    }
    Ok(rows)
}

/// The one numeric-coercion policy: trim, parse as f64, reject non-finite.
///
/// Anything that fails (empty fields, the `NA` placeholder, stray text)
/// comes back as `None`, which ranks below every parsed value and renders
/// as `$0`.
pub fn parse_amount(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
