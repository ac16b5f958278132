// src/fetch/sources.rs
//! Where the yearly disclosure files live.

use std::env;

/// Disclosure years this tool knows about.
pub static DATA_YEARS: &[u16] = &[2013, 2014, 2015, 2016, 2017, 2018, 2019];

/// Default location base: a local `data` directory next to the binary.
pub const DEFAULT_BASE: &str = "data";

/// Environment override for the location base. An `http(s)://` base makes
/// the loader fetch over the network instead of the filesystem.
pub const BASE_ENV: &str = "SALARY_DATA_BASE";

/// Environment variable holding the staff directory endpoint. Unset means
/// directory enrichment stays off.
pub const DIRECTORY_ENV: &str = "SALARY_DIRECTORY_URL";

/// One year's resource location, either a URL or a filesystem path.
#[derive(Debug, Clone)]
pub struct YearSource {
    pub year: u16,
    pub location: String,
}

/// Resource locations for every known year under `base`.
pub fn year_sources(base: &str) -> Vec<YearSource> {
    let base = base.trim_end_matches('/');
    DATA_YEARS
        .iter()
        .map(|&year| YearSource {
            year,
            location: format!("{}/{}_data.csv", base, year),
        })
        .collect()
}

/// The configured location base, from the environment or the default.
pub fn data_base() -> String {
    env::var(BASE_ENV).unwrap_or_else(|_| DEFAULT_BASE.to_string())
}

/// The configured directory endpoint, if enrichment is enabled.
pub fn directory_endpoint() -> Option<String> {
    env::var(DIRECTORY_ENV).ok().filter(|value| !value.is_empty())
}
