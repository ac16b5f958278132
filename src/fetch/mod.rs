// src/fetch/mod.rs
//! Loading the yearly disclosure files: one task per year, all-or-nothing.

pub mod directory;
pub mod sources;

use anyhow::{Context, Result};
use futures::future::try_join_all;
use reqwest::Client;
use tracing::{info, instrument};
use url::Url;

use crate::process::{self, SalaryData, SalaryRow};
use crate::fetch::sources::YearSource;

/// Fetch and parse every yearly file concurrently.
///
/// All-or-nothing: any failure fails the whole load, and the error names the
/// year and location that caused it. No partial dataset ever escapes.
#[instrument(level = "info", skip_all, fields(years = year_sources.len()))]
pub async fn load_all(client: &Client, year_sources: &[YearSource]) -> Result<SalaryData> {
    let mut handles = Vec::with_capacity(year_sources.len());
    for source in year_sources {
        let client = client.clone();
        let source = source.clone();
        handles.push(tokio::spawn(async move {
            let rows = load_year(&client, &source).await.with_context(|| {
                format!("loading year {} from {}", source.year, source.location)
            })?;
            Ok::<_, anyhow::Error>((source.year, rows))
        }));
    }

    let joined = try_join_all(handles).await.context("fetch task panicked")?;
    let mut data = SalaryData::new();
    for result in joined {
        let (year, rows) = result?;
        info!(year, rows = rows.len(), "year loaded");
        data.insert(year, rows);
    }
    Ok(data)
}

/// Fetch one year's CSV text and parse it into rows.
async fn load_year(client: &Client, source: &YearSource) -> Result<Vec<SalaryRow>> {
    let text = fetch_text(client, &source.location).await?;
    process::parse_rows(&text)
}

/// Raw resource text: HTTP for `http(s)://` locations, the filesystem for
/// everything else.
async fn fetch_text(client: &Client, location: &str) -> Result<String> {
    if location.starts_with("http://") || location.starts_with("https://") {
        let url =
            Url::parse(location).with_context(|| format!("invalid URL {}", location))?;
        let text = client
            .get(url)
            .send()
            .await
            .with_context(|| format!("requesting {}", location))?
            .error_for_status()?
            .text()
            .await?;
        Ok(text)
    } else {
        tokio::fs::read_to_string(location)
            .await
            .with_context(|| format!("reading {}", location))
    }
}
