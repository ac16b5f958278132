// src/fetch/directory.rs
//! Best-effort staff directory enrichment.
//!
//! The disclosure files carry no job titles, so when a directory endpoint is
//! configured we POST each displayed person's name at it and scrape the
//! title and department out of the HTML it returns. Any failure just leaves
//! the person without directory details; a page render never fails because
//! the directory is down.

use once_cell::sync::Lazy;
use reqwest::Client;
use scraper::{Html, Selector};
use std::time::Duration;
use tokio::time::sleep;
use tracing::debug;
use url::Url;

use crate::process::aggregate::{latest, PersonHistory};
use crate::view::PersonView;

/// Pause between successive lookups so a page of ten does not hammer the
/// directory service.
const REQUEST_SPACING: Duration = Duration::from_millis(100);

static TITLE: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".title").expect("Invalid CSS selector for titles"));
static DEPARTMENT: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".department").expect("Invalid CSS selector for departments"));

/// Title and department as the directory reports them.
#[derive(Debug, Default, PartialEq)]
pub struct DirectoryEntry {
    pub title: Option<String>,
    pub department: Option<String>,
}

/// Look one person up. The directory expects a single `searchTerm` form
/// field shaped `First+Last`. Transport and HTTP failures are logged at
/// debug level and yield `None`; there are no retries.
pub async fn lookup(
    client: &Client,
    endpoint: &Url,
    first: &str,
    last: &str,
) -> Option<DirectoryEntry> {
    let term = format!("{}+{}", first, last);
    let response = client
        .post(endpoint.clone())
        .form(&[("searchTerm", term.as_str())])
        .send()
        .await
        .and_then(|resp| resp.error_for_status());

    let resp = match response {
        Ok(resp) => resp,
        Err(err) => {
            debug!(term = %term, err = %err, "directory lookup failed");
            return None;
        }
    };

    match resp.text().await {
        Ok(html) => Some(parse_directory_html(&html)),
        Err(err) => {
            debug!(term = %term, err = %err, "directory response unreadable");
            None
        }
    }
}

/// Pull the first `.title` and `.department` texts out of a directory
/// results document. Missing or blank elements come back as `None`.
pub fn parse_directory_html(html: &str) -> DirectoryEntry {
    let doc = Html::parse_document(html);
    let pick = |selector: &Selector| {
        doc.select(selector)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .filter(|text| !text.is_empty())
    };
    DirectoryEntry {
        title: pick(&TITLE),
        department: pick(&DEPARTMENT),
    }
}

/// Decorate one page of views with directory details, pacing the requests.
/// Lookups use each person's raw name fields from their newest row, since
/// that is the name the directory knows them by.
pub async fn enrich(
    client: &Client,
    endpoint: &Url,
    entries: &[(&str, &PersonHistory)],
    views: &mut [PersonView],
) {
    for (view, (_, history)) in views.iter_mut().zip(entries) {
        if let Some((_, row)) = latest(history) {
            if let Some(entry) = lookup(client, endpoint, row.first_name(), row.last_name()).await
            {
                view.title = entry.title;
                view.department = entry.department;
            }
        }
        sleep(REQUEST_SPACING).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrapes_title_and_department() {
        let html = r#"
            <html><body>
              <div class="result">
                <span class="title"> Lecturer </span>
                <span class="department">Economics</span>
              </div>
            </body></html>"#;

        let entry = parse_directory_html(html);
        assert_eq!(entry.title.as_deref(), Some("Lecturer"));
        assert_eq!(entry.department.as_deref(), Some("Economics"));
    }

    #[test]
    fn first_match_wins_when_the_page_lists_several() {
        let html = r#"
            <div class="title">Professor</div>
            <div class="title">Adjunct</div>
            <div class="department">Physics</div>"#;

        let entry = parse_directory_html(html);
        assert_eq!(entry.title.as_deref(), Some("Professor"));
    }

    #[test]
    fn missing_or_blank_elements_yield_none() {
        assert_eq!(
            parse_directory_html("<html><body>no matches</body></html>"),
            DirectoryEntry::default()
        );
        let blank = parse_directory_html(r#"<div class="title">   </div>"#);
        assert_eq!(blank.title, None);
    }

    #[test]
    fn nested_markup_flattens_to_text() {
        let html = r#"<p class="department">College of <b>Arts</b> and Sciences</p>"#;
        let entry = parse_directory_html(html);
        assert_eq!(
            entry.department.as_deref(),
            Some("College of Arts and Sciences")
        );
    }
}
