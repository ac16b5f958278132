// src/ui/mod.rs
//! The interactive session: a line protocol over stdin. Plain lines are
//! search text and settle through the debouncer before they run; `:`
//! commands (paging, help, quit) act immediately.

pub mod debounce;
pub mod render;

use anyhow::Result;
use reqwest::Client;
use serde_json::json;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::debug;
use url::Url;

use crate::fetch::directory;
use crate::process::aggregate::PersonIndex;
use crate::query::{self, page};
use crate::ui::debounce::Debouncer;
use crate::view;

/// How long search input must sit quiet before it runs.
const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// One parsed input line.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// Search text changed. Empty text means back to exploring everyone.
    Query(String),
    /// Jump straight to a 1-based page.
    Page(usize),
    NextPage,
    PrevPage,
    Help,
    Quit,
}

/// What the session is currently showing.
#[derive(Debug, Clone)]
enum Mode {
    Explore,
    Search(String),
}

struct SessionState {
    mode: Mode,
    page_no: usize,
}

/// Map one stdin line onto an event. Lines starting with `:` are commands;
/// anything else is search text, exactly as typed.
pub fn parse_event(line: &str) -> UiEvent {
    let command = match line.strip_prefix(':') {
        Some(command) => command,
        None => return UiEvent::Query(line.to_string()),
    };
    let mut words = command.split_whitespace();
    match words.next() {
        Some("q") | Some("quit") | Some("exit") => UiEvent::Quit,
        Some("n") | Some("next") => UiEvent::NextPage,
        Some("p") | Some("prev") => UiEvent::PrevPage,
        Some("h") | Some("help") => UiEvent::Help,
        Some("page") => match words.next().and_then(|n| n.parse().ok()) {
            Some(number) => UiEvent::Page(number),
            None => UiEvent::Help,
        },
        Some(word) => match word.parse() {
            Ok(number) => UiEvent::Page(number),
            Err(_) => UiEvent::Help,
        },
        None => UiEvent::Help,
    }
}

/// Run the interactive session until quit or stdin closes.
pub async fn run(index: &PersonIndex, client: &Client, directory_url: Option<Url>) -> Result<()> {
    let (query_tx, mut settled) = Debouncer::channel(SEARCH_DEBOUNCE);
    let (direct_tx, mut direct_rx) = mpsc::unbounded_channel();

    // Reader task: route queries through the debouncer, commands around it.
    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            let event = parse_event(&line);
            let quitting = event == UiEvent::Quit;
            let sent = match event {
                UiEvent::Query(text) => query_tx.send(text).is_ok(),
                other => direct_tx.send(other).is_ok(),
            };
            if !sent || quitting {
                break;
            }
        }
    });

    println!("{}", render::usage());
    let mut state = SessionState {
        mode: Mode::Explore,
        page_no: 1,
    };
    refresh(index, client, directory_url.as_ref(), &mut state, false).await;

    loop {
        let event = tokio::select! {
            settled_query = settled.next() => match settled_query {
                Some(text) => UiEvent::Query(text),
                None => break,
            },
            command = direct_rx.recv() => match command {
                Some(event) => event,
                None => break,
            },
        };

        let mut clamp_to_last = false;
        match event {
            UiEvent::Query(text) => {
                state.mode = if text.is_empty() {
                    Mode::Explore
                } else {
                    Mode::Search(text)
                };
                state.page_no = 1;
            }
            UiEvent::Page(number) => state.page_no = number,
            UiEvent::NextPage => {
                state.page_no += 1;
                clamp_to_last = true;
            }
            UiEvent::PrevPage => state.page_no = state.page_no.saturating_sub(1).max(1),
            UiEvent::Help => {
                println!("{}", render::usage());
                continue;
            }
            UiEvent::Quit => break,
        }

        refresh(index, client, directory_url.as_ref(), &mut state, clamp_to_last).await;
    }

    Ok(())
}

/// Re-run the current query and print the current page.
async fn refresh(
    index: &PersonIndex,
    client: &Client,
    directory_url: Option<&Url>,
    state: &mut SessionState,
    clamp_to_last: bool,
) {
    let results = match &state.mode {
        Mode::Explore => query::explore(index),
        Mode::Search(text) => query::search(index, text),
    };
    let pages = page::page_count(results.len());
    if clamp_to_last {
        state.page_no = state.page_no.min(pages.max(1));
    }
    debug!(
        results = results.len(),
        page = state.page_no,
        "rendering page"
    );

    let slice = page::page(&results, state.page_no);
    let mut views = view::page_views(slice);
    if let Some(endpoint) = directory_url {
        directory::enrich(client, endpoint, slice, &mut views).await;
    }

    let heading = match &state.mode {
        Mode::Explore => render::EXPLORE_HEADING.to_string(),
        Mode::Search(text) => render::search_heading(text),
    };
    println!(
        "{}",
        render::page_text(&heading, &views, state.page_no, pages, results.len())
    );
}

/// Run one query and print one page, as text or a JSON envelope.
pub async fn one_shot(
    index: &PersonIndex,
    client: &Client,
    directory_url: Option<Url>,
    query_text: Option<&str>,
    page_no: usize,
    as_json: bool,
) -> Result<()> {
    let results = match query_text {
        Some(text) => query::search(index, text),
        None => query::explore(index),
    };
    let pages = page::page_count(results.len());
    let slice = page::page(&results, page_no);
    let mut views = view::page_views(slice);
    if let Some(endpoint) = directory_url.as_ref() {
        directory::enrich(client, endpoint, slice, &mut views).await;
    }

    if as_json {
        let envelope = json!({
            "query": query_text,
            "page": page_no,
            "pages": pages,
            "people": results.len(),
            "results": views,
        });
        println!("{}", serde_json::to_string_pretty(&envelope)?);
    } else {
        let heading = match query_text {
            Some(text) => render::search_heading(text),
            None => render::EXPLORE_HEADING.to_string(),
        };
        println!(
            "{}",
            render::page_text(&heading, &views, page_no, pages, results.len())
        );
    }
    Ok(())
}
