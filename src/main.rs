use anyhow::{bail, Context, Result};
use reqwest::Client;
use salexplorer::{
    fetch::{self, sources},
    process::aggregate::PersonIndex,
    ui,
};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};
use url::Url;

/// What the command line asked for. No arguments means an interactive
/// session; `search` and `explore` print one page and exit.
enum Command {
    Interactive,
    Search {
        query: String,
        page: usize,
        json: bool,
    },
    Explore {
        page: usize,
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,salexplorer=info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .init();
    info!("startup");

    let command = parse_command(std::env::args().skip(1).collect())?;

    // ─── 2) load every year ──────────────────────────────────────────
    let client = Client::new();
    let base = sources::data_base();
    let year_sources = sources::year_sources(&base);
    println!(
        "Loading {} yearly datasets from {}...",
        year_sources.len(),
        base
    );

    let data = match fetch::load_all(&client, &year_sources).await {
        Ok(data) => data,
        Err(err) => {
            println!("{}", ui::render::LOAD_FAILED);
            return Err(err);
        }
    };

    // ─── 3) group rows into people ───────────────────────────────────
    let index = PersonIndex::build(data);
    println!(
        "{} {} people across {} years.",
        ui::render::LOADED,
        index.person_count(),
        index.years().len()
    );

    let directory_url = match sources::directory_endpoint() {
        Some(raw) => Some(Url::parse(&raw).with_context(|| {
            format!("invalid {} value {:?}", sources::DIRECTORY_ENV, raw)
        })?),
        None => None,
    };

    // ─── 4) serve the request ────────────────────────────────────────
    match command {
        Command::Interactive => ui::run(&index, &client, directory_url).await,
        Command::Search { query, page, json } => {
            ui::one_shot(&index, &client, directory_url, Some(&query), page, json).await
        }
        Command::Explore { page, json } => {
            ui::one_shot(&index, &client, directory_url, None, page, json).await
        }
    }
}

fn parse_command(args: Vec<String>) -> Result<Command> {
    let (head, rest) = match args.split_first() {
        Some((head, rest)) => (head, rest),
        None => return Ok(Command::Interactive),
    };
    match head.as_str() {
        "search" => {
            let (query, flags) = match rest.split_first() {
                Some((query, flags)) if !query.starts_with("--") => (query.clone(), flags),
                _ => bail!("usage: salexplorer search <query> [--page N] [--json]"),
            };
            let (page, json) = parse_flags(flags)?;
            Ok(Command::Search { query, page, json })
        }
        "explore" => {
            let (page, json) = parse_flags(rest)?;
            Ok(Command::Explore { page, json })
        }
        other => bail!(
            "unknown command {:?}; expected `search`, `explore`, or no arguments",
            other
        ),
    }
}

fn parse_flags(args: &[String]) -> Result<(usize, bool)> {
    let mut page = 1;
    let mut json = false;
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--page" => {
                page = iter
                    .next()
                    .and_then(|n| n.parse().ok())
                    .context("--page needs a number")?;
            }
            "--json" => json = true,
            other => bail!("unknown flag {:?}", other),
        }
    }
    Ok((page, json))
}
