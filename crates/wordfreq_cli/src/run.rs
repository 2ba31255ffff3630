use std::time::Duration;

use anyhow::Context;
use wordfreq_core::{build_report, format_ranking};
use wordfreq_engine::{fetch_page_text, DivTextExtractor, FetchSettings, ReqwestFetcher};

use crate::cli::Cli;

const WORDS_LABEL: &str = "Top 10 Frequent Words - ";
const PAIRS_LABEL: &str = "Top 10 Frequent Word Pairs - ";

/// Drives the whole run: fetch the page, build the report, print it.
pub async fn run(cli: &Cli) -> anyhow::Result<()> {
    let url = url::Url::parse(&cli.url)
        .with_context(|| format!("invalid url {:?}", cli.url))?;

    let settings = FetchSettings {
        request_timeout: Duration::from_secs(cli.timeout_secs),
        max_bytes: cli.max_bytes,
        ..FetchSettings::default()
    };
    let fetcher = ReqwestFetcher::new(settings);

    let text = fetch_page_text(&fetcher, &DivTextExtractor, url.as_str())
        .await
        .context("failed to harvest page text")?;

    let report = build_report(&text);
    println!("{WORDS_LABEL}");
    println!("{}", format_ranking(&report.words));
    println!("{PAIRS_LABEL}");
    println!("{}", format_ranking(&report.pairs));
    Ok(())
}
