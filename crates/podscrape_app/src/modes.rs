use std::fs;
use std::future::Future;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use anyhow::{bail, Context};
use podscrape_core::{render_report, SearchResult};
use podscrape_engine::{save_json, Fetcher, PodScraper};
use scrape_logging::scrape_info;
use tokio::sync::mpsc;

use crate::cli::Args;

const EXIT_COMMANDS: &[&str] = &["exit", "quit", "q"];

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub output: PathBuf,
    pub delay: Duration,
    pub quiet: bool,
}

impl From<&Args> for RunOptions {
    fn from(args: &Args) -> Self {
        Self {
            output: args.output.clone(),
            delay: args.delay,
            quiet: args.quiet,
        }
    }
}

pub async fn run_single<F: Fetcher, W: Write>(
    scraper: &PodScraper<F>,
    query: &str,
    out: &mut W,
    options: &RunOptions,
) -> anyhow::Result<SearchResult> {
    let result = scraper.search(query, options.delay).await;
    if !options.quiet {
        write!(out, "{}", render_report(&result))?;
    }
    save(&options.output, &result)?;
    if !options.quiet {
        writeln!(out, "\n✓ Results saved to: {}", options.output.display())?;
    }
    Ok(result)
}

pub async fn run_file<F: Fetcher, W: Write>(
    scraper: &PodScraper<F>,
    path: &Path,
    out: &mut W,
    options: &RunOptions,
) -> anyhow::Result<Vec<SearchResult>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("cannot read query file {}", path.display()))?;
    let queries = parse_queries(&text);
    if queries.is_empty() {
        bail!("query file {} is empty or has no valid queries", path.display());
    }
    scrape_info!("Read {} queries from {}", queries.len(), path.display());

    let results = scraper.search_multiple(&queries, options.delay).await;
    if !options.quiet {
        for result in &results {
            write!(out, "{}", render_report(result))?;
        }
    }
    save(&options.output, &results)?;
    writeln!(
        out,
        "\n✓ All {} result(s) saved to: {}",
        results.len(),
        options.output.display()
    )?;
    Ok(results)
}

/// Read lines from `input` on a dedicated thread so the session can wait for
/// the next query and for an interrupt at the same time.
pub fn spawn_line_reader<R>(mut input: R) -> mpsc::Receiver<io::Result<String>>
where
    R: BufRead + Send + 'static,
{
    let (tx, rx) = mpsc::channel(1);
    thread::spawn(move || loop {
        let mut line = String::new();
        let item = match input.read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => Ok(line),
            Err(err) => Err(err),
        };
        let failed = item.is_err();
        if tx.blocking_send(item).is_err() || failed {
            break;
        }
    });
    rx
}

/// Prompt for queries until an exit command, end of input or `shutdown`
/// resolves, then save everything collected during the session.
///
/// An interrupt while a query is in flight abandons that query only.
pub async fn run_interactive<F, W, S>(
    scraper: &PodScraper<F>,
    mut lines: mpsc::Receiver<io::Result<String>>,
    shutdown: S,
    out: &mut W,
    options: &RunOptions,
) -> anyhow::Result<Vec<SearchResult>>
where
    F: Fetcher,
    W: Write,
    S: Future<Output = ()>,
{
    tokio::pin!(shutdown);

    let rule = "=".repeat(80);
    writeln!(out, "{rule}\npodscrape - interactive mode\n{rule}")?;
    writeln!(out, "\nType a query (or 'exit' to quit)")?;
    writeln!(out, "Examples: quadratic formula, pythagorean theorem")?;

    let mut results = Vec::new();
    loop {
        write!(out, "\nQuery: ")?;
        out.flush()?;

        let next = tokio::select! {
            biased;
            line = lines.recv() => Some(line),
            () = &mut shutdown => None,
        };
        let Some(line) = next else {
            writeln!(out, "\n\nInterrupted by user")?;
            break;
        };
        let Some(line) = line.transpose()? else {
            break;
        };

        let query = line.trim();
        if is_exit_command(query) {
            break;
        }
        if query.is_empty() {
            continue;
        }

        let searched = tokio::select! {
            biased;
            result = scraper.search(query, options.delay) => Some(result),
            () = &mut shutdown => None,
        };
        let Some(result) = searched else {
            writeln!(out, "\n\nInterrupted by user")?;
            break;
        };
        if !options.quiet {
            write!(out, "{}", render_report(&result))?;
        }
        results.push(result);
    }

    if !results.is_empty() {
        save(&options.output, &results)?;
        writeln!(
            out,
            "\n✓ Total {} result(s) saved to: {}",
            results.len(),
            options.output.display()
        )?;
    }
    writeln!(out, "\nThanks for using podscrape!")?;
    Ok(results)
}

fn save<T: serde::Serialize + ?Sized>(path: &Path, value: &T) -> anyhow::Result<()> {
    save_json(path, value).with_context(|| format!("cannot save results to {}", path.display()))?;
    scrape_info!("Results saved to {}", path.display());
    Ok(())
}

fn parse_queries(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

fn is_exit_command(input: &str) -> bool {
    EXIT_COMMANDS
        .iter()
        .any(|cmd| cmd.eq_ignore_ascii_case(input))
}
