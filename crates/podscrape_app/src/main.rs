mod cli;
mod modes;

use std::io::{self, BufReader};

use anyhow::Context;
use clap::{CommandFactory, Parser};
use podscrape_engine::{ClientConfig, PodScraper, SearchSettings};
use scrape_logging::{scrape_error, scrape_warn, LogDestination, LogSettings};

use crate::cli::{Args, Mode};
use crate::modes::RunOptions;

fn main() {
    let args = Args::parse();

    let mut log_settings = if args.quiet {
        LogSettings::quiet()
    } else {
        LogSettings::default()
    };
    if let Some(path) = &args.log_file {
        log_settings.destination = LogDestination::TerminalAndFile(path.clone());
    }
    scrape_logging::initialize(&log_settings);

    let Some(mode) = args.mode() else {
        if let Err(err) = Args::command().print_help() {
            eprintln!("{err}");
        }
        return;
    };

    if let Err(err) = run(mode, RunOptions::from(&args)) {
        scrape_error!("{:#}", err);
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run(mode: Mode, options: RunOptions) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    runtime.block_on(async {
        let scraper = PodScraper::from_config(&ClientConfig::default(), SearchSettings::default())
            .context("failed to build HTTP client")?;
        let mut stdout = io::stdout();
        match mode {
            Mode::Single(query) => {
                modes::run_single(&scraper, &query, &mut stdout, &options).await?;
            }
            Mode::File(path) => {
                modes::run_file(&scraper, &path, &mut stdout, &options).await?;
            }
            Mode::Interactive => {
                let lines = modes::spawn_line_reader(BufReader::new(io::stdin()));
                modes::run_interactive(&scraper, lines, ctrl_c(), &mut stdout, &options).await?;
            }
        }
        Ok(())
    })
}

/// Resolves on Ctrl-C. If the handler cannot be installed it never resolves,
/// leaving the default signal behaviour in place.
async fn ctrl_c() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        scrape_warn!("Cannot listen for Ctrl-C: {}", err);
        std::future::pending::<()>().await;
    }
}
