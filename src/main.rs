//! Linktally main entry point
//!
//! Command-line interface for the linktally same-site link census crawler.

use anyhow::Context;
use clap::Parser;
use linktally::crawler::{crawl, DEFAULT_MAX_CONCURRENCY};
use linktally::report::print_report;
use tracing_subscriber::EnvFilter;

/// Linktally: count internal link references across a website
///
/// Crawls a single website starting from the given base URL, follows
/// same-host links, and reports how many times each distinct page was
/// referenced.
#[derive(Parser, Debug)]
#[command(name = "linktally")]
#[command(version)]
#[command(about = "Count internal link references across a website", long_about = None)]
struct Cli {
    /// Base URL to start crawling from
    #[arg(value_name = "BASE_URL")]
    base_url: String,

    /// Maximum number of simultaneous fetches
    #[arg(short = 'c', long, default_value_t = DEFAULT_MAX_CONCURRENCY)]
    max_concurrency: usize,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Starting crawl at base URL: {}", cli.base_url);

    let pages = crawl(&cli.base_url, cli.max_concurrency)
        .await
        .with_context(|| format!("crawl of {} failed", cli.base_url))?;

    tracing::info!("Crawl finished: {} distinct pages", pages.len());

    print_report(&pages, &cli.base_url);

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("linktally=info,warn"),
            1 => EnvFilter::new("linktally=debug,info"),
            2 => EnvFilter::new("linktally=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
