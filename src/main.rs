//! CLI entry point for indexwalk

use std::io::IsTerminal;
use std::path::Path;
use std::process;

use clap::Parser;
use indexwalk::{
    ConsolePresenter, CrawlConfig, CrawlOutput, Crawler, OutputConfig, Result, csv_filename,
    write_csv,
};
use tracing_subscriber::EnvFilter;
use url::Url;

const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Parser, Debug)]
#[command(name = "indexwalk")]
#[command(about = "Fetch and display files in a directory listing URL")]
#[command(version)]
struct Args {
    /// A URL with directory listing
    #[arg(long)]
    url: String,

    /// Also save the results to a CSV file
    #[arg(long)]
    csv: bool,
}

/// Determine whether to use color output from the environment.
fn should_use_color() -> bool {
    // Respect NO_COLOR environment variable (https://no-color.org/)
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }
    if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
        return false;
    }
    std::io::stdout().is_terminal()
}

/// Log to stderr, filtered by `RUST_LOG`.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging();

    if let Err(e) = run(&args) {
        eprintln!("indexwalk: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let mut presenter = ConsolePresenter::stdout(OutputConfig {
        use_color: should_use_color(),
        ..Default::default()
    });

    let root = match Url::parse(&args.url) {
        Ok(url) => url,
        Err(e) => {
            // An unusable root is reported like any other unreachable page.
            presenter.output_error(&args.url, &e, 0)?;
            return Ok(());
        }
    };

    let crawler = Crawler::with_http(CrawlConfig {
        collect_csv: args.csv,
        ..Default::default()
    })?;
    let records = crawler.crawl(&root, &mut presenter)?;

    if args.csv && !records.is_empty() {
        let filename = csv_filename(&args.url);
        write_csv(&records, Path::new(&filename))?;
        println!("CSV file created: {}", filename);
    }
    Ok(())
}
