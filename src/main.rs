//! Pharos main entry point
//!
//! This is the command-line interface for the Pharos site quality scanner.

use clap::Parser;
use pharos::audit::HttpAuditRunner;
use pharos::config::load_config_with_hash;
use pharos::prompt::{collect_scan_request, ScanMode, StdinInput};
use pharos::report::print_scan_summary;
use pharos::sitemap::{build_http_client, resolve_page_urls, resolve_sitemap};
use pharos::store::ResultStore;
use pharos::{PharosError, Scanner};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Pharos: a resumable site-wide page quality scanner
///
/// Pharos discovers a site's pages through its sitemap, audits each page
/// for performance, accessibility, best practices, and SEO, and saves
/// results after every page so an interrupted scan picks up where it
/// stopped.
#[derive(Parser, Debug)]
#[command(name = "pharos")]
#[command(version)]
#[command(about = "A resumable site-wide page quality scanner", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG", default_value = "pharos.toml")]
    config: PathBuf,

    /// Site or sitemap URL (skips the interactive URL prompt)
    #[arg(long, value_name = "URL")]
    url: Option<String>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Unrecovered errors stop the run here; per-page audit failures are
    // recorded in the result file and never reach this point.
    if let Err(e) = run(cli).await {
        tracing::error!("Scan aborted: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    println!("Pharos site quality scanner");
    println!("Audits performance, accessibility, best practices, and SEO across a site.\n");

    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (config, config_hash) = load_config_with_hash(&cli.config)?;
    tracing::info!("Configuration loaded successfully (hash: {})", config_hash);

    let client = build_http_client()?;

    let mut input = StdinInput;
    let request = collect_scan_request(&mut input, cli.url)?;

    let urls = match &request.mode {
        ScanMode::SingleUrl { url } => vec![url.clone()],
        ScanMode::FullSite | ScanMode::Batched { .. } => {
            let sitemap_url = resolve_sitemap(&client, &request.site_url).await?;
            tracing::info!("Using sitemap: {}", sitemap_url);

            let urls = resolve_page_urls(&client, &sitemap_url).await?;
            if urls.is_empty() {
                return Err(PharosError::EmptySitemap(sitemap_url).into());
            }
            tracing::info!("Found {} URLs in the sitemap", urls.len());
            urls
        }
    };

    let runner = HttpAuditRunner::new(client.clone(), config.audit.endpoint.clone());
    let store = ResultStore::load(Path::new(&config.output.results_path));

    let mut scanner = Scanner::new(store, &runner, &config.scanner);
    if let ScanMode::Batched { size } = request.mode {
        scanner = scanner.with_page_limit(size);
    }

    let summary = scanner.run(&urls).await?;
    print_scan_summary(&summary, &config.output.results_path);

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("pharos=info,warn"),
            1 => EnvFilter::new("pharos=debug,info"),
            2 => EnvFilter::new("pharos=trace,debug"),
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
