// src/cli.rs
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use color_eyre::eyre::WrapErr;
use tracing::info;

use crate::config::consts::{DEFAULT_OUT_FILE, STORE_DIR};
use crate::config::options::{DelayRange, DetailPolicy, Enrichment, ScrapeOptions};
use crate::core::sanitize::normalize_ws;
use crate::core::{FastEntropy, HttpTransport};
use crate::progress::Progress;
use crate::runner::{self, RunSummary};
use crate::scrape::Fetcher;

/// Scrape the fondos.gob.cl listing into a CSV file. Runs with no flags.
#[derive(Debug, Parser)]
#[command(name = "fondos_scrape", version, about)]
pub struct Args {
    /// Output CSV file (overwritten)
    #[arg(short, long, default_value = DEFAULT_OUT_FILE)]
    pub out: PathBuf,

    /// Listing page to start from
    #[arg(long)]
    pub listing_url: Option<String>,

    /// What to do when a fund's detail page cannot be fetched
    #[arg(long, value_enum, default_value_t = OnDetailError::Abort)]
    pub on_detail_error: OnDetailError,

    /// Write the listing fields only; skip detail pages
    #[arg(long)]
    pub listing_only: bool,

    /// Lower bound of the pause between detail requests
    #[arg(long)]
    pub min_delay_ms: Option<u64>,

    /// Upper bound of the pause between detail requests
    #[arg(long)]
    pub max_delay_ms: Option<u64>,

    /// Directory for debug.log
    #[arg(long, default_value = STORE_DIR)]
    pub log_dir: PathBuf,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OnDetailError {
    Abort,
    Skip,
}

impl Args {
    pub fn to_options(&self) -> ScrapeOptions {
        let mut opts = ScrapeOptions {
            out_path: self.out.clone(),
            ..ScrapeOptions::default()
        };
        if let Some(url) = &self.listing_url {
            opts.listing_url = url.clone();
        }
        opts.detail_policy = match self.on_detail_error {
            OnDetailError::Abort => DetailPolicy::Abort,
            OnDetailError::Skip => DetailPolicy::Skip,
        };
        if self.listing_only {
            opts.enrichment = Enrichment::ListingOnly;
        }
        let d = opts.delay;
        opts.delay = DelayRange::new(
            self.min_delay_ms.unwrap_or(d.min_ms()),
            self.max_delay_ms.unwrap_or(d.max_ms()),
        );
        opts
    }
}

/// Run the whole pipeline against the live site.
pub fn run(args: &Args) -> color_eyre::Result<RunSummary> {
    let opts = args.to_options();
    info!(?opts, "starting run");

    let transport = HttpTransport::new()?;
    let mut fetcher = Fetcher::new(transport, FastEntropy::new())?;
    let mut progress = ConsoleProgress::default();

    println!("Extracting funds from {}...", opts.listing_url);
    let summary = runner::run(&opts, &mut fetcher, Some(&mut progress))
        .wrap_err("scrape aborted")?;

    println!();
    println!("Done. Wrote {}", summary.out_path.display());
    if summary.skipped > 0 {
        println!("Skipped: {}", summary.skipped);
    }
    println!("Total funds processed: {}", summary.written);
    Ok(summary)
}

/// Prints one line per event to stdout.
#[derive(Default)]
pub struct ConsoleProgress {
    total: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        println!("Found {total} funds on the listing");
    }

    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }

    fn item_done(&mut self, id: usize, title: &str) {
        println!("[{id}/{}] Saved fund {id}: {}", self.total, normalize_ws(title));
    }

    fn item_skipped(&mut self, url: &str, reason: &str) {
        println!("Skipped {url}: {reason}");
    }
}
