// src/runner.rs
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use tracing::{info, warn};

use crate::{
    config::options::{DetailPolicy, Enrichment, ScrapeOptions},
    core::{Entropy, Transport},
    error::Result,
    file::append_record,
    progress::{NullProgress, Progress},
    record::{Fondo, Layout},
    scrape::Fetcher,
    specs::{listing, Fragment},
};

/// Blocks between detail requests. Swappable so tests don't sleep.
pub trait Pause {
    fn pause(&mut self, d: Duration);
}

pub struct ThreadSleep;

impl Pause for ThreadSleep {
    fn pause(&mut self, d: Duration) {
        if !d.is_zero() {
            thread::sleep(d);
        }
    }
}

/// Summary of what was produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Cards found on the listing.
    pub cards: usize,
    /// Rows written; also the last id assigned.
    pub written: usize,
    /// Cards left out: unreadable, or detail failures under `DetailPolicy::Skip`.
    pub skipped: usize,
    pub out_path: PathBuf,
}

/// Top-level run with real sleeping between detail requests.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run<T: Transport, E: Entropy>(
    opts: &ScrapeOptions,
    fetcher: &mut Fetcher<T, E>,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    run_with(opts, fetcher, &mut ThreadSleep, progress)
}

pub fn run_with<T: Transport, E: Entropy>(
    opts: &ScrapeOptions,
    fetcher: &mut Fetcher<T, E>,
    pause: &mut dyn Pause,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    let mut null = NullProgress;
    let sink: &mut dyn Progress = match progress {
        Some(p) => p,
        None => &mut null,
    };
    let result = drive(opts, fetcher, pause, sink);
    sink.finish();
    result
}

fn drive<T: Transport, E: Entropy>(
    opts: &ScrapeOptions,
    fetcher: &mut Fetcher<T, E>,
    pause: &mut dyn Pause,
    progress: &mut dyn Progress,
) -> Result<RunSummary> {
    let cards = fetcher.fetch_listing(&opts.listing_url)?;
    progress.begin(cards.len());
    if cards.is_empty() {
        progress.log("No funds found on the listing.");
    }
    write_cards(opts, fetcher, &cards, pause, progress)
}

/// Per-record stage: extract, enrich, append. Ids follow write order.
fn write_cards<T: Transport, E: Entropy>(
    opts: &ScrapeOptions,
    fetcher: &mut Fetcher<T, E>,
    cards: &[Fragment],
    pause: &mut dyn Pause,
    progress: &mut dyn Progress,
) -> Result<RunSummary> {
    let layout = match opts.enrichment {
        Enrichment::Full => Layout::Enriched,
        Enrichment::ListingOnly => Layout::ListingOnly,
    };

    let mut written = 0usize;
    let mut skipped = 0usize;
    let mut detail_requests = 0usize;

    for fragment in cards {
        let Some(fields) = listing::extract(fragment, fetcher.listing_selectors(), &opts.base_url) else {
            skipped += 1;
            progress.item_skipped(&format!("card #{}", fragment.position() + 1), "unreadable card");
            continue;
        };
        let mut fondo = Fondo::partial(fields);

        if opts.enrichment == Enrichment::Full {
            if detail_requests > 0 {
                let d = fetcher.entropy().delay(opts.delay);
                pause.pause(d);
            }
            detail_requests += 1;

            match fetcher.fetch_detail(fondo.url()) {
                Ok(detail) => fondo = fondo.enrich(detail),
                Err(e) if opts.detail_policy == DetailPolicy::Skip => {
                    warn!(url = e.url().unwrap_or(fondo.url()), "detail unavailable, record skipped: {e}");
                    skipped += 1;
                    progress.item_skipped(fondo.url(), &e.to_string());
                    continue;
                }
                Err(e) => return Err(e.into()),
            }
        }

        let id = written + 1;
        append_record(&opts.out_path, &fondo, id, written > 0, layout)?;
        written = id;

        info!(id, url = fondo.url(), "fund saved");
        progress.item_done(id, fondo.title());
    }

    Ok(RunSummary {
        cards: cards.len(),
        written,
        skipped,
        out_path: opts.out_path.clone(),
    })
}
