// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;

/// What the driver does when one record's detail page cannot be fetched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DetailPolicy {
    /// Propagate the transport error and end the run.
    #[default]
    Abort,
    /// Log it, leave the record out and keep going.
    Skip,
}

/// How far each record is taken before it is written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Enrichment {
    /// Listing card plus detail page.
    #[default]
    Full,
    /// Listing card only; no detail requests are made.
    ListingOnly,
}

/// Inclusive bounds for the pause between detail requests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DelayRange {
    min_ms: u64,
    max_ms: u64,
}

impl DelayRange {
    /// Bounds given in the wrong order are swapped.
    pub fn new(a_ms: u64, b_ms: u64) -> Self {
        Self { min_ms: a_ms.min(b_ms), max_ms: a_ms.max(b_ms) }
    }

    pub fn none() -> Self {
        Self::new(0, 0)
    }

    pub fn min_ms(&self) -> u64 { self.min_ms }
    pub fn max_ms(&self) -> u64 { self.max_ms }

    pub fn is_zero(&self) -> bool {
        self.max_ms == 0
    }

    pub fn min(&self) -> Duration { Duration::from_millis(self.min_ms) }
    pub fn max(&self) -> Duration { Duration::from_millis(self.max_ms) }
}

impl Default for DelayRange {
    fn default() -> Self {
        Self::new(DELAY_MIN_MS, DELAY_MAX_MS)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub listing_url: String,
    /// Origin prepended to path-relative card links.
    pub base_url: String,
    pub out_path: PathBuf,
    pub delay: DelayRange,
    pub detail_policy: DetailPolicy,
    pub enrichment: Enrichment,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            listing_url: LISTING_URL.to_string(),
            base_url: BASE_URL.to_string(),
            out_path: PathBuf::from(DEFAULT_OUT_FILE),
            delay: DelayRange::default(),
            detail_policy: DetailPolicy::default(),
            enrichment: Enrichment::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delay_range_swaps_reversed_bounds() {
        let d = DelayRange::new(3_000, 1_000);
        assert_eq!(d.min_ms(), 1_000);
        assert_eq!(d.max_ms(), 3_000);
        assert!(!d.is_zero());
        assert!(DelayRange::none().is_zero());
    }

    #[test]
    fn defaults_point_at_the_live_site() {
        let o = ScrapeOptions::default();
        assert_eq!(o.listing_url, "https://fondos.gob.cl/searchernew/");
        assert_eq!(o.base_url, "https://fondos.gob.cl");
        assert_eq!(o.out_path, PathBuf::from("fondos.csv"));
        assert_eq!(o.detail_policy, DetailPolicy::Abort);
        assert_eq!(o.enrichment, Enrichment::Full);
        assert_eq!(o.delay, DelayRange::new(1_000, 3_000));
    }
}
