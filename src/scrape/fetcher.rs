// src/scrape/fetcher.rs

use tracing::{debug, error, info};

use crate::config::consts::{ACCEPT, ACCEPT_LANGUAGE, USER_AGENTS};
use crate::core::{Entropy, Transport};
use crate::error::{Result, TransportError};
use crate::record::DetailFields;
use crate::specs::{detail, listing, DetailSelectors, Fragment, ListingSelectors};

/// Network side of both pipeline stages. Owns the transport, the entropy used
/// for User-Agent rotation and the compiled selectors.
pub struct Fetcher<T: Transport, E: Entropy> {
    transport: T,
    entropy: E,
    listing_sel: ListingSelectors,
    detail_sel: DetailSelectors,
}

impl<T: Transport, E: Entropy> Fetcher<T, E> {
    pub fn new(transport: T, entropy: E) -> Result<Self> {
        Ok(Self {
            transport,
            entropy,
            listing_sel: ListingSelectors::new()?,
            detail_sel: DetailSelectors::new()?,
        })
    }

    pub fn listing_selectors(&self) -> &ListingSelectors {
        &self.listing_sel
    }

    pub fn entropy(&mut self) -> &mut E {
        &mut self.entropy
    }

    fn headers(&mut self) -> [(&'static str, String); 3] {
        [
            ("User-Agent", self.entropy.pick(&USER_AGENTS).to_string()),
            ("Accept", ACCEPT.to_string()),
            ("Accept-Language", ACCEPT_LANGUAGE.to_string()),
        ]
    }

    fn get(&mut self, url: &str) -> Result<String, TransportError> {
        let headers = self.headers();
        self.transport.get(url, &headers).inspect_err(|e| {
            error!(url, "request failed: {e}");
        })
    }

    /// One GET of the listing page, cut into card fragments. No cards is not an error.
    pub fn fetch_listing(&mut self, url: &str) -> Result<Vec<Fragment>> {
        info!(url, "fetching listing");
        let body = self.get(url)?;
        let cards = listing::split_cards(&body, &self.listing_sel);
        info!(count = cards.len(), "listing cards found");
        Ok(cards)
    }

    /// One GET of a fund's page. Transport failures are returned, never swallowed.
    pub fn fetch_detail(&mut self, url: &str) -> Result<DetailFields, TransportError> {
        debug!(url, "fetching detail");
        let body = self.get(url)?;
        Ok(detail::parse(&body, &self.detail_sel))
    }
}
