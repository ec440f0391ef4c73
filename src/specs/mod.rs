//! # Page specs
//!
//! Pure HTML parsing for the two pages the scraper reads. Each module encodes
//! *where the data lives in the markup* and *how to read it defensively*.
//!
//! ## What lives here
//! - **Selector choice and precedence** (e.g. the scope badge is `span.text-white`
//!   on some cards and `span.text-dark` on others; first match wins).
//! - **Field-level fallbacks**: every lookup is an `Option` chain that collapses
//!   to an empty string. A missing element never aborts a card.
//! - **Card splitting**: the listing is cut into owned [`listing::Fragment`]s so
//!   each card can be read on its own.
//!
//! ## What does **not** live here
//! - **Networking** (`scrape::Fetcher`), **pacing and ordering** (`runner`),
//!   **persistence** (`file`).
//!
//! ## Typical call chain
//! ```text
//! runner → Fetcher::fetch_listing → listing::split_cards
//!        → listing::extract (per card)
//!        → Fetcher::fetch_detail  → detail::parse
//!        → file::append_record
//! ```
//!
//! ## Testing notes
//! Specs run offline against inline HTML snippets shaped like the live site.
pub mod detail;
pub mod listing;

pub use detail::DetailSelectors;
pub use listing::{Fragment, ListingSelectors};
