// src/scrape/mod.rs
mod fetcher;

pub use fetcher::Fetcher;
