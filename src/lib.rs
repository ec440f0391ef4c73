// src/lib.rs

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod file;
pub mod log;
pub mod progress;
pub mod record;
pub mod runner;
pub mod scrape;
pub mod specs;

pub use error::{PersistenceError, ScrapeError, TransportError};
pub use record::{DetailFields, Fondo, Layout, ListingFields};
