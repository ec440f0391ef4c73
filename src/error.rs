// src/error.rs
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Network-side failures. Always fatal unless the driver's detail policy says otherwise.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("could not build HTTP client: {source}")]
    Client {
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("could not read response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl TransportError {
    /// The URL the failure belongs to; `None` before any request was made.
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Client { .. } => None,
            Self::Request { url, .. } | Self::Status { url, .. } | Self::Body { url, .. } => Some(url),
        }
    }
}

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("CSV error on {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Lenient-tier failure: one card could not be read. Never leaves `specs::listing`.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("fragment {position} holds no fund card")]
    EmptyFragment { position: usize },
}

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    #[error("invalid selector `{selector}`: {reason}")]
    Selector { selector: String, reason: String },
}

pub type Result<T, E = ScrapeError> = std::result::Result<T, E>;
