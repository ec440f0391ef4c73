// src/core/net.rs

// Blocking HTTP GET behind a small trait so the pipeline can run against fakes.

use reqwest::blocking::Client;
use tracing::debug;

use crate::error::TransportError;

/// Header name/value pairs sent with one request.
pub type Headers = [(&'static str, String)];

pub trait Transport {
    /// GET `url` and return the body. Non-2xx responses are errors.
    fn get(&self, url: &str, headers: &Headers) -> Result<String, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, url: &str, headers: &Headers) -> Result<String, TransportError> {
        (**self).get(url, headers)
    }
}

/// `reqwest::blocking` transport. Keeps reqwest's default timeouts.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, TransportError> {
        let client = Client::builder()
            .build()
            .map_err(|source| TransportError::Client { source })?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str, headers: &Headers) -> Result<String, TransportError> {
        let mut req = self.client.get(url);
        for (name, value) in headers {
            req = req.header(*name, value.as_str());
        }

        let resp = req
            .send()
            .map_err(|source| TransportError::Request { url: url.to_string(), source })?;

        let status = resp.status();
        debug!(url, status = status.as_u16(), "GET");
        if !status.is_success() {
            return Err(TransportError::Status { url: url.to_string(), status: status.as_u16() });
        }

        resp.text()
            .map_err(|source| TransportError::Body { url: url.to_string(), source })
    }
}
