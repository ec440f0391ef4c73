// tests/common/mod.rs
//
// Scripted transport and page fixtures shared by the integration tests.
//
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::Path;

use fondos_scrape::core::net::{Headers, Transport};
use fondos_scrape::TransportError;

pub const LISTING_URL: &str = "https://fondos.gob.cl/searchernew/";

/// Answers GETs from a fixed table and records every call.
#[derive(Default)]
pub struct FakeTransport {
    pages: HashMap<String, Result<String, u16>>,
    calls: RefCell<Vec<(String, Vec<(String, String)>)>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, url: &str, body: impl Into<String>) -> Self {
        self.pages.insert(url.to_string(), Ok(body.into()));
        self
    }

    pub fn status(mut self, url: &str, status: u16) -> Self {
        self.pages.insert(url.to_string(), Err(status));
        self
    }

    pub fn urls(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|(u, _)| u.clone()).collect()
    }

    pub fn header(&self, call: usize, name: &str) -> Option<String> {
        self.calls.borrow()[call]
            .1
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.clone())
    }
}

impl Transport for FakeTransport {
    fn get(&self, url: &str, headers: &Headers) -> Result<String, TransportError> {
        let sent = headers.iter().map(|(n, v)| (n.to_string(), v.clone())).collect();
        self.calls.borrow_mut().push((url.to_string(), sent));
        match self.pages.get(url) {
            Some(Ok(body)) => Ok(body.clone()),
            Some(Err(status)) => Err(TransportError::Status { url: url.to_string(), status: *status }),
            None => Err(TransportError::Status { url: url.to_string(), status: 404 }),
        }
    }
}

pub fn card(href: &str, title: &str) -> String {
    format!(
        r#"<div class="col-md-6 col-lg-3">
             <a href="{href}">
               <span class="badge">Abierto</span>
               <span class="text-dark">Nacional</span>
               <small class="text-uppercase">Corfo</small>
               <h6>{title}</h6>
               <div class="card-body">
                 <p>Empresas</p>
                 <p>Inicio: 2024-03-01 | Fin: 2024-04-15</p>
                 <p>$ 5.000.000</p>
               </div>
             </a>
           </div>"#
    )
}

pub fn listing(cards: &[String]) -> String {
    format!(
        r#"<html><body><div class="container"><div class="row">{}</div></div></body></html>"#,
        cards.concat()
    )
}

pub fn detail(description: &str, category: &str, bases: &str) -> String {
    format!(
        r#"<html><body>
             <div class="mb-4 d-block"><p>{description}</p></div>
             <div class="me-3"><small>Categoría:</small> <span class="bg-rosa">{category}</span></div>
             <div id="pills-04"><a href="{bases}">Bases</a></div>
           </body></html>"#
    )
}

pub fn read_rows(path: &Path) -> Vec<Vec<String>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .unwrap();
    rdr.records()
        .map(|r| r.unwrap().iter().map(str::to_string).collect())
        .collect()
}
