// src/specs/listing.rs

// Listing page: split into fund cards, then read each card.
//
// Card layout as served by /searchernew/ (abridged):
//   <div class="col-md-6 col-lg-3">
//     <a href="/concurso/...">
//       <span class="badge">Abierto</span>
//       <span class="text-white"><i class="icon"></i> Nacional</span>
//       <small class="text-uppercase">Institución</small>
//       <h6>Nombre</h6>
//       <div class="card-body"><p>beneficiario</p><p>Inicio: … | Fin: …</p><p>monto</p></div>
//     </a>
//   </div>

use chrono::Local;
use scraper::{Html, Selector};
use tracing::{debug, warn};

use crate::core::html::{compile, find, first, first_attr, first_text, nth_text};
use crate::core::sanitize::{absolutize_url, split_dates, strip_icon_glyphs};
use crate::error::{ExtractError, ScrapeError};
use crate::record::ListingFields;

pub const CARD: &str = "div.col-md-6.col-lg-3";

/// One listing card, owned as its outer HTML.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fragment {
    position: usize,
    html: String,
}

impl Fragment {
    pub fn new(position: usize, html: impl Into<String>) -> Self {
        Self { position, html: html.into() }
    }

    /// Zero-based place in the listing's document order.
    pub fn position(&self) -> usize { self.position }
    pub fn html(&self) -> &str { &self.html }
}

/// Compiled selectors for the listing page.
pub struct ListingSelectors {
    card: Selector,
    link: Selector,
    status: Selector,
    scope: [Selector; 2],
    institution: Selector,
    title: Selector,
    body: Selector,
    paragraph: Selector,
}

impl ListingSelectors {
    pub fn new() -> Result<Self, ScrapeError> {
        Ok(Self {
            card: compile(CARD)?,
            link: compile("a")?,
            status: compile("span.badge")?,
            // Styling class depends on the fund's state
            scope: [compile("span.text-white")?, compile("span.text-dark")?],
            institution: compile("small.text-uppercase")?,
            title: compile("h6")?,
            body: compile("div.card-body")?,
            paragraph: compile("p")?,
        })
    }
}

/// Cut a listing document into card fragments, in document order.
pub fn split_cards(doc: &str, sel: &ListingSelectors) -> Vec<Fragment> {
    let page = Html::parse_document(doc);
    let cards: Vec<Fragment> = page
        .select(&sel.card)
        .enumerate()
        .map(|(i, el)| Fragment::new(i, el.html()))
        .collect();
    debug!(count = cards.len(), "listing split into cards");
    cards
}

/// Read one card. `None` means the fragment was unusable and has been logged.
pub fn extract(fragment: &Fragment, sel: &ListingSelectors, base_url: &str) -> Option<ListingFields> {
    match extract_card(fragment, sel, base_url) {
        Ok(fields) => Some(fields),
        Err(e) => {
            warn!(position = fragment.position(), "skipping card: {e}");
            None
        }
    }
}

pub fn extract_card(
    fragment: &Fragment,
    sel: &ListingSelectors,
    base_url: &str,
) -> Result<ListingFields, ExtractError> {
    let extracted_at = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();

    let doc = Html::parse_fragment(fragment.html());
    let card = find(&doc, &sel.card)
        .ok_or(ExtractError::EmptyFragment { position: fragment.position() })?;

    let href = first_attr(card, &sel.link, "href").unwrap_or_default();
    let url = absolutize_url(&href, base_url);

    let status = first_text(card, &sel.status).unwrap_or_default();

    let scope = sel.scope
        .iter()
        .find_map(|s| first_text(card, s))
        .map(|t| strip_icon_glyphs(&t))
        .unwrap_or_default();

    let institution = first_text(card, &sel.institution).unwrap_or_default();
    let title = first_text(card, &sel.title).unwrap_or_default();

    // Body paragraphs carry no labels; position is all there is.
    let body = first(card, &sel.body);
    let para = |n: usize| {
        body.and_then(|b| nth_text(b, &sel.paragraph, n))
            .unwrap_or_default()
    };
    let beneficiary = para(0);
    let (start_date, end_date) = split_dates(&para(1));
    let amount = para(2);

    Ok(ListingFields {
        url,
        status,
        scope,
        institution,
        title,
        beneficiary,
        start_date,
        end_date,
        amount,
        extracted_at,
    })
}
