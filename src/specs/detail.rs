// src/specs/detail.rs

// A fund's own page. Three fields, each looked up independently:
//   description  first <p> in <div class="mb-4 d-block">
//   category     <div class="me-3"> whose <small> reads "Categoría:", then its <span class="bg-rosa">
//   bases_link   first <a href> in <div id="pills-04">

use scraper::{Html, Selector};

use crate::config::consts::CATEGORY_MARKER;
use crate::core::html::{compile, first, first_attr, first_text, text_of};
use crate::error::ScrapeError;
use crate::record::DetailFields;

pub struct DetailSelectors {
    description_block: Selector,
    meta_block: Selector,
    meta_label: Selector,
    category_badge: Selector,
    bases_panel: Selector,
    paragraph: Selector,
    link: Selector,
}

impl DetailSelectors {
    pub fn new() -> Result<Self, ScrapeError> {
        Ok(Self {
            description_block: compile("div.mb-4.d-block")?,
            meta_block: compile("div.me-3")?,
            meta_label: compile("small")?,
            category_badge: compile("span.bg-rosa")?,
            bases_panel: compile("div#pills-04")?,
            paragraph: compile("p")?,
            link: compile("a")?,
        })
    }
}

pub fn parse(doc: &str, sel: &DetailSelectors) -> DetailFields {
    let page = Html::parse_document(doc);
    let root = page.root_element();

    let description = first(root, &sel.description_block)
        .and_then(|block| first_text(block, &sel.paragraph))
        .unwrap_or_default();

    // The first labelled block decides, even when its badge is missing.
    let category = root
        .select(&sel.meta_block)
        .find(|block| {
            first(*block, &sel.meta_label)
                .is_some_and(|label| text_of(label).contains(CATEGORY_MARKER))
        })
        .and_then(|block| first_text(block, &sel.category_badge))
        .unwrap_or_default();

    let bases_link = first(root, &sel.bases_panel)
        .and_then(|panel| first_attr(panel, &sel.link, "href"))
        .unwrap_or_default();

    DetailFields { description, category, bases_link }
}
