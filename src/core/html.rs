// src/core/html.rs

// Thin helpers over `scraper` so field lookups read as Option chains.

use scraper::{ElementRef, Html, Selector};

use crate::error::ScrapeError;

pub fn compile(css: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(css).map_err(|e| ScrapeError::Selector {
        selector: css.to_string(),
        reason: e.to_string(),
    })
}

/// Concatenated descendant text, trimmed.
pub fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

pub fn first<'a>(scope: ElementRef<'a>, sel: &Selector) -> Option<ElementRef<'a>> {
    scope.select(sel).next()
}

pub fn first_text(scope: ElementRef<'_>, sel: &Selector) -> Option<String> {
    first(scope, sel).map(text_of)
}

pub fn nth_text(scope: ElementRef<'_>, sel: &Selector, n: usize) -> Option<String> {
    scope.select(sel).nth(n).map(text_of)
}

pub fn first_attr(scope: ElementRef<'_>, sel: &Selector, attr: &str) -> Option<String> {
    first(scope, sel)
        .and_then(|el| el.value().attr(attr))
        .map(str::to_string)
}

/// First element of a parsed document or fragment matching `sel`.
pub fn find<'a>(doc: &'a Html, sel: &Selector) -> Option<ElementRef<'a>> {
    doc.select(sel).next()
}
