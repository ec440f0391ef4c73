// src/core/sanitize.rs

use crate::config::consts::{END_MARKER, START_MARKER};

/// Make a card link absolute. Anything not already starting with `http` is
/// treated as a path on `base`, including an empty href.
pub fn absolutize_url(href: &str, base: &str) -> String {
    let href = href.trim();
    if href.starts_with("http") {
        return href.to_string();
    }
    let base = base.trim_end_matches('/');
    if href.is_empty() || href.starts_with('/') {
        format!("{base}{href}")
    } else {
        format!("{base}/{href}")
    }
}

/// Icon fonts render through Private Use Area code points; drop them.
pub fn strip_icon_glyphs(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(*c as u32, 0xE000..=0xF8FF))
        .collect::<String>()
        .trim()
        .to_string()
}

/// "Inicio: <start> | Fin: <end>" → (start, end).
/// Both markers must be present, otherwise both halves are empty. Each date
/// stops at the next `|`, so trailing segments are dropped.
pub fn split_dates(text: &str) -> (String, String) {
    let (Some(s), Some(e)) = (text.find(START_MARKER), text.find(END_MARKER)) else {
        return (String::new(), String::new());
    };
    if e < s {
        return (String::new(), String::new());
    }
    let start = up_to_bar(&text[s + START_MARKER.len()..e]);
    let end = up_to_bar(&text[e + END_MARKER.len()..]);
    (start.to_string(), end.to_string())
}

fn up_to_bar(s: &str) -> &str {
    s.split('|').next().unwrap_or_default().trim()
}

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}
