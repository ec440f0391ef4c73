// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://fondos.gob.cl";
pub const LISTING_URL: &str = "https://fondos.gob.cl/searchernew/";

pub const ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";
pub const ACCEPT_LANGUAGE: &str = "es-ES,es;q=0.8,en-US;q=0.5,en;q=0.3";

// Rotated per request
pub const USER_AGENTS: [&str; 4] = [
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:89.0) Gecko/20100101 Firefox/89.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/14.1.1 Safari/605.1.15",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36 Edg/91.0.864.59",
];

// Pacing between detail requests
pub const DELAY_MIN_MS: u64 = 1_000;
pub const DELAY_MAX_MS: u64 = 3_000;

// Output
pub const DEFAULT_OUT_FILE: &str = "fondos.csv";
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Markup markers
pub const START_MARKER: &str = "Inicio:";
pub const END_MARKER: &str = "Fin:";
pub const CATEGORY_MARKER: &str = "Categoría:";
