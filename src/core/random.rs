// src/core/random.rs

// Source of the two random choices the scraper makes: which User-Agent to send
// and how long to pause between detail requests.

use std::time::Duration;

use crate::config::options::DelayRange;

pub trait Entropy {
    /// Uniform index in `0..len`. `len` is never zero.
    fn index(&mut self, len: usize) -> usize;

    /// Uniform value in `low..=high`.
    fn between(&mut self, low: u64, high: u64) -> u64;

    fn delay(&mut self, range: DelayRange) -> Duration {
        Duration::from_millis(self.between(range.min_ms(), range.max_ms()))
    }

    fn pick<'a>(&mut self, pool: &[&'a str]) -> &'a str {
        match pool.len() {
            0 => "",
            n => pool[self.index(n)],
        }
    }
}

/// `fastrand`-backed entropy. Seed it for reproducible runs.
pub struct FastEntropy {
    rng: fastrand::Rng,
}

impl FastEntropy {
    pub fn new() -> Self {
        Self { rng: fastrand::Rng::new() }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self { rng: fastrand::Rng::with_seed(seed) }
    }
}

impl Default for FastEntropy {
    fn default() -> Self {
        Self::new()
    }
}

impl Entropy for FastEntropy {
    fn index(&mut self, len: usize) -> usize {
        self.rng.usize(0..len)
    }

    fn between(&mut self, low: u64, high: u64) -> u64 {
        self.rng.u64(low.min(high)..=high.max(low))
    }
}
