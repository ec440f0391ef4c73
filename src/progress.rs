/// Lightweight progress reporting for a scrape run.
/// Frontends implement this to surface status to users; the CLI prints lines.
pub trait Progress {
    /// Called once the listing is in, with the number of cards found.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// A record was written under `id`.
    fn item_done(&mut self, _id: usize, _title: &str) {}

    /// A record was left out (unreadable card, or detail failure under the skip policy).
    fn item_skipped(&mut self, _url: &str, _reason: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
