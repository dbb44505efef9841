// src/progress.rs
/// Lightweight progress reporting for the collector and analyzer runs.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of steps (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one output file has been written.
    fn item_done(&mut self, _what: &str) {}

    /// Called once after the last output file is written.
    fn finish(&mut self) {}
}
