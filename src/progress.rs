// src/progress.rs
/// Progress reporting for multi-day fetches.
/// The CLI implements this to print a line per finished day.
pub trait Progress {
    /// Called at the start with the number of days requested.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One day fetched and parsed. `label` is the date as the user typed it.
    fn item_done(&mut self, _label: &str) {}

    /// One day failed; the others carry on.
    fn item_failed(&mut self, _label: &str, _err: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
