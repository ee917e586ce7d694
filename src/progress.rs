// src/progress.rs
/// Lightweight progress reporting for the pipeline phases (load, derive,
/// filter, export). Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of rows loaded.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one pipeline phase completes.
    fn phase_done(&mut self, _name: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
