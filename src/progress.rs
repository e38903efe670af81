// src/progress.rs
use std::fmt;

/// Pipeline steps, in the order a run goes through them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Catalog,
    Document,
    Extract,
    Rank,
    Layout,
    Write,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::Catalog => "hero list",
            Stage::Document => "stat page",
            Stage::Extract => "stat table",
            Stage::Rank => "ranking",
            Stage::Layout => "layout",
            Stage::Write => "output file",
        })
    }
}

/// Lightweight progress reporting for a run.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of stages the run will go through.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when a stage completes.
    fn stage_done(&mut self, _stage: Stage) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
