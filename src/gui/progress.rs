// src/gui/progress.rs
use std::sync::{Arc, Mutex};

use crate::progress::{Progress, Stage};

pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    done: usize,
    total: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, done: 0, total: 0 }
    }

    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
    }
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn stage_done(&mut self, stage: Stage) {
        self.done += 1;
        self.set_status(format!("Done: {} ({}/{})", stage, self.done, self.total));
    }
    fn finish(&mut self) {
        if self.total == 0 {
            self.set_status(s!("Finished"));
        } else {
            self.set_status(format!("Finished ({}/{})", self.done, self.total));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_stages_into_status() {
        let status = Arc::new(Mutex::new(s!()));
        let mut p = GuiProgress::new(status.clone());
        p.begin(5);
        p.stage_done(Stage::Catalog);
        assert_eq!(*status.lock().unwrap(), "Done: hero list (1/5)");
        p.stage_done(Stage::Document);
        p.finish();
        assert_eq!(*status.lock().unwrap(), "Finished (2/5)");
    }
}
