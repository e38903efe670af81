// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;
use crate::{layout::Ratio, rank::SortDirection};

/// Everything a run needs. Both frontends build one of these.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct AppOptions {
    pub source: SourceOptions,
    pub layout: LayoutOptions,
    pub export: ExportOptions,
}

#[derive(Clone, PartialEq)]
pub struct SourceOptions {
    /// Key into `StatSources`.
    pub stat: String,
    /// Passed verbatim as the `date` query parameter.
    pub date: String,
    pub api_key: String,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            stat: s!(DEFAULT_STAT),
            date: s!(DEFAULT_DATE),
            api_key: s!(),
        }
    }
}

// Keep the key out of debug output (and therefore out of logs).
impl std::fmt::Debug for SourceOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceOptions")
            .field("stat", &self.stat)
            .field("date", &self.date)
            .field("api_key", &if self.api_key.is_empty() { "<unset>" } else { "<redacted>" })
            .finish()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct LayoutOptions {
    pub ratio: Ratio,
    pub direction: SortDirection,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub out_path: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { out_path: PathBuf::from(DEFAULT_OUT_DIR).join(DEFAULT_FILE) }
    }
}

impl ExportOptions {
    /// Parse GUI text into a path. Blank input falls back to the default.
    pub fn set_path(&mut self, text: &str) {
        let t = text.trim();
        self.out_path = if t.is_empty() {
            Self::default().out_path
        } else {
            PathBuf::from(t)
        };
    }
}
