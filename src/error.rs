// src/error.rs
//
// One enum per pipeline stage, wrapped by `GridError` at the top.
// Every variant is fatal to a run; nothing here is retried.

use std::{fmt, io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Steam Web API key was not accepted")]
    InvalidCredential,
    #[error("hero catalog unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {reason}")]
    Transport { url: String, reason: String },
    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("unable to scrape data from page: table not found")]
    NoTableFound,
    /// `row` counts data rows from 0 in document order.
    #[error("unable to scrape data from page: cannot read row {row}: {reason}")]
    MalformedRow { row: usize, reason: String },
}

/// Why a lookup came back empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Missing {
    /// No row for the hero's display name.
    Entity,
    /// The row exists but the statistic wasn't extracted for it.
    Key,
}

impl fmt::Display for Missing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Missing::Entity => f.write_str("hero not in table"),
            Missing::Key => f.write_str("statistic missing"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Unresolved {
    pub id: u32,
    pub display_name: String,
    pub missing: Missing,
}

impl fmt::Display for Unresolved {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (id {}, {})", self.display_name, self.id, self.missing)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RankError {
    #[error("no '{key}' value for {} hero(es): {}", .unresolved.len(), list(.unresolved))]
    UnresolvedValue { key: String, unresolved: Vec<Unresolved> },
}

fn list(items: &[Unresolved]) -> String {
    items.iter().map(|u| u.to_string()).collect::<Vec<_>>().join(", ")
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("unknown aspect ratio '{0}' (expected 16:9, 4:3 or 16:10)")]
    UnknownGeometry(String),
}

#[derive(Debug, Error)]
pub enum GridError {
    #[error("unknown statistic '{0}'")]
    UnknownStat(String),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Extraction(#[from] ExtractionError),
    #[error(transparent)]
    Rank(#[from] RankError),
    #[error(transparent)]
    Layout(#[from] LayoutError),
    #[error("cannot write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
