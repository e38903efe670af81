// src/scrape/stats.rs

use crate::{
    config::stats::StatSource,
    core::net::DocumentSource,
    error::GridError,
};

use super::table::{self, StatRequest, TableExtraction};

/// Fetch the page behind `source` for the given `date` window and extract its
/// single statistic.
pub fn fetch_stat(
    documents: &dyn DocumentSource,
    source: &StatSource,
    date: &str,
) -> Result<TableExtraction, GridError> {
    let html_doc = documents.fetch(&source.url, &[("date", date)])?;
    logd!("Fetch: {} bytes from {}", html_doc.len(), source.url);

    let requests = [StatRequest::new(&source.key, source.column)];
    Ok(table::parse(&html_doc, &requests)?)
}
