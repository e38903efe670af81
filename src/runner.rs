// src/runner.rs
//
// The whole pipeline, front to back, on the calling thread:
// catalog → stat page → table → reconcile → rank → layout → (write).
// Any error ends the run; nothing is written unless every step succeeded.

use std::path::PathBuf;

use crate::{
    catalog::{CatalogSource, Entity},
    config::{
        options::{AppOptions, LayoutOptions},
        stats::{StatSource, StatSources},
    },
    core::net::DocumentSource,
    error::GridError,
    file,
    layout::{self, GridCell},
    progress::{Progress, Stage},
    rank::{self, RankedList},
    reconcile::CatalogReconciler,
    scrape,
};

/// Everything a successful run produced, before anything touches disk.
#[derive(Clone, Debug)]
pub struct Generated {
    pub stat: StatSource,
    /// The `date` window the page was fetched for.
    pub date: String,
    pub layout: LayoutOptions,
    pub ranked: RankedList,
    pub cells: Vec<GridCell>,
    pub text: String,
}

/// Summary of what was produced.
#[derive(Clone, Debug)]
pub struct RunSummary {
    pub generated: Generated,
    pub written: PathBuf,
}

// Catalog, Document, Extract, Rank, Layout
const GENERATE_STAGES: usize = 5;

/// Fetch, rank and lay out. `progress` can be None (no UI updates).
pub fn generate(
    options: &AppOptions,
    stats: &StatSources,
    catalog: &dyn CatalogSource,
    documents: &dyn DocumentSource,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Generated, GridError> {
    begin(&mut progress, GENERATE_STAGES);
    let result = generate_stages(options, stats, catalog, documents, &mut progress);
    finish(&mut progress);
    result
}

fn generate_stages(
    options: &AppOptions,
    stats: &StatSources,
    catalog: &dyn CatalogSource,
    documents: &dyn DocumentSource,
    progress: &mut Option<&mut dyn Progress>,
) -> Result<Generated, GridError> {
    let source = stats
        .get(&options.source.stat)
        .ok_or_else(|| GridError::UnknownStat(options.source.stat.clone()))?;
    let LayoutOptions { ratio, direction } = options.layout;

    logf!(
        "Run: stat={} ratio={} order={} date={}",
        source.key, ratio, direction, options.source.date
    );

    let heroes: Vec<Entity> = catalog.heroes()?;
    step(progress, Stage::Catalog);

    let extraction = scrape::fetch_stat(documents, source, &options.source.date)?;
    step(progress, Stage::Document);
    step(progress, Stage::Extract);
    logf!("Extract: {} rows for '{}'", extraction.len(), source.key);

    let reconciler = CatalogReconciler::new(&extraction);
    let unclaimed = reconciler.unclaimed(&heroes);
    if !unclaimed.is_empty() {
        logd!("Reconcile: table rows with no catalog hero: {:?}", unclaimed);
    }

    let ranked = rank::rank(&heroes, &source.key, reconciler.accessor(&source.key), direction)?;
    step(progress, Stage::Rank);

    let cells = layout::cells(ranked.heroes(), ratio.geometry());
    let text = layout::render(&cells);
    step(progress, Stage::Layout);

    Ok(Generated {
        stat: source.clone(),
        date: options.source.date.clone(),
        layout: options.layout,
        ranked,
        cells,
        text,
    })
}

/// Write a generated layout to `path`.
pub fn export(generated: &Generated, path: &std::path::Path) -> Result<PathBuf, GridError> {
    let written = file::write_layout(path, &generated.text)?;
    logf!("Export: {} heroes → {}", generated.ranked.len(), written.display());
    Ok(written)
}

/// Top-level runner: generate, then write to `options.export.out_path`.
pub fn run(
    options: &AppOptions,
    stats: &StatSources,
    catalog: &dyn CatalogSource,
    documents: &dyn DocumentSource,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, GridError> {
    begin(&mut progress, GENERATE_STAGES + 1);
    let result = generate_stages(options, stats, catalog, documents, &mut progress).and_then(|generated| {
        let written = export(&generated, &options.export.out_path)?;
        step(&mut progress, Stage::Write);
        Ok(RunSummary { generated, written })
    });
    finish(&mut progress);
    result
}

fn begin(progress: &mut Option<&mut dyn Progress>, total: usize) {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(total);
    }
}

fn step(progress: &mut Option<&mut dyn Progress>, stage: Stage) {
    if let Some(p) = progress.as_deref_mut() {
        p.stage_done(stage);
    }
}

fn finish(progress: &mut Option<&mut dyn Progress>) {
    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
}
