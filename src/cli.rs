// src/cli.rs
use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};

use crate::{
    catalog::SteamCatalog,
    config::{
        consts::{API_KEY_ENV, DEFAULT_DATE},
        options::{AppOptions, ExportOptions, LayoutOptions, SourceOptions},
        stats::StatSources,
    },
    core::net::HttpClient,
    layout::Ratio,
    progress::{Progress, Stage},
    rank::SortDirection,
    runner,
};

/// Generate a stat-sorted hero grid layout.
#[derive(Parser, Debug)]
#[command(name = "hero_grid", version, about)]
pub struct Args {
    /// Statistic to sort heroes by (see --list-stats)
    #[arg(required_unless_present = "list_stats")]
    pub stat: Option<String>,

    /// Output file [default: out/hero_grid.txt]
    pub out: Option<PathBuf>,

    /// Steam Web API key
    #[arg(long, env = API_KEY_ENV, hide_env_values = true)]
    pub key: Option<String>,

    /// Time window passed to the stats site (week, month, 3month, 6month, year, ...)
    #[arg(long, default_value = DEFAULT_DATE)]
    pub date: String,

    /// Screen aspect ratio: 16:9, 4:3 or 16:10
    #[arg(long, default_value = "16:9")]
    pub ratio: String,

    /// Sort from smallest to largest instead of largest to smallest
    #[arg(long, alias = "reverse")]
    pub ascending: bool,

    /// Print the available statistics and exit
    #[arg(long)]
    pub list_stats: bool,
}

impl Args {
    /// Map arguments onto run options. Fails on an unknown ratio before any
    /// network work happens.
    pub fn to_options(&self) -> Result<AppOptions> {
        let ratio: Ratio = self.ratio.trim().parse()?;
        let direction = if self.ascending { SortDirection::Ascending } else { SortDirection::Descending };

        let mut export = ExportOptions::default();
        if let Some(out) = &self.out {
            export.out_path = out.clone();
        }

        Ok(AppOptions {
            source: SourceOptions {
                stat: self.stat.clone().unwrap_or_default(),
                date: self.date.clone(),
                api_key: self.key.clone().unwrap_or_default(),
            },
            layout: LayoutOptions { ratio, direction },
            export,
        })
    }
}

/// Prints stage completions to stderr.
struct CliProgress;

impl Progress for CliProgress {
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn stage_done(&mut self, stage: Stage) {
        eprintln!("  ✓ {stage}");
    }
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    crate::log::init_stderr();

    let stats = StatSources::dotabuff();
    if args.list_stats {
        for s in stats.iter() {
            println!("{}\t{}", s.key, s.label);
        }
        return Ok(());
    }

    let options = args.to_options()?;
    if stats.get(&options.source.stat).is_none() {
        let keys: Vec<&str> = stats.keys().collect();
        color_eyre::eyre::bail!(
            "unknown statistic '{}'; choose from: {}",
            options.source.stat,
            keys.join(", ")
        );
    }

    let http = HttpClient::new()?;
    let catalog = SteamCatalog::new(http.clone(), &options.source.api_key);

    let mut progress = CliProgress;
    progress.log(&format!(
        "Sorting heroes by {} ({}, {})",
        options.source.stat, options.layout.direction, options.layout.ratio
    ));

    let summary = runner::run(&options, &stats, &catalog, &http, Some(&mut progress))
        .wrap_err("no layout written")?;

    println!("Wrote {}", summary.written.display());
    Ok(())
}
