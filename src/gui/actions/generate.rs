// src/gui/actions/generate.rs
//
// Runs on the UI thread. A run is a couple of HTTP requests; the window
// stalls until it returns.

use crate::{
    catalog::SteamCatalog,
    core::net::HttpClient,
    error::GridError,
    gui::{app::App, progress::GuiProgress},
    layout,
    runner,
};

pub fn generate(app: &mut App) {
    let options = app.state.options.clone();
    logf!(
        "UI: Generate stat={} ratio={} order={}",
        options.source.stat, options.layout.ratio, options.layout.direction
    );

    let mut progress = GuiProgress::new(app.status.clone());
    let result = HttpClient::new().map_err(GridError::from).and_then(|http| {
        let catalog = SteamCatalog::new(http.clone(), &options.source.api_key);
        runner::generate(&options, &app.stats, &catalog, &http, Some(&mut progress))
    });

    match result {
        Ok(g) => {
            app.status(format!("Ranked {} heroes by {} ({})", g.ranked.len(), g.stat.label, g.layout.direction));
            app.generated = Some(g);
        }
        Err(e) => {
            // Keep the previous result on screen; nothing new was produced.
            loge!("Generate: {e}");
            app.status(format!("Error: {e}"));
        }
    }
}

/// Re-place the current ranking for the selected ratio. No network.
pub fn relayout(app: &mut App) {
    let ratio = app.state.options.layout.ratio;
    let Some(g) = app.generated.as_mut() else { return };
    if g.layout.ratio == ratio {
        return;
    }

    g.cells = layout::cells(g.ranked.heroes(), ratio.geometry());
    g.text = layout::render(&g.cells);
    g.layout.ratio = ratio;
    logf!("UI: Re-laid out {} heroes for {}", g.ranked.len(), ratio);
}
