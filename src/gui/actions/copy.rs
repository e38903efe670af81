// src/gui/actions/copy.rs
use eframe::egui;
use crate::gui::app::App;

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let Some(g) = app.generated.as_ref() else {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but nothing has been generated");
        return;
    };

    logf!("Copy: {} heroes, {} bytes", g.ranked.len(), g.text.len());
    ui_ctx.copy_text(g.text.clone());
    app.status("Copied layout to clipboard");
}
