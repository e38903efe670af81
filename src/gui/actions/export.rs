// src/gui/actions/export.rs
use crate::{gui::app::App, runner};

pub fn export(app: &mut App) {
    // normalize out_path first (mutates app) before any &app borrows
    app.sync_out_path();

    let status_msg = match app.generated.as_ref() {
        None => {
            logd!("Export: Clicked, but nothing has been generated");
            s!("Nothing to export")
        }
        Some(g) => match runner::export(g, &app.state.options.export.out_path) {
            Ok(path) => format!("Wrote {}", path.display()),
            Err(e) => {
                loge!("Export: {e}");
                format!("Export failed: {e}")
            }
        },
    };

    app.status(status_msg);
}
