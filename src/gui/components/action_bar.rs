// src/gui/components/action_bar.rs
use eframe::egui;
use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label("Output:");
        let resp = ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.out_path_text)
                .desired_width(ui.available_width() * 0.6),
        );
        if resp.lost_focus() {
            app.sync_out_path();
        }
    });

    ui.horizontal(|ui| {
        if ui.button("Generate").clicked() {
            actions::generate(app);
        }

        let have = app.generated.is_some();
        if ui.add_enabled(have, egui::Button::new("Export")).clicked() {
            actions::export(app);
        }
        if ui.add_enabled(have, egui::Button::new("Copy")).clicked() {
            actions::copy(app, ui.ctx());
        }

        ui.separator();
        ui.label(app.status_text());
    });

    if app.is_stale() {
        let warn = ui.visuals().warn_fg_color;
        ui.colored_label(warn, "Options changed since the last run; Generate to refresh");
    }
}
