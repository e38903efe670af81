// src/gui/components/ranking_table.rs
use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &App) {
    let Some(g) = app.generated.as_ref() else {
        ui.label("No ranking yet. Pick a statistic and press Generate.");
        return;
    };

    ui.label(format!("{} · {} · {}", g.stat.label, g.layout.direction, g.layout.ratio));

    let entries = g.ranked.entries();
    let height = if app.state.gui.show_preview { ui.available_height() * 0.5 } else { ui.available_height() };

    TableBuilder::new(ui)
        .id_salt("ranking_table")
        .striped(true)
        .max_scroll_height(height)
        .column(Column::auto().at_least(40.0))
        .column(Column::auto().at_least(160.0))
        .column(Column::auto().at_least(40.0))
        .column(Column::auto().at_least(80.0))
        .column(Column::remainder())
        .header(20.0, |mut header| {
            for title in ["#", "Hero", "ID", "Value", "Position"] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, entries.len(), |mut row| {
                let i = row.index();
                let r = &entries[i];
                row.col(|ui| {
                    ui.label((i + 1).to_string());
                });
                row.col(|ui| {
                    ui.label(r.hero.display_name.as_str());
                });
                row.col(|ui| {
                    ui.monospace(r.hero.id.to_string());
                });
                row.col(|ui| {
                    ui.monospace(r.value.to_string());
                });
                row.col(|ui| {
                    if let Some(c) = g.cells.get(i) {
                        ui.monospace(format!("{}, {}", c.x, c.y));
                    }
                });
            });
        });
}
