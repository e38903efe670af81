// src/gui/components/controls.rs
//
// Left panel: what to sort by and how to lay it out. Changes go straight
// into `app.state.options`; only a ratio change touches the current result.

use eframe::egui;
use crate::{
    gui::{actions, app::App},
    layout::Ratio,
    rank::SortDirection,
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Statistic");

    {
        let stats = &app.stats;
        let source = &mut app.state.options.source;
        let before = source.stat.clone();

        let selected = stats.get(&source.stat).map(|s| s.label.as_str()).unwrap_or("Choose…");
        egui::ComboBox::from_id_salt("stat_combo")
            .selected_text(selected)
            .width(220.0)
            .show_ui(ui, |ui| {
                for s in stats.iter() {
                    ui.selectable_value(&mut source.stat, s.key.clone(), s.label.as_str());
                }
            });
        if source.stat != before {
            logf!("UI: Stat → {}", source.stat);
        }

        ui.horizontal(|ui| {
            ui.label("Period:");
            ui.add(egui::TextEdit::singleline(&mut source.date).desired_width(120.0));
        });
    }

    ui.separator();
    ui.heading("Layout");

    let prev_ratio = app.state.options.layout.ratio;
    {
        let layout = &mut app.state.options.layout;
        ui.horizontal(|ui| {
            ui.label("Screen:");
            for r in Ratio::ALL {
                ui.selectable_value(&mut layout.ratio, r, r.as_str());
            }
        });

        let before = layout.direction;
        ui.radio_value(&mut layout.direction, SortDirection::Descending, "Largest first");
        ui.radio_value(&mut layout.direction, SortDirection::Ascending, "Smallest first");
        if layout.direction != before {
            logf!("UI: Order → {}", layout.direction);
        }
    }
    if app.state.options.layout.ratio != prev_ratio {
        logf!("UI: Ratio {} → {}", prev_ratio, app.state.options.layout.ratio);
        actions::relayout(app);
    }

    ui.checkbox(&mut app.state.gui.show_preview, "Show preview");

    ui.separator();
    ui.heading("Steam");

    ui.add(
        egui::TextEdit::singleline(&mut app.state.options.source.api_key)
            .password(true)
            .hint_text("Web API key")
            .desired_width(220.0),
    );
    if app.state.options.source.api_key.trim().is_empty() {
        let warn = ui.visuals().warn_fg_color;
        ui.colored_label(warn, "A key is required to fetch the hero list");
    }
}
