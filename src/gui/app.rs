// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::{consts::API_KEY_ENV, options::AppOptions, state::AppState, stats::StatSources},
    runner::Generated,
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Hero Grid",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::new(AppOptions::default()))))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,
    pub stats: StatSources,

    // last successful run; kept until the next one succeeds
    pub generated: Option<Generated>,

    // status line (progress writes here)
    pub status: Arc<Mutex<String>>,
}

impl App {
    pub fn new(mut state: AppState) -> Self {
        if state.options.source.api_key.is_empty() {
            if let Ok(key) = std::env::var(API_KEY_ENV) {
                logf!("Init: API key taken from {API_KEY_ENV}");
                state.options.source.api_key = key;
            }
        }

        let stats = StatSources::dotabuff();
        logf!("Init: {} statistics, default '{}'", stats.iter().count(), state.options.source.stat);

        Self {
            state,
            stats,
            generated: None,
            status: Arc::new(Mutex::new(s!("Idle"))),
        }
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// True when the shown result was made with different options than the current ones.
    pub fn is_stale(&self) -> bool {
        self.generated.as_ref().is_some_and(|g| {
            let source = &self.state.options.source;
            g.stat.key != source.stat || g.date != source.date || g.layout != self.state.options.layout
        })
    }

    /// Mirror the output text field into the export options.
    pub fn sync_out_path(&mut self) {
        let before = self.state.options.export.out_path.clone();
        self.state.options.export.set_path(&self.state.gui.out_path_text);
        if self.state.options.export.out_path != before {
            logf!("UI: Out path → {}", self.state.options.export.out_path.display());
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("controls")
            .resizable(false)
            .show(ctx, |ui| {
                crate::gui::components::controls::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::components::action_bar::draw(ui, self);

            ui.separator();

            crate::gui::components::ranking_table::draw(ui, self);

            if self.state.gui.show_preview {
                ui.separator();
                crate::gui::components::grid_preview::draw(ui, self);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{layout::Ratio, rank::RankedList};

    fn app_with_result() -> App {
        let mut app = App::new(AppState::new(AppOptions::default()));
        let options = &app.state.options;
        app.generated = Some(Generated {
            stat: app.stats.get(&options.source.stat).unwrap().clone(),
            date: options.source.date.clone(),
            layout: options.layout,
            ranked: RankedList::default(),
            cells: Vec::new(),
            text: s!(),
        });
        app
    }

    #[test]
    fn fresh_result_is_not_stale() {
        assert!(!app_with_result().is_stale());
    }

    #[test]
    fn changing_period_marks_result_stale() {
        let mut app = app_with_result();
        app.state.options.source.date = s!("week");
        assert!(app.is_stale());
    }

    #[test]
    fn changing_stat_or_ratio_marks_result_stale() {
        let mut app = app_with_result();
        app.state.options.source.stat = s!("xpm");
        assert!(app.is_stale());

        let mut app = app_with_result();
        app.state.options.layout.ratio = Ratio::Tall;
        assert!(app.is_stale());
    }
}
