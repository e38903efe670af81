// src/config/state.rs
use super::{consts::{WINDOW_H, WINDOW_W}, options::AppOptions};

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: f32,
    pub window_h: f32,

    /// Output field text; mirrored into `ExportOptions` on edit
    pub out_path_text: String,

    /// Draw the painted grid preview under the table
    pub show_preview: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: WINDOW_W,
            window_h: WINDOW_H,
            out_path_text: s!(),
            show_preview: true,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl AppState {
    pub fn new(options: AppOptions) -> Self {
        let out_path_text = options.export.out_path.to_string_lossy().into_owned();
        Self {
            options,
            gui: GuiState { out_path_text, ..GuiState::default() },
        }
    }
}
