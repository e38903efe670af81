// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::{IconData, ViewportBuilder};
use hero_grid::{
    config::consts::{WINDOW_H, WINDOW_W},
    gui, log,
};

// 4x4 tiles on a dark ground, drawn at startup instead of shipping an asset.
fn app_icon() -> IconData {
    const SIZE: u32 = 64;
    let rgba = image::RgbaImage::from_fn(SIZE, SIZE, |x, y| {
        let (cx, cy) = (x % 16, y % 16);
        if (2..14).contains(&cx) && (2..14).contains(&cy) {
            let shade = 140 + ((x / 16 + y / 16) * 12) as u8;
            image::Rgba([shade, 60, 40, 255])
        } else {
            image::Rgba([24, 24, 28, 255])
        }
    });
    let (w, h) = rgba.dimensions();
    IconData { rgba: rgba.into_raw(), width: w, height: h }
}

fn main() {
    log::init_file();

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([WINDOW_W, WINDOW_H])
            .with_icon(app_icon()),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
