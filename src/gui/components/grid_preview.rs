// src/gui/components/grid_preview.rs
//
// Paints the placed cells scaled to the panel width. Labels are hero ids.

use eframe::egui::{self, Align2, Color32, FontId, Rect, Sense, Stroke, StrokeKind, pos2, vec2};
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &App) {
    let Some(g) = app.generated.as_ref() else { return };
    if g.cells.is_empty() {
        return;
    }

    let geo = g.layout.ratio.geometry();
    let max_x = g.cells.iter().map(|c| c.x).max().unwrap_or(0) + geo.icon_w;
    let max_y = g.cells.iter().map(|c| c.y).max().unwrap_or(0) + geo.icon_h;

    let avail = ui.available_size();
    let k = (avail.x / max_x as f32).min(avail.y.max(40.0) / max_y as f32);
    let (response, painter) = ui.allocate_painter(vec2(max_x as f32 * k, max_y as f32 * k), Sense::hover());
    let origin = response.rect.min;

    let fill = ui.visuals().faint_bg_color;
    let stroke = Stroke::new(1.0, ui.visuals().weak_text_color());
    let text = ui.visuals().text_color();
    let font = FontId::monospace((geo.icon_h as f32 * k * 0.35).clamp(6.0, 12.0));

    for c in &g.cells {
        let min = origin + vec2(c.x as f32 * k, c.y as f32 * k);
        let rect = Rect::from_min_size(min, vec2(geo.icon_w as f32 * k, geo.icon_h as f32 * k)).shrink(1.0);
        painter.rect_filled(rect, 2.0, fill);
        painter.rect_stroke(rect, 2.0, stroke, StrokeKind::Inside);
        painter.text(rect.center(), Align2::CENTER_CENTER, c.hero_id.to_string(), font.clone(), text);
    }

    // Top band above start_y is where the client draws its own header
    let band = Rect::from_min_max(origin, pos2(origin.x + max_x as f32 * k, origin.y + geo.start_y as f32 * k));
    painter.rect_stroke(band, 0.0, Stroke::new(1.0, Color32::from_gray(90)), StrokeKind::Inside);
}
