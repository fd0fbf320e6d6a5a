use eframe::egui;

use crate::color::HexColor;

/// A round palette swatch; the active one gets a dark ring and grows a little
pub struct Swatch {
    pub color: HexColor,
    pub selected: bool,
}

impl Swatch {
    pub fn new(color: HexColor, selected: bool) -> Self {
        Self { color, selected }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let (rect, response) = ui.allocate_exact_size(egui::vec2(32.0, 32.0), egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let grow = if self.selected || response.hovered() { 1.1 } else { 1.0 };
            let radius = 14.0 * grow;
            let border = if self.selected {
                egui::Color32::from_gray(31)
            } else {
                egui::Color32::from_gray(209)
            };
            ui.painter().circle(
                rect.center(),
                radius,
                self.color.color32(),
                egui::Stroke::new(2.0, border),
            );
        }

        response.on_hover_text(self.color.to_hex())
    }
}
