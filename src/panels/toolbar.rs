use egui::color_picker::{self, Alpha};

use crate::color::HexColor;
use crate::components::{Swatch, ToolButton};
use crate::controller::CanvasController;
use crate::surface::RasterCanvas;
use crate::tools::Tool;

/// Toolbar actions that need more than the controller to carry out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarAction {
    Clear,
    Download,
}

/// Tool buttons, size slider, color picker, actions and the palette row.
///
/// Collapsing hides the tools, the slider and the palette; the color picker
/// and actions stay.
pub fn toolbar(controller: &mut CanvasController<RasterCanvas>, ctx: &egui::Context) -> Option<ToolbarAction> {
    let mut action = None;

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.add_space(4.0);
        ui.horizontal_wrapped(|ui| {
            if !controller.panel_collapsed() {
                tool_group(ui, controller);
                ui.separator();
                size_slider(ui, controller);
                ui.separator();
            }

            ui.label("🎨");
            let mut color = controller.color().color32();
            if color_picker::color_edit_button_srgba(ui, &mut color, Alpha::Opaque).changed() {
                controller.set_color(HexColor::from_color32(color));
            }
            ui.separator();

            if ui.button("⬍").on_hover_text("Show or hide tools").clicked() {
                controller.toggle_panel();
            }
            if ui.button("⟲").on_hover_text("Clear canvas").clicked() {
                action = Some(ToolbarAction::Clear);
            }
            if ui.button("⬇").on_hover_text("Download PNG").clicked() {
                action = Some(ToolbarAction::Download);
            }
        });

        // Collapsing hides the palette too; only the picker and actions stay
        if !controller.panel_collapsed() {
            ui.add_space(8.0);
            palette_row(ui, controller);
        }
        ui.add_space(4.0);
    });

    if let Some(action) = action {
        log::info!("Toolbar action: {:?}", action);
    }
    action
}

fn tool_group(ui: &mut egui::Ui, controller: &mut CanvasController<RasterCanvas>) {
    for tool in Tool::ALL {
        if ToolButton::new(tool, controller.tool() == tool).show(ui).clicked() {
            controller.set_tool(tool);
        }
    }
}

fn size_slider(ui: &mut egui::Ui, controller: &mut CanvasController<RasterCanvas>) {
    let (min, max) = (controller.config().min_width, controller.config().max_width);
    let mut width = controller.stroke_width();
    ui.label("Size:");
    if ui.add(egui::Slider::new(&mut width, min..=max)).changed() {
        controller.set_stroke_width(width);
    }
}

fn palette_row(ui: &mut egui::Ui, controller: &mut CanvasController<RasterCanvas>) {
    let active = controller.color();
    let mut picked = None;
    ui.horizontal_wrapped(|ui| {
        for (index, &color) in controller.config().palette.iter().enumerate() {
            if Swatch::new(color, color == active).show(ui).clicked() {
                picked = Some(index);
            }
        }
    });
    if let Some(index) = picked {
        controller.select_swatch(index);
    }
}
