use crate::controller::CanvasController;
use crate::input::InputHandler;
use crate::renderer::CanvasRenderer;
use crate::surface::{DrawingSurface, RasterCanvas};

/// Lay out the canvas in the remaining space, feed it this frame's pointer
/// events and paint it.
pub fn central_panel(
    ctx: &egui::Context,
    controller: &mut CanvasController<RasterCanvas>,
    renderer: &mut CanvasRenderer,
    input: &mut InputHandler,
) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let available = ui.available_rect_before_wrap();
        let canvas_rect = available.shrink(controller.config().canvas_margin / 2.0);
        ui.allocate_rect(available, egui::Sense::hover());

        controller.layout(canvas_rect.size());

        let [width, height] = controller.surface().map_or([0, 0], |surface| surface.size());
        let bitmap_rect = egui::Rect::from_min_size(canvas_rect.min, egui::vec2(width as f32, height as f32));
        let response = ui.interact(bitmap_rect, ui.id().with("canvas"), egui::Sense::click_and_drag());
        input.set_canvas_rect(bitmap_rect);
        for event in input.process_input(ctx, ui.layer_id()) {
            controller.handle_event(&event);
        }

        let background = controller.config().background.color32();
        if let Some(canvas) = controller.surface() {
            let painter = ui.painter_at(canvas_rect);
            renderer.render(ctx, &painter, canvas_rect, canvas, background);
        }

        if response.hovered() || controller.is_gesturing() {
            ctx.set_cursor_icon(egui::CursorIcon::Crosshair);
        }
    });
}
