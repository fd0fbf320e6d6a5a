use crate::config::WhiteboardConfig;
use crate::controller::CanvasController;
use crate::export::ExportSink;
use crate::input::InputHandler;
use crate::panels::{self, ToolbarAction};
use crate::renderer::CanvasRenderer;
use crate::surface::RasterCanvas;

/// The whiteboard: toolbar on top, canvas filling the rest of the window.
///
/// Nothing is persisted; closing the app discards the drawing.
pub struct WhiteboardApp {
    controller: CanvasController<RasterCanvas>,
    renderer: CanvasRenderer,
    input: InputHandler,
    export_sink: Box<dyn ExportSink>,
}

impl WhiteboardApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: WhiteboardConfig) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::light());
        Self::with_sink(config, default_sink())
    }

    pub fn with_sink(config: WhiteboardConfig, export_sink: Box<dyn ExportSink>) -> Self {
        Self {
            controller: CanvasController::with_surface(config, RasterCanvas::default()),
            renderer: CanvasRenderer::new(),
            input: InputHandler::new(egui::Rect::NOTHING),
            export_sink,
        }
    }

    pub fn controller(&self) -> &CanvasController<RasterCanvas> {
        &self.controller
    }

    /// Encode the canvas and hand it to the export sink. Failures are logged.
    pub fn download(&mut self) {
        if let Err(err) = self.controller.export_to(self.export_sink.as_mut()) {
            log::error!("Failed to export canvas: {}", err);
        }
    }

    /// Build one frame of UI and apply this frame's input
    pub fn ui(&mut self, ctx: &egui::Context) {
        match panels::toolbar(&mut self.controller, ctx) {
            Some(ToolbarAction::Clear) => self.controller.clear(),
            Some(ToolbarAction::Download) => self.download(),
            None => {}
        }
        panels::central_panel(ctx, &mut self.controller, &mut self.renderer, &mut self.input);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn default_sink() -> Box<dyn ExportSink> {
    Box::new(crate::export::DirectorySink::current_dir())
}

#[cfg(target_arch = "wasm32")]
fn default_sink() -> Box<dyn ExportSink> {
    Box::new(crate::export::BrowserDownload)
}

impl eframe::App for WhiteboardApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::MemorySink;
    use crate::surface::DrawingSurface;
    use egui::{Event, Modifiers, PointerButton, RawInput, Rect, pos2, vec2};

    fn raw_input(events: Vec<Event>) -> RawInput {
        RawInput {
            screen_rect: Some(Rect::from_min_size(pos2(0.0, 0.0), vec2(800.0, 600.0))),
            events,
            ..Default::default()
        }
    }

    fn button(pos: egui::Pos2, pressed: bool) -> Event {
        Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed,
            modifiers: Modifiers::NONE,
        }
    }

    fn app() -> WhiteboardApp {
        WhiteboardApp::with_sink(WhiteboardConfig::default(), Box::new(MemorySink::default()))
    }

    fn white_pixels(app: &WhiteboardApp) -> bool {
        let canvas = app.controller().surface().unwrap();
        canvas.pixels().pixels().all(|p| p.0 == [255, 255, 255, 255])
    }

    #[test]
    fn test_first_frame_lays_out_white_canvas() {
        let ctx = egui::Context::default();
        let mut app = app();
        let _ = ctx.run(raw_input(vec![]), |ctx| app.ui(ctx));

        let [width, height] = app.controller().surface().unwrap().size();
        assert!(width > 0 && width <= 800);
        assert!(height > 0 && height < 600);
        assert!(white_pixels(&app));
    }

    #[test]
    fn test_brush_gesture_marks_canvas() {
        let ctx = egui::Context::default();
        let mut app = app();
        let _ = ctx.run(raw_input(vec![]), |ctx| app.ui(ctx));
        let _ = ctx.run(
            raw_input(vec![
                Event::PointerMoved(pos2(300.0, 400.0)),
                button(pos2(300.0, 400.0), true),
                Event::PointerMoved(pos2(400.0, 420.0)),
                button(pos2(400.0, 420.0), false),
            ]),
            |ctx| app.ui(ctx),
        );

        assert!(app.controller().gesture().is_idle());
        assert!(!white_pixels(&app));
    }

    fn floating_area(ctx: &egui::Context) {
        egui::Area::new(egui::Id::new("floating_picker"))
            .order(egui::Order::Foreground)
            .fixed_pos(pos2(300.0, 300.0))
            .show(ctx, |ui| {
                ui.allocate_space(vec2(200.0, 200.0));
            });
    }

    fn drag(from: egui::Pos2, to: egui::Pos2) -> RawInput {
        raw_input(vec![
            Event::PointerMoved(from),
            button(from, true),
            Event::PointerMoved(to),
            button(to, false),
        ])
    }

    #[test]
    fn test_drag_inside_floating_area_leaves_canvas_alone() {
        let ctx = egui::Context::default();
        let mut app = app();
        let frame = |input: RawInput, app: &mut WhiteboardApp| {
            let _ = ctx.run(input, |ctx| {
                floating_area(ctx);
                app.ui(ctx);
            });
        };
        // The area is measured on its first frame and shown from the next
        frame(raw_input(vec![]), &mut app);
        frame(raw_input(vec![]), &mut app);

        frame(drag(pos2(350.0, 350.0), pos2(450.0, 420.0)), &mut app);
        assert!(app.controller().gesture().is_idle());
        assert!(white_pixels(&app));

        frame(drag(pos2(100.0, 350.0), pos2(200.0, 420.0)), &mut app);
        assert!(app.controller().gesture().is_idle());
        assert!(!white_pixels(&app));
    }

    #[test]
    fn test_download_without_layout_is_logged_not_fatal() {
        let mut app = app();
        app.download();
        assert!(app.controller().gesture().is_idle());
    }
}
