use egui::{Pos2, Vec2};

use crate::color::HexColor;
use crate::config::WhiteboardConfig;
use crate::error::{WhiteboardError, WhiteboardResult};
use crate::export::ExportSink;
use crate::input::InputEvent;
use crate::state::GestureState;
use crate::surface::{DrawingSurface, StrokeStyle};
use crate::tools::Tool;

/// Turns pointer gestures into draw calls on a [`DrawingSurface`].
///
/// Owns everything the toolbar edits (tool, color, width, panel visibility)
/// and the state of the gesture in progress. With no surface attached every
/// drawing operation silently does nothing.
#[derive(Debug)]
pub struct CanvasController<S> {
    config: WhiteboardConfig,
    surface: Option<S>,
    tool: Tool,
    color: HexColor,
    stroke_width: u32,
    panel_collapsed: bool,
    gesture: GestureState,
    /// Height of the last layout, `None` before the first one
    laid_out_height: Option<f32>,
}

impl<S: DrawingSurface> CanvasController<S> {
    pub fn new(config: WhiteboardConfig) -> Self {
        Self {
            tool: config.default_tool,
            color: config.default_color,
            stroke_width: config.default_width,
            config,
            surface: None,
            panel_collapsed: false,
            gesture: GestureState::Idle,
            laid_out_height: None,
        }
    }

    pub fn with_surface(config: WhiteboardConfig, surface: S) -> Self {
        let mut controller = Self::new(config);
        controller.attach_surface(surface);
        controller
    }

    /// Bind a surface. The next layout re-initializes it.
    pub fn attach_surface(&mut self, surface: S) {
        self.surface = Some(surface);
        self.laid_out_height = None;
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }

    pub fn config(&self) -> &WhiteboardConfig {
        &self.config
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn color(&self) -> HexColor {
        self.color
    }

    pub fn stroke_width(&self) -> u32 {
        self.stroke_width
    }

    pub fn panel_collapsed(&self) -> bool {
        self.panel_collapsed
    }

    pub fn gesture(&self) -> &GestureState {
        &self.gesture
    }

    pub fn is_gesturing(&self) -> bool {
        self.gesture.is_gesturing()
    }

    pub fn set_tool(&mut self, tool: Tool) {
        if self.tool != tool {
            log::info!("Tool selected: {}", tool.name());
        }
        self.tool = tool;
    }

    pub fn set_color(&mut self, color: HexColor) {
        self.color = color;
    }

    /// Pick a palette swatch by index. Out-of-range indices are ignored.
    pub fn select_swatch(&mut self, index: usize) {
        match self.config.palette.get(index) {
            Some(&color) => self.set_color(color),
            None => log::debug!("No palette swatch at index {}", index),
        }
    }

    /// Not clamped: the slider bounds are the only limit.
    pub fn set_stroke_width(&mut self, width: u32) {
        self.stroke_width = width;
    }

    pub fn toggle_panel(&mut self) {
        self.panel_collapsed = !self.panel_collapsed;
    }

    fn stroke_style(&self) -> StrokeStyle {
        StrokeStyle::new(
            self.color.color32(),
            self.stroke_width as f32,
            self.tool.composite_mode(),
        )
    }

    /// Fit the surface to the space available for it.
    ///
    /// The first layout and any layout with a different height resize the
    /// surface and fill it with the background, dropping what was drawn.
    /// Returns whether that happened.
    pub fn layout(&mut self, available: Vec2) -> bool {
        let height = available.y.max(0.0).floor();
        if self.laid_out_height == Some(height) {
            return false;
        }
        let Some(surface) = self.surface.as_mut() else {
            log::debug!("Layout skipped: no drawing surface");
            return false;
        };

        let width = available.x.max(0.0).floor();
        surface.resize(width as u32, height as u32);
        surface.fill(self.config.background.color32());
        self.laid_out_height = Some(height);
        log::info!("Canvas laid out at {}x{}", width, height);
        true
    }

    pub fn pointer_down(&mut self, pos: Pos2) {
        if self.gesture.is_gesturing() {
            log::debug!("Pointer down during an active gesture, restarting at {:?}", pos);
        }
        self.gesture = GestureState::start(pos);

        if !self.tool.is_freehand() {
            return;
        }
        match self.surface.as_mut() {
            Some(surface) => surface.begin_path(pos),
            None => log::debug!("Pointer down ignored: no drawing surface"),
        }
    }

    pub fn pointer_move(&mut self, pos: Pos2) {
        if self.gesture.is_idle() {
            return;
        }
        self.gesture.track(pos);

        if !self.tool.is_freehand() {
            return;
        }
        let style = self.stroke_style();
        match self.surface.as_mut() {
            Some(surface) => surface.stroke_path_to(pos, &style),
            None => log::debug!("Pointer move ignored: no drawing surface"),
        }
    }

    /// End the gesture. Shape tools draw from the anchor to `pos`, or to the
    /// last tracked position when the event carries none.
    pub fn pointer_up(&mut self, pos: Option<Pos2>) {
        if let Some(pos) = pos {
            self.gesture.track(pos);
        }
        let Some((anchor, end)) = self.gesture.finish() else {
            return;
        };

        let style = self.stroke_style();
        let Some(surface) = self.surface.as_mut() else {
            log::debug!("Pointer up ignored: no drawing surface");
            return;
        };
        match self.tool {
            Tool::Rectangle => surface.stroke_rect(anchor, end - anchor, &style),
            Tool::Circle => surface.stroke_circle(anchor, anchor.distance(end), &style),
            Tool::Line => surface.stroke_line(anchor, end, &style),
            Tool::Brush | Tool::Eraser => {}
        }
    }

    /// Leaving the canvas ends the gesture exactly like a release
    pub fn pointer_leave(&mut self, pos: Option<Pos2>) {
        self.pointer_up(pos);
    }

    pub fn handle_event(&mut self, event: &InputEvent) {
        let pos = event.position();
        match event {
            InputEvent::PointerDown { location } => self.pointer_down(location.position),
            InputEvent::PointerMove { location } => self.pointer_move(location.position),
            InputEvent::PointerUp { .. } => self.pointer_up(pos),
            InputEvent::PointerLeave { .. } => self.pointer_leave(pos),
        }
    }

    /// Fill the whole surface with the background color
    pub fn clear(&mut self) {
        let background = self.config.background.color32();
        match self.surface.as_mut() {
            Some(surface) => {
                surface.fill(background);
                log::info!("Canvas cleared");
            }
            None => log::debug!("Clear ignored: no drawing surface"),
        }
    }

    pub fn export_png(&self) -> WhiteboardResult<Vec<u8>> {
        self.surface
            .as_ref()
            .ok_or(WhiteboardError::SurfaceUnavailable)?
            .encode_png()
    }

    /// Encode the canvas and hand it to `sink` under the configured file name
    pub fn export_to(&self, sink: &mut dyn ExportSink) -> WhiteboardResult<()> {
        let png = self.export_png()?;
        sink.save(&self.config.export_file_name, &png)?;
        log::info!("Exported {} ({} bytes)", self.config.export_file_name, png.len());
        Ok(())
    }
}
