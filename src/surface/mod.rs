//! The immediate-mode drawing surface the controller draws into.
//!
//! A surface keeps no record of what was drawn beyond its pixels. Every
//! primitive mutates the bitmap in place, so there is nothing to undo.

mod raster;
mod recording;

pub use raster::RasterCanvas;
pub use recording::{DrawOp, RecordingSurface};

use egui::{Color32, Pos2, Vec2};

use crate::error::WhiteboardResult;

/// How new pixels combine with the ones already on the surface
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum CompositeMode {
    /// Paint the stroke color over existing content
    #[default]
    SourceOver,
    /// Remove existing content where the stroke covers it
    DestinationOut,
}

/// Everything a stroke primitive needs besides its geometry.
///
/// Caps and joins are always round.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub color: Color32,
    pub width: f32,
    pub composite: CompositeMode,
}

impl StrokeStyle {
    pub fn new(color: Color32, width: f32, composite: CompositeMode) -> Self {
        Self { color, width, composite }
    }
}

/// A 2D raster surface accepting stroke and fill primitives.
pub trait DrawingSurface {
    /// Current pixel dimensions as `[width, height]`
    fn size(&self) -> [u32; 2];

    /// Resize the bitmap. Existing content is discarded.
    fn resize(&mut self, width: u32, height: u32);

    /// Cover the whole surface with an opaque color
    fn fill(&mut self, color: Color32);

    /// Start a new path at `point` without drawing anything
    fn begin_path(&mut self, point: Pos2);

    /// Extend the current path to `point` and stroke the new segment
    fn stroke_path_to(&mut self, point: Pos2, style: &StrokeStyle);

    /// Stroke the outline of an axis-aligned rectangle. `size` may be negative.
    fn stroke_rect(&mut self, origin: Pos2, size: Vec2, style: &StrokeStyle);

    fn stroke_circle(&mut self, center: Pos2, radius: f32, style: &StrokeStyle);

    fn stroke_line(&mut self, from: Pos2, to: Pos2, style: &StrokeStyle);

    /// Serialize the current pixels to a PNG image
    fn encode_png(&self) -> WhiteboardResult<Vec<u8>>;
}
