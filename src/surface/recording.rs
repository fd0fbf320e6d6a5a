use egui::{Color32, Pos2, Vec2};

use super::{DrawingSurface, StrokeStyle};
use crate::error::{WhiteboardError, WhiteboardResult};

/// A primitive call received by a [`RecordingSurface`]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Resize { width: u32, height: u32 },
    Fill(Color32),
    BeginPath(Pos2),
    StrokePathTo { point: Pos2, style: StrokeStyle },
    StrokeRect { origin: Pos2, size: Vec2, style: StrokeStyle },
    StrokeCircle { center: Pos2, radius: f32, style: StrokeStyle },
    StrokeLine { from: Pos2, to: Pos2, style: StrokeStyle },
}

impl DrawOp {
    /// Style of a stroking primitive, `None` for the rest
    pub fn style(&self) -> Option<&StrokeStyle> {
        match self {
            Self::StrokePathTo { style, .. }
            | Self::StrokeRect { style, .. }
            | Self::StrokeCircle { style, .. }
            | Self::StrokeLine { style, .. } => Some(style),
            _ => None,
        }
    }

    pub fn is_shape(&self) -> bool {
        matches!(
            self,
            Self::StrokeRect { .. } | Self::StrokeCircle { .. } | Self::StrokeLine { .. }
        )
    }
}

/// A surface that keeps a log of the primitives it was asked to draw
/// instead of touching pixels.
#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    size: [u32; 2],
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: [width, height],
            ops: Vec::new(),
        }
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Hand over the log recorded so far and start a fresh one
    pub fn take_ops(&mut self) -> Vec<DrawOp> {
        std::mem::take(&mut self.ops)
    }

    pub fn shape_ops(&self) -> impl Iterator<Item = &DrawOp> {
        self.ops.iter().filter(|op| op.is_shape())
    }

    pub fn segment_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::StrokePathTo { .. }))
            .count()
    }
}

impl DrawingSurface for RecordingSurface {
    fn size(&self) -> [u32; 2] {
        self.size
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.size = [width, height];
        self.ops.push(DrawOp::Resize { width, height });
    }

    fn fill(&mut self, color: Color32) {
        self.ops.push(DrawOp::Fill(color));
    }

    fn begin_path(&mut self, point: Pos2) {
        self.ops.push(DrawOp::BeginPath(point));
    }

    fn stroke_path_to(&mut self, point: Pos2, style: &StrokeStyle) {
        self.ops.push(DrawOp::StrokePathTo { point, style: *style });
    }

    fn stroke_rect(&mut self, origin: Pos2, size: Vec2, style: &StrokeStyle) {
        self.ops.push(DrawOp::StrokeRect { origin, size, style: *style });
    }

    fn stroke_circle(&mut self, center: Pos2, radius: f32, style: &StrokeStyle) {
        self.ops.push(DrawOp::StrokeCircle { center, radius, style: *style });
    }

    fn stroke_line(&mut self, from: Pos2, to: Pos2, style: &StrokeStyle) {
        self.ops.push(DrawOp::StrokeLine { from, to, style: *style });
    }

    fn encode_png(&self) -> WhiteboardResult<Vec<u8>> {
        Err(WhiteboardError::NoPixels)
    }
}
