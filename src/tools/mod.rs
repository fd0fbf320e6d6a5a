use serde::{Deserialize, Serialize};

use crate::surface::CompositeMode;

/// The drawing tools offered in the toolbar.
///
/// Brush and eraser are freehand: they stroke one segment per pointer move.
/// The shape tools draw nothing until the gesture ends.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    #[default]
    Brush,
    Eraser,
    Rectangle,
    Circle,
    Line,
}

impl Tool {
    pub const ALL: [Tool; 5] = [
        Tool::Brush,
        Tool::Eraser,
        Tool::Rectangle,
        Tool::Circle,
        Tool::Line,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Brush => "Brush",
            Self::Eraser => "Eraser",
            Self::Rectangle => "Rectangle",
            Self::Circle => "Circle",
            Self::Line => "Line",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Brush => "🖌",
            Self::Eraser => "⌫",
            Self::Rectangle => "⬜",
            Self::Circle => "⭕",
            Self::Line => "➖",
        }
    }

    /// Whether the tool strokes continuously while the pointer moves
    pub fn is_freehand(self) -> bool {
        matches!(self, Self::Brush | Self::Eraser)
    }

    /// Whether the tool needs the gesture anchor to draw on release
    pub fn is_shape(self) -> bool {
        !self.is_freehand()
    }

    pub fn composite_mode(self) -> CompositeMode {
        match self {
            Self::Eraser => CompositeMode::DestinationOut,
            _ => CompositeMode::SourceOver,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_brush() {
        assert_eq!(Tool::default(), Tool::Brush);
    }

    #[test]
    fn test_only_eraser_subtracts() {
        for tool in Tool::ALL {
            let expected = if tool == Tool::Eraser {
                CompositeMode::DestinationOut
            } else {
                CompositeMode::SourceOver
            };
            assert_eq!(tool.composite_mode(), expected, "{}", tool.name());
        }
    }

    #[test]
    fn test_freehand_and_shape_split() {
        assert!(Tool::Brush.is_freehand());
        assert!(Tool::Eraser.is_freehand());
        assert!(Tool::Rectangle.is_shape());
        assert!(Tool::Circle.is_shape());
        assert!(Tool::Line.is_shape());
    }
}
