//! The state machine behind a single pointer gesture.
//!
//! ```text
//!            pointer down
//!   ┌──────┐ ───────────► ┌───────────┐ ──┐
//!   │ Idle │              │ Gesturing │   │ pointer move
//!   └──────┘ ◄─────────── └───────────┘ ◄─┘
//!            up / leave
//! ```
//!
//! The anchor is captured on pointer down and dropped when the gesture ends.

use egui::Pos2;

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum GestureState {
    /// No pointer is held on the canvas
    #[default]
    Idle,
    /// A pointer went down on the canvas and has not been released
    Gesturing {
        /// Where the gesture started
        anchor: Pos2,
        /// Most recent position seen during the gesture
        last: Pos2,
    },
}

impl GestureState {
    pub fn start(anchor: Pos2) -> Self {
        Self::Gesturing { anchor, last: anchor }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_gesturing(&self) -> bool {
        matches!(self, Self::Gesturing { .. })
    }

    /// Record the latest pointer position. Ignored while idle.
    pub fn track(&mut self, pos: Pos2) {
        if let Self::Gesturing { last, .. } = self {
            *last = pos;
        }
    }

    /// End the gesture, returning `(anchor, last)` if one was active
    pub fn finish(&mut self) -> Option<(Pos2, Pos2)> {
        match std::mem::take(self) {
            Self::Gesturing { anchor, last } => Some((anchor, last)),
            Self::Idle => None,
        }
    }
}
