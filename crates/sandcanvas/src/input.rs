//! Stroke state machine for pointer interaction
//!
//! Exactly one stroke exists at a time, so two tools can never be
//! active together, and transient per-tool state (shape anchor, pencil
//! last-sample, mix last-position) dies with the stroke instead of
//! lingering in scattered flags.

use glam::{IVec2, Vec2};

use crate::tools::ToolKind;

/// The in-flight pointer interaction, if any.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Stroke {
    #[default]
    Idle,
    /// Sand tool held down; grains spawn each tick
    Pouring,
    /// Shape drag in progress; committed on release, abandoned on leave
    DrawingShape { anchor: Vec2, cursor: Vec2 },
    /// Pencil stroke; `last` is the previous stamped cell
    SolidDrawing { last: Option<IVec2> },
    Erasing,
    /// Mix drag; `last` is the previous pointer position
    Mixing { last: Vec2 },
}

impl Stroke {
    /// State entered when the pointer goes down with `tool` active.
    pub fn begin(tool: ToolKind, pos: Vec2) -> Self {
        match tool {
            ToolKind::Sand => Stroke::Pouring,
            ToolKind::HollowSquare | ToolKind::HollowCircle => Stroke::DrawingShape {
                anchor: pos,
                cursor: pos,
            },
            ToolKind::Pencil => Stroke::SolidDrawing { last: None },
            ToolKind::Eraser => Stroke::Erasing,
            ToolKind::Mix => Stroke::Mixing { last: pos },
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Stroke::Idle)
    }

    pub fn is_pouring(&self) -> bool {
        matches!(self, Stroke::Pouring)
    }

    /// Drop any in-flight stroke: tool switch, pointer leave, or a
    /// full-grid reset that would strand stale coordinates.
    pub fn cancel(&mut self) {
        *self = Stroke::Idle;
    }
}
