//! Cell types
//!
//! Foundational types for the grid-based simulation.

use crate::Rgb;
use serde::{Deserialize, Serialize};

/// A single grid slot's content.
///
/// Sand cells are mobile and subject to the automaton step; wall cells
/// are immobile obstacles placed by the pencil and shape tools. The
/// color has no simulation effect, it only travels with the cell for
/// rendering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Sand {
        color: Rgb,
    },
    Wall {
        color: Rgb,
    },
}

impl Cell {
    pub fn sand(color: Rgb) -> Self {
        Cell::Sand { color }
    }

    pub fn wall(color: Rgb) -> Self {
        Cell::Wall { color }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn is_sand(&self) -> bool {
        matches!(self, Cell::Sand { .. })
    }

    pub fn is_wall(&self) -> bool {
        matches!(self, Cell::Wall { .. })
    }

    /// Display color of an occupied cell.
    pub fn color(&self) -> Option<Rgb> {
        match self {
            Cell::Empty => None,
            Cell::Sand { color } | Cell::Wall { color } => Some(*color),
        }
    }
}
