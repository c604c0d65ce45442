//! Directions, instructions and crate identity
//!
//! Two crate footprints exist: single crates covering one cell, and wide
//! crates covering two horizontally adjacent cells that always move as a
//! pair. [`CrateRef`] gives every logical crate one canonical identity so
//! discovery can deduplicate a wide crate touched through either half.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::grid::{Cell, Grid};

/// A unit push direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit displacement for this direction. Row 0 is the top row, so `Up`
    /// decreases `y`.
    #[inline]
    pub fn delta(self) -> IVec2 {
        match self {
            Direction::Up => IVec2::new(0, -1),
            Direction::Down => IVec2::new(0, 1),
            Direction::Left => IVec2::new(-1, 0),
            Direction::Right => IVec2::new(1, 0),
        }
    }

    /// Parse an instruction symbol (`^ v < >`)
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '^' => Some(Direction::Up),
            'v' => Some(Direction::Down),
            '<' => Some(Direction::Left),
            '>' => Some(Direction::Right),
            _ => None,
        }
    }

    /// The instruction symbol for this direction
    pub fn symbol(self) -> char {
        match self {
            Direction::Up => '^',
            Direction::Down => 'v',
            Direction::Left => '<',
            Direction::Right => '>',
        }
    }

    #[inline]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

/// One element of the instruction stream.
///
/// Symbols outside `^ v < >` survive lenient parsing as `Unknown`; stepping
/// one is rejected without touching the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Instruction {
    Step(Direction),
    Unknown(char),
}

/// Canonical identity of one logical crate: a single crate by its only cell,
/// a wide crate by the position of its left half.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CrateRef {
    Single(IVec2),
    Wide(IVec2),
}

impl CrateRef {
    /// Canonicalize from any footprint cell. Returns `None` when `pos` does
    /// not hold part of a crate.
    pub fn at(grid: &Grid, pos: IVec2) -> Option<Self> {
        match grid.cell(pos) {
            Cell::Crate => Some(CrateRef::Single(pos)),
            Cell::CrateLeft => Some(CrateRef::Wide(pos)),
            Cell::CrateRight => Some(CrateRef::Wide(pos - IVec2::X)),
            _ => None,
        }
    }

    /// Reference cell: the crate's own cell, or the left half of a wide one
    #[inline]
    pub fn anchor(self) -> IVec2 {
        match self {
            CrateRef::Single(p) | CrateRef::Wide(p) => p,
        }
    }

    /// The cells this crate occupies (one or two)
    pub fn cells(self) -> impl Iterator<Item = IVec2> {
        let (cells, len) = match self {
            CrateRef::Single(p) => ([p, p], 1),
            CrateRef::Wide(p) => ([p, p + IVec2::X], 2),
        };
        cells.into_iter().take(len)
    }

    /// True when a push in `dir` runs along this crate's own footprint axis:
    /// any direction for a single crate, left/right only for a wide one
    pub fn axis_aligned(self, dir: Direction) -> bool {
        match self {
            CrateRef::Single(_) => true,
            CrateRef::Wide(_) => dir.is_horizontal(),
        }
    }
}
