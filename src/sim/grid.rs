//! Warehouse floor storage and positional metrics
//!
//! The floor is a fixed-extent rectangle stored as a single flat cell array
//! indexed by `row * width + col`. The grid owns that array exclusively;
//! everything else refers to cells through `IVec2` positions (x = column,
//! y = row, row 0 at the top).

use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Weight of the row coordinate in a crate's GPS value
pub const GPS_ROW_WEIGHT: i64 = 100;

/// Contents of a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Wall,
    Robot,
    /// A single-cell crate
    Crate,
    /// Left half of a wide crate; its partner is always one cell to the right
    CrateLeft,
    /// Right half of a wide crate
    CrateRight,
}

impl Cell {
    /// Map a scene glyph to a cell
    pub fn from_glyph(c: char) -> Option<Self> {
        match c {
            '.' => Some(Cell::Empty),
            '#' => Some(Cell::Wall),
            '@' => Some(Cell::Robot),
            'O' => Some(Cell::Crate),
            '[' => Some(Cell::CrateLeft),
            ']' => Some(Cell::CrateRight),
            _ => None,
        }
    }

    /// The glyph used for this cell in snapshots
    pub fn glyph(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Wall => '#',
            Cell::Robot => '@',
            Cell::Crate => 'O',
            Cell::CrateLeft => '[',
            Cell::CrateRight => ']',
        }
    }

    /// True for any cell that is part of a movable crate
    #[inline]
    pub fn is_crate(self) -> bool {
        matches!(self, Cell::Crate | Cell::CrateLeft | Cell::CrateRight)
    }
}

/// The warehouse floor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Build a grid from row-major cells. `cells.len()` must equal
    /// `width * height`.
    pub fn new(width: i32, height: i32, cells: Vec<Cell>) -> Self {
        assert_eq!(
            cells.len(),
            (width * height) as usize,
            "cell count must match grid extent"
        );
        Self {
            width,
            height,
            cells,
        }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    pub fn in_bounds(&self, pos: IVec2) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    #[inline]
    fn index(&self, pos: IVec2) -> usize {
        (pos.y * self.width + pos.x) as usize
    }

    /// Cell contents at `pos`.
    ///
    /// Panics if `pos` lies outside the grid: callers are required to stay
    /// inside the extent, and an out-of-bounds probe is a contract violation
    /// rather than a recoverable condition.
    pub fn cell(&self, pos: IVec2) -> Cell {
        assert!(self.in_bounds(pos), "cell access out of bounds: {pos}");
        self.cells[self.index(pos)]
    }

    /// Bounds-checked cell lookup
    pub fn get(&self, pos: IVec2) -> Option<Cell> {
        self.in_bounds(pos).then(|| self.cells[self.index(pos)])
    }

    /// Overwrite the cell at `pos`. The caller guarantees `pos` is valid and
    /// that the write keeps the scene consistent.
    pub fn set(&mut self, pos: IVec2, cell: Cell) {
        assert!(self.in_bounds(pos), "cell write out of bounds: {pos}");
        let idx = self.index(pos);
        self.cells[idx] = cell;
    }

    /// Position of the first robot cell, scanning row-major.
    ///
    /// Used when a warehouse is constructed; afterwards the driver caches the
    /// position and never rescans.
    pub fn robot_position(&self) -> Option<IVec2> {
        self.cells
            .iter()
            .position(|&c| c == Cell::Robot)
            .map(|i| IVec2::new(i as i32 % self.width, i as i32 / self.width))
    }

    /// Number of cells holding exactly `cell`
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Sum of GPS values over every crate on the floor.
    ///
    /// A crate's GPS value is `100 * row + col` of its reference cell: the
    /// cell itself for a single crate, the left half for a wide one.
    pub fn gps_score(&self) -> i64 {
        let mut total = 0;
        for y in 0..self.height {
            for x in 0..self.width {
                match self.cells[(y * self.width + x) as usize] {
                    Cell::Crate | Cell::CrateLeft => {
                        total += GPS_ROW_WEIGHT * y as i64 + x as i64;
                    }
                    _ => {}
                }
            }
        }
        total
    }

    /// Row-major glyph dump, one line per row
    pub fn snapshot(&self) -> String {
        let mut out = String::with_capacity((self.width as usize + 1) * self.height as usize);
        for y in 0..self.height {
            for x in 0..self.width {
                out.push(self.cells[(y * self.width + x) as usize].glyph());
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.snapshot())
    }
}
