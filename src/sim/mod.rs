//! Deterministic simulation module
//!
//! All push logic lives here. This module must be pure and deterministic:
//! - One instruction applied to completion at a time
//! - Chain discovery is read-only; the grid is mutated only after a
//!   discovered chain has been fully validated
//! - A rejected instruction leaves the grid byte-identical
//! - No I/O or platform dependencies

pub mod chain;
pub mod commit;
pub mod geometry;
pub mod grid;
pub mod step;

pub use chain::discover;
pub use commit::commit_move;
pub use geometry::{CrateRef, Direction, Instruction};
pub use grid::{Cell, Grid};
pub use step::{StepOutcome, Warehouse, WarehouseError};

/// Build a grid from glyph rows for tests
#[cfg(test)]
pub(crate) fn test_grid(rows: &[&str]) -> Grid {
    let width = rows[0].len() as i32;
    let cells = rows
        .iter()
        .flat_map(|r| r.chars())
        .map(|c| Cell::from_glyph(c).expect("bad test glyph"))
        .collect();
    Grid::new(width, rows.len() as i32, cells)
}
