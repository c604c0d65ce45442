//! Atomic move commitment
//!
//! Applies a discovered, validated chain as a single transition. All old
//! footprint cells are cleared before any new cell is written, so one
//! crate's freshly written position is never clobbered by another crate's
//! old-to-new transition, whatever order the chain lists them in.

use glam::IVec2;

use super::geometry::{CrateRef, Direction};
use super::grid::{Cell, Grid};

/// Shift every crate in `chain` one step in `dir`, relocate the robot from
/// `robot` onto its target cell, and return the robot's new position.
///
/// The chain must come from a successful discovery over the same grid. The
/// empty chain commits a trivial robot move.
pub fn commit_move(grid: &mut Grid, chain: &[CrateRef], robot: IVec2, dir: Direction) -> IVec2 {
    let delta = dir.delta();

    // Pass 1: clear every old footprint cell
    for cr in chain {
        for pos in cr.cells() {
            grid.set(pos, Cell::Empty);
        }
    }

    // Pass 2: write every shifted footprint
    for cr in chain {
        match *cr {
            CrateRef::Single(p) => grid.set(p + delta, Cell::Crate),
            CrateRef::Wide(p) => {
                grid.set(p + delta, Cell::CrateLeft);
                grid.set(p + delta + IVec2::X, Cell::CrateRight);
            }
        }
    }

    // The robot follows into the vacated cell
    grid.set(robot, Cell::Empty);
    let next = robot + delta;
    grid.set(next, Cell::Robot);
    next
}
