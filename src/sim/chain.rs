//! Push-chain discovery
//!
//! Given the robot's target cell (known to hold part of a crate) and a push
//! direction, compute the complete duplicate-free set of crates that must
//! move together, or detect blockage. Discovery is read-only: the committer
//! runs only on a chain that has been validated in full, so a blocked push
//! leaves no trace.
//!
//! Two traversals, selected by whether the push runs along the first crate's
//! own footprint axis:
//! - axis-aligned pushes form a straight run and use a cell-by-cell scan
//! - a wide crate pushed perpendicular to its axis can touch two crates on
//!   the row ahead through a half-cell offset, so the chain branches and is
//!   explored breadth-first with an explicit worklist

use std::collections::{HashSet, VecDeque};

use glam::IVec2;

use super::geometry::{CrateRef, Direction};
use super::grid::{Cell, Grid};

/// Outcome of the straight-run scan
enum Scan {
    /// The run ends at an empty cell; every crate in it can shift
    Clear(Vec<CrateRef>),
    /// The run ends at a wall
    Blocked,
    /// The run butted into a crate the push is not axis-aligned with; the
    /// chain can branch there, so it needs the frontier pass
    Branched,
}

/// Discover the chain of crates a push entering `target` must displace.
///
/// `target` is the robot's destination cell and must hold part of a crate.
/// Returns `None` when the chain is blocked. `Some(chain)` guarantees that
/// shifting every listed crate one step in `dir` simultaneously overlaps
/// nothing and hits no wall.
pub fn discover(grid: &Grid, target: IVec2, dir: Direction) -> Option<Vec<CrateRef>> {
    debug_assert!(grid.cell(target).is_crate());
    let first = CrateRef::at(grid, target)?;

    if first.axis_aligned(dir) {
        match linear_scan(grid, target, dir) {
            Scan::Clear(chain) => Some(chain),
            Scan::Blocked => None,
            Scan::Branched => frontier(grid, first, dir),
        }
    } else {
        frontier(grid, first, dir)
    }
}

/// Walk cell-by-cell from `start` in the push direction, collecting the
/// contiguous run of crates. Stops at the first empty cell (success) or
/// wall (blockage).
fn linear_scan(grid: &Grid, start: IVec2, dir: Direction) -> Scan {
    let delta = dir.delta();
    let mut chain = Vec::new();
    let mut pos = start;

    loop {
        let cr = match grid.cell(pos) {
            Cell::Wall => return Scan::Blocked,
            Cell::Empty => return Scan::Clear(chain),
            Cell::Robot => unreachable!("robot cannot stand ahead of its own push"),
            Cell::Crate => CrateRef::Single(pos),
            Cell::CrateLeft => CrateRef::Wide(pos),
            Cell::CrateRight => CrateRef::Wide(pos - IVec2::X),
        };

        // A straight run stays straight only while the push is parallel to
        // every footprint in it; a perpendicular wide half can branch.
        if !cr.axis_aligned(dir) {
            return Scan::Branched;
        }

        // Both halves of a wide crate canonicalize to the same ref
        if chain.last() != Some(&cr) {
            chain.push(cr);
        }
        pos += delta;
    }
}

/// Breadth-first discovery over the crates touched ahead of each footprint
/// cell. The visited set is keyed by canonical crate identity, so every
/// crate is expanded at most once and the traversal is linear in the chain
/// size.
fn frontier(grid: &Grid, first: CrateRef, dir: Direction) -> Option<Vec<CrateRef>> {
    let delta = dir.delta();
    let mut discovered = vec![first];
    let mut seen: HashSet<CrateRef> = HashSet::from([first]);
    let mut worklist: VecDeque<CrateRef> = VecDeque::from([first]);

    while let Some(cr) = worklist.pop_front() {
        for cell_pos in cr.cells() {
            let ahead = cell_pos + delta;
            let next = match grid.cell(ahead) {
                // Any wall ahead of any footprint cell fails the whole push
                Cell::Wall => return None,
                Cell::Empty => continue,
                Cell::Robot => unreachable!("robot cannot stand ahead of a push chain"),
                Cell::Crate => CrateRef::Single(ahead),
                Cell::CrateLeft => CrateRef::Wide(ahead),
                Cell::CrateRight => CrateRef::Wide(ahead - IVec2::X),
            };
            if seen.insert(next) {
                discovered.push(next);
                worklist.push_back(next);
            }
        }
    }

    Some(discovered)
}
