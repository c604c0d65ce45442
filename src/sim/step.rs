//! Simulation driver
//!
//! Executes one instruction end-to-end: trivial move, chain push, or
//! rejection. The driver holds no state beyond the grid and the robot's
//! cached position; discovery and commitment are stateless functions over
//! those two.

use glam::IVec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::chain::discover;
use super::commit::commit_move;
use super::geometry::{Direction, Instruction};
use super::grid::{Cell, Grid};

/// Grid validation failure at warehouse construction
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WarehouseError {
    #[error("map has no robot")]
    MissingRobot,
    #[error("map has more than one robot")]
    MultipleRobots,
}

/// Result of a single instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepOutcome {
    /// False when the instruction was rejected and the grid left untouched
    pub moved: bool,
    /// Robot position after the step
    pub position: IVec2,
}

/// A warehouse under simulation: the floor plus the robot's cached position.
///
/// `grid[robot] == Robot` holds between instructions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warehouse {
    grid: Grid,
    robot: IVec2,
}

impl Warehouse {
    /// Take ownership of a grid, validating that it holds exactly one robot
    pub fn new(grid: Grid) -> Result<Self, WarehouseError> {
        let robot = grid.robot_position().ok_or(WarehouseError::MissingRobot)?;
        if grid.count(Cell::Robot) > 1 {
            return Err(WarehouseError::MultipleRobots);
        }
        Ok(Self { grid, robot })
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn robot(&self) -> IVec2 {
        self.robot
    }

    /// Apply one push instruction.
    ///
    /// A rejected instruction (wall ahead, or a blocked chain) returns
    /// `moved: false` and leaves the grid byte-identical.
    pub fn step(&mut self, dir: Direction) -> StepOutcome {
        let target = self.robot + dir.delta();
        let moved = match self.grid.cell(target) {
            Cell::Wall => false,
            Cell::Empty => {
                self.robot = commit_move(&mut self.grid, &[], self.robot, dir);
                true
            }
            Cell::Robot => unreachable!("a second robot cannot occupy the grid"),
            Cell::Crate | Cell::CrateLeft | Cell::CrateRight => {
                match discover(&self.grid, target, dir) {
                    Some(chain) => {
                        self.robot = commit_move(&mut self.grid, &chain, self.robot, dir);
                        true
                    }
                    None => false,
                }
            }
        };
        if !moved {
            log::debug!("push {} rejected at {}", dir.symbol(), self.robot);
        }
        StepOutcome {
            moved,
            position: self.robot,
        }
    }

    /// Apply one element of the instruction stream. Unknown symbols are
    /// rejected without touching the grid.
    pub fn step_instruction(&mut self, instruction: Instruction) -> StepOutcome {
        match instruction {
            Instruction::Step(dir) => self.step(dir),
            Instruction::Unknown(c) => {
                log::debug!("ignoring unrecognized instruction {c:?}");
                StepOutcome {
                    moved: false,
                    position: self.robot,
                }
            }
        }
    }

    /// Drive a full instruction stream and return the final robot position
    pub fn run(&mut self, instructions: &[Instruction]) -> IVec2 {
        for &instruction in instructions {
            self.step_instruction(instruction);
        }
        self.robot
    }

    /// Sum of GPS values over every crate on the floor
    pub fn gps_score(&self) -> i64 {
        self.grid.gps_score()
    }

    /// Textual snapshot of the floor
    pub fn snapshot(&self) -> String {
        self.grid.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::test_grid;

    fn warehouse(rows: &[&str]) -> Warehouse {
        Warehouse::new(test_grid(rows)).unwrap()
    }

    #[test]
    fn test_construction_requires_one_robot() {
        assert_eq!(
            Warehouse::new(test_grid(&["#..#"])),
            Err(WarehouseError::MissingRobot)
        );
        assert_eq!(
            Warehouse::new(test_grid(&["#@@#"])),
            Err(WarehouseError::MultipleRobots)
        );
        assert!(Warehouse::new(test_grid(&["#@.#"])).is_ok());
    }

    #[test]
    fn test_trivial_move_and_wall_rejection() {
        let mut wh = warehouse(&["#@.#"]);

        let out = wh.step(Direction::Right);
        assert!(out.moved);
        assert_eq!(out.position, IVec2::new(2, 0));

        // Now against the wall
        let before = wh.snapshot();
        let out = wh.step(Direction::Right);
        assert!(!out.moved);
        assert_eq!(out.position, IVec2::new(2, 0));
        assert_eq!(wh.snapshot(), before);
    }

    #[test]
    fn test_push_then_wall_rejection() {
        // One push moves robot and crate; the next is stopped by the wall
        // immediately beyond the crate
        let mut wh = warehouse(&["#.@O.#"]);

        let out = wh.step(Direction::Right);
        assert!(out.moved);
        assert_eq!(out.position, IVec2::new(3, 0));
        assert_eq!(wh.snapshot(), "#..@O#\n");

        let out = wh.step(Direction::Right);
        assert!(!out.moved);
        assert_eq!(wh.snapshot(), "#..@O#\n");
    }

    #[test]
    fn test_blockage_deep_in_chain_leaves_everything() {
        let mut wh = warehouse(&["#@OOO#"]);
        let before = wh.snapshot();

        let out = wh.step(Direction::Right);
        assert!(!out.moved);
        assert_eq!(out.position, IVec2::new(1, 0));
        assert_eq!(wh.snapshot(), before);
    }

    #[test]
    fn test_rejection_is_idempotent() {
        let mut wh = warehouse(&["#@OOO#"]);
        let before = wh.snapshot();

        for _ in 0..5 {
            let out = wh.step(Direction::Right);
            assert!(!out.moved);
            assert_eq!(wh.snapshot(), before);
        }
    }

    #[test]
    fn test_perpendicular_wide_chain_steps_cleanly() {
        let mut wh = warehouse(&[
            "#########", //
            "#.......#",
            "#..[]...#",
            "#...[]..#",
            "#....@..#",
            "#########",
        ]);

        let out = wh.step(Direction::Up);
        assert!(out.moved);
        assert_eq!(out.position, IVec2::new(5, 3));
        assert_eq!(
            wh.snapshot(),
            "#########\n\
             #..[]...#\n\
             #...[]..#\n\
             #....@..#\n\
             #.......#\n\
             #########\n"
        );
    }

    #[test]
    fn test_unknown_instruction_is_a_rejected_noop() {
        let mut wh = warehouse(&["#@.#"]);
        let before = wh.snapshot();

        let out = wh.step_instruction(Instruction::Unknown('z'));
        assert!(!out.moved);
        assert_eq!(out.position, IVec2::new(1, 0));
        assert_eq!(wh.snapshot(), before);
    }

    #[test]
    fn test_run_returns_final_position() {
        let mut wh = warehouse(&[
            "#####", //
            "#@.O#",
            "#...#",
            "#####",
        ]);
        let stream = [
            Instruction::Step(Direction::Right),
            Instruction::Step(Direction::Right), // pushes the crate into the wall
            Instruction::Step(Direction::Down),
            Instruction::Unknown('?'),
            Instruction::Step(Direction::Right),
        ];
        let last = wh.run(&stream);
        assert_eq!(last, IVec2::new(3, 2));
    }
}
