//! Textual scene parsing and the map widening transform
//!
//! A scene is a map section, a blank line, then an instruction section:
//!
//! ```text
//! ########
//! #..O.O.#
//! ##@.O..#
//! ########
//!
//! <^^>>>vv
//! ```
//!
//! Map glyphs: `#` wall, `.` floor, `@` robot, `O` single crate, `[` `]` the
//! halves of a wide crate. Instructions are `^ v < >` and may span any
//! number of lines. Malformed scenes are fatal here, at construction; a
//! blocked push later is not an error.

use glam::IVec2;
use thiserror::Error;

use crate::settings::Settings;
use crate::sim::{Cell, Direction, Grid, Instruction, Warehouse, WarehouseError};

/// Scene construction failure
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("scene has no map section")]
    EmptyScene,
    #[error("map row at line {line} does not match the first row's width")]
    RaggedRow { line: usize },
    #[error("unknown map glyph {glyph:?} at line {line}")]
    UnknownTile { glyph: char, line: usize },
    #[error("wide crate half without its partner at line {line}")]
    UnpairedWide { line: usize },
    #[error("unknown instruction symbol {symbol:?}")]
    UnknownInstruction { symbol: char },
    #[error("map already contains wide crates")]
    AlreadyWide,
    #[error(transparent)]
    Warehouse(#[from] WarehouseError),
}

/// A parsed scene: the warehouse plus its instruction stream
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub warehouse: Warehouse,
    pub instructions: Vec<Instruction>,
}

/// Parse a textual scene.
///
/// With `settings.expand` the widening transform is applied to the map
/// before the warehouse is built. With `settings.strict_instructions` an
/// unrecognized instruction symbol fails the parse; by default it is kept
/// as an [`Instruction::Unknown`] no-op.
pub fn parse_scene(input: &str, settings: &Settings) -> Result<Scene, ParseError> {
    let mut rows: Vec<Vec<Cell>> = Vec::new();
    let mut instructions = Vec::new();
    let mut map_mode = true;

    for (idx, raw) in input.lines().enumerate() {
        let line = raw.trim_end();

        if map_mode {
            if line.is_empty() {
                // The first blank line after the map ends the map section
                if !rows.is_empty() {
                    map_mode = false;
                }
                continue;
            }
            let row = parse_row(line, idx + 1)?;
            if let Some(first) = rows.first()
                && row.len() != first.len()
            {
                return Err(ParseError::RaggedRow { line: idx + 1 });
            }
            rows.push(row);
        } else {
            for c in line.chars() {
                match Direction::from_symbol(c) {
                    Some(dir) => instructions.push(Instruction::Step(dir)),
                    None if settings.strict_instructions => {
                        return Err(ParseError::UnknownInstruction { symbol: c });
                    }
                    None => instructions.push(Instruction::Unknown(c)),
                }
            }
        }
    }

    if rows.is_empty() {
        return Err(ParseError::EmptyScene);
    }

    let width = rows[0].len() as i32;
    let height = rows.len() as i32;
    let grid = Grid::new(width, height, rows.into_iter().flatten().collect());
    let grid = if settings.expand { expand(&grid)? } else { grid };
    let warehouse = Warehouse::new(grid)?;

    Ok(Scene {
        warehouse,
        instructions,
    })
}

fn parse_row(line: &str, line_no: usize) -> Result<Vec<Cell>, ParseError> {
    let mut row = Vec::with_capacity(line.len());
    for c in line.chars() {
        row.push(Cell::from_glyph(c).ok_or(ParseError::UnknownTile {
            glyph: c,
            line: line_no,
        })?);
    }

    // Wide halves must pair up left-to-right within the row
    let mut i = 0;
    while i < row.len() {
        match row[i] {
            Cell::CrateLeft => {
                if row.get(i + 1) != Some(&Cell::CrateRight) {
                    return Err(ParseError::UnpairedWide { line: line_no });
                }
                i += 2;
            }
            Cell::CrateRight => return Err(ParseError::UnpairedWide { line: line_no }),
            _ => i += 1,
        }
    }
    Ok(row)
}

/// Widen a narrow map: walls and floor double, every single crate becomes a
/// wide crate, and the robot keeps its row while its column doubles.
pub fn expand(grid: &Grid) -> Result<Grid, ParseError> {
    let mut cells = Vec::with_capacity((grid.width() * 2 * grid.height()) as usize);
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let pair = match grid.cell(IVec2::new(x, y)) {
                Cell::Wall => [Cell::Wall, Cell::Wall],
                Cell::Empty => [Cell::Empty, Cell::Empty],
                Cell::Crate => [Cell::CrateLeft, Cell::CrateRight],
                Cell::Robot => [Cell::Robot, Cell::Empty],
                Cell::CrateLeft | Cell::CrateRight => return Err(ParseError::AlreadyWide),
            };
            cells.extend(pair);
        }
    }
    Ok(Grid::new(grid.width() * 2, grid.height(), cells))
}
