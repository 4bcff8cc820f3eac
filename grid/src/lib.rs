#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Maze grid storage and queries for the maze-meander workspace.
//!
//! The grid is parsed once from its character form and then serves passive
//! lookups: bounds and passability checks, fixed-order neighbor enumeration,
//! and endpoint discovery. The only mutation is [`MazeGrid::block`], which
//! path rigging applies to private clones of the grid; the parsed original is
//! never altered.

use maze_meander_core::{CellMarker, Direction, GridCell};
use thiserror::Error;

/// Rectangular maze stored as a dense row-major grid of cell markers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MazeGrid {
    rows: u32,
    columns: u32,
    cells: Vec<CellMarker>,
}

impl MazeGrid {
    /// Parses a maze from its character grid representation.
    ///
    /// One character per cell, rows separated by line breaks, no whitespace
    /// handling beyond the line terminators themselves. Every row must match
    /// the width of the first row.
    pub fn parse(text: &str) -> Result<Self, MazeParseError> {
        let mut lines = text.lines();
        let Some(first) = lines.next() else {
            return Err(MazeParseError::Empty);
        };
        let width = first.chars().count();
        if width == 0 {
            return Err(MazeParseError::Empty);
        }

        let mut cells = Vec::new();
        let mut start_seen = false;
        let mut exit_seen = false;
        let mut row_count = 0usize;

        for (row, line) in std::iter::once(first).chain(lines).enumerate() {
            let mut row_width = 0usize;
            for (column, value) in line.chars().enumerate() {
                let Some(marker) = CellMarker::from_char(value) else {
                    return Err(MazeParseError::UnknownMarker {
                        row,
                        column,
                        found: value,
                    });
                };

                match marker {
                    CellMarker::Start => {
                        if start_seen {
                            return Err(MazeParseError::DuplicateMarker {
                                marker: value,
                                row,
                                column,
                            });
                        }
                        start_seen = true;
                    }
                    CellMarker::Exit => {
                        if exit_seen {
                            return Err(MazeParseError::DuplicateMarker {
                                marker: value,
                                row,
                                column,
                            });
                        }
                        exit_seen = true;
                    }
                    CellMarker::Open | CellMarker::Wall => {}
                }

                cells.push(marker);
                row_width += 1;
            }

            if row_width != width {
                return Err(MazeParseError::RaggedRow {
                    row,
                    expected: width,
                    found: row_width,
                });
            }
            row_count += 1;
        }

        let rows = u32::try_from(row_count).unwrap_or(u32::MAX);
        let columns = u32::try_from(width).unwrap_or(u32::MAX);
        Ok(Self {
            rows,
            columns,
            cells,
        })
    }

    /// Provides the number of rows and columns in the grid.
    #[must_use]
    pub const fn dimensions(&self) -> (u32, u32) {
        (self.rows, self.columns)
    }

    /// Returns the marker stored at the provided cell, if it lies within the
    /// grid.
    #[must_use]
    pub fn marker(&self, cell: GridCell) -> Option<CellMarker> {
        self.index(cell).and_then(|index| self.cells.get(index).copied())
    }

    /// Reports whether the cell lies inside the grid and is not a wall.
    #[must_use]
    pub fn passable(&self, cell: GridCell) -> bool {
        self.marker(cell).map_or(false, CellMarker::is_passable)
    }

    /// Enumerates the in-bounds orthogonal neighbors of a cell.
    ///
    /// Neighbors arrive in the canonical probe order up, down, left, right.
    /// Walls are included; passability is the caller's concern.
    #[must_use]
    pub fn neighbors4(&self, cell: GridCell) -> impl Iterator<Item = GridCell> {
        let mut candidates = [None; 4];
        let mut count = 0;

        for direction in Direction::ALL {
            let Some(neighbor) = cell.step(direction) else {
                continue;
            };
            if neighbor.row() < self.rows && neighbor.column() < self.columns {
                candidates[count] = Some(neighbor);
                count += 1;
            }
        }

        candidates.into_iter().take(count).flatten()
    }

    /// Locates the unique start and exit markers, scanning in row-major
    /// order.
    #[must_use]
    pub fn find_start_exit(&self) -> (Option<GridCell>, Option<GridCell>) {
        let mut start = None;
        let mut exit = None;

        for row in 0..self.rows {
            for column in 0..self.columns {
                let cell = GridCell::new(row, column);
                match self.marker(cell) {
                    Some(CellMarker::Start) => start = Some(cell),
                    Some(CellMarker::Exit) => exit = Some(cell),
                    _ => {}
                }
            }
        }

        (start, exit)
    }

    /// Overwrites the marker at the provided cell with a wall.
    ///
    /// Out-of-bounds cells are ignored.
    pub fn block(&mut self, cell: GridCell) {
        if let Some(index) = self.index(cell) {
            if let Some(slot) = self.cells.get_mut(index) {
                *slot = CellMarker::Wall;
            }
        }
    }

    fn index(&self, cell: GridCell) -> Option<usize> {
        if cell.row() < self.rows && cell.column() < self.columns {
            let row = usize::try_from(cell.row()).ok()?;
            let column = usize::try_from(cell.column()).ok()?;
            let width = usize::try_from(self.columns).ok()?;
            Some(row * width + column)
        } else {
            None
        }
    }
}

/// Errors produced while parsing a character grid into a maze.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MazeParseError {
    /// The input contained no grid rows.
    #[error("maze text contains no rows")]
    Empty,
    /// A row's width differed from the first row's width.
    #[error("row {row} spans {found} cells where the first row spans {expected}")]
    RaggedRow {
        /// Zero-based index of the offending row.
        row: usize,
        /// Width of the first row in cells.
        expected: usize,
        /// Width of the offending row in cells.
        found: usize,
    },
    /// A character outside the marker alphabet appeared in the grid.
    #[error("unsupported marker '{found}' at row {row}, column {column}")]
    UnknownMarker {
        /// Zero-based row of the offending character.
        row: usize,
        /// Zero-based column of the offending character.
        column: usize,
        /// Character that could not be interpreted.
        found: char,
    },
    /// A start or exit marker appeared more than once.
    #[error("marker '{marker}' appears more than once, again at row {row}, column {column}")]
    DuplicateMarker {
        /// Character form of the repeated marker.
        marker: char,
        /// Zero-based row of the second occurrence.
        row: usize,
        /// Zero-based column of the second occurrence.
        column: usize,
    },
}
