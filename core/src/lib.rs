#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Shared grid vocabulary for the maze-meander workspace.
//!
//! This crate defines the cell coordinates, movement directions, and cell
//! markers exchanged between the grid, the search systems, and the CLI
//! adapter. The types are plain copyable values with no behavior beyond
//! coordinate arithmetic; grid storage and traversal logic live in the crates
//! that consume them.

use serde::{Deserialize, Serialize};

/// Location of a single maze cell expressed as row and column coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridCell {
    row: u32,
    column: u32,
}

impl GridCell {
    /// Creates a new grid cell coordinate.
    #[must_use]
    pub const fn new(row: u32, column: u32) -> Self {
        Self { row, column }
    }

    /// Zero-based row index of the cell.
    #[must_use]
    pub const fn row(&self) -> u32 {
        self.row
    }

    /// Zero-based column index of the cell.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }

    /// Computes the Chebyshev distance between two cell coordinates.
    ///
    /// Orthogonal and diagonal neighbors both sit at distance one, which is
    /// the adjacency rule path validation applies to consecutive cells.
    #[must_use]
    pub fn chebyshev_distance(self, other: GridCell) -> u32 {
        let row_diff = self.row().abs_diff(other.row());
        let column_diff = self.column().abs_diff(other.column());
        row_diff.max(column_diff)
    }

    /// Returns the adjacent cell one step in the provided direction.
    ///
    /// Steps off the top or left edge of the coordinate space yield `None`;
    /// bounds against a concrete grid are the grid's concern.
    #[must_use]
    pub fn step(self, direction: Direction) -> Option<GridCell> {
        match direction {
            Direction::Up => self.row.checked_sub(1).map(|row| Self::new(row, self.column)),
            Direction::Down => self.row.checked_add(1).map(|row| Self::new(row, self.column)),
            Direction::Left => self
                .column
                .checked_sub(1)
                .map(|column| Self::new(self.row, column)),
            Direction::Right => self
                .column
                .checked_add(1)
                .map(|column| Self::new(self.row, column)),
        }
    }
}

/// Cardinal movement directions through the maze grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Movement toward decreasing row indices.
    Up,
    /// Movement toward increasing row indices.
    Down,
    /// Movement toward decreasing column indices.
    Left,
    /// Movement toward increasing column indices.
    Right,
}

impl Direction {
    /// Canonical probe order applied wherever neighbors are enumerated.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Arrow glyph rendered for a path step taken in this direction.
    #[must_use]
    pub const fn arrow(self) -> char {
        match self {
            Self::Up => '↑',
            Self::Down => '↓',
            Self::Left => '←',
            Self::Right => '→',
        }
    }
}

/// Marker stored for a single maze cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellMarker {
    /// Passable cell with no special role.
    Open,
    /// Impassable cell.
    Wall,
    /// Passable cell designated as the path origin.
    Start,
    /// Passable cell designated as the path destination.
    Exit,
}

impl CellMarker {
    /// Parses a marker from its character grid representation.
    #[must_use]
    pub const fn from_char(value: char) -> Option<Self> {
        match value {
            '0' => Some(Self::Open),
            '1' => Some(Self::Wall),
            'S' => Some(Self::Start),
            'E' => Some(Self::Exit),
            _ => None,
        }
    }

    /// Character representing the marker in grid text form.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Open => '0',
            Self::Wall => '1',
            Self::Start => 'S',
            Self::Exit => 'E',
        }
    }

    /// Reports whether a path may occupy the cell.
    #[must_use]
    pub const fn is_passable(self) -> bool {
        !matches!(self, Self::Wall)
    }
}

/// Determines the direction of travel between two orthogonally adjacent cells.
///
/// Returns `None` when the cells are not exactly one orthogonal step apart,
/// including the diagonal pairs the path validator tolerates.
#[must_use]
pub fn direction_between(from: GridCell, to: GridCell) -> Option<Direction> {
    let row_diff = from.row().abs_diff(to.row());
    let column_diff = from.column().abs_diff(to.column());
    if row_diff + column_diff != 1 {
        return None;
    }

    if row_diff == 1 {
        if to.row() > from.row() {
            Some(Direction::Down)
        } else {
            Some(Direction::Up)
        }
    } else if to.column() > from.column() {
        Some(Direction::Right)
    } else {
        Some(Direction::Left)
    }
}
