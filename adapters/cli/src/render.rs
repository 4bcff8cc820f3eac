//! Arrow-overlay visualization of a path through the maze.

use maze_meander_core::{direction_between, CellMarker, GridCell};
use maze_meander_grid::MazeGrid;

const WALL_GLYPH: char = '■';
const OPEN_GLYPH: char = '.';
const FALLBACK_GLYPH: char = '?';

/// Prints the maze with the path overlaid as directional arrows.
///
/// Interior path cells render as the arrow toward their successor while the
/// first and last cells keep their original markers. A count of the passable
/// cells the path never touched follows the grid.
pub(crate) fn render_path(grid: &MazeGrid, path: &[GridCell]) {
    if path.is_empty() {
        println!("No path to visualize.");
        return;
    }

    let (lines, unvisited) = compose(grid, path);
    println!();
    for line in &lines {
        println!("{line}");
    }
    println!("Unvisited cells: {unvisited}");
}

/// Builds one glyph line per maze row plus the count of passable cells the
/// path left untouched.
fn compose(grid: &MazeGrid, path: &[GridCell]) -> (Vec<String>, usize) {
    let (rows, columns) = grid.dimensions();
    let mut canvas: Vec<Vec<char>> = (0..rows)
        .map(|row| {
            (0..columns)
                .map(|column| base_glyph(grid, GridCell::new(row, column)))
                .collect()
        })
        .collect();

    // The first window is skipped so the starting cell keeps its marker; the
    // final cell is never a painted window head.
    for pair in path.windows(2).skip(1) {
        let glyph = direction_between(pair[0], pair[1])
            .map_or(FALLBACK_GLYPH, |direction| direction.arrow());
        paint(&mut canvas, pair[0], glyph);
    }

    let unvisited = canvas
        .iter()
        .flatten()
        .filter(|glyph| **glyph == OPEN_GLYPH)
        .count();
    let lines = canvas
        .into_iter()
        .map(|row| row.into_iter().collect())
        .collect();
    (lines, unvisited)
}

fn base_glyph(grid: &MazeGrid, cell: GridCell) -> char {
    match grid.marker(cell) {
        Some(CellMarker::Wall) => WALL_GLYPH,
        Some(CellMarker::Start) => CellMarker::Start.as_char(),
        Some(CellMarker::Exit) => CellMarker::Exit.as_char(),
        Some(CellMarker::Open) | None => OPEN_GLYPH,
    }
}

fn paint(canvas: &mut [Vec<char>], cell: GridCell, glyph: char) {
    let (Ok(row), Ok(column)) = (usize::try_from(cell.row()), usize::try_from(cell.column()))
    else {
        return;
    };
    if let Some(slot) = canvas.get_mut(row).and_then(|line| line.get_mut(column)) {
        *slot = glyph;
    }
}
