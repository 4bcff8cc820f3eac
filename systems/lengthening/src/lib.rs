#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Path mutation that rewires random sub-segments into longer detours.

use std::collections::HashSet;

use maze_meander_core::GridCell;
use maze_meander_grid::MazeGrid;
use maze_meander_system_wave_search::find_path;
use rand::Rng;

/// Number of recursive improvement attempts applied to each rewired segment.
pub const REWIRE_ATTEMPTS: usize = 10;

/// Attempts to replace a random interior segment of `path` with a longer
/// detour through the maze.
///
/// A private copy of the maze is rigged: every path cell outside the chosen
/// segment becomes a wall, along with the cell the original path takes out
/// of the segment's first waypoint, so the rerun search cannot retrace the
/// original route. When `depth` is positive the rewired segment is fed back
/// through this function against the rigged maze, [`REWIRE_ATTEMPTS`] times
/// with `depth - 1`, keeping whichever result the attempts settle on.
///
/// The spliced candidate replaces `path` only when it is strictly longer and
/// [`is_valid_path`] holds against the original maze; every other outcome
/// hands `path` back unchanged. Paths of fewer than four cells have no two
/// distinct interior waypoints and are always returned unchanged.
#[must_use]
pub fn lengthen<R>(grid: &MazeGrid, path: Vec<GridCell>, depth: u32, rng: &mut R) -> Vec<GridCell>
where
    R: Rng,
{
    if path.len() < 4 {
        return path;
    }

    let (start_index, end_index) = pick_segment(path.len(), rng);
    let start_point = path[start_index];
    let end_point = path[end_index];

    let mut rigged = grid.clone();
    for cell in path[..start_index].iter().chain(&path[end_index + 1..]) {
        rigged.block(*cell);
    }
    rigged.block(path[start_index + 1]);

    let Some(mut rewired) = find_path(&rigged, start_point, end_point, rng) else {
        return path;
    };

    if depth > 0 {
        for _ in 0..REWIRE_ATTEMPTS {
            rewired = lengthen(&rigged, rewired, depth - 1, rng);
        }
    }

    let mut candidate = Vec::with_capacity(path.len() + rewired.len());
    candidate.extend_from_slice(&path[..start_index]);
    candidate.append(&mut rewired);
    candidate.extend_from_slice(&path[end_index + 1..]);

    let start = path[0];
    let exit = path[path.len() - 1];
    if candidate.len() > path.len() && is_valid_path(grid, start, exit, &candidate) {
        candidate
    } else {
        path
    }
}

/// Checks a candidate path against the maze it must traverse.
///
/// A valid path begins at `start`, ends at `exit`, never repeats a cell,
/// never touches a wall or leaves the grid, and moves between consecutive
/// cells by at most one step per axis. The last rule admits diagonal pairs
/// even though the search itself only produces orthogonal steps.
#[must_use]
pub fn is_valid_path(grid: &MazeGrid, start: GridCell, exit: GridCell, path: &[GridCell]) -> bool {
    let (Some(&first), Some(&last)) = (path.first(), path.last()) else {
        return false;
    };
    if first != start || last != exit {
        return false;
    }

    let mut seen = HashSet::with_capacity(path.len());
    for &cell in path {
        if !grid.passable(cell) || !seen.insert(cell) {
            return false;
        }
    }

    path.windows(2)
        .all(|pair| pair[0].chebyshev_distance(pair[1]) <= 1)
}

fn pick_segment<R>(length: usize, rng: &mut R) -> (usize, usize)
where
    R: Rng,
{
    let interior = 1..length - 1;
    let mut start_index = rng.gen_range(interior.clone());
    let mut end_index = rng.gen_range(interior);

    if end_index == start_index {
        end_index = (end_index + 1).min(length - 2);
    }
    if end_index < start_index {
        std::mem::swap(&mut start_index, &mut end_index);
    }

    (start_index, end_index)
}
