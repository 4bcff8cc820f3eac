#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Connectivity probe that reports whether a target cell is still in reach.

use std::collections::{HashSet, VecDeque};

use maze_meander_core::GridCell;
use maze_meander_grid::MazeGrid;

/// Reports whether `from` stays connected to `to` through passable cells
/// outside the forbidden set.
///
/// The traversal is a breadth-first flood rooted at `to`; on an undirected
/// grid the answer matches a flood rooted at `from`, so the root choice is
/// arbitrary. Identical endpoints are trivially connected, even when that
/// cell is forbidden or a wall, because the flood begins there before any
/// neighbor filtering applies.
#[must_use]
pub fn is_reachable(
    grid: &MazeGrid,
    from: GridCell,
    to: GridCell,
    forbidden: &HashSet<GridCell>,
) -> bool {
    let mut visited = HashSet::new();
    let mut frontier = VecDeque::new();

    let _ = visited.insert(to);
    frontier.push_back(to);

    while let Some(cell) = frontier.pop_front() {
        if cell == from {
            return true;
        }

        for neighbor in grid.neighbors4(cell) {
            if !grid.passable(neighbor) || forbidden.contains(&neighbor) {
                continue;
            }
            if visited.insert(neighbor) {
                frontier.push_back(neighbor);
            }
        }
    }

    false
}
