#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Randomized depth-biased search that threads a path between two maze cells.

use std::collections::{HashSet, VecDeque};

use maze_meander_core::GridCell;
use maze_meander_grid::MazeGrid;
use maze_meander_system_reachability::is_reachable;
use rand::{seq::SliceRandom, Rng};

/// Searches for a sequence of distinct, orthogonally adjacent cells leading
/// from `start` to `exit`.
///
/// Work is popped from the front of a deque and viable neighbors are pushed
/// back onto the front, so the traversal descends eagerly into the branch
/// that keeps the most onward options open. A branch that can no longer
/// reach the exit around its own footprint is pruned before it spawns
/// children, and a neighbor equal to the exit is accepted immediately
/// without weighing its siblings. Neighbor order is shuffled through `rng`,
/// so distinct seeds explore distinct routes; the result is a valid path but
/// not necessarily a shortest one.
///
/// Returns `None` once the deque empties without touching `exit`.
#[must_use]
pub fn find_path<R>(
    grid: &MazeGrid,
    start: GridCell,
    exit: GridCell,
    rng: &mut R,
) -> Option<Vec<GridCell>>
where
    R: Rng,
{
    let mut queue = VecDeque::new();
    queue.push_back(SearchNode {
        cell: start,
        route: Vec::new(),
    });

    while let Some(SearchNode { cell, mut route }) = queue.pop_front() {
        if cell == exit {
            route.push(cell);
            return Some(route);
        }

        if grid.neighbors4(cell).any(|neighbor| neighbor == exit) {
            route.push(cell);
            queue.push_front(SearchNode { cell: exit, route });
            continue;
        }

        let mut visited: HashSet<GridCell> = route.iter().copied().collect();
        if !is_reachable(grid, cell, exit, &visited) {
            continue;
        }
        let _ = visited.insert(cell);

        let mut candidates: Vec<GridCell> = grid.neighbors4(cell).collect();
        candidates.shuffle(rng);

        let mut scored: Vec<ScoredMove> = candidates
            .into_iter()
            .filter(|candidate| is_open_move(grid, *candidate, &visited))
            .map(|candidate| ScoredMove {
                cell: candidate,
                freedom: freedom_score(grid, candidate, &visited),
            })
            .collect();
        // Stable ascending sort: the front insertions below reverse it, so
        // the highest freedom score is popped first.
        scored.sort_by_key(|candidate| candidate.freedom);

        route.push(cell);
        for candidate in scored {
            queue.push_front(SearchNode {
                cell: candidate.cell,
                route: route.clone(),
            });
        }
    }

    None
}

#[derive(Clone, Debug)]
struct SearchNode {
    cell: GridCell,
    route: Vec<GridCell>,
}

#[derive(Clone, Copy, Debug)]
struct ScoredMove {
    cell: GridCell,
    freedom: usize,
}

fn is_open_move(grid: &MazeGrid, cell: GridCell, visited: &HashSet<GridCell>) -> bool {
    grid.passable(cell) && !visited.contains(&cell)
}

fn freedom_score(grid: &MazeGrid, cell: GridCell, visited: &HashSet<GridCell>) -> usize {
    grid.neighbors4(cell)
        .filter(|neighbor| is_open_move(grid, *neighbor, visited))
        .count()
}

#[cfg(test)]
mod tests {
    use super::find_path;
    use maze_meander_core::GridCell;
    use maze_meander_grid::MazeGrid;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn corridors_force_the_only_path() {
        let grid = MazeGrid::parse("S000E").expect("grid parses");
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        let path = find_path(
            &grid,
            GridCell::new(0, 0),
            GridCell::new(0, 4),
            &mut rng,
        )
        .expect("corridor connects start to exit");

        let expected: Vec<GridCell> = (0..5).map(|column| GridCell::new(0, column)).collect();
        assert_eq!(path, expected);
    }

    #[test]
    fn identical_endpoints_collapse_to_one_cell() {
        let grid = MazeGrid::parse("S0E").expect("grid parses");
        let cell = GridCell::new(0, 1);
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        let path = find_path(&grid, cell, cell, &mut rng);

        assert_eq!(path, Some(vec![cell]));
    }

    #[test]
    fn adjacent_exits_are_accepted_immediately() {
        let grid = MazeGrid::parse("SE").expect("grid parses");
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        let path = find_path(
            &grid,
            GridCell::new(0, 0),
            GridCell::new(0, 1),
            &mut rng,
        );

        assert_eq!(
            path,
            Some(vec![GridCell::new(0, 0), GridCell::new(0, 1)])
        );
    }

    #[test]
    fn unbroken_wall_rows_defeat_the_search() {
        let grid = MazeGrid::parse("S00\n111\n00E").expect("grid parses");
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        let path = find_path(
            &grid,
            GridCell::new(0, 0),
            GridCell::new(2, 2),
            &mut rng,
        );

        assert_eq!(path, None);
    }
}
