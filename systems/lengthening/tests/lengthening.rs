use maze_meander_core::GridCell;
use maze_meander_grid::MazeGrid;
use maze_meander_system_lengthening::{is_valid_path, lengthen};
use maze_meander_system_wave_search::find_path;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn width_one_corridors_never_change() {
    let grid = MazeGrid::parse("S0000E").expect("grid parses");
    let seed_path = row_path(6);
    let mut rng = ChaCha8Rng::seed_from_u64(41);

    let mut path = seed_path.clone();
    for _ in 0..64 {
        path = lengthen(&grid, path, 3, &mut rng);
        assert_eq!(path, seed_path, "corridor admitted a detour");
    }
}

#[test]
fn detours_grow_the_path_through_the_open_row() {
    let grid = MazeGrid::parse("S000E\n00000").expect("grid parses");
    let start = GridCell::new(0, 0);
    let exit = GridCell::new(0, 4);
    let seed_path = row_path(5);
    let mut rng = ChaCha8Rng::seed_from_u64(5);

    let mut path = seed_path.clone();
    for _ in 0..256 {
        let before = path.len();
        path = lengthen(&grid, path, 0, &mut rng);
        assert!(path.len() >= before, "lengthen shrank the path");
        assert!(
            is_valid_path(&grid, start, exit, &path),
            "lengthen returned an invalid path: {path:?}"
        );
    }

    assert!(
        path.len() > seed_path.len(),
        "no attempt rewired through the open row"
    );
}

#[test]
fn lengthening_preserves_validity_across_seeds() {
    let grid = MazeGrid::parse("S0100\n00100\n00000\n01110\n0000E").expect("grid parses");
    let start = GridCell::new(0, 0);
    let exit = GridCell::new(4, 4);

    for seed in 0..8 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut path = find_path(&grid, start, exit, &mut rng).expect("meander maze connects");
        assert!(is_valid_path(&grid, start, exit, &path));

        for _ in 0..24 {
            let before = path.len();
            path = lengthen(&grid, path, 2, &mut rng);
            assert!(path.len() >= before, "seed {seed} shrank the path");
            assert!(
                is_valid_path(&grid, start, exit, &path),
                "seed {seed} broke validity: {path:?}"
            );
        }
    }
}

fn row_path(cells: u32) -> Vec<GridCell> {
    (0..cells).map(|column| GridCell::new(0, column)).collect()
}
