use rand::{Rng, seq::SliceRandom};

use crate::maze::{Coord, Direction, Grid, Maze};

/// Share of the removable walls opened when a maze is made imperfect.
pub const IMPERFECT_RATIO: f64 = 0.1;

/// Opens extra interior walls in an already spanning maze, adding loops.
///
/// Walls on the grid boundary and walls touching a glyph cell are never candidates. Candidates
/// are visited in a random order and a wall is skipped if opening it would leave a 2x2 block of
/// cells with no wall inside it. Returns the number of walls opened.
pub fn make_imperfect<R: Rng>(maze: &mut Maze, rng: &mut R) -> usize {
    // Each interior wall is listed once, from its west or north cell
    let mut candidates: Vec<(Coord, Coord)> = {
        let grid = maze.grid();
        grid.cells()
            .filter(|cell| !cell.is_glyph())
            .flat_map(move |cell| {
                [Direction::East, Direction::South]
                    .into_iter()
                    .filter(move |&d| cell.has_wall(d))
                    .filter_map(move |d| grid.neighbor(cell.coord(), d))
                    .filter(move |&n| !grid[n].is_glyph())
                    .map(move |n| (cell.coord(), n))
            })
            .collect()
    };
    let grid = maze.grid_mut();

    if candidates.is_empty() {
        tracing::warn!("No interior wall can be removed, the maze stays perfect");
        return 0;
    }

    let target = (candidates.len() as f64 * IMPERFECT_RATIO).ceil() as usize;
    candidates.shuffle(rng);

    let mut removed = 0;
    let mut fallback = None;
    for (a, b) in candidates {
        if removed == target {
            break;
        }
        grid.remove_wall(a, b);
        if touches_open_square(grid, a, b) {
            grid.add_wall(a, b);
            fallback.get_or_insert((a, b));
            continue;
        }
        removed += 1;
    }

    // Every candidate opens a square, so give up that rule to still add one loop
    if removed == 0 {
        if let Some((a, b)) = fallback {
            grid.remove_wall(a, b);
            removed = 1;
            tracing::warn!(
                "Every removable wall leaves an open 2x2 area, opened {:?}-{:?} anyway",
                a,
                b
            );
        }
    } else if removed < target {
        tracing::debug!(
            "Only {} of {} extra walls could be opened without creating open areas",
            removed,
            target
        );
    }
    removed
}

/// Whether either 2x2 block containing the passage `a`-`b` is now completely open.
/// `b` is always east or south of `a`.
fn touches_open_square(grid: &Grid, a: Coord, b: Coord) -> bool {
    let (x, y) = a;
    let corners: [Option<Coord>; 2] = if b.1 == y {
        // Horizontal passage: blocks above and below
        [y.checked_sub(1).map(|y| (x, y)), Some((x, y))]
    } else {
        // Vertical passage: blocks to the left and right
        [x.checked_sub(1).map(|x| (x, y)), Some((x, y))]
    };
    corners.into_iter().flatten().any(|c| is_open_square(grid, c))
}

/// Whether the 2x2 block with top-left corner `(x, y)` has no interior walls.
fn is_open_square(grid: &Grid, (x, y): Coord) -> bool {
    if x + 1 >= grid.width() || y + 1 >= grid.height() {
        return false;
    }
    grid.is_open((x, y), (x + 1, y))
        && grid.is_open((x, y), (x, y + 1))
        && grid.is_open((x + 1, y), (x + 1, y + 1))
        && grid.is_open((x, y + 1), (x + 1, y + 1))
}
