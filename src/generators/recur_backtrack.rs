use rand::Rng;

use crate::maze::Maze;

/// Randomized depth-first carving from the entry cell.
///
/// The backtracking stack lives on the heap, so arbitrarily large grids never run into call
/// depth limits.
pub fn recursive_backtrack<R: Rng>(maze: &mut Maze, rng: &mut R) {
    let start = maze.entry();
    let grid = maze.grid_mut();
    grid.cell_mut(start).visited = true;

    // The stack will keep only visited cells
    let mut stack = vec![start];

    while let Some(&cell) = stack.last() {
        let neighbors = grid
            .neighbors(cell)
            .map(|(_, n)| n)
            .filter(|&n| !grid[n].visited)
            .collect::<Vec<_>>();

        if neighbors.is_empty() {
            // Dead end, backtrack
            stack.pop();
            continue;
        }

        let neighbor = neighbors[rng.random_range(0..neighbors.len())];
        grid.remove_wall(cell, neighbor);
        grid.cell_mut(neighbor).visited = true;
        // Carve onward from the neighbor before looking at the rest of this cell
        stack.push(neighbor);
    }
}
