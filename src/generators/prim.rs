use rand::Rng;

use crate::maze::Maze;

/// Randomized Prim's algorithm, grown from the entry cell.
///
/// Cells in the tree carry the `visited` flag. The frontier stores cell identity only; the tree
/// neighbors a frontier cell can attach to are recomputed when it is picked.
pub fn randomized_prim<R: Rng>(maze: &mut Maze, rng: &mut R) {
    let start = maze.entry();
    let grid = maze.grid_mut();
    grid.cell_mut(start).visited = true;

    let mut in_frontier = vec![false; grid.len()];
    let mut frontiers = Vec::new();
    for (_, n) in grid.neighbors(start) {
        in_frontier[grid.ravel_index(n)] = true;
        frontiers.push(n);
    }

    while !frontiers.is_empty() {
        // Randomly select a cell from the frontiers
        let frontier = frontiers.swap_remove(rng.random_range(0..frontiers.len()));
        in_frontier[grid.ravel_index(frontier)] = false;

        // Neighbors of the frontier cell that are already part of the tree.
        // There is always at least one, the cell that put it in the frontier.
        let tree_neighbors = grid
            .neighbors(frontier)
            .map(|(_, n)| n)
            .filter(|&n| grid[n].visited)
            .collect::<Vec<_>>();
        let neighbor = tree_neighbors[rng.random_range(0..tree_neighbors.len())];

        // Carve a passage between the frontier and the neighbor
        grid.remove_wall(frontier, neighbor);
        grid.cell_mut(frontier).visited = true;

        // Only add cells that haven't been added to the frontier set before
        let new_frontiers = grid
            .neighbors(frontier)
            .map(|(_, n)| n)
            .filter(|&n| !grid[n].visited && !in_frontier[grid.ravel_index(n)])
            .collect::<Vec<_>>();
        for coord in new_frontiers {
            in_frontier[grid.ravel_index(coord)] = true;
            frontiers.push(coord);
        }
    }
}
