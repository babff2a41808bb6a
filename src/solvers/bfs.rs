use std::collections::VecDeque;

use crate::maze::{Coord, Maze};

/// Shortest path from `start` to `goal` through open passages, both ends included.
///
/// Cells are marked visited when enqueued, so each is expanded at most once. Returns `None` when
/// the goal cannot be reached or either end lies outside the maze.
pub fn solve_bfs(maze: &Maze, start: Coord, goal: Coord) -> Option<Vec<Coord>> {
    if !maze.is_in_bounds(start) || !maze.is_in_bounds(goal) {
        return None;
    }

    let grid = maze.grid();
    // Predecessor of each discovered cell, by flat index
    let mut came_from: Vec<Option<usize>> = vec![None; grid.len()];
    let mut visited = vec![false; grid.len()];
    let mut queue = VecDeque::from([start]);
    visited[grid.ravel_index(start)] = true;

    while let Some(current) = queue.pop_front() {
        if current == goal {
            // Backtrack from the goal to rebuild the path
            let mut path = vec![goal];
            let mut idx = grid.ravel_index(goal);
            while let Some(prev) = came_from[idx] {
                path.push(grid.unravel_index(prev));
                idx = prev;
            }
            path.reverse();
            return Some(path);
        }

        let current_idx = grid.ravel_index(current);
        for (direction, neighbor) in grid.neighbors(current) {
            let idx = grid.ravel_index(neighbor);
            if visited[idx] || grid.has_wall(current, direction) {
                continue;
            }
            visited[idx] = true;
            came_from[idx] = Some(current_idx);
            queue.push_back(neighbor);
        }
    }

    None // No path found
}
