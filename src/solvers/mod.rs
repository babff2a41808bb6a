mod bfs;

pub use bfs::solve_bfs;

use crate::{
    error::MazeError,
    maze::{Coord, Maze},
};

/// Solves `maze` from its entry to its exit.
///
/// Generated mazes are always connected, so `UnsolvableMaze` means the grid was corrupted.
pub fn solve_maze(maze: &Maze) -> Result<Vec<Coord>, MazeError> {
    let (entry, exit) = (maze.entry(), maze.exit());
    let path = solve_bfs(maze, entry, exit).ok_or(MazeError::UnsolvableMaze { entry, exit })?;
    tracing::debug!("Solved maze in {} steps", path.len() - 1);
    Ok(path)
}
