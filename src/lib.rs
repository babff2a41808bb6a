//! Rectangular maze generation, solving and encoding.
//!
//! A [`maze::Maze`] is carved by one of the [`generators`], solved with breadth-first search by
//! [`solvers::solve_maze`] and written out in the hex wall format of [`encoding`].

pub mod config;
pub mod encoding;
pub mod error;
pub mod generators;
pub mod maze;
pub mod render;
pub mod solvers;

pub use error::MazeError;
pub use maze::{Cell, Coord, Direction, Maze};
