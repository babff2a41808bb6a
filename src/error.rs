use crate::maze::Coord;

/// Errors produced by the maze core.
///
/// `Encoding` and `UnsolvableMaze` can only surface if a maze was corrupted after generation;
/// generator output always satisfies the connectivity and adjacency guarantees they check.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MazeError {
    #[error("invalid maze dimensions {width}x{height}, both must be at least 1")]
    InvalidDimensions { width: u16, height: u16 },

    #[error("invalid coordinate {coord:?}: {reason}")]
    InvalidCoordinate { coord: Coord, reason: &'static str },

    #[error("cannot encode step from {from:?} to {to:?}: not a unit cardinal move")]
    Encoding { from: Coord, to: Coord },

    #[error("no path from {entry:?} to {exit:?}")]
    UnsolvableMaze { entry: Coord, exit: Coord },

    #[error("malformed maze encoding at line {line}: {reason}")]
    Decoding { line: usize, reason: String },
}
