pub mod cell;
pub mod glyph;
mod grid;

pub use cell::{Cell, Direction};
pub use grid::Grid;

use crate::error::MazeError;

/// Column and row of a cell, `(x, y)`.
pub type Coord = (u16, u16);

/// A grid of cells with a fixed entry and exit.
///
/// Only the generators mutate a maze. Everything exposed outside the crate is read-only.
#[derive(Debug, Clone)]
pub struct Maze {
    grid: Grid,
    entry: Coord,
    exit: Coord,
}

impl Maze {
    /// Creates a maze with every wall closed and the "42" pattern stamped in the middle when the
    /// grid is large enough.
    pub fn new(width: u16, height: u16, entry: Coord, exit: Coord) -> Result<Self, MazeError> {
        Self::validate(width, height, entry, exit)?;
        let mut grid = Grid::new(width, height);

        let glyph = glyph::glyph_cells(width, height);
        tracing::debug!("Stamping {} glyph cells into {}x{} maze", glyph.len(), width, height);
        for coord in glyph {
            grid.cell_mut(coord).glyph = true;
        }

        Ok(Maze { grid, entry, exit })
    }

    /// Checks the arguments of [`Maze::new`] without building the grid.
    pub fn validate(width: u16, height: u16, entry: Coord, exit: Coord) -> Result<(), MazeError> {
        if width == 0 || height == 0 {
            return Err(MazeError::InvalidDimensions { width, height });
        }
        for (coord, reason) in [
            (entry, "entry is outside the maze"),
            (exit, "exit is outside the maze"),
        ] {
            if coord.0 >= width || coord.1 >= height {
                return Err(MazeError::InvalidCoordinate { coord, reason });
            }
        }
        if entry == exit {
            return Err(MazeError::InvalidCoordinate {
                coord: exit,
                reason: "entry and exit must be different cells",
            });
        }
        Ok(())
    }

    /// Returns the height of the maze in cells.
    pub fn height(&self) -> u16 {
        self.grid.height()
    }

    /// Returns the width of the maze in cells.
    pub fn width(&self) -> u16 {
        self.grid.width()
    }

    pub fn entry(&self) -> Coord {
        self.entry
    }

    pub fn exit(&self) -> Coord {
        self.exit
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Checks if the given coordinate is within the bounds of the maze.
    pub fn is_in_bounds(&self, coord: Coord) -> bool {
        self.grid.is_in_bounds(coord)
    }

    /// Coordinates of the cells marked as part of the glyph, in row-major order.
    pub fn glyph_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.grid
            .cells()
            .filter(|cell| cell.is_glyph())
            .map(|cell| cell.coord())
    }

    /// Iterates over the rows of the maze, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = &Cell>> + '_ {
        (0..self.height()).map(move |y| (0..self.width()).map(move |x| &self.grid[(x, y)]))
    }
}

impl std::ops::Index<Coord> for Maze {
    type Output = Cell;

    fn index(&self, index: Coord) -> &Self::Output {
        &self.grid[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates_dimensions() {
        assert_eq!(
            Maze::new(0, 5, (0, 0), (1, 1)).unwrap_err(),
            MazeError::InvalidDimensions {
                width: 0,
                height: 5
            }
        );
        assert!(matches!(
            Maze::new(5, 0, (0, 0), (1, 1)),
            Err(MazeError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_new_validates_coordinates() {
        assert!(matches!(
            Maze::new(5, 5, (5, 0), (1, 1)),
            Err(MazeError::InvalidCoordinate { coord: (5, 0), .. })
        ));
        assert!(matches!(
            Maze::new(5, 5, (0, 0), (0, 5)),
            Err(MazeError::InvalidCoordinate { coord: (0, 5), .. })
        ));
        assert!(matches!(
            Maze::new(5, 5, (2, 2), (2, 2)),
            Err(MazeError::InvalidCoordinate { .. })
        ));
    }

    #[test]
    fn test_validate_largest_maze() {
        assert_eq!(
            Maze::validate(u16::MAX, u16::MAX, (0, 0), (u16::MAX - 1, u16::MAX - 1)),
            Ok(())
        );
        assert!(matches!(
            Maze::validate(u16::MAX, 1, (0, 0), (0, 1)),
            Err(MazeError::InvalidCoordinate { coord: (0, 1), .. })
        ));
    }

    #[test]
    fn test_new_maze_is_closed() {
        let maze = Maze::new(4, 3, (0, 0), (3, 2)).unwrap();
        assert_eq!(maze.width(), 4);
        assert_eq!(maze.height(), 3);
        assert_eq!(maze.entry(), (0, 0));
        assert_eq!(maze.exit(), (3, 2));
        assert!(maze.grid().cells().all(|c| c.walls() == Cell::ALL_WALLS));
        assert_eq!(maze.glyph_cells().count(), 0);
        assert_eq!(maze.rows().count(), 3);
        assert!(maze.rows().all(|row| row.count() == 4));
    }

    #[test]
    fn test_glyph_is_stamped() {
        let maze = Maze::new(9, 7, (0, 0), (8, 6)).unwrap();
        let stamped = maze.glyph_cells().collect::<Vec<_>>();
        let mut expected = glyph::glyph_cells(9, 7);
        expected.sort_by_key(|&(x, y)| (y, x));
        assert_eq!(stamped, expected);
        assert!(maze[(1, 1)].is_glyph());
        assert!(!maze[(0, 0)].is_glyph());
    }

    #[test]
    fn test_out_of_bounds() {
        let maze = Maze::new(5, 5, (0, 0), (4, 4)).unwrap();
        assert!(!maze.is_in_bounds((5, 5)));
        assert!(!maze.is_in_bounds((0, 5)));
        assert!(!maze.is_in_bounds((5, 0)));
        assert!(maze.is_in_bounds((4, 4)));
    }
}
