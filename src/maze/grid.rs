use super::cell::{Cell, Direction};

/// Flat row-major storage of maze cells. Adjacency is derived from coordinates.
#[derive(Debug, Clone)]
pub struct Grid {
    cells: Box<[Cell]>,
    width: u16,
    height: u16,
}

impl Grid {
    /// Creates a grid with every wall closed. Callers guarantee both dimensions are non-zero.
    pub(crate) fn new(width: u16, height: u16) -> Self {
        let cells = (0..height)
            .flat_map(|y| (0..width).map(move |x| Cell::new((x, y))))
            .collect::<Vec<_>>()
            .into_boxed_slice();
        Grid {
            cells,
            width,
            height,
        }
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn is_in_bounds(&self, coord: (u16, u16)) -> bool {
        coord.0 < self.width && coord.1 < self.height
    }

    /// Index of a coordinate into the flat cell array.
    pub(crate) fn ravel_index(&self, coord: (u16, u16)) -> usize {
        // Overflow-safe since width and height are u16 (assuming usize is at least 32 bits)
        coord.1 as usize * self.width as usize + coord.0 as usize
    }

    pub(crate) fn unravel_index(&self, index: usize) -> (u16, u16) {
        let width = self.width as usize;
        ((index % width) as u16, (index / width) as u16)
    }

    pub(crate) fn cell_mut(&mut self, coord: (u16, u16)) -> &mut Cell {
        let idx = self.ravel_index(coord);
        &mut self.cells[idx]
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub(crate) fn cells_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.cells.iter_mut()
    }

    /// The coordinate one step from `coord` in `direction`, or `None` past the grid edge.
    pub fn neighbor(&self, coord: (u16, u16), direction: Direction) -> Option<(u16, u16)> {
        let (dx, dy) = direction.delta();
        let x = coord.0.checked_add_signed(dx as i16)?;
        let y = coord.1.checked_add_signed(dy as i16)?;
        self.is_in_bounds((x, y)).then_some((x, y))
    }

    /// All in-bounds neighbors of `coord` in N, E, S, W order, paired with their direction.
    pub fn neighbors(
        &self,
        coord: (u16, u16),
    ) -> impl Iterator<Item = (Direction, (u16, u16))> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |d| self.neighbor(coord, d).map(|n| (d, n)))
    }

    pub fn has_wall(&self, coord: (u16, u16), direction: Direction) -> bool {
        self[coord].has_wall(direction)
    }

    /// Whether `a` and `b` are adjacent with no wall between them.
    pub fn is_open(&self, a: (u16, u16), b: (u16, u16)) -> bool {
        match Direction::between(a, b) {
            Some(d) if self.is_in_bounds(a) && self.is_in_bounds(b) => !self.has_wall(a, d),
            _ => false,
        }
    }

    /// Removes the wall shared by two adjacent cells, on both faces.
    ///
    /// Returns `true` if a wall was removed, `false` if the passage was already open.
    ///
    /// # Panics
    /// * If either coordinate is out of bounds
    /// * If `a` and `b` are not cardinal neighbors
    pub fn remove_wall(&mut self, a: (u16, u16), b: (u16, u16)) -> bool {
        self.set_shared_wall(a, b, false)
    }

    /// Closes the wall shared by two adjacent cells, on both faces.
    ///
    /// # Panics
    /// Same conditions as [`Grid::remove_wall`].
    pub(crate) fn add_wall(&mut self, a: (u16, u16), b: (u16, u16)) -> bool {
        self.set_shared_wall(a, b, true)
    }

    fn set_shared_wall(&mut self, a: (u16, u16), b: (u16, u16), closed: bool) -> bool {
        if !self.is_in_bounds(a) || !self.is_in_bounds(b) {
            panic!("The given coordinates {:?} and {:?} must be in bounds", a, b);
        }
        let Some(direction) = Direction::between(a, b) else {
            panic!("Cells {:?} and {:?} are not adjacent", a, b);
        };
        if self.has_wall(a, direction) == closed {
            return false;
        }
        self.cell_mut(a).set_wall(direction, closed);
        self.cell_mut(b).set_wall(direction.opposite(), closed);
        true
    }

    /// Number of open passages between pairs of cells.
    pub fn open_passages(&self) -> usize {
        self.cells
            .iter()
            .map(|cell| {
                [Direction::East, Direction::South]
                    .into_iter()
                    .filter(|&d| {
                        self.neighbor(cell.coord(), d).is_some() && !cell.has_wall(d)
                    })
                    .count()
            })
            .sum()
    }

    /// Total number of walls shared by two cells.
    pub fn interior_walls(&self) -> usize {
        let (w, h) = (self.width as usize, self.height as usize);
        (w - 1) * h + w * (h - 1)
    }
}

impl std::ops::Index<(u16, u16)> for Grid {
    type Output = Cell;

    fn index(&self, index: (u16, u16)) -> &Self::Output {
        &self.cells[self.ravel_index(index)]
    }
}
