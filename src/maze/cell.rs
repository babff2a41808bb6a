use std::fmt;

/// One of the four cardinal directions, in the order neighbors are scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Bit used for this wall in a cell's wall mask: N=1, E=2, S=4, W=8.
    pub const fn bit(self) -> u8 {
        match self {
            Direction::North => 1,
            Direction::East => 2,
            Direction::South => 4,
            Direction::West => 8,
        }
    }

    pub const fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Column and row offsets of one step in this direction. Rows grow southward.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }

    /// Compass letter used in the path encoding.
    pub const fn letter(self) -> char {
        match self {
            Direction::North => 'N',
            Direction::East => 'E',
            Direction::South => 'S',
            Direction::West => 'W',
        }
    }

    pub fn from_letter(letter: char) -> Option<Direction> {
        match letter {
            'N' => Some(Direction::North),
            'E' => Some(Direction::East),
            'S' => Some(Direction::South),
            'W' => Some(Direction::West),
            _ => None,
        }
    }

    /// Direction of a unit step between two coordinates, if they are cardinal neighbors.
    pub fn between(from: (u16, u16), to: (u16, u16)) -> Option<Direction> {
        let dx = to.0 as i32 - from.0 as i32;
        let dy = to.1 as i32 - from.1 as i32;
        Direction::ALL.into_iter().find(|d| d.delta() == (dx, dy))
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A single maze cell. All four walls start closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    coord: (u16, u16),
    walls: u8,
    /// Set while a generator is running, cleared once it finishes.
    pub(crate) visited: bool,
    pub(crate) glyph: bool,
}

impl Cell {
    pub const ALL_WALLS: u8 = 0b1111;

    pub fn new(coord: (u16, u16)) -> Self {
        Cell {
            coord,
            walls: Cell::ALL_WALLS,
            visited: false,
            glyph: false,
        }
    }

    /// Column and row of this cell.
    pub fn coord(&self) -> (u16, u16) {
        self.coord
    }

    pub fn has_wall(&self, direction: Direction) -> bool {
        self.walls & direction.bit() != 0
    }

    /// Wall mask with a bit set for every closed wall.
    pub fn walls(&self) -> u8 {
        self.walls
    }

    /// Whether this cell belongs to the embedded "42" pattern.
    pub fn is_glyph(&self) -> bool {
        self.glyph
    }

    pub(crate) fn set_wall(&mut self, direction: Direction, closed: bool) {
        if closed {
            self.walls |= direction.bit();
        } else {
            self.walls &= !direction.bit();
        }
    }
}
