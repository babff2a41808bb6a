//! Hex wall encoding of a maze and its solution.
//!
//! The file layout is:
//!
//! ```text
//! 9515391539551795151151153
//! ...                          one line per row, one hex digit per cell
//!
//! 0,0                          entry x,y
//! 24,19                        exit x,y
//! SSEENWW...                   solution, one compass letter per step
//! ```
//!
//! A digit is the sum of the closed walls of its cell: North=1, East=2, South=4, West=8.

use std::path::Path;

use crate::{
    error::MazeError,
    maze::{Cell, Coord, Direction, Maze},
};

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Hex digit for a cell's wall mask.
pub fn cell_digit(cell: &Cell) -> char {
    HEX_DIGITS[(cell.walls() & Cell::ALL_WALLS) as usize] as char
}

/// One line of hex digits per row, each line ending with `\n`.
pub fn encode_walls(maze: &Maze) -> String {
    let mut out = String::with_capacity((maze.width() as usize + 1) * maze.height() as usize);
    for row in maze.rows() {
        out.extend(row.map(cell_digit));
        out.push('\n');
    }
    out
}

/// Compass letters for each step of `path`.
pub fn encode_path(path: &[Coord]) -> Result<String, MazeError> {
    path.windows(2)
        .map(|step| {
            Direction::between(step[0], step[1])
                .map(Direction::letter)
                .ok_or(MazeError::Encoding {
                    from: step[0],
                    to: step[1],
                })
        })
        .collect()
}

/// The full file contents for `maze` and its solution `path`.
pub fn encode_maze(maze: &Maze, path: &[Coord]) -> Result<String, MazeError> {
    let mut out = encode_walls(maze);
    let (entry, exit) = (maze.entry(), maze.exit());
    out.push_str(&format!(
        "\n{},{}\n{},{}\n{}\n",
        entry.0,
        entry.1,
        exit.0,
        exit.1,
        encode_path(path)?
    ));
    Ok(out)
}

/// Encodes `maze` and `path` and writes them to `file`.
pub fn write_maze_file(file: &Path, maze: &Maze, path: &[Coord]) -> std::io::Result<()> {
    let contents = encode_maze(maze, path)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    std::fs::write(file, contents)?;
    tracing::info!("Wrote {}x{} maze to {}", maze.width(), maze.height(), file.display());
    Ok(())
}

/// A maze read back from its encoded form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedMaze {
    pub width: u16,
    pub height: u16,
    /// Wall masks in row-major order.
    pub walls: Vec<u8>,
    pub entry: Coord,
    pub exit: Coord,
    /// Cells of the solution, replayed from the entry.
    pub path: Vec<Coord>,
}

impl DecodedMaze {
    pub fn walls_at(&self, (x, y): Coord) -> u8 {
        self.walls[y as usize * self.width as usize + x as usize]
    }
}

fn decoding_error(line: usize, reason: impl Into<String>) -> MazeError {
    MazeError::Decoding {
        line,
        reason: reason.into(),
    }
}

fn parse_coord(
    line_no: usize,
    line: Option<&str>,
    width: u16,
    height: u16,
) -> Result<Coord, MazeError> {
    let line = line.ok_or_else(|| decoding_error(line_no, "missing coordinate line"))?;
    let (x, y) = line
        .split_once(',')
        .ok_or_else(|| decoding_error(line_no, format!("expected x,y, got {line:?}")))?;
    let parse = |s: &str| {
        s.trim()
            .parse::<u16>()
            .map_err(|e| decoding_error(line_no, format!("invalid number {s:?}: {e}")))
    };
    let coord = (parse(x)?, parse(y)?);
    if coord.0 >= width || coord.1 >= height {
        return Err(decoding_error(line_no, "coordinate outside the maze"));
    }
    Ok(coord)
}

/// Parses the output of [`encode_maze`].
///
/// Every path step must stay inside the maze. Wall consistency is not checked.
pub fn decode_maze(input: &str) -> Result<DecodedMaze, MazeError> {
    let mut lines = input.lines().enumerate().map(|(i, l)| (i + 1, l));

    let mut walls = Vec::new();
    let mut width = 0usize;
    let mut height = 0usize;
    let mut line_no = 0;
    for (n, line) in lines.by_ref() {
        line_no = n;
        if line.is_empty() {
            break;
        }
        let row = line
            .chars()
            .map(|c| {
                c.to_digit(16)
                    .map(|d| d as u8)
                    .ok_or_else(|| decoding_error(n, format!("invalid hex digit {c:?}")))
            })
            .collect::<Result<Vec<_>, _>>()?;
        if height == 0 {
            width = row.len();
        } else if row.len() != width {
            return Err(decoding_error(
                n,
                format!("row has {} cells, expected {}", row.len(), width),
            ));
        }
        walls.extend(row);
        height += 1;
    }
    if height == 0 {
        return Err(decoding_error(line_no.max(1), "no maze rows"));
    }
    let (width, height) = match (u16::try_from(width), u16::try_from(height)) {
        (Ok(w), Ok(h)) => (w, h),
        _ => return Err(decoding_error(line_no, "maze too large")),
    };

    // Missing trailing lines are reported one past the last line seen
    let mut last_line = line_no;
    let mut next_line = || match lines.next() {
        Some((n, l)) => {
            last_line = n;
            (n, Some(l))
        }
        None => {
            last_line += 1;
            (last_line, None)
        }
    };
    let (n, line) = next_line();
    let entry = parse_coord(n, line, width, height)?;
    let (n, line) = next_line();
    let exit = parse_coord(n, line, width, height)?;
    let (n, line) = next_line();
    let letters = line.ok_or_else(|| decoding_error(n, "missing path line"))?;

    let mut path = vec![entry];
    let mut current = entry;
    for letter in letters.chars() {
        let direction = Direction::from_letter(letter)
            .ok_or_else(|| decoding_error(n, format!("invalid direction {letter:?}")))?;
        let (dx, dy) = direction.delta();
        let x = current.0 as i32 + dx;
        let y = current.1 as i32 + dy;
        if x < 0 || y < 0 || x >= width as i32 || y >= height as i32 {
            return Err(decoding_error(n, "path leaves the maze"));
        }
        current = (x as u16, y as u16);
        path.push(current);
    }

    Ok(DecodedMaze {
        width,
        height,
        walls,
        entry,
        exit,
        path,
    })
}
