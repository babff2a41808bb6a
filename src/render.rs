use crossterm::style::{Color, Stylize};

use std::{collections::HashSet, fmt::Write};

use crate::maze::{Coord, Direction, Maze};

/// One square of the rendered picture. Cells and the walls between them each get a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Wall,
    Empty,
    /// A cell of the embedded "42" pattern.
    Glyph,
    Start,
    Goal,
    /// A cell or passage on the solution path.
    Route,
}

impl Tile {
    /// The width of each tile when rendered, in character widths.
    pub const WIDTH: usize = 2;

    pub fn symbol(&self) -> &'static str {
        match self {
            Tile::Wall => "██",
            Tile::Empty => "  ",
            Tile::Glyph => "▒▒",
            Tile::Start => "SS",
            Tile::Goal => "GG",
            Tile::Route => "··",
        }
    }

    fn color(&self) -> Color {
        match self {
            Tile::Wall => Color::White,
            Tile::Empty => Color::Reset,
            Tile::Glyph => Color::Cyan,
            Tile::Start => Color::Green,
            Tile::Goal => Color::Red,
            Tile::Route => Color::Magenta,
        }
    }

    /// Writes the tile, with terminal colors when `colored` is set.
    fn write_to(&self, out: &mut String, colored: bool) {
        let symbol = self.symbol();

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                symbol.width(),
                Tile::WIDTH,
                "Each tile must occupy exactly two character widths."
            );
        }

        // Writing to a String cannot fail
        let _ = if colored {
            write!(out, "{}", symbol.with(self.color()))
        } else {
            write!(out, "{}", symbol)
        };
    }
}

/// Tile grid of `(2 * width + 1) x (2 * height + 1)` tiles, row by row.
///
/// Cell `(x, y)` sits at tile `(2x + 1, 2y + 1)`, the walls around it on the neighboring tiles,
/// and every even/even tile is a wall corner.
pub fn tiles(maze: &Maze, solution: Option<&[Coord]>) -> Vec<Vec<Tile>> {
    let grid = maze.grid();
    let tile_width = maze.width() as usize * 2 + 1;
    let tile_height = maze.height() as usize * 2 + 1;
    let mut tiles = vec![vec![Tile::Wall; tile_width]; tile_height];

    for cell in grid.cells() {
        let (x, y) = cell.coord();
        let (tx, ty) = (x as usize * 2 + 1, y as usize * 2 + 1);
        tiles[ty][tx] = if cell.is_glyph() {
            Tile::Glyph
        } else {
            Tile::Empty
        };
        if grid.neighbor((x, y), Direction::East).is_some() && !cell.has_wall(Direction::East) {
            tiles[ty][tx + 1] = Tile::Empty;
        }
        if grid.neighbor((x, y), Direction::South).is_some() && !cell.has_wall(Direction::South)
        {
            tiles[ty + 1][tx] = Tile::Empty;
        }
    }

    if let Some(path) = solution {
        let on_path = path.iter().copied().collect::<HashSet<_>>();
        for &(x, y) in &on_path {
            if maze.is_in_bounds((x, y)) {
                tiles[y as usize * 2 + 1][x as usize * 2 + 1] = Tile::Route;
            }
        }
        for step in path.windows(2) {
            let (a, b) = (step[0], step[1]);
            if grid.is_open(a, b) {
                // The passage tile sits halfway between the two cell tiles
                let tx = a.0 as usize + b.0 as usize + 1;
                let ty = a.1 as usize + b.1 as usize + 1;
                tiles[ty][tx] = Tile::Route;
            }
        }
    }

    let (entry, exit) = (maze.entry(), maze.exit());
    tiles[entry.1 as usize * 2 + 1][entry.0 as usize * 2 + 1] = Tile::Start;
    tiles[exit.1 as usize * 2 + 1][exit.0 as usize * 2 + 1] = Tile::Goal;
    tiles
}

/// Draws the maze, and its solution if given, as text. One line per tile row.
pub fn render_maze(maze: &Maze, solution: Option<&[Coord]>, colored: bool) -> String {
    let tiles = tiles(maze, solution);
    let mut out = String::new();
    for row in &tiles {
        for tile in row {
            tile.write_to(&mut out, colored);
        }
        out.push('\n');
    }
    out
}
