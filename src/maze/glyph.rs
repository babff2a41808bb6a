//! The "42" pattern embedded in the middle of every large enough maze.

/// Smallest grid that can hold the pattern with a free ring of cells around it.
pub const MIN_WIDTH: u16 = 9;
pub const MIN_HEIGHT: u16 = 7;

/// Offsets from the pattern's top-left corner. The pattern spans a 7x5 box:
///
/// ```text
/// #...###
/// #.....#
/// ###.###
/// ..#.#..
/// ..#.###
/// ```
const PATTERN: [(u16, u16); 18] = [
    // 4
    (0, 0),
    (0, 1),
    (0, 2),
    (1, 2),
    (2, 2),
    (2, 3),
    (2, 4),
    // 2
    (4, 0),
    (5, 0),
    (6, 0),
    (6, 1),
    (6, 2),
    (5, 2),
    (4, 2),
    (4, 3),
    (4, 4),
    (5, 4),
    (6, 4),
];

/// Cells of the pattern for a `width` x `height` grid, or nothing when the grid is too small.
pub fn glyph_cells(width: u16, height: u16) -> Vec<(u16, u16)> {
    if width < MIN_WIDTH || height < MIN_HEIGHT {
        return Vec::new();
    }
    let origin = (width / 2 - 3, height / 2 - 2);
    PATTERN
        .iter()
        .map(|&(dx, dy)| (origin.0 + dx, origin.1 + dy))
        .collect()
}
