use rand::{Rng, SeedableRng, rngs::StdRng};

mod imperfect;
mod prim;
mod recur_backtrack;

pub use imperfect::{IMPERFECT_RATIO, make_imperfect};
pub use prim::randomized_prim;
pub use recur_backtrack::recursive_backtrack;

use crate::{
    error::MazeError,
    maze::{Coord, Maze},
};

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Generator {
    #[default]
    RecurBacktrack,
    Prim,
}

impl std::fmt::Display for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Generator::RecurBacktrack => write!(f, "Recursive Backtracking (DFS)"),
            Generator::Prim => write!(f, "Prim's Algorithm"),
        }
    }
}

impl std::str::FromStr for Generator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DFS" => Ok(Generator::RecurBacktrack),
            "PRIME" | "PRIM" => Ok(Generator::Prim),
            other => Err(format!("unknown algorithm {other:?}, expected DFS or PRIME")),
        }
    }
}

/// Carves a spanning tree into `maze` with the selected algorithm, then opens extra walls if
/// `perfect` is false. All randomness is drawn from `rng`.
pub fn generate_maze<R: Rng>(
    maze: &mut Maze,
    generator: Generator,
    perfect: bool,
    rng: &mut R,
) {
    tracing::debug!(
        "Generating {}x{} maze with {} (perfect: {})",
        maze.width(),
        maze.height(),
        generator,
        perfect
    );
    match generator {
        Generator::RecurBacktrack => recursive_backtrack(maze, rng),
        Generator::Prim => randomized_prim(maze, rng),
    }
    maze.grid_mut().cells_mut().for_each(|cell| cell.visited = false);

    if !perfect {
        let removed = make_imperfect(maze, rng);
        tracing::debug!("Opened {} extra walls", removed);
    }
}

/// Everything needed to build one maze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationParams {
    pub width: u16,
    pub height: u16,
    pub entry: Coord,
    pub exit: Coord,
    pub perfect: bool,
    pub generator: Generator,
    pub seed: Option<u64>,
}

impl GenerationParams {
    /// Builds a fresh maze and generates it. Each call starts from a brand new grid, so calling
    /// this twice with the same seed yields identical mazes.
    pub fn generate(&self) -> Result<Maze, MazeError> {
        let mut maze = Maze::new(self.width, self.height, self.entry, self.exit)?;
        let mut rng = get_rng(self.seed);
        generate_maze(&mut maze, self.generator, self.perfect, &mut rng);
        Ok(maze)
    }
}


#[cfg(test)]
mod tests {
    use super::test_utils::*;
    use super::*;
    use crate::encoding::encode_walls;

    fn params(generator: Generator, perfect: bool, seed: u64) -> GenerationParams {
        GenerationParams {
            width: 10,
            height: 10,
            entry: (0, 0),
            exit: (9, 9),
            perfect,
            generator,
            seed: Some(seed),
        }
    }

    #[test]
    fn test_generator_from_str() {
        assert_eq!("DFS".parse::<Generator>(), Ok(Generator::RecurBacktrack));
        assert_eq!("prime".parse::<Generator>(), Ok(Generator::Prim));
        assert!("KRUSKAL".parse::<Generator>().is_err());
    }

    #[test]
    fn test_same_seed_is_deterministic() {
        for generator in [Generator::RecurBacktrack, Generator::Prim] {
            for perfect in [true, false] {
                let a = params(generator, perfect, 7).generate().unwrap();
                let b = params(generator, perfect, 7).generate().unwrap();
                assert_eq!(encode_walls(&a), encode_walls(&b));
            }
        }
    }

    #[test]
    fn test_algorithms_diverge_on_same_seed() {
        let dfs = params(Generator::RecurBacktrack, true, 42).generate().unwrap();
        let prim = params(Generator::Prim, true, 42).generate().unwrap();
        assert_ne!(encode_walls(&dfs), encode_walls(&prim));
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = params(Generator::RecurBacktrack, true, 1).generate().unwrap();
        let b = params(Generator::RecurBacktrack, true, 2).generate().unwrap();
        assert_ne!(encode_walls(&a), encode_walls(&b));
    }

    #[test]
    fn test_perfect_mazes_are_spanning_trees() {
        for generator in [Generator::RecurBacktrack, Generator::Prim] {
            for (w, h) in [(1, 2), (2, 1), (1, 7), (3, 3), (9, 7), (15, 4), (30, 20)] {
                for seed in 0..5 {
                    let maze = GenerationParams {
                        width: w,
                        height: h,
                        entry: (0, 0),
                        exit: (w - 1, h - 1),
                        perfect: true,
                        generator,
                        seed: Some(seed),
                    }
                    .generate()
                    .unwrap();
                    assert!(is_spanning_tree(&maze), "{generator} {w}x{h} seed {seed}");
                    assert!(boundary_intact(&maze));
                    assert!(walls_consistent(&maze));
                    assert!(maze.grid().cells().all(|c| !c.visited));
                }
            }
        }
    }

    #[test]
    fn test_imperfect_mazes_have_cycles() {
        for generator in [Generator::RecurBacktrack, Generator::Prim] {
            for seed in 0..5 {
                let maze = params(generator, false, seed).generate().unwrap();
                let n = maze.grid().len();
                assert!(maze.grid().open_passages() > n - 1);
                assert_eq!(reachable_cells(&maze), n);
                assert!(boundary_intact(&maze));
                assert!(walls_consistent(&maze));
            }
        }
    }

    #[test]
    fn test_small_imperfect_mazes_have_cycles() {
        for generator in [Generator::RecurBacktrack, Generator::Prim] {
            for (w, h) in [(2, 2), (3, 3), (4, 3), (2, 6), (5, 3), (6, 2)] {
                for seed in 0..50 {
                    let maze = GenerationParams {
                        width: w,
                        height: h,
                        entry: (0, 0),
                        exit: (w - 1, h - 1),
                        perfect: false,
                        generator,
                        seed: Some(seed),
                    }
                    .generate()
                    .unwrap();
                    let n = maze.grid().len();
                    assert!(
                        maze.grid().open_passages() > n - 1,
                        "{generator} {w}x{h} seed {seed}"
                    );
                    assert_eq!(reachable_cells(&maze), n);
                    assert!(boundary_intact(&maze));
                }
            }
        }
    }

    #[test]
    fn test_five_by_five_scenario() {
        let maze = GenerationParams {
            width: 5,
            height: 5,
            entry: (0, 0),
            exit: (4, 4),
            perfect: true,
            generator: Generator::RecurBacktrack,
            seed: Some(1),
        }
        .generate()
        .unwrap();
        assert_eq!(maze.grid().len(), 25);
        assert_eq!(maze.grid().open_passages(), 24);
        assert!(is_spanning_tree(&maze));
    }

    #[test]
    fn test_invalid_params_propagate() {
        let mut p = params(Generator::Prim, true, 0);
        p.exit = p.entry;
        assert!(matches!(
            p.generate(),
            Err(MazeError::InvalidCoordinate { .. })
        ));
    }
}
