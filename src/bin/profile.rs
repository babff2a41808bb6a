use std::time::{Duration, Instant};

use mazegen::{
    generators::{GenerationParams, Generator},
    solvers::solve_maze,
};

/// Generates and solves the largest square maze with both generators, `ITERATIONS` times each.
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args.next().and_then(|s| s.parse::<usize>().ok()).unwrap_or(10);
    let size = 1000;

    for generator in [Generator::RecurBacktrack, Generator::Prim] {
        let mut generation = Duration::ZERO;
        let mut solving = Duration::ZERO;
        for seed in 0..num_iters as u64 {
            let params = GenerationParams {
                width: size,
                height: size,
                entry: (0, 0),
                exit: (size - 1, size - 1),
                perfect: true,
                generator,
                seed: Some(seed),
            };
            let start = Instant::now();
            let maze = params.generate()?;
            generation += start.elapsed();

            let start = Instant::now();
            let path = solve_maze(&maze)?;
            solving += start.elapsed();
            tracing::debug!("seed {}: solution has {} cells", seed, path.len());
        }
        tracing::info!(
            "{}: {} iterations of {}x{}, generation avg {:?}, solving avg {:?}",
            generator,
            num_iters,
            size,
            size,
            generation / num_iters.max(1) as u32,
            solving / num_iters.max(1) as u32
        );
    }
    Ok(())
}
