use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_appender::non_blocking::WorkerGuard;

use mazegen::{config::Config, encoding::write_maze_file, render::render_maze, solvers::solve_maze};

/// Generate a maze from a config file, solve it and write the hex encoding.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the KEY=VALUE config file
    config: PathBuf,

    /// Write the maze here instead of the config's OUTPUT_FILE
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Override the config's SEED
    #[arg(long)]
    seed: Option<u64>,

    /// Print the maze and its solution to the terminal
    #[arg(long)]
    show: bool,

    /// Print without terminal colors
    #[arg(long, requires = "show")]
    plain: bool,

    /// Log debug messages
    #[arg(short, long)]
    verbose: bool,

    /// Append logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// Sets up the global subscriber. The returned guard flushes the file writer when dropped, so it
/// must live until the end of `main`.
fn init_tracing(args: &Args) -> anyhow::Result<Option<WorkerGuard>> {
    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    let builder = tracing_subscriber::fmt().with_max_level(level);

    match &args.log_file {
        Some(path) => {
            let dir = match path.parent() {
                Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
                _ => PathBuf::from("."),
            };
            let file_name = path
                .file_name()
                .context("log file path has no file name")?;
            let appender = tracing_appender::rolling::never(dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            builder.with_writer(writer).with_ansi(false).init();
            Ok(Some(guard))
        }
        None => {
            builder.with_writer(std::io::stderr).init();
            Ok(None)
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let _guard = init_tracing(&args)?;

    let config = Config::load(&args.config)
        .with_context(|| format!("invalid config {}", args.config.display()))?;
    let mut params = config.params();
    if args.seed.is_some() {
        params.seed = args.seed;
    }
    tracing::info!(
        "Generating {}x{} maze with {} (perfect: {}, seed: {:?})",
        params.width,
        params.height,
        params.generator,
        params.perfect,
        params.seed
    );

    let maze = params.generate()?;
    let path = solve_maze(&maze)?;

    let output = args.output.as_ref().unwrap_or(&config.output_file);
    write_maze_file(output, &maze, &path)
        .with_context(|| format!("cannot write maze to {}", output.display()))?;

    if args.show {
        print!("{}", render_maze(&maze, Some(&path), !args.plain));
        println!(
            "Solution: {} steps from {:?} to {:?}",
            path.len() - 1,
            maze.entry(),
            maze.exit()
        );
    }
    Ok(())
}
