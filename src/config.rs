//! `KEY=VALUE` configuration files.
//!
//! ```text
//! # Maze settings
//! WIDTH=20
//! HEIGHT=15
//! ENTRY=0,0
//! EXIT=19,14
//! OUTPUT_FILE=maze.txt
//! PERFECT=True
//! ALGO=PRIME
//! SEED=42
//! ```
//!
//! `ALGO` defaults to `DFS` and `SEED` is optional. Blank lines and lines starting with `#` are
//! skipped.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    str::FromStr,
};

use crate::{
    error::MazeError,
    generators::{GenerationParams, Generator},
    maze::{Coord, Maze},
};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: expected KEY=VALUE, got {content:?}")]
    InvalidLine { line: usize, content: String },

    #[error("missing config key {0}")]
    MissingKey(&'static str),

    #[error("invalid value {value:?} for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },

    #[error(transparent)]
    Maze(#[from] MazeError),
}

const REQUIRED_KEYS: [&str; 6] = ["WIDTH", "HEIGHT", "ENTRY", "EXIT", "OUTPUT_FILE", "PERFECT"];
const OPTIONAL_KEYS: [&str; 2] = ["ALGO", "SEED"];

/// Parsed and validated configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub width: u16,
    pub height: u16,
    pub entry: Coord,
    pub exit: Coord,
    pub output_file: PathBuf,
    pub perfect: bool,
    pub generator: Generator,
    pub seed: Option<u64>,
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = text.parse::<Config>()?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Generation parameters for this configuration.
    pub fn params(&self) -> GenerationParams {
        GenerationParams {
            width: self.width,
            height: self.height,
            entry: self.entry,
            exit: self.exit,
            perfect: self.perfect,
            generator: self.generator,
            seed: self.seed,
        }
    }
}

fn invalid(key: &'static str, value: &str, reason: impl ToString) -> ConfigError {
    ConfigError::InvalidValue {
        key,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn parse_dimension(key: &'static str, value: &str) -> Result<u16, ConfigError> {
    let n = value.parse::<i64>().map_err(|e| invalid(key, value, e))?;
    if n <= 0 {
        return Err(invalid(key, value, "must be a positive integer"));
    }
    u16::try_from(n).map_err(|_| invalid(key, value, format!("must be at most {}", u16::MAX)))
}

fn parse_coord(key: &'static str, value: &str) -> Result<Coord, ConfigError> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| invalid(key, value, "expected x,y"))?;
    let x = x.trim().parse::<u16>().map_err(|e| invalid(key, value, e))?;
    let y = y.trim().parse::<u16>().map_err(|e| invalid(key, value, e))?;
    Ok((x, y))
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(invalid(key, value, "expected True or False")),
    }
}

impl FromStr for Config {
    type Err = ConfigError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut entries: HashMap<&str, &str> = HashMap::new();
        for (i, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                return Err(ConfigError::InvalidLine {
                    line: i + 1,
                    content: line.to_string(),
                });
            };
            let key = key.trim();
            if !REQUIRED_KEYS.contains(&key) && !OPTIONAL_KEYS.contains(&key) {
                tracing::debug!("Ignoring unknown config key {}", key);
            }
            entries.insert(key, value.trim());
        }

        let get = |key: &'static str| {
            entries
                .get(key)
                .copied()
                .ok_or(ConfigError::MissingKey(key))
        };
        for key in REQUIRED_KEYS {
            get(key)?;
        }

        let width = parse_dimension("WIDTH", get("WIDTH")?)?;
        let height = parse_dimension("HEIGHT", get("HEIGHT")?)?;
        let entry = parse_coord("ENTRY", get("ENTRY")?)?;
        let exit = parse_coord("EXIT", get("EXIT")?)?;
        let perfect = parse_bool("PERFECT", get("PERFECT")?)?;

        let output = get("OUTPUT_FILE")?;
        if output.is_empty() {
            return Err(invalid("OUTPUT_FILE", output, "must not be empty"));
        }

        let generator = match entries.get("ALGO") {
            Some(algo) => algo.parse::<Generator>().map_err(|e| invalid("ALGO", algo, e))?,
            None => Generator::default(),
        };
        let seed = entries
            .get("SEED")
            .map(|s| s.parse::<u64>().map_err(|e| invalid("SEED", s, e)))
            .transpose()?;

        // Bounds and entry != exit are the maze's own rules
        Maze::validate(width, height, entry, exit)?;

        Ok(Config {
            width,
            height,
            entry,
            exit,
            output_file: PathBuf::from(output),
            perfect,
            generator,
            seed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
# Maze settings
WIDTH=20
HEIGHT=15
ENTRY=0,0
EXIT=19,14
OUTPUT_FILE=maze.txt
PERFECT=True
ALGO=PRIME
SEED=42
";

    #[test]
    fn test_parse_sample() {
        let config = SAMPLE.parse::<Config>().unwrap();
        assert_eq!(
            config,
            Config {
                width: 20,
                height: 15,
                entry: (0, 0),
                exit: (19, 14),
                output_file: PathBuf::from("maze.txt"),
                perfect: true,
                generator: Generator::Prim,
                seed: Some(42),
            }
        );
        let params = config.params();
        assert_eq!(params.generator, Generator::Prim);
        assert_eq!(params.seed, Some(42));
    }

    #[test]
    fn test_optional_keys_default() {
        let text = "WIDTH=9\nHEIGHT=7\nENTRY=0,0\nEXIT=8,6\nOUTPUT_FILE=out.txt\nPERFECT=false\n";
        let config = text.parse::<Config>().unwrap();
        assert_eq!(config.generator, Generator::RecurBacktrack);
        assert_eq!(config.seed, None);
        assert!(!config.perfect);
    }

    #[test]
    fn test_whitespace_and_unknown_keys() {
        let text = "\n  WIDTH = 5 \n\nHEIGHT=5\nENTRY=0, 0\nEXIT=4,4\nOUTPUT_FILE=o.txt\nPERFECT=TRUE\nCOLOR=red\n";
        let config = text.parse::<Config>().unwrap();
        assert_eq!(config.width, 5);
        assert_eq!(config.entry, (0, 0));
        assert!(config.perfect);
    }

    #[test]
    fn test_missing_key() {
        let text = SAMPLE.replace("PERFECT=True\n", "");
        assert!(matches!(
            text.parse::<Config>(),
            Err(ConfigError::MissingKey("PERFECT"))
        ));
    }

    #[test]
    fn test_invalid_line() {
        let text = SAMPLE.replace("SEED=42", "SEED 42");
        assert!(matches!(
            text.parse::<Config>(),
            Err(ConfigError::InvalidLine { line: 9, .. })
        ));
    }

    #[test]
    fn test_invalid_values() {
        for (from, to, key) in [
            ("WIDTH=20", "WIDTH=0", "WIDTH"),
            ("HEIGHT=15", "HEIGHT=-3", "HEIGHT"),
            ("HEIGHT=15", "HEIGHT=tall", "HEIGHT"),
            ("ENTRY=0,0", "ENTRY=0;0", "ENTRY"),
            ("PERFECT=True", "PERFECT=yes", "PERFECT"),
            ("ALGO=PRIME", "ALGO=KRUSKAL", "ALGO"),
            ("SEED=42", "SEED=abc", "SEED"),
        ] {
            let text = SAMPLE.replace(from, to);
            match text.parse::<Config>() {
                Err(ConfigError::InvalidValue { key: k, .. }) => assert_eq!(k, key),
                other => panic!("expected invalid {key}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_coordinates_checked_against_maze() {
        let text = SAMPLE.replace("EXIT=19,14", "EXIT=20,14");
        assert!(matches!(
            text.parse::<Config>(),
            Err(ConfigError::Maze(MazeError::InvalidCoordinate { .. }))
        ));
        let text = SAMPLE.replace("EXIT=19,14", "EXIT=0,0");
        assert!(matches!(
            text.parse::<Config>(),
            Err(ConfigError::Maze(MazeError::InvalidCoordinate { .. }))
        ));
    }

    #[test]
    fn test_largest_dimensions_accepted() {
        let text = SAMPLE
            .replace("WIDTH=20", "WIDTH=65535")
            .replace("HEIGHT=15", "HEIGHT=65535");
        let config = text.parse::<Config>().unwrap();
        assert_eq!((config.width, config.height), (u16::MAX, u16::MAX));
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            Config::load("/nonexistent/mazegen.cfg"),
            Err(ConfigError::Io { .. })
        ));
    }
}
