use clap::Parser;
use std::path::PathBuf;

use crate::convert::DEFAULT_PATTERN;

/// Sprites directory used when `--dir` is not given
pub const DEFAULT_DIR: &str = "assets/sprites/buildings";

/// Output edge length used when `--size` is not given
pub const DEFAULT_SIZE: u32 = 64;

/// Resize *_org.png building images to icon and tile outputs.
#[derive(Debug, Parser)]
#[command(name = "sprite-conv", version)]
pub struct Cli {
    /// Directory containing *_org.png files
    #[arg(long, default_value = DEFAULT_DIR)]
    pub dir: PathBuf,

    /// Output size (square)
    #[arg(long, default_value_t = DEFAULT_SIZE, value_parser = clap::value_parser!(u32).range(1..))]
    pub size: u32,

    /// Single file to convert (e.g., b001_org.png)
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// File name pattern to scan for
    #[arg(long, default_value = DEFAULT_PATTERN, conflicts_with = "file")]
    pub pattern: String,
}

/// What a run will convert
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Exactly one source file
    Single(PathBuf),
    /// Every match of `pattern` inside the directory
    Batch { pattern: String },
}

/// Resolved arguments for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub dir: PathBuf,
    pub size: u32,
    pub mode: Mode,
}

impl From<Cli> for RunConfig {
    fn from(cli: Cli) -> Self {
        let mode = match cli.file {
            // --file is always relative to --dir
            Some(file) => Mode::Single(cli.dir.join(file)),
            None => Mode::Batch {
                pattern: cli.pattern,
            },
        };

        RunConfig {
            dir: cli.dir,
            size: cli.size,
            mode,
        }
    }
}

impl RunConfig {
    /// Scan directory as shown to the user: absolute if it can be resolved
    pub fn display_dir(&self) -> PathBuf {
        self.dir.canonicalize().unwrap_or_else(|_| self.dir.clone())
    }

    /// Pattern named in the status line
    pub fn pattern(&self) -> &str {
        match &self.mode {
            Mode::Batch { pattern } => pattern,
            Mode::Single(_) => DEFAULT_PATTERN,
        }
    }
}
