use clap::Parser;
use std::process::ExitCode;

mod cli;
mod convert;
mod error;

use cli::{Cli, Mode, RunConfig};
use convert::PngCodec;

fn main() -> ExitCode {
    let config = RunConfig::from(Cli::parse());

    println!(
        "🔍 Scanning for {} in: {}",
        config.pattern(),
        config.display_dir().display()
    );

    match run(&config) {
        Ok(converted) => {
            println!("✅ Converted {} file(s)", converted);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("❌ {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Convert according to `config`, returning how many sources were processed
fn run(config: &RunConfig) -> error::Result<usize> {
    let codec = PngCodec;

    match &config.mode {
        Mode::Single(source) => {
            convert::convert_one(&codec, source, config.size)?;
            Ok(1)
        }
        Mode::Batch { pattern } => convert::convert_all(&codec, &config.dir, config.size, pattern),
    }
}
