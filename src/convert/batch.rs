use glob::Pattern;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::codec::ImageCodec;
use super::job::ConversionJob;
use crate::error::{ConvertError, Result};

/// File name pattern for unprocessed sources
pub const DEFAULT_PATTERN: &str = "*_org.png";

/// Convert one source image into its icon and tile PNGs.
///
/// The source is decoded once, resized to `size` x `size` with
/// nearest-neighbor sampling and encoded once; the same bytes are then
/// written to both outputs, so icon and tile are always identical.
///
/// # Errors
/// * `MissingSource` - `source` does not exist (checked before any decoding)
/// * `Read` / `Decode` - the file can't be read or parsed as an image
/// * `Encode` / `Write` - an output can't be produced or written
pub fn convert_one<C: ImageCodec>(codec: &C, source: &Path, size: u32) -> Result<ConversionJob> {
    if !source.exists() {
        return Err(ConvertError::MissingSource {
            path: source.to_path_buf(),
        });
    }

    let job = ConversionJob::new(source, size);

    let bytes = fs::read(&job.source_path).map_err(|e| ConvertError::Read {
        path: job.source_path.clone(),
        source: e,
    })?;

    let decode_err = |reason: String| ConvertError::Decode {
        path: job.source_path.clone(),
        reason,
    };
    let pixels = codec.decode(&bytes).map_err(decode_err)?;
    let resized = codec.resize(&pixels, job.output_size).map_err(decode_err)?;

    let encoded = codec.encode(&resized).map_err(|reason| ConvertError::Encode {
        path: job.icon_path.clone(),
        reason,
    })?;

    for output in job.outputs() {
        write_output(output, &encoded)?;
    }

    println!(
        "📸 {} -> {}, {} ({}x{})",
        job.source_path.display(),
        job.icon_path.display(),
        job.tile_path.display(),
        job.output_size,
        job.output_size,
    );

    Ok(job)
}

/// Convert every file directly inside `dir` whose name matches `pattern`.
///
/// Files are processed in file-name order. The first failure stops the
/// run; files converted before it keep their outputs.
/// Returns the number of sources converted.
pub fn convert_all<C: ImageCodec>(codec: &C, dir: &Path, size: u32, pattern: &str) -> Result<usize> {
    let sources = find_sources(dir, pattern)?;

    for source in &sources {
        convert_one(codec, source, size)?;
    }

    Ok(sources.len())
}

/// List matching regular files in `dir`, sorted by name. Not recursive.
///
/// A directory that doesn't exist simply has no matches.
pub fn find_sources(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let matcher = Pattern::new(pattern).map_err(|e| ConvertError::InvalidPattern {
        pattern: pattern.to_string(),
        reason: e.to_string(),
    })?;

    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut sources = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| ConvertError::Scan {
            dir: dir.to_path_buf(),
            source: e,
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        let matched = matcher.matches(&entry.file_name().to_string_lossy());
        if matched {
            sources.push(entry.into_path());
        }
    }

    Ok(sources)
}

/// Write `bytes` to `path`, creating or truncating it.
/// The explicit flush makes buffered write failures show up here instead of on drop.
fn write_output(path: &Path, bytes: &[u8]) -> Result<()> {
    let write_err = |e: std::io::Error| ConvertError::Write {
        path: path.to_path_buf(),
        source: e,
    };

    let mut writer = BufWriter::new(File::create(path).map_err(write_err)?);
    writer.write_all(bytes).map_err(write_err)?;
    writer.flush().map_err(write_err)?;

    Ok(())
}
