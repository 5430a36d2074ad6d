use std::path::{Path, PathBuf};

/// Marker that flags an unprocessed source asset, e.g. `b001_org.png`
pub const MARKER_SUFFIX: &str = "_org";

/// One source image and the two files it will produce.
///
/// Built right before a conversion and dropped right after.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionJob {
    pub source_path: PathBuf,
    /// Source file stem with the marker removed
    pub base_name: String,
    /// Edge length of the square output, in pixels
    pub output_size: u32,
    pub icon_path: PathBuf,
    pub tile_path: PathBuf,
}

impl ConversionJob {
    /// Derive output paths for `source_path`.
    /// Both outputs are siblings of the source.
    pub fn new(source_path: &Path, output_size: u32) -> Self {
        let stem = source_path
            .file_stem()
            .unwrap_or_default()
            .to_string_lossy();
        let base_name = stem.replace(MARKER_SUFFIX, "");

        let icon_path = source_path.with_file_name(format!("{}.png", base_name));
        let tile_path = source_path.with_file_name(format!("{}_tile.png", base_name));

        ConversionJob {
            source_path: source_path.to_path_buf(),
            base_name,
            output_size,
            icon_path,
            tile_path,
        }
    }

    /// Icon first, then tile
    pub fn outputs(&self) -> [&Path; 2] {
        [&self.icon_path, &self.tile_path]
    }
}
