/// Sprite conversion module
///
/// This module handles:
/// - Deriving icon/tile output names from `*_org` sources
/// - Decoding, nearest-neighbor resizing and PNG encoding
/// - Converting a single file or every match in a directory

pub mod batch;
pub mod codec;
pub mod job;

pub use batch::{convert_all, convert_one, DEFAULT_PATTERN};
pub use codec::PngCodec;
