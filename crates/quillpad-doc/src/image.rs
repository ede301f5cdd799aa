//! Image loading and thumbnailing.
//!
//! An inserted image never lands in the buffer at full size: it is decoded,
//! downscaled to a bounded thumbnail, persisted to a uniquely named scratch
//! file, and the pixels are handed to the UI for embedding. Scratch files
//! are unique per call, so repeated insertions never clobber each other.

use std::path::{Path, PathBuf};

use ::image::{GenericImageView, RgbaImage};

use crate::DocResult;

/// Longest thumbnail side, in pixels. Aspect ratio is preserved.
pub const THUMBNAIL_BOUND: u32 = 100;

/// An aspect-preserving downscaled copy of an image, ready for embedding.
#[derive(Debug, Clone)]
pub struct Thumbnail {
    pub width: u32,
    pub height: u32,
    /// Tightly packed RGBA8 pixels, row-major.
    pub rgba: Vec<u8>,
    /// Where the thumbnail was persisted on disk.
    pub path: PathBuf,
}

impl Thumbnail {
    fn from_rgba_image(img: RgbaImage, path: PathBuf) -> Self {
        Self {
            width: img.width(),
            height: img.height(),
            rgba: img.into_raw(),
            path,
        }
    }
}

/// Loads `source`, downscales it to at most [`THUMBNAIL_BOUND`] on the
/// longest side, and persists the result as a unique PNG in `scratch_dir`.
pub fn make_thumbnail(source: &Path, scratch_dir: &Path) -> DocResult<Thumbnail> {
    tracing::debug!(source = %source.display(), "thumbnailing image");

    let img = ::image::open(source)?;
    let (width, height) = img.dimensions();
    // Downscale only; an image already within the bound is embedded as-is.
    let thumb = if width <= THUMBNAIL_BOUND && height <= THUMBNAIL_BOUND {
        img
    } else {
        img.thumbnail(THUMBNAIL_BOUND, THUMBNAIL_BOUND)
    };

    let (_file, path) = tempfile::Builder::new()
        .prefix("quillpad-thumb-")
        .suffix(".png")
        .tempfile_in(scratch_dir)?
        .keep()
        .map_err(|e| e.error)?;
    thumb.save(&path)?;

    Ok(Thumbnail::from_rgba_image(thumb.to_rgba8(), path))
}
