//! PNG writer: encode, write a hidden temp file, publish it without clobbering.

use crate::error::FetchError;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ColorType, DynamicImage};
use std::borrow::Cow;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use super::naming::{file_name, now_millis};

/// Upper bound on how far past the current millisecond a name is searched for.
const MAX_NAME_PROBES: u64 = 10_000;

/// Encodes `image` as PNG with best compression and adaptive filtering (lossless).
/// Float colour types, which PNG cannot carry, are converted to 16-bit RGBA.
pub fn encode_png(image: &DynamicImage) -> Result<Vec<u8>, FetchError> {
    let image: Cow<'_, DynamicImage> = match image.color() {
        ColorType::Rgb32F | ColorType::Rgba32F => {
            Cow::Owned(DynamicImage::ImageRgba16(image.to_rgba16()))
        }
        _ => Cow::Borrowed(image),
    };
    let mut buf = Vec::new();
    let encoder =
        PngEncoder::new_with_quality(&mut buf, CompressionType::Best, FilterType::Adaptive);
    image.write_with_encoder(encoder).map_err(FetchError::Encode)?;
    Ok(buf)
}

/// Stores `image` in `dir` under a name derived from the current time.
pub fn persist_png(dir: &Path, image: &DynamicImage) -> Result<PathBuf, FetchError> {
    persist_png_at(dir, image, now_millis())
}

/// Stores `image` in `dir` as `downloaded_image_<millis>.png`. If that name is
/// taken, the next free millisecond value is used. Returns the final path.
///
/// The complete PNG is synced to a hidden temp file first and only then linked
/// under its final name, so a `downloaded_image_*.png` entry is never empty or
/// partial. The temp file is removed on every exit path.
pub fn persist_png_at(dir: &Path, image: &DynamicImage, millis: u64) -> Result<PathBuf, FetchError> {
    fs::create_dir_all(dir).map_err(|e| FetchError::write(dir, e))?;
    let png = encode_png(image)?;

    let temp = write_temp(dir, &png).map_err(|e| FetchError::write(dir, e))?;
    let final_path = publish(temp, dir, millis)?;

    tracing::debug!(path = %final_path.display(), bytes = png.len(), "stored PNG");
    Ok(final_path)
}

/// Writes and syncs `data` to `.imgdl-<random>.part` in `dir`. Not a `.png`, so
/// the gallery never picks it up.
fn write_temp(dir: &Path, data: &[u8]) -> io::Result<NamedTempFile> {
    let mut temp = tempfile::Builder::new()
        .prefix(".imgdl-")
        .suffix(".part")
        .tempfile_in(dir)?;
    temp.write_all(data)?;
    temp.as_file().sync_all()?;
    Ok(temp)
}

/// Moves `temp` onto the first free name at or after `millis`. An existing file
/// is never replaced.
fn publish(mut temp: NamedTempFile, dir: &Path, millis: u64) -> Result<PathBuf, FetchError> {
    for m in millis..millis.saturating_add(MAX_NAME_PROBES) {
        let path = dir.join(file_name(m));
        match temp.persist_noclobber(&path) {
            Ok(_) => {
                if m != millis {
                    tracing::debug!(wanted = millis, used = m, "file name taken, bumped timestamp");
                }
                return Ok(path);
            }
            Err(e) if e.error.kind() == io::ErrorKind::AlreadyExists => temp = e.file,
            Err(e) => return Err(FetchError::write(path, e.error)),
        }
    }
    Err(FetchError::write(
        dir.join(file_name(millis)),
        io::Error::new(io::ErrorKind::AlreadyExists, "no free file name"),
    ))
}
