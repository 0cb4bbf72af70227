//! Content-sniffed image decoding.

use crate::error::FetchError;
use image::DynamicImage;

/// Decodes `bytes` as an image, detecting the format from its content.
pub fn decode_image(bytes: &[u8]) -> Result<DynamicImage, FetchError> {
    image::load_from_memory(bytes).map_err(FetchError::Decode)
}
