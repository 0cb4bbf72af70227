#![allow(dead_code)]

pub mod image_server;

use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;

/// A small RGBA image with distinct pixels so equality checks are meaningful.
pub fn sample_image(w: u32, h: u32) -> DynamicImage {
    let mut img = RgbaImage::new(w, h);
    for (x, y, p) in img.enumerate_pixels_mut() {
        *p = Rgba([(x * 17) as u8, (y * 29) as u8, ((x + y) * 7) as u8, 255 - (y as u8)]);
    }
    DynamicImage::ImageRgba8(img)
}

/// Encodes `img`; alpha is dropped for JPEG, which cannot carry it.
pub fn encode(img: &DynamicImage, format: ImageFormat) -> Vec<u8> {
    let mut out = Cursor::new(Vec::new());
    match format {
        ImageFormat::Jpeg => DynamicImage::ImageRgb8(img.to_rgb8()).write_to(&mut out, format),
        _ => img.write_to(&mut out, format),
    }
    .unwrap();
    out.into_inner()
}

/// Names of the entries in `dir`, sorted.
pub fn file_names(dir: &std::path::Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
