//! Single-request image fetch.
//!
//! One plain GET per call (no Range, no custom headers, no retry). The whole
//! body is buffered in memory and then handed to the image decoder.

mod decode;

pub use decode::decode_image;

use crate::config::{ImgdlConfig, DEFAULT_MAX_BODY_BYTES};
use crate::error::FetchError;
use image::DynamicImage;
use std::time::Duration;

/// Transfer knobs taken from config. Defaults leave libcurl's own timeouts in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchOptions {
    pub connect_timeout: Option<Duration>,
    pub max_redirections: u32,
    /// The transfer is aborted once the body grows past this many bytes.
    pub max_body_bytes: u64,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            connect_timeout: None,
            max_redirections: 10,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl From<&ImgdlConfig> for FetchOptions {
    fn from(cfg: &ImgdlConfig) -> Self {
        Self {
            connect_timeout: cfg.connect_timeout_secs.map(Duration::from_secs),
            max_redirections: cfg.max_redirections,
            max_body_bytes: cfg.max_body_bytes,
        }
    }
}

/// GETs `url` and returns the response body.
///
/// Follows redirects. Blocking; run it on the blocking pool from async code.
pub fn fetch_bytes(url: &str, opts: FetchOptions) -> Result<Vec<u8>, FetchError> {
    let mut body: Vec<u8> = Vec::new();
    let mut too_large = false;
    let limit = opts.max_body_bytes;

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.follow_location(true)?;
    easy.max_redirections(opts.max_redirections)?;
    if let Some(t) = opts.connect_timeout {
        easy.connect_timeout(t)?;
    }

    let performed = {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            if body.len() as u64 + data.len() as u64 > limit {
                too_large = true;
                return Ok(0); // abort transfer
            }
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()
    };
    if too_large {
        return Err(FetchError::BodyTooLarge(limit));
    }
    performed?;

    // 0 means the protocol has no status line (e.g. file://).
    let code = easy.response_code()?;
    if code != 0 && !(200..300).contains(&code) {
        return Err(FetchError::HttpStatus(code));
    }

    tracing::debug!(url, bytes = body.len(), "fetched body");
    Ok(body)
}

/// Fetches `url` and decodes the body as an image.
pub fn fetch_image(url: &str, opts: FetchOptions) -> Result<DynamicImage, FetchError> {
    let body = fetch_bytes(url, opts)?;
    decode_image(&body)
}
