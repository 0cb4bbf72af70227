//! Failure causes of the fetch-and-persist task and their classification.
//!
//! `FetchError` keeps the detailed cause for logging; `ErrorKind` is the
//! coarse classification handed back to callers in a `TaskOutcome`.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Coarse reason a download task failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// URL absent or empty.
    InvalidInput,
    /// Malformed URL, DNS/connect/transfer failure, a non-2xx response, or an oversized body.
    NetworkFailure,
    /// The response body is not a decodable image.
    DecodeFailure,
    /// Encoding or writing the PNG to the Documents directory failed.
    WriteFailure,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorKind::InvalidInput => "invalid input",
            ErrorKind::NetworkFailure => "network failure",
            ErrorKind::DecodeFailure => "decode failure",
            ErrorKind::WriteFailure => "write failure",
        };
        f.write_str(s)
    }
}

/// Detailed failure of one fetch-and-persist run.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("no URL given")]
    EmptyUrl,
    #[error("transfer failed: {0}")]
    Network(#[from] curl::Error),
    #[error("server returned HTTP {0}")]
    HttpStatus(u32),
    #[error("response body larger than {0} bytes")]
    BodyTooLarge(u64),
    #[error("body is not a decodable image: {0}")]
    Decode(#[source] image::ImageError),
    #[error("PNG encoding failed: {0}")]
    Encode(#[source] image::ImageError),
    #[error("write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("no Documents directory could be determined")]
    NoDocumentsDir,
}

impl FetchError {
    pub(crate) fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        FetchError::Write {
            path: path.into(),
            source,
        }
    }

    /// Classify into the kind reported to callers.
    pub fn kind(&self) -> ErrorKind {
        match self {
            FetchError::EmptyUrl => ErrorKind::InvalidInput,
            FetchError::Network(_) | FetchError::HttpStatus(_) | FetchError::BodyTooLarge(_) => {
                ErrorKind::NetworkFailure
            }
            FetchError::Decode(_) => ErrorKind::DecodeFailure,
            FetchError::Encode(_) | FetchError::Write { .. } | FetchError::NoDocumentsDir => {
                ErrorKind::WriteFailure
            }
        }
    }
}
