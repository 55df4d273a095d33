use std::io;

use thiserror::Error;

/// The error type for bitmap decoding.
///
/// Decoding never recovers a partial image: any of these aborts the
/// decode of that file completely.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("failed to read bitmap file: {source}")]
    Open {
        #[from]
        source: io::Error,
    },

    #[error("bitmap data truncated: needed {expected} bytes, file has {actual}")]
    Truncated { expected: usize, actual: usize },

    #[error("unsupported bit depth: {bits} bits per pixel (only 24-bit RGB is supported)")]
    UnsupportedBitDepth { bits: u16 },

    #[error("unsupported compression code {code} (only uncompressed pixel data is supported)")]
    UnsupportedCompression { code: u32 },

    #[error("bitmap declares empty dimensions {width}x{height}")]
    EmptyDimensions { width: u32, height: u32 },
}
