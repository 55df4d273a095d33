//! Decoder for uncompressed 24-bit .bmp files.

use std::fs;
use std::path::Path;

use log::debug;

use super::error::FormatError;
use super::header::BitmapHeader;
use crate::raster::{Image, Pixel};

/// Decode the bitmap file at `path` into an [`Image`].
///
/// Only uncompressed 24-bit RGB data is accepted. Rows are stored
/// bottom-up on disk with BGR channel order and 4-byte row alignment;
/// the returned image is top-down RGB. Truncated files fail completely,
/// no partial image is recovered.
pub fn decode(path: impl AsRef<Path>) -> Result<Image, FormatError> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    let header = BitmapHeader::parse(&bytes)?;
    debug!(
        "decoding {}: {}x{} px, {} bpp, pixel data at offset {}",
        path.display(),
        header.width,
        header.height,
        header.bits_per_pixel,
        header.pixel_data_offset
    );

    if header.bits_per_pixel != 24 {
        return Err(FormatError::UnsupportedBitDepth {
            bits: header.bits_per_pixel,
        });
    }
    if header.compression != 0 {
        return Err(FormatError::UnsupportedCompression {
            code: header.compression,
        });
    }
    if header.width == 0 || header.height == 0 {
        return Err(FormatError::EmptyDimensions {
            width: header.width,
            height: header.height,
        });
    }

    let width = header.width as usize;
    let height = header.height as usize;
    let row_stride = width * header.bytes_per_pixel() + header.row_padding();
    let data_start = header.pixel_data_offset as usize;
    let needed = data_start + height * row_stride;
    if bytes.len() < needed {
        return Err(FormatError::Truncated {
            expected: needed,
            actual: bytes.len(),
        });
    }

    let mut pixels = vec![Pixel::default(); width * height];
    for (stored_row, encoded) in bytes[data_start..needed]
        .chunks_exact(row_stride)
        .enumerate()
    {
        // Rows are stored bottom-up: the first encoded row is the bottom
        // of the image. Trailing padding bytes are dropped by the zip.
        let logical_row = height - 1 - stored_row;
        let dest = &mut pixels[logical_row * width..(logical_row + 1) * width];
        for (dest_pixel, bgr) in dest.iter_mut().zip(encoded.chunks_exact(3)) {
            *dest_pixel = Pixel::new(bgr[2], bgr[1], bgr[0]);
        }
    }

    Ok(Image::from_pixels(header.width, header.height, pixels))
}
