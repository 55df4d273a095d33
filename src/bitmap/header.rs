//! Fixed-layout header record at the front of every .bmp file.

use super::error::FormatError;

/// Length in bytes of the combined file header + DIB header block.
pub const HEADER_LEN: usize = 54;

/// Parsed .bmp file header plus DIB metadata.
///
/// Transient decode-time state; the decoded [`crate::raster::Image`] does
/// not retain it. All multi-byte fields are little-endian and the on-disk
/// record is tightly packed.
#[derive(Debug, Clone, Copy)]
pub struct BitmapHeader {
    pub magic: u16,
    pub file_size: u32,
    pub reserved: u32,
    pub pixel_data_offset: u32,
    pub dib_size: u32,
    pub width: u32,
    pub height: u32,
    pub planes: u16,
    pub bits_per_pixel: u16,
    pub compression: u32,
    pub data_size: u32,
    pub horizontal_resolution: u32,
    pub vertical_resolution: u32,
    pub palette_colors: u32,
    pub important_colors: u32,
}

impl BitmapHeader {
    /// Parse the header from the first bytes of a file.
    pub fn parse(bytes: &[u8]) -> Result<Self, FormatError> {
        if bytes.len() < HEADER_LEN {
            return Err(FormatError::Truncated {
                expected: HEADER_LEN,
                actual: bytes.len(),
            });
        }
        Ok(Self {
            magic: read_u16(bytes, 0),
            file_size: read_u32(bytes, 2),
            reserved: read_u32(bytes, 6),
            pixel_data_offset: read_u32(bytes, 10),
            dib_size: read_u32(bytes, 14),
            width: read_u32(bytes, 18),
            height: read_u32(bytes, 22),
            planes: read_u16(bytes, 26),
            bits_per_pixel: read_u16(bytes, 28),
            compression: read_u32(bytes, 30),
            data_size: read_u32(bytes, 34),
            horizontal_resolution: read_u32(bytes, 38),
            vertical_resolution: read_u32(bytes, 42),
            palette_colors: read_u32(bytes, 46),
            important_colors: read_u32(bytes, 50),
        })
    }

    /// Bytes per encoded pixel.
    pub fn bytes_per_pixel(&self) -> usize {
        self.bits_per_pixel as usize / 8
    }

    /// Bytes of padding appended to each encoded row to reach a 4-byte boundary.
    pub fn row_padding(&self) -> usize {
        let row_bytes = self.width as usize * self.bytes_per_pixel();
        (4 - row_bytes % 4) % 4
    }
}

fn read_u16(bytes: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([bytes[offset], bytes[offset + 1]])
}

fn read_u32(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}
