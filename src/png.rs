//! Minimal PNG writer for solid-color truecolor images
//!
//! Only what a placeholder icon needs is supported: 8-bit RGB, no interlacing
//! and no scanline filtering. The chunk stream is always IHDR, IDAT, IEND.

use crate::error::{EncodeError, Result};

/// Fixed 8-byte PNG file signature.
pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

/// Largest width or height a PNG header may declare.
pub const MAX_DIMENSION: u32 = i32::MAX as u32;

const BIT_DEPTH: u8 = 8;
const COLOR_TYPE_RGB: u8 = 2;
const COMPRESSION_DEFLATE: u8 = 0;
const FILTER_METHOD_ADAPTIVE: u8 = 0;
const INTERLACE_NONE: u8 = 0;
const FILTER_TYPE_NONE: u8 = 0;

// Highest standard zlib level
const ZLIB_LEVEL: u8 = 9;

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A uniformly colored image, validated on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolidImage {
    width: u32,
    height: u32,
    color: Rgb,
}

impl SolidImage {
    pub fn new(width: u32, height: u32, color: Rgb) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(EncodeError::ZeroDimension { width, height });
        }
        for dim in [width, height] {
            if dim > MAX_DIMENSION {
                return Err(EncodeError::DimensionTooLarge(dim));
            }
        }
        // Make sure the raw stream is addressable before anything allocates it
        raw_len(width, height).ok_or(EncodeError::ImageTooLarge { width, height })?;

        Ok(Self {
            width,
            height,
            color,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    /// Serialize the image into a complete PNG file.
    pub fn encode(&self) -> Vec<u8> {
        let ihdr = write_chunk(&self.header_data(), b"IHDR");
        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(&self.raw_data(), ZLIB_LEVEL);
        let idat = write_chunk(&compressed, b"IDAT");
        let iend = write_chunk(&[], b"IEND");

        let mut png = Vec::with_capacity(PNG_SIGNATURE.len() + ihdr.len() + idat.len() + iend.len());
        png.extend_from_slice(&PNG_SIGNATURE);
        png.extend_from_slice(&ihdr);
        png.extend_from_slice(&idat);
        png.extend_from_slice(&iend);
        png
    }

    fn header_data(&self) -> [u8; 13] {
        let mut data = [0u8; 13];
        data[0..4].copy_from_slice(&self.width.to_be_bytes());
        data[4..8].copy_from_slice(&self.height.to_be_bytes());
        data[8] = BIT_DEPTH;
        data[9] = COLOR_TYPE_RGB;
        data[10] = COMPRESSION_DEFLATE;
        data[11] = FILTER_METHOD_ADAPTIVE;
        data[12] = INTERLACE_NONE;
        data
    }

    /// Unfiltered scanlines, each prefixed with filter type 0.
    fn raw_data(&self) -> Vec<u8> {
        let Rgb { r, g, b } = self.color;

        let mut scanline = Vec::with_capacity(1 + 3 * self.width as usize);
        scanline.push(FILTER_TYPE_NONE);
        for _ in 0..self.width {
            scanline.extend_from_slice(&[r, g, b]);
        }

        scanline.repeat(self.height as usize)
    }
}

fn raw_len(width: u32, height: u32) -> Option<usize> {
    let row = (width as usize).checked_mul(3)?.checked_add(1)?;
    row.checked_mul(height as usize)
}

/// Compute the CRC-32 stored at the end of a chunk.
pub fn crc32(chunk_type: &[u8; 4], data: &[u8]) -> u32 {
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(chunk_type);
    hasher.update(data);
    hasher.finalize()
}

/// Frame `data` as a PNG chunk: length, type, payload, CRC.
pub fn write_chunk(data: &[u8], chunk_type: &[u8; 4]) -> Vec<u8> {
    let mut chunk = Vec::with_capacity(12 + data.len());
    chunk.extend_from_slice(&(data.len() as u32).to_be_bytes());
    chunk.extend_from_slice(chunk_type);
    chunk.extend_from_slice(data);
    chunk.extend_from_slice(&crc32(chunk_type, data).to_be_bytes());
    chunk
}

/// Build a PNG of `width` x `height` pixels filled with (`r`, `g`, `b`).
pub fn build_image(width: u32, height: u32, r: u8, g: u8, b: u8) -> Result<Vec<u8>> {
    Ok(SolidImage::new(width, height, Rgb::new(r, g, b))?.encode())
}
