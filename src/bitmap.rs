//! Byte-level packing between [`PixelBuffer`] and host bitmap layouts.
//!
//! Host imaging APIs hand pixel bytes over in different channel orders
//! (Windows bitmaps are BGRA, most others RGBA), so every packing function
//! here takes the order as an explicit [`ChannelOrder`] argument rather
//! than consulting ambient platform state.

use crate::buffer::{PixelBuffer, Rgba8};
use crate::error::{ChromaShiftError, ChromaShiftResult};

/// Byte order of a packed 32-bit pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ChannelOrder {
    /// Bytes laid out `[r, g, b, a]`.
    Rgba,
    /// Bytes laid out `[b, g, r, a]`.
    Bgra,
}

impl ChannelOrder {
    /// The order native imaging APIs use on the build target.
    pub const fn host_default() -> Self {
        if cfg!(target_os = "windows") {
            Self::Bgra
        } else {
            Self::Rgba
        }
    }

    const fn bytes(self, px: Rgba8) -> [u8; 4] {
        match self {
            Self::Rgba => [px.r, px.g, px.b, px.a],
            Self::Bgra => [px.b, px.g, px.r, px.a],
        }
    }

    const fn pixel(self, bytes: [u8; 4]) -> Rgba8 {
        match self {
            Self::Rgba => Rgba8::new(bytes[0], bytes[1], bytes[2], bytes[3]),
            Self::Bgra => Rgba8::new(bytes[2], bytes[1], bytes[0], bytes[3]),
        }
    }
}

/// Pack `buffer` to 4 bytes per pixel in `order`, row-major, tightly packed.
pub fn pack_rgba32(buffer: &PixelBuffer, order: ChannelOrder) -> Vec<u8> {
    let mut out = Vec::with_capacity(buffer.pixels().len() * 4);
    for &px in buffer.pixels() {
        out.extend_from_slice(&order.bytes(px));
    }
    out
}

/// Pack `buffer` to 3 bytes per pixel: the 32-bit form with alpha dropped.
pub fn pack_rgb24(buffer: &PixelBuffer, order: ChannelOrder) -> Vec<u8> {
    let mut out = Vec::with_capacity(buffer.pixels().len() * 3);
    for &px in buffer.pixels() {
        out.extend_from_slice(&order.bytes(px)[..3]);
    }
    out
}

/// Rebuild a buffer from 32-bit packed bytes in `order`.
///
/// Fails with [`ChromaShiftError::InvalidDimension`] when either dimension
/// is zero and with [`ChromaShiftError::DimensionMismatch`] when
/// `data.len() != width * height * 4`.
pub fn unpack_rgba32(
    width: u32,
    height: u32,
    order: ChannelOrder,
    data: &[u8],
) -> ChromaShiftResult<PixelBuffer> {
    let expected = packed_len(width, height, 4)?;
    if data.len() != expected {
        return Err(ChromaShiftError::dimension_mismatch(format!(
            "expected {expected} bytes for {width}x{height} at 32 bpp, got {}",
            data.len()
        )));
    }

    let mut pixels = Vec::with_capacity(expected / 4);
    for chunk in data.chunks_exact(4) {
        pixels.push(order.pixel([chunk[0], chunk[1], chunk[2], chunk[3]]));
    }
    PixelBuffer::new(width, height, pixels)
}

fn packed_len(width: u32, height: u32, bytes_per_pixel: usize) -> ChromaShiftResult<usize> {
    if width == 0 || height == 0 {
        return Err(ChromaShiftError::invalid_dimension(format!(
            "width and height must be >= 1, got {width}x{height}"
        )));
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(bytes_per_pixel))
        .ok_or_else(|| {
            ChromaShiftError::invalid_dimension(format!(
                "byte length overflows usize for {width}x{height}"
            ))
        })
}

/// A packed host bitmap: geometry plus raw pixel bytes.
///
/// [`Bitmap::pack`] always emits the dense 32-bit zero-padding layout. The
/// `bits_per_pixel` and `row_padding` fields still travel with the value so
/// bitmaps received from hosts that use other layouts stay representable
/// and are rejected explicitly on unpack.
#[derive(Clone, Debug)]
pub struct Bitmap {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Bits per packed pixel (32 for bitmaps built by [`Bitmap::pack`]).
    pub bits_per_pixel: u32,
    /// Trailing filler bytes per row (0 for bitmaps built by [`Bitmap::pack`]).
    pub row_padding: u32,
    /// Packed pixel bytes, row-major.
    pub data: Vec<u8>,
}

impl Bitmap {
    /// Pack `buffer` into a dense 32-bit bitmap in `order`.
    pub fn pack(buffer: &PixelBuffer, order: ChannelOrder) -> Self {
        Self {
            width: buffer.width(),
            height: buffer.height(),
            bits_per_pixel: 32,
            row_padding: 0,
            data: pack_rgba32(buffer, order),
        }
    }

    /// Rebuild the pixel buffer this bitmap packs.
    ///
    /// Only the dense 32-bit zero-padding layout is supported; any other
    /// `bits_per_pixel` or `row_padding` fails with
    /// [`ChromaShiftError::Validation`]. A 24-bit bitmap cannot round-trip
    /// at all, its alpha is already gone.
    pub fn unpack(&self, order: ChannelOrder) -> ChromaShiftResult<PixelBuffer> {
        if self.bits_per_pixel != 32 || self.row_padding != 0 {
            return Err(ChromaShiftError::validation(format!(
                "only dense 32-bit bitmaps unpack, got {} bpp with row padding {}",
                self.bits_per_pixel, self.row_padding
            )));
        }
        unpack_rgba32(self.width, self.height, order, &self.data)
    }
}
