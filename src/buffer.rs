use crate::error::{ChromaShiftError, ChromaShiftResult};

/// Straight-alpha RGBA8 color sample.
///
/// Channel order here is always logical (r, g, b, a) no matter how any
/// packed bitmap lays its bytes out; see [`crate::ChannelOrder`] for
/// byte-order concerns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel (255 = fully opaque).
    pub a: u8,
}

impl Rgba8 {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Build a color from all four channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Build a fully opaque color.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// An immutable rectangular grid of RGBA color samples.
///
/// Pixels are stored in row-major order: the sample at `(x, y)` lives at
/// linear index `y * width + x`. The pixel count equals `width * height`
/// for the lifetime of the value and the buffer is never resized after
/// construction. No mutation is exposed; transforms always produce a new
/// buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Rgba8>,
}

impl PixelBuffer {
    /// Build a buffer from row-major pixel data.
    ///
    /// Fails with [`ChromaShiftError::InvalidDimension`] when either
    /// dimension is zero and with [`ChromaShiftError::DimensionMismatch`]
    /// when `pixels.len() != width * height`.
    pub fn new(width: u32, height: u32, pixels: Vec<Rgba8>) -> ChromaShiftResult<Self> {
        let expected = Self::checked_len(width, height)?;
        if pixels.len() != expected {
            return Err(ChromaShiftError::dimension_mismatch(format!(
                "expected {expected} pixels for {width}x{height}, got {}",
                pixels.len()
            )));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build a buffer with every pixel set to `color`.
    pub fn filled(width: u32, height: u32, color: Rgba8) -> ChromaShiftResult<Self> {
        let len = Self::checked_len(width, height)?;
        Ok(Self {
            width,
            height,
            pixels: vec![color; len],
        })
    }

    // Construction for transform outputs whose geometry is already known
    // to match. Callers must hold pixels.len() == width * height.
    pub(crate) fn from_parts(width: u32, height: u32, pixels: Vec<Rgba8>) -> Self {
        debug_assert_eq!(pixels.len(), width as usize * height as usize);
        Self {
            width,
            height,
            pixels,
        }
    }

    fn checked_len(width: u32, height: u32) -> ChromaShiftResult<usize> {
        if width == 0 || height == 0 {
            return Err(ChromaShiftError::invalid_dimension(format!(
                "width and height must be >= 1, got {width}x{height}"
            )));
        }
        (width as usize)
            .checked_mul(height as usize)
            .ok_or_else(|| {
                ChromaShiftError::invalid_dimension(format!(
                    "pixel count overflows usize for {width}x{height}"
                ))
            })
    }

    /// Width in pixels (always >= 1).
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels (always >= 1).
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The color at `(x, y)`.
    ///
    /// Fails with [`ChromaShiftError::OutOfBounds`] when `x >= width` or
    /// `y >= height`.
    pub fn at(&self, x: u32, y: u32) -> ChromaShiftResult<Rgba8> {
        self.get(x, y).ok_or_else(|| {
            ChromaShiftError::out_of_bounds(format!(
                "({x}, {y}) outside {}x{} buffer",
                self.width, self.height
            ))
        })
    }

    /// The color at `(x, y)`, or `None` when the coordinate is outside the
    /// buffer.
    pub fn get(&self, x: u32, y: u32) -> Option<Rgba8> {
        if x < self.width && y < self.height {
            Some(self.pixels[self.index_of(x, y)])
        } else {
            None
        }
    }

    // Row-major linear index. Callers must hold x < width and y < height.
    pub(crate) fn index_of(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// All pixels in row-major order.
    pub fn pixels(&self) -> &[Rgba8] {
        &self.pixels
    }

    /// Consume the buffer, returning its row-major pixels.
    pub fn into_pixels(self) -> Vec<Rgba8> {
        self.pixels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_zero_dimensions() {
        let err = PixelBuffer::new(0, 3, vec![]).unwrap_err();
        assert!(matches!(err, ChromaShiftError::InvalidDimension(_)));

        let err = PixelBuffer::new(3, 0, vec![]).unwrap_err();
        assert!(matches!(err, ChromaShiftError::InvalidDimension(_)));
    }

    #[test]
    fn new_rejects_pixel_count_mismatch() {
        let err = PixelBuffer::new(2, 2, vec![Rgba8::TRANSPARENT; 3]).unwrap_err();
        assert!(matches!(err, ChromaShiftError::DimensionMismatch(_)));
    }

    #[test]
    fn at_is_row_major() {
        let pixels = vec![
            Rgba8::opaque(1, 0, 0),
            Rgba8::opaque(2, 0, 0),
            Rgba8::opaque(3, 0, 0),
            Rgba8::opaque(4, 0, 0),
            Rgba8::opaque(5, 0, 0),
            Rgba8::opaque(6, 0, 0),
        ];
        let buf = PixelBuffer::new(3, 2, pixels).unwrap();
        assert_eq!(buf.at(0, 0).unwrap().r, 1);
        assert_eq!(buf.at(2, 0).unwrap().r, 3);
        assert_eq!(buf.at(0, 1).unwrap().r, 4);
        assert_eq!(buf.at(2, 1).unwrap().r, 6);
    }

    #[test]
    fn at_rejects_out_of_bounds() {
        let buf = PixelBuffer::filled(2, 2, Rgba8::TRANSPARENT).unwrap();
        let err = buf.at(2, 0).unwrap_err();
        assert!(matches!(err, ChromaShiftError::OutOfBounds(_)));
        assert!(buf.get(0, 2).is_none());
        assert!(buf.get(1, 1).is_some());
    }

    #[test]
    fn filled_sets_every_pixel() {
        let c = Rgba8::new(9, 8, 7, 6);
        let buf = PixelBuffer::filled(4, 3, c).unwrap();
        assert_eq!(buf.width(), 4);
        assert_eq!(buf.height(), 3);
        assert!(buf.pixels().iter().all(|&px| px == c));
    }
}
