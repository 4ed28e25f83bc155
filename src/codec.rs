//! Encoded-image adapters over the `image` crate.
//!
//! These sit outside the shift engine: callers decode once, transform any
//! number of times, then encode. Both directions go through the straight
//! RGBA byte layout from [`crate::bitmap`].

use std::io::Cursor;

use anyhow::Context;

use crate::bitmap::{self, ChannelOrder};
use crate::buffer::PixelBuffer;
use crate::error::ChromaShiftResult;

/// Decode encoded image bytes into a straight-alpha [`PixelBuffer`].
///
/// Accepts any container format the `image` crate recognizes (PNG, JPEG,
/// WebP, ...) and converts the pixels to RGBA8.
pub fn decode_image(bytes: &[u8]) -> ChromaShiftResult<PixelBuffer> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();
    bitmap::unpack_rgba32(width, height, ChannelOrder::Rgba, rgba.as_raw())
}

/// Encode `buffer` as PNG bytes.
pub fn encode_png(buffer: &PixelBuffer) -> ChromaShiftResult<Vec<u8>> {
    let image = image::RgbaImage::from_raw(
        buffer.width(),
        buffer.height(),
        bitmap::pack_rgba32(buffer, ChannelOrder::Rgba),
    )
    .context("packed pixel data did not match buffer dimensions")?;

    let mut bytes = Vec::new();
    image::DynamicImage::ImageRgba8(image)
        .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .context("encode png")?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Rgba8;

    #[test]
    fn decode_reads_png_bytes() {
        let img = image::RgbaImage::from_raw(1, 1, vec![100u8, 50, 200, 128]).unwrap();
        let mut buf = Vec::new();
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
            .unwrap();

        let decoded = decode_image(&buf).unwrap();
        assert_eq!(decoded.width(), 1);
        assert_eq!(decoded.height(), 1);
        assert_eq!(decoded.at(0, 0).unwrap(), Rgba8::new(100, 50, 200, 128));
    }

    #[test]
    fn decode_rejects_garbage() {
        assert!(decode_image(b"not an image").is_err());
    }

    #[test]
    fn png_round_trip_is_lossless() {
        let buffer = PixelBuffer::new(
            2,
            2,
            vec![
                Rgba8::new(255, 0, 0, 255),
                Rgba8::new(0, 255, 0, 200),
                Rgba8::new(0, 0, 255, 100),
                Rgba8::new(9, 8, 7, 6),
            ],
        )
        .unwrap();

        let png = encode_png(&buffer).unwrap();
        assert_eq!(decode_image(&png).unwrap(), buffer);
    }
}
