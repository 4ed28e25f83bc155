//! Chromashift applies chromatic aberration to RGBA pixel buffers.
//!
//! The transform displaces the red, green and blue channels of an image
//! independently: each output pixel re-samples every color channel at its
//! own offset coordinate, clamped to the buffer edges, while keeping the
//! alpha of the unshifted source pixel.
//!
//! # Pipeline overview
//!
//! 1. **Decode / unpack**: encoded bytes or packed host bitmaps become a
//!    [`PixelBuffer`] ([`decode_image`], [`unpack_rgba32`])
//! 2. **Shift**: `PixelBuffer + ChannelOffsets -> PixelBuffer`
//!    ([`chromatic_shift`], [`chromatic_shift_with`])
//! 3. **Encode / pack**: the result becomes PNG bytes or a packed host
//!    [`Bitmap`] ([`encode_png`], [`Bitmap::pack`])
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: the shift is pure and equal inputs give
//!   bit-identical outputs, on one thread or many.
//! - **No IO in the engine**: decoding and encoding are adapter-level; the
//!   engine only ever touches in-memory buffers.
//! - **Straight (non-premultiplied) RGBA8** end-to-end.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod bitmap;
mod buffer;
mod codec;
mod error;
mod offsets;
mod shift;

pub use bitmap::{Bitmap, ChannelOrder, pack_rgb24, pack_rgba32, unpack_rgba32};
pub use buffer::{PixelBuffer, Rgba8};
pub use codec::{decode_image, encode_png};
pub use error::{ChromaShiftError, ChromaShiftResult};
pub use offsets::{ChannelOffsets, Offset2D};
pub use shift::{ShiftThreading, chromatic_shift, chromatic_shift_with};
