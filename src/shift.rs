use rayon::prelude::*;

use crate::buffer::{PixelBuffer, Rgba8};
use crate::error::{ChromaShiftError, ChromaShiftResult};
use crate::offsets::{ChannelOffsets, Offset2D};

/// Threading options for [`chromatic_shift_with`].
#[derive(Clone, Debug, Default)]
pub struct ShiftThreading {
    /// Process output rows on a rayon pool instead of the calling thread.
    pub parallel: bool,
    /// Worker count for the pool. `None` takes rayon's default.
    pub threads: Option<usize>,
}

/// Apply per-channel displacement to `source`, returning a new buffer.
///
/// Each output pixel `(x, y)` takes its red, green and blue values from
/// `(x + dx, y + dy)` under that channel's offset, with the sample
/// coordinate clamped to the nearest edge of the buffer, and keeps the
/// alpha of the source pixel at `(x, y)` itself. The source is not
/// modified, and the output always has the source's dimensions.
///
/// The transform is pure: equal inputs produce bit-identical outputs.
pub fn chromatic_shift(source: &PixelBuffer, offsets: ChannelOffsets) -> PixelBuffer {
    let width = source.width() as usize;
    let mut pixels = vec![Rgba8::TRANSPARENT; source.pixels().len()];
    for (y, row) in pixels.chunks_mut(width).enumerate() {
        shift_row(source, offsets, y as u32, row);
    }
    PixelBuffer::from_parts(source.width(), source.height(), pixels)
}

/// [`chromatic_shift`] with explicit threading options.
///
/// The parallel path splits work by output row and is bit-identical to the
/// sequential path. Fails with [`ChromaShiftError::Validation`] when
/// `threads` is `Some(0)` and passes through pool construction failures.
#[tracing::instrument(skip(source))]
pub fn chromatic_shift_with(
    source: &PixelBuffer,
    offsets: ChannelOffsets,
    threading: &ShiftThreading,
) -> ChromaShiftResult<PixelBuffer> {
    if !threading.parallel {
        return Ok(chromatic_shift(source, offsets));
    }

    let pool = build_thread_pool(threading.threads)?;
    let width = source.width() as usize;
    let mut pixels = vec![Rgba8::TRANSPARENT; source.pixels().len()];
    pool.install(|| {
        pixels
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| shift_row(source, offsets, y as u32, row));
    });
    Ok(PixelBuffer::from_parts(
        source.width(),
        source.height(),
        pixels,
    ))
}

// Fills one output row. Shared by both execution paths so they cannot drift.
fn shift_row(source: &PixelBuffer, offsets: ChannelOffsets, y: u32, row: &mut [Rgba8]) {
    for (x, out) in row.iter_mut().enumerate() {
        let x = x as u32;
        *out = Rgba8::new(
            sample(source, x, y, offsets.red).r,
            sample(source, x, y, offsets.green).g,
            sample(source, x, y, offsets.blue).b,
            source.pixels()[source.index_of(x, y)].a,
        );
    }
}

// Offsets carry the full i32 range and coordinates the full u32 range, so
// the sums are formed in i64 before clamping back into the buffer.
fn sample(source: &PixelBuffer, x: u32, y: u32, offset: Offset2D) -> Rgba8 {
    let sx = (i64::from(x) + i64::from(offset.dx)).clamp(0, i64::from(source.width() - 1));
    let sy = (i64::from(y) + i64::from(offset.dy)).clamp(0, i64::from(source.height() - 1));
    source.pixels()[source.index_of(sx as u32, sy as u32)]
}

fn build_thread_pool(threads: Option<usize>) -> ChromaShiftResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(ChromaShiftError::validation(
            "shift threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| anyhow::anyhow!("failed to build rayon thread pool: {e}").into())
}
