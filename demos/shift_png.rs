use chromashift::{
    ChannelOffsets, ChannelOrder, Offset2D, PixelBuffer, Rgba8, ShiftThreading,
    chromatic_shift_with, pack_rgba32,
};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    // Synthetic test card: six vertical color bands.
    let (width, height) = (320u32, 180u32);
    let bands = [
        Rgba8::opaque(230, 60, 60),
        Rgba8::opaque(230, 160, 40),
        Rgba8::opaque(230, 230, 60),
        Rgba8::opaque(60, 200, 90),
        Rgba8::opaque(70, 110, 230),
        Rgba8::opaque(160, 70, 200),
    ];
    let mut pixels = Vec::with_capacity((width * height) as usize);
    for _y in 0..height {
        for x in 0..width {
            let band = (x as usize * bands.len() / width as usize).min(bands.len() - 1);
            pixels.push(bands[band]);
        }
    }
    let source = PixelBuffer::new(width, height, pixels)?;

    let offsets = ChannelOffsets::new(
        Offset2D::new(4, 0),
        Offset2D::ZERO,
        Offset2D::new(-4, 0),
    );
    let shifted = chromatic_shift_with(
        &source,
        offsets,
        &ShiftThreading {
            parallel: true,
            threads: None,
        },
    )?;

    let out = std::path::PathBuf::from("target").join("chromashift_demo.png");
    image::save_buffer_with_format(
        &out,
        &pack_rgba32(&shifted, ChannelOrder::Rgba),
        shifted.width(),
        shifted.height(),
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )?;

    eprintln!("wrote {}", out.display());
    Ok(())
}
