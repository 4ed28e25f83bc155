use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;

use chromashift::{
    ChannelOffsets, ChannelOrder, Offset2D, ShiftThreading, chromatic_shift_with, decode_image,
    pack_rgba32,
};

/// Apply chromatic aberration to an image and write the result as a PNG.
#[derive(Parser, Debug)]
#[command(name = "chromashift", version)]
struct Cli {
    /// Input image (any format the `image` crate can decode).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Red channel offset as `DX` or `DX,DY`.
    #[arg(long, value_parser = parse_offset_arg, allow_hyphen_values = true, conflicts_with = "offsets_json")]
    red: Option<Offset2D>,

    /// Green channel offset as `DX` or `DX,DY`.
    #[arg(long, value_parser = parse_offset_arg, allow_hyphen_values = true, conflicts_with = "offsets_json")]
    green: Option<Offset2D>,

    /// Blue channel offset as `DX` or `DX,DY`.
    #[arg(long, value_parser = parse_offset_arg, allow_hyphen_values = true, conflicts_with = "offsets_json")]
    blue: Option<Offset2D>,

    /// All offsets as one JSON object, e.g. '{"red": 2, "blue": [-2, 1]}'.
    #[arg(long)]
    offsets_json: Option<String>,

    /// Shift output rows in parallel.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let offsets = resolve_offsets(&cli)?;
    let bytes = std::fs::read(&cli.in_path)
        .with_context(|| format!("read input '{}'", cli.in_path.display()))?;
    let source = decode_image(&bytes)
        .with_context(|| format!("decode input '{}'", cli.in_path.display()))?;

    let threading = ShiftThreading {
        parallel: cli.parallel,
        threads: cli.threads,
    };
    let shifted = chromatic_shift_with(&source, offsets, &threading)?;

    if let Some(parent) = cli.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        &cli.out,
        &pack_rgba32(&shifted, ChannelOrder::Rgba),
        shifted.width(),
        shifted.height(),
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", cli.out.display()))?;

    eprintln!("wrote {}", cli.out.display());
    Ok(())
}

fn resolve_offsets(cli: &Cli) -> anyhow::Result<ChannelOffsets> {
    if let Some(raw) = &cli.offsets_json {
        let params: serde_json::Value = serde_json::from_str(raw).context("parse --offsets-json")?;
        return Ok(ChannelOffsets::from_params(&params)?);
    }
    Ok(ChannelOffsets {
        red: cli.red.unwrap_or_default(),
        green: cli.green.unwrap_or_default(),
        blue: cli.blue.unwrap_or_default(),
    })
}

fn parse_offset_arg(raw: &str) -> Result<Offset2D, String> {
    let component = |s: &str| {
        s.trim()
            .parse::<i32>()
            .map_err(|_| format!("'{s}' is not an integer"))
    };
    match raw.split_once(',') {
        None => Ok(Offset2D::horizontal(component(raw)?)),
        Some((dx, dy)) => Ok(Offset2D::new(component(dx)?, component(dy)?)),
    }
}
