//! Test input generators
//!
//! Synthesizes small GIF and PNG inputs for the integration tests. Solid or
//! two-tone frames only, so the GIF palette holds the exact colors and the
//! expected hex words can be asserted byte-for-byte.

use anyhow::{Context, Result};
use std::fs::File;
use std::path::Path;

/// Write a GIF with one solid-color frame per entry in `frame_colors`.
pub fn generate_solid_gif(
    path: &Path,
    width: u16,
    height: u16,
    frame_colors: &[[u8; 3]],
) -> Result<()> {
    let file = File::create(path).context("Failed to create GIF file")?;
    let mut encoder =
        gif::Encoder::new(file, width, height, &[]).context("Failed to create GIF encoder")?;
    encoder
        .set_repeat(gif::Repeat::Infinite)
        .context("Failed to set GIF repeat")?;

    for rgb in frame_colors {
        let mut rgb_pixels = Vec::with_capacity(width as usize * height as usize * 3);
        for _ in 0..(width as usize * height as usize) {
            rgb_pixels.extend_from_slice(rgb);
        }
        write_gif_frame(&mut encoder, width, height, &rgb_pixels)?;
    }

    Ok(())
}

/// Write a single-frame GIF split into a top color and a bottom color.
pub fn generate_split_gif(
    path: &Path,
    width: u16,
    height: u16,
    top: [u8; 3],
    bottom: [u8; 3],
) -> Result<()> {
    let file = File::create(path).context("Failed to create GIF file")?;
    let mut encoder =
        gif::Encoder::new(file, width, height, &[]).context("Failed to create GIF encoder")?;

    let mut rgb_pixels = Vec::with_capacity(width as usize * height as usize * 3);
    for y in 0..height {
        let rgb = if y < height / 2 { top } else { bottom };
        for _ in 0..width {
            rgb_pixels.extend_from_slice(&rgb);
        }
    }
    write_gif_frame(&mut encoder, width, height, &rgb_pixels)?;

    Ok(())
}

fn write_gif_frame<W: std::io::Write>(
    encoder: &mut gif::Encoder<W>,
    width: u16,
    height: u16,
    rgb_pixels: &[u8],
) -> Result<()> {
    let mut frame = gif::Frame::from_rgb(width, height, rgb_pixels);
    frame.delay = 10;
    encoder
        .write_frame(&frame)
        .context("Failed to write GIF frame")?;
    Ok(())
}

/// Write a solid-color static PNG.
pub fn generate_solid_png(path: &Path, width: u32, height: u32, rgb: [u8; 3]) -> Result<()> {
    let img = image::RgbImage::from_pixel(width, height, image::Rgb(rgb));
    img.save(path)
        .with_context(|| format!("Failed to write PNG: {}", path.display()))?;
    Ok(())
}
