//! Animation input: frame decoding and panel resampling.
//!
//! Inputs arrive as GIF animations, APNGs, or any static image the `image`
//! crate can open. Decoding surfaces every input as a [`Frames`] iterator so
//! the conversion pipeline sees one code path; the iterator running out is
//! the normal way an animation terminates, never an error.

use anyhow::{Context, Result};
use image::codecs::gif::GifDecoder;
use image::codecs::png::PngDecoder;
use image::imageops::{self, FilterType};
use image::{AnimationDecoder, DynamicImage, Frame, Frames, RgbImage};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::panel::{PANEL_HEIGHT, PANEL_WIDTH};

/// Open an input image as a frame sequence.
///
/// GIFs and APNGs yield every animation frame; anything else `image` can
/// decode yields a single frame. Length is unknown upfront - callers iterate
/// until the decoder runs out.
pub fn load_frames(path: &Path) -> Result<Frames<'static>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "gif" => {
            let reader = open_buffered(path)?;
            let decoder = GifDecoder::new(reader)
                .with_context(|| format!("Failed to decode GIF: {}", path.display()))?;
            Ok(decoder.into_frames())
        }
        "png" => {
            let reader = open_buffered(path)?;
            let decoder = PngDecoder::new(reader)
                .with_context(|| format!("Failed to decode PNG: {}", path.display()))?;
            let animated = decoder
                .is_apng()
                .with_context(|| format!("Failed to probe PNG: {}", path.display()))?;

            if animated {
                let apng = decoder
                    .apng()
                    .with_context(|| format!("Failed to decode APNG: {}", path.display()))?;
                Ok(apng.into_frames())
            } else {
                single_frame(path)
            }
        }
        _ => single_frame(path),
    }
}

fn open_buffered(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open animation: {}", path.display()))?;
    Ok(BufReader::new(file))
}

/// Wrap a static image as a one-frame sequence.
fn single_frame(path: &Path) -> Result<Frames<'static>> {
    let img = image::open(path)
        .with_context(|| format!("Failed to open image: {}", path.display()))?;
    let frame = Frame::new(img.to_rgba8());
    Ok(Frames::new(Box::new(std::iter::once(Ok(frame)))))
}

/// Convert one decoded frame to panel resolution.
///
/// Drops alpha first, then resamples to exactly PANEL_WIDTH x PANEL_HEIGHT
/// with a Lanczos3 filter. The filter choice is part of the output contract:
/// the same input always produces the same hex image.
pub fn resample_frame(frame: Frame) -> RgbImage {
    let rgb = DynamicImage::ImageRgba8(frame.into_buffer()).to_rgb8();
    imageops::resize(&rgb, PANEL_WIDTH, PANEL_HEIGHT, FilterType::Lanczos3)
}
