//! Animation -> hex memory image conversion pipeline.
//!
//! One linear pass: decode frames until the input runs out, resample each to
//! panel resolution, quantize and pack every scan pair, then serialize the
//! accumulated words in a single write.

use anyhow::{Context, Result};
use image::RgbImage;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::animation::{load_frames, resample_frame};
use crate::formats::write_hex_image;
use crate::packing::{pack_pixel_pair, quantize_rgb444};
use crate::panel::{PANEL_WIDTH, SCAN_RATE, WORDS_PER_FRAME};

/// Result of in-memory animation conversion
pub struct ConvertedAnimation {
    /// Packed memory words, WORDS_PER_FRAME per frame, frames in input order
    pub words: Vec<u32>,
    /// Number of frames decoded
    pub frame_count: usize,
}

/// Convert an animation to in-memory panel words (for direct tooling use).
///
/// Nothing touches the filesystem beyond reading the input, so a failed
/// decode leaves no partial output behind.
pub fn convert_animation_to_memory(input: &Path) -> Result<ConvertedAnimation> {
    let mut words = Vec::new();
    let mut frame_count = 0usize;

    for frame in load_frames(input)? {
        let frame = frame.with_context(|| {
            format!("Failed to decode frame {} of {}", frame_count, input.display())
        })?;
        let resampled = resample_frame(frame);
        pack_frame(&resampled, &mut words);
        frame_count += 1;
        tracing::debug!("Packed frame {} ({} words total)", frame_count, words.len());
    }

    Ok(ConvertedAnimation { words, frame_count })
}

/// Pack one panel-resolution frame into scan-pair words.
///
/// Raster order is the driver's: y over the scanned rows 0..SCAN_RATE, x
/// across the full width, pairing (x, y) with (x, y + SCAN_RATE).
fn pack_frame(frame: &RgbImage, words: &mut Vec<u32>) {
    words.reserve(WORDS_PER_FRAME);

    for y in 0..SCAN_RATE {
        for x in 0..PANEL_WIDTH {
            let top = frame.get_pixel(x, y).0;
            let bottom = frame.get_pixel(x, y + SCAN_RATE).0;

            let val0 = quantize_rgb444(top[0], top[1], top[2]);
            let val1 = quantize_rgb444(bottom[0], bottom[1], bottom[2]);

            words.push(pack_pixel_pair(val0, val1));
        }
    }
}

/// Convert an animation file to a hex memory image on disk.
///
/// All frames are packed in memory first; the output file is only created
/// once the whole conversion has succeeded.
pub fn convert_animation(input: &Path, output: &Path) -> Result<ConvertedAnimation> {
    let converted = convert_animation_to_memory(input)?;

    let file = File::create(output)
        .with_context(|| format!("Failed to create hex image: {}", output.display()))?;
    let mut writer = BufWriter::new(file);
    write_hex_image(&mut writer, &converted.words)
        .with_context(|| format!("Failed to write hex image: {}", output.display()))?;
    writer
        .flush()
        .with_context(|| format!("Failed to write hex image: {}", output.display()))?;

    Ok(converted)
}
