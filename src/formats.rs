//! Hex memory-image text format.
//!
//! The panel driver's memory model loads its contents with `$readmemh`,
//! which reads plain text: one hex word per line. This module writes and
//! parses that layout - one zero-padded uppercase 6-digit word per line,
//! newline separated, no header and no trailing newline.

use anyhow::Result;
use std::io::Write;

use crate::panel::WORDS_PER_FRAME;

/// Parse failure for a hex memory image.
#[derive(Debug, thiserror::Error)]
pub enum HexImageError {
    #[error("line {line}: expected 6 uppercase hex digits, got {got:?}")]
    BadLine { line: usize, got: String },

    #[error("{words} words is not a whole number of frames ({} words per frame)", WORDS_PER_FRAME)]
    PartialFrame { words: usize },
}

/// Write words as a hex memory image.
///
/// One uppercase 6-digit line per word, joined by `\n`. The byte layout is
/// exactly what the memory model's loader consumes, so no trailing newline
/// is emitted.
pub fn write_hex_image<W: Write>(w: &mut W, words: &[u32]) -> Result<()> {
    for (i, word) in words.iter().enumerate() {
        if i > 0 {
            w.write_all(b"\n")?;
        }
        write!(w, "{word:06X}")?;
    }
    Ok(())
}

/// Parse a hex memory image back into memory words.
///
/// Strict inverse of [`write_hex_image`]: every line must be exactly 6
/// uppercase hex digits, and the word count must divide evenly into frames.
pub fn parse_hex_image(text: &str) -> Result<Vec<u32>, HexImageError> {
    let mut words = Vec::new();

    for (i, line) in text.lines().enumerate() {
        let well_formed = line.len() == 6
            && line
                .bytes()
                .all(|b| b.is_ascii_digit() || (b'A'..=b'F').contains(&b));
        let parsed = u32::from_str_radix(line, 16).ok().filter(|_| well_formed);

        match parsed {
            Some(word) => words.push(word),
            None => {
                return Err(HexImageError::BadLine {
                    line: i + 1,
                    got: line.to_string(),
                })
            }
        }
    }

    if words.len() % WORDS_PER_FRAME != 0 {
        return Err(HexImageError::PartialFrame { words: words.len() });
    }

    Ok(words)
}
