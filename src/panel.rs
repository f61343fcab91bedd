//! Panel geometry and memory-word layout for the target LED matrix.
//!
//! The output of this tool drives a 64x64 RGB matrix wired for 1/32 scan:
//! the driver lights two physical rows at once, 32 rows apart, so one memory
//! word carries the pixel at (x, y) together with the pixel at (x, y + 32).
//!
//! # Word layout (24 bits)
//! ```text
//! bits 23..12: RGB444 of the top pixel (row y)
//! bits 11..0:  RGB444 of the bottom pixel (row y + 32)
//! ```
//!
//! The half ordering is an assumption about the companion memory model
//! (`reg [23:0] rdata` initialized from this file via `$readmemh`). A swapped
//! convention still produces a running display, just with the two half-panels
//! exchanged, so keep this in sync with the HDL side.

/// Panel width in pixels.
pub const PANEL_WIDTH: u32 = 64;

/// Panel height in pixels.
pub const PANEL_HEIGHT: u32 = 64;

/// Scan rate denominator: 1/32 scan drives two rows per word.
pub const SCAN_RATE: u32 = 32;

/// Memory words per frame (one word per column per scanned row pair).
pub const WORDS_PER_FRAME: usize = (PANEL_WIDTH * SCAN_RATE) as usize;

/// File extension for hex memory images.
pub const HEX_EXT: &str = "hex";
