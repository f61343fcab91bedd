//! panel-export library
//!
//! Converts animated images into hex memory images for a 64x64 1/32-scan RGB
//! LED matrix driver. The conversion functions live here so other tools can
//! reuse them; the `panel-export` binary is a thin CLI on top.

pub mod animation;
pub mod convert;
pub mod formats;
pub mod packing;
pub mod panel;

// Re-export the packing surface and panel constants
pub use packing::{expand_rgb444, pack_pixel_pair, quantize_rgb444, unpack_pixel_pair};
pub use panel::{HEX_EXT, PANEL_HEIGHT, PANEL_WIDTH, SCAN_RATE, WORDS_PER_FRAME};

// Re-export key types for animation conversion
pub use convert::{convert_animation, convert_animation_to_memory, ConvertedAnimation};
pub use formats::{parse_hex_image, write_hex_image, HexImageError};
