//! ZX Spectrum screen memory model.
//!
//! A [`MemoryScreen`] owns the 6912 bytes the Spectrum ULA reads to build a
//! picture, laid out exactly as they sit at `$4000` on the real machine, so
//! that a routine drawing into emulated or real video RAM can be checked
//! byte-for-byte against this model.
//!
//! # Screen memory layout
//!
//! Bitmap at offset 0-6143, attributes at 6144-6911 (`$4000-$57FF` and
//! `$5800-$5AFF` on the machine).
//! Bitmap address: `010Y7 Y6Y2 Y1Y0 Y5Y4Y3 X4X3X2X1X0`
//! Attribute address: `0101 10Y7 Y6Y5 Y4Y3 X4X3X2X1X0`
//!
//! # FLASH
//!
//! Each [`MemoryScreen::render`] call counts as one frame. Cells with the
//! FLASH bit set swap ink and paper while bit 5 of the frame counter is set,
//! so the phase toggles every 32 frames.

mod attr;
mod frame;
mod line;
mod palette;
mod screen;

pub use attr::{Attr, make_attr};
pub use frame::{Frame, MAX_SCALE};
pub use palette::{COLOUR_NAMES, PALETTE};
pub use screen::{MemoryScreen, attr_addr, screen_addr};

/// Active display width in pixels.
pub const SCREEN_WIDTH: u32 = 256;
/// Active display height in pixels.
pub const SCREEN_HEIGHT: u32 = 192;

/// Attribute grid columns (one per 8 pixels).
pub const ATTR_COLS: usize = 32;
/// Attribute grid rows (one per 8 scanlines).
pub const ATTR_ROWS: usize = 24;

/// Bytes of bitmap data.
pub const PIXEL_BYTES: usize = 6144;
/// Bytes of attribute data.
pub const ATTR_BYTES: usize = ATTR_COLS * ATTR_ROWS;
/// Total screen memory: bitmap followed by attributes.
pub const SCREEN_BYTES: usize = PIXEL_BYTES + ATTR_BYTES;
