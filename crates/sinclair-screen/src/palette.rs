//! ZX Spectrum 16-colour palette.
//!
//! Non-bright colours use a lower intensity (0xCD) while bright colours use
//! full intensity (0xFF). Black appears twice.

/// RGB palette: 16 entries (8 normal + 8 bright).
///
/// Index layout: `bright_bit << 3 | colour_3bit`
pub const PALETTE: [[u8; 3]; 16] = [
    // Normal (bright = 0)
    [0x00, 0x00, 0x00], // 0: Black
    [0x00, 0x00, 0xCD], // 1: Blue
    [0xCD, 0x00, 0x00], // 2: Red
    [0xCD, 0x00, 0xCD], // 3: Magenta
    [0x00, 0xCD, 0x00], // 4: Green
    [0x00, 0xCD, 0xCD], // 5: Cyan
    [0xCD, 0xCD, 0x00], // 6: Yellow
    [0xCD, 0xCD, 0xCD], // 7: White
    // Bright (bright = 1)
    [0x00, 0x00, 0x00], // 8: Black (same as normal)
    [0x00, 0x00, 0xFF], // 9: Bright Blue
    [0xFF, 0x00, 0x00], // 10: Bright Red
    [0xFF, 0x00, 0xFF], // 11: Bright Magenta
    [0x00, 0xFF, 0x00], // 12: Bright Green
    [0x00, 0xFF, 0xFF], // 13: Bright Cyan
    [0xFF, 0xFF, 0x00], // 14: Bright Yellow
    [0xFF, 0xFF, 0xFF], // 15: Bright White
];

/// Names of the eight base colours, in palette order.
pub const COLOUR_NAMES: [&str; 8] = [
    "Black", "Blue", "Red", "Magenta", "Green", "Cyan", "Yellow", "White",
];
