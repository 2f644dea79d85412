//! Attribute byte: `FBPPPIII`.

use std::fmt;

const FLASH_BIT: u8 = 0x80;
const BRIGHT_BIT: u8 = 0x40;

/// Pack an attribute byte. Ink and paper are taken mod 8.
#[must_use]
pub fn make_attr(ink: u8, paper: u8, bright: bool, flash: bool) -> u8 {
    (if flash { FLASH_BIT } else { 0 })
        | (if bright { BRIGHT_BIT } else { 0 })
        | ((paper & 0x07) << 3)
        | (ink & 0x07)
}

/// Decoded view of one attribute byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Attr(pub u8);

impl Attr {
    #[must_use]
    pub fn new(ink: u8, paper: u8, bright: bool, flash: bool) -> Self {
        Self(make_attr(ink, paper, bright, flash))
    }

    /// Foreground colour, 0-7.
    #[must_use]
    pub fn ink(self) -> u8 {
        self.0 & 0x07
    }

    /// Background colour, 0-7.
    #[must_use]
    pub fn paper(self) -> u8 {
        (self.0 >> 3) & 0x07
    }

    #[must_use]
    pub fn bright(self) -> bool {
        self.0 & BRIGHT_BIT != 0
    }

    #[must_use]
    pub fn flash(self) -> bool {
        self.0 & FLASH_BIT != 0
    }

    /// Palette indices `(ink, paper)` after the BRIGHT offset, with the two
    /// swapped when `flash_phase` is on and this cell flashes.
    #[must_use]
    pub fn colours(self, flash_phase: bool) -> (usize, usize) {
        let bright_offset = if self.bright() { 8 } else { 0 };
        let ink = usize::from(self.ink()) + bright_offset;
        let paper = usize::from(self.paper()) + bright_offset;
        if flash_phase && self.flash() {
            (paper, ink)
        } else {
            (ink, paper)
        }
    }
}

impl From<u8> for Attr {
    fn from(byte: u8) -> Self {
        Self(byte)
    }
}

impl From<Attr> for u8 {
    fn from(attr: Attr) -> Self {
        attr.0
    }
}

impl fmt::Display for Attr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ink {} paper {}", self.ink(), self.paper())?;
        if self.bright() {
            write!(f, " bright")?;
        }
        if self.flash() {
            write!(f, " flash")?;
        }
        Ok(())
    }
}
