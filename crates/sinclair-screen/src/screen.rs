//! The screen buffer: address translation, pixel and attribute access,
//! rendering.

use emu_core::{Observable, Value, parse_number};

use crate::attr::Attr;
use crate::frame::Frame;
use crate::palette::PALETTE;
use crate::{ATTR_COLS, ATTR_ROWS, PIXEL_BYTES, SCREEN_BYTES, SCREEN_HEIGHT, SCREEN_WIDTH};

/// Frame counter bit that drives the FLASH phase (toggles every 32 frames).
const FLASH_PHASE_BIT: u32 = 0x20;

/// Offset of the bitmap byte holding pixel `(x, y)`.
///
/// `H = 010 Y7Y6 Y2Y1Y0`, `L = Y5Y4Y3 X4X3X2X1X0`; the result is `H:L`
/// with the `$40` base removed. Only meaningful for `y < 192`.
#[must_use]
pub fn screen_addr(x: u8, y: u8) -> usize {
    let h = 0x40 | ((y & 0xC0) >> 3) | (y & 0x07);
    let l = ((y & 0x38) << 2) | (x >> 3);
    (usize::from(h - 0x40) << 8) | usize::from(l)
}

/// Offset of the attribute byte for character cell `(col, row)`.
///
/// No bounds check: columns past 31 spill into the following row.
#[must_use]
pub fn attr_addr(col: usize, row: usize) -> usize {
    PIXEL_BYTES + row * ATTR_COLS + col
}

/// [`attr_addr`] for arbitrary caller input: `None` where the sum overflows.
fn attr_offset(col: usize, row: usize) -> Option<usize> {
    row.checked_mul(ATTR_COLS)?
        .checked_add(col)?
        .checked_add(PIXEL_BYTES)
}

/// Bitmap offset and bit mask for an on-screen pixel, `None` off-screen.
fn locate(x: i32, y: i32) -> Option<(usize, u8)> {
    if !(0..SCREEN_WIDTH as i32).contains(&x) || !(0..SCREEN_HEIGHT as i32).contains(&y) {
        return None;
    }
    let (x, y) = (x as u8, y as u8);
    Some((screen_addr(x, y), 0x80 >> (x & 7)))
}

/// ZX Spectrum display memory plus the frame counter that drives FLASH.
pub struct MemoryScreen {
    /// Bitmap (0-6143) followed by attributes (6144-6911).
    memory: [u8; SCREEN_BYTES],
    /// Render calls so far. Only bit 5 matters.
    frame_count: u32,
    /// Reused output of [`MemoryScreen::render`].
    frame: Frame,
}

impl MemoryScreen {
    /// A blank screen: every byte zero, so black ink on black paper.
    #[must_use]
    pub fn new() -> Self {
        Self {
            memory: [0; SCREEN_BYTES],
            frame_count: 0,
            frame: Frame::new(),
        }
    }

    // === Raw memory ===

    /// Write a byte at a screen memory offset (0-6911). Out-of-range
    /// offsets are ignored.
    pub fn poke(&mut self, offset: usize, value: u32) {
        if let Some(byte) = self.memory.get_mut(offset) {
            *byte = value as u8;
        }
    }

    /// Read a byte at a screen memory offset; 0 past the end.
    #[must_use]
    pub fn peek(&self, offset: usize) -> u8 {
        self.memory.get(offset).copied().unwrap_or(0)
    }

    /// The whole 6912-byte image.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; SCREEN_BYTES] {
        &self.memory
    }

    /// Copy a screen image in from offset 0. Anything beyond 6912 bytes is
    /// ignored; a shorter slice leaves the remaining bytes untouched.
    pub fn load(&mut self, bytes: &[u8]) {
        let len = bytes.len().min(SCREEN_BYTES);
        self.memory[..len].copy_from_slice(&bytes[..len]);
        log::debug!("loaded {len} bytes of screen memory");
    }

    // === Pixels ===

    /// Set pixel `(x, y)`. Off-screen coordinates are a no-op.
    pub fn set_pixel(&mut self, x: i32, y: i32) {
        if let Some((addr, bit)) = locate(x, y) {
            self.memory[addr] |= bit;
        }
    }

    /// Clear pixel `(x, y)`. Off-screen coordinates are a no-op.
    pub fn clear_pixel(&mut self, x: i32, y: i32) {
        if let Some((addr, bit)) = locate(x, y) {
            self.memory[addr] &= !bit;
        }
    }

    /// 1 if pixel `(x, y)` is set, 0 if clear or off-screen.
    #[must_use]
    pub fn get_pixel(&self, x: i32, y: i32) -> u8 {
        match locate(x, y) {
            Some((addr, bit)) => u8::from(self.memory[addr] & bit != 0),
            None => 0,
        }
    }

    // === Attributes ===

    /// Store an attribute byte (low 8 bits of `value`) for cell
    /// `(col, row)`. Coordinates are not validated; a write landing past
    /// the end of screen memory is dropped.
    pub fn set_attr(&mut self, col: usize, row: usize, value: u32) {
        if let Some(offset) = attr_offset(col, row) {
            self.poke(offset, value);
        }
    }

    /// Attribute byte for cell `(col, row)`, same addressing as
    /// [`MemoryScreen::set_attr`].
    #[must_use]
    pub fn attr(&self, col: usize, row: usize) -> u8 {
        attr_offset(col, row).map_or(0, |offset| self.peek(offset))
    }

    /// Zero the bitmap and the attributes.
    pub fn clear_screen(&mut self) {
        self.memory.fill(0);
    }

    /// Set every attribute byte to the low 8 bits of `value`.
    pub fn fill_attrs(&mut self, value: u32) {
        self.memory[PIXEL_BYTES..].fill(value as u8);
    }

    // === Rendering ===

    /// Frames rendered so far.
    #[must_use]
    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }

    /// Position the frame counter, e.g. to render a specific FLASH phase.
    pub fn set_frame_count(&mut self, count: u32) {
        self.frame_count = count;
    }

    /// Whether FLASH cells render inverted on the next frame.
    #[must_use]
    pub fn flash_active(&self) -> bool {
        self.frame_count & FLASH_PHASE_BIT != 0
    }

    /// Render the screen to the internal 256x192 frame and advance the
    /// frame counter.
    pub fn render(&mut self) -> &Frame {
        let flash = self.flash_active();
        Self::paint(&self.memory, flash, &mut self.frame);
        self.advance_frame(flash);
        &self.frame
    }

    /// Render into a caller-owned frame. Counts as a frame like
    /// [`MemoryScreen::render`].
    ///
    /// `frame` must be 256x192, as made by [`Frame::new`].
    pub fn render_into(&mut self, frame: &mut Frame) {
        let flash = self.flash_active();
        Self::paint(&self.memory, flash, frame);
        self.advance_frame(flash);
    }

    /// The most recent output of [`MemoryScreen::render`].
    #[must_use]
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    fn advance_frame(&mut self, flash: bool) {
        log::trace!("rendered frame {} (flash {flash})", self.frame_count);
        self.frame_count = self.frame_count.wrapping_add(1);
    }

    fn paint(memory: &[u8; SCREEN_BYTES], flash: bool, frame: &mut Frame) {
        for y in 0..SCREEN_HEIGHT as u8 {
            let row = usize::from(y >> 3);
            for col in 0..ATTR_COLS as u8 {
                let bitmap = memory[screen_addr(col * 8, y)];
                let attr = Attr(memory[attr_addr(usize::from(col), row)]);
                let (ink, paper) = attr.colours(flash);

                for bit in 0..8u8 {
                    let x = u32::from(col) * 8 + u32::from(bit);
                    let colour = if bitmap & (0x80 >> bit) != 0 {
                        PALETTE[ink]
                    } else {
                        PALETTE[paper]
                    };
                    frame.put(x, u32::from(y), colour);
                }
            }
        }
    }
}

impl Default for MemoryScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Observable for MemoryScreen {
    fn query(&self, path: &str) -> Option<Value> {
        if let Some(rest) = path.strip_prefix("memory.") {
            let offset = parse_number(rest)? as usize;
            return (offset < SCREEN_BYTES).then(|| Value::U8(self.memory[offset]));
        }

        if let Some(rest) = path.strip_prefix("pixel.") {
            let (x, y) = rest.split_once('.')?;
            let x = i32::try_from(parse_number(x)?).ok()?;
            let y = i32::try_from(parse_number(y)?).ok()?;
            return Some(self.get_pixel(x, y).into());
        }

        if let Some(rest) = path.strip_prefix("addr.") {
            let (x, y) = rest.split_once('.')?;
            let x = u8::try_from(parse_number(x)?).ok()?;
            let y = u8::try_from(parse_number(y)?).ok()?;
            if u32::from(y) >= SCREEN_HEIGHT {
                return None;
            }
            return Some(Value::U16(screen_addr(x, y) as u16));
        }

        if let Some(rest) = path.strip_prefix("attr.") {
            let mut parts = rest.splitn(3, '.');
            let col = parse_number(parts.next()?)? as usize;
            let row = parse_number(parts.next()?)? as usize;
            if col >= ATTR_COLS || row >= ATTR_ROWS {
                return None;
            }
            let attr = Attr(self.attr(col, row));
            return match parts.next() {
                None => Some(attr.0.into()),
                Some("ink") => Some(attr.ink().into()),
                Some("paper") => Some(attr.paper().into()),
                Some("bright") => Some(attr.bright().into()),
                Some("flash") => Some(attr.flash().into()),
                Some(_) => None,
            };
        }

        match path {
            "frame_count" => Some(self.frame_count.into()),
            "flash" => Some(self.flash_active().into()),
            _ => None,
        }
    }

    fn query_paths(&self) -> &'static [&'static str] {
        &[
            "frame_count",
            "flash",
            "memory.<offset>",
            "pixel.<x>.<y>",
            "addr.<x>.<y>",
            "attr.<col>.<row>",
            "attr.<col>.<row>.ink",
            "attr.<col>.<row>.paper",
            "attr.<col>.<row>.bright",
            "attr.<col>.<row>.flash",
        ]
    }
}
