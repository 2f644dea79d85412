//! Terminal preview with 24-bit colour half blocks.
//!
//! Each character cell stands for two scanlines: the upper pixel is the
//! foreground of `▀` and the lower pixel its background, so the whole screen
//! fits in 256 columns by 96 lines.

use std::fmt::{self, Write as _};
use std::str::FromStr;

use sinclair_screen::{Attr, MemoryScreen, PALETTE, SCREEN_HEIGHT, SCREEN_WIDTH};

use crate::VerifyError;

const UPPER_HALF: char = '\u{2580}';
const RESET: &str = "\x1b[0m";

/// What the preview shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preview {
    /// Bitmap coloured by its cell's ink and paper.
    Pixels,
    /// Attributes only: left half of each cell ink, right half paper.
    Attrs,
}

impl Preview {
    pub const ALL: [Preview; 2] = [Preview::Pixels, Preview::Attrs];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Pixels => "pixels",
            Self::Attrs => "attrs",
        }
    }
}

impl fmt::Display for Preview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preview {
    type Err = VerifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                VerifyError::Usage(format!(
                    "unknown preview: {s} (expected pixels or attrs)"
                ))
            })
    }
}

/// Colour of one pixel. FLASH is ignored so the preview is stable.
fn colour(screen: &MemoryScreen, mode: Preview, x: u32, y: u32) -> [u8; 3] {
    let attr = Attr(screen.attr((x / 8) as usize, (y / 8) as usize));
    let (ink, paper) = attr.colours(false);
    let on = match mode {
        Preview::Pixels => screen.get_pixel(x as i32, y as i32) != 0,
        Preview::Attrs => x % 8 < 4,
    };
    PALETTE[if on { ink } else { paper }]
}

/// Render the screen as 96 lines of ANSI text. Colour escapes are only
/// emitted when the pair changes, and every line ends with a reset.
#[must_use]
pub fn ansi_preview(screen: &MemoryScreen, mode: Preview) -> String {
    let mut out = String::new();
    for y in (0..SCREEN_HEIGHT).step_by(2) {
        let mut prev = None;
        for x in 0..SCREEN_WIDTH {
            let pair = (colour(screen, mode, x, y), colour(screen, mode, x, y + 1));
            if prev != Some(pair) {
                let ([fr, fg, fb], [br, bg, bb]) = pair;
                // Writing to a String cannot fail.
                let _ = write!(out, "\x1b[38;2;{fr};{fg};{fb}m\x1b[48;2;{br};{bg};{bb}m");
                prev = Some(pair);
            }
            out.push(UPPER_HALF);
        }
        out.push_str(RESET);
        out.push('\n');
    }
    out
}
