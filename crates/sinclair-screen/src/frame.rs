//! Rendered RGBA image.

use crate::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Largest upscale factor [`Frame::scaled`] produces (a 4096x3072 image).
pub const MAX_SCALE: u32 = 16;

/// An RGBA8 image, row-major, 4 bytes per pixel.
///
/// [`crate::MemoryScreen::render`] always produces a 256x192 frame; scaled
/// copies for display are derived with [`Frame::scaled`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Frame {
    /// A 256x192 frame, opaque black.
    #[must_use]
    pub fn new() -> Self {
        Self::filled(SCREEN_WIDTH, SCREEN_HEIGHT)
    }

    fn filled(width: u32, height: u32) -> Self {
        let mut data = vec![0; (width * height * 4) as usize];
        for px in data.chunks_exact_mut(4) {
            px[3] = 0xFF;
        }
        Self {
            width,
            height,
            data,
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// RGB of the pixel at `(x, y)`, or `None` outside the frame.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y * self.width + x) * 4) as usize;
        Some([self.data[i], self.data[i + 1], self.data[i + 2]])
    }

    /// Write an opaque pixel. Caller guarantees the coordinate is in range.
    #[inline]
    pub(crate) fn put(&mut self, x: u32, y: u32, rgb: [u8; 3]) {
        let i = ((y * self.width + x) * 4) as usize;
        self.data[i] = rgb[0];
        self.data[i + 1] = rgb[1];
        self.data[i + 2] = rgb[2];
        self.data[i + 3] = 0xFF;
    }

    /// Nearest-neighbour upscale: every source pixel becomes a
    /// `factor` x `factor` block. The factor is clamped to
    /// `1..=MAX_SCALE`.
    #[must_use]
    pub fn scaled(&self, factor: u32) -> Frame {
        let factor = factor.clamp(1, MAX_SCALE);
        if factor == 1 {
            return self.clone();
        }

        let f = factor as usize;
        let src_stride = self.width as usize * 4;
        let mut data = Vec::with_capacity(self.data.len() * f * f);

        for src_row in self.data.chunks_exact(src_stride) {
            let row_start = data.len();
            for px in src_row.chunks_exact(4) {
                for _ in 0..f {
                    data.extend_from_slice(px);
                }
            }
            let row_end = data.len();
            for _ in 1..f {
                data.extend_from_within(row_start..row_end);
            }
        }

        Frame {
            width: self.width * factor,
            height: self.height * factor,
            data,
        }
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}
