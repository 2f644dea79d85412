//! Bresenham line drawing, matching the Z80 `draw_line` routine pixel for
//! pixel.
//!
//! The Z80 code always walks left to right and steps the minor axis only
//! after plotting and accumulating, so shallow diagonals break at different
//! pixels than a textbook Bresenham. Both quirks are kept here.

use crate::{MemoryScreen, SCREEN_HEIGHT, SCREEN_WIDTH};

const MAX_X: i64 = SCREEN_WIDTH as i64 - 1;
const MAX_Y: i64 = SCREEN_HEIGHT as i64 - 1;

impl MemoryScreen {
    /// Draw a line from `(x0, y0)` to `(x1, y1)` inclusive. Pixels that fall
    /// off-screen are skipped; any `i32` endpoints are accepted.
    ///
    /// Only the on-screen stretch is walked. The error term after `k` steps
    /// is `k * minor mod major`, so the walk starts there directly and
    /// plots exactly what a full walk from `(x0, y0)` would.
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) {
        // Always left to right.
        let (x0, y0, x1, y1) = if x0 > x1 {
            (x1, y1, x0, y0)
        } else {
            (x0, y0, x1, y1)
        };
        let (x0, y0, x1, y1) = (i64::from(x0), i64::from(y0), i64::from(x1), i64::from(y1));

        let dx = x1 - x0;
        let dy = (y1 - y0).abs();
        let sy = if y0 < y1 { 1 } else { -1 };

        if dx >= dy {
            // Horizontal-major: step k plots column x0 + k.
            let first = (-x0).max(0);
            let last = (MAX_X - x0).min(dx);
            if first > last {
                return;
            }
            let (mut y, mut err) = if dx == 0 {
                (y0, 0)
            } else {
                let (steps, err) = skip(first, dy, dx);
                (y0 + sy * steps, err)
            };
            for k in first..=last {
                self.plot(x0 + k, y);
                err += dy;
                if err >= dx {
                    err -= dx;
                    y += sy;
                }
            }
        } else {
            // Vertical-major: step k plots row y0 + sy * k.
            let (first, last) = if sy > 0 {
                ((-y0).max(0), (MAX_Y - y0).min(dy))
            } else {
                ((y0 - MAX_Y).max(0), y0.min(dy))
            };
            if first > last {
                return;
            }
            let (steps, mut err) = skip(first, dx, dy);
            let mut x = x0 + steps;
            let mut y = y0 + sy * first;
            for _ in first..=last {
                if x > MAX_X {
                    break;
                }
                self.plot(x, y);
                y += sy;
                err += dx;
                if err >= dy {
                    err -= dy;
                    x += 1;
                }
            }
        }
    }

    fn plot(&mut self, x: i64, y: i64) {
        if let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) {
            self.set_pixel(x, y);
        }
    }
}

/// Minor-axis steps and error term after `k` major-axis steps.
/// `major` must be positive.
fn skip(k: i64, minor: i64, major: i64) -> (i64, i64) {
    let acc = i128::from(k) * i128::from(minor);
    let major = i128::from(major);
    ((acc / major) as i64, (acc % major) as i64)
}
