//! Fixed-point rotation.

use crate::project::{Point2, project};
use crate::sine::{cos, sin};

/// Saturate to a signed byte (the Z80 code clamps rather than wraps).
fn clamp8(v: i128) -> i8 {
    v.clamp(i128::from(i8::MIN), i128::from(i8::MAX)) as i8
}

/// Rotate the pair `(a, b)` by an angle given as table sine/cosine values.
///
/// `ra = ((a*cos - b*sin) * 2) >> 8`, `rb = ((a*sin + b*cos) * 2) >> 8`,
/// both saturated to -128..=127. The shift is arithmetic, so negative
/// results round towards minus infinity.
#[must_use]
pub fn rotate_pair(a: i32, b: i32, sin: i32, cos: i32) -> (i8, i8) {
    let (a, b, sin, cos) = (
        i128::from(a),
        i128::from(b),
        i128::from(sin),
        i128::from(cos),
    );
    let ra = ((a * cos - b * sin) * 2) >> 8;
    let rb = ((a * sin + b * cos) * 2) >> 8;
    (clamp8(ra), clamp8(rb))
}

/// Rotate a point about all three axes: Z first, then Y, then X, each step
/// feeding the updated coordinates into the next.
///
/// The table peaks at 127 rather than 128, so even zero angles shrink
/// coordinates slightly (100 -> 98 after two passes).
#[must_use]
pub fn rotate_xyz(x: i8, y: i8, z: i8, ax: u8, ay: u8, az: u8) -> (i8, i8, i8) {
    let (x, y) = rotate_pair(
        i32::from(x),
        i32::from(y),
        i32::from(sin(az)),
        i32::from(cos(az)),
    );
    let (x, z) = rotate_pair(
        i32::from(x),
        i32::from(z),
        i32::from(sin(ay)),
        i32::from(cos(ay)),
    );
    let (y, z) = rotate_pair(
        i32::from(y),
        i32::from(z),
        i32::from(sin(ax)),
        i32::from(cos(ax)),
    );
    (x, y, z)
}

/// A point in signed-byte model space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Vec3 {
    pub x: i8,
    pub y: i8,
    pub z: i8,
}

impl Vec3 {
    #[must_use]
    pub const fn new(x: i8, y: i8, z: i8) -> Self {
        Self { x, y, z }
    }

    /// [`rotate_xyz`] applied to this point.
    #[must_use]
    pub fn rotated(self, ax: u8, ay: u8, az: u8) -> Self {
        let (x, y, z) = rotate_xyz(self.x, self.y, self.z, ax, ay, az);
        Self { x, y, z }
    }

    /// [`project`] applied to this point.
    #[must_use]
    pub fn projected(self, viewer_distance: i32) -> Option<Point2> {
        project(
            i32::from(self.x),
            i32::from(self.y),
            i32::from(self.z),
            viewer_distance,
        )
    }
}
