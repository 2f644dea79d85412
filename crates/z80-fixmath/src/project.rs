//! Perspective projection onto the 256x192 screen.

use crate::multiply::muls8;

/// Viewer distance used by the demo code.
pub const DEFAULT_VIEWER_DISTANCE: i32 = 200;

/// Screen-space centre.
const CENTRE_X: i32 = 128;
const CENTRE_Y: i32 = 96;

/// Largest perspective scale the routine produces.
const MAX_SCALE: i64 = 255;

/// A projected screen coordinate. Both axes wrap at 256.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point2 {
    pub x: u8,
    pub y: u8,
}

/// Project a model-space point.
///
/// Returns `None` when the point is at or behind the viewer
/// (`z + viewer_distance <= 0`). Otherwise
/// `scale = min(255, floor(viewer_distance * 128 / (z + viewer_distance)))`
/// and each axis is `centre + ((muls8(v, scale) * 2) >> 8)`, wrapped to a
/// byte.
///
/// `muls8` reads `scale` as a signed byte, so scales of 128 and above
/// (points nearer than the projection plane) mirror through the centre,
/// just as on the Z80.
#[must_use]
pub fn project(x: i32, y: i32, z: i32, viewer_distance: i32) -> Option<Point2> {
    let denom = i64::from(z) + i64::from(viewer_distance);
    if denom <= 0 {
        return None;
    }

    // Floor division, including for negative distances.
    let scale = (i64::from(viewer_distance) * 128)
        .div_euclid(denom)
        .min(MAX_SCALE) as i32;

    let sx = CENTRE_X + ((muls8(x, scale) * 2) >> 8);
    let sy = CENTRE_Y + ((muls8(y, scale) * 2) >> 8);
    Some(Point2 {
        x: (sx & 0xFF) as u8,
        y: (sy & 0xFF) as u8,
    })
}

/// [`project`] with [`DEFAULT_VIEWER_DISTANCE`].
#[must_use]
pub fn project_default(x: i32, y: i32, z: i32) -> Option<Point2> {
    project(x, y, z, DEFAULT_VIEWER_DISTANCE)
}
