//! Fixed-point 3D maths on signed bytes, bit-exact with the Z80 demo
//! routines of the same names (`muls8`, `sin_table`, `rotate_pair`,
//! `rotate_xyz`, `project`).
//!
//! Angles are bytes: 256 steps per turn, 64 = 90 degrees. Sine values are
//! signed bytes scaled by 127. Every result is saturated or wrapped exactly
//! as the 8-bit code does it, never rounded through floating point.

mod multiply;
mod project;
mod rotate;
mod sine;

pub use multiply::muls8;
pub use project::{DEFAULT_VIEWER_DISTANCE, Point2, project, project_default};
pub use rotate::{Vec3, rotate_pair, rotate_xyz};
pub use sine::{ANGLE_STEPS, SINE_AMPLITUDE, cos, sin, sine_table};
