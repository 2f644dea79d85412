//! 256-entry signed sine table.

use std::sync::LazyLock;

/// Entries per full turn.
pub const ANGLE_STEPS: usize = 256;
/// Peak table value (sin 90 degrees).
pub const SINE_AMPLITUDE: i8 = 127;

/// `round(127 * sin(2 pi i / 256))`, built on first use.
static SIN_TABLE: LazyLock<[i8; ANGLE_STEPS]> = LazyLock::new(|| {
    let mut table = [0i8; ANGLE_STEPS];
    for (i, entry) in table.iter_mut().enumerate() {
        let angle = 2.0 * std::f64::consts::PI * i as f64 / ANGLE_STEPS as f64;
        // Half-way cases round up, as the table generator does.
        *entry = (f64::from(SINE_AMPLITUDE) * angle.sin() + 0.5).floor() as i8;
    }
    table
});

/// The whole table, e.g. for emitting it as assembler data.
#[must_use]
pub fn sine_table() -> &'static [i8; ANGLE_STEPS] {
    &SIN_TABLE
}

/// Sine of a byte angle.
#[must_use]
pub fn sin(angle: u8) -> i8 {
    SIN_TABLE[usize::from(angle)]
}

/// Cosine of a byte angle: the sine a quarter turn (64 steps) ahead.
#[must_use]
pub fn cos(angle: u8) -> i8 {
    SIN_TABLE[usize::from(angle.wrapping_add(64))]
}
