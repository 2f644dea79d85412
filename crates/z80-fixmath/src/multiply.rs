//! Signed 8x8 multiply.

/// Multiply the low bytes of `a` and `b` as signed 8-bit values (`D x E ->
/// HL`). The full 16-bit product is returned, not truncated.
///
/// `0x80` and `-128` are the same input.
#[must_use]
pub fn muls8(a: i32, b: i32) -> i32 {
    i32::from(a as i8) * i32::from(b as i8)
}
