//! Z80 assembly listing of the sine table.

use std::fmt::Write;

use z80_fixmath::{ANGLE_STEPS, SINE_AMPLITUDE, sine_table};

/// Values per `DB` line.
const PER_LINE: usize = 8;

/// The table as a page-aligned `DB` block, eight values per line with the
/// index range in a trailing comment.
#[must_use]
pub fn sine_table_asm() -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "; {ANGLE_STEPS}-entry signed sine table, amplitude {SINE_AMPLITUDE}"
    );
    let _ = writeln!(out, "; index = angle * 256 / 360, cos(a) = sin(a + 64)");
    out.push_str("    ALIGN 256\n");
    out.push_str("sine_table:\n");

    for (n, chunk) in sine_table().chunks(PER_LINE).enumerate() {
        let start = n * PER_LINE;
        let values: Vec<String> = chunk.iter().map(|v| format!("{v:4}")).collect();
        let _ = writeln!(
            out,
            "    DB  {}  ; {start}-{}",
            values.join(", "),
            start + chunk.len() - 1
        );
    }
    out
}
