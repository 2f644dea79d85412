//! Screen statistics: attribute usage, pixel density, busy cells.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;
use sinclair_screen::{ATTR_COLS, ATTR_ROWS, Attr, COLOUR_NAMES, MemoryScreen, screen_addr};

/// Distinct non-trivial byte patterns at which a cell counts as "complex"
/// (hard to draw within two colours).
const COMPLEX_PATTERN_THRESHOLD: usize = 6;

/// Summary of one screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScreenInfo {
    pub cells: usize,
    pub unique_attrs: usize,
    pub flash_cells: usize,
    pub bright_cells: usize,
    /// Cells per ink colour 0-7.
    pub ink_usage: [usize; 8],
    /// Cells per paper colour 0-7.
    pub paper_usage: [usize; 8],
    pub pixels_set: usize,
    pub pixels_total: usize,
    /// Set pixels in each 64-line third.
    pub thirds: [usize; 3],
    /// Cells with six or more distinct pixel rows other than 0x00/0xFF.
    pub complex_cells: usize,
}

impl ScreenInfo {
    #[must_use]
    pub fn from_screen(screen: &MemoryScreen) -> Self {
        let mut unique = BTreeSet::new();
        let mut info = ScreenInfo {
            cells: ATTR_COLS * ATTR_ROWS,
            unique_attrs: 0,
            flash_cells: 0,
            bright_cells: 0,
            ink_usage: [0; 8],
            paper_usage: [0; 8],
            pixels_set: 0,
            pixels_total: 256 * 192,
            thirds: [0; 3],
            complex_cells: 0,
        };

        for row in 0..ATTR_ROWS {
            for col in 0..ATTR_COLS {
                let attr = Attr(screen.attr(col, row));
                unique.insert(attr.0);
                info.ink_usage[usize::from(attr.ink())] += 1;
                info.paper_usage[usize::from(attr.paper())] += 1;
                info.flash_cells += usize::from(attr.flash());
                info.bright_cells += usize::from(attr.bright());

                let mut patterns = BTreeSet::new();
                for scan in 0..8 {
                    let y = (row * 8 + scan) as u8;
                    let byte = screen.peek(screen_addr((col * 8) as u8, y));
                    if byte != 0x00 && byte != 0xFF {
                        patterns.insert(byte);
                    }
                }
                if patterns.len() >= COMPLEX_PATTERN_THRESHOLD {
                    info.complex_cells += 1;
                }
            }
        }
        info.unique_attrs = unique.len();

        for y in 0..192u8 {
            let mut line = 0;
            for col in 0..32u8 {
                line += screen.peek(screen_addr(col * 8, y)).count_ones() as usize;
            }
            info.pixels_set += line;
            info.thirds[usize::from(y / 64)] += line;
        }

        info
    }

    /// Percentage of set pixels, 0-100.
    #[must_use]
    pub fn density(&self) -> f64 {
        100.0 * self.pixels_set as f64 / self.pixels_total as f64
    }
}

fn usage_bar(count: usize) -> String {
    "#".repeat((count / 10).min(40))
}

impl fmt::Display for ScreenInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Screen Statistics")?;
        writeln!(f, "{}", "=".repeat(40))?;
        writeln!(f, "Total cells:         {} ({ATTR_ROWS}x{ATTR_COLS})", self.cells)?;
        writeln!(f, "Unique attr values:  {}", self.unique_attrs)?;
        writeln!(f, "Flash cells:         {}", self.flash_cells)?;
        writeln!(f, "Bright cells:        {}", self.bright_cells)?;

        for (label, usage) in [("Ink", &self.ink_usage), ("Paper", &self.paper_usage)] {
            writeln!(f)?;
            writeln!(f, "{label} colour usage:")?;
            for (c, &count) in usage.iter().enumerate() {
                if count > 0 {
                    writeln!(
                        f,
                        "  {c} {:>8}: {count:4} {}",
                        COLOUR_NAMES[c],
                        usage_bar(count)
                    )?;
                }
            }
        }

        writeln!(f)?;
        writeln!(
            f,
            "Pixel density:       {}/{} ({:.1}%)",
            self.pixels_set,
            self.pixels_total,
            self.density()
        )?;
        let third_total = self.pixels_total / 3;
        for (i, &set) in self.thirds.iter().enumerate() {
            writeln!(
                f,
                "  Third {i}:           {set}/{third_total} ({:.1}%)",
                100.0 * set as f64 / third_total as f64
            )?;
        }

        writeln!(f)?;
        write!(
            f,
            "Complex cells:       {} (cells with {COMPLEX_PATTERN_THRESHOLD}+ distinct pixel patterns)",
            self.complex_cells
        )
    }
}
