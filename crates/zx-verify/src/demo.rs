//! Demo scenes drawn with the fixed-point routines.

use std::fmt;
use std::str::FromStr;

use sinclair_screen::{ATTR_COLS, ATTR_ROWS, MemoryScreen, make_attr, screen_addr};
use z80_fixmath::{DEFAULT_VIEWER_DISTANCE, Point2, Vec3, cos, muls8, project, sin};

use crate::VerifyError;

/// Half the cube's edge length in model units.
const CUBE_HALF: i8 = 60;

/// Pushes the cube away from the viewer so every vertex projects with a
/// scale below 128.
const CUBE_DEPTH: i32 = 128;

/// Starburst spoke count, angle between spokes, and length.
const SPOKES: u8 = 16;
const SPOKE_STEP: u8 = 16;
const SPOKE_LENGTH: i32 = 90;

const CENTRE_X: i32 = 128;
const CENTRE_Y: i32 = 96;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Demo {
    /// Rotating wireframe cube: `rotate_xyz`, `project`, `draw_line`.
    Cube,
    /// Spinning starburst of lines from the centre.
    Lines,
    /// Every ink/paper pair, bright on the right half.
    Attrs,
    /// Checkerboard of FLASH cells.
    Flash,
}

impl Demo {
    pub const ALL: [Demo; 4] = [Demo::Cube, Demo::Lines, Demo::Attrs, Demo::Flash];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Cube => "cube",
            Self::Lines => "lines",
            Self::Attrs => "attrs",
            Self::Flash => "flash",
        }
    }

    /// Redraw the scene for animation step `frame`. Clears the screen first.
    pub fn draw(self, screen: &mut MemoryScreen, frame: u32) {
        screen.clear_screen();
        match self {
            Self::Cube => draw_cube(screen, frame),
            Self::Lines => draw_starburst(screen, frame),
            Self::Attrs => draw_attr_grid(screen, frame),
            Self::Flash => draw_flash_board(screen),
        }
    }
}

impl fmt::Display for Demo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Demo {
    type Err = VerifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                VerifyError::Usage(format!(
                    "unknown demo: {s} (expected cube, lines, attrs or flash)"
                ))
            })
    }
}

// === Cube ===

fn cube_vertices() -> [Vec3; 8] {
    let mut vertices = [Vec3::default(); 8];
    for (i, v) in vertices.iter_mut().enumerate() {
        let pick = |bit: usize| if i & bit == 0 { -CUBE_HALF } else { CUBE_HALF };
        *v = Vec3::new(pick(1), pick(2), pick(4));
    }
    vertices
}

fn draw_cube(screen: &mut MemoryScreen, frame: u32) {
    screen.fill_attrs(u32::from(make_attr(5, 0, true, false)));

    let (ax, ay, az) = (
        (frame.wrapping_mul(2) & 0xFF) as u8,
        (frame.wrapping_mul(3) & 0xFF) as u8,
        (frame & 0xFF) as u8,
    );
    let points: Vec<Option<Point2>> = cube_vertices()
        .into_iter()
        .map(|v| {
            let r = v.rotated(ax, ay, az);
            project(
                i32::from(r.x),
                i32::from(r.y),
                i32::from(r.z) + CUBE_DEPTH,
                DEFAULT_VIEWER_DISTANCE,
            )
        })
        .collect();

    // Vertices differing in exactly one coordinate share an edge.
    for i in 0..8 {
        for bit in [1, 2, 4] {
            if i & bit != 0 {
                continue;
            }
            if let (Some(a), Some(b)) = (points[i], points[i | bit]) {
                screen.draw_line(
                    i32::from(a.x),
                    i32::from(a.y),
                    i32::from(b.x),
                    i32::from(b.y),
                );
            }
        }
    }
}

// === Starburst ===

fn draw_starburst(screen: &mut MemoryScreen, frame: u32) {
    screen.fill_attrs(u32::from(make_attr(6, 1, false, false)));

    let spin = (frame & 0xFF) as u8;
    for k in 0..SPOKES {
        let angle = k.wrapping_mul(SPOKE_STEP).wrapping_add(spin);
        let dx = muls8(i32::from(cos(angle)), SPOKE_LENGTH) >> 7;
        let dy = muls8(i32::from(sin(angle)), SPOKE_LENGTH) >> 7;
        screen.draw_line(CENTRE_X, CENTRE_Y, CENTRE_X + dx, CENTRE_Y + dy);
    }
}

// === Attribute grid ===

fn draw_attr_grid(screen: &mut MemoryScreen, frame: u32) {
    // Alternate scanlines so both ink and paper show in every cell.
    for y in 0..192u8 {
        let pattern = if y % 2 == 0 { 0xAA } else { 0x55 };
        for col in 0..32u8 {
            screen.poke(screen_addr(col * 8, y), pattern);
        }
    }

    let shift = (frame / 8) as usize;
    for row in 0..ATTR_ROWS {
        for col in 0..ATTR_COLS {
            let ink = ((col + shift) % 8) as u8;
            let paper = (row % 8) as u8;
            let bright = col >= ATTR_COLS / 2;
            screen.set_attr(col, row, u32::from(make_attr(ink, paper, bright, false)));
        }
    }
}

// === Flash board ===

fn draw_flash_board(screen: &mut MemoryScreen) {
    // Left half of every cell in ink.
    for y in 0..192u8 {
        for col in 0..32u8 {
            screen.poke(screen_addr(col * 8, y), 0xF0);
        }
    }
    for row in 0..ATTR_ROWS {
        for col in 0..ATTR_COLS {
            let flash = (col + row) % 2 == 0;
            screen.set_attr(col, row, u32::from(make_attr(2, 7, false, flash)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sinclair_screen::{Attr, PALETTE};

    fn lit_pixels(screen: &MemoryScreen) -> Vec<(i32, i32)> {
        let mut out = Vec::new();
        for y in 0..192 {
            for x in 0..256 {
                if screen.get_pixel(x, y) == 1 {
                    out.push((x, y));
                }
            }
        }
        out
    }

    #[test]
    fn names_round_trip() {
        for demo in Demo::ALL {
            assert_eq!(demo.name().parse::<Demo>().ok(), Some(demo));
            assert_eq!(demo.to_string(), demo.name());
        }
        assert_eq!("CUBE".parse::<Demo>().ok(), Some(Demo::Cube));
        assert!("sphere".parse::<Demo>().is_err());
    }

    #[test]
    fn cube_has_twelve_edges() {
        let vertices = cube_vertices();
        let mut edges = 0;
        for i in 0..8 {
            for bit in [1, 2, 4] {
                if i & bit == 0 {
                    edges += 1;
                    let (a, b) = (vertices[i], vertices[i | bit]);
                    let differing = [a.x != b.x, a.y != b.y, a.z != b.z];
                    assert_eq!(differing.iter().filter(|&&d| d).count(), 1);
                }
            }
        }
        assert_eq!(edges, 12);
    }

    #[test]
    fn cube_front_face_at_rest() {
        let mut s = MemoryScreen::new();
        Demo::Cube.draw(&mut s, 0);
        // Front face corners land at (83,51) and (171,139).
        assert_eq!(s.get_pixel(83, 51), 1);
        assert_eq!(s.get_pixel(128, 51), 1);
        assert_eq!(s.get_pixel(171, 139), 1);
        assert_eq!(s.get_pixel(128, 96), 0);
        for (x, y) in lit_pixels(&s) {
            assert!((83..=171).contains(&x) && (51..=139).contains(&y), "({x},{y})");
        }
    }

    #[test]
    fn cube_animates() {
        let mut a = MemoryScreen::new();
        let mut b = MemoryScreen::new();
        Demo::Cube.draw(&mut a, 0);
        Demo::Cube.draw(&mut b, 10);
        assert_ne!(lit_pixels(&a), lit_pixels(&b));
        assert!(!lit_pixels(&b).is_empty());
    }

    #[test]
    fn starburst_spokes() {
        let mut s = MemoryScreen::new();
        Demo::Lines.draw(&mut s, 0);
        assert_eq!(s.get_pixel(128, 96), 1);
        // Angle 0 points right, angle 64 points down.
        assert_eq!(s.get_pixel(217, 96), 1);
        assert_eq!(s.get_pixel(128, 185), 1);
    }

    #[test]
    fn attr_grid_cells() {
        let mut s = MemoryScreen::new();
        Demo::Attrs.draw(&mut s, 0);
        assert_eq!(s.attr(3, 2), make_attr(3, 2, false, false));
        assert_eq!(s.attr(17, 10), make_attr(1, 2, true, false));
        assert_eq!(s.get_pixel(0, 0), 1);
        assert_eq!(s.get_pixel(1, 0), 0);
        assert_eq!(s.get_pixel(0, 1), 0);

        Demo::Attrs.draw(&mut s, 8);
        assert_eq!(Attr(s.attr(3, 2)).ink(), 4);
    }

    #[test]
    fn flash_board_swaps_colours() {
        let mut s = MemoryScreen::new();
        Demo::Flash.draw(&mut s, 0);
        assert!(Attr(s.attr(0, 0)).flash());
        assert!(!Attr(s.attr(1, 0)).flash());

        assert_eq!(s.render().pixel(0, 0), Some(PALETTE[2]));
        s.set_frame_count(32);
        assert_eq!(s.render().pixel(0, 0), Some(PALETTE[7]));
        // Non-flashing neighbour keeps its ink.
        assert_eq!(s.frame().pixel(8, 0), Some(PALETTE[2]));
    }

    #[test]
    fn draw_clears_previous_scene() {
        let mut s = MemoryScreen::new();
        Demo::Flash.draw(&mut s, 0);
        Demo::Lines.draw(&mut s, 0);
        assert_eq!(s.get_pixel(0, 0), 0);
        assert!(!Attr(s.attr(0, 0)).flash());
    }
}
