//! `.scr` screen dumps: the raw 6912 bytes at `$4000`.
//!
//! A 6144-byte file holds the bitmap only; attributes then default to white
//! ink on black paper.

use std::fmt;
use std::fs;
use std::path::Path;

use sinclair_screen::{MemoryScreen, PIXEL_BYTES, SCREEN_BYTES};

use crate::VerifyError;

/// Attribute used for bitmap-only dumps.
pub const DEFAULT_ATTR: u8 = 0x07;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrError {
    /// The dump is neither 6912 nor 6144 bytes.
    InvalidSize(usize),
}

impl fmt::Display for ScrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize(size) => write!(
                f,
                "invalid .scr size: {size} bytes (expected {SCREEN_BYTES} for a full screen or {PIXEL_BYTES} for pixels only)"
            ),
        }
    }
}

impl std::error::Error for ScrError {}

/// Build a screen from dump bytes.
///
/// # Errors
///
/// Returns [`ScrError::InvalidSize`] unless `data` is 6912 or 6144 bytes.
pub fn parse_scr(data: &[u8]) -> Result<MemoryScreen, ScrError> {
    let mut screen = MemoryScreen::new();
    match data.len() {
        SCREEN_BYTES => screen.load(data),
        PIXEL_BYTES => {
            screen.load(data);
            screen.fill_attrs(u32::from(DEFAULT_ATTR));
        }
        n => return Err(ScrError::InvalidSize(n)),
    }
    Ok(screen)
}

/// Read a dump from disk.
pub fn read_scr(path: &Path) -> Result<MemoryScreen, VerifyError> {
    let data = fs::read(path)?;
    let screen = parse_scr(&data)?;
    log::info!("Loaded {} ({} bytes)", path.display(), data.len());
    Ok(screen)
}

/// Write the full 6912-byte screen to disk.
pub fn write_scr(screen: &MemoryScreen, path: &Path) -> Result<(), VerifyError> {
    fs::write(path, screen.as_bytes())?;
    log::info!("Screen memory saved to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sinclair_screen::make_attr;

    #[test]
    fn full_dump_loads_verbatim() {
        let mut data = vec![0u8; SCREEN_BYTES];
        data[0] = 0x80;
        data[6144] = 0x39;
        let screen = parse_scr(&data).expect("valid dump");
        assert_eq!(screen.get_pixel(0, 0), 1);
        assert_eq!(screen.attr(0, 0), 0x39);
        assert_eq!(screen.as_bytes().as_slice(), data.as_slice());
    }

    #[test]
    fn pixel_only_dump_gets_default_attributes() {
        let data = vec![0xFFu8; PIXEL_BYTES];
        let screen = parse_scr(&data).expect("valid dump");
        assert_eq!(screen.get_pixel(255, 191), 1);
        assert_eq!(screen.attr(0, 0), DEFAULT_ATTR);
        assert_eq!(screen.attr(31, 23), DEFAULT_ATTR);
        assert_eq!(make_attr(7, 0, false, false), DEFAULT_ATTR);
    }

    #[test]
    fn other_sizes_are_rejected() {
        for size in [0, 768, 6143, 6913, 49_179] {
            assert_eq!(
                parse_scr(&vec![0; size]).err(),
                Some(ScrError::InvalidSize(size))
            );
        }
    }

    #[test]
    fn error_message_names_both_sizes() {
        let msg = ScrError::InvalidSize(100).to_string();
        assert!(msg.contains("100"));
        assert!(msg.contains("6912"));
        assert!(msg.contains("6144"));
    }
}
