//! Display sinks: where rendered frames go.

use std::fs;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use sinclair_screen::Frame;

use crate::VerifyError;

/// Receives each rendered 256x192 frame. Scaling, if any, is the sink's
/// business; the frame passed in is never modified.
pub trait DisplaySink {
    fn present(&mut self, frame: &Frame) -> Result<(), VerifyError>;
}

/// Encode a frame as an RGBA PNG, upscaled by `scale`.
pub fn save_png(frame: &Frame, scale: u32, path: &Path) -> Result<(), VerifyError> {
    let scaled;
    let out = if scale > 1 {
        scaled = frame.scaled(scale);
        &scaled
    } else {
        frame
    };

    let file = fs::File::create(path)?;
    let w = BufWriter::new(file);
    let mut encoder = png::Encoder::new(w, out.width(), out.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(out.as_bytes())?;
    Ok(())
}

/// Writes every presented frame to the same PNG file; the file ends up
/// holding the last one.
pub struct PngSink {
    path: PathBuf,
    scale: u32,
}

impl PngSink {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, scale: u32) -> Self {
        Self {
            path: path.into(),
            scale,
        }
    }
}

impl DisplaySink for PngSink {
    fn present(&mut self, frame: &Frame) -> Result<(), VerifyError> {
        save_png(frame, self.scale, &self.path)?;
        log::info!("Screenshot saved to {}", self.path.display());
        Ok(())
    }
}

/// Writes numbered PNGs (`000001.png`, `000002.png`, ...) into a directory.
pub struct SequenceSink {
    dir: PathBuf,
    scale: u32,
    next: u32,
}

impl SequenceSink {
    /// Create the sink, making the directory if needed.
    pub fn new(dir: impl Into<PathBuf>, scale: u32) -> Result<Self, VerifyError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self {
            dir,
            scale,
            next: 1,
        })
    }

    /// Frames written so far.
    #[must_use]
    pub fn written(&self) -> u32 {
        self.next - 1
    }
}

impl DisplaySink for SequenceSink {
    fn present(&mut self, frame: &Frame) -> Result<(), VerifyError> {
        let path = self.dir.join(format!("{:06}.png", self.next));
        save_png(frame, self.scale, &path)?;
        log::debug!("Frame {} written to {}", self.next, path.display());
        self.next += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("zx-verify-sink-{name}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).expect("create temp dir");
        dir
    }

    fn png_size(path: &Path) -> (u32, u32) {
        let decoder = png::Decoder::new(fs::File::open(path).expect("open png"));
        let reader = decoder.read_info().expect("png header");
        let info = reader.info();
        (info.width, info.height)
    }

    #[test]
    fn png_sink_scales_output() {
        let dir = temp_dir("png");
        let path = dir.join("shot.png");
        let mut sink = PngSink::new(&path, 3);
        sink.present(&Frame::new()).expect("write png");
        assert_eq!(png_size(&path), (768, 576));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn unscaled_png_is_native_size() {
        let dir = temp_dir("native");
        let path = dir.join("shot.png");
        save_png(&Frame::new(), 1, &path).expect("write png");
        assert_eq!(png_size(&path), (256, 192));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn sequence_sink_numbers_frames() {
        let dir = temp_dir("seq");
        let mut sink = SequenceSink::new(dir.join("frames"), 1).expect("create sink");
        let frame = Frame::new();
        for _ in 0..3 {
            sink.present(&frame).expect("write frame");
        }
        assert_eq!(sink.written(), 3);
        assert!(dir.join("frames/000001.png").exists());
        assert!(dir.join("frames/000003.png").exists());
        assert!(!dir.join("frames/000004.png").exists());
        let _ = fs::remove_dir_all(&dir);
    }
}
