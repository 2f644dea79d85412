//! Harness error type.

use std::fmt;
use std::io;

use crate::scr::ScrError;

#[derive(Debug)]
pub enum VerifyError {
    /// Reading or writing a file failed.
    Io(io::Error),
    /// PNG encoding failed.
    Png(png::EncodingError),
    /// JSON report serialisation failed.
    Json(serde_json::Error),
    /// A screen dump had the wrong shape.
    Scr(ScrError),
    /// Bad command-line arguments.
    Usage(String),
    /// The window or its surface could not be created.
    Window(String),
}

impl fmt::Display for VerifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Png(e) => write!(f, "PNG error: {e}"),
            Self::Json(e) => write!(f, "JSON error: {e}"),
            Self::Scr(e) => write!(f, "{e}"),
            Self::Usage(msg) => write!(f, "{msg}"),
            Self::Window(msg) => write!(f, "window error: {msg}"),
        }
    }
}

impl std::error::Error for VerifyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Png(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::Scr(e) => Some(e),
            Self::Usage(_) | Self::Window(_) => None,
        }
    }
}

impl From<io::Error> for VerifyError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<png::EncodingError> for VerifyError {
    fn from(e: png::EncodingError) -> Self {
        Self::Png(e)
    }
}

impl From<serde_json::Error> for VerifyError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl From<ScrError> for VerifyError {
    fn from(e: ScrError) -> Self {
        Self::Scr(e)
    }
}
