//! Harness for checking Spectrum screen routines by eye and by byte.
//!
//! Draws demo scenes (or loads a `.scr` dump) into a
//! [`sinclair_screen::MemoryScreen`], renders frames, and hands them to a
//! [`DisplaySink`]: PNG files for headless runs, a window with the `native`
//! feature.

pub mod config;
pub mod demo;
mod error;
pub mod info;
pub mod listing;
pub mod preview;
mod run;
pub mod scr;
pub mod sink;
#[cfg(feature = "native")]
pub mod window;

pub use config::{Command, VerifyConfig, parse_args};
pub use demo::Demo;
pub use error::VerifyError;
pub use info::ScreenInfo;
pub use preview::{Preview, ansi_preview};
pub use run::run;
pub use scr::ScrError;
pub use sink::{DisplaySink, PngSink, SequenceSink};
