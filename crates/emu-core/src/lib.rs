//! Core traits and types shared by the screen verification crates.
//!
//! Components expose their state through [`Observable`] so harnesses can
//! inspect them without reaching into internals.

mod observable;

pub use observable::{Observable, Value, parse_number};
