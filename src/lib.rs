// src/lib.rs

//! Palette generator library crate.
//!
//! This exposes the palette model for testing and library usage: the `Rgb`
//! value type, construction of the generated portion of the xterm256
//! terminal palette, and the C header rendering used by the `palette-gen`
//! binary.

pub mod color;
pub mod header;
pub mod palette;
