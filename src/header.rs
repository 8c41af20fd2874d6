// src/header.rs

//! Renders the assembled palette as a C header fragment.
//!
//! The output is an array initializer for the consuming program's
//! `union rgb_c` type: a generated-file comment, a declaration sized by the
//! same `0xff - 0x10 + 0x01` expression the table length uses, one
//! tab-indented entry line per color, and the closing brace. The emitted
//! bytes are identical on every run.

use std::io::Write;

use anyhow::Result;
use log::{debug, warn};

use crate::color::Rgb;
use crate::palette::PALETTE_LEN;

/// Writes the complete header fragment for `colors` to `out`.
///
/// One entry line is emitted per color, in sequence order. Channel order
/// within an entry is blue, green, red (the initializer layout the
/// consuming declaration expects), each channel a two-digit uppercase hex
/// byte. The declaration always names `0xff - 0x10 + 0x01` entries, so
/// callers are expected to pass the full assembled table.
pub fn render<W: Write>(out: &mut W, colors: &[Rgb]) -> Result<()> {
    if colors.len() != PALETTE_LEN {
        warn!(
            "header declares {} entries but {} were provided",
            PALETTE_LEN,
            colors.len()
        );
    }

    writeln!(out, "/* GENERATED HEADER FILE */")?;
    writeln!(out, "union rgb_c xterm256Palette[0xff - 0x10 + 0x01] = {{")?;
    for color in colors {
        writeln!(
            out,
            "\t{{0x{:02X}, 0x{:02X}, 0x{:02X}}},",
            color.b, color.g, color.r
        )?;
    }
    writeln!(out, "}};")?;

    debug!("rendered {} palette entries", colors.len());
    Ok(())
}
