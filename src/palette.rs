// src/palette.rs

//! Construction of the generated xterm256 palette table.
//!
//! The 256-color terminal convention is 16 named ANSI colors (codes 0-15,
//! not generated here), a 6x6x6 RGB color cube, and a grayscale ramp. This
//! module builds the generated portion as one ordered sequence of
//! [`PALETTE_LEN`] entries, cube walk first and ramp second; entry `i` of
//! the sequence stands for terminal color code `CUBE_OFFSET + i`.

use log::{debug, trace};
use once_cell::sync::Lazy;

use crate::color::Rgb;

/// Channel intensity levels of the 6x6x6 color cube.
pub const CUBE_LEVELS: [u8; 6] = [0x00, 0x5f, 0x87, 0xaf, 0xd7, 0xff];

/// Side length of the color cube.
const CUBE_SIDE: usize = 6;

/// Number of entries in the emitted table, written as the same expression
/// the generated array declaration carries (codes 0x10 through 0xff).
pub const PALETTE_LEN: usize = 0xff - 0x10 + 0x01;

/// Number of grayscale ramp entries in the table.
pub const RAMP_LEN: usize = 23;

/// Number of cube-walk entries in the table.
///
/// One step longer than the 216-color cube itself: the walk runs once more
/// so that together with the ramp it fills all [`PALETTE_LEN`] slots. Every
/// index expression wraps to 0 on that step, so the extra entry is black.
pub const CUBE_WALK_LEN: usize = PALETTE_LEN - RAMP_LEN;

/// Terminal color code of the first table entry.
pub const CUBE_OFFSET: u8 = 0x10;

/// Enumerates the cube walk: [`CUBE_WALK_LEN`] colors in standard cube
/// order, red varying slowest and blue fastest.
///
/// For step `i`, each channel selects a level from [`CUBE_LEVELS`] by
/// `(i / 36) % 6`, `(i / 6) % 6` and `i % 6` for red, green and blue.
/// Steps `0..=215` are the 216 cube colors; step 216 wraps to black.
/// Returns a fresh, finite iterator on every call.
pub fn color_cube() -> impl Iterator<Item = Rgb> {
    (0..CUBE_WALK_LEN).map(|i| {
        let r = CUBE_LEVELS[(i / (CUBE_SIDE * CUBE_SIDE)) % CUBE_SIDE];
        let g = CUBE_LEVELS[(i / CUBE_SIDE) % CUBE_SIDE];
        let b = CUBE_LEVELS[i % CUBE_SIDE];
        Rgb::new(r, g, b)
    })
}

/// Enumerates the grayscale ramp: [`RAMP_LEN`] neutral colors of increasing
/// brightness, `v = 8 + 10 * i` for `i` in `1..=23` (18, 28, .., 238).
///
/// The conventional ramp has 24 steps starting at 8; here the table slot
/// before the ramp is taken by the wrapped cube entry, and the ramp starts
/// at 18. Returns a fresh, finite iterator on every call.
pub fn grayscale_ramp() -> impl Iterator<Item = Rgb> {
    (1..=RAMP_LEN).map(|i| Rgb::gray((8 + 10 * i) as u8))
}

/// Assembles the full generated palette: the cube walk followed by the
/// grayscale ramp, exactly [`PALETTE_LEN`] entries.
///
/// The sequence is rebuilt on every call; the lookup operations below use
/// a cached copy instead.
pub fn xterm256() -> Vec<Rgb> {
    let table: Vec<Rgb> = color_cube().chain(grayscale_ramp()).collect();
    debug!("assembled xterm256 table, {} entries", table.len());
    table
}

/// Cached assembled table for the lookup operations.
static TABLE: Lazy<Vec<Rgb>> = Lazy::new(xterm256);

/// Returns the terminal color code whose palette entry is nearest to
/// `color` by squared RGB distance.
///
/// The scan keeps the first strict minimum, so on exact duplicates the
/// lowest code wins: pure black maps to code 16, not to the wrapped cube
/// entry at 232. Codes range over `16..=255`.
pub fn nearest_code(color: Rgb) -> u8 {
    let mut best_index = 0usize;
    let mut best_dist = u32::MAX;

    for (i, entry) in TABLE.iter().enumerate() {
        let dist = color.distance_sq(*entry);
        if dist < best_dist {
            best_dist = dist;
            best_index = i;
        }
    }

    let code = CUBE_OFFSET + best_index as u8;
    trace!("nearest code for {:?} is {}", color, code);
    code
}

/// Maps an RGB gradient onto palette codes: entry `i` of `steps` is the
/// nearest code for the color at interpolation factor `i / (steps - 1)`.
///
/// A single-step gradient degenerates to the start color; zero steps yield
/// an empty sequence.
pub fn gradient_codes(start: Rgb, end: Rgb, steps: usize) -> Vec<u8> {
    let denom = steps.saturating_sub(1).max(1) as f64;
    (0..steps)
        .map(|i| nearest_code(start.lerp(end, i as f64 / denom)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds the 216 cube colors the straightforward way, as three nested
    /// channel loops, to cross-check the walk's index arithmetic.
    fn cube_by_nested_loops() -> Vec<Rgb> {
        let mut colors = Vec::with_capacity(216);
        for r in CUBE_LEVELS {
            for g in CUBE_LEVELS {
                for b in CUBE_LEVELS {
                    colors.push(Rgb::new(r, g, b));
                }
            }
        }
        colors
    }

    #[test]
    fn test_cube_walk_len() {
        assert_eq!(CUBE_WALK_LEN, 217);
        assert_eq!(color_cube().count(), CUBE_WALK_LEN);
    }

    #[test]
    fn test_cube_walk_covers_cube_in_order() {
        let walk: Vec<Rgb> = color_cube().collect();
        assert_eq!(&walk[..216], &cube_by_nested_loops()[..]);
    }

    #[test]
    fn test_cube_walk_final_step_wraps_to_black() {
        assert_eq!(color_cube().last(), Some(Rgb::BLACK));
    }

    #[test]
    fn test_cube_spot_values() {
        let walk: Vec<Rgb> = color_cube().collect();
        assert_eq!(walk[0], Rgb::BLACK);
        assert_eq!(walk[35], Rgb::new(0x00, 0xff, 0xff));
        assert_eq!(walk[215], Rgb::WHITE);
    }

    #[test]
    fn test_ramp_values() {
        let ramp: Vec<Rgb> = grayscale_ramp().collect();
        assert_eq!(ramp.len(), RAMP_LEN);
        for (i, c) in ramp.iter().enumerate() {
            assert_eq!(*c, Rgb::gray((18 + 10 * i) as u8));
        }
        assert_eq!(ramp.first(), Some(&Rgb::gray(0x12)));
        assert_eq!(ramp.last(), Some(&Rgb::gray(0xee)));
    }

    #[test_log::test]
    fn test_xterm256_has_full_length() {
        assert_eq!(PALETTE_LEN, 240);
        assert_eq!(xterm256().len(), PALETTE_LEN);
    }

    #[test]
    fn test_xterm256_is_cube_walk_then_ramp() {
        let table = xterm256();
        let cube: Vec<Rgb> = color_cube().collect();
        let ramp: Vec<Rgb> = grayscale_ramp().collect();
        assert_eq!(&table[..CUBE_WALK_LEN], &cube[..]);
        assert_eq!(&table[CUBE_WALK_LEN..], &ramp[..]);
    }

    #[test]
    fn test_nearest_code_maps_exact_entries_to_own_code() {
        // Codes for entries below the wrap agree with the xterm convention:
        // cyan is 51, red is 196, white is 231.
        assert_eq!(nearest_code(Rgb::new(0x00, 0xff, 0xff)), 51);
        assert_eq!(nearest_code(Rgb::new(0xff, 0x00, 0x00)), 196);
        assert_eq!(nearest_code(Rgb::WHITE), 231);
        assert_eq!(nearest_code(Rgb::gray(0xee)), 255);
    }

    #[test]
    fn test_nearest_code_duplicate_black_resolves_to_first() {
        // Black appears twice (cube entry 0 and the wrapped entry 216);
        // the scan keeps the first.
        assert_eq!(nearest_code(Rgb::BLACK), 16);
    }

    #[test]
    fn test_nearest_code_off_palette() {
        assert_eq!(nearest_code(Rgb::new(1, 1, 1)), 16);
        // (0x5e, 0x5f, 0x60) sits next to the cube entry (0x5f, 0x5f, 0x5f),
        // walk index 43.
        assert_eq!(nearest_code(Rgb::new(0x5e, 0x5f, 0x60)), 16 + 43);
    }

    #[test_log::test]
    fn test_gradient_codes_black_to_white() {
        let codes = gradient_codes(Rgb::BLACK, Rgb::WHITE, 128);
        assert_eq!(codes.len(), 128);
        assert_eq!(codes.first(), Some(&16));
        assert_eq!(codes.last(), Some(&231));
    }

    #[test]
    fn test_gradient_codes_degenerate_lengths() {
        assert!(gradient_codes(Rgb::BLACK, Rgb::WHITE, 0).is_empty());
        let red = Rgb::new(0xff, 0x00, 0x00);
        assert_eq!(gradient_codes(red, Rgb::BLACK, 1), vec![196]);
    }
}
