// src/color.rs

//! Defines the `Rgb` color value and the channel arithmetic used by the
//! palette table operations.

/// An immutable triple of 8-bit color channels.
///
/// A palette entry has no identity beyond its channel values; its position
/// in the assembled table determines the terminal color code it stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0x00, 0x00, 0x00);
    pub const WHITE: Rgb = Rgb::new(0xff, 0xff, 0xff);

    /// Creates a color from its three channel values.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// Creates a neutral color with all three channels set to `v`.
    pub const fn gray(v: u8) -> Self {
        Rgb { r: v, g: v, b: v }
    }

    /// Squared Euclidean distance between two colors in RGB space.
    ///
    /// This is the metric the palette lookup minimizes; comparisons never
    /// need the square root.
    pub fn distance_sq(self, other: Rgb) -> u32 {
        let dr = i32::from(self.r) - i32::from(other.r);
        let dg = i32::from(self.g) - i32::from(other.g);
        let db = i32::from(self.b) - i32::from(other.b);
        (dr * dr + dg * dg + db * db) as u32
    }

    /// Linear interpolation towards `end`, channel by channel.
    ///
    /// `factor` is expected in `[0.0, 1.0]`. Each interpolated channel is
    /// truncated toward zero, the same conversion a C `double` to
    /// `unsigned char` assignment performs.
    pub fn lerp(self, end: Rgb, factor: f64) -> Rgb {
        Rgb {
            r: lerp_channel(self.r, end.r, factor),
            g: lerp_channel(self.g, end.g, factor),
            b: lerp_channel(self.b, end.b, factor),
        }
    }
}

fn lerp_channel(start: u8, end: u8, factor: f64) -> u8 {
    (f64::from(start) + (f64::from(end) - f64::from(start)) * factor) as u8
}
