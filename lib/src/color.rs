use std::fmt;

use serde::{Serialize, Deserialize};

/// A color in hue/saturation/lightness form: `h` in degrees `[0, 360)`, `s`
/// and `l` in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    pub const BLACK: Hsl = Hsl::new(0.0, 0.0, 0.0);

    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Hsl { h, s, l }
    }

    /// Converts to 8-bit sRGB channels, each rounded to the nearest integer.
    ///
    /// The hue is not wrapped: reduce it modulo 360 first.
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        let Hsl { h, s, l } = self;
        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = if h < 60.0 {
            (c, x, 0.0)
        } else if h < 120.0 {
            (x, c, 0.0)
        } else if h < 180.0 {
            (0.0, c, x)
        } else if h < 240.0 {
            (0.0, x, c)
        } else if h < 300.0 {
            (x, 0.0, c)
        } else {
            (c, 0.0, x)
        };

        let channel = |v: f64| ((v + m) * 255.0).round() as u8;
        (channel(r), channel(g), channel(b))
    }

    /// Renders as `#rrggbb` with lowercase hex digits.
    pub fn to_hex(self) -> String {
        let (r, g, b) = self.to_rgb8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s * 100.0, self.l * 100.0)
    }
}

/// Converts `h`, `s`, `l` to a `#rrggbb` string.
///
/// ```
/// use hueline::color::hsl_to_hex;
///
/// assert_eq!(hsl_to_hex(0.0, 0.0, 0.0), "#000000");
/// assert_eq!(hsl_to_hex(0.0, 1.0, 0.5), "#ff0000");
/// assert_eq!(hsl_to_hex(120.0, 1.0, 0.5), "#00ff00");
/// assert_eq!(hsl_to_hex(240.0, 1.0, 0.25), "#000080");
/// ```
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    Hsl::new(h, s, l).to_hex()
}
