//! Packed RGB colours.
//!
//! A [`Color`] doubles as the terrain classification key: every pixel of the
//! terrain raster is quantized to its 8-bit RGB triplet and packed into a
//! single `u32`, so lookups hash an integer instead of a formatted string.

use std::fmt;
use std::str::FromStr;

/// An RGB colour packed into a `u32` (0x00RRGGBB).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color(pub u32);

impl Color {
    pub const BLACK: Self = Self::from_rgb(0, 0, 0);
    pub const WHITE: Self = Self::from_rgb(255, 255, 255);
    pub const RED: Self = Self::from_rgb(255, 0, 0);

    /// Construct from individual RGB components.
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }

    /// Red component.
    #[inline]
    pub const fn r(self) -> u8 {
        ((self.0 >> 16) & 0xFF) as u8
    }

    /// Green component.
    #[inline]
    pub const fn g(self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }

    /// Blue component.
    #[inline]
    pub const fn b(self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    /// Components as an `[r, g, b]` triplet.
    #[inline]
    pub const fn to_array(self) -> [u8; 3] {
        [self.r(), self.g(), self.b()]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.r(), self.g(), self.b())
    }
}

/// Error returned when parsing a colour from an `"r,g,b"` string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseColorError(String);

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid colour \u{201c}{}\u{201d}: expected R,G,B with values 0-255", self.0)
    }
}

impl std::error::Error for ParseColorError {}

impl FromStr for Color {
    type Err = ParseColorError;

    /// Parse `"r,g,b"` (whitespace around components is allowed).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseColorError(s.to_string());
        let mut parts = s.split(',').map(|c| c.trim().parse::<u8>());
        let (Some(Ok(r)), Some(Ok(g)), Some(Ok(b)), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(err());
        };
        Ok(Self::from_rgb(r, g, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_components() {
        let c = Color::from_rgb(0xAB, 0xCD, 0xEF);
        assert_eq!(c.0, 0x00AB_CDEF);
        assert_eq!(c.r(), 0xAB);
        assert_eq!(c.g(), 0xCD);
        assert_eq!(c.b(), 0xEF);
        assert_eq!(c.to_array(), [0xAB, 0xCD, 0xEF]);
    }

    #[test]
    fn display_matches_legend_notation() {
        assert_eq!(Color::from_rgb(248, 148, 18).to_string(), "248,148,18");
    }

    #[test]
    fn parse_from_str() {
        assert_eq!("255,0,0".parse::<Color>(), Ok(Color::RED));
        assert_eq!(" 2, 208 ,60".parse::<Color>(), Ok(Color::from_rgb(2, 208, 60)));
        assert!("256,0,0".parse::<Color>().is_err());
        assert!("1,2".parse::<Color>().is_err());
        assert!("1,2,3,4".parse::<Color>().is_err());
        assert!("red".parse::<Color>().is_err());
    }
}
