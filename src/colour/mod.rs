//! # Colour
//!
//! A 24-bit packed RGB value, as used by chat-platform embeds for the
//! accent stripe along the side of a card.
//!
//! ## Representation
//!
//! A [`Colour`] wraps a single `u32` laid out as `0xRRGGBB`:
//! - **red**: bits 16–23
//! - **green**: bits 8–15
//! - **blue**: bits 0–7
//!
//! Equality, ordering and hashing are those of the packed integer.
//!
//! ## Out-of-range input
//!
//! None of the constructors reject input. Channels passed to
//! [`Colour::from_rgb`] are shifted into place and masked, so only the bits
//! that fit the channel survive: `256` becomes `0`, `-1` becomes `255`.
//! The fractional constructors truncate toward zero before doing the same.
//! This is deliberately *not* clamping, and callers that want clamping must
//! do it themselves.

mod convert;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const RED_MASK: u32 = 0x00FF_0000;
const GREEN_MASK: u32 = 0x0000_FF00;
const BLUE_MASK: u32 = 0x0000_00FF;
const PACKED_MASK: u32 = 0x00FF_FFFF;

fn shift(n: i32, mask: u32, bits: u32) -> u32 {
    (n << bits) as u32 & mask
}

fn unshift(n: u32, mask: u32, bits: u32) -> u8 {
    ((n & mask) >> bits) as u8
}

/// Immutable 24-bit RGB colour
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub struct Colour(u32);

impl Colour {
    pub const BLACK: Colour = Colour(0x0000_0000);
    pub const WHITE: Colour = Colour(PACKED_MASK);

    /// Creates a colour from a packed `0xRRGGBB` value.
    ///
    /// Bits above the low 24 are discarded.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value & PACKED_MASK)
    }

    /// The packed `0xRRGGBB` value
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Red channel
    #[must_use]
    pub fn r(self) -> u8 {
        unshift(self.0, RED_MASK, 16)
    }

    /// Green channel
    #[must_use]
    pub fn g(self) -> u8 {
        unshift(self.0, GREEN_MASK, 8)
    }

    /// Blue channel
    #[must_use]
    pub fn b(self) -> u8 {
        unshift(self.0, BLUE_MASK, 0)
    }

    /// Returns `(r, g, b)`, each in `[0, 255]`
    #[must_use]
    pub fn as_tuple(self) -> (u8, u8, u8) {
        (self.r(), self.g(), self.b())
    }

    /// Packs three channel values into a colour.
    ///
    /// Values outside `[0, 255]` are not rejected: each channel is shifted
    /// into place and masked, so `from_rgb(256, 0, 0)` is black and
    /// `from_rgb(-1, 0, 0)` is pure red.
    #[must_use]
    pub fn from_rgb(r: i32, g: i32, b: i32) -> Self {
        for (channel, value) in [("r", r), ("g", g), ("b", b)] {
            if !(0..=255).contains(&value) {
                debug!(channel, value, "channel outside [0, 255], truncating");
            }
        }

        Self(shift(r, RED_MASK, 16) | shift(g, GREEN_MASK, 8) | shift(b, BLUE_MASK, 0))
    }

    /// Same as [`Colour::from_rgb`] with channels given as fractions in `[0, 1]`.
    ///
    /// Each fraction is scaled by 255 and truncated toward zero, so `0.999`
    /// yields 254 rather than 255. Out-of-range results keep only their low
    /// eight bits, however large. NaN and infinities map to 0.
    #[must_use]
    pub fn from_rgb_float(r: f64, g: f64, b: f64) -> Self {
        Self::from_rgb(scale(r), scale(g), scale(b))
    }

    /// Creates a colour from HSV coordinates, each in `[0, 255]`
    #[must_use]
    pub fn from_hsv(hue: i32, sat: i32, val: i32) -> Self {
        let (r, g, b) = convert::hsv_to_rgb(fraction(hue), fraction(sat), fraction(val));
        Self::from_rgb_float(r, g, b)
    }

    /// Creates a colour from HLS coordinates, each in `[0, 255]`.
    ///
    /// Note the order: hue, lightness, then saturation.
    #[must_use]
    pub fn from_hls(hue: i32, light: i32, sat: i32) -> Self {
        let (r, g, b) = convert::hls_to_rgb(fraction(hue), fraction(light), fraction(sat));
        Self::from_rgb_float(r, g, b)
    }
}

// Reduced modulo the channel width before narrowing so huge values wrap
// instead of saturating at the i32 bounds.
fn scale(fraction: f64) -> i32 {
    (fraction * 255.0).trunc().rem_euclid(256.0) as i32
}

fn fraction(n: i32) -> f64 {
    f64::from(n) / 255.0
}

impl From<u32> for Colour {
    fn from(value: u32) -> Self {
        Self::new(value)
    }
}

impl From<Colour> for u32 {
    fn from(colour: Colour) -> Self {
        colour.0
    }
}

impl fmt::Debug for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Colour({})", self.0)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

/// Error returned when parsing a colour from a hex string fails
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColourError {
    #[error("expected 6 hex digits, found {0}")]
    InvalidLength(usize),
    #[error("invalid hex digit in {0:?}")]
    InvalidDigit(String),
}

impl FromStr for Colour {
    type Err = ParseColourError;

    /// Parses `#rrggbb` or `rrggbb`, in either case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').unwrap_or(s);

        if digits.len() != 6 {
            return Err(ParseColourError::InvalidLength(digits.len()));
        }
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseColourError::InvalidDigit(s.to_string()));
        }

        u32::from_str_radix(digits, 16)
            .map(Self::new)
            .map_err(|_| ParseColourError::InvalidDigit(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels_are_extracted_from_packed_value() {
        let colour = Colour::new(0x12_34_56);
        assert_eq!(colour.r(), 0x12);
        assert_eq!(colour.g(), 0x34);
        assert_eq!(colour.b(), 0x56);
        assert_eq!(colour.as_tuple(), (0x12, 0x34, 0x56));
    }

    #[test]
    fn unpack_then_repack_is_identity() {
        for packed in (0..=PACKED_MASK).step_by(997).chain([0, PACKED_MASK]) {
            let colour = Colour::new(packed);
            let (r, g, b) = colour.as_tuple();
            let repacked = Colour::from_rgb(i32::from(r), i32::from(g), i32::from(b));
            assert_eq!(repacked.value(), packed);
        }
    }

    #[test]
    fn rgb_channels_survive_packing() {
        for (r, g, b) in [(0, 0, 0), (255, 255, 255), (1, 128, 254), (200, 3, 77)] {
            let colour = Colour::from_rgb(r, g, b);
            assert_eq!(colour.as_tuple(), (r as u8, g as u8, b as u8));
        }
    }

    #[test]
    fn new_discards_bits_above_24() {
        assert_eq!(Colour::new(0x1FF_FFFF).value(), 0xFF_FFFF);
        assert_eq!(Colour::from(0xAB00_0001).value(), 0x1);
    }

    #[test]
    fn out_of_range_channels_are_masked_not_clamped() {
        assert_eq!(Colour::from_rgb(256, 0, 0).r(), 0);
        assert_eq!(Colour::from_rgb(256, 0, 0).value(), 0);
        assert_eq!(Colour::from_rgb(-1, 0, 0).value(), 0xFF_0000);
        assert_eq!(Colour::from_rgb(0, 300, 0).value(), 0x2C00);
        assert_eq!(Colour::from_rgb(0, 0, -2).value(), 0xFE);
    }

    #[test]
    fn float_channels_truncate_toward_zero() {
        assert_eq!(Colour::from_rgb_float(1.0, 0.5, 0.0).value(), 0xFF_7F00);
        assert_eq!(Colour::from_rgb_float(0.999, 0.001, 0.5).value(), 0xFE_007F);
        assert_eq!(Colour::from_rgb_float(f64::NAN, 0.0, 0.0), Colour::BLACK);
    }

    #[test]
    fn out_of_range_fractions_are_masked_not_clamped() {
        assert_eq!(Colour::from_rgb_float(1.5, 0.0, 0.0).value(), 0x7E_0000);
        assert_eq!(Colour::from_rgb_float(-0.5, 0.0, 0.0).value(), 0x81_0000);
        assert_eq!(Colour::from_rgb_float(0.0, 2.0, 0.0).value(), 0x00_FE00);
        assert_eq!(Colour::from_rgb_float(1e10, 0.0, 0.0), Colour::BLACK);
        assert_eq!(Colour::from_rgb_float(-1e10, 0.0, 1.0).value(), 0x00_00FF);
    }

    #[test]
    fn infinite_fractions_map_to_zero() {
        assert_eq!(Colour::from_rgb_float(f64::INFINITY, 0.0, 0.0), Colour::BLACK);
        assert_eq!(Colour::from_rgb_float(1.0, f64::NEG_INFINITY, 1.0).value(), 0xFF_00FF);
    }

    #[test]
    fn hsv_constructor() {
        assert_eq!(Colour::from_hsv(0, 0, 255).as_tuple(), (255, 255, 255));
        assert_eq!(Colour::from_hsv(0, 255, 255).value(), 0xFF_0000);
        assert_eq!(Colour::from_hsv(85, 255, 255).value(), 0x00_FF00);
        assert_eq!(Colour::from_hsv(170, 255, 255).value(), 0x00_00FF);
        assert_eq!(Colour::from_hsv(255, 255, 255).value(), 0xFF_0000);
        assert_eq!(Colour::from_hsv(43, 200, 180).value(), 0xB2_B426);
        assert_eq!(Colour::from_hsv(128, 128, 128).value(), 0x3F_7F80);
    }

    #[test]
    fn hls_constructor() {
        assert_eq!(Colour::from_hls(0, 0, 0), Colour::BLACK);
        assert_eq!(Colour::from_hls(0, 255, 0), Colour::WHITE);
        assert_eq!(Colour::from_hls(0, 128, 255).value(), 0xFF_0000);
        assert_eq!(Colour::from_hls(85, 128, 255).value(), 0x00_FF00);
        assert_eq!(Colour::from_hls(43, 100, 200).value(), 0xB0_B215);
        assert_eq!(Colour::from_hls(200, 60, 30).value(), 0x3E_3443);
    }

    #[test]
    fn display_is_zero_padded_lowercase_hex() {
        assert_eq!(Colour::new(255).to_string(), "#0000ff");
        assert_eq!(Colour::new(0xFF_FFFF).to_string(), "#ffffff");
        assert_eq!(Colour::BLACK.to_string(), "#000000");
        assert_eq!(Colour::new(0xAB_CDEF).to_string(), "#abcdef");
    }

    #[test]
    fn debug_shows_packed_value() {
        assert_eq!(format!("{:?}", Colour::new(255)), "Colour(255)");
    }

    #[test]
    fn ordering_follows_packed_value() {
        let mut colours = vec![Colour::WHITE, Colour::new(0x10), Colour::BLACK];
        colours.sort();
        assert_eq!(colours, vec![Colour::BLACK, Colour::new(0x10), Colour::WHITE]);
    }

    #[test]
    fn parses_display_output() {
        let colour = Colour::new(0x58_65F2);
        assert_eq!(colour.to_string().parse::<Colour>(), Ok(colour));
        assert_eq!("5865F2".parse::<Colour>(), Ok(colour));
    }

    #[test]
    fn rejects_malformed_hex() {
        assert_eq!("#fff".parse::<Colour>(), Err(ParseColourError::InvalidLength(3)));
        assert_eq!(
            "#+fffff".parse::<Colour>(),
            Err(ParseColourError::InvalidDigit("#+fffff".to_string()))
        );
        assert!("#gg0000".parse::<Colour>().is_err());
    }

    #[test]
    fn serializes_as_packed_integer() {
        let colour = Colour::new(0x58_65F2);
        assert_eq!(serde_json::to_string(&colour).unwrap(), "5793266");
        assert_eq!(serde_json::from_str::<Colour>("5793266").unwrap(), colour);
    }
}
