//! RGB color parsing and formatting.
//!
//! Scheme files spell colors as six hex digits with an optional leading `#`
//! (`"2b303b"` or `"#2B303B"`). [`Rgb::parse`] accepts exactly that and
//! nothing else: no 3-digit shorthand, no named colors.
//!
//! Formatting never fails and covers every representation templates consume:
//!
//! | Method | Example (`#ff8000`) |
//! |--------|---------------------|
//! | [`Rgb::hex`] | `ff8000` |
//! | [`Rgb::hex_bgr`] | `0080ff` |
//! | [`channel_hex`] | `ff`, `80`, `00` |
//! | [`channel_decimal`] | `1`, `0.5019608`, `0` |

use std::fmt;
use std::str::FromStr;

/// Error returned when a color string is not 6 hex digits.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("color {0:?} is not formatted correctly (expected 6 hex digits)")]
pub struct InvalidColorFormat(pub String);

/// A 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `rrggbb` or `#rrggbb`, case-insensitively.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tintforge::Rgb;
    ///
    /// assert_eq!(Rgb::parse("#FF8000").unwrap(), Rgb::new(255, 128, 0));
    /// assert!(Rgb::parse("fff").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, InvalidColorFormat> {
        let hex = input.strip_prefix('#').unwrap_or(input);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(InvalidColorFormat(input.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| InvalidColorFormat(input.to_string()))
        };

        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Lowercase `rrggbb`.
    pub fn hex(&self) -> String {
        format!("{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Lowercase `bbggrr`, for formats that store colors channel-reversed.
    pub fn hex_bgr(&self) -> String {
        format!("{:02x}{:02x}{:02x}", self.b, self.g, self.r)
    }

    /// The channels in `[r, g, b]` order.
    pub fn channels(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

/// Two lowercase hex digits for a single channel.
pub fn channel_hex(value: u8) -> String {
    format!("{:02x}", value)
}

/// A channel as a fraction of 255, computed in single precision.
pub fn channel_decimal(value: u8) -> f32 {
    f32::from(value) / 255.0
}

impl FromStr for Rgb {
    type Err = InvalidColorFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_plain_hex() {
        assert_eq!(Rgb::parse("2b303b").unwrap(), Rgb::new(0x2b, 0x30, 0x3b));
    }

    #[test]
    fn test_parse_with_hash_and_uppercase() {
        assert_eq!(Rgb::parse("#EBCB8B").unwrap(), Rgb::new(0xeb, 0xcb, 0x8b));
    }

    #[test]
    fn test_parse_rejects_short_hex() {
        let err = Rgb::parse("#fff").unwrap_err();
        assert_eq!(err, InvalidColorFormat("#fff".to_string()));
    }

    #[test]
    fn test_parse_rejects_non_hex() {
        assert!(Rgb::parse("zzzzzz").is_err());
        assert!(Rgb::parse("12345g").is_err());
        assert!(Rgb::parse("##123456").is_err());
        assert!(Rgb::parse("").is_err());
    }

    #[test]
    fn test_parse_rejects_multibyte_input() {
        // Six bytes, but not six hex digits.
        assert!(Rgb::parse("ééé").is_err());
    }

    #[test]
    fn test_hex_bgr_reverses_channels() {
        let color = Rgb::new(0x11, 0x22, 0x33);
        assert_eq!(color.hex(), "112233");
        assert_eq!(color.hex_bgr(), "332211");
    }

    #[test]
    fn test_channel_hex_is_zero_padded() {
        assert_eq!(channel_hex(0), "00");
        assert_eq!(channel_hex(10), "0a");
        assert_eq!(channel_hex(255), "ff");
    }

    #[test]
    fn test_channel_decimal() {
        assert_eq!(channel_decimal(0), 0.0);
        assert_eq!(channel_decimal(255), 1.0);
        assert_eq!(channel_decimal(51), 0.2);
    }

    #[test]
    fn test_display_uses_hash_prefix() {
        assert_eq!(Rgb::new(255, 128, 0).to_string(), "#ff8000");
    }

    proptest! {
        #[test]
        fn test_hex_round_trips(s in "#?[0-9a-fA-F]{6}") {
            let parsed = Rgb::parse(&s).unwrap();
            prop_assert_eq!(parsed.hex(), s.trim_start_matches('#').to_lowercase());
        }
    }
}
