//! CSS string forms of [`GridColor`].
//!
//! Output is always `rgba(R, G, B, A)` with 0–255 color channels and the
//! alpha unrounded. Input accepts `#RRGGBB` (with or without `#`),
//! `rgb(R, G, B)` and `rgba(R, G, B, A)`.
//!
//! [`css_to_grid_color`] never fails: unparsable text becomes
//! [`FALLBACK_COLOR`], a warning red, with the caller's fallback alpha.
//! Callers that need to detect bad input use [`GridColor::try_from_css`].
//!
//! ```
//! use zengrid::{GridColor, css_to_grid_color, grid_color_to_css};
//!
//! let red = GridColor::new(1.0, 0.0, 0.0, 0.5);
//! assert_eq!(grid_color_to_css(&red), "rgba(255, 0, 0, 0.5)");
//!
//! let fallback = css_to_grid_color("not-a-color", 0.1);
//! assert_eq!(fallback, GridColor::new(1.0, 0.2, 0.2, 0.1));
//! ```

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::config::GridColor;
use crate::math;

/// Alpha used for hex input and `rgb()` input without an alpha.
pub const DEFAULT_FALLBACK_ALPHA: f64 = 0.1;

/// Color for unparsable input. Its alpha is replaced by the fallback alpha.
pub const FALLBACK_COLOR: GridColor = GridColor {
    r: 1.0,
    g: 0.2,
    b: 0.2,
    a: DEFAULT_FALLBACK_ALPHA,
};

/// Error from strict CSS color parsing.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ParseColorError {
    #[error("empty color string")]
    Empty,
    #[error("invalid hex color {0:?}, expected #RRGGBB")]
    InvalidHex(String),
    #[error("expected 3 or 4 components in {0:?}")]
    WrongArity(String),
    #[error("invalid color component {0:?}")]
    InvalidComponent(String),
    #[error("unrecognized color {0:?}")]
    Unrecognized(String),
}

impl GridColor {
    /// `rgba(R, G, B, A)`.
    pub fn to_css(&self) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            to_byte(self.r),
            to_byte(self.g),
            to_byte(self.b),
            self.a
        )
    }

    /// `#rrggbb`, dropping alpha.
    pub fn to_hex(&self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}",
            to_byte(self.r),
            to_byte(self.g),
            to_byte(self.b)
        )
    }

    /// Parse a CSS color, reporting unparsable input.
    ///
    /// `fallback_alpha` is used when the text carries no alpha (hex, or
    /// `rgb()` with three components).
    pub fn try_from_css(text: &str, fallback_alpha: f64) -> Result<Self, ParseColorError> {
        let s = text.trim();
        if s.is_empty() {
            return Err(ParseColorError::Empty);
        }

        if let Some(args) = function_args(s, "rgba").or_else(|| function_args(s, "rgb")) {
            return parse_rgb_args(args, fallback_alpha);
        }

        let hex = s.strip_prefix('#').unwrap_or(s);
        match parse_hex(hex) {
            Some([r, g, b]) => Ok(Self::new(
                f64::from(r) / 255.0,
                f64::from(g) / 255.0,
                f64::from(b) / 255.0,
                fallback_alpha,
            )),
            None if s.starts_with('#') => Err(ParseColorError::InvalidHex(s.to_string())),
            None => Err(ParseColorError::Unrecognized(s.to_string())),
        }
    }
}

/// Free-function form of [`GridColor::to_css`].
pub fn grid_color_to_css(color: &GridColor) -> String {
    color.to_css()
}

/// [`css_to_grid_color`] with [`DEFAULT_FALLBACK_ALPHA`].
pub fn css_to_grid_color_default(text: &str) -> GridColor {
    css_to_grid_color(text, DEFAULT_FALLBACK_ALPHA)
}

/// Parse a CSS color, falling back to [`FALLBACK_COLOR`] with
/// `fallback_alpha` on any error.
///
/// Callers without an alpha preference pass [`DEFAULT_FALLBACK_ALPHA`] or
/// use [`css_to_grid_color_default`].
pub fn css_to_grid_color(text: &str, fallback_alpha: f64) -> GridColor {
    GridColor::try_from_css(text, fallback_alpha).unwrap_or_else(|err| {
        log::debug!("color {text:?} rejected ({err}), using fallback red");
        FALLBACK_COLOR.with_alpha(fallback_alpha)
    })
}

fn to_byte(channel: f64) -> u8 {
    // `as` saturates, so out-of-range channels pin to 0 or 255.
    math::round(channel * 255.0) as u8
}

/// Contents between the parentheses of `name(...)`, case-insensitive.
fn function_args<'a>(s: &'a str, name: &str) -> Option<&'a str> {
    let open = s.find('(')?;
    let (head, rest) = s.split_at(open);
    if !head.trim_end().eq_ignore_ascii_case(name) {
        return None;
    }
    rest[1..].strip_suffix(')')
}

fn parse_rgb_args(args: &str, fallback_alpha: f64) -> Result<GridColor, ParseColorError> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    if parts.len() != 3 && parts.len() != 4 {
        return Err(ParseColorError::WrongArity(args.to_string()));
    }

    let mut channels = [0.0; 3];
    for (slot, part) in channels.iter_mut().zip(&parts) {
        *slot = parse_component(part)? / 255.0;
    }
    let alpha = match parts.get(3) {
        Some(part) => parse_component(part)?,
        None => fallback_alpha,
    };

    let [r, g, b] = channels;
    Ok(GridColor::new(r, g, b, alpha))
}

fn parse_component(part: &str) -> Result<f64, ParseColorError> {
    part.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ParseColorError::InvalidComponent(part.to_string()))
}

fn parse_hex(hex: &str) -> Option<[u8; 3]> {
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    Some([
        parse_byte(&hex[0..2])?,
        parse_byte(&hex[2..4])?,
        parse_byte(&hex[4..6])?,
    ])
}

fn hex_val(ch: u8) -> Option<u8> {
    match ch {
        b'0'..=b'9' => Some(ch - b'0'),
        b'a'..=b'f' => Some(ch - b'a' + 10),
        b'A'..=b'F' => Some(ch - b'A' + 10),
        _ => None,
    }
}

fn parse_byte(s: &str) -> Option<u8> {
    let hi = hex_val(s.as_bytes()[0])?;
    let lo = hex_val(s.as_bytes()[1])?;
    Some(hi << 4 | lo)
}
