//! Aspect ratio parsing, frame seeding and naming.
//!
//! Ratios are written `W:H`. Besides plain numbers, each side accepts the
//! symbolic tokens `√2` (ISO 216 paper) and `φ` (golden ratio); the decimal
//! spellings `1.414` and `1.618` are treated as the same symbols.
//!
//! Parsing for frame seeding is lenient: anything unparsable resolves to
//! 4:3 instead of failing, so bad preset or detection text never reaches
//! the user as an error. Use [`AspectRatio::from_str`](core::str::FromStr)
//! when the caller needs to know the input was rejected.
//!
//! ```
//! use zengrid::{FrameSize, aspect_ratio_name, parse_aspect_ratio};
//!
//! assert_eq!(parse_aspect_ratio("1:φ"), FrameSize::new(800.0, 1294.0));
//! assert_eq!(parse_aspect_ratio("bogus"), FrameSize::new(800.0, 600.0));
//!
//! assert_eq!(aspect_ratio_name(1.778), "16:9");
//! assert_eq!(aspect_ratio_name(0.667), "2:3");
//! ```

use alloc::format;
use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

use crate::math;

/// Width used to seed frame dimensions when the caller gives none.
pub const DEFAULT_BASE_WIDTH: f64 = 800.0;
/// Maximum distance from a [`NAMED_RATIOS`] entry that still matches it.
pub const DEFAULT_RATIO_TOLERANCE: f64 = 0.05;
/// Maximum distance from a simple `a:b` fraction that still matches it.
pub const FRACTION_TOLERANCE: f64 = 0.02;
/// Largest denominator tried when looking for a simple fraction.
pub const MAX_FRACTION_DENOMINATOR: u32 = 20;

/// φ, the golden ratio.
pub const GOLDEN_RATIO: f64 = 1.618_033_988_749_895;
/// √2, the ISO 216 paper ratio.
pub const ISO_RATIO: f64 = core::f64::consts::SQRT_2;

/// Frame dimensions in pixels.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameSize {
    pub width: f64,
    pub height: f64,
}

impl FrameSize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// `width / height`, or 1 for a zero height.
    pub fn aspect_ratio(&self) -> f64 {
        calculate_aspect_ratio(self.width, self.height)
    }

    /// Human-readable ratio name, e.g. `"16:9"`.
    pub fn aspect_ratio_name(&self) -> String {
        aspect_ratio_name(self.aspect_ratio())
    }
}

/// One side of a `W:H` ratio.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RatioTerm {
    Number(f64),
    /// `√2`, also written `1.414`.
    Sqrt2,
    /// `φ`, also written `1.618`.
    Phi,
}

impl RatioTerm {
    pub const fn value(self) -> f64 {
        match self {
            Self::Number(v) => v,
            Self::Sqrt2 => ISO_RATIO,
            Self::Phi => GOLDEN_RATIO,
        }
    }

    fn parse(s: &str) -> Result<Self, ParseRatioError> {
        let s = s.trim();
        match s {
            "√2" | "1.414" => return Ok(Self::Sqrt2),
            "φ" | "1.618" => return Ok(Self::Phi),
            _ => {}
        }
        let v: f64 = s
            .parse()
            .map_err(|_| ParseRatioError::InvalidTerm(s.to_string()))?;
        if !v.is_finite() || v <= 0.0 {
            return Err(ParseRatioError::NonPositiveTerm(s.to_string()));
        }
        Ok(Self::Number(v))
    }
}

impl fmt::Display for RatioTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(v) => write!(f, "{v}"),
            Self::Sqrt2 => f.write_str("√2"),
            Self::Phi => f.write_str("φ"),
        }
    }
}

/// Error from strict aspect ratio parsing.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ParseRatioError {
    #[error("aspect ratio must be written as W:H")]
    MissingSeparator,
    #[error("invalid aspect ratio term {0:?}")]
    InvalidTerm(String),
    #[error("aspect ratio term {0:?} must be a positive number")]
    NonPositiveTerm(String),
}

/// A `W:H` aspect ratio.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AspectRatio {
    pub width: RatioTerm,
    pub height: RatioTerm,
}

impl AspectRatio {
    /// The ratio unparsable input resolves to.
    pub const FALLBACK: Self = Self::new(RatioTerm::Number(4.0), RatioTerm::Number(3.0));

    pub const fn new(width: RatioTerm, height: RatioTerm) -> Self {
        Self { width, height }
    }

    /// Parse `text`, resolving anything unparsable to [`Self::FALLBACK`].
    pub fn parse_or_fallback(text: &str) -> Self {
        match text.parse() {
            Ok(ratio) => ratio,
            Err(err) => {
                log::debug!("aspect ratio {text:?} rejected ({err}), using 4:3");
                Self::FALLBACK
            }
        }
    }

    /// `width / height`.
    pub fn value(&self) -> f64 {
        self.width.value() / self.height.value()
    }

    /// Frame of `base_width` with the height rounded to a whole pixel.
    pub fn frame(&self, base_width: f64) -> FrameSize {
        let height = math::round(base_width * self.height.value() / self.width.value());
        FrameSize::new(base_width, height)
    }
}

impl FromStr for AspectRatio {
    type Err = ParseRatioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (w, h) = s.split_once(':').ok_or(ParseRatioError::MissingSeparator)?;
        if h.contains(':') {
            return Err(ParseRatioError::InvalidTerm(h.trim().to_string()));
        }
        Ok(Self::new(RatioTerm::parse(w)?, RatioTerm::parse(h)?))
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.width, self.height)
    }
}

/// Frame dimensions for a ratio expression at [`DEFAULT_BASE_WIDTH`].
pub fn parse_aspect_ratio(text: &str) -> FrameSize {
    parse_aspect_ratio_with_base(text, DEFAULT_BASE_WIDTH)
}

/// Frame dimensions for a ratio expression at `base_width`.
///
/// Unparsable input yields a 4:3 frame.
pub fn parse_aspect_ratio_with_base(text: &str, base_width: f64) -> FrameSize {
    AspectRatio::parse_or_fallback(text).frame(base_width)
}

/// `width / height`; 1 when `height` is zero.
pub fn calculate_aspect_ratio(width: f64, height: f64) -> f64 {
    if height == 0.0 {
        return 1.0;
    }
    width / height
}

/// A well-known ratio, stored in landscape orientation (`long:short`).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NamedRatio {
    pub name: &'static str,
    pub long: RatioTerm,
    pub short: RatioTerm,
    /// `long / short`, always ≥ 1.
    pub ratio: f64,
}

impl NamedRatio {
    /// `long:short` for landscape, `short:long` for portrait.
    pub fn label(&self, portrait: bool) -> String {
        if portrait {
            format!("{}:{}", self.short, self.long)
        } else {
            format!("{}:{}", self.long, self.short)
        }
    }
}

const fn named(name: &'static str, long: RatioTerm, short: RatioTerm, ratio: f64) -> NamedRatio {
    NamedRatio {
        name,
        long,
        short,
        ratio,
    }
}

/// Known ratios, matched in order. The first entry within tolerance wins,
/// even if a later one is closer.
pub const NAMED_RATIOS: &[NamedRatio] = &[
    named("Square", RatioTerm::Number(1.0), RatioTerm::Number(1.0), 1.0),
    named("Golden Ratio", RatioTerm::Phi, RatioTerm::Number(1.0), GOLDEN_RATIO),
    named("ISO 216", RatioTerm::Sqrt2, RatioTerm::Number(1.0), ISO_RATIO),
    named("Classic Photo", RatioTerm::Number(3.0), RatioTerm::Number(2.0), 1.5),
    named("Standard", RatioTerm::Number(4.0), RatioTerm::Number(3.0), 4.0 / 3.0),
    named("Widescreen", RatioTerm::Number(16.0), RatioTerm::Number(9.0), 16.0 / 9.0),
    named("Cinema", RatioTerm::Number(2.35), RatioTerm::Number(1.0), 2.35),
    named("US Letter", RatioTerm::Number(11.0), RatioTerm::Number(8.5), 11.0 / 8.5),
];

/// First [`NAMED_RATIOS`] entry within `tolerance` of `ratio`, in either
/// orientation.
pub fn match_named_ratio(ratio: f64, tolerance: f64) -> Option<&'static NamedRatio> {
    let (normalized, _) = normalize(ratio)?;
    NAMED_RATIOS
        .iter()
        .find(|n| math::abs(normalized - n.ratio) < tolerance)
}

/// Name for `ratio` using [`DEFAULT_RATIO_TOLERANCE`].
///
/// Landscape symbolic ratios print symbol first (`1.618` → `"φ:1"`,
/// `1.414` → `"√2:1"`); the `"1:φ"` and `"1:√2"` spellings name the
/// portrait ratios `0.618` and `0.707`.
pub fn aspect_ratio_name(ratio: f64) -> String {
    aspect_ratio_name_with_tolerance(ratio, DEFAULT_RATIO_TOLERANCE)
}

/// Name for `ratio`: a known ratio, else the simplest close fraction, else
/// the ratio to two decimals.
///
/// Portrait ratios (`< 1`) are named short side first (`0.667` → `"2:3"`).
pub fn aspect_ratio_name_with_tolerance(ratio: f64, tolerance: f64) -> String {
    let Some((normalized, portrait)) = normalize(ratio) else {
        return format!("{ratio:.2}");
    };

    if let Some(named) = NAMED_RATIOS
        .iter()
        .find(|n| math::abs(normalized - n.ratio) < tolerance)
    {
        return named.label(portrait);
    }

    match simplest_fraction(normalized) {
        Some((a, b)) if portrait => format!("{b}:{a}"),
        Some((a, b)) => format!("{a}:{b}"),
        None => format!("{ratio:.2}"),
    }
}

/// Flip portrait ratios to ≥ 1. `None` for zero, negative or non-finite input.
fn normalize(ratio: f64) -> Option<(f64, bool)> {
    if !ratio.is_finite() || ratio <= 0.0 {
        return None;
    }
    if ratio < 1.0 {
        Some((1.0 / ratio, true))
    } else {
        Some((ratio, false))
    }
}

/// Smallest-denominator `a/b` within [`FRACTION_TOLERANCE`] of `x`.
fn simplest_fraction(x: f64) -> Option<(u64, u32)> {
    (1..=MAX_FRACTION_DENOMINATOR).find_map(|b| {
        let a = math::round(x * f64::from(b));
        let close = a >= 1.0 && math::abs(a / f64::from(b) - x) < FRACTION_TOLERANCE;
        close.then_some((a as u64, b))
    })
}
