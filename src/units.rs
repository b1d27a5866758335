//! Pixel and percent conversion.
//!
//! Gutters and margins are stored either in absolute pixels or as a
//! percentage of the frame dimension they divide. Everything downstream
//! works in pixels; these helpers resolve the stored value.

/// Unit of a gutter or margin value.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GridUnit {
    /// Absolute pixels.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "px"))]
    Pixels,
    /// Percentage (`0..=100`) of the frame dimension.
    #[cfg_attr(feature = "serde", serde(rename = "%"))]
    Percent,
}

impl GridUnit {
    /// Resolve `value` in this unit to pixels against `total_size`.
    pub fn to_pixels(self, value: f64, total_size: f64) -> f64 {
        match self {
            Self::Pixels => value,
            Self::Percent => percent_to_pixels(value, total_size),
        }
    }

    /// Express `pixels` in this unit relative to `total_size`.
    pub fn from_pixels(self, pixels: f64, total_size: f64) -> f64 {
        match self {
            Self::Pixels => pixels,
            Self::Percent => pixels_to_percent(pixels, total_size),
        }
    }

    /// Whether values in this unit depend on the frame size.
    pub fn is_relative(self) -> bool {
        matches!(self, Self::Percent)
    }
}

/// `percent` of `total_size`, in pixels.
pub fn percent_to_pixels(percent: f64, total_size: f64) -> f64 {
    percent / 100.0 * total_size
}

/// `pixels` as a percentage of `total_size`. Returns 0 for a zero total.
pub fn pixels_to_percent(pixels: f64, total_size: f64) -> f64 {
    if total_size == 0.0 {
        return 0.0;
    }
    pixels / total_size * 100.0
}

/// Free-function form of [`GridUnit::to_pixels`].
pub fn to_pixels(value: f64, unit: GridUnit, total_size: f64) -> f64 {
    unit.to_pixels(value, total_size)
}

/// Free-function form of [`GridUnit::from_pixels`].
pub fn from_pixels(pixels: f64, unit: GridUnit, total_size: f64) -> f64 {
    unit.from_pixels(pixels, total_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_to_pixels_basic() {
        assert_eq!(percent_to_pixels(50.0, 1000.0), 500.0);
        assert_eq!(percent_to_pixels(0.0, 1000.0), 0.0);
        assert_eq!(percent_to_pixels(25.0, 1440.0), 360.0);
    }

    #[test]
    fn pixels_to_percent_basic() {
        assert_eq!(pixels_to_percent(250.0, 1000.0), 25.0);
        assert_eq!(pixels_to_percent(1440.0, 1440.0), 100.0);
    }

    #[test]
    fn pixels_to_percent_zero_total() {
        assert_eq!(pixels_to_percent(24.0, 0.0), 0.0);
        assert_eq!(pixels_to_percent(0.0, 0.0), 0.0);
    }

    #[test]
    fn pixel_unit_is_identity() {
        assert_eq!(GridUnit::Pixels.to_pixels(24.0, 1440.0), 24.0);
        assert_eq!(GridUnit::Pixels.from_pixels(24.0, 1440.0), 24.0);
        assert_eq!(to_pixels(13.5, GridUnit::Pixels, 0.0), 13.5);
    }

    #[test]
    fn percent_unit_dispatch() {
        assert_eq!(to_pixels(10.0, GridUnit::Percent, 800.0), 80.0);
        assert_eq!(from_pixels(80.0, GridUnit::Percent, 800.0), 10.0);
        assert_eq!(from_pixels(80.0, GridUnit::Percent, 0.0), 0.0);
    }

    #[test]
    fn relative_units() {
        assert!(GridUnit::Percent.is_relative());
        assert!(!GridUnit::Pixels.is_relative());
    }
}
