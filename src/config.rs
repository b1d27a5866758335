//! Grid configuration value types.
//!
//! A [`GridConfig`] is an optional combination of a column grid, a row grid
//! and a baseline grid. It has no identity: callers create it (from a preset,
//! a detection result, or manual editing), hand it to the computation
//! functions, and own it before and after every call.
//!
//! # Example
//!
//! ```
//! use zengrid::{GridAlignment, GridConfig, GridKind, GridUnit, TrackGridConfig};
//!
//! let config = GridConfig::new()
//!     .with_columns(
//!         TrackGridConfig::columns(12)
//!             .gutter(2.0, GridUnit::Percent)
//!             .margin(64.0, GridUnit::Pixels)
//!             .alignment(GridAlignment::Stretch),
//!     )
//!     .with_baseline_height(8.0);
//!
//! let kinds: Vec<_> = config.kinds().collect();
//! assert_eq!(kinds, [GridKind::Columns, GridKind::Baseline]);
//! ```

use core::fmt;

use crate::defaults;
use crate::units::GridUnit;
use crate::validate::{MAX_TRACK_COUNT, MIN_BASELINE_HEIGHT, MIN_TRACK_COUNT};

/// RGBA color with every channel normalized to `0.0..=1.0`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridColor {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl GridColor {
    /// Create a color, clamping each channel into `0.0..=1.0`.
    ///
    /// NaN channels become 0.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self {
            r: clamp_unit(r),
            g: clamp_unit(g),
            b: clamp_unit(b),
            a: clamp_unit(a),
        }
    }

    /// Same color with a different alpha (clamped).
    pub fn with_alpha(self, a: f64) -> Self {
        Self {
            a: clamp_unit(a),
            ..self
        }
    }

    /// Copy with every channel clamped into range.
    pub fn clamped(self) -> Self {
        Self::new(self.r, self.g, self.b, self.a)
    }

    /// Whether every channel is within `0.0..=1.0`.
    pub fn is_normalized(&self) -> bool {
        [self.r, self.g, self.b, self.a]
            .iter()
            .all(|c| (0.0..=1.0).contains(c))
    }
}

fn clamp_unit(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

/// Which side absorbs the remainder when divisions don't tile evenly.
///
/// Carried through to the host integration layer; the engine itself lays
/// tracks out from the leading margin regardless of alignment.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum GridAlignment {
    Min,
    Center,
    Max,
    #[default]
    Stretch,
}

/// The three grid roles a [`GridConfig`] can hold.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum GridKind {
    /// Vertical divisions across the frame width.
    Columns,
    /// Horizontal divisions across the frame height.
    Rows,
    /// Repeating typographic rule.
    Baseline,
}

impl GridKind {
    /// All kinds, in the order they are validated and drawn.
    pub const ALL: [Self; 3] = [Self::Columns, Self::Rows, Self::Baseline];

    /// Singular noun used in user-facing messages.
    pub fn noun(self) -> &'static str {
        match self {
            Self::Columns => "Column",
            Self::Rows => "Row",
            Self::Baseline => "Baseline",
        }
    }

    /// Frame dimension this kind is measured against.
    pub fn axis(self) -> &'static str {
        match self {
            Self::Columns => "width",
            Self::Rows | Self::Baseline => "height",
        }
    }

    /// Default guide color for this kind.
    pub fn default_color(self) -> GridColor {
        defaults::default_color(self)
    }
}

impl fmt::Display for GridKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Columns => "columns",
            Self::Rows => "rows",
            Self::Baseline => "baseline",
        })
    }
}

/// Column or row grid: `count` tracks separated by gutters, inset by margins.
///
/// Columns divide the frame width, rows divide the frame height; the shape
/// is identical.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TrackGridConfig {
    pub count: u32,
    pub gutter_size: f64,
    pub gutter_unit: GridUnit,
    pub margin: f64,
    pub margin_unit: GridUnit,
    pub alignment: GridAlignment,
    pub visible: bool,
    pub color: GridColor,
}

/// Column grid configuration.
pub type ColumnGridConfig = TrackGridConfig;
/// Row grid configuration.
pub type RowGridConfig = TrackGridConfig;

impl TrackGridConfig {
    /// `count` tracks with no gutter or margin, using `color`.
    pub fn new(count: u32, color: GridColor) -> Self {
        Self {
            count,
            gutter_size: 0.0,
            gutter_unit: GridUnit::Pixels,
            margin: 0.0,
            margin_unit: GridUnit::Pixels,
            alignment: GridAlignment::Stretch,
            visible: true,
            color,
        }
    }

    /// Column grid with the default column color.
    pub fn columns(count: u32) -> Self {
        Self::new(count, GridKind::Columns.default_color())
    }

    /// Row grid with the default row color.
    pub fn rows(count: u32) -> Self {
        Self::new(count, GridKind::Rows.default_color())
    }

    /// Set the gutter between adjacent tracks.
    pub fn gutter(mut self, size: f64, unit: GridUnit) -> Self {
        self.gutter_size = size;
        self.gutter_unit = unit;
        self
    }

    /// Set the inset on both outer edges.
    pub fn margin(mut self, margin: f64, unit: GridUnit) -> Self {
        self.margin = margin;
        self.margin_unit = unit;
        self
    }

    pub fn alignment(mut self, alignment: GridAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn color(mut self, color: GridColor) -> Self {
        self.color = color;
        self
    }

    /// Gutter in pixels against a frame dimension.
    pub fn gutter_px(&self, total_size: f64) -> f64 {
        self.gutter_unit.to_pixels(self.gutter_size, total_size)
    }

    /// Margin in pixels against a frame dimension.
    pub fn margin_px(&self, total_size: f64) -> f64 {
        self.margin_unit.to_pixels(self.margin, total_size)
    }

    /// Clamp into the range the validator accepts.
    pub fn sanitized(&self) -> Self {
        Self {
            count: self.count.clamp(MIN_TRACK_COUNT, MAX_TRACK_COUNT),
            gutter_size: non_negative(self.gutter_size),
            margin: non_negative(self.margin),
            color: self.color.clamped(),
            ..*self
        }
    }
}

fn non_negative(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.max(0.0) }
}

/// Baseline grid: a horizontal rule every `height` pixels from `offset`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaselineGridConfig {
    /// Spacing between rules, in pixels.
    pub height: f64,
    /// Position of the first rule, in pixels. May be negative.
    pub offset: f64,
    pub visible: bool,
    pub color: GridColor,
}

impl BaselineGridConfig {
    /// Baseline every `height` pixels, starting at the top edge.
    pub fn new(height: f64) -> Self {
        Self {
            height,
            offset: 0.0,
            visible: true,
            color: GridKind::Baseline.default_color(),
        }
    }

    pub fn offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn color(mut self, color: GridColor) -> Self {
        self.color = color;
        self
    }

    /// Clamp the height to at least 1px and the color into range.
    pub fn sanitized(&self) -> Self {
        let height = if self.height.is_nan() {
            MIN_BASELINE_HEIGHT
        } else {
            self.height.max(MIN_BASELINE_HEIGHT)
        };
        Self {
            height,
            offset: if self.offset.is_nan() { 0.0 } else { self.offset },
            color: self.color.clamped(),
            ..*self
        }
    }
}

/// Any subset of column, row and baseline grids. Empty is valid.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridConfig {
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub columns: Option<ColumnGridConfig>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub rows: Option<RowGridConfig>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub baseline: Option<BaselineGridConfig>,
}

impl GridConfig {
    /// Empty configuration.
    pub const fn new() -> Self {
        Self {
            columns: None,
            rows: None,
            baseline: None,
        }
    }

    pub fn with_columns(mut self, columns: ColumnGridConfig) -> Self {
        self.columns = Some(columns);
        self
    }

    pub fn with_rows(mut self, rows: RowGridConfig) -> Self {
        self.rows = Some(rows);
        self
    }

    pub fn with_baseline(mut self, baseline: BaselineGridConfig) -> Self {
        self.baseline = Some(baseline);
        self
    }

    /// Shorthand for a baseline grid with default offset and color.
    pub fn with_baseline_height(self, height: f64) -> Self {
        self.with_baseline(BaselineGridConfig::new(height))
    }

    /// Whether no sub-grid is present.
    pub fn is_empty(&self) -> bool {
        self.columns.is_none() && self.rows.is_none() && self.baseline.is_none()
    }

    /// Whether the sub-grid of `kind` is present.
    pub fn has(&self, kind: GridKind) -> bool {
        match kind {
            GridKind::Columns => self.columns.is_some(),
            GridKind::Rows => self.rows.is_some(),
            GridKind::Baseline => self.baseline.is_some(),
        }
    }

    /// Present sub-grid kinds in [`GridKind::ALL`] order.
    pub fn kinds(&self) -> impl Iterator<Item = GridKind> + '_ {
        GridKind::ALL.into_iter().filter(|&k| self.has(k))
    }

    /// The column or row grid for `kind`. `None` for [`GridKind::Baseline`].
    pub fn track(&self, kind: GridKind) -> Option<&TrackGridConfig> {
        match kind {
            GridKind::Columns => self.columns.as_ref(),
            GridKind::Rows => self.rows.as_ref(),
            GridKind::Baseline => None,
        }
    }

    /// Color of the sub-grid of `kind`, if present.
    pub fn color(&self, kind: GridKind) -> Option<GridColor> {
        match kind {
            GridKind::Columns => self.columns.map(|c| c.color),
            GridKind::Rows => self.rows.map(|r| r.color),
            GridKind::Baseline => self.baseline.map(|b| b.color),
        }
    }

    /// Normalize untrusted input (e.g. a detection result) to the bounds
    /// enforced by [`validate_structure`](crate::validate_structure).
    ///
    /// Frame-relative checks (margins wider than the frame) still need a
    /// validator pass; this only fixes values that are wrong for any frame.
    pub fn sanitized(&self) -> Self {
        Self {
            columns: self.columns.as_ref().map(TrackGridConfig::sanitized),
            rows: self.rows.as_ref().map(TrackGridConfig::sanitized),
            baseline: self.baseline.as_ref().map(BaselineGridConfig::sanitized),
        }
    }
}
