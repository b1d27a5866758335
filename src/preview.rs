//! Line segments for drawing grid guides.
//!
//! Every generator is a pure function of its configuration and the preview
//! size, so identical inputs always produce identical segment lists in the
//! same order. Coordinates are in preview pixels with the origin at the
//! top-left corner.
//!
//! ```
//! use zengrid::{GridConfig, GridUnit, TrackGridConfig, preview_paths};
//!
//! let config = GridConfig::new()
//!     .with_columns(TrackGridConfig::columns(2).gutter(20.0, GridUnit::Pixels))
//!     .with_baseline_height(50.0);
//!
//! let paths = preview_paths(&config, 220.0, 100.0);
//! assert_eq!(paths.columns.len(), 4);
//! assert_eq!(paths.baseline.len(), 2);
//! assert_eq!(paths.columns[1].to_path_data(), "M 100 0 L 100 100");
//! ```

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{self, Write as _};

use crate::config::{BaselineGridConfig, GridConfig, GridKind, TrackGridConfig};
use crate::geometry::track_edges;
use crate::math;

/// A straight guide line from `(x1, y1)` to `(x2, y2)`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Segment {
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Full-height vertical line at `x`.
    pub const fn vertical(x: f64, height: f64) -> Self {
        Self::new(x, 0.0, x, height)
    }

    /// Full-width horizontal line at `y`.
    pub const fn horizontal(y: f64, width: f64) -> Self {
        Self::new(0.0, y, width, y)
    }

    /// SVG path data: `M x1 y1 L x2 y2`.
    pub fn to_path_data(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = write!(out, "{self}");
        out
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "M {} {} L {} {}", self.x1, self.y1, self.x2, self.y2)
    }
}

/// Left and right edge of every column: `2 × count` vertical segments.
pub fn column_segments(columns: &TrackGridConfig, width: f64, height: f64) -> Vec<Segment> {
    track_edges(columns, width)
        .flat_map(|(left, right)| {
            [
                Segment::vertical(left, height),
                Segment::vertical(right, height),
            ]
        })
        .collect()
}

/// Top and bottom edge of every row: `2 × count` horizontal segments.
pub fn row_segments(rows: &TrackGridConfig, width: f64, height: f64) -> Vec<Segment> {
    track_edges(rows, height)
        .flat_map(|(top, bottom)| {
            [
                Segment::horizontal(top, width),
                Segment::horizontal(bottom, width),
            ]
        })
        .collect()
}

/// Number of baseline rules drawn between `offset` and `height`.
///
/// `ceil((height - offset) / spacing)`, never negative. A spacing that is
/// not a positive number draws nothing.
pub fn baseline_count(baseline: &BaselineGridConfig, height: f64) -> usize {
    let spacing = baseline.height;
    if !(spacing.is_finite() && spacing > 0.0) {
        return 0;
    }
    let n = math::ceil((height - baseline.offset) / spacing);
    if n > 0.0 { n as usize } else { 0 }
}

/// Full-width rule at `offset`, then every `height` pixels below it while
/// still inside the preview.
///
/// One segment is allocated per rule, so a sub-pixel spacing on a large
/// preview yields a very long list. Run [`validate_structure`] first; it
/// rejects heights below 1px.
///
/// [`validate_structure`]: crate::validate_structure
pub fn baseline_segments(baseline: &BaselineGridConfig, width: f64, height: f64) -> Vec<Segment> {
    let count = baseline_count(baseline, height);
    (0..count)
        .map(|i| baseline.offset + i as f64 * baseline.height)
        .take_while(|&y| y < height)
        .map(|y| Segment::horizontal(y, width))
        .collect()
}

/// Segments for every sub-grid present in a configuration.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PreviewPaths {
    pub columns: Vec<Segment>,
    pub rows: Vec<Segment>,
    pub baseline: Vec<Segment>,
}

impl PreviewPaths {
    /// Segments for `kind`.
    pub fn segments(&self, kind: GridKind) -> &[Segment] {
        match kind {
            GridKind::Columns => &self.columns,
            GridKind::Rows => &self.rows,
            GridKind::Baseline => &self.baseline,
        }
    }

    /// Total number of segments.
    pub fn len(&self) -> usize {
        self.columns.len() + self.rows.len() + self.baseline.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All segments: columns, then rows, then baseline.
    pub fn iter(&self) -> impl Iterator<Item = &Segment> {
        self.columns
            .iter()
            .chain(&self.rows)
            .chain(&self.baseline)
    }

    /// SVG path data for one kind, segments separated by spaces.
    pub fn path_data(&self, kind: GridKind) -> String {
        join_path_data(self.segments(kind))
    }

    /// SVG path data for every segment.
    pub fn to_path_data(&self) -> String {
        join_path_data(self.iter())
    }
}

fn join_path_data<'a>(segments: impl IntoIterator<Item = &'a Segment>) -> String {
    let mut out = String::new();
    for (i, segment) in segments.into_iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{segment}");
    }
    out
}

/// Run every generator for the sub-grids present in `config`.
pub fn preview_paths(config: &GridConfig, width: f64, height: f64) -> PreviewPaths {
    PreviewPaths {
        columns: config
            .columns
            .as_ref()
            .map(|c| column_segments(c, width, height))
            .unwrap_or_default(),
        rows: config
            .rows
            .as_ref()
            .map(|r| row_segments(r, width, height))
            .unwrap_or_default(),
        baseline: config
            .baseline
            .as_ref()
            .map(|b| baseline_segments(b, width, height))
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::GridUnit;

    #[test]
    fn columns_emit_both_edges() {
        let cols = TrackGridConfig::columns(3)
            .gutter(10.0, GridUnit::Pixels)
            .margin(20.0, GridUnit::Pixels);
        let segs = column_segments(&cols, 330.0, 200.0);
        let xs: Vec<f64> = segs.iter().map(|s| s.x1).collect();
        assert_eq!(xs, [20.0, 110.0, 120.0, 210.0, 220.0, 310.0]);
        assert!(segs.iter().all(|s| s.x1 == s.x2 && s.y1 == 0.0 && s.y2 == 200.0));
    }

    #[test]
    fn rows_emit_both_edges() {
        let rows = TrackGridConfig::rows(2).gutter(10.0, GridUnit::Pixels);
        let segs = row_segments(&rows, 300.0, 110.0);
        assert_eq!(
            segs,
            [
                Segment::horizontal(0.0, 300.0),
                Segment::horizontal(50.0, 300.0),
                Segment::horizontal(60.0, 300.0),
                Segment::horizontal(110.0, 300.0),
            ]
        );
    }

    #[test]
    fn percent_units_use_preview_size() {
        let cols = TrackGridConfig::columns(1).margin(10.0, GridUnit::Percent);
        let segs = column_segments(&cols, 200.0, 100.0);
        assert_eq!(segs[0].x1, 20.0);
        assert_eq!(segs[1].x1, 180.0);
    }

    #[test]
    fn baseline_from_offset() {
        let b = BaselineGridConfig::new(8.0).offset(4.0);
        let segs = baseline_segments(&b, 100.0, 30.0);
        let ys: Vec<f64> = segs.iter().map(|s| s.y1).collect();
        assert_eq!(ys, [4.0, 12.0, 20.0, 28.0]);
        assert_eq!(baseline_count(&b, 30.0), 4);
    }

    #[test]
    fn baseline_stops_before_bottom_edge() {
        let b = BaselineGridConfig::new(10.0);
        let segs = baseline_segments(&b, 100.0, 30.0);
        assert_eq!(segs.len(), 3);
        assert_eq!(segs.last().map(|s| s.y1), Some(20.0));
    }

    #[test]
    fn baseline_negative_offset_starts_above() {
        let b = BaselineGridConfig::new(10.0).offset(-5.0);
        let segs = baseline_segments(&b, 50.0, 20.0);
        let ys: Vec<f64> = segs.iter().map(|s| s.y1).collect();
        assert_eq!(ys, [-5.0, 5.0, 15.0]);
    }

    #[test]
    fn baseline_offset_past_bottom_draws_nothing() {
        let b = BaselineGridConfig::new(10.0).offset(40.0);
        assert_eq!(baseline_count(&b, 30.0), 0);
        assert!(baseline_segments(&b, 100.0, 30.0).is_empty());
    }

    #[test]
    fn degenerate_baseline_terminates() {
        for h in [0.0, -8.0, f64::NAN, f64::INFINITY] {
            let b = BaselineGridConfig::new(h);
            assert!(baseline_segments(&b, 100.0, 100.0).is_empty(), "{h}");
        }
    }

    #[test]
    fn zero_columns_draw_nothing() {
        assert!(column_segments(&TrackGridConfig::columns(0), 100.0, 100.0).is_empty());
    }

    #[test]
    fn combined_paths() {
        let config = GridConfig::new()
            .with_columns(TrackGridConfig::columns(2))
            .with_rows(TrackGridConfig::rows(1))
            .with_baseline_height(25.0);
        let paths = preview_paths(&config, 100.0, 50.0);
        assert_eq!(paths.len(), 4 + 2 + 2);
        assert_eq!(paths.segments(GridKind::Rows), paths.rows.as_slice());
        assert_eq!(paths.path_data(GridKind::Rows), "M 0 0 L 100 0 M 0 50 L 100 50");
        assert!(paths.to_path_data().starts_with("M 0 0 L 0 50 M 50 0 L 50 50"));
    }

    #[test]
    fn empty_config_has_no_paths() {
        let paths = preview_paths(&GridConfig::new(), 100.0, 100.0);
        assert!(paths.is_empty());
        assert_eq!(paths.to_path_data(), "");
    }

    #[test]
    fn fractional_coordinates_in_path_data() {
        assert_eq!(
            Segment::vertical(12.5, 40.0).to_path_data(),
            "M 12.5 0 L 12.5 40"
        );
    }
}
