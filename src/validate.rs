//! Grid validation in two tiers.
//!
//! [`validate_structure`] decides whether a grid can be applied to a frame
//! at all: its errors must block the apply action. [`validate_advisory`]
//! only produces usability hints and never blocks.
//!
//! Both accumulate every finding instead of stopping at the first.
//!
//! ```
//! use zengrid::{GridConfig, TrackGridConfig, validate_structure};
//!
//! let config = GridConfig::new().with_columns(TrackGridConfig::columns(0));
//! let report = validate_structure(&config, 1440.0, 900.0);
//!
//! assert!(!report.is_valid());
//! assert!(report.errors.iter().any(|e| e.to_string() == "Column count must be at least 1"));
//! ```

use alloc::vec::Vec;
use core::fmt;

use crate::config::{BaselineGridConfig, GridConfig, GridKind, TrackGridConfig};
use crate::geometry::track_size;

/// Fewest tracks a column or row grid may have.
pub const MIN_TRACK_COUNT: u32 = 1;
/// Most tracks a column or row grid may have.
pub const MAX_TRACK_COUNT: u32 = 100;
/// Smallest baseline height, in pixels.
pub const MIN_BASELINE_HEIGHT: f64 = 1.0;

/// Columns narrower (or rows shorter) than this get a warning.
pub const MIN_COMFORTABLE_TRACK: f64 = 10.0;
/// More columns than this get a warning.
pub const MAX_COMFORTABLE_COLUMNS: u32 = 24;
/// Column margins above this fraction of the frame width get a warning.
pub const MAX_COMFORTABLE_MARGIN_RATIO: f64 = 0.25;
/// Baselines below this height get a warning.
pub const MIN_COMFORTABLE_BASELINE: f64 = 4.0;
/// Baselines above this height get a warning.
pub const MAX_COMFORTABLE_BASELINE: f64 = 48.0;

/// A grid that cannot be applied to the frame.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum StructuralError {
    #[error("{} count must be at least 1", .kind.noun())]
    CountTooLow { kind: GridKind, count: u32 },
    #[error("{} count cannot exceed 100", .kind.noun())]
    CountTooHigh { kind: GridKind, count: u32 },
    #[error("{} margins exceed frame {}", .kind.noun(), .kind.axis())]
    MarginsExceedFrame { kind: GridKind, margin_px: f64 },
    #[error("{} gutter exceeds frame {}", .kind.noun(), .kind.axis())]
    GutterExceedsFrame { kind: GridKind, gutter_px: f64 },
    #[error("Baseline height must be at least 1px")]
    BaselineTooSmall { height: f64 },
}

/// A usable grid that is probably not what the user wants.
#[derive(Clone, Debug, PartialEq)]
pub enum GridWarning {
    /// Baseline spacing larger than the frame: at most one rule is drawn.
    BaselineExceedsFrame { height: f64 },
    BaselineNegativeOffset { offset: f64 },
    ColumnsTooNarrow { width: f64 },
    TooManyColumns { count: u32 },
    ColumnMarginsTooWide { margin_px: f64 },
    RowsTooShort { height: f64 },
    BaselineTooSmall { height: f64 },
    BaselineTooLarge { height: f64 },
}

impl fmt::Display for GridWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BaselineExceedsFrame { .. } => {
                f.write_str("Baseline height exceeds frame height")
            }
            Self::BaselineNegativeOffset { offset } => {
                write!(f, "Baseline offset is negative ({offset}px)")
            }
            Self::ColumnsTooNarrow { width } => {
                write!(f, "Column width is too narrow ({width:.1}px)")
            }
            Self::TooManyColumns { count } => {
                write!(f, "{count} columns may be difficult to use")
            }
            Self::ColumnMarginsTooWide { .. } => {
                f.write_str("Column margins are larger than 25% of the frame width")
            }
            Self::RowsTooShort { height } => {
                write!(f, "Row height is too short ({height:.1}px)")
            }
            Self::BaselineTooSmall { height } => {
                write!(f, "Baseline height is too small ({height}px)")
            }
            Self::BaselineTooLarge { height } => {
                write!(f, "Baseline height is quite large ({height}px)")
            }
        }
    }
}

/// Result of [`validate_structure`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValidationReport {
    pub errors: Vec<StructuralError>,
    pub warnings: Vec<GridWarning>,
}

impl ValidationReport {
    /// No structural errors. Warnings don't count.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Result of [`validate_advisory`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AdvisoryReport {
    pub warnings: Vec<GridWarning>,
}

impl AdvisoryReport {
    /// No suggestions. This says nothing about correctness.
    pub fn is_valid(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Hard checks that gate applying `config` to a `frame_width × frame_height`
/// surface.
pub fn validate_structure(
    config: &GridConfig,
    frame_width: f64,
    frame_height: f64,
) -> ValidationReport {
    let mut report = ValidationReport::default();

    if let Some(columns) = &config.columns {
        check_track(GridKind::Columns, columns, frame_width, &mut report.errors);
    }
    if let Some(rows) = &config.rows {
        check_track(GridKind::Rows, rows, frame_height, &mut report.errors);
    }
    if let Some(baseline) = &config.baseline {
        check_baseline(baseline, frame_height, &mut report);
    }

    log::trace!(
        "structural validation on {frame_width}x{frame_height}: {} errors, {} warnings",
        report.errors.len(),
        report.warnings.len()
    );
    report
}

fn check_track(
    kind: GridKind,
    track: &TrackGridConfig,
    total_size: f64,
    errors: &mut Vec<StructuralError>,
) {
    let count = track.count;
    if count < MIN_TRACK_COUNT {
        errors.push(StructuralError::CountTooLow { kind, count });
    } else if count > MAX_TRACK_COUNT {
        errors.push(StructuralError::CountTooHigh { kind, count });
    }

    let margin_px = track.margin_px(total_size);
    if 2.0 * margin_px > total_size {
        errors.push(StructuralError::MarginsExceedFrame { kind, margin_px });
    }

    let gutter_px = track.gutter_px(total_size);
    if gutter_px > total_size {
        errors.push(StructuralError::GutterExceedsFrame { kind, gutter_px });
    }
}

fn check_baseline(
    baseline: &BaselineGridConfig,
    frame_height: f64,
    report: &mut ValidationReport,
) {
    let height = baseline.height;
    if height.is_nan() || height < MIN_BASELINE_HEIGHT {
        report.errors.push(StructuralError::BaselineTooSmall { height });
    }
    if height > frame_height {
        report.warnings.push(GridWarning::BaselineExceedsFrame { height });
    }
    if baseline.offset < 0.0 {
        report.warnings.push(GridWarning::BaselineNegativeOffset {
            offset: baseline.offset,
        });
    }
}

/// Usability hints for `config` on a `frame_width × frame_height` frame.
pub fn validate_advisory(
    config: &GridConfig,
    frame_width: f64,
    frame_height: f64,
) -> AdvisoryReport {
    let mut warnings = Vec::new();

    if let Some(columns) = &config.columns {
        // A zero count has no track size; that is a structural error, not a hint.
        if columns.count >= MIN_TRACK_COUNT {
            let width = track_size(columns, frame_width);
            if width < MIN_COMFORTABLE_TRACK {
                warnings.push(GridWarning::ColumnsTooNarrow { width });
            }
        }
        if columns.count > MAX_COMFORTABLE_COLUMNS {
            warnings.push(GridWarning::TooManyColumns {
                count: columns.count,
            });
        }
        let margin_px = columns.margin_px(frame_width);
        if margin_px > frame_width * MAX_COMFORTABLE_MARGIN_RATIO {
            warnings.push(GridWarning::ColumnMarginsTooWide { margin_px });
        }
    }

    if let Some(rows) = config.rows.as_ref().filter(|r| r.count >= MIN_TRACK_COUNT) {
        let height = track_size(rows, frame_height);
        if height < MIN_COMFORTABLE_TRACK {
            warnings.push(GridWarning::RowsTooShort { height });
        }
    }

    if let Some(baseline) = &config.baseline {
        let height = baseline.height;
        if height < MIN_COMFORTABLE_BASELINE {
            warnings.push(GridWarning::BaselineTooSmall { height });
        } else if height > MAX_COMFORTABLE_BASELINE {
            warnings.push(GridWarning::BaselineTooLarge { height });
        }
    }

    log::trace!(
        "advisory validation on {frame_width}x{frame_height}: {} warnings",
        warnings.len()
    );
    AdvisoryReport { warnings }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::GridUnit;
    use alloc::string::{String, ToString};

    fn columns(count: u32) -> GridConfig {
        GridConfig::new().with_columns(
            TrackGridConfig::columns(count)
                .gutter(24.0, GridUnit::Pixels)
                .margin(32.0, GridUnit::Pixels),
        )
    }

    fn messages<E: ToString>(items: &[E]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn empty_config_is_valid() {
        let report = validate_structure(&GridConfig::new(), 1440.0, 900.0);
        assert!(report.is_valid());
        assert!(report.warnings.is_empty());
        assert!(validate_advisory(&GridConfig::new(), 1440.0, 900.0).is_valid());
    }

    #[test]
    fn zero_columns_rejected() {
        let report = validate_structure(&columns(0), 1440.0, 900.0);
        assert!(!report.is_valid());
        assert!(messages(&report.errors).contains(&"Column count must be at least 1".to_string()));
    }

    #[test]
    fn column_count_upper_bound() {
        assert!(validate_structure(&columns(100), 1440.0, 900.0).is_valid());
        let report = validate_structure(&columns(101), 1440.0, 900.0);
        assert_eq!(
            report.errors,
            [StructuralError::CountTooHigh {
                kind: GridKind::Columns,
                count: 101
            }]
        );
        assert_eq!(report.errors[0].to_string(), "Column count cannot exceed 100");
    }

    #[test]
    fn margins_and_gutter_exceeding_frame() {
        let config = GridConfig::new().with_columns(
            TrackGridConfig::columns(2)
                .gutter(600.0, GridUnit::Pixels)
                .margin(300.0, GridUnit::Pixels),
        );
        let report = validate_structure(&config, 500.0, 500.0);
        assert_eq!(
            messages(&report.errors),
            ["Column margins exceed frame width", "Column gutter exceeds frame width"]
        );
    }

    #[test]
    fn margins_exactly_filling_frame_are_allowed() {
        let config = GridConfig::new()
            .with_columns(TrackGridConfig::columns(1).margin(250.0, GridUnit::Pixels));
        assert!(validate_structure(&config, 500.0, 500.0).is_valid());
    }

    #[test]
    fn percent_margins_resolve_before_checking() {
        let config = GridConfig::new()
            .with_columns(TrackGridConfig::columns(4).margin(60.0, GridUnit::Percent));
        let report = validate_structure(&config, 1000.0, 1000.0);
        assert!(matches!(
            report.errors[..],
            [StructuralError::MarginsExceedFrame { kind: GridKind::Columns, .. }]
        ));
    }

    #[test]
    fn rows_checked_against_height() {
        let config = GridConfig::new().with_rows(
            TrackGridConfig::rows(0)
                .margin(300.0, GridUnit::Pixels)
                .gutter(700.0, GridUnit::Pixels),
        );
        // Fits the 1440 width but not the 500 height.
        let report = validate_structure(&config, 1440.0, 500.0);
        assert_eq!(
            messages(&report.errors),
            [
                "Row count must be at least 1",
                "Row margins exceed frame height",
                "Row gutter exceeds frame height",
            ]
        );
    }

    #[test]
    fn errors_accumulate_across_grids() {
        let config = GridConfig::new()
            .with_columns(TrackGridConfig::columns(0))
            .with_rows(TrackGridConfig::rows(200))
            .with_baseline_height(0.0);
        let report = validate_structure(&config, 800.0, 600.0);
        assert_eq!(report.errors.len(), 3);
        assert_eq!(
            report.errors[2].to_string(),
            "Baseline height must be at least 1px"
        );
    }

    #[test]
    fn baseline_soft_findings_are_warnings() {
        let config = GridConfig::new().with_baseline(BaselineGridConfig::new(800.0).offset(-4.0));
        let report = validate_structure(&config, 800.0, 600.0);
        assert!(report.is_valid());
        assert_eq!(
            report.warnings,
            [
                GridWarning::BaselineExceedsFrame { height: 800.0 },
                GridWarning::BaselineNegativeOffset { offset: -4.0 },
            ]
        );
    }

    #[test]
    fn nan_baseline_rejected() {
        let config = GridConfig::new().with_baseline_height(f64::NAN);
        let report = validate_structure(&config, 800.0, 600.0);
        assert!(!report.is_valid());
    }

    #[test]
    fn advisory_narrow_and_many_columns() {
        let report = validate_advisory(&columns(30), 1000.0, 800.0);
        assert!(!report.is_valid());
        assert!(matches!(report.warnings[0], GridWarning::ColumnsTooNarrow { .. }));
        assert_eq!(report.warnings[1], GridWarning::TooManyColumns { count: 30 });
        assert_eq!(report.warnings.len(), 2);
    }

    #[test]
    fn advisory_clean_desktop_grid() {
        assert!(validate_advisory(&columns(12), 1440.0, 900.0).is_valid());
    }

    #[test]
    fn advisory_wide_margins() {
        let config = GridConfig::new()
            .with_columns(TrackGridConfig::columns(2).margin(30.0, GridUnit::Percent));
        let report = validate_advisory(&config, 1000.0, 1000.0);
        assert_eq!(
            messages(&report.warnings),
            ["Column margins are larger than 25% of the frame width"]
        );
    }

    #[test]
    fn advisory_short_rows() {
        let config = GridConfig::new().with_rows(TrackGridConfig::rows(50));
        let report = validate_advisory(&config, 1000.0, 400.0);
        assert_eq!(report.warnings, [GridWarning::RowsTooShort { height: 8.0 }]);
        assert_eq!(report.warnings[0].to_string(), "Row height is too short (8.0px)");
    }

    #[test]
    fn advisory_baseline_bounds() {
        let small = validate_advisory(&GridConfig::new().with_baseline_height(3.0), 800.0, 600.0);
        assert_eq!(small.warnings, [GridWarning::BaselineTooSmall { height: 3.0 }]);

        let large = validate_advisory(&GridConfig::new().with_baseline_height(64.0), 800.0, 600.0);
        assert_eq!(large.warnings, [GridWarning::BaselineTooLarge { height: 64.0 }]);

        for ok in [4.0, 8.0, 48.0] {
            assert!(
                validate_advisory(&GridConfig::new().with_baseline_height(ok), 800.0, 600.0)
                    .is_valid()
            );
        }
    }

    #[test]
    fn advisory_never_reports_structural_problems() {
        // count 0 is structurally invalid; the advisory tier has no opinion.
        let config = GridConfig::new().with_columns(TrackGridConfig::columns(0));
        let report = validate_advisory(&config, 800.0, 600.0);
        assert!(report.is_valid());
    }

    #[test]
    fn advisory_zero_count_with_margin_has_no_track_size_hint() {
        // With a margin the track size is -inf, not a narrow track.
        let config = GridConfig::new()
            .with_columns(TrackGridConfig::columns(0).margin(10.0, GridUnit::Pixels))
            .with_rows(TrackGridConfig::rows(0).margin(10.0, GridUnit::Pixels));
        let report = validate_advisory(&config, 800.0, 600.0);
        assert!(report.is_valid(), "{:?}", report.warnings);

        // Margin hints still apply to a zero-count grid.
        let wide = GridConfig::new()
            .with_columns(TrackGridConfig::columns(0).margin(10.0, GridUnit::Pixels));
        let report = validate_advisory(&wide, 10.0, 10.0);
        assert_eq!(
            report.warnings,
            [GridWarning::ColumnMarginsTooWide { margin_px: 10.0 }]
        );
    }
}
