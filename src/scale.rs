//! Rescaling a grid authored for one frame size to another.
//!
//! Counts, alignment, visibility, color and percent-unit values carry over
//! unchanged; only absolute pixel values move. Columns scale with the width
//! factor, rows with the height factor, and the baseline with the smaller of
//! the two so it never outgrows the more constrained axis.
//!
//! ```
//! use zengrid::{BaselineGridConfig, GridConfig, scale_grid};
//!
//! let config = GridConfig::new().with_baseline(BaselineGridConfig::new(8.0).offset(16.0));
//! let scaled = scale_grid(&config, 1000.0, 1000.0, 2000.0, 1500.0);
//!
//! let baseline = scaled.baseline.unwrap();
//! assert_eq!((baseline.height, baseline.offset), (12.0, 24.0));
//! ```

use crate::config::{BaselineGridConfig, GridConfig, TrackGridConfig};
use crate::units::GridUnit;

/// Rewrite `config` for a `new_w × new_h` frame.
///
/// `orig_w` and `orig_h` must be non-zero; the scale factors are plain
/// divisions.
pub fn scale_grid(
    config: &GridConfig,
    orig_w: f64,
    orig_h: f64,
    new_w: f64,
    new_h: f64,
) -> GridConfig {
    let width_scale = new_w / orig_w;
    let height_scale = new_h / orig_h;
    let baseline_scale = width_scale.min(height_scale);

    GridConfig {
        columns: config.columns.map(|c| scale_track(c, width_scale)),
        rows: config.rows.map(|r| scale_track(r, height_scale)),
        baseline: config.baseline.map(|b| scale_baseline(b, baseline_scale)),
    }
}

fn scale_track(track: TrackGridConfig, factor: f64) -> TrackGridConfig {
    TrackGridConfig {
        gutter_size: scale_value(track.gutter_size, track.gutter_unit, factor),
        margin: scale_value(track.margin, track.margin_unit, factor),
        ..track
    }
}

fn scale_baseline(baseline: BaselineGridConfig, factor: f64) -> BaselineGridConfig {
    BaselineGridConfig {
        height: baseline.height * factor,
        offset: baseline.offset * factor,
        ..baseline
    }
}

fn scale_value(value: f64, unit: GridUnit, factor: f64) -> f64 {
    match unit {
        GridUnit::Pixels => value * factor,
        GridUnit::Percent => value,
    }
}
