//! Track and module sizes.
//!
//! ```text
//!   margin   col    gutter   col    gutter   col   margin
//!  |<---->|<----->|<----->|<----->|<----->|<----->|<---->|
//!  0                                                 frame
//! ```
//!
//! Always succeeds. Over-constrained input (margins and gutters wider than
//! the frame) produces negative sizes, which [`validate`](crate::validate)
//! reports; nothing is clamped here.

use crate::config::TrackGridConfig;

/// Width and height of one grid module (a column/row intersection).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModuleSize {
    pub width: f64,
    pub height: f64,
}

/// Size of one track when `config` divides `total_size`.
///
/// `(total - 2·margin - gutter·(count - 1)) / count`, with margin and gutter
/// resolved to pixels against `total_size`.
pub fn track_size(config: &TrackGridConfig, total_size: f64) -> f64 {
    let margin = config.margin_px(total_size);
    let gutter = config.gutter_px(total_size);
    let count = f64::from(config.count);
    let available = total_size - 2.0 * margin;
    let total_gutter = gutter * (count - 1.0);
    (available - total_gutter) / count
}

/// Width of one column across `frame_width`.
pub fn column_width(columns: &TrackGridConfig, frame_width: f64) -> f64 {
    track_size(columns, frame_width)
}

/// Height of one row across `frame_height`.
pub fn row_height(rows: &TrackGridConfig, frame_height: f64) -> f64 {
    track_size(rows, frame_height)
}

/// Column width and row height for a frame.
pub fn module_dimensions(
    columns: &TrackGridConfig,
    rows: &TrackGridConfig,
    frame_width: f64,
    frame_height: f64,
) -> ModuleSize {
    ModuleSize {
        width: column_width(columns, frame_width),
        height: row_height(rows, frame_height),
    }
}

/// Leading and trailing edge of every track, walking from the leading margin.
pub(crate) fn track_edges(
    config: &TrackGridConfig,
    total_size: f64,
) -> impl Iterator<Item = (f64, f64)> {
    let size = track_size(config, total_size);
    let step = size + config.gutter_px(total_size);
    let start = config.margin_px(total_size);
    (0..config.count).map(move |i| {
        let lead = start + f64::from(i) * step;
        (lead, lead + size)
    })
}
