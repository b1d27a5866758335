//! Layout grid computation for design tools: columns, rows and baseline grids.
//!
//! Pure functions over plain values: no host document, no I/O, no shared
//! state. `no_std` compatible (requires `alloc`).
//!
//! # Modules
//!
//! - [`units`]: Pixel/percent conversion
//! - [`config`]: Grid configuration value types
//! - [`aspect`]: Aspect ratio parsing (including `√2` and `φ`) and naming
//! - [`geometry`]: Column width, row height and module size
//! - [`scale`]: Rescaling a configuration for a different frame size
//! - [`validate`]: Structural (blocking) and advisory (hint) validation
//! - [`preview`]: Line segments and path data for grid previews
//! - [`color`]: CSS string forms of [`GridColor`]
//! - [`defaults`]: Default colors per grid kind
//! - `svg`: SVG preview document (feature `svg`)
//!
//! # Example
//!
//! ```
//! use zengrid::{GridConfig, GridUnit, TrackGridConfig, column_width, validate_structure};
//!
//! let columns = TrackGridConfig::columns(12)
//!     .gutter(24.0, GridUnit::Pixels)
//!     .margin(32.0, GridUnit::Pixels);
//!
//! let width = column_width(&columns, 1440.0);
//! assert!((width - 92.666_666).abs() < 1e-3);
//!
//! let config = GridConfig::new().with_columns(columns);
//! assert!(validate_structure(&config, 1440.0, 900.0).is_valid());
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod aspect;
pub mod color;
pub mod config;
pub mod defaults;
pub mod geometry;
mod math;
pub mod preview;
pub mod scale;
#[cfg(feature = "svg")]
pub mod svg;
pub mod units;
pub mod validate;

pub use aspect::{
    AspectRatio, FrameSize, NAMED_RATIOS, NamedRatio, ParseRatioError, RatioTerm,
    aspect_ratio_name, aspect_ratio_name_with_tolerance, calculate_aspect_ratio,
    match_named_ratio, parse_aspect_ratio, parse_aspect_ratio_with_base,
};
pub use color::{
    DEFAULT_FALLBACK_ALPHA, FALLBACK_COLOR, ParseColorError, css_to_grid_color,
    css_to_grid_color_default, grid_color_to_css,
};
pub use config::{
    BaselineGridConfig, ColumnGridConfig, GridAlignment, GridColor, GridConfig, GridKind,
    RowGridConfig, TrackGridConfig,
};
pub use geometry::{ModuleSize, column_width, module_dimensions, row_height};
pub use preview::{
    PreviewPaths, Segment, baseline_segments, column_segments, preview_paths, row_segments,
};
pub use scale::scale_grid;
pub use units::{GridUnit, percent_to_pixels, pixels_to_percent};
pub use validate::{
    AdvisoryReport, GridWarning, StructuralError, ValidationReport, validate_advisory,
    validate_structure,
};
