//! Default guide colors per grid kind.

use crate::config::{GridColor, GridKind};

/// Columns: translucent red.
pub const COLUMNS: GridColor = GridColor {
    r: 1.0,
    g: 0.0,
    b: 0.0,
    a: 0.1,
};

/// Rows: translucent blue.
pub const ROWS: GridColor = GridColor {
    r: 0.0,
    g: 0.4,
    b: 1.0,
    a: 0.1,
};

/// Baseline: cyan, more opaque since the rules are one pixel thick.
pub const BASELINE: GridColor = GridColor {
    r: 0.0,
    g: 0.8,
    b: 1.0,
    a: 0.3,
};

/// Default color for `kind`.
pub const fn default_color(kind: GridKind) -> GridColor {
    match kind {
        GridKind::Columns => COLUMNS,
        GridKind::Rows => ROWS,
        GridKind::Baseline => BASELINE,
    }
}
