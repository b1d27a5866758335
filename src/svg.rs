//! SVG preview of a grid configuration.
//!
//! Draws the frame scaled into a fixed panel, then every visible sub-grid in
//! its own color: column and row tracks as filled bands, baseline rules as
//! lines. Invisible sub-grids are skipped.
//!
//! # Example
//!
//! ```
//! use zengrid::{GridConfig, GridUnit, TrackGridConfig, svg::render_preview_svg};
//!
//! let config = GridConfig::new()
//!     .with_columns(
//!         TrackGridConfig::columns(12)
//!             .gutter(24.0, GridUnit::Pixels)
//!             .margin(32.0, GridUnit::Pixels),
//!     )
//!     .with_baseline_height(8.0);
//!
//! let svg = render_preview_svg(&config, 1440.0, 900.0);
//! assert!(svg.starts_with("<svg"));
//! assert!(svg.contains("1440×900"));
//! ```

use crate::aspect::{aspect_ratio_name, calculate_aspect_ratio};
use crate::config::{GridColor, GridConfig, GridKind, TrackGridConfig};
use crate::geometry::{track_edges, track_size};
use crate::preview::baseline_segments;
use crate::validate::MIN_BASELINE_HEIGHT;

/// Maximum width of the frame panel.
const MAX_PANEL_W: f64 = 400.0;
/// Maximum height of the frame panel.
const MAX_PANEL_H: f64 = 300.0;
/// Horizontal margin.
const MARGIN_X: f64 = 30.0;
/// Top margin.
const MARGIN_TOP: f64 = 20.0;
/// Height of label text area above the panel.
const LABEL_H: f64 = 22.0;
/// Height of each annotation line below the panel.
const ANNOTATION_H: f64 = 16.0;

/// Render `config` on a `width × height` frame as a complete SVG document.
pub fn render_preview_svg(config: &GridConfig, width: f64, height: f64) -> String {
    let (pw, ph, scale) = scale_to_fit(width, height);
    let annotations = annotations(config, width, height);

    let total_w = MAX_PANEL_W + 2.0 * MARGIN_X;
    let total_h =
        MARGIN_TOP + LABEL_H + MAX_PANEL_H + 8.0 + annotations.len() as f64 * ANNOTATION_H + MARGIN_TOP;

    let mut svg = String::with_capacity(4096);
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        total_w as u32, total_h as u32, total_w, total_h
    ));
    svg.push('\n');

    svg.push_str(
        r##"<style>
  text { font-family: "Consolas", "DejaVu Sans Mono", "Courier New", monospace; }
  .label { font-size: 13px; font-weight: bold; fill: #333; }
  .annotation { font-size: 11px; fill: #666; }
  .frame { fill: #fafafa; stroke: #999; stroke-width: 1; }
  @media (prefers-color-scheme: dark) {
    .label { fill: #e0e0e0; }
    .annotation { fill: #aaa; }
    .frame { fill: #2d2d2d; stroke: #555; }
  }
</style>
"##,
    );

    let center_x = total_w / 2.0;
    let label = format!(
        "{}×{}  {}",
        width,
        height,
        aspect_ratio_name(calculate_aspect_ratio(width, height))
    );
    svg.push_str(&format!(
        r#"<text x="{}" y="{}" class="label" text-anchor="middle">{}</text>"#,
        center_x,
        MARGIN_TOP + 14.0,
        escape_xml(&label)
    ));
    svg.push('\n');

    let x0 = center_x - pw / 2.0;
    let y0 = MARGIN_TOP + LABEL_H;
    svg.push_str(&format!(
        r#"<rect x="{x0:.1}" y="{y0:.1}" width="{pw:.1}" height="{ph:.1}" class="frame"/>"#
    ));
    svg.push('\n');

    // Clip guides to the frame; negative baseline offsets start above it.
    svg.push_str(&format!(
        r#"<clipPath id="frame"><rect x="{x0:.1}" y="{y0:.1}" width="{pw:.1}" height="{ph:.1}"/></clipPath>"#
    ));
    svg.push('\n');
    svg.push_str(r#"<g clip-path="url(#frame)">"#);
    svg.push('\n');

    if let Some(columns) = config.columns.as_ref().filter(|c| c.visible) {
        for (left, right) in track_edges(columns, width) {
            push_band(&mut svg, x0 + left * scale, y0, (right - left) * scale, ph, &columns.color);
        }
    }
    if let Some(rows) = config.rows.as_ref().filter(|r| r.visible) {
        for (top, bottom) in track_edges(rows, height) {
            push_band(&mut svg, x0, y0 + top * scale, pw, (bottom - top) * scale, &rows.color);
        }
    }
    // Baselines that fail structural validation are not drawn.
    if let Some(baseline) = config
        .baseline
        .as_ref()
        .filter(|b| b.visible && b.height >= MIN_BASELINE_HEIGHT)
    {
        let stroke = opaque_enough(&baseline.color);
        for seg in baseline_segments(baseline, width, height) {
            svg.push_str(&format!(
                r#"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{}" stroke-width="1"/>"#,
                x0 + seg.x1 * scale,
                y0 + seg.y1 * scale,
                x0 + seg.x2 * scale,
                y0 + seg.y2 * scale,
                stroke
            ));
            svg.push('\n');
        }
    }

    svg.push_str("</g>\n");

    let mut y = y0 + MAX_PANEL_H + 8.0;
    for line in &annotations {
        y += ANNOTATION_H;
        svg.push_str(&format!(
            r#"<text x="{}" y="{:.1}" class="annotation" text-anchor="middle">{}</text>"#,
            center_x,
            y - 4.0,
            escape_xml(line)
        ));
        svg.push('\n');
    }

    svg.push_str("</svg>\n");
    svg
}

fn push_band(svg: &mut String, x: f64, y: f64, w: f64, h: f64, color: &GridColor) {
    if w <= 0.0 || h <= 0.0 {
        return;
    }
    svg.push_str(&format!(
        r#"<rect x="{x:.1}" y="{y:.1}" width="{w:.1}" height="{h:.1}" fill="{}"/>"#,
        color.to_css()
    ));
    svg.push('\n');
}

/// Baseline rules are hairlines; a 10% alpha would vanish at preview scale.
fn opaque_enough(color: &GridColor) -> String {
    color.with_alpha(color.a.max(0.5)).to_css()
}

/// One summary line per present sub-grid, in [`GridKind::ALL`] order.
fn annotations(config: &GridConfig, width: f64, height: f64) -> Vec<String> {
    config
        .kinds()
        .map(|kind| match kind {
            GridKind::Columns => track_summary(kind, config.columns.as_ref(), width),
            GridKind::Rows => track_summary(kind, config.rows.as_ref(), height),
            GridKind::Baseline => {
                let b = config.baseline.as_ref().map_or(0.0, |b| b.height);
                format!("baseline every {b}px")
            }
        })
        .collect()
}

fn track_summary(kind: GridKind, track: Option<&TrackGridConfig>, total: f64) -> String {
    match track {
        Some(t) => format!(
            "{} {} × {:.1}px{}",
            t.count,
            kind,
            track_size(t, total),
            if t.visible { "" } else { " (hidden)" }
        ),
        None => String::new(),
    }
}

/// Scale the frame to fit within MAX_PANEL_W × MAX_PANEL_H, preserving aspect ratio.
fn scale_to_fit(w: f64, h: f64) -> (f64, f64, f64) {
    if w <= 0.0 || h <= 0.0 {
        return (1.0, 1.0, 1.0);
    }
    let scale = (MAX_PANEL_W / w).min(MAX_PANEL_H / h);
    (w * scale, h * scale, scale)
}

/// Escape special characters for XML text content.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BaselineGridConfig;
    use crate::units::GridUnit;

    fn desktop() -> GridConfig {
        GridConfig::new()
            .with_columns(
                TrackGridConfig::columns(12)
                    .gutter(24.0, GridUnit::Pixels)
                    .margin(32.0, GridUnit::Pixels),
            )
            .with_rows(TrackGridConfig::rows(4).gutter(20.0, GridUnit::Pixels))
            .with_baseline_height(8.0)
    }

    #[test]
    fn svg_document_shape() {
        let svg = render_preview_svg(&desktop(), 1440.0, 900.0);
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>\n"));
        assert!(svg.contains("1440×900"));
        // 1.6 is within tolerance of φ, which precedes any 8:5 fallback.
        assert!(svg.contains("1440×900  φ:1"));
    }

    #[test]
    fn svg_draws_each_track() {
        let svg = render_preview_svg(&desktop(), 1440.0, 900.0);
        let column_fill = GridKind::Columns.default_color().to_css();
        let row_fill = GridKind::Rows.default_color().to_css();
        assert_eq!(svg.matches(&format!(r#"fill="{column_fill}""#)).count(), 12);
        assert_eq!(svg.matches(&format!(r#"fill="{row_fill}""#)).count(), 4);
        // 900 / 8 → 113 baseline rules
        assert_eq!(svg.matches("<line").count(), 113);
    }

    #[test]
    fn svg_skips_hidden_grids() {
        let config = GridConfig::new()
            .with_columns(TrackGridConfig::columns(3).visible(false))
            .with_baseline(BaselineGridConfig::new(10.0).visible(false));
        let svg = render_preview_svg(&config, 300.0, 300.0);
        assert!(!svg.contains("<line"));
        assert!(!svg.contains("fill=\"rgba"));
        assert!(svg.contains("(hidden)"));
    }

    #[test]
    fn svg_skips_sub_pixel_baseline() {
        let config = GridConfig::new().with_baseline_height(1e-9);
        let svg = render_preview_svg(&config, 1000.0, 1000.0);
        assert!(!svg.contains("<line"));
        assert!(svg.contains("baseline every"));
    }

    #[test]
    fn svg_annotations_per_grid() {
        let svg = render_preview_svg(&desktop(), 1440.0, 900.0);
        assert!(svg.contains("12 columns × 92.7px"));
        assert!(svg.contains("4 rows × 210.0px"));
        assert!(svg.contains("baseline every 8px"));
    }

    #[test]
    fn svg_empty_config() {
        let svg = render_preview_svg(&GridConfig::new(), 800.0, 600.0);
        assert!(svg.contains("800×600  4:3"));
        assert!(!svg.contains("class=\"annotation\""));
    }

    #[test]
    fn svg_is_valid_xml() {
        let svg = render_preview_svg(&desktop(), 1080.0, 1920.0);
        assert!(svg.contains("</svg>"));
        assert!(!svg.contains("<<"));
        assert!(svg.contains("9:16"));
    }
}
