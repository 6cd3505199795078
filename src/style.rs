//! Fixed colors, stroke widths, and layout metrics for the diagram.

use plotters::style::RGBColor;

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

/// First parabola and its tangent line.
pub const CURVE_BLUE: RGBColor = RGBColor(0, 0, 255);
/// Mirrored parabola and its tangent line.
pub const CURVE_RED: RGBColor = RGBColor(220, 0, 0);
/// Spiral curve and the horizontal reference segment.
pub const CURVE_GREEN: RGBColor = RGBColor(0, 200, 0);
/// Light gridlines.
pub const GRID_GRAY: RGBColor = RGBColor(230, 230, 230);
/// Tick labels along the axes.
pub const LABEL_GRAY: RGBColor = RGBColor(128, 128, 128);

// ---------------------------------------------------------------------------
// Strokes and markers
// ---------------------------------------------------------------------------

/// Gridline stroke width in pixels.
pub const GRID_STROKE_WIDTH: u32 = 1;
/// Axis stroke width in pixels.
pub const AXIS_STROKE_WIDTH: u32 = 1;
/// Stroke width for curves in pixels.
pub const CURVE_STROKE_WIDTH: u32 = 2;
/// Stroke width for dashed lines in pixels.
pub const DASH_STROKE_WIDTH: u32 = 2;
/// On/off pixel lengths for tangent-line dashes.
pub const TANGENT_DASH: (f64, f64) = (6.0, 6.0);
/// On/off pixel lengths for the reference-segment dashes.
pub const REFERENCE_DASH: (f64, f64) = (5.0, 5.0);
/// Radius of the filled tangency-point markers in pixels.
pub const MARKER_RADIUS: i32 = 4;

// ---------------------------------------------------------------------------
// Grid and text
// ---------------------------------------------------------------------------

/// Gridlines are drawn at every integer from `-GRID_EXTENT` to `GRID_EXTENT`.
pub const GRID_EXTENT: i32 = 20;
/// Font size of the axis tick labels in pixels.
pub const TICK_FONT_PX: u32 = 10;

// ---------------------------------------------------------------------------
// Legend layout
// ---------------------------------------------------------------------------

/// Top-left corner of the legend panel in pixels.
pub const LEGEND_ORIGIN: (i32, i32) = (20, 20);
/// Width and height of the legend panel in pixels.
pub const LEGEND_SIZE: (i32, i32) = (230, 110);
/// Opacity of the white legend background (220/255).
pub const LEGEND_PANEL_ALPHA: f64 = 220.0 / 255.0;
/// Font size of the legend text in pixels.
pub const LEGEND_FONT_PX: u32 = 11;
/// Vertical distance between consecutive legend baselines.
pub const LEGEND_LINE_HEIGHT: i32 = 18;
/// First text baseline, measured from the panel top.
pub const LEGEND_FIRST_BASELINE: i32 = 15;
/// Horizontal inset of swatches and text from the panel edge.
pub const LEGEND_TEXT_INDENT: i32 = 5;
/// Width and height of a legend color swatch.
pub const LEGEND_SWATCH_SIZE: (i32, i32) = (12, 8);
/// Horizontal distance from a swatch's left edge to its label.
pub const LEGEND_SWATCH_TEXT_GAP: i32 = 18;
/// Extra gap inserted before the plain lines that follow the swatched ones.
pub const LEGEND_SECTION_GAP: i32 = 5;
