//! Drawing passes for curves, tangent lines, point markers, and the
//! horizontal reference segment.

use anyhow::{Result, anyhow};
use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::prelude::*;

use crate::render::primitives::{draw_dashed_segment, draw_polyline, round_i32};
use crate::sampler::sample_curve;
use crate::scene::{ParametricCurve, PointMarker, ReferenceSegment, TangentLine};
use crate::style;
use crate::transform::Viewport;

/// Samples a parametric curve and strokes it as a solid polyline.
pub fn draw_curve<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    curve: &ParametricCurve,
    viewport: Viewport,
) -> Result<()> {
    let points = sample_curve(curve, viewport);
    let stroke = ShapeStyle::from(&curve.color).stroke_width(style::CURVE_STROKE_WIDTH);
    draw_polyline(area, &points, stroke)
}

/// Draws a tangent line as a dashed segment between its model endpoints.
pub fn draw_tangent<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    tangent: &TangentLine,
    viewport: Viewport,
) -> Result<()> {
    let (a, b) = tangent.endpoints();
    let start = viewport.to_pixel(a.0, a.1);
    let end = viewport.to_pixel(b.0, b.1);
    let stroke = ShapeStyle::from(&tangent.color).stroke_width(style::DASH_STROKE_WIDTH);
    draw_dashed_segment(area, start, end, style::TANGENT_DASH, stroke)
}

/// Fills a circular marker of fixed pixel radius at a model point.
pub fn draw_marker<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    marker: &PointMarker,
    viewport: Viewport,
) -> Result<()> {
    let (x, y) = viewport.to_pixel(marker.x, marker.y);
    area.draw(&Circle::new(
        (round_i32(x), round_i32(y)),
        marker.radius,
        marker.color.filled(),
    ))
    .map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}

/// Draws the dashed horizontal segment centered on the y axis at the
/// segment's model height.
pub fn draw_reference_segment<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    segment: &ReferenceSegment,
    viewport: Viewport,
) -> Result<()> {
    let (cx, y) = viewport.to_pixel(0.0, segment.y_model);
    let half = f64::from(segment.half_width_px);
    let stroke = ShapeStyle::from(&segment.color).stroke_width(style::DASH_STROKE_WIDTH);
    draw_dashed_segment(
        area,
        (cx - half, y),
        (cx + half, y),
        style::REFERENCE_DASH,
        stroke,
    )
}
