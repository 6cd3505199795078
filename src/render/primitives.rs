//! Low-level drawing helpers shared by the render passes.
//!
//! Geometry stays fractional (`f64`) for as long as possible; these helpers
//! are the single place where it is rounded onto the backend's integer
//! pixel grid.

use anyhow::{Result, anyhow};
use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::prelude::*;

/// Rounds a fractional pixel coordinate to the nearest backend coordinate.
pub fn round_i32(v: f64) -> i32 {
    v.round() as i32
}

/// Rounds a fractional polyline onto the backend grid.
pub fn to_backend_points(points: &[(f64, f64)]) -> Vec<(i32, i32)> {
    points
        .iter()
        .map(|&(x, y)| (round_i32(x), round_i32(y)))
        .collect()
}

/// Strokes an open polyline through `points`. Fewer than two points is a
/// no-op.
pub fn draw_polyline<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    points: &[(f64, f64)],
    stroke: ShapeStyle,
) -> Result<()> {
    if points.len() < 2 {
        return Ok(());
    }
    area.draw(&PathElement::new(to_backend_points(points), stroke))
        .map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}

/// Strokes a dashed straight segment from `start` to `end`, walking the
/// segment in `(on, off)` pixel steps. The pattern starts with an "on" dash
/// at `start` and the final dash is clipped to the segment end.
pub fn draw_dashed_segment<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    start: (f64, f64),
    end: (f64, f64),
    dash: (f64, f64),
    stroke: ShapeStyle,
) -> Result<()> {
    let (dash_on, dash_off) = dash;
    let (dx, dy) = (end.0 - start.0, end.1 - start.1);
    let length = (dx * dx + dy * dy).sqrt();
    if length == 0.0 || dash_on <= 0.0 {
        return Ok(());
    }
    let (ux, uy) = (dx / length, dy / length);

    let mut pos = 0.0;
    while pos < length {
        let dash_end = (pos + dash_on).min(length);
        let a = (start.0 + ux * pos, start.1 + uy * pos);
        let b = (start.0 + ux * dash_end, start.1 + uy * dash_end);
        area.draw(&PathElement::new(
            vec![
                (round_i32(a.0), round_i32(a.1)),
                (round_i32(b.0), round_i32(b.1)),
            ],
            stroke,
        ))
        .map_err(|e| anyhow!("{:?}", e))?;
        pos = dash_end + dash_off;
    }
    Ok(())
}
