//! Turns parametric curves into pixel-space polylines.

use crate::scene::ParametricCurve;
use crate::transform::Viewport;

/// Samples `curve` at its fixed parameter step and projects every sample
/// through `viewport`.
///
/// The parameter runs from `t_start` while `t <= t_end`, so the end of the
/// range is included when the step lands on it exactly. An inverted range
/// yields no points and a collapsed one yields a single point.
pub fn sample_curve(curve: &ParametricCurve, viewport: Viewport) -> Vec<(f64, f64)> {
    let span = curve.t_end - curve.t_start;
    let mut points = if span >= 0.0 {
        Vec::with_capacity((span / curve.step) as usize + 2)
    } else {
        Vec::new()
    };

    let mut t = curve.t_start;
    while t <= curve.t_end {
        let (x, y) = curve.eval(t);
        points.push(viewport.to_pixel(x, y));
        t += curve.step;
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style;

    fn ident(t: f64) -> f64 {
        t
    }

    fn double(t: f64) -> f64 {
        2.0 * t
    }

    fn quarter_step_curve(t_start: f64, t_end: f64) -> ParametricCurve {
        let mut curve = ParametricCurve::new(ident, double, t_start, t_end, style::CURVE_BLUE);
        curve.step = 0.25;
        curve
    }

    #[test]
    fn fixed_step_covers_the_whole_range() {
        let viewport = Viewport::new(800, 800);
        // 0.25 is exact in binary, so [0, 1] yields exactly five samples.
        let points = sample_curve(&quarter_step_curve(0.0, 1.0), viewport);
        assert_eq!(points.len(), 5);
        assert_eq!(points[0], viewport.to_pixel(0.0, 0.0));
        assert_eq!(points[4], viewport.to_pixel(1.0, 2.0));
    }

    #[test]
    fn collapsed_range_yields_a_single_point() {
        let viewport = Viewport::new(800, 800);
        let points = sample_curve(&quarter_step_curve(2.0, 2.0), viewport);
        assert_eq!(points, vec![viewport.to_pixel(2.0, 4.0)]);
    }

    #[test]
    fn inverted_range_yields_nothing() {
        let viewport = Viewport::new(800, 800);
        let points = sample_curve(&quarter_step_curve(1.0, 0.0), viewport);
        assert!(points.is_empty());
    }

    #[test]
    fn samples_are_projected_through_the_viewport() {
        let viewport = Viewport::new(400, 400);
        let points = sample_curve(&quarter_step_curve(1.0, 1.0), viewport);
        // (1, 2) around a 200 px center at 45 px per unit.
        assert_eq!(points, vec![(245.0, 110.0)]);
    }
}
