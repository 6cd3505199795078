//! Scene model: the curves, tangent lines, markers, and legend content
//! that make up the tangent-line diagram.
//!
//! All geometry is stored in model coordinates (units, not pixels); the
//! render layer projects it through a [`Viewport`](crate::transform::Viewport)
//! when drawing.

use plotters::style::RGBColor;

use crate::style;

/// A curve given by `t -> (x(t), y(t))`, sampled at a fixed parameter step.
#[derive(Debug, Clone, Copy)]
pub struct ParametricCurve {
    pub x: fn(f64) -> f64,
    pub y: fn(f64) -> f64,
    pub t_start: f64,
    pub t_end: f64,
    /// Parameter increment between consecutive samples.
    pub step: f64,
    pub color: RGBColor,
}

impl ParametricCurve {
    /// Sampling step shared by all stock curves.
    pub const DEFAULT_STEP: f64 = 0.02;

    pub fn new(
        x: fn(f64) -> f64,
        y: fn(f64) -> f64,
        t_start: f64,
        t_end: f64,
        color: RGBColor,
    ) -> Self {
        Self {
            x,
            y,
            t_start,
            t_end,
            step: Self::DEFAULT_STEP,
            color,
        }
    }

    /// Evaluates the curve at parameter `t`.
    pub fn eval(&self, t: f64) -> (f64, f64) {
        ((self.x)(t), (self.y)(t))
    }
}

/// A dashed tangent line through `(x0, y0)` with the given slope.
#[derive(Debug, Clone, Copy)]
pub struct TangentLine {
    pub x0: f64,
    pub y0: f64,
    pub slope: f64,
    pub color: RGBColor,
}

impl TangentLine {
    /// Half-length of the drawn segment, in model units of `x`.
    pub const HALF_LENGTH: f64 = 4.0;

    pub fn new(x0: f64, y0: f64, slope: f64, color: RGBColor) -> Self {
        Self {
            x0,
            y0,
            slope,
            color,
        }
    }

    /// Model-space endpoints, `HALF_LENGTH` units of `x` on either side of
    /// the tangency point.
    pub fn endpoints(&self) -> ((f64, f64), (f64, f64)) {
        let x1 = self.x0 - Self::HALF_LENGTH;
        let x2 = self.x0 + Self::HALF_LENGTH;
        (
            (x1, self.y0 + self.slope * (x1 - self.x0)),
            (x2, self.y0 + self.slope * (x2 - self.x0)),
        )
    }
}

/// A filled circular marker at a model point.
#[derive(Debug, Clone, Copy)]
pub struct PointMarker {
    pub x: f64,
    pub y: f64,
    /// Radius in pixels, independent of the viewport scale.
    pub radius: i32,
    pub color: RGBColor,
}

impl PointMarker {
    pub fn new(x: f64, y: f64, color: RGBColor) -> Self {
        Self {
            x,
            y,
            radius: style::MARKER_RADIUS,
            color,
        }
    }
}

/// A dashed horizontal segment at model height `y_model`, centered on the
/// y axis and extending a fixed number of pixels to each side.
#[derive(Debug, Clone, Copy)]
pub struct ReferenceSegment {
    pub y_model: f64,
    pub half_width_px: i32,
    pub color: RGBColor,
}

/// One line of the legend panel.
#[derive(Debug, Clone, Copy)]
pub struct LegendLine {
    /// Color swatch drawn before the label; `None` for plain text lines.
    pub swatch: Option<RGBColor>,
    pub label: &'static str,
}

impl LegendLine {
    pub fn swatched(color: RGBColor, label: &'static str) -> Self {
        Self {
            swatch: Some(color),
            label,
        }
    }

    pub fn plain(label: &'static str) -> Self {
        Self {
            swatch: None,
            label,
        }
    }
}

/// Everything the renderer draws on top of the grid.
#[derive(Debug, Clone)]
pub struct Scene {
    pub curves: Vec<ParametricCurve>,
    pub tangents: Vec<TangentLine>,
    pub markers: Vec<PointMarker>,
    pub reference: ReferenceSegment,
    pub legend: Vec<LegendLine>,
}

impl Scene {
    /// The fixed diagram: two parabolas, a spiral, the tangents at
    /// `(2, 4)` and `(-2, 4)` with their markers, a dashed reference
    /// segment, and the five-line legend.
    pub fn standard() -> Self {
        let curves = vec![
            ParametricCurve::new(parabola_x, parabola_y, -3.5, 3.5, style::CURVE_BLUE),
            ParametricCurve::new(mirrored_parabola_x, parabola_y, -3.5, 3.5, style::CURVE_RED),
            ParametricCurve::new(spiral_x, spiral_y, -10.0, 10.0, style::CURVE_GREEN),
        ];

        // y = x^2 has slope 2x, so the tangents at x = +/-2 have slope +/-4.
        let tangents = vec![
            TangentLine::new(2.0, 4.0, 4.0, style::CURVE_BLUE),
            TangentLine::new(-2.0, 4.0, -4.0, style::CURVE_RED),
        ];
        let markers = tangents
            .iter()
            .map(|t| PointMarker::new(t.x0, t.y0, t.color))
            .collect();

        let reference = ReferenceSegment {
            y_model: 0.6,
            half_width_px: 100,
            color: style::CURVE_GREEN,
        };

        let legend = vec![
            LegendLine::swatched(style::CURVE_BLUE, "Curve 1: x=t, y=t^2"),
            LegendLine::swatched(style::CURVE_RED, "Curve 2: x=-t, y=t^2"),
            LegendLine::swatched(style::CURVE_GREEN, "Curve 3: x=t*cos(t)/3, y=t*sin(t)/3"),
            LegendLine::plain("Tangent point at t = 2.0"),
            LegendLine::plain("Dashed lines = Tangent lines"),
        ];

        Self {
            curves,
            tangents,
            markers,
            reference,
            legend,
        }
    }
}

fn parabola_x(t: f64) -> f64 {
    t
}

fn parabola_y(t: f64) -> f64 {
    t * t
}

fn mirrored_parabola_x(t: f64) -> f64 {
    -t
}

fn spiral_x(t: f64) -> f64 {
    t * t.cos() / 3.0
}

fn spiral_y(t: f64) -> f64 {
    t * t.sin() / 3.0
}
