//! # tangent-viz
//!
//! Renders a static educational diagram: an integer coordinate grid with
//! labeled axes, three parametric curves (a parabola, its mirror image, and
//! a spiral), the dashed tangent lines at `(2, 4)` and `(-2, 4)` with filled
//! tangency markers, a dashed horizontal reference segment, and a legend
//! panel. The scene is described in model coordinates and rasterized with
//! plotters into an RGB buffer that the bundled egui binary shows in a
//! fixed 800 x 800 window.
//!
//! ## Features
//! - Scene model with the fixed curves, tangents, markers, and legend
//!   ([`Scene::standard`])
//! - Model-to-pixel transform at 45 px per unit, y axis up ([`Viewport`])
//! - Fixed-step curve sampling into fractional pixel polylines
//!   ([`sample_curve`])
//! - Stateless rendering onto any plotters backend ([`render_scene`]) or
//!   into an in-memory RGB8 buffer ([`render_to_buffer`])
//!
//! ### Example
//! ```no_run
//! use tangent_viz::{Scene, Viewport, render_to_buffer};
//!
//! let scene = Scene::standard();
//! let rgb = render_to_buffer(&scene, Viewport::new(800, 800))?;
//! assert_eq!(rgb.len(), 800 * 800 * 3);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod render;
pub mod sampler;
pub mod scene;
pub mod style;
pub mod transform;

pub use render::{render_scene, render_to_buffer};
pub use sampler::sample_curve;
pub use scene::{LegendLine, ParametricCurve, PointMarker, ReferenceSegment, Scene, TangentLine};
pub use transform::{PIXELS_PER_UNIT, Viewport};
