//! Diagram rendering (plotters 0.3.x).
//!
//! Features:
//! - Draws the whole scene onto any plotters `DrawingArea` ([`render_scene`])
//! - Rasterizes into a tightly packed in-memory RGB8 buffer for GUI display
//!   ([`render_to_buffer`])
//! - Registers embedded DejaVu faces so text renders without system fonts

use std::sync::Once;

use anyhow::{Result, anyhow, bail};
use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters_bitmap::BitMapBackend;

use crate::scene::Scene;
use crate::transform::Viewport;

pub mod curves;
pub mod grid;
pub mod legend;
pub mod primitives;

static INIT_FONTS: Once = Once::new();

/// Registers the embedded DejaVu faces for plotters' `ab_glyph` text path.
/// Safe to call repeatedly; the registration runs once.
fn ensure_fonts_registered() {
    INIT_FONTS.call_once(|| {
        let _ = plotters::style::register_font(
            "sans-serif",
            plotters::style::FontStyle::Normal,
            include_bytes!("../../assets/DejaVuSans.ttf"),
        );
        let _ = plotters::style::register_font(
            "sans-serif",
            plotters::style::FontStyle::Bold,
            include_bytes!("../../assets/DejaVuSans-Bold.ttf"),
        );
    });
}

/// Draws the whole scene onto `root`: white background, grid and axes,
/// curves, tangent lines, tangency markers, the reference segment, and the
/// legend on top.
pub fn render_scene<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    scene: &Scene,
    viewport: Viewport,
) -> Result<()> {
    ensure_fonts_registered();

    root.fill(&WHITE).map_err(|e| anyhow!("{:?}", e))?;
    grid::draw_grid_and_axes(root, viewport)?;
    for curve in &scene.curves {
        curves::draw_curve(root, curve, viewport)?;
    }
    for tangent in &scene.tangents {
        curves::draw_tangent(root, tangent, viewport)?;
    }
    for marker in &scene.markers {
        curves::draw_marker(root, marker, viewport)?;
    }
    curves::draw_reference_segment(root, &scene.reference, viewport)?;
    legend::draw_legend(root, &scene.legend)?;

    root.present().map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}

/// Rasterizes the scene into a tightly packed RGB8 buffer
/// (`width * height * 3` bytes, row-major).
pub fn render_to_buffer(scene: &Scene, viewport: Viewport) -> Result<Vec<u8>> {
    if viewport.width == 0 || viewport.height == 0 {
        bail!(
            "render target must have a nonzero pixel area, got {}x{}",
            viewport.width,
            viewport.height
        );
    }

    let mut buf = vec![0u8; viewport.width as usize * viewport.height as usize * 3];
    {
        let backend = BitMapBackend::with_buffer(&mut buf, (viewport.width, viewport.height));
        let root = backend.into_drawing_area();
        render_scene(&root, scene, viewport)?;
    }
    Ok(buf)
}
