//! Background grid, axes, and integer tick labels.

use anyhow::{Result, anyhow};
use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontFamily;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::render::primitives::round_i32;
use crate::style;
use crate::transform::Viewport;

/// Draws a light gridline at every nonzero integer of both axes, labels each
/// one, and finishes with the two black axes on top.
pub fn draw_grid_and_axes<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    viewport: Viewport,
) -> Result<()> {
    let (cx, cy) = viewport.center();
    let (cx_px, cy_px) = (round_i32(cx), round_i32(cy));
    let width = viewport.width as i32;
    let height = viewport.height as i32;

    let grid_stroke = ShapeStyle::from(&style::GRID_GRAY).stroke_width(style::GRID_STROKE_WIDTH);
    let x_label_style = TextStyle::from((FontFamily::SansSerif, style::TICK_FONT_PX))
        .color(&style::LABEL_GRAY)
        .pos(Pos::new(HPos::Center, VPos::Top));
    let y_label_style = TextStyle::from((FontFamily::SansSerif, style::TICK_FONT_PX))
        .color(&style::LABEL_GRAY)
        .pos(Pos::new(HPos::Left, VPos::Center));

    for i in -style::GRID_EXTENT..=style::GRID_EXTENT {
        if i == 0 {
            continue;
        }
        let gx = round_i32(cx + f64::from(i) * viewport.scale);
        let gy = round_i32(cy - f64::from(i) * viewport.scale);
        let label = i.to_string();

        area.draw(&PathElement::new(vec![(gx, 0), (gx, height)], grid_stroke))
            .map_err(|e| anyhow!("{:?}", e))?;
        area.draw(&PathElement::new(vec![(0, gy), (width, gy)], grid_stroke))
            .map_err(|e| anyhow!("{:?}", e))?;

        // Tick labels sit just below the x axis and just right of the y axis.
        area.draw(&Text::new(
            label.clone(),
            (gx, cy_px + 5),
            x_label_style.clone(),
        ))
        .map_err(|e| anyhow!("{:?}", e))?;
        area.draw(&Text::new(label, (cx_px + 5, gy), y_label_style.clone()))
            .map_err(|e| anyhow!("{:?}", e))?;
    }

    let axis_stroke = ShapeStyle::from(&BLACK).stroke_width(style::AXIS_STROKE_WIDTH);
    area.draw(&PathElement::new(
        vec![(0, cy_px), (width, cy_px)],
        axis_stroke,
    ))
    .map_err(|e| anyhow!("{:?}", e))?;
    area.draw(&PathElement::new(
        vec![(cx_px, 0), (cx_px, height)],
        axis_stroke,
    ))
    .map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}
