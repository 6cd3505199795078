//! Translucent legend panel drawn over the finished diagram.

use anyhow::{Result, anyhow};
use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{FontFamily, FontStyle};

use crate::scene::LegendLine;
use crate::style;

/// Draws the legend panel in the top-left corner: a translucent white
/// rectangle, one row per line, a color swatch in front of each curve label,
/// and plain text rows at the panel inset.
pub fn draw_legend<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    lines: &[LegendLine],
) -> Result<()> {
    let (left, top) = style::LEGEND_ORIGIN;
    let (panel_w, panel_h) = style::LEGEND_SIZE;
    let (swatch_w, swatch_h) = style::LEGEND_SWATCH_SIZE;
    let inset = left + style::LEGEND_TEXT_INDENT;

    area.draw(&Rectangle::new(
        [(left, top), (left + panel_w, top + panel_h)],
        WHITE.mix(style::LEGEND_PANEL_ALPHA).filled(),
    ))
    .map_err(|e| anyhow!("{:?}", e))?;

    let label_style = TextStyle::from((
        FontFamily::SansSerif,
        style::LEGEND_FONT_PX,
        FontStyle::Bold,
    ))
    .pos(Pos::new(HPos::Left, VPos::Bottom));

    let mut baseline = top + style::LEGEND_FIRST_BASELINE;
    for (i, line) in lines.iter().enumerate() {
        // The plain rows form a separate block set a little apart.
        if i > 0 && line.swatch.is_none() && lines[i - 1].swatch.is_some() {
            baseline += style::LEGEND_SECTION_GAP;
        }

        let text_x = match line.swatch {
            Some(color) => {
                area.draw(&Rectangle::new(
                    [
                        (inset, baseline - swatch_h),
                        (inset + swatch_w, baseline),
                    ],
                    color.filled(),
                ))
                .map_err(|e| anyhow!("{:?}", e))?;
                inset + style::LEGEND_SWATCH_TEXT_GAP
            }
            None => inset,
        };

        area.draw(&Text::new(
            line.label,
            (text_x, baseline),
            label_style.clone(),
        ))
        .map_err(|e| anyhow!("{:?}", e))?;
        baseline += style::LEGEND_LINE_HEIGHT;
    }
    Ok(())
}
