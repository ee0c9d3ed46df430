//! Grouped box plots

use super::BoxPlot;
use crate::figure::{
    axis_max, category_label, palette_color, Figure, AXIS_LABEL_FONT_SIZE, LEGEND_FONT_SIZE,
    TITLE_FONT_SIZE,
};
use anyhow::Result;
use plotters::coord::Shift;
use plotters::data::Quartiles;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;

const GROUP_WIDTH: f64 = 0.8;
const BOX_GAP: f64 = 0.02;

pub(super) fn draw(plot: &BoxPlot, path: &Path) -> Result<()> {
    let fig = plot.figure;
    let root = BitMapBackend::new(path, fig.pixels()).into_drawing_area();
    root.fill(&WHITE)?;

    // Legend sits in its own column so it never covers the last group's boxes
    let legend_width = fig.legend_width(plot.hues.iter().map(String::as_str));
    let (plot_area, legend_area) = root.split_horizontally(fig.pixels().0 - legend_width);

    let fitted: Vec<String> = plot.groups.iter().map(|g| fig.fit_label(g)).collect();
    let labels: Vec<&str> = fitted.iter().map(String::as_str).collect();
    let num_groups = labels.len();
    let num_hues = plot.hues.len().max(1);
    let x_max = num_groups.max(1) as f64 - 0.5;
    let y_max = axis_max(plot.cells.iter().flat_map(|c| c.samples.iter().copied()));

    let mut chart = ChartBuilder::on(&plot_area)
        .caption(&plot.title, ("sans-serif", fig.scale(TITLE_FONT_SIZE)))
        .margin(fig.scale(15))
        .x_label_area_size(fig.rotated_label_area(labels.iter().copied()))
        .y_label_area_size(fig.scale(70))
        .build_cartesian_2d(-0.5..x_max, 0f64..y_max)?;

    let x_formatter = |x: &f64| category_label(&labels, *x);
    let y_formatter = |y: &f64| format!("{:.2}", y);

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(num_groups.max(1))
        .x_label_formatter(&x_formatter)
        .x_label_style(fig.x_tick_font())
        .y_label_formatter(&y_formatter)
        .y_label_style(fig.y_tick_font())
        .x_desc("group")
        .y_desc(plot.y_desc.as_str())
        .axis_desc_style(("sans-serif", fig.scale(AXIS_LABEL_FONT_SIZE)))
        .draw()?;

    let box_width = GROUP_WIDTH / num_hues as f64;
    let line_width = fig.scale(1).max(1);

    for cell in &plot.cells {
        let samples: Vec<f64> = cell.samples.iter().copied().filter(|v| v.is_finite()).collect();
        if samples.is_empty() {
            continue;
        }

        let quartiles = Quartiles::new(&samples);
        let [lower_fence, lower, median, upper, upper_fence] = quartiles.values().map(f64::from);

        // Whiskers stop at the most extreme sample inside the fences
        let whisker_low = samples
            .iter()
            .copied()
            .filter(|v| *v >= lower_fence)
            .fold(lower, f64::min);
        let whisker_high = samples
            .iter()
            .copied()
            .filter(|v| *v <= upper_fence)
            .fold(upper, f64::max);

        let x_center =
            cell.group as f64 + (cell.hue as f64 - (num_hues as f64 - 1.0) / 2.0) * box_width;
        let left = x_center - box_width / 2.0 + BOX_GAP;
        let right = x_center + box_width / 2.0 - BOX_GAP;
        let cap_left = x_center - box_width / 4.0;
        let cap_right = x_center + box_width / 4.0;
        let color = palette_color(cell.hue);
        let outline = BLACK.stroke_width(line_width);

        chart.draw_series(std::iter::once(Rectangle::new(
            [(left, lower), (right, upper)],
            color.filled(),
        )))?;
        chart.draw_series(std::iter::once(Rectangle::new(
            [(left, lower), (right, upper)],
            outline,
        )))?;
        chart.draw_series(vec![
            PathElement::new(vec![(left, median), (right, median)], outline),
            PathElement::new(vec![(x_center, upper), (x_center, whisker_high)], outline),
            PathElement::new(vec![(x_center, lower), (x_center, whisker_low)], outline),
            PathElement::new(vec![(cap_left, whisker_high), (cap_right, whisker_high)], outline),
            PathElement::new(vec![(cap_left, whisker_low), (cap_right, whisker_low)], outline),
        ])?;

        // Outliers
        chart.draw_series(
            samples
                .iter()
                .filter(|v| **v < whisker_low || **v > whisker_high)
                .map(|v| Circle::new((x_center, *v), fig.scale(3), outline)),
        )?;
    }

    draw_legend(&legend_area, fig, &plot.hues)?;

    root.present()?;
    Ok(())
}

fn draw_legend(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    fig: Figure,
    hues: &[String],
) -> Result<()> {
    if hues.is_empty() {
        return Ok(());
    }

    let swatch = fig.legend_swatch() as i32;
    let gap = fig.scale(8) as i32;
    let row_height = swatch + gap;
    let left = fig.scale(10) as i32;
    let top = fig.scale(TITLE_FONT_SIZE + 40) as i32;
    let font = ("sans-serif", fig.scale(LEGEND_FONT_SIZE))
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Left, VPos::Center));

    for (idx, hue) in hues.iter().enumerate() {
        let y = top + idx as i32 * row_height;
        area.draw(&Rectangle::new(
            [(left, y - swatch / 2), (left + swatch, y + swatch / 2)],
            palette_color(idx).filled(),
        ))?;
        area.draw(&Text::new(hue.as_str(), (left + swatch + gap, y), font.clone()))?;
    }
    Ok(())
}
