//! Categorical bar plots

use super::BarPlot;
use crate::figure::{
    axis_max, category_label, palette_color, AXIS_LABEL_FONT_SIZE, DATA_LABEL_FONT_SIZE,
    TITLE_FONT_SIZE,
};
use anyhow::Result;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;

const BAR_HALF_WIDTH: f64 = 0.4;

pub(super) fn draw(plot: &BarPlot, path: &Path) -> Result<()> {
    let fig = plot.figure;
    let root = BitMapBackend::new(path, fig.pixels()).into_drawing_area();
    root.fill(&WHITE)?;

    let fitted: Vec<String> = plot.bars.iter().map(|b| fig.fit_label(&b.label)).collect();
    let labels: Vec<&str> = fitted.iter().map(String::as_str).collect();
    let num_bars = labels.len();
    let x_max = num_bars.max(1) as f64 - 0.5;
    let y_max = axis_max(
        plot.bars
            .iter()
            .map(|b| b.value)
            .chain(plot.reference_line),
    );

    let mut chart = ChartBuilder::on(&root)
        .caption(&plot.title, ("sans-serif", fig.scale(TITLE_FONT_SIZE)))
        .margin(fig.scale(15))
        .x_label_area_size(fig.rotated_label_area(labels.iter().copied()))
        .y_label_area_size(fig.scale(70))
        .build_cartesian_2d(-0.5..x_max, 0f64..y_max)?;

    let x_formatter = |x: &f64| category_label(&labels, *x);
    let y_formatter = |y: &f64| format!("{:.1}", y);

    let mut mesh = chart.configure_mesh();
    mesh.disable_x_mesh()
        .x_labels(num_bars.max(1))
        .x_label_formatter(&x_formatter)
        .x_label_style(fig.x_tick_font())
        .y_label_formatter(&y_formatter)
        .y_label_style(fig.y_tick_font())
        .y_desc(plot.y_desc.as_str())
        .axis_desc_style(("sans-serif", fig.scale(AXIS_LABEL_FONT_SIZE)));
    if let Some(desc) = &plot.x_desc {
        mesh.x_desc(desc.as_str());
    }
    mesh.draw()?;

    for (idx, bar) in plot.bars.iter().enumerate() {
        if !bar.value.is_finite() {
            tracing::warn!("Skipping non-finite bar '{}' in {}", bar.label, plot.file_name);
            continue;
        }

        let x = idx as f64;
        chart.draw_series(std::iter::once(Rectangle::new(
            [(x - BAR_HALF_WIDTH, 0.0), (x + BAR_HALF_WIDTH, bar.value)],
            palette_color(idx).filled(),
        )))?;

        if plot.value_labels {
            chart.draw_series(std::iter::once(Text::new(
                format!("{:.1}", bar.value),
                (x, bar.value),
                ("sans-serif", fig.scale(DATA_LABEL_FONT_SIZE))
                    .into_font()
                    .color(&BLACK)
                    .pos(Pos::new(HPos::Center, VPos::Bottom)),
            )))?;
        }
    }

    if let Some(y) = plot.reference_line {
        chart.draw_series(DashedLineSeries::new(
            vec![(-0.5, y), (x_max, y)],
            fig.scale(10),
            fig.scale(6),
            RED.stroke_width(fig.scale(2)),
        ))?;
    }

    root.present()?;
    Ok(())
}
