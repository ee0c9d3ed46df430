//! Plot descriptions and their plotters renderers
//!
//! A chart is planned into one or more [`Plot`] values that carry everything
//! needed to draw an image: file name, figure size, titles and the derived
//! data. Rendering is a separate step so the data side can be checked without
//! touching a drawing backend.

mod bar;
mod boxplot;

use crate::figure::Figure;
use anyhow::Result;
use std::path::Path;

/// One bar of a bar plot
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
}

/// Bar plot with one bar per category
#[derive(Debug, Clone, PartialEq)]
pub struct BarPlot {
    pub file_name: String,
    pub title: String,
    pub x_desc: Option<String>,
    pub y_desc: String,
    pub figure: Figure,
    pub bars: Vec<Bar>,
    /// Print each value above its bar
    pub value_labels: bool,
    /// Dashed horizontal line at this value
    pub reference_line: Option<f64>,
}

/// Samples of one (group, hue) cell of a box plot
#[derive(Debug, Clone, PartialEq)]
pub struct BoxCell {
    /// Index into [`BoxPlot::groups`]
    pub group: usize,
    /// Index into [`BoxPlot::hues`]
    pub hue: usize,
    pub samples: Vec<f64>,
}

/// Grouped box plot: categories on the x axis, one box per hue inside each
#[derive(Debug, Clone, PartialEq)]
pub struct BoxPlot {
    pub file_name: String,
    pub title: String,
    pub y_desc: String,
    pub figure: Figure,
    pub groups: Vec<String>,
    pub hues: Vec<String>,
    pub cells: Vec<BoxCell>,
}

impl BoxPlot {
    /// Cell for a (group, hue) pair
    pub fn cell(&self, group: usize, hue: usize) -> Option<&BoxCell> {
        self.cells.iter().find(|c| c.group == group && c.hue == hue)
    }
}

/// A single image to render
#[derive(Debug, Clone, PartialEq)]
pub enum Plot {
    Bar(BarPlot),
    Box(BoxPlot),
}

impl Plot {
    /// File name of the image inside the output directory
    pub fn file_name(&self) -> &str {
        match self {
            Plot::Bar(plot) => &plot.file_name,
            Plot::Box(plot) => &plot.file_name,
        }
    }

    /// Draw the plot into a PNG at `path`
    ///
    /// The drawing area is presented and dropped before this returns.
    pub fn render(&self, path: &Path) -> Result<()> {
        match self {
            Plot::Bar(plot) => bar::draw(plot, path),
            Plot::Box(plot) => boxplot::draw(plot, path),
        }
    }
}
