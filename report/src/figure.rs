//! Figure geometry, fonts and colours

use plotters::style::{FontDesc, FontTransform, IntoFont, RGBColor};

/// Resolution every size constant below is expressed at
pub const BASE_DPI: u32 = 100;

/// Share of the figure height rotated tick labels may take
const MAX_LABEL_AREA_SHARE: f64 = 0.45;
/// Share of the figure width an outside legend may take
const MAX_LEGEND_SHARE: f64 = 0.33;
/// Approximate glyph advance as a fraction of the font size
const GLYPH_WIDTH: f64 = 0.55;

// Font sizes in pixels at BASE_DPI
pub const TITLE_FONT_SIZE: u32 = 28;
pub const AXIS_LABEL_FONT_SIZE: u32 = 20;
pub const TICK_LABEL_FONT_SIZE: u32 = 15;
pub const LEGEND_FONT_SIZE: u32 = 15;
pub const DATA_LABEL_FONT_SIZE: u32 = 15;

/// Seaborn "deep" palette
const PALETTE: &[RGBColor] = &[
    RGBColor(76, 114, 176),
    RGBColor(221, 132, 82),
    RGBColor(85, 168, 104),
    RGBColor(196, 78, 82),
    RGBColor(129, 114, 179),
    RGBColor(147, 120, 96),
    RGBColor(218, 139, 195),
    RGBColor(140, 140, 140),
    RGBColor(204, 185, 116),
    RGBColor(100, 181, 205),
];

/// Colour of the n-th category, cycling through the palette
pub fn palette_color(idx: usize) -> RGBColor {
    PALETTE[idx % PALETTE.len()]
}

/// Figure size in inches plus output resolution
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Figure {
    pub width_in: f64,
    pub height_in: f64,
    pub dpi: u32,
}

impl Figure {
    /// Figure at the base resolution
    pub const fn new(width_in: f64, height_in: f64) -> Self {
        Self {
            width_in,
            height_in,
            dpi: BASE_DPI,
        }
    }

    /// Same figure at another resolution
    pub const fn with_dpi(mut self, dpi: u32) -> Self {
        self.dpi = dpi;
        self
    }

    /// Bitmap size in pixels
    pub fn pixels(&self) -> (u32, u32) {
        (
            (self.width_in * self.dpi as f64).round() as u32,
            (self.height_in * self.dpi as f64).round() as u32,
        )
    }

    /// Scale a base-resolution pixel size to this figure's resolution
    pub fn scale(&self, px: u32) -> u32 {
        (px as f64 * self.dpi as f64 / BASE_DPI as f64).round() as u32
    }

    /// Font of the categorical x tick labels, rotated by 90 degrees
    pub fn x_tick_font(&self) -> FontDesc<'static> {
        ("sans-serif", self.scale(TICK_LABEL_FONT_SIZE))
            .into_font()
            .transform(FontTransform::Rotate90)
    }

    /// Font of the numeric y tick labels
    pub fn y_tick_font(&self) -> FontDesc<'static> {
        ("sans-serif", self.scale(TICK_LABEL_FONT_SIZE)).into_font()
    }

    /// Longest rotated tick label, in characters, that fits the label area
    pub fn max_label_chars(&self) -> usize {
        let font_px = self.scale(TICK_LABEL_FONT_SIZE) as f64;
        let height_px = self.pixels().1 as f64;
        let chars = (height_px * MAX_LABEL_AREA_SHARE - font_px) / (font_px * GLYPH_WIDTH);
        (chars.floor() as usize).max(4)
    }

    /// Shorten a tick label to `max_label_chars`, marking the cut with "..."
    pub fn fit_label(&self, label: &str) -> String {
        let max = self.max_label_chars();
        if label.chars().count() <= max {
            return label.to_string();
        }
        let mut fitted: String = label.chars().take(max - 3).collect();
        fitted.push_str("...");
        fitted
    }

    /// Height needed below the x axis for labels drawn rotated by 90 degrees
    pub fn rotated_label_area<'a>(&self, labels: impl Iterator<Item = &'a str>) -> u32 {
        let font_px = self.scale(TICK_LABEL_FONT_SIZE);
        let longest = labels
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0)
            .min(self.max_label_chars());
        let text_px = (longest as f64 * font_px as f64 * GLYPH_WIDTH).round() as u32;
        (text_px + font_px).max(font_px * 2)
    }

    /// Width of a legend column drawn to the right of the plot area, zero without entries
    pub fn legend_width<'a>(&self, entries: impl Iterator<Item = &'a str>) -> u32 {
        let Some(longest) = entries.map(|e| e.chars().count()).max() else {
            return 0;
        };
        let font_px = self.scale(LEGEND_FONT_SIZE) as f64;
        let text_px = longest as f64 * font_px * GLYPH_WIDTH;
        let width = text_px + self.legend_swatch() as f64 + self.scale(40) as f64;
        let cap = self.pixels().0 as f64 * MAX_LEGEND_SHARE;
        width.min(cap).round() as u32
    }

    /// Side length of a legend colour swatch
    pub fn legend_swatch(&self) -> u32 {
        self.scale(LEGEND_FONT_SIZE)
    }
}

/// Upper bound of a zero-based value axis with 10% headroom
pub fn axis_max(values: impl Iterator<Item = f64>) -> f64 {
    let max = values.filter(|v| v.is_finite()).fold(0.0_f64, f64::max);
    if max > 0.0 {
        max * 1.1
    } else {
        1.0
    }
}

/// Tick label for a categorical axis laid out at integer positions
pub fn category_label(labels: &[&str], x: f64) -> String {
    let idx = x.round();
    if idx < 0.0 || (x - idx).abs() > 0.3 {
        return String::new();
    }
    labels
        .get(idx as usize)
        .map(|s| s.to_string())
        .unwrap_or_default()
}
