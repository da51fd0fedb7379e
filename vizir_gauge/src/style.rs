// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gauge colors.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use peniko::Color;
use peniko::color::palette::css;

use crate::svg::{NodeId, SvgSink};

/// Colors used when rendering a gauge.
#[derive(Clone, Debug, PartialEq)]
pub struct GaugeStyle {
    /// Chart background fill.
    pub background: Color,
    /// Plot area fill.
    pub plot_background: Color,
    /// Guide, tick, and center-marker paint.
    pub foreground: Color,
    /// Paint for intermediate spokes.
    pub guide: Color,
    /// Font size for tick labels and static values.
    pub font_size: f64,
    /// Series fills, cycled by series index.
    pub palette: Vec<Color>,
}

impl Default for GaugeStyle {
    fn default() -> Self {
        Self {
            background: css::WHITE,
            plot_background: css::WHITE,
            foreground: css::BLACK.with_alpha(0.9),
            guide: css::BLACK.with_alpha(40.0 / 255.0),
            font_size: 10.0,
            palette: alloc::vec![
                css::CRIMSON,
                css::STEEL_BLUE,
                css::SEA_GREEN,
                css::DARK_ORANGE,
                css::SLATE_BLUE,
                css::GOLDENROD,
                css::TEAL,
                css::ORCHID,
            ],
        }
    }
}

impl GaugeStyle {
    /// Returns the fill for the series at `index`.
    pub fn series_color(&self, index: usize) -> Color {
        if self.palette.is_empty() {
            return self.foreground;
        }
        self.palette[index % self.palette.len()]
    }

    /// Sets the series palette.
    pub fn with_palette(mut self, palette: impl IntoIterator<Item = Color>) -> Self {
        self.palette = palette.into_iter().collect();
        self
    }

    /// Sets the background fill.
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    /// Sets the guide and label paint.
    pub fn with_foreground(mut self, foreground: Color) -> Self {
        self.foreground = foreground;
        self
    }

    pub(crate) fn paint(&self, sink: &mut dyn SvgSink, node: NodeId, name: Paint, color: Color) {
        let (value, opacity) = svg_paint(color);
        match name {
            Paint::Fill => {
                sink.set_attr(node, "fill", value);
                if let Some(o) = opacity {
                    sink.set_attr(node, "fill-opacity", alloc::format!("{o}"));
                }
            }
            Paint::Stroke => {
                sink.set_attr(node, "stroke", value);
                if let Some(o) = opacity {
                    sink.set_attr(node, "stroke-opacity", alloc::format!("{o}"));
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub(crate) enum Paint {
    Fill,
    Stroke,
}

/// Converts a color into an SVG paint value and an optional opacity.
///
/// Opaque colors yield `None` for the opacity.
pub fn svg_paint(color: Color) -> (String, Option<f64>) {
    let rgba = color.to_rgba8();
    let value = alloc::format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
    let opacity = if rgba.a == 255 {
        None
    } else {
        Some(f64::from(rgba.a) / 255.0)
    };
    (value, opacity)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn opaque_colors_have_no_opacity() {
        assert_eq!(svg_paint(css::RED), (String::from("#ff0000"), None));
        let (value, opacity) = svg_paint(css::BLACK.with_alpha(0.5));
        assert_eq!(value, "#000000");
        assert!(opacity.is_some_and(|o| (o - 0.5).abs() < 0.01), "{opacity:?}");
    }

    #[test]
    fn palette_cycles() {
        let style = GaugeStyle::default().with_palette([css::RED, css::BLUE]);
        assert_eq!(style.series_color(0), css::RED);
        assert_eq!(style.series_color(3), css::BLUE);
        let empty = GaugeStyle::default().with_palette([]);
        assert_eq!(empty.series_color(5), empty.foreground);
    }
}
