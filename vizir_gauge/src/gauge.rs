// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gauge chart rendering.
//!
//! A gauge maps its value range onto a circular arc that leaves a gap of [`APERTURE`] radians
//! centered at the bottom of the dial. Angles follow screen orientation (counter-clockwise,
//! `0` pointing right), so the sweep starts at the lower right of the gap and runs over the top
//! to the lower left.
//!
//! Geometry is authored in normalized polar coordinates (radius `0` at the center, `1` at the
//! rim) and projected through a [`PolarViewport`].

extern crate alloc;

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::f64::consts::PI;
use core::fmt;

use kurbo::{Point, Size};
use tracing::{debug, trace};

use crate::decorate::{Decorator, MetadataDecorator};
use crate::format::{ValueFormatter, default_value_formatter};
use crate::scale::{AxisTick, compute_scale};
use crate::series::{Series, value_range};
use crate::style::{GaugeStyle, Paint};
use crate::svg::{NodeId, SvgDocument, SvgSink, number};
use crate::view::{PolarView, PolarViewport, ViewBox};

/// Width of the gap at the bottom of the dial, in radians.
pub const APERTURE: f64 = PI / 3.0;

/// Half-width of a needle's base, in radians.
pub const NEEDLE_THICKNESS: f64 = 0.05;

/// Angle of the range minimum.
const SWEEP_START: f64 = 3.0 * PI / 2.0 + APERTURE / 2.0;
/// Angular length of the range.
const SWEEP: f64 = 2.0 * PI - APERTURE;
/// Angle for values above the range.
const OVER_ANGLE: f64 = (3.0 * PI - APERTURE / 2.0) / 2.0;
/// Angle for values below the range.
const UNDER_ANGLE: f64 = (3.0 * PI + APERTURE / 2.0) / 2.0;

/// Radius of the center marker in pixels.
const CENTER_MARKER_RADIUS: f64 = 4.0;

/// Maps `value` to its angle on the dial, in radians.
///
/// `[min, max]` maps linearly onto `[start, start + 2π − APERTURE]` with
/// `start = 3π/2 + APERTURE/2`. Values outside the range are pinned to two fixed angles inside
/// the bottom gap, one for each side, so an off-scale needle is never confused with one resting
/// on an end of the scale.
///
/// Requires `min != max`; [`Gauge::compute`] guarantees this for its working range.
pub fn arc_pos(value: f64, min: f64, max: f64) -> f64 {
    if value > max {
        return OVER_ANGLE;
    }
    if value < min {
        return UNDER_ANGLE;
    }
    SWEEP_START + SWEEP * ((value - min) / (max - min))
}

/// Errors returned when validating a [`GaugeSpec`].
#[derive(Clone, Debug, PartialEq)]
pub enum GaugeError {
    /// The chart size is not finite and positive.
    InvalidSize {
        /// Configured width.
        width: f64,
        /// Configured height.
        height: f64,
    },
    /// The margin is negative, not finite, or leaves no room for the plot.
    InvalidMargin(f64),
    /// The configured range is not finite or has `min > max`.
    InvalidRange {
        /// Configured minimum.
        min: f64,
        /// Configured maximum.
        max: f64,
    },
}

impl fmt::Display for GaugeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "invalid gauge size {width}x{height}")
            }
            Self::InvalidMargin(margin) => write!(f, "invalid gauge margin {margin}"),
            Self::InvalidRange { min, max } => write!(f, "invalid gauge range [{min}, {max}]"),
        }
    }
}

impl core::error::Error for GaugeError {}

/// A gauge chart description.
#[derive(Clone)]
pub struct GaugeSpec {
    /// Chart width in pixels.
    pub width: f64,
    /// Chart height in pixels.
    pub height: f64,
    /// Margin around the plot area in pixels.
    pub margin: f64,
    /// Fixed `(min, max)` range. When `None`, the extrema of all present values are used.
    pub range: Option<(f64, f64)>,
    /// Whether to use logarithmic tick spacing.
    pub logarithmic: bool,
    /// Smallest power of ten used as a tick step.
    pub order_min: Option<i32>,
    /// Whether to print each value next to its needle.
    pub print_values: bool,
    /// Formatter for tooltips, static values, and tick labels.
    pub value_formatter: ValueFormatter,
    /// Colors and font size.
    pub style: GaugeStyle,
    /// Optional chart title.
    pub title: Option<String>,
    /// Series, drawn in order (later series on top).
    pub series: Vec<Series>,
}

impl fmt::Debug for GaugeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GaugeSpec")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("margin", &self.margin)
            .field("range", &self.range)
            .field("logarithmic", &self.logarithmic)
            .field("order_min", &self.order_min)
            .field("print_values", &self.print_values)
            .field("value_formatter", &"<fn>")
            .field("style", &self.style)
            .field("title", &self.title)
            .field("series", &self.series)
            .finish()
    }
}

impl Default for GaugeSpec {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            margin: 20.0,
            range: None,
            logarithmic: false,
            order_min: None,
            print_values: false,
            value_formatter: default_value_formatter(),
            style: GaugeStyle::default(),
            title: None,
            series: Vec::new(),
        }
    }
}

impl GaugeSpec {
    /// Creates a spec with default size and styling and no series.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the chart size in pixels.
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the margin around the plot area.
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    /// Fixes the value range instead of inferring it from the data.
    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.range = Some((min, max));
        self
    }

    /// Enables or disables logarithmic tick spacing.
    pub fn with_logarithmic(mut self, logarithmic: bool) -> Self {
        self.logarithmic = logarithmic;
        self
    }

    /// Sets the smallest power of ten used as a tick step.
    pub fn with_order_min(mut self, order_min: i32) -> Self {
        self.order_min = Some(order_min);
        self
    }

    /// Enables or disables printed values next to needles.
    pub fn with_print_values(mut self, print_values: bool) -> Self {
        self.print_values = print_values;
        self
    }

    /// Sets the value formatter.
    pub fn with_value_formatter(
        mut self,
        f: impl Fn(f64) -> String + Send + Sync + 'static,
    ) -> Self {
        self.value_formatter = Arc::new(f);
        self
    }

    /// Sets the style.
    pub fn with_style(mut self, style: GaugeStyle) -> Self {
        self.style = style;
        self
    }

    /// Sets the chart title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Appends a series.
    pub fn with_series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }
}

/// Per-render scale state derived by [`Gauge::compute`].
#[derive(Clone, Debug, PartialEq)]
pub struct ComputedGauge {
    /// Working minimum (never equal to `max`).
    pub min: f64,
    /// Working maximum.
    pub max: f64,
    /// Projection box; the dial is centered on the origin.
    pub view_box: ViewBox,
    /// Angular axis ticks in ascending order.
    pub ticks: Vec<AxisTick>,
}

impl ComputedGauge {
    /// Maps `value` to its dial angle; see [`arc_pos`].
    pub fn arc_pos(&self, value: f64) -> f64 {
        arc_pos(value, self.min, self.max)
    }
}

/// Nodes a series draws into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeriesNodes {
    /// The series' plot group; needles go here.
    pub plot: NodeId,
    /// Group for printed values, above all plot groups.
    pub text_overlay: NodeId,
}

/// A validated gauge chart, ready to render.
#[derive(Clone)]
pub struct Gauge {
    spec: GaugeSpec,
    decorator: Arc<dyn Decorator + Send + Sync>,
}

impl fmt::Debug for Gauge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Gauge")
            .field("spec", &self.spec)
            .finish_non_exhaustive()
    }
}

impl Gauge {
    /// Validates `spec` and creates a renderer using [`MetadataDecorator`].
    pub fn new(spec: GaugeSpec) -> Result<Self, GaugeError> {
        let size_ok = |v: f64| v.is_finite() && v > 0.0;
        if !size_ok(spec.width) || !size_ok(spec.height) {
            return Err(GaugeError::InvalidSize {
                width: spec.width,
                height: spec.height,
            });
        }
        let m = spec.margin;
        if !m.is_finite() || m < 0.0 || 2.0 * m >= spec.width || 2.0 * m >= spec.height {
            return Err(GaugeError::InvalidMargin(m));
        }
        if let Some((min, max)) = spec.range
            && (!min.is_finite() || !max.is_finite() || min > max)
        {
            return Err(GaugeError::InvalidRange { min, max });
        }
        Ok(Self {
            spec,
            decorator: Arc::new(MetadataDecorator),
        })
    }

    /// Replaces the decorator applied to each needle.
    pub fn with_decorator(mut self, decorator: impl Decorator + Send + Sync + 'static) -> Self {
        self.decorator = Arc::new(decorator);
        self
    }

    /// Returns the validated spec.
    pub fn spec(&self) -> &GaugeSpec {
        &self.spec
    }

    /// Returns the configured range, or the data extrema, or `(0, 0)` without data.
    pub fn range(&self) -> (f64, f64) {
        self.spec
            .range
            .or_else(|| value_range(&self.spec.series))
            .unwrap_or((0.0, 0.0))
    }

    /// Computes the working range, projection box, and axis ticks.
    ///
    /// A zero-span range is widened by one unit on each side so the angle mapping never
    /// divides by zero. Past `2^53` a unit no longer changes the value, so the pad grows to one
    /// relative epsilon of the magnitude there.
    pub fn compute(&self) -> ComputedGauge {
        let (mut min, mut max) = self.range();
        if max - min == 0.0 {
            let pad = 1.0_f64.max(min.abs().max(max.abs()) * f64::EPSILON);
            min -= pad;
            max += pad;
        }

        let view_box = ViewBox {
            xmin: -1.0,
            ymin: -1.0,
            ..ViewBox::default()
        };

        let positions = compute_scale(min, max, self.spec.logarithmic, self.spec.order_min);
        let ticks = AxisTick::from_values(&positions, &self.spec.value_formatter);
        debug!(min, max, ticks = ticks.len(), "computed gauge scale");

        ComputedGauge {
            min,
            max,
            view_box,
            ticks,
        }
    }

    /// Returns the plot area: its offset from the chart origin and its size.
    pub fn plot_area(&self) -> (Point, Size) {
        let m = self.spec.margin;
        let title = if self.spec.title.is_some() {
            2.0 * self.spec.style.font_size
        } else {
            0.0
        };
        let width = (self.spec.width - 2.0 * m).max(1.0);
        let height = (self.spec.height - 2.0 * m - title).max(1.0);
        (Point::new(m, m + title), Size::new(width, height))
    }

    /// Creates the viewport for a computed scale.
    pub fn view(&self, computed: &ComputedGauge) -> PolarView {
        PolarView::new(self.plot_area().1, computed.view_box)
    }

    /// Renders into a new document.
    pub fn render(&self) -> SvgDocument {
        let mut doc = SvgDocument::new();
        self.render_into(&mut doc);
        doc
    }

    /// Renders into a new document and serializes it.
    pub fn render_svg(&self) -> String {
        self.render().to_svg_string()
    }

    /// Renders the whole chart into `sink`, below its root element.
    pub fn render_into(&self, sink: &mut dyn SvgSink) {
        let computed = self.compute();
        let view = self.view(&computed);
        let style = &self.spec.style;
        let root = sink.root();

        sink.set_attr(root, "width", number(self.spec.width));
        sink.set_attr(root, "height", number(self.spec.height));
        sink.set_attr(
            root,
            "viewBox",
            alloc::format!(
                "0 0 {} {}",
                number(self.spec.width),
                number(self.spec.height)
            ),
        );
        sink.add_class(root, "vizir-gauge");

        let background = sink.element(root, "rect");
        sink.set_attr(background, "width", number(self.spec.width));
        sink.set_attr(background, "height", number(self.spec.height));
        sink.add_class(background, "background");
        style.paint(sink, background, Paint::Fill, style.background);

        if let Some(title) = &self.spec.title {
            let pos = Point::new(
                self.spec.width / 2.0,
                self.spec.margin + style.font_size * 1.5,
            );
            let node = sink.text(root, pos, title, "title");
            sink.set_attr(node, "text-anchor", String::from("middle"));
            sink.set_attr(node, "font-size", number(style.font_size * 1.5));
            style.paint(sink, node, Paint::Fill, style.foreground);
        }

        let (origin, size) = self.plot_area();
        let plot = sink.group(root, "plot");
        sink.set_attr(
            plot,
            "transform",
            alloc::format!("translate({}, {})", number(origin.x), number(origin.y)),
        );
        let plot_background = sink.element(plot, "rect");
        sink.set_attr(plot_background, "width", number(size.width));
        sink.set_attr(plot_background, "height", number(size.height));
        sink.add_class(plot_background, "background");
        style.paint(sink, plot_background, Paint::Fill, style.plot_background);

        self.y_axis(sink, plot, &view);
        self.x_axis(sink, plot, &view, &computed);

        let text_overlay = sink.group(plot, "text-overlay");
        self.plot(sink, plot, text_overlay, &view, &computed);
    }

    /// Draws the center marker.
    ///
    /// This does not depend on data: a single circle at the projected dial center.
    pub fn y_axis(&self, sink: &mut dyn SvgSink, plot: NodeId, view: &dyn PolarViewport) {
        let axis = sink.group(plot, "axis y gauge");
        let circle = sink.circle(axis, view.project(0.0, 0.0), CENTER_MARKER_RADIUS, "");
        let style = &self.spec.style;
        style.paint(sink, circle, Paint::Fill, style.foreground);
    }

    /// Draws the angular axis: a rim tick, a spoke, and a label per tick.
    ///
    /// The spokes of the first and last tick are classed `major`. Without ticks nothing is
    /// drawn.
    pub fn x_axis(
        &self,
        sink: &mut dyn SvgSink,
        plot: NodeId,
        view: &dyn PolarViewport,
        computed: &ComputedGauge,
    ) {
        if computed.ticks.is_empty() {
            return;
        }
        let style = &self.spec.style;
        let axis = sink.group(plot, "axis x gauge");
        let last = computed.ticks.len() - 1;

        for (i, tick) in computed.ticks.iter().enumerate() {
            let guides = sink.group(axis, "guides");
            let theta = computed.arc_pos(tick.value);

            let rim = sink.line(
                guides,
                &[view.project(0.95, theta), view.project(1.0, theta)],
                true,
                "line",
            );
            style.paint(sink, rim, Paint::Stroke, style.foreground);

            let major = i == 0 || i == last;
            let class = if major { "guide line major" } else { "guide line" };
            let spoke = sink.line(
                guides,
                &[view.project(0.0, theta), view.project(0.95, theta)],
                true,
                class,
            );
            let paint = if major { style.foreground } else { style.guide };
            style.paint(sink, spoke, Paint::Stroke, paint);

            let label = sink.text(guides, view.project(0.9, theta), &tick.label, "");
            sink.set_attr(label, "text-anchor", String::from("middle"));
            sink.set_attr(label, "font-size", number(style.font_size));
            style.paint(sink, label, Paint::Fill, style.foreground);
        }
    }

    /// Draws every series in order, each into its own group.
    pub fn plot(
        &self,
        sink: &mut dyn SvgSink,
        plot: NodeId,
        text_overlay: NodeId,
        view: &dyn PolarViewport,
        computed: &ComputedGauge,
    ) {
        debug!(series = self.spec.series.len(), "plotting gauge series");
        for (index, series) in self.spec.series.iter().enumerate() {
            let nodes = self.series_nodes(sink, plot, text_overlay, index);
            self.needle(sink, nodes, series, view, computed);
        }
    }

    fn series_nodes(
        &self,
        sink: &mut dyn SvgSink,
        plot: NodeId,
        text_overlay: NodeId,
        index: usize,
    ) -> SeriesNodes {
        let class = alloc::format!("series serie-{index} color-{index}");
        let group = sink.group(plot, &class);
        let color = self.spec.style.series_color(index);
        self.spec.style.paint(sink, group, Paint::Fill, color);
        self.spec.style.paint(sink, group, Paint::Stroke, color);
        let overlay = sink.group(text_overlay, &class);
        SeriesNodes {
            plot: sink.group(group, "plot"),
            text_overlay: overlay,
        }
    }

    /// Draws one needle per present value of `series`.
    ///
    /// Each needle is a polygon from the dial center to `0.8` of the radius, `2 *
    /// NEEDLE_THICKNESS` radians wide at `0.75`. Tooltip data (and, with
    /// [`GaugeSpec::print_values`], a printed value) is attached at `(0.75, theta)`. Absent and
    /// non-finite values are skipped without shifting the indices of the others.
    pub fn needle(
        &self,
        sink: &mut dyn SvgSink,
        nodes: SeriesNodes,
        series: &Series,
        view: &dyn PolarViewport,
        computed: &ComputedGauge,
    ) {
        for (i, value) in series.values.iter().enumerate() {
            let Some(value) = value.filter(|v| v.is_finite()) else {
                trace!(index = i, "skipping absent gauge value");
                continue;
            };
            let theta = computed.arc_pos(value);
            let text = (self.spec.value_formatter)(value);

            let dots = sink.group(nodes.plot, "dots");
            let target = self
                .decorator
                .decorate(sink, dots, series.metadata.get(&i));

            sink.polygon(
                target,
                &[
                    view.project(0.0, 0.0),
                    view.project(0.75, theta + NEEDLE_THICKNESS),
                    view.project(0.8, theta),
                    view.project(0.75, theta - NEEDLE_THICKNESS),
                ],
                "line reactive tooltip-trigger",
            );

            let anchor = view.project(0.75, theta);
            self.tooltip_data(sink, target, &text, anchor);
            self.static_value(sink, nodes.text_overlay, &text, anchor);
        }
    }

    fn tooltip_data(&self, sink: &mut dyn SvgSink, node: NodeId, text: &str, at: Point) {
        sink.desc(node, "value", text);
        sink.desc(node, "x", &number(at.x));
        sink.desc(node, "y", &number(at.y));
    }

    fn static_value(&self, sink: &mut dyn SvgSink, overlay: NodeId, text: &str, at: Point) {
        if !self.spec.print_values {
            return;
        }
        let style = &self.spec.style;
        let pos = Point::new(at.x, at.y + style.font_size / 3.0);
        let node = sink.text(overlay, pos, text, "value");
        sink.set_attr(node, "text-anchor", String::from("middle"));
        sink.set_attr(node, "font-size", number(style.font_size));
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn endpoints_map_exactly_onto_the_sweep() {
        assert_eq!(arc_pos(0.0, 0.0, 100.0), SWEEP_START);
        assert_eq!(arc_pos(100.0, 0.0, 100.0), SWEEP_START + SWEEP);
        assert!((SWEEP_START - (3.0 * PI / 2.0 + PI / 6.0)).abs() < EPS);
    }

    #[test]
    fn interior_values_stay_strictly_inside_the_sweep() {
        for v in [0.001, 1.0, 25.0, 50.0, 99.0, 99.999] {
            let theta = arc_pos(v, 0.0, 100.0);
            assert!(theta > SWEEP_START, "{v} -> {theta}");
            assert!(theta < SWEEP_START + SWEEP, "{v} -> {theta}");
        }
    }

    #[test]
    fn mapping_is_monotonic() {
        let mut prev = arc_pos(-5.0, -5.0, 5.0);
        for i in 1..=100 {
            let theta = arc_pos(-5.0 + 0.1 * f64::from(i), -5.0, 5.0);
            assert!(theta >= prev);
            prev = theta;
        }
    }

    #[test]
    fn off_scale_values_saturate_inside_the_gap() {
        let over = arc_pos(101.0, 0.0, 100.0);
        let under = arc_pos(-1.0, 0.0, 100.0);
        assert_eq!(over, (3.0 * PI - PI / 6.0) / 2.0);
        assert_eq!(under, (3.0 * PI + PI / 6.0) / 2.0);
        assert_eq!(arc_pos(1e300, 0.0, 100.0), over);
        assert_eq!(arc_pos(-1e300, 0.0, 100.0), under);
        assert_ne!(over, under);

        // The gap spans (start + sweep - 2π, start), i.e. (3π/2 - π/6, 3π/2 + π/6).
        let gap = (SWEEP_START + SWEEP - 2.0 * PI, SWEEP_START);
        for theta in [over, under] {
            assert!(gap.0 < theta && theta < gap.1, "{theta} not in {gap:?}");
        }
    }

    #[test]
    fn degenerate_range_is_widened_symmetrically() {
        let gauge = Gauge::new(GaugeSpec::new().with_series(Series::from_values("s", [7.0])))
            .expect("valid spec");
        let computed = gauge.compute();
        assert_eq!((computed.min, computed.max), (6.0, 8.0));
        assert_eq!(computed.max - computed.min, 2.0);
    }

    #[test]
    fn huge_degenerate_range_is_still_widened() {
        let gauge = Gauge::new(GaugeSpec::new().with_series(Series::from_values("s", [1e17])))
            .expect("valid spec");
        let computed = gauge.compute();
        assert!(computed.max > computed.min, "{computed:?}");
        let theta = computed.arc_pos(1e17);
        assert!(theta.is_finite());
        assert!(
            SWEEP_START < theta && theta < SWEEP_START + SWEEP,
            "{theta}"
        );
        assert!(computed.ticks.iter().all(|t| t.value.is_finite()));
    }

    #[test]
    fn huge_order_min_still_renders() {
        let gauge = Gauge::new(
            GaugeSpec::new()
                .with_range(0.0, 100.0)
                .with_order_min(400)
                .with_series(Series::from_values("s", [50.0])),
        )
        .expect("valid spec");
        let computed = gauge.compute();
        let values: Vec<f64> = computed.ticks.iter().map(|t| t.value).collect();
        assert_eq!(values, [0.0, 100.0]);
        assert!(gauge.render_svg().contains("<polygon"));
    }

    #[test]
    fn empty_gauge_computes_a_unit_range() {
        let gauge = Gauge::new(GaugeSpec::new()).expect("valid spec");
        assert_eq!(gauge.range(), (0.0, 0.0));
        let computed = gauge.compute();
        assert_eq!((computed.min, computed.max), (-1.0, 1.0));
        assert_eq!(computed.view_box, ViewBox::new(-1.0, -1.0, 1.0, 1.0));
        assert!((computed.arc_pos(0.0) - (SWEEP_START + SWEEP / 2.0)).abs() < EPS);
    }

    #[test]
    fn configured_range_overrides_data() {
        let gauge = Gauge::new(
            GaugeSpec::new()
                .with_range(0.0, 100.0)
                .with_series(Series::from_values("s", [150.0])),
        )
        .expect("valid spec");
        let computed = gauge.compute();
        assert_eq!((computed.min, computed.max), (0.0, 100.0));
        assert_eq!(computed.arc_pos(150.0), OVER_ANGLE);
    }

    #[test]
    fn ticks_are_labelled_with_the_value_formatter() {
        let gauge = Gauge::new(
            GaugeSpec::new()
                .with_range(0.0, 100.0)
                .with_value_formatter(|v| alloc::format!("{v}%")),
        )
        .expect("valid spec");
        let computed = gauge.compute();
        let first = computed.ticks.first().expect("ticks");
        let last = computed.ticks.last().expect("ticks");
        assert_eq!((first.label.as_str(), first.value), ("0%", 0.0));
        assert_eq!((last.label.as_str(), last.value), ("100%", 100.0));
    }

    #[test]
    fn invalid_specs_are_rejected() {
        assert_eq!(
            Gauge::new(GaugeSpec::new().with_size(0.0, 10.0)).unwrap_err(),
            GaugeError::InvalidSize {
                width: 0.0,
                height: 10.0
            }
        );
        assert_eq!(
            Gauge::new(GaugeSpec::new().with_size(100.0, 100.0).with_margin(50.0)).unwrap_err(),
            GaugeError::InvalidMargin(50.0)
        );
        assert_eq!(
            Gauge::new(GaugeSpec::new().with_range(3.0, 1.0)).unwrap_err(),
            GaugeError::InvalidRange { min: 3.0, max: 1.0 }
        );
        assert!(Gauge::new(GaugeSpec::new().with_range(f64::NAN, 1.0)).is_err());
    }

    #[test]
    fn errors_display_their_values() {
        let err = GaugeError::InvalidRange { min: 3.0, max: 1.0 };
        assert_eq!(alloc::format!("{err}"), "invalid gauge range [3, 1]");
    }

    #[test]
    fn title_reserves_space_above_the_plot() {
        let plain = Gauge::new(GaugeSpec::new()).expect("valid spec");
        let titled = Gauge::new(GaugeSpec::new().with_title("Load")).expect("valid spec");
        let (o0, s0) = plain.plot_area();
        let (o1, s1) = titled.plot_area();
        assert!(o1.y > o0.y);
        assert!(s1.height < s0.height);
        assert_eq!(s0.width, s1.width);
    }
}
