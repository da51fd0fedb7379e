// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gauge chart demos for `vizir_gauge`.

mod html;

use peniko::color::palette::css;
use tracing::info;
use tracing_subscriber::EnvFilter;
use vizir_gauge::{Gauge, GaugeError, GaugeSpec, GaugeStyle, Link, Metadata, Series};

const OUTPUT: &str = "vizir_gauge_demo.html";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let sections = vec![
        single_needle_demo()?,
        multi_series_demo()?,
        off_scale_demo()?,
        degenerate_demo()?,
        log_demo()?,
        metadata_demo()?,
    ];

    let html = html::render_report("VizIR gauge demo", &sections);
    std::fs::write(OUTPUT, html)?;
    info!(sections = sections.len(), path = OUTPUT, "wrote gauge demo report");
    Ok(())
}

fn section(
    title: &'static str,
    description: &'static str,
    spec: GaugeSpec,
) -> Result<html::HtmlSection, GaugeError> {
    let gauge = Gauge::new(spec)?;
    Ok(html::HtmlSection {
        title,
        description,
        svg: gauge.render_svg(),
    })
}

fn base_spec(title: &str) -> GaugeSpec {
    GaugeSpec::new()
        .with_size(320.0, 300.0)
        .with_margin(16.0)
        .with_title(title)
}

fn single_needle_demo() -> Result<html::HtmlSection, GaugeError> {
    section(
        "Single needle",
        "A fixed 0..100 range with one value at mid-scale: the needle points straight up.",
        base_spec("CPU load")
            .with_range(0.0, 100.0)
            .with_print_values(true)
            .with_value_formatter(|v| format!("{v}%"))
            .with_series(Series::from_values("cpu", [50.0])),
    )
}

fn multi_series_demo() -> Result<html::HtmlSection, GaugeError> {
    section(
        "Several series",
        "Range inferred from the data; later series are drawn above earlier ones. \
         The missing value in the second series draws no needle.",
        base_spec("Temperatures")
            .with_print_values(true)
            .with_value_formatter(|v| format!("{v:.1}°C"))
            .with_series(Series::from_values("inside", [21.5, 23.0]))
            .with_series(Series::new("outside", [Some(4.0), None]))
            .with_series(Series::from_values("boiler", [61.0])),
    )
}

fn off_scale_demo() -> Result<html::HtmlSection, GaugeError> {
    section(
        "Off-scale values",
        "Values below or above a fixed range are pinned inside the gap at the bottom, \
         one angle per side, apart from the needles resting on the scale ends.",
        base_spec("Pressure")
            .with_range(0.0, 10.0)
            .with_series(Series::from_values("under", [-3.0]))
            .with_series(Series::from_values("ends", [0.0, 10.0]))
            .with_series(Series::from_values("over", [14.0])),
    )
}

fn degenerate_demo() -> Result<html::HtmlSection, GaugeError> {
    section(
        "Single value",
        "When all values are equal the range is widened by one unit on each side, \
         so the needle sits at mid-scale.",
        base_spec("Constant").with_series(Series::from_values("flat", [3.0, 3.0])),
    )
}

fn log_demo() -> Result<html::HtmlSection, GaugeError> {
    section(
        "Logarithmic ticks",
        "Ticks spread per decade over 1..1000.",
        base_spec("Requests/s")
            .with_range(1.0, 1000.0)
            .with_logarithmic(true)
            .with_series(Series::from_values("rps", [30.0, 400.0])),
    )
}

fn metadata_demo() -> Result<html::HtmlSection, GaugeError> {
    let series = Series::from_values("disks", [35.0, 82.0])
        .with_metadata(
            0,
            Metadata::new()
                .with_label("/")
                .with_link(Link::new("https://example.com/disks/root")),
        )
        .with_metadata(
            1,
            Metadata::new()
                .with_label("/var")
                .with_tooltip("/var is almost full")
                .with_color(css::ORANGE_RED)
                .with_class("warning"),
        );
    section(
        "Metadata",
        "Per-value links, tooltips, labels, and color overrides.",
        base_spec("Disk usage")
            .with_range(0.0, 100.0)
            .with_order_min(1)
            .with_style(GaugeStyle::default().with_background(css::WHITE_SMOKE))
            .with_series(series),
    )
}
