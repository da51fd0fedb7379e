// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gauge charts for `VizIR`.
//!
//! A gauge is a polar dial: one or more scalar values are drawn as needles against a scaled arc
//! that leaves a fixed 60° gap at the bottom of the dial. This crate provides:
//! - [`Gauge`], the renderer (angle mapping, needles, angular axis, center marker),
//! - the collaborators it draws through: a [`PolarViewport`], a scale computer
//!   ([`compute_scale`]), an [`SvgSink`], and a metadata [`Decorator`].
//!
//! Rendering is a pure pass over already-validated data. Nothing persists between renders.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod decorate;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod gauge;
mod scale;
mod series;
mod style;
mod svg;
mod view;

pub use decorate::{Decorator, MetadataDecorator};
pub use format::{ValueFormatter, default_value_formatter, format_value};
pub use gauge::{
    APERTURE, ComputedGauge, Gauge, GaugeError, GaugeSpec, NEEDLE_THICKNESS, SeriesNodes,
    arc_pos,
};
pub use scale::{AxisTick, compute_scale};
pub use series::{Link, Metadata, Series, value_range};
pub use style::{GaugeStyle, svg_paint};
pub use svg::{NodeId, SvgDocument, SvgNode, SvgSink};
pub use view::{PolarView, PolarViewport, ViewBox};
