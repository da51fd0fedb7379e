// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick computation for the gauge's angular axis.
//!
//! Unlike a cartesian axis, the gauge does not "nice" its domain: ticks are always kept inside
//! `[min, max]` so the first and last spokes sit exactly on the ends of the sweep.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::format::ValueFormatter;

/// Minimum number of steps a linear scale should span.
const MIN_SCALE: f64 = 4.0;
/// Maximum number of steps a linear scale should span.
const MAX_SCALE: f64 = 16.0;
/// Hard cap on generated positions.
const MAX_TICKS: usize = 10_000;

/// A single axis tick: its display label and raw value.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisTick {
    /// Formatted label.
    pub label: String,
    /// Raw tick value in data units.
    pub value: f64,
}

impl AxisTick {
    /// Pairs each tick value with its formatted label, preserving order.
    pub fn from_values(values: &[f64], formatter: &ValueFormatter) -> Vec<Self> {
        values
            .iter()
            .map(|&value| Self {
                label: formatter(value),
                value,
            })
            .collect()
    }
}

/// Computes ascending tick positions between `min` and `max` (inclusive).
///
/// - A zero span yields the single value.
/// - With `logarithmic`, ticks are spread per decade when the range is positive and covers at
///   least two decades; otherwise the linear strategy is used.
/// - `order_min` is the smallest power of ten allowed as the linear step, which limits how
///   finely a small span is subdivided.
///
/// All returned positions lie within `[min, max]`. If fewer than two positions fit, the result
/// is `[min, max]`. Non-finite input yields an empty list.
pub fn compute_scale(
    mut min: f64,
    mut max: f64,
    logarithmic: bool,
    order_min: Option<i32>,
) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() {
        return Vec::new();
    }
    if min > max {
        core::mem::swap(&mut min, &mut max);
    }
    if max - min == 0.0 {
        // Covers `-0.0` as well.
        return alloc::vec![if min == 0.0 { 0.0 } else { min }];
    }
    if logarithmic {
        let ticks = log_ticks(min, max);
        if !ticks.is_empty() {
            return ticks;
        }
    }
    linear_ticks(min, max, order_min)
}

fn linear_ticks(min: f64, max: f64, order_min: Option<i32>) -> Vec<f64> {
    let span = max - min;
    let magnitude = min.abs().max(max.abs());
    let mut order = to_i32(magnitude.log10().round()) - 1;
    match order_min {
        Some(floor) if order < floor => order = floor,
        _ => {
            while span / 10_f64.powi(order) > MAX_SCALE {
                order += 1;
            }
        }
    }

    let mut step = 10_f64.powi(order);
    if !step.is_finite() || step <= 0.0 {
        return alloc::vec![min, max];
    }
    while span / step < MIN_SCALE {
        step /= 2.0;
    }

    let first = (min / step).round();
    let mut positions: Vec<f64> = Vec::new();
    for i in 0..MAX_TICKS {
        let position = snap((first + i as f64) * step, step);
        if position >= max + step {
            break;
        }
        if min <= position && position <= max && positions.last() != Some(&position) {
            positions.push(position);
        }
    }

    if positions.len() < 2 {
        return alloc::vec![min, max];
    }
    positions
}

fn log_ticks(min: f64, max: f64) -> Vec<f64> {
    if min <= 0.0 || max <= 0.0 {
        return Vec::new();
    }
    let min_order = to_i32(min.log10().floor());
    let max_order = to_i32(max.log10().ceil());
    let amplitude = f64::from(max_order - min_order);
    if amplitude <= 1.0 {
        return Vec::new();
    }

    let mut detail = 10.0;
    while amplitude * detail < MIN_SCALE * 5.0 {
        detail *= 2.0;
    }
    while amplitude * detail > MAX_SCALE * 3.0 {
        detail /= 2.0;
    }
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "detail is a small positive number by construction"
    )]
    let per_decade = detail as usize;

    let mut positions: Vec<f64> = Vec::new();
    for order in min_order..=max_order {
        let decade = 10_f64.powi(order);
        for i in 0..per_decade {
            let mantissa = if i == 0 {
                1.0
            } else {
                10.0 * i as f64 / detail
            };
            let tick = snap(mantissa * decade, mantissa * decade);
            if min <= tick && tick <= max && !positions.contains(&tick) {
                positions.push(tick);
            }
        }
    }
    positions.sort_by(f64::total_cmp);
    positions
}

/// Rounds away float noise (`0.30000000000000004` → `0.3`) relative to `step`.
fn snap(value: f64, step: f64) -> f64 {
    let digits = (to_i32((-step.abs().log10()).ceil()).max(0) + 3).min(15);
    let scale = 10_f64.powi(digits);
    let snapped = (value * scale).round() / scale;
    if snapped == 0.0 { 0.0 } else { snapped }
}

fn to_i32(v: f64) -> i32 {
    let v = if v.is_finite() { v } else { 0.0 };
    #[allow(clippy::cast_possible_truncation, reason = "clamped to the i32 range")]
    {
        v.clamp(i32::MIN as f64, i32::MAX as f64) as i32
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::sync::Arc;
    use alloc::vec;

    use super::*;

    #[test]
    fn zero_span_yields_the_single_value() {
        assert_eq!(compute_scale(0.0, 0.0, false, None), vec![0.0]);
        assert_eq!(compute_scale(7.5, 7.5, false, None), vec![7.5]);
    }

    #[test]
    fn linear_ticks_cover_the_range_in_even_steps() {
        let ticks = compute_scale(0.0, 100.0, false, None);
        assert_eq!(ticks.first(), Some(&0.0));
        assert_eq!(ticks.last(), Some(&100.0));
        assert!(ticks.len() >= 4, "{ticks:?}");
        let step = ticks[1] - ticks[0];
        for w in ticks.windows(2) {
            assert!((w[1] - w[0] - step).abs() < 1e-9, "{ticks:?}");
        }
    }

    #[test]
    fn linear_ticks_stay_inside_the_range() {
        let ticks = compute_scale(-3.7, 12.2, false, None);
        assert!(ticks.len() >= 2);
        assert!(ticks.iter().all(|t| (-3.7..=12.2).contains(t)), "{ticks:?}");
        assert!(ticks.windows(2).all(|w| w[0] < w[1]), "{ticks:?}");
    }

    #[test]
    fn widened_degenerate_range_is_subdivided() {
        let ticks = compute_scale(-1.0, 1.0, false, None);
        assert_eq!(ticks.first(), Some(&-1.0));
        assert_eq!(ticks.last(), Some(&1.0));
        assert!(ticks.contains(&0.0), "{ticks:?}");
    }

    #[test]
    fn fractional_steps_are_snapped() {
        let ticks = compute_scale(0.0, 1.0, false, None);
        assert!(ticks.contains(&0.3) || ticks.contains(&0.25), "{ticks:?}");
        assert!(ticks.iter().all(|t| {
            let s = alloc::format!("{t}");
            s.len() <= 6
        }));
    }

    #[test]
    fn order_min_limits_subdivision() {
        let fine = compute_scale(0.0, 1.0, false, None);
        let coarse = compute_scale(0.0, 1.0, false, Some(0));
        assert!(coarse.len() < fine.len(), "{coarse:?} vs {fine:?}");
        assert_eq!(coarse.first(), Some(&0.0));
        assert_eq!(coarse.last(), Some(&1.0));
    }

    #[test]
    fn out_of_range_order_min_falls_back_to_the_bounds() {
        assert_eq!(compute_scale(0.0, 100.0, false, Some(400)), vec![0.0, 100.0]);
        assert_eq!(compute_scale(0.0, 100.0, false, Some(i32::MAX)), vec![0.0, 100.0]);
    }

    #[test]
    fn log_ticks_span_decades() {
        let ticks = compute_scale(1.0, 1000.0, true, None);
        for decade in [1.0, 10.0, 100.0, 1000.0] {
            assert!(ticks.contains(&decade), "{ticks:?}");
        }
        assert!(ticks.windows(2).all(|w| w[0] < w[1]), "{ticks:?}");
        assert!(ticks.iter().all(|t| (1.0..=1000.0).contains(t)));
    }

    #[test]
    fn log_falls_back_to_linear_for_non_positive_ranges() {
        assert_eq!(
            compute_scale(-10.0, 10.0, true, None),
            compute_scale(-10.0, 10.0, false, None)
        );
    }

    #[test]
    fn non_finite_input_yields_no_ticks() {
        assert!(compute_scale(f64::NAN, 1.0, false, None).is_empty());
        assert!(compute_scale(0.0, f64::INFINITY, false, None).is_empty());
    }

    #[test]
    fn axis_ticks_pair_labels_in_order() {
        let formatter: ValueFormatter = Arc::new(|v| alloc::format!("{v}%"));
        let ticks = AxisTick::from_values(&[0.0, 50.0, 100.0], &formatter);
        assert_eq!(ticks.len(), 3);
        assert_eq!(ticks[0].label, "0%");
        assert_eq!(ticks[2].value, 100.0);
    }
}
