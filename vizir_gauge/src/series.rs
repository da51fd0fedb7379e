// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Series data and per-value metadata.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;
use peniko::Color;
use smallvec::SmallVec;

/// A hyperlink attached to a value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Link {
    /// Link target URL.
    pub href: String,
    /// Browsing context for the link (`_blank` by default).
    pub target: String,
}

impl Link {
    /// Creates a link opening in a new browsing context.
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            target: String::from("_blank"),
        }
    }

    /// Sets the link target.
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }
}

/// Optional decoration data for a single value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Metadata {
    /// Human-readable label.
    pub label: Option<String>,
    /// Hyperlink wrapping the value's drawing.
    pub link: Option<Link>,
    /// Extra `<title>` tooltip text.
    pub tooltip: Option<String>,
    /// Fill and stroke override.
    pub color: Option<Color>,
    /// Extra CSS classes.
    pub classes: SmallVec<[String; 2]>,
}

impl Metadata {
    /// Creates empty metadata.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the link.
    pub fn with_link(mut self, link: Link) -> Self {
        self.link = Some(link);
        self
    }

    /// Sets the tooltip override.
    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    /// Sets the color override.
    pub fn with_color(mut self, color: impl Into<Color>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Adds an extra CSS class.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Returns `true` if no field is set.
    pub fn is_empty(&self) -> bool {
        self.label.is_none()
            && self.link.is_none()
            && self.tooltip.is_none()
            && self.color.is_none()
            && self.classes.is_empty()
    }
}

/// A named sequence of optional values.
///
/// `None` means "no needle at this index". Metadata is keyed by the same index as `values`.
#[derive(Clone, Debug, Default)]
pub struct Series {
    /// Series title.
    pub title: String,
    /// Values in display order.
    pub values: Vec<Option<f64>>,
    /// Metadata by value index.
    pub metadata: HashMap<usize, Metadata>,
}

impl Series {
    /// Creates a series from optional values.
    pub fn new(title: impl Into<String>, values: impl IntoIterator<Item = Option<f64>>) -> Self {
        Self {
            title: title.into(),
            values: values.into_iter().collect(),
            metadata: HashMap::new(),
        }
    }

    /// Creates a series where every value is present.
    pub fn from_values(title: impl Into<String>, values: impl IntoIterator<Item = f64>) -> Self {
        Self::new(title, values.into_iter().map(Some))
    }

    /// Attaches metadata to the value at `index`.
    pub fn with_metadata(mut self, index: usize, metadata: Metadata) -> Self {
        self.metadata.insert(index, metadata);
        self
    }

    /// Iterates `(index, value)` over present, finite values.
    ///
    /// Indices are those of [`Series::values`], so skipped entries leave gaps.
    pub fn present(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.values
            .iter()
            .enumerate()
            .filter_map(|(i, v)| v.filter(|v| v.is_finite()).map(|v| (i, v)))
    }
}

/// Returns the `(min, max)` of all present, finite values across `series`.
///
/// Returns `None` if there are no such values.
pub fn value_range(series: &[Series]) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for (_, v) in series.iter().flat_map(Series::present) {
        min = min.min(v);
        max = max.max(v);
    }
    if min.is_finite() && max.is_finite() {
        Some((min, max))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;
    use alloc::vec::Vec;

    use super::*;

    #[test]
    fn present_values_keep_their_indices() {
        let s = Series::new("s", [Some(1.0), None, Some(f64::NAN), Some(4.0)]);
        let got: Vec<_> = s.present().collect();
        assert_eq!(got, vec![(0, 1.0), (3, 4.0)]);
    }

    #[test]
    fn value_range_spans_every_series() {
        let a = Series::from_values("a", [3.0, 8.0]);
        let b = Series::new("b", [None, Some(-2.0)]);
        assert_eq!(value_range(&[a, b]), Some((-2.0, 8.0)));
    }

    #[test]
    fn value_range_is_none_without_values() {
        let empty = Series::new("e", [None, None]);
        assert_eq!(value_range(&[empty]), None);
        assert_eq!(value_range(&[]), None);
    }

    #[test]
    fn metadata_builders_fill_fields() {
        let m = Metadata::new()
            .with_label("cpu")
            .with_link(Link::new("https://example.com").with_target("_self"))
            .with_class("hot");
        assert!(!m.is_empty());
        assert_eq!(m.link.as_ref().map(|l| l.target.as_str()), Some("_self"));
        assert_eq!(m.classes.len(), 1);
        assert!(Metadata::new().is_empty());
    }
}
