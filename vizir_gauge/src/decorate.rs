// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-value decoration.
//!
//! Before a needle is drawn, its group is passed through a [`Decorator`] together with the
//! value's [`Metadata`]. The decorator may annotate the group or wrap it (for links); drawing
//! continues into whichever node it returns.

extern crate alloc;

use alloc::string::String;

use crate::series::Metadata;
use crate::style::svg_paint;
use crate::svg::{NodeId, SvgSink};

/// Augments a drawing node from value metadata.
pub trait Decorator {
    /// Decorates `node` and returns the node subsequent drawing should target.
    fn decorate(&self, sink: &mut dyn SvgSink, node: NodeId, metadata: Option<&Metadata>)
    -> NodeId;
}

/// The standard decorator.
///
/// Applied in order:
/// - a link wraps the node in `<a>` (the `<a>` becomes the drawing target) and records the
///   href in `<desc class="xlink">`,
/// - a tooltip override adds `<title>`,
/// - a color sets an inline fill/stroke style,
/// - extra classes are appended,
/// - a label adds `<desc class="label">`.
#[derive(Clone, Copy, Debug, Default)]
pub struct MetadataDecorator;

impl Decorator for MetadataDecorator {
    fn decorate(
        &self,
        sink: &mut dyn SvgSink,
        node: NodeId,
        metadata: Option<&Metadata>,
    ) -> NodeId {
        let Some(metadata) = metadata else {
            return node;
        };
        let mut node = node;

        if let Some(link) = &metadata.link {
            let a = sink.element(node, "a");
            sink.set_attr(a, "href", link.href.clone());
            sink.set_attr(a, "target", link.target.clone());
            sink.desc(a, "xlink", &link.href);
            node = a;
        }
        if let Some(tooltip) = &metadata.tooltip {
            let title = sink.element(node, "title");
            sink.set_text(title, tooltip.clone());
        }
        if let Some(color) = metadata.color {
            let (paint, _) = svg_paint(color);
            let mut style = String::new();
            style.push_str("fill: ");
            style.push_str(&paint);
            style.push_str("; stroke: ");
            style.push_str(&paint);
            sink.set_attr(node, "style", style);
        }
        for class in &metadata.classes {
            sink.add_class(node, class);
        }
        if let Some(label) = metadata.label.as_deref().filter(|l| !l.is_empty()) {
            sink.desc(node, "label", label);
        }
        node
    }
}
