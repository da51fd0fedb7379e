// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG drawing sink.
//!
//! [`SvgSink`] is the drawing surface the gauge renders into: a handful of element primitives
//! plus provided drawing calls (groups, polygons, lines, circles, text) built on top of them.
//! [`SvgDocument`] is the in-memory implementation, an append-only element tree that serializes
//! to an SVG string.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use kurbo::{BezPath, PathEl, Point};
use smallvec::SmallVec;

/// Handle to an element in an [`SvgSink`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// A drawing surface accepting SVG elements.
///
/// Implementors provide the element primitives; the drawing calls have default implementations
/// in terms of them and may be overridden (e.g. to record geometry).
pub trait SvgSink {
    /// Returns the root element.
    fn root(&self) -> NodeId;

    /// Appends a new `tag` element as the last child of `parent`.
    fn element(&mut self, parent: NodeId, tag: &'static str) -> NodeId;

    /// Sets (or replaces) an attribute.
    fn set_attr(&mut self, node: NodeId, name: &'static str, value: String);

    /// Sets the text content of an element.
    fn set_text(&mut self, node: NodeId, text: String);

    /// Appends a class to the element's `class` attribute.
    fn add_class(&mut self, node: NodeId, class: &str);

    /// Appends a `<g>` group.
    fn group(&mut self, parent: NodeId, class: &str) -> NodeId {
        let node = self.element(parent, "g");
        if !class.is_empty() {
            self.add_class(node, class);
        }
        node
    }

    /// Appends a `<polygon>` through `points`.
    fn polygon(&mut self, parent: NodeId, points: &[Point], class: &str) -> NodeId {
        let node = self.element(parent, "polygon");
        let mut value = String::new();
        for (i, p) in points.iter().enumerate() {
            if i > 0 {
                value.push(' ');
            }
            let _ = write!(value, "{},{}", number(p.x), number(p.y));
        }
        self.set_attr(node, "points", value);
        self.add_class(node, class);
        node
    }

    /// Appends a polyline `<path>` through `points`, closed with `Z` if `close`.
    fn line(&mut self, parent: NodeId, points: &[Point], close: bool, class: &str) -> NodeId {
        let mut path = BezPath::new();
        for (i, p) in points.iter().enumerate() {
            if i == 0 {
                path.move_to(*p);
            } else {
                path.line_to(*p);
            }
        }
        if close && !points.is_empty() {
            path.close_path();
        }
        let node = self.element(parent, "path");
        self.set_attr(node, "d", path_data(&path));
        self.add_class(node, class);
        node
    }

    /// Appends a `<circle>`.
    fn circle(&mut self, parent: NodeId, center: Point, radius: f64, class: &str) -> NodeId {
        let node = self.element(parent, "circle");
        self.set_attr(node, "cx", number(center.x));
        self.set_attr(node, "cy", number(center.y));
        self.set_attr(node, "r", number(radius));
        if !class.is_empty() {
            self.add_class(node, class);
        }
        node
    }

    /// Appends a `<text>` element anchored at `pos`.
    fn text(&mut self, parent: NodeId, pos: Point, text: &str, class: &str) -> NodeId {
        let node = self.element(parent, "text");
        self.set_attr(node, "x", number(pos.x));
        self.set_attr(node, "y", number(pos.y));
        if !class.is_empty() {
            self.add_class(node, class);
        }
        self.set_text(node, String::from(text));
        node
    }

    /// Appends a `<desc>` element, used to carry tooltip and label data.
    fn desc(&mut self, parent: NodeId, class: &str, text: &str) -> NodeId {
        let node = self.element(parent, "desc");
        self.add_class(node, class);
        self.set_text(node, String::from(text));
        node
    }
}

/// A single element in an [`SvgDocument`].
#[derive(Clone, Debug, PartialEq)]
pub struct SvgNode {
    /// Element name.
    pub tag: &'static str,
    /// Attributes in insertion order.
    pub attrs: SmallVec<[(&'static str, String); 4]>,
    /// Text content.
    pub text: Option<String>,
    /// Child elements in document order.
    pub children: Vec<NodeId>,
}

impl SvgNode {
    fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: SmallVec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    /// Returns an attribute value.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns `true` if the element's `class` attribute contains `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .is_some_and(|c| c.split_whitespace().any(|c| c == class))
    }
}

/// An in-memory SVG element tree.
///
/// Elements live in an arena and are addressed by [`NodeId`]; the root `<svg>` element is
/// created up front.
#[derive(Clone, Debug, PartialEq)]
pub struct SvgDocument {
    nodes: Vec<SvgNode>,
}

impl Default for SvgDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl SvgDocument {
    /// Creates a document containing only the root `<svg>` element.
    pub fn new() -> Self {
        let mut root = SvgNode::new("svg");
        root.attrs
            .push(("xmlns", String::from("http://www.w3.org/2000/svg")));
        Self {
            nodes: alloc::vec![root],
        }
    }

    /// Returns the element for `id`.
    ///
    /// Panics if `id` was not produced by this document.
    pub fn node(&self, id: NodeId) -> &SvgNode {
        &self.nodes[id.0]
    }

    /// Returns the number of elements, including the root.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the document only has its root element.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Iterates over every element in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &SvgNode)> + '_ {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    /// Iterates over elements with the given tag, in creation order.
    pub fn find_tag<'a>(
        &'a self,
        tag: &'a str,
    ) -> impl Iterator<Item = (NodeId, &'a SvgNode)> + 'a {
        self.iter().filter(move |(_, n)| n.tag == tag)
    }

    /// Iterates over elements carrying the given class, in creation order.
    pub fn find_class<'a>(
        &'a self,
        class: &'a str,
    ) -> impl Iterator<Item = (NodeId, &'a SvgNode)> + 'a {
        self.iter().filter(move |(_, n)| n.has_class(class))
    }

    /// Serializes the document.
    pub fn to_svg_string(&self) -> String {
        let mut out = String::new();
        self.write_node(&mut out, self.root(), 0);
        out
    }

    fn write_node(&self, out: &mut String, id: NodeId, depth: usize) {
        let node = self.node(id);
        for _ in 0..depth {
            out.push_str("  ");
        }
        out.push('<');
        out.push_str(node.tag);
        for (name, value) in &node.attrs {
            let _ = write!(out, r#" {name}="{}""#, escape_xml(value));
        }
        if node.children.is_empty() && node.text.is_none() {
            out.push_str("/>\n");
            return;
        }
        out.push('>');
        if let Some(text) = &node.text {
            out.push_str(&escape_xml(text));
        }
        if !node.children.is_empty() {
            out.push('\n');
            for child in &node.children {
                self.write_node(out, *child, depth + 1);
            }
            for _ in 0..depth {
                out.push_str("  ");
            }
        }
        let _ = writeln!(out, "</{}>", node.tag);
    }
}

impl SvgSink for SvgDocument {
    fn root(&self) -> NodeId {
        NodeId(0)
    }

    fn element(&mut self, parent: NodeId, tag: &'static str) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(SvgNode::new(tag));
        self.nodes[parent.0].children.push(id);
        id
    }

    fn set_attr(&mut self, node: NodeId, name: &'static str, value: String) {
        let attrs = &mut self.nodes[node.0].attrs;
        if let Some(slot) = attrs.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = value;
        } else {
            attrs.push((name, value));
        }
    }

    fn set_text(&mut self, node: NodeId, text: String) {
        self.nodes[node.0].text = Some(text);
    }

    fn add_class(&mut self, node: NodeId, class: &str) {
        let class = class.trim();
        if class.is_empty() {
            return;
        }
        let merged = match self.nodes[node.0].attr("class") {
            Some(existing) if !existing.is_empty() => alloc::format!("{existing} {class}"),
            _ => String::from(class),
        };
        self.set_attr(node, "class", merged);
    }
}

/// Formats a coordinate, rounded to 1/10000 of a unit.
pub(crate) fn number(v: f64) -> String {
    let rounded = (v * 10_000.0).round() / 10_000.0;
    if rounded == 0.0 {
        return String::from("0");
    }
    alloc::format!("{rounded}")
}

fn path_data(path: &BezPath) -> String {
    let mut out = String::new();
    for el in path.elements() {
        if !out.is_empty() {
            out.push(' ');
        }
        let _ = match *el {
            PathEl::MoveTo(p) => write!(out, "M{} {}", number(p.x), number(p.y)),
            PathEl::LineTo(p) => write!(out, "L{} {}", number(p.x), number(p.y)),
            PathEl::QuadTo(p1, p2) => write!(
                out,
                "Q{} {} {} {}",
                number(p1.x),
                number(p1.y),
                number(p2.x),
                number(p2.y)
            ),
            PathEl::CurveTo(p1, p2, p3) => write!(
                out,
                "C{} {} {} {} {} {}",
                number(p1.x),
                number(p1.y),
                number(p2.x),
                number(p2.y),
                number(p3.x),
                number(p3.y)
            ),
            PathEl::ClosePath => write!(out, "Z"),
        };
    }
    out
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
