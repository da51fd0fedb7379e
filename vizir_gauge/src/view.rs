// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawing box and polar viewport.
//!
//! Gauge geometry is authored in normalized polar coordinates: a radius fraction (`0` at the
//! dial center, `1` at the rim) and an angle in radians. [`PolarView`] converts those into pixel
//! coordinates inside the plot area, via a Cartesian [`ViewBox`].

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use kurbo::{Point, Rect, Size};

/// Default relative margin added around a [`ViewBox`] by [`ViewBox::fixed`].
pub(crate) const DEFAULT_BOX_MARGIN: f64 = 0.02;

/// A Cartesian bounding box in data units.
///
/// The gauge sets `xmin`/`ymin` to `-1` so the unit-radius dial is centered in the plot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewBox {
    /// Minimum x in data units.
    pub xmin: f64,
    /// Minimum y in data units.
    pub ymin: f64,
    /// Maximum x in data units.
    pub xmax: f64,
    /// Maximum y in data units.
    pub ymax: f64,
}

impl Default for ViewBox {
    fn default() -> Self {
        Self {
            xmin: 0.0,
            ymin: 0.0,
            xmax: 1.0,
            ymax: 1.0,
        }
    }
}

impl ViewBox {
    /// Creates a box from its bounds.
    pub fn new(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Self {
        Self {
            xmin,
            ymin,
            xmax,
            ymax,
        }
    }

    /// Returns the box width in data units.
    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }

    /// Returns the box height in data units.
    pub fn height(&self) -> f64 {
        self.ymax - self.ymin
    }

    /// Returns a box usable as a projection domain.
    ///
    /// A zero width or height is replaced by a unit span, then the box is grown by
    /// `margin * span` on every side.
    pub fn fixed(mut self, margin: f64) -> Self {
        if self.width() == 0.0 {
            self.xmax = self.xmin + 1.0;
        }
        if self.height() == 0.0 {
            self.ymin -= 0.5;
            self.ymax = self.ymin + 1.0;
        }
        let xmargin = margin * self.width();
        let ymargin = margin * self.height();
        self.xmin -= xmargin;
        self.xmax += xmargin;
        self.ymin -= ymargin;
        self.ymax += ymargin;
        self
    }

    /// Returns the box as a `kurbo` rectangle.
    pub fn to_rect(self) -> Rect {
        Rect::new(self.xmin, self.ymin, self.xmax, self.ymax)
    }
}

/// Maps normalized polar coordinates to pixel coordinates.
pub trait PolarViewport {
    /// Projects `(radius, theta)` into the drawing area.
    ///
    /// `radius` is a fraction of the dial radius; `theta` is in radians, counter-clockwise from
    /// the positive x axis as seen on screen.
    fn project(&self, radius: f64, theta: f64) -> Point;
}

/// The standard polar viewport: polar → Cartesian → pixels, with y growing downward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PolarView {
    size: Size,
    view_box: ViewBox,
}

impl PolarView {
    /// Creates a viewport for a plot area of `size` pixels showing `view_box`.
    ///
    /// The box is [fixed](ViewBox::fixed) with [`DEFAULT_BOX_MARGIN`].
    pub fn new(size: Size, view_box: ViewBox) -> Self {
        Self::with_margin(size, view_box, DEFAULT_BOX_MARGIN)
    }

    /// Creates a viewport with an explicit relative box margin.
    pub fn with_margin(size: Size, view_box: ViewBox, margin: f64) -> Self {
        Self {
            size,
            view_box: view_box.fixed(margin),
        }
    }

    /// Returns the plot area size in pixels.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Returns the effective (fixed) box.
    pub fn view_box(&self) -> ViewBox {
        self.view_box
    }

    /// Maps a Cartesian point in data units into pixels.
    pub fn cartesian(&self, x: f64, y: f64) -> Point {
        let b = self.view_box;
        let px = self.size.width * (x - b.xmin) / b.width();
        let py = self.size.height - self.size.height * (y - b.ymin) / b.height();
        Point::new(px, py)
    }
}

impl PolarViewport for PolarView {
    fn project(&self, radius: f64, theta: f64) -> Point {
        self.cartesian(radius * theta.cos(), radius * theta.sin())
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use core::f64::consts::{FRAC_PI_2, PI};

    use super::*;

    fn assert_point_close(a: Point, b: Point) {
        let eps = 1e-9;
        assert!((a.x - b.x).abs() <= eps, "x {a:?} != {b:?}");
        assert!((a.y - b.y).abs() <= eps, "y {a:?} != {b:?}");
    }

    #[test]
    fn fixed_box_grows_by_margin() {
        let b = ViewBox::new(-1.0, -1.0, 1.0, 1.0).fixed(0.02);
        assert!((b.xmin + 1.04).abs() < 1e-12);
        assert!((b.xmax - 1.04).abs() < 1e-12);
        assert!((b.height() - 2.08).abs() < 1e-12);
    }

    #[test]
    fn fixed_box_replaces_empty_spans() {
        let b = ViewBox::new(3.0, 2.0, 3.0, 2.0).fixed(0.0);
        assert_eq!(b.width(), 1.0);
        assert_eq!(b.height(), 1.0);
        assert_eq!(b.ymin, 1.5);
    }

    #[test]
    fn center_projects_to_the_middle_of_a_symmetric_box() {
        let view = PolarView::new(Size::new(200.0, 100.0), ViewBox::new(-1.0, -1.0, 1.0, 1.0));
        assert_point_close(view.project(0.0, 1.234), Point::new(100.0, 50.0));
    }

    #[test]
    fn quarter_turns_follow_screen_orientation() {
        let view = PolarView::with_margin(
            Size::new(100.0, 100.0),
            ViewBox::new(-1.0, -1.0, 1.0, 1.0),
            0.0,
        );
        assert_point_close(view.project(1.0, 0.0), Point::new(100.0, 50.0));
        // Positive angles turn toward the top of the screen.
        assert_point_close(view.project(1.0, FRAC_PI_2), Point::new(50.0, 0.0));
        assert_point_close(view.project(1.0, PI), Point::new(0.0, 50.0));
        assert_point_close(view.project(0.5, -FRAC_PI_2), Point::new(50.0, 75.0));
    }
}
