// Copyright 2026 the Trapezoid Shapes Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A trapezoid placed in a rectangle.

use kurbo::{PathEl, Point, Rect, RoundedRect, Shape};
use smallvec::SmallVec;

use crate::{Corner, CornerArc, FlexibleEdge};

/// Tolerance used to flatten arcs when computing winding numbers.
const WINDING_TOLERANCE: f64 = 1e-3;

/// The four corners of a trapezoid inside its bounding rectangle, together
/// with the radius they are rounded by.
///
/// Produced by [`TrapezoidParams::resolve`](crate::TrapezoidParams::resolve).
/// The outline starts halfway along the edge opposite the flexible edge and
/// visits every corner once. A radius of zero gives straight lines only.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct TrapezoidGeometry {
    rect: Rect,
    flexible_edge: FlexibleEdge,
    corners: [Point; 4],
    radius: f64,
}

impl TrapezoidGeometry {
    /// `corners` is indexed by [`Corner`].
    pub(crate) fn from_corners(
        rect: Rect,
        flexible_edge: FlexibleEdge,
        corners: [Point; 4],
        radius: f64,
    ) -> Self {
        Self {
            rect,
            flexible_edge,
            corners,
            radius,
        }
    }

    /// The bounding rectangle the trapezoid was fitted into.
    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// The edge that was shortened.
    #[inline]
    pub fn flexible_edge(&self) -> FlexibleEdge {
        self.flexible_edge
    }

    /// The radius every corner is rounded with.
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Position of a corner of the polygon the outline is inscribed in.
    #[inline]
    pub fn corner(&self, corner: Corner) -> Point {
        self.corners[corner.index()]
    }

    /// The two ends of the flexible edge, lower coordinate along the edge
    /// axis first (before any offset).
    pub fn flexible_corners(&self) -> (Point, Point) {
        let (near, far) = self.flexible_edge.corners();
        (self.corner(near), self.corner(far))
    }

    /// Corner positions in the order the outline visits them.
    pub fn outline_corners(&self) -> [Point; 4] {
        self.flexible_edge.layout().order.map(|corner| self.corner(corner))
    }

    /// Where the outline starts and ends: the midpoint of the edge opposite
    /// the flexible edge.
    pub fn start_point(&self) -> Point {
        let (a, b) = self.flexible_edge.opposite().corners();
        self.corner(a).midpoint(self.corner(b))
    }

    /// The rounding of each corner, in outline order.
    pub fn corner_arcs(&self) -> [CornerArc; 4] {
        let pts = self.outline_corners();
        [0, 1, 2, 3].map(|i| CornerArc::new(pts[(i + 3) % 4], pts[i], pts[(i + 1) % 4], self.radius))
    }

    /// Whether the corners coincide with the corners of the bounding
    /// rectangle.
    pub fn is_rectangular(&self) -> bool {
        Corner::ALL
            .into_iter()
            .all(|corner| self.corner(corner) == corner.of(self.rect))
    }

    fn polygon_area(&self) -> f64 {
        let pts = self.outline_corners();
        let mut area = 0.0;
        for i in 0..4 {
            area += pts[i].to_vec2().cross(pts[(i + 1) % 4].to_vec2());
        }
        0.5 * area
    }
}

#[doc(hidden)]
#[derive(Debug)]
pub struct TrapezoidPathIter(smallvec::IntoIter<[PathEl; 16]>);

impl Iterator for TrapezoidPathIter {
    type Item = PathEl;

    #[inline]
    fn next(&mut self) -> Option<PathEl> {
        self.0.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl Shape for TrapezoidGeometry {
    type PathElementsIter<'iter> = TrapezoidPathIter;

    fn path_elements(&self, tolerance: f64) -> TrapezoidPathIter {
        let mut elements = SmallVec::<[PathEl; 16]>::new();
        elements.push(PathEl::MoveTo(self.start_point()));
        for arc in self.corner_arcs() {
            arc.append_to(&mut elements, tolerance);
        }
        elements.push(PathEl::ClosePath);
        TrapezoidPathIter(elements.into_iter())
    }

    fn area(&self) -> f64 {
        let cut: f64 = self.corner_arcs().iter().map(CornerArc::cut_area).sum();
        self.polygon_area() - cut
    }

    fn perimeter(&self, _accuracy: f64) -> f64 {
        // Tangent points may overshoot a short edge, so measure the straight
        // pieces between them rather than subtracting from the polygon.
        let arcs = self.corner_arcs();
        let mut pen = self.start_point();
        let mut length = 0.0;
        for arc in &arcs {
            length += pen.distance(arc.start) + arc.arc_length();
            pen = arc.end;
        }
        length + pen.distance(self.start_point())
    }

    fn winding(&self, pt: Point) -> i32 {
        self.to_path(WINDING_TOLERANCE).winding(pt)
    }

    fn bounding_box(&self) -> Rect {
        let start = self.start_point();
        self.corner_arcs()
            .iter()
            .fold(Rect::from_points(start, start), |bbox, arc| {
                arc.union_bounds(bbox)
            })
    }

    fn as_rect(&self) -> Option<Rect> {
        (self.radius == 0.0 && self.is_rectangular()).then_some(self.rect)
    }

    fn as_rounded_rect(&self) -> Option<RoundedRect> {
        let max_radius = 0.5 * self.rect.width().min(self.rect.height());
        (self.radius > 0.0 && self.radius <= max_radius && self.is_rectangular())
            .then(|| RoundedRect::from_rect(self.rect, self.radius))
    }
}
