// Copyright 2026 the Trapezoid Shapes Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A polygon corner rounded by a circle tangent to both of its edges.

use core::f64::consts::{FRAC_PI_2, PI, TAU};

use kurbo::{Arc, PathEl, Point, Rect, Vec2};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// Below this, two unit edge directions are treated as parallel.
const PARALLEL_EPSILON: f64 = 1e-12;

/// The rounding of one polygon vertex.
///
/// Given the vertex, the points before and after it, and a radius, this is
/// the circle of that radius tangent to both edges meeting at the vertex. The
/// outline follows the incoming edge up to [`start`](Self::start), sweeps
/// along the circle, and leaves on the outgoing edge at [`end`](Self::end).
///
/// A non-positive radius or a vertex with collinear (or zero-length) edges
/// produces a sharp corner: `start`, `end` and `center` all equal the vertex
/// and the sweep is zero.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct CornerArc {
    /// The vertex being rounded.
    pub corner: Point,
    /// Where the arc leaves the incoming edge.
    pub start: Point,
    /// Where the arc meets the outgoing edge.
    pub end: Point,
    /// Center of the rounding circle.
    pub center: Point,
    /// Radius of the rounding circle.
    pub radius: f64,
    /// Signed sweep of the arc in radians, positive when the outline turns
    /// clockwise in a y-down space.
    pub sweep_angle: f64,
}

impl CornerArc {
    /// Round the vertex `corner` between the edges `from -> corner` and
    /// `corner -> to`.
    pub fn new(from: Point, corner: Point, to: Point, radius: f64) -> Self {
        let incoming = from - corner;
        let outgoing = to - corner;
        let (in_len, out_len) = (incoming.hypot(), outgoing.hypot());
        // Also rejects a NaN radius.
        if !(radius > 0.0) || in_len == 0.0 || out_len == 0.0 {
            return Self::sharp(corner);
        }

        let u0 = incoming / in_len;
        let u2 = outgoing / out_len;
        let cross = u0.cross(u2);
        let dot = u0.dot(u2);
        if cross.abs() <= PARALLEL_EPSILON {
            return Self::sharp(corner);
        }

        // Distance from the vertex to both tangent points: r / tan(theta / 2),
        // theta being the interior angle.
        let tangent = radius * (1.0 + dot) / cross.abs();
        let start = corner + u0 * tangent;
        let end = corner + u2 * tangent;

        // Normal of the incoming edge on the side of the outgoing one.
        let normal = Vec2::new(-u0.y, u0.x) * 1.0_f64.copysign(cross);
        let center = start + normal * radius;

        let interior = Vec2::new(dot, cross.abs()).angle();
        let sweep_angle = -(PI - interior).copysign(cross);

        Self {
            corner,
            start,
            end,
            center,
            radius,
            sweep_angle,
        }
    }

    /// A corner that is not rounded.
    #[inline]
    pub fn sharp(corner: Point) -> Self {
        Self {
            corner,
            start: corner,
            end: corner,
            center: corner,
            radius: 0.0,
            sweep_angle: 0.0,
        }
    }

    /// Whether the corner is drawn without an arc.
    #[inline]
    pub fn is_sharp(&self) -> bool {
        self.sweep_angle == 0.0
    }

    /// Distance from the vertex to either tangent point.
    #[inline]
    pub fn tangent_length(&self) -> f64 {
        (self.start - self.corner).hypot()
    }

    /// Length of the circular part of the corner.
    #[inline]
    pub fn arc_length(&self) -> f64 {
        self.radius * self.sweep_angle.abs()
    }

    /// The circular part of the corner as a [`kurbo::Arc`].
    pub fn arc(&self) -> Arc {
        Arc {
            center: self.center,
            radii: Vec2::new(self.radius, self.radius),
            start_angle: (self.start - self.center).angle(),
            sweep_angle: self.sweep_angle,
            x_rotation: 0.0,
        }
    }

    /// Area between the two tangent segments and the arc, signed like the
    /// turn at the vertex.
    ///
    /// Rounding removes this amount from the signed area of the polygon.
    pub(crate) fn cut_area(&self) -> f64 {
        if self.is_sharp() {
            return 0.0;
        }
        let sweep = self.sweep_angle.abs();
        let kite = self.radius * self.tangent_length();
        let sector = 0.5 * self.radius * self.radius * sweep;
        (kite - sector).copysign(self.sweep_angle)
    }

    /// Append the corner to a path whose current point lies on the incoming
    /// edge.
    pub fn append_to(&self, path: &mut impl Extend<PathEl>, tolerance: f64) {
        if self.is_sharp() {
            path.extend([PathEl::LineTo(self.corner)]);
        } else {
            path.extend([PathEl::LineTo(self.start)]);
            path.extend(self.arc().append_iter(tolerance));
        }
    }

    /// Grow `bbox` to include this corner of the outline.
    pub(crate) fn union_bounds(&self, bbox: Rect) -> Rect {
        if self.is_sharp() {
            return bbox.union_pt(self.corner);
        }
        let mut bbox = bbox.union_pt(self.start).union_pt(self.end);

        let start_angle = (self.start - self.center).angle();
        let (lo, hi) = if self.sweep_angle >= 0.0 {
            (start_angle, start_angle + self.sweep_angle)
        } else {
            (start_angle + self.sweep_angle, start_angle)
        };
        // Axis-aligned extremes of the circle that fall inside the sweep.
        let extremes = [
            (0.0, Vec2::new(1.0, 0.0)),
            (FRAC_PI_2, Vec2::new(0.0, 1.0)),
            (PI, Vec2::new(-1.0, 0.0)),
            (PI + FRAC_PI_2, Vec2::new(0.0, -1.0)),
        ];
        for (angle, dir) in extremes {
            let mut a = angle;
            while a < lo {
                a += TAU;
            }
            while a - TAU >= lo {
                a -= TAU;
            }
            if a <= hi {
                bbox = bbox.union_pt(self.center + dir * self.radius);
            }
        }
        bbox
    }
}
