// Copyright 2026 the Trapezoid Shapes Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The parameters shared by every trapezoid shape.

use kurbo::{BezPath, Rect, Shape};

use crate::{Corner, FlexibleEdge, TrapezoidGeometry};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// Everything needed to fit a trapezoid into a rectangle.
///
/// Out-of-range values are coerced rather than rejected:
///
/// - a negative `edge_ratio` behaves as `0.0`. Ratios above `1.0` are kept and
///   make the flexible edge longer than the side it replaces, reaching past
///   the rectangle.
/// - when `corner_radius` is non-zero, the magnitude of `edge_offset` is
///   capped at the [edge inset](Self::edge_inset) so the corners stay
///   roundable. Square corners allow any offset.
/// - the rounding radius never exceeds half of the rectangle or half of the
///   flexible edge, before `inset` is added.
///
/// # Examples
///
/// ```
/// use trapezoid_shapes::{FlexibleEdge, TrapezoidParams};
/// use trapezoid_shapes::kurbo::{Point, Rect};
///
/// let params = TrapezoidParams::new()
///     .with_edge_ratio(0.5)
///     .with_flexible_edge(FlexibleEdge::Top)
///     .with_corner_radius(10.0);
/// let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
/// assert_eq!(params.edge_inset(rect), 25.0);
///
/// let geometry = params.resolve(rect);
/// assert_eq!(geometry.radius(), 10.0);
/// let (near, far) = geometry.flexible_corners();
/// assert_eq!(near, Point::new(25.0, 0.0));
/// assert_eq!(far, Point::new(75.0, 0.0));
/// ```
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TrapezoidParams {
    /// Length of the flexible edge relative to the side of the rectangle it
    /// lies on.
    pub edge_ratio: f64,
    /// Which edge is shortened.
    pub flexible_edge: FlexibleEdge,
    /// Signed shift of the flexible edge along its own axis.
    pub edge_offset: f64,
    /// Requested rounding radius of all four corners.
    pub corner_radius: f64,
    /// Accumulated stroke inset, half of which is added to the corner radius.
    pub inset: f64,
}

impl TrapezoidParams {
    /// Edge ratio used when none is given.
    pub const DEFAULT_EDGE_RATIO: f64 = 0.65;

    /// Default parameters: ratio `0.65`, flexible top edge, no offset, square
    /// corners, no inset.
    #[inline]
    pub const fn new() -> Self {
        Self {
            edge_ratio: Self::DEFAULT_EDGE_RATIO,
            flexible_edge: FlexibleEdge::Top,
            edge_offset: 0.0,
            corner_radius: 0.0,
            inset: 0.0,
        }
    }

    /// Set the edge ratio.
    #[must_use]
    #[inline]
    pub fn with_edge_ratio(mut self, edge_ratio: f64) -> Self {
        self.edge_ratio = edge_ratio;
        self
    }

    /// Set the flexible edge.
    #[must_use]
    #[inline]
    pub fn with_flexible_edge(mut self, flexible_edge: FlexibleEdge) -> Self {
        self.flexible_edge = flexible_edge;
        self
    }

    /// Set the edge offset.
    #[must_use]
    #[inline]
    pub fn with_edge_offset(mut self, edge_offset: f64) -> Self {
        self.edge_offset = edge_offset;
        self
    }

    /// Set the requested corner radius.
    #[must_use]
    #[inline]
    pub fn with_corner_radius(mut self, corner_radius: f64) -> Self {
        self.corner_radius = corner_radius;
        self
    }

    /// Add `amount` to the accumulated inset.
    #[must_use]
    #[inline]
    pub fn inset_by(mut self, amount: f64) -> Self {
        self.inset += amount;
        self
    }

    /// The edge ratio actually used, never negative.
    #[inline]
    pub fn clamped_edge_ratio(&self) -> f64 {
        self.edge_ratio.max(0.0)
    }

    /// How far each end of the flexible edge is pulled in from its corner.
    pub fn edge_inset(&self, rect: Rect) -> f64 {
        let length = self.flexible_edge.axis().length(rect.abs());
        length * (1.0 - self.clamped_edge_ratio()) / 2.0
    }

    /// The shift applied to the flexible edge, after capping.
    pub fn line_offset(&self, rect: Rect) -> f64 {
        let requested = self.edge_offset.abs();
        let magnitude = if self.corner_radius != 0.0 {
            requested.min(self.edge_inset(rect).abs())
        } else {
            requested
        };
        magnitude.copysign(self.edge_offset)
    }

    /// The radius every corner is rounded with.
    pub fn effective_radius(&self, rect: Rect) -> f64 {
        let rect = rect.abs();
        let edge_length = self.flexible_edge.axis().length(rect) * self.clamped_edge_ratio();
        let radius = self
            .corner_radius
            .max(0.0)
            .min(rect.width() / 2.0)
            .min(rect.height() / 2.0)
            .min(edge_length / 2.0);
        (radius + self.inset / 2.0).max(0.0)
    }

    /// Place the trapezoid in `rect`.
    ///
    /// A rectangle with negative width or height is normalized first.
    pub fn resolve(&self, rect: Rect) -> TrapezoidGeometry {
        let rect = rect.abs();
        if self.edge_ratio < 0.0 {
            log::trace!("edge ratio {} clamped to 0", self.edge_ratio);
        } else if self.edge_ratio > 1.0 {
            log::trace!(
                "edge ratio {} is above 1, {} edge outgrows the rectangle",
                self.edge_ratio,
                self.flexible_edge
            );
        }

        let layout = self.flexible_edge.layout();
        let edge_inset = self.edge_inset(rect);
        let line_offset = self.line_offset(rect);
        if line_offset != self.edge_offset {
            log::trace!(
                "edge offset {} capped to {line_offset} to keep corners roundable",
                self.edge_offset
            );
        }

        let mut corners = Corner::ALL.map(|corner| corner.of(rect));
        let near = layout.near.index();
        let far = layout.far.index();
        corners[near] = layout.axis.shift(corners[near], line_offset + edge_inset);
        corners[far] = layout.axis.shift(corners[far], line_offset - edge_inset);

        TrapezoidGeometry::from_corners(
            rect,
            self.flexible_edge,
            corners,
            self.effective_radius(rect),
        )
    }

    /// Build the closed outline of the trapezoid in `rect`.
    ///
    /// Arcs are flattened to cubic Béziers within `tolerance`.
    pub fn to_path(&self, rect: Rect, tolerance: f64) -> BezPath {
        self.resolve(rect).into_path(tolerance)
    }
}

impl Default for TrapezoidParams {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::TrapezoidParams;
    use crate::FlexibleEdge;
    use kurbo::{Rect, Vec2};

    const SQUARE: Rect = Rect::new(0.0, 0.0, 100.0, 100.0);

    fn assert_approx_eq(x: f64, y: f64) {
        assert!((x - y).abs() <= 1e-9, "{x} != {y}");
    }

    #[test]
    fn defaults() {
        let params = TrapezoidParams::default();
        assert_eq!(params.edge_ratio, 0.65);
        assert_eq!(params.flexible_edge, FlexibleEdge::Top);
        assert_eq!(params.edge_offset, 0.0);
        assert_eq!(params.corner_radius, 0.0);
        assert_eq!(params.inset, 0.0);
    }

    #[test]
    fn edge_inset() {
        let params = TrapezoidParams::new();
        assert_approx_eq(params.edge_inset(SQUARE), 17.5);
        // Top and bottom measure the width, left and right the height.
        let wide = Rect::new(0.0, 0.0, 200.0, 50.0);
        assert_approx_eq(params.edge_inset(wide), 35.0);
        let params = params.with_flexible_edge(FlexibleEdge::Left);
        assert_approx_eq(params.edge_inset(wide), 8.75);
        // The rectangle's position does not matter.
        assert_approx_eq(params.edge_inset(wide + Vec2::new(40.0, -10.0)), 8.75);
    }

    #[test]
    fn negative_ratio_is_zero() {
        let negative = TrapezoidParams::new()
            .with_edge_ratio(-0.5)
            .with_corner_radius(10.0);
        let zero = negative.with_edge_ratio(0.0);
        assert_eq!(negative.clamped_edge_ratio(), 0.0);
        assert_eq!(negative.edge_inset(SQUARE), zero.edge_inset(SQUARE));
        assert_eq!(
            negative.effective_radius(SQUARE),
            zero.effective_radius(SQUARE)
        );
        assert_eq!(negative.resolve(SQUARE), zero.resolve(SQUARE));
    }

    #[test]
    fn offset_is_capped_only_when_rounded() {
        let rounded = TrapezoidParams::new()
            .with_corner_radius(10.0)
            .with_edge_offset(50.0);
        assert_approx_eq(rounded.line_offset(SQUARE), 17.5);
        assert_approx_eq(rounded.with_edge_offset(-50.0).line_offset(SQUARE), -17.5);
        assert_approx_eq(rounded.with_edge_offset(5.0).line_offset(SQUARE), 5.0);

        let square = rounded.with_corner_radius(0.0);
        assert_approx_eq(square.line_offset(SQUARE), 50.0);
        assert_approx_eq(square.with_edge_offset(-120.0).line_offset(SQUARE), -120.0);
    }

    #[test]
    fn effective_radius_bounds() {
        let params = TrapezoidParams::new().with_corner_radius(10.0);
        assert_approx_eq(params.effective_radius(SQUARE), 10.0);

        // Half the flexible edge: 100 * 0.65 / 2.
        let params = params.with_corner_radius(1000.0);
        assert_approx_eq(params.effective_radius(SQUARE), 32.5);

        // Half the height of a flat rectangle.
        let flat = Rect::new(0.0, 0.0, 100.0, 20.0);
        assert_approx_eq(params.effective_radius(flat), 10.0);

        // Full-width edge, limited by the rectangle.
        let params = params.with_edge_ratio(1.0);
        assert_approx_eq(params.effective_radius(SQUARE), 50.0);

        // A negative radius means square corners.
        let params = params.with_corner_radius(-5.0);
        assert_eq!(params.effective_radius(SQUARE), 0.0);
    }

    #[test]
    fn inset_grows_radius_by_half() {
        let params = TrapezoidParams::new().with_corner_radius(10.0);
        let inset = params.inset_by(4.0);
        assert_eq!(inset.inset, 4.0);
        assert_approx_eq(inset.effective_radius(SQUARE), 12.0);
        assert_approx_eq(inset.inset_by(2.0).effective_radius(SQUARE), 13.0);
    }

    #[test]
    fn degenerate_rect() {
        let params = TrapezoidParams::new().with_corner_radius(10.0);
        let line = Rect::new(0.0, 0.0, 100.0, 0.0);
        assert_eq!(params.effective_radius(line), 0.0);
        let point = Rect::new(5.0, 5.0, 5.0, 5.0);
        assert_eq!(params.edge_inset(point), 0.0);
        assert_eq!(params.line_offset(point), 0.0);
        let path = params.with_edge_offset(3.0).to_path(point, 0.1);
        assert!(path
            .elements()
            .iter()
            .all(|el| el.end_point().map_or(true, |pt| pt.is_finite())));
    }
}
