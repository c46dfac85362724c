// Copyright 2026 the Trapezoid Shapes Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A trapezoid with square corners.

use kurbo::Rect;

use crate::{FlexibleEdge, InsettableShape, TrapezoidGeometry, TrapezoidParams};

/// A trapezoid with square corners.
///
/// This is a [`RoundedTrapezoid`](crate::RoundedTrapezoid) with the corner
/// radius pinned to zero, which also leaves the edge offset uncapped.
///
/// # Examples
///
/// ```
/// use trapezoid_shapes::{InsettableShape, Trapezoid};
/// use trapezoid_shapes::kurbo::{PathEl, Point, Rect};
///
/// let path = Trapezoid::new(0.5).path(Rect::new(0.0, 0.0, 100.0, 100.0), 0.1);
/// assert_eq!(
///     path.elements(),
///     &[
///         PathEl::MoveTo(Point::new(50.0, 100.0)),
///         PathEl::LineTo(Point::new(0.0, 100.0)),
///         PathEl::LineTo(Point::new(25.0, 0.0)),
///         PathEl::LineTo(Point::new(75.0, 0.0)),
///         PathEl::LineTo(Point::new(100.0, 100.0)),
///         PathEl::ClosePath,
///     ]
/// );
/// ```
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Trapezoid {
    edge_ratio: f64,
    flexible_edge: FlexibleEdge,
    edge_offset: f64,
    inset: f64,
}

impl Trapezoid {
    /// A trapezoid with a flexible top edge `edge_ratio` times the width of
    /// its rectangle.
    #[inline]
    pub const fn new(edge_ratio: f64) -> Self {
        Self {
            edge_ratio,
            flexible_edge: FlexibleEdge::Top,
            edge_offset: 0.0,
            inset: 0.0,
        }
    }

    /// Set the edge ratio.
    #[must_use]
    pub fn with_edge_ratio(self, edge_ratio: f64) -> Self {
        Self { edge_ratio, ..self }
    }

    /// Set the flexible edge.
    #[must_use]
    pub fn with_flexible_edge(self, flexible_edge: FlexibleEdge) -> Self {
        Self {
            flexible_edge,
            ..self
        }
    }

    /// Set the edge offset. It is not capped, so the flexible edge may leave
    /// the rectangle.
    #[must_use]
    pub fn with_edge_offset(self, edge_offset: f64) -> Self {
        Self {
            edge_offset,
            ..self
        }
    }

    /// The parameters of this shape, with a zero corner radius.
    pub fn params(&self) -> TrapezoidParams {
        TrapezoidParams {
            edge_ratio: self.edge_ratio,
            flexible_edge: self.flexible_edge,
            edge_offset: self.edge_offset,
            corner_radius: 0.0,
            inset: self.inset,
        }
    }

    /// Edge ratio, as given.
    #[inline]
    pub fn edge_ratio(&self) -> f64 {
        self.edge_ratio
    }

    /// The shortened edge.
    #[inline]
    pub fn flexible_edge(&self) -> FlexibleEdge {
        self.flexible_edge
    }

    /// Edge offset, as given.
    #[inline]
    pub fn edge_offset(&self) -> f64 {
        self.edge_offset
    }

    /// Total inset accumulated so far.
    #[inline]
    pub fn inset_amount(&self) -> f64 {
        self.inset
    }
}

impl Default for Trapezoid {
    #[inline]
    fn default() -> Self {
        Self::new(TrapezoidParams::DEFAULT_EDGE_RATIO)
    }
}

impl InsettableShape for Trapezoid {
    type Placed = TrapezoidGeometry;

    #[inline]
    fn in_rect(&self, rect: Rect) -> TrapezoidGeometry {
        self.params().resolve(rect)
    }

    #[inline]
    fn inset(&self, amount: f64) -> Self {
        Self {
            inset: self.inset + amount,
            ..*self
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{FlexibleEdge, InsettableShape, Trapezoid, TrapezoidParams};
    use kurbo::{PathEl, Point, Rect, Shape};

    const FRAME: Rect = Rect::new(0.0, 0.0, 150.0, 150.0);

    #[test]
    fn defaults() {
        let shape = Trapezoid::default();
        assert_eq!(shape.edge_ratio(), 0.65);
        assert_eq!(shape.flexible_edge(), FlexibleEdge::Top);
        assert_eq!(shape.edge_offset(), 0.0);
        assert_eq!(shape.inset_amount(), 0.0);
        assert_eq!(shape.params().corner_radius, 0.0);
        assert_eq!(shape.params(), TrapezoidParams::new());
    }

    #[test]
    fn offset_is_not_capped() {
        let geometry = Trapezoid::new(0.65)
            .with_edge_offset(100.0)
            .in_rect(Rect::new(0.0, 0.0, 100.0, 100.0));
        assert!((geometry.corner(crate::Corner::TopLeft).x - 117.5).abs() < 1e-9);
        assert!(geometry.bounding_box().x1 > 100.0);
    }

    #[test]
    fn inset_keeps_shape() {
        let shape = Trapezoid::new(0.35)
            .with_flexible_edge(FlexibleEdge::Left)
            .with_edge_offset(12.0);
        let inset = shape.inset(3.0).inset(1.0);
        assert_eq!(inset.flexible_edge(), FlexibleEdge::Left);
        assert_eq!(inset.edge_ratio(), 0.35);
        assert_eq!(inset.edge_offset(), 12.0);
        assert_eq!(inset.inset_amount(), 4.0);
        assert_eq!(inset, shape.inset(4.0));
    }

    #[test]
    fn inset_only_grows_radius() {
        // The inset still feeds the radius even though the requested one is
        // zero.
        let geometry = Trapezoid::default().inset(4.0).in_rect(FRAME);
        assert_eq!(geometry.radius(), 2.0);
        let curves = geometry
            .path_elements(0.1)
            .filter(|el| matches!(el, PathEl::CurveTo(..)))
            .count();
        assert!(curves >= 4);
    }

    #[test]
    fn straight_outline() {
        for edge in FlexibleEdge::ALL {
            let geometry = Trapezoid::new(0.35).with_flexible_edge(edge).in_rect(FRAME);
            assert_eq!(geometry.radius(), 0.0);
            let elements: Vec<_> = geometry.path_elements(0.1).collect();
            assert!(elements
                .iter()
                .all(|el| matches!(el, PathEl::MoveTo(..) | PathEl::LineTo(..) | PathEl::ClosePath)));
            // Every corner lies on the rectangle boundary.
            for el in &elements {
                if let PathEl::LineTo(Point { x, y }) = *el {
                    assert!(x == 0.0 || x == 150.0 || y == 0.0 || y == 150.0, "{edge}: ({x}, {y})");
                }
            }
        }
    }
}
