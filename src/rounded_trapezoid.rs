// Copyright 2026 the Trapezoid Shapes Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A trapezoid with rounded corners.

use kurbo::Rect;

use crate::{FlexibleEdge, InsettableShape, Trapezoid, TrapezoidGeometry, TrapezoidParams};

/// A trapezoid whose four corners are rounded by the same radius.
///
/// # Examples
///
/// ```
/// use trapezoid_shapes::{FlexibleEdge, InsettableShape, RoundedTrapezoid};
/// use trapezoid_shapes::kurbo::{Rect, Shape};
///
/// let shape = RoundedTrapezoid::new(8.0)
///     .with_edge_ratio(0.35)
///     .with_flexible_edge(FlexibleEdge::Right);
/// let rect = Rect::new(0.0, 0.0, 150.0, 150.0);
/// let outline = shape.in_rect(rect);
/// assert_eq!(outline.radius(), 8.0);
/// assert!(outline.contains((75.0, 75.0).into()));
///
/// let path = shape.path(rect, 0.1);
/// assert!(path.bounding_box().x0.abs() < 1e-9);
/// ```
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RoundedTrapezoid {
    corner_radius: f64,
    edge_ratio: f64,
    flexible_edge: FlexibleEdge,
    edge_offset: f64,
    inset: f64,
}

impl RoundedTrapezoid {
    /// Corner radius used when none is given.
    pub const DEFAULT_CORNER_RADIUS: f64 = 10.0;

    /// A rounded trapezoid with the given corner radius and default edge:
    /// ratio `0.65`, flexible top edge, no offset.
    #[inline]
    pub const fn new(corner_radius: f64) -> Self {
        Self {
            corner_radius,
            edge_ratio: TrapezoidParams::DEFAULT_EDGE_RATIO,
            flexible_edge: FlexibleEdge::Top,
            edge_offset: 0.0,
            inset: 0.0,
        }
    }

    /// A rounded trapezoid from explicit parameters.
    #[inline]
    pub const fn from_params(params: TrapezoidParams) -> Self {
        Self {
            corner_radius: params.corner_radius,
            edge_ratio: params.edge_ratio,
            flexible_edge: params.flexible_edge,
            edge_offset: params.edge_offset,
            inset: params.inset,
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

    /// Set the edge offset.
    #[must_use]
    pub fn with_edge_offset(self, edge_offset: f64) -> Self {
        Self {
            edge_offset,
            ..self
        }
    }

    /// Set the corner radius.
    #[must_use]
    pub fn with_corner_radius(self, corner_radius: f64) -> Self {
        Self {
            corner_radius,
            ..self
        }
    }

    /// The parameters of this shape.
    #[inline]
    pub fn params(&self) -> TrapezoidParams {
        TrapezoidParams {
            edge_ratio: self.edge_ratio,
            flexible_edge: self.flexible_edge,
            edge_offset: self.edge_offset,
            corner_radius: self.corner_radius,
            inset: self.inset,
        }
    }

    /// Requested corner radius.
    #[inline]
    pub fn corner_radius(&self) -> f64 {
        self.corner_radius
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

impl Default for RoundedTrapezoid {
    #[inline]
    fn default() -> Self {
        Self::new(Self::DEFAULT_CORNER_RADIUS)
    }
}

impl InsettableShape for RoundedTrapezoid {
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

impl From<Trapezoid> for RoundedTrapezoid {
    #[inline]
    fn from(trapezoid: Trapezoid) -> Self {
        Self::from_params(trapezoid.params())
    }
}

#[cfg(test)]
mod tests {
    use crate::{FlexibleEdge, InsettableShape, RoundedTrapezoid, Trapezoid};
    use kurbo::{Rect, Shape};

    const FRAME: Rect = Rect::new(0.0, 0.0, 150.0, 150.0);

    #[test]
    fn defaults() {
        let shape = RoundedTrapezoid::default();
        assert_eq!(shape.corner_radius(), 10.0);
        assert_eq!(shape.edge_ratio(), 0.65);
        assert_eq!(shape.flexible_edge(), FlexibleEdge::Top);
        assert_eq!(shape.edge_offset(), 0.0);
        assert_eq!(shape.inset_amount(), 0.0);
        assert_eq!(RoundedTrapezoid::new(10.0), shape);
    }

    #[test]
    fn builder() {
        let shape = RoundedTrapezoid::new(35.0)
            .with_edge_ratio(0.35)
            .with_flexible_edge(FlexibleEdge::Left)
            .with_edge_offset(-50.0)
            .with_corner_radius(8.0);
        assert_eq!(shape.corner_radius(), 8.0);
        assert_eq!(shape.edge_ratio(), 0.35);
        assert_eq!(shape.flexible_edge(), FlexibleEdge::Left);
        assert_eq!(shape.edge_offset(), -50.0);
    }

    #[test]
    fn inset_accumulates() {
        let shape = RoundedTrapezoid::default().with_edge_offset(-20.0);
        let twice = shape.inset(1.5).inset(2.5);
        let once = shape.inset(4.0);
        assert_eq!(twice.inset_amount(), 4.0);
        assert_eq!(twice, once);
        assert_eq!(twice.path(FRAME, 0.1), once.path(FRAME, 0.1));
        // Everything else is carried over.
        assert_eq!(twice.flexible_edge(), shape.flexible_edge());
        assert_eq!(twice.edge_offset(), shape.edge_offset());
        assert_eq!(twice.corner_radius(), shape.corner_radius());
    }

    #[test]
    fn inset_rounds_more() {
        let shape = RoundedTrapezoid::default();
        let mut inset = shape;
        let mut last = inset.in_rect(FRAME).radius();
        for _ in 0..5 {
            inset = inset.inset(1.0);
            let next = inset.in_rect(FRAME).radius();
            assert!(next > last, "{next} <= {last}");
            last = next;
        }
        assert_eq!(shape.inset(2.0).in_rect(FRAME).radius(), 11.0);
    }

    #[test]
    fn from_trapezoid_has_square_corners() {
        let shape = RoundedTrapezoid::from(Trapezoid::new(0.4).inset(2.0));
        assert_eq!(shape.corner_radius(), 0.0);
        assert_eq!(shape.edge_ratio(), 0.4);
        assert_eq!(shape.inset_amount(), 2.0);
    }

    #[test]
    fn params_round_trip() {
        let shape = RoundedTrapezoid::new(6.0)
            .with_flexible_edge(FlexibleEdge::Bottom)
            .with_edge_offset(3.0)
            .inset(1.0);
        assert_eq!(RoundedTrapezoid::from_params(shape.params()), shape);
        assert_eq!(shape.params().corner_radius, 6.0);
        assert_eq!(shape.params().inset, 1.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn missing_fields_use_rounded_defaults() {
        let shape: RoundedTrapezoid = serde_json::from_str("{}").unwrap();
        assert_eq!(shape, RoundedTrapezoid::default());
        assert_eq!(shape.corner_radius(), RoundedTrapezoid::DEFAULT_CORNER_RADIUS);

        let shape: RoundedTrapezoid =
            serde_json::from_str(r#"{"edge_ratio": 0.35, "flexible_edge": "left"}"#).unwrap();
        assert_eq!(shape.corner_radius(), 10.0);
        assert_eq!(shape.edge_ratio(), 0.35);
        assert_eq!(shape.flexible_edge(), FlexibleEdge::Left);

        let json = serde_json::to_string(&RoundedTrapezoid::new(4.0)).unwrap();
        let back: RoundedTrapezoid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, RoundedTrapezoid::new(4.0));
    }

    #[test]
    fn outline_is_closed() {
        for edge in FlexibleEdge::ALL {
            let path = RoundedTrapezoid::default()
                .with_flexible_edge(edge)
                .path(FRAME, 0.1);
            assert!(path.area() > 0.0, "{edge}");
            assert_eq!(path.elements().last(), Some(&kurbo::PathEl::ClosePath));
        }
    }
}
