// Copyright 2026 the Trapezoid Shapes Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shapes that are laid out into a rectangle and can be inset for stroking.

use kurbo::{BezPath, Rect, Shape};

/// A shape description that becomes a concrete [`Shape`] once it is given a
/// rectangle, and that can be inset so a border stroke stays inside it.
pub trait InsettableShape: Sized {
    /// The shape placed in a rectangle.
    type Placed: Shape;

    /// Fit the shape into `rect`.
    fn in_rect(&self, rect: Rect) -> Self::Placed;

    /// A copy of the shape inset by a further `amount`.
    ///
    /// Insets accumulate: `shape.inset(a).inset(b)` is the same shape as
    /// `shape.inset(a + b)`.
    #[must_use]
    fn inset(&self, amount: f64) -> Self;

    /// The outline of the shape in `rect`, with curves flattened to within
    /// `tolerance`.
    fn path(&self, rect: Rect, tolerance: f64) -> BezPath {
        self.in_rect(rect).into_path(tolerance)
    }
}
