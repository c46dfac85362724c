// Copyright 2026 the Trapezoid Shapes Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The flexible edge of a trapezoid and the corners it moves.

use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

use kurbo::{Point, Rect};

/// A corner of the bounding rectangle, named for a y-down coordinate space.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Corner {
    /// Minimum x, maximum y.
    BottomLeft,
    /// Minimum x, minimum y.
    TopLeft,
    /// Maximum x, minimum y.
    TopRight,
    /// Maximum x, maximum y.
    BottomRight,
}

impl Corner {
    /// The four corners, in the order an outline with a flexible top edge visits them.
    pub const ALL: [Self; 4] = [
        Self::BottomLeft,
        Self::TopLeft,
        Self::TopRight,
        Self::BottomRight,
    ];

    /// The position of this corner on `rect`.
    #[inline]
    pub fn of(self, rect: Rect) -> Point {
        match self {
            Self::BottomLeft => Point::new(rect.x0, rect.y1),
            Self::TopLeft => Point::new(rect.x0, rect.y0),
            Self::TopRight => Point::new(rect.x1, rect.y0),
            Self::BottomRight => Point::new(rect.x1, rect.y1),
        }
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

/// The axis a flexible edge runs along.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum EdgeAxis {
    /// The edge runs along x; its length is the rectangle width.
    Horizontal,
    /// The edge runs along y; its length is the rectangle height.
    Vertical,
}

impl EdgeAxis {
    /// The extent of `rect` along this axis.
    #[inline]
    pub fn length(self, rect: Rect) -> f64 {
        match self {
            Self::Horizontal => rect.width(),
            Self::Vertical => rect.height(),
        }
    }

    /// Move `pt` by `delta` along this axis.
    #[inline]
    pub(crate) fn shift(self, pt: Point, delta: f64) -> Point {
        match self {
            Self::Horizontal => Point::new(pt.x + delta, pt.y),
            Self::Vertical => Point::new(pt.x, pt.y + delta),
        }
    }
}

/// Which edge of the bounding rectangle is shortened by the edge ratio.
///
/// The flexible edge is the short side of the trapezoid. Its ends are pulled
/// in from the rectangle corners and the whole edge can be shifted along its
/// own axis; the other two corners stay on the rectangle.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FlexibleEdge {
    /// The minimum-y edge.
    #[default]
    Top,
    /// The maximum-x edge.
    Right,
    /// The maximum-y edge.
    Bottom,
    /// The minimum-x edge.
    Left,
}

/// Where a flexible edge sits and how the outline walks around it.
#[derive(Clone, Copy, Debug)]
pub(crate) struct EdgeLayout {
    pub(crate) axis: EdgeAxis,
    /// End of the edge with the smaller coordinate along `axis`.
    pub(crate) near: Corner,
    /// End of the edge with the larger coordinate along `axis`.
    pub(crate) far: Corner,
    /// Corners in outline order. The flexible edge joins `order[1]` and
    /// `order[2]`; the outline starts halfway between `order[3]` and `order[0]`.
    pub(crate) order: [Corner; 4],
}

const TOP: EdgeLayout = EdgeLayout {
    axis: EdgeAxis::Horizontal,
    near: Corner::TopLeft,
    far: Corner::TopRight,
    order: [
        Corner::BottomLeft,
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomRight,
    ],
};

const RIGHT: EdgeLayout = EdgeLayout {
    axis: EdgeAxis::Vertical,
    near: Corner::TopRight,
    far: Corner::BottomRight,
    order: [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomRight,
        Corner::BottomLeft,
    ],
};

const BOTTOM: EdgeLayout = EdgeLayout {
    axis: EdgeAxis::Horizontal,
    near: Corner::BottomLeft,
    far: Corner::BottomRight,
    order: [
        Corner::TopRight,
        Corner::BottomRight,
        Corner::BottomLeft,
        Corner::TopLeft,
    ],
};

const LEFT: EdgeLayout = EdgeLayout {
    axis: EdgeAxis::Vertical,
    near: Corner::TopLeft,
    far: Corner::BottomLeft,
    order: [
        Corner::BottomRight,
        Corner::BottomLeft,
        Corner::TopLeft,
        Corner::TopRight,
    ],
};

impl FlexibleEdge {
    /// All four edges.
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];

    /// The axis this edge runs along.
    #[inline]
    pub fn axis(self) -> EdgeAxis {
        self.layout().axis
    }

    /// The two corners this edge moves, lower coordinate first.
    #[inline]
    pub fn corners(self) -> (Corner, Corner) {
        let layout = self.layout();
        (layout.near, layout.far)
    }

    /// The edge across the rectangle from this one.
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Right => Self::Left,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
        }
    }

    #[inline]
    pub(crate) fn layout(self) -> &'static EdgeLayout {
        match self {
            Self::Top => &TOP,
            Self::Right => &RIGHT,
            Self::Bottom => &BOTTOM,
            Self::Left => &LEFT,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
        }
    }
}

impl fmt::Display for FlexibleEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FlexibleEdge {
    type Err = ParseFlexibleEdgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|edge| edge.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseFlexibleEdgeError {
                input: s.to_string(),
            })
    }
}

/// An error which can be returned when parsing a [`FlexibleEdge`].
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ParseFlexibleEdgeError {
    input: String,
}

impl ParseFlexibleEdgeError {
    /// The text that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ParseFlexibleEdgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid flexible edge `{}`, expected one of top, right, bottom, left",
            self.input
        )
    }
}

impl core::error::Error for ParseFlexibleEdgeError {}
