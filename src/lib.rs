// Copyright 2026 the Trapezoid Shapes Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trapezoid shapes for 2D user interfaces.
//!
//! This crate fits a trapezoid, optionally with rounded corners, into a
//! bounding rectangle and produces its outline as a [`kurbo`] path. One edge
//! of the rectangle, the *flexible edge*, is shortened by an edge ratio and
//! can be shifted along its own axis; the opposite two corners stay on the
//! rectangle.
//!
//! The geometry is total: out-of-range parameters are coerced into the
//! nearest well-defined outline instead of being rejected, so a shape can be
//! laid out on every redraw without error handling.
//!
//! # Examples
//!
//! Placing a shape and drawing it:
//! ```
//! use trapezoid_shapes::{FlexibleEdge, InsettableShape, RoundedTrapezoid};
//! use trapezoid_shapes::kurbo::{Rect, Shape};
//!
//! let shape = RoundedTrapezoid::default().with_flexible_edge(FlexibleEdge::Bottom);
//! let rect = Rect::new(0.0, 0.0, 120.0, 80.0);
//!
//! let outline = shape.in_rect(rect);
//! assert!(outline.area() < rect.area());
//!
//! let svg = outline.to_path(0.1).to_svg();
//! assert!(svg.starts_with('M'));
//! ```
//!
//! Stroking inside the outline, the way a border is drawn:
//! ```
//! use trapezoid_shapes::{InsettableShape, Trapezoid};
//! use trapezoid_shapes::kurbo::Rect;
//!
//! let line_width = 4.0;
//! let border = Trapezoid::default().inset(line_width / 2.0);
//! let path = border.path(Rect::new(0.0, 0.0, 150.0, 150.0), 0.1);
//! assert!(!path.elements().is_empty());
//! ```
//!
//! # Features
//!
//! This crate either uses the standard library or the [`libm`] crate for
//! math functionality. The `std` feature is enabled by default, but can be
//! disabled, as long as the `libm` feature is enabled. The `alloc` crate is
//! used regardless.
//!
//! The `serde` and `schemars` features derive serialization and JSON schemas
//! for the shape parameters.
//!
//! Parameter coercions are reported through the [`log`] facade at trace
//! level.
//!
//! [`libm`]: https://docs.rs/libm
//! [`log`]: https://docs.rs/log

#![forbid(unsafe_code)]
#![deny(missing_docs, clippy::trivially_copy_pass_by_ref)]
#![warn(clippy::doc_markdown, rustdoc::broken_intra_doc_links)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(unused_qualifications)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("trapezoid_shapes requires either the `std` or `libm` feature");

extern crate alloc;

pub use kurbo;

mod common;
mod corner_arc;
mod edge;
mod geometry;
mod insettable;
mod params;
mod rounded_trapezoid;
mod trapezoid;

pub use crate::corner_arc::*;
pub use crate::edge::*;
pub use crate::geometry::*;
pub use crate::insettable::*;
pub use crate::params::*;
pub use crate::rounded_trapezoid::*;
pub use crate::trapezoid::*;
