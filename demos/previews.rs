// Copyright 2026 the Trapezoid Shapes Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gallery of trapezoid shapes, written to stdout as an HTML page of SVGs.
//!
//! Run with `cargo run --example previews > previews.html`.

use trapezoid_shapes::kurbo::{Rect, Shape};
use trapezoid_shapes::{FlexibleEdge, InsettableShape, RoundedTrapezoid, Trapezoid};

const TOLERANCE: f64 = 1e-2;
const FRAME: f64 = 150.0;
const PADDING: f64 = 16.0;

/// How a shape is painted.
enum Paint {
    Fill(&'static str),
    /// A stroke of the given width kept inside the outline.
    Border(&'static str, f64),
}

struct Tile {
    width: f64,
    layers: Vec<String>,
}

impl Tile {
    fn new(width: f64) -> Self {
        Self {
            width,
            layers: Vec::new(),
        }
    }

    /// The frame of the tile, shrunk by the default padding and `extra`.
    fn content(&self, extra: f64) -> Rect {
        Rect::new(0.0, 0.0, self.width, FRAME).inset(-(PADDING + extra))
    }

    fn draw<S: InsettableShape>(mut self, shape: S, rect: Rect, paint: Paint) -> Self {
        let layer = match paint {
            Paint::Fill(color) => {
                let path = shape.path(rect, TOLERANCE).to_svg();
                format!("<path d=\"{path}\" fill=\"{color}\" />")
            }
            Paint::Border(color, line_width) => {
                let half = line_width / 2.0;
                let path = shape
                    .inset(half)
                    .in_rect(rect.inset(-half))
                    .to_path(TOLERANCE)
                    .to_svg();
                format!(
                    "<path d=\"{path}\" fill=\"none\" stroke=\"{color}\" stroke-width=\"{line_width}\" />"
                )
            }
        };
        self.layers.push(layer);
        self
    }

    fn to_svg(&self) -> String {
        let mut svg = format!(
            "<svg width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" style=\"background: white\">\n",
            w = self.width,
            h = FRAME
        );
        for layer in &self.layers {
            svg.push_str("  ");
            svg.push_str(layer);
            svg.push('\n');
        }
        svg.push_str("</svg>");
        svg
    }
}

fn rounded_trapezoid_tiles() -> Vec<Tile> {
    let nested = [
        (0.0, "blue", FlexibleEdge::Top),
        (15.0, "red", FlexibleEdge::Top),
        (30.0, "green", FlexibleEdge::Top),
    ];
    let mut concentric = Tile::new(FRAME);
    for (padding, color, edge) in nested {
        let rect = concentric.content(padding);
        concentric = concentric.draw(
            RoundedTrapezoid::default().with_flexible_edge(edge),
            rect,
            Paint::Border(color, 0.5),
        );
    }

    let radii = Tile::new(FRAME);
    let (outer, inner) = (radii.content(0.0), radii.content(5.0));
    let radii = radii
        .draw(
            RoundedTrapezoid::new(8.0).with_edge_ratio(0.35),
            outer,
            Paint::Fill("rgba(255, 0, 0, 0.5)"),
        )
        .draw(
            RoundedTrapezoid::new(35.0).with_edge_ratio(0.35),
            inner,
            Paint::Fill("red"),
        );

    let shifted = RoundedTrapezoid::new(10.0).with_edge_offset(-50.0);
    let offset = Tile::new(FRAME);
    let rect = offset.content(0.0);
    let offset = offset
        .draw(shifted, rect, Paint::Border("black", 5.0))
        .draw(shifted, rect, Paint::Fill("purple"));

    let sides = [
        (0.0, "blue", FlexibleEdge::Right),
        (15.0, "red", FlexibleEdge::Left),
        (30.0, "green", FlexibleEdge::Right),
    ];
    let mut sideways = Tile::new(FRAME);
    for (padding, color, edge) in sides {
        let rect = sideways.content(padding);
        sideways = sideways.draw(
            RoundedTrapezoid::new(10.0).with_flexible_edge(edge),
            rect,
            Paint::Border(color, 0.5),
        );
    }

    vec![concentric, radii, offset, sideways]
}

fn trapezoid_tiles() -> Vec<Tile> {
    let border = Tile::new(FRAME);
    let rect = border.content(0.0);
    let border = border.draw(Trapezoid::default(), rect, Paint::Border("blue", 4.0));

    let left = Tile::new(FRAME);
    let rect = left.content(0.0);
    let left = left.draw(
        Trapezoid::new(0.35).with_flexible_edge(FlexibleEdge::Left),
        rect,
        Paint::Fill("red"),
    );

    // The uncapped offset pushes the top edge past the right side of the
    // rectangle, so leave room for it.
    let overhang = Trapezoid::new(0.65).with_edge_offset(100.0);
    let wide = Tile::new(FRAME + 100.0);
    let rect = Rect::new(10.0, 10.0, FRAME + 100.0 - 80.0, FRAME - 10.0);
    let wide = wide
        .draw(overhang, rect, Paint::Border("black", 5.0))
        .draw(overhang, rect, Paint::Fill("purple"));

    vec![border, left, wide]
}

fn main() {
    println!("<!DOCTYPE html>");
    println!("<html>");
    println!("<body>");
    for (title, tiles) in [
        ("RoundedTrapezoid", rounded_trapezoid_tiles()),
        ("Trapezoid", trapezoid_tiles()),
    ] {
        println!("<h2>{title}</h2>");
        for tile in tiles {
            println!("{}", tile.to_svg());
        }
    }
    println!("</body>");
    println!("</html>");
}
