// src/ui/surface.rs

//! Drawing primitives supplied by the host toolkit.
//!
//! Widgets never draw directly. Each one owns a [`Surface`], creates shapes on
//! it and keeps the returned [`ShapeId`] handles. A redraw deletes the old
//! handle and creates a new shape; shapes are never mutated in place.
use ratatui::text::Line;

use super::color::Rgb;
use super::geometry::{LayoutBox, Point};

/// Opaque handle to a shape living on a [`Surface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShapeId(pub(crate) u64);

/// A pixel-height font with monospace metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Font {
    pub pixel_height: u32,
}

impl Font {
    pub const fn with_pixel_height(pixel_height: u32) -> Self {
        Self { pixel_height }
    }

    /// Horizontal advance of a single column, half the glyph height.
    pub fn advance(&self) -> u32 {
        match self.pixel_height {
            0 => 0,
            h => (h / 2).max(1),
        }
    }

    /// Rendered width of `text` in logical units.
    pub fn measure(&self, text: &str) -> u32 {
        Line::from(text).width() as u32 * self.advance()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Polygon {
        points: Vec<Point>,
        fill: Rgb,
    },
    Text {
        origin: Point,
        text: String,
        font: Font,
        fill: Rgb,
    },
    Rectangle {
        origin: Point,
        size: LayoutBox,
        fill: Rgb,
    },
}

impl Shape {
    pub fn fill(&self) -> Rgb {
        match self {
            Shape::Polygon { fill, .. } | Shape::Text { fill, .. } | Shape::Rectangle { fill, .. } => *fill,
        }
    }
}

pub trait Surface {
    /// Resize the drawable area. Shapes outside it are clipped, not removed.
    fn resize(&mut self, size: LayoutBox);

    fn size(&self) -> LayoutBox;

    fn create_polygon(&mut self, points: &[Point], fill: Rgb) -> ShapeId;

    /// Text anchored at its top-left corner.
    fn create_text(&mut self, origin: Point, text: &str, font: Font, fill: Rgb) -> ShapeId;

    fn create_rectangle(&mut self, origin: Point, size: LayoutBox, fill: Rgb) -> ShapeId;

    /// Deleting an unknown or already deleted handle is a no-op.
    fn delete(&mut self, id: ShapeId);

    fn shape(&self, id: ShapeId) -> Option<&Shape>;

    /// Live shapes in creation order.
    fn shapes(&self) -> Box<dyn Iterator<Item = (ShapeId, &Shape)> + '_>;
}
