// src/ui/scene.rs
use std::collections::BTreeMap;

use super::color::Rgb;
use super::geometry::{LayoutBox, Point};
use super::surface::{Font, Shape, ShapeId, Surface};

/// Retained-mode [`Surface`]: a sized display list of shapes.
#[derive(Debug, Default)]
pub struct Scene {
    size: LayoutBox,
    shapes: BTreeMap<ShapeId, Shape>,
    next_id: u64,
    created: u64,
    deleted: u64,
}

impl Scene {
    pub fn new(size: LayoutBox) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    /// Total shapes ever created on this scene.
    pub fn created_count(&self) -> u64 {
        self.created
    }

    /// Total shapes ever deleted from this scene.
    pub fn deleted_count(&self) -> u64 {
        self.deleted
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    fn insert(&mut self, shape: Shape) -> ShapeId {
        let id = ShapeId(self.next_id);
        self.next_id += 1;
        self.created += 1;
        self.shapes.insert(id, shape);
        id
    }
}

impl Surface for Scene {
    fn resize(&mut self, size: LayoutBox) {
        self.size = size;
    }

    fn size(&self) -> LayoutBox {
        self.size
    }

    fn create_polygon(&mut self, points: &[Point], fill: Rgb) -> ShapeId {
        self.insert(Shape::Polygon {
            points: points.to_vec(),
            fill,
        })
    }

    fn create_text(&mut self, origin: Point, text: &str, font: Font, fill: Rgb) -> ShapeId {
        self.insert(Shape::Text {
            origin,
            text: text.to_string(),
            font,
            fill,
        })
    }

    fn create_rectangle(&mut self, origin: Point, size: LayoutBox, fill: Rgb) -> ShapeId {
        self.insert(Shape::Rectangle { origin, size, fill })
    }

    fn delete(&mut self, id: ShapeId) {
        if self.shapes.remove(&id).is_some() {
            self.deleted += 1;
        }
    }

    fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.get(&id)
    }

    fn shapes(&self) -> Box<dyn Iterator<Item = (ShapeId, &Shape)> + '_> {
        Box::new(self.shapes.iter().map(|(id, shape)| (*id, shape)))
    }
}
