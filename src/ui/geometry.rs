// src/ui/geometry.rs

/// A (width, height) pair in logical units, handed down the widget tree on
/// every relayout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutBox {
    pub width: u32,
    pub height: u32,
}

impl LayoutBox {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn fits_within(&self, outer: LayoutBox) -> bool {
        self.width <= outer.width && self.height <= outer.height
    }
}

/// Signed logical coordinates. Triangle corners can land left of their box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, by: Point) -> Point {
        Point::new(self.x + by.x, self.y + by.y)
    }
}

/// Anything that recomputes its size, shape or font from a bounding box.
pub trait Resizable {
    fn layout_for_size(&mut self, width: u32, height: u32);
}

/// Base width of the prompt triangle: `floor(4/3 * height)`.
pub fn triangle_width(height: u32) -> u32 {
    (height as u64 * 4 / 3) as u32
}

/// Apex-up isosceles triangle for a `width` x `height` box:
/// apex, bottom-left, bottom-right.
///
/// The base spans exactly `triangle_width(height)`; for odd base widths the
/// extra unit goes to the right corner.
pub fn triangle_vertices(width: u32, height: u32) -> [Point; 3] {
    let mid = (width / 2) as i32;
    let base = triangle_width(height) as i32;
    let left = mid - base / 2;
    let bottom = height as i32;
    [
        Point::new(mid, 0),
        Point::new(left, bottom),
        Point::new(left + base, bottom),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triangle_width_floors() {
        assert_eq!(triangle_width(0), 0);
        assert_eq!(triangle_width(1), 1);
        assert_eq!(triangle_width(24), 32);
        assert_eq!(triangle_width(25), 33);
    }

    #[test]
    fn test_triangle_vertices() {
        for (w, h) in [(80, 24), (81, 25), (1, 1), (333, 100)] {
            let [apex, left, right] = triangle_vertices(w, h);
            assert_eq!(apex, Point::new((w / 2) as i32, 0));
            assert_eq!(left.y, h as i32);
            assert_eq!(right.y, h as i32);
            assert_eq!((right.x - left.x) as u32, triangle_width(h));
            assert!((right.x - apex.x) - (apex.x - left.x) <= 1);
        }
        let [_, left, right] = triangle_vertices(80, 24);
        assert_eq!(right.x - left.x, 32);
    }

    #[test]
    fn test_degenerate_box_is_a_point() {
        assert_eq!(triangle_vertices(0, 0), [Point::new(0, 0); 3]);
    }

    #[test]
    fn test_fits_within() {
        assert!(LayoutBox::new(80, 60).fits_within(LayoutBox::new(80, 60)));
        assert!(!LayoutBox::new(81, 60).fits_within(LayoutBox::new(80, 60)));
    }
}
