// src/ui/widgets/text_indicator.rs
use tracing::debug;

use crate::ui::color::Rgb;
use crate::ui::geometry::{LayoutBox, Point, Resizable};
use crate::ui::scene::Scene;
use crate::ui::surface::{Font, ShapeId, Surface};

/// Smallest underline thickness, in logical units.
const MIN_UNDERLINE_HEIGHT: u32 = 2;

/// Caption with an underline sized to the rendered text.
#[derive(Debug)]
pub struct TextIndicator<S: Surface = Scene> {
    surface: S,
    text: String,
    font: Font,
    color: Rgb,
    label_height: u32,
    underline_height: u32,
    min_line_width: u32,
    line_width: u32,
    label: Option<ShapeId>,
    underline: Option<ShapeId>,
}

impl<S: Surface> TextIndicator<S> {
    pub fn new(surface: S, color: Rgb) -> Self {
        Self {
            surface,
            text: String::new(),
            font: Font::default(),
            color,
            label_height: 0,
            underline_height: MIN_UNDERLINE_HEIGHT,
            min_line_width: 0,
            line_width: 0,
            label: None,
            underline: None,
        }
    }

    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.line_width = self.font.measure(&self.text).max(self.min_line_width);
        self.redraw();
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn font(&self) -> Font {
        self.font
    }

    pub fn label_height(&self) -> u32 {
        self.label_height
    }

    pub fn underline_height(&self) -> u32 {
        self.underline_height
    }

    pub fn min_line_width(&self) -> u32 {
        self.min_line_width
    }

    pub fn line_width(&self) -> u32 {
        self.line_width
    }

    pub fn label_id(&self) -> Option<ShapeId> {
        self.label
    }

    pub fn underline_id(&self) -> Option<ShapeId> {
        self.underline
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    fn redraw(&mut self) {
        for id in [self.label.take(), self.underline.take()].into_iter().flatten() {
            self.surface.delete(id);
        }

        self.label = Some(self.surface.create_text(Point::new(0, 0), &self.text, self.font, self.color));
        self.underline = Some(self.surface.create_rectangle(
            Point::new(0, self.label_height as i32),
            LayoutBox::new(self.line_width, self.underline_height),
            self.color,
        ));
    }
}

impl<S: Surface> Resizable for TextIndicator<S> {
    fn layout_for_size(&mut self, width: u32, height: u32) {
        self.surface.resize(LayoutBox::new(width, height));

        self.underline_height = (height / 20).max(MIN_UNDERLINE_HEIGHT);
        self.label_height = height.saturating_sub(self.underline_height);
        self.font = Font::with_pixel_height(self.label_height);
        self.min_line_width = self.label_height;
        debug!(width, height, label_height = self.label_height, "text relayout");

        let text = std::mem::take(&mut self.text);
        self.set_text(&text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::surface::Shape;

    fn indicator() -> TextIndicator {
        let mut text = TextIndicator::new(Scene::default(), Rgb::BLACK);
        text.set_text("What are your commands?");
        text
    }

    #[test]
    fn test_set_text_before_layout() {
        let text = indicator();
        assert_eq!(text.line_width(), 0);
        assert_eq!(text.surface().len(), 2);
    }

    #[test]
    fn test_layout_sizes_label_and_underline() {
        let mut text = indicator();
        text.layout_for_size(100, 48);

        assert_eq!(text.underline_height(), 2);
        assert_eq!(text.label_height(), 46);
        assert_eq!(text.font(), Font::with_pixel_height(46));
        assert_eq!(text.min_line_width(), 46);
        assert_eq!(text.line_width(), 23 * 23);
        assert_eq!(text.text(), "What are your commands?");
    }

    #[test]
    fn test_underline_scales_above_floor() {
        let mut text = indicator();
        text.layout_for_size(400, 200);
        assert_eq!(text.underline_height(), 10);
        assert_eq!(text.label_height(), 190);

        match text.surface().shape(text.underline_id().unwrap()) {
            Some(Shape::Rectangle { origin, size, .. }) => {
                assert_eq!(*origin, Point::new(0, 190));
                assert_eq!(*size, LayoutBox::new(text.line_width(), 10));
            }
            other => panic!("expected rectangle, got {other:?}"),
        }
    }

    #[test]
    fn test_short_text_uses_min_line_width() {
        let mut text = TextIndicator::new(Scene::default(), Rgb::BLACK);
        text.set_text("");
        text.layout_for_size(80, 36);
        assert_eq!(text.line_width(), text.min_line_width());
        assert_eq!(text.line_width(), 34);
    }

    #[test]
    fn test_min_line_width_never_exceeds_label_height() {
        let mut text = indicator();
        for height in [0, 1, 2, 3, 19, 20, 36, 41, 599, 1000] {
            text.layout_for_size(80, height);
            assert!(text.min_line_width() <= text.label_height());
            assert!(text.label_height() <= height);
        }
    }

    #[test]
    fn test_relayout_recreates_shapes() {
        let mut text = indicator();
        let label = text.label_id();
        let underline = text.underline_id();
        text.layout_for_size(80, 36);

        assert_ne!(text.label_id(), label);
        assert_ne!(text.underline_id(), underline);
        assert_eq!(text.surface().len(), 2);
    }
}
