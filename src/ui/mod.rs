pub mod color;
pub mod geometry;
pub mod raster;
pub mod scene;
pub mod style;
pub mod surface;
pub mod timer;
pub mod widgets;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Block, Widget},
};

use crate::app::App;
use crate::ui::raster::{paint_surface, Viewport};
use crate::ui::style::window_style;
use crate::ui::surface::Surface;
use crate::ui::widgets::RootView;

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .style(window_style(self.config.background_color))
            .render(area, buf);
        render_root(&self.root, area, buf, self.config.viewport());
    }
}

/// Paint the whole widget tree, with the window's logical origin at the
/// top-left of `area`.
pub fn render_root<S: Surface>(root: &RootView<S>, area: Rect, buf: &mut Buffer, viewport: Viewport) {
    let origin = root.output_origin();
    let output = root.output();
    paint_surface(output.text().surface(), origin, area, buf, viewport);
    paint_surface(output.prompt().surface(), origin.offset(output.prompt_offset()), area, buf, viewport);
}
