// src/ui/widgets/root_view.rs
use tracing::debug;

use crate::config::UiConfig;
use crate::ui::geometry::{LayoutBox, Point, Resizable};
use crate::ui::scene::Scene;
use crate::ui::surface::Surface;
use crate::ui::timer::{BlinkToken, Scheduler};

use super::output_panel::OutputPanel;

/// Smallest box the output panel is ever given.
pub const MIN_OUTPUT_BOX: LayoutBox = LayoutBox::new(80, 60);

/// Output box for a window: a tenth of each dimension, floored at
/// [`MIN_OUTPUT_BOX`].
pub fn output_box_for(window: LayoutBox) -> LayoutBox {
    LayoutBox::new(
        (window.width / 10).max(MIN_OUTPUT_BOX.width),
        (window.height / 10).max(MIN_OUTPUT_BOX.height),
    )
}

/// Top-level container: keeps the output panel centered and scaled to the
/// window.
#[derive(Debug)]
pub struct RootView<S: Surface = Scene> {
    window: LayoutBox,
    output_box: LayoutBox,
    output: OutputPanel<S>,
}

impl<S: Surface + Default> RootView<S> {
    /// Builds the tree and starts the prompt blinking. Nothing is laid out
    /// until the first [`RootView::on_resize`].
    pub fn new(config: &UiConfig, scheduler: &mut dyn Scheduler) -> Self {
        let mut output = OutputPanel::new(config.text_color, config.base_color, config.blink_interval());
        output.text_mut().set_text(&config.caption);
        output.prompt_mut().start_blinking(scheduler);

        Self {
            window: LayoutBox::default(),
            output_box: LayoutBox::default(),
            output,
        }
    }
}

impl<S: Surface> RootView<S> {
    pub fn on_resize(&mut self, width: u32, height: u32) {
        self.window = LayoutBox::new(width, height);
        self.output_box = output_box_for(self.window);
        debug!(width, height, output = ?self.output_box, "window resized");

        self.output.layout_for_size(self.output_box.width, self.output_box.height);
    }

    pub fn on_blink_tick(&mut self, token: BlinkToken, scheduler: &mut dyn Scheduler) {
        self.output.prompt_mut().on_tick(token, scheduler);
    }

    pub fn window(&self) -> LayoutBox {
        self.window
    }

    pub fn output_box(&self) -> LayoutBox {
        self.output_box
    }

    pub fn output(&self) -> &OutputPanel<S> {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut OutputPanel<S> {
        &mut self.output
    }

    /// Top-left of the centered output panel. Saturates at the window origin
    /// when the panel is larger than the window.
    pub fn output_origin(&self) -> Point {
        Point::new(
            (self.window.width.saturating_sub(self.output_box.width) / 2) as i32,
            (self.window.height.saturating_sub(self.output_box.height) / 2) as i32,
        )
    }
}
