// src/ui/widgets/output_panel.rs
use std::time::Duration;

use tracing::debug;

use crate::ui::color::Rgb;
use crate::ui::geometry::{LayoutBox, Point, Resizable};
use crate::ui::scene::Scene;
use crate::ui::surface::Surface;

use super::prompt_indicator::PromptIndicator;
use super::text_indicator::TextIndicator;

/// Caption on top, prompt below.
#[derive(Debug)]
pub struct OutputPanel<S: Surface = Scene> {
    text: TextIndicator<S>,
    prompt: PromptIndicator<S>,
    size: LayoutBox,
    text_height: u32,
}

/// Splits a panel height into (text, prompt) heights, 60% / 40%, truncating.
pub fn split_height(height: u32) -> (u32, u32) {
    let height = height as u64;
    ((height * 3 / 5) as u32, (height * 2 / 5) as u32)
}

impl<S: Surface + Default> OutputPanel<S> {
    pub fn new(text_color: Rgb, prompt_color: Rgb, blink_interval: Duration) -> Self {
        Self {
            text: TextIndicator::new(S::default(), text_color),
            prompt: PromptIndicator::new(S::default(), prompt_color, blink_interval),
            size: LayoutBox::default(),
            text_height: 0,
        }
    }
}

impl<S: Surface> OutputPanel<S> {
    pub fn text(&self) -> &TextIndicator<S> {
        &self.text
    }

    pub fn text_mut(&mut self) -> &mut TextIndicator<S> {
        &mut self.text
    }

    pub fn prompt(&self) -> &PromptIndicator<S> {
        &self.prompt
    }

    pub fn prompt_mut(&mut self) -> &mut PromptIndicator<S> {
        &mut self.prompt
    }

    pub fn size(&self) -> LayoutBox {
        self.size
    }

    /// Where the prompt sits relative to the panel's top-left corner.
    pub fn prompt_offset(&self) -> Point {
        Point::new(0, self.text_height as i32)
    }
}

impl<S: Surface> Resizable for OutputPanel<S> {
    fn layout_for_size(&mut self, width: u32, height: u32) {
        let (text_height, prompt_height) = split_height(height);
        debug!(width, height, text_height, prompt_height, "output relayout");

        self.size = LayoutBox::new(width, height);
        self.text_height = text_height;
        self.text.layout_for_size(width, text_height);
        self.prompt.layout_for_size(width, prompt_height);
    }
}
