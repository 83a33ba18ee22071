use ratatui::style::{Style, Stylize};

use super::color::Rgb;

/// Resting fill of the prompt triangle.
pub const PROMPT_RED: Rgb = Rgb::new(0xcc, 0x00, 0x00);
pub const PAPER: Rgb = Rgb::WHITE;
pub const INK: Rgb = Rgb::BLACK;

pub fn caption_style(fill: Rgb) -> Style {
    Style::default().fg(fill.into()).bold()
}

pub fn fill_style(fill: Rgb) -> Style {
    Style::default().fg(fill.into())
}

pub fn window_style(background: Rgb) -> Style {
    Style::default().bg(background.into())
}
