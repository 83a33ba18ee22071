// src/ui/raster.rs

//! Turns logical-unit shapes into terminal cells.
//!
//! Each cell is sampled at the center of its upper and lower half, so shapes
//! get twice the vertical resolution through half-block glyphs. Shapes are
//! clipped to the box of the surface that owns them.
use ratatui::{buffer::Buffer, layout::Rect};

use super::color::Rgb;
use super::geometry::{LayoutBox, Point};
use super::style::{caption_style, fill_style};
use super::surface::{Shape, Surface};

const FULL_BLOCK: &str = "█";
const UPPER_HALF: &str = "▀";
const LOWER_HALF: &str = "▄";
const THIN_TOP: &str = "▔";
const THIN_BOTTOM: &str = "▁";

/// How many logical units one terminal cell covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub cell_width: u16,
    pub cell_height: u16,
}

impl Viewport {
    pub fn new(cell_width: u16, cell_height: u16) -> Self {
        Self {
            cell_width: cell_width.max(1),
            cell_height: cell_height.max(1),
        }
    }

    /// Logical window size covered by a terminal of `cols` x `rows`.
    pub fn window_for_cells(&self, cols: u16, rows: u16) -> LayoutBox {
        LayoutBox::new(
            cols as u32 * self.cell_width as u32,
            rows as u32 * self.cell_height as u32,
        )
    }

    /// Terminal size needed to show a logical window, rounded up.
    pub fn cells_for_window(&self, window: LayoutBox) -> (u16, u16) {
        let cols = window.width.div_ceil(self.cell_width as u32);
        let rows = window.height.div_ceil(self.cell_height as u32);
        (cols.min(u16::MAX as u32) as u16, rows.min(u16::MAX as u32) as u16)
    }
}

/// Logical-space box of a surface placed at `origin`.
#[derive(Debug, Clone, Copy)]
struct Clip {
    origin: Point,
    size: LayoutBox,
}

impl Clip {
    fn contains_local(&self, x: f64, y: f64) -> bool {
        x >= 0.0 && y >= 0.0 && x < self.size.width as f64 && y < self.size.height as f64
    }
}

/// Paint every shape of `surface`, whose top-left sits at logical `origin`
/// relative to the top-left of `area`.
pub fn paint_surface<S: Surface + ?Sized>(surface: &S, origin: Point, area: Rect, buf: &mut Buffer, viewport: Viewport) {
    let clip = Clip {
        origin,
        size: surface.size(),
    };
    if clip.size.width == 0 || clip.size.height == 0 {
        return;
    }

    for (_, shape) in surface.shapes() {
        match shape {
            Shape::Polygon { points, fill } => {
                paint_sampled(&clip, area, buf, viewport, *fill, |x, y| point_in_polygon(points, x, y));
            }
            Shape::Rectangle { origin: at, size, fill } => {
                paint_rectangle(&clip, area, buf, viewport, *at, *size, *fill);
            }
            Shape::Text { origin: at, text, font, fill } => {
                if font.pixel_height == 0 || text.is_empty() {
                    continue;
                }
                // Text sits on the row holding the vertical middle of its glyphs.
                let middle_y = at.y + (font.pixel_height / 2) as i32;
                if !clip.contains_local(at.x.max(0) as f64, middle_y as f64) {
                    continue;
                }
                let Some((col, row)) = to_cell(area, viewport, origin.x + at.x, origin.y + middle_y) else {
                    continue;
                };
                let right_edge = origin.x + clip.size.width as i32;
                let last_col = area.x as i32 + right_edge.div_euclid(viewport.cell_width as i32);
                let max_width = (last_col.min(area.right() as i32) - col as i32).max(0) as usize;
                buf.set_stringn(col, row, text, max_width, caption_style(*fill));
            }
        }
    }
}

fn paint_rectangle(
    clip: &Clip,
    area: Rect,
    buf: &mut Buffer,
    viewport: Viewport,
    at: Point,
    size: LayoutBox,
    fill: Rgb,
) {
    let (left, top) = (at.x as f64, at.y as f64);
    let (right, bottom) = (left + size.width as f64, top + size.height as f64);
    let inside = |x: f64, y: f64| x >= left && x < right && y >= top && y < bottom;
    let painted = paint_sampled(clip, area, buf, viewport, fill, inside);
    if painted || size.width == 0 || size.height == 0 {
        return;
    }

    // Too thin for a half-block: draw a hairline on the row it crosses.
    let cw = viewport.cell_width as f64;
    let ch = viewport.cell_height as f64;
    let middle = top + size.height as f64 / 2.0;
    if !clip.contains_local(left.max(0.0), middle) {
        return;
    }
    let Some((_, row)) = to_cell(area, viewport, clip.origin.x, clip.origin.y + middle as i32) else {
        return;
    };
    let within_row = (clip.origin.y as f64 + middle).rem_euclid(ch);
    let glyph = if within_row < ch / 2.0 { THIN_TOP } else { THIN_BOTTOM };

    for col in area.left()..area.right() {
        let x = (col - area.x) as f64 * cw + cw / 2.0 - clip.origin.x as f64;
        if x >= left && x < right && clip.contains_local(x, middle) {
            if let Some(cell) = buf.cell_mut((col, row)) {
                cell.set_symbol(glyph).set_style(fill_style(fill));
            }
        }
    }
}

/// Samples the two half-cells of every cell in `area` against `inside`
/// (surface-local logical coordinates). Returns whether anything was painted.
fn paint_sampled<F>(clip: &Clip, area: Rect, buf: &mut Buffer, viewport: Viewport, fill: Rgb, inside: F) -> bool
where
    F: Fn(f64, f64) -> bool,
{
    let cw = viewport.cell_width as f64;
    let ch = viewport.cell_height as f64;
    let hit = |x: f64, y: f64| clip.contains_local(x, y) && inside(x, y);
    let mut painted = false;

    for row in area.top()..area.bottom() {
        let cell_top = (row - area.y) as f64 * ch - clip.origin.y as f64;
        if cell_top + ch <= 0.0 || cell_top >= clip.size.height as f64 {
            continue;
        }
        for col in area.left()..area.right() {
            let x = (col - area.x) as f64 * cw + cw / 2.0 - clip.origin.x as f64;
            let upper = hit(x, cell_top + ch * 0.25);
            let lower = hit(x, cell_top + ch * 0.75);
            let glyph = match (upper, lower) {
                (true, true) => FULL_BLOCK,
                (true, false) => UPPER_HALF,
                (false, true) => LOWER_HALF,
                (false, false) => continue,
            };
            if let Some(cell) = buf.cell_mut((col, row)) {
                cell.set_symbol(glyph).set_style(fill_style(fill));
                painted = true;
            }
        }
    }
    painted
}

/// Cell holding the logical point `(x, y)`, if it falls inside `area`.
fn to_cell(area: Rect, viewport: Viewport, x: i32, y: i32) -> Option<(u16, u16)> {
    let col = area.x as i32 + x.div_euclid(viewport.cell_width as i32);
    let row = area.y as i32 + y.div_euclid(viewport.cell_height as i32);
    let inside = col >= area.left() as i32 && col < area.right() as i32 && row >= area.top() as i32 && row < area.bottom() as i32;
    inside.then_some((col as u16, row as u16))
}

/// Even-odd rule. Degenerate polygons contain nothing.
fn point_in_polygon(points: &[Point], x: f64, y: f64) -> bool {
    if points.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = points.len() - 1;
    for i in 0..points.len() {
        let (xi, yi) = (points[i].x as f64, points[i].y as f64);
        let (xj, yj) = (points[j].x as f64, points[j].y as f64);
        if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}
