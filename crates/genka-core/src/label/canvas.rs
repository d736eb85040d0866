//! Replaying a layout onto a drawing surface.
//!
//! A backend needs exactly two drawing primitives. Everything else about a
//! label (where, how big, which lines) is already decided by the layout.

use super::geometry::Rect;
use super::layout::{LabelLayout, TextFragment};

/// A 2-D surface a label can be drawn on (PDF page, preview image, ...).
pub trait LabelCanvas {
    fn draw_rect(&mut self, rect: &Rect);
    fn draw_text(&mut self, fragment: &TextFragment);
}

/// Draws the frame, then every fragment in layout order.
pub fn render<C: LabelCanvas + ?Sized>(layout: &LabelLayout, canvas: &mut C) {
    canvas.draw_rect(&layout.frame);
    for fragment in &layout.fragments {
        canvas.draw_text(fragment);
    }
}
