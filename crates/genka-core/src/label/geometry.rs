//! Physical label geometry.
//!
//! All distances are millimetres. The origin is the page's bottom-left
//! corner, the convention of PDF-style canvases, so `y` grows upward and the
//! text cursor moves down by subtracting.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Millimetres per typographic point (1 pt = 1/72 in).
pub const MM_PER_POINT: f64 = 25.4 / 72.0;

/// Converts a font size in points to millimetres.
#[inline]
pub fn points_to_mm(points: f64) -> f64 {
    points * MM_PER_POINT
}

/// An axis-aligned rectangle anchored at its bottom-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Rect { x, y, width, height }
    }

    /// Y coordinate of the top edge.
    #[inline]
    pub fn top(&self) -> f64 {
        self.y + self.height
    }

    /// X coordinate of the right edge.
    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }
}

/// Fixed dimensions of the retail label and its placement on the page.
///
/// [`LabelGeometry::default`] is the shop's 60×40 mm label placed 15 mm from
/// the left and 20 mm from the top of an A4 sheet. These numbers match the
/// pre-cut label stock and must not drift.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LabelGeometry {
    pub page_width: f64,
    pub page_height: f64,
    pub label_width: f64,
    pub label_height: f64,
    /// Distance from the page's left edge to the label.
    pub margin_x: f64,
    /// Distance from the page's top edge to the label.
    pub margin_y: f64,
    /// Inset of text from the label's left and right edges.
    pub text_margin: f64,
    /// Distance from the label's top edge to the first baseline.
    pub first_baseline_offset: f64,
    pub line_height: f64,
}

impl Default for LabelGeometry {
    fn default() -> Self {
        LabelGeometry {
            page_width: 210.0,
            page_height: 297.0,
            label_width: 60.0,
            label_height: 40.0,
            margin_x: 15.0,
            margin_y: 20.0,
            text_margin: 5.0,
            first_baseline_offset: 8.0,
            line_height: 4.0,
        }
    }
}

impl LabelGeometry {
    /// The label's border on the page.
    pub fn frame(&self) -> Rect {
        Rect::new(
            self.margin_x,
            self.page_height - self.margin_y - self.label_height,
            self.label_width,
            self.label_height,
        )
    }

    /// X coordinate every text line starts at.
    pub fn text_x(&self) -> f64 {
        self.frame().x + self.text_margin
    }

    /// Baseline of the product name.
    pub fn first_baseline(&self) -> f64 {
        self.frame().top() - self.first_baseline_offset
    }

    /// Width a line of text may occupy.
    pub fn available_width(&self) -> f64 {
        self.label_width - 2.0 * self.text_margin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_frame_on_a4() {
        let geometry = LabelGeometry::default();
        let frame = geometry.frame();
        assert_eq!(frame, Rect::new(15.0, 237.0, 60.0, 40.0));
        assert_eq!(frame.top(), 277.0);
        assert_eq!(frame.right(), 75.0);
    }

    #[test]
    fn test_text_area() {
        let geometry = LabelGeometry::default();
        assert_eq!(geometry.text_x(), 20.0);
        assert_eq!(geometry.first_baseline(), 269.0);
        assert_eq!(geometry.available_width(), 50.0);
    }

    #[test]
    fn test_points_to_mm() {
        assert!((points_to_mm(72.0) - 25.4).abs() < 1e-12);
        assert!((points_to_mm(8.0) - 2.8222).abs() < 1e-4);
    }
}
