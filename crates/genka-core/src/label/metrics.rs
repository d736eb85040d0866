//! Text measurement.
//!
//! The layout engine only needs one question answered: how wide is this
//! string at this font size? Real rendering backends answer it from the
//! embedded font; [`MonospaceMetrics`] answers it without any font file.

use unicode_width::UnicodeWidthChar;

use super::geometry::points_to_mm;

/// Width of a string at a font size, supplied by the rendering backend.
///
/// Implementations return millimetres and must be deterministic: the same
/// text and size always measure the same.
pub trait TextMeasure {
    fn text_width(&self, text: &str, font_size: f64) -> f64;
}

impl<T: TextMeasure + ?Sized> TextMeasure for &T {
    fn text_width(&self, text: &str, font_size: f64) -> f64 {
        (**self).text_width(text, font_size)
    }
}

/// Metrics of a fixed-pitch Japanese gothic face (MS Gothic and friends).
///
/// Full-width characters (kana, kanji, 、, 【】, ¥ in its full-width form)
/// advance one em; half-width characters advance half an em. Zero-width and
/// control characters take no space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMetrics {
    /// Advance of a half-width cell in em.
    pub half_width_em: f64,
}

impl Default for MonospaceMetrics {
    fn default() -> Self {
        MonospaceMetrics { half_width_em: 0.5 }
    }
}

impl MonospaceMetrics {
    /// Width in em units at 1 em.
    pub fn measure_em(&self, text: &str) -> f64 {
        text.chars()
            .map(|c| c.width().unwrap_or(0) as f64 * self.half_width_em)
            .sum()
    }
}

impl TextMeasure for MonospaceMetrics {
    fn text_width(&self, text: &str, font_size: f64) -> f64 {
        self.measure_em(text) * points_to_mm(font_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(MonospaceMetrics::default().text_width("", 8.0), 0.0);
    }

    #[test]
    fn test_full_width_is_one_em() {
        let metrics = MonospaceMetrics::default();
        assert_eq!(metrics.measure_em("小麦粉"), 3.0);
        assert_eq!(metrics.measure_em("、"), 1.0);
        assert_eq!(metrics.measure_em("【原材料】"), 5.0);
    }

    #[test]
    fn test_half_width_is_half_em() {
        let metrics = MonospaceMetrics::default();
        assert_eq!(metrics.measure_em("Eggs"), 2.0);
        assert_eq!(metrics.measure_em("¥1,200"), 3.0);
    }

    #[test]
    fn test_scales_with_font_size() {
        let metrics = MonospaceMetrics::default();
        let small = metrics.text_width("砂糖", 8.0);
        let large = metrics.text_width("砂糖", 16.0);
        assert!((large - 2.0 * small).abs() < 1e-12);
        // 2 em at 72 pt is two inches
        assert!((metrics.text_width("砂糖", 72.0) - 50.8).abs() < 1e-9);
    }

    #[test]
    fn test_reference_measures_through() {
        let metrics = MonospaceMetrics::default();
        let by_ref: &dyn TextMeasure = &metrics;
        assert_eq!(by_ref.text_width("ab", 72.0), metrics.text_width("ab", 72.0));
    }
}
