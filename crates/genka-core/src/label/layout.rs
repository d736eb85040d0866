//! The label layout engine.
//!
//! ## Label Anatomy
//! ```text
//! ┌──────────────────────────── 60 mm ───────────────────────────┐
//! │     ↕ 8 mm                                                   │
//! │  メロンパン                              14 pt  ↓ 1.5 lines    │
//! │  【原材料】                              9 pt   ↓ 1 line       │
//! │  小麦粉、砂糖、バター、卵、                 8 pt   ↓ 0.8 line     │  40 mm
//! │  イースト、塩                            8 pt   ↓ 1 line       │
//! │                                                ↓ 0.5 line    │
//! │  ¥280                                    11 pt  ↓ 1 line       │
//! │  製造日: 2024年03月09日                  8 pt                  │
//! │◄5mm►                                                  ◄5mm►  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Wrapped ingredient lines advance 0.8 of a line, the last one a full
//! line. An ingredient list that fits on one line advances 1.2 lines.
//! Label stock printed so far depends on these exact offsets.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};
use ts_rs::TS;

use super::font::FontChoice;
use super::geometry::{LabelGeometry, Rect};
use super::metrics::TextMeasure;
use crate::money::Yen;
use crate::types::LabelRequest;

// =============================================================================
// Constants
// =============================================================================

pub const PRODUCT_NAME_FONT_SIZE: f64 = 14.0;
pub const HEADER_FONT_SIZE: f64 = 9.0;
pub const INGREDIENT_FONT_SIZE: f64 = 8.0;
pub const PRICE_FONT_SIZE: f64 = 11.0;
pub const DATE_FONT_SIZE: f64 = 8.0;

/// Heading printed above the ingredient list.
pub const INGREDIENTS_HEADER: &str = "【原材料】";

/// Separator between ingredient names (full-width comma).
pub const INGREDIENT_SEPARATOR: char = '、';

const AFTER_PRODUCT_NAME: f64 = 1.5;
const AFTER_HEADER: f64 = 1.0;
const AFTER_SINGLE_LINE_INGREDIENTS: f64 = 1.2;
const AFTER_WRAPPED_LINE: f64 = 0.8;
const AFTER_LAST_WRAPPED_LINE: f64 = 1.0;
const BEFORE_PRICE: f64 = 0.5;
const AFTER_PRICE: f64 = 1.0;

// =============================================================================
// Output Types
// =============================================================================

/// One string placed on the label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TextFragment {
    pub text: String,
    /// Left edge of the text, mm from the page's left edge.
    pub x: f64,
    /// Baseline, mm from the page's bottom edge.
    pub y: f64,
    /// Points.
    pub font_size: f64,
}

/// A finished label, ready to replay onto a canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LabelLayout {
    pub frame: Rect,
    pub font: FontChoice,
    /// In drawing order, top to bottom.
    pub fragments: Vec<TextFragment>,
}

impl LabelLayout {
    /// Fragment texts in order, handy for previews and assertions.
    pub fn texts(&self) -> Vec<&str> {
        self.fragments.iter().map(|f| f.text.as_str()).collect()
    }
}

// =============================================================================
// Engine
// =============================================================================

/// Lays out labels on a fixed geometry using a backend's text metrics.
///
/// The engine holds no per-label state, so one instance can serve any number
/// of threads as long as `M` is `Sync`.
#[derive(Debug, Clone)]
pub struct LabelLayoutEngine<M> {
    geometry: LabelGeometry,
    metrics: M,
    font: FontChoice,
}

impl<M: TextMeasure> LabelLayoutEngine<M> {
    /// Engine for the standard 60×40 mm label.
    pub fn new(metrics: M, font: FontChoice) -> Self {
        Self::with_geometry(LabelGeometry::default(), metrics, font)
    }

    pub fn with_geometry(geometry: LabelGeometry, metrics: M, font: FontChoice) -> Self {
        LabelLayoutEngine {
            geometry,
            metrics,
            font,
        }
    }

    pub fn geometry(&self) -> &LabelGeometry {
        &self.geometry
    }

    /// Lays out one label.
    ///
    /// A missing `price` skips the price line even when `include_price` is
    /// set. A missing `manufacture_date` prints today's local date.
    pub fn layout(&self, request: &LabelRequest, include_price: bool, include_date: bool) -> LabelLayout {
        let date = request
            .manufacture_date
            .unwrap_or_else(|| Local::now().date_naive());
        self.layout_on(request, include_price, include_date.then_some(date))
    }

    /// Same as [`layout`](Self::layout) with the printed date made explicit;
    /// `None` omits the date line.
    pub fn layout_on(&self, request: &LabelRequest, include_price: bool, date: Option<NaiveDate>) -> LabelLayout {
        let mut cursor = Cursor::new(&self.geometry);

        cursor.emit(&request.product_name, PRODUCT_NAME_FONT_SIZE);
        cursor.advance(AFTER_PRODUCT_NAME);

        cursor.emit(INGREDIENTS_HEADER, HEADER_FONT_SIZE);
        cursor.advance(AFTER_HEADER);

        self.place_ingredients(&mut cursor, &request.ingredient_names);

        if include_price {
            match request.price {
                Some(price) => {
                    cursor.advance(BEFORE_PRICE);
                    cursor.emit(&Yen::from_amount(price).to_string(), PRICE_FONT_SIZE);
                    cursor.advance(AFTER_PRICE);
                }
                None => debug!(product = %request.product_name, "price requested but not supplied"),
            }
        }

        if let Some(date) = date {
            cursor.emit(&format_manufacture_date(date), DATE_FONT_SIZE);
        }

        LabelLayout {
            frame: self.geometry.frame(),
            font: self.font.clone(),
            fragments: cursor.fragments,
        }
    }

    fn place_ingredients(&self, cursor: &mut Cursor, names: &[String]) {
        let available = self.geometry.available_width();
        let separator = INGREDIENT_SEPARATOR.to_string();
        let joined = names.join(separator.as_str());

        if self.metrics.text_width(&joined, INGREDIENT_FONT_SIZE) <= available {
            cursor.emit(&joined, INGREDIENT_FONT_SIZE);
            cursor.advance(AFTER_SINGLE_LINE_INGREDIENTS);
            return;
        }

        let lines = wrap_ingredients(names, available, INGREDIENT_FONT_SIZE, &self.metrics);
        let last = lines.len().saturating_sub(1);
        for (i, line) in lines.iter().enumerate() {
            cursor.emit(line, INGREDIENT_FONT_SIZE);
            cursor.advance(if i == last {
                AFTER_LAST_WRAPPED_LINE
            } else {
                AFTER_WRAPPED_LINE
            });
        }
    }
}

/// Top-down text cursor over the label's text column.
struct Cursor {
    x: f64,
    y: f64,
    line_height: f64,
    fragments: Vec<TextFragment>,
}

impl Cursor {
    fn new(geometry: &LabelGeometry) -> Self {
        Cursor {
            x: geometry.text_x(),
            y: geometry.first_baseline(),
            line_height: geometry.line_height,
            fragments: Vec::new(),
        }
    }

    fn emit(&mut self, text: &str, font_size: f64) {
        trace!(text, y = self.y, font_size, "emit fragment");
        self.fragments.push(TextFragment {
            text: text.to_string(),
            x: self.x,
            y: self.y,
            font_size,
        });
    }

    fn advance(&mut self, lines: f64) {
        self.y -= self.line_height * lines;
    }
}

// =============================================================================
// Greedy Wrap
// =============================================================================

/// Greedily packs ingredient names into lines narrower than `available`.
///
/// Each accepted name carries a trailing separator while the line is being
/// built; the separator is stripped when the line is flushed. A name that is
/// too wide on its own still gets a line to itself, unsplit.
///
/// ```rust
/// use genka_core::label::layout::wrap_ingredients;
/// use genka_core::label::metrics::TextMeasure;
///
/// struct OnePerChar;
/// impl TextMeasure for OnePerChar {
///     fn text_width(&self, text: &str, _size: f64) -> f64 {
///         text.chars().count() as f64
///     }
/// }
///
/// let names = ["Flour", "Sugar", "Eggs"].map(String::from);
/// let lines = wrap_ingredients(&names, 14.0, 8.0, &OnePerChar);
/// assert_eq!(lines, vec!["Flour、Sugar", "Eggs"]);
/// ```
pub fn wrap_ingredients<M>(names: &[String], available: f64, font_size: f64, metrics: &M) -> Vec<String>
where
    M: TextMeasure + ?Sized,
{
    let mut lines = Vec::new();
    let mut buffer = String::new();

    for name in names {
        let mut candidate = buffer.clone();
        candidate.push_str(name);
        candidate.push(INGREDIENT_SEPARATOR);

        if metrics.text_width(&candidate, font_size) < available {
            buffer = candidate;
            continue;
        }

        if !buffer.is_empty() {
            lines.push(strip_separator(&buffer));
        }

        buffer = format!("{name}{INGREDIENT_SEPARATOR}");
        let alone = metrics.text_width(&buffer, font_size);
        if alone >= available {
            warn!(ingredient = %name, width = alone, available, "ingredient name wider than label");
        }
    }

    if !buffer.is_empty() {
        lines.push(strip_separator(&buffer));
    }

    debug!(lines = lines.len(), "ingredients wrapped");
    lines
}

fn strip_separator(line: &str) -> String {
    line.trim_end_matches(INGREDIENT_SEPARATOR).to_string()
}

// =============================================================================
// Formatting
// =============================================================================

/// `製造日: 2024年03月09日`
pub fn format_manufacture_date(date: NaiveDate) -> String {
    format!("製造日: {}", date.format("%Y年%m月%d日"))
}

/// Download file name for a product's label.
pub fn label_file_name(product_name: &str) -> String {
    format!("label_{product_name}.pdf")
}

// =============================================================================
// Unit Tests
// =============================================================================
