//! # Label Module
//!
//! Turns a recipe's display fields into positioned text for the 60×40 mm
//! retail label.
//!
//! ## Contract With the Rendering Backend
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   LabelRequest ──► LabelLayoutEngine ──► LabelLayout ──► render()       │
//! │                        │        ▲                           │           │
//! │                        │        │ text_width(text, size)    ▼           │
//! │                        │   ┌────┴──────────┐        ┌──────────────┐    │
//! │                        │   │  TextMeasure  │        │ LabelCanvas  │    │
//! │                        │   └───────────────┘        │ draw_rect    │    │
//! │                        ▼                            │ draw_text    │    │
//! │                   FontChoice  ◄── resolve_font()    └──────────────┘    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Measuring, drawing a rectangle and drawing text are the whole contract.

pub mod canvas;
pub mod font;
pub mod geometry;
pub mod layout;
pub mod metrics;

pub use canvas::{render, LabelCanvas};
pub use font::{resolve_font, FontChoice, DEFAULT_FONT_CANDIDATES};
pub use geometry::{LabelGeometry, Rect};
pub use layout::{label_file_name, wrap_ingredients, LabelLayout, LabelLayoutEngine, TextFragment};
pub use metrics::{MonospaceMetrics, TextMeasure};
