//! # genka-core: Pure Business Logic for Genka
//!
//! This crate holds the two computations Genka exists for, both as pure
//! functions with zero I/O dependencies:
//!
//! - the **cost engine**: material cost, landed cost per item, cost rate,
//!   profit and profit rate for one recipe
//! - the **label layout engine**: measures and wraps a recipe's display
//!   fields into positioned text fragments for a 60×40 mm retail label
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Genka Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │          Owning application (web forms, storage, PDF)           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ raw form strings / snapshots           │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ genka-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ validation │  │   cost    │  │   label   │  │   money   │  │   │
//! │  │   │  drafts →  │  │ CostResult│  │ LabelLay- │  │  ¥1,234   │  │   │
//! │  │   │  snapshots │  │ Dashboard │  │ out, wrap │  │  98.5%    │  │   │
//! │  │   └────────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Recipe snapshots, fixed-cost settings, cost results
//! - [`cost`] - The cost engine and listing/dashboard figures
//! - [`label`] - Label geometry, text measurement, layout and replay
//! - [`money`] - Yen and percentage display formatting
//! - [`validation`] - Admission checks that turn raw input into snapshots
//! - [`error`] - Validation error types
//!
//! ## Example Usage
//!
//! ```rust
//! use genka_core::cost::compute;
//! use genka_core::types::{IngredientUsage, RecipeSnapshot};
//!
//! let recipe = RecipeSnapshot {
//!     product_name: "Madeleine".to_string(),
//!     selling_price: 1000.0,
//!     production_quantity: 10,
//!     usages: vec![IngredientUsage::new("Butter", 5.0, 20.0)],
//! };
//!
//! let result = compute(&recipe, 5.0);
//! assert!((result.cost_per_item - 15.0).abs() < 1e-9);
//! assert!((result.cost_rate_pct - 1.5).abs() < 1e-9);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cost;
pub mod error;
pub mod label;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Yen;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a product name, in characters.
///
/// Matches the column width the storage layer uses for recipe names.
pub const MAX_PRODUCT_NAME_CHARS: usize = 100;

/// Maximum length of an ingredient name, in characters.
pub const MAX_INGREDIENT_NAME_CHARS: usize = 100;

/// Maximum length of a unit label (g, ml, 個 ...), in characters.
pub const MAX_UNIT_CHARS: usize = 20;
