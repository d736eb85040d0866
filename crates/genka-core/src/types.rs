//! # Domain Types
//!
//! Value snapshots passed into the engines.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────────┐   │
//! │  │   Ingredient    │   │ RecipeSnapshot  │   │ FixedCostAllocation │   │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────────  │   │
//! │  │  name           │   │  product_name   │   │  enabled            │   │
//! │  │  unit_price     │──►│  selling_price  │   │  monthly_fixed_cost │   │
//! │  │  unit           │   │  production_qty │   │  monthly_production │   │
//! │  └─────────────────┘   │  usages[]       │   └──────────┬──────────┘   │
//! │                        └────────┬────────┘              │ per_item      │
//! │                                 │                       ▼               │
//! │                        ┌────────┴────────┐   ┌─────────────────────┐   │
//! │                        │  LabelRequest   │   │     CostResult      │   │
//! │                        └─────────────────┘   └─────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! Nothing here has an identity. The owning application copies the current
//! ingredient prices into an [`IngredientUsage`] per request, so a result is
//! always reproducible from the snapshot alone.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Ingredient
// =============================================================================

/// An entry of the store's ingredient master (材料マスタ).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Ingredient {
    pub name: String,

    /// Price per `unit`, in yen. Never negative.
    pub unit_price: f64,

    /// Unit the price refers to (g, ml, 個 ...).
    pub unit: String,
}

impl Ingredient {
    /// Freezes this ingredient's current price into a usage line.
    pub fn usage(&self, quantity_used: f64) -> IngredientUsage {
        IngredientUsage {
            name: self.name.clone(),
            unit_price: self.unit_price,
            quantity_used,
        }
    }
}

// =============================================================================
// Ingredient Usage
// =============================================================================

/// One line of material consumption in a recipe.
///
/// Both numeric fields are ≥ 0 once admitted by [`crate::validation`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct IngredientUsage {
    pub name: String,
    /// Price per unit at the time of the snapshot (frozen).
    pub unit_price: f64,
    pub quantity_used: f64,
}

impl IngredientUsage {
    pub fn new(name: impl Into<String>, unit_price: f64, quantity_used: f64) -> Self {
        IngredientUsage {
            name: name.into(),
            unit_price,
            quantity_used,
        }
    }
}

// =============================================================================
// Recipe Snapshot
// =============================================================================

/// A recipe as the engines see it.
///
/// `production_quantity` is the number of items one batch yields and must be
/// at least 1; the cost engine still answers 0 per item if it is not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RecipeSnapshot {
    pub product_name: String,
    pub selling_price: f64,
    pub production_quantity: u32,
    pub usages: Vec<IngredientUsage>,
}

impl RecipeSnapshot {
    /// Ingredient names in recipe order, as printed on the label.
    pub fn ingredient_names(&self) -> Vec<String> {
        self.usages.iter().map(|u| u.name.clone()).collect()
    }

    /// Builds the label request for this recipe.
    ///
    /// The selling price is always attached; whether it is printed is decided
    /// by the `include_price` flag at layout time.
    pub fn label_request(&self, manufacture_date: Option<NaiveDate>) -> LabelRequest {
        LabelRequest {
            product_name: self.product_name.clone(),
            ingredient_names: self.ingredient_names(),
            price: Some(self.selling_price),
            manufacture_date,
        }
    }
}

// =============================================================================
// Fixed Cost Allocation
// =============================================================================

/// Store-wide fixed cost settings (rent, utilities, labour).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FixedCostAllocation {
    pub enabled: bool,
    pub monthly_fixed_cost: f64,
    pub monthly_production: u32,
}

impl FixedCostAllocation {
    /// Fixed cost carried by each produced item.
    ///
    /// Zero when allocation is disabled or nothing is produced per month.
    ///
    /// ## Example
    /// ```rust
    /// use genka_core::types::FixedCostAllocation;
    ///
    /// let settings = FixedCostAllocation {
    ///     enabled: true,
    ///     monthly_fixed_cost: 300_000.0,
    ///     monthly_production: 6_000,
    /// };
    /// assert_eq!(settings.per_item_allocation(), 50.0);
    /// ```
    pub fn per_item_allocation(&self) -> f64 {
        if !self.enabled || self.monthly_production == 0 {
            return 0.0;
        }
        self.monthly_fixed_cost / f64::from(self.monthly_production)
    }
}

// =============================================================================
// Cost Result
// =============================================================================

/// Figures derived for one recipe by [`crate::cost::compute`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CostResult {
    /// Σ unit_price × quantity_used for the whole batch.
    pub material_cost: f64,
    /// Material plus allocated fixed cost, per produced item.
    pub cost_per_item: f64,
    pub cost_rate_pct: f64,
    /// Negative for a loss.
    pub profit: f64,
    pub profit_rate_pct: f64,
}

impl CostResult {
    pub fn is_loss(&self) -> bool {
        self.profit < 0.0
    }
}

// =============================================================================
// Label Request
// =============================================================================

/// Display fields for one label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LabelRequest {
    pub product_name: String,
    pub ingredient_names: Vec<String>,
    #[serde(default)]
    pub price: Option<f64>,
    /// Defaults to the local date at layout time when absent.
    #[serde(default)]
    #[ts(as = "Option<String>")]
    pub manufacture_date: Option<NaiveDate>,
}

// =============================================================================
// Unit Tests
// =============================================================================
