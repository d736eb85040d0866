//! # Cost Engine
//!
//! Material cost, landed cost per item, and the rates derived from them.
//!
//! ## Calculation Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  usages ──► material_cost = Σ unit_price × quantity_used                │
//! │                  │                                                      │
//! │                  ▼                                                      │
//! │  total_cost = material_cost + fixed_cost_per_item × production_qty      │
//! │                  │                                                      │
//! │                  ▼                                                      │
//! │  cost_per_item = total_cost / production_qty      (0 if qty == 0)       │
//! │                  │                                                      │
//! │        ┌─────────┴──────────┐                                           │
//! │        ▼                    ▼                                           │
//! │  cost_rate_pct        profit = selling_price − cost_per_item            │
//! │  (0 if price == 0)          │                                           │
//! │                             ▼                                           │
//! │                       profit_rate_pct   (0 if price == 0)               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The engine never fails. A recipe with a zero selling price (common right
//! after creation) reports zero rates instead of dividing by zero, and a loss
//! is an ordinary negative profit.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
use ts_rs::TS;

use crate::types::{CostResult, IngredientUsage, RecipeSnapshot};

// =============================================================================
// Engine
// =============================================================================

/// Cost of a single usage line.
#[inline]
pub fn line_cost(usage: &IngredientUsage) -> f64 {
    usage.unit_price * usage.quantity_used
}

/// Sum of all line costs; zero for an empty slice.
pub fn material_cost(usages: &[IngredientUsage]) -> f64 {
    usages.iter().map(line_cost).sum()
}

/// Computes every cost figure for one recipe.
///
/// `fixed_cost_per_item` is the store's precomputed allocation
/// (see [`crate::types::FixedCostAllocation::per_item_allocation`]).
///
/// ## Example
/// ```rust
/// use genka_core::cost::compute;
/// use genka_core::types::{IngredientUsage, RecipeSnapshot};
///
/// let recipe = RecipeSnapshot {
///     product_name: "Shortbread".to_string(),
///     selling_price: 1000.0,
///     production_quantity: 10,
///     usages: vec![IngredientUsage::new("Butter", 5.0, 20.0)],
/// };
/// let result = compute(&recipe, 5.0);
///
/// assert_eq!(result.material_cost, 100.0);
/// assert_eq!(result.cost_per_item, 15.0);
/// assert_eq!(result.profit, 985.0);
/// ```
pub fn compute(recipe: &RecipeSnapshot, fixed_cost_per_item: f64) -> CostResult {
    let material_cost = material_cost(&recipe.usages);
    let quantity = f64::from(recipe.production_quantity);
    let total_cost = material_cost + fixed_cost_per_item * quantity;

    let cost_per_item = if recipe.production_quantity > 0 {
        total_cost / quantity
    } else {
        debug!(product = %recipe.product_name, "production quantity is zero, cost per item reported as 0");
        0.0
    };

    let selling_price = recipe.selling_price;
    let profit = selling_price - cost_per_item;
    let (cost_rate_pct, profit_rate_pct) = if selling_price == 0.0 {
        debug!(product = %recipe.product_name, "selling price is zero, rates reported as 0");
        (0.0, 0.0)
    } else {
        (
            cost_per_item / selling_price * 100.0,
            profit / selling_price * 100.0,
        )
    };

    trace!(
        product = %recipe.product_name,
        material_cost,
        total_cost,
        cost_per_item,
        profit,
        "cost computed"
    );

    CostResult {
        material_cost,
        cost_per_item,
        cost_rate_pct,
        profit,
        profit_rate_pct,
    }
}

// =============================================================================
// Listing & Dashboard
// =============================================================================

/// One row of the recipe listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RecipeCostRow {
    pub product_name: String,
    pub cost: CostResult,
}

/// Headline figures for the store dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DashboardSummary {
    pub total_recipes: usize,
    /// Size of the store's ingredient master.
    pub ingredients_count: usize,
    /// Plain mean of every recipe's cost rate; 0 with no recipes.
    pub average_cost_rate_pct: f64,
}

/// Computes a listing row for each recipe, in input order.
pub fn cost_rows(recipes: &[RecipeSnapshot], fixed_cost_per_item: f64) -> Vec<RecipeCostRow> {
    recipes
        .iter()
        .map(|recipe| RecipeCostRow {
            product_name: recipe.product_name.clone(),
            cost: compute(recipe, fixed_cost_per_item),
        })
        .collect()
}

/// Summarizes a store's recipes and ingredient master for the dashboard.
pub fn summarize(recipes: &[RecipeSnapshot], ingredients_count: usize, fixed_cost_per_item: f64) -> DashboardSummary {
    if recipes.is_empty() {
        return DashboardSummary {
            ingredients_count,
            ..DashboardSummary::default()
        };
    }

    let total_rate: f64 = recipes
        .iter()
        .map(|recipe| compute(recipe, fixed_cost_per_item).cost_rate_pct)
        .sum();

    DashboardSummary {
        total_recipes: recipes.len(),
        ingredients_count,
        average_cost_rate_pct: total_rate / recipes.len() as f64,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
