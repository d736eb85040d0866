//! Property-based invariant tests for the cost engine.
//!
//! Verifies:
//! 1. material_cost equals Σ unit_price × quantity_used
//! 2. material_cost never decreases when a quantity grows
//! 3. rates are zero whenever the selling price is zero
//! 4. profit + cost_per_item == selling_price
//! 5. compute is deterministic
//! 6. dashboard average lies between the smallest and largest cost rate

use genka_core::cost::{compute, material_cost, summarize};
use genka_core::types::{IngredientUsage, RecipeSnapshot};
use proptest::prelude::*;

const EPS: f64 = 1e-9;

// ── Strategy helpers ──────────────────────────────────────────────────

fn arb_usage() -> impl Strategy<Value = IngredientUsage> {
    ("[a-z]{1,8}", 0.0f64..100.0, 0.0f64..100.0)
        .prop_map(|(name, unit_price, quantity_used)| IngredientUsage::new(name, unit_price, quantity_used))
}

fn arb_usages() -> impl Strategy<Value = Vec<IngredientUsage>> {
    prop::collection::vec(arb_usage(), 0..8)
}

fn arb_recipe() -> impl Strategy<Value = RecipeSnapshot> {
    (0.0f64..10_000.0, 1u32..500, arb_usages()).prop_map(|(selling_price, production_quantity, usages)| {
        RecipeSnapshot {
            product_name: "prop".to_string(),
            selling_price,
            production_quantity,
            usages,
        }
    })
}

// ── Properties ────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn material_cost_is_sum_of_lines(usages in arb_usages()) {
        let expected: f64 = usages.iter().map(|u| u.unit_price * u.quantity_used).sum();
        prop_assert_eq!(material_cost(&usages), expected);
    }

    #[test]
    fn material_cost_monotone_in_quantity(
        usages in prop::collection::vec(arb_usage(), 1..8),
        index in any::<prop::sample::Index>(),
        extra in 0.0f64..100.0,
    ) {
        let before = material_cost(&usages);
        let mut grown = usages.clone();
        let i = index.index(grown.len());
        grown[i].quantity_used += extra;
        prop_assert!(material_cost(&grown) >= before);
    }

    #[test]
    fn zero_selling_price_gives_zero_rates(mut recipe in arb_recipe(), fixed in 0.0f64..50.0) {
        recipe.selling_price = 0.0;
        let result = compute(&recipe, fixed);
        prop_assert_eq!(result.cost_rate_pct, 0.0);
        prop_assert_eq!(result.profit_rate_pct, 0.0);
    }

    #[test]
    fn profit_plus_cost_is_selling_price(recipe in arb_recipe(), fixed in 0.0f64..50.0) {
        let result = compute(&recipe, fixed);
        prop_assert!((result.profit + result.cost_per_item - recipe.selling_price).abs() < EPS);
    }

    #[test]
    fn compute_is_deterministic(recipe in arb_recipe(), fixed in 0.0f64..50.0) {
        prop_assert_eq!(compute(&recipe, fixed), compute(&recipe, fixed));
    }

    #[test]
    fn dashboard_average_within_bounds(recipes in prop::collection::vec(arb_recipe(), 1..6)) {
        let rates: Vec<f64> = recipes.iter().map(|r| compute(r, 0.0).cost_rate_pct).collect();
        let min = rates.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = rates.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

        let summary = summarize(&recipes, 0, 0.0);
        prop_assert_eq!(summary.total_recipes, recipes.len());
        let tolerance = 1e-9 * max.abs().max(1.0);
        prop_assert!(summary.average_cost_rate_pct >= min - tolerance);
        prop_assert!(summary.average_cost_rate_pct <= max + tolerance);
    }
}
