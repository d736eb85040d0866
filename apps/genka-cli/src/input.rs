//! Store data file.
//!
//! ```json
//! {
//!   "ingredients": [
//!     { "name": "小麦粉", "unit_price": "0.4", "unit": "g" }
//!   ],
//!   "recipes": [
//!     {
//!       "product_name": "クッキー",
//!       "selling_price": "300",
//!       "production_quantity": "20",
//!       "usages": [{ "ingredient": "小麦粉", "quantity": "500" }]
//!     }
//!   ]
//! }
//! ```
//!
//! Numbers are strings, exactly as they arrive from the shop's forms, so
//! they go through the same admission checks.

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use tracing::{debug, info};

use genka_core::validation::{validate_ingredient_draft, validate_recipe_draft, IngredientDraft, RecipeDraft};
use genka_core::{CoreResult, Ingredient, RecipeSnapshot};

#[derive(Debug, Default, Deserialize)]
pub struct StoreFile {
    #[serde(default)]
    pub ingredients: Vec<IngredientDraft>,
    #[serde(default)]
    pub recipes: Vec<RecipeDraft>,
}

/// Store data that passed admission.
#[derive(Debug, Clone, Default)]
pub struct Store {
    pub ingredients: Vec<Ingredient>,
    pub recipes: Vec<RecipeSnapshot>,
}

impl StoreFile {
    pub fn read(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let file: StoreFile =
            serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))?;
        debug!(
            ingredients = file.ingredients.len(),
            recipes = file.recipes.len(),
            "store file loaded"
        );
        Ok(file)
    }

    /// Validates every entry, failing on the first rejected one.
    pub fn admit(&self) -> CoreResult<Store> {
        let catalog = self
            .ingredients
            .iter()
            .map(validate_ingredient_draft)
            .collect::<Result<Vec<Ingredient>, _>>()?;

        let recipes = self
            .recipes
            .iter()
            .map(|draft| validate_recipe_draft(draft, &catalog))
            .collect::<CoreResult<Vec<_>>>()?;

        info!(
            ingredients = catalog.len(),
            recipes = recipes.len(),
            "store data admitted"
        );
        Ok(Store {
            ingredients: catalog,
            recipes,
        })
    }
}
