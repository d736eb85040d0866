//! # Validation Module
//!
//! Admission checks that turn raw form input into engine snapshots.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Owning application                                           │
//! │  └── Collects raw strings from forms / files                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Parse numbers, reject negatives and blanks                        │
//! │  ├── Resolve usage rows against the ingredient master                  │
//! │  └── Produce RecipeSnapshot / FixedCostAllocation                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Engines (cost, label)                                        │
//! │  └── Trust their input completely, never fail                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use genka_core::validation::{parse_non_negative_number, validate_product_name};
//!
//! assert_eq!(parse_non_negative_number(" 12.5 ", "selling_price").unwrap(), 12.5);
//! assert!(parse_non_negative_number("-1", "selling_price").is_err());
//! assert!(validate_product_name("").is_err());
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::types::{FixedCostAllocation, Ingredient, IngredientUsage, RecipeSnapshot};
use crate::{MAX_INGREDIENT_NAME_CHARS, MAX_PRODUCT_NAME_CHARS, MAX_UNIT_CHARS};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Drafts (raw input)
// =============================================================================

/// Raw ingredient master entry as typed by the user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IngredientDraft {
    pub name: String,
    pub unit_price: String,
    pub unit: String,
}

/// Raw usage row: an ingredient name and the amount used.
///
/// Rows where either field is blank are ignored, the way an unused row of
/// the recipe form is.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UsageDraft {
    pub ingredient: String,
    pub quantity: String,
}

/// Raw recipe form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecipeDraft {
    pub product_name: String,
    pub selling_price: String,
    pub production_quantity: String,
    #[serde(default)]
    pub usages: Vec<UsageDraft>,
}

/// Raw store settings form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSettingsDraft {
    #[serde(default)]
    pub fixed_cost_enabled: bool,
    #[serde(default = "zero_string")]
    pub monthly_fixed_cost: String,
    #[serde(default = "zero_string")]
    pub monthly_production: String,
}

fn zero_string() -> String {
    "0".to_string()
}

impl Default for StoreSettingsDraft {
    fn default() -> Self {
        StoreSettingsDraft {
            fixed_cost_enabled: false,
            monthly_fixed_cost: zero_string(),
            monthly_production: zero_string(),
        }
    }
}

// =============================================================================
// Numeric Parsers
// =============================================================================

/// Parses a non-negative real number.
///
/// Surrounding whitespace is ignored. `NaN` and infinities are not numbers
/// for our purposes.
pub fn parse_non_negative_number(raw: &str, field: &str) -> ValidationResult<f64> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ValidationError::NotANumber {
            field: field.to_string(),
        })?;

    if !value.is_finite() {
        return Err(ValidationError::NotANumber {
            field: field.to_string(),
        });
    }

    if value < 0.0 {
        return Err(ValidationError::Negative {
            field: field.to_string(),
        });
    }

    Ok(value)
}

/// Parses a non-negative whole number.
pub fn parse_non_negative_integer(raw: &str, field: &str) -> ValidationResult<u32> {
    let value: i64 = raw
        .trim()
        .parse()
        .map_err(|_| ValidationError::NotAnInteger {
            field: field.to_string(),
        })?;

    if value < 0 {
        return Err(ValidationError::Negative {
            field: field.to_string(),
        });
    }

    u32::try_from(value).map_err(|_| ValidationError::NotAnInteger {
        field: field.to_string(),
    })
}

// =============================================================================
// String Validators
// =============================================================================

fn validate_text(value: &str, field: &str, max: usize) -> ValidationResult<String> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    Ok(value.to_string())
}

/// Validates a product name and returns it trimmed.
///
/// ## Rules
/// - Must not be blank
/// - At most [`MAX_PRODUCT_NAME_CHARS`] characters
pub fn validate_product_name(name: &str) -> ValidationResult<String> {
    validate_text(name, "product_name", MAX_PRODUCT_NAME_CHARS)
}

/// Validates an ingredient name and returns it trimmed.
pub fn validate_ingredient_name(name: &str) -> ValidationResult<String> {
    validate_text(name, "name", MAX_INGREDIENT_NAME_CHARS)
}

/// Validates a unit label and returns it trimmed.
pub fn validate_unit(unit: &str) -> ValidationResult<String> {
    validate_text(unit, "unit", MAX_UNIT_CHARS)
}

/// Production quantity must be at least one item per batch.
pub fn validate_production_quantity(quantity: u32) -> ValidationResult<u32> {
    if quantity == 0 {
        return Err(ValidationError::MustBePositive {
            field: "production_quantity".to_string(),
        });
    }
    Ok(quantity)
}

// =============================================================================
// Draft Validators
// =============================================================================

/// Admits an ingredient master entry.
pub fn validate_ingredient_draft(draft: &IngredientDraft) -> ValidationResult<Ingredient> {
    let name = validate_ingredient_name(&draft.name)?;
    let unit = validate_unit(&draft.unit)?;
    let unit_price = parse_non_negative_number(&draft.unit_price, "unit_price")?;

    Ok(Ingredient {
        name,
        unit_price,
        unit,
    })
}

/// Admits a recipe, resolving each usage row against `catalog`.
///
/// ## Flow
/// ```text
/// product_name ──► non-blank, ≤ 100 chars
/// selling_price ──► number ≥ 0
/// production_quantity ──► integer ≥ 1
/// usages ──► skip blank rows ──► resolve name ──► quantity ≥ 0
///        └─► none left? ──► Empty { field: "ingredients" }
/// ```
pub fn validate_recipe_draft(draft: &RecipeDraft, catalog: &[Ingredient]) -> CoreResult<RecipeSnapshot> {
    let product_name = validate_product_name(&draft.product_name)?;
    let selling_price = parse_non_negative_number(&draft.selling_price, "selling_price")?;
    // Unparsable and zero quantities share one message on the recipe form.
    let production_quantity = parse_non_negative_integer(&draft.production_quantity, "production_quantity")
        .map_err(|_| ValidationError::MustBePositive {
            field: "production_quantity".to_string(),
        })
        .and_then(validate_production_quantity)?;

    let mut usages = Vec::with_capacity(draft.usages.len());
    for row in &draft.usages {
        let name = row.ingredient.trim();
        if name.is_empty() || row.quantity.trim().is_empty() {
            debug!(product = %product_name, "skipping blank usage row");
            continue;
        }

        let ingredient = catalog
            .iter()
            .find(|i| i.name == name)
            .ok_or_else(|| CoreError::UnknownIngredient(name.to_string()))?;
        let quantity = parse_non_negative_number(&row.quantity, "quantity")?;

        usages.push(IngredientUsage {
            name: ingredient.name.clone(),
            unit_price: ingredient.unit_price,
            quantity_used: quantity,
        });
    }

    if usages.is_empty() {
        return Err(ValidationError::Empty {
            field: "ingredients".to_string(),
        }
        .into());
    }

    Ok(RecipeSnapshot {
        product_name,
        selling_price,
        production_quantity,
        usages,
    })
}

/// Admits the store's fixed cost settings.
pub fn validate_store_settings(draft: &StoreSettingsDraft) -> ValidationResult<FixedCostAllocation> {
    let monthly_fixed_cost = parse_non_negative_number(&draft.monthly_fixed_cost, "monthly_fixed_cost")?;
    let monthly_production = parse_non_negative_integer(&draft.monthly_production, "monthly_production")?;

    Ok(FixedCostAllocation {
        enabled: draft.fixed_cost_enabled,
        monthly_fixed_cost,
        monthly_production,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Ingredient> {
        vec![
            Ingredient {
                name: "小麦粉".to_string(),
                unit_price: 0.4,
                unit: "g".to_string(),
            },
            Ingredient {
                name: "バター".to_string(),
                unit_price: 2.0,
                unit: "g".to_string(),
            },
        ]
    }

    fn draft() -> RecipeDraft {
        RecipeDraft {
            product_name: " クッキー ".to_string(),
            selling_price: "300".to_string(),
            production_quantity: "20".to_string(),
            usages: vec![
                UsageDraft {
                    ingredient: "小麦粉".to_string(),
                    quantity: "500".to_string(),
                },
                UsageDraft {
                    ingredient: "バター".to_string(),
                    quantity: "200".to_string(),
                },
            ],
        }
    }

    #[test]
    fn test_parse_non_negative_number() {
        assert_eq!(parse_non_negative_number("0", "x").unwrap(), 0.0);
        assert_eq!(parse_non_negative_number(" 1.25 ", "x").unwrap(), 1.25);
        assert_eq!(parse_non_negative_number("1e3", "x").unwrap(), 1000.0);

        assert_eq!(
            parse_non_negative_number("-0.5", "unit_price"),
            Err(ValidationError::Negative {
                field: "unit_price".to_string()
            })
        );
        assert!(matches!(
            parse_non_negative_number("abc", "x"),
            Err(ValidationError::NotANumber { .. })
        ));
        assert!(matches!(
            parse_non_negative_number("", "x"),
            Err(ValidationError::NotANumber { .. })
        ));
        assert!(matches!(
            parse_non_negative_number("inf", "x"),
            Err(ValidationError::NotANumber { .. })
        ));
    }

    #[test]
    fn test_parse_non_negative_integer() {
        assert_eq!(parse_non_negative_integer("0", "x").unwrap(), 0);
        assert_eq!(parse_non_negative_integer(" 42", "x").unwrap(), 42);
        assert!(matches!(
            parse_non_negative_integer("-3", "x"),
            Err(ValidationError::Negative { .. })
        ));
        assert!(matches!(
            parse_non_negative_integer("1.5", "x"),
            Err(ValidationError::NotAnInteger { .. })
        ));
        assert!(matches!(
            parse_non_negative_integer("99999999999", "x"),
            Err(ValidationError::NotAnInteger { .. })
        ));
    }

    #[test]
    fn test_validate_product_name() {
        assert_eq!(validate_product_name("  Scone ").unwrap(), "Scone");
        assert!(validate_product_name("   ").is_err());
        assert!(validate_product_name(&"あ".repeat(100)).is_ok());
        assert!(matches!(
            validate_product_name(&"あ".repeat(101)),
            Err(ValidationError::TooLong { max: 100, .. })
        ));
        assert_eq!(
            validate_product_name(&"a".repeat(150)),
            Err(ValidationError::TooLong {
                field: "product_name".to_string(),
                max: 100
            })
        );
    }

    #[test]
    fn test_validate_ingredient_draft() {
        let ok = IngredientDraft {
            name: "砂糖".to_string(),
            unit_price: "0.25".to_string(),
            unit: "g".to_string(),
        };
        let ingredient = validate_ingredient_draft(&ok).unwrap();
        assert_eq!(ingredient.unit_price, 0.25);

        let missing_unit = IngredientDraft {
            unit: "".to_string(),
            ..ok.clone()
        };
        assert_eq!(validate_ingredient_draft(&missing_unit).unwrap_err().field(), "unit");

        let bad_price = IngredientDraft {
            unit_price: "free".to_string(),
            ..ok
        };
        assert_eq!(
            validate_ingredient_draft(&bad_price).unwrap_err().field(),
            "unit_price"
        );
    }

    #[test]
    fn test_validate_recipe_draft() {
        let snapshot = validate_recipe_draft(&draft(), &catalog()).unwrap();
        assert_eq!(snapshot.product_name, "クッキー");
        assert_eq!(snapshot.production_quantity, 20);
        assert_eq!(snapshot.usages.len(), 2);
        assert_eq!(snapshot.usages[1], IngredientUsage::new("バター", 2.0, 200.0));
    }

    #[test]
    fn test_recipe_zero_quantity_rejected() {
        let mut d = draft();
        d.production_quantity = "0".to_string();
        let err = validate_recipe_draft(&d, &catalog()).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::MustBePositive { .. })
        ));

        d.production_quantity = "two".to_string();
        let err = validate_recipe_draft(&d, &catalog()).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::MustBePositive { ref field }) if field == "production_quantity"
        ));
    }

    #[test]
    fn test_recipe_blank_rows_skipped() {
        let mut d = draft();
        d.usages.push(UsageDraft {
            ingredient: "".to_string(),
            quantity: "".to_string(),
        });
        d.usages.push(UsageDraft {
            ingredient: "小麦粉".to_string(),
            quantity: " ".to_string(),
        });
        let snapshot = validate_recipe_draft(&d, &catalog()).unwrap();
        assert_eq!(snapshot.usages.len(), 2);
    }

    #[test]
    fn test_recipe_without_ingredients_rejected() {
        let mut d = draft();
        d.usages.clear();
        let err = validate_recipe_draft(&d, &catalog()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation error: ingredients must contain at least one entry"
        );
    }

    #[test]
    fn test_recipe_unknown_ingredient_rejected() {
        let mut d = draft();
        d.usages[0].ingredient = "卵".to_string();
        let err = validate_recipe_draft(&d, &catalog()).unwrap_err();
        assert!(matches!(err, CoreError::UnknownIngredient(ref name) if name == "卵"));
    }

    #[test]
    fn test_recipe_negative_usage_rejected() {
        let mut d = draft();
        d.usages[1].quantity = "-5".to_string();
        let err = validate_recipe_draft(&d, &catalog()).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::Negative { ref field }) if field == "quantity"
        ));
    }

    #[test]
    fn test_validate_store_settings() {
        let draft = StoreSettingsDraft {
            fixed_cost_enabled: true,
            monthly_fixed_cost: "300000".to_string(),
            monthly_production: "6000".to_string(),
        };
        let settings = validate_store_settings(&draft).unwrap();
        assert_eq!(settings.per_item_allocation(), 50.0);

        let defaults = validate_store_settings(&StoreSettingsDraft::default()).unwrap();
        assert!(!defaults.enabled);
        assert_eq!(defaults.per_item_allocation(), 0.0);

        let bad = StoreSettingsDraft {
            monthly_production: "-1".to_string(),
            ..draft
        };
        assert_eq!(validate_store_settings(&bad).unwrap_err().field(), "monthly_production");
    }
}
