use serde::Serialize;

use crate::models::NutritionTotals;

/// A named preset bundling a default recipe.
///
/// `totals` is filled in by the catalog from the recipe so the flavor card
/// always agrees with what the aggregator computes for the untouched preset.
#[derive(Debug, Clone, Serialize)]
pub struct Flavor {
    pub name: String,

    /// Swatch color as a hex string.
    pub color: String,

    /// Ingredient ids of the default recipe, in recipe order.
    pub recipe: Vec<String>,

    /// Fixed calories of the flavor base, used by the flavor-base nutrition mode.
    pub base_calories: f64,

    pub totals: NutritionTotals,
}

impl Flavor {
    pub fn includes(&self, ingredient_id: &str) -> bool {
        self.recipe.iter().any(|id| id == ingredient_id)
    }

    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}
