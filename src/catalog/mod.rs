//! Immutable reference data: ingredients and flavor presets.

mod data;

use std::collections::{HashMap, HashSet};

use strsim::jaro_winkler;

use crate::error::{GainflowError, Result};
use crate::models::{Category, Flavor, Ingredient, NutritionTotals};

pub use data::BUILTIN_CATALOG;

/// Minimum Jaro-Winkler similarity for a "did you mean" suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Ingredients and flavors, indexed for lookup.
///
/// Iteration order is catalog order. Ingredient ids are matched exactly,
/// flavor names case-insensitively.
#[derive(Debug, Clone)]
pub struct Catalog {
    ingredients: Vec<Ingredient>,
    flavors: Vec<Flavor>,
    ingredient_index: HashMap<String, usize>,
    flavor_index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog. Flavor totals are recomputed from their recipes.
    pub fn new(ingredients: Vec<Ingredient>, flavors: Vec<Flavor>) -> Self {
        let ingredient_index = ingredients
            .iter()
            .enumerate()
            .map(|(i, ing)| (ing.id.clone(), i))
            .collect::<HashMap<_, _>>();

        let flavors: Vec<Flavor> = flavors
            .into_iter()
            .map(|mut flavor| {
                flavor.totals = flavor
                    .recipe
                    .iter()
                    .filter_map(|id| ingredient_index.get(id).map(|&i| &ingredients[i]))
                    .fold(NutritionTotals::default(), |acc, ing| {
                        acc + NutritionTotals::of(ing)
                    });
                flavor
            })
            .collect();

        let flavor_index = flavors
            .iter()
            .enumerate()
            .map(|(i, f)| (f.key(), i))
            .collect();

        Self {
            ingredients,
            flavors,
            ingredient_index,
            flavor_index,
        }
    }

    /// The catalog shipped with the storefront.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN_CATALOG
    }

    pub fn get_ingredient(&self, id: &str) -> Option<&Ingredient> {
        self.ingredient_index.get(id).map(|&i| &self.ingredients[i])
    }

    /// Get a flavor by name (case-insensitive).
    pub fn get_flavor(&self, name: &str) -> Option<&Flavor> {
        self.flavor_index
            .get(&name.trim().to_lowercase())
            .map(|&i| &self.flavors[i])
    }

    /// Like `get_ingredient`, but a miss becomes an error with a suggestion.
    pub fn require_ingredient(&self, id: &str) -> Result<&Ingredient> {
        self.get_ingredient(id)
            .ok_or_else(|| GainflowError::IngredientNotFound {
                id: id.to_string(),
                suggestion: self.suggest_ingredient(id),
            })
    }

    /// Like `get_flavor`, but a miss becomes an error with a suggestion.
    pub fn require_flavor(&self, name: &str) -> Result<&Flavor> {
        self.get_flavor(name)
            .ok_or_else(|| GainflowError::FlavorNotFound {
                name: name.to_string(),
                suggestion: self.suggest_flavor(name),
            })
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    pub fn flavors(&self) -> &[Flavor] {
        &self.flavors
    }

    /// Ingredients of one category in catalog order.
    pub fn list_by_category(&self, category: Category) -> Vec<&Ingredient> {
        self.ingredients
            .iter()
            .filter(|i| i.category == category)
            .collect()
    }

    /// Closest ingredient id (or name) to `input`, if any is close enough.
    pub fn suggest_ingredient(&self, input: &str) -> Option<String> {
        let needle = input.trim().to_lowercase();
        best_match(self.ingredients.iter().flat_map(|i| {
            [
                (i.id.clone(), jaro_winkler(&i.id, &needle)),
                (i.id.clone(), jaro_winkler(&i.name.to_lowercase(), &needle)),
            ]
        }))
    }

    /// Closest flavor name to `input`, if any is close enough.
    pub fn suggest_flavor(&self, input: &str) -> Option<String> {
        let needle = input.trim().to_lowercase();
        best_match(
            self.flavors
                .iter()
                .map(|f| (f.name.clone(), jaro_winkler(&f.key(), &needle))),
        )
    }

    /// Check that ids are unique and every recipe references known ingredients.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for ing in &self.ingredients {
            if !seen.insert(ing.id.as_str()) {
                return Err(GainflowError::InvalidInput(format!(
                    "duplicate ingredient id '{}'",
                    ing.id
                )));
            }
        }

        let mut names = HashSet::new();
        for flavor in &self.flavors {
            if !names.insert(flavor.key()) {
                return Err(GainflowError::InvalidInput(format!(
                    "duplicate flavor '{}'",
                    flavor.name
                )));
            }
            for id in &flavor.recipe {
                if self.get_ingredient(id).is_none() {
                    return Err(GainflowError::InvalidInput(format!(
                        "flavor '{}' references unknown ingredient '{}'",
                        flavor.name, id
                    )));
                }
            }
        }

        Ok(())
    }
}

fn best_match(candidates: impl Iterator<Item = (String, f64)>) -> Option<String> {
    candidates
        .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(s, _)| s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::constants::{NUT_BUTTERS, PURE_NUTS, SWEETENERS};

    #[test]
    fn test_builtin_catalog_is_consistent() {
        Catalog::builtin().validate().unwrap();
    }

    #[test]
    fn test_rule_sets_reference_base_ingredients() {
        let catalog = Catalog::builtin();
        for id in SWEETENERS.iter().chain(PURE_NUTS).chain(NUT_BUTTERS) {
            let ing = catalog.get_ingredient(id).unwrap();
            assert!(ing.is_base, "{} should be a base ingredient", id);
        }
    }

    #[test]
    fn test_chocolate_recipe_totals() {
        let chocolate = Catalog::builtin().get_flavor("Chocolate").unwrap();
        assert_eq!(chocolate.totals.calories, 650.0);
        assert_eq!(chocolate.totals.protein, 34.0);
        assert_eq!(chocolate.totals.fats, 53.0);
        assert_eq!(chocolate.totals.carbs, 28.0);
    }

    #[test]
    fn test_get_flavor_case_insensitive() {
        let catalog = Catalog::builtin();
        assert!(catalog.get_flavor("chocolate").is_some());
        assert!(catalog.get_flavor("  PEANUT BUTTER ").is_some());
        assert!(catalog.get_flavor("mint").is_none());
    }

    #[test]
    fn test_list_by_category_keeps_catalog_order() {
        let proteins: Vec<&str> = Catalog::builtin()
            .list_by_category(Category::Protein)
            .iter()
            .map(|i| i.id.as_str())
            .collect();
        assert_eq!(proteins, vec!["whey", "casein", "pea"]);
    }

    #[test]
    fn test_require_flavor_suggests_close_name() {
        let err = Catalog::builtin().require_flavor("choclate").unwrap_err();
        match err {
            GainflowError::FlavorNotFound { suggestion, .. } => {
                assert_eq!(suggestion.as_deref(), Some("Chocolate"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_suggest_ingredient_by_display_name() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.suggest_ingredient("Raw Honey").as_deref(), Some("honey"));
        assert_eq!(catalog.suggest_ingredient("qqqqqq"), None);
    }

    #[test]
    fn test_validate_rejects_unknown_recipe_id() {
        let catalog = Catalog::new(
            Catalog::builtin().ingredients().to_vec(),
            vec![Flavor {
                name: "Mystery".to_string(),
                color: "#000000".to_string(),
                recipe: vec!["unobtainium".to_string()],
                base_calories: 0.0,
                totals: NutritionTotals::default(),
            }],
        );
        assert!(catalog.validate().is_err());
    }
}
