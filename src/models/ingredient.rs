use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Ingredient grouping, in the order the selector lists them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Protein,
    Carbohydrate,
    HealthyFat,
    Extra,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Protein,
        Category::Carbohydrate,
        Category::HealthyFat,
        Category::Extra,
    ];

    /// Section heading used by the ingredient selector.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Protein => "Protein Sources",
            Category::Carbohydrate => "Complex Carbs",
            Category::HealthyFat => "Healthy Fats",
            Category::Extra => "Extras & Superfoods",
        }
    }

    /// Parse a category from user input ("protein", "carbs", "healthy-fats", ...).
    pub fn parse(s: &str) -> Option<Category> {
        match s.trim().to_lowercase().as_str() {
            "protein" | "proteins" => Some(Category::Protein),
            "carbohydrate" | "carbohydrates" | "carbs" => Some(Category::Carbohydrate),
            "healthy-fat" | "healthy-fats" | "fat" | "fats" => Some(Category::HealthyFat),
            "extra" | "extras" | "topping" | "toppings" => Some(Category::Extra),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Category::Protein => "protein",
            Category::Carbohydrate => "carbohydrate",
            Category::HealthyFat => "healthy-fat",
            Category::Extra => "extra",
        };
        f.write_str(s)
    }
}

/// A single ingredient with per-portion nutrition facts and price.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
    pub price: Decimal,

    /// Foundational ingredients (nuts, nut butters, core sweeteners).
    #[serde(default)]
    pub is_base: bool,

    /// Informational only; never used in totals.
    pub calories_per_100g: f64,
}

impl Ingredient {
    /// Sum of the three macros in grams.
    #[inline]
    pub fn macro_grams(&self) -> f64 {
        self.protein + self.carbs + self.fats
    }

    /// One-line summary used in log fields.
    pub fn debug_string(&self) -> String {
        format!(
            "{} ({}): {} cal, P:{} C:{} F:{}, {}{}",
            self.name,
            self.id,
            self.calories,
            self.protein,
            self.carbs,
            self.fats,
            self.price,
            if self.is_base { ", base" } else { "" }
        )
    }
}

impl PartialEq for Ingredient {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Ingredient {}

impl std::hash::Hash for Ingredient {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Ingredient {
        Ingredient {
            id: "almonds".to_string(),
            name: "Almonds".to_string(),
            category: Category::HealthyFat,
            calories: 170.0,
            protein: 6.0,
            carbs: 6.0,
            fats: 15.0,
            price: Decimal::new(125, 2),
            is_base: true,
            calories_per_100g: 579.0,
        }
    }

    #[test]
    fn test_debug_string() {
        assert_eq!(
            sample().debug_string(),
            "Almonds (almonds): 170 cal, P:6 C:6 F:15, 1.25, base"
        );
    }

    #[test]
    fn test_macro_grams() {
        assert!((sample().macro_grams() - 27.0).abs() < 0.001);
    }

    #[test]
    fn test_equality_by_id() {
        let a = sample();
        let mut b = sample();
        b.name = "Roasted Almonds".to_string();
        b.calories = 180.0;
        assert_eq!(a, b);
    }

    #[test]
    fn test_category_parse_accepts_aliases() {
        assert_eq!(Category::parse("Carbs"), Some(Category::Carbohydrate));
        assert_eq!(Category::parse(" healthy-fats "), Some(Category::HealthyFat));
        assert_eq!(Category::parse("toppings"), Some(Category::Extra));
        assert_eq!(Category::parse("dessert"), None);
    }

    #[test]
    fn test_category_serde_is_kebab_case() {
        let json = serde_json::to_string(&Category::HealthyFat).unwrap();
        assert_eq!(json, "\"healthy-fat\"");
    }
}
