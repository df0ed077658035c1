use std::sync::LazyLock;

use rust_decimal::Decimal;

use crate::catalog::Catalog;
use crate::models::{Category, Flavor, Ingredient, NutritionTotals};

/// The storefront catalog, fixed at build time.
pub static BUILTIN_CATALOG: LazyLock<Catalog> =
    LazyLock::new(|| Catalog::new(builtin_ingredients(), builtin_flavors()));

#[allow(clippy::too_many_arguments)]
fn ingredient(
    id: &str,
    name: &str,
    category: Category,
    calories: f64,
    protein: f64,
    carbs: f64,
    fats: f64,
    cents: i64,
    is_base: bool,
    calories_per_100g: f64,
) -> Ingredient {
    Ingredient {
        id: id.to_string(),
        name: name.to_string(),
        category,
        calories,
        protein,
        carbs,
        fats,
        price: Decimal::new(cents, 2),
        is_base,
        calories_per_100g,
    }
}

fn flavor(name: &str, color: &str, base_calories: f64, recipe: &[&str]) -> Flavor {
    Flavor {
        name: name.to_string(),
        color: color.to_string(),
        recipe: recipe.iter().map(|id| id.to_string()).collect(),
        base_calories,
        totals: NutritionTotals::default(),
    }
}

fn builtin_ingredients() -> Vec<Ingredient> {
    use Category::*;

    vec![
        // id, name, category, calories, protein, carbs, fats, price in cents, base, kcal/100g
        ingredient("whey", "Whey Protein", Protein, 110.0, 20.0, 2.0, 1.0, 199, false, 380.0),
        ingredient("casein", "Casein", Protein, 110.0, 24.0, 3.0, 1.0, 225, false, 370.0),
        ingredient("pea", "Pea Protein", Protein, 100.0, 20.0, 5.0, 2.0, 175, false, 390.0),
        ingredient("oats", "Rolled Oats", Carbohydrate, 150.0, 5.0, 27.0, 3.0, 50, false, 389.0),
        ingredient("dates", "Dates", Carbohydrate, 80.0, 1.0, 21.0, 0.0, 75, false, 282.0),
        ingredient("honey", "Raw Honey", Carbohydrate, 40.0, 0.0, 10.0, 0.0, 60, true, 304.0),
        ingredient("maple", "Maple Syrup", Carbohydrate, 50.0, 0.0, 13.0, 0.0, 70, true, 260.0),
        ingredient("almonds", "Almonds", HealthyFat, 170.0, 6.0, 6.0, 15.0, 125, true, 579.0),
        ingredient("cashews", "Cashews", HealthyFat, 160.0, 5.0, 9.0, 13.0, 135, true, 553.0),
        ingredient("peanuts", "Peanuts", HealthyFat, 160.0, 7.0, 5.0, 14.0, 90, true, 567.0),
        ingredient("walnuts", "Walnuts", HealthyFat, 185.0, 4.0, 4.0, 18.0, 140, true, 654.0),
        ingredient("almond-butter", "Almond Butter", HealthyFat, 180.0, 7.0, 6.0, 18.0, 150, true, 614.0),
        ingredient("cashew-butter", "Cashew Butter", HealthyFat, 170.0, 5.0, 8.0, 14.0, 160, true, 587.0),
        ingredient("peanut-butter", "Peanut Butter", HealthyFat, 190.0, 8.0, 6.0, 16.0, 110, true, 588.0),
        ingredient("coconut-oil", "Coconut Oil", HealthyFat, 80.0, 0.0, 0.0, 10.0, 55, false, 862.0),
        ingredient("chia", "Chia Seeds", HealthyFat, 60.0, 3.0, 5.0, 4.0, 95, false, 486.0),
        ingredient("dark-chocolate", "Dark Chocolate", Extra, 70.0, 1.0, 4.0, 9.0, 120, false, 598.0),
        ingredient("cacao", "Cacao Nibs", Extra, 70.0, 2.0, 4.0, 6.0, 110, false, 600.0),
        ingredient("goji", "Goji Berries", Extra, 45.0, 2.0, 9.0, 0.0, 150, false, 349.0),
        ingredient("strawberries", "Freeze-Dried Strawberries", Extra, 30.0, 1.0, 7.0, 0.0, 130, false, 340.0),
        ingredient("cookie-crumbs", "Cookie Crumbs", Extra, 60.0, 1.0, 8.0, 3.0, 80, false, 480.0),
        ingredient("caramel", "Sea Salt Caramel", Extra, 55.0, 0.0, 9.0, 2.0, 90, false, 420.0),
        ingredient("collagen", "Collagen", Extra, 35.0, 9.0, 0.0, 0.0, 200, false, 360.0),
    ]
}

fn builtin_flavors() -> Vec<Flavor> {
    vec![
        flavor(
            "Chocolate",
            "#8B4513",
            320.0,
            &["whey", "honey", "almonds", "almond-butter", "coconut-oil", "dark-chocolate"],
        ),
        flavor(
            "Vanilla",
            "#F5E6D3",
            310.0,
            &["whey", "oats", "maple", "cashews", "cashew-butter"],
        ),
        flavor(
            "Peanut Butter",
            "#D4A574",
            350.0,
            &["pea", "oats", "honey", "peanuts", "peanut-butter"],
        ),
        flavor(
            "Cookies & Cream",
            "#4A4A4A",
            330.0,
            &["casein", "honey", "almonds", "almond-butter", "cookie-crumbs"],
        ),
        flavor(
            "Salted Caramel",
            "#C68E17",
            340.0,
            &["whey", "dates", "maple", "cashews", "cashew-butter", "caramel"],
        ),
        flavor(
            "Strawberry",
            "#FF6B9D",
            315.0,
            &["whey", "honey", "walnuts", "almond-butter", "strawberries"],
        ),
    ]
}
