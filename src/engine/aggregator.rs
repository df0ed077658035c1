use rust_decimal::{Decimal, RoundingStrategy};

use crate::catalog::Catalog;
use crate::config::{NutritionMode, PricingMode};
use crate::models::{Flavor, MacroSplit, NutritionTotals};

/// Sum calories and macros over the selected ingredients.
///
/// Unknown ids are skipped.
pub fn nutrition_totals<I, S>(catalog: &Catalog, selected: I) -> NutritionTotals
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    selected
        .into_iter()
        .filter_map(|id| catalog.get_ingredient(id.as_ref()))
        .fold(NutritionTotals::default(), |acc, ing| {
            acc + NutritionTotals::of(ing)
        })
}

/// Per-bar nutrition under the given mode.
///
/// `FlavorBase` adds the flavor's fixed base calories on top of the
/// ingredients; macros come from the ingredients only.
pub fn bar_nutrition<I, S>(
    catalog: &Catalog,
    selected: I,
    flavor: &Flavor,
    mode: NutritionMode,
) -> NutritionTotals
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut totals = nutrition_totals(catalog, selected);
    if mode == NutritionMode::FlavorBase {
        totals.calories += flavor.base_calories;
    }
    totals
}

/// Each macro's percentage of `protein + carbs + fats`.
///
/// All zeros when the macro sum is zero.
pub fn macro_percentages(protein: f64, carbs: f64, fats: f64) -> MacroSplit {
    let total = protein + carbs + fats;
    if total <= 0.0 {
        return MacroSplit::default();
    }

    MacroSplit {
        protein: protein / total * 100.0,
        carbs: carbs / total * 100.0,
        fats: fats / total * 100.0,
    }
}

/// Charged ingredient cost for one bar.
pub fn ingredients_cost<I, S>(
    catalog: &Catalog,
    selected: I,
    flavor: &Flavor,
    mode: PricingMode,
) -> Decimal
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    selected
        .into_iter()
        .filter(|id| match mode {
            PricingMode::FlatAdd => true,
            PricingMode::Delta => !flavor.includes(id.as_ref()),
        })
        .filter_map(|id| catalog.get_ingredient(id.as_ref()))
        .map(|ing| ing.price)
        .sum()
}

/// Base bar price plus the charged ingredient cost.
pub fn price_per_bar<I, S>(
    catalog: &Catalog,
    selected: I,
    flavor: &Flavor,
    mode: PricingMode,
    base_price: Decimal,
) -> Decimal
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    base_price + ingredients_cost(catalog, selected, flavor, mode)
}

/// Subtotal, shipping, discount and total for an order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderTotals {
    pub subtotal: Decimal,
    pub shipping: Decimal,
    pub discount: Decimal,
    pub total: Decimal,
}

/// Compute order totals.
///
/// `discount_fraction` is expected in [0, 1]; callers clamp it. The discount
/// is rounded to cents, half away from zero.
pub fn order_totals(
    price_per_bar: Decimal,
    quantity: u32,
    free_shipping_threshold: u32,
    shipping_fee: Decimal,
    discount_fraction: Decimal,
) -> OrderTotals {
    let subtotal = price_per_bar * Decimal::from(quantity);
    let shipping = if quantity >= free_shipping_threshold {
        Decimal::ZERO
    } else {
        shipping_fee
    };
    let discount = (subtotal * discount_fraction)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let total = subtotal + shipping - discount;

    OrderTotals {
        subtotal,
        shipping,
        discount,
        total,
    }
}
