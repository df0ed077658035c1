use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::NutritionTotals;

/// Money side of an order, all values non-negative.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceBreakdown {
    pub base_price: Decimal,

    /// Charged ingredient cost per bar (all ingredients or only additions,
    /// depending on the pricing mode).
    pub ingredients_cost: Decimal,

    pub price_per_bar: Decimal,
    pub quantity: u32,
    pub subtotal: Decimal,
    pub shipping: Decimal,
    pub discount: Decimal,
    pub total: Decimal,
}

impl PriceBreakdown {
    pub fn has_free_shipping(&self) -> bool {
        self.shipping.is_zero()
    }
}

/// What the customer gets back after a successful checkout.
#[derive(Debug, Clone, Serialize)]
pub struct OrderReceipt {
    pub flavor: String,

    /// Ingredient display names in catalog order.
    pub ingredients: Vec<String>,

    pub quantity: u32,
    pub per_bar: NutritionTotals,
    pub price: PriceBreakdown,
    pub promo_code: Option<String>,
    pub currency: String,
}
