use std::collections::HashMap;
use std::sync::LazyLock;

use rust_decimal::Decimal;

/// Price of a plain bar before ingredients, in currency units.
pub const BASE_BAR_PRICE: Decimal = Decimal::from_parts(499, 0, 0, false, 2);

/// Flat shipping fee charged below the free-shipping threshold.
pub const SHIPPING_FEE: Decimal = Decimal::from_parts(599, 0, 0, false, 2);

/// Bars per order at which shipping becomes free.
pub const FREE_SHIPPING_THRESHOLD: u32 = 8;

/// Default currency symbol.
pub const CURRENCY_SYMBOL: &str = "$";

/// Fewest ingredients a bar can be checked out with.
pub const MIN_INGREDIENTS: usize = 3;

/// Quantity a fresh session starts with.
pub const DEFAULT_QUANTITY: u32 = 6;

/// Flavor a fresh session starts with.
pub const DEFAULT_FLAVOR: &str = "Chocolate";

// ─────────────────────────────────────────────────────────────────────────────
// Eligibility ingredient sets
// ─────────────────────────────────────────────────────────────────────────────

/// At least one of these must be selected.
pub const SWEETENERS: &[&str] = &["honey", "maple"];

/// Whole nuts. One of these plus one nut butter is required without a nut allergy.
pub const PURE_NUTS: &[&str] = &["almonds", "cashews", "peanuts", "walnuts"];

pub const NUT_BUTTERS: &[&str] = &["almond-butter", "cashew-butter", "peanut-butter"];

// ─────────────────────────────────────────────────────────────────────────────
// Discounts
// ─────────────────────────────────────────────────────────────────────────────

/// Recognized promo codes (uppercase) and their discount on subtotal.
pub static PROMO_CODES: LazyLock<HashMap<&'static str, Decimal>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    m.insert("FIRST10", Decimal::new(10, 2));
    m
});

pub const FREE_MEMBER_DISCOUNT: Decimal = Decimal::from_parts(5, 0, 0, false, 2);
pub const PREMIUM_MEMBER_DISCOUNT: Decimal = Decimal::from_parts(15, 0, 0, false, 2);
pub const ELITE_MEMBER_DISCOUNT: Decimal = Decimal::from_parts(25, 0, 0, false, 2);

/// Premium members ship free from this many bars.
pub const PREMIUM_FREE_SHIPPING_THRESHOLD: u32 = 6;

/// Look up a normalized promo code.
pub fn promo_discount(code: &str) -> Option<Decimal> {
    PROMO_CODES.get(code).copied()
}
