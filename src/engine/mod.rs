pub mod aggregator;
pub mod calories;
pub mod constants;
pub mod membership;
pub mod promo;
pub mod rules;

pub use aggregator::{
    bar_nutrition, ingredients_cost, macro_percentages, nutrition_totals, order_totals,
    price_per_bar, OrderTotals,
};
pub use calories::{bars_needed, bars_needed_from_input};
pub use membership::MembershipTier;
pub use promo::{normalize_code, validate_promo, AppliedPromo};
pub use rules::{evaluate, Eligibility, Requirement};
