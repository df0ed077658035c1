pub mod prompts;
pub mod render;

pub use prompts::{prompt_yes_no, run_configurator};
pub use render::{
    display_eligibility, display_flavors, display_ingredients, display_membership_tiers,
    display_notice, display_nutrition, display_order_summary, display_receipt, price_lines,
};
