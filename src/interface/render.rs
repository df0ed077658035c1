use rust_decimal::Decimal;

use crate::catalog::Catalog;
use crate::config::{EngineConfig, PricingMode};
use crate::engine::MembershipTier;
use crate::models::{Category, Ingredient, OrderReceipt};
use crate::session::{Notice, NoticeLevel, Session};

/// Print a notice as a single line.
pub fn display_notice(notice: &Notice) {
    let marker = match notice.level {
        NoticeLevel::Success => "[ok]",
        NoticeLevel::Info => "[i]",
        NoticeLevel::Error => "[!]",
    };
    println!("{} {}", marker, notice);
}

/// One ingredient row: name, price, and nutrition badges.
pub fn ingredient_line(ingredient: &Ingredient, config: &EngineConfig) -> String {
    format!(
        "{:<26} {:>7}  {:>4} cal  {:>3}g protein  {:>3}g carbs  {:>3}g fat{}",
        ingredient.name,
        config.money(ingredient.price),
        ingredient.calories,
        ingredient.protein,
        ingredient.carbs,
        ingredient.fats,
        if ingredient.is_base { "  (base)" } else { "" }
    )
}

/// List flavors with their default recipe totals.
pub fn display_flavors(catalog: &Catalog) {
    println!();
    println!("=== Flavors ===");
    println!();

    let width = catalog.flavors().iter().map(|f| f.name.len()).max().unwrap_or(10);
    for flavor in catalog.flavors() {
        println!(
            "  {:<width$}  {}  {:>4.0} cal  P:{:.0} C:{:.0} F:{:.0}  [{}]",
            flavor.name,
            flavor.color,
            flavor.totals.calories,
            flavor.totals.protein,
            flavor.totals.carbs,
            flavor.totals.fats,
            flavor.recipe.join(", "),
            width = width
        );
    }
    println!();
}

/// List ingredients grouped by category, or just one category.
pub fn display_ingredients(catalog: &Catalog, config: &EngineConfig, only: Option<Category>) {
    let categories: Vec<Category> = match only {
        Some(c) => vec![c],
        None => Category::ALL.to_vec(),
    };

    for category in categories {
        println!();
        println!("=== {} ===", category.label());
        for ingredient in catalog.list_by_category(category) {
            println!("  {:<14} {}", ingredient.id, ingredient_line(ingredient, config));
        }
    }
    println!();
}

/// Nutrition panel: per-bar totals, macro split, batch calories.
pub fn display_nutrition(session: &Session) {
    let per_bar = session.nutrition_per_bar();
    let split = session.macro_split();
    let batch = session.nutrition_for_quantity();

    println!();
    println!("--- Nutrition Facts (per bar) ---");
    println!("Calories: {:.0} kcal", per_bar.calories);
    println!("Protein:  {:>5.0}g  ({:.0}% of macros)", per_bar.protein, split.protein);
    println!("Carbs:    {:>5.0}g  ({:.0}% of macros)", per_bar.carbs, split.carbs);
    println!("Fats:     {:>5.0}g  ({:.0}% of macros)", per_bar.fats, split.fats);
    println!(
        "{} {}: {:.0} kcal total",
        session.quantity(),
        if session.quantity() == 1 { "bar" } else { "bars" },
        batch.calories
    );
}

/// Order summary with the full price breakdown.
pub fn display_order_summary(session: &Session) {
    let config = session.config();

    println!();
    println!("--- Order Summary ---");
    println!("Flavor: {}", session.active_flavor().name);

    let selected = session.selected_ingredients();
    println!("Ingredients ({}):", selected.len());
    for ingredient in &selected {
        let included = config.pricing_mode == PricingMode::Delta
            && session.active_flavor().includes(&ingredient.id);
        println!(
            "  {:<26} {}",
            ingredient.name,
            if included {
                "included".to_string()
            } else {
                config.money(ingredient.price)
            }
        );
    }

    println!();
    for (label, value) in price_lines(session) {
        println!("{:<18}{}", format!("{}:", label), value);
    }
}

/// Labelled money lines of the order summary, in display order.
pub fn price_lines(session: &Session) -> Vec<(String, String)> {
    let config = session.config();
    let price = session.price_breakdown();
    let mut lines = vec![("Base price".to_string(), config.money(price.base_price))];

    if !price.ingredients_cost.is_zero() {
        lines.push(("Ingredients cost".to_string(), config.money(price.ingredients_cost)));
    }
    lines.push(("Price per bar".to_string(), config.money(price.price_per_bar)));
    lines.push(("Quantity".to_string(), price.quantity.to_string()));
    lines.push(("Subtotal".to_string(), config.money(price.subtotal)));
    let shipping = if price.has_free_shipping() {
        "FREE".to_string()
    } else {
        format!(
            "{}  (free from {} bars)",
            config.money(price.shipping),
            session.free_shipping_threshold()
        )
    };
    lines.push(("Shipping".to_string(), shipping));
    if !price.discount.is_zero() {
        let source = match (session.applied_promo(), session.membership()) {
            (Some(promo), MembershipTier::None) => promo.code.clone(),
            (Some(promo), tier) if promo.discount >= tier.discount() => promo.code.clone(),
            (_, tier) => tier.to_string(),
        };
        lines.push((format!("Discount ({})", source), format!("-{}", config.money(price.discount))));
    }
    lines.push(("Total".to_string(), config.money(price.total)));
    lines
}

/// Eligibility checklist.
pub fn display_eligibility(session: &Session) {
    let e = session.eligibility();
    let mark = |ok: bool| if ok { "x" } else { " " };

    println!();
    println!("--- Ready to order? ---");
    println!("[{}] At least 3 ingredients", mark(e.has_enough_ingredients));
    println!("[{}] A base ingredient", mark(e.has_base_ingredient));
    println!("[{}] A sweetener", mark(e.has_required_sweetener));
    if e.has_nut_allergy {
        println!("[x] Nuts and nut butter (waived: nut allergy)");
    } else {
        println!("[{}] Nuts and nut butter", mark(e.has_nut_and_nut_butter));
    }

    for requirement in e.unmet() {
        println!("  - {}", requirement);
    }
}

pub fn display_receipt(receipt: &OrderReceipt, config: &EngineConfig) {
    println!();
    println!("=== Thank You for Your Order! ===");
    println!(
        "Order:       {} custom {}",
        receipt.quantity,
        if receipt.quantity == 1 { "bar" } else { "bars" }
    );
    println!("Flavor:      {}", receipt.flavor);
    println!("Ingredients: {}", receipt.ingredients.join(", "));
    println!("Per bar:     {:.0} kcal", receipt.per_bar.calories);
    if let Some(code) = &receipt.promo_code {
        println!("Promo:       {}", code);
    }
    println!("Total paid:  {}", config.money(receipt.price.total));
    println!("Delivery:    3-5 business days");
    println!();
}

/// Membership tiers with their perks.
pub fn display_membership_tiers(current: MembershipTier, config: &EngineConfig) {
    println!();
    for tier in MembershipTier::ALL.iter().skip(1) {
        let shipping = match tier.shipping_threshold(config.free_shipping_threshold) {
            0 => "free shipping on all orders".to_string(),
            n => format!("free shipping from {} bars", n),
        };
        println!(
            "  {:<15} {}/month  {}% off, {}{}",
            tier.to_string(),
            config.money(tier.monthly_fee()),
            (tier.discount() * Decimal::ONE_HUNDRED).normalize(),
            shipping,
            if *tier == current { "  (current)" } else { "" }
        );
    }
    println!();
}
