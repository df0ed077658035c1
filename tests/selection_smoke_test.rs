use rust_decimal::Decimal;

use gainflow::catalog::Catalog;
use gainflow::config::{EngineConfig, NutritionMode, PricingMode};
use gainflow::engine::constants::{BASE_BAR_PRICE, SHIPPING_FEE};
use gainflow::engine::{MembershipTier, Requirement};
use gainflow::error::GainflowError;
use gainflow::session::{Session, Step, Toggled};

fn session() -> Session<'static> {
    Session::new(Catalog::builtin(), EngineConfig::default()).unwrap()
}

#[test]
fn test_toggle_twice_restores_selection() {
    let mut s = session();
    let before: Vec<String> = s.selected_ids().iter().map(|id| id.to_string()).collect();

    for id in ["goji", "whey", "chia"] {
        let first = s.toggle_ingredient(id).unwrap();
        let second = s.toggle_ingredient(id).unwrap();
        assert_ne!(first, second);
    }

    let after: Vec<String> = s.selected_ids().iter().map(|id| id.to_string()).collect();
    assert_eq!(before, after);
}

#[test]
fn test_flavor_round_trip_restores_recipe() {
    let mut s = session();
    s.set_flavor("Chocolate").unwrap();
    let chocolate = s.selected_ids().iter().map(|id| id.to_string()).collect::<Vec<_>>();

    s.set_flavor("Vanilla").unwrap();
    assert_ne!(s.selected_ids().len(), 0);
    s.set_flavor("Chocolate").unwrap();

    let restored = s.selected_ids().iter().map(|id| id.to_string()).collect::<Vec<_>>();
    assert_eq!(chocolate, restored);
}

#[test]
fn test_flavor_switch_discards_customization() {
    let mut s = session();
    s.toggle_ingredient("goji").unwrap();
    s.toggle_ingredient("whey").unwrap();
    s.set_flavor("Chocolate").unwrap();

    assert!(!s.is_selected("goji"));
    assert!(s.is_selected("whey"));
}

#[test]
fn test_fewer_than_three_ingredients_never_checks_out() {
    let mut s = session();
    s.set_nut_allergy(true);
    for id in s.active_flavor().recipe.clone() {
        s.toggle_ingredient(&id).unwrap();
    }
    s.toggle_ingredient("honey").unwrap();
    s.toggle_ingredient("almonds").unwrap();

    assert!(!s.can_checkout());
    assert!(s.unmet_requirements().contains(&Requirement::MinimumIngredients));
    assert!(matches!(s.checkout(), Err(GainflowError::CheckoutBlocked(_))));
}

#[test]
fn test_nut_allergy_waives_nuts() {
    let mut s = session();
    s.toggle_ingredient("almonds").unwrap();
    s.toggle_ingredient("almond-butter").unwrap();
    assert!(!s.can_checkout());
    assert_eq!(s.unmet_requirements(), vec![Requirement::NutAndNutButter]);

    s.set_nut_allergy(true);
    assert!(s.can_checkout());
}

#[test]
fn test_marking_selected_ingredient_allergenic() {
    let mut s = session();
    assert!(s.is_selected("almonds"));

    s.set_nut_allergy(true);
    s.toggle_allergenic_ingredient("almonds").unwrap();

    assert!(!s.is_selected("almonds"));
    assert!(s.is_allergenic("almonds"));

    let before = s.selected_ids().len();
    match s.toggle_ingredient("almonds") {
        Err(GainflowError::AllergyConflict(name)) => assert_eq!(name, "Almonds"),
        other => panic!("expected allergy conflict, got {other:?}"),
    }
    assert_eq!(s.selected_ids().len(), before);
}

#[test]
fn test_clearing_nut_allergy_clears_allergens() {
    let mut s = session();
    s.set_nut_allergy(true);
    s.toggle_allergenic_ingredient("almonds").unwrap();
    s.toggle_allergenic_ingredient("cashews").unwrap();

    s.set_nut_allergy(false);
    assert!(s.allergenic_ids().is_empty());
    assert_eq!(s.toggle_ingredient("almonds").unwrap(), Toggled::Added);
}

#[test]
fn test_promo_case_insensitive_after_subscription() {
    let mut upper = session();
    upper.subscribe_newsletter("sam@example.com").unwrap();
    upper.apply_promo_code("FIRST10").unwrap();

    let mut lower = session();
    lower.subscribe_newsletter("sam@example.com").unwrap();
    lower.apply_promo_code("  first10  ").unwrap();

    assert_eq!(upper.applied_promo(), lower.applied_promo());
    assert_eq!(upper.price_breakdown(), lower.price_breakdown());
}

#[test]
fn test_promo_before_subscription_is_rejected() {
    let mut s = session();
    assert!(matches!(
        s.apply_promo_code("FIRST10"),
        Err(GainflowError::SubscribeFirst)
    ));
    assert!(s.applied_promo().is_none());
    assert!(s.price_breakdown().discount.is_zero());
}

#[test]
fn test_promo_errors_leave_state_unchanged() {
    let mut s = session();
    s.subscribe_newsletter("sam@example.com").unwrap();
    assert!(matches!(s.apply_promo_code(""), Err(GainflowError::MissingPromoCode)));
    assert!(matches!(
        s.apply_promo_code("SAVE50"),
        Err(GainflowError::InvalidPromoCode(_))
    ));
    assert!(s.applied_promo().is_none());
}

#[test]
fn test_chocolate_six_bars_delta_pricing() {
    let s = session();
    assert_eq!(s.active_flavor().name, "Chocolate");

    let n = s.nutrition_per_bar();
    assert_eq!(n.calories, 650.0);
    assert_eq!(n.protein, 34.0);
    assert_eq!(n.fats, 53.0);
    assert_eq!(n.carbs, 28.0);

    let price = s.price_breakdown();
    assert_eq!(price.quantity, 6);
    assert_eq!(price.subtotal, BASE_BAR_PRICE * Decimal::from(6));
    assert_eq!(price.shipping, SHIPPING_FEE);
    assert_eq!(price.discount, Decimal::ZERO);
    assert_eq!(price.total, price.subtotal + SHIPPING_FEE);
}

#[test]
fn test_quantity_seven_to_eight_flips_shipping() {
    let mut s = session();
    s.set_quantity(7);
    assert_eq!(s.price_breakdown().shipping, SHIPPING_FEE);

    s.set_quantity(8);
    assert_eq!(s.price_breakdown().shipping, Decimal::ZERO);
}

#[test]
fn test_first10_on_thirty_dollar_subtotal() {
    let config = EngineConfig {
        base_price: Decimal::new(500, 2),
        ..Default::default()
    };
    let mut s = Session::new(Catalog::builtin(), config).unwrap();
    s.set_quantity(6);
    s.subscribe_newsletter("sam@example.com").unwrap();
    s.apply_promo_code("FIRST10").unwrap();

    let price = s.price_breakdown();
    assert_eq!(price.subtotal, Decimal::new(3000, 2));
    assert_eq!(price.discount, Decimal::new(300, 2));
    assert_eq!(price.total, price.subtotal + price.shipping - Decimal::new(300, 2));
}

#[test]
fn test_first_design_config() {
    let mut s = Session::new(Catalog::builtin(), EngineConfig::first_design()).unwrap();
    assert_eq!(s.config().pricing_mode, PricingMode::FlatAdd);
    assert_eq!(s.config().nutrition_mode, NutritionMode::FlavorBase);

    // Promo codes are not gated on the newsletter here
    assert!(s.apply_promo_code("first10").is_ok());

    s.set_quantity(11);
    assert_eq!(s.price_breakdown().shipping, SHIPPING_FEE);
    s.set_quantity(12);
    assert!(s.price_breakdown().has_free_shipping());

    let flavor = s.active_flavor();
    assert_eq!(
        s.nutrition_per_bar().calories,
        flavor.totals.calories + flavor.base_calories
    );
}

#[test]
fn test_order_step_is_gated() {
    let mut s = session();
    s.toggle_ingredient("honey").unwrap();

    match s.go_to(Step::Order) {
        Err(GainflowError::CheckoutBlocked(unmet)) => {
            assert_eq!(unmet, vec![Requirement::Sweetener]);
        }
        other => panic!("expected blocked navigation, got {other:?}"),
    }
    assert_eq!(s.step(), Step::Flavor);

    s.toggle_ingredient("maple").unwrap();
    assert_eq!(s.go_to(Step::Order).unwrap(), Step::Order);
}

#[test]
fn test_checkout_receipt() {
    let mut s = session();
    s.set_quantity(10);
    s.select_membership_tier(MembershipTier::Premium);
    s.toggle_ingredient("goji").unwrap();

    let receipt = s.checkout().unwrap();
    assert_eq!(receipt.flavor, "Chocolate");
    assert_eq!(receipt.quantity, 10);
    assert_eq!(receipt.ingredients.first().map(String::as_str), Some("Whey Protein"));
    assert!(receipt.ingredients.contains(&"Goji Berries".to_string()));

    // (4.99 + 1.50) * 10 = 64.90, 15% off = 9.735 -> 9.74
    assert_eq!(receipt.price.subtotal, Decimal::new(6490, 2));
    assert_eq!(receipt.price.discount, Decimal::new(974, 2));
    assert_eq!(receipt.price.shipping, Decimal::ZERO);
    assert_eq!(receipt.price.total, Decimal::new(5516, 2));
}

#[test]
fn test_set_ingredient_selected_validates_ids_both_ways() {
    let mut s = session();
    let before = s.selected_ids().len();

    for selected in [false, true] {
        match s.set_ingredient_selected("almnds", selected) {
            Err(GainflowError::IngredientNotFound { id, suggestion }) => {
                assert_eq!(id, "almnds");
                assert_eq!(suggestion.as_deref(), Some("almonds"));
            }
            other => panic!("expected ingredient not found, got {other:?}"),
        }
    }
    assert_eq!(s.selected_ids().len(), before);

    assert_eq!(s.set_ingredient_selected("almonds", true).unwrap(), None);
    assert_eq!(
        s.set_ingredient_selected("almonds", false).unwrap(),
        Some(Toggled::Removed)
    );
    assert_eq!(s.set_ingredient_selected("almonds", false).unwrap(), None);
    assert!(!s.is_selected("almonds"));
}
