use std::collections::BTreeSet;

use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::catalog::Catalog;
use crate::config::EngineConfig;
use crate::engine::constants::{DEFAULT_FLAVOR, DEFAULT_QUANTITY};
use crate::engine::{
    aggregator, bars_needed_from_input, macro_percentages, rules, validate_promo, AppliedPromo,
    Eligibility, MembershipTier, Requirement,
};
use crate::error::{GainflowError, Result};
use crate::models::{
    Flavor, Ingredient, MacroSplit, NutritionTotals, OrderReceipt, PriceBreakdown,
};
use crate::session::forms::{ContactForm, NutritionistRequest};
use crate::session::notice::Notice;

/// Screens of the configurator, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Step {
    Flavor,
    Ingredients,
    Order,
}

impl Step {
    pub fn next(self) -> Step {
        match self {
            Step::Flavor => Step::Ingredients,
            Step::Ingredients | Step::Order => Step::Order,
        }
    }
}

/// Outcome of toggling an ingredient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggled {
    Added,
    Removed,
}

/// Selection state of one configurator session.
///
/// Every mutation goes through a command method. Derived values (totals,
/// prices, eligibility) are recomputed on each query.
///
/// Invariant: no id is ever in both `selected` and `allergens`.
#[derive(Debug, Clone)]
pub struct Session<'a> {
    catalog: &'a Catalog,
    config: EngineConfig,
    flavor: &'a Flavor,
    selected: BTreeSet<String>,
    quantity: u32,
    has_nut_allergy: bool,
    allergens: BTreeSet<String>,
    promo: Option<AppliedPromo>,
    promo_input: String,
    membership: MembershipTier,
    subscribed_email: Option<String>,
    step: Step,
    submissions: u32,
}

impl<'a> Session<'a> {
    /// Start a session on the default flavor (or the first one in the catalog).
    pub fn new(catalog: &'a Catalog, config: EngineConfig) -> Result<Self> {
        let flavor = catalog
            .get_flavor(DEFAULT_FLAVOR)
            .or_else(|| catalog.flavors().first())
            .ok_or_else(|| GainflowError::InvalidInput("catalog has no flavors".to_string()))?;

        Ok(Self {
            catalog,
            config,
            flavor,
            selected: flavor.recipe.iter().cloned().collect(),
            quantity: DEFAULT_QUANTITY,
            has_nut_allergy: false,
            allergens: BTreeSet::new(),
            promo: None,
            promo_input: String::new(),
            membership: MembershipTier::None,
            subscribed_email: None,
            step: Step::Flavor,
            submissions: 0,
        })
    }

    // ─────────────────────────────────────────────────────────────────────
    // Commands
    // ─────────────────────────────────────────────────────────────────────

    /// Add the ingredient if absent, remove it if present.
    ///
    /// Ingredients on the allergy list are rejected and nothing changes.
    pub fn toggle_ingredient(&mut self, id: &str) -> Result<Toggled> {
        let ingredient = self.catalog.require_ingredient(id)?;

        if self.selected.remove(id) {
            debug!(id, "ingredient removed");
            return Ok(Toggled::Removed);
        }

        if self.allergens.contains(id) {
            warn!(id, "rejected allergenic ingredient");
            return Err(GainflowError::AllergyConflict(ingredient.name.clone()));
        }

        self.selected.insert(id.to_string());
        debug!(ingredient = %ingredient.debug_string(), "ingredient added");
        Ok(Toggled::Added)
    }

    /// Make sure the ingredient is selected (or not), toggling only when needed.
    ///
    /// Unknown ids are rejected even when no change would be made.
    pub fn set_ingredient_selected(&mut self, id: &str, selected: bool) -> Result<Option<Toggled>> {
        self.catalog.require_ingredient(id)?;
        if self.is_selected(id) == selected {
            return Ok(None);
        }
        self.toggle_ingredient(id).map(Some)
    }

    /// Switch flavor, replacing the selection with its default recipe.
    ///
    /// Manual changes are discarded. Recipe ingredients on the allergy list
    /// are left out.
    pub fn set_flavor(&mut self, name: &str) -> Result<()> {
        let flavor = self.catalog.require_flavor(name)?;
        self.flavor = flavor;
        self.selected = flavor
            .recipe
            .iter()
            .filter(|id| !self.allergens.contains(*id))
            .cloned()
            .collect();
        info!(flavor = %flavor.name, ingredients = self.selected.len(), "flavor selected");
        Ok(())
    }

    /// Set the number of bars, coercing anything below 1 to 1.
    pub fn set_quantity(&mut self, n: i64) -> u32 {
        self.quantity = n.clamp(1, u32::MAX as i64) as u32;
        debug!(quantity = self.quantity, "quantity set");
        self.quantity
    }

    /// Set the nut allergy flag. Clearing it also clears the allergy list.
    pub fn set_nut_allergy(&mut self, has_allergy: bool) {
        self.has_nut_allergy = has_allergy;
        if !has_allergy && !self.allergens.is_empty() {
            debug!(cleared = self.allergens.len(), "allergy list cleared");
            self.allergens.clear();
        }
        info!(has_allergy, "nut allergy updated");
    }

    /// Put the ingredient on the allergy list, or take it off.
    ///
    /// Marking removes it from the selection; it cannot be re-added until
    /// unmarked.
    pub fn toggle_allergenic_ingredient(&mut self, id: &str) -> Result<Notice> {
        let ingredient = self.catalog.require_ingredient(id)?;

        if self.allergens.remove(id) {
            info!(id, "ingredient removed from allergy list");
            return Ok(Notice::info(
                "Allergy updated",
                format!("{} can be added again", ingredient.name),
            ));
        }

        let was_selected = self.selected.remove(id);
        self.allergens.insert(id.to_string());
        info!(id, was_selected, "ingredient marked allergenic");

        let message = if was_selected {
            format!("{} was removed from your bar", ingredient.name)
        } else {
            format!("{} will be kept out of your bar", ingredient.name)
        };
        Ok(Notice::info("Allergy updated", message))
    }

    /// Update the promo input field without applying it.
    pub fn set_promo_input(&mut self, text: &str) {
        self.promo_input = text.to_string();
    }

    /// Validate and apply a promo code. Rejections leave the state unchanged.
    pub fn apply_promo_code(&mut self, text: &str) -> Result<Notice> {
        let promo = validate_promo(
            text,
            self.subscribed_email.is_some(),
            self.config.promo_requires_subscription,
        )
        .inspect_err(|e| warn!(error = %e, "promo code rejected"))?;

        let message = format!(
            "{} applied: {}% off your subtotal",
            promo.code,
            (promo.discount * Decimal::ONE_HUNDRED).normalize()
        );
        info!(code = %promo.code, "promo code applied");
        self.promo_input = promo.code.clone();
        self.promo = Some(promo);
        Ok(Notice::success("Promo code applied", message))
    }

    /// Remove the applied promo and clear the input field.
    pub fn remove_promo_code(&mut self) -> Notice {
        self.promo_input.clear();
        match self.promo.take() {
            Some(promo) => {
                info!(code = %promo.code, "promo code removed");
                Notice::info("Promo code removed", format!("{} is no longer applied", promo.code))
            }
            None => Notice::info("Promo code removed", "No promo code was applied"),
        }
    }

    pub fn select_membership_tier(&mut self, tier: MembershipTier) -> Notice {
        self.membership = tier;
        info!(?tier, "membership selected");
        Notice::success(
            "Membership updated",
            format!("You are now on the {} plan", tier),
        )
    }

    /// Record a newsletter subscription. Any non-blank address is accepted.
    pub fn subscribe_newsletter(&mut self, email: &str) -> Result<Notice> {
        let email = email.trim();
        if email.is_empty() {
            warn!("subscription without email");
            return Err(GainflowError::MissingField("email"));
        }

        self.subscribed_email = Some(email.to_string());
        info!(email, "newsletter subscription");
        Ok(Notice::success(
            "Subscribed!",
            format!("We'll send nutrition tips and exclusive offers to {}", email),
        ))
    }

    pub fn submit_contact_form(&mut self, form: &ContactForm) -> Result<Notice> {
        form.validate()
            .inspect_err(|e| warn!(error = %e, "contact form rejected"))?;
        self.submissions += 1;
        info!(email = %form.email.trim(), "contact form submitted");
        Ok(Notice::success(
            "Message sent",
            format!("Thanks {}, we'll get back to you soon", form.name.trim()),
        ))
    }

    pub fn submit_nutritionist_request(&mut self, request: &NutritionistRequest) -> Result<Notice> {
        request
            .validate()
            .inspect_err(|e| warn!(error = %e, "nutritionist request rejected"))?;
        self.submissions += 1;
        info!(email = %request.email.trim(), "nutritionist request submitted");
        Ok(Notice::info(
            "Contact Nutritionist",
            "Our nutrition team will reach out to you within 24 hours!",
        ))
    }

    /// Move to a step. Entering the order step requires checkout eligibility.
    pub fn go_to(&mut self, step: Step) -> Result<Step> {
        if step == Step::Order {
            let eligibility = self.eligibility();
            if !eligibility.can_checkout() {
                warn!(unmet = ?eligibility.unmet(), "order step blocked");
                return Err(GainflowError::CheckoutBlocked(eligibility.unmet()));
            }
        }
        self.step = step;
        debug!(?step, "step changed");
        Ok(step)
    }

    /// Move to the next step.
    pub fn advance(&mut self) -> Result<Step> {
        self.go_to(self.step.next())
    }

    /// Place the order. Refused with the itemized unmet requirements.
    pub fn checkout(&self) -> Result<OrderReceipt> {
        let eligibility = self.eligibility();
        if !eligibility.can_checkout() {
            warn!(unmet = ?eligibility.unmet(), "checkout blocked");
            return Err(GainflowError::CheckoutBlocked(eligibility.unmet()));
        }

        let receipt = OrderReceipt {
            flavor: self.flavor.name.clone(),
            ingredients: self
                .selected_ingredients()
                .iter()
                .map(|i| i.name.clone())
                .collect(),
            quantity: self.quantity,
            per_bar: self.nutrition_per_bar(),
            price: self.price_breakdown(),
            promo_code: self.promo.as_ref().map(|p| p.code.clone()),
            currency: self.config.currency.clone(),
        };
        info!(
            flavor = %receipt.flavor,
            quantity = receipt.quantity,
            total = %receipt.price.total,
            "order placed"
        );
        Ok(receipt)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn active_flavor(&self) -> &'a Flavor {
        self.flavor
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn has_nut_allergy(&self) -> bool {
        self.has_nut_allergy
    }

    pub fn membership(&self) -> MembershipTier {
        self.membership
    }

    pub fn applied_promo(&self) -> Option<&AppliedPromo> {
        self.promo.as_ref()
    }

    pub fn promo_input(&self) -> &str {
        &self.promo_input
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscribed_email.is_some()
    }

    pub fn submissions(&self) -> u32 {
        self.submissions
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    pub fn is_allergenic(&self, id: &str) -> bool {
        self.allergens.contains(id)
    }

    /// Selected ids, sorted.
    pub fn selected_ids(&self) -> Vec<&str> {
        self.selected.iter().map(String::as_str).collect()
    }

    pub fn allergenic_ids(&self) -> Vec<&str> {
        self.allergens.iter().map(String::as_str).collect()
    }

    /// Selected ingredients in catalog order.
    pub fn selected_ingredients(&self) -> Vec<&'a Ingredient> {
        self.catalog
            .ingredients()
            .iter()
            .filter(|i| self.selected.contains(&i.id))
            .collect()
    }

    pub fn nutrition_per_bar(&self) -> NutritionTotals {
        aggregator::bar_nutrition(
            self.catalog,
            &self.selected,
            self.flavor,
            self.config.nutrition_mode,
        )
    }

    pub fn nutrition_for_quantity(&self) -> NutritionTotals {
        self.nutrition_per_bar().scaled(self.quantity)
    }

    pub fn macro_split(&self) -> MacroSplit {
        let n = self.nutrition_per_bar();
        macro_percentages(n.protein, n.carbs, n.fats)
    }

    /// Discount fraction for the order: the better of the promo and the
    /// membership tier, clamped to [0, 1].
    pub fn discount_fraction(&self) -> Decimal {
        let promo = self.promo.as_ref().map(|p| p.discount).unwrap_or(Decimal::ZERO);
        promo
            .max(self.membership.discount())
            .clamp(Decimal::ZERO, Decimal::ONE)
    }

    pub fn free_shipping_threshold(&self) -> u32 {
        self.membership
            .shipping_threshold(self.config.free_shipping_threshold)
    }

    pub fn price_breakdown(&self) -> PriceBreakdown {
        let ingredients_cost = aggregator::ingredients_cost(
            self.catalog,
            &self.selected,
            self.flavor,
            self.config.pricing_mode,
        );
        let price_per_bar = self.config.base_price + ingredients_cost;
        let totals = aggregator::order_totals(
            price_per_bar,
            self.quantity,
            self.free_shipping_threshold(),
            self.config.shipping_fee,
            self.discount_fraction(),
        );

        PriceBreakdown {
            base_price: self.config.base_price,
            ingredients_cost,
            price_per_bar,
            quantity: self.quantity,
            subtotal: totals.subtotal,
            shipping: totals.shipping,
            discount: totals.discount,
            total: totals.total,
        }
    }

    pub fn eligibility(&self) -> Eligibility {
        rules::evaluate(self.catalog, &self.selected_ids(), self.has_nut_allergy)
    }

    pub fn can_checkout(&self) -> bool {
        self.eligibility().can_checkout()
    }

    /// Human-readable reasons checkout is blocked. Empty when eligible.
    pub fn unmet_requirements(&self) -> Vec<Requirement> {
        self.eligibility().unmet()
    }

    /// Calorie calculator based on the current bar.
    pub fn bars_needed(&self, daily_goal: &str, current_intake: &str) -> Option<u32> {
        bars_needed_from_input(self.nutrition_per_bar().calories, daily_goal, current_intake)
    }
}
