use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::engine::constants::{
    BASE_BAR_PRICE, CURRENCY_SYMBOL, FREE_SHIPPING_THRESHOLD, SHIPPING_FEE,
};
use crate::error::{GainflowError, Result};

/// How ingredient prices are added to the base bar price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PricingMode {
    /// Every selected ingredient is charged.
    FlatAdd,
    /// Only ingredients outside the active flavor's recipe are charged.
    #[default]
    Delta,
}

/// How per-bar calories are derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NutritionMode {
    /// Sum of the selected ingredients.
    #[default]
    Recipe,
    /// Flavor base calories plus the selected ingredients.
    FlavorBase,
}

/// Runtime-configurable pricing and policy knobs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub pricing_mode: PricingMode,
    pub nutrition_mode: NutritionMode,
    pub base_price: Decimal,
    pub shipping_fee: Decimal,
    pub free_shipping_threshold: u32,
    pub currency: String,

    /// Promo codes are only accepted after a newsletter subscription.
    pub promo_requires_subscription: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            pricing_mode: PricingMode::default(),
            nutrition_mode: NutritionMode::default(),
            base_price: BASE_BAR_PRICE,
            shipping_fee: SHIPPING_FEE,
            free_shipping_threshold: FREE_SHIPPING_THRESHOLD,
            currency: CURRENCY_SYMBOL.to_string(),
            promo_requires_subscription: true,
        }
    }
}

impl EngineConfig {
    /// Settings of the first storefront design: every ingredient charged,
    /// flavor base calories, free shipping from 12 bars, no subscription gate.
    pub fn first_design() -> Self {
        Self {
            pricing_mode: PricingMode::FlatAdd,
            nutrition_mode: NutritionMode::FlavorBase,
            free_shipping_threshold: 12,
            promo_requires_subscription: false,
            ..Default::default()
        }
    }

    /// Reject values that would make totals meaningless.
    pub fn validate(&self) -> Result<()> {
        if self.base_price.is_sign_negative() {
            return Err(GainflowError::InvalidInput(
                "base_price must be non-negative".to_string(),
            ));
        }
        if self.shipping_fee.is_sign_negative() {
            return Err(GainflowError::InvalidInput(
                "shipping_fee must be non-negative".to_string(),
            ));
        }
        if self.currency.trim().is_empty() {
            return Err(GainflowError::InvalidInput(
                "currency must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Format an amount with the configured currency symbol.
    pub fn money(&self, amount: Decimal) -> String {
        format!("{}{:.2}", self.currency, amount)
    }
}

/// Load engine settings from a JSON file. Missing fields take defaults.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<EngineConfig> {
    let content = fs::read_to_string(path)?;
    let config: EngineConfig = serde_json::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_partial_config_keeps_defaults() {
        let json = r#"{ "pricing_mode": "flat-add", "free_shipping_threshold": 12, "currency": "€" }"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.pricing_mode, PricingMode::FlatAdd);
        assert_eq!(config.free_shipping_threshold, 12);
        assert_eq!(config.currency, "€");
        assert_eq!(config.base_price, BASE_BAR_PRICE);
        assert_eq!(config.nutrition_mode, NutritionMode::Recipe);
        assert!(config.promo_requires_subscription);
    }

    #[test]
    fn test_load_rejects_negative_fee() {
        let json = r#"{ "shipping_fee": "-1.00" }"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        assert!(matches!(
            load_config(file.path()),
            Err(GainflowError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_load_rejects_unknown_pricing_mode() {
        let json = r#"{ "pricing_mode": "surge" }"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        assert!(matches!(load_config(file.path()), Err(GainflowError::Json(_))));
    }

    #[test]
    fn test_money_formatting() {
        let config = EngineConfig::default();
        assert_eq!(config.money(Decimal::new(2994, 2)), "$29.94");
        assert_eq!(config.money(Decimal::new(3, 0)), "$3.00");
    }
}
