use rust_decimal::Decimal;

use crate::engine::constants::promo_discount;
use crate::error::{GainflowError, Result};

/// A validated promo code and its discount fraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedPromo {
    pub code: String,
    pub discount: Decimal,
}

/// Trim and uppercase user input.
pub fn normalize_code(input: &str) -> String {
    input.trim().to_uppercase()
}

/// Check a promo code against the known list and the subscription gate.
///
/// Checks run in order: empty input, unknown code, missing subscription.
pub fn validate_promo(
    input: &str,
    subscribed: bool,
    requires_subscription: bool,
) -> Result<AppliedPromo> {
    let code = normalize_code(input);
    if code.is_empty() {
        return Err(GainflowError::MissingPromoCode);
    }

    let discount =
        promo_discount(&code).ok_or_else(|| GainflowError::InvalidPromoCode(code.clone()))?;

    if requires_subscription && !subscribed {
        return Err(GainflowError::SubscribeFirst);
    }

    Ok(AppliedPromo { code, discount })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_is_case_insensitive_and_trimmed() {
        let upper = validate_promo("FIRST10", true, true).unwrap();
        let lower = validate_promo("  first10 ", true, true).unwrap();
        assert_eq!(upper, lower);
        assert_eq!(lower.code, "FIRST10");
        assert_eq!(lower.discount, Decimal::new(10, 2));
    }

    #[test]
    fn test_blank_code_is_missing() {
        assert!(matches!(
            validate_promo("   ", true, true),
            Err(GainflowError::MissingPromoCode)
        ));
    }

    #[test]
    fn test_unknown_code_is_invalid() {
        match validate_promo("summer50", true, true) {
            Err(GainflowError::InvalidPromoCode(code)) => assert_eq!(code, "SUMMER50"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_subscription_gate() {
        assert!(matches!(
            validate_promo("FIRST10", false, true),
            Err(GainflowError::SubscribeFirst)
        ));
        assert!(validate_promo("FIRST10", false, false).is_ok());
    }
}
