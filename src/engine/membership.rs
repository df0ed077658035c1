use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::engine::constants::{
    ELITE_MEMBER_DISCOUNT, FREE_MEMBER_DISCOUNT, PREMIUM_FREE_SHIPPING_THRESHOLD,
    PREMIUM_MEMBER_DISCOUNT,
};

/// Membership level chosen by the customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MembershipTier {
    #[default]
    None,
    Free,
    Premium,
    Elite,
}

impl MembershipTier {
    pub const ALL: [MembershipTier; 4] = [
        MembershipTier::None,
        MembershipTier::Free,
        MembershipTier::Premium,
        MembershipTier::Elite,
    ];

    /// Discount on subtotal granted by the tier.
    pub fn discount(&self) -> Decimal {
        match self {
            MembershipTier::None => Decimal::ZERO,
            MembershipTier::Free => FREE_MEMBER_DISCOUNT,
            MembershipTier::Premium => PREMIUM_MEMBER_DISCOUNT,
            MembershipTier::Elite => ELITE_MEMBER_DISCOUNT,
        }
    }

    /// Free-shipping threshold after applying the tier's perk.
    pub fn shipping_threshold(&self, configured: u32) -> u32 {
        match self {
            MembershipTier::None | MembershipTier::Free => configured,
            MembershipTier::Premium => configured.min(PREMIUM_FREE_SHIPPING_THRESHOLD),
            MembershipTier::Elite => 0,
        }
    }

    /// Monthly fee shown in the membership dialog, in currency units.
    pub fn monthly_fee(&self) -> Decimal {
        match self {
            MembershipTier::None | MembershipTier::Free => Decimal::ZERO,
            MembershipTier::Premium => Decimal::new(499, 2),
            MembershipTier::Elite => Decimal::new(999, 2),
        }
    }

    pub fn parse(s: &str) -> Option<MembershipTier> {
        match s.trim().to_lowercase().as_str() {
            "none" => Some(MembershipTier::None),
            "free" => Some(MembershipTier::Free),
            "premium" => Some(MembershipTier::Premium),
            "elite" => Some(MembershipTier::Elite),
            _ => None,
        }
    }
}

impl fmt::Display for MembershipTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MembershipTier::None => "No membership",
            MembershipTier::Free => "Free Member",
            MembershipTier::Premium => "Premium Member",
            MembershipTier::Elite => "Elite Member",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discounts_increase_with_tier() {
        let discounts: Vec<Decimal> = MembershipTier::ALL.iter().map(|t| t.discount()).collect();
        assert!(discounts.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(MembershipTier::Elite.discount(), Decimal::new(25, 2));
    }

    #[test]
    fn test_shipping_threshold_perks() {
        assert_eq!(MembershipTier::Free.shipping_threshold(12), 12);
        assert_eq!(MembershipTier::Premium.shipping_threshold(12), 6);
        assert_eq!(MembershipTier::Premium.shipping_threshold(4), 4);
        assert_eq!(MembershipTier::Elite.shipping_threshold(12), 0);
    }

    #[test]
    fn test_parse() {
        assert_eq!(MembershipTier::parse(" Elite"), Some(MembershipTier::Elite));
        assert_eq!(MembershipTier::parse("gold"), None);
    }
}
