use std::fmt;

use serde::Serialize;

use crate::catalog::Catalog;
use crate::engine::constants::{MIN_INGREDIENTS, NUT_BUTTERS, PURE_NUTS, SWEETENERS};

/// One checkout requirement. Displayed as the reason it is unmet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Requirement {
    MinimumIngredients,
    BaseIngredient,
    Sweetener,
    NutAndNutButter,
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Requirement::MinimumIngredients => {
                write!(f, "select at least {} ingredients", MIN_INGREDIENTS)
            }
            Requirement::BaseIngredient => f.write_str("include at least one base ingredient"),
            Requirement::Sweetener => f.write_str("include a sweetener (honey or maple syrup)"),
            Requirement::NutAndNutButter => f.write_str(
                "include both whole nuts and a nut butter, or declare a nut allergy",
            ),
        }
    }
}

/// Result of evaluating every checkout rule against a selection.
///
/// Each sub-condition is exposed so the caller can say exactly what is
/// missing. Evaluated on demand, never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Eligibility {
    pub has_enough_ingredients: bool,
    pub has_base_ingredient: bool,
    pub has_required_sweetener: bool,
    pub has_nut_and_nut_butter: bool,
    pub has_nut_allergy: bool,
}

impl Eligibility {
    pub fn can_checkout(&self) -> bool {
        self.has_enough_ingredients
            && self.has_base_ingredient
            && self.has_required_sweetener
            && (self.has_nut_allergy || self.has_nut_and_nut_butter)
    }

    /// Unmet requirements in display order. Empty iff `can_checkout`.
    pub fn unmet(&self) -> Vec<Requirement> {
        let mut unmet = Vec::new();
        if !self.has_enough_ingredients {
            unmet.push(Requirement::MinimumIngredients);
        }
        if !self.has_base_ingredient {
            unmet.push(Requirement::BaseIngredient);
        }
        if !self.has_required_sweetener {
            unmet.push(Requirement::Sweetener);
        }
        if !self.has_nut_allergy && !self.has_nut_and_nut_butter {
            unmet.push(Requirement::NutAndNutButter);
        }
        unmet
    }
}

fn contains_any<S: AsRef<str>>(selected: &[S], set: &[&str]) -> bool {
    selected.iter().any(|id| set.contains(&id.as_ref()))
}

/// Evaluate the checkout rules for a selection.
pub fn evaluate<S: AsRef<str>>(
    catalog: &Catalog,
    selected: &[S],
    has_nut_allergy: bool,
) -> Eligibility {
    let has_base_ingredient = selected
        .iter()
        .filter_map(|id| catalog.get_ingredient(id.as_ref()))
        .any(|ing| ing.is_base);

    Eligibility {
        has_enough_ingredients: selected.len() >= MIN_INGREDIENTS,
        has_base_ingredient,
        has_required_sweetener: contains_any(selected, SWEETENERS),
        has_nut_and_nut_butter: contains_any(selected, PURE_NUTS)
            && contains_any(selected, NUT_BUTTERS),
        has_nut_allergy,
    }
}
