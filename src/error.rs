use thiserror::Error;

use crate::engine::rules::Requirement;

#[derive(Debug, Error)]
pub enum GainflowError {
    #[error("Ingredient not found: {id}{}", did_you_mean(.suggestion))]
    IngredientNotFound {
        id: String,
        suggestion: Option<String>,
    },

    #[error("Flavor not found: {name}{}", did_you_mean(.suggestion))]
    FlavorNotFound {
        name: String,
        suggestion: Option<String>,
    },

    #[error("{0} is on your allergy list and cannot be added")]
    AllergyConflict(String),

    #[error("Please enter a promo code")]
    MissingPromoCode,

    #[error("Promo code {0} is not valid")]
    InvalidPromoCode(String),

    #[error("Subscribe to the newsletter first to unlock promo codes")]
    SubscribeFirst,

    #[error("Please fill in the {0} field")]
    MissingField(&'static str),

    #[error("Checkout blocked: {}", list_requirements(.0))]
    CheckoutBlocked(Vec<Requirement>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

fn did_you_mean(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(s) => format!(" (did you mean '{}'?)", s),
        None => String::new(),
    }
}

fn list_requirements(unmet: &[Requirement]) -> String {
    unmet
        .iter()
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

pub type Result<T> = std::result::Result<T, GainflowError>;
