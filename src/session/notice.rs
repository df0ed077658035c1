use std::fmt;

use serde::Serialize;

use crate::error::GainflowError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Info,
    Error,
}

/// A toast-style message for the presentation layer.
///
/// Notices are returned from commands and never stored in the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            title: title.into(),
            message: message.into(),
        }
    }

    /// Turn a rejected command into an error notice.
    pub fn from_error(err: &GainflowError) -> Self {
        let title = match err {
            GainflowError::AllergyConflict(_) => "Allergy conflict",
            GainflowError::MissingPromoCode
            | GainflowError::InvalidPromoCode(_)
            | GainflowError::SubscribeFirst => "Promo code not applied",
            GainflowError::MissingField(_) => "Form incomplete",
            GainflowError::CheckoutBlocked(_) => "Not ready to order",
            GainflowError::IngredientNotFound { .. } | GainflowError::FlavorNotFound { .. } => {
                "Not found"
            }
            _ => "Error",
        };
        Self::error(title, err.to_string())
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.message)
    }
}
