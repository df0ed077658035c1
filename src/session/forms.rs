use crate::error::{GainflowError, Result};

/// General contact form.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Request for a call back from the nutrition team.
#[derive(Debug, Clone, Default)]
pub struct NutritionistRequest {
    pub name: String,
    pub email: String,
    pub goal: String,
}

fn required(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(GainflowError::MissingField(field));
    }
    Ok(())
}

impl ContactForm {
    /// Every field is required; the first blank one is reported.
    pub fn validate(&self) -> Result<()> {
        required("name", &self.name)?;
        required("email", &self.email)?;
        required("message", &self.message)
    }
}

impl NutritionistRequest {
    pub fn validate(&self) -> Result<()> {
        required("name", &self.name)?;
        required("email", &self.email)?;
        required("goal", &self.goal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_blank_field_is_reported() {
        let form = ContactForm {
            name: "Sam".to_string(),
            email: "  ".to_string(),
            message: String::new(),
        };
        assert!(matches!(
            form.validate(),
            Err(GainflowError::MissingField("email"))
        ));
    }

    #[test]
    fn test_complete_request_is_valid() {
        let req = NutritionistRequest {
            name: "Sam".to_string(),
            email: "sam@example.com".to_string(),
            goal: "Gain 5kg".to_string(),
        };
        assert!(req.validate().is_ok());
    }
}
