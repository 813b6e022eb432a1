//! Todo input validation
//!
//! Request fields arrive as raw JSON values so a wrong type gets the same
//! explicit message as a missing field.

use serde_json::Value;

use super::ValidationError;

const TITLE_REQUIRED: ValidationError = ValidationError::Required {
    field: "title",
    expected: "a non-empty string",
};

/// Validated todo title: trimmed and never blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TodoTitle(String);

impl TodoTitle {
    /// Create a title, trimming surrounding whitespace.
    ///
    /// # Example
    /// ```
    /// use todoctl_server::models::TodoTitle;
    ///
    /// assert_eq!(TodoTitle::new(" Buy milk ").unwrap().as_str(), "Buy milk");
    /// assert!(TodoTitle::new("   ").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(TITLE_REQUIRED);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Validate the `title` field of a create request.
    pub fn from_json(value: &Value) -> Result<Self, ValidationError> {
        match value {
            Value::String(s) => Self::new(s),
            _ => Err(TITLE_REQUIRED),
        }
    }

    /// Get the title as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Validate the `completed` field of an update request: strictly a JSON boolean.
pub fn completed_flag(value: &Value) -> Result<bool, ValidationError> {
    value.as_bool().ok_or(ValidationError::InvalidType {
        field: "completed",
        expected: "a boolean",
    })
}
