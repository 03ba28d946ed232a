/// A per-field validation failure, shown next to the offending field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A required input was left empty (or a required checkbox unchecked).
    #[error("This field is required")]
    Required,

    /// A number field holds text that is not a number.
    #[error("Please enter a valid number")]
    InvalidNumber,
}

impl ValidationError {
    /// Check if this error is a missing required value.
    pub fn is_required(&self) -> bool {
        matches!(self, Self::Required)
    }
}

/// Error returned when parsing an unknown field type name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown field type: {0}")]
pub struct ParseFieldKindError(pub String);
