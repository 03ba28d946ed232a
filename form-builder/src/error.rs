use form_builder_types::{FieldErrors, TemplateId};

/// Error type for reading or writing a storage slot.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Filesystem failure while accessing a slot.
    #[error("I/O error on slot '{slot}': {source}")]
    Io {
        slot: String,
        #[source]
        source: std::io::Error,
    },

    /// The backend refused the operation (quota exceeded, read-only, ...).
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// Failure of a custom storage backend.
    #[error("Backend error: {0}")]
    Backend(#[from] anyhow::Error),
}

impl StorageError {
    /// Create a backend error from any error type.
    pub fn backend(err: impl Into<anyhow::Error>) -> Self {
        Self::Backend(err.into())
    }
}

/// Error type for snapshot persistence.
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("Could not encode slot '{slot}': {source}")]
    Encode {
        slot: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Could not decode slot '{slot}': {source}")]
    Decode {
        slot: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Why a form submission was not recorded.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// No template with this id exists (any more).
    #[error("Unknown template: {0}")]
    UnknownTemplate(TemplateId),

    /// At least one field failed validation.
    #[error("{} field(s) failed validation", .0.len())]
    Invalid(FieldErrors),
}

impl SubmitError {
    /// Get the per-field errors, if this is a validation failure.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Invalid(errors) => Some(errors),
            Self::UnknownTemplate(_) => None,
        }
    }
}
