use std::fmt;

use serde::{Deserialize, Serialize};

/// Declares an opaque, string-backed document identifier.
///
/// Ids are generated once when the entity is created and never change,
/// so they stay stable across reorders and reloads.
macro_rules! document_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap an existing id string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Generate a fresh, collision-resistant id.
            pub fn generate() -> Self {
                Self(uuid::Uuid::new_v4().simple().to_string())
            }

            /// Get the id as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self::new(s)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self::new(s)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

document_id! {
    /// Identifies a `Template` within a store.
    TemplateId
}

document_id! {
    /// Identifies a `Section`. Unique across all templates, so sections can be
    /// looked up without knowing their template.
    SectionId
}

document_id! {
    /// Identifies a `Field`. Also the key of a field's value in `FormValues`.
    FieldId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_distinct() {
        let a = FieldId::generate();
        let b = FieldId::generate();
        assert_ne!(a, b);
        assert_eq!(a.as_str().len(), 32);
    }

    #[test]
    fn display() {
        let id = SectionId::new("basics");
        assert_eq!(format!("{id}"), "basics");
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = TemplateId::from("t1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"t1\"");

        let back: TemplateId = serde_json::from_str("\"t1\"").unwrap();
        assert_eq!(back, id);
    }
}
