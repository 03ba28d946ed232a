use serde::{Deserialize, Serialize};

/// A single value entered into a generated form.
///
/// This is the value stored in `FormValues` for each input field. On disk it is
/// a bare JSON string, number or boolean.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// A checkbox state (from Boolean fields).
    Bool(bool),

    /// A numeric value supplied already parsed.
    Number(f64),

    /// Text as typed (from Text and Number inputs) or the chosen option (from Enum fields).
    Text(String),
}

impl FieldValue {
    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as a number.
    ///
    /// Text is parsed after trimming surrounding whitespace.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse().ok(),
            Self::Bool(_) => None,
        }
    }

    /// Try to get this value as a bool.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Whether this value counts as "not filled in" for a required field.
    ///
    /// Empty text and an unchecked checkbox are blank; numbers never are.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Text(s) => s.is_empty(),
            Self::Bool(b) => !b,
            Self::Number(_) => false,
        }
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

impl From<i32> for FieldValue {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untagged_json_shapes() {
        let values: Vec<FieldValue> = serde_json::from_str(r#"["Alice", 42, true]"#).unwrap();
        assert_eq!(
            values,
            vec![
                FieldValue::Text("Alice".into()),
                FieldValue::Number(42.0),
                FieldValue::Bool(true),
            ]
        );
    }

    #[test]
    fn blankness() {
        assert!(FieldValue::from("").is_blank());
        assert!(!FieldValue::from(" ").is_blank());
        assert!(FieldValue::from(false).is_blank());
        assert!(!FieldValue::from(0).is_blank());
    }

    #[test]
    fn text_as_number() {
        assert_eq!(FieldValue::from(" 42 ").as_number(), Some(42.0));
        assert_eq!(FieldValue::from("abc").as_number(), None);
        assert_eq!(FieldValue::from(true).as_number(), None);
    }
}
