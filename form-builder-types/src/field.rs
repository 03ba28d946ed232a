use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{FieldId, ParseFieldKindError};

/// Options given to a freshly added enum field.
pub const DEFAULT_ENUM_OPTIONS: [&str; 2] = ["Option 1", "Option 2"];

/// The kind of a field, determining how it is displayed and validated.
///
/// The set is closed. Heading kinds are display-only rows; the remaining kinds
/// produce input and appear in submissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldKind {
    /// Top-level heading.
    #[serde(rename = "label-h1")]
    LabelH1,

    /// Second-level heading.
    #[serde(rename = "label-h2")]
    LabelH2,

    /// Third-level heading.
    #[serde(rename = "label-h3")]
    LabelH3,

    /// Single-line text input.
    #[serde(rename = "text")]
    Text,

    /// Numeric input.
    #[serde(rename = "number")]
    Number,

    /// Checkbox.
    #[serde(rename = "boolean")]
    Boolean,

    /// Dropdown over a list of options.
    #[serde(rename = "enum")]
    Enum,
}

impl FieldKind {
    /// Every kind, in the order a builder offers them.
    pub const ALL: [FieldKind; 7] = [
        Self::LabelH1,
        Self::LabelH2,
        Self::LabelH3,
        Self::Text,
        Self::Number,
        Self::Boolean,
        Self::Enum,
    ];

    /// The persisted type name, e.g. `"label-h1"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LabelH1 => "label-h1",
            Self::LabelH2 => "label-h2",
            Self::LabelH3 => "label-h3",
            Self::Text => "text",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Enum => "enum",
        }
    }

    /// Human-readable name for kind pickers.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::LabelH1 => "Label - H1",
            Self::LabelH2 => "Label - H2",
            Self::LabelH3 => "Label - H3",
            Self::Text => "Text Input",
            Self::Number => "Number Input",
            Self::Boolean => "Boolean (Checkbox)",
            Self::Enum => "Enum (Dropdown)",
        }
    }

    /// Check if this kind produces a value (text, number, boolean, enum).
    pub fn is_input(self) -> bool {
        !self.is_label()
    }

    /// Check if this kind is a display-only heading.
    pub fn is_label(self) -> bool {
        matches!(self, Self::LabelH1 | Self::LabelH2 | Self::LabelH3)
    }

    /// Heading level (1 to 3) for label kinds.
    pub fn heading_level(self) -> Option<u8> {
        match self {
            Self::LabelH1 => Some(1),
            Self::LabelH2 => Some(2),
            Self::LabelH3 => Some(3),
            _ => None,
        }
    }

    /// Label given to a new field of this kind, e.g. `"Text Field"`.
    pub fn default_label(self) -> String {
        let name = self.as_str();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => format!("{}{} Field", first.to_ascii_uppercase(), chars.as_str()),
            None => "Field".to_string(),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKind {
    type Err = ParseFieldKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ParseFieldKindError(s.to_string()))
    }
}

/// Split a comma-separated option list, trimming entries and dropping empty ones.
///
/// ```
/// use form_builder_types::parse_options;
///
/// assert_eq!(parse_options(" Red, Blue,,Green "), vec!["Red", "Blue", "Green"]);
/// ```
pub fn parse_options(csv: &str) -> Vec<String> {
    csv.split(',')
        .map(str::trim)
        .filter(|opt| !opt.is_empty())
        .map(str::to_string)
        .collect()
}

/// A field before it is added to a section (no id yet).
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDraft {
    pub kind: FieldKind,
    pub label: String,
    pub required: bool,
    /// Only kept for enum drafts.
    pub options: Vec<String>,
}

impl FieldDraft {
    /// Create a draft with the given kind and label.
    pub fn new(kind: FieldKind, label: impl Into<String>) -> Self {
        Self {
            kind,
            label: label.into(),
            required: false,
            options: Vec::new(),
        }
    }

    /// The draft a builder produces when a kind is picked: a generated label,
    /// not required, and two placeholder options for enums.
    pub fn for_kind(kind: FieldKind) -> Self {
        let mut draft = Self::new(kind, kind.default_label());
        if kind == FieldKind::Enum {
            draft.options = DEFAULT_ENUM_OPTIONS.iter().map(|s| s.to_string()).collect();
        }
        draft
    }

    /// Mark the field as required.
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Set the enum options.
    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }
}

/// A partial set of field attributes to merge onto an existing field.
///
/// Unset attributes are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldUpdate {
    pub label: Option<String>,
    pub required: Option<bool>,
    /// Ignored for non-enum fields.
    pub options: Option<Vec<String>>,
}

impl FieldUpdate {
    /// Create an empty update.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a new label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the required flag.
    pub fn required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    /// Replace the enum options.
    pub fn options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = Some(options.into_iter().map(Into::into).collect());
        self
    }

    /// Replace the enum options from a comma-separated list.
    pub fn with_options_csv(mut self, csv: &str) -> Self {
        self.options = Some(parse_options(csv));
        self
    }

    /// Check if the update sets nothing.
    pub fn is_empty(&self) -> bool {
        self.label.is_none() && self.required.is_none() && self.options.is_none()
    }
}

/// A single question or display row within a section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    id: FieldId,

    #[serde(rename = "type")]
    kind: FieldKind,

    label: String,

    #[serde(default)]
    required: bool,

    /// `Some` exactly when `kind` is `Enum`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    options: Option<Vec<String>>,
}

impl Field {
    /// Create a field from a draft under a freshly generated id.
    pub fn new(draft: FieldDraft) -> Self {
        Self::with_id(FieldId::generate(), draft)
    }

    /// Create a field from a draft under the given id.
    pub fn with_id(id: FieldId, draft: FieldDraft) -> Self {
        let options = (draft.kind == FieldKind::Enum).then_some(draft.options);
        Self {
            id,
            kind: draft.kind,
            label: draft.label,
            required: draft.required,
            options,
        }
    }

    /// Get the field id.
    pub fn id(&self) -> &FieldId {
        &self.id
    }

    /// Get the field kind.
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Get the label text.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether a value must be entered. Always `false` for headings.
    pub fn is_required(&self) -> bool {
        self.required && self.kind.is_input()
    }

    /// Get the enum options (empty for every other kind).
    pub fn options(&self) -> &[String] {
        self.options.as_deref().unwrap_or_default()
    }

    /// Merge a partial update onto this field. Returns whether anything changed.
    pub fn apply(&mut self, update: &FieldUpdate) -> bool {
        let before = self.clone();
        if let Some(label) = &update.label {
            self.label.clone_from(label);
        }
        if let Some(required) = update.required {
            self.required = required;
        }
        if let Some(options) = &update.options
            && self.kind == FieldKind::Enum
        {
            self.options = Some(options.clone());
        }
        *self != before
    }

    /// Restore the options invariant on data that did not come through a constructor.
    pub fn normalize(&mut self) {
        if self.kind == FieldKind::Enum {
            self.options.get_or_insert_with(Vec::new);
        } else {
            self.options = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names_round_trip() {
        for kind in FieldKind::ALL {
            assert_eq!(kind.as_str().parse::<FieldKind>().unwrap(), kind);
            assert_eq!(
                serde_json::to_string(&kind).unwrap(),
                format!("\"{}\"", kind.as_str())
            );
        }
        assert!("checkbox".parse::<FieldKind>().is_err());
    }

    #[test]
    fn default_labels() {
        assert_eq!(FieldKind::Text.default_label(), "Text Field");
        assert_eq!(FieldKind::LabelH2.default_label(), "Label-h2 Field");
        assert_eq!(FieldKind::Enum.default_label(), "Enum Field");
    }

    #[test]
    fn draft_for_kind() {
        let draft = FieldDraft::for_kind(FieldKind::Enum);
        assert_eq!(draft.options, vec!["Option 1", "Option 2"]);
        assert!(!draft.required);

        assert!(FieldDraft::for_kind(FieldKind::Number).options.is_empty());
    }

    #[test]
    fn only_enum_fields_carry_options() {
        let text = Field::new(FieldDraft::new(FieldKind::Text, "Name").with_options(["x"]));
        assert!(text.options().is_empty());
        let json = serde_json::to_value(&text).unwrap();
        assert!(json.get("options").is_none());

        let color = Field::new(FieldDraft::new(FieldKind::Enum, "Color"));
        let json = serde_json::to_value(&color).unwrap();
        assert_eq!(json["options"], serde_json::json!([]));
    }

    #[test]
    fn apply_merges_partial_update() {
        let mut field = Field::new(FieldDraft::new(FieldKind::Enum, "Color"));

        assert!(field.apply(&FieldUpdate::new().required(true).with_options_csv("Red, Blue")));
        assert_eq!(field.label(), "Color");
        assert!(field.is_required());
        assert_eq!(field.options(), ["Red", "Blue"]);

        assert!(!field.apply(&FieldUpdate::new()));
    }

    #[test]
    fn apply_ignores_options_on_non_enum() {
        let mut field = Field::new(FieldDraft::new(FieldKind::Number, "Age"));
        assert!(!field.apply(&FieldUpdate::new().options(["1", "2"])));
        assert!(field.options().is_empty());
    }

    #[test]
    fn headings_are_never_required() {
        let field = Field::new(FieldDraft::new(FieldKind::LabelH1, "Intro").required(true));
        assert!(!field.is_required());
    }

    #[test]
    fn normalize_restores_options_invariant() {
        let mut field: Field = serde_json::from_str(
            r#"{"id":"f1","type":"text","label":"Name","options":["stray"]}"#,
        )
        .unwrap();
        field.normalize();
        assert_eq!(field.options, None);
        assert!(!field.required);

        let mut field: Field =
            serde_json::from_str(r#"{"id":"f2","type":"enum","label":"Color"}"#).unwrap();
        field.normalize();
        assert_eq!(field.options, Some(Vec::new()));
    }
}
