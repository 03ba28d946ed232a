use std::collections::BTreeMap;

use crate::{Field, FieldId, FieldKind, FieldValue, FormValues, Template, ValidationError};

/// Validate the value entered for a single field.
///
/// Headings never fail. A required input fails when the value is missing or
/// blank, and a number input fails when its non-empty text is not a finite
/// number. A non-finite `FieldValue::Number` fails on any input.
pub fn validate_field(field: &Field, value: Option<&FieldValue>) -> Result<(), ValidationError> {
    if field.kind().is_label() {
        return Ok(());
    }

    // Not representable in JSON.
    if let Some(FieldValue::Number(n)) = value
        && !n.is_finite()
    {
        return Err(ValidationError::InvalidNumber);
    }

    if field.is_required() && value.is_none_or(FieldValue::is_blank) {
        return Err(ValidationError::Required);
    }

    if field.kind() == FieldKind::Number
        && let Some(value) = value
        && !is_numeric(value)
    {
        return Err(ValidationError::InvalidNumber);
    }

    Ok(())
}

fn is_numeric(value: &FieldValue) -> bool {
    match value {
        FieldValue::Number(n) => n.is_finite(),
        FieldValue::Text(s) if s.trim().is_empty() => true,
        FieldValue::Text(s) => s.trim().parse::<f64>().is_ok_and(f64::is_finite),
        FieldValue::Bool(_) => true,
    }
}

/// Validate every field of every section of `template`.
pub fn validate_template(template: &Template, values: &FormValues) -> FieldErrors {
    template
        .fields()
        .filter_map(|field| {
            validate_field(field, values.get(field.id()))
                .err()
                .map(|err| (field.id().clone(), err))
        })
        .collect()
}

/// Validation failures of a whole form, keyed by field id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors {
    errors: BTreeMap<FieldId, ValidationError>,
}

impl FieldErrors {
    /// Get the error for a field, if any.
    pub fn get(&self, field: &FieldId) -> Option<ValidationError> {
        self.errors.get(field).copied()
    }

    /// Record an error for a field.
    pub fn insert(&mut self, field: FieldId, error: ValidationError) {
        self.errors.insert(field, error);
    }

    /// Forget the error for a field (e.g. after the user edits it).
    pub fn clear_field(&mut self, field: &FieldId) -> Option<ValidationError> {
        self.errors.remove(field)
    }

    /// Check if the form passed.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of failing fields.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Iterate over the failing fields, ordered by id.
    pub fn iter(&self) -> impl Iterator<Item = (&FieldId, ValidationError)> {
        self.errors.iter().map(|(id, err)| (id, *err))
    }

    /// The `{fieldId: message}` map handed to a presentation layer.
    pub fn messages(&self) -> BTreeMap<FieldId, String> {
        self.errors
            .iter()
            .map(|(id, err)| (id.clone(), err.to_string()))
            .collect()
    }
}

impl FromIterator<(FieldId, ValidationError)> for FieldErrors {
    fn from_iter<I: IntoIterator<Item = (FieldId, ValidationError)>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FieldDraft, Section};

    fn field(kind: FieldKind, required: bool) -> Field {
        Field::new(FieldDraft::new(kind, "Question").required(required))
    }

    #[test]
    fn required_text() {
        let name = field(FieldKind::Text, true);
        assert_eq!(
            validate_field(&name, Some(&"".into())),
            Err(ValidationError::Required)
        );
        assert_eq!(validate_field(&name, None), Err(ValidationError::Required));
        assert_eq!(validate_field(&name, Some(&"x".into())), Ok(()));
    }

    #[test]
    fn number_parsing() {
        let age = field(FieldKind::Number, false);
        assert_eq!(
            validate_field(&age, Some(&"abc".into())),
            Err(ValidationError::InvalidNumber)
        );
        assert_eq!(
            validate_field(&age, Some(&"NaN".into())),
            Err(ValidationError::InvalidNumber)
        );
        assert_eq!(validate_field(&age, Some(&"42".into())), Ok(()));
        assert_eq!(validate_field(&age, Some(&" -1.5e3 ".into())), Ok(()));
        assert_eq!(validate_field(&age, Some(&"".into())), Ok(()));
        assert_eq!(validate_field(&age, None), Ok(()));
        assert_eq!(validate_field(&age, Some(&7.into())), Ok(()));
    }

    #[test]
    fn infinite_numbers_are_rejected() {
        let age = field(FieldKind::Number, false);
        assert_eq!(
            validate_field(&age, Some(&"inf".into())),
            Err(ValidationError::InvalidNumber)
        );
        assert_eq!(
            validate_field(&age, Some(&"-Infinity".into())),
            Err(ValidationError::InvalidNumber)
        );
        assert_eq!(
            validate_field(&age, Some(&f64::INFINITY.into())),
            Err(ValidationError::InvalidNumber)
        );
        assert_eq!(validate_field(&age, Some(&"1e308".into())), Ok(()));
    }

    #[test]
    fn non_finite_values_fail_on_any_input() {
        for kind in [FieldKind::Text, FieldKind::Enum, FieldKind::Boolean] {
            let input = field(kind, false);
            assert_eq!(
                validate_field(&input, Some(&f64::NAN.into())),
                Err(ValidationError::InvalidNumber),
                "{kind}"
            );
            assert_eq!(validate_field(&input, Some(&1.5.into())), Ok(()), "{kind}");
        }

        let heading = field(FieldKind::LabelH1, false);
        assert_eq!(validate_field(&heading, Some(&f64::NAN.into())), Ok(()));
    }

    #[test]
    fn required_number_checks_presence_first() {
        let age = field(FieldKind::Number, true);
        assert_eq!(
            validate_field(&age, Some(&"".into())),
            Err(ValidationError::Required)
        );
        assert_eq!(
            validate_field(&age, Some(&"x".into())),
            Err(ValidationError::InvalidNumber)
        );
    }

    #[test]
    fn required_checkbox_must_be_checked() {
        let terms = field(FieldKind::Boolean, true);
        assert_eq!(
            validate_field(&terms, Some(&false.into())),
            Err(ValidationError::Required)
        );
        assert_eq!(validate_field(&terms, Some(&true.into())), Ok(()));
    }

    #[test]
    fn headings_always_pass() {
        let heading = field(FieldKind::LabelH2, true);
        assert_eq!(validate_field(&heading, None), Ok(()));
    }

    #[test]
    fn template_errors_span_sections() {
        let mut first = Section::new("First");
        let name = first.push_field(FieldDraft::new(FieldKind::Text, "Name").required(true));
        let mut second = Section::new("Second");
        let age = second.push_field(FieldDraft::new(FieldKind::Number, "Age"));
        second.push_field(FieldDraft::new(FieldKind::Enum, "Color").with_options(["Red"]));

        let mut template = Template::new("Survey");
        template.push_section(first);
        template.push_section(second);

        let errors = validate_template(&template, &FormValues::new().with(age.clone(), "old"));
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get(&name), Some(ValidationError::Required));
        assert_eq!(errors.get(&age), Some(ValidationError::InvalidNumber));
        assert_eq!(
            errors.messages().get(&name).map(String::as_str),
            Some("This field is required")
        );

        let values = FormValues::new().with(name, "Alice").with(age, "42");
        assert!(validate_template(&template, &values).is_empty());
    }
}
