//! Presentation-agnostic read model of a generated form.
//!
//! A front end walks a `FormView` to draw headings, inputs, required markers
//! and inline errors without knowing anything about the document tree.

use crate::{
    FieldErrors, FieldId, FieldKind, FieldValue, FormValues, SectionId, Template, TemplateId,
    ValidationError,
};

/// A whole form, section by section.
#[derive(Debug, Clone, PartialEq)]
pub struct FormView {
    pub template_id: TemplateId,
    pub name: String,
    pub sections: Vec<SectionView>,
}

/// One section of a form.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionView {
    pub section_id: SectionId,
    pub title: String,
    pub rows: Vec<FormRow>,
}

/// A single row of a form.
#[derive(Debug, Clone, PartialEq)]
pub enum FormRow {
    /// Display-only heading.
    Heading {
        field_id: FieldId,
        level: u8,
        text: String,
    },

    /// Something the user fills in.
    Input(InputRow),
}

/// An input row together with its current value and error.
#[derive(Debug, Clone, PartialEq)]
pub struct InputRow {
    pub field_id: FieldId,
    pub kind: FieldKind,
    pub label: String,
    pub required: bool,
    /// Choices for enum fields; empty otherwise.
    pub options: Vec<String>,
    pub value: Option<FieldValue>,
    pub error: Option<ValidationError>,
}

impl FormView {
    /// Build the view of `template` filled with `values` and annotated with `errors`.
    pub fn build(template: &Template, values: &FormValues, errors: &FieldErrors) -> Self {
        let sections = template
            .sections()
            .iter()
            .map(|section| SectionView {
                section_id: section.id().clone(),
                title: section.title().to_string(),
                rows: section
                    .fields()
                    .iter()
                    .map(|field| match field.kind().heading_level() {
                        Some(level) => FormRow::Heading {
                            field_id: field.id().clone(),
                            level,
                            text: field.label().to_string(),
                        },
                        None => FormRow::Input(InputRow {
                            field_id: field.id().clone(),
                            kind: field.kind(),
                            label: field.label().to_string(),
                            required: field.is_required(),
                            options: field.options().to_vec(),
                            value: values.get(field.id()).cloned(),
                            error: errors.get(field.id()),
                        }),
                    })
                    .collect(),
            })
            .collect();

        Self {
            template_id: template.id().clone(),
            name: template.name().to_string(),
            sections,
        }
    }

    /// Iterate over every input row, in display order.
    pub fn inputs(&self) -> impl Iterator<Item = &InputRow> {
        self.sections
            .iter()
            .flat_map(|s| s.rows.iter())
            .filter_map(|row| match row {
                FormRow::Input(input) => Some(input),
                FormRow::Heading { .. } => None,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FieldDraft, Section, validate_template};

    #[test]
    fn rows_follow_field_order() {
        let mut section = Section::new("Basics");
        section.push_field(FieldDraft::new(FieldKind::LabelH3, "About you"));
        let name = section.push_field(FieldDraft::new(FieldKind::Text, "Name").required(true));
        let mut template = Template::new("Survey");
        template.push_section(section);

        let preview = template.preview();
        assert_eq!(preview.name, "Survey");
        let rows = &preview.sections[0].rows;
        assert!(matches!(&rows[0], FormRow::Heading { level: 3, text, .. } if text == "About you"));
        match &rows[1] {
            FormRow::Input(input) => {
                assert_eq!(input.field_id, name);
                assert!(input.required);
                assert_eq!(input.value, None);
                assert_eq!(input.error, None);
            }
            other => panic!("expected input row, got {other:?}"),
        }
    }

    #[test]
    fn carries_values_and_errors() {
        let mut section = Section::new("Basics");
        let name = section.push_field(FieldDraft::new(FieldKind::Text, "Name").required(true));
        let age = section.push_field(FieldDraft::new(FieldKind::Number, "Age"));
        let mut template = Template::new("Survey");
        template.push_section(section);

        let values = FormValues::new().with(age.clone(), "abc");
        let errors = validate_template(&template, &values);
        let view = FormView::build(&template, &values, &errors);

        let inputs: Vec<_> = view.inputs().collect();
        assert_eq!(inputs.len(), 2);
        assert_eq!(inputs[0].field_id, name);
        assert_eq!(inputs[0].error, Some(ValidationError::Required));
        assert_eq!(inputs[1].value, Some(FieldValue::from("abc")));
        assert_eq!(inputs[1].error, Some(ValidationError::InvalidNumber));
    }
}
