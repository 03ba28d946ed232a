use serde::{Deserialize, Serialize};

use crate::{
    Field, FieldDraft, FieldErrors, FieldId, FieldUpdate, FormValues, FormView, SectionId,
    TemplateId, permute_by_ids,
};

/// A titled, ordered group of fields within a template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    id: SectionId,

    title: String,

    #[serde(default)]
    fields: Vec<Field>,
}

impl Section {
    /// Create an empty section with a fresh id.
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_id(SectionId::generate(), title)
    }

    /// Create an empty section under the given id.
    pub fn with_id(id: SectionId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            fields: Vec::new(),
        }
    }

    /// Get the section id.
    pub fn id(&self) -> &SectionId {
        &self.id
    }

    /// Get the title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Replace the title. Returns whether it changed.
    pub fn set_title(&mut self, title: impl Into<String>) -> bool {
        let title = title.into();
        if self.title == title {
            return false;
        }
        self.title = title;
        true
    }

    /// Get the fields in display order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Find a field by id.
    pub fn field(&self, id: &FieldId) -> Option<&Field> {
        self.fields.iter().find(|f| f.id() == id)
    }

    /// Append a field built from `draft` and return its new id.
    pub fn push_field(&mut self, draft: FieldDraft) -> FieldId {
        let field = Field::new(draft);
        let id = field.id().clone();
        self.fields.push(field);
        id
    }

    /// Merge an update onto a field. Returns `false` if the field is missing
    /// or nothing changed.
    pub fn update_field(&mut self, id: &FieldId, update: &FieldUpdate) -> bool {
        self.fields
            .iter_mut()
            .find(|f| f.id() == id)
            .is_some_and(|field| field.apply(update))
    }

    /// Remove a field. Returns whether it was present.
    pub fn remove_field(&mut self, id: &FieldId) -> bool {
        let before = self.fields.len();
        self.fields.retain(|f| f.id() != id);
        self.fields.len() != before
    }

    /// Put the fields into the order given by `order`, which must be a
    /// permutation of the current field ids. Returns `false` otherwise.
    pub fn reorder_fields(&mut self, order: &[FieldId]) -> bool {
        permute_by_ids(&mut self.fields, order)
    }

    /// Ids of the fields in display order.
    pub fn field_ids(&self) -> Vec<FieldId> {
        self.fields.iter().map(|f| f.id().clone()).collect()
    }

    fn normalize(&mut self) {
        self.fields.iter_mut().for_each(Field::normalize);
    }
}

/// A named, ordered collection of sections: the root document unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    id: TemplateId,

    name: String,

    #[serde(default)]
    sections: Vec<Section>,
}

impl Template {
    /// Create an empty template with a fresh id.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(TemplateId::generate(), name)
    }

    /// Create an empty template under the given id.
    pub fn with_id(id: TemplateId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            sections: Vec::new(),
        }
    }

    /// Get the template id.
    pub fn id(&self) -> &TemplateId {
        &self.id
    }

    /// Get the name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the sections in display order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Find a section by id.
    pub fn section(&self, id: &SectionId) -> Option<&Section> {
        self.sections.iter().find(|s| s.id() == id)
    }

    /// Find a section by id for mutation.
    pub fn section_mut(&mut self, id: &SectionId) -> Option<&mut Section> {
        self.sections.iter_mut().find(|s| s.id() == id)
    }

    /// Append a section and return its id.
    pub fn push_section(&mut self, section: Section) -> SectionId {
        let id = section.id().clone();
        self.sections.push(section);
        id
    }

    /// Remove a section together with all of its fields.
    pub fn remove_section(&mut self, id: &SectionId) -> bool {
        let before = self.sections.len();
        self.sections.retain(|s| s.id() != id);
        self.sections.len() != before
    }

    /// Put the sections into the order given by `order`, which must be a
    /// permutation of the current section ids. Returns `false` otherwise.
    pub fn reorder_sections(&mut self, order: &[SectionId]) -> bool {
        permute_by_ids(&mut self.sections, order)
    }

    /// Ids of the sections in display order.
    pub fn section_ids(&self) -> Vec<SectionId> {
        self.sections.iter().map(|s| s.id().clone()).collect()
    }

    /// Iterate over every field of every section, in display order.
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.sections.iter().flat_map(|s| s.fields.iter())
    }

    /// Find a field anywhere in the template.
    pub fn field(&self, id: &FieldId) -> Option<&Field> {
        self.fields().find(|f| f.id() == id)
    }

    /// The read model shown while editing the template: every row, no values.
    pub fn preview(&self) -> FormView {
        FormView::build(self, &FormValues::new(), &FieldErrors::default())
    }

    /// Restore field invariants after loading from untrusted data.
    pub fn normalize(&mut self) {
        self.sections.iter_mut().for_each(Section::normalize);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FieldKind;

    fn survey() -> (Template, SectionId, FieldId, FieldId) {
        let mut section = Section::new("Basics");
        let name = section.push_field(FieldDraft::new(FieldKind::Text, "Name").required(true));
        let color = section.push_field(
            FieldDraft::new(FieldKind::Enum, "Color").with_options(["Red", "Blue"]),
        );
        let mut template = Template::new("Survey");
        let section_id = template.push_section(section);
        (template, section_id, name, color)
    }

    #[test]
    fn remove_section_cascades() {
        let (mut template, section_id, name, _) = survey();
        assert!(template.remove_section(&section_id));
        assert!(template.sections().is_empty());
        assert!(template.field(&name).is_none());
        assert!(!template.remove_section(&section_id));
    }

    #[test]
    fn reorder_fields_accepts_permutation_only() {
        let (mut template, section_id, name, color) = survey();
        let section = template.section_mut(&section_id).unwrap();

        assert!(!section.reorder_fields(&[color.clone()]));
        assert!(!section.reorder_fields(&[color.clone(), color.clone()]));
        assert_eq!(section.field_ids(), vec![name.clone(), color.clone()]);

        assert!(section.reorder_fields(&[color.clone(), name.clone()]));
        assert_eq!(section.field_ids(), vec![color, name]);
    }

    #[test]
    fn update_and_remove_field() {
        let (mut template, section_id, name, _) = survey();
        let section = template.section_mut(&section_id).unwrap();

        assert!(section.update_field(&name, &FieldUpdate::new().label("Full name")));
        assert_eq!(section.field(&name).unwrap().label(), "Full name");
        assert!(!section.update_field(&FieldId::new("missing"), &FieldUpdate::new().label("x")));

        assert!(section.remove_field(&name));
        assert!(!section.remove_field(&name));
        assert_eq!(section.fields().len(), 1);
    }

    #[test]
    fn set_title_reports_change() {
        let mut section = Section::new("Basics");
        assert!(!section.set_title("Basics"));
        assert!(section.set_title("Details"));
        assert_eq!(section.title(), "Details");
    }

    #[test]
    fn json_layout() {
        let template = Template::with_id(TemplateId::new("t1"), "Empty");
        assert_eq!(
            serde_json::to_value(&template).unwrap(),
            serde_json::json!({ "id": "t1", "name": "Empty", "sections": [] })
        );
    }
}
