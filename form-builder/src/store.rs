//! The template store and its mutation protocol.

use form_builder_types::{
    FieldDraft, FieldId, FieldUpdate, Section, SectionId, Template, TemplateId, move_permutation,
    plan_move,
};

use crate::{DragEnd, ReorderScope, Storage, StoreOptions, TemplatePersistence};

/// Owns every template and applies the mutation protocol to them.
///
/// Operations that reference a missing template, section or field, or that
/// would exceed the template cap, are no-ops: they change nothing, write
/// nothing, and report that via `None` or `false`. Every applied mutation
/// writes the complete snapshot before returning. A failed write is logged
/// and the in-memory state stays authoritative.
#[derive(Debug)]
pub struct TemplateStore<S> {
    templates: Vec<Template>,
    persistence: TemplatePersistence<S>,
    options: StoreOptions,
}

impl<S: Storage> TemplateStore<S> {
    /// Open a store with default options, loading any persisted templates.
    pub fn open(storage: S) -> Self {
        Self::open_with_options(storage, StoreOptions::default())
    }

    /// Open a store with custom options, loading any persisted templates.
    pub fn open_with_options(storage: S, options: StoreOptions) -> Self {
        let persistence = TemplatePersistence::new(storage, &options);
        let templates = persistence.load();
        tracing::info!(
            slot = persistence.slot(),
            templates = templates.len(),
            "opened template store"
        );
        Self {
            templates,
            persistence,
            options,
        }
    }

    // === Read selectors ===

    /// Get all templates in creation order.
    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    /// Find a template by id.
    pub fn template(&self, id: &TemplateId) -> Option<&Template> {
        self.templates.iter().find(|t| t.id() == id)
    }

    /// Find a section by id, in any template.
    pub fn section(&self, id: &SectionId) -> Option<&Section> {
        self.templates.iter().find_map(|t| t.section(id))
    }

    /// Check if another template may be created.
    pub fn can_create_template(&self) -> bool {
        self.templates.len() < self.options.max_templates
    }

    /// Number of templates that can still be created.
    pub fn remaining_capacity(&self) -> usize {
        self.options.max_templates.saturating_sub(self.templates.len())
    }

    /// Get the options the store was opened with.
    pub fn options(&self) -> &StoreOptions {
        &self.options
    }

    // === Templates ===

    /// Append a new empty template.
    ///
    /// Ignored when the cap is reached or `name` is blank.
    pub fn create_template(&mut self, name: impl Into<String>) -> Option<TemplateId> {
        let name = name.into();
        if name.trim().is_empty() {
            tracing::debug!("ignoring template with blank name");
            return None;
        }
        if !self.can_create_template() {
            tracing::debug!(
                max = self.options.max_templates,
                "template cap reached, ignoring create"
            );
            return None;
        }

        let template = Template::new(name);
        let id = template.id().clone();
        tracing::info!(template_id = %id, name = template.name(), "created template");
        self.templates.push(template);
        self.commit("create_template");
        Some(id)
    }

    /// Delete a template with all of its sections and fields.
    pub fn remove_template(&mut self, template_id: &TemplateId) -> bool {
        let before = self.templates.len();
        self.templates.retain(|t| t.id() != template_id);
        if self.templates.len() == before {
            tracing::debug!(%template_id, "remove_template: no such template");
            return false;
        }
        tracing::info!(%template_id, "removed template");
        self.commit("remove_template");
        true
    }

    // === Sections ===

    /// Append a new empty section to a template. Blank titles are ignored.
    pub fn add_section(
        &mut self,
        template_id: &TemplateId,
        title: impl Into<String>,
    ) -> Option<SectionId> {
        let title = title.into();
        if title.trim().is_empty() {
            tracing::debug!(%template_id, "ignoring section with blank title");
            return None;
        }
        let Some(template) = self.template_mut(template_id) else {
            tracing::debug!(%template_id, "add_section: no such template");
            return None;
        };

        let id = template.push_section(Section::new(title));
        tracing::debug!(%template_id, section_id = %id, "added section");
        self.commit("add_section");
        Some(id)
    }

    /// Rename a section, found in any template. Blank titles are ignored.
    pub fn update_section_title(&mut self, section_id: &SectionId, title: impl Into<String>) -> bool {
        let title = title.into();
        if title.trim().is_empty() {
            tracing::debug!(%section_id, "ignoring blank section title");
            return false;
        }
        let Some(section) = self.section_mut(section_id) else {
            tracing::debug!(%section_id, "update_section_title: no such section");
            return false;
        };
        if !section.set_title(title) {
            return false;
        }
        self.commit("update_section_title");
        true
    }

    /// Delete a section of a template together with its fields.
    pub fn remove_section(&mut self, template_id: &TemplateId, section_id: &SectionId) -> bool {
        let removed = self
            .template_mut(template_id)
            .is_some_and(|t| t.remove_section(section_id));
        if !removed {
            tracing::debug!(%template_id, %section_id, "remove_section: nothing to remove");
            return false;
        }
        self.commit("remove_section");
        true
    }

    /// Put a template's sections into the given order.
    ///
    /// `order` must be a permutation of the template's section ids.
    pub fn reorder_sections(&mut self, template_id: &TemplateId, order: &[SectionId]) -> bool {
        let reordered = self
            .template_mut(template_id)
            .is_some_and(|t| t.reorder_sections(order));
        if !reordered {
            tracing::debug!(%template_id, "reorder_sections: rejected");
            return false;
        }
        self.commit("reorder_sections");
        true
    }

    // === Fields ===

    /// Append a field to a section, found in any template, and return its new id.
    pub fn add_field(&mut self, section_id: &SectionId, draft: FieldDraft) -> Option<FieldId> {
        let Some(section) = self.section_mut(section_id) else {
            tracing::debug!(%section_id, "add_field: no such section");
            return None;
        };

        let kind = draft.kind;
        let id = section.push_field(draft);
        tracing::debug!(%section_id, field_id = %id, %kind, "added field");
        self.commit("add_field");
        Some(id)
    }

    /// Merge a partial update onto a field.
    ///
    /// Returns `false` if the section or field is missing or nothing changed.
    pub fn update_field(
        &mut self,
        section_id: &SectionId,
        field_id: &FieldId,
        update: FieldUpdate,
    ) -> bool {
        let updated = self
            .section_mut(section_id)
            .is_some_and(|s| s.update_field(field_id, &update));
        if !updated {
            tracing::debug!(%section_id, %field_id, "update_field: nothing to update");
            return false;
        }
        self.commit("update_field");
        true
    }

    /// Delete a field from a section, found in any template.
    pub fn remove_field(&mut self, section_id: &SectionId, field_id: &FieldId) -> bool {
        let removed = self
            .section_mut(section_id)
            .is_some_and(|s| s.remove_field(field_id));
        if !removed {
            tracing::debug!(%section_id, %field_id, "remove_field: nothing to remove");
            return false;
        }
        self.commit("remove_field");
        true
    }

    /// Put a section's fields into the given order.
    ///
    /// `order` must be a permutation of the section's field ids.
    pub fn reorder_fields(
        &mut self,
        template_id: &TemplateId,
        section_id: &SectionId,
        order: &[FieldId],
    ) -> bool {
        let reordered = self
            .template_mut(template_id)
            .and_then(|t| t.section_mut(section_id))
            .is_some_and(|s| s.reorder_fields(order));
        if !reordered {
            tracing::debug!(%template_id, %section_id, "reorder_fields: rejected");
            return false;
        }
        self.commit("reorder_fields");
        true
    }

    // === Drag and drop ===

    /// Apply a finished drag within `scope`.
    ///
    /// The dragged item moves to the position of the item it was dropped on.
    /// Aborted drags, drops onto the dragged item itself and unknown ids do nothing.
    pub fn apply_drag(&mut self, scope: &ReorderScope, drag: &DragEnd) -> bool {
        let Some(over) = drag.over_id.as_deref() else {
            tracing::debug!(active_id = %drag.active_id, "drag aborted");
            return false;
        };

        match scope {
            ReorderScope::Sections { template_id } => {
                let Some(template) = self.template(template_id) else {
                    return false;
                };
                let active = SectionId::new(drag.active_id.as_str());
                let Some((from, to)) =
                    plan_move(template.sections(), &active, &SectionId::new(over))
                else {
                    return false;
                };
                let order = move_permutation(template.section_ids(), from, to);
                self.reorder_sections(template_id, &order)
            }
            ReorderScope::Fields {
                template_id,
                section_id,
            } => {
                let Some(section) = self.template(template_id).and_then(|t| t.section(section_id))
                else {
                    return false;
                };
                let active = FieldId::new(drag.active_id.as_str());
                let Some((from, to)) = plan_move(section.fields(), &active, &FieldId::new(over))
                else {
                    return false;
                };
                let order = move_permutation(section.field_ids(), from, to);
                self.reorder_fields(template_id, section_id, &order)
            }
        }
    }

    // === Internals ===

    fn template_mut(&mut self, id: &TemplateId) -> Option<&mut Template> {
        self.templates.iter_mut().find(|t| t.id() == id)
    }

    fn section_mut(&mut self, id: &SectionId) -> Option<&mut Section> {
        self.templates.iter_mut().find_map(|t| t.section_mut(id))
    }

    fn commit(&self, operation: &'static str) {
        if let Err(err) = self.persistence.save(&self.templates) {
            tracing::warn!(
                operation,
                slot = self.persistence.slot(),
                error = %err,
                "could not persist templates, keeping in-memory state"
            );
        }
    }
}
