use form_builder_types::{SectionId, TemplateId};

/// A finished drag gesture as reported by a front end.
///
/// `over_id` is `None` when the item was released outside any drop target;
/// such a drag never reorders anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragEnd {
    /// Id of the item that was dragged.
    pub active_id: String,
    /// Id of the item it was dropped on.
    pub over_id: Option<String>,
}

impl DragEnd {
    /// A drag that ended on `over`.
    pub fn dropped_on(active: impl Into<String>, over: impl Into<String>) -> Self {
        Self {
            active_id: active.into(),
            over_id: Some(over.into()),
        }
    }

    /// A drag that was released outside any target.
    pub fn aborted(active: impl Into<String>) -> Self {
        Self {
            active_id: active.into(),
            over_id: None,
        }
    }
}

/// The container a drag context is bound to.
///
/// Each context reorders exactly one collection: the sections of a template,
/// or the fields of one section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReorderScope {
    /// Reorder the sections of a template.
    Sections { template_id: TemplateId },

    /// Reorder the fields of one section.
    Fields {
        template_id: TemplateId,
        section_id: SectionId,
    },
}

impl ReorderScope {
    /// Scope for the sections of `template_id`.
    pub fn sections(template_id: impl Into<TemplateId>) -> Self {
        Self::Sections {
            template_id: template_id.into(),
        }
    }

    /// Scope for the fields of `section_id` in `template_id`.
    pub fn fields(template_id: impl Into<TemplateId>, section_id: impl Into<SectionId>) -> Self {
        Self::Fields {
            template_id: template_id.into(),
            section_id: section_id.into(),
        }
    }

    /// Get the template this scope belongs to.
    pub fn template_id(&self) -> &TemplateId {
        match self {
            Self::Sections { template_id } | Self::Fields { template_id, .. } => template_id,
        }
    }
}
