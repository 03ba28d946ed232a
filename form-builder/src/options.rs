/// Options for opening a `TemplateStore` and `FormRuntime`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreOptions {
    /// Maximum number of templates; creation beyond it is ignored.
    pub max_templates: usize,
    /// Slot holding the template snapshot.
    pub templates_slot: String,
    /// Slot holding the submission log.
    pub submissions_slot: String,
}

impl StoreOptions {
    /// Default template cap.
    pub const DEFAULT_MAX_TEMPLATES: usize = 5;

    /// Create new options with default values.
    pub fn new() -> Self {
        Self {
            max_templates: Self::DEFAULT_MAX_TEMPLATES,
            templates_slot: "templates".to_string(),
            submissions_slot: "formSubmissions".to_string(),
        }
    }

    /// Set the template cap.
    pub fn with_max_templates(mut self, max: usize) -> Self {
        self.max_templates = max;
        self
    }

    /// Set the slot used for templates.
    pub fn with_templates_slot(mut self, slot: impl Into<String>) -> Self {
        self.templates_slot = slot.into();
        self
    }

    /// Set the slot used for submissions.
    pub fn with_submissions_slot(mut self, slot: impl Into<String>) -> Self {
        self.submissions_slot = slot.into();
        self
    }
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self::new()
    }
}
