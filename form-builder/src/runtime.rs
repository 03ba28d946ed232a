//! Form generation, validation and the submission log.

use chrono::{DateTime, Utc};
use form_builder_types::{
    FieldErrors, FieldId, FieldValue, FormValues, FormView, Template, TemplateId,
    validate_template,
};
use serde::{Deserialize, Serialize};

use crate::{Storage, StoreOptions, SubmissionPersistence, SubmitError, TemplateStore};

/// Identifies a submission: the millisecond timestamp at which it was recorded,
/// bumped where needed so ids within a log strictly increase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmissionId(u64);

impl SubmissionId {
    /// Get the raw id.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A recorded response to a template.
///
/// `template_id` is a weak reference: the template may since have been deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: SubmissionId,
    pub template_id: TemplateId,
    pub data: FormValues,
    pub submitted_at: DateTime<Utc>,
}

/// Append-only log of submissions, persisted in full on every append.
#[derive(Debug)]
pub struct SubmissionLog<S> {
    submissions: Vec<Submission>,
    persistence: SubmissionPersistence<S>,
}

impl<S: Storage> SubmissionLog<S> {
    /// Open the log, loading persisted submissions (empty if absent or corrupt).
    pub fn open(storage: S, options: &StoreOptions) -> Self {
        let persistence = SubmissionPersistence::new(storage, options);
        let submissions = persistence.load();
        Self {
            submissions,
            persistence,
        }
    }

    /// Get all submissions, oldest first.
    pub fn submissions(&self) -> &[Submission] {
        &self.submissions
    }

    /// Iterate over the submissions recorded against one template.
    pub fn for_template<'a>(
        &'a self,
        template_id: &'a TemplateId,
    ) -> impl Iterator<Item = &'a Submission> + 'a {
        self.submissions
            .iter()
            .filter(move |s| &s.template_id == template_id)
    }

    /// Record a submission and persist the log.
    ///
    /// A failed write is logged; the submission stays in memory.
    pub fn append(&mut self, template_id: TemplateId, data: FormValues) -> Submission {
        let submitted_at = Utc::now();
        let submission = Submission {
            id: self.next_id(submitted_at),
            template_id,
            data,
            submitted_at,
        };
        self.submissions.push(submission.clone());

        if let Err(err) = self.persistence.save(&self.submissions) {
            tracing::warn!(
                slot = self.persistence.slot(),
                error = %err,
                "could not persist submissions, keeping in-memory log"
            );
        }

        submission
    }

    fn next_id(&self, at: DateTime<Utc>) -> SubmissionId {
        let millis = u64::try_from(at.timestamp_millis()).unwrap_or(0);
        let floor = self
            .submissions
            .iter()
            .map(|s| s.id.0.saturating_add(1))
            .max()
            .unwrap_or(0);
        SubmissionId(millis.max(floor))
    }
}

/// Validates responses against templates and records the ones that pass.
#[derive(Debug)]
pub struct FormRuntime<S> {
    log: SubmissionLog<S>,
}

impl<S: Storage> FormRuntime<S> {
    /// Open a runtime with default options.
    pub fn open(storage: S) -> Self {
        Self::open_with_options(storage, &StoreOptions::default())
    }

    /// Open a runtime with custom options.
    pub fn open_with_options(storage: S, options: &StoreOptions) -> Self {
        Self {
            log: SubmissionLog::open(storage, options),
        }
    }

    /// Get the submission log.
    pub fn log(&self) -> &SubmissionLog<S> {
        &self.log
    }

    /// Get all submissions, oldest first.
    pub fn submissions(&self) -> &[Submission] {
        self.log.submissions()
    }

    /// Validate `values` against the template `template_id` in `store` and
    /// record a submission if every field passes.
    pub fn submit<T: Storage>(
        &mut self,
        store: &TemplateStore<T>,
        template_id: &TemplateId,
        values: &FormValues,
    ) -> Result<Submission, SubmitError> {
        let template = store
            .template(template_id)
            .ok_or_else(|| SubmitError::UnknownTemplate(template_id.clone()))?;
        self.submit_template(template, values)
    }

    /// Validate `values` against `template` and record a submission if every
    /// field passes. Only values of the template's input fields are recorded.
    pub fn submit_template(
        &mut self,
        template: &Template,
        values: &FormValues,
    ) -> Result<Submission, SubmitError> {
        let errors = validate_template(template, values);
        if !errors.is_empty() {
            tracing::debug!(
                template_id = %template.id(),
                failed = errors.len(),
                "submission rejected"
            );
            return Err(SubmitError::Invalid(errors));
        }

        let submission = self
            .log
            .append(template.id().clone(), values.restricted_to(template));
        tracing::info!(
            template_id = %submission.template_id,
            submission_id = %submission.id,
            "recorded submission"
        );
        Ok(submission)
    }
}

/// Where a `FormSession` is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    /// Collecting values.
    Editing,
    /// The last response was recorded.
    Submitted(SubmissionId),
}

/// An in-progress response to one template.
///
/// Editing a field clears its error. A successful submit clears all values
/// and moves to `Submitted`; `start_new_response` begins the next one.
#[derive(Debug, Clone)]
pub struct FormSession {
    template_id: TemplateId,
    values: FormValues,
    errors: FieldErrors,
    state: FormState,
}

impl FormSession {
    /// Start an empty response to `template_id`.
    pub fn new(template_id: TemplateId) -> Self {
        Self {
            template_id,
            values: FormValues::new(),
            errors: FieldErrors::default(),
            state: FormState::Editing,
        }
    }

    /// Get the template being filled in.
    pub fn template_id(&self) -> &TemplateId {
        &self.template_id
    }

    /// Get the values entered so far.
    pub fn values(&self) -> &FormValues {
        &self.values
    }

    /// Get the errors from the last failed submit.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Get the lifecycle state.
    pub fn state(&self) -> FormState {
        self.state
    }

    /// Enter a value for a field and clear that field's error.
    pub fn set_value(&mut self, field: impl Into<FieldId>, value: impl Into<FieldValue>) {
        let field = field.into();
        self.errors.clear_field(&field);
        self.values.insert(field, value);
    }

    /// Build the read model of the form with current values and errors.
    ///
    /// `None` if the template no longer exists.
    pub fn view<T: Storage>(&self, store: &TemplateStore<T>) -> Option<FormView> {
        store
            .template(&self.template_id)
            .map(|template| FormView::build(template, &self.values, &self.errors))
    }

    /// Validate and record the response.
    ///
    /// On failure the per-field errors are kept for display and the values are
    /// left as entered.
    pub fn submit<S: Storage, T: Storage>(
        &mut self,
        runtime: &mut FormRuntime<S>,
        store: &TemplateStore<T>,
    ) -> Result<SubmissionId, SubmitError> {
        match runtime.submit(store, &self.template_id, &self.values) {
            Ok(submission) => {
                self.values.clear();
                self.errors = FieldErrors::default();
                self.state = FormState::Submitted(submission.id);
                Ok(submission.id)
            }
            Err(err) => {
                if let Some(errors) = err.field_errors() {
                    self.errors = errors.clone();
                }
                Err(err)
            }
        }
    }

    /// Begin another response to the same template.
    pub fn start_new_response(&mut self) {
        self.values.clear();
        self.errors = FieldErrors::default();
        self.state = FormState::Editing;
    }

    /// Begin a response to a different template.
    pub fn switch_template(&mut self, template_id: TemplateId) {
        self.template_id = template_id;
        self.start_new_response();
    }
}
