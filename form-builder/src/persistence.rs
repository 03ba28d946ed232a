//! Whole-snapshot persistence of templates and submissions.
//!
//! Every save re-serializes the complete collection into one slot. Loading
//! never fails: an absent slot is empty, and an unreadable or corrupt slot is
//! logged and treated as empty so the application can always start.

use serde::{Deserialize, Serialize};

use crate::{PersistenceError, Storage, StoreOptions, Submission, Template};

#[derive(Serialize)]
struct TemplatesSnapshotRef<'a> {
    templates: &'a [Template],
}

#[derive(Deserialize)]
struct TemplatesSnapshot {
    #[serde(default)]
    templates: Vec<Template>,
}

/// Reads and writes the template snapshot `{ "templates": [...] }`.
#[derive(Debug)]
pub struct TemplatePersistence<S> {
    storage: S,
    slot: String,
    max_templates: usize,
}

impl<S: Storage> TemplatePersistence<S> {
    /// Persist through `storage` using the slot and cap from `options`.
    pub fn new(storage: S, options: &StoreOptions) -> Self {
        Self {
            storage,
            slot: options.templates_slot.clone(),
            max_templates: options.max_templates,
        }
    }

    /// Get the slot name.
    pub fn slot(&self) -> &str {
        &self.slot
    }

    /// Load the templates, degrading to an empty list on any failure.
    pub fn load(&self) -> Vec<Template> {
        match self.try_load() {
            Ok(templates) => templates,
            Err(err) => {
                tracing::warn!(slot = %self.slot, error = %err, "could not load templates, starting empty");
                Vec::new()
            }
        }
    }

    /// Load the templates, reporting failures.
    ///
    /// Loaded fields are normalized and templates beyond the cap are dropped.
    pub fn try_load(&self) -> Result<Vec<Template>, PersistenceError> {
        let Some(blob) = self.storage.read(&self.slot)? else {
            return Ok(Vec::new());
        };

        let snapshot: TemplatesSnapshot =
            serde_json::from_str(&blob).map_err(|source| PersistenceError::Decode {
                slot: self.slot.clone(),
                source,
            })?;

        let mut templates = snapshot.templates;
        templates.iter_mut().for_each(Template::normalize);
        if templates.len() > self.max_templates {
            tracing::warn!(
                slot = %self.slot,
                found = templates.len(),
                max = self.max_templates,
                "dropping templates beyond the cap"
            );
            templates.truncate(self.max_templates);
        }
        Ok(templates)
    }

    /// Write the complete template list.
    pub fn save(&self, templates: &[Template]) -> Result<(), PersistenceError> {
        let blob = serde_json::to_string(&TemplatesSnapshotRef { templates }).map_err(|source| {
            PersistenceError::Encode {
                slot: self.slot.clone(),
                source,
            }
        })?;
        self.storage.write(&self.slot, &blob)?;
        Ok(())
    }
}

/// Reads and writes the submission log as a JSON array.
#[derive(Debug)]
pub struct SubmissionPersistence<S> {
    storage: S,
    slot: String,
}

impl<S: Storage> SubmissionPersistence<S> {
    /// Persist through `storage` using the submissions slot from `options`.
    pub fn new(storage: S, options: &StoreOptions) -> Self {
        Self {
            storage,
            slot: options.submissions_slot.clone(),
        }
    }

    /// Get the slot name.
    pub fn slot(&self) -> &str {
        &self.slot
    }

    /// Load the log, degrading to an empty log on any failure.
    pub fn load(&self) -> Vec<Submission> {
        match self.try_load() {
            Ok(submissions) => submissions,
            Err(err) => {
                tracing::warn!(slot = %self.slot, error = %err, "could not load submissions, starting empty");
                Vec::new()
            }
        }
    }

    /// Load the log, reporting failures.
    pub fn try_load(&self) -> Result<Vec<Submission>, PersistenceError> {
        let Some(blob) = self.storage.read(&self.slot)? else {
            return Ok(Vec::new());
        };
        serde_json::from_str(&blob).map_err(|source| PersistenceError::Decode {
            slot: self.slot.clone(),
            source,
        })
    }

    /// Write the complete log.
    pub fn save(&self, submissions: &[Submission]) -> Result<(), PersistenceError> {
        let blob =
            serde_json::to_string(submissions).map_err(|source| PersistenceError::Encode {
                slot: self.slot.clone(),
                source,
            })?;
        self.storage.write(&self.slot, &blob)?;
        Ok(())
    }
}
