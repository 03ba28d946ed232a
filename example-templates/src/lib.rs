//! Ready-made templates for demos and tests.
//!
//! Each module seeds one template into a `TemplateStore` and returns its id.

pub mod incident_report;
pub mod job_application;
pub mod survey;

use anyhow::Context;
use form_builder::{FieldDraft, SectionId, Storage, TemplateId, TemplateStore};

pub use incident_report::seed_incident_report;
pub use job_application::seed_job_application;
pub use survey::seed_survey;

/// Seed every example template, stopping at the store's capacity.
pub fn seed_all<S: Storage>(store: &mut TemplateStore<S>) -> anyhow::Result<Vec<TemplateId>> {
    let seeders: [fn(&mut TemplateStore<S>) -> anyhow::Result<TemplateId>; 3] =
        [seed_survey, seed_job_application, seed_incident_report];

    let mut ids = Vec::new();
    for seed in seeders {
        if !store.can_create_template() {
            break;
        }
        ids.push(seed(store)?);
    }
    Ok(ids)
}

pub(crate) fn section<S: Storage>(
    store: &mut TemplateStore<S>,
    template: &TemplateId,
    title: &str,
    fields: impl IntoIterator<Item = FieldDraft>,
) -> anyhow::Result<SectionId> {
    let section = store
        .add_section(template, title)
        .with_context(|| format!("could not add section '{title}'"))?;
    for draft in fields {
        let label = draft.label.clone();
        store
            .add_field(&section, draft)
            .with_context(|| format!("could not add field '{label}' to '{title}'"))?;
    }
    Ok(section)
}

#[cfg(test)]
mod tests {
    use super::*;
    use form_builder::{FormRuntime, FormValues, MemoryStorage, StoreOptions};

    #[test]
    fn seeds_every_template() {
        let mut store = TemplateStore::open(MemoryStorage::new());
        let ids = seed_all(&mut store).unwrap();
        assert_eq!(ids.len(), 3);
        assert_eq!(store.remaining_capacity(), 2);
    }

    #[test]
    fn stops_at_capacity() {
        let options = StoreOptions::new().with_max_templates(2);
        let mut store = TemplateStore::open_with_options(MemoryStorage::new(), options);
        let ids = seed_all(&mut store).unwrap();
        assert_eq!(ids.len(), 2);
    }

    #[test]
    fn seeded_templates_reject_empty_responses() {
        let storage = MemoryStorage::new();
        let mut store = TemplateStore::open(storage.clone());
        let ids = seed_all(&mut store).unwrap();

        let mut runtime = FormRuntime::open(storage);
        for id in &ids {
            assert!(runtime.submit(&store, id, &FormValues::new()).is_err());
        }
        assert!(runtime.submissions().is_empty());
    }
}
