//! A short customer survey.

use anyhow::Context;
use form_builder::{FieldDraft, FieldKind, Storage, TemplateId, TemplateStore};

use crate::section;

pub const NAME: &str = "Customer Survey";

/// Seed the survey and return its id.
pub fn seed_survey<S: Storage>(store: &mut TemplateStore<S>) -> anyhow::Result<TemplateId> {
    let template = store
        .create_template(NAME)
        .context("template store is full")?;

    section(
        store,
        &template,
        "Basics",
        [
            FieldDraft::new(FieldKind::LabelH1, "Thanks for stopping by"),
            FieldDraft::new(FieldKind::Text, "Name").required(true),
            FieldDraft::new(FieldKind::Enum, "Favorite color").with_options(["Red", "Green", "Blue"]),
        ],
    )?;
    section(
        store,
        &template,
        "Feedback",
        [
            FieldDraft::new(FieldKind::LabelH3, "Tell us how we did"),
            FieldDraft::new(FieldKind::Number, "Rating out of 10").required(true),
            FieldDraft::new(FieldKind::Boolean, "Subscribe to the newsletter"),
        ],
    )?;

    Ok(template)
}

#[cfg(test)]
mod tests {
    use super::*;
    use form_builder::{FormRuntime, FormValues, MemoryStorage, ValidationError};

    #[test]
    fn accepts_a_complete_response() {
        let storage = MemoryStorage::new();
        let mut store = TemplateStore::open(storage.clone());
        let id = seed_survey(&mut store).unwrap();
        let template = store.template(&id).unwrap();

        let fields: Vec<_> = template.fields().collect();
        let name = fields[1].id().clone();
        let rating = fields[4].id().clone();

        let mut runtime = FormRuntime::open(storage);
        let bad = FormValues::new()
            .with(name.clone(), "Alice")
            .with(rating.clone(), "ten");
        let err = runtime.submit(&store, &id, &bad).unwrap_err();
        assert_eq!(
            err.field_errors().unwrap().get(&rating),
            Some(ValidationError::InvalidNumber)
        );

        let good = FormValues::new().with(name, "Alice").with(rating, "10");
        assert!(runtime.submit(&store, &id, &good).is_ok());
    }
}
