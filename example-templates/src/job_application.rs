//! A job application with a mix of every input kind.

use anyhow::Context;
use form_builder::{FieldDraft, FieldKind, Storage, TemplateId, TemplateStore};

use crate::section;

pub const NAME: &str = "Job Application";

pub const POSITIONS: [&str; 4] = ["Backend", "Frontend", "Infrastructure", "Data"];

/// Seed the application form and return its id.
pub fn seed_job_application<S: Storage>(
    store: &mut TemplateStore<S>,
) -> anyhow::Result<TemplateId> {
    let template = store
        .create_template(NAME)
        .context("template store is full")?;

    section(
        store,
        &template,
        "Applicant",
        [
            FieldDraft::new(FieldKind::LabelH2, "About you"),
            FieldDraft::new(FieldKind::Text, "Full name").required(true),
            FieldDraft::new(FieldKind::Text, "Email").required(true),
        ],
    )?;
    section(
        store,
        &template,
        "Role",
        [
            FieldDraft::new(FieldKind::Enum, "Position")
                .with_options(POSITIONS)
                .required(true),
            FieldDraft::new(FieldKind::Number, "Years of experience").required(true),
            FieldDraft::new(FieldKind::Number, "Expected salary"),
            FieldDraft::new(FieldKind::Boolean, "Open to relocation"),
        ],
    )?;

    Ok(template)
}
