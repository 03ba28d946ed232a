//! An incident report, built up and then reordered the way an editor would.

use anyhow::{Context, ensure};
use form_builder::{DragEnd, FieldDraft, FieldKind, ReorderScope, Storage, TemplateId, TemplateStore};

use crate::section;

pub const NAME: &str = "Incident Report";

/// Seed the report and return its id.
///
/// The "Follow-up" section is created first and then dragged below "Details".
pub fn seed_incident_report<S: Storage>(
    store: &mut TemplateStore<S>,
) -> anyhow::Result<TemplateId> {
    let template = store
        .create_template(NAME)
        .context("template store is full")?;

    let follow_up = section(
        store,
        &template,
        "Follow-up",
        [
            FieldDraft::new(FieldKind::Boolean, "Escalate"),
            FieldDraft::new(FieldKind::Text, "Owner"),
        ],
    )?;
    let details = section(
        store,
        &template,
        "Details",
        [
            FieldDraft::new(FieldKind::LabelH1, "What happened?"),
            FieldDraft::new(FieldKind::Text, "Summary").required(true),
            FieldDraft::new(FieldKind::Enum, "Severity")
                .with_options(["Low", "Medium", "High", "Critical"])
                .required(true),
            FieldDraft::new(FieldKind::Number, "Users affected"),
        ],
    )?;

    let moved = store.apply_drag(
        &ReorderScope::sections(template.clone()),
        &DragEnd::dropped_on(follow_up.as_str(), details.as_str()),
    );
    ensure!(moved, "could not move '{follow_up}' below '{details}'");

    Ok(template)
}

#[cfg(test)]
mod tests {
    use super::*;
    use form_builder::MemoryStorage;

    #[test]
    fn details_come_first() {
        let mut store = TemplateStore::open(MemoryStorage::new());
        let id = seed_incident_report(&mut store).unwrap();

        let titles: Vec<_> = store
            .template(&id)
            .unwrap()
            .sections()
            .iter()
            .map(|s| s.title())
            .collect();
        assert_eq!(titles, ["Details", "Follow-up"]);
    }
}
