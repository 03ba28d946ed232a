use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{FieldId, FieldValue, Template};

/// Values entered into a generated form, keyed by field id.
///
/// Keys are kept sorted so serialized submissions are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormValues {
    values: BTreeMap<FieldId, FieldValue>,
}

impl FormValues {
    /// Create a new empty value collection.
    pub fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// Set the value for a field, returning the previous one.
    pub fn insert(
        &mut self,
        field: impl Into<FieldId>,
        value: impl Into<FieldValue>,
    ) -> Option<FieldValue> {
        self.values.insert(field.into(), value.into())
    }

    /// Builder-style variant of `insert`.
    pub fn with(mut self, field: impl Into<FieldId>, value: impl Into<FieldValue>) -> Self {
        self.insert(field, value);
        self
    }

    /// Get the value for a field.
    pub fn get(&self, field: &FieldId) -> Option<&FieldValue> {
        self.values.get(field)
    }

    /// Check if a value exists for the given field.
    pub fn contains(&self, field: &FieldId) -> bool {
        self.values.contains_key(field)
    }

    /// Remove the value for a field.
    pub fn remove(&mut self, field: &FieldId) -> Option<FieldValue> {
        self.values.remove(field)
    }

    /// Drop every value.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Get an iterator over all field-value pairs, ordered by field id.
    pub fn iter(&self) -> impl Iterator<Item = (&FieldId, &FieldValue)> {
        self.values.iter()
    }

    /// Get the number of values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if there are no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Keep only values that belong to input fields of `template`.
    ///
    /// Headings and ids from other templates never end up in a submission.
    pub fn restricted_to(&self, template: &Template) -> Self {
        let values = template
            .fields()
            .filter(|field| field.kind().is_input())
            .filter_map(|field| {
                self.values
                    .get(field.id())
                    .map(|value| (field.id().clone(), value.clone()))
            })
            .collect();
        Self { values }
    }
}

impl FromIterator<(FieldId, FieldValue)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (FieldId, FieldValue)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for FormValues {
    type Item = (FieldId, FieldValue);
    type IntoIter = std::collections::btree_map::IntoIter<FieldId, FieldValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a FormValues {
    type Item = (&'a FieldId, &'a FieldValue);
    type IntoIter = std::collections::btree_map::Iter<'a, FieldId, FieldValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
