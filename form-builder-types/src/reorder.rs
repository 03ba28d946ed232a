//! Ordering of sections within a template and fields within a section.
//!
//! Both levels share one algorithm: a drag reports which item moved and which
//! item it was dropped on, `plan_move` turns those ids into indices, and
//! `move_permutation` produces the new order.

use crate::{Field, FieldId, Section, SectionId};

/// An item with a stable identity inside an ordered collection.
pub trait Identified {
    /// The identifier type.
    type Id: PartialEq;

    /// Get the item's id.
    fn id(&self) -> &Self::Id;
}

impl Identified for Section {
    type Id = SectionId;

    fn id(&self) -> &SectionId {
        Section::id(self)
    }
}

impl Identified for Field {
    type Id = FieldId;

    fn id(&self) -> &FieldId {
        Field::id(self)
    }
}

/// Move the element at `from` to position `to`, shifting the elements in
/// between by one. All other elements keep their relative order.
///
/// `from == to` returns the sequence unchanged, as do out-of-range indices.
///
/// ```
/// use form_builder_types::move_permutation;
///
/// assert_eq!(move_permutation(vec!['A', 'B', 'C', 'D'], 0, 2), vec!['B', 'C', 'A', 'D']);
/// assert_eq!(move_permutation(vec!['A', 'B', 'C', 'D'], 3, 1), vec!['A', 'D', 'B', 'C']);
/// ```
pub fn move_permutation<T>(mut items: Vec<T>, from: usize, to: usize) -> Vec<T> {
    if from == to || from >= items.len() || to >= items.len() {
        return items;
    }
    let item = items.remove(from);
    items.insert(to, item);
    items
}

/// Locate a drag's `active` and `over` ids in `items`.
///
/// Returns `None` when either id is missing or the item was dropped onto itself,
/// in which case no reorder should happen.
pub fn plan_move<T: Identified>(
    items: &[T],
    active: &T::Id,
    over: &T::Id,
) -> Option<(usize, usize)> {
    if active == over {
        return None;
    }
    let from = items.iter().position(|item| item.id() == active)?;
    let to = items.iter().position(|item| item.id() == over)?;
    Some((from, to))
}

/// Rearrange `items` into the order given by `order`.
///
/// `order` must name every current item exactly once; anything else leaves
/// `items` untouched, so identities can never be lost or duplicated through a
/// reorder. Returns whether the order changed.
pub fn permute_by_ids<T: Identified>(items: &mut Vec<T>, order: &[T::Id]) -> bool {
    if order.len() != items.len() {
        return false;
    }

    let mut taken = vec![false; items.len()];
    let mut indices = Vec::with_capacity(order.len());
    for id in order {
        match items.iter().position(|item| item.id() == id) {
            Some(index) if !taken[index] => {
                taken[index] = true;
                indices.push(index);
            }
            _ => return false,
        }
    }

    if indices.iter().copied().eq(0..items.len()) {
        return false;
    }

    let mut slots: Vec<Option<T>> = std::mem::take(items).into_iter().map(Some).collect();
    *items = indices
        .into_iter()
        .filter_map(|index| slots[index].take())
        .collect();
    true
}
