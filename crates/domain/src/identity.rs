// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Set difference and intersection over entities keyed by their identity.
//!
//! Empty slices are ordinary empty collections; none of these functions fail.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::types::{
    ApplicationId, CaseId, CourtApplication, Defendant, DefendantId, Offence, OffenceForDefendant,
    OffenceId, ProsecutionCase,
};

/// An entity compared by an identity key rather than by value.
pub trait Identified {
    /// The identity key type.
    type Id: Eq + Hash + Clone;

    /// Returns the identity key.
    fn identity(&self) -> &Self::Id;
}

impl Identified for Offence {
    type Id = OffenceId;

    fn identity(&self) -> &OffenceId {
        &self.id
    }
}

impl Identified for OffenceForDefendant {
    type Id = OffenceId;

    fn identity(&self) -> &OffenceId {
        &self.id
    }
}

impl Identified for Defendant {
    type Id = DefendantId;

    fn identity(&self) -> &DefendantId {
        &self.id
    }
}

impl Identified for ProsecutionCase {
    type Id = CaseId;

    fn identity(&self) -> &CaseId {
        &self.id
    }
}

impl Identified for CourtApplication {
    type Id = ApplicationId;

    fn identity(&self) -> &ApplicationId {
        &self.id
    }
}

/// Returns every element of `new_items` whose identity is absent from `old_items`.
///
/// The order of `new_items` is preserved.
#[must_use]
pub fn added_items<'a, T: Identified>(new_items: &'a [T], old_items: &[T]) -> Vec<&'a T> {
    let old_ids: HashSet<&T::Id> = old_items.iter().map(Identified::identity).collect();

    new_items
        .iter()
        .filter(|item| !old_ids.contains(item.identity()))
        .collect()
}

/// Returns every element of `old_items` whose identity is absent from `new_items`.
#[must_use]
pub fn deleted_items<'a, T: Identified>(new_items: &[T], old_items: &'a [T]) -> Vec<&'a T> {
    added_items(old_items, new_items)
}

/// Pairs up elements present on both sides as `(old, new)`.
///
/// Pairs follow the order of `new_items`. When `old_items` repeats an identity
/// the first occurrence is the one paired.
#[must_use]
pub fn common_pairs<'a, T: Identified>(
    new_items: &'a [T],
    old_items: &'a [T],
) -> Vec<(&'a T, &'a T)> {
    let mut old_by_id: HashMap<&T::Id, &T> = HashMap::with_capacity(old_items.len());
    for item in old_items {
        old_by_id.entry(item.identity()).or_insert(item);
    }

    new_items
        .iter()
        .filter_map(|new_item| {
            old_by_id
                .get(new_item.identity())
                .map(|old_item| (*old_item, new_item))
        })
        .collect()
}
