// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Added, updated and deleted partitions between a command's offences and the
//! offences already held for a defendant.

use progression_domain::{
    CaseId, DefendantId, Identified, Offence, OffenceForDefendant, OffenceId, added_items,
    common_pairs,
};
use progression_events::{
    DefendantOffenceGroup, DefendantOffencesChanged, DeletedOffenceGroup,
    OffencesForDefendantChanged,
};
use time::Date;

/// An offence shape that can be compared field by field against its stored value.
pub trait ComparableOffence: Identified + Clone {
    /// Returns a copy with fields the command left out filled from `existing`.
    ///
    /// The default copies `self` unchanged.
    #[must_use]
    fn with_fallbacks_from(&self, _existing: &Self) -> Self {
        self.clone()
    }

    /// Returns whether any compared field differs from `existing`.
    fn has_changes_from(&self, existing: &Self) -> bool;
}

impl ComparableOffence for Offence {
    fn with_fallbacks_from(&self, existing: &Self) -> Self {
        Self {
            offence_title_welsh: self
                .offence_title_welsh
                .clone()
                .or_else(|| existing.offence_title_welsh.clone()),
            offence_legislation: self
                .offence_legislation
                .clone()
                .or_else(|| existing.offence_legislation.clone()),
            offence_legislation_welsh: self
                .offence_legislation_welsh
                .clone()
                .or_else(|| existing.offence_legislation_welsh.clone()),
            ..self.clone()
        }
    }

    fn has_changes_from(&self, existing: &Self) -> bool {
        self.offence_code != existing.offence_code
            || self.wording != existing.wording
            || self.start_date != existing.start_date
            || self.offence_title != existing.offence_title
            || self.count != existing.count
            || self.offence_title_welsh != existing.offence_title_welsh
            || self.offence_legislation != existing.offence_legislation
            || self.offence_legislation_welsh != existing.offence_legislation_welsh
    }
}

impl ComparableOffence for OffenceForDefendant {
    fn has_changes_from(&self, existing: &Self) -> bool {
        self.offence_code != existing.offence_code
            || self.wording != existing.wording
            || self.start_date != existing.start_date
            || self.end_date != existing.end_date
            || self.count != existing.count
            || self.conviction_date != existing.conviction_date
    }
}

struct Partitions<T> {
    added: Vec<T>,
    updated: Vec<T>,
    deleted: Vec<T>,
}

impl<T> Partitions<T> {
    fn is_empty(&self) -> bool {
        self.added.is_empty() && self.updated.is_empty() && self.deleted.is_empty()
    }
}

fn partition<T: ComparableOffence>(command: &[T], existing: &[T]) -> Partitions<T> {
    let added: Vec<T> = added_items(command, existing).into_iter().cloned().collect();
    let deleted: Vec<T> = added_items(existing, command).into_iter().cloned().collect();
    let updated: Vec<T> = common_pairs(command, existing)
        .into_iter()
        .filter_map(|(old, new)| {
            let merged: T = new.with_fallbacks_from(old);
            merged.has_changes_from(old).then_some(merged)
        })
        .collect();

    Partitions {
        added,
        updated,
        deleted,
    }
}

fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    (!items.is_empty()).then_some(items)
}

/// Returns whether the command's offences change what is held.
///
/// Either side being empty always counts as a change, even when both are.
#[must_use]
pub fn is_offences_updated<T: ComparableOffence>(command: &[T], existing: &[T]) -> bool {
    command.is_empty() || existing.is_empty() || !partition(command, existing).is_empty()
}

/// Returns the offences to hold after applying the command.
///
/// Offences present on both sides keep the stored value of any field the
/// command left out. Command order is preserved.
#[must_use]
pub fn merge_offences<T: ComparableOffence>(command: &[T], existing: &[T]) -> Vec<T> {
    command
        .iter()
        .map(|new| {
            existing
                .iter()
                .find(|old| old.identity() == new.identity())
                .map_or_else(|| new.clone(), |old| new.with_fallbacks_from(old))
        })
        .collect()
}

/// Diffs a prosecution case defendant's offences.
///
/// # Arguments
///
/// * `command` - Offences carried by the command
/// * `existing` - Offences currently held for the defendant
/// * `prosecution_case_id` - The owning case
/// * `defendant_id` - The defendant
/// * `modified_date` - Stamped on the event
///
/// # Returns
///
/// `None` when nothing was added, updated or deleted. Otherwise one event in
/// which each empty partition is `None`.
#[must_use]
pub fn diff_offences(
    command: &[Offence],
    existing: &[Offence],
    prosecution_case_id: &CaseId,
    defendant_id: &DefendantId,
    modified_date: Date,
) -> Option<DefendantOffencesChanged> {
    let partitions: Partitions<Offence> = partition(command, existing);
    if partitions.is_empty() {
        return None;
    }

    Some(DefendantOffencesChanged {
        prosecution_case_id: prosecution_case_id.clone(),
        defendant_id: defendant_id.clone(),
        modified_date,
        added_offences: non_empty(partitions.added),
        updated_offences: non_empty(partitions.updated),
        deleted_offences: non_empty(partitions.deleted),
    })
}

/// Diffs the offences held for a defendant.
///
/// Same rules as [`diff_offences`], with each partition wrapped in a single
/// group for `(defendant_id, prosecution_case_id)`. Deleted offences are
/// reported by identifier only.
#[must_use]
pub fn diff_offences_for_defendant(
    command: &[OffenceForDefendant],
    existing: &[OffenceForDefendant],
    defendant_id: &DefendantId,
    prosecution_case_id: &CaseId,
    modified_date: Date,
) -> Option<OffencesForDefendantChanged> {
    let partitions: Partitions<OffenceForDefendant> = partition(command, existing);
    if partitions.is_empty() {
        return None;
    }

    let group = |offences: Vec<OffenceForDefendant>| {
        non_empty(offences).map(|offences| {
            vec![DefendantOffenceGroup {
                defendant_id: defendant_id.clone(),
                prosecution_case_id: prosecution_case_id.clone(),
                offences,
            }]
        })
    };

    let deleted_ids: Vec<OffenceId> = partitions
        .deleted
        .iter()
        .map(|offence| offence.id.clone())
        .collect();

    Some(OffencesForDefendantChanged {
        modified_date,
        added_offences: group(partitions.added),
        updated_offences: group(partitions.updated),
        deleted_offences: non_empty(deleted_ids).map(|offences| {
            vec![DeletedOffenceGroup {
                defendant_id: defendant_id.clone(),
                prosecution_case_id: prosecution_case_id.clone(),
                offences,
            }]
        }),
    })
}
