// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Collapsing of duplicate reporting restrictions.

use std::collections::HashMap;

use crate::types::ReportingRestriction;

/// Returns whether `existing` should be kept over `candidate`.
///
/// An undated restriction always loses to a dated one. When both are dated the
/// existing one is kept only if it is strictly older; equal dates and two
/// undated restrictions resolve to the candidate.
fn keeps_existing(existing: &ReportingRestriction, candidate: &ReportingRestriction) -> bool {
    match (existing.ordered_date, candidate.ordered_date) {
        (None, _) => false,
        (Some(_), None) => true,
        (Some(existing_date), Some(candidate_date)) => existing_date < candidate_date,
    }
}

/// Collapses restrictions sharing a label and originating result line.
///
/// Restrictions are keyed by [`ReportingRestriction::key`]. The first time a key
/// is seen fixes its position in the output; later restrictions with the same
/// key replace the kept one only when they are older (see `keeps_existing`).
/// Restrictions imposed by different result lines are never merged.
///
/// # Returns
///
/// `None` when `restrictions` is `None`, otherwise the deduplicated list.
#[must_use]
pub fn dedup_reporting_restrictions(
    restrictions: Option<Vec<ReportingRestriction>>,
) -> Option<Vec<ReportingRestriction>> {
    let restrictions: Vec<ReportingRestriction> = restrictions?;

    let mut positions: HashMap<String, usize> = HashMap::with_capacity(restrictions.len());
    let mut deduped: Vec<ReportingRestriction> = Vec::with_capacity(restrictions.len());

    for candidate in restrictions {
        let key: String = candidate.key();
        match positions.get(&key) {
            Some(&index) => {
                if !keeps_existing(&deduped[index], &candidate) {
                    deduped[index] = candidate;
                }
            }
            None => {
                positions.insert(key, deduped.len());
                deduped.push(candidate);
            }
        }
    }

    Some(deduped)
}
