// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Classification of a hearing's next-hearing results.
//!
//! Each predicate reads the union of offence-level results on every
//! prosecution case and every result reachable from a court application.
//! Defendant-level results are not next-hearing carriers and are ignored here.

use time::{Date, OffsetDateTime, UtcOffset};

use crate::judicial_results::{hearing_application_results, hearing_case_results};
use crate::types::{Hearing, JudicialResult, NextHearing};

fn hearing_results(hearing: &Hearing) -> Vec<&JudicialResult> {
    hearing_case_results(hearing)
        .chain(hearing_application_results(hearing))
        .collect()
}

/// Returns whether the hearing carries next-hearing results added or amended
/// at this sharing.
///
/// Case results qualify only when they carry a next hearing that is not an
/// application listing. Application results qualify on the amendment flag alone.
#[must_use]
pub fn has_new_or_amended_next_hearing_results(hearing: &Hearing) -> bool {
    let case_side: bool = hearing_case_results(hearing).any(|result| {
        result.is_new_amendment
            && result
                .next_hearing
                .as_ref()
                .is_some_and(|nh| nh.application_type_code.is_none())
    });

    case_side
        || hearing_application_results(hearing)
            .iter()
            .any(|result| result.is_new_amendment)
}

fn has_next_hearing(hearing: &Hearing) -> bool {
    hearing_results(hearing)
        .iter()
        .any(|result| result.next_hearing.is_some())
}

/// Detects that a previously resulted next hearing was removed when the
/// results were edited.
///
/// # Arguments
///
/// * `hearing` - The hearing as now shared
/// * `previous` - The hearing as last shared, if it was shared before
///
/// # Returns
///
/// `true` only if `previous` carried a next-hearing result and `hearing` carries none.
#[must_use]
pub fn is_next_hearing_deleted(hearing: &Hearing, previous: Option<&Hearing>) -> bool {
    previous.is_some_and(|previous| has_next_hearing(previous) && !has_next_hearing(hearing))
}

fn requires_unscheduled_hearing(result: &JudicialResult) -> bool {
    result.is_new_amendment
        && (result.is_unscheduled
            || result
                .next_hearing
                .as_ref()
                .is_some_and(|nh| nh.date_to_be_fixed))
}

/// Returns whether a new or amended result needs a hearing with no date yet.
#[must_use]
pub fn unscheduled_next_hearings_required_for(hearing: &Hearing) -> bool {
    hearing_results(hearing)
        .into_iter()
        .any(requires_unscheduled_hearing)
}

/// Returns whether a new or amended result points back into an existing hearing.
#[must_use]
pub fn has_hearing_contains_related_next_hearings(hearing: &Hearing) -> bool {
    hearing_results(hearing)
        .iter()
        .any(|result| result.is_new_amendment && result.existing_hearing_id().is_some())
}

fn is_outside_current_hearing(
    hearing: &Hearing,
    sitting_dates: &[Date],
    next_hearing: &NextHearing,
) -> bool {
    if hearing.is_single_day() {
        return true;
    }

    match next_hearing.listed_start_date_time {
        Some(listed_start) => {
            let listed_date: Date = listed_start.to_offset(UtcOffset::UTC).date();
            !sitting_dates.contains(&listed_date)
        }
        None => !sitting_dates.is_empty(),
    }
}

/// Returns whether a result asks for a brand new hearing that is not simply
/// another sitting of this one.
///
/// Only next hearings without an existing hearing id are considered. Such a
/// next hearing is outside the current hearing when the current hearing sits
/// for a single day, when its listed date is none of the sitting days, or when
/// it has no listed date at all while sitting days exist.
#[must_use]
pub fn has_new_next_hearings_and_next_hearing_outside_of_multi_days_hearing(
    hearing: &Hearing,
) -> bool {
    let sitting_dates: Vec<Date> = hearing.sitting_dates();

    hearing_results(hearing)
        .iter()
        .filter_map(|result| result.next_hearing.as_ref())
        .filter(|nh| nh.existing_hearing_id.is_none())
        .any(|nh| is_outside_current_hearing(hearing, &sitting_dates, nh))
}

/// Returns whether a new or amended next hearing is listed before `now`.
///
/// Listing in the past is allowed, but it is almost always a keying error.
#[must_use]
pub fn next_hearings_listed_before(hearing: &Hearing, now: OffsetDateTime) -> bool {
    hearing_results(hearing)
        .iter()
        .filter(|result| result.is_new_amendment)
        .filter_map(|result| result.next_hearing.as_ref())
        .filter_map(|nh| nh.listed_start_date_time)
        .any(|listed_start| listed_start < now)
}
