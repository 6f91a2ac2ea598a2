// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod committing_court;
mod config;
mod error;
mod hearing_grouping;
mod identity;
mod judicial_results;
mod next_hearing;
mod reporting_restriction;
mod types;

#[cfg(test)]
mod tests;

pub use committing_court::{check_result_lines_for_committing_court, resolve_committing_court};
pub use config::{
    COMMITTED_TO_CROWN_COURT, DEFAULT_ESTIMATED_MINUTES, ListingPolicy, SENT_TO_CROWN_COURT,
};
pub use error::DomainError;
pub use hearing_grouping::{CaseOffenceMap, RelatedHearings, create_related_hearings};
pub use identity::{Identified, added_items, common_pairs, deleted_items};
pub use judicial_results::{
    all_hearing_results, application_results, case_offence_results, hearing_application_results,
    hearing_case_results,
};
pub use next_hearing::{
    has_hearing_contains_related_next_hearings,
    has_new_next_hearings_and_next_hearing_outside_of_multi_days_hearing,
    has_new_or_amended_next_hearing_results, is_next_hearing_deleted,
    next_hearings_listed_before, unscheduled_next_hearings_required_for,
};
pub use reporting_restriction::dedup_reporting_restrictions;

// Re-export public types
pub use types::{
    ApplicationId, CaseId, CommittingCourt, CourtApplication, CourtApplicationCase, CourtCentre,
    CourtCentreId, CourtOrder, CourtOrderOffence, Defendant, DefendantId, Hearing, HearingDay,
    HearingId, HearingListingNeeds, JudicialResult, JudicialResultId, JurisdictionType,
    NextHearing, Offence, OffenceForDefendant, OffenceId, ProsecutionCase, ReportingRestriction,
    SeedingHearing,
};
