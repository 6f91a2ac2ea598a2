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

//! Events emitted when offences change or hearing results are shared.
//!
//! Events are immutable once created. Optional partitions that would be empty
//! are `None` and are left out of the serialized form entirely.

use progression_domain::{
    CaseId, DefendantId, HearingId, HearingListingNeeds, Offence, OffenceForDefendant, OffenceId,
    SeedingHearing,
};
use serde::{Deserialize, Serialize};
use time::Date;

/// Offences on a prosecution case defendant were added, updated or removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefendantOffencesChanged {
    /// The prosecution case the defendant belongs to.
    pub prosecution_case_id: CaseId,
    /// The defendant whose offences changed.
    pub defendant_id: DefendantId,
    /// Date the change was made.
    pub modified_date: Date,
    /// Offences present in the command but not in stored state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added_offences: Option<Vec<Offence>>,
    /// Offences present on both sides whose compared fields differ.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_offences: Option<Vec<Offence>>,
    /// Offences in stored state that the command no longer carries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_offences: Option<Vec<Offence>>,
}

/// Offences for one defendant within one case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefendantOffenceGroup {
    /// The defendant.
    pub defendant_id: DefendantId,
    /// The case.
    pub prosecution_case_id: CaseId,
    /// The offences.
    pub offences: Vec<OffenceForDefendant>,
}

/// Identifiers of offences removed from one defendant within one case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletedOffenceGroup {
    /// The defendant.
    pub defendant_id: DefendantId,
    /// The case.
    pub prosecution_case_id: CaseId,
    /// Removed offence identifiers.
    pub offences: Vec<OffenceId>,
}

/// Offences held for a defendant were added, updated or removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OffencesForDefendantChanged {
    /// Date the change was made.
    pub modified_date: Date,
    /// Offences present in the command but not held for the defendant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added_offences: Option<Vec<DefendantOffenceGroup>>,
    /// Offences held on both sides whose compared fields differ.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_offences: Option<Vec<DefendantOffenceGroup>>,
    /// Offences held for the defendant that the command no longer carries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_offences: Option<Vec<DeletedOffenceGroup>>,
}

/// New hearings must be created for next-hearing results outside the
/// current hearing's sitting days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextHearingsRequested {
    /// The hearing whose results asked for the new hearings.
    pub hearing_id: HearingId,
    /// At least one new or amended next hearing is listed in the past.
    pub contains_past_dated_listing: bool,
}

/// Cases, defendants, offences and applications must be added to a hearing
/// that is already listed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedHearingUpdateRequested {
    /// The hearing whose results produced the update.
    pub seeding_hearing: SeedingHearing,
    /// Everything to list at the target hearing.
    pub listing_needs: HearingListingNeeds,
}

/// A hearing with no fixed date must be listed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnscheduledHearingListingRequested {
    /// The hearing whose results asked for it.
    pub hearing_id: HearingId,
}

/// A previously resulted next hearing was removed when results were edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextHearingsDeleted {
    /// The hearing whose results were edited.
    pub hearing_id: HearingId,
}

/// Every event emitted by the progression aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event")]
pub enum ProgressionEvent {
    /// See [`DefendantOffencesChanged`].
    DefendantOffencesChanged(DefendantOffencesChanged),
    /// See [`OffencesForDefendantChanged`].
    OffencesForDefendantChanged(OffencesForDefendantChanged),
    /// See [`NextHearingsRequested`].
    NextHearingsRequested(NextHearingsRequested),
    /// See [`RelatedHearingUpdateRequested`].
    RelatedHearingUpdateRequested(RelatedHearingUpdateRequested),
    /// See [`UnscheduledHearingListingRequested`].
    UnscheduledHearingListingRequested(UnscheduledHearingListingRequested),
    /// See [`NextHearingsDeleted`].
    NextHearingsDeleted(NextHearingsDeleted),
}

impl ProgressionEvent {
    /// Returns the event name used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::DefendantOffencesChanged(_) => "DefendantOffencesChanged",
            Self::OffencesForDefendantChanged(_) => "OffencesForDefendantChanged",
            Self::NextHearingsRequested(_) => "NextHearingsRequested",
            Self::RelatedHearingUpdateRequested(_) => "RelatedHearingUpdateRequested",
            Self::UnscheduledHearingListingRequested(_) => "UnscheduledHearingListingRequested",
            Self::NextHearingsDeleted(_) => "NextHearingsDeleted",
        }
    }
}
