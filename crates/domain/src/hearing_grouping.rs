// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Grouping of related next-hearing results into hearing listing needs.
//!
//! A shared hearing scatters results that point back at hearings which are
//! already listed. This module buckets those results by the hearing they point
//! at and rebuilds, per target hearing, a trimmed copy of the cases,
//! defendants and offences (plus the applications) that must be listed there.
//!
//! ## Ordering
//!
//! Target hearings, cases, defendants and offences are visited in identifier
//! order, so the output is deterministic for a given hearing. Applications keep
//! the order in which they appear on the hearing.
//!
//! ## Conflicting metadata
//!
//! When several results point at the same hearing but disagree on its court
//! centre, jurisdiction or duration, the last result visited wins. Case results
//! are visited before application results.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::committing_court::resolve_committing_court;
use crate::config::ListingPolicy;
use crate::error::DomainError;
use crate::judicial_results::{
    application_results, hearing_application_results, hearing_case_results,
};
use crate::types::{
    CaseId, CommittingCourt, CourtApplication, CourtCentre, Defendant, DefendantId, Hearing,
    HearingId, HearingListingNeeds, JudicialResult, NextHearing, Offence, OffenceId,
    ProsecutionCase, SeedingHearing,
};

/// Offences resulted into one target hearing: case → defendant → offences.
pub type CaseOffenceMap = BTreeMap<CaseId, BTreeMap<DefendantId, BTreeSet<OffenceId>>>;

/// Everything derived from a hearing's related next-hearing results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelatedHearings {
    /// One listing need per target hearing that has anything to list.
    pub listing_needs: Vec<HearingListingNeeds>,
    /// Offences resulted into each target hearing.
    pub case_offences_by_hearing: BTreeMap<HearingId, CaseOffenceMap>,
    /// Applications resulted into each target hearing, first-seen order.
    pub applications_by_hearing: BTreeMap<HearingId, Vec<CourtApplication>>,
    /// The last next-hearing value seen for each target hearing.
    pub next_hearings_by_hearing: BTreeMap<HearingId, NextHearing>,
}

/// How offences are stamped when copied into a listing need.
struct OffenceCopyContext<'a> {
    court_centre: Option<&'a CourtCentre>,
    should_populate_committing_court: bool,
    committing_court: Option<&'a CommittingCourt>,
    seeding_hearing: Option<&'a SeedingHearing>,
}

fn points_at(result: &JudicialResult, target: &HearingId) -> bool {
    result.existing_hearing_id() == Some(target)
}

/// Distinct existing hearing ids referenced by any case or application result.
fn target_hearing_ids(hearing: &Hearing) -> BTreeSet<HearingId> {
    hearing_case_results(hearing)
        .chain(hearing_application_results(hearing))
        .filter_map(JudicialResult::existing_hearing_id)
        .cloned()
        .collect()
}

/// Scans the cases for offences resulted into `target`, recording the last
/// matching next hearing into `last_next_hearing`.
fn collect_case_offences(
    hearing: &Hearing,
    target: &HearingId,
    last_next_hearing: &mut Option<NextHearing>,
) -> CaseOffenceMap {
    let mut case_offences: CaseOffenceMap = BTreeMap::new();

    for case in &hearing.prosecution_cases {
        for defendant in &case.defendants {
            for offence in &defendant.offences {
                let mut matched: bool = false;
                for result in offence.judicial_results.iter().filter(|r| points_at(r, target)) {
                    matched = true;
                    last_next_hearing.clone_from(&result.next_hearing);
                }

                if matched {
                    case_offences
                        .entry(case.id.clone())
                        .or_default()
                        .entry(defendant.id.clone())
                        .or_default()
                        .insert(offence.id.clone());
                }
            }
        }
    }

    case_offences
}

/// Scans the applications for those resulted into `target`. The first
/// application seen with a given id is kept.
fn collect_applications(
    hearing: &Hearing,
    target: &HearingId,
    last_next_hearing: &mut Option<NextHearing>,
) -> Vec<CourtApplication> {
    let mut applications: Vec<CourtApplication> = Vec::new();

    for application in &hearing.court_applications {
        let mut matched: bool = false;
        for result in application_results(application)
            .into_iter()
            .filter(|r| points_at(r, target))
        {
            matched = true;
            last_next_hearing.clone_from(&result.next_hearing);
        }

        if matched && !applications.iter().any(|a| a.id == application.id) {
            applications.push(application.clone());
        }
    }

    applications
}

fn copy_offence(offence: &Offence, context: &OffenceCopyContext<'_>) -> Offence {
    let committing_court: Option<CommittingCourt> = resolve_committing_court(
        offence,
        context.court_centre,
        context.should_populate_committing_court,
    )
    .map(|synthesized| context.committing_court.cloned().unwrap_or(synthesized))
    .or_else(|| offence.committing_court.clone());

    let seeding_hearing: Option<SeedingHearing> = context
        .seeding_hearing
        .cloned()
        .or_else(|| offence.seeding_hearing.clone());

    Offence {
        committing_court,
        seeding_hearing,
        ..offence.clone()
    }
}

fn copy_defendant(defendant: &Defendant, offences: Vec<Offence>) -> Defendant {
    Defendant {
        id: defendant.id.clone(),
        master_defendant_id: defendant.master_defendant_id.clone(),
        prosecution_case_id: defendant.prosecution_case_id.clone(),
        offences,
        defendant_judicial_results: defendant.defendant_judicial_results.clone(),
    }
}

fn copy_case(case: &ProsecutionCase, defendants: Vec<Defendant>) -> ProsecutionCase {
    ProsecutionCase {
        id: case.id.clone(),
        case_urn: case.case_urn.clone(),
        originating_organisation: case.originating_organisation.clone(),
        cps_organisation: case.cps_organisation.clone(),
        trial_receipt_type: case.trial_receipt_type.clone(),
        case_status: case.case_status.clone(),
        initiation_code: case.initiation_code.clone(),
        defendants,
    }
}

fn build_defendant(
    case: &ProsecutionCase,
    defendant_id: &DefendantId,
    offence_ids: &BTreeSet<OffenceId>,
    context: &OffenceCopyContext<'_>,
) -> Result<Defendant, DomainError> {
    let defendant: &Defendant = case
        .defendants
        .iter()
        .find(|d| &d.id == defendant_id)
        .ok_or_else(|| DomainError::DefendantNotFound {
            prosecution_case_id: case.id.clone(),
            defendant_id: defendant_id.clone(),
        })?;

    let offences: Vec<Offence> = offence_ids
        .iter()
        .map(|offence_id| {
            defendant
                .offences
                .iter()
                .find(|o| &o.id == offence_id)
                .map(|offence| copy_offence(offence, context))
                .ok_or_else(|| DomainError::OffenceNotFound {
                    defendant_id: defendant.id.clone(),
                    offence_id: offence_id.clone(),
                })
        })
        .collect::<Result<_, _>>()?;

    Ok(copy_defendant(defendant, offences))
}

fn build_prosecution_cases(
    hearing: &Hearing,
    case_offences: &CaseOffenceMap,
    context: &OffenceCopyContext<'_>,
) -> Result<Vec<ProsecutionCase>, DomainError> {
    case_offences
        .iter()
        .map(|(case_id, defendants)| -> Result<ProsecutionCase, DomainError> {
            let case: &ProsecutionCase = hearing
                .prosecution_cases
                .iter()
                .find(|c| &c.id == case_id)
                .ok_or_else(|| DomainError::ProsecutionCaseNotFound {
                    hearing_id: hearing.id.clone(),
                    prosecution_case_id: case_id.clone(),
                })?;

            let defendants: Vec<Defendant> = defendants
                .iter()
                .map(|(defendant_id, offence_ids)| {
                    build_defendant(case, defendant_id, offence_ids, context)
                })
                .collect::<Result<_, _>>()?;

            Ok(copy_case(case, defendants))
        })
        .collect()
}

/// Groups a hearing's related next-hearing results into listing needs.
///
/// # Arguments
///
/// * `hearing` - The shared hearing
/// * `should_populate_committing_court` - Whether committals were resulted
///   (see [`crate::check_result_lines_for_committing_court`])
/// * `committing_court` - A committing court resolved by the caller, used in
///   place of the synthesized one wherever one is due
/// * `seeding_hearing` - Stamped on every copied offence
/// * `policy` - Listing tunables
///
/// # Returns
///
/// One [`HearingListingNeeds`] per distinct existing hearing id that has case
/// or application matches, plus the raw per-hearing maps the bundles were
/// built from.
///
/// # Errors
///
/// Returns an error if:
/// - The policy is invalid
/// - A case, defendant or offence recorded during the scan cannot be found
///   again while copying (an invariant violation; the hearing is corrupt)
pub fn create_related_hearings(
    hearing: &Hearing,
    should_populate_committing_court: bool,
    committing_court: Option<&CommittingCourt>,
    seeding_hearing: Option<&SeedingHearing>,
    policy: &ListingPolicy,
) -> Result<RelatedHearings, DomainError> {
    policy.validate()?;

    let context = OffenceCopyContext {
        court_centre: hearing.court_centre.as_ref(),
        should_populate_committing_court,
        committing_court,
        seeding_hearing,
    };

    let mut related = RelatedHearings::default();

    for target in target_hearing_ids(hearing) {
        let mut last_next_hearing: Option<NextHearing> = None;
        let case_offences: CaseOffenceMap =
            collect_case_offences(hearing, &target, &mut last_next_hearing);
        let applications: Vec<CourtApplication> =
            collect_applications(hearing, &target, &mut last_next_hearing);

        let Some(next_hearing) = last_next_hearing else {
            continue;
        };

        if case_offences.is_empty() && applications.is_empty() {
            continue;
        }

        let prosecution_cases: Vec<ProsecutionCase> =
            build_prosecution_cases(hearing, &case_offences, &context)?;

        debug!(
            hearing_id = %hearing.id,
            target_hearing_id = %target,
            cases = prosecution_cases.len(),
            applications = applications.len(),
            "Grouped related next hearing results"
        );

        related.listing_needs.push(HearingListingNeeds {
            id: target.clone(),
            court_centre: next_hearing.court_centre.clone(),
            jurisdiction_type: next_hearing.jurisdiction_type,
            hearing_type: next_hearing.hearing_type.clone(),
            estimated_duration: next_hearing.estimated_duration.clone(),
            estimated_minutes: policy.estimated_minutes,
            listed_start_date_time: next_hearing.listed_start_date_time,
            prosecution_cases: (!prosecution_cases.is_empty()).then_some(prosecution_cases),
            court_applications: (!applications.is_empty()).then(|| applications.clone()),
        });

        if !case_offences.is_empty() {
            related
                .case_offences_by_hearing
                .insert(target.clone(), case_offences);
        }
        if !applications.is_empty() {
            related
                .applications_by_hearing
                .insert(target.clone(), applications);
        }
        related.next_hearings_by_hearing.insert(target, next_hearing);
    }

    Ok(related)
}
