// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Committing-court population for offences sent to the Crown Court.

use crate::config::ListingPolicy;
use crate::judicial_results::all_hearing_results;
use crate::types::{CommittingCourt, CourtCentre, Hearing, JurisdictionType, Offence};

/// Decides whether an offence needs a committing court synthesized.
///
/// A court is synthesized only when all of these hold:
/// - `should_populate` is set
/// - a court centre is supplied
/// - the offence has at least one judicial result
/// - the offence has no committing court yet
/// - some result's next hearing sits in the Crown Court
///
/// The synthesized court is the current (magistrates') court centre, with its
/// name reused as the short name. An existing committing court is never replaced.
///
/// # Arguments
///
/// * `offence` - The offence being copied into a listing need
/// * `court_centre` - The court centre of the hearing that resulted the offence
/// * `should_populate` - Output of [`check_result_lines_for_committing_court`]
#[must_use]
pub fn resolve_committing_court(
    offence: &Offence,
    court_centre: Option<&CourtCentre>,
    should_populate: bool,
) -> Option<CommittingCourt> {
    if !should_populate || offence.committing_court.is_some() || offence.judicial_results.is_empty()
    {
        return None;
    }

    let court_centre: &CourtCentre = court_centre?;

    let sent_to_crown_court: bool = offence
        .judicial_results
        .iter()
        .filter_map(|result| result.next_hearing.as_ref())
        .any(|nh| nh.jurisdiction_type == Some(JurisdictionType::Crown));

    if !sent_to_crown_court {
        return None;
    }

    Some(CommittingCourt {
        court_centre_id: court_centre.id.clone(),
        court_house_code: court_centre.code.clone(),
        court_house_name: court_centre.name.clone(),
        court_house_short_name: court_centre.name.clone(),
        court_house_type: JurisdictionType::Magistrates,
    })
}

/// Returns whether any result on the hearing commits or sends the case to the
/// Crown Court.
///
/// Offence, defendant-level and application results are all checked against
/// the policy's committal group labels.
#[must_use]
pub fn check_result_lines_for_committing_court(hearing: &Hearing, policy: &ListingPolicy) -> bool {
    all_hearing_results(hearing).iter().any(|result| {
        result
            .result_definition_group
            .as_deref()
            .is_some_and(|group| policy.is_committal_group(group))
    })
}
