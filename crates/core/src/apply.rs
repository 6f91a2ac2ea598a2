// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use progression_domain::{
    CaseId, CommittingCourt, DefendantId, Hearing, HearingListingNeeds, Offence,
    OffenceForDefendant, RelatedHearings, SeedingHearing, check_result_lines_for_committing_court,
    create_related_hearings, has_hearing_contains_related_next_hearings,
    has_new_next_hearings_and_next_hearing_outside_of_multi_days_hearing,
    has_new_or_amended_next_hearing_results, is_next_hearing_deleted, next_hearings_listed_before,
    unscheduled_next_hearings_required_for,
};
use progression_events::{
    NextHearingsDeleted, NextHearingsRequested, ProgressionEvent, RelatedHearingUpdateRequested,
    UnscheduledHearingListingRequested,
};
use time::{Date, OffsetDateTime, UtcOffset};
use tracing::{debug, info, warn};

use crate::command::Command;
use crate::error::CoreError;
use crate::offence_diff::{
    diff_offences, diff_offences_for_defendant, is_offences_updated, merge_offences,
};
use crate::state::{DefendantKey, DefendantState, State, TransitionResult};

/// Applies a command to the current state, producing a new state and events.
///
/// # Arguments
///
/// * `state` - The current state (immutable)
/// * `command` - The command to apply
/// * `now` - The current instant; its UTC date stamps offence change events
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new state and emitted events
/// * `Err(CoreError)` if the command cannot be applied
///
/// # Errors
///
/// Returns an error if:
/// - The listing policy held in state is invalid
/// - The shared hearing is internally inconsistent
pub fn apply(
    state: &State,
    command: Command,
    now: OffsetDateTime,
) -> Result<TransitionResult, CoreError> {
    let modified_date: Date = now.to_offset(UtcOffset::UTC).date();

    let result: TransitionResult = match command {
        Command::UpdateDefendantOffences {
            prosecution_case_id,
            defendant_id,
            offences,
        } => update_defendant_offences(
            state,
            prosecution_case_id,
            defendant_id,
            &offences,
            modified_date,
        ),
        Command::UpdateOffencesForDefendant {
            prosecution_case_id,
            defendant_id,
            offences,
        } => update_offences_for_defendant(
            state,
            prosecution_case_id,
            defendant_id,
            &offences,
            modified_date,
        ),
        Command::ShareHearingResults {
            hearing,
            committing_court,
        } => share_hearing_results(state, hearing, committing_court.as_ref(), now)?,
    };

    for event in &result.events {
        info!(event = event.name(), "Emitted progression event");
    }
    debug!(
        before = %state.to_snapshot(),
        after = %result.new_state.to_snapshot(),
        "Applied command"
    );

    Ok(result)
}

fn unchanged(state: &State) -> TransitionResult {
    TransitionResult {
        new_state: state.clone(),
        events: Vec::new(),
    }
}

fn update_defendant_offences(
    state: &State,
    prosecution_case_id: CaseId,
    defendant_id: DefendantId,
    offences: &[Offence],
    modified_date: Date,
) -> TransitionResult {
    let key: DefendantKey = DefendantKey::new(prosecution_case_id, defendant_id);
    let existing: &[Offence] = state.offences(&key);

    if !is_offences_updated(offences, existing) {
        debug!(defendant_id = %key.defendant_id, "Offences unchanged");
        return unchanged(state);
    }

    let Some(changed) = diff_offences(
        offences,
        existing,
        &key.prosecution_case_id,
        &key.defendant_id,
        modified_date,
    ) else {
        return unchanged(state);
    };

    let merged: Vec<Offence> = merge_offences(offences, existing);
    let mut new_state: State = state.clone();
    new_state.defendants.entry(key).or_default().offences = merged;

    TransitionResult {
        new_state,
        events: vec![ProgressionEvent::DefendantOffencesChanged(changed)],
    }
}

fn update_offences_for_defendant(
    state: &State,
    prosecution_case_id: CaseId,
    defendant_id: DefendantId,
    offences: &[OffenceForDefendant],
    modified_date: Date,
) -> TransitionResult {
    let key: DefendantKey = DefendantKey::new(prosecution_case_id, defendant_id);
    let existing: &[OffenceForDefendant] = state.offences_for_defendant(&key);

    let Some(changed) = diff_offences_for_defendant(
        offences,
        existing,
        &key.defendant_id,
        &key.prosecution_case_id,
        modified_date,
    ) else {
        debug!(defendant_id = %key.defendant_id, "Offences for defendant unchanged");
        return unchanged(state);
    };

    let merged: Vec<OffenceForDefendant> = merge_offences(offences, existing);
    let mut new_state: State = state.clone();
    let defendant: &mut DefendantState = new_state.defendants.entry(key).or_default();
    defendant.offences_for_defendant = merged;

    TransitionResult {
        new_state,
        events: vec![ProgressionEvent::OffencesForDefendantChanged(changed)],
    }
}

fn seeding_hearing_for(hearing: &Hearing) -> SeedingHearing {
    SeedingHearing {
        seeding_hearing_id: hearing.id.clone(),
        sitting_day: hearing.first_sitting_day(),
        jurisdiction_type: hearing.jurisdiction_type,
    }
}

fn related_hearing_events(
    state: &State,
    hearing: &Hearing,
    committing_court: Option<&CommittingCourt>,
) -> Result<Vec<ProgressionEvent>, CoreError> {
    let should_populate_committing_court: bool =
        check_result_lines_for_committing_court(hearing, &state.policy);
    let seeding_hearing: SeedingHearing = seeding_hearing_for(hearing);

    let related: RelatedHearings = create_related_hearings(
        hearing,
        should_populate_committing_court,
        committing_court,
        Some(&seeding_hearing),
        &state.policy,
    )?;

    Ok(related
        .listing_needs
        .into_iter()
        .map(|listing_needs: HearingListingNeeds| {
            ProgressionEvent::RelatedHearingUpdateRequested(RelatedHearingUpdateRequested {
                seeding_hearing: seeding_hearing.clone(),
                listing_needs,
            })
        })
        .collect())
}

fn share_hearing_results(
    state: &State,
    hearing: Hearing,
    committing_court: Option<&CommittingCourt>,
    now: OffsetDateTime,
) -> Result<TransitionResult, CoreError> {
    state.policy.validate()?;

    let mut events: Vec<ProgressionEvent> = Vec::new();

    if is_next_hearing_deleted(&hearing, state.previous_hearing(&hearing.id)) {
        events.push(ProgressionEvent::NextHearingsDeleted(NextHearingsDeleted {
            hearing_id: hearing.id.clone(),
        }));
    }

    if has_new_or_amended_next_hearing_results(&hearing)
        && has_new_next_hearings_and_next_hearing_outside_of_multi_days_hearing(&hearing)
    {
        let contains_past_dated_listing: bool = next_hearings_listed_before(&hearing, now);
        if contains_past_dated_listing {
            warn!(hearing_id = %hearing.id, "Next hearing listed in the past");
        }
        events.push(ProgressionEvent::NextHearingsRequested(
            NextHearingsRequested {
                hearing_id: hearing.id.clone(),
                contains_past_dated_listing,
            },
        ));
    }

    if has_hearing_contains_related_next_hearings(&hearing) {
        events.extend(related_hearing_events(state, &hearing, committing_court)?);
    }

    if unscheduled_next_hearings_required_for(&hearing) {
        events.push(ProgressionEvent::UnscheduledHearingListingRequested(
            UnscheduledHearingListingRequested {
                hearing_id: hearing.id.clone(),
            },
        ));
    }

    let mut new_state: State = state.clone();
    new_state.shared_hearings.insert(hearing.id.clone(), hearing);

    Ok(TransitionResult { new_state, events })
}
