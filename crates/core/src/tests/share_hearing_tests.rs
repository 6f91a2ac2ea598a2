// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use progression_domain::{
    CommittingCourt, CourtCentreId, DomainError, Hearing, HearingId, JudicialResult,
    JurisdictionType, ListingPolicy,
};
use progression_events::{ProgressionEvent, RelatedHearingUpdateRequested};
use time::macros::{date, datetime};

use crate::{Command, CoreError, State, TransitionResult, apply};

use super::helpers::{
    create_test_hearing, create_test_now, new_hearing_result, related_result, unscheduled_result,
};

fn share(state: &State, hearing: Hearing) -> TransitionResult {
    apply(
        state,
        Command::ShareHearingResults {
            hearing,
            committing_court: None,
        },
        create_test_now(),
    )
    .unwrap()
}

fn event_names(result: &TransitionResult) -> Vec<&'static str> {
    result.events.iter().map(ProgressionEvent::name).collect()
}

fn related_update(result: &TransitionResult) -> &RelatedHearingUpdateRequested {
    result
        .events
        .iter()
        .find_map(|event| match event {
            ProgressionEvent::RelatedHearingUpdateRequested(update) => Some(update),
            _ => None,
        })
        .expect("Expected RelatedHearingUpdateRequested")
}

fn committed(result: JudicialResult) -> JudicialResult {
    JudicialResult {
        result_definition_group: Some(String::from("CommittedToCC")),
        ..result
    }
}

#[test]
fn test_new_next_hearing_is_requested() {
    let state: State = State::default();
    let hearing: Hearing =
        create_test_hearing(vec![new_hearing_result("r1", Some(datetime!(2026-03-16 10:00 UTC)))]);

    let result: TransitionResult = share(&state, hearing);

    assert_eq!(result.events.len(), 1);
    assert_eq!(
        result.events[0],
        ProgressionEvent::NextHearingsRequested(progression_events::NextHearingsRequested {
            hearing_id: HearingId::new("hearing-1"),
            contains_past_dated_listing: false,
        })
    );
}

#[test]
fn test_past_dated_next_hearing_is_flagged() {
    let state: State = State::default();
    let hearing: Hearing =
        create_test_hearing(vec![new_hearing_result("r1", Some(datetime!(2026-02-23 10:00 UTC)))]);

    let result: TransitionResult = share(&state, hearing);

    assert!(matches!(
        &result.events[0],
        ProgressionEvent::NextHearingsRequested(requested) if requested.contains_past_dated_listing
    ));
}

#[test]
fn test_related_next_hearing_requests_update() {
    let state: State = State::default();
    let hearing: Hearing = create_test_hearing(vec![related_result("r1", "hearing-9")]);

    let result: TransitionResult = share(&state, hearing);

    assert_eq!(event_names(&result), vec!["RelatedHearingUpdateRequested"]);
    let update: &RelatedHearingUpdateRequested = related_update(&result);
    assert_eq!(update.listing_needs.id, HearingId::new("hearing-9"));
    assert_eq!(update.listing_needs.estimated_minutes, 30);
    assert_eq!(update.seeding_hearing.seeding_hearing_id, HearingId::new("hearing-1"));
    assert_eq!(update.seeding_hearing.sitting_day, Some(date!(2026 - 03 - 02)));
    assert_eq!(
        update.seeding_hearing.jurisdiction_type,
        Some(JurisdictionType::Magistrates)
    );

    let offence = &update.listing_needs.prosecution_cases.as_ref().unwrap()[0].defendants[0]
        .offences[0];
    assert_eq!(offence.seeding_hearing, Some(update.seeding_hearing.clone()));
    assert_eq!(offence.committing_court, None);
}

#[test]
fn test_committal_populates_committing_court() {
    let state: State = State::default();
    let hearing: Hearing = create_test_hearing(vec![committed(related_result("r1", "hearing-9"))]);

    let result: TransitionResult = share(&state, hearing);

    let update: &RelatedHearingUpdateRequested = related_update(&result);
    let offence = &update.listing_needs.prosecution_cases.as_ref().unwrap()[0].defendants[0]
        .offences[0];
    let committing: &CommittingCourt = offence.committing_court.as_ref().unwrap();
    assert_eq!(committing.court_centre_id, CourtCentreId::new("cc-lavender"));
    assert_eq!(committing.court_house_type, JurisdictionType::Magistrates);
}

#[test]
fn test_resolved_committing_court_is_used() {
    let state: State = State::default();
    let hearing: Hearing = create_test_hearing(vec![committed(related_result("r1", "hearing-9"))]);
    let resolved: CommittingCourt = CommittingCourt {
        court_centre_id: CourtCentreId::new("cc-resolved"),
        court_house_code: Some(String::from("B01LY01")),
        court_house_name: String::from("Lavender Hill"),
        court_house_short_name: String::from("LH"),
        court_house_type: JurisdictionType::Magistrates,
    };

    let result: TransitionResult = apply(
        &state,
        Command::ShareHearingResults {
            hearing,
            committing_court: Some(resolved.clone()),
        },
        create_test_now(),
    )
    .unwrap();

    let update: &RelatedHearingUpdateRequested = related_update(&result);
    let offence = &update.listing_needs.prosecution_cases.as_ref().unwrap()[0].defendants[0]
        .offences[0];
    assert_eq!(offence.committing_court, Some(resolved));
}

#[test]
fn test_unscheduled_hearing_is_requested() {
    let state: State = State::default();
    let hearing: Hearing = create_test_hearing(vec![unscheduled_result("r1")]);

    let result: TransitionResult = share(&state, hearing);

    assert_eq!(event_names(&result), vec!["UnscheduledHearingListingRequested"]);
}

#[test]
fn test_events_are_emitted_in_order() {
    let state: State = State::default();
    let hearing: Hearing = create_test_hearing(vec![
        unscheduled_result("r3"),
        related_result("r2", "hearing-9"),
        new_hearing_result("r1", Some(datetime!(2026-03-16 10:00 UTC))),
    ]);

    let result: TransitionResult = share(&state, hearing);

    assert_eq!(
        event_names(&result),
        vec![
            "NextHearingsRequested",
            "RelatedHearingUpdateRequested",
            "UnscheduledHearingListingRequested",
        ]
    );
}

#[test]
fn test_shared_hearing_becomes_previous_hearing() {
    let state: State = State::default();
    let hearing: Hearing = create_test_hearing(Vec::new());

    let result: TransitionResult = share(&state, hearing.clone());

    assert!(result.events.is_empty());
    assert_eq!(
        result.new_state.previous_hearing(&HearingId::new("hearing-1")),
        Some(&hearing)
    );
}

#[test]
fn test_removed_next_hearing_is_reported_deleted() {
    let state: State = State::default();
    let first: TransitionResult = share(
        &state,
        create_test_hearing(vec![new_hearing_result("r1", Some(datetime!(2026-03-16 10:00 UTC)))]),
    );

    let second: TransitionResult = share(&first.new_state, create_test_hearing(Vec::new()));

    assert_eq!(event_names(&second), vec!["NextHearingsDeleted"]);
}

#[test]
fn test_first_sharing_never_reports_deletion() {
    let state: State = State::default();

    let result: TransitionResult = share(&state, create_test_hearing(Vec::new()));

    assert!(!event_names(&result).contains(&"NextHearingsDeleted"));
}

#[test]
fn test_invalid_policy_rejects_sharing() {
    let state: State = State::new(ListingPolicy {
        committal_result_groups: vec![String::new()],
        ..ListingPolicy::default()
    });

    let result = apply(
        &state,
        Command::ShareHearingResults {
            hearing: create_test_hearing(Vec::new()),
            committing_court: None,
        },
        create_test_now(),
    );

    let err: CoreError = result.unwrap_err();
    assert!(matches!(
        err,
        CoreError::DomainViolation(DomainError::InvalidListingPolicy(_))
    ));
    assert!(!err.is_invariant_violation());
}
