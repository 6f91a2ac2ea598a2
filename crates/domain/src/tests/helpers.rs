// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::OffsetDateTime;
use time::macros::{date, datetime};

use crate::{
    CourtApplication, CourtCentre, Defendant, Hearing, HearingDay, HearingId, JudicialResult,
    JurisdictionType, NextHearing, Offence, ProsecutionCase,
};

pub fn sitting(day: u8) -> OffsetDateTime {
    datetime!(2026-03-02 10:00 UTC)
        .replace_day(day)
        .expect("valid March day")
}

pub fn create_test_court_centre() -> CourtCentre {
    CourtCentre {
        code: Some(String::from("B01LY00")),
        ..CourtCentre::new("cc-lavender", "Lavender Hill Magistrates' Court")
    }
}

pub fn create_test_offence(id: &str, results: Vec<JudicialResult>) -> Offence {
    Offence {
        judicial_results: results,
        ..Offence::new(id, "TH68001", "Theft from a shop", date!(2026 - 01 - 05))
    }
}

pub fn create_test_defendant(id: &str, case_id: &str, offences: Vec<Offence>) -> Defendant {
    Defendant {
        offences,
        ..Defendant::new(id, case_id)
    }
}

pub fn create_test_case(id: &str, defendants: Vec<Defendant>) -> ProsecutionCase {
    ProsecutionCase {
        case_urn: Some(format!("URN-{id}")),
        cps_organisation: Some(String::from("A30AB00")),
        trial_receipt_type: Some(String::from("Transfer")),
        defendants,
        ..ProsecutionCase::new(id)
    }
}

/// A hearing at Lavender Hill sitting on the given March days.
pub fn create_test_hearing(
    sitting_days: &[u8],
    cases: Vec<ProsecutionCase>,
    applications: Vec<CourtApplication>,
) -> Hearing {
    Hearing {
        hearing_days: sitting_days.iter().map(|d| HearingDay::new(sitting(*d))).collect(),
        prosecution_cases: cases,
        court_applications: applications,
        court_centre: Some(create_test_court_centre()),
        jurisdiction_type: Some(JurisdictionType::Magistrates),
        ..Hearing::new("hearing-1")
    }
}

/// A single-day hearing with one case, one defendant and one offence.
pub fn create_single_offence_hearing(results: Vec<JudicialResult>) -> Hearing {
    let offence: Offence = create_test_offence("offence-1", results);
    let defendant: Defendant = create_test_defendant("defendant-1", "case-1", vec![offence]);
    create_test_hearing(&[2], vec![create_test_case("case-1", vec![defendant])], Vec::new())
}

/// A new or amended result adjourning into an already-listed hearing.
pub fn related_result(id: &str, existing_hearing_id: &str) -> JudicialResult {
    JudicialResult {
        is_new_amendment: true,
        next_hearing: Some(NextHearing {
            existing_hearing_id: Some(HearingId::new(existing_hearing_id)),
            hearing_type: Some(String::from("Sentence")),
            court_centre: Some(CourtCentre::new("cc-crown", "Snaresbrook Crown Court")),
            jurisdiction_type: Some(JurisdictionType::Crown),
            estimated_duration: Some(String::from("1 day")),
            ..NextHearing::default()
        }),
        ..JudicialResult::new(id, "Adjourned to existing hearing")
    }
}

/// A new or amended result asking for a brand new hearing.
pub fn new_hearing_result(id: &str, listed_start: Option<OffsetDateTime>) -> JudicialResult {
    JudicialResult {
        is_new_amendment: true,
        next_hearing: Some(NextHearing {
            hearing_type: Some(String::from("Trial")),
            court_centre: Some(create_test_court_centre()),
            jurisdiction_type: Some(JurisdictionType::Magistrates),
            listed_start_date_time: listed_start,
            ..NextHearing::default()
        }),
        ..JudicialResult::new(id, "Next hearing")
    }
}
