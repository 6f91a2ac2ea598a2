// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use progression_domain::{
    CaseId, CourtCentre, Defendant, DefendantId, Hearing, HearingDay, HearingId, JudicialResult,
    JurisdictionType, NextHearing, Offence, OffenceForDefendant, ProsecutionCase,
};
use time::macros::{date, datetime};
use time::{Date, OffsetDateTime};

pub fn create_test_now() -> OffsetDateTime {
    datetime!(2026-03-02 09:00 UTC)
}

pub fn create_test_modified_date() -> Date {
    date!(2026 - 03 - 02)
}

pub fn case_id() -> CaseId {
    CaseId::new("case-1")
}

pub fn defendant_id() -> DefendantId {
    DefendantId::new("defendant-1")
}

pub fn create_test_offence(id: &str) -> Offence {
    Offence {
        wording: String::from("Stole goods to the value of 20 pounds"),
        offence_legislation: Some(String::from("Theft Act 1968 s.1")),
        ..Offence::new(id, "TH68001", "Theft from a shop", date!(2026 - 01 - 05))
    }
}

pub fn create_test_offence_for_defendant(id: &str) -> OffenceForDefendant {
    OffenceForDefendant {
        count: Some(1),
        offence_title: Some(String::from("Theft from a shop")),
        ..OffenceForDefendant::new(
            id,
            "TH68001",
            "Stole goods to the value of 20 pounds",
            date!(2026 - 01 - 05),
        )
    }
}

/// A Lavender Hill hearing sitting on 2 March with one offence carrying `results`.
pub fn create_test_hearing(results: Vec<JudicialResult>) -> Hearing {
    let offence: Offence = Offence {
        judicial_results: results,
        ..create_test_offence("offence-1")
    };
    let defendant: Defendant = Defendant {
        offences: vec![offence],
        ..Defendant::new("defendant-1", "case-1")
    };
    Hearing {
        hearing_days: vec![HearingDay::new(datetime!(2026-03-02 10:00 UTC))],
        prosecution_cases: vec![ProsecutionCase {
            defendants: vec![defendant],
            ..ProsecutionCase::new("case-1")
        }],
        court_centre: Some(CourtCentre {
            code: Some(String::from("B01LY00")),
            ..CourtCentre::new("cc-lavender", "Lavender Hill Magistrates' Court")
        }),
        jurisdiction_type: Some(JurisdictionType::Magistrates),
        ..Hearing::new("hearing-1")
    }
}

pub fn new_hearing_result(id: &str, listed_start: Option<OffsetDateTime>) -> JudicialResult {
    JudicialResult {
        is_new_amendment: true,
        next_hearing: Some(NextHearing {
            hearing_type: Some(String::from("Trial")),
            jurisdiction_type: Some(JurisdictionType::Magistrates),
            listed_start_date_time: listed_start,
            ..NextHearing::default()
        }),
        ..JudicialResult::new(id, "Next hearing")
    }
}

pub fn related_result(id: &str, existing_hearing_id: &str) -> JudicialResult {
    JudicialResult {
        is_new_amendment: true,
        next_hearing: Some(NextHearing {
            existing_hearing_id: Some(HearingId::new(existing_hearing_id)),
            hearing_type: Some(String::from("Sentence")),
            court_centre: Some(CourtCentre::new("cc-crown", "Snaresbrook Crown Court")),
            jurisdiction_type: Some(JurisdictionType::Crown),
            ..NextHearing::default()
        }),
        ..JudicialResult::new(id, "Committed for sentence")
    }
}

pub fn unscheduled_result(id: &str) -> JudicialResult {
    JudicialResult {
        is_new_amendment: true,
        is_unscheduled: true,
        ..JudicialResult::new(id, "Adjourned sine die")
    }
}
