// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::macros::{date, datetime};

use crate::{
    CaseId, Hearing, HearingDay, HearingId, HearingListingNeeds, JudicialResult,
    JurisdictionType, ReportingRestriction,
};

use super::helpers::{related_result, sitting};

#[test]
fn test_identifier_creation() {
    let case_id: CaseId = CaseId::new("case-1");
    assert_eq!(case_id.value(), "case-1");
    assert_eq!(format!("{case_id}"), "case-1");
}

#[test]
fn test_identifier_serializes_as_plain_string() {
    let hearing_id: HearingId = HearingId::new("hearing-1");
    let json: String = serde_json::to_string(&hearing_id).unwrap();
    assert_eq!(json, "\"hearing-1\"");
}

#[test]
fn test_jurisdiction_type_wire_format() {
    assert_eq!(JurisdictionType::Crown.as_str(), "CROWN");
    assert_eq!(format!("{}", JurisdictionType::Magistrates), "MAGISTRATES");

    let json: String = serde_json::to_string(&JurisdictionType::Crown).unwrap();
    assert_eq!(json, "\"CROWN\"");
}

#[test]
fn test_hearing_day_counts() {
    let empty: Hearing = Hearing::new("hearing-1");
    let single: Hearing = Hearing {
        hearing_days: vec![HearingDay::new(sitting(2))],
        ..Hearing::new("hearing-1")
    };
    let multi: Hearing = Hearing {
        hearing_days: vec![HearingDay::new(sitting(2)), HearingDay::new(sitting(3))],
        ..Hearing::new("hearing-1")
    };

    assert!(!empty.is_single_day());
    assert!(!empty.is_multi_day());
    assert!(single.is_single_day());
    assert!(!single.is_multi_day());
    assert!(multi.is_multi_day());
    assert_eq!(multi.first_sitting_day(), Some(date!(2026 - 03 - 02)));
}

#[test]
fn test_sitting_dates_are_utc() {
    let hearing: Hearing = Hearing {
        hearing_days: vec![HearingDay::new(datetime!(2026-03-03 00:30 +01:00))],
        ..Hearing::new("hearing-1")
    };

    assert_eq!(hearing.sitting_dates(), vec![date!(2026 - 03 - 02)]);
}

#[test]
fn test_existing_hearing_id_reads_through_next_hearing() {
    let related: JudicialResult = related_result("result-1", "hearing-9");
    let plain: JudicialResult = JudicialResult::new("result-2", "Fine");

    assert_eq!(related.existing_hearing_id(), Some(&HearingId::new("hearing-9")));
    assert_eq!(plain.existing_hearing_id(), None);
}

#[test]
fn test_reporting_restriction_key() {
    let mut restriction: ReportingRestriction = ReportingRestriction {
        id: String::from("rr-1"),
        label: String::from("Section 45"),
        judicial_result_id: None,
        ordered_date: None,
    };
    assert_eq!(restriction.key(), "Section 45-");

    restriction.judicial_result_id = Some(crate::JudicialResultId::new("result-1"));
    assert_eq!(restriction.key(), "Section 45-result-1");
}

#[test]
fn test_listing_needs_omit_empty_collections() {
    let needs: HearingListingNeeds = HearingListingNeeds {
        id: HearingId::new("hearing-9"),
        court_centre: None,
        jurisdiction_type: Some(JurisdictionType::Crown),
        hearing_type: None,
        estimated_duration: None,
        estimated_minutes: 30,
        listed_start_date_time: None,
        prosecution_cases: None,
        court_applications: None,
    };

    let json: serde_json::Value = serde_json::to_value(&needs).unwrap();

    assert!(json.get("prosecution_cases").is_none());
    assert!(json.get("court_applications").is_none());
    assert_eq!(json["estimated_minutes"], 30);
}
