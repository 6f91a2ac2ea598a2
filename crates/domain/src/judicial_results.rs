// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Flattening of judicial results reachable from hearing entities.
//!
//! Court applications hold results on three paths: directly, on the offences
//! of their court order, and on the offences of the cases they are made
//! within. Every rule in this crate reads results through these functions and
//! never walks the nesting itself.

use crate::types::{CourtApplication, Hearing, JudicialResult, ProsecutionCase};

/// Every offence-level result of every defendant on a case.
pub fn case_offence_results(case: &ProsecutionCase) -> impl Iterator<Item = &JudicialResult> {
    case.defendants
        .iter()
        .flat_map(|defendant| defendant.offences.iter())
        .flat_map(|offence| offence.judicial_results.iter())
}

/// Every offence-level result across all cases on a hearing.
pub fn hearing_case_results(hearing: &Hearing) -> impl Iterator<Item = &JudicialResult> {
    hearing.prosecution_cases.iter().flat_map(case_offence_results)
}

/// Every result reachable from an application.
///
/// Order is direct results, then court-order offences, then application-case
/// offences. Duplicates are kept.
#[must_use]
pub fn application_results(application: &CourtApplication) -> Vec<&JudicialResult> {
    let court_order_offences = application
        .court_order
        .iter()
        .flat_map(|order| order.court_order_offences.iter())
        .map(|order_offence| &order_offence.offence);
    let application_case_offences = application
        .court_application_cases
        .iter()
        .flat_map(|application_case| application_case.offences.iter());

    application
        .judicial_results
        .iter()
        .chain(
            court_order_offences
                .chain(application_case_offences)
                .flat_map(|offence| offence.judicial_results.iter()),
        )
        .collect()
}

/// Every application result across all applications on a hearing.
#[must_use]
pub fn hearing_application_results(hearing: &Hearing) -> Vec<&JudicialResult> {
    hearing
        .court_applications
        .iter()
        .flat_map(application_results)
        .collect()
}

/// Every result on a hearing: case offences, defendant-level results and
/// application results.
#[must_use]
pub fn all_hearing_results(hearing: &Hearing) -> Vec<&JudicialResult> {
    let defendant_results = hearing
        .prosecution_cases
        .iter()
        .flat_map(|case| case.defendants.iter())
        .flat_map(|defendant| defendant.defendant_judicial_results.iter());

    hearing_case_results(hearing)
        .chain(defendant_results)
        .chain(hearing_application_results(hearing))
        .collect()
}
