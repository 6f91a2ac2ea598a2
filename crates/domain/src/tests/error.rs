// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{CaseId, DefendantId, DomainError, HearingId, OffenceId};

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::ProsecutionCaseNotFound {
        hearing_id: HearingId::new("hearing-1"),
        prosecution_case_id: CaseId::new("case-1"),
    };
    assert_eq!(
        format!("{err}"),
        "Prosecution case 'case-1' not found in hearing 'hearing-1'"
    );

    let err: DomainError = DomainError::DefendantNotFound {
        prosecution_case_id: CaseId::new("case-1"),
        defendant_id: DefendantId::new("defendant-1"),
    };
    assert_eq!(
        format!("{err}"),
        "Defendant 'defendant-1' not found in prosecution case 'case-1'"
    );

    let err: DomainError = DomainError::OffenceNotFound {
        defendant_id: DefendantId::new("defendant-1"),
        offence_id: OffenceId::new("offence-1"),
    };
    assert_eq!(
        format!("{err}"),
        "Offence 'offence-1' not found for defendant 'defendant-1'"
    );

    let err: DomainError = DomainError::InvalidListingPolicy(String::from("test"));
    assert_eq!(format!("{err}"), "Invalid listing policy: test");
}

#[test]
fn test_only_lookup_failures_are_invariant_violations() {
    let not_found: DomainError = DomainError::OffenceNotFound {
        defendant_id: DefendantId::new("defendant-1"),
        offence_id: OffenceId::new("offence-1"),
    };
    let invalid: DomainError = DomainError::InvalidListingPolicy(String::from("test"));

    assert!(not_found.is_invariant_violation());
    assert!(!invalid.is_invariant_violation());
}
