// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{CaseId, DefendantId, HearingId, OffenceId};

/// Errors that can occur while evaluating progression rules.
///
/// The `*NotFound` variants are invariant violations: the grouping engine only
/// looks up identifiers it has just observed in the same hearing, so hitting one
/// means the hearing snapshot is internally inconsistent. They are never retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A prosecution case recorded during grouping is missing from the hearing.
    ProsecutionCaseNotFound {
        /// The hearing that was scanned.
        hearing_id: HearingId,
        /// The missing prosecution case.
        prosecution_case_id: CaseId,
    },
    /// A defendant recorded during grouping is missing from its prosecution case.
    DefendantNotFound {
        /// The owning prosecution case.
        prosecution_case_id: CaseId,
        /// The missing defendant.
        defendant_id: DefendantId,
    },
    /// An offence recorded during grouping is missing from its defendant.
    OffenceNotFound {
        /// The owning defendant.
        defendant_id: DefendantId,
        /// The missing offence.
        offence_id: OffenceId,
    },
    /// The listing policy configuration is unusable.
    InvalidListingPolicy(String),
}

impl DomainError {
    /// Returns whether this error signals corrupt input rather than a rejected request.
    #[must_use]
    pub const fn is_invariant_violation(&self) -> bool {
        matches!(
            self,
            Self::ProsecutionCaseNotFound { .. }
                | Self::DefendantNotFound { .. }
                | Self::OffenceNotFound { .. }
        )
    }
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ProsecutionCaseNotFound {
                hearing_id,
                prosecution_case_id,
            } => {
                write!(
                    f,
                    "Prosecution case '{prosecution_case_id}' not found in hearing '{hearing_id}'"
                )
            }
            Self::DefendantNotFound {
                prosecution_case_id,
                defendant_id,
            } => {
                write!(
                    f,
                    "Defendant '{defendant_id}' not found in prosecution case '{prosecution_case_id}'"
                )
            }
            Self::OffenceNotFound {
                defendant_id,
                offence_id,
            } => {
                write!(
                    f,
                    "Offence '{offence_id}' not found for defendant '{defendant_id}'"
                )
            }
            Self::InvalidListingPolicy(msg) => write!(f, "Invalid listing policy: {msg}"),
        }
    }
}

impl std::error::Error for DomainError {}
