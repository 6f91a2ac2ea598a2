// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use progression_domain::{
    CaseId, CommittingCourt, DefendantId, Hearing, Offence, OffenceForDefendant,
};
use serde::{Deserialize, Serialize};

/// A command represents user or system intent as data only.
///
/// Commands are the only way to request state changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command")]
pub enum Command {
    /// Replace the offences on a prosecution case defendant.
    UpdateDefendantOffences {
        /// The owning prosecution case.
        prosecution_case_id: CaseId,
        /// The defendant.
        defendant_id: DefendantId,
        /// The defendant's full offence list after the update.
        offences: Vec<Offence>,
    },
    /// Replace the offences held for a defendant.
    UpdateOffencesForDefendant {
        /// The owning prosecution case.
        prosecution_case_id: CaseId,
        /// The defendant.
        defendant_id: DefendantId,
        /// The defendant's full offence list after the update.
        offences: Vec<OffenceForDefendant>,
    },
    /// Share the results of a hearing, possibly for a second or later time.
    ShareHearingResults {
        /// The hearing with all results as now shared.
        hearing: Hearing,
        /// A committing court resolved from reference data, used in place of
        /// the one synthesized from the hearing's court centre.
        #[serde(default)]
        committing_court: Option<CommittingCourt>,
    },
}
