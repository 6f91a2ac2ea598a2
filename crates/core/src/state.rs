// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::BTreeMap;

use progression_domain::{
    CaseId, DefendantId, Hearing, HearingId, ListingPolicy, Offence, OffenceForDefendant,
};
use progression_events::ProgressionEvent;

/// Identifies a defendant within a prosecution case.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DefendantKey {
    /// The owning prosecution case.
    pub prosecution_case_id: CaseId,
    /// The defendant.
    pub defendant_id: DefendantId,
}

impl DefendantKey {
    /// Creates a new `DefendantKey`.
    #[must_use]
    pub const fn new(prosecution_case_id: CaseId, defendant_id: DefendantId) -> Self {
        Self {
            prosecution_case_id,
            defendant_id,
        }
    }
}

/// Offences currently held for one defendant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefendantState {
    /// Offences as held on the prosecution case.
    pub offences: Vec<Offence>,
    /// Offences in the defendant-scoped shape.
    pub offences_for_defendant: Vec<OffenceForDefendant>,
}

/// The progression state the rules are evaluated against.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    /// Listing tunables applied when hearing results are shared.
    pub policy: ListingPolicy,
    /// Offences held per defendant.
    pub defendants: BTreeMap<DefendantKey, DefendantState>,
    /// Each hearing as it was last shared.
    pub shared_hearings: BTreeMap<HearingId, Hearing>,
}

impl State {
    /// Creates an empty state using the given listing policy.
    #[must_use]
    pub const fn new(policy: ListingPolicy) -> Self {
        Self {
            policy,
            defendants: BTreeMap::new(),
            shared_hearings: BTreeMap::new(),
        }
    }

    /// Offences held for a defendant, empty when none are held.
    #[must_use]
    pub fn offences(&self, key: &DefendantKey) -> &[Offence] {
        self.defendants
            .get(key)
            .map(|defendant| defendant.offences.as_slice())
            .unwrap_or(&[])
    }

    /// Defendant-scoped offences held for a defendant, empty when none are held.
    #[must_use]
    pub fn offences_for_defendant(&self, key: &DefendantKey) -> &[OffenceForDefendant] {
        self.defendants
            .get(key)
            .map(|defendant| defendant.offences_for_defendant.as_slice())
            .unwrap_or(&[])
    }

    /// The hearing as it was last shared, if it was shared before.
    #[must_use]
    pub fn previous_hearing(&self, hearing_id: &HearingId) -> Option<&Hearing> {
        self.shared_hearings.get(hearing_id)
    }

    /// Summarises the state for logging.
    #[must_use]
    pub fn to_snapshot(&self) -> String {
        format!(
            "defendants_count={},shared_hearings_count={}",
            self.defendants.len(),
            self.shared_hearings.len()
        )
    }
}

/// The result of a successful state transition.
///
/// Transitions are atomic: they either succeed completely or fail without side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The new state after the transition.
    pub new_state: State,
    /// Events emitted by the transition, in emission order. Empty when the
    /// command changed nothing.
    pub events: Vec<ProgressionEvent>,
}
