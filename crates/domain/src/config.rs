// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Listing estimate applied to every derived hearing listing need.
pub const DEFAULT_ESTIMATED_MINUTES: u32 = 30;

/// Result definition group marking a committal to the Crown Court.
pub const COMMITTED_TO_CROWN_COURT: &str = "CommittedToCC";

/// Result definition group marking a case sent to the Crown Court.
pub const SENT_TO_CROWN_COURT: &str = "SentToCC";

/// Tunables for deriving listing needs from hearing results.
///
/// Hosts embed this in their own configuration; every field has a default, so
/// an empty table deserializes to [`ListingPolicy::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingPolicy {
    /// Estimate in minutes stamped on every listing need.
    pub estimated_minutes: u32,
    /// Result definition group labels that indicate a Crown Court committal.
    pub committal_result_groups: Vec<String>,
}

impl Default for ListingPolicy {
    fn default() -> Self {
        Self {
            estimated_minutes: DEFAULT_ESTIMATED_MINUTES,
            committal_result_groups: vec![
                String::from(COMMITTED_TO_CROWN_COURT),
                String::from(SENT_TO_CROWN_COURT),
            ],
        }
    }
}

impl ListingPolicy {
    /// Checks that the policy can be used.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The estimate is zero
    /// - A committal group label is empty, since an empty label matches every result
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.estimated_minutes == 0 {
            return Err(DomainError::InvalidListingPolicy(String::from(
                "estimated_minutes must be greater than 0",
            )));
        }

        if self
            .committal_result_groups
            .iter()
            .any(|label| label.trim().is_empty())
        {
            return Err(DomainError::InvalidListingPolicy(String::from(
                "committal_result_groups must not contain empty labels",
            )));
        }

        Ok(())
    }

    /// Returns whether a result definition group names a Crown Court committal.
    #[must_use]
    pub fn is_committal_group(&self, result_definition_group: &str) -> bool {
        self.committal_result_groups
            .iter()
            .any(|label| result_definition_group.contains(label.as_str()))
    }
}
