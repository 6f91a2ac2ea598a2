// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Hearing, case and result snapshots.
//!
//! Every type here is a value: fields are public for reading and struct-update
//! construction, and nothing in the crate mutates a value it was handed.
//! Rules that derive new hearings always build fresh copies.

use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime, UtcOffset};

macro_rules! identifier {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wraps a raw identifier value.
            #[must_use]
            pub fn new(value: &str) -> Self {
                Self(value.to_string())
            }

            /// Returns the raw identifier value.
            #[must_use]
            pub fn value(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

identifier!(
    /// Identifies a hearing, whether already listed or about to be.
    HearingId
);
identifier!(
    /// Identifies a prosecution case.
    CaseId
);
identifier!(
    /// Identifies a defendant within a prosecution case.
    DefendantId
);
identifier!(
    /// Identifies an offence.
    OffenceId
);
identifier!(
    /// Identifies a court application.
    ApplicationId
);
identifier!(
    /// Identifies a judicial result line.
    JudicialResultId
);
identifier!(
    /// Identifies a court centre in reference data.
    CourtCentreId
);

/// The tier of court a hearing sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JurisdictionType {
    /// The Crown Court.
    Crown,
    /// A magistrates' court.
    Magistrates,
}

impl JurisdictionType {
    /// Returns the wire representation of this jurisdiction.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Crown => "CROWN",
            Self::Magistrates => "MAGISTRATES",
        }
    }
}

impl std::fmt::Display for JurisdictionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A court centre as resolved from reference data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourtCentre {
    /// Reference-data identifier.
    pub id: CourtCentreId,
    /// Display name, e.g. "Lavender Hill Magistrates' Court".
    pub name: String,
    /// Court house code, when reference data supplies one.
    pub code: Option<String>,
    /// Courtroom identifier.
    pub room_id: Option<String>,
    /// Courtroom name.
    pub room_name: Option<String>,
}

impl CourtCentre {
    /// Creates a court centre with no code or courtroom.
    #[must_use]
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: CourtCentreId::new(id),
            name: name.to_string(),
            code: None,
            room_id: None,
            room_name: None,
        }
    }
}

/// The lower court recorded on an offence once the case is sent or
/// committed to the Crown Court.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommittingCourt {
    /// The court centre the case was committed from.
    pub court_centre_id: CourtCentreId,
    /// Court house code.
    pub court_house_code: Option<String>,
    /// Court house name.
    pub court_house_name: String,
    /// Short name, which reference data does not distinguish from the name.
    pub court_house_short_name: String,
    /// Tier of the committing court.
    pub court_house_type: JurisdictionType,
}

/// The hearing whose results created a derived offence copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedingHearing {
    /// The seeding hearing.
    pub seeding_hearing_id: HearingId,
    /// The sitting day the results were recorded on.
    pub sitting_day: Option<Date>,
    /// Jurisdiction of the seeding hearing.
    pub jurisdiction_type: Option<JurisdictionType>,
}

/// One sitting of a hearing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HearingDay {
    /// When the sitting starts.
    pub sitting_day: OffsetDateTime,
    /// Listed duration of the sitting.
    pub listed_duration_minutes: Option<u32>,
    /// Courtroom for this day, if it differs from the hearing's.
    pub court_room_id: Option<String>,
}

impl HearingDay {
    /// Creates a hearing day with no duration or courtroom override.
    #[must_use]
    pub const fn new(sitting_day: OffsetDateTime) -> Self {
        Self {
            sitting_day,
            listed_duration_minutes: None,
            court_room_id: None,
        }
    }

    /// Calendar date of the sitting in UTC.
    #[must_use]
    pub fn utc_date(&self) -> Date {
        self.sitting_day.to_offset(UtcOffset::UTC).date()
    }
}

/// Pointer from a judicial result to a follow-on hearing.
///
/// With `existing_hearing_id` set the result is "related": it points back into
/// a hearing that is already known. Without it the remaining fields describe a
/// hearing that still has to be created.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextHearing {
    /// The already-listed hearing this result feeds into.
    pub existing_hearing_id: Option<HearingId>,
    /// Hearing type description, e.g. "Sentence".
    pub hearing_type: Option<String>,
    /// Where the next hearing sits.
    pub court_centre: Option<CourtCentre>,
    /// Tier the next hearing sits in.
    pub jurisdiction_type: Option<JurisdictionType>,
    /// Listed start, absent while unscheduled.
    pub listed_start_date_time: Option<OffsetDateTime>,
    /// Free-text estimate, e.g. "2 days".
    pub estimated_duration: Option<String>,
    /// Estimate in minutes.
    pub estimated_minutes: Option<u32>,
    /// The date is still to be fixed.
    #[serde(default)]
    pub date_to_be_fixed: bool,
    /// Set when the result lists a new application rather than a hearing.
    pub application_type_code: Option<String>,
}

/// An outcome recorded against an offence, defendant or application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JudicialResult {
    /// Result line identifier.
    pub id: JudicialResultId,
    /// Result label, e.g. "Remanded in custody".
    pub label: String,
    /// Result definition group, a comma separated list of group labels.
    pub result_definition_group: Option<String>,
    /// The line was added or amended at this sharing of results.
    #[serde(default)]
    pub is_new_amendment: bool,
    /// The follow-on hearing has no date yet.
    #[serde(default)]
    pub is_unscheduled: bool,
    /// Follow-on hearing, when the result adjourns or sends the case on.
    pub next_hearing: Option<NextHearing>,
    /// Date the result was ordered.
    pub ordered_date: Option<Date>,
}

impl JudicialResult {
    /// Creates a result line with no flags set and no next hearing.
    #[must_use]
    pub fn new(id: &str, label: &str) -> Self {
        Self {
            id: JudicialResultId::new(id),
            label: label.to_string(),
            result_definition_group: None,
            is_new_amendment: false,
            is_unscheduled: false,
            next_hearing: None,
            ordered_date: None,
        }
    }

    /// The hearing this result points back into, if it is a related result.
    #[must_use]
    pub fn existing_hearing_id(&self) -> Option<&HearingId> {
        self.next_hearing
            .as_ref()
            .and_then(|nh| nh.existing_hearing_id.as_ref())
    }
}

/// A restriction on publishing details of an offence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportingRestriction {
    /// Restriction identifier.
    pub id: String,
    /// Restriction label, e.g. "Section 45 YJCEA 1999".
    pub label: String,
    /// The result line that imposed the restriction.
    pub judicial_result_id: Option<JudicialResultId>,
    /// Date the restriction was ordered.
    pub ordered_date: Option<Date>,
}

impl ReportingRestriction {
    /// Returns the dedup key: `label-judicialResultId`, with an empty id when absent.
    #[must_use]
    pub fn key(&self) -> String {
        format!(
            "{}-{}",
            self.label,
            self.judicial_result_id
                .as_ref()
                .map_or("", JudicialResultId::value)
        )
    }
}

/// An offence as held on a prosecution case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offence {
    /// Offence identifier.
    pub id: OffenceId,
    /// Reference-data offence definition.
    pub offence_definition_id: Option<String>,
    /// CJS offence code.
    pub offence_code: String,
    /// Charge wording.
    pub wording: String,
    /// Welsh charge wording.
    pub wording_welsh: Option<String>,
    /// Date the offence started.
    pub start_date: Date,
    /// Date the offence ended, for continuing offences.
    pub end_date: Option<Date>,
    /// Offence title.
    pub offence_title: String,
    /// Welsh offence title.
    pub offence_title_welsh: Option<String>,
    /// Legislation the offence is charged under.
    pub offence_legislation: Option<String>,
    /// Welsh legislation text.
    pub offence_legislation_welsh: Option<String>,
    /// Count number on the indictment.
    pub count: Option<u32>,
    /// Position of the offence on the charge sheet.
    pub order_index: Option<u32>,
    /// Date of conviction.
    pub conviction_date: Option<Date>,
    /// Results recorded against the offence.
    #[serde(default)]
    pub judicial_results: Vec<JudicialResult>,
    /// Reporting restrictions on the offence.
    #[serde(default)]
    pub reporting_restrictions: Vec<ReportingRestriction>,
    /// Court the offence was committed from.
    pub committing_court: Option<CommittingCourt>,
    /// Court that convicted.
    pub convicting_court: Option<CourtCentre>,
    /// Hearing whose results created this copy of the offence.
    pub seeding_hearing: Option<SeedingHearing>,
}

impl Offence {
    /// Creates an offence with the mandatory charge fields and nothing else.
    #[must_use]
    pub fn new(id: &str, offence_code: &str, offence_title: &str, start_date: Date) -> Self {
        Self {
            id: OffenceId::new(id),
            offence_definition_id: None,
            offence_code: offence_code.to_string(),
            wording: String::new(),
            wording_welsh: None,
            start_date,
            end_date: None,
            offence_title: offence_title.to_string(),
            offence_title_welsh: None,
            offence_legislation: None,
            offence_legislation_welsh: None,
            count: None,
            order_index: None,
            conviction_date: None,
            judicial_results: Vec::new(),
            reporting_restrictions: Vec::new(),
            committing_court: None,
            convicting_court: None,
            seeding_hearing: None,
        }
    }
}

/// The slimmer offence record carried by defendant-scoped commands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OffenceForDefendant {
    /// Offence identifier.
    pub id: OffenceId,
    /// CJS offence code.
    pub offence_code: String,
    /// Charge wording.
    pub wording: String,
    /// Date the offence started.
    pub start_date: Date,
    /// Date the offence ended.
    pub end_date: Option<Date>,
    /// Count number on the indictment.
    pub count: Option<u32>,
    /// Date of conviction.
    pub conviction_date: Option<Date>,
    /// Position of the offence on the charge sheet.
    pub order_index: Option<u32>,
    /// Offence title.
    pub offence_title: Option<String>,
}

impl OffenceForDefendant {
    /// Creates an offence record with the mandatory charge fields.
    #[must_use]
    pub fn new(id: &str, offence_code: &str, wording: &str, start_date: Date) -> Self {
        Self {
            id: OffenceId::new(id),
            offence_code: offence_code.to_string(),
            wording: wording.to_string(),
            start_date,
            end_date: None,
            count: None,
            conviction_date: None,
            order_index: None,
            offence_title: None,
        }
    }
}

/// A defendant on a prosecution case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Defendant {
    /// Defendant identifier.
    pub id: DefendantId,
    /// Identifier linking the same person across cases.
    pub master_defendant_id: Option<DefendantId>,
    /// Owning prosecution case.
    pub prosecution_case_id: CaseId,
    /// Offences charged.
    #[serde(default)]
    pub offences: Vec<Offence>,
    /// Results recorded against the defendant rather than a single offence.
    #[serde(default)]
    pub defendant_judicial_results: Vec<JudicialResult>,
}

impl Defendant {
    /// Creates a defendant with no offences.
    #[must_use]
    pub fn new(id: &str, prosecution_case_id: &str) -> Self {
        Self {
            id: DefendantId::new(id),
            master_defendant_id: None,
            prosecution_case_id: CaseId::new(prosecution_case_id),
            offences: Vec::new(),
            defendant_judicial_results: Vec::new(),
        }
    }
}

/// A prosecution case and its defendants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProsecutionCase {
    /// Case identifier.
    pub id: CaseId,
    /// Unique reference number.
    pub case_urn: Option<String>,
    /// Originating organisation (police force code).
    pub originating_organisation: Option<String>,
    /// CPS area organisation.
    pub cps_organisation: Option<String>,
    /// How the case arrived for trial.
    pub trial_receipt_type: Option<String>,
    /// Case status, e.g. "ACTIVE".
    pub case_status: Option<String>,
    /// Initiation code, e.g. "C" for charge.
    pub initiation_code: Option<String>,
    /// Defendants on the case.
    #[serde(default)]
    pub defendants: Vec<Defendant>,
}

impl ProsecutionCase {
    /// Creates a case with no descriptive fields and no defendants.
    #[must_use]
    pub fn new(id: &str) -> Self {
        Self {
            id: CaseId::new(id),
            case_urn: None,
            originating_organisation: None,
            cps_organisation: None,
            trial_receipt_type: None,
            case_status: None,
            initiation_code: None,
            defendants: Vec::new(),
        }
    }
}

/// A court order an application relates to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourtOrder {
    /// Order identifier.
    pub id: String,
    /// Offences the order was made on.
    #[serde(default)]
    pub court_order_offences: Vec<CourtOrderOffence>,
}

/// An offence that a court order was made on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourtOrderOffence {
    /// Case the offence belongs to.
    pub prosecution_case_id: CaseId,
    /// The offence and its results.
    pub offence: Offence,
}

/// A prosecution case an application is made within.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourtApplicationCase {
    /// The case.
    pub prosecution_case_id: CaseId,
    /// Case reference.
    pub case_urn: Option<String>,
    /// Offences the application concerns.
    #[serde(default)]
    pub offences: Vec<Offence>,
}

/// An application to the court.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourtApplication {
    /// Application identifier.
    pub id: ApplicationId,
    /// Application reference.
    pub application_reference: Option<String>,
    /// Application type description.
    pub application_type: Option<String>,
    /// Results recorded directly against the application.
    #[serde(default)]
    pub judicial_results: Vec<JudicialResult>,
    /// Court order the application relates to.
    pub court_order: Option<CourtOrder>,
    /// Cases the application is made within.
    #[serde(default)]
    pub court_application_cases: Vec<CourtApplicationCase>,
}

impl CourtApplication {
    /// Creates an application with no results, order or cases.
    #[must_use]
    pub fn new(id: &str) -> Self {
        Self {
            id: ApplicationId::new(id),
            application_reference: None,
            application_type: None,
            judicial_results: Vec::new(),
            court_order: None,
            court_application_cases: Vec::new(),
        }
    }
}

/// A hearing with everything resulted at it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hearing {
    /// Hearing identifier.
    pub id: HearingId,
    /// Sittings, in listing order.
    #[serde(default)]
    pub hearing_days: Vec<HearingDay>,
    /// Cases heard.
    #[serde(default)]
    pub prosecution_cases: Vec<ProsecutionCase>,
    /// Applications heard.
    #[serde(default)]
    pub court_applications: Vec<CourtApplication>,
    /// Where the hearing sits.
    pub court_centre: Option<CourtCentre>,
    /// Tier the hearing sits in.
    pub jurisdiction_type: Option<JurisdictionType>,
    /// Earliest next hearing date recorded by the listing system.
    pub earliest_next_hearing_date: Option<OffsetDateTime>,
}

impl Hearing {
    /// Creates an empty hearing.
    #[must_use]
    pub fn new(id: &str) -> Self {
        Self {
            id: HearingId::new(id),
            hearing_days: Vec::new(),
            prosecution_cases: Vec::new(),
            court_applications: Vec::new(),
            court_centre: None,
            jurisdiction_type: None,
            earliest_next_hearing_date: None,
        }
    }

    /// A hearing with exactly one sitting.
    #[must_use]
    pub fn is_single_day(&self) -> bool {
        self.hearing_days.len() == 1
    }

    /// A hearing with two or more sittings.
    #[must_use]
    pub fn is_multi_day(&self) -> bool {
        self.hearing_days.len() > 1
    }

    /// UTC calendar dates of every sitting.
    #[must_use]
    pub fn sitting_dates(&self) -> Vec<Date> {
        self.hearing_days.iter().map(HearingDay::utc_date).collect()
    }

    /// UTC date of the first sitting, by listing order.
    #[must_use]
    pub fn first_sitting_day(&self) -> Option<Date> {
        self.hearing_days.first().map(HearingDay::utc_date)
    }
}

/// Everything that has to be listed at one target hearing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HearingListingNeeds {
    /// The target hearing.
    pub id: HearingId,
    /// Where it sits, taken from the next-hearing result.
    pub court_centre: Option<CourtCentre>,
    /// Its tier, taken from the next-hearing result.
    pub jurisdiction_type: Option<JurisdictionType>,
    /// Its type, taken from the next-hearing result.
    pub hearing_type: Option<String>,
    /// Free-text estimate, taken from the next-hearing result.
    pub estimated_duration: Option<String>,
    /// Listing estimate in minutes.
    pub estimated_minutes: u32,
    /// Listed start, taken from the next-hearing result.
    pub listed_start_date_time: Option<OffsetDateTime>,
    /// Trimmed cases: only the defendants and offences resulted into this hearing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prosecution_cases: Option<Vec<ProsecutionCase>>,
    /// Applications resulted into this hearing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub court_applications: Option<Vec<CourtApplication>>,
}
