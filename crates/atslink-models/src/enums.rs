//! Closed enumerations shared by the parser and the output record.
//!
//! The [`MessageTitle`] declaration order is significant: every title up to
//! and including [`MessageTitle::Spl`] belongs to the ATS world, everything
//! after it is OLDI. [`MessageTitle::is_oldi`] encodes that boundary.

use std::str::FromStr;

use serde::Serialize;

use crate::error::ModelError;

// ---------------------------------------------------------------------------
// MessageType
// ---------------------------------------------------------------------------

/// The overall encoding family a message belongs to.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum MessageType {
    /// ICAO ATS message (flight plan family).
    Ats,
    /// On-Line Data Interchange message exchanged between adjacent ATC units.
    Oldi,
    /// Keyword-tagged ADEXP message; detected but not parsed.
    Adexp,
    /// Not recognised as any supported encoding.
    Unknown,
}

// ---------------------------------------------------------------------------
// MessageTitle
// ---------------------------------------------------------------------------

/// All message titles supported by the parser.
///
/// ATS titles come first, OLDI titles follow; `Spl` is the last ATS title.
/// `Acp`, `Cdn` and `Cpl` exist in both worlds and are disambiguated by the
/// classifier from the adjacent-unit qualifier that follows an OLDI title.
#[derive(
    Serialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display,
)]
#[strum(serialize_all = "UPPERCASE")]
pub enum MessageTitle {
    /// Placeholder for an unrecognised title.
    Unknown,
    /// ATC flight plan change (ATS).
    Ach,
    /// Acceptance (ATS and OLDI).
    Acp,
    /// ATC flight plan proposal (ATS).
    Afp,
    /// Alerting (ATS).
    Alr,
    /// ATC flight plan (ATS).
    Apl,
    /// Arrival (ATS).
    Arr,
    /// Coordination (ATS and OLDI).
    Cdn,
    /// Modification (ATS).
    Chg,
    /// Cancellation (ATS).
    Cnl,
    /// Current flight plan (ATS and OLDI).
    Cpl,
    /// Departure (ATS).
    Dep,
    /// Delay (ATS).
    Dla,
    /// Estimate (ATS).
    Est,
    /// Filed flight plan (ATS).
    Fpl,
    /// Flight notification message (ATS, oceanic).
    Fnm,
    /// Message from shanwick (ATS, oceanic).
    Mfs,
    /// Radio communication failure (ATS).
    Rcf,
    /// Request flight plan (ATS).
    Rqp,
    /// Request supplementary flight plan (ATS).
    Rqs,
    /// Supplementary flight plan (ATS). Last ATS title.
    Spl,
    /// Advance boundary information (OLDI).
    Abi,
    /// Activation (OLDI).
    Act,
    /// Arrival management (OLDI).
    Ama,
    /// SSR code assignment (OLDI).
    Cod,
    /// Information (OLDI).
    Inf,
    /// Logical acknowledgement (OLDI).
    Lam,
    /// Message for abrogation of coordination (OLDI).
    Mac,
    /// Oceanic clearance (OLDI).
    Ocm,
    /// Preliminary activation (OLDI).
    Pac,
    /// Referred activate proposal (OLDI).
    Rap,
    /// Rejection (OLDI).
    Rej,
    /// Revision (OLDI).
    Rev,
    /// Reject coordination (OLDI).
    Rjc,
    /// Request oceanic clearance (OLDI).
    Roc,
    /// Referred revision proposal (OLDI).
    Rrv,
    /// Standby (OLDI).
    Sby,
}

impl MessageTitle {
    /// True when the title sits above the ATS/OLDI boundary (after `SPL`).
    pub fn is_oldi(self) -> bool {
        self > MessageTitle::Spl
    }
}

impl FromStr for MessageTitle {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let title = match s {
            "ACH" => MessageTitle::Ach,
            "ACP" => MessageTitle::Acp,
            "AFP" => MessageTitle::Afp,
            "ALR" => MessageTitle::Alr,
            "APL" => MessageTitle::Apl,
            "ARR" => MessageTitle::Arr,
            "CDN" => MessageTitle::Cdn,
            "CHG" => MessageTitle::Chg,
            "CNL" => MessageTitle::Cnl,
            "CPL" => MessageTitle::Cpl,
            "DEP" => MessageTitle::Dep,
            "DLA" => MessageTitle::Dla,
            "EST" => MessageTitle::Est,
            "FPL" => MessageTitle::Fpl,
            "FNM" => MessageTitle::Fnm,
            "MFS" => MessageTitle::Mfs,
            "RCF" => MessageTitle::Rcf,
            "RQP" => MessageTitle::Rqp,
            "RQS" => MessageTitle::Rqs,
            "SPL" => MessageTitle::Spl,
            "ABI" => MessageTitle::Abi,
            "ACT" => MessageTitle::Act,
            "AMA" => MessageTitle::Ama,
            "COD" => MessageTitle::Cod,
            "INF" => MessageTitle::Inf,
            "LAM" => MessageTitle::Lam,
            "MAC" => MessageTitle::Mac,
            "OCM" => MessageTitle::Ocm,
            "PAC" => MessageTitle::Pac,
            "RAP" => MessageTitle::Rap,
            "REJ" => MessageTitle::Rej,
            "REV" => MessageTitle::Rev,
            "RJC" => MessageTitle::Rjc,
            "ROC" => MessageTitle::Roc,
            "RRV" => MessageTitle::Rrv,
            "SBY" => MessageTitle::Sby,
            _ => {
                return Err(ModelError::UnknownTitle {
                    value: s.to_string(),
                })
            }
        };
        Ok(title)
    }
}

// ---------------------------------------------------------------------------
// AdjacentUnit
// ---------------------------------------------------------------------------

/// Adjacent-unit identifier carried in OLDI field 3b.
///
/// OLDI field content varies per unit; `Default` is used for ATS messages
/// and as the fallback when a unit has no dedicated configuration.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum AdjacentUnit {
    /// Fallback configuration used when no unit-specific entry exists.
    Default,
    /// Adjacent unit `AA`.
    Aa,
    /// Adjacent unit `AX`.
    Ax,
    /// Adjacent unit `BB`.
    Bb,
    /// Adjacent unit `CC`.
    Cc,
    /// Adjacent unit `L`.
    L,
}

impl FromStr for AdjacentUnit {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DEFAULT" => Ok(AdjacentUnit::Default),
            "AA" => Ok(AdjacentUnit::Aa),
            "AX" => Ok(AdjacentUnit::Ax),
            "BB" => Ok(AdjacentUnit::Bb),
            "CC" => Ok(AdjacentUnit::Cc),
            "L" => Ok(AdjacentUnit::L),
            _ => Err(ModelError::UnknownAdjacentUnit {
                value: s.to_string(),
            }),
        }
    }
}

impl AdjacentUnit {
    /// Resolve a unit name extracted from field 3b, falling back to
    /// [`AdjacentUnit::Default`] for names with no dedicated configuration.
    pub fn from_name_or_default(name: &str) -> AdjacentUnit {
        name.parse().unwrap_or(AdjacentUnit::Default)
    }
}

// ---------------------------------------------------------------------------
// FieldId
// ---------------------------------------------------------------------------

/// ICAO field identifiers, including the header fields and the custom
/// OLDI/oceanic fields.
///
/// Variants such as `F13a` or `F16ab` identify partial fields: the same
/// subfields as their parent, restricted to the listed components.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum FieldId {
    /// AFTN priority indicator (header).
    #[strum(serialize = "PRIORITY_INDICATOR")]
    PriorityIndicator,
    /// Message filing time as DDHHMM (header).
    #[strum(serialize = "FILING_TIME")]
    FilingTime,
    /// Message originator facility address (header).
    #[strum(serialize = "ORIGINATOR")]
    Originator,
    /// One or more addressee facility addresses (header).
    #[strum(serialize = "ADDRESS")]
    Address,
    /// Additional addressees following the originator (header).
    #[strum(serialize = "ADADDRESS")]
    AdAddress,
    /// Message title, optional sender/receiver unit and sequence numbers.
    F3,
    /// Emergency phase, originating facility and free text.
    F5,
    /// Callsign and optional SSR mode/code.
    F7,
    /// Flight rules and type of flight.
    F8,
    /// Flight rules only (OLDI compound field 22 content).
    F8a,
    /// Number of aircraft, aircraft type and wake turbulence category.
    F9,
    /// Equipment and surveillance capabilities.
    F10,
    /// Departure aerodrome and EOBT.
    F13,
    /// Departure aerodrome only.
    F13a,
    /// Boundary point, crossing time and levels.
    F14,
    /// Boundary point only.
    F14a,
    /// Route description, handled by the extracted-route plugin.
    F15,
    /// Destination aerodrome, EET and alternates.
    F16,
    /// Destination aerodrome only.
    F16a,
    /// Destination aerodrome and EET.
    #[strum(serialize = "F16ab")]
    F16ab,
    /// Arrival aerodrome, ATA and free text.
    F17,
    /// Other information, recorded as raw text.
    F18,
    /// A lone date of flight at the end of many messages.
    #[strum(serialize = "F18_DOF")]
    F18Dof,
    /// Supplementary information, recorded as raw text.
    F19,
    /// Alerting search and rescue information, recorded as raw text.
    F20,
    /// Radio failure information, recorded as raw text.
    F21,
    /// Amendment field with numbered subfields, e.g. `9/B737/M`.
    F22,
    /// Title-specific field 22 content, recorded as raw text.
    #[strum(serialize = "F22_SPECIFIC")]
    F22Specific,
    /// OLDI field 80.
    F80,
    /// OLDI field 81.
    F81,
    /// Oceanic MFS significant point.
    #[strum(serialize = "MFS_SIG_POINT")]
    MfsSigPoint,
}

// ---------------------------------------------------------------------------
// SubfieldId
// ---------------------------------------------------------------------------

/// Subfield identifiers; one per syntactic component of an ICAO field.
///
/// The `F22F*` variants identify the numbered subfields of the compound
/// field 22 (`3/...`, `9/...`, etc.), each of which is itself a complete
/// field parsed recursively.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[allow(missing_docs)]
pub enum SubfieldId {
    PriorityIndicator,
    FilingTime,
    Originator,
    Address1,
    Address2,
    Address3,
    Address4,
    Address5,
    Address6,
    Address7,
    Address8,
    AdAddress1,
    AdAddress2,
    AdAddress3,
    AdAddress4,
    AdAddress5,
    AdAddress6,
    AdAddress7,
    AdAddress8,
    F3a,
    F3b1,
    F3b2,
    F3b3,
    F3b4,
    F3c1,
    F3c2,
    F3c3,
    F3c4,
    F5a,
    F5ab,
    F5b,
    F5bc,
    F5c,
    F7a,
    F7ab,
    F7b,
    F7c,
    F8a,
    F8b,
    F9a,
    F9b,
    F9bc,
    F9c,
    F10a,
    F10ab,
    F10b,
    F13a,
    F13b,
    F14a,
    F14ab,
    F14b,
    F14c,
    F14d,
    F14e,
    F15,
    F16a,
    F16b,
    F16c,
    F16d,
    F17a,
    F17b,
    F17c,
    F18Dof,
    F22F3,
    F22F5,
    F22F7,
    F22F8,
    F22F9,
    F22F10,
    F22F13,
    F22F14,
    F22F15,
    F22F16,
    F22F17,
    F22F18,
    F22F19,
    F22F20,
    F22F21,
    F22F22,
    F22F80,
    F22F81,
    F80a,
    F81a,
    F81ab,
    F81b,
    F81bc,
    F81c,
    MfsSigPoint,
}
