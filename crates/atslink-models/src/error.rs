//! Error types.
//!
//! Two distinct error surfaces live here. [`ModelError`] reports misuse of
//! the model types themselves (an unknown title string, say). [`ErrorId`]
//! is the parser's error taxonomy: every diagnostic the parser can attach
//! to a [`FlightPlanRecord`](crate::record::FlightPlanRecord) has an entry
//! here together with its catalog text. Catalog texts carry a `!`
//! placeholder that is replaced with the offending text when the error is
//! recorded.

use thiserror::Error;

/// Errors raised when constructing model types from raw strings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// The string is not a supported ATS or OLDI message title.
    #[error("unknown message title: {value}")]
    UnknownTitle {
        /// The rejected title string.
        value: String,
    },

    /// The string is not a configured adjacent unit name.
    #[error("unknown adjacent unit: {value}")]
    UnknownAdjacentUnit {
        /// The rejected unit name.
        value: String,
    },
}

// ---------------------------------------------------------------------------
// ErrorId
// ---------------------------------------------------------------------------

/// Identifies every diagnostic the parser can report.
///
/// Per-field error lists in the parser configuration index into this
/// taxonomy; the list tail always follows the same convention (last
/// subfield syntax, too many, more expected, missing).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum ErrorId {
    // Message level
    SystemConfigUndefined,
    MsgEmpty,
    MsgTooShort,
    MsgAdexpNotSupported,
    MsgTooManyFields,
    MsgTooFewFields,

    // Field level, shared
    FldMoreSubfieldsExpected,
    FldSlashSyntax,

    // Header: priority indicator
    PrioritySyntax,
    PriorityMissing,
    PriorityTooManyFields,

    // Header: filing time
    FilingTimeSyntax,
    FilingTimeMissing,
    FilingTimeTooManyFields,

    // Header: originator
    OriginatorSyntax,
    OriginatorMissing,
    OriginatorTooManyFields,

    // Header: addressees
    AddresseeSyntax,
    AddresseeMissing,
    AddresseeTooManyFields,
    AdAddresseeSyntax,
    AdAddresseeMissing,
    AdAddresseeTooManyFields,

    // Field 3
    F3TitleMissing,
    F3TitleSyntax,
    F3TxSyntax,
    F3RxSyntax,
    F3SeqSyntax,
    F3RxTxExpected,
    F3TooManyFields,

    // Field 5
    F5F5aSyntax,
    F5F5abExpectingSlash,
    F5F5bSyntax,
    F5F5bcExpectingSlash,
    F5F5cSyntax,
    F5TooManyFields,
    F5Missing,

    // Field 7
    F7F7aSyntax,
    F7F7abSyntax,
    F7F7bSyntax,
    F7F7cSyntax,
    F7TooManyFields,
    F7MoreSubfieldsExpected,
    F7Missing,

    // Field 8
    F8F8aSyntax,
    F8F8bSyntax,
    F8TooManyFields,
    F8MoreSubfieldsExpected,
    F8Missing,

    // Field 9
    F9F9aSyntax,
    F9F9bSyntax,
    F9F9bcSyntax,
    F9F9cSyntax,
    F9TooManyFields,
    F9MoreSubfieldsExpected,
    F9Missing,

    // Field 10
    F10F10aSyntax,
    F10F10abSyntax,
    F10F10bSyntax,
    F10TooManyFields,
    F10MoreSubfieldsExpected,
    F10Missing,

    // Field 13
    F13F13aSyntax,
    F13F13bSyntax,
    F13TooManyFields,
    F13MoreSubfieldsExpected,
    F13Missing,

    // Field 14
    F14F14aSyntax,
    F14F14abSyntax,
    F14F14bSyntax,
    F14F14cSyntax,
    F14F14dSyntax,
    F14F14eSyntax,
    F14TooManyFields,
    F14MoreFieldsExpected,
    F14Missing,

    // Field 15
    F15Missing,

    // Field 16
    F16F16aSyntax,
    F16F16bSyntax,
    F16F16cSyntax,
    F16F16dSyntax,
    F16TooManyFields,
    F16Missing,

    // Field 17
    F17F17aSyntax,
    F17F17bSyntax,
    F17F17cSyntax,
    F17TooManyFields,
    F17Missing,

    // Field 18 DOF
    F18DofF18aSyntax,
    F18DofTooManyFields,
    F18DofMissing,

    // Field 22
    F22DataMissing,
    F22NoF22KeywordsFound,
    F22UnrecognisedKeyword,
    F22UnrecognisedData,
    F22FieldDuplicated,

    // OLDI fields 80 and 81
    F80F80aSyntax,
    F80TooManyFields,
    F80Missing,
    F81F81aSyntax,
    F81SlashSyntax,
    F81F81bSyntax,
    F81F81cSyntax,
    F81TooManyFields,
    F81Incomplete,
    F81Missing,

    // MFS significant point
    MfsPointSyntax,
    MfsPointTooManyFields,
    MfsPointMissing,
}

impl ErrorId {
    /// The catalog text for this diagnostic; `!` marks where the offending
    /// text is substituted.
    #[allow(clippy::too_many_lines)]
    pub fn text(self) -> &'static str {
        match self {
            ErrorId::SystemConfigUndefined => {
                "Message content undefined for Message Type/Adjacent Unit/Title combination !"
            }
            ErrorId::MsgEmpty => "Message is empty",
            ErrorId::MsgTooShort => {
                "Message is too short and cannot be considered for processing"
            }
            ErrorId::MsgAdexpNotSupported => {
                "Looks like an ADEXP message, currently not supported"
            }
            ErrorId::MsgTooManyFields => {
                "Too many fields in this message, the field '!' is superfluous; \
                 check placement of hyphens"
            }
            ErrorId::MsgTooFewFields => {
                "Too few fields in this message; expecting at least ! fields"
            }

            ErrorId::FldMoreSubfieldsExpected => "More subfields expected after '!'",
            ErrorId::FldSlashSyntax => "Expecting forward slash '/' instead of '!'",

            ErrorId::PrioritySyntax => {
                "Expecting priority indicator as 'FF', 'GG', 'DD', 'KK' or 'SS' instead of '!'"
            }
            ErrorId::PriorityMissing => {
                "The priority field is missing, should contain 'FF', 'GG', 'DD', 'KK' or 'SS'"
            }
            ErrorId::PriorityTooManyFields => {
                "Remove the extra field(s) '!' in the priority field"
            }

            ErrorId::FilingTimeSyntax => {
                "Expecting filing time in DDHHMM format instead of '!'"
            }
            ErrorId::FilingTimeMissing => {
                "The message filing time is missing, should contain DTG as DDHHMM"
            }
            ErrorId::FilingTimeTooManyFields => {
                "Remove the extra field(s) '!' in the filing time field"
            }

            ErrorId::OriginatorSyntax => {
                "Expecting 8 character or 7 character / digit ATC facility address instead of '!'"
            }
            ErrorId::OriginatorMissing => {
                "The message originator is missing, 8 character or 7 character / digit \
                 ATC facility address"
            }
            ErrorId::OriginatorTooManyFields => {
                "Remove the extra field(s) '!' in the originator field"
            }

            ErrorId::AddresseeSyntax => {
                "Expecting 8 character or 7 character / digit ATC facility address instead of '!'"
            }
            ErrorId::AddresseeMissing => {
                "The addressee field is missing, expecting at least one addressee as an 8 \
                 character or 7 character / digit ATC facility address"
            }
            ErrorId::AddresseeTooManyFields => {
                "Remove the extra field(s) '!' in the addressee field"
            }
            ErrorId::AdAddresseeSyntax => {
                "Expecting 8 character or 7 character / digit ATC facility address instead of '!'"
            }
            ErrorId::AdAddresseeMissing => {
                "Expecting at least one additional addressee as an 8 character or 7 \
                 character / digit ATC facility address"
            }
            ErrorId::AdAddresseeTooManyFields => {
                "Remove the extra field(s) '!' in the additional addressee field"
            }

            ErrorId::F3TitleMissing => "No ATS message title identified in this message",
            ErrorId::F3TitleSyntax => {
                "Message title '!' unrecognized, cannot process this message"
            }
            ErrorId::F3TxSyntax => {
                "Expecting adjacent unit sender name as 1 to 4 letters instead of '!'"
            }
            ErrorId::F3RxSyntax => {
                "Expecting adjacent unit receiver name as 1 to 4 letters instead of '!'"
            }
            ErrorId::F3SeqSyntax => {
                "Expecting channel sequence number as 3 digits instead '!'"
            }
            ErrorId::F3RxTxExpected => {
                "Expecting sender/receiver adjacent unit name and sequence number instead of '!'"
            }
            ErrorId::F3TooManyFields => {
                "Field 3 is correct, the extra fields '!' should be removed"
            }

            ErrorId::F5F5aSyntax => {
                "The first item in F5a should be INCERFA, ALERFA or DETRESFA instead of '!'"
            }
            ErrorId::F5F5abExpectingSlash => {
                "Expecting '/<Facility Address>' instead of '!'"
            }
            ErrorId::F5F5bSyntax => {
                "Expecting 8 character or 7 character / digit ATC facility address instead of '!'"
            }
            ErrorId::F5F5bcExpectingSlash => "Expecting '/<Free text>' instead of '!'",
            ErrorId::F5F5cSyntax => {
                "Field 5c can only contain upper case characters and digits instead of '!'"
            }
            ErrorId::F5TooManyFields => {
                "Field 5 is correct, the extra field '!' should be removed"
            }
            ErrorId::F5Missing => "There is no data in field 5",

            ErrorId::F7F7aSyntax => {
                "Expecting callsign in field 7 instead of '!', (1 to 7 characters and digits)"
            }
            ErrorId::F7F7abSyntax => {
                "Expecting '/<SSR Mode ('A' or 'B') and Code (4 digits 0 to 7 as octal \
                 number>' instead of '!'"
            }
            ErrorId::F7F7bSyntax => "Expecting SSR mode A or C instead of '!'",
            ErrorId::F7F7cSyntax => {
                "Expecting SSR code as 4 digit octal value instead of '!'"
            }
            ErrorId::F7TooManyFields => {
                "Too many fields in Field 7, remove '!' and / or check the overall syntax"
            }
            ErrorId::F7MoreSubfieldsExpected => {
                "Expecting Mode A or C and octal SSR code at end of field instead of '!'"
            }
            ErrorId::F7Missing => "There is no data in field 7",

            ErrorId::F8F8aSyntax => {
                "Expecting flight rules 'I', 'V', 'Y' or 'Z' instead of '!'"
            }
            ErrorId::F8F8bSyntax => {
                "Expecting type of flight 'S', 'N', 'G', 'M' or 'X' instead of '!'"
            }
            ErrorId::F8TooManyFields => {
                "Field 8 is correct but there is extra unwanted date, remove '!' and / or \
                 check the overall syntax"
            }
            ErrorId::F8MoreSubfieldsExpected => {
                "Expecting type of flight after rules '!'"
            }
            ErrorId::F8Missing => "There is no data in field 8",

            ErrorId::F9F9aSyntax => {
                "Expecting the number of aircraft as 1 or 2 digits instead of '!'"
            }
            ErrorId::F9F9bSyntax => "Expecting aircraft type instead of '!'",
            ErrorId::F9F9bcSyntax => "Expecting WTC '/L', '/H', '/M' or '/J' after '!'",
            ErrorId::F9F9cSyntax => "Expecting WTC 'L', 'M', 'H' or 'J' instead of '!'",
            ErrorId::F9TooManyFields => {
                "Too many fields in Field 9, remove '!' and / or check the overall syntax"
            }
            ErrorId::F9MoreSubfieldsExpected => {
                "Expecting <Number of A/C (optional), Aircraft Type / WTC> instead of '!'"
            }
            ErrorId::F9Missing => "There is no data in field 9",

            ErrorId::F10F10aSyntax => {
                "Expecting COMMS/NAV capability as 'N' or 'S' and/or 'A-D', 'E1-3', 'F-I', \
                 'J1-7', 'K', 'L', 'M1-3', 'O', 'P1-9', 'R-Z' instead of '!'"
            }
            ErrorId::F10F10abSyntax | ErrorId::F10F10bSyntax => {
                "Expecting surveillance capabilities as 'N' or one or more of 'A', 'B1-2', \
                 'C', 'D1', 'E', 'G1', 'H', 'I', 'L', 'P', 'S', 'U1-2', 'V1-2' or 'X' \
                 instead of '!'"
            }
            ErrorId::F10TooManyFields => {
                "Field 10 is correct, remove the extra fields '!' and / or check the \
                 overall syntax"
            }
            ErrorId::F10MoreSubfieldsExpected => {
                "Expecting communications and surveillance capabilities instead of '!'"
            }
            ErrorId::F10Missing => "There is no data in field 10",

            ErrorId::F13F13aSyntax => {
                "Expecting departure aerodrome as an ICAO location indicator, e.g. EGLL \
                 instead of '!'"
            }
            ErrorId::F13F13bSyntax => "Expecting EOBT in HHMM instead of '!'",
            ErrorId::F13TooManyFields => "Too many fields in Field 13, remove '!'",
            ErrorId::F13MoreSubfieldsExpected => "Expecting EOBT instead of '!'",
            ErrorId::F13Missing => "There is no data in field 13",

            ErrorId::F14F14aSyntax => {
                "Expecting point as PRP, Lat/Long in degrees, Lat/Long in degrees/minutes \
                 or point/bearing/distance instead of '!'"
            }
            ErrorId::F14F14abSyntax => "Processing the slash",
            ErrorId::F14F14bSyntax => {
                "Expecting boundary crossing time in '/HHMM' instead of '!'"
            }
            ErrorId::F14F14cSyntax => {
                "Expecting cleared level (F/A 3 digits, or M/S 4 digits) instead of '!'"
            }
            ErrorId::F14F14dSyntax => {
                "Expecting supplementary crossing data (F/A 3 digits, or M/S 4 digits) \
                 instead of '!'"
            }
            ErrorId::F14F14eSyntax => {
                "Expecting crossing condition (A or B) instead of '!'"
            }
            ErrorId::F14TooManyFields => "Too many field(s) in Field 14, remove '!'",
            ErrorId::F14MoreFieldsExpected => {
                "Field 14 is incomplete, whole field should be Point/Time '/' (HHMM), \
                 Cleared level, supplementary crossing level, crossing condition (A or B) \
                 instead of '!'"
            }
            ErrorId::F14Missing => "There is no data in field 14",

            ErrorId::F15Missing => "There is no route description in field 15",

            ErrorId::F16F16aSyntax => {
                "Expecting arrival aerodrome as an ICAO location indicator, e.g. EGLL \
                 instead of '!'"
            }
            ErrorId::F16F16bSyntax => "Expecting EOBT in HHMM instead of '!'",
            ErrorId::F16F16cSyntax | ErrorId::F16F16dSyntax => {
                "Expecting alternate aerodrome as an ICAO location indicator instead of '!'"
            }
            ErrorId::F16TooManyFields => "Too many fields in Field 16, remove '!'",
            ErrorId::F16Missing => "There is no data in field 16",

            ErrorId::F17F17aSyntax => {
                "Expecting arrival aerodrome as an ICAO location indicator, e.g. EGLL \
                 instead of '!'"
            }
            ErrorId::F17F17bSyntax => "Expecting ATA in HHMM instead of '!'",
            ErrorId::F17F17cSyntax | ErrorId::F17TooManyFields => {
                "Invalid characters for alternate aerodrome text, should be 'A' to 'Z' and \
                 '0' to '9' only instead of '!'"
            }
            ErrorId::F17Missing => "There is no data in field 17",

            ErrorId::F18DofF18aSyntax => {
                "Expecting DOF in the format YYMMDD instead of '!'"
            }
            ErrorId::F18DofTooManyFields => {
                "Invalid characters for alternate aerodrome text, should be 'A' to 'Z' and \
                 '0' to '9' only instead of '!'"
            }
            ErrorId::F18DofMissing => "There is no data in field 18",

            ErrorId::F22DataMissing => "There is no data in field 22",
            ErrorId::F22NoF22KeywordsFound => {
                "Expecting a field 22 keyword/data pair instead of '!'"
            }
            ErrorId::F22UnrecognisedKeyword => {
                "The field 22 keyword '!' is not a recognised ICAO field number"
            }
            ErrorId::F22UnrecognisedData => {
                "The field 22 keyword '!' has no data following the forward slash"
            }
            ErrorId::F22FieldDuplicated => {
                "The field 22 subfield '!' occurs more than once in this field"
            }

            ErrorId::F80F80aSyntax => {
                "Expecting type of flight 'S', 'N', 'G', 'M' or 'X' instead of '!'"
            }
            ErrorId::F80TooManyFields => {
                "Field 80 is correct but there is extra unwanted data, remove '!' and / or \
                 check the overall syntax"
            }
            ErrorId::F80Missing => "There is no data in field 80",
            ErrorId::F81F81aSyntax => {
                "Expecting equipment code or surveillance class instead of '!'"
            }
            ErrorId::F81SlashSyntax => {
                "Expecting a forward slash '/' instead of '!'"
            }
            ErrorId::F81F81bSyntax => {
                "Expecting equipment stats as 'EQ'.'UN' or 'NO' instead of '!'"
            }
            ErrorId::F81F81cSyntax => {
                "Expecting surveillance equipment code instead of '!'"
            }
            ErrorId::F81TooManyFields => "Too many field(s) in Field 81, remove '!'",
            ErrorId::F81Incomplete => {
                "Field 81 is incomplete, field should be (equipment code '/' equipment \
                 status) or (surveillance class '/' equipment status '/' surveillance \
                 equipment code) instead of '!'"
            }
            ErrorId::F81Missing => "There is no data in field 81",

            ErrorId::MfsPointSyntax => {
                "Expecting MFS significant point starting with a letter followed by up to \
                 14 letters and digits instead of '!'"
            }
            ErrorId::MfsPointTooManyFields => {
                "Expecting a single point for the MFS point, remove '!'"
            }
            ErrorId::MfsPointMissing => {
                "There is no data in field MFS Significant point field"
            }
        }
    }

    /// The catalog text with `!` replaced by `erroneous`.
    pub fn text_with(self, erroneous: &str) -> String {
        self.text().replace('!', erroneous)
    }
}
