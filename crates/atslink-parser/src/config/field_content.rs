//! The subfields each ICAO field is made of, with the diagnostics used when
//! parsing that field.
//!
//! Error lists follow a fixed tail convention relied on by the field parser
//! framework: the last four entries are, in order, the syntax error for the
//! last subfield, the too-many-subfields error, the more-subfields-expected
//! error and the field-missing error. The leading entries are the syntax
//! errors reported per subfield position.

use atslink_models::{ErrorId, FieldId, SubfieldId};

/// Subfield layout and diagnostics for one field.
pub(crate) struct FieldContent {
    pub field_id: FieldId,
    pub subfields: &'static [SubfieldId],
    pub errors: &'static [ErrorId],
}

static FIELD_CONTENT: &[FieldContent] = &[
    FieldContent {
        field_id: FieldId::PriorityIndicator,
        subfields: &[SubfieldId::PriorityIndicator],
        errors: &[
            ErrorId::PrioritySyntax,
            ErrorId::PriorityTooManyFields,
            ErrorId::FldMoreSubfieldsExpected,
            ErrorId::PriorityMissing,
        ],
    },
    FieldContent {
        field_id: FieldId::FilingTime,
        subfields: &[SubfieldId::FilingTime],
        errors: &[
            ErrorId::FilingTimeSyntax,
            ErrorId::FilingTimeTooManyFields,
            ErrorId::FldMoreSubfieldsExpected,
            ErrorId::FilingTimeMissing,
        ],
    },
    FieldContent {
        field_id: FieldId::Originator,
        subfields: &[SubfieldId::Originator],
        errors: &[
            ErrorId::OriginatorSyntax,
            ErrorId::OriginatorTooManyFields,
            ErrorId::FldMoreSubfieldsExpected,
            ErrorId::OriginatorMissing,
        ],
    },
    FieldContent {
        field_id: FieldId::Address,
        subfields: &[
            SubfieldId::Address1,
            SubfieldId::Address2,
            SubfieldId::Address3,
            SubfieldId::Address4,
            SubfieldId::Address5,
            SubfieldId::Address6,
            SubfieldId::Address7,
            SubfieldId::Address8,
        ],
        errors: &[
            ErrorId::AddresseeSyntax,
            ErrorId::AddresseeSyntax,
            ErrorId::AddresseeSyntax,
            ErrorId::AddresseeSyntax,
            ErrorId::AddresseeSyntax,
            ErrorId::AddresseeSyntax,
            ErrorId::AddresseeSyntax,
            ErrorId::AddresseeSyntax,
            ErrorId::AddresseeTooManyFields,
            ErrorId::FldMoreSubfieldsExpected,
            ErrorId::AddresseeMissing,
        ],
    },
    FieldContent {
        field_id: FieldId::AdAddress,
        subfields: &[
            SubfieldId::AdAddress1,
            SubfieldId::AdAddress2,
            SubfieldId::AdAddress3,
            SubfieldId::AdAddress4,
            SubfieldId::AdAddress5,
            SubfieldId::AdAddress6,
            SubfieldId::AdAddress7,
            SubfieldId::AdAddress8,
        ],
        errors: &[
            ErrorId::AdAddresseeSyntax,
            ErrorId::AdAddresseeSyntax,
            ErrorId::AdAddresseeSyntax,
            ErrorId::AdAddresseeSyntax,
            ErrorId::AdAddresseeSyntax,
            ErrorId::AdAddresseeSyntax,
            ErrorId::AdAddresseeSyntax,
            ErrorId::AdAddresseeSyntax,
            ErrorId::AdAddresseeTooManyFields,
            ErrorId::FldMoreSubfieldsExpected,
            ErrorId::AdAddresseeMissing,
        ],
    },
    FieldContent {
        field_id: FieldId::F3,
        subfields: &[
            SubfieldId::F3a,
            SubfieldId::F3b1,
            SubfieldId::F3b2,
            SubfieldId::F3b3,
            SubfieldId::F3b4,
            SubfieldId::F3c1,
            SubfieldId::F3c2,
            SubfieldId::F3c3,
            SubfieldId::F3c4,
        ],
        errors: &[
            ErrorId::F3TitleSyntax,
            ErrorId::F3TxSyntax,
            ErrorId::FldSlashSyntax,
            ErrorId::F3RxSyntax,
            ErrorId::F3SeqSyntax,
            ErrorId::F3TxSyntax,
            ErrorId::FldSlashSyntax,
            ErrorId::F3RxSyntax,
            ErrorId::F3SeqSyntax,
            ErrorId::F3TooManyFields,
            ErrorId::F3RxTxExpected,
            ErrorId::F3TitleMissing,
        ],
    },
    FieldContent {
        field_id: FieldId::F5,
        subfields: &[
            SubfieldId::F5a,
            SubfieldId::F5ab,
            SubfieldId::F5b,
            SubfieldId::F5bc,
            SubfieldId::F5c,
        ],
        errors: &[
            ErrorId::F5F5aSyntax,
            ErrorId::F5F5abExpectingSlash,
            ErrorId::F5F5bSyntax,
            ErrorId::F5F5bcExpectingSlash,
            ErrorId::F5F5cSyntax,
            ErrorId::F5TooManyFields,
            ErrorId::FldMoreSubfieldsExpected,
            ErrorId::F5Missing,
        ],
    },
    FieldContent {
        field_id: FieldId::F7,
        subfields: &[
            SubfieldId::F7a,
            SubfieldId::F7ab,
            SubfieldId::F7b,
            SubfieldId::F7c,
        ],
        errors: &[
            ErrorId::F7F7aSyntax,
            ErrorId::F7F7abSyntax,
            ErrorId::F7F7bSyntax,
            ErrorId::F7F7cSyntax,
            ErrorId::F7TooManyFields,
            ErrorId::F7MoreSubfieldsExpected,
            ErrorId::F7Missing,
        ],
    },
    FieldContent {
        field_id: FieldId::F8,
        subfields: &[SubfieldId::F8a, SubfieldId::F8b],
        errors: &[
            ErrorId::F8F8aSyntax,
            ErrorId::F8F8bSyntax,
            ErrorId::F8TooManyFields,
            ErrorId::F8MoreSubfieldsExpected,
            ErrorId::F8Missing,
        ],
    },
    FieldContent {
        field_id: FieldId::F8a,
        subfields: &[SubfieldId::F8a],
        errors: &[
            ErrorId::F8F8aSyntax,
            ErrorId::F8TooManyFields,
            ErrorId::F8MoreSubfieldsExpected,
            ErrorId::F8Missing,
        ],
    },
    FieldContent {
        field_id: FieldId::F9,
        subfields: &[
            SubfieldId::F9a,
            SubfieldId::F9b,
            SubfieldId::F9bc,
            SubfieldId::F9c,
        ],
        errors: &[
            ErrorId::F9F9aSyntax,
            ErrorId::F9F9bSyntax,
            ErrorId::F9F9bcSyntax,
            ErrorId::F9F9cSyntax,
            ErrorId::F9TooManyFields,
            ErrorId::F9MoreSubfieldsExpected,
            ErrorId::F9Missing,
        ],
    },
    FieldContent {
        field_id: FieldId::F10,
        subfields: &[SubfieldId::F10a, SubfieldId::F10ab, SubfieldId::F10b],
        errors: &[
            ErrorId::F10F10aSyntax,
            ErrorId::F10F10abSyntax,
            ErrorId::F10F10bSyntax,
            ErrorId::F10TooManyFields,
            ErrorId::F10MoreSubfieldsExpected,
            ErrorId::F10Missing,
        ],
    },
    FieldContent {
        field_id: FieldId::F13,
        subfields: &[SubfieldId::F13a, SubfieldId::F13b],
        errors: &[
            ErrorId::F13F13aSyntax,
            ErrorId::F13F13bSyntax,
            ErrorId::F13TooManyFields,
            ErrorId::F13MoreSubfieldsExpected,
            ErrorId::F13Missing,
        ],
    },
    FieldContent {
        field_id: FieldId::F13a,
        subfields: &[SubfieldId::F13a],
        errors: &[
            ErrorId::F13F13aSyntax,
            ErrorId::F13TooManyFields,
            ErrorId::F13MoreSubfieldsExpected,
            ErrorId::F13Missing,
        ],
    },
    FieldContent {
        field_id: FieldId::F14,
        subfields: &[
            SubfieldId::F14a,
            SubfieldId::F14ab,
            SubfieldId::F14b,
            SubfieldId::F14c,
            SubfieldId::F14d,
            SubfieldId::F14e,
        ],
        errors: &[
            ErrorId::F14F14aSyntax,
            ErrorId::F14F14abSyntax,
            ErrorId::F14F14bSyntax,
            ErrorId::F14F14cSyntax,
            ErrorId::F14F14dSyntax,
            ErrorId::F14F14eSyntax,
            ErrorId::F14TooManyFields,
            ErrorId::F14MoreFieldsExpected,
            ErrorId::F14Missing,
        ],
    },
    FieldContent {
        field_id: FieldId::F14a,
        subfields: &[SubfieldId::F14a],
        errors: &[
            ErrorId::F14F14aSyntax,
            ErrorId::F14TooManyFields,
            ErrorId::F14MoreFieldsExpected,
            ErrorId::F14Missing,
        ],
    },
    FieldContent {
        field_id: FieldId::F15,
        subfields: &[SubfieldId::F15],
        errors: &[],
    },
    FieldContent {
        field_id: FieldId::F16,
        subfields: &[
            SubfieldId::F16a,
            SubfieldId::F16b,
            SubfieldId::F16c,
            SubfieldId::F16d,
        ],
        errors: &[
            ErrorId::F16F16aSyntax,
            ErrorId::F16F16bSyntax,
            ErrorId::F16F16cSyntax,
            ErrorId::F16F16dSyntax,
            ErrorId::F16TooManyFields,
            ErrorId::FldMoreSubfieldsExpected,
            ErrorId::F16Missing,
        ],
    },
    FieldContent {
        field_id: FieldId::F16a,
        subfields: &[SubfieldId::F16a],
        errors: &[
            ErrorId::F16F16aSyntax,
            ErrorId::F16TooManyFields,
            ErrorId::FldMoreSubfieldsExpected,
            ErrorId::F16Missing,
        ],
    },
    FieldContent {
        field_id: FieldId::F16ab,
        subfields: &[SubfieldId::F16a, SubfieldId::F16b],
        errors: &[
            ErrorId::F16F16aSyntax,
            ErrorId::F16F16bSyntax,
            ErrorId::F16TooManyFields,
            ErrorId::FldMoreSubfieldsExpected,
            ErrorId::F16Missing,
        ],
    },
    FieldContent {
        field_id: FieldId::F17,
        subfields: &[SubfieldId::F17a, SubfieldId::F17b, SubfieldId::F17c],
        errors: &[
            ErrorId::F17F17aSyntax,
            ErrorId::F17F17bSyntax,
            ErrorId::F17F17cSyntax,
            ErrorId::F17TooManyFields,
            ErrorId::FldMoreSubfieldsExpected,
            ErrorId::F17Missing,
        ],
    },
    FieldContent {
        field_id: FieldId::F18Dof,
        subfields: &[SubfieldId::F18Dof],
        errors: &[
            ErrorId::F18DofF18aSyntax,
            ErrorId::F18DofTooManyFields,
            ErrorId::FldMoreSubfieldsExpected,
            ErrorId::F18DofMissing,
        ],
    },
    FieldContent {
        field_id: FieldId::F22,
        subfields: &[SubfieldId::F22F3],
        errors: &[],
    },
    FieldContent {
        field_id: FieldId::F80,
        subfields: &[SubfieldId::F80a],
        errors: &[
            ErrorId::F80F80aSyntax,
            ErrorId::F80TooManyFields,
            ErrorId::FldMoreSubfieldsExpected,
            ErrorId::F80Missing,
        ],
    },
    FieldContent {
        field_id: FieldId::F81,
        subfields: &[
            SubfieldId::F81a,
            SubfieldId::F81ab,
            SubfieldId::F81b,
            SubfieldId::F81bc,
            SubfieldId::F81c,
        ],
        errors: &[
            ErrorId::F81F81aSyntax,
            ErrorId::F81SlashSyntax,
            ErrorId::F81F81bSyntax,
            ErrorId::F81SlashSyntax,
            ErrorId::F81F81cSyntax,
            ErrorId::F81TooManyFields,
            ErrorId::F81Incomplete,
            ErrorId::F81Missing,
        ],
    },
    FieldContent {
        field_id: FieldId::MfsSigPoint,
        subfields: &[SubfieldId::MfsSigPoint],
        errors: &[
            ErrorId::MfsPointSyntax,
            ErrorId::MfsPointTooManyFields,
            ErrorId::FldMoreSubfieldsExpected,
            ErrorId::MfsPointMissing,
        ],
    },
];

/// The layout entry for `field_id`, if the field has parsable subfields.
/// Fields captured as raw text (18, 19, 20, 21 and the title-specific
/// field 22 content) have no entry.
pub(crate) fn field_content(field_id: FieldId) -> Option<&'static FieldContent> {
    FIELD_CONTENT.iter().find(|c| c.field_id == field_id)
}
