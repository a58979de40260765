//! The DOF indicator carried in field 18, e.g. `DOF/250401`. Only the last
//! six characters of the token are date-checked so the `DOF/` prefix may or
//! may not have been stripped by the caller.

use atslink_models::{ErrorId, FieldId, FlightPlanRecord, SubfieldId};

use super::common::FieldParser;
use crate::util::is_dof;

pub(crate) fn parse_dof(fpr: &mut FlightPlanRecord) {
    let Some(parser) = FieldParser::new(fpr, FieldId::F18Dof, " \n\t\r") else {
        return;
    };
    if parser.no_tokens() {
        parser.add_error(fpr, "", 0, 0, parser.missing_error());
        return;
    }
    let Some(first) = parser.token_at(0).cloned() else {
        return;
    };
    let tail_start = first.text.len().saturating_sub(6);
    // get() keeps a tail cut mid-character from panicking; such a token can
    // never be a valid date anyway.
    if !first.text.get(tail_start..).is_some_and(is_dof) {
        parser.add_error(
            fpr,
            &first.text,
            first.start,
            first.end,
            ErrorId::F18DofF18aSyntax,
        );
    }
    // The raw token is kept as the subfield even when the date is bad.
    fpr.add_subfield(
        FieldId::F18Dof,
        SubfieldId::F18Dof,
        &first.text,
        parser.field_start() + first.start,
        parser.field_start() + first.end,
    );
    parser.check_if_tokens_left_over(fpr);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_dof_field(text: &str) -> FlightPlanRecord {
        let mut fpr = FlightPlanRecord::new();
        fpr.add_field(FieldId::F18Dof, text, 0, text.len());
        parse_dof(&mut fpr);
        fpr
    }

    #[test]
    fn valid_date_of_flight() {
        let fpr = parse_dof_field("250401");
        assert!(!fpr.errors_detected(), "{:?}", fpr.errors());
        let field = fpr.field(FieldId::F18Dof).unwrap();
        assert_eq!(field.subfield(SubfieldId::F18Dof).unwrap().text, "250401");
    }

    #[test]
    fn calendar_checked_not_just_digits() {
        let fpr = parse_dof_field("250230");
        assert_eq!(
            fpr.errors()[0].message,
            "Expecting DOF in the format YYMMDD instead of '250230'"
        );
    }

    #[test]
    fn too_short_token_rejected_but_kept() {
        let fpr = parse_dof_field("0401");
        assert!(fpr.errors_detected());
        let field = fpr.field(FieldId::F18Dof).unwrap();
        assert_eq!(field.subfield(SubfieldId::F18Dof).unwrap().text, "0401");
    }

    #[test]
    fn multibyte_token_rejected_not_sliced() {
        let fpr = parse_dof_field("é12345");
        assert_eq!(
            fpr.errors()[0].message,
            "Expecting DOF in the format YYMMDD instead of 'é12345'"
        );
        let field = fpr.field(FieldId::F18Dof).unwrap();
        assert_eq!(field.subfield(SubfieldId::F18Dof).unwrap().text, "é12345");
    }

    #[test]
    fn empty_field_is_missing() {
        let fpr = parse_dof_field("");
        assert_eq!(fpr.errors()[0].message, "There is no data in field 18");
    }
}
