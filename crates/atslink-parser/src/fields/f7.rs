//! Field 7: aircraft identification with optional SSR mode and code,
//! e.g. `BAW123/A1234`.

use atslink_models::{FieldId, FlightPlanRecord};

use super::common::FieldParser;

pub(crate) fn parse(fpr: &mut FlightPlanRecord) {
    let Some(mut parser) = FieldParser::new(fpr, FieldId::F7, " /\n\t\r") else {
        return;
    };
    if parser.no_tokens() {
        parser.add_error(fpr, "", 0, 0, parser.missing_error());
        return;
    }
    // The SSR mode and code arrive as one token after the slash; cut the
    // mode letter off the front.
    if parser.num_tokens() > 2 {
        parser.split_and_insert_token(2, 1);
    }
    let num_parsed = parser.parse_field_base(fpr);
    if parser.num_tokens() > 1 {
        parser.parse_extra_compulsory_tokens(fpr, num_parsed);
    }
    parser.check_if_tokens_left_over(fpr);
}

#[cfg(test)]
mod tests {
    use atslink_models::SubfieldId;

    use super::*;

    fn parse_f7(text: &str) -> FlightPlanRecord {
        let mut fpr = FlightPlanRecord::new();
        fpr.add_field(FieldId::F7, text, 0, text.len());
        parse(&mut fpr);
        fpr
    }

    #[test]
    fn callsign_only() {
        let fpr = parse_f7("BAW123");
        assert!(!fpr.errors_detected(), "{:?}", fpr.errors());
        let field = fpr.field(FieldId::F7).unwrap();
        assert_eq!(field.subfield(SubfieldId::F7a).unwrap().text, "BAW123");
    }

    #[test]
    fn callsign_with_mode_and_code() {
        let fpr = parse_f7("BAW123/A1234");
        assert!(!fpr.errors_detected(), "{:?}", fpr.errors());
        let field = fpr.field(FieldId::F7).unwrap();
        assert_eq!(field.subfield(SubfieldId::F7b).unwrap().text, "A");
        assert_eq!(field.subfield(SubfieldId::F7c).unwrap().text, "1234");
    }

    #[test]
    fn trailing_slash_reports_more_expected() {
        let fpr = parse_f7("TEST01/");
        assert_eq!(fpr.errors().len(), 1);
        assert_eq!(
            fpr.errors()[0].message,
            "Expecting Mode A or C and octal SSR code at end of field instead of '/'"
        );
    }

    #[test]
    fn octal_code_enforced() {
        let fpr = parse_f7("BAW123/A8888");
        assert_eq!(fpr.errors().len(), 1);
        assert_eq!(
            fpr.errors()[0].message,
            "Expecting SSR code as 4 digit octal value instead of '8888'"
        );
    }

    #[test]
    fn extra_token_after_a_complete_field() {
        let fpr = parse_f7("T1/A1234 EXTRA");
        assert_eq!(fpr.errors().len(), 1);
        assert_eq!(
            fpr.errors()[0].message,
            "Too many fields in Field 7, remove 'EXTRA' and / or check the overall syntax"
        );
    }

    #[test]
    fn empty_field_is_missing() {
        let fpr = parse_f7("");
        assert_eq!(
            fpr.errors()[0].message,
            "There is no data in field 7"
        );
    }
}
