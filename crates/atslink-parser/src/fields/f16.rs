//! Field 16: destination aerodrome, total EET and up to two alternates,
//! e.g. `EGBB0100 EGSS EGGW`. `F16a` and `F16ab` are the shortened variants
//! used by some OLDI messages.

use atslink_models::{FieldId, FlightPlanRecord};

use super::common::FieldParser;
use crate::util::first_digit_index;

pub(crate) fn parse(fpr: &mut FlightPlanRecord, field_id: FieldId) {
    let whitespace = if field_id == FieldId::F16ab {
        " /\n\t\r"
    } else {
        " \n\t\r"
    };
    let Some(mut parser) = FieldParser::new(fpr, field_id, whitespace) else {
        return;
    };
    if parser.no_tokens() {
        parser.add_error(fpr, "", 0, 0, parser.missing_error());
        return;
    }
    // Aerodrome and EET arrive glued together, e.g. EGBB0100.
    let first = parser.token_at(0).map(|t| t.text.clone()).unwrap_or_default();
    if let Some(index) = first_digit_index(&first) {
        if index > 0 {
            parser.split_and_insert_token(0, index);
        }
    }
    parser.parse_field_base(fpr);
    parser.check_if_tokens_left_over(fpr);
}

#[cfg(test)]
mod tests {
    use atslink_models::SubfieldId;

    use super::*;

    fn parse_f16(text: &str) -> FlightPlanRecord {
        let mut fpr = FlightPlanRecord::new();
        fpr.add_field(FieldId::F16, text, 0, text.len());
        parse(&mut fpr, FieldId::F16);
        fpr
    }

    #[test]
    fn destination_eet_and_alternates() {
        let fpr = parse_f16("EGBB0100 EGSS EGGW");
        assert!(!fpr.errors_detected(), "{:?}", fpr.errors());
        let field = fpr.field(FieldId::F16).unwrap();
        assert_eq!(field.subfield(SubfieldId::F16a).unwrap().text, "EGBB");
        assert_eq!(field.subfield(SubfieldId::F16b).unwrap().text, "0100");
        assert_eq!(field.subfield(SubfieldId::F16c).unwrap().text, "EGSS");
        assert_eq!(field.subfield(SubfieldId::F16d).unwrap().text, "EGGW");
    }

    #[test]
    fn alternates_are_optional() {
        let fpr = parse_f16("EGBB0100");
        assert!(!fpr.errors_detected(), "{:?}", fpr.errors());
    }

    #[test]
    fn missing_eet() {
        let fpr = parse_f16("EGBB");
        assert_eq!(fpr.errors().len(), 1);
        assert_eq!(
            fpr.errors()[0].message,
            "More subfields expected after 'EGBB'"
        );
    }

    #[test]
    fn third_alternate_is_too_many() {
        let fpr = parse_f16("EGBB0100 EGSS EGGW EGLL");
        assert_eq!(fpr.errors().len(), 1);
        assert_eq!(
            fpr.errors()[0].message,
            "Too many fields in Field 16, remove 'EGLL'"
        );
    }

    #[test]
    fn destination_only_variant() {
        let mut fpr = FlightPlanRecord::new();
        fpr.add_field(FieldId::F16a, "LFPG", 0, 4);
        parse(&mut fpr, FieldId::F16a);
        assert!(!fpr.errors_detected(), "{:?}", fpr.errors());
    }

    #[test]
    fn destination_and_eet_variant() {
        let mut fpr = FlightPlanRecord::new();
        fpr.add_field(FieldId::F16ab, "LFPG0230", 0, 8);
        parse(&mut fpr, FieldId::F16ab);
        assert!(!fpr.errors_detected(), "{:?}", fpr.errors());
        let field = fpr.field(FieldId::F16ab).unwrap();
        assert_eq!(field.subfield(SubfieldId::F16b).unwrap().text, "0230");
    }

    #[test]
    fn empty_field_is_missing() {
        let fpr = parse_f16("");
        assert_eq!(fpr.errors()[0].message, "There is no data in field 16");
    }
}
