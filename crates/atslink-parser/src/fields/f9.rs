//! Field 9: number of aircraft, aircraft type and wake turbulence category,
//! e.g. `2B737/M`. The aircraft count is optional.

use atslink_models::{FieldId, FlightPlanRecord};

use super::common::FieldParser;
use crate::tokenizer::Token;
use crate::util::{first_alpha_index, first_digit_index};

pub(crate) fn parse(fpr: &mut FlightPlanRecord) {
    let Some(mut parser) = FieldParser::new(fpr, FieldId::F9, " /\n\t\r") else {
        return;
    };
    if parser.no_tokens() {
        parser.add_error(fpr, "", 0, 0, parser.missing_error());
        return;
    }
    let first = parser.token_at(0).map(|t| t.text.clone()).unwrap_or_default();
    if first.len() > 1 {
        if first_digit_index(&first) == Some(0) {
            // Leading digits are the aircraft count; cut it off the type.
            if let Some(index) = first_alpha_index(&first) {
                parser.split_and_insert_token(0, index);
            }
        } else {
            // No count given; stand a dummy one in so the layout lines up.
            parser.insert_token(Token::new("00", 0, 0), 0);
        }
    }
    parser.parse_field_base(fpr);
    parser.check_if_tokens_left_over(fpr);
}

#[cfg(test)]
mod tests {
    use atslink_models::SubfieldId;

    use super::*;

    fn parse_f9(text: &str) -> FlightPlanRecord {
        let mut fpr = FlightPlanRecord::new();
        fpr.add_field(FieldId::F9, text, 0, text.len());
        parse(&mut fpr);
        fpr
    }

    #[test]
    fn count_type_and_wtc() {
        let fpr = parse_f9("2B737/M");
        assert!(!fpr.errors_detected(), "{:?}", fpr.errors());
        let field = fpr.field(FieldId::F9).unwrap();
        assert_eq!(field.subfield(SubfieldId::F9a).unwrap().text, "2");
        assert_eq!(field.subfield(SubfieldId::F9b).unwrap().text, "B737");
        assert_eq!(field.subfield(SubfieldId::F9c).unwrap().text, "M");
    }

    #[test]
    fn count_is_optional() {
        let fpr = parse_f9("B747/H");
        assert!(!fpr.errors_detected(), "{:?}", fpr.errors());
    }

    #[test]
    fn count_alone_wants_more() {
        let fpr = parse_f9("7 ");
        assert_eq!(fpr.errors().len(), 1);
        assert_eq!(
            fpr.errors()[0].message,
            "Expecting <Number of A/C (optional), Aircraft Type / WTC> instead of '7'"
        );
    }

    #[test]
    fn three_digit_count_rejected() {
        let fpr = parse_f9("102");
        assert_eq!(
            fpr.errors()[0].message,
            "Expecting the number of aircraft as 1 or 2 digits instead of '102'"
        );
    }

    #[test]
    fn bad_wtc_letter() {
        let fpr = parse_f9("B737 / R");
        assert_eq!(
            fpr.errors()[0].message,
            "Expecting WTC 'L', 'M', 'H' or 'J' instead of 'R'"
        );
    }

    #[test]
    fn extra_tokens_rejected() {
        let fpr = parse_f9(" B707 /M HH");
        assert_eq!(fpr.errors().len(), 1);
        assert_eq!(
            fpr.errors()[0].message,
            "Too many fields in Field 9, remove 'HH' and / or check the overall syntax"
        );
    }

    #[test]
    fn empty_field_is_missing() {
        let fpr = parse_f9("      ");
        assert_eq!(fpr.errors()[0].message, "There is no data in field 9");
    }
}
