//! Field 14: boundary estimate data, e.g. `PPP/0000A120M1122A`. The time,
//! cleared level, supplementary level and crossing condition arrive glued
//! together after the slash and are cut apart before the base parse. `F14a`
//! is the point-only variant used by some OLDI messages.

use atslink_models::{FieldId, FlightPlanRecord};

use super::common::FieldParser;
use crate::util::first_alpha_index;

pub(crate) fn parse(fpr: &mut FlightPlanRecord, field_id: FieldId) {
    let whitespace = if field_id == FieldId::F14a {
        " \n\t\r"
    } else {
        " /\n\t\r"
    };
    let Some(mut parser) = FieldParser::new(fpr, field_id, whitespace) else {
        return;
    };
    if parser.no_tokens() {
        parser.add_error(fpr, "", 0, 0, parser.missing_error());
        return;
    }

    if field_id == FieldId::F14 && parser.num_tokens() > 2 {
        // Third token holds HHMM and the levels; each level starts with a
        // letter, so cut at successive alpha positions.
        let text = parser.token_at(2).map(|t| t.text.clone()).unwrap_or_default();
        if let Some(index) = first_alpha_index(&text) {
            if index != 0 {
                parser.split_and_insert_token(2, index);
                split_after_level_letter(&mut parser, 3);
            }
        }
    }

    parser.parse_field_base(fpr);
    parser.check_if_tokens_left_over(fpr);
}

/// Cut the token at `idx` after its level letter and digits, then do the
/// same for the token that follows.
fn split_after_level_letter(parser: &mut FieldParser, idx: usize) {
    let text = parser.token_at(idx).map(|t| t.text.clone()).unwrap_or_default();
    if text.len() > 1 {
        if let Some(index) = first_alpha_index(&text[1..]) {
            if index != 0 {
                parser.split_and_insert_token(idx, index + 1);
                if idx == 3 {
                    split_after_level_letter(parser, 4);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use atslink_models::SubfieldId;

    use super::*;

    fn parse_f14(text: &str) -> FlightPlanRecord {
        let mut fpr = FlightPlanRecord::new();
        fpr.add_field(FieldId::F14, text, 0, text.len());
        parse(&mut fpr, FieldId::F14);
        fpr
    }

    #[test]
    fn complete_estimate_data_splits_apart() {
        let fpr = parse_f14("PPP/0000A120M1122A");
        assert!(!fpr.errors_detected(), "{:?}", fpr.errors());
        let field = fpr.field(FieldId::F14).unwrap();
        assert_eq!(field.subfield(SubfieldId::F14a).unwrap().text, "PPP");
        assert_eq!(field.subfield(SubfieldId::F14b).unwrap().text, "0000");
        assert_eq!(field.subfield(SubfieldId::F14c).unwrap().text, "A120");
        assert_eq!(field.subfield(SubfieldId::F14d).unwrap().text, "M1122");
        assert_eq!(field.subfield(SubfieldId::F14e).unwrap().text, "A");
    }

    #[test]
    fn supplementary_data_is_optional() {
        let fpr = parse_f14("PPP/2034F100");
        assert!(!fpr.errors_detected(), "{:?}", fpr.errors());
    }

    #[test]
    fn lat_long_points_accepted() {
        let fpr = parse_f14("65N156W/2334A105M1203A");
        assert!(!fpr.errors_detected(), "{:?}", fpr.errors());
    }

    #[test]
    fn point_alone_is_incomplete() {
        let fpr = parse_f14("PPP");
        assert_eq!(fpr.errors().len(), 1);
        assert_eq!(
            fpr.errors()[0].message,
            "Field 14 is incomplete, whole field should be Point/Time '/' (HHMM), \
             Cleared level, supplementary crossing level, crossing condition (A or B) \
             instead of 'PPP'"
        );
    }

    #[test]
    fn short_crossing_time_rejected() {
        let fpr = parse_f14("PPP/123");
        assert_eq!(fpr.errors().len(), 1);
        assert_eq!(
            fpr.errors()[0].message,
            "Expecting boundary crossing time in '/HHMM' instead of '123'"
        );
    }

    #[test]
    fn bad_cleared_level() {
        let fpr = parse_f14("PPP/1234F35");
        assert_eq!(
            fpr.errors()[0].message,
            "Expecting cleared level (F/A 3 digits, or M/S 4 digits) instead of 'F35'"
        );
    }

    #[test]
    fn point_only_variant() {
        let mut fpr = FlightPlanRecord::new();
        fpr.add_field(FieldId::F14a, "GODLU", 0, 5);
        parse(&mut fpr, FieldId::F14a);
        assert!(!fpr.errors_detected(), "{:?}", fpr.errors());
    }

    #[test]
    fn empty_field_is_missing() {
        let fpr = parse_f14("    ");
        assert_eq!(fpr.errors()[0].message, "There is no data in field 14");
    }
}
