//! The OLDI-only fields 80 (type of flight) and 81 (equipment status).

use atslink_models::{FieldId, FlightPlanRecord};

use super::common::FieldParser;

pub(crate) fn parse(fpr: &mut FlightPlanRecord, field_id: FieldId) {
    match field_id {
        FieldId::F80 => parse_f80(fpr),
        FieldId::F81 => parse_f81(fpr),
        _ => {}
    }
}

fn parse_f80(fpr: &mut FlightPlanRecord) {
    let Some(parser) = FieldParser::new(fpr, FieldId::F80, " \n\t\r") else {
        return;
    };
    if parser.no_tokens() {
        parser.add_error(fpr, "", 0, 0, parser.missing_error());
        return;
    }
    parser.parse_field_base(fpr);
    parser.check_if_tokens_left_over(fpr);
}

/// Field 81 is either `code/status` or `class/status/code`, so a well-formed
/// field always tokenizes to exactly three or at least five tokens (the
/// slashes count). Anything else is reported against the whole field.
fn parse_f81(fpr: &mut FlightPlanRecord) {
    let Some(parser) = FieldParser::new(fpr, FieldId::F81, " /\n\t\r") else {
        return;
    };
    if parser.no_tokens() {
        parser.add_error(fpr, "", 0, 0, parser.missing_error());
        return;
    }
    if parser.num_tokens() != 3 && parser.num_tokens() < 5 {
        let text = parser.field_text().to_string();
        let start = parser.token_at(0).map_or(0, |t| t.start);
        let end = parser
            .token_at(parser.num_tokens() - 1)
            .map_or(0, |t| t.end);
        parser.add_error(fpr, &text, start, end, parser.more_expected_error());
        return;
    }
    parser.parse_field_base(fpr);
    parser.check_if_tokens_left_over(fpr);
}
