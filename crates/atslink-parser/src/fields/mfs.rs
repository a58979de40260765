//! The significant point carried by the OLDI MFS message.

use atslink_models::{FieldId, FlightPlanRecord};

use super::common::FieldParser;

pub(crate) fn parse(fpr: &mut FlightPlanRecord) {
    let Some(parser) = FieldParser::new(fpr, FieldId::MfsSigPoint, " \n\t\r") else {
        return;
    };
    if parser.no_tokens() {
        parser.add_error(fpr, "", 0, 0, parser.missing_error());
        return;
    }
    parser.parse_field_base(fpr);
    parser.check_if_tokens_left_over(fpr);
}
