//! Field 5: emergency description, e.g. `INCERFA/EGLLZRZX/REPORT OVERDUE`.

use atslink_models::{FieldId, FlightPlanRecord};

use super::common::FieldParser;

pub(crate) fn parse(fpr: &mut FlightPlanRecord) {
    let Some(parser) = FieldParser::new(fpr, FieldId::F5, " /\n\t\r") else {
        return;
    };
    if parser.no_tokens() {
        parser.add_error(fpr, "", 0, 0, parser.missing_error());
        return;
    }
    parser.parse_field_base(fpr);
    // The free text at the end may run over any number of tokens.
    parser.parse_extra_optional_tokens(fpr);
}
