//! Field 15: the route description. The route is tokenized and captured as
//! an extracted route sequence on the record; element-level route analysis
//! (rule derivation, airway connectivity) is out of scope here.

use atslink_models::{ErrorId, ExtractedRouteSequence, FieldId, FlightPlanRecord};

use super::common::FieldParser;

pub(crate) fn parse(fpr: &mut FlightPlanRecord) {
    let Some(parser) = FieldParser::new(fpr, FieldId::F15, " /\n\t\r") else {
        return;
    };
    if parser.no_tokens() {
        fpr.add_error("", ErrorId::F15Missing.text().to_string(), 0, 0);
        return;
    }
    let mut ers = ExtractedRouteSequence::new();
    for idx in 0..parser.num_tokens() {
        if let Some(token) = parser.token_at(idx) {
            ers.add_element(
                &token.text,
                parser.field_start() + token.start,
                parser.field_start() + token.end,
            );
        }
    }
    fpr.set_extracted_route(ers);
}
