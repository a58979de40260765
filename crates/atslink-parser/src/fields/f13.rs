//! Field 13: departure aerodrome and EOBT, e.g. `EGLL0800`. `F13a` is the
//! aerodrome-only variant used by some OLDI messages.

use atslink_models::{FieldId, FlightPlanRecord};

use super::common::FieldParser;
use crate::util::first_digit_index;

pub(crate) fn parse(fpr: &mut FlightPlanRecord, field_id: FieldId) {
    let Some(mut parser) = FieldParser::new(fpr, field_id, " /\n\t\r") else {
        return;
    };
    if parser.no_tokens() {
        parser.add_error(fpr, "", 0, 0, parser.missing_error());
        return;
    }
    // Aerodrome and EOBT arrive glued together, e.g. EGLL0800.
    let first = parser.token_at(0).map(|t| t.text.clone()).unwrap_or_default();
    if let Some(index) = first_digit_index(&first) {
        if index > 0 {
            parser.split_and_insert_token(0, index);
        }
    }
    parser.parse_field_base(fpr);
    parser.check_if_tokens_left_over(fpr);
}
