//! Parsers for the AFTN header fields: priority indicator, addressees,
//! filing time, originator and additional addressees.

use atslink_models::{FieldId, FlightPlanRecord};

use super::common::FieldParser;

const WHITESPACE: &str = " \n\t\r";

pub(crate) fn parse_priority_indicator(fpr: &mut FlightPlanRecord) {
    if let Some(parser) = FieldParser::new(fpr, FieldId::PriorityIndicator, WHITESPACE) {
        parser.parse_field(fpr);
    }
}

pub(crate) fn parse_filing_time(fpr: &mut FlightPlanRecord) {
    if let Some(parser) = FieldParser::new(fpr, FieldId::FilingTime, WHITESPACE) {
        parser.parse_field(fpr);
    }
}

pub(crate) fn parse_originator(fpr: &mut FlightPlanRecord) {
    if let Some(parser) = FieldParser::new(fpr, FieldId::Originator, WHITESPACE) {
        parser.parse_field(fpr);
    }
}

/// Addressee lists hold one to eight facility addresses; all positions are
/// optional so a short list is not an error, but an empty field is.
fn parse_address_list(fpr: &mut FlightPlanRecord, field_id: FieldId) {
    let Some(parser) = FieldParser::new(fpr, field_id, WHITESPACE) else {
        return;
    };
    if parser.no_tokens() {
        parser.add_error(fpr, "", 0, 0, parser.missing_error());
        return;
    }
    parser.parse_field_base(fpr);
    parser.check_if_tokens_left_over(fpr);
}

pub(crate) fn parse_addressee(fpr: &mut FlightPlanRecord) {
    parse_address_list(fpr, FieldId::Address);
}

pub(crate) fn parse_ad_addressee(fpr: &mut FlightPlanRecord) {
    parse_address_list(fpr, FieldId::AdAddress);
}
