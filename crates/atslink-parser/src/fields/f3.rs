//! Field 3: message title with optional sender/receiver channel idents.
//!
//! A full field 3 reads `FPLAA/BB001CC/DD002`: the title, then the sending
//! channel (unit names and sequence number) and the receiving channel. The
//! raw tokens mix those parts together, so the parser splits them apart
//! before the base parse:
//!
//! ```text
//! FPLAA / BB001CC / DD002   becomes   FPL AA / BB 001 CC / DD 002
//! ```
//!
//! The sending unit name also selects the OLDI field configuration for the
//! rest of the message.

use atslink_models::{AdjacentUnit, FieldId, FlightPlanRecord};

use super::common::FieldParser;
use crate::util::{first_alpha_index, first_digit_index};

pub(crate) fn parse(fpr: &mut FlightPlanRecord) {
    let Some(mut parser) = FieldParser::new(fpr, FieldId::F3, " /\n\t\r") else {
        return;
    };
    if parser.no_tokens() {
        parser.add_error(fpr, "", 0, 0, parser.missing_error());
        return;
    }

    // Title and F3b sender ride in the first token when no space separates
    // them, e.g. FPLAA.
    if parser.token_at(0).is_some_and(|t| t.text.len() > 3) {
        parser.split_and_insert_token(0, 3);
    }

    // Split the F3b sequence number and the start of F3c out of token 3.
    if parser.num_tokens() > 3 {
        if let Some(index) = first_digit_index(&parser.token_at(3).map(|t| t.text.clone()).unwrap_or_default()) {
            if index > 0 {
                parser.split_and_insert_token(3, index);
                if let Some(index) =
                    first_alpha_index(&parser.token_at(4).map(|t| t.text.clone()).unwrap_or_default())
                {
                    parser.split_and_insert_token(4, index);
                }
            }
        }
    }

    // Split the F3c sequence number out of token 7.
    if parser.num_tokens() > 7 {
        if let Some(index) = first_digit_index(&parser.token_at(7).map(|t| t.text.clone()).unwrap_or_default()) {
            if index > 0 {
                parser.split_and_insert_token(7, index);
            }
        }
    }

    let num_parsed = parser.parse_field_base(fpr);
    parser.check_if_tokens_left_over(fpr);

    if parser.num_tokens() > 2 {
        if let Some(token) = parser.token_at(1) {
            fpr.set_sender_adjacent_unit(AdjacentUnit::from_name_or_default(&token.text));
        }
    }
    if parser.num_tokens() > 4 {
        if let Some(token) = parser.token_at(3) {
            fpr.set_receiver_adjacent_unit(AdjacentUnit::from_name_or_default(&token.text));
        }
    }

    // The channel idents are all-or-nothing: a complete field parses 1, 5
    // or 9 subfields (title only, title + sender, title + both). Anything
    // in between is a partial channel ident.
    if parser.subfields().len() > num_parsed
        && num_parsed != 1
        && num_parsed != 5
        && num_parsed != 9
    {
        let start_index = if num_parsed > 1 && num_parsed < 5 {
            1
        } else if num_parsed > 4 && num_parsed < 10 {
            5
        } else {
            0
        };
        let (text, start, end) = parser.concatenate_token_text(start_index, parser.num_tokens());
        parser.add_error(fpr, &text, start, end, parser.more_expected_error());
    }
}

#[cfg(test)]
mod tests {
    use atslink_models::SubfieldId;

    use super::*;

    fn parse_f3(text: &str) -> FlightPlanRecord {
        let mut fpr = FlightPlanRecord::new();
        fpr.add_field(FieldId::F3, text, 0, text.len());
        parse(&mut fpr);
        fpr
    }

    #[test]
    fn bare_title() {
        let fpr = parse_f3("FPL");
        assert!(!fpr.errors_detected());
        let field = fpr.field(FieldId::F3).unwrap();
        assert_eq!(field.subfield(SubfieldId::F3a).unwrap().text, "FPL");
        assert!(fpr.sender_adjacent_unit().is_none());
    }

    #[test]
    fn full_channel_idents_are_split_and_saved() {
        let fpr = parse_f3("CPLAA/BB001CC/DD002");
        assert!(!fpr.errors_detected(), "{:?}", fpr.errors());
        let field = fpr.field(FieldId::F3).unwrap();
        assert_eq!(field.subfield(SubfieldId::F3a).unwrap().text, "CPL");
        assert_eq!(field.subfield(SubfieldId::F3b1).unwrap().text, "AA");
        assert_eq!(field.subfield(SubfieldId::F3b4).unwrap().text, "001");
        assert_eq!(field.subfield(SubfieldId::F3c3).unwrap().text, "DD");
        assert_eq!(field.subfield(SubfieldId::F3c4).unwrap().text, "002");
        assert_eq!(fpr.sender_adjacent_unit(), Some(AdjacentUnit::Aa));
        assert_eq!(fpr.receiver_adjacent_unit(), Some(AdjacentUnit::Bb));
    }

    #[test]
    fn sender_only_channel_ident() {
        let fpr = parse_f3("ABIAA/BB004");
        assert!(!fpr.errors_detected(), "{:?}", fpr.errors());
        assert_eq!(fpr.sender_adjacent_unit(), Some(AdjacentUnit::Aa));
        assert!(fpr.receiver_adjacent_unit().is_none());
    }

    #[test]
    fn unconfigured_unit_name_falls_back_to_default() {
        let fpr = parse_f3("ABIZZ/YY004");
        assert_eq!(fpr.sender_adjacent_unit(), Some(AdjacentUnit::Default));
    }

    #[test]
    fn partial_channel_ident_is_an_error() {
        let fpr = parse_f3("FPLAA/BB");
        assert!(fpr.errors_detected());
        assert_eq!(
            fpr.errors().last().unwrap().message,
            "Expecting sender/receiver adjacent unit name and sequence number \
             instead of 'AA/BB'"
        );
    }

    #[test]
    fn empty_field_is_missing_title() {
        let fpr = parse_f3("");
        assert_eq!(
            fpr.errors()[0].message,
            "No ATS message title identified in this message"
        );
    }

    #[test]
    fn unknown_title_reported() {
        let fpr = parse_f3("XXX");
        assert_eq!(
            fpr.errors()[0].message,
            "Message title 'XXX' unrecognized, cannot process this message"
        );
    }
}
