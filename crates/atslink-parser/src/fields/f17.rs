//! Field 17: arrival aerodrome, ATA and optional free-text aerodrome name,
//! e.g. `EGSS1230 STANSTED`.

use atslink_models::{FieldId, FlightPlanRecord};

use super::common::FieldParser;
use crate::util::first_digit_index;

pub(crate) fn parse(fpr: &mut FlightPlanRecord) {
    let Some(mut parser) = FieldParser::new(fpr, FieldId::F17, " \n\t\r") else {
        return;
    };
    if parser.no_tokens() {
        parser.add_error(fpr, "", 0, 0, parser.missing_error());
        return;
    }
    let first = parser.token_at(0).map(|t| t.text.clone()).unwrap_or_default();
    if let Some(index) = first_digit_index(&first) {
        if index > 0 {
            parser.split_and_insert_token(0, index);
        }
    }
    parser.parse_field_base(fpr);
    // The aerodrome name may run over any number of tokens.
    parser.parse_extra_optional_tokens(fpr);
}

#[cfg(test)]
mod tests {
    use atslink_models::SubfieldId;

    use super::*;

    fn parse_f17(text: &str) -> FlightPlanRecord {
        let mut fpr = FlightPlanRecord::new();
        fpr.add_field(FieldId::F17, text, 0, text.len());
        parse(&mut fpr);
        fpr
    }

    #[test]
    fn aerodrome_ata_and_name() {
        let fpr = parse_f17("EGSS1230 STANSTED");
        assert!(!fpr.errors_detected(), "{:?}", fpr.errors());
        let field = fpr.field(FieldId::F17).unwrap();
        assert_eq!(field.subfield(SubfieldId::F17a).unwrap().text, "EGSS");
        assert_eq!(field.subfield(SubfieldId::F17b).unwrap().text, "1230");
        assert_eq!(field.subfield(SubfieldId::F17c).unwrap().text, "STANSTED");
    }

    #[test]
    fn name_may_run_over_several_tokens() {
        let fpr = parse_f17("EGSS1230 LONDON STANSTED");
        assert!(!fpr.errors_detected(), "{:?}", fpr.errors());
    }

    #[test]
    fn bad_ata() {
        let fpr = parse_f17("EGSS2501");
        assert_eq!(
            fpr.errors()[0].message,
            "Expecting ATA in HHMM instead of '2501'"
        );
    }

    #[test]
    fn lower_case_name_rejected() {
        let fpr = parse_f17("EGSS1230 Stansted");
        assert_eq!(fpr.errors().len(), 1);
        assert_eq!(
            fpr.errors()[0].message,
            "Invalid characters for alternate aerodrome text, should be 'A' to 'Z' and \
             '0' to '9' only instead of 'Stansted'"
        );
    }

    #[test]
    fn empty_field_is_missing() {
        let fpr = parse_f17("");
        assert_eq!(fpr.errors()[0].message, "There is no data in field 17");
    }
}
