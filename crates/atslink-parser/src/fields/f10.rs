//! Field 10: radio communication, navigation and surveillance equipment,
//! e.g. `S/C`.

use atslink_models::{FieldId, FlightPlanRecord};

use super::common::FieldParser;

pub(crate) fn parse(fpr: &mut FlightPlanRecord) {
    let Some(parser) = FieldParser::new(fpr, FieldId::F10, " /\n\t\r") else {
        return;
    };
    if parser.no_tokens() {
        parser.add_error(fpr, "", 0, 0, parser.missing_error());
        return;
    }
    parser.parse_field_base(fpr);
    parser.check_if_tokens_left_over(fpr);
}

#[cfg(test)]
mod tests {
    use atslink_models::SubfieldId;

    use super::*;

    fn parse_f10(text: &str) -> FlightPlanRecord {
        let mut fpr = FlightPlanRecord::new();
        fpr.add_field(FieldId::F10, text, 0, text.len());
        parse(&mut fpr);
        fpr
    }

    #[test]
    fn standard_equipment() {
        let fpr = parse_f10("S/C");
        assert!(!fpr.errors_detected(), "{:?}", fpr.errors());
        let field = fpr.field(FieldId::F10).unwrap();
        assert_eq!(field.subfield(SubfieldId::F10a).unwrap().text, "S");
        assert_eq!(field.subfield(SubfieldId::F10b).unwrap().text, "C");
    }

    #[test]
    fn missing_surveillance_part() {
        let fpr = parse_f10("S");
        assert_eq!(fpr.errors().len(), 1);
        assert_eq!(
            fpr.errors()[0].message,
            "Expecting communications and surveillance capabilities instead of 'S'"
        );
    }

    #[test]
    fn bad_comms_capability() {
        let fpr = parse_f10("Q/C");
        assert!(fpr.errors_detected());
        assert!(fpr.errors()[0]
            .message
            .starts_with("Expecting COMMS/NAV capability"));
    }

    #[test]
    fn empty_field_is_missing() {
        let fpr = parse_f10("");
        assert_eq!(fpr.errors()[0].message, "There is no data in field 10");
    }
}
