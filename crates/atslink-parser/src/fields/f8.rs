//! Field 8: flight rules and type of flight. `F8a` is the rules-only
//! variant used by some OLDI messages.

use atslink_models::{FieldId, FlightPlanRecord};

use super::common::FieldParser;

pub(crate) fn parse(fpr: &mut FlightPlanRecord, field_id: FieldId) {
    let Some(mut parser) = FieldParser::new(fpr, field_id, " /\n\t\r") else {
        return;
    };
    if parser.no_tokens() {
        parser.add_error(fpr, "", 0, 0, parser.missing_error());
        return;
    }
    // Rules and type usually arrive glued together, e.g. IS.
    if parser.token_at(0).is_some_and(|t| t.text.len() > 1) {
        parser.split_and_insert_token(0, 1);
    }
    parser.parse_field_base(fpr);
    parser.check_if_tokens_left_over(fpr);
}

#[cfg(test)]
mod tests {
    use atslink_models::SubfieldId;

    use super::*;

    fn parse_f8(text: &str) -> FlightPlanRecord {
        let mut fpr = FlightPlanRecord::new();
        fpr.add_field(FieldId::F8, text, 0, text.len());
        parse(&mut fpr, FieldId::F8);
        fpr
    }

    #[test]
    fn rules_and_type_split_apart() {
        let fpr = parse_f8("IS");
        assert!(!fpr.errors_detected(), "{:?}", fpr.errors());
        let field = fpr.field(FieldId::F8).unwrap();
        assert_eq!(field.subfield(SubfieldId::F8a).unwrap().text, "I");
        assert_eq!(field.subfield(SubfieldId::F8b).unwrap().text, "S");
    }

    #[test]
    fn bad_rules_letter() {
        let fpr = parse_f8("XS");
        assert_eq!(
            fpr.errors()[0].message,
            "Expecting flight rules 'I', 'V', 'Y' or 'Z' instead of 'X'"
        );
    }

    #[test]
    fn rules_only_variant_takes_one_letter() {
        let mut fpr = FlightPlanRecord::new();
        fpr.add_field(FieldId::F8a, "V", 0, 1);
        parse(&mut fpr, FieldId::F8a);
        assert!(!fpr.errors_detected(), "{:?}", fpr.errors());
        let field = fpr.field(FieldId::F8a).unwrap();
        assert_eq!(field.subfield(SubfieldId::F8a).unwrap().text, "V");
    }

    #[test]
    fn extra_tokens_rejected() {
        let fpr = parse_f8("IS N");
        assert!(fpr.errors_detected());
        assert_eq!(
            fpr.errors()[0].message,
            "Field 8 is correct but there is extra unwanted date, remove 'N' and / or \
             check the overall syntax"
        );
    }
}
