//! Field 22: amendment data as hyphen-separated `keyword/data` groups, the
//! keyword being an ICAO field number, e.g. `-9/B737/M-13/EGLL0800`.
//!
//! Each group's data is handed to the field parser named by its keyword.
//! Those parsers populate a nested flight plan record attached to the outer
//! one; any diagnostics they raise are copied back to the outer record with
//! an `F22 - ` prefix so a caller sees all errors in one list.

use atslink_models::{ErrorId, FieldId, FlightPlanRecord, SubfieldId};

use super::common::FieldParser;
use crate::util::first_slash_index;

/// The ICAO field numbers allowed as field 22 keywords.
const F22_KEYWORDS: &[(&str, SubfieldId, FieldId)] = &[
    ("3", SubfieldId::F22F3, FieldId::F3),
    ("5", SubfieldId::F22F5, FieldId::F5),
    ("7", SubfieldId::F22F7, FieldId::F7),
    ("8", SubfieldId::F22F8, FieldId::F8),
    ("9", SubfieldId::F22F9, FieldId::F9),
    ("10", SubfieldId::F22F10, FieldId::F10),
    ("13", SubfieldId::F22F13, FieldId::F13),
    ("14", SubfieldId::F22F14, FieldId::F14),
    ("15", SubfieldId::F22F15, FieldId::F15),
    ("16", SubfieldId::F22F16, FieldId::F16),
    ("17", SubfieldId::F22F17, FieldId::F17),
    ("18", SubfieldId::F22F18, FieldId::F18),
    ("19", SubfieldId::F22F19, FieldId::F19),
    ("20", SubfieldId::F22F20, FieldId::F20),
    ("21", SubfieldId::F22F21, FieldId::F21),
    ("22", SubfieldId::F22F22, FieldId::F22),
    ("80", SubfieldId::F22F80, FieldId::F80),
    ("81", SubfieldId::F22F81, FieldId::F81),
];

fn keyword_entry(keyword: &str) -> Option<(SubfieldId, FieldId)> {
    F22_KEYWORDS
        .iter()
        .find(|(k, _, _)| *k == keyword)
        .map(|(_, s, f)| (*s, *f))
}

pub(crate) fn parse(fpr: &mut FlightPlanRecord) {
    let Some(parser) = FieldParser::new(fpr, FieldId::F22, "-\n\t\r") else {
        return;
    };
    if parser.no_tokens() {
        fpr.add_error("", ErrorId::F22DataMissing.text().to_string(), 0, 0);
        return;
    }

    let mut data_found = false;
    for idx in 0..parser.num_tokens() {
        let Some(token) = parser.token_at(idx).cloned() else {
            continue;
        };
        if token.text.replace(' ', "").is_empty() {
            continue;
        }
        data_found = true;
        let Some(slash) = first_slash_index(&token.text).filter(|i| *i >= 1) else {
            // Without a keyword before the slash the group cannot be
            // assigned to a field.
            parser.add_error(
                fpr,
                &token.text,
                token.start,
                token.end,
                ErrorId::F22NoF22KeywordsFound,
            );
            continue;
        };
        let keyword = token.text[..slash].trim();
        let Some((subfield_id, _)) = keyword_entry(keyword) else {
            parser.add_error(
                fpr,
                &token.text,
                token.start,
                token.end,
                ErrorId::F22UnrecognisedKeyword,
            );
            continue;
        };
        if token.text.len() <= slash + 1 {
            parser.add_error(
                fpr,
                &token.text,
                token.start,
                token.end,
                ErrorId::F22UnrecognisedData,
            );
            continue;
        }
        fpr.add_subfield(
            FieldId::F22,
            subfield_id,
            &token.text[slash + 1..],
            parser.field_start() + token.start + slash + 1,
            parser.field_start() + token.end,
        );
    }

    if data_found {
        parse_compound_subfields(fpr);
    } else {
        fpr.add_error("", ErrorId::F22DataMissing.text().to_string(), 0, 0);
    }
}

/// Parse the collected keyword groups with their field parsers against a
/// nested flight plan record, then fold the nested diagnostics back into
/// the outer record.
fn parse_compound_subfields(fpr: &mut FlightPlanRecord) {
    let Some(field) = fpr.field(FieldId::F22).cloned() else {
        return;
    };

    // Group the saved subfields by id, keeping first-seen order.
    let mut groups: Vec<(SubfieldId, Vec<&atslink_models::SubfieldValue>)> = Vec::new();
    for subfield in &field.subfields {
        if let Some((_, entries)) = groups.iter_mut().find(|(id, _)| *id == subfield.subfield_id)
        {
            entries.push(subfield);
        } else {
            groups.push((subfield.subfield_id, vec![subfield]));
        }
    }

    let mut nested = FlightPlanRecord::new();
    for (subfield_id, entries) in groups {
        let Some(&(keyword, _, field_id)) =
            F22_KEYWORDS.iter().find(|(_, s, _)| *s == subfield_id)
        else {
            continue;
        };
        if entries.len() > 1 {
            let duplicate = entries[1];
            let text = format!("{keyword}/{}", duplicate.text);
            fpr.add_error(
                &text,
                ErrorId::F22FieldDuplicated.text_with(&text),
                duplicate.start,
                duplicate.end,
            );
        }
        for entry in entries {
            nested.add_field(field_id, &entry.text, entry.start, entry.end);
            super::parse_field(&mut nested, field_id);
        }
    }

    for error in nested.errors().to_vec() {
        fpr.add_error(
            &error.text,
            format!("F22 - {}", error.message),
            error.start,
            error.end,
        );
    }

    fpr.set_f22_flight_plan(nested);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_f22(text: &str) -> FlightPlanRecord {
        let mut fpr = FlightPlanRecord::new();
        fpr.add_field(FieldId::F22, text, 0, text.len());
        parse(&mut fpr);
        fpr
    }

    #[test]
    fn keyword_groups_parsed_into_nested_record() {
        let fpr = parse_f22("9/B737/M-13/EGLL0800");
        assert!(!fpr.errors_detected(), "{:?}", fpr.errors());
        let nested = fpr.f22_flight_plan().unwrap();
        let f9 = nested.field(FieldId::F9).unwrap();
        assert_eq!(f9.subfield(SubfieldId::F9b).unwrap().text, "B737");
        let f13 = nested.field(FieldId::F13).unwrap();
        assert_eq!(f13.subfield(SubfieldId::F13b).unwrap().text, "0800");
    }

    #[test]
    fn nested_errors_are_prefixed() {
        let fpr = parse_f22("13/EGLL2567");
        assert_eq!(fpr.errors().len(), 1);
        assert_eq!(
            fpr.errors()[0].message,
            "F22 - Expecting EOBT in HHMM instead of '2567'"
        );
    }

    #[test]
    fn nested_offsets_reach_back_to_the_outer_field() {
        let mut fpr = FlightPlanRecord::new();
        let text = "13/EGLL2567";
        fpr.add_field(FieldId::F22, text, 100, 100 + text.len());
        parse(&mut fpr);
        // EGLL2567 starts 3 characters into the group, 2567 four more in.
        assert_eq!(fpr.errors()[0].start, 107);
        assert_eq!(fpr.errors()[0].end, 111);
    }

    #[test]
    fn missing_keyword_reported() {
        let fpr = parse_f22("/B737/M");
        assert_eq!(
            fpr.errors()[0].message,
            "Expecting a field 22 keyword/data pair instead of '/B737/M'"
        );
    }

    #[test]
    fn unknown_keyword_reported() {
        let fpr = parse_f22("99/B737");
        assert_eq!(
            fpr.errors()[0].message,
            "The field 22 keyword '99/B737' is not a recognised ICAO field number"
        );
    }

    #[test]
    fn keyword_without_data_reported() {
        let fpr = parse_f22("9/");
        assert_eq!(
            fpr.errors()[0].message,
            "The field 22 keyword '9/' has no data following the forward slash"
        );
    }

    #[test]
    fn duplicated_keyword_reported_and_last_wins() {
        let fpr = parse_f22("8/IS-8/VG");
        assert!(fpr.errors_detected());
        assert_eq!(
            fpr.errors()[0].message,
            "The field 22 subfield '8/VG' occurs more than once in this field"
        );
        let nested = fpr.f22_flight_plan().unwrap();
        assert_eq!(nested.field(FieldId::F8).unwrap().text, "VG");
    }

    #[test]
    fn empty_field_reported() {
        let fpr = parse_f22("   ");
        assert_eq!(fpr.errors()[0].message, "There is no data in field 22");
    }
}
