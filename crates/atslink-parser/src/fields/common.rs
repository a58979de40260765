//! The shared machinery every field parser is built on.
//!
//! A [`FieldParser`] holds the tokens cut out of one field together with the
//! field's subfield layout and diagnostics. The base parse walks the tokens
//! against the subfield syntax table, saving matching tokens as subfields
//! and recording a diagnostic at the first mismatch. Individual field
//! parsers add their own token splitting and trailing-token handling around
//! the base parse.
//!
//! All offsets handed to the flight plan record are made absolute by adding
//! the field's own start offset; token offsets stay field-relative inside
//! this module.

use atslink_models::{ErrorId, FieldId, FlightPlanRecord};

use crate::config::field_content::field_content;
use crate::config::subfields::subfield_spec;
use crate::tokenizer::{tokenize, Token};

pub(crate) struct FieldParser {
    field_id: FieldId,
    field_text: String,
    field_start: usize,
    tokens: Vec<Token>,
    subfields: &'static [atslink_models::SubfieldId],
    errors: &'static [ErrorId],
}

impl FieldParser {
    /// Set up a parser for `field_id` if the record carries the field and
    /// the field has a subfield layout.
    pub fn new(
        fpr: &FlightPlanRecord,
        field_id: FieldId,
        whitespace: &str,
    ) -> Option<FieldParser> {
        let field = fpr.field(field_id)?;
        let content = field_content(field_id)?;
        Some(FieldParser {
            field_id,
            field_text: field.text.clone(),
            field_start: field.start,
            tokens: tokenize(&field.text, whitespace),
            subfields: content.subfields,
            errors: content.errors,
        })
    }

    pub fn field_text(&self) -> &str {
        &self.field_text
    }

    pub fn field_start(&self) -> usize {
        self.field_start
    }

    pub fn no_tokens(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn num_tokens(&self) -> usize {
        self.tokens.len()
    }

    pub fn token_at(&self, idx: usize) -> Option<&Token> {
        self.tokens.get(idx)
    }

    pub fn subfields(&self) -> &'static [atslink_models::SubfieldId] {
        self.subfields
    }

    // The error list tail convention: the last four entries are the syntax
    // error for the last subfield, too-many, more-expected and missing.

    pub fn last_subfield_error(&self) -> ErrorId {
        self.errors[self.errors.len() - 4]
    }

    pub fn too_many_error(&self) -> ErrorId {
        self.errors[self.errors.len() - 3]
    }

    pub fn more_expected_error(&self) -> ErrorId {
        self.errors[self.errors.len() - 2]
    }

    pub fn missing_error(&self) -> ErrorId {
        self.errors[self.errors.len() - 1]
    }

    pub fn error_at(&self, idx: usize) -> ErrorId {
        self.errors[idx]
    }

    /// Record a diagnostic; token offsets are translated to absolute
    /// message offsets using the field start.
    pub fn add_error(
        &self,
        fpr: &mut FlightPlanRecord,
        erroneous_text: &str,
        start: usize,
        end: usize,
        error_id: ErrorId,
    ) {
        fpr.add_error(
            erroneous_text,
            error_id.text_with(erroneous_text),
            self.field_start + start,
            self.field_start + end,
        );
    }

    /// Join the token texts in `first..num` with single spaces, collapsing
    /// spaces around slashes, and return the joined text with its span.
    pub fn concatenate_token_text(&self, first: usize, num: usize) -> (String, usize, usize) {
        let start = self.tokens[first].start;
        if first == num {
            return (self.tokens[first].text.clone(), start, self.tokens[first].end);
        }
        let mut joined = String::new();
        let mut end = self.tokens[first].end;
        for token in &self.tokens[first..num] {
            joined.push_str(&token.text);
            joined.push(' ');
            end = token.end;
        }
        let joined = joined
            .trim_end_matches(' ')
            .replace(" /", "/")
            .replace("/ ", "/");
        (joined, start, end)
    }

    /// Report any tokens beyond the number of defined subfields.
    pub fn check_if_tokens_left_over(&self, fpr: &mut FlightPlanRecord) {
        if self.num_tokens() > self.subfields.len() {
            let (text, start, end) =
                self.concatenate_token_text(self.subfields.len(), self.num_tokens());
            self.add_error(fpr, &text, start, end, self.too_many_error());
        }
    }

    /// Report missing trailing subfields when fewer tokens were parsed than
    /// the field defines; the error lands on the last token present.
    pub fn parse_extra_compulsory_tokens(&self, fpr: &mut FlightPlanRecord, num_parsed: usize) {
        if self.subfields.len() > num_parsed {
            if let Some(last) = self.tokens.last() {
                let text = last.text.clone();
                self.add_error(fpr, &text, last.start, last.end, self.more_expected_error());
            }
        }
    }

    /// Check tokens beyond the defined subfields against the last subfield
    /// syntax; used where the last subfield may repeat (free text).
    pub fn parse_extra_optional_tokens(&self, fpr: &mut FlightPlanRecord) {
        let Some(last_subfield) = self.subfields.last() else {
            return;
        };
        let Some(spec) = subfield_spec(*last_subfield) else {
            return;
        };
        for idx in self.subfields.len()..self.num_tokens() {
            let token = &self.tokens[idx];
            if !spec.regex.is_match(&token.text) {
                let text = token.text.clone();
                self.add_error(fpr, &text, token.start, token.end, self.last_subfield_error());
            }
        }
    }

    /// Default field parse: missing check, base parse, trailing subfield
    /// check and left-over token check.
    pub fn parse_field(&self, fpr: &mut FlightPlanRecord) {
        if self.no_tokens() {
            self.add_error(fpr, "", 0, 0, self.missing_error());
            return;
        }
        let num_parsed = self.parse_field_base(fpr);
        if self.subfields.len() > num_parsed {
            let (text, start, end) = self.concatenate_token_text(0, self.num_tokens());
            self.add_error(fpr, &text, start, end, self.more_expected_error());
        }
        self.check_if_tokens_left_over(fpr);
    }

    /// Walk the tokens against the subfield layout.
    ///
    /// Matching tokens are saved to the record as subfields with absolute
    /// offsets. The walk stops at the first syntax mismatch, or when the
    /// tokens run out; running out on a compulsory subfield records a
    /// more-subfields-expected diagnostic on the last token.
    ///
    /// Returns the number of tokens consumed, counting one past the end on
    /// a complete or syntax-stopped walk so callers can distinguish a clean
    /// stop from an early exhaustion.
    pub fn parse_field_base(&self, fpr: &mut FlightPlanRecord) -> usize {
        let mut idx = 0;
        let mut ran_out = false;
        for subfield_id in self.subfields {
            let Some(token) = self.tokens.get(idx) else {
                let Some(spec) = subfield_spec(*subfield_id) else {
                    break;
                };
                if spec.compulsory {
                    if let Some(last) = self.tokens.last() {
                        let text = last.text.clone();
                        self.add_error(
                            fpr,
                            &text,
                            last.start,
                            last.end,
                            self.more_expected_error(),
                        );
                    }
                }
                ran_out = true;
                break;
            };
            let Some(spec) = subfield_spec(*subfield_id) else {
                break;
            };
            if !spec.regex.is_match(&token.text) {
                let text = token.text.clone();
                self.add_error(fpr, &text, token.start, token.end, self.error_at(idx));
                break;
            }
            fpr.add_subfield(
                self.field_id,
                *subfield_id,
                &token.text,
                self.field_start + token.start,
                self.field_start + token.end,
            );
            idx += 1;
        }
        if ran_out {
            idx
        } else {
            idx + 1
        }
    }

    /// Split the token at `insert_index` at `split_index`, inserting the
    /// head as a new token in front of the tail.
    pub fn split_and_insert_token(&mut self, insert_index: usize, split_index: usize) {
        let head = Token {
            text: self.tokens[insert_index].text[..split_index].to_string(),
            start: self.tokens[insert_index].start,
            end: self.tokens[insert_index].start + split_index,
        };
        self.tokens.insert(insert_index, head);
        let tail = &mut self.tokens[insert_index + 1];
        tail.text = tail.text[split_index..].to_string();
        tail.start += split_index;
    }

    /// Insert a synthetic token; used by the field 9 parser to stand in
    /// for an omitted number-of-aircraft subfield.
    pub fn insert_token(&mut self, token: Token, index: usize) {
        self.tokens.insert(index, token);
    }
}

#[cfg(test)]
mod tests {
    use atslink_models::{FieldId, FlightPlanRecord, SubfieldId};

    use super::*;

    fn parser_for(text: &str, field_id: FieldId, ws: &str) -> (FlightPlanRecord, FieldParser) {
        let mut fpr = FlightPlanRecord::new();
        fpr.add_field(field_id, text, 0, text.len());
        let parser = FieldParser::new(&fpr, field_id, ws).unwrap();
        (fpr, parser)
    }

    #[test]
    fn absent_field_yields_no_parser() {
        let fpr = FlightPlanRecord::new();
        assert!(FieldParser::new(&fpr, FieldId::F13, " \n\t\r").is_none());
    }

    #[test]
    fn base_parse_saves_subfields_with_absolute_offsets() {
        let mut fpr = FlightPlanRecord::new();
        fpr.add_field(FieldId::F13, "EGLL 0800", 30, 39);
        let parser = FieldParser::new(&fpr, FieldId::F13, " \n\t\r").unwrap();
        let consumed = parser.parse_field_base(&mut fpr);

        assert_eq!(consumed, 3);
        let field = fpr.field(FieldId::F13).unwrap();
        let adep = field.subfield(SubfieldId::F13a).unwrap();
        assert_eq!(adep.text, "EGLL");
        assert_eq!((adep.start, adep.end), (30, 34));
        let eobt = field.subfield(SubfieldId::F13b).unwrap();
        assert_eq!((eobt.start, eobt.end), (35, 39));
    }

    #[test]
    fn base_parse_stops_at_first_mismatch() {
        let (mut fpr, parser) = parser_for("EGLL 99999 EGSS", FieldId::F13, " \n\t\r");
        let consumed = parser.parse_field_base(&mut fpr);

        assert_eq!(consumed, 2);
        assert_eq!(fpr.errors().len(), 1);
        assert_eq!(
            fpr.errors()[0].message,
            "Expecting EOBT in HHMM instead of '99999'"
        );
    }

    #[test]
    fn running_out_on_compulsory_subfield_reports_more_expected() {
        let (mut fpr, parser) = parser_for("EGLL", FieldId::F13, " \n\t\r");
        let consumed = parser.parse_field_base(&mut fpr);

        assert_eq!(consumed, 1);
        assert_eq!(fpr.errors().len(), 1);
        assert_eq!(fpr.errors()[0].message, "Expecting EOBT instead of 'EGLL'");
    }

    #[test]
    fn left_over_tokens_are_concatenated_into_one_error() {
        let (mut fpr, parser) = parser_for("EGLL 0800 EGSS EGBB", FieldId::F13, " \n\t\r");
        parser.parse_field_base(&mut fpr);
        parser.check_if_tokens_left_over(&mut fpr);

        assert_eq!(fpr.errors().len(), 1);
        assert_eq!(
            fpr.errors()[0].message,
            "Too many fields in Field 13, remove 'EGSS EGBB'"
        );
    }

    #[test]
    fn concatenation_collapses_spaces_around_slashes() {
        let (_, parser) = parser_for("EGLL 0800 / EGSS EGBB", FieldId::F13, " /\n\t\r");
        let (text, start, end) = parser.concatenate_token_text(2, 5);
        assert_eq!(text, "/EGSS EGBB");
        assert_eq!((start, end), (10, 21));
    }

    #[test]
    fn split_and_insert_divides_a_token_in_place() {
        let (_, mut parser) = parser_for("EGLL0800", FieldId::F13, " \n\t\r");
        parser.split_and_insert_token(0, 4);

        assert_eq!(parser.num_tokens(), 2);
        assert_eq!(parser.token_at(0).unwrap(), &Token::new("EGLL", 0, 4));
        assert_eq!(parser.token_at(1).unwrap(), &Token::new("0800", 4, 8));
    }
}
