//! The message-level parser: validates, splits, classifies and drives the
//! per-field parsers over a complete ATS or OLDI message.
//!
//! The field list for a message depends on its title, and for OLDI messages
//! also on the adjacent unit extracted from field 3b. Fields are matched to
//! the list positionally; a count mismatch between the two is reported but
//! never aborts parsing of the fields that are present.

use std::str::FromStr;

use atslink_models::{
    AdjacentUnit, ErrorId, FieldId, FlightPlanRecord, MessageTitle, MessageType,
};
use tracing::{debug, warn};

use crate::config::messages::{find_message, MessageContent};
use crate::fields;
use crate::splitter::set_message_body_and_header;
use crate::tokenizer::{tokenize, Token};
use crate::{classifier, util};

/// Anything shorter than this cannot be a message; the shortest valid
/// message is a LAM such as `LAML/E012E/L001`.
pub const MIN_BODY_LENGTH: usize = 12;

const HEADER_WHITESPACE: &str = " \n\t\r";
const BODY_WHITESPACE: &str = "()-\r\n\t";

/// Parse a complete message into a fresh flight plan record.
pub fn parse(message: &str) -> FlightPlanRecord {
    let mut fpr = FlightPlanRecord::new();
    parse_message(&mut fpr, message);
    fpr
}

/// Parse a complete message, with or without an AFTN header, into the given
/// record. Returns true when the message parsed without any diagnostics.
pub fn parse_message(fpr: &mut FlightPlanRecord, message: &str) -> bool {
    if !is_message_valid(fpr, message) {
        return false;
    }
    fpr.set_message_complete(message);
    set_message_body_and_header(fpr);
    if !classifier::set_message_type(fpr) {
        return false;
    }
    debug!(
        r#type = ?fpr.message_type(),
        header_len = fpr.message_header().len(),
        "parsing message"
    );
    match fpr.message_type() {
        Some(MessageType::Ats) => {
            parse_ats_header(fpr);
            parse_ats(fpr)
        }
        Some(MessageType::Oldi) => parse_oldi(fpr),
        _ => false,
    }
}

/// Reject null-length and absurdly short input before any real work.
fn is_message_valid(fpr: &mut FlightPlanRecord, message: &str) -> bool {
    if message.is_empty() {
        fpr.add_error(message, ErrorId::MsgEmpty.text().to_string(), 0, 0);
        fpr.set_message_type(MessageType::Unknown);
        return false;
    }
    if message.len() < MIN_BODY_LENGTH {
        fpr.add_error(
            message,
            ErrorId::MsgTooShort.text().to_string(),
            0,
            message.len(),
        );
        fpr.set_message_type(MessageType::Unknown);
        return false;
    }
    true
}

/// Walk the header tokens in their expected order: priority indicator, one
/// or more addressees, filing time, originator, optional additional
/// addressees. The filing time is spotted as the first token starting with
/// a digit; everything between it and the priority indicator is addressees.
fn parse_ats_header(fpr: &mut FlightPlanRecord) {
    use FieldId::{AdAddress, Address, FilingTime, Originator, PriorityIndicator};

    let tokens = tokenize(fpr.message_header(), HEADER_WHITESPACE);
    if tokens.is_empty() {
        return;
    }

    fpr.add_field(PriorityIndicator, "", 0, 0);
    fpr.add_field(Address, "", 0, 0);
    fpr.add_field(FilingTime, "", 0, 0);
    fpr.add_field(Originator, "", 0, 0);
    fpr.add_field(AdAddress, "", 0, 0);

    let mut state = 0;
    let mut ad_addressee_seen = false;
    for token in &tokens {
        match state {
            0 => {
                fpr.add_field(PriorityIndicator, &token.text, token.start, token.end);
                fpr.add_field(Address, "", token.end + 1, token.end + 1);
                state = 1;
            }
            1 => {
                if util::first_digit_index(&token.text) == Some(0) {
                    fpr.add_field(FilingTime, &token.text, token.start, token.end);
                    state = 2;
                } else {
                    append_to_list_field(fpr, Address, token);
                }
            }
            2 => {
                fpr.add_field(Originator, &token.text, token.start, token.end);
                fpr.add_field(AdAddress, "", token.end + 1, token.end + 1);
                state = 3;
            }
            _ => {
                append_to_list_field(fpr, AdAddress, token);
                ad_addressee_seen = true;
            }
        }
    }

    fields::parse_field(fpr, PriorityIndicator);
    fields::parse_field(fpr, Address);
    fields::parse_field(fpr, FilingTime);
    fields::parse_field(fpr, Originator);
    if ad_addressee_seen {
        fields::parse_field(fpr, AdAddress);
    }
}

/// Concatenate one more address onto an addressee list field, keeping the
/// start offset of the first address in the list.
fn append_to_list_field(fpr: &mut FlightPlanRecord, field_id: FieldId, token: &Token) {
    let (text, start) = match fpr.field(field_id) {
        Some(field) => (format!("{}{} ", field.text, token.text), field.start),
        None => (format!("{} ", token.text), token.start),
    };
    fpr.add_field(field_id, &text, start, token.end);
}

fn parse_ats(fpr: &mut FlightPlanRecord) -> bool {
    let tokens = tokenize(fpr.message_body(), BODY_WHITESPACE);
    let Some(first) = tokens.first() else {
        return false;
    };
    let title = title_of(&first.text);
    parse_ats_or_oldi(fpr, &tokens, title)
}

/// OLDI field content varies per adjacent unit, so field 3 is parsed up
/// front to establish the sender unit before the field list is looked up.
fn parse_oldi(fpr: &mut FlightPlanRecord) -> bool {
    let tokens = tokenize(fpr.message_body(), BODY_WHITESPACE);
    let Some(first) = tokens.first() else {
        return false;
    };
    let title = title_of(&first.text);

    let header_len = fpr.message_header().len();
    fpr.add_field(
        FieldId::F3,
        &first.text,
        header_len + first.start,
        header_len + first.end,
    );
    fields::parse_field(fpr, FieldId::F3);

    parse_ats_or_oldi(fpr, &tokens, title)
}

/// The message title carried by the first body token. Embedded spaces are
/// tolerated, e.g. `( FPL`.
fn title_of(first_token: &str) -> MessageTitle {
    let compact = first_token.replace(' ', "");
    compact
        .get(0..3)
        .and_then(|s| MessageTitle::from_str(s).ok())
        .unwrap_or(MessageTitle::Unknown)
}

/// Look up the field list for the record's type, sender unit and title.
/// A missing unit-specific entry falls back to the default unit; a missing
/// default entry is a configuration error that stops processing.
fn get_message_description(
    fpr: &mut FlightPlanRecord,
    title: MessageTitle,
) -> Option<&'static MessageContent> {
    let message_type = fpr.message_type().unwrap_or(MessageType::Unknown);
    let unit = fpr.sender_adjacent_unit().unwrap_or(AdjacentUnit::Default);

    if let Some(md) = find_message(message_type, unit, title) {
        return Some(md);
    }

    warn!(%message_type, %unit, %title, "no message content configured, trying default unit");
    let detail = format!(
        "Message Type: {message_type}, Adjacent Unit Name: {unit}, Message Title: {title}. \
         Default configuration will be used."
    );
    fpr.add_error(&detail, ErrorId::SystemConfigUndefined.text_with(&detail), 0, 0);

    if let Some(md) = find_message(message_type, AdjacentUnit::Default, title) {
        fpr.set_sender_adjacent_unit(AdjacentUnit::Default);
        return Some(md);
    }

    let detail = format!(
        "Message Type: {message_type}, Adjacent Unit Name: {}, Message Title: {title}. \
         No default configuration available, message cannot be processed.",
        AdjacentUnit::Default
    );
    fpr.add_error(&detail, ErrorId::SystemConfigUndefined.text_with(&detail), 0, 0);
    None
}

/// Match the body tokens against the configured field list positionally and
/// run the field parser for every pair. Count mismatches are reported; the
/// FPL title tolerates one missing field, its field 19 is optional.
fn parse_ats_or_oldi(
    fpr: &mut FlightPlanRecord,
    tokens: &[Token],
    title: MessageTitle,
) -> bool {
    let Some(md) = get_message_description(fpr, title) else {
        return false;
    };
    let header_len = fpr.message_header().len();

    if tokens.len() < md.fields.len() {
        for (idx, token) in tokens.iter().enumerate() {
            let field_id = md.fields[idx];
            fpr.add_field(
                field_id,
                &token.text,
                header_len + token.start,
                header_len + token.end,
            );
            fields::parse_field(fpr, field_id);
        }
        let difference = md.fields.len() - tokens.len();
        if title == MessageTitle::Fpl && difference == 1 {
            return !fpr.errors_detected();
        }
        let expected = md.fields.len().to_string();
        let start = tokens.first().map_or(0, |t| header_len + t.start);
        let end = tokens.last().map_or(0, |t| header_len + t.end);
        fpr.add_error(
            &expected,
            ErrorId::MsgTooFewFields.text_with(&expected),
            start,
            end,
        );
    } else {
        for (idx, field_id) in md.fields.iter().copied().enumerate() {
            let token = &tokens[idx];
            fpr.add_field(
                field_id,
                &token.text,
                header_len + token.start,
                header_len + token.end,
            );
            fields::parse_field(fpr, field_id);
        }
        if tokens.len() > md.fields.len() {
            let token = &tokens[md.fields.len()];
            fpr.add_error(
                &token.text,
                ErrorId::MsgTooManyFields.text_with(&token.text),
                header_len + token.start,
                header_len + token.end,
            );
        }
    }

    !fpr.errors_detected()
}
