//! Determines the encoding family of a message from the start of its body.
//!
//! ADEXP messages open with `-TITLE` and are reported as unsupported. For
//! ICAO messages the three-letter title decides between ATS and OLDI; the
//! titles ACP, CDN and CPL exist in both worlds and are pushed to OLDI when
//! the title carries an adjacent-unit qualifier such as `ACPAA/BB001`.

use std::str::FromStr;
use std::sync::LazyLock;

use atslink_models::{ErrorId, FlightPlanRecord, MessageTitle, MessageType};
use regex::Regex;
use tracing::debug;

// Leading whitespace and an optional open bracket are tolerated before the
// title in all three patterns.
static ADEXP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("^[ \n\r\t]*-[ \n\r\t]*TITLE").expect("classifier syntax must compile")
});

static TITLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("^[ \n\r\t]*[(]?[ \n\r\t]*[A-Z]{3}").expect("classifier syntax must compile")
});

static OLDI_QUALIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("^[ \n\r\t]*[(]?[ \n\r\t]*[A-Z]{3,7}/[A-Z]{1,4}[0-9]{1,3}")
        .expect("classifier syntax must compile")
});

/// Classify the message body already stored on the record and set the
/// message type (and title, when one is recognised). Returns false when the
/// message cannot be processed any further.
pub(crate) fn set_message_type(fpr: &mut FlightPlanRecord) -> bool {
    let body = fpr.message_body().to_string();
    let header_len = fpr.message_header().len();

    if ADEXP.is_match(&body) {
        fpr.add_error("", ErrorId::MsgAdexpNotSupported.text().to_string(), 0, 0);
        fpr.set_message_type(MessageType::Adexp);
        return false;
    }

    let Some(matched) = TITLE.find(&body) else {
        // No title-shaped text at all; report the first three characters.
        let text = body.get(0..3).unwrap_or(&body).to_string();
        fpr.add_error(
            &text,
            ErrorId::F3TitleSyntax.text_with(&text),
            header_len,
            header_len + 3,
        );
        fpr.set_message_type(MessageType::Unknown);
        return false;
    };

    let end_index = header_len + matched.end();
    let start_index = end_index - 3;
    let title_text = &matched.as_str()[matched.as_str().len() - 3..];

    let Ok(title) = MessageTitle::from_str(title_text) else {
        fpr.add_error(
            title_text,
            ErrorId::F3TitleSyntax.text_with(title_text),
            start_index,
            end_index + 3,
        );
        fpr.set_message_type(MessageType::Unknown);
        return false;
    };

    let ambiguous =
        title == MessageTitle::Acp || title == MessageTitle::Cdn || title == MessageTitle::Cpl;
    let message_type = if title.is_oldi() || (ambiguous && OLDI_QUALIFIER.is_match(&body)) {
        MessageType::Oldi
    } else {
        MessageType::Ats
    };
    debug!(title = %title, r#type = %message_type, "message classified");
    fpr.set_message_title(title);
    fpr.set_message_type(message_type);
    true
}
