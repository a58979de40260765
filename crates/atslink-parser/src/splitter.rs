//! Splits a complete message into its AFTN header and message body.
//!
//! The body starts at the first open bracket or hyphen, whichever comes
//! first; a LAM has no hyphen and relies on the bracket. Either marker
//! inside the first [`MIN_HEADER_LENGTH`] characters means the message
//! cannot carry a header and is treated as all body.

use atslink_models::FlightPlanRecord;

/// Anything shorter than this before the body marker is junk, not a header.
pub const MIN_HEADER_LENGTH: usize = 20;

/// Store the header and body halves of the complete message on the record.
pub(crate) fn set_message_body_and_header(fpr: &mut FlightPlanRecord) {
    let msg = fpr.message_complete().to_string();
    let hyphen = msg.find('-');
    let bracket = msg.find('(');

    let split_at = match (hyphen, bracket) {
        (None, None) => None,
        (None, Some(b)) => Some(b),
        (Some(h), None) => Some(h),
        (Some(h), Some(b)) => Some(if b < h { b } else { h }),
    };

    match split_at {
        Some(idx) if idx >= MIN_HEADER_LENGTH => {
            fpr.set_message_header(&msg[..idx]);
            fpr.set_message_body(&msg[idx..]);
        }
        _ => {
            fpr.set_message_header("");
            fpr.set_message_body(&msg);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(message: &str) -> FlightPlanRecord {
        let mut fpr = FlightPlanRecord::new();
        fpr.set_message_complete(message);
        set_message_body_and_header(&mut fpr);
        fpr
    }

    #[test]
    fn header_split_on_bracket() {
        let fpr = split("FF EGLLZRZX\n121200 EGGDABCD\n(FPL-TEST01-IS)");
        assert_eq!(fpr.message_header(), "FF EGLLZRZX\n121200 EGGDABCD\n");
        assert_eq!(fpr.message_body(), "(FPL-TEST01-IS)");
    }

    #[test]
    fn header_split_on_hyphen_when_no_bracket() {
        let fpr = split("FF EGLLZRZX\n121200 EGGDABCD\nFPL-TEST01-IS");
        assert_eq!(fpr.message_header(), "FF EGLLZRZX\n121200 EGGDABCD\nFPL");
        assert!(fpr.message_body().starts_with("-TEST01"));
    }

    #[test]
    fn bracket_before_hyphen_wins() {
        let fpr = split("FF EGLLZRZX 121200 EGGD(FPL-TEST01)");
        assert_eq!(fpr.message_body(), "(FPL-TEST01)");
    }

    #[test]
    fn early_marker_means_no_header() {
        let fpr = split("(FPL-TEST01-IS-B737/M)");
        assert_eq!(fpr.message_header(), "");
        assert_eq!(fpr.message_body(), "(FPL-TEST01-IS-B737/M)");
    }

    #[test]
    fn no_marker_at_all_is_all_body() {
        let fpr = split("LAML/E012E/L001 AND SOME MORE");
        assert_eq!(fpr.message_header(), "");
        assert_eq!(fpr.message_body(), "LAML/E012E/L001 AND SOME MORE");
    }
}
