//! The flight plan record: everything the parser extracted from one message.
//!
//! All `start`/`end` offsets stored here are absolute character offsets into
//! the complete message as received, header included, so a caller can
//! highlight any field, subfield or error in the original text.

use serde::Serialize;

use crate::enums::{AdjacentUnit, FieldId, MessageTitle, MessageType, SubfieldId};
use crate::route::ExtractedRouteSequence;

// ---------------------------------------------------------------------------
// SubfieldValue / FieldValue
// ---------------------------------------------------------------------------

/// One parsed subfield, e.g. the EOBT inside field 13.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SubfieldValue {
    /// Which subfield this is.
    pub subfield_id: SubfieldId,
    /// The subfield text as it appeared in the message.
    pub text: String,
    /// Absolute start offset into the complete message.
    pub start: usize,
    /// Absolute end offset (exclusive).
    pub end: usize,
}

/// One ICAO field together with the subfields parsed out of it.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct FieldValue {
    /// Which field this is.
    pub field_id: FieldId,
    /// The raw field text.
    pub text: String,
    /// Absolute start offset into the complete message.
    pub start: usize,
    /// Absolute end offset (exclusive).
    pub end: usize,
    /// Parsed subfields in discovery order.
    pub subfields: Vec<SubfieldValue>,
}

impl FieldValue {
    /// The first subfield with the given id, if any.
    pub fn subfield(&self, subfield_id: SubfieldId) -> Option<&SubfieldValue> {
        self.subfields.iter().find(|s| s.subfield_id == subfield_id)
    }

    /// All subfields with the given id, in discovery order.
    pub fn subfields_with_id(&self, subfield_id: SubfieldId) -> Vec<&SubfieldValue> {
        self.subfields
            .iter()
            .filter(|s| s.subfield_id == subfield_id)
            .collect()
    }
}

// ---------------------------------------------------------------------------
// ErrorEntry
// ---------------------------------------------------------------------------

/// One diagnostic attached to the record.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorEntry {
    /// The offending text copied from the message.
    pub text: String,
    /// The human-readable diagnostic.
    pub message: String,
    /// Absolute start offset into the complete message.
    pub start: usize,
    /// Absolute end offset (exclusive).
    pub end: usize,
}

// ---------------------------------------------------------------------------
// FlightPlanRecord
// ---------------------------------------------------------------------------

/// The complete result of parsing one ATS or OLDI message.
///
/// Fields are kept in discovery order; re-adding a field id replaces the
/// previous entry in place. Errors accumulate in the order they were found
/// and never abort parsing of later fields.
#[derive(Serialize, Debug, Clone, Default)]
pub struct FlightPlanRecord {
    message_complete: String,
    message_header: String,
    message_body: String,
    message_type: Option<MessageType>,
    message_title: Option<MessageTitle>,
    sender_adjacent_unit: Option<AdjacentUnit>,
    receiver_adjacent_unit: Option<AdjacentUnit>,
    fields: Vec<FieldValue>,
    errors: Vec<ErrorEntry>,
    extracted_route: Option<ExtractedRouteSequence>,
    f22_flight_plan: Option<Box<FlightPlanRecord>>,
}

impl FlightPlanRecord {
    /// An empty record ready to be populated by the parser.
    pub fn new() -> FlightPlanRecord {
        FlightPlanRecord::default()
    }

    /// Store the complete message as received.
    pub fn set_message_complete(&mut self, message: &str) {
        self.message_complete = message.to_string();
    }

    /// The complete message as received.
    pub fn message_complete(&self) -> &str {
        &self.message_complete
    }

    /// Store the AFTN header part of the message (may be empty).
    pub fn set_message_header(&mut self, header: &str) {
        self.message_header = header.to_string();
    }

    /// The AFTN header part of the message.
    pub fn message_header(&self) -> &str {
        &self.message_header
    }

    /// Store the message body (title onwards).
    pub fn set_message_body(&mut self, body: &str) {
        self.message_body = body.to_string();
    }

    /// The message body (title onwards).
    pub fn message_body(&self) -> &str {
        &self.message_body
    }

    /// Record the detected message type.
    pub fn set_message_type(&mut self, message_type: MessageType) {
        self.message_type = Some(message_type);
    }

    /// The detected message type, if classification ran.
    pub fn message_type(&self) -> Option<MessageType> {
        self.message_type
    }

    /// Record the detected message title.
    pub fn set_message_title(&mut self, title: MessageTitle) {
        self.message_title = Some(title);
    }

    /// The detected message title, if one was recognised.
    pub fn message_title(&self) -> Option<MessageTitle> {
        self.message_title
    }

    /// Record the sending adjacent unit (OLDI field 3b).
    pub fn set_sender_adjacent_unit(&mut self, unit: AdjacentUnit) {
        self.sender_adjacent_unit = Some(unit);
    }

    /// The sending adjacent unit, if one was extracted.
    pub fn sender_adjacent_unit(&self) -> Option<AdjacentUnit> {
        self.sender_adjacent_unit
    }

    /// Record the receiving adjacent unit (OLDI field 3c).
    pub fn set_receiver_adjacent_unit(&mut self, unit: AdjacentUnit) {
        self.receiver_adjacent_unit = Some(unit);
    }

    /// The receiving adjacent unit, if one was extracted.
    pub fn receiver_adjacent_unit(&self) -> Option<AdjacentUnit> {
        self.receiver_adjacent_unit
    }

    /// Add a field, replacing any previous entry with the same id in place.
    pub fn add_field(&mut self, field_id: FieldId, text: &str, start: usize, end: usize) {
        let value = FieldValue {
            field_id,
            text: text.to_string(),
            start,
            end,
            subfields: Vec::new(),
        };
        if let Some(existing) = self.fields.iter_mut().find(|f| f.field_id == field_id) {
            *existing = value;
        } else {
            self.fields.push(value);
        }
    }

    /// The field with the given id, if present.
    pub fn field(&self, field_id: FieldId) -> Option<&FieldValue> {
        self.fields.iter().find(|f| f.field_id == field_id)
    }

    /// All fields in discovery order.
    pub fn fields(&self) -> &[FieldValue] {
        &self.fields
    }

    /// Attach a subfield to an already-added field. Ignored when the field
    /// is absent.
    pub fn add_subfield(
        &mut self,
        field_id: FieldId,
        subfield_id: SubfieldId,
        text: &str,
        start: usize,
        end: usize,
    ) {
        if let Some(field) = self.fields.iter_mut().find(|f| f.field_id == field_id) {
            field.subfields.push(SubfieldValue {
                subfield_id,
                text: text.to_string(),
                start,
                end,
            });
        }
    }

    /// Record a diagnostic against a stretch of the message.
    pub fn add_error(&mut self, erroneous_text: &str, message: String, start: usize, end: usize) {
        self.errors.push(ErrorEntry {
            text: erroneous_text.to_string(),
            message,
            start,
            end,
        });
    }

    /// All diagnostics in discovery order.
    pub fn errors(&self) -> &[ErrorEntry] {
        &self.errors
    }

    /// True when at least one diagnostic was recorded.
    pub fn errors_detected(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Attach the extracted route produced by the field 15 parser.
    pub fn set_extracted_route(&mut self, route: ExtractedRouteSequence) {
        self.extracted_route = Some(route);
    }

    /// The extracted route, if field 15 was parsed.
    pub fn extracted_route(&self) -> Option<&ExtractedRouteSequence> {
        self.extracted_route.as_ref()
    }

    /// Attach the nested record built when parsing a compound field 22.
    pub fn set_f22_flight_plan(&mut self, record: FlightPlanRecord) {
        self.f22_flight_plan = Some(Box::new(record));
    }

    /// The nested field 22 record, if one was built.
    pub fn f22_flight_plan(&self) -> Option<&FlightPlanRecord> {
        self.f22_flight_plan.as_deref()
    }

    /// Render the record as a small XML document for archival.
    pub fn as_xml(&self) -> String {
        let mut xml = String::from("<flight_plan_record>\n");
        xml.push_str(&format!(
            "  <header>{}</header>\n",
            escape_xml(&self.message_header)
        ));
        xml.push_str(&format!(
            "  <body>{}</body>\n",
            escape_xml(&self.message_body)
        ));
        for field in &self.fields {
            xml.push_str(&format!(
                "  <field id=\"{}\" start=\"{}\" end=\"{}\">{}</field>\n",
                field.field_id,
                field.start,
                field.end,
                escape_xml(&field.text)
            ));
            for subfield in &field.subfields {
                xml.push_str(&format!(
                    "    <subfield id=\"{}\" start=\"{}\" end=\"{}\">{}</subfield>\n",
                    subfield.subfield_id,
                    subfield.start,
                    subfield.end,
                    escape_xml(&subfield.text)
                ));
            }
        }
        for error in &self.errors {
            xml.push_str(&format!(
                "  <error start=\"{}\" end=\"{}\">{}</error>\n",
                error.start,
                error.end,
                escape_xml(&error.message)
            ));
        }
        xml.push_str("</flight_plan_record>\n");
        xml
    }
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn re_adding_a_field_replaces_in_place() {
        let mut fpr = FlightPlanRecord::new();
        fpr.add_field(FieldId::F13, "EGLL0800", 10, 18);
        fpr.add_field(FieldId::F16, "EGBB0100", 20, 28);
        fpr.add_field(FieldId::F13, "LFPG0900", 10, 18);

        assert_eq!(fpr.fields().len(), 2);
        assert_eq!(fpr.fields()[0].field_id, FieldId::F13);
        assert_eq!(fpr.fields()[0].text, "LFPG0900");
        assert!(fpr.fields()[0].subfields.is_empty());
    }

    #[test]
    fn subfield_ignored_without_field() {
        let mut fpr = FlightPlanRecord::new();
        fpr.add_subfield(FieldId::F13, SubfieldId::F13a, "EGLL", 10, 14);
        assert!(fpr.field(FieldId::F13).is_none());
    }

    #[test]
    fn errors_accumulate_in_order() {
        let mut fpr = FlightPlanRecord::new();
        fpr.add_error("AAA", "first".to_string(), 0, 3);
        fpr.add_error("BBB", "second".to_string(), 4, 7);

        assert!(fpr.errors_detected());
        assert_eq!(fpr.errors()[0].message, "first");
        assert_eq!(fpr.errors()[1].message, "second");
    }

    #[test]
    fn field_offsets_index_the_complete_message() {
        let message = "FF EGLLZRZX\n(CNL-TEST01-EGLL-EGBB)";
        let mut fpr = FlightPlanRecord::new();
        fpr.set_message_complete(message);
        fpr.add_field(FieldId::F13, "EGLL", 22, 26);

        let field = fpr.field(FieldId::F13).unwrap();
        assert_eq!(&message[field.start..field.end], "EGLL");
    }

    #[test]
    fn xml_escapes_markup() {
        let mut fpr = FlightPlanRecord::new();
        fpr.set_message_header("FF <X>");
        let xml = fpr.as_xml();
        assert!(xml.contains("<header>FF &lt;X&gt;</header>"));
    }

    #[test]
    fn serializes_to_json() {
        let mut fpr = FlightPlanRecord::new();
        fpr.set_message_type(MessageType::Ats);
        fpr.add_field(FieldId::F3, "FPL", 0, 3);
        let json = serde_json::to_string(&fpr).unwrap();
        assert!(json.contains("\"F3\""));
    }
}
