//! The extracted route sequence produced by the field 15 parser.
//!
//! A route always starts with a placeholder aerodrome element (`ADEP`); the
//! departure and destination aerodromes live in fields 13 and 16, not in the
//! route itself. Route errors are kept on their own list, separate from the
//! record-level diagnostics.

use serde::Serialize;

use crate::record::ErrorEntry;

/// One element of the extracted route (a point, a route designator, a speed
/// and level group, and so on).
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RouteElement {
    /// The element text as it appears in field 15.
    pub text: String,
    /// Absolute start offset into the complete message.
    pub start: usize,
    /// Absolute end offset (exclusive).
    pub end: usize,
}

/// A complete extracted route sequence.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ExtractedRouteSequence {
    elements: Vec<RouteElement>,
    errors: Vec<ErrorEntry>,
    derived_flight_rules: String,
}

impl ExtractedRouteSequence {
    /// A new sequence seeded with the `ADEP` placeholder element.
    pub fn new() -> ExtractedRouteSequence {
        let mut ers = ExtractedRouteSequence {
            elements: Vec::new(),
            errors: Vec::new(),
            derived_flight_rules: String::new(),
        };
        ers.add_element("ADEP", 0, 0);
        ers
    }

    /// Append a route element.
    pub fn add_element(&mut self, text: &str, start: usize, end: usize) {
        self.elements.push(RouteElement {
            text: text.to_string(),
            start,
            end,
        });
    }

    /// Record a route error; `!` in the message is replaced by the element
    /// text.
    pub fn add_error(&mut self, text: &str, message: &str, start: usize, end: usize) {
        self.errors.push(ErrorEntry {
            text: text.to_string(),
            message: message.replace('!', text),
            start,
            end,
        });
    }

    /// All route elements including the `ADEP` placeholder.
    pub fn elements(&self) -> &[RouteElement] {
        &self.elements
    }

    /// The last route element.
    pub fn last_element(&self) -> Option<&RouteElement> {
        self.elements.last()
    }

    /// All route errors in discovery order.
    pub fn errors(&self) -> &[ErrorEntry] {
        &self.errors
    }

    /// The number of route errors.
    pub fn number_of_errors(&self) -> usize {
        self.errors.len()
    }

    /// Flight rules derived from the route (`I`, `V`, `Y` or `Z`), empty
    /// when not derived.
    pub fn derived_flight_rules(&self) -> &str {
        &self.derived_flight_rules
    }

    /// Set the derived flight rules.
    pub fn set_derived_flight_rules(&mut self, rules: &str) {
        self.derived_flight_rules = rules.to_string();
    }

    /// Render the route as a small XML fragment for archival.
    pub fn as_xml(&self) -> String {
        let mut xml = String::from("<ers>\n");
        xml.push_str(&format!(
            "  <derived_flight_rules>{}</derived_flight_rules>\n",
            self.derived_flight_rules
        ));
        for element in &self.elements {
            xml.push_str(&format!(
                "  <element start=\"{}\" end=\"{}\">{}</element>\n",
                element.start, element.end, element.text
            ));
        }
        for error in &self.errors {
            xml.push_str(&format!(
                "  <error start=\"{}\" end=\"{}\">{}</error>\n",
                error.start, error.end, error.message
            ));
        }
        xml.push_str("</ers>\n");
        xml
    }
}

impl Default for ExtractedRouteSequence {
    fn default() -> ExtractedRouteSequence {
        ExtractedRouteSequence::new()
    }
}
