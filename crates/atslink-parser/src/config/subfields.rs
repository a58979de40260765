//! Per-subfield syntax: a regular expression and a compulsory flag.
//!
//! Every regular expression is anchored so a token must match in full. The
//! table is built once on first use.

use std::collections::HashMap;
use std::sync::LazyLock;

use atslink_models::SubfieldId;
use regex::Regex;

/// Syntax description for one subfield.
pub(crate) struct SubfieldSpec {
    /// Anchored syntax for the whole token.
    pub regex: Regex,
    /// True when the subfield must be present in its field.
    pub compulsory: bool,
}

// Primitives shared by several subfield definitions.
const HHMM: &str = "([01][0-9][0-5][0-9]|2[0-3][0-5][0-9])";
const AERODROME: &str = "[A-Z]{4}";
const LAT_LONG_DEGREES: &str = "([0-8][0-9]|90)[NS](0[0-9]{2}|1[0-7][0-9]|180)[EW]";
const LAT_LONG_MINUTES: &str =
    "([0-8][0-9][0-5][0-9]|9000)[NS](0[0-9]{2}[0-5][0-9]|1[0-7][0-9][0-5][0-9]|18000)[EW]";
const POINT: &str = "[A-Z]{2,5}";
const BEARING: &str = "([012][0-9]{2}|3[0-5][0-9]|360)";
const DISTANCE: &str = "[0-9]{3}";
const FACILITY: &str = "([A-Z]{8}|[A-Z]{3}[A-Z0-9]{4})";
const LEVEL: &str = "(F[0-9]{2}[05]|A[0-9]{3}|[SM][0-9]{4})";
const FREE_TEXT: &str = "[A-Z0-9 :/.\r\n\t]*";
const UNIT_NAME: &str = "[A-Z]{1,4}";
const SEQUENCE: &str = "[0-9]{3}";
const SLASH: &str = "[/]";

const TITLES: &str = "ABI|ACH|ACP|ACT|AFP|ALR|AMA|APL|ARR|CDN|CHG|CNL|COD|CPL|DEP|DLA|\
                      EST|FPL|FNM|INF|LAM|MAC|MFS|OCM|PAC|RAP|REJ|REV|RCF|RJC|ROC|RQP|\
                      RQS|RRV|SBY|SPL";

static SUBFIELD_SPECS: LazyLock<HashMap<SubfieldId, SubfieldSpec>> = LazyLock::new(|| {
    let ddhhmm = format!("(([012][0-9]|3[01]){HHMM})");
    let point_bearing_distance = format!(
        "({POINT})|({LAT_LONG_DEGREES})|({LAT_LONG_MINUTES})|\
         ({POINT}{BEARING}{DISTANCE})|({LAT_LONG_DEGREES}{BEARING}{DISTANCE})|\
         ({LAT_LONG_MINUTES}{BEARING}{DISTANCE})"
    );

    let mut specs = HashMap::new();
    let mut add = |id: SubfieldId, pattern: &str, compulsory: bool| {
        let regex =
            Regex::new(&format!("^(?:{pattern})$")).expect("subfield syntax must compile");
        specs.insert(id, SubfieldSpec { regex, compulsory });
    };

    add(SubfieldId::PriorityIndicator, "FF|GG|DD|KK|SS", true);
    add(SubfieldId::FilingTime, &ddhhmm, true);
    add(SubfieldId::Originator, FACILITY, true);
    for id in [
        SubfieldId::Address1,
        SubfieldId::Address2,
        SubfieldId::Address3,
        SubfieldId::Address4,
        SubfieldId::Address5,
        SubfieldId::Address6,
        SubfieldId::Address7,
        SubfieldId::Address8,
        SubfieldId::AdAddress1,
        SubfieldId::AdAddress2,
        SubfieldId::AdAddress3,
        SubfieldId::AdAddress4,
        SubfieldId::AdAddress5,
        SubfieldId::AdAddress6,
        SubfieldId::AdAddress7,
        SubfieldId::AdAddress8,
    ] {
        add(id, FACILITY, false);
    }

    add(SubfieldId::F3a, TITLES, true);
    for id in [SubfieldId::F3b1, SubfieldId::F3b3, SubfieldId::F3c1, SubfieldId::F3c3] {
        add(id, UNIT_NAME, false);
    }
    for id in [SubfieldId::F3b2, SubfieldId::F3c2] {
        add(id, SLASH, false);
    }
    for id in [SubfieldId::F3b4, SubfieldId::F3c4] {
        add(id, SEQUENCE, false);
    }

    add(SubfieldId::F5a, "INCERFA|ALERFA|DETRESFA", true);
    add(SubfieldId::F5ab, SLASH, true);
    add(SubfieldId::F5b, FACILITY, true);
    add(SubfieldId::F5bc, SLASH, true);
    add(SubfieldId::F5c, FREE_TEXT, true);

    add(SubfieldId::F7a, "[A-Z][A-Z0-9]{0,6}", true);
    add(SubfieldId::F7ab, SLASH, false);
    add(SubfieldId::F7b, "[AC]", false);
    add(SubfieldId::F7c, "[0-7]{4}", false);

    add(SubfieldId::F8a, "[IVYZ]", true);
    add(SubfieldId::F8b, "[SNMGX]", true);

    add(SubfieldId::F9a, "[0-9]{0,2}", false);
    add(SubfieldId::F9b, "[A-Z][A-Z0-9]{1,4}", true);
    add(SubfieldId::F9bc, SLASH, true);
    add(SubfieldId::F9c, "[LHMJ]", true);

    add(SubfieldId::F10a, "[N]|([S]|[A-MOPRT-Z1-9]+|[A-MOPRT-Z1-9]+)", true);
    add(SubfieldId::F10ab, SLASH, true);
    add(SubfieldId::F10b, "[ABCDEGHILPSUVX12]", true);

    add(SubfieldId::F13a, AERODROME, true);
    add(SubfieldId::F13b, HHMM, true);

    add(SubfieldId::F14a, &point_bearing_distance, true);
    add(SubfieldId::F14ab, SLASH, true);
    add(SubfieldId::F14b, HHMM, true);
    add(SubfieldId::F14c, LEVEL, true);
    add(SubfieldId::F14d, LEVEL, false);
    add(SubfieldId::F14e, "[AB]", false);

    add(SubfieldId::F15, "[A-Z0-9/ \r\n\t]+", true);

    add(SubfieldId::F16a, AERODROME, true);
    add(SubfieldId::F16b, HHMM, true);
    add(SubfieldId::F16c, AERODROME, false);
    add(SubfieldId::F16d, AERODROME, false);

    add(SubfieldId::F17a, AERODROME, true);
    add(SubfieldId::F17b, HHMM, true);
    add(SubfieldId::F17c, FREE_TEXT, false);

    add(SubfieldId::F18Dof, "[0-9]{6}", false);

    add(SubfieldId::F80a, "[SNGMX]", true);

    add(
        SubfieldId::F81a,
        "[N]|([S]|[A-MOPRT-Z1-9]+|[A-MOPRT-Z1-9]+)|ADSB|ADSC",
        true,
    );
    add(SubfieldId::F81ab, SLASH, true);
    add(SubfieldId::F81b, "EQ|UN|NO", true);
    add(SubfieldId::F81bc, SLASH, false);
    add(SubfieldId::F81c, "[A-LN-Z][0-9]*", false);

    add(SubfieldId::MfsSigPoint, "[A-Z][A-Z0-9]{1,14}", true);

    specs
});

/// The syntax description for `id`, if the subfield has one. The compound
/// field 22 subfields have no syntax of their own; their data is parsed
/// recursively by the field parsers of the fields they name.
pub(crate) fn subfield_spec(id: SubfieldId) -> Option<&'static SubfieldSpec> {
    SUBFIELD_SPECS.get(&id)
}
