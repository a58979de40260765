//! The per-field parsers. Each submodule handles one ICAO field (or a small
//! family sharing a layout); [`parse_field`] routes a field id to its parser.

use atslink_models::{FieldId, FlightPlanRecord};

pub(crate) mod common;
pub(crate) mod f10;
pub(crate) mod f13;
pub(crate) mod f14;
pub(crate) mod f15;
pub(crate) mod f16;
pub(crate) mod f17;
pub(crate) mod f18;
pub(crate) mod f22;
pub(crate) mod f3;
pub(crate) mod f5;
pub(crate) mod f7;
pub(crate) mod f8;
pub(crate) mod f9;
pub(crate) mod header;
pub(crate) mod mfs;
pub(crate) mod oldi;

/// Parse the named field out of the record's stored field text. Fields that
/// are captured as raw text only (18 to 21 and the title-specific field 22
/// content) have nothing to do here.
pub(crate) fn parse_field(fpr: &mut FlightPlanRecord, field_id: FieldId) {
    match field_id {
        FieldId::PriorityIndicator => header::parse_priority_indicator(fpr),
        FieldId::FilingTime => header::parse_filing_time(fpr),
        FieldId::Originator => header::parse_originator(fpr),
        FieldId::Address => header::parse_addressee(fpr),
        FieldId::AdAddress => header::parse_ad_addressee(fpr),
        FieldId::F3 => f3::parse(fpr),
        FieldId::F5 => f5::parse(fpr),
        FieldId::F7 => f7::parse(fpr),
        FieldId::F8 | FieldId::F8a => f8::parse(fpr, field_id),
        FieldId::F9 => f9::parse(fpr),
        FieldId::F10 => f10::parse(fpr),
        FieldId::F13 | FieldId::F13a => f13::parse(fpr, field_id),
        FieldId::F14 | FieldId::F14a => f14::parse(fpr, field_id),
        FieldId::F15 => f15::parse(fpr),
        FieldId::F16 | FieldId::F16a | FieldId::F16ab => f16::parse(fpr, field_id),
        FieldId::F17 => f17::parse(fpr),
        FieldId::F18Dof => f18::parse_dof(fpr),
        FieldId::F22 => f22::parse(fpr),
        FieldId::F80 | FieldId::F81 => oldi::parse(fpr, field_id),
        FieldId::MfsSigPoint => mfs::parse(fpr),
        FieldId::F18 | FieldId::F19 | FieldId::F20 | FieldId::F21 | FieldId::F22Specific => {}
    }
}
