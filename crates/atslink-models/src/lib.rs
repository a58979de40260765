#![deny(missing_docs)]

//! # AtsLink Models
//!
//! Core data types for the AtsLink ICAO ATS/OLDI message parser.
//!
//! ## Record hierarchy
//!
//! ```text
//! FlightPlanRecord
//! ├── FieldValue (one per ICAO field, e.g. F7, F13, F16)
//! │   └── SubfieldValue (e.g. F13a departure aerodrome, F13b EOBT)
//! ├── ErrorEntry (discovery-ordered, absolute character offsets)
//! ├── ExtractedRouteSequence (field 15 route, own error list)
//! └── FlightPlanRecord (nested record for a parsed compound field 22)
//! ```
//!
//! ## Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`enums`] | Message type/title, adjacent units, field and subfield identifiers |
//! | [`error`] | `ModelError`, the parser error taxonomy (`ErrorId`) and its catalog |
//! | [`record`] | `FlightPlanRecord` and its field/subfield/error records |
//! | [`route`] | Extracted route sequence produced by the field 15 plugin |

pub mod enums;
pub mod error;
pub mod record;
pub mod route;

// Re-export all public types at crate root for convenience.
// Downstream crates can use `atslink_models::MessageTitle` directly.
pub use enums::*;
pub use error::*;
pub use record::*;
pub use route::*;
