#![deny(missing_docs)]

//! # AtsLink Parser
//!
//! Parser for ICAO DOC 4444 ATS messages and OLDI messages, with or without
//! an AFTN header. The parser populates a
//! [`FlightPlanRecord`](atslink_models::FlightPlanRecord) with every field
//! and subfield it finds, each carrying absolute character offsets into the
//! original message, and accumulates diagnostics instead of stopping at the
//! first problem.
//!
//! ```rust
//! use atslink_models::{FieldId, SubfieldId};
//!
//! let fpr = atslink_parser::parse("(CNL-TEST01-EGLL0800-EGBB-250401)");
//! assert!(!fpr.errors_detected());
//! let f13 = fpr.field(FieldId::F13).unwrap();
//! assert_eq!(f13.subfield(SubfieldId::F13b).unwrap().text, "0800");
//! ```
//!
//! ## Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`parser`] | Entry points, header parsing and the field-list driver |
//! | `splitter` | AFTN header / message body separation |
//! | `classifier` | ATS / OLDI / ADEXP message type detection |
//! | `tokenizer` | Whitespace tokenizer with slash-token support |
//! | `fields` | One parser per ICAO field |
//! | `config` | Subfield syntax, field layout and the message registry |

mod classifier;
mod config;
mod fields;
pub mod parser;
mod splitter;
mod tokenizer;
mod util;

pub use parser::{parse, parse_message, MIN_BODY_LENGTH};
pub use splitter::MIN_HEADER_LENGTH;
