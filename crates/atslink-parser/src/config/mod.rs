//! Static configuration tables: subfield syntax, field layout and the
//! message registry.

pub(crate) mod field_content;
pub(crate) mod messages;
pub(crate) mod subfields;
