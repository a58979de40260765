//! Field content per message type, adjacent unit and title.
//!
//! ATS messages always use the `DEFAULT` adjacent unit. OLDI field content
//! varies between units; a (type, unit, title) combination without a
//! dedicated entry falls back to the `DEFAULT` unit entry for that title.
//!
//! `f22_fields` lists the fields a title allows inside its compound field 22
//! when the title carries one.

use atslink_models::{AdjacentUnit, FieldId, MessageTitle, MessageType};

/// One registry entry: the fields making up a message body.
pub(crate) struct MessageContent {
    pub message_type: MessageType,
    pub adjacent_unit: AdjacentUnit,
    pub title: MessageTitle,
    pub description: &'static str,
    pub fields: &'static [FieldId],
    pub f22_fields: &'static [FieldId],
}

macro_rules! entry {
    ($ty:ident, $unit:ident, $title:ident, $desc:literal, $fields:expr, $f22:expr) => {
        MessageContent {
            message_type: MessageType::$ty,
            adjacent_unit: AdjacentUnit::$unit,
            title: MessageTitle::$title,
            description: $desc,
            fields: $fields,
            f22_fields: $f22,
        }
    };
}

use FieldId::{
    F10, F13, F13a, F14, F14a, F15, F16, F16a, F16ab, F17, F18, F18Dof, F19, F20, F21, F22,
    F22Specific, F3, F5, F7, F8, F80, F81, F8a, F9, MfsSigPoint,
};

#[rustfmt::skip]
static MESSAGE_REGISTRY: &[MessageContent] = &[
    // ── ATS titles (always DEFAULT unit) ─────────────────────────────
    entry!(Ats, Default, Ach, "ATS ATC Change Message",
           &[F3, F7, F13, F16ab, F18Dof, F22], &[]),
    entry!(Ats, Default, Acp, "ATS Advanced Coordination Procedure Message",
           &[F3, F7, F13, F16], &[]),
    entry!(Ats, Default, Afp, "ATS ATC Flightplan Proposal Message",
           &[F3, F7, F8, F9, F10, F13, F14, F15, F16, F18, F19], &[]),
    entry!(Ats, Default, Alr, "ATS ATC Alerting Message",
           &[F3, F5, F7, F8, F9, F10, F13, F15, F16, F18, F19, F20], &[]),
    entry!(Ats, Default, Apl, "ATS ATC Flight Plan Message",
           &[F3, F7, F8, F9, F10, F13, F14, F15, F16, F18, F19], &[]),
    entry!(Ats, Default, Arr, "ATS Arrival Message",
           &[F3, F7, F13, F16ab, F17, F18Dof], &[]),
    entry!(Ats, Default, Cdn, "ATS Coordination Message",
           &[F3, F7, F13, F16, F18Dof], &[]),
    entry!(Ats, Default, Chg, "ATS Change Message",
           &[F3, F7, F13, F16ab, F18Dof, F22], &[]),
    entry!(Ats, Default, Cnl, "ATS Cancel Message",
           &[F3, F7, F13, F16a, F18Dof], &[]),
    entry!(Ats, Default, Cpl, "ATS Current Flight Plan Message",
           &[F3, F7, F8, F9, F10, F13, F14, F15, F16, F18], &[]),
    entry!(Ats, Default, Dep, "ATS Departure Message",
           &[F3, F7, F13, F16a, F18Dof], &[]),
    entry!(Ats, Default, Dla, "ATS Delay Message",
           &[F3, F7, F13, F16a, F18Dof], &[]),
    entry!(Ats, Default, Est, "ATS Estimate Message",
           &[F3, F7, F13, F14, F16], &[]),
    entry!(Ats, Default, Fpl, "ATS Flight Plan Message",
           &[F3, F7, F8, F9, F10, F13, F15, F16, F18, F19], &[]),
    entry!(Ats, Default, Fnm, "Gander Oceanic Message",
           &[F3, F7, F9, F13a, F15, F16a, F18, F19], &[]),
    entry!(Ats, Default, Mfs, "Oceanic Centre Message",
           &[F3, F7, F9, F13a, F14, F16a, MfsSigPoint], &[]),
    entry!(Ats, Default, Rcf, "ATS Radio communication failure",
           &[F3, F7, F21], &[]),
    entry!(Ats, Default, Rqp, "ATS Request Flight Plan Message",
           &[F3, F7, F13, F16a, F18Dof], &[]),
    entry!(Ats, Default, Rqs, "ATS Request Supplementary Flight Plan Information Message",
           &[F3, F7, F13, F16, F18], &[]),
    entry!(Ats, Default, Spl, "ATS Supplementary Flight Plan Message",
           &[F3, F7, F13, F16, F18, F19], &[]),

    // ── OLDI titles, DEFAULT unit ────────────────────────────────────
    entry!(Oldi, Default, Abi, "OLDI Advanced Boundary Information",
           &[F3, F7, F13a, F14, F16a, F22Specific], &[F9, F80, F81]),
    entry!(Oldi, Default, Acp, "OLDI Advanced Coordination Procedure Message",
           &[F3], &[]),
    entry!(Oldi, Default, Act, "OLDI Activation Message",
           &[F3, F7, F13a, F14, F16a, F22Specific], &[F9, F80, F81]),
    entry!(Oldi, Default, Ama, "OLDI Arrival Management Message",
           &[F3, F7, F13a, F16a, F22Specific], &[F18]),
    entry!(Oldi, Default, Cdn, "OLDI Coordination Message",
           &[F3, F7, F13a, F16a], &[]),
    entry!(Oldi, Default, Cod, "OLDI Advanced Coordination Procedure",
           &[F3, F7, F13, F16a], &[]),
    entry!(Oldi, Default, Cpl, "OLDI Current Flight Plan Message",
           &[F3, F7, F13, F16ab, F18Dof, F22Specific], &[F9]),
    entry!(Oldi, Default, Inf, "OLDI Information Message",
           &[F3, F7, F13a, F16a, F22Specific], &[F9, F15, F18]),
    entry!(Oldi, Default, Lam, "OLDI Logical Acknowledgement",
           &[F3], &[]),
    entry!(Oldi, Default, Mac, "OLDI Message for the Abrogation of Coordination",
           &[F3, F7, F13a, F14a, F16a], &[]),
    entry!(Oldi, Default, Ocm, "OLDI Oceanic Clearance Message",
           &[F3, F7, F13a, F14, F16a, F22Specific], &[F9]),
    entry!(Oldi, Default, Pac, "OLDI Preliminary Activation Message",
           &[F3, F7, F13a, F16a, F22Specific], &[F9]),
    entry!(Oldi, Default, Rap, "OLDI Referred Activate Proposal Message",
           &[F3, F7, F13a, F14, F16a, F18Dof, F22Specific], &[F9, F80, F81]),
    entry!(Oldi, Default, Rej, "OLDI Reject Message",
           &[F3, F7, F13a, F16a, F18], &[]),
    entry!(Oldi, Default, Rev, "OLDI Revision Message",
           &[F3, F7, F13a, F14, F16a], &[]),
    entry!(Oldi, Default, Rjc, "OLDI Reject Coordination Message",
           &[F3], &[]),
    entry!(Oldi, Default, Roc, "OLDI Request Oceanic Clearance Message",
           &[F3, F7, F22, F13a, F14, F16a], &[F9]),
    entry!(Oldi, Default, Rrv, "OLDI Referred Revision Proposal Message",
           &[F3, F7, F13a, F14, F16a], &[]),
    entry!(Oldi, Default, Sby, "OLDI Standby Message",
           &[F3], &[]),

    // ── OLDI titles, unit AA ─────────────────────────────────────────
    entry!(Oldi, Aa, Abi, "OLDI Advanced Boundary Information",
           &[F3, F7, F13a, F14, F16a, F22Specific], &[F8a, F9, F15, F18, F80, F81]),
    entry!(Oldi, Aa, Acp, "OLDI Advanced Coordination Procedure Message",
           &[F3, F7, F13a, F16a, F22Specific], &[F18]),
    entry!(Oldi, Aa, Act, "OLDI Activation Message",
           &[F3, F7, F13a, F14, F16a, F22Specific], &[F8a, F9, F15, F18, F80, F81]),
    entry!(Oldi, Aa, Ama, "OLDI Arrival Management Message",
           &[F3, F7, F13a, F14, F16a, F22Specific], &[F18]),
    entry!(Oldi, Aa, Cdn, "OLDI Coordination Message",
           &[F3, F7, F13a, F14, F16a, F22Specific], &[F15]),
    entry!(Oldi, Aa, Inf, "OLDI Information Message",
           &[F3, F7, F13a, F14a, F16a, F22Specific], &[F9, F15, F18]),
    entry!(Oldi, Aa, Mac, "OLDI Message for the Abrogation of Coordination",
           &[F3, F7, F13a, F14a, F16a, F22Specific], &[F8a, F13, F18, F80, F81]),
    entry!(Oldi, Aa, Ocm, "OLDI Oceanic Clearance Message",
           &[F3, F7, F13a, F14, F16a, F22Specific], &[F9, F15]),
    entry!(Oldi, Aa, Pac, "OLDI Preliminary Activation Message",
           &[F3, F7, F13a, F16a, F22Specific], &[F8a, F9, F15, F18, F80, F81]),
    entry!(Oldi, Aa, Rap, "OLDI Referred Activate Proposal Message",
           &[F3, F7, F13a, F14, F16a, F22Specific], &[F8a, F9, F15, F18, F80, F81]),
    entry!(Oldi, Aa, Rej, "OLDI Reject Message",
           &[F3, F7, F13a, F16a, F18], &[]),
    entry!(Oldi, Aa, Rev, "OLDI Revision Message",
           &[F3, F7, F13a, F14, F16a, F22Specific], &[F81]),
    entry!(Oldi, Aa, Rjc, "OLDI Reject Coordination Message",
           &[F3, F22Specific], &[F18]),
    entry!(Oldi, Aa, Roc, "OLDI Request Oceanic Clearance Message",
           &[F3, F7, F22, F13a, F14, F16a, F22Specific], &[F9, F15]),

    // ── OLDI titles, unit AX ─────────────────────────────────────────
    entry!(Oldi, Ax, Acp, "OLDI Advanced Coordination Procedure Message",
           &[F3], &[]),

    // ── OLDI titles, unit L ──────────────────────────────────────────
    entry!(Oldi, L, Abi, "OLDI Advanced Boundary Information",
           &[F3, F7, F13a, F14, F16a, F18Dof, F22Specific], &[F8a, F9, F15, F18, F80, F81]),
    entry!(Oldi, L, Cpl, "OLDI Current Flight Plan Message",
           &[F3, F7, F8, F9, F10, F13, F14, F15, F16a, F18], &[]),

    // ── OLDI titles, unit BB ─────────────────────────────────────────
    entry!(Oldi, Bb, Cdn, "OLDI Coordination Message",
           &[F3, F7, F13a, F16a, F22Specific], &[F15]),
    entry!(Oldi, Bb, Inf, "OLDI Information Message",
           &[F3, F7, F13a, F14, F16a, F18Dof, F22Specific], &[F9, F15, F18]),
    entry!(Oldi, Bb, Pac, "OLDI Preliminary Activation Message",
           &[F3, F7, F13, F16a, F22Specific], &[F8a, F9, F15, F18, F80, F81]),
    entry!(Oldi, Bb, Roc, "OLDI Request Oceanic Clearance Message",
           &[F3, F7, F22, F13a, F14, F16a, F22Specific], &[F9, F15]),

    // ── OLDI titles, unit CC ─────────────────────────────────────────
    entry!(Oldi, Cc, Pac, "OLDI Preliminary Activation Message",
           &[F3, F7, F14, F16a, F22Specific], &[F8a, F9, F15, F18, F80, F81]),
];

/// Look up the registry entry for a (type, unit, title) combination.
pub(crate) fn find_message(
    message_type: MessageType,
    adjacent_unit: AdjacentUnit,
    title: MessageTitle,
) -> Option<&'static MessageContent> {
    MESSAGE_REGISTRY.iter().find(|m| {
        m.message_type == message_type && m.adjacent_unit == adjacent_unit && m.title == title
    })
}
