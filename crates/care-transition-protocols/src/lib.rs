//! Care-Transition Protocols
//!
//! Static role/day task catalog for the progressive decompensated heart
//! failure follow-up protocol. The acute episode runs over six days; each
//! care-team role has a fixed set of active days and a checklist per day.
//!
//! Unlike the assessment engine this crate evaluates nothing: it is a lookup
//! table over verbatim protocol text, with typed keys so callers cannot ask
//! for a (role, day) pair the protocol does not define.

mod catalog;

pub use catalog::{PROTOCOL_DISCLAIMER, PROTOCOL_TITLE};

use serde::{Deserialize, Serialize};

/// A care-team role in the heart failure follow-up protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    TriageNurse,
    AdvancedCareParamedic,
    SchedulingCoordinator,
    CommunityHealthWorker,
    Crnp,
    Physician,
    NurseClinicalCareCoordinator,
}

impl Role {
    /// All roles, in protocol presentation order.
    pub const ALL: [Role; 7] = [
        Role::TriageNurse,
        Role::AdvancedCareParamedic,
        Role::SchedulingCoordinator,
        Role::CommunityHealthWorker,
        Role::Crnp,
        Role::Physician,
        Role::NurseClinicalCareCoordinator,
    ];

    /// Display label as it appears on the role selector.
    pub fn label(&self) -> &'static str {
        match self {
            Role::TriageNurse => "Triage Nurse",
            Role::AdvancedCareParamedic => "Advanced Care Paramedic",
            Role::SchedulingCoordinator => "Scheduling Coordinator",
            Role::CommunityHealthWorker => "Community Health Worker",
            Role::Crnp => "CRNP",
            Role::Physician => "Physician",
            Role::NurseClinicalCareCoordinator => "Nurse Clinical Care Coordinator",
        }
    }

    /// Parse a selector label back to its role.
    pub fn from_label(label: &str) -> Option<Self> {
        Role::ALL.into_iter().find(|role| role.label() == label)
    }

    /// The days on which this role has protocol tasks, in order.
    pub fn active_days(&self) -> &'static [ProtocolDay] {
        use ProtocolDay::*;
        match self {
            Role::TriageNurse => &[Day1, Day2],
            Role::AdvancedCareParamedic => &[Day1, Day2],
            Role::SchedulingCoordinator => &[Day1, Day6],
            Role::CommunityHealthWorker => &[Day1, Day2],
            Role::Crnp | Role::Physician => &[Day1, Day2, Day5],
            Role::NurseClinicalCareCoordinator => &[Day1, Day3, Day4, Day6],
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A day within the six-day acute episode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ProtocolDay {
    Day1,
    Day2,
    Day3,
    Day4,
    Day5,
    Day6,
}

impl ProtocolDay {
    pub const ALL: [ProtocolDay; 6] = [
        ProtocolDay::Day1,
        ProtocolDay::Day2,
        ProtocolDay::Day3,
        ProtocolDay::Day4,
        ProtocolDay::Day5,
        ProtocolDay::Day6,
    ];

    /// Day number, 1 through 6.
    pub fn number(&self) -> u8 {
        match self {
            ProtocolDay::Day1 => 1,
            ProtocolDay::Day2 => 2,
            ProtocolDay::Day3 => 3,
            ProtocolDay::Day4 => 4,
            ProtocolDay::Day5 => 5,
            ProtocolDay::Day6 => 6,
        }
    }

    pub fn from_number(number: u8) -> Option<Self> {
        ProtocolDay::ALL.into_iter().find(|day| day.number() == number)
    }
}

impl std::fmt::Display for ProtocolDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Day {}", self.number())
    }
}

/// Checklist text for one role on one day.
///
/// Returns `None` when the protocol assigns the role nothing that day. CRNP
/// and Physician deliberately share the same checklists.
pub fn checklist(role: Role, day: ProtocolDay) -> Option<&'static str> {
    catalog::task_text(role, day)
}

/// Section heading for one role on one day, matching the protocol document.
pub fn heading(role: Role, day: ProtocolDay) -> Option<String> {
    checklist(role, day)?;
    let prefix = match role {
        Role::Crnp | Role::Physician => "Physician / CRNP",
        Role::NurseClinicalCareCoordinator => "NCCC",
        other => other.label(),
    };
    let suffix = match (role, day) {
        (Role::Crnp | Role::Physician, ProtocolDay::Day2) => "(In-Person Visit Goals)",
        (Role::NurseClinicalCareCoordinator, ProtocolDay::Day3) => "(Phone Call)",
        (Role::NurseClinicalCareCoordinator, ProtocolDay::Day4) => "(In-Person Visit Goals)",
        (Role::NurseClinicalCareCoordinator, ProtocolDay::Day6) => "(Follow-Up Phone Call)",
        _ => "Responsibilities",
    };
    Some(format!("{} - {} {}", prefix, day, suffix))
}
