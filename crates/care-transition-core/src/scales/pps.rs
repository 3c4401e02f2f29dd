//! Palliative Performance Scale (PPS).
//!
//! A four-branch decision tree keyed by ambulation status. Each branch asks
//! up to two follow-up questions and resolves to one of ten discrete scores
//! (10, 20, ..., 100). Unanswered follow-ups leave the score unset; the
//! caller must treat that as incomplete data, never default it.

use serde::{Deserialize, Serialize};

use super::ScaleError;

/// A canonical PPS score: an integer in {10, 20, ..., 100}.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PpsScore(u8);

impl PpsScore {
    /// Construct a score from a direct selection, rejecting out-of-set values.
    pub fn new(value: u8) -> Result<Self, ScaleError> {
        if value >= 10 && value <= 100 && value % 10 == 0 {
            Ok(PpsScore(value))
        } else {
            Err(ScaleError::InvalidPps(value))
        }
    }

    /// The numeric score as a percentage (10–100).
    pub fn value(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for PpsScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Disease-status follow-up for fully ambulatory patients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiseaseStatus {
    /// Normal activity, no evidence of disease (PPS 100)
    NormalNoDisease,
    /// Normal activity, some evidence of disease (PPS 90)
    NormalSomeDisease,
    /// Normal activity with effort, some evidence of disease (PPS 80)
    NormalWithEffort,
}

impl DiseaseStatus {
    pub const ALL: [DiseaseStatus; 3] = [
        DiseaseStatus::NormalNoDisease,
        DiseaseStatus::NormalSomeDisease,
        DiseaseStatus::NormalWithEffort,
    ];

    /// The selection text shown on the assessment form.
    pub fn description(&self) -> &'static str {
        match self {
            DiseaseStatus::NormalNoDisease => "Normal activity, no evidence of disease",
            DiseaseStatus::NormalSomeDisease => "Normal activity, some evidence of disease",
            DiseaseStatus::NormalWithEffort => {
                "Normal activity with effort, some evidence of disease"
            }
        }
    }

    /// Exact match against the form selection text.
    pub fn from_description(text: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.description() == text)
    }
}

/// Intake-level follow-up for totally bed-bound patients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntakeLevel {
    /// Normal or reduced intake (PPS 30)
    NormalOrReduced,
    /// Minimal to sips (PPS 20)
    MinimalToSips,
    /// Mouth care only (PPS 10)
    MouthCareOnly,
}

impl IntakeLevel {
    pub const ALL: [IntakeLevel; 3] = [
        IntakeLevel::NormalOrReduced,
        IntakeLevel::MinimalToSips,
        IntakeLevel::MouthCareOnly,
    ];

    /// The selection text shown on the assessment form.
    pub fn description(&self) -> &'static str {
        match self {
            IntakeLevel::NormalOrReduced => "Normal or reduced",
            IntakeLevel::MinimalToSips => "Minimal to sips",
            IntakeLevel::MouthCareOnly => "Mouth care only",
        }
    }

    /// Exact match against the form selection text.
    pub fn from_description(text: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.description() == text)
    }
}

/// Ambulation status with its branch-specific follow-up answers.
///
/// Follow-up answers are `Option` because the form allows submitting a
/// branch with its questions still blank; that leaves the score unresolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Ambulation {
    /// Full ambulation: resolves via a 3-way disease-status selection.
    Full { disease_status: Option<DiseaseStatus> },
    /// Reduced ambulation: two yes/no follow-ups.
    ///
    /// "Needs occasional assistance with hobbies/housework" takes precedence
    /// (PPS 60) over "unable to do normal work" (PPS 70).
    Reduced {
        unable_normal_work: Option<bool>,
        needs_hobby_assistance: Option<bool>,
    },
    /// Mainly sits/lies: two yes/no follow-ups.
    ///
    /// "Mainly assisted in self-care" takes precedence (PPS 40) over
    /// "needs considerable assistance" (PPS 50).
    MainlySitLie {
        needs_considerable_assistance: Option<bool>,
        mainly_assisted: Option<bool>,
    },
    /// Totally bed bound: resolves via a 3-way intake-level selection.
    TotallyBedBound { intake: Option<IntakeLevel> },
}

impl Ambulation {
    /// Resolve the decision tree to a canonical score.
    ///
    /// Returns `None` when the branch's follow-up questions are unanswered
    /// or, for the yes/no branches, when neither answer selects a score.
    pub fn resolve(&self) -> Option<PpsScore> {
        let value = match self {
            Ambulation::Full { disease_status } => match disease_status.as_ref()? {
                DiseaseStatus::NormalNoDisease => 100,
                DiseaseStatus::NormalSomeDisease => 90,
                DiseaseStatus::NormalWithEffort => 80,
            },
            Ambulation::Reduced {
                unable_normal_work,
                needs_hobby_assistance,
            } => {
                if *needs_hobby_assistance == Some(true) {
                    60
                } else if *unable_normal_work == Some(true) {
                    70
                } else {
                    return None;
                }
            }
            Ambulation::MainlySitLie {
                needs_considerable_assistance,
                mainly_assisted,
            } => {
                if *mainly_assisted == Some(true) {
                    40
                } else if *needs_considerable_assistance == Some(true) {
                    50
                } else {
                    return None;
                }
            }
            Ambulation::TotallyBedBound { intake } => match intake.as_ref()? {
                IntakeLevel::NormalOrReduced => 30,
                IntakeLevel::MinimalToSips => 20,
                IntakeLevel::MouthCareOnly => 10,
            },
        };
        // Branch values are canonical by construction.
        Some(PpsScore(value))
    }
}
