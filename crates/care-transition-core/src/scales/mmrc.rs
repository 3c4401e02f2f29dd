//! mMRC dyspnea grade.
//!
//! Only evaluated when pulmonary disease is among the selected conditions.

use serde::{Deserialize, Serialize};

use super::ScaleError;

/// mMRC grade 0 (none) through 4 (severe).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MmrcGrade {
    Grade0,
    Grade1,
    Grade2,
    Grade3,
    Grade4,
}

impl MmrcGrade {
    pub const ALL: [MmrcGrade; 5] = [
        MmrcGrade::Grade0,
        MmrcGrade::Grade1,
        MmrcGrade::Grade2,
        MmrcGrade::Grade3,
        MmrcGrade::Grade4,
    ];

    /// The canonical description shown on the assessment form.
    pub fn description(&self) -> &'static str {
        match self {
            MmrcGrade::Grade0 => "Dyspnea only with strenuous exercise",
            MmrcGrade::Grade1 => "Dyspnea when hurrying or walking up a slight hill",
            MmrcGrade::Grade2 => {
                "Walks slower than people of same age due to dyspnea or has to stop for breath \
                 when walking at own pace"
            }
            MmrcGrade::Grade3 => {
                "Stops for breath after walking 100 meters or after a few minutes on level ground"
            }
            MmrcGrade::Grade4 => "Too dyspneic to leave house or breathless when dressing",
        }
    }

    /// Exact match against the canonical description.
    pub fn from_description(text: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.description() == text)
    }

    /// Direct grade selection (Level-3→4 variant), 0–4.
    pub fn from_grade(grade: u8) -> Result<Self, ScaleError> {
        match grade {
            0 => Ok(MmrcGrade::Grade0),
            1 => Ok(MmrcGrade::Grade1),
            2 => Ok(MmrcGrade::Grade2),
            3 => Ok(MmrcGrade::Grade3),
            4 => Ok(MmrcGrade::Grade4),
            other => Err(ScaleError::InvalidMmrc(other)),
        }
    }

    pub fn grade(&self) -> u8 {
        match self {
            MmrcGrade::Grade0 => 0,
            MmrcGrade::Grade1 => 1,
            MmrcGrade::Grade2 => 2,
            MmrcGrade::Grade3 => 3,
            MmrcGrade::Grade4 => 4,
        }
    }
}

impl std::fmt::Display for MmrcGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "mMRC Grade {}", self.grade())
    }
}
