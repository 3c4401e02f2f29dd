//! FAST dementia staging.
//!
//! Only evaluated when dementia/stroke/neurological disease is among the
//! selected conditions.

use serde::{Deserialize, Serialize};

use super::ScaleError;

/// FAST stage 1 (normal adult) through 7 (end-stage).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FastStage {
    Stage1,
    Stage2,
    Stage3,
    Stage4,
    Stage5,
    Stage6,
    Stage7,
}

impl FastStage {
    pub const ALL: [FastStage; 7] = [
        FastStage::Stage1,
        FastStage::Stage2,
        FastStage::Stage3,
        FastStage::Stage4,
        FastStage::Stage5,
        FastStage::Stage6,
        FastStage::Stage7,
    ];

    /// The canonical description shown on the assessment form.
    pub fn description(&self) -> &'static str {
        match self {
            FastStage::Stage1 => "Normal adult with no functional decline",
            FastStage::Stage2 => "Subjective functional deficit",
            FastStage::Stage3 => "Objective functional deficit interfering with complex tasks",
            FastStage::Stage4 => {
                "Decreased ability to perform instrumental ADLs (e.g., finances, cooking, shopping)"
            }
            FastStage::Stage5 => "Requires assistance with choosing proper clothing",
            FastStage::Stage6 => "Requires assistance with dressing, bathing, or toileting",
            FastStage::Stage7 => "Incontinence, minimal to no speech, inability to walk",
        }
    }

    /// Exact match against the canonical description.
    pub fn from_description(text: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.description() == text)
    }

    /// Direct stage selection (Level-3→4 variant), 1–7.
    pub fn from_stage(stage: u8) -> Result<Self, ScaleError> {
        match stage {
            1 => Ok(FastStage::Stage1),
            2 => Ok(FastStage::Stage2),
            3 => Ok(FastStage::Stage3),
            4 => Ok(FastStage::Stage4),
            5 => Ok(FastStage::Stage5),
            6 => Ok(FastStage::Stage6),
            7 => Ok(FastStage::Stage7),
            other => Err(ScaleError::InvalidFast(other)),
        }
    }

    pub fn stage(&self) -> u8 {
        match self {
            FastStage::Stage1 => 1,
            FastStage::Stage2 => 2,
            FastStage::Stage3 => 3,
            FastStage::Stage4 => 4,
            FastStage::Stage5 => 5,
            FastStage::Stage6 => 6,
            FastStage::Stage7 => 7,
        }
    }
}

impl std::fmt::Display for FastStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FAST Stage {}", self.stage())
    }
}
