//! Clinical staging scales.
//!
//! Four independent calculators, each a pure mapping from a fixed set of
//! descriptive selections to a canonical score:
//! - [`PpsScore`]: Palliative Performance Scale (10–100, multiples of 10)
//! - [`NyhaClass`]: NYHA cardiac functional class (I–IV)
//! - [`MmrcGrade`]: mMRC dyspnea grade (0–4)
//! - [`FastStage`]: FAST dementia stage (1–7)
//!
//! Descriptions are matched exactly; an unmatched description leaves the
//! score unset, which downstream validation treats as incomplete data.

mod fast;
mod mmrc;
mod nyha;
mod pps;

pub use fast::*;
pub use mmrc::*;
pub use nyha::*;
pub use pps::*;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Scale construction errors (out-of-set direct selections).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScaleError {
    #[error("invalid PPS score {0}: must be a multiple of 10 in 10..=100")]
    InvalidPps(u8),

    #[error("invalid NYHA class {0}: must be in 1..=4")]
    InvalidNyha(u8),

    #[error("invalid mMRC grade {0}: must be in 0..=4")]
    InvalidMmrc(u8),

    #[error("invalid FAST stage {0}: must be in 1..=7")]
    InvalidFast(u8),
}

/// Which scale a validation message refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScaleKind {
    Pps,
    Nyha,
    Mmrc,
    Fast,
}

impl std::fmt::Display for ScaleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ScaleKind::Pps => "PPS",
            ScaleKind::Nyha => "NYHA",
            ScaleKind::Mmrc => "mMRC",
            ScaleKind::Fast => "FAST",
        };
        f.write_str(name)
    }
}

/// Resolved scale scores for one patient snapshot.
///
/// `None` means the selection was missing, unmatched, or left incomplete.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScaleScores {
    pub pps: Option<PpsScore>,
    pub nyha: Option<NyhaClass>,
    pub mmrc: Option<MmrcGrade>,
    pub fast: Option<FastStage>,
}

/// Scale input in one of the two evaluator variants.
///
/// The hospice assessment derives scores from descriptive selections; the
/// Level-3→4 assessment takes them as direct ordinals. Both resolve to the
/// same [`ScaleScores`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ScaleInput {
    /// Descriptive selections (hospice variant).
    Descriptive {
        ambulation: Ambulation,
        nyha_description: Option<String>,
        mmrc_description: Option<String>,
        fast_description: Option<String>,
    },
    /// Direct ordinal selections (Level-3→4 variant).
    Direct {
        pps: Option<u8>,
        nyha: Option<u8>,
        mmrc: Option<u8>,
        fast: Option<u8>,
    },
}

impl Default for ScaleInput {
    fn default() -> Self {
        ScaleInput::Direct {
            pps: None,
            nyha: None,
            mmrc: None,
            fast: None,
        }
    }
}

impl ScaleInput {
    /// Resolve the input to canonical scores.
    ///
    /// Unmatched descriptions and unanswered decision-tree branches resolve
    /// to `None`; out-of-set direct ordinals are rejected outright.
    pub fn resolve(&self) -> Result<ScaleScores, ScaleError> {
        match self {
            ScaleInput::Descriptive {
                ambulation,
                nyha_description,
                mmrc_description,
                fast_description,
            } => Ok(ScaleScores {
                pps: ambulation.resolve(),
                nyha: nyha_description
                    .as_deref()
                    .and_then(NyhaClass::from_description),
                mmrc: mmrc_description
                    .as_deref()
                    .and_then(MmrcGrade::from_description),
                fast: fast_description
                    .as_deref()
                    .and_then(FastStage::from_description),
            }),
            ScaleInput::Direct {
                pps,
                nyha,
                mmrc,
                fast,
            } => Ok(ScaleScores {
                pps: pps.map(PpsScore::new).transpose()?,
                nyha: nyha.map(NyhaClass::from_ordinal).transpose()?,
                mmrc: mmrc.map(MmrcGrade::from_grade).transpose()?,
                fast: fast.map(FastStage::from_stage).transpose()?,
            }),
        }
    }
}
