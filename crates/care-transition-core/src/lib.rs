//! Care-Transition Core Library
//!
//! Rule engine for clinical care-transition assessments (hospice referral,
//! Level 3 → Level 4 transition).
//!
//! # Architecture
//!
//! ```text
//! Form input → PatientSnapshot
//!                   │
//!            sanitization (clear fields of unselected conditions)
//!                   │
//!            Scale resolution (PPS / NYHA / mMRC / FAST)
//!                   │                         │
//!            incomplete? ──► validation error │
//!                                             ▼
//!                                     Derived metrics
//!                            (weight change, EF, eGFR parsing)
//!                                             │
//!                      ┌──────────────────────┼──────────────────────┐
//!                      ▼                      ▼                      ▼
//!                  Summary            8 forced rules          Advisory fallback
//!                  composer          (OR'd, all collect)       (flag count → tier)
//!                      └──────────────────────┼──────────────────────┘
//!                                             ▼
//!                                  Assessment (verdict + justifications)
//! ```
//!
//! # Core Principle
//!
//! **Evaluation is pure and fail-open on malformed numerics.** Unparseable
//! ejection fraction or eGFR text degrades to "rule does not apply"; only an
//! incomplete scale selection is a hard validation error.
//!
//! # Modules
//!
//! - [`models`]: Domain types (PatientSnapshot, Condition, RuleOutcome, etc.)
//! - [`scales`]: The four clinical scale calculators
//! - [`metrics`]: Derived weight/laboratory metrics
//! - [`engine`]: The parameterized recommendation engine

pub mod engine;
pub mod metrics;
pub mod models;
pub mod scales;

// Re-export commonly used types
pub use engine::{AssessError, AssessResult, AssessmentProfile, Assessor, RuleThresholds, ScaleMode};
pub use metrics::DerivedMetrics;
pub use models::{
    AdvisoryTier, Assessment, CancerComplication, Condition, DementiaComplication, LabPanel,
    LiverComplication, PatientSnapshot, RuleOutcome,
};
pub use scales::{
    Ambulation, DiseaseStatus, FastStage, IntakeLevel, MmrcGrade, NyhaClass, PpsScore, ScaleError,
    ScaleInput, ScaleKind, ScaleScores,
};

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use std::sync::Arc;

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum CareTransitionError {
    #[error("Incomplete data: {0}")]
    IncompleteData(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<AssessError> for CareTransitionError {
    fn from(e: AssessError) -> Self {
        match e {
            AssessError::IncompleteScale(_) => CareTransitionError::IncompleteData(e.to_string()),
            AssessError::Scale(_) => CareTransitionError::InvalidInput(e.to_string()),
        }
    }
}

impl From<ScaleError> for CareTransitionError {
    fn from(e: ScaleError) -> Self {
        CareTransitionError::InvalidInput(e.to_string())
    }
}

// =========================================================================
// Factory Functions (exported to FFI)
// =========================================================================

/// Assessor configured for the hospice referral assessment.
#[uniffi::export]
pub fn new_hospice_assessor() -> Arc<CareAssessor> {
    Arc::new(CareAssessor {
        assessor: Assessor::hospice(),
    })
}

/// Assessor configured for the Level 3 → Level 4 transition assessment.
#[uniffi::export]
pub fn new_level_four_assessor() -> Arc<CareAssessor> {
    Arc::new(CareAssessor {
        assessor: Assessor::level_four(),
    })
}

// =========================================================================
// Main API Object
// =========================================================================

/// Assessment engine wrapper for FFI.
#[derive(uniffi::Object)]
pub struct CareAssessor {
    assessor: Assessor,
}

#[uniffi::export]
impl CareAssessor {
    /// Name of the configured profile.
    pub fn profile_name(&self) -> String {
        self.assessor.profile().name.clone()
    }

    /// Evaluate one patient snapshot.
    pub fn evaluate(
        &self,
        snapshot: FfiPatientSnapshot,
    ) -> Result<FfiAssessment, CareTransitionError> {
        let snapshot: PatientSnapshot = snapshot.try_into()?;
        let assessment = self.assessor.evaluate(&snapshot)?;
        Ok(assessment.into())
    }
}

// =========================================================================
// Descriptive Scale Resolution (exported to FFI)
// =========================================================================

/// Resolve a PPS decision-tree selection to a score.
///
/// `ambulation` is one of "Full", "Reduced", "Mainly Sit/Lie",
/// "Totally Bed Bound"; the remaining arguments are that branch's follow-up
/// answers. Returns `None` while the branch is unresolved.
#[uniffi::export]
#[allow(clippy::too_many_arguments)]
pub fn resolve_pps_selection(
    ambulation: String,
    disease_status: Option<String>,
    unable_normal_work: Option<bool>,
    needs_hobby_assistance: Option<bool>,
    needs_considerable_assistance: Option<bool>,
    mainly_assisted: Option<bool>,
    intake: Option<String>,
) -> Result<Option<u8>, CareTransitionError> {
    let ambulation = match ambulation.as_str() {
        "Full" => Ambulation::Full {
            disease_status: disease_status
                .as_deref()
                .and_then(DiseaseStatus::from_description),
        },
        "Reduced" => Ambulation::Reduced {
            unable_normal_work,
            needs_hobby_assistance,
        },
        "Mainly Sit/Lie" => Ambulation::MainlySitLie {
            needs_considerable_assistance,
            mainly_assisted,
        },
        "Totally Bed Bound" => Ambulation::TotallyBedBound {
            intake: intake.as_deref().and_then(IntakeLevel::from_description),
        },
        other => {
            return Err(CareTransitionError::InvalidInput(format!(
                "unknown ambulation status: {}",
                other
            )))
        }
    };
    Ok(ambulation.resolve().map(|score| score.value()))
}

/// Resolve a canonical NYHA description to its ordinal (1–4).
#[uniffi::export]
pub fn resolve_nyha_description(text: String) -> Option<u8> {
    NyhaClass::from_description(&text).map(|c| c.ordinal())
}

/// Resolve a canonical mMRC description to its grade (0–4).
#[uniffi::export]
pub fn resolve_mmrc_description(text: String) -> Option<u8> {
    MmrcGrade::from_description(&text).map(|g| g.grade())
}

/// Resolve a canonical FAST description to its stage (1–7).
#[uniffi::export]
pub fn resolve_fast_description(text: String) -> Option<u8> {
    FastStage::from_description(&text).map(|s| s.stage())
}

// =========================================================================
// FFI Types
// =========================================================================

/// FFI-safe patient snapshot.
///
/// Conditions and complication flags cross the boundary as their form
/// labels; scales are direct ordinals (use the `resolve_*` helpers to map
/// descriptive selections first).
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiPatientSnapshot {
    pub conditions: Vec<String>,
    pub ejection_fraction: Option<String>,
    pub oxygen_dependent: bool,
    pub on_dialysis: bool,
    pub cancer_complications: Vec<String>,
    pub liver_complications: Vec<String>,
    pub dementia_complications: Vec<String>,
    pub cd4_count: Option<u32>,
    pub viral_load: Option<u64>,
    pub pps: Option<u8>,
    pub nyha: Option<u8>,
    pub mmrc: Option<u8>,
    pub fast: Option<u8>,
    pub current_weight_kg: f64,
    pub prior_weight_kg: f64,
    pub inr: Option<f64>,
    pub albumin: Option<f64>,
    pub egfr: Option<String>,
}

impl TryFrom<FfiPatientSnapshot> for PatientSnapshot {
    type Error = CareTransitionError;

    fn try_from(ffi: FfiPatientSnapshot) -> Result<Self, Self::Error> {
        if ffi.current_weight_kg < 0.0 || ffi.prior_weight_kg < 0.0 {
            return Err(CareTransitionError::InvalidInput(
                "weights must be non-negative".to_string(),
            ));
        }
        if ffi.inr.is_some_and(|v| v < 0.0) || ffi.albumin.is_some_and(|v| v < 0.0) {
            return Err(CareTransitionError::InvalidInput(
                "laboratory values must be non-negative".to_string(),
            ));
        }

        let mut snapshot = PatientSnapshot::new(ScaleInput::Direct {
            pps: ffi.pps,
            nyha: ffi.nyha,
            mmrc: ffi.mmrc,
            fast: ffi.fast,
        });
        for label in &ffi.conditions {
            let condition = Condition::from_label(label).ok_or_else(|| {
                CareTransitionError::InvalidInput(format!("unknown condition: {}", label))
            })?;
            snapshot.conditions.insert(condition);
        }
        snapshot.cancer_complications = parse_labels(
            &ffi.cancer_complications,
            CancerComplication::from_label,
            "cancer complication",
        )?;
        snapshot.liver_complications = parse_labels(
            &ffi.liver_complications,
            LiverComplication::from_label,
            "liver complication",
        )?;
        snapshot.dementia_complications = parse_labels(
            &ffi.dementia_complications,
            DementiaComplication::from_label,
            "dementia complication",
        )?;
        snapshot.ejection_fraction = ffi.ejection_fraction;
        snapshot.oxygen_dependent = ffi.oxygen_dependent;
        snapshot.on_dialysis = ffi.on_dialysis;
        snapshot.cd4_count = ffi.cd4_count;
        snapshot.viral_load = ffi.viral_load;
        snapshot.labs = LabPanel {
            current_weight_kg: ffi.current_weight_kg,
            prior_weight_kg: ffi.prior_weight_kg,
            inr: ffi.inr,
            albumin: ffi.albumin,
            egfr: ffi.egfr,
        };
        Ok(snapshot)
    }
}

fn parse_labels<T>(
    labels: &[String],
    from_label: fn(&str) -> Option<T>,
    kind: &str,
) -> Result<Vec<T>, CareTransitionError> {
    labels
        .iter()
        .map(|label| {
            from_label(label).ok_or_else(|| {
                CareTransitionError::InvalidInput(format!("unknown {}: {}", kind, label))
            })
        })
        .collect()
}

/// FFI-safe assessment result.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiAssessment {
    pub assessment_id: String,
    pub evaluated_at: String,
    pub profile: String,
    pub forced: bool,
    pub justifications: Vec<String>,
    pub summary_lines: Vec<String>,
    pub tier: String,
    pub flag_count: u32,
    pub verdict: String,
}

impl From<Assessment> for FfiAssessment {
    fn from(assessment: Assessment) -> Self {
        Self {
            assessment_id: assessment.assessment_id,
            evaluated_at: assessment.evaluated_at,
            profile: assessment.profile,
            forced: assessment.outcome.forced,
            justifications: assessment.outcome.justifications,
            summary_lines: assessment.outcome.summary_lines,
            tier: assessment.outcome.tier.to_string(),
            flag_count: assessment.outcome.flag_count,
            verdict: assessment.verdict,
        }
    }
}
