//! Per-assessment configuration.
//!
//! The hospice and Level-3→4 evaluators share one engine; a profile carries
//! the threshold constants, the expected scale-input variant, and the verdict
//! wording that differ between them.

use serde::{Deserialize, Serialize};

/// Which scale-input variant the form surface presents for this profile.
///
/// Metadata for the form surface only. The engine resolves either
/// [`ScaleInput`](crate::scales::ScaleInput) variant to the same canonical
/// scores, so it never rejects a mismatched variant; consumers use this to
/// decide which questions to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScaleMode {
    /// Scales derived from descriptive selections (hospice assessment).
    Descriptive,
    /// Scales taken as direct ordinal selections (Level-3→4 assessment).
    DirectOrdinal,
}

/// Threshold constants for the forced-transition rules and the advisory
/// fallback.
///
/// The forced rules and the fallback deliberately use different albumin and
/// PPS bands (severe vs. moderate clinical tiering); both are retained as
/// separate fields and must not be collapsed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RuleThresholds {
    /// Rule 1 / rule 8: PPS at or below this forces when paired criteria hold.
    pub forced_pps_max: u8,
    /// Rule 1 / fallback: weight loss at or above this percentage flags.
    pub weight_loss_pct_min: f64,
    /// Rule 1 (strict <) and rule 6 (≤): severe hypoalbuminemia bound.
    pub albumin_severe_max: f64,
    /// Rule 2: ejection fraction at or below this forces.
    pub ef_max: f64,
    /// Rule 4: eGFR at or below this forces when not on dialysis.
    pub egfr_max: f64,
    /// Rule 5: cancer with PPS at or below this forces.
    pub cancer_pps_max: u8,
    /// Rule 6: INR at or above this contributes to decompensation.
    pub inr_min: f64,
    /// Rule 8: CD4 at or below this contributes.
    pub cd4_max: u32,
    /// Fallback: PPS at or below this counts one flag (looser than rule 1).
    pub flag_pps_max: u8,
    /// Fallback: albumin strictly below this counts one flag (moderate band).
    pub flag_albumin_max: f64,
    /// Fallback: INR strictly above this counts one flag.
    pub flag_inr_min: f64,
    /// Flag count at or above this yields a strong advisory.
    pub strong_flag_min: u32,
    /// Flag count at or above this (but below strong) yields a partial advisory.
    pub partial_flag_min: u32,
}

impl Default for RuleThresholds {
    fn default() -> Self {
        RuleThresholds {
            forced_pps_max: 50,
            weight_loss_pct_min: 10.0,
            albumin_severe_max: 2.5,
            ef_max: 20.0,
            egfr_max: 15.0,
            cancer_pps_max: 70,
            inr_min: 1.5,
            cd4_max: 200,
            flag_pps_max: 40,
            flag_albumin_max: 3.0,
            flag_inr_min: 1.5,
            strong_flag_min: 4,
            partial_flag_min: 2,
        }
    }
}

/// Verdict wording for the four possible outcomes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerdictMessages {
    pub forced: String,
    pub strong: String,
    pub partial: String,
    pub none_met: String,
}

/// Full configuration for one evaluator variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentProfile {
    /// Short profile name recorded on each assessment.
    pub name: String,
    /// Scale-input variant the form surface should present; not enforced
    /// during evaluation.
    pub scale_mode: ScaleMode,
    pub thresholds: RuleThresholds,
    pub verdicts: VerdictMessages,
}

impl AssessmentProfile {
    /// Hospice clinical eligibility assessment.
    pub fn hospice() -> Self {
        AssessmentProfile {
            name: "hospice-referral".into(),
            scale_mode: ScaleMode::Descriptive,
            thresholds: RuleThresholds::default(),
            verdicts: VerdictMessages {
                forced: "A respectful way to begin an end-of-life conversation is to ask \
                         permission to discuss future care preferences, emphasizing that the \
                         goal is to ensure the patient's values and wishes guide their care."
                    .into(),
                strong: "Patient meets multiple criteria — a respectful way to begin an \
                         end-of-life conversation is to ask permission to discuss future care \
                         preferences, emphasizing that the goal is to ensure the patient's \
                         values and wishes guide their care."
                    .into(),
                partial: "Partial criteria met — monitor closely and reassess periodically."
                    .into(),
                none_met: "Based on the available information, the patient does not meet the \
                           clinical criteria for hospice care."
                    .into(),
            },
        }
    }

    /// Level 3 → Level 4 care transition assessment.
    pub fn level_four() -> Self {
        AssessmentProfile {
            name: "level-3-to-4".into(),
            scale_mode: ScaleMode::DirectOrdinal,
            thresholds: RuleThresholds::default(),
            verdicts: VerdictMessages {
                forced: "High-risk criteria met — recommend transitioning to Level 4 care."
                    .into(),
                strong: "Patient meets multiple criteria — consider transitioning to Level 4 \
                         care."
                    .into(),
                partial: "Partial criteria met — monitor closely and reassess periodically."
                    .into(),
                none_met: "Patient is stable — continue Level 3 care.".into(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds_preserve_both_bands() {
        let t = RuleThresholds::default();
        // Forced and fallback bands are intentionally distinct.
        assert_eq!(t.forced_pps_max, 50);
        assert_eq!(t.flag_pps_max, 40);
        assert_eq!(t.albumin_severe_max, 2.5);
        assert_eq!(t.flag_albumin_max, 3.0);
    }

    #[test]
    fn test_profiles_differ_only_in_wording_and_mode() {
        let hospice = AssessmentProfile::hospice();
        let level = AssessmentProfile::level_four();
        assert_eq!(hospice.thresholds, level.thresholds);
        assert_ne!(hospice.scale_mode, level.scale_mode);
        assert_ne!(hospice.verdicts.forced, level.verdicts.forced);
    }
}
