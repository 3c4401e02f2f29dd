//! Recommendation engine.
//!
//! One parameterized engine serves both evaluator variants (hospice
//! referral, Level-3→4 transition). Pipeline per evaluation:
//! snapshot sanitization → scale resolution + completeness validation →
//! derived metrics → summary composition → forced rules → advisory fallback.
//!
//! Evaluation is pure: one snapshot in, one assessment out, no shared state.

mod config;
mod rules;
mod summary;

pub use config::*;

use thiserror::Error;
use tracing::debug;

use crate::metrics::DerivedMetrics;
use crate::models::{Assessment, Condition, PatientSnapshot, RuleOutcome};
use crate::scales::{FastStage, MmrcGrade, NyhaClass, PpsScore, ScaleError, ScaleKind};

/// Engine errors.
///
/// Note the asymmetry with numeric parse failures: an incomplete scale
/// selection fails loud here, while unparseable ejection fraction / eGFR
/// text degrades to "rule does not apply" inside [`DerivedMetrics`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AssessError {
    #[error("required scale selection is incomplete: {0}")]
    IncompleteScale(ScaleKind),

    #[error(transparent)]
    Scale(#[from] ScaleError),
}

pub type AssessResult<T> = Result<T, AssessError>;

/// Validated inputs shared by the rule evaluators and the summary composer.
pub(crate) struct RuleContext<'a> {
    pub snapshot: &'a PatientSnapshot,
    pub pps: PpsScore,
    pub nyha: Option<NyhaClass>,
    pub mmrc: Option<MmrcGrade>,
    pub fast: Option<FastStage>,
    pub metrics: &'a DerivedMetrics,
}

/// The assessment engine for one evaluator variant.
pub struct Assessor {
    profile: AssessmentProfile,
}

impl Assessor {
    /// Engine configured for the hospice referral assessment.
    pub fn hospice() -> Self {
        Self::new(AssessmentProfile::hospice())
    }

    /// Engine configured for the Level 3 → Level 4 transition assessment.
    pub fn level_four() -> Self {
        Self::new(AssessmentProfile::level_four())
    }

    /// Engine with a custom profile.
    pub fn new(profile: AssessmentProfile) -> Self {
        Assessor { profile }
    }

    pub fn profile(&self) -> &AssessmentProfile {
        &self.profile
    }

    /// Evaluate one patient snapshot.
    ///
    /// Fails with [`AssessError::IncompleteScale`] when PPS is unresolved,
    /// or when a condition-gated scale (NYHA for heart failure, mMRC for
    /// pulmonary disease, FAST for dementia/stroke) is required but unset.
    pub fn evaluate(&self, snapshot: &PatientSnapshot) -> AssessResult<Assessment> {
        let snapshot = snapshot.sanitized();
        let scores = snapshot.scales.resolve()?;

        let pps = scores
            .pps
            .ok_or(AssessError::IncompleteScale(ScaleKind::Pps))?;
        let nyha = gated(
            snapshot.has(Condition::HeartFailure),
            scores.nyha,
            ScaleKind::Nyha,
        )?;
        let mmrc = gated(
            snapshot.has(Condition::PulmonaryDisease),
            scores.mmrc,
            ScaleKind::Mmrc,
        )?;
        let fast = gated(
            snapshot.has(Condition::DementiaOrStroke),
            scores.fast,
            ScaleKind::Fast,
        )?;

        let metrics = DerivedMetrics::compute(&snapshot);
        let ctx = RuleContext {
            snapshot: &snapshot,
            pps,
            nyha,
            mmrc,
            fast,
            metrics: &metrics,
        };

        let thresholds = &self.profile.thresholds;
        let summary_lines = summary::compose(&ctx, thresholds);
        let (forced, justifications) = rules::evaluate_forced(&ctx, thresholds);
        let flag_count = rules::advisory_flag_count(&ctx, thresholds);
        let tier = rules::tier_for(flag_count, thresholds);

        if forced {
            debug!(
                profile = %self.profile.name,
                rules_fired = justifications.len(),
                "forced transition recommended"
            );
        } else {
            debug!(profile = %self.profile.name, flag_count, tier = %tier, "advisory tier computed");
        }

        let verdicts = &self.profile.verdicts;
        let verdict = if forced {
            format!("🔴 {}", verdicts.forced)
        } else {
            match tier {
                crate::models::AdvisoryTier::Strong => format!("🟠 {}", verdicts.strong),
                crate::models::AdvisoryTier::Partial => format!("🔵 {}", verdicts.partial),
                crate::models::AdvisoryTier::None => format!("🟢 {}", verdicts.none_met),
            }
        };

        Ok(Assessment {
            assessment_id: uuid::Uuid::new_v4().to_string(),
            evaluated_at: chrono::Utc::now().to_rfc3339(),
            profile: self.profile.name.clone(),
            outcome: RuleOutcome {
                forced,
                justifications,
                summary_lines,
                tier,
                flag_count,
            },
            verdict,
        })
    }
}

/// Require a score when its governing condition is selected; discard it
/// otherwise so an ungated value can never influence rule evaluation.
fn gated<T>(selected: bool, score: Option<T>, kind: ScaleKind) -> AssessResult<Option<T>> {
    match (selected, score) {
        (true, None) => Err(AssessError::IncompleteScale(kind)),
        (true, some) => Ok(some),
        (false, _) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        AdvisoryTier, CancerComplication, DementiaComplication, LabPanel, LiverComplication,
    };
    use crate::scales::Ambulation;
    use crate::scales::ScaleInput;

    fn direct_scales(pps: u8) -> ScaleInput {
        ScaleInput::Direct {
            pps: Some(pps),
            nyha: None,
            mmrc: None,
            fast: None,
        }
    }

    fn snapshot(pps: u8) -> PatientSnapshot {
        PatientSnapshot::new(direct_scales(pps))
    }

    #[test]
    fn test_missing_pps_fails_loud() {
        let empty = PatientSnapshot::default();
        let result = Assessor::level_four().evaluate(&empty);
        assert_eq!(result, Err(AssessError::IncompleteScale(ScaleKind::Pps)));
    }

    #[test]
    fn test_gated_scale_required_when_condition_selected() {
        let mut s = snapshot(80);
        s.conditions.insert(Condition::HeartFailure);
        let result = Assessor::level_four().evaluate(&s);
        assert_eq!(result, Err(AssessError::IncompleteScale(ScaleKind::Nyha)));
    }

    #[test]
    fn test_ungated_scale_is_discarded() {
        // NYHA IV entered but heart failure not selected: the score must not
        // reach rule 2 or the fallback count.
        let mut s = snapshot(80);
        s.scales = ScaleInput::Direct {
            pps: Some(80),
            nyha: Some(4),
            mmrc: None,
            fast: None,
        };
        let assessment = Assessor::level_four().evaluate(&s).unwrap();
        assert!(!assessment.outcome.forced);
        assert_eq!(assessment.outcome.flag_count, 0);
        assert_eq!(assessment.outcome.tier, AdvisoryTier::None);
    }

    #[test]
    fn test_rule_1_weight_loss_branch() {
        let mut s = snapshot(50);
        s.labs = LabPanel {
            current_weight_kg: 60.0,
            prior_weight_kg: 70.0,
            ..Default::default()
        };
        let assessment = Assessor::hospice().evaluate(&s).unwrap();
        assert!(assessment.outcome.forced);
        assert!(assessment.outcome.justifications[0].contains("weight loss"));
    }

    #[test]
    fn test_rule_1_albumin_band_is_severe_only() {
        // Albumin 2.7 is below the moderate band but not the severe one:
        // rule 1 must not force, the fallback must still count it.
        let mut s = snapshot(40);
        s.labs.albumin = Some(2.7);
        let assessment = Assessor::hospice().evaluate(&s).unwrap();
        assert!(!assessment.outcome.forced);
        // PPS ≤ 40 and albumin < 3.0
        assert_eq!(assessment.outcome.flag_count, 2);
        assert_eq!(assessment.outcome.tier, AdvisoryTier::Partial);
    }

    #[test]
    fn test_rule_2_nyha_and_ef_justify_independently() {
        let mut s = snapshot(80);
        s.conditions.insert(Condition::HeartFailure);
        s.scales = ScaleInput::Direct {
            pps: Some(80),
            nyha: Some(4),
            mmrc: None,
            fast: None,
        };
        s.ejection_fraction = Some("18".into());
        let assessment = Assessor::level_four().evaluate(&s).unwrap();
        assert!(assessment.outcome.forced);
        assert_eq!(assessment.outcome.justifications.len(), 2);
        assert!(assessment.outcome.justifications[0].contains("NYHA Class IV"));
        assert!(assessment.outcome.justifications[1].contains("EF"));
    }

    #[test]
    fn test_rule_2_unparseable_ef_does_not_force() {
        let mut s = snapshot(80);
        s.conditions.insert(Condition::HeartFailure);
        s.scales = ScaleInput::Direct {
            pps: Some(80),
            nyha: Some(2),
            mmrc: None,
            fast: None,
        };
        s.ejection_fraction = Some("abnormal text".into());
        let assessment = Assessor::level_four().evaluate(&s).unwrap();
        assert!(!assessment.outcome.forced);
    }

    #[test]
    fn test_rule_3_requires_oxygen_dependence() {
        let mut s = snapshot(80);
        s.conditions.insert(Condition::PulmonaryDisease);
        s.scales = ScaleInput::Direct {
            pps: Some(80),
            nyha: None,
            mmrc: Some(4),
            fast: None,
        };
        let assessor = Assessor::level_four();

        let without_oxygen = assessor.evaluate(&s).unwrap();
        assert!(!without_oxygen.outcome.forced);

        s.oxygen_dependent = true;
        let with_oxygen = assessor.evaluate(&s).unwrap();
        assert!(with_oxygen.outcome.forced);
        assert!(with_oxygen.outcome.justifications[0].contains("oxygen dependent"));
    }

    #[test]
    fn test_rule_4_dialysis_suppresses() {
        let mut s = snapshot(80);
        s.conditions.insert(Condition::Ckd);
        s.labs.egfr = Some("12".into());
        let assessor = Assessor::level_four();

        let not_dialyzed = assessor.evaluate(&s).unwrap();
        assert!(not_dialyzed.outcome.forced);
        assert!(not_dialyzed.outcome.justifications[0].contains("eGFR ≤ 15"));

        s.on_dialysis = true;
        let dialyzed = assessor.evaluate(&s).unwrap();
        assert!(!dialyzed.outcome.forced);
    }

    #[test]
    fn test_rule_5_pps_or_complications() {
        let mut s = snapshot(70);
        s.conditions.insert(Condition::Cancer);
        let assessment = Assessor::level_four().evaluate(&s).unwrap();
        assert!(assessment.outcome.forced);
        assert!(assessment.outcome.justifications[0].contains("PPS = 70%"));

        let mut s = snapshot(80);
        s.conditions.insert(Condition::Cancer);
        s.cancer_complications = vec![CancerComplication::PleuralEffusion];
        let assessment = Assessor::level_four().evaluate(&s).unwrap();
        assert!(assessment.outcome.forced);
        assert!(assessment.outcome.justifications[0].contains("Pleural effusion"));

        let mut s = snapshot(80);
        s.conditions.insert(Condition::Cancer);
        let assessment = Assessor::level_four().evaluate(&s).unwrap();
        assert!(!assessment.outcome.forced);
    }

    #[test]
    fn test_rule_6_boundary_values() {
        let mut s = snapshot(80);
        s.conditions.insert(Condition::LiverCirrhosis);
        s.liver_complications = vec![LiverComplication::Ascites];
        // INR exactly at 1.5 (≥) and albumin exactly at 2.5 (≤) both fire.
        s.labs.inr = Some(1.5);
        s.labs.albumin = Some(2.5);
        let assessment = Assessor::level_four().evaluate(&s).unwrap();
        assert!(assessment.outcome.forced);
        assert!(assessment.outcome.justifications[0].contains("Decompensated liver cirrhosis"));
    }

    #[test]
    fn test_rule_6_requires_complications() {
        let mut s = snapshot(80);
        s.conditions.insert(Condition::LiverCirrhosis);
        s.labs.inr = Some(2.0);
        s.labs.albumin = Some(2.0);
        let assessment = Assessor::level_four().evaluate(&s).unwrap();
        assert!(!assessment.outcome.forced);
    }

    #[test]
    fn test_rule_7_requires_stage_7_and_complications() {
        let mut s = snapshot(80);
        s.conditions.insert(Condition::DementiaOrStroke);
        s.scales = ScaleInput::Direct {
            pps: Some(80),
            nyha: None,
            mmrc: None,
            fast: Some(7),
        };
        let assessor = Assessor::level_four();

        let without_flags = assessor.evaluate(&s).unwrap();
        assert!(!without_flags.outcome.forced);

        s.dementia_complications = vec![DementiaComplication::AspirationPneumonia];
        let with_flags = assessor.evaluate(&s).unwrap();
        assert!(with_flags.outcome.forced);
    }

    #[test]
    fn test_rule_8_cd4_and_pps() {
        let mut s = snapshot(50);
        s.conditions.insert(Condition::Hiv);
        s.cd4_count = Some(200);
        let assessment = Assessor::hospice().evaluate(&s).unwrap();
        assert!(assessment.outcome.forced);
        assert!(assessment.outcome.justifications[0].contains("Advanced HIV"));

        // PPS above the band: no forcing even with a low CD4.
        let mut s = snapshot(60);
        s.conditions.insert(Condition::Hiv);
        s.cd4_count = Some(100);
        let assessment = Assessor::hospice().evaluate(&s).unwrap();
        assert!(!assessment.outcome.forced);
    }

    #[test]
    fn test_multiple_rules_all_justify() {
        // No short-circuit: every matching rule appends its line.
        let mut s = snapshot(40);
        s.conditions.insert(Condition::Cancer);
        s.conditions.insert(Condition::Hiv);
        s.cd4_count = Some(150);
        s.labs.albumin = Some(2.0);
        let assessment = Assessor::hospice().evaluate(&s).unwrap();
        assert!(assessment.outcome.forced);
        // Rule 1 (albumin), rule 5 (PPS ≤ 70), rule 8 (CD4 + PPS).
        assert_eq!(assessment.outcome.justifications.len(), 3);
    }

    #[test]
    fn test_advisory_tiers() {
        // 0 flags.
        let assessment = Assessor::level_four().evaluate(&snapshot(80)).unwrap();
        assert_eq!(assessment.outcome.tier, AdvisoryTier::None);

        // 2 flags: condition floor + PPS ≤ 40 (pulmonary alone fires no rule
        // without mMRC 4 + oxygen).
        let mut s = snapshot(40);
        s.conditions.insert(Condition::PulmonaryDisease);
        s.scales = ScaleInput::Direct {
            pps: Some(40),
            nyha: None,
            mmrc: Some(2),
            fast: None,
        };
        let assessment = Assessor::level_four().evaluate(&s).unwrap();
        assert!(!assessment.outcome.forced);
        assert_eq!(assessment.outcome.flag_count, 2);
        assert_eq!(assessment.outcome.tier, AdvisoryTier::Partial);

        // 4 flags: add mMRC 3 and moderate albumin.
        let mut s = snapshot(40);
        s.conditions.insert(Condition::PulmonaryDisease);
        s.scales = ScaleInput::Direct {
            pps: Some(40),
            nyha: None,
            mmrc: Some(3),
            fast: None,
        };
        s.labs.albumin = Some(2.8);
        let assessment = Assessor::level_four().evaluate(&s).unwrap();
        assert!(!assessment.outcome.forced);
        assert_eq!(assessment.outcome.flag_count, 4);
        assert_eq!(assessment.outcome.tier, AdvisoryTier::Strong);
    }

    #[test]
    fn test_verdict_markers() {
        let forced = {
            let mut s = snapshot(70);
            s.conditions.insert(Condition::Cancer);
            Assessor::level_four().evaluate(&s).unwrap()
        };
        assert!(forced.verdict.starts_with("🔴"));

        let none = Assessor::level_four().evaluate(&snapshot(80)).unwrap();
        assert!(none.verdict.starts_with("🟢"));
        assert!(none.verdict.contains("continue Level 3 care"));

        let hospice_none = Assessor::hospice()
            .evaluate(&PatientSnapshot::new(ScaleInput::Direct {
                pps: Some(80),
                nyha: None,
                mmrc: None,
                fast: None,
            }))
            .unwrap();
        assert!(hospice_none.verdict.contains("does not meet the clinical criteria"));
    }

    #[test]
    fn test_stale_fields_cleared_before_rules() {
        // Liver labs and complications entered, then the condition was
        // deselected: rule 6 must not fire on the stale values.
        let mut s = snapshot(80);
        s.liver_complications = vec![LiverComplication::Ascites];
        s.labs.inr = Some(2.0);
        s.labs.albumin = Some(2.0);
        let assessment = Assessor::level_four().evaluate(&s).unwrap();
        assert!(!assessment.outcome.forced);
        // General labs still count toward the advisory fallback.
        assert_eq!(assessment.outcome.flag_count, 2);
    }

    #[test]
    fn test_hospice_descriptive_end_to_end() {
        use crate::scales::Ambulation;

        // Full descriptive snapshot through the hospice profile: the
        // decision tree resolves PPS 40, the NYHA description resolves
        // Class IV, and rules 1 and 2 both fire.
        let mut s = PatientSnapshot::new(ScaleInput::Descriptive {
            ambulation: Ambulation::MainlySitLie {
                needs_considerable_assistance: Some(true),
                mainly_assisted: Some(true),
            },
            nyha_description: Some(NyhaClass::IV.description().to_string()),
            mmrc_description: None,
            fast_description: None,
        });
        s.conditions.insert(Condition::HeartFailure);
        s.labs.albumin = Some(2.0);

        let assessment = Assessor::hospice().evaluate(&s).unwrap();
        assert!(assessment.outcome.forced);
        assert!(assessment.outcome.justifications[0].contains("PPS is 40%"));
        assert!(assessment.outcome.justifications[1].contains("NYHA Class IV"));
        assert!(assessment.verdict.starts_with("🔴"));
    }

    #[test]
    fn test_descriptive_unanswered_branch_fails_loud() {
        // Both yes/no follow-ups answered "No" leaves PPS unset; the engine
        // rejects the snapshot rather than defaulting a score.
        let s = PatientSnapshot::new(ScaleInput::Descriptive {
            ambulation: Ambulation::Reduced {
                unable_normal_work: Some(false),
                needs_hobby_assistance: Some(false),
            },
            nyha_description: None,
            mmrc_description: None,
            fast_description: None,
        });
        let result = Assessor::hospice().evaluate(&s);
        assert_eq!(result, Err(AssessError::IncompleteScale(ScaleKind::Pps)));
    }

    #[test]
    fn test_assessment_metadata() {
        let assessment = Assessor::hospice().evaluate(&snapshot(80)).unwrap();
        assert_eq!(assessment.profile, "hospice-referral");
        assert_eq!(assessment.assessment_id.len(), 36); // UUID format
        assert!(!assessment.evaluated_at.is_empty());
    }
}
