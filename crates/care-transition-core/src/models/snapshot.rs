//! The patient snapshot: the sole input aggregate for one evaluation.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::scales::ScaleInput;

use super::{CancerComplication, Condition, DementiaComplication, LiverComplication};

/// Weight and laboratory values entered alongside the clinical scales.
///
/// Weights are kilograms and must be non-negative; `egfr` is kept as the raw
/// form text because the field may hold unparseable input, which is coerced
/// downstream rather than rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LabPanel {
    pub current_weight_kg: f64,
    pub prior_weight_kg: f64,
    pub inr: Option<f64>,
    pub albumin: Option<f64>,
    pub egfr: Option<String>,
}

/// One patient's data at evaluation time.
///
/// Condition-specific fields are only meaningful when their governing
/// condition tag is selected. [`PatientSnapshot::sanitized`] enforces that by
/// clearing dependents of unselected conditions, so stale form values can
/// never leak into rule evaluation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatientSnapshot {
    /// Selected chronic conditions.
    pub conditions: BTreeSet<Condition>,
    /// Ejection fraction as entered (free text, may be unparseable).
    pub ejection_fraction: Option<String>,
    /// Dependent on supplemental oxygen (pulmonary disease).
    pub oxygen_dependent: bool,
    /// On dialysis (CKD).
    pub on_dialysis: bool,
    /// Cancer complication flags.
    pub cancer_complications: Vec<CancerComplication>,
    /// Liver cirrhosis complication flags.
    pub liver_complications: Vec<LiverComplication>,
    /// Dementia/stroke complication flags.
    pub dementia_complications: Vec<DementiaComplication>,
    /// Most recent CD4 count (HIV).
    pub cd4_count: Option<u32>,
    /// Most recent viral load (HIV, hospice assessment only).
    pub viral_load: Option<u64>,
    /// Clinical scale selections, descriptive or direct.
    pub scales: ScaleInput,
    /// Weight and laboratory values.
    pub labs: LabPanel,
}

impl PatientSnapshot {
    /// Create an empty snapshot with the given scale input.
    pub fn new(scales: ScaleInput) -> Self {
        PatientSnapshot {
            scales,
            ..Default::default()
        }
    }

    /// Whether a condition tag is selected.
    pub fn has(&self, condition: Condition) -> bool {
        self.conditions.contains(&condition)
    }

    /// Copy with all fields of unselected conditions reset to their defaults.
    ///
    /// The engine always evaluates the sanitized copy. Deselecting a
    /// condition after its follow-up fields were filled in must not let the
    /// stale values fire a rule.
    pub fn sanitized(&self) -> Self {
        let mut clean = self.clone();
        if !clean.has(Condition::HeartFailure) {
            clean.ejection_fraction = None;
        }
        if !clean.has(Condition::PulmonaryDisease) {
            clean.oxygen_dependent = false;
        }
        if !clean.has(Condition::Ckd) {
            clean.on_dialysis = false;
            clean.labs.egfr = None;
        }
        if !clean.has(Condition::Cancer) {
            clean.cancer_complications.clear();
        }
        if !clean.has(Condition::LiverCirrhosis) {
            clean.liver_complications.clear();
        }
        if !clean.has(Condition::DementiaOrStroke) {
            clean.dementia_complications.clear();
        }
        if !clean.has(Condition::Hiv) {
            clean.cd4_count = None;
            clean.viral_load = None;
        }
        clean
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitized_clears_unselected_fields() {
        let mut snapshot = PatientSnapshot::default();
        snapshot.ejection_fraction = Some("18".into());
        snapshot.oxygen_dependent = true;
        snapshot.on_dialysis = true;
        snapshot.cancer_complications = vec![CancerComplication::Metastases];
        snapshot.liver_complications = vec![LiverComplication::Ascites];
        snapshot.dementia_complications = vec![DementiaComplication::RecurrentFalls];
        snapshot.cd4_count = Some(150);
        snapshot.viral_load = Some(100_000);
        snapshot.labs.egfr = Some("12".into());

        // Nothing selected: everything condition-gated goes back to default.
        let clean = snapshot.sanitized();
        assert_eq!(clean.ejection_fraction, None);
        assert!(!clean.oxygen_dependent);
        assert!(!clean.on_dialysis);
        assert!(clean.cancer_complications.is_empty());
        assert!(clean.liver_complications.is_empty());
        assert!(clean.dementia_complications.is_empty());
        assert_eq!(clean.cd4_count, None);
        assert_eq!(clean.viral_load, None);
        assert_eq!(clean.labs.egfr, None);
    }

    #[test]
    fn test_sanitized_keeps_selected_fields() {
        let mut snapshot = PatientSnapshot::default();
        snapshot.conditions.insert(Condition::HeartFailure);
        snapshot.conditions.insert(Condition::Hiv);
        snapshot.ejection_fraction = Some("25".into());
        snapshot.cd4_count = Some(300);
        snapshot.oxygen_dependent = true; // pulmonary not selected

        let clean = snapshot.sanitized();
        assert_eq!(clean.ejection_fraction, Some("25".into()));
        assert_eq!(clean.cd4_count, Some(300));
        assert!(!clean.oxygen_dependent);
    }

    #[test]
    fn test_sanitized_never_touches_general_labs() {
        let mut snapshot = PatientSnapshot::default();
        snapshot.labs.current_weight_kg = 60.0;
        snapshot.labs.prior_weight_kg = 70.0;
        snapshot.labs.inr = Some(1.8);
        snapshot.labs.albumin = Some(2.4);

        let clean = snapshot.sanitized();
        assert_eq!(clean.labs.inr, Some(1.8));
        assert_eq!(clean.labs.albumin, Some(2.4));
        assert_eq!(clean.labs.prior_weight_kg, 70.0);
    }
}
