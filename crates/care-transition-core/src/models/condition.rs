//! Chronic-condition tags and their complication flag sets.
//!
//! Labels match the clinical form strings exactly; `from_label` is how the
//! form surface maps its multiselect values onto domain enums.

use serde::{Deserialize, Serialize};

/// Underlying chronic conditions recognized by both assessments.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Condition {
    HeartFailure,
    PulmonaryDisease,
    Ckd,
    Cancer,
    LiverCirrhosis,
    DementiaOrStroke,
    Hiv,
}

impl Condition {
    pub const ALL: [Condition; 7] = [
        Condition::HeartFailure,
        Condition::PulmonaryDisease,
        Condition::Ckd,
        Condition::Cancer,
        Condition::LiverCirrhosis,
        Condition::DementiaOrStroke,
        Condition::Hiv,
    ];

    /// The label shown on the condition multiselect.
    pub fn label(&self) -> &'static str {
        match self {
            Condition::HeartFailure => "Heart Failure (HF)",
            Condition::PulmonaryDisease => "Pulmonary Disease",
            Condition::Ckd => "Chronic Kidney Disease (CKD)",
            Condition::Cancer => "Cancer Diagnosis",
            Condition::LiverCirrhosis => "Liver Cirrhosis",
            Condition::DementiaOrStroke => "Dementia/Stroke/Neurological Disease",
            Condition::Hiv => "HIV",
        }
    }

    /// Exact match against the form label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Cancer complication flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CancerComplication {
    Metastases,
    DeclineDespiteTherapy,
    DecliningTherapy,
    PleuralEffusion,
    TransfusionRequirement,
}

impl CancerComplication {
    pub const ALL: [CancerComplication; 5] = [
        CancerComplication::Metastases,
        CancerComplication::DeclineDespiteTherapy,
        CancerComplication::DecliningTherapy,
        CancerComplication::PleuralEffusion,
        CancerComplication::TransfusionRequirement,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CancerComplication::Metastases => "Evidence of metastases",
            CancerComplication::DeclineDespiteTherapy => "Continued decline in spite of therapy",
            CancerComplication::DecliningTherapy => "Declining therapy",
            CancerComplication::PleuralEffusion => "Pleural effusion",
            CancerComplication::TransfusionRequirement => "Transfusion requirement",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

/// Liver cirrhosis complication flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LiverComplication {
    Ascites,
    HepaticEncephalopathy,
    VaricealBleeding,
    HepatorenalSyndrome,
    SpontaneousBacterialPeritonitis,
}

impl LiverComplication {
    pub const ALL: [LiverComplication; 5] = [
        LiverComplication::Ascites,
        LiverComplication::HepaticEncephalopathy,
        LiverComplication::VaricealBleeding,
        LiverComplication::HepatorenalSyndrome,
        LiverComplication::SpontaneousBacterialPeritonitis,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            LiverComplication::Ascites => "Ascites",
            LiverComplication::HepaticEncephalopathy => "Hepatic encephalopathy",
            LiverComplication::VaricealBleeding => "Variceal bleeding",
            LiverComplication::HepatorenalSyndrome => "Hepatorenal syndrome",
            LiverComplication::SpontaneousBacterialPeritonitis => {
                "Spontaneous bacterial peritonitis"
            }
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

/// Dementia/stroke complication flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DementiaComplication {
    AspirationPneumonia,
    PyelonephritisOrSepticemia,
    PressureUlcers,
    RecurrentFalls,
}

impl DementiaComplication {
    pub const ALL: [DementiaComplication; 4] = [
        DementiaComplication::AspirationPneumonia,
        DementiaComplication::PyelonephritisOrSepticemia,
        DementiaComplication::PressureUlcers,
        DementiaComplication::RecurrentFalls,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DementiaComplication::AspirationPneumonia => "Aspiration pneumonia",
            DementiaComplication::PyelonephritisOrSepticemia => "Pyelonephritis/septicemia",
            DementiaComplication::PressureUlcers => "Pressure ulcers",
            DementiaComplication::RecurrentFalls => "Recurrent falls",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

/// Join complication labels for display ("Ascites, Variceal bleeding").
pub fn join_labels<T: Copy>(flags: &[T], label: fn(&T) -> &'static str) -> String {
    flags
        .iter()
        .map(label)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_labels_round_trip() {
        for condition in Condition::ALL {
            assert_eq!(Condition::from_label(condition.label()), Some(condition));
        }
        assert_eq!(Condition::from_label("Heart Failure"), None);
    }

    #[test]
    fn test_complication_labels_round_trip() {
        for flag in CancerComplication::ALL {
            assert_eq!(CancerComplication::from_label(flag.label()), Some(flag));
        }
        for flag in LiverComplication::ALL {
            assert_eq!(LiverComplication::from_label(flag.label()), Some(flag));
        }
        for flag in DementiaComplication::ALL {
            assert_eq!(DementiaComplication::from_label(flag.label()), Some(flag));
        }
    }

    #[test]
    fn test_join_labels() {
        let flags = [LiverComplication::Ascites, LiverComplication::VaricealBleeding];
        assert_eq!(
            join_labels(&flags, |f| f.label()),
            "Ascites, Variceal bleeding"
        );
        let empty: [LiverComplication; 0] = [];
        assert_eq!(join_labels(&empty, |f| f.label()), "");
    }
}
