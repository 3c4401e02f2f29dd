//! NYHA cardiac functional classification.
//!
//! Only evaluated when heart failure is among the selected conditions.

use serde::{Deserialize, Serialize};

use super::ScaleError;

/// NYHA class I (mild) through IV (severe).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NyhaClass {
    I,
    II,
    III,
    IV,
}

impl NyhaClass {
    pub const ALL: [NyhaClass; 4] = [NyhaClass::I, NyhaClass::II, NyhaClass::III, NyhaClass::IV];

    /// The canonical long-form description shown on the assessment form.
    pub fn description(&self) -> &'static str {
        match self {
            NyhaClass::I => {
                "No limitation of physical activity; ordinary physical activity does not cause \
                 undue fatigue, palpitation, or dyspnea"
            }
            NyhaClass::II => {
                "Slight limitation of physical activity; comfortable at rest; ordinary physical \
                 activity results in fatigue, palpitation, or dyspnea"
            }
            NyhaClass::III => {
                "Marked limitation of physical activity, comfortable at rest; less than ordinary \
                 activity causes fatigue, palpitation or dyspnea"
            }
            NyhaClass::IV => {
                "Unable to carry on any physical activity without discomfort; symptoms of heart \
                 failure at rest; if any physical activity is undertaken, discomfort increases"
            }
        }
    }

    /// Exact match against the canonical description.
    pub fn from_description(text: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.description() == text)
    }

    /// Direct ordinal selection (Level-3→4 variant), 1–4.
    pub fn from_ordinal(ordinal: u8) -> Result<Self, ScaleError> {
        match ordinal {
            1 => Ok(NyhaClass::I),
            2 => Ok(NyhaClass::II),
            3 => Ok(NyhaClass::III),
            4 => Ok(NyhaClass::IV),
            other => Err(ScaleError::InvalidNyha(other)),
        }
    }

    pub fn ordinal(&self) -> u8 {
        match self {
            NyhaClass::I => 1,
            NyhaClass::II => 2,
            NyhaClass::III => 3,
            NyhaClass::IV => 4,
        }
    }
}

impl std::fmt::Display for NyhaClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let roman = match self {
            NyhaClass::I => "I",
            NyhaClass::II => "II",
            NyhaClass::III => "III",
            NyhaClass::IV => "IV",
        };
        write!(f, "NYHA Class {}", roman)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description_round_trip() {
        for class in NyhaClass::ALL {
            assert_eq!(NyhaClass::from_description(class.description()), Some(class));
        }
        assert_eq!(NyhaClass::from_description("shortened description"), None);
    }

    #[test]
    fn test_ordinals() {
        assert_eq!(NyhaClass::from_ordinal(1), Ok(NyhaClass::I));
        assert_eq!(NyhaClass::from_ordinal(4), Ok(NyhaClass::IV));
        assert_eq!(NyhaClass::from_ordinal(0), Err(ScaleError::InvalidNyha(0)));
        assert_eq!(NyhaClass::from_ordinal(5), Err(ScaleError::InvalidNyha(5)));
        assert_eq!(NyhaClass::IV.ordinal(), 4);
    }

    #[test]
    fn test_display() {
        assert_eq!(NyhaClass::IV.to_string(), "NYHA Class IV");
    }
}
