//! Derived weight and laboratory metrics.
//!
//! Handles:
//! - Percentage weight change over 6–12 months
//! - Lenient numeric parsing of free-text fields (ejection fraction, eGFR)
//!
//! Parse failures never surface as errors: an unparseable ejection fraction
//! resolves to `None` (the EF rule does not apply), an unparseable or absent
//! eGFR resolves to 0 (the CKD rule still applies; absent renal data is not
//! evidence of renal function).

use serde::{Deserialize, Serialize};

use crate::models::PatientSnapshot;

/// Parse a free-text numeric field, tolerating whitespace and a trailing '%'.
pub fn parse_lenient(text: &str) -> Option<f64> {
    text.trim().trim_end_matches('%').trim().parse::<f64>().ok()
}

/// Values derived from the raw snapshot, recomputed fresh per evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    /// (prior − current) / prior × 100, or 0 when prior weight is 0.
    /// Negative for weight gain.
    pub weight_loss_pct: f64,
    /// Parsed ejection fraction; `None` when absent or unparseable.
    pub ejection_fraction: Option<f64>,
    /// Parsed eGFR; 0 when absent or unparseable.
    pub egfr: f64,
}

impl DerivedMetrics {
    /// Compute all derived values for one snapshot.
    pub fn compute(snapshot: &PatientSnapshot) -> Self {
        let labs = &snapshot.labs;
        let weight_loss_pct = if labs.prior_weight_kg > 0.0 {
            (labs.prior_weight_kg - labs.current_weight_kg) / labs.prior_weight_kg * 100.0
        } else {
            0.0
        };

        DerivedMetrics {
            weight_loss_pct,
            ejection_fraction: snapshot
                .ejection_fraction
                .as_deref()
                .and_then(parse_lenient),
            egfr: labs.egfr.as_deref().and_then(parse_lenient).unwrap_or(0.0),
        }
    }
}
