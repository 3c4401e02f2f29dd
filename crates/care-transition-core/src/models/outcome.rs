//! Evaluation output aggregates.

use serde::{Deserialize, Serialize};

/// Advisory tier produced by the fallback flag count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdvisoryTier {
    /// Four or more advisory flags: strong recommendation to reassess care level.
    Strong,
    /// Two or three flags: partial criteria, monitor and reassess.
    Partial,
    /// Fewer than two flags: criteria not met.
    None,
}

impl std::fmt::Display for AdvisoryTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            AdvisoryTier::Strong => "STRONG",
            AdvisoryTier::Partial => "PARTIAL",
            AdvisoryTier::None => "NONE",
        };
        f.write_str(name)
    }
}

/// Result of evaluating the rule set against one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleOutcome {
    /// Whether any forced-transition rule fired.
    pub forced: bool,
    /// One justification line per matching rule clause, in rule order.
    pub justifications: Vec<String>,
    /// Human-readable assessment summary, in composition order.
    pub summary_lines: Vec<String>,
    /// Advisory tier; only meaningful when `forced` is false.
    pub tier: AdvisoryTier,
    /// Raw advisory flag count backing `tier`.
    pub flag_count: u32,
}

/// A completed assessment: the outcome plus evaluation metadata and the
/// rendered verdict line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    /// Locally generated UUID for this evaluation.
    pub assessment_id: String,
    /// RFC3339 evaluation timestamp.
    pub evaluated_at: String,
    /// Name of the profile that produced this assessment.
    pub profile: String,
    pub outcome: RuleOutcome,
    /// Single categorical verdict line with its color marker.
    pub verdict: String,
}

impl Assessment {
    /// Serialize to JSON for record export.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from an exported JSON record.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_display() {
        assert_eq!(AdvisoryTier::Strong.to_string(), "STRONG");
        assert_eq!(AdvisoryTier::Partial.to_string(), "PARTIAL");
        assert_eq!(AdvisoryTier::None.to_string(), "NONE");
    }

    #[test]
    fn test_assessment_json_export() {
        let assessment = Assessment {
            assessment_id: "a-1".into(),
            evaluated_at: "2025-01-01T00:00:00Z".into(),
            profile: "level-3-to-4".into(),
            outcome: RuleOutcome {
                forced: false,
                justifications: vec![],
                summary_lines: vec!["No underlying clinical conditions were selected.".into()],
                tier: AdvisoryTier::None,
                flag_count: 0,
            },
            verdict: "🟢 Patient is stable — continue Level 3 care.".into(),
        };
        let json = assessment.to_json().unwrap();
        let back = Assessment::from_json(&json).unwrap();
        assert_eq!(back, assessment);
    }
}
