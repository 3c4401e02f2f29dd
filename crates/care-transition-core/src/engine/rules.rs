//! The eight forced-transition rules and the advisory fallback.
//!
//! All eight rules are evaluated in fixed order with no short-circuit: the
//! forced flag is OR'd across rules, and every matching clause appends its
//! own justification line, so the order affects justification ordering only.

use crate::models::{join_labels, AdvisoryTier, Condition};
use crate::scales::NyhaClass;

use super::config::RuleThresholds;
use super::RuleContext;

/// Evaluate the forced-transition rules.
///
/// Returns the OR'd forced flag and one justification per matching clause.
pub(crate) fn evaluate_forced(
    ctx: &RuleContext<'_>,
    t: &RuleThresholds,
) -> (bool, Vec<String>) {
    let mut forced = false;
    let mut reasons = Vec::new();
    let snapshot = ctx.snapshot;
    let labs = &snapshot.labs;
    let pps = ctx.pps.value();

    // Rule 1: low PPS with significant weight loss or severe hypoalbuminemia
    if pps <= t.forced_pps_max {
        let weight_flag = ctx.metrics.weight_loss_pct >= t.weight_loss_pct_min;
        let albumin_flag = labs.albumin.is_some_and(|a| a < t.albumin_severe_max);
        if weight_flag || albumin_flag {
            forced = true;
            let mut parts = Vec::new();
            if weight_flag {
                parts.push(format!("≥{}% weight loss", t.weight_loss_pct_min));
            }
            if albumin_flag {
                parts.push(format!("albumin < {} g/dL", t.albumin_severe_max));
            }
            reasons.push(format!("PPS is {}% and {}.", pps, parts.join(" and ")));
        }
    }

    // Rule 2: heart failure with NYHA IV or very low EF.
    // Each clause justifies independently; an unparseable EF never applies.
    if snapshot.has(Condition::HeartFailure) {
        if ctx.nyha == Some(NyhaClass::IV) {
            forced = true;
            reasons.push("HF with NYHA Class IV.".to_string());
        }
        if let Some(ef) = ctx.metrics.ejection_fraction {
            if ef <= t.ef_max {
                forced = true;
                reasons.push(format!("HF with EF ≤ {}% (EF = {}%).", t.ef_max, ef));
            }
        }
    }

    // Rule 3: severe dyspnea with oxygen dependence
    if snapshot.has(Condition::PulmonaryDisease)
        && ctx.mmrc.is_some_and(|g| g.grade() == 4)
        && snapshot.oxygen_dependent
    {
        forced = true;
        reasons.push("Severe pulmonary disease: mMRC = 4 and oxygen dependent.".to_string());
    }

    // Rule 4: renal failure without dialysis
    if snapshot.has(Condition::Ckd) && !snapshot.on_dialysis && ctx.metrics.egfr <= t.egfr_max {
        forced = true;
        reasons.push(format!(
            "CKD with eGFR ≤ {} and not on dialysis.",
            t.egfr_max
        ));
    }

    // Rule 5: cancer with poor function or complications
    if snapshot.has(Condition::Cancer) {
        let low_pps = pps <= t.cancer_pps_max;
        let flags = &snapshot.cancer_complications;
        if low_pps || !flags.is_empty() {
            forced = true;
            let mut detail = String::new();
            if low_pps {
                detail.push_str(&format!("PPS = {}%", pps));
            }
            if low_pps && !flags.is_empty() {
                detail.push_str(" and ");
            }
            if !flags.is_empty() {
                detail.push_str(&format!(
                    "complications: {}",
                    join_labels(flags, |f| f.label())
                ));
            }
            reasons.push(format!("Cancer diagnosis with {}.", detail));
        }
    }

    // Rule 6: decompensated cirrhosis
    if snapshot.has(Condition::LiverCirrhosis) {
        if let (Some(inr), Some(albumin)) = (labs.inr, labs.albumin) {
            if inr >= t.inr_min
                && albumin <= t.albumin_severe_max
                && !snapshot.liver_complications.is_empty()
            {
                forced = true;
                reasons.push(format!(
                    "Decompensated liver cirrhosis: INR = {}, albumin = {}, complications: {}.",
                    inr,
                    albumin,
                    join_labels(&snapshot.liver_complications, |f| f.label())
                ));
            }
        }
    }

    // Rule 7: end-stage dementia/stroke with complications
    if snapshot.has(Condition::DementiaOrStroke)
        && ctx.fast.is_some_and(|s| s.stage() == 7)
        && !snapshot.dementia_complications.is_empty()
    {
        forced = true;
        reasons.push(format!(
            "End-stage dementia or stroke: FAST stage 7 with complications: {}.",
            join_labels(&snapshot.dementia_complications, |f| f.label())
        ));
    }

    // Rule 8: advanced HIV with poor function
    if snapshot.has(Condition::Hiv) {
        if let Some(cd4) = snapshot.cd4_count {
            if cd4 <= t.cd4_max && pps <= t.forced_pps_max {
                forced = true;
                reasons.push(format!("Advanced HIV: CD4 = {}, PPS = {}%.", cd4, pps));
            }
        }
    }

    (forced, reasons)
}

/// Count the advisory flags for the fallback tier.
///
/// These bands are deliberately looser than the forced rules (PPS ≤ 40 vs.
/// ≤ 50, albumin < 3.0 vs. < 2.5); a non-empty condition set contributes one
/// unconditional flag.
pub(crate) fn advisory_flag_count(ctx: &RuleContext<'_>, t: &RuleThresholds) -> u32 {
    let labs = &ctx.snapshot.labs;
    let mut flags = 0;
    if ctx.pps.value() <= t.flag_pps_max {
        flags += 1;
    }
    if ctx.nyha == Some(NyhaClass::IV) {
        flags += 1;
    }
    if ctx.mmrc.is_some_and(|g| g.grade() >= 3) {
        flags += 1;
    }
    if ctx.fast.is_some_and(|s| s.stage() >= 6) {
        flags += 1;
    }
    if ctx.metrics.weight_loss_pct >= t.weight_loss_pct_min {
        flags += 1;
    }
    if labs.albumin.is_some_and(|a| a < t.flag_albumin_max) {
        flags += 1;
    }
    if labs.inr.is_some_and(|i| i > t.flag_inr_min) {
        flags += 1;
    }
    if !ctx.snapshot.conditions.is_empty() {
        flags += 1;
    }
    flags
}

/// Map a flag count to its advisory tier.
pub(crate) fn tier_for(count: u32, t: &RuleThresholds) -> AdvisoryTier {
    if count >= t.strong_flag_min {
        AdvisoryTier::Strong
    } else if count >= t.partial_flag_min {
        AdvisoryTier::Partial
    } else {
        AdvisoryTier::None
    }
}
