//! Assessment summary composer.
//!
//! Pure formatting: each section returns its lines and the composer merges
//! them in a fixed order. No rule logic lives here.

use crate::models::{join_labels, Condition};
use crate::scales::NyhaClass;

use super::config::RuleThresholds;
use super::RuleContext;

/// Compose the ordered summary bullet list for one evaluation.
pub(crate) fn compose(ctx: &RuleContext<'_>, t: &RuleThresholds) -> Vec<String> {
    let mut lines = condition_lines(ctx);
    lines.extend(scale_lines(ctx, t));
    lines.extend(lab_lines(ctx, t));
    lines
}

/// Selected conditions and their condition-specific details.
fn condition_lines(ctx: &RuleContext<'_>) -> Vec<String> {
    let snapshot = ctx.snapshot;
    let mut lines = Vec::new();

    if snapshot.conditions.is_empty() {
        lines.push("No underlying clinical conditions were selected.".to_string());
    } else {
        let names = snapshot
            .conditions
            .iter()
            .map(|c| c.label())
            .collect::<Vec<_>>()
            .join(", ");
        lines.push(format!("Clinical conditions present: {}.", names));
    }

    if snapshot.has(Condition::HeartFailure) {
        if let Some(ef) = &snapshot.ejection_fraction {
            lines.push(format!("HF with EF: {}%", ef));
        }
    }
    if snapshot.has(Condition::PulmonaryDisease) {
        lines.push(format!(
            "Pulmonary Disease: Oxygen dependent - {}",
            yes_no(snapshot.oxygen_dependent)
        ));
    }
    if snapshot.has(Condition::Ckd) {
        lines.push(format!(
            "CKD: On dialysis - {}",
            yes_no(snapshot.on_dialysis)
        ));
    }
    if snapshot.has(Condition::Cancer) && !snapshot.cancer_complications.is_empty() {
        lines.push(format!(
            "Cancer complications: {}",
            join_labels(&snapshot.cancer_complications, |f| f.label())
        ));
    }
    if snapshot.has(Condition::LiverCirrhosis) && !snapshot.liver_complications.is_empty() {
        lines.push(format!(
            "Liver Cirrhosis complications: {}",
            join_labels(&snapshot.liver_complications, |f| f.label())
        ));
    }
    if snapshot.has(Condition::DementiaOrStroke) && !snapshot.dementia_complications.is_empty() {
        lines.push(format!(
            "Dementia/Stroke complications: {}",
            join_labels(&snapshot.dementia_complications, |f| f.label())
        ));
    }
    if snapshot.has(Condition::Hiv) {
        if let Some(cd4) = snapshot.cd4_count {
            lines.push(format!("HIV: CD4 count = {}", cd4));
        }
    }

    lines
}

/// Interpretations of the resolved scale scores.
fn scale_lines(ctx: &RuleContext<'_>, t: &RuleThresholds) -> Vec<String> {
    let mut lines = Vec::new();

    if ctx.pps.value() <= t.flag_pps_max {
        lines.push(format!(
            "PPS score of {}% indicates poor functional status.",
            ctx.pps.value()
        ));
    }
    if ctx.nyha == Some(NyhaClass::IV) {
        lines.push("NYHA Class IV indicates severe cardiac limitation.".to_string());
    }
    if let Some(grade) = ctx.mmrc.filter(|g| g.grade() >= 3) {
        lines.push(format!(
            "mMRC grade of {} suggests significant dyspnea.",
            grade.grade()
        ));
    }
    if let Some(stage) = ctx.fast.filter(|s| s.stage() >= 6) {
        lines.push(format!(
            "FAST stage of {} indicates moderate to severe dementia.",
            stage.stage()
        ));
    }

    lines
}

/// Interpretations of weight change and laboratory values.
fn lab_lines(ctx: &RuleContext<'_>, t: &RuleThresholds) -> Vec<String> {
    let labs = &ctx.snapshot.labs;
    let mut lines = Vec::new();

    if ctx.metrics.weight_loss_pct > 0.0 {
        lines.push(format!(
            "Weight loss of {:.1}% over 6–12 months.",
            ctx.metrics.weight_loss_pct
        ));
    }
    if let Some(inr) = labs.inr.filter(|i| *i > t.flag_inr_min) {
        lines.push(format!(
            "Elevated INR of {}, which may reflect hepatic dysfunction or anticoagulation risk.",
            inr
        ));
    }
    if let Some(albumin) = labs.albumin.filter(|a| *a < t.flag_albumin_max) {
        lines.push(format!(
            "Low albumin level of {} g/dL suggests poor nutritional or hepatic status.",
            albumin
        ));
    }

    lines
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}
