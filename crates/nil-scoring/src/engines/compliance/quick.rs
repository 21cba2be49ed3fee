//! Reduced-cost pre-pass that never reports a tier milder than the full score.
//!
//! The three dimensions able to emit critical codes (policy fit, FMV verification,
//! brand safety) are screened exactly. The remaining three are reduced to a
//! pass/fail checklist credited at full weight only when nothing is outstanding,
//! which makes the quick total a lower bound on the full total.

use super::aggregate::{is_critical, GREEN_THRESHOLD};
use super::dimensions::{assess, round2, DimensionContext};
use super::domain::{Dimension, QuickRiskCheck, RiskTier};
use super::weights::WeightTable;

const MAX_QUICK_ISSUES: usize = 5;

const SCREENED: [Dimension; 3] = [
    Dimension::PolicyFit,
    Dimension::BrandSafety,
    Dimension::FmvVerification,
];

const CHECKLISTED: [Dimension; 3] = [
    Dimension::DocumentHygiene,
    Dimension::TaxReadiness,
    Dimension::GuardianConsent,
];

pub(crate) fn quick_check(ctx: &DimensionContext<'_>, weights: &WeightTable) -> QuickRiskCheck {
    let mut lower_bound = 0.0;
    let mut critical_notes = Vec::new();
    let mut other_notes = Vec::new();

    for dimension in SCREENED {
        let assessment = assess(dimension, ctx);
        let deducted: f64 = assessment
            .findings
            .iter()
            .map(|finding| finding.fraction)
            .sum();
        let weight = weights.weight(dimension);
        lower_bound += round2(weight * (1.0 - deducted).clamp(0.0, 1.0)).clamp(0.0, weight);

        for finding in assessment.findings {
            if is_critical(&finding.code) {
                critical_notes.push(finding.note);
            } else {
                other_notes.push(finding.note);
            }
        }
    }

    for dimension in CHECKLISTED {
        let assessment = assess(dimension, ctx);
        if assessment.is_clean() {
            lower_bound += weights.weight(dimension);
        } else {
            other_notes.push(format!(
                "{} has {} outstanding item(s)",
                dimension.key(),
                assessment.findings.len()
            ));
        }
    }

    // Rounded exactly like the full aggregation so the bound survives rounding.
    let lower_bound = round2(lower_bound);
    let risk_tier = if !critical_notes.is_empty() {
        RiskTier::High
    } else if lower_bound >= GREEN_THRESHOLD {
        RiskTier::Low
    } else {
        RiskTier::Medium
    };

    let quick_issues = critical_notes
        .into_iter()
        .chain(other_notes)
        .take(MAX_QUICK_ISSUES)
        .collect();

    QuickRiskCheck {
        risk_tier,
        quick_issues,
    }
}
