use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use super::domain::{ComplianceScoreResult, ComplianceStatus, Dimension, DimensionScore};
use super::weights::WeightTable;
use crate::engines::subject::DealId;

/// Reason-code prefixes that force a red status regardless of the total.
pub const CRITICAL_PREFIXES: [&str; 5] = [
    "PROHIBITED",
    "EXTREME",
    "PAY_FOR_PLAY",
    "BOOSTER",
    "ENROLLMENT",
];

pub const GREEN_THRESHOLD: f64 = 80.0;

pub fn is_critical(code: &str) -> bool {
    CRITICAL_PREFIXES
        .iter()
        .any(|prefix| code.starts_with(prefix))
}

/// Splits reason codes into `(critical, warnings)`, preserving order.
pub fn partition_reason_codes(codes: &[String]) -> (Vec<String>, Vec<String>) {
    codes.iter().cloned().partition(|code| is_critical(code))
}

pub fn classify_status(total_score: f64, critical_issues: &[String]) -> ComplianceStatus {
    if !critical_issues.is_empty() {
        ComplianceStatus::Red
    } else if total_score >= GREEN_THRESHOLD {
        ComplianceStatus::Green
    } else {
        ComplianceStatus::Yellow
    }
}

pub(crate) fn aggregate(
    deal_id: DealId,
    mut scores: BTreeMap<Dimension, DimensionScore>,
    weights: &WeightTable,
    scored_at: DateTime<Utc>,
) -> ComplianceScoreResult {
    let total_score = round2(
        Dimension::ALL
            .iter()
            .filter_map(|dimension| scores.get(dimension))
            .map(|score| score.score)
            .sum::<f64>(),
    )
    .clamp(0.0, 100.0);

    let overall_reason_codes: Vec<String> = Dimension::ALL
        .iter()
        .filter_map(|dimension| scores.get(dimension))
        .flat_map(|score| score.reason_codes.iter().cloned())
        .collect();

    let mut overall_recommendations: Vec<String> = Vec::new();
    for dimension in weights.by_descending_weight() {
        let Some(score) = scores.get(&dimension) else {
            continue;
        };
        for recommendation in &score.recommendations {
            if !overall_recommendations.contains(recommendation) {
                overall_recommendations.push(recommendation.clone());
            }
        }
    }

    let (critical_issues, warnings) = partition_reason_codes(&overall_reason_codes);
    let status = classify_status(total_score, &critical_issues);

    let mut take = |dimension: Dimension| {
        scores.remove(&dimension).unwrap_or_else(|| DimensionScore {
            score: 0.0,
            weight: weights.weight(dimension),
            notes: "not evaluated".to_string(),
            reason_codes: Vec::new(),
            recommendations: Vec::new(),
        })
    };

    ComplianceScoreResult {
        deal_id,
        policy_fit: take(Dimension::PolicyFit),
        fmv_verification: take(Dimension::FmvVerification),
        document_hygiene: take(Dimension::DocumentHygiene),
        tax_readiness: take(Dimension::TaxReadiness),
        brand_safety: take(Dimension::BrandSafety),
        guardian_consent: take(Dimension::GuardianConsent),
        total_score,
        status,
        overall_reason_codes,
        overall_recommendations,
        critical_issues,
        warnings,
        scored_at,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
