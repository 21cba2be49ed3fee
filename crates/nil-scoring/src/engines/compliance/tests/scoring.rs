use std::sync::Arc;

use super::common::*;
use crate::engines::compliance::{ComplianceEngine, ComplianceStatus, FmvRange, WeightTableError};
use crate::engines::lookups::LookupTables;
use crate::engines::subject::InputError;

#[test]
fn clean_deal_is_green() {
    let result = score(&clean_snapshot());

    assert_eq!(result.status, ComplianceStatus::Green);
    assert!(result.critical_issues.is_empty());
    assert!(result.warnings.is_empty());
    assert_eq!(result.scored_at, scored_at());
    assert_eq!(result.deal_id, clean_snapshot().deal.id);
}

#[test]
fn booster_code_forces_red_despite_high_total() {
    let mut snapshot = clean_snapshot();
    snapshot.deal.compensation_amount = 50_000.0;
    snapshot.deal.booster_connected = true;
    snapshot.review.disclosure_filed = false;
    snapshot.tax.professional_support = true;
    snapshot.fmv_range = Some(FmvRange {
        low: 40_000.0,
        high: 60_000.0,
    });

    let result = score(&snapshot);

    assert_eq!(result.total_score, 87.5);
    assert_eq!(result.status, ComplianceStatus::Red);
    assert!(result
        .overall_reason_codes
        .iter()
        .any(|code| code.starts_with("BOOSTER_")));
    assert_eq!(
        result.critical_issues,
        vec!["BOOSTER_CONNECTED_DEAL".to_string()]
    );
    assert_eq!(result.warnings, vec!["DISCLOSURE_NOT_FILED".to_string()]);
}

#[test]
fn missing_paperwork_without_critical_codes_is_yellow() {
    let mut snapshot = clean_snapshot();
    snapshot.review.w9_submitted = false;
    snapshot.review.disclosure_form_on_file = false;

    let result = score(&snapshot);

    // documentHygiene loses 40% (6 points) and taxReadiness 35% (5.25 points).
    assert_eq!(result.total_score, 88.75);
    assert_eq!(result.status, ComplianceStatus::Green);

    snapshot.review.contract_signed = false;
    snapshot.fmv_range = None;
    let result = score(&snapshot);
    assert!(result.total_score < 80.0);
    assert_eq!(result.status, ComplianceStatus::Yellow);
}

#[test]
fn recommendations_follow_weight_order_without_duplicates() {
    let mut snapshot = clean_snapshot();
    snapshot.review.w9_submitted = false;
    snapshot.review.disclosure_filed = false;
    snapshot.athlete.tax_obligation_acknowledged = false;

    let result = score(&snapshot);
    let recommendations = &result.overall_recommendations;

    let w9 = "Collect a W-9 from the athlete before the first payment".to_string();
    assert_eq!(
        recommendations.iter().filter(|rec| **rec == w9).count(),
        1
    );

    let disclosure = recommendations
        .iter()
        .position(|rec| rec.starts_with("File the NIL disclosure"))
        .expect("policy recommendation present");
    let acknowledgment = recommendations
        .iter()
        .position(|rec| rec.contains("acknowledgment"))
        .expect("tax recommendation present");
    assert!(disclosure < acknowledgment);
}

#[test]
fn total_is_monotonic_when_review_items_are_completed() {
    let mut snapshot = clean_snapshot();
    snapshot.review = Default::default();
    snapshot.athlete.tax_obligation_acknowledged = false;
    let mut previous = score(&snapshot).total_score;

    let steps: [fn(&mut crate::engines::compliance::ComplianceSnapshot); 7] = [
        |s| s.review.school_approved = true,
        |s| s.review.disclosure_filed = true,
        |s| s.review.third_party_verified = true,
        |s| s.review.contract_signed = true,
        |s| s.review.w9_submitted = true,
        |s| s.review.disclosure_form_on_file = true,
        |s| s.athlete.tax_obligation_acknowledged = true,
    ];

    for step in steps {
        step(&mut snapshot);
        let total = score(&snapshot).total_score;
        assert!(total >= previous, "total dropped from {previous} to {total}");
        previous = total;
    }
    assert_eq!(previous, 100.0);
}

#[test]
fn totals_stay_within_bounds() {
    let mut worst = clean_snapshot();
    worst.review = Default::default();
    worst.athlete = minor_athlete();
    worst.athlete.tax_obligation_acknowledged = false;
    worst.deal.counter_party_name = "Casino Royale Sportsbook".to_string();
    worst.deal.booster_connected = true;
    worst.deal.compensation_amount = 1_000_000.0;

    let result = score(&worst);
    assert!(result.total_score >= 0.0);
    assert!(result.total_score <= 100.0);
    assert_eq!(result.status, ComplianceStatus::Red);
}

#[test]
fn engine_rejects_weights_that_do_not_sum_to_hundred() {
    let mut tables = LookupTables::bundled().expect("bundled lookups parse");
    tables.compliance_weights.guardian_consent = 20.0;

    match ComplianceEngine::new(Arc::new(tables)) {
        Err(WeightTableError::BadSum { sum }) => assert_eq!(sum, 110.0),
        other => panic!("expected bad weight sum, got {other:?}"),
    }
}

#[test]
fn result_serializes_with_camel_case_dimensions() {
    let result = score(&clean_snapshot());
    let value = serde_json::to_value(&result).expect("serialize");

    assert_eq!(value["status"], "green");
    assert_eq!(value["policyFit"]["weight"], 25.0);
    assert!(value["totalScore"].is_number());
    assert!(value["overallReasonCodes"].is_array());
    assert!(value["scoredAt"].is_string());
    assert!(value["policyFit"].get("reasonCodes").is_none());
}

#[test]
fn snapshot_validation_rejects_unusable_numbers() {
    let mut snapshot = clean_snapshot();
    assert!(snapshot.validate().is_ok());

    snapshot.deal.compensation_amount = f64::NAN;
    assert!(matches!(
        snapshot.validate(),
        Err(InputError::InvalidNumber {
            field: "deal.compensationAmount",
            ..
        })
    ));

    let mut snapshot = clean_snapshot();
    snapshot.fmv_range = Some(FmvRange {
        low: 5_000.0,
        high: 1_000.0,
    });
    assert!(matches!(
        snapshot.validate(),
        Err(InputError::OutOfRange {
            field: "fmvRange.high",
            ..
        })
    ));

    let mut snapshot = clean_snapshot();
    snapshot.deal.id = crate::engines::subject::DealId("  ".to_string());
    assert_eq!(
        snapshot.validate(),
        Err(InputError::Blank { field: "deal.id" })
    );
}
