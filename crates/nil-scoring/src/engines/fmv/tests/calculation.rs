use super::common::*;
use crate::engines::fmv::{FmvTier, Impact};
use crate::engines::subject::InputError;

#[test]
fn fully_developed_athlete_is_elite_with_nothing_to_improve() {
    let calculation = engine().calculate(&star_snapshot());

    assert_eq!(calculation.score.total, 100.0);
    assert_eq!(calculation.score.tier, FmvTier::Elite);
    assert_eq!(calculation.percentile_rank, 99);
    assert_eq!(calculation.strengths.len(), 4);
    assert!(calculation.weaknesses.is_empty());
    assert!(calculation.improvement_suggestions.is_empty());
    assert_eq!(calculation.estimated_deal_value_low, 75_000.0);
}

#[test]
fn empty_profile_is_emerging_with_ranked_suggestions() {
    let calculation = engine().calculate(&bare_snapshot());

    // Only the position default (1.5) and the missing-rules market default (6) contribute.
    assert_eq!(calculation.score.total, 7.5);
    assert_eq!(calculation.score.tier, FmvTier::Emerging);
    assert_eq!(calculation.weaknesses.len(), 4);
    assert!(calculation.estimated_deal_value_low < calculation.estimated_deal_value_mid);
    assert!(calculation.estimated_deal_value_mid < calculation.estimated_deal_value_high);

    let ranked: Vec<(&str, u8)> = calculation
        .improvement_suggestions
        .iter()
        .map(|suggestion| (suggestion.area.as_str(), suggestion.priority))
        .collect();
    assert_eq!(
        ranked,
        vec![
            ("social", 5),
            ("social", 4),
            ("brand", 4),
            ("social", 3),
            ("social", 3),
            ("athletic", 3),
            ("market", 3),
            ("brand", 3),
        ]
    );
    assert_eq!(calculation.improvement_suggestions[0].impact, Impact::High);
    assert_eq!(calculation.improvement_suggestions[0].current, "0 followers");
}

#[test]
fn suggestions_disappear_once_thresholds_are_met() {
    let mut snapshot = star_snapshot();
    snapshot.ranking = None;
    snapshot.profile.profile_completion = 60.0;

    let calculation = engine().calculate(&snapshot);
    let areas: Vec<&str> = calculation
        .improvement_suggestions
        .iter()
        .map(|suggestion| suggestion.area.as_str())
        .collect();

    assert_eq!(areas, vec!["athletic", "brand"]);
}

#[test]
fn calculation_is_idempotent() {
    let engine = engine();
    let snapshot = star_snapshot();

    assert_eq!(engine.calculate(&snapshot), engine.calculate(&snapshot));
    assert_eq!(engine.calculate(&bare_snapshot()), engine.calculate(&bare_snapshot()));
}

#[test]
fn total_is_the_sum_of_sub_scores() {
    let mut snapshot = star_snapshot();
    snapshot.social_stats.truncate(1);
    snapshot.profile.causes.clear();
    snapshot.ranking = None;

    let score = engine().score(&snapshot);
    let sum = score.social + score.athletic + score.market + score.brand;
    assert!((score.total - sum).abs() < 1e-9);
    assert!(score.total <= 100.0);
}

#[test]
fn calculation_serializes_flat() {
    let calculation = engine().calculate(&star_snapshot());
    let value = serde_json::to_value(&calculation).expect("serialize");

    assert_eq!(value["tier"], "elite");
    assert_eq!(value["total"], 100.0);
    assert_eq!(value["athleteId"], "ath-star");
    assert!(value["estimatedDealValueHigh"].is_number());
    assert!(value["improvementSuggestions"].is_array());
}

#[test]
fn validation_rejects_out_of_range_rates() {
    assert!(star_snapshot().validate().is_ok());

    let mut snapshot = star_snapshot();
    snapshot.social_stats[0].engagement_rate = 4.5;
    assert!(matches!(
        snapshot.validate(),
        Err(InputError::OutOfRange {
            field: "socialStats.engagementRate",
            ..
        })
    ));

    let mut snapshot = star_snapshot();
    snapshot.profile.profile_completion = f64::INFINITY;
    assert!(matches!(
        snapshot.validate(),
        Err(InputError::InvalidNumber { .. })
    ));
}
