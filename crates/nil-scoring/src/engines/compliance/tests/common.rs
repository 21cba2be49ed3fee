use std::sync::Arc;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::engines::compliance::{
    AthleteContext, ComplianceEngine, ComplianceScoreResult, ComplianceSnapshot, DealInput,
    DealReview, FmvRange, TaxProfile,
};
use crate::engines::lookups::LookupTables;
use crate::engines::subject::{AthleteId, AthleteRole, DealId};

pub(super) fn scored_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn lookups() -> Arc<LookupTables> {
    Arc::new(LookupTables::bundled().expect("bundled lookups parse"))
}

pub(super) fn engine() -> ComplianceEngine {
    ComplianceEngine::new(lookups()).expect("bundled weights are valid")
}

pub(super) fn deal() -> DealInput {
    DealInput {
        id: DealId("deal-100".to_string()),
        athlete_id: AthleteId("ath-7".to_string()),
        deal_type: "social_post".to_string(),
        counter_party_name: "Acme Apparel".to_string(),
        compensation_amount: 2_500.0,
        deliverables: "Two Instagram posts featuring the new running shoe line".to_string(),
        contract_text: Some("Athlete agrees to publish two posts.".to_string()),
        contract_url: None,
        jurisdiction: Some("TX".to_string()),
        start_date: NaiveDate::from_ymd_opt(2026, 3, 15),
        end_date: NaiveDate::from_ymd_opt(2026, 6, 15),
        school_affiliated: false,
        booster_connected: false,
        performance_based: false,
    }
}

pub(super) fn college_athlete() -> AthleteContext {
    AthleteContext {
        id: AthleteId("ath-7".to_string()),
        role: AthleteRole::CollegeAthlete,
        is_minor: Some(false),
        date_of_birth: NaiveDate::from_ymd_opt(2004, 9, 2),
        state: Some("TX".to_string()),
        sport: Some("basketball".to_string()),
        follower_count: 42_000,
        engagement_rate: 0.045,
        consent_status: None,
        guardian_verified: false,
        tax_obligation_acknowledged: true,
    }
}

pub(super) fn minor_athlete() -> AthleteContext {
    AthleteContext {
        id: AthleteId("ath-9".to_string()),
        role: AthleteRole::HsStudent,
        is_minor: Some(true),
        date_of_birth: NaiveDate::from_ymd_opt(2010, 1, 20),
        state: Some("TX".to_string()),
        sport: Some("football".to_string()),
        follower_count: 3_000,
        engagement_rate: 0.08,
        consent_status: None,
        guardian_verified: false,
        tax_obligation_acknowledged: true,
    }
}

pub(super) fn complete_review() -> DealReview {
    DealReview {
        school_approved: true,
        disclosure_filed: true,
        third_party_verified: true,
        contract_signed: true,
        w9_submitted: true,
        disclosure_form_on_file: true,
        payment_source: None,
        payer_description: None,
        counter_party_category: Some("apparel".to_string()),
        contract_risk_flags: Vec::new(),
    }
}

/// A deal that passes every dimension at full weight.
pub(super) fn clean_snapshot() -> ComplianceSnapshot {
    ComplianceSnapshot {
        deal: deal(),
        athlete: college_athlete(),
        review: complete_review(),
        tax: TaxProfile {
            professional_support: false,
            ytd_nil_earnings: 1_200.0,
        },
        fmv_range: Some(FmvRange {
            low: 1_000.0,
            high: 5_000.0,
        }),
    }
}

pub(super) fn score(snapshot: &ComplianceSnapshot) -> ComplianceScoreResult {
    engine().score(snapshot, scored_at())
}
