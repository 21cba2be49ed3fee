use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enrichment::ContractAnalysis;
use crate::engines::compliance::{ComplianceScoreResult, ComplianceSnapshot, ComplianceStatus};
use crate::engines::fmv::{AthleteSnapshot, FmvCalculation, FmvTier};
use crate::engines::subject::{AthleteId, DealId};

/// Persisted compliance score, one column triple per dimension. Keyed by deal id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceScoreRow {
    pub deal_id: DealId,
    pub policy_fit_score: f64,
    pub policy_fit_weight: f64,
    pub policy_fit_notes: String,
    pub fmv_verification_score: f64,
    pub fmv_verification_weight: f64,
    pub fmv_verification_notes: String,
    pub document_hygiene_score: f64,
    pub document_hygiene_weight: f64,
    pub document_hygiene_notes: String,
    pub tax_readiness_score: f64,
    pub tax_readiness_weight: f64,
    pub tax_readiness_notes: String,
    pub brand_safety_score: f64,
    pub brand_safety_weight: f64,
    pub brand_safety_notes: String,
    pub guardian_consent_score: f64,
    pub guardian_consent_weight: f64,
    pub guardian_consent_notes: String,
    pub total_score: f64,
    pub status: ComplianceStatus,
    pub overall_reason_codes: Vec<String>,
    pub overall_recommendations: Vec<String>,
    pub ai_analysis: Option<ContractAnalysis>,
    pub scored_at: DateTime<Utc>,
}

impl ComplianceScoreRow {
    pub fn from_result(result: &ComplianceScoreResult, ai_analysis: Option<ContractAnalysis>) -> Self {
        Self {
            deal_id: result.deal_id.clone(),
            policy_fit_score: result.policy_fit.score,
            policy_fit_weight: result.policy_fit.weight,
            policy_fit_notes: result.policy_fit.notes.clone(),
            fmv_verification_score: result.fmv_verification.score,
            fmv_verification_weight: result.fmv_verification.weight,
            fmv_verification_notes: result.fmv_verification.notes.clone(),
            document_hygiene_score: result.document_hygiene.score,
            document_hygiene_weight: result.document_hygiene.weight,
            document_hygiene_notes: result.document_hygiene.notes.clone(),
            tax_readiness_score: result.tax_readiness.score,
            tax_readiness_weight: result.tax_readiness.weight,
            tax_readiness_notes: result.tax_readiness.notes.clone(),
            brand_safety_score: result.brand_safety.score,
            brand_safety_weight: result.brand_safety.weight,
            brand_safety_notes: result.brand_safety.notes.clone(),
            guardian_consent_score: result.guardian_consent.score,
            guardian_consent_weight: result.guardian_consent.weight,
            guardian_consent_notes: result.guardian_consent.notes.clone(),
            total_score: result.total_score,
            status: result.status,
            overall_reason_codes: result.overall_reason_codes.clone(),
            overall_recommendations: result.overall_recommendations.clone(),
            ai_analysis,
            scored_at: result.scored_at,
        }
    }
}

/// Persisted FMV score keyed by athlete id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FmvScoreRow {
    pub athlete_id: AthleteId,
    pub fmv_score: f64,
    pub tier: FmvTier,
    pub social_score: f64,
    pub athletic_score: f64,
    pub market_score: f64,
    pub brand_score: f64,
    pub deal_value_low: f64,
    pub deal_value_mid: f64,
    pub deal_value_high: f64,
    pub percentile_rank: u8,
    pub is_public_score: bool,
    pub calculated_at: DateTime<Utc>,
}

impl FmvScoreRow {
    pub fn from_calculation(
        calculation: &FmvCalculation,
        is_public_score: bool,
        calculated_at: DateTime<Utc>,
    ) -> Self {
        let score = &calculation.score;
        Self {
            athlete_id: calculation.athlete_id.clone(),
            fmv_score: score.total,
            tier: score.tier,
            social_score: score.social,
            athletic_score: score.athletic,
            market_score: score.market,
            brand_score: score.brand,
            deal_value_low: calculation.estimated_deal_value_low,
            deal_value_mid: calculation.estimated_deal_value_mid,
            deal_value_high: calculation.estimated_deal_value_high,
            percentile_rank: calculation.percentile_rank,
            is_public_score,
            calculated_at,
        }
    }
}

/// Storage abstraction so the service can be exercised without a database.
/// Upserts overwrite any existing row for the same subject.
pub trait ScoringRepository: Send + Sync {
    fn fetch_deal(&self, id: &DealId) -> Result<Option<ComplianceSnapshot>, RepositoryError>;
    fn fetch_athlete(&self, id: &AthleteId) -> Result<Option<AthleteSnapshot>, RepositoryError>;
    fn upsert_compliance(&self, row: ComplianceScoreRow) -> Result<(), RepositoryError>;
    fn upsert_fmv(&self, row: FmvScoreRow) -> Result<(), RepositoryError>;
    fn fetch_compliance(&self, id: &DealId) -> Result<Option<ComplianceScoreRow>, RepositoryError>;
    fn fetch_fmv(&self, id: &AthleteId) -> Result<Option<FmvScoreRow>, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
