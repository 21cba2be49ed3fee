use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::batch::{BatchFailure, BatchReport};
use super::enrichment::{enrich, ContractAnalysis, ContractAnalyzer};
use super::repository::{ComplianceScoreRow, FmvScoreRow, RepositoryError, ScoringRepository};
use crate::config::ScoringConfig;
use crate::engines::compliance::{
    ComplianceEngine, ComplianceScoreResult, QuickRiskCheck, WeightTableError,
};
use crate::engines::fmv::{FmvCalculation, FmvEngine};
use crate::engines::lookups::LookupTables;
use crate::engines::resolve::non_blank;
use crate::engines::subject::{AthleteId, DealId, InputError};

/// FMV totals at or above this (the medium tier floor) are shown publicly.
pub const PUBLIC_SCORE_THRESHOLD: f64 = 55.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplianceMode {
    #[default]
    Full,
    Quick,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceRequest {
    #[serde(default)]
    pub deal_id: Option<String>,
    #[serde(default)]
    pub mode: ComplianceMode,
}

impl ComplianceRequest {
    pub fn full(deal_id: impl Into<String>) -> Self {
        Self {
            deal_id: Some(deal_id.into()),
            mode: ComplianceMode::Full,
        }
    }

    pub fn quick(deal_id: impl Into<String>) -> Self {
        Self {
            deal_id: Some(deal_id.into()),
            mode: ComplianceMode::Quick,
        }
    }
}

/// Authoritative score plus the optional contract analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FullComplianceReport {
    #[serde(flatten)]
    pub result: ComplianceScoreResult,
    pub ai_analysis: Option<ContractAnalysis>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum ComplianceReport {
    Full(FullComplianceReport),
    Quick(QuickRiskCheck),
}

/// Service composing the repository, both engines, and the contract analyzer.
pub struct ScoringService<R, A> {
    repository: Arc<R>,
    analyzer: Arc<A>,
    compliance: Arc<ComplianceEngine>,
    fmv: Arc<FmvEngine>,
    analysis_timeout: Duration,
}

impl<R, A> ScoringService<R, A>
where
    R: ScoringRepository + 'static,
    A: ContractAnalyzer + 'static,
{
    /// Fails when the lookup tables carry an invalid weight table.
    pub fn new(
        repository: Arc<R>,
        analyzer: Arc<A>,
        lookups: Arc<LookupTables>,
        config: &ScoringConfig,
    ) -> Result<Self, ScoringServiceError> {
        let compliance = Arc::new(ComplianceEngine::new(Arc::clone(&lookups))?);
        let fmv = Arc::new(FmvEngine::new(lookups));

        Ok(Self {
            repository,
            analyzer,
            compliance,
            fmv,
            analysis_timeout: config.analysis_timeout,
        })
    }

    /// Full mode persists the result; quick mode only reports.
    pub async fn score_compliance(
        &self,
        request: ComplianceRequest,
    ) -> Result<ComplianceReport, ScoringServiceError> {
        let deal_id = non_blank(request.deal_id.as_deref())
            .map(DealId)
            .ok_or(ScoringServiceError::BadRequest("dealId"))?;

        let snapshot = self
            .repository
            .fetch_deal(&deal_id)?
            .ok_or_else(|| ScoringServiceError::DealNotFound(deal_id.clone()))?;
        snapshot.validate()?;

        let scored_at = Utc::now();
        match request.mode {
            ComplianceMode::Quick => {
                let quick = self.compliance.quick_check(&snapshot, scored_at);
                tracing::info!(
                    deal_id = %deal_id,
                    risk_tier = ?quick.risk_tier,
                    issues = quick.quick_issues.len(),
                    "quick compliance check completed"
                );
                Ok(ComplianceReport::Quick(quick))
            }
            ComplianceMode::Full => {
                let result = self.compliance.score(&snapshot, scored_at);
                let ai_analysis =
                    enrich(self.analyzer.as_ref(), &snapshot.deal, self.analysis_timeout).await;

                self.repository
                    .upsert_compliance(ComplianceScoreRow::from_result(&result, ai_analysis.clone()))?;

                tracing::info!(
                    deal_id = %deal_id,
                    total_score = result.total_score,
                    status = result.status.label(),
                    critical = result.critical_issues.len(),
                    enriched = ai_analysis.is_some(),
                    "compliance score stored"
                );
                Ok(ComplianceReport::Full(FullComplianceReport {
                    result,
                    ai_analysis,
                }))
            }
        }
    }

    /// Calculates and stores an athlete's FMV. Public visibility is decided here.
    pub fn calculate_fmv(
        &self,
        athlete_id: &AthleteId,
    ) -> Result<FmvCalculation, ScoringServiceError> {
        if athlete_id.0.trim().is_empty() {
            return Err(ScoringServiceError::BadRequest("athleteId"));
        }

        let snapshot = self
            .repository
            .fetch_athlete(athlete_id)?
            .ok_or_else(|| ScoringServiceError::AthleteNotFound(athlete_id.clone()))?;
        snapshot.validate()?;

        let calculation = self.fmv.calculate(&snapshot);
        let is_public_score = calculation.score.total >= PUBLIC_SCORE_THRESHOLD;
        self.repository.upsert_fmv(FmvScoreRow::from_calculation(
            &calculation,
            is_public_score,
            Utc::now(),
        ))?;

        tracing::info!(
            athlete_id = %athlete_id,
            total = calculation.score.total,
            tier = calculation.score.tier.label(),
            is_public_score,
            "fmv score stored"
        );
        Ok(calculation)
    }

    /// Scores every athlete, recording failures individually instead of stopping.
    pub fn calculate_fmv_batch(&self, athlete_ids: &[AthleteId]) -> BatchReport {
        let mut report = BatchReport::default();

        for athlete_id in athlete_ids {
            match self.calculate_fmv(athlete_id) {
                Ok(calculation) => report.calculations.push(calculation),
                Err(err) => {
                    tracing::warn!(athlete_id = %athlete_id, error = %err, "fmv batch record failed");
                    report.failures.push(BatchFailure {
                        athlete_id: athlete_id.clone(),
                        error: err.to_string(),
                    });
                }
            }
        }

        tracing::info!(
            attempted = report.attempted(),
            succeeded = report.succeeded(),
            "fmv batch finished"
        );
        report
    }

    pub fn stored_compliance(
        &self,
        deal_id: &DealId,
    ) -> Result<ComplianceScoreRow, ScoringServiceError> {
        self.repository
            .fetch_compliance(deal_id)?
            .ok_or_else(|| ScoringServiceError::DealNotFound(deal_id.clone()))
    }

    pub fn stored_fmv(&self, athlete_id: &AthleteId) -> Result<FmvScoreRow, ScoringServiceError> {
        self.repository
            .fetch_fmv(athlete_id)?
            .ok_or_else(|| ScoringServiceError::AthleteNotFound(athlete_id.clone()))
    }
}

/// Error raised by the scoring service.
#[derive(Debug, thiserror::Error)]
pub enum ScoringServiceError {
    #[error("{0} is required")]
    BadRequest(&'static str),
    #[error("deal {0} not found")]
    DealNotFound(DealId),
    #[error("athlete {0} not found")]
    AthleteNotFound(AthleteId),
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error("invalid compliance weights: {0}")]
    Weights(#[from] WeightTableError),
}
