use std::future::Future;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::engines::compliance::DealInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisRiskLevel {
    Low,
    Medium,
    High,
}

/// Result shape returned by the external contract-analysis service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractAnalysis {
    pub summary: String,
    #[serde(default)]
    pub risk_flags: Vec<String>,
    pub risk_level: AnalysisRiskLevel,
    pub analyzed_at: DateTime<Utc>,
}

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("contract analysis timed out after {0:?}")]
    Timeout(Duration),
    #[error("contract analysis unavailable: {0}")]
    Unavailable(String),
}

/// Outbound hook to the text-analysis service.
pub trait ContractAnalyzer: Send + Sync {
    fn analyze(
        &self,
        deal: &DealInput,
    ) -> impl Future<Output = Result<ContractAnalysis, AnalysisError>> + Send;
}

/// Runs the analyzer under `timeout`. Failures degrade to `None` with a warning.
pub async fn enrich<A: ContractAnalyzer>(
    analyzer: &A,
    deal: &DealInput,
    timeout: Duration,
) -> Option<ContractAnalysis> {
    let outcome = match tokio::time::timeout(timeout, analyzer.analyze(deal)).await {
        Ok(result) => result,
        Err(_) => Err(AnalysisError::Timeout(timeout)),
    };

    match outcome {
        Ok(analysis) => Some(analysis),
        Err(err) => {
            tracing::warn!(deal_id = %deal.id, error = %err, "contract analysis skipped");
            None
        }
    }
}
