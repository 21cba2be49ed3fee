//! Caller-side orchestration: fetch snapshots, run the engines, persist results, and
//! attach the optional contract analysis.

pub mod batch;
pub mod enrichment;
pub mod import;
pub mod repository;
mod service;

#[cfg(test)]
mod tests;

pub use batch::{BatchFailure, BatchInput, BatchReport};
pub use enrichment::{enrich, AnalysisError, AnalysisRiskLevel, ContractAnalysis, ContractAnalyzer};
pub use import::{parse_social_stats, SocialImport, SocialImportError, SocialStatsByAthlete};
pub use repository::{ComplianceScoreRow, FmvScoreRow, RepositoryError, ScoringRepository};
pub use service::{
    ComplianceMode, ComplianceReport, ComplianceRequest, FullComplianceReport, ScoringService,
    ScoringServiceError, PUBLIC_SCORE_THRESHOLD,
};
