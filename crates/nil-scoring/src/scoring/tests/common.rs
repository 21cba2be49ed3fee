use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{TimeZone, Utc};
use serde_json::json;

use crate::config::ScoringConfig;
use crate::engines::compliance::{ComplianceSnapshot, DealInput};
use crate::engines::fmv::AthleteSnapshot;
use crate::engines::lookups::LookupTables;
use crate::engines::subject::{AthleteId, DealId};
use crate::scoring::{
    AnalysisError, AnalysisRiskLevel, ComplianceScoreRow, ContractAnalysis, ContractAnalyzer,
    FmvScoreRow, RepositoryError, ScoringRepository, ScoringService,
};

#[derive(Default)]
pub(super) struct MemoryRepository {
    deals: Mutex<HashMap<DealId, ComplianceSnapshot>>,
    athletes: Mutex<HashMap<AthleteId, AthleteSnapshot>>,
    compliance: Mutex<HashMap<DealId, ComplianceScoreRow>>,
    fmv: Mutex<HashMap<AthleteId, FmvScoreRow>>,
}

impl MemoryRepository {
    pub(super) fn with_deal(self, snapshot: ComplianceSnapshot) -> Self {
        self.deals
            .lock()
            .expect("deal mutex poisoned")
            .insert(snapshot.deal.id.clone(), snapshot);
        self
    }

    pub(super) fn with_athlete(self, snapshot: AthleteSnapshot) -> Self {
        self.athletes
            .lock()
            .expect("athlete mutex poisoned")
            .insert(snapshot.profile.id.clone(), snapshot);
        self
    }

    pub(super) fn compliance_rows(&self) -> usize {
        self.compliance.lock().expect("score mutex poisoned").len()
    }
}

impl ScoringRepository for MemoryRepository {
    fn fetch_deal(&self, id: &DealId) -> Result<Option<ComplianceSnapshot>, RepositoryError> {
        Ok(self.deals.lock().expect("deal mutex poisoned").get(id).cloned())
    }

    fn fetch_athlete(&self, id: &AthleteId) -> Result<Option<AthleteSnapshot>, RepositoryError> {
        Ok(self
            .athletes
            .lock()
            .expect("athlete mutex poisoned")
            .get(id)
            .cloned())
    }

    fn upsert_compliance(&self, row: ComplianceScoreRow) -> Result<(), RepositoryError> {
        self.compliance
            .lock()
            .expect("score mutex poisoned")
            .insert(row.deal_id.clone(), row);
        Ok(())
    }

    fn upsert_fmv(&self, row: FmvScoreRow) -> Result<(), RepositoryError> {
        self.fmv
            .lock()
            .expect("fmv mutex poisoned")
            .insert(row.athlete_id.clone(), row);
        Ok(())
    }

    fn fetch_compliance(&self, id: &DealId) -> Result<Option<ComplianceScoreRow>, RepositoryError> {
        Ok(self
            .compliance
            .lock()
            .expect("score mutex poisoned")
            .get(id)
            .cloned())
    }

    fn fetch_fmv(&self, id: &AthleteId) -> Result<Option<FmvScoreRow>, RepositoryError> {
        Ok(self.fmv.lock().expect("fmv mutex poisoned").get(id).cloned())
    }
}

pub(super) fn analysis() -> ContractAnalysis {
    ContractAnalysis {
        summary: "Standard two-post social agreement".to_string(),
        risk_flags: vec!["auto-renewal clause".to_string()],
        risk_level: AnalysisRiskLevel::Low,
        analyzed_at: Utc
            .with_ymd_and_hms(2026, 3, 1, 12, 0, 5)
            .single()
            .expect("valid timestamp"),
    }
}

/// Analyzer behaviors the enrichment path must tolerate.
pub(super) enum StubAnalyzer {
    Returns(ContractAnalysis),
    Sleeps(Duration),
    Fails,
}

impl ContractAnalyzer for StubAnalyzer {
    async fn analyze(&self, _deal: &DealInput) -> Result<ContractAnalysis, AnalysisError> {
        match self {
            StubAnalyzer::Returns(analysis) => Ok(analysis.clone()),
            StubAnalyzer::Sleeps(delay) => {
                tokio::time::sleep(*delay).await;
                Ok(analysis())
            }
            StubAnalyzer::Fails => Err(AnalysisError::Unavailable("upstream 503".to_string())),
        }
    }
}

pub(super) fn deal_snapshot(id: &str, booster_connected: bool) -> ComplianceSnapshot {
    serde_json::from_value(json!({
        "deal": {
            "id": id,
            "athleteId": "ath-1",
            "dealType": "social_post",
            "counterPartyName": "Acme Apparel",
            "compensationAmount": 2500.0,
            "deliverables": "Two Instagram posts",
            "contractText": "Athlete agrees to publish two posts.",
            "jurisdiction": "TX",
            "boosterConnected": booster_connected
        },
        "athlete": {
            "id": "ath-1",
            "role": "college_athlete",
            "isMinor": false,
            "taxObligationAcknowledged": true
        },
        "review": {
            "schoolApproved": true,
            "disclosureFiled": true,
            "thirdPartyVerified": true,
            "contractSigned": true,
            "w9Submitted": true,
            "disclosureFormOnFile": true
        },
        "tax": { "ytdNilEarnings": 1200.0 },
        "fmvRange": { "low": 1000.0, "high": 5000.0 }
    }))
    .expect("deal fixture deserializes")
}

/// Scores 56.75: above the public threshold.
pub(super) fn public_athlete(id: &str) -> AthleteSnapshot {
    serde_json::from_value(json!({
        "profile": {
            "id": id,
            "role": "college_athlete",
            "state": "CA",
            "position": "QB",
            "collegeName": "Ohio State",
            "profileCompletion": 90.0
        },
        "socialStats": [
            { "platform": "instagram", "followers": 500000, "engagementRate": 0.10, "verified": true },
            { "platform": "tiktok", "followers": 100000, "engagementRate": 0.10, "verified": true },
            { "platform": "x", "followers": 5000, "engagementRate": 0.10, "verified": false }
        ]
    }))
    .expect("athlete fixture deserializes")
}

/// Scores 7.5: position default plus the missing-rules market default.
pub(super) fn private_athlete(id: &str) -> AthleteSnapshot {
    serde_json::from_value(json!({
        "profile": { "id": id, "role": "hs_student" }
    }))
    .expect("athlete fixture deserializes")
}

pub(super) fn service(
    repository: MemoryRepository,
    analyzer: StubAnalyzer,
) -> (
    ScoringService<MemoryRepository, StubAnalyzer>,
    Arc<MemoryRepository>,
) {
    let repository = Arc::new(repository);
    let lookups = Arc::new(LookupTables::bundled().expect("bundled lookups parse"));
    let config = ScoringConfig {
        analysis_timeout: Duration::from_millis(200),
        ..ScoringConfig::default()
    };
    let service = ScoringService::new(repository.clone(), Arc::new(analyzer), lookups, &config)
        .expect("bundled weights are valid");
    (service, repository)
}
