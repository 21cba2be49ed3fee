use nil_scoring::engines::compliance::{ComplianceSnapshot, DealInput};
use nil_scoring::engines::fmv::AthleteSnapshot;
use nil_scoring::engines::{AthleteId, DealId};
use nil_scoring::error::AppError;
use nil_scoring::scoring::{
    AnalysisError, ComplianceScoreRow, ContractAnalysis, ContractAnalyzer, FmvScoreRow,
    RepositoryError, ScoringRepository,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::{Arc, Mutex};

#[derive(Default, Clone)]
pub(crate) struct InMemoryScoringRepository {
    deals: Arc<Mutex<HashMap<DealId, ComplianceSnapshot>>>,
    athletes: Arc<Mutex<HashMap<AthleteId, AthleteSnapshot>>>,
    compliance: Arc<Mutex<HashMap<DealId, ComplianceScoreRow>>>,
    fmv: Arc<Mutex<HashMap<AthleteId, FmvScoreRow>>>,
}

impl InMemoryScoringRepository {
    pub(crate) fn insert_deal(&self, snapshot: ComplianceSnapshot) {
        let mut guard = self.deals.lock().expect("deal mutex poisoned");
        guard.insert(snapshot.deal.id.clone(), snapshot);
    }

    pub(crate) fn insert_athlete(&self, snapshot: AthleteSnapshot) {
        let mut guard = self.athletes.lock().expect("athlete mutex poisoned");
        guard.insert(snapshot.profile.id.clone(), snapshot);
    }
}

impl ScoringRepository for InMemoryScoringRepository {
    fn fetch_deal(&self, id: &DealId) -> Result<Option<ComplianceSnapshot>, RepositoryError> {
        let guard = self.deals.lock().expect("deal mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn fetch_athlete(&self, id: &AthleteId) -> Result<Option<AthleteSnapshot>, RepositoryError> {
        let guard = self.athletes.lock().expect("athlete mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn upsert_compliance(&self, row: ComplianceScoreRow) -> Result<(), RepositoryError> {
        let mut guard = self.compliance.lock().expect("score mutex poisoned");
        guard.insert(row.deal_id.clone(), row);
        Ok(())
    }

    fn upsert_fmv(&self, row: FmvScoreRow) -> Result<(), RepositoryError> {
        let mut guard = self.fmv.lock().expect("fmv mutex poisoned");
        guard.insert(row.athlete_id.clone(), row);
        Ok(())
    }

    fn fetch_compliance(&self, id: &DealId) -> Result<Option<ComplianceScoreRow>, RepositoryError> {
        let guard = self.compliance.lock().expect("score mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn fetch_fmv(&self, id: &AthleteId) -> Result<Option<FmvScoreRow>, RepositoryError> {
        let guard = self.fmv.lock().expect("fmv mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

/// Serves a pre-computed analysis, standing in for the remote text-analysis service.
#[derive(Debug, Default, Clone)]
pub(crate) struct RecordedAnalyzer {
    analysis: Option<ContractAnalysis>,
}

impl RecordedAnalyzer {
    pub(crate) fn new(analysis: Option<ContractAnalysis>) -> Self {
        Self { analysis }
    }
}

impl ContractAnalyzer for RecordedAnalyzer {
    async fn analyze(&self, _deal: &DealInput) -> Result<ContractAnalysis, AnalysisError> {
        self.analysis.clone().ok_or_else(|| {
            AnalysisError::Unavailable("no recorded analysis was supplied".to_string())
        })
    }
}

pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let file = File::open(path)?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
