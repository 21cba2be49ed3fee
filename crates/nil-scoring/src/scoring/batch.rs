use serde::Serialize;
use serde_json::Value;

use super::import::SocialImport;
use crate::engines::fmv::{AthleteSnapshot, FmvCalculation, FmvTier};
use crate::engines::subject::AthleteId;

/// One athlete the batch could not score.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchFailure {
    pub athlete_id: AthleteId,
    pub error: String,
}

/// Outcome of a batch run; failures never stop the remaining athletes.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReport {
    pub calculations: Vec<FmvCalculation>,
    pub failures: Vec<BatchFailure>,
}

impl BatchReport {
    /// Records rejected before scoring count as failures of the same run.
    pub fn record_rejected(&mut self, rejected: Vec<BatchFailure>) {
        self.failures.splice(0..0, rejected);
    }

    pub fn attempted(&self) -> usize {
        self.calculations.len() + self.failures.len()
    }

    pub fn succeeded(&self) -> usize {
        self.calculations.len()
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Tier distribution of the successful calculations, highest tier first.
    pub fn tier_counts(&self) -> Vec<(FmvTier, usize)> {
        let mut counts: Vec<(FmvTier, usize)> = Vec::new();
        for calculation in &self.calculations {
            let tier = calculation.score.tier;
            match counts.iter_mut().find(|(candidate, _)| *candidate == tier) {
                Some((_, count)) => *count += 1,
                None => counts.push((tier, 1)),
            }
        }
        counts.sort_by(|a, b| b.0.cmp(&a.0));
        counts
    }
}

/// Athlete records prepared for a batch run. A record that cannot be read is held
/// back as a failure so the rest of the batch is still scored.
#[derive(Debug, Clone, Default)]
pub struct BatchInput {
    pub athletes: Vec<AthleteSnapshot>,
    pub rejected: Vec<BatchFailure>,
}

impl BatchInput {
    /// Converts each JSON record on its own. Unreadable records are named by their
    /// `profile.id` when present, otherwise by their 1-based position.
    pub fn from_records(records: Vec<Value>) -> Self {
        let mut input = BatchInput::default();

        for (index, record) in records.into_iter().enumerate() {
            let athlete_id = record
                .pointer("/profile/id")
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map_or_else(|| format!("record-{}", index + 1), str::to_string);

            match serde_json::from_value::<AthleteSnapshot>(record) {
                Ok(snapshot) => input.athletes.push(snapshot),
                Err(err) => {
                    tracing::warn!(athlete_id = %athlete_id, error = %err, "athlete record rejected");
                    input.rejected.push(BatchFailure {
                        athlete_id: AthleteId(athlete_id),
                        error: format!("invalid athlete record: {err}"),
                    });
                }
            }
        }

        input
    }

    /// Appends imported stats to their athletes. An athlete with a rejected stat row
    /// is withheld from scoring, since its social reach would be understated.
    /// Returns the ids the import mentions that match no athlete.
    pub fn apply_social_import(&mut self, import: SocialImport) -> Vec<AthleteId> {
        let SocialImport {
            mut stats,
            mut rejected,
            unattributed,
        } = import;
        for err in &unattributed {
            tracing::warn!(error = %err, "social stats row names no athlete");
        }

        let mut kept = Vec::with_capacity(self.athletes.len());
        for mut athlete in std::mem::take(&mut self.athletes) {
            let imported = stats.remove(&athlete.profile.id);
            if let Some(errors) = rejected.remove(&athlete.profile.id) {
                let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
                self.rejected.push(BatchFailure {
                    athlete_id: athlete.profile.id,
                    error: messages.join("; "),
                });
                continue;
            }
            if let Some(imported) = imported {
                athlete.social_stats.extend(imported);
            }
            kept.push(athlete);
        }
        self.athletes = kept;

        let mut unknown: Vec<AthleteId> = stats.into_keys().chain(rejected.into_keys()).collect();
        unknown.sort();
        unknown.dedup();
        unknown
    }

    pub fn athlete_ids(&self) -> Vec<AthleteId> {
        self.athletes
            .iter()
            .map(|athlete| athlete.profile.id.clone())
            .collect()
    }
}
