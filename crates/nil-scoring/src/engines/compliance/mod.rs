//! Compliance scoring: six weighted risk dimensions, a pass/review/fail status, and a
//! cheaper quick check that errs toward the stricter tier.

mod aggregate;
mod dimensions;
pub mod domain;
mod quick;
mod weights;

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};

pub use aggregate::{
    classify_status, is_critical, partition_reason_codes, CRITICAL_PREFIXES, GREEN_THRESHOLD,
};
pub use domain::{
    AthleteContext, ComplianceScoreResult, ComplianceSnapshot, ComplianceStatus, ConsentStatus,
    DealInput, DealReview, Dimension, DimensionScore, FmvRange, PaymentSource, QuickRiskCheck,
    RiskTier, TaxProfile,
};
pub use weights::{WeightTable, WeightTableError};

use super::lookups::LookupTables;
use dimensions::DimensionContext;

/// Stateless evaluator applying the weight table and lookup data to a snapshot.
#[derive(Debug, Clone)]
pub struct ComplianceEngine {
    lookups: Arc<LookupTables>,
    weights: WeightTable,
}

impl ComplianceEngine {
    /// Fails when the configured weights do not sum to 100.
    pub fn new(lookups: Arc<LookupTables>) -> Result<Self, WeightTableError> {
        let weights = lookups.compliance_weights;
        weights.validate()?;
        Ok(Self { lookups, weights })
    }

    pub fn weights(&self) -> &WeightTable {
        &self.weights
    }

    pub fn lookups(&self) -> &LookupTables {
        &self.lookups
    }

    /// Full evaluation. `scored_at` also anchors age calculations, keeping the engine clock-free.
    pub fn score(
        &self,
        snapshot: &ComplianceSnapshot,
        scored_at: DateTime<Utc>,
    ) -> ComplianceScoreResult {
        let ctx = DimensionContext::new(snapshot, &self.lookups, scored_at.date_naive());

        let scores: BTreeMap<Dimension, DimensionScore> = Dimension::ALL
            .iter()
            .map(|dimension| {
                (
                    *dimension,
                    dimensions::score(*dimension, &ctx, &self.weights),
                )
            })
            .collect();

        aggregate::aggregate(snapshot.deal.id.clone(), scores, &self.weights, scored_at)
    }

    pub fn quick_check(
        &self,
        snapshot: &ComplianceSnapshot,
        scored_at: DateTime<Utc>,
    ) -> QuickRiskCheck {
        let ctx = DimensionContext::new(snapshot, &self.lookups, scored_at.date_naive());
        quick::quick_check(&ctx, &self.weights)
    }
}
