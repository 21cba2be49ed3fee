//! Fair-market-value scoring: four capped sub-scores, a tier, a deal-value range, and
//! ranked suggestions for raising the score.

pub mod domain;
mod signals;
mod subscores;
mod suggestions;
mod tier;
mod valuation;

#[cfg(test)]
mod tests;

use std::sync::Arc;

pub use domain::{
    AthleteProfile, AthleteSnapshot, ExternalRanking, FmvCalculation, FmvScore, FmvTier, Impact,
    ImprovementSuggestion, JurisdictionRules, SocialStat, ATHLETIC_MAX, BRAND_MAX, MARKET_MAX,
    SOCIAL_MAX,
};
pub use subscores::follower_points;
pub use tier::{classify_tier, tier_band, TIER_FLOORS};
pub use valuation::{estimate_deal_value, percentile_rank, tier_pricing, DealValueEstimate};

use super::lookups::LookupTables;
use signals::AthleteSignals;

const STRENGTH_SHARE: f64 = 0.7;
const WEAKNESS_SHARE: f64 = 0.4;

/// Stateless, clock-free evaluator; identical snapshots yield identical calculations.
#[derive(Debug, Clone)]
pub struct FmvEngine {
    lookups: Arc<LookupTables>,
}

impl FmvEngine {
    pub fn new(lookups: Arc<LookupTables>) -> Self {
        Self { lookups }
    }

    pub fn score(&self, snapshot: &AthleteSnapshot) -> FmvScore {
        let signals = AthleteSignals::resolve(snapshot);
        self.score_with(snapshot, &signals)
    }

    pub fn calculate(&self, snapshot: &AthleteSnapshot) -> FmvCalculation {
        let signals = AthleteSignals::resolve(snapshot);
        let score = self.score_with(snapshot, &signals);
        let estimate = estimate_deal_value(score.total);
        let (strengths, weaknesses) = strengths_and_weaknesses(&score);
        let improvement_suggestions =
            suggestions::improvement_suggestions(snapshot, &signals, &score);

        FmvCalculation {
            athlete_id: snapshot.profile.id.clone(),
            estimated_deal_value_low: estimate.low,
            estimated_deal_value_mid: estimate.mid,
            estimated_deal_value_high: estimate.high,
            strengths,
            weaknesses,
            improvement_suggestions,
            percentile_rank: percentile_rank(score.total),
            score,
        }
    }

    fn score_with(&self, snapshot: &AthleteSnapshot, signals: &AthleteSignals) -> FmvScore {
        let social = round2(subscores::social(signals));
        let athletic = round2(subscores::athletic(snapshot, signals, &self.lookups));
        let market = round2(subscores::market(snapshot, signals, &self.lookups));
        let brand = round2(subscores::brand(snapshot));
        let total = round2(social + athletic + market + brand).clamp(0.0, 100.0);

        FmvScore {
            total,
            tier: classify_tier(total),
            social,
            athletic,
            market,
            brand,
        }
    }
}

fn strengths_and_weaknesses(score: &FmvScore) -> (Vec<String>, Vec<String>) {
    let parts = [
        ("social reach", score.social, SOCIAL_MAX),
        ("athletic profile", score.athletic, ATHLETIC_MAX),
        ("market position", score.market, MARKET_MAX),
        ("brand fit", score.brand, BRAND_MAX),
    ];

    let mut strengths = Vec::new();
    let mut weaknesses = Vec::new();
    for (label, value, max) in parts {
        let described = format!("{label} ({value:.1}/{max:.0})");
        if value >= max * STRENGTH_SHARE {
            strengths.push(described);
        } else if value < max * WEAKNESS_SHARE {
            weaknesses.push(described);
        }
    }
    (strengths, weaknesses)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
