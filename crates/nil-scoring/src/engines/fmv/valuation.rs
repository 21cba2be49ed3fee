use super::domain::FmvTier;
use super::tier::{classify_tier, tier_band};

/// Estimated low/mid/high deal values, in whole currency units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DealValueEstimate {
    pub low: f64,
    pub mid: f64,
    pub high: f64,
}

/// `(base, multiplier)` per tier.
pub const fn tier_pricing(tier: FmvTier) -> (f64, f64) {
    match tier {
        FmvTier::Elite => (50_000.0, 3.0),
        FmvTier::High => (15_000.0, 2.5),
        FmvTier::Medium => (5_000.0, 2.0),
        FmvTier::Developing => (1_500.0, 2.0),
        FmvTier::Emerging => (500.0, 1.5),
    }
}

const HIGH_STRETCH: f64 = 1.5;
const MAX_SCALE_BONUS: f64 = 0.5;

/// Position within the tier's band stretches the base between 1.0x and 1.5x.
///
/// This replaces the `1 + (score mod 15) / 30` scale, which wraps inside bands not
/// 15 points wide (59 scaled above 60 in the medium tier).
pub fn scale_for(total: f64) -> f64 {
    let (floor, ceiling) = tier_band(classify_tier(total));
    let position = ((total - floor) / (ceiling - floor)).clamp(0.0, 1.0);
    1.0 + position * MAX_SCALE_BONUS
}

pub fn estimate_deal_value(total: f64) -> DealValueEstimate {
    let total = total.clamp(0.0, 100.0);
    let (base, multiplier) = tier_pricing(classify_tier(total));
    let scale = scale_for(total);

    DealValueEstimate {
        low: (base * scale).round(),
        mid: (base * multiplier * scale).round(),
        high: (base * multiplier * HIGH_STRETCH * scale).round(),
    }
}

pub fn percentile_rank(total: f64) -> u8 {
    (total.clamp(0.0, 100.0) * 0.99).round().min(99.0) as u8
}
