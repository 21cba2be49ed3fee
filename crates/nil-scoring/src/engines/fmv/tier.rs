use super::domain::FmvTier;

/// Lower bound of each tier, highest first. A score on a boundary belongs to the higher tier.
pub const TIER_FLOORS: [(f64, FmvTier); 5] = [
    (90.0, FmvTier::Elite),
    (75.0, FmvTier::High),
    (55.0, FmvTier::Medium),
    (35.0, FmvTier::Developing),
    (0.0, FmvTier::Emerging),
];

pub fn classify_tier(total: f64) -> FmvTier {
    TIER_FLOORS
        .iter()
        .find(|(floor, _)| total >= *floor)
        .map_or(FmvTier::Emerging, |(_, tier)| *tier)
}

/// `[floor, ceiling)` of the tier's score band; the top band closes at 100.
pub fn tier_band(tier: FmvTier) -> (f64, f64) {
    let mut ceiling = 100.0;
    for (floor, candidate) in TIER_FLOORS {
        if candidate == tier {
            return (floor, ceiling);
        }
        ceiling = floor;
    }
    (0.0, ceiling)
}
