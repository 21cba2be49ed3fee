//! The four FMV sub-score calculators. Each is capped at its own maximum before
//! the total is formed.

use super::domain::{AthleteSnapshot, ATHLETIC_MAX, BRAND_MAX, MARKET_MAX, SOCIAL_MAX};
use super::signals::AthleteSignals;
use crate::engines::lookups::{LookupTables, PrestigeTier};
use crate::engines::subject::AthleteRole;

/// `(followers, points)` breakpoints; points interpolate linearly between them.
const FOLLOWER_BANDS: [(f64, f64); 7] = [
    (0.0, 0.0),
    (1_000.0, 2.0),
    (5_000.0, 4.0),
    (10_000.0, 6.0),
    (50_000.0, 8.0),
    (100_000.0, 9.5),
    (500_000.0, 12.0),
];

/// `(worst rank still in band, points)`.
const RANKING_BANDS: [(u32, f64); 6] = [
    (10, 12.0),
    (25, 10.0),
    (50, 8.0),
    (100, 6.0),
    (250, 4.0),
    (500, 2.0),
];
const RANKED_OUTSIDE_BANDS: f64 = 1.0;

const MISSING_RULES_SCORE: f64 = 6.0;
const MAJOR_MARKET_BONUS: f64 = 4.0;

pub fn follower_points(followers: u64) -> f64 {
    let followers = followers as f64;
    let mut previous = FOLLOWER_BANDS[0];
    for band in FOLLOWER_BANDS.iter().skip(1) {
        if followers < band.0 {
            let position = (followers - previous.0) / (band.0 - previous.0);
            return previous.1 + position * (band.1 - previous.1);
        }
        previous = *band;
    }
    previous.1
}

pub(crate) fn social(signals: &AthleteSignals) -> f64 {
    let reach = follower_points(signals.followers.value);
    let engagement = signals.engagement_percent().clamp(0.0, 10.0);
    let verification = (signals.verified_platforms as f64 * 2.5).min(5.0);
    let diversity = (signals.active_platforms as f64 * 0.75).min(3.0);

    (reach + engagement + verification + diversity).clamp(0.0, SOCIAL_MAX)
}

pub(crate) fn prestige_points(
    lookups: &LookupTables,
    role: AthleteRole,
    school: Option<&str>,
) -> f64 {
    let Some(school) = school else {
        return 0.0;
    };
    match lookups.prestige_tier(school) {
        Some(PrestigeTier::CollegeTier1) => 10.0,
        Some(PrestigeTier::CollegeTier2) => 7.0,
        Some(PrestigeTier::CollegeTier3) => 5.0,
        Some(PrestigeTier::HighSchoolTier1) => 8.0,
        Some(PrestigeTier::HighSchoolTier2) => 4.0,
        None => match role {
            AthleteRole::CollegeAthlete => 2.0,
            AthleteRole::HsStudent => 1.0,
        },
    }
}

pub(crate) fn ranking_points(national_rank: Option<u32>) -> f64 {
    let Some(rank) = national_rank.filter(|rank| *rank > 0) else {
        return 0.0;
    };
    RANKING_BANDS
        .iter()
        .find(|(worst, _)| rank <= *worst)
        .map_or(RANKED_OUTSIDE_BANDS, |(_, points)| *points)
}

pub(crate) fn athletic(
    snapshot: &AthleteSnapshot,
    signals: &AthleteSignals,
    lookups: &LookupTables,
) -> f64 {
    let profile = &snapshot.profile;
    let prestige = prestige_points(lookups, profile.role, signals.school.value.as_deref());
    let ranking = ranking_points(signals.national_rank);
    let stars = signals.star_rating.value.unwrap_or(0.0).clamp(0.0, 5.0);
    let position = match profile.position.as_deref() {
        Some(position) if lookups.is_high_value_position(position) => 3.0,
        _ => 1.5,
    };

    (prestige + ranking + stars + position).clamp(0.0, ATHLETIC_MAX)
}

pub(crate) fn market(
    snapshot: &AthleteSnapshot,
    signals: &AthleteSignals,
    lookups: &LookupTables,
) -> f64 {
    let friendliness = match &snapshot.jurisdiction_rules {
        Some(rules) => {
            let mut points = 0.0;
            if rules.allows_nil {
                points += 5.0;
            }
            if rules.allows_high_school_nil {
                points += 2.0;
            }
            points += match rules.prohibited_categories.len() {
                0..=3 => 2.0,
                4..=6 => 1.0,
                _ => 0.0,
            };
            points
        }
        None => MISSING_RULES_SCORE,
    };

    let categories = (snapshot.profile.content_categories.len() as f64 * 1.5).min(7.0);

    let geography = match signals.market_state.value.as_deref() {
        Some(state) if lookups.is_major_market(state) => MAJOR_MARKET_BONUS,
        _ => 0.0,
    };

    (friendliness + categories + geography).clamp(0.0, MARKET_MAX)
}

pub(crate) fn brand(snapshot: &AthleteSnapshot) -> f64 {
    let profile = &snapshot.profile;
    let affinity = (profile.brand_affinities.len() as f64 * 2.0).min(8.0);
    let values = (profile.causes.len() as f64 * 2.5).min(7.0);
    let completeness = profile.profile_completion.clamp(0.0, 100.0) / 20.0;

    (affinity + values + completeness).clamp(0.0, BRAND_MAX)
}
