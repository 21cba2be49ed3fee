use super::domain::AthleteSnapshot;
use crate::engines::resolve::{non_blank, FieldResolver, Resolved};

/// Inputs resolved once from the snapshot's overlapping sources.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct AthleteSignals {
    pub followers: Resolved<u64>,
    /// Fraction, so 0.045 is 4.5%.
    pub engagement_rate: Resolved<f64>,
    /// Platforms with at least one follower.
    pub active_platforms: usize,
    pub verified_platforms: usize,
    pub school: Resolved<Option<String>>,
    pub star_rating: Resolved<Option<f64>>,
    pub national_rank: Option<u32>,
    /// State whose market size counts toward the market sub-score.
    pub market_state: Resolved<Option<String>>,
}

impl AthleteSignals {
    pub(crate) fn resolve(snapshot: &AthleteSnapshot) -> Self {
        let profile = &snapshot.profile;
        let active: Vec<_> = snapshot
            .social_stats
            .iter()
            .filter(|stat| stat.followers > 0)
            .collect();
        let stat_followers: u64 = active.iter().map(|stat| stat.followers).sum();

        let followers = FieldResolver::new("follower_count")
            .candidate(
                "social_stats",
                (!snapshot.social_stats.is_empty()).then_some(stat_followers),
            )
            .candidate("profile", profile.follower_count)
            .or_default(0);

        let engagement_rate = FieldResolver::new("engagement_rate")
            .candidate_with("social_stats", || {
                (stat_followers > 0).then(|| {
                    active
                        .iter()
                        .map(|stat| stat.engagement_rate * stat.followers as f64)
                        .sum::<f64>()
                        / stat_followers as f64
                })
            })
            .candidate("profile", profile.engagement_rate)
            .or_default(0.0);

        let school = FieldResolver::new("school")
            .candidate("college", non_blank(profile.college_name.as_deref()).map(Some))
            .candidate(
                "high_school",
                non_blank(profile.high_school_name.as_deref()).map(Some),
            )
            .or_default(None);

        let star_rating = FieldResolver::new("star_rating")
            .candidate(
                "ranking",
                snapshot
                    .ranking
                    .as_ref()
                    .and_then(|ranking| ranking.star_rating)
                    .map(Some),
            )
            .candidate("profile", profile.star_rating.map(Some))
            .or_default(None);

        let market_state = FieldResolver::new("market_state")
            .candidate("profile", non_blank(profile.state.as_deref()).map(Some))
            .candidate(
                "jurisdiction_rules",
                snapshot
                    .jurisdiction_rules
                    .as_ref()
                    .and_then(|rules| non_blank(Some(rules.state.as_str())))
                    .map(Some),
            )
            .or_default(None);

        Self {
            followers,
            engagement_rate,
            active_platforms: active.len(),
            verified_platforms: active.iter().filter(|stat| stat.verified).count(),
            school,
            star_rating,
            national_rank: snapshot
                .ranking
                .as_ref()
                .and_then(|ranking| ranking.national_rank),
            market_state,
        }
    }

    pub(crate) fn engagement_percent(&self) -> f64 {
        self.engagement_rate.value * 100.0
    }
}
