use super::domain::{AthleteSnapshot, FmvScore, Impact, ImprovementSuggestion};
use super::signals::AthleteSignals;

const FOLLOWER_TARGET: u64 = 10_000;
const ENGAGEMENT_TARGET_PERCENT: f64 = 5.0;
const PLATFORM_TARGET: usize = 3;
const CATEGORY_TARGET: usize = 3;
const BRAND_SCORE_TARGET: f64 = 15.0;
const COMPLETION_TARGET: f64 = 80.0;

fn suggestion(
    area: &str,
    current: String,
    target: &str,
    action: &str,
    impact: Impact,
    priority: u8,
) -> ImprovementSuggestion {
    ImprovementSuggestion {
        area: area.to_string(),
        current,
        target: target.to_string(),
        action: action.to_string(),
        impact,
        priority,
    }
}

/// One suggestion per unmet threshold, most urgent first. Equal priorities keep check order.
pub(crate) fn improvement_suggestions(
    snapshot: &AthleteSnapshot,
    signals: &AthleteSignals,
    score: &FmvScore,
) -> Vec<ImprovementSuggestion> {
    let profile = &snapshot.profile;
    let mut suggestions = Vec::new();

    if signals.followers.value < FOLLOWER_TARGET {
        suggestions.push(suggestion(
            "social",
            format!("{} followers", signals.followers.value),
            "10,000 followers",
            "Post consistently and cross-promote accounts to grow total reach",
            Impact::High,
            5,
        ));
    }

    let engagement = signals.engagement_percent();
    if engagement < ENGAGEMENT_TARGET_PERCENT {
        suggestions.push(suggestion(
            "social",
            format!("{engagement:.1}% engagement"),
            "5% engagement",
            "Reply to comments and favor short video to lift engagement",
            Impact::High,
            4,
        ));
    }

    if signals.active_platforms < PLATFORM_TARGET {
        suggestions.push(suggestion(
            "social",
            format!("{} active platforms", signals.active_platforms),
            "3 active platforms",
            "Open and maintain accounts on at least three platforms",
            Impact::Medium,
            3,
        ));
    }

    if signals.verified_platforms == 0 {
        suggestions.push(suggestion(
            "social",
            "no verified platforms".to_string(),
            "1 verified platform",
            "Apply for verification on the largest account",
            Impact::Low,
            3,
        ));
    }

    if signals.national_rank.is_none() {
        suggestions.push(suggestion(
            "athletic",
            "unranked".to_string(),
            "national ranking",
            "Submit film and results to a recruiting service for ranking",
            Impact::Medium,
            3,
        ));
    }

    if profile.content_categories.len() < CATEGORY_TARGET {
        suggestions.push(suggestion(
            "market",
            format!("{} content categories", profile.content_categories.len()),
            "3 content categories",
            "Branch into additional content categories such as lifestyle or training",
            Impact::Low,
            3,
        ));
    }

    if score.brand < BRAND_SCORE_TARGET {
        suggestions.push(suggestion(
            "brand",
            format!("brand score {:.1}", score.brand),
            "brand score 15",
            "List brand affinities and causes to sharpen sponsor fit",
            Impact::Medium,
            4,
        ));
    }

    if profile.profile_completion < COMPLETION_TARGET {
        suggestions.push(suggestion(
            "brand",
            format!("{:.0}% profile complete", profile.profile_completion),
            "80% profile complete",
            "Complete the public profile with bio, photos, and highlights",
            Impact::Low,
            3,
        ));
    }

    suggestions.sort_by(|a, b| b.priority.cmp(&a.priority));
    suggestions
}
