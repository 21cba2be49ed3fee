use std::sync::Arc;

use crate::engines::fmv::{
    AthleteProfile, AthleteSnapshot, ExternalRanking, FmvEngine, JurisdictionRules, SocialStat,
};
use crate::engines::lookups::LookupTables;
use crate::engines::subject::{AthleteId, AthleteRole};

pub(super) fn lookups() -> Arc<LookupTables> {
    Arc::new(LookupTables::bundled().expect("bundled lookups parse"))
}

pub(super) fn engine() -> FmvEngine {
    FmvEngine::new(lookups())
}

pub(super) fn stat(platform: &str, followers: u64, engagement_rate: f64, verified: bool) -> SocialStat {
    SocialStat {
        platform: platform.to_string(),
        followers,
        engagement_rate,
        verified,
    }
}

/// A profile with nothing filled in beyond identity.
pub(super) fn bare_profile() -> AthleteProfile {
    AthleteProfile {
        id: AthleteId("ath-1".to_string()),
        role: AthleteRole::CollegeAthlete,
        state: None,
        sport: None,
        position: None,
        college_name: None,
        high_school_name: None,
        follower_count: None,
        engagement_rate: None,
        star_rating: None,
        content_categories: Vec::new(),
        brand_affinities: Vec::new(),
        causes: Vec::new(),
        profile_completion: 0.0,
    }
}

pub(super) fn bare_snapshot() -> AthleteSnapshot {
    AthleteSnapshot {
        profile: bare_profile(),
        social_stats: Vec::new(),
        jurisdiction_rules: None,
        ranking: None,
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

/// An athlete who maxes out every sub-score.
pub(super) fn star_snapshot() -> AthleteSnapshot {
    AthleteSnapshot {
        profile: AthleteProfile {
            id: AthleteId("ath-star".to_string()),
            role: AthleteRole::CollegeAthlete,
            state: Some("CA".to_string()),
            sport: Some("football".to_string()),
            position: Some("Quarterback".to_string()),
            college_name: Some("Ohio State University".to_string()),
            high_school_name: Some("Mater Dei".to_string()),
            follower_count: Some(1_000),
            engagement_rate: Some(0.01),
            star_rating: Some(3.0),
            content_categories: strings(&["training", "lifestyle", "gaming", "fashion", "food"]),
            brand_affinities: strings(&["apparel", "footwear", "nutrition", "tech", "auto"]),
            causes: strings(&["literacy", "youth sports", "mental health"]),
            profile_completion: 100.0,
        },
        social_stats: vec![
            stat("instagram", 200_000, 0.10, true),
            stat("tiktok", 150_000, 0.10, true),
            stat("x", 100_000, 0.10, true),
            stat("youtube", 50_000, 0.10, false),
        ],
        jurisdiction_rules: Some(JurisdictionRules {
            state: "CA".to_string(),
            allows_nil: true,
            allows_high_school_nil: true,
            prohibited_categories: strings(&["gambling", "cannabis"]),
        }),
        ranking: Some(ExternalRanking {
            national_rank: Some(8),
            star_rating: Some(5.0),
            source: Some("composite".to_string()),
        }),
    }
}
