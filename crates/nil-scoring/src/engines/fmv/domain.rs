use serde::{Deserialize, Serialize};

use crate::engines::subject::{check_present, check_range, AthleteId, AthleteRole, InputError};

/// Athlete record as stored by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AthleteProfile {
    pub id: AthleteId,
    pub role: AthleteRole,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub sport: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub college_name: Option<String>,
    #[serde(default)]
    pub high_school_name: Option<String>,
    /// Self-reported total, used only when no per-platform stats exist.
    #[serde(default)]
    pub follower_count: Option<u64>,
    #[serde(default)]
    pub engagement_rate: Option<f64>,
    #[serde(default)]
    pub star_rating: Option<f64>,
    #[serde(default)]
    pub content_categories: Vec<String>,
    #[serde(default)]
    pub brand_affinities: Vec<String>,
    #[serde(default)]
    pub causes: Vec<String>,
    /// Percentage of the public profile filled in, 0 to 100.
    #[serde(default)]
    pub profile_completion: f64,
}

/// One social platform's audience figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialStat {
    pub platform: String,
    #[serde(default)]
    pub followers: u64,
    /// Fraction, so 0.045 is 4.5%.
    #[serde(default)]
    pub engagement_rate: f64,
    #[serde(default)]
    pub verified: bool,
}

/// State NIL rules row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JurisdictionRules {
    pub state: String,
    pub allows_nil: bool,
    #[serde(default)]
    pub allows_high_school_nil: bool,
    #[serde(default)]
    pub prohibited_categories: Vec<String>,
}

/// Recruiting service ranking row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalRanking {
    #[serde(default)]
    pub national_rank: Option<u32>,
    #[serde(default)]
    pub star_rating: Option<f64>,
    #[serde(default)]
    pub source: Option<String>,
}

/// Everything the FMV engine reads for one athlete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AthleteSnapshot {
    pub profile: AthleteProfile,
    #[serde(default)]
    pub social_stats: Vec<SocialStat>,
    #[serde(default)]
    pub jurisdiction_rules: Option<JurisdictionRules>,
    #[serde(default)]
    pub ranking: Option<ExternalRanking>,
}

impl AthleteSnapshot {
    pub fn validate(&self) -> Result<(), InputError> {
        check_present("profile.id", &self.profile.id.0)?;
        if let Some(rate) = self.profile.engagement_rate {
            check_range("profile.engagementRate", rate, 0.0, 1.0)?;
        }
        if let Some(stars) = self.profile.star_rating {
            check_range("profile.starRating", stars, 0.0, 5.0)?;
        }
        check_range(
            "profile.profileCompletion",
            self.profile.profile_completion,
            0.0,
            100.0,
        )?;
        for stat in &self.social_stats {
            check_range("socialStats.engagementRate", stat.engagement_rate, 0.0, 1.0)?;
        }
        if let Some(stars) = self.ranking.as_ref().and_then(|ranking| ranking.star_rating) {
            check_range("ranking.starRating", stars, 0.0, 5.0)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FmvTier {
    Emerging,
    Developing,
    Medium,
    High,
    Elite,
}

impl FmvTier {
    pub const fn label(self) -> &'static str {
        match self {
            FmvTier::Emerging => "emerging",
            FmvTier::Developing => "developing",
            FmvTier::Medium => "medium",
            FmvTier::High => "high",
            FmvTier::Elite => "elite",
        }
    }
}

/// Sub-score maxima.
pub const SOCIAL_MAX: f64 = 30.0;
pub const ATHLETIC_MAX: f64 = 30.0;
pub const MARKET_MAX: f64 = 20.0;
pub const BRAND_MAX: f64 = 20.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FmvScore {
    pub total: f64,
    pub tier: FmvTier,
    pub social: f64,
    pub athletic: f64,
    pub market: f64,
    pub brand: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImprovementSuggestion {
    pub area: String,
    pub current: String,
    pub target: String,
    pub action: String,
    pub impact: Impact,
    /// 1 to 5, higher is more urgent.
    pub priority: u8,
}

/// Full FMV output for presentation and persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FmvCalculation {
    pub athlete_id: AthleteId,
    #[serde(flatten)]
    pub score: FmvScore,
    pub estimated_deal_value_low: f64,
    pub estimated_deal_value_mid: f64,
    pub estimated_deal_value_high: f64,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub improvement_suggestions: Vec<ImprovementSuggestion>,
    pub percentile_rank: u8,
}
