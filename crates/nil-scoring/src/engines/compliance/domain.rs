use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::engines::subject::{
    check_amount, check_present, check_range, AthleteId, AthleteRole, DealId, InputError,
};

/// Deal facts as proposed or signed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealInput {
    pub id: DealId,
    pub athlete_id: AthleteId,
    pub deal_type: String,
    pub counter_party_name: String,
    pub compensation_amount: f64,
    #[serde(default)]
    pub deliverables: String,
    #[serde(default)]
    pub contract_text: Option<String>,
    #[serde(default)]
    pub contract_url: Option<String>,
    #[serde(default)]
    pub jurisdiction: Option<String>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub school_affiliated: bool,
    #[serde(default)]
    pub booster_connected: bool,
    #[serde(default)]
    pub performance_based: bool,
}

/// Athlete facts relevant to a single deal review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AthleteContext {
    pub id: AthleteId,
    pub role: AthleteRole,
    #[serde(default)]
    pub is_minor: Option<bool>,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub sport: Option<String>,
    #[serde(default)]
    pub follower_count: u64,
    #[serde(default)]
    pub engagement_rate: f64,
    #[serde(default)]
    pub consent_status: Option<ConsentStatus>,
    #[serde(default)]
    pub guardian_verified: bool,
    #[serde(default)]
    pub tax_obligation_acknowledged: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsentStatus {
    Approved,
    Pending,
}

/// Who ultimately funds the deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentSource {
    Brand,
    Booster,
    Collective,
    School,
}

/// Review checklist gathered by the caller (filings, documents, payer details).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DealReview {
    pub school_approved: bool,
    pub disclosure_filed: bool,
    pub third_party_verified: bool,
    pub contract_signed: bool,
    pub w9_submitted: bool,
    pub disclosure_form_on_file: bool,
    pub payment_source: Option<PaymentSource>,
    pub payer_description: Option<String>,
    pub counter_party_category: Option<String>,
    /// Flags raised by an earlier contract analysis run.
    pub contract_risk_flags: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaxProfile {
    pub professional_support: bool,
    pub ytd_nil_earnings: f64,
}

/// Independently modeled value band for the athlete.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FmvRange {
    pub low: f64,
    pub high: f64,
}

/// Everything the compliance engine reads, assembled by the caller beforehand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceSnapshot {
    pub deal: DealInput,
    pub athlete: AthleteContext,
    #[serde(default)]
    pub review: DealReview,
    #[serde(default)]
    pub tax: TaxProfile,
    #[serde(default)]
    pub fmv_range: Option<FmvRange>,
}

impl ComplianceSnapshot {
    pub fn validate(&self) -> Result<(), InputError> {
        check_present("deal.id", &self.deal.id.0)?;
        check_amount("deal.compensationAmount", self.deal.compensation_amount)?;
        check_range("athlete.engagementRate", self.athlete.engagement_rate, 0.0, 1.0)?;
        check_amount("tax.ytdNilEarnings", self.tax.ytd_nil_earnings)?;
        if let Some(range) = &self.fmv_range {
            check_amount("fmvRange.low", range.low)?;
            check_amount("fmvRange.high", range.high)?;
            if range.high < range.low {
                return Err(InputError::OutOfRange {
                    field: "fmvRange.high",
                    value: range.high,
                    min: range.low,
                    max: f64::MAX,
                });
            }
        }
        Ok(())
    }
}

/// Six compliance risk categories, in their canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Dimension {
    PolicyFit,
    FmvVerification,
    DocumentHygiene,
    TaxReadiness,
    BrandSafety,
    GuardianConsent,
}

impl Dimension {
    pub const ALL: [Dimension; 6] = [
        Dimension::PolicyFit,
        Dimension::FmvVerification,
        Dimension::DocumentHygiene,
        Dimension::TaxReadiness,
        Dimension::BrandSafety,
        Dimension::GuardianConsent,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            Dimension::PolicyFit => "policyFit",
            Dimension::FmvVerification => "fmvVerification",
            Dimension::DocumentHygiene => "documentHygiene",
            Dimension::TaxReadiness => "taxReadiness",
            Dimension::BrandSafety => "brandSafety",
            Dimension::GuardianConsent => "guardianConsent",
        }
    }
}

/// Discrete contribution of one dimension, kept for audits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionScore {
    pub score: f64,
    pub weight: f64,
    pub notes: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reason_codes: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplianceStatus {
    Green,
    Yellow,
    Red,
}

impl ComplianceStatus {
    pub const fn label(self) -> &'static str {
        match self {
            ComplianceStatus::Green => "green",
            ComplianceStatus::Yellow => "yellow",
            ComplianceStatus::Red => "red",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceScoreResult {
    pub deal_id: DealId,
    pub policy_fit: DimensionScore,
    pub fmv_verification: DimensionScore,
    pub document_hygiene: DimensionScore,
    pub tax_readiness: DimensionScore,
    pub brand_safety: DimensionScore,
    pub guardian_consent: DimensionScore,
    pub total_score: f64,
    pub status: ComplianceStatus,
    pub overall_reason_codes: Vec<String>,
    pub overall_recommendations: Vec<String>,
    pub critical_issues: Vec<String>,
    pub warnings: Vec<String>,
    pub scored_at: DateTime<Utc>,
}

impl ComplianceScoreResult {
    pub fn dimension(&self, dimension: Dimension) -> &DimensionScore {
        match dimension {
            Dimension::PolicyFit => &self.policy_fit,
            Dimension::FmvVerification => &self.fmv_verification,
            Dimension::DocumentHygiene => &self.document_hygiene,
            Dimension::TaxReadiness => &self.tax_readiness,
            Dimension::BrandSafety => &self.brand_safety,
            Dimension::GuardianConsent => &self.guardian_consent,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    /// Severity-equivalent tier for a full compliance status.
    pub const fn for_status(status: ComplianceStatus) -> Self {
        match status {
            ComplianceStatus::Green => RiskTier::Low,
            ComplianceStatus::Yellow => RiskTier::Medium,
            ComplianceStatus::Red => RiskTier::High,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickRiskCheck {
    pub risk_tier: RiskTier,
    pub quick_issues: Vec<String>,
}
