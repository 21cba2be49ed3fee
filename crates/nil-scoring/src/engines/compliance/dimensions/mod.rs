//! Pure per-dimension calculators.
//!
//! Every calculator reports its findings as deductions from a full score; the
//! retained fraction is clamped to `[0, 1]` and scaled by the dimension weight, so
//! no dimension can leave `[0, weight]`.

mod brand;
mod consent;
mod documents;
mod fmv;
mod policy;
mod tax;

use chrono::NaiveDate;

use super::domain::{ComplianceSnapshot, Dimension, DimensionScore, PaymentSource};
use super::weights::WeightTable;
use crate::engines::lookups::{LookupTables, WordIndex};
use crate::engines::resolve::{non_blank, FieldResolver, Resolved};
use crate::engines::subject::{age_on, AthleteRole};

/// One reason a dimension lost points.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Finding {
    pub fraction: f64,
    pub code: String,
    pub note: String,
    pub recommendation: Option<String>,
}

impl Finding {
    pub(crate) fn new(fraction: f64, code: impl Into<String>, note: impl Into<String>) -> Self {
        Self {
            fraction,
            code: code.into(),
            note: note.into(),
            recommendation: None,
        }
    }

    pub(crate) fn recommend(mut self, recommendation: impl Into<String>) -> Self {
        self.recommendation = Some(recommendation.into());
        self
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct Assessment {
    pub findings: Vec<Finding>,
    pub notes: Vec<String>,
}

impl Assessment {
    pub(crate) fn find(&mut self, finding: Finding) {
        self.findings.push(finding);
    }

    pub(crate) fn note(&mut self, note: impl Into<String>) {
        self.notes.push(note.into());
    }

    pub(crate) fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    fn into_score(self, weight: f64) -> DimensionScore {
        let deducted: f64 = self.findings.iter().map(|finding| finding.fraction).sum();
        let retained = (1.0 - deducted).clamp(0.0, 1.0);
        let score = round2(weight * retained).clamp(0.0, weight);

        let mut notes: Vec<String> = self
            .findings
            .iter()
            .map(|finding| finding.note.clone())
            .collect();
        notes.extend(self.notes);
        let notes = if notes.is_empty() {
            "no issues found".to_string()
        } else {
            notes.join("; ")
        };

        let mut recommendations: Vec<String> = Vec::new();
        for recommendation in self
            .findings
            .iter()
            .filter_map(|finding| finding.recommendation.as_ref())
        {
            if !recommendations.contains(recommendation) {
                recommendations.push(recommendation.clone());
            }
        }

        DimensionScore {
            score,
            weight,
            notes,
            reason_codes: self.findings.into_iter().map(|finding| finding.code).collect(),
            recommendations,
        }
    }
}

/// Facts every calculator needs, resolved once per invocation.
pub(crate) struct DimensionContext<'a> {
    pub snapshot: &'a ComplianceSnapshot,
    pub lookups: &'a LookupTables,
    pub minor: Resolved<bool>,
    pub jurisdiction: Resolved<String>,
    pub payment_source: Resolved<PaymentSource>,
    /// Deliverables plus contract text, scanned for prohibited terms.
    pub terms: WordIndex,
    /// Counter-party name, category, and deliverables for brand screening.
    pub brand: WordIndex,
}

impl<'a> DimensionContext<'a> {
    pub(crate) fn new(
        snapshot: &'a ComplianceSnapshot,
        lookups: &'a LookupTables,
        scored_on: NaiveDate,
    ) -> Self {
        let deal = &snapshot.deal;
        let athlete = &snapshot.athlete;
        let review = &snapshot.review;

        let minor = FieldResolver::new("is_minor")
            .candidate("explicit_flag", athlete.is_minor)
            .candidate_with("date_of_birth", || {
                athlete.date_of_birth.map(|born| age_on(born, scored_on) < 18)
            })
            .or_default(false);

        let jurisdiction = FieldResolver::new("jurisdiction")
            .candidate("deal_jurisdiction", non_blank(deal.jurisdiction.as_deref()))
            .candidate("athlete_state", non_blank(athlete.state.as_deref()))
            .or_default(lookups.default_state.clone());

        let payment_source = FieldResolver::new("payment_source")
            .candidate("explicit_classification", review.payment_source)
            .candidate_with("payer_description", || {
                review
                    .payer_description
                    .as_deref()
                    .and_then(|text| classify_payer(lookups, text))
            })
            .candidate_with("counter_party_name", || {
                classify_payer(lookups, &deal.counter_party_name)
            })
            .or_default(PaymentSource::Brand);

        let terms = WordIndex::new(&format!(
            "{} {}",
            deal.deliverables,
            deal.contract_text.as_deref().unwrap_or_default()
        ));
        let brand = WordIndex::new(&format!(
            "{} {} {} {}",
            deal.counter_party_name,
            review.counter_party_category.as_deref().unwrap_or_default(),
            deal.deal_type,
            deal.deliverables
        ));

        Self {
            snapshot,
            lookups,
            minor,
            jurisdiction,
            payment_source,
            terms,
            brand,
        }
    }

    pub(crate) fn is_minor(&self) -> bool {
        self.minor.value
    }

    /// High-school athletes and minors are screened against the stricter rules.
    pub(crate) fn uses_youth_rules(&self) -> bool {
        self.is_minor() || self.snapshot.athlete.role == AthleteRole::HsStudent
    }
}

/// Booster wording outranks collective wording, which outranks school wording.
fn classify_payer(lookups: &LookupTables, text: &str) -> Option<PaymentSource> {
    let text = WordIndex::new(text);
    let keywords = &lookups.payment_source_keywords;
    let matches = |list: &[String]| list.iter().any(|keyword| text.mentions(keyword));

    if matches(&keywords.booster) {
        Some(PaymentSource::Booster)
    } else if matches(&keywords.collective) {
        Some(PaymentSource::Collective)
    } else if matches(&keywords.school) {
        Some(PaymentSource::School)
    } else {
        None
    }
}

pub(crate) fn assess(dimension: Dimension, ctx: &DimensionContext<'_>) -> Assessment {
    match dimension {
        Dimension::PolicyFit => policy::assess(ctx),
        Dimension::FmvVerification => fmv::assess(ctx),
        Dimension::DocumentHygiene => documents::assess(ctx),
        Dimension::TaxReadiness => tax::assess(ctx),
        Dimension::BrandSafety => brand::assess(ctx),
        Dimension::GuardianConsent => consent::assess(ctx),
    }
}

pub(crate) fn score(
    dimension: Dimension,
    ctx: &DimensionContext<'_>,
    weights: &WeightTable,
) -> DimensionScore {
    assess(dimension, ctx).into_score(weights.weight(dimension))
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// `energy_drink` -> `ENERGY_DRINK`, suitable as a reason-code suffix.
pub(crate) fn code_suffix(value: &str) -> String {
    value
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect()
}
