//! Versioned lookup data consumed by both engines.
//!
//! Every curated list the calculators match against (prestige schools, high-value
//! positions, screened brand categories, payment-source keywords) lives in a JSON
//! document rather than in the scoring code, so fixtures can substitute their own
//! tables and the lists can be revised without touching a calculator.

use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::compliance::WeightTable;

const BUNDLED_LOOKUPS: &str = include_str!("../../data/lookups.json");

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("failed to read lookup tables: {0}")]
    Io(#[from] std::io::Error),
    #[error("lookup tables are not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("lookup tables failed validation: {}", .0.join("; "))]
    Invalid(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookupTables {
    pub version: u32,
    pub default_state: String,
    pub compliance_weights: WeightTable,
    pub tax_thresholds: TaxThresholds,
    pub school_prestige: SchoolPrestige,
    pub high_value_positions: Vec<String>,
    pub major_market_states: Vec<String>,
    pub brand_screen: Vec<BrandScreenEntry>,
    pub payment_source_keywords: PaymentSourceKeywords,
    pub pay_for_play_keywords: Vec<String>,
    pub enrollment_keywords: Vec<String>,
    pub restricted_high_school_states: Vec<String>,
}

/// Cumulative-earnings thresholds used by the tax readiness dimension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaxThresholds {
    pub filing: f64,
    pub professional_support: f64,
    pub quarterly_estimates: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchoolPrestige {
    pub college_tier1: Vec<String>,
    pub college_tier2: Vec<String>,
    pub college_tier3: Vec<String>,
    pub high_school_tier1: Vec<String>,
    pub high_school_tier2: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandScreenEntry {
    pub keyword: String,
    pub category: String,
    pub college: ScreenSeverity,
    pub high_school: ScreenSeverity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreenSeverity {
    Prohibited,
    Caution,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentSourceKeywords {
    pub booster: Vec<String>,
    pub collective: Vec<String>,
    pub school: Vec<String>,
}

/// Prestige bucket a school name resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrestigeTier {
    CollegeTier1,
    CollegeTier2,
    CollegeTier3,
    HighSchoolTier1,
    HighSchoolTier2,
}

impl LookupTables {
    /// Tables shipped with the crate.
    pub fn bundled() -> Result<Self, LookupError> {
        Self::from_reader(BUNDLED_LOOKUPS.as_bytes())
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LookupError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LookupError> {
        let tables: LookupTables = serde_json::from_reader(reader)?;
        tables.validate().map_err(LookupError::Invalid)?;
        Ok(tables)
    }

    /// Collects every problem in the document instead of stopping at the first.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.version == 0 {
            errors.push("version: must be at least 1".to_string());
        }

        if self.default_state.trim().is_empty() {
            errors.push("default_state: must name a state code".to_string());
        }

        if let Err(err) = self.compliance_weights.validate() {
            errors.push(format!("compliance_weights: {err}"));
        }

        let tax = &self.tax_thresholds;
        if !(tax.filing >= 0.0
            && tax.filing <= tax.professional_support
            && tax.professional_support <= tax.quarterly_estimates)
        {
            errors.push(
                "tax_thresholds: expected 0 <= filing <= professional_support <= quarterly_estimates"
                    .to_string(),
            );
        }

        for (index, entry) in self.brand_screen.iter().enumerate() {
            if entry.keyword.trim().is_empty() {
                errors.push(format!("brand_screen[{index}].keyword: must not be blank"));
            }
            if entry.category.trim().is_empty() {
                errors.push(format!("brand_screen[{index}].category: must not be blank"));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Matches the school's core name exactly, ignoring filler words such as
    /// "university" or "high school", so "Texas Tech" never reads as "Texas".
    pub fn prestige_tier(&self, school: &str) -> Option<PrestigeTier> {
        let core = school_core(school);
        if core.is_empty() {
            return None;
        }
        let prestige = &self.school_prestige;
        let tiers = [
            (&prestige.college_tier1, PrestigeTier::CollegeTier1),
            (&prestige.college_tier2, PrestigeTier::CollegeTier2),
            (&prestige.college_tier3, PrestigeTier::CollegeTier3),
            (&prestige.high_school_tier1, PrestigeTier::HighSchoolTier1),
            (&prestige.high_school_tier2, PrestigeTier::HighSchoolTier2),
        ];

        tiers.into_iter().find_map(|(names, tier)| {
            names
                .iter()
                .any(|name| school_core(name) == core)
                .then_some(tier)
        })
    }

    pub fn is_high_value_position(&self, position: &str) -> bool {
        let position = normalize_text(position);
        self.high_value_positions
            .iter()
            .any(|candidate| normalize_text(candidate) == position)
    }

    pub fn is_major_market(&self, state: &str) -> bool {
        self.major_market_states
            .iter()
            .any(|candidate| candidate.eq_ignore_ascii_case(state.trim()))
    }

    pub fn restricts_high_school_nil(&self, state: &str) -> bool {
        self.restricted_high_school_states
            .iter()
            .any(|candidate| candidate.eq_ignore_ascii_case(state.trim()))
    }
}

/// Lowercases and collapses whitespace, dropping invisible characters exports tend to carry.
fn normalize_text(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    cleaned
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

const SCHOOL_FILLER_WORDS: [&str; 8] =
    ["the", "of", "at", "university", "univ", "college", "high", "school"];

/// Free text split into lowercase words for keyword screening.
///
/// Hyphens, ampersands, and inner apostrophes stay inside a word, so "non-alcoholic"
/// is one word and never matches "alcohol". A keyword ending in `*` matches any word
/// starting with its last stem ("enroll*" covers "enrolled" and "enrollment").
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct WordIndex(Vec<String>);

impl WordIndex {
    pub(crate) fn new(text: &str) -> Self {
        Self(phrase_words(text))
    }

    pub(crate) fn mentions(&self, keyword: &str) -> bool {
        let keyword = keyword.trim();
        let (keyword, stem) = match keyword.strip_suffix('*') {
            Some(stem) => (stem, true),
            None => (keyword, false),
        };
        let needle = phrase_words(keyword);
        let Some((last, leading)) = needle.split_last() else {
            return false;
        };
        if needle.len() > self.0.len() {
            return false;
        }

        self.0.windows(needle.len()).any(|window| {
            let candidate = &window[leading.len()];
            window[..leading.len()] == *leading
                && if stem {
                    candidate.starts_with(last.as_str())
                } else {
                    candidate == last
                }
        })
    }
}

/// Keyword as shown in notes, without its stem marker.
pub(crate) fn keyword_label(keyword: &str) -> &str {
    keyword.trim().trim_end_matches('*')
}

fn phrase_words(value: &str) -> Vec<String> {
    normalize_text(value)
        .split(|c: char| !(c.is_alphanumeric() || matches!(c, '&' | '-' | '\'')))
        .map(|word| word.trim_matches(|c: char| c == '-' || c == '\''))
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

fn school_core(name: &str) -> Vec<String> {
    phrase_words(name)
        .into_iter()
        .filter(|word| !SCHOOL_FILLER_WORDS.contains(&word.as_str()))
        .collect()
}
