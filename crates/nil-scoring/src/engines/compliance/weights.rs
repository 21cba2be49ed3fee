use serde::{Deserialize, Serialize};

use super::domain::Dimension;

const TOTAL_WEIGHT: f64 = 100.0;
const WEIGHT_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WeightTableError {
    #[error("{dimension} weight must be positive (found {value})")]
    NonPositive {
        dimension: &'static str,
        value: f64,
    },
    #[error("weights must sum to 100 (found {sum})")]
    BadSum { sum: f64 },
}

/// Single source of truth for the maximum points each dimension can contribute.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightTable {
    pub policy_fit: f64,
    pub fmv_verification: f64,
    pub document_hygiene: f64,
    pub tax_readiness: f64,
    pub brand_safety: f64,
    pub guardian_consent: f64,
}

impl WeightTable {
    pub fn new(
        policy_fit: f64,
        fmv_verification: f64,
        document_hygiene: f64,
        tax_readiness: f64,
        brand_safety: f64,
        guardian_consent: f64,
    ) -> Result<Self, WeightTableError> {
        let table = Self {
            policy_fit,
            fmv_verification,
            document_hygiene,
            tax_readiness,
            brand_safety,
            guardian_consent,
        };
        table.validate()?;
        Ok(table)
    }

    pub fn validate(&self) -> Result<(), WeightTableError> {
        for dimension in Dimension::ALL {
            let value = self.weight(dimension);
            if !(value.is_finite() && value > 0.0) {
                return Err(WeightTableError::NonPositive {
                    dimension: dimension.key(),
                    value,
                });
            }
        }

        let sum = self.sum();
        if (sum - TOTAL_WEIGHT).abs() > WEIGHT_TOLERANCE {
            return Err(WeightTableError::BadSum { sum });
        }
        Ok(())
    }

    pub fn weight(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::PolicyFit => self.policy_fit,
            Dimension::FmvVerification => self.fmv_verification,
            Dimension::DocumentHygiene => self.document_hygiene,
            Dimension::TaxReadiness => self.tax_readiness,
            Dimension::BrandSafety => self.brand_safety,
            Dimension::GuardianConsent => self.guardian_consent,
        }
    }

    pub fn sum(&self) -> f64 {
        Dimension::ALL
            .iter()
            .map(|dimension| self.weight(*dimension))
            .sum()
    }

    /// Heaviest first; equal weights keep canonical dimension order.
    pub fn by_descending_weight(&self) -> Vec<Dimension> {
        let mut ordered = Dimension::ALL.to_vec();
        ordered.sort_by(|a, b| {
            self.weight(*b)
                .partial_cmp(&self.weight(*a))
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        ordered
    }
}

impl Default for WeightTable {
    fn default() -> Self {
        Self {
            policy_fit: 25.0,
            fmv_verification: 20.0,
            document_hygiene: 15.0,
            tax_readiness: 15.0,
            brand_safety: 15.0,
            guardian_consent: 10.0,
        }
    }
}
