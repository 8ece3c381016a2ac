//! Benefit and charge records.
//!
//! `Benefit::remaining` is a stored balance, not a derived one. Nothing in
//! this crate recomputes it from `charges`, so "used" (`total - remaining`)
//! and "spent" (sum of charge amounts) are allowed to disagree.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::amount::CadAmount;
use crate::error::DomainError;

// ── IDs ───────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct BenefitId(pub String);

impl BenefitId {
    pub fn new(id: impl Into<String>) -> Self { Self(id.into()) }
    pub fn as_str(&self) -> &str { &self.0 }
}

impl std::fmt::Display for BenefitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct ChargeId(pub String);

impl ChargeId {
    pub fn new(id: impl Into<String>) -> Self { Self(id.into()) }
}

impl std::fmt::Display for ChargeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── Charge ────────────────────────────────────────────────────────────────────

/// A single dated claim recorded against a benefit.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Charge {
    pub id: ChargeId,
    pub date: NaiveDate,
    pub provider: String,
    pub amount: CadAmount,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Charge {
    pub fn new(id: impl Into<String>, date: NaiveDate, provider: impl Into<String>, amount: CadAmount) -> Self {
        Self { id: ChargeId::new(id), date, provider: provider.into(), amount, notes: None }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

// ── Benefit ───────────────────────────────────────────────────────────────────

/// An insurance coverage category with an annual allotment.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Benefit {
    pub id: BenefitId,
    pub name: String,
    pub total: CadAmount,
    pub remaining: CadAmount,
    pub renew_date: NaiveDate,
    #[serde(default)]
    pub charges: Vec<Charge>,
}

impl Benefit {
    pub fn new(id: impl Into<String>, name: impl Into<String>, total: CadAmount, remaining: CadAmount, renew_date: NaiveDate) -> Self {
        Self { id: BenefitId::new(id), name: name.into(), total, remaining, renew_date, charges: Vec::new() }
    }

    pub fn with_charges(mut self, charges: Vec<Charge>) -> Self {
        self.charges = charges;
        self
    }

    /// Checks `remaining <= total`. Amounts are non-negative by construction.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.remaining > self.total {
            return Err(DomainError::RemainingExceedsTotal {
                benefit: self.id.0.clone(),
                remaining: self.remaining.to_decimal_string(),
                total: self.total.to_decimal_string(),
            });
        }
        Ok(())
    }
}

/// Validates every benefit and the uniqueness of benefit and charge ids.
pub fn validate_benefits(benefits: &[Benefit]) -> Result<(), DomainError> {
    let mut benefit_ids = HashSet::new();
    let mut charge_ids = HashSet::new();
    for benefit in benefits {
        benefit.validate()?;
        if !benefit_ids.insert(&benefit.id) {
            return Err(DomainError::DuplicateBenefitId(benefit.id.0.clone()));
        }
        for charge in &benefit.charges {
            if !charge_ids.insert(&charge.id) {
                return Err(DomainError::DuplicateChargeId(charge.id.0.clone()));
            }
        }
    }
    Ok(())
}

/// Looks a benefit up by exact id, then by case-insensitive name.
pub fn find_benefit<'a>(benefits: &'a [Benefit], key: &str) -> Result<&'a Benefit, DomainError> {
    let key = key.trim();
    benefits
        .iter()
        .find(|b| b.id.0 == key)
        .or_else(|| {
            let folded = key.to_lowercase();
            benefits.iter().find(|b| b.name.to_lowercase() == folded)
        })
        .ok_or_else(|| DomainError::BenefitNotFound(key.to_string()))
}
