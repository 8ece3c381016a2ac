//! Renewal listing. Renewal dates are display-only; nothing resets on them.

use chrono::NaiveDate;
use serde::Serialize;

use crate::model::{Benefit, BenefitId};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Renewal {
    pub benefit_id: BenefitId,
    pub name: String,
    pub renew_date: NaiveDate,
}

impl Renewal {
    /// Days from `today` until the renewal; negative once it has passed.
    pub fn days_until(&self, today: NaiveDate) -> i64 {
        (self.renew_date - today).num_days()
    }
}

/// Every benefit's renewal in list order. Takes the full list, never a
/// search-filtered one.
pub fn renewals(benefits: &[Benefit]) -> Vec<Renewal> {
    benefits
        .iter()
        .map(|b| Renewal { benefit_id: b.id.clone(), name: b.name.clone(), renew_date: b.renew_date })
        .collect()
}
