//! Portfolio totals and per-benefit usage.
//!
//! The two percentages are intentionally asymmetric: per-benefit usage
//! guards a zero allotment and reports 0, while the portfolio-level
//! `pct_remaining` divides unguarded and is NaN when the summed total is
//! zero. Renderers decide how a non-finite value is shown.

use serde::Serialize;

use crate::amount::CadAmount;
use crate::model::Benefit;

/// Totals across the full, unfiltered benefit list.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PortfolioTotals {
    pub total: CadAmount,
    pub remaining: CadAmount,
    pub used: CadAmount,
    /// `remaining / total * 100`, NaN when `total` is zero.
    pub pct_remaining: f64,
    /// Number of benefits in the portfolio.
    pub active: usize,
}

/// Usage of a single benefit's allotment.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BenefitUsage {
    pub used: CadAmount,
    /// `used / total * 100`, 0 when `total` is zero.
    pub pct_used: f64,
}

pub fn portfolio_totals(benefits: &[Benefit]) -> PortfolioTotals {
    let total: CadAmount = benefits.iter().map(|b| b.total).sum();
    let remaining: CadAmount = benefits.iter().map(|b| b.remaining).sum();
    // remaining <= total holds per benefit after validation, so it holds for the sums
    let used = total.saturating_sub(&remaining);
    PortfolioTotals {
        total,
        remaining,
        used,
        pct_remaining: remaining.as_f64() / total.as_f64() * 100.0,
        active: benefits.len(),
    }
}

pub fn benefit_usage(benefit: &Benefit) -> BenefitUsage {
    let used = benefit.total.saturating_sub(&benefit.remaining);
    let pct_used = if benefit.total.is_zero() {
        0.0
    } else {
        used.as_f64() / benefit.total.as_f64() * 100.0
    };
    BenefitUsage { used, pct_used }
}

impl Benefit {
    pub fn usage(&self) -> BenefitUsage {
        benefit_usage(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::seed_benefits;
    use chrono::NaiveDate;

    fn empty_benefit(id: &str) -> Benefit {
        Benefit::new(id, "Empty", CadAmount::ZERO, CadAmount::ZERO, NaiveDate::from_ymd_opt(2026, 1, 1).unwrap())
    }

    #[test]
    fn seed_portfolio_totals() {
        let totals = portfolio_totals(&seed_benefits());
        assert_eq!(totals.total, CadAmount::from_dollars(3300));
        assert_eq!(totals.remaining, CadAmount::from_dollars(1920));
        assert_eq!(totals.used, CadAmount::from_dollars(1380));
        assert_eq!(totals.active, 4);
        assert!((totals.pct_remaining - 1920.0 / 3300.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn seed_benefit_usage() {
        let benefits = seed_benefits();
        let pcts: Vec<f64> = benefits.iter().map(|b| b.usage().pct_used.round()).collect();
        assert_eq!(pcts, vec![40.0, 76.0, 0.0, 40.0]);
        assert_eq!(benefits[1].usage().used, CadAmount::from_dollars(380));
    }

    #[test]
    fn zero_total_benefit_reports_zero_percent() {
        let usage = empty_benefit("z").usage();
        assert_eq!(usage.pct_used, 0.0);
        assert_eq!(usage.used, CadAmount::ZERO);
    }

    #[test]
    fn zero_total_portfolio_is_non_finite() {
        let totals = portfolio_totals(&[empty_benefit("z1"), empty_benefit("z2")]);
        assert!(!totals.pct_remaining.is_finite());
        assert!(totals.pct_remaining.is_nan());
        assert_eq!(totals.used, CadAmount::ZERO);

        assert!(portfolio_totals(&[]).pct_remaining.is_nan());
    }

    #[test]
    fn used_is_independent_of_claim_sum() {
        let benefits = seed_benefits();
        // Psychiatrist: 400 used against the allotment, 280 in recorded claims.
        let psych = &benefits[0];
        let spent: CadAmount = psych.charges.iter().map(|c| c.amount).sum();
        assert_eq!(psych.usage().used, CadAmount::from_dollars(400));
        assert_eq!(spent, CadAmount::from_dollars(280));
    }
}
