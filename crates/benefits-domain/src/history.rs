//! Claim history summary for one benefit.

use serde::Serialize;

use crate::amount::CadAmount;
use crate::model::Benefit;

/// Shown in place of the claim table when a benefit has no charges.
pub const EMPTY_HISTORY_MESSAGE: &str = "No claims yet for this benefit.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ClaimSummary {
    pub count: usize,
    pub total_spent: CadAmount,
}

impl ClaimSummary {
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// `"3 claims • CA$380 total"`, or the empty-state message.
    pub fn summary_line(&self) -> String {
        if self.is_empty() {
            EMPTY_HISTORY_MESSAGE.to_string()
        } else {
            format!("{} claims • {} total", self.count, self.total_spent)
        }
    }
}

pub fn claim_summary(benefit: &Benefit) -> ClaimSummary {
    ClaimSummary {
        count: benefit.charges.len(),
        total_spent: benefit.charges.iter().map(|c| c.amount).sum(),
    }
}
