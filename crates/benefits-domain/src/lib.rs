//! Benefits tracker domain types: pure model layer, no UI.
//!
//! Benefits and their claims are seeded once and never mutated. Everything
//! the dashboard shows is derived from the list by the pure functions in
//! [`aggregate`], [`filter`], [`history`] and [`renewal`].
pub mod aggregate;
pub mod amount;
pub mod error;
pub mod filter;
pub mod fixtures;
pub mod format;
pub mod history;
pub mod model;
pub mod renewal;

pub use aggregate::{benefit_usage, portfolio_totals, BenefitUsage, PortfolioTotals};
pub use amount::CadAmount;
pub use error::DomainError;
pub use filter::{filter_benefits, matches_query};
pub use fixtures::{load_benefits, parse_benefits, seed_benefits};
pub use history::{claim_summary, ClaimSummary, EMPTY_HISTORY_MESSAGE};
pub use model::{find_benefit, validate_benefits, Benefit, BenefitId, Charge, ChargeId};
pub use renewal::{renewals, Renewal};
