use benefits_domain::{filter_benefits, portfolio_totals, seed_benefits, Benefit, CadAmount};
use chrono::NaiveDate;
use proptest::prelude::*;
use proptest::test_runner::Config;

fn benefit_strategy() -> impl Strategy<Value = (String, u64, u64)> {
    ("[A-Za-z ]{0,12}", 0_u64..500_000, 0_u64..=100)
        .prop_map(|(name, total, pct)| (name, total, total * pct / 100))
}

fn build(rows: Vec<(String, u64, u64)>) -> Vec<Benefit> {
    let renew = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
    rows
        .into_iter()
        .enumerate()
        .map(|(idx, (name, total, remaining))| {
            Benefit::new(
                format!("b{idx}"),
                name,
                CadAmount::from_cents(total),
                CadAmount::from_cents(remaining),
                renew,
            )
        })
        .collect()
}

proptest! {
    #![proptest_config(Config::with_cases(128))]

    #[test]
    fn blank_query_is_identity(rows in prop::collection::vec(benefit_strategy(), 0..12), pad in 0_usize..4) {
        let benefits = build(rows);
        let blank = " ".repeat(pad);
        let found: Vec<Benefit> = filter_benefits(&benefits, &blank).into_iter().cloned().collect();
        prop_assert_eq!(found, benefits);
    }

    #[test]
    fn filter_obeys_substring_law(rows in prop::collection::vec(benefit_strategy(), 0..12), query in "[A-Za-z]{1,3}") {
        let benefits = build(rows);
        let found = filter_benefits(&benefits, &query);
        let q = query.to_lowercase();
        for b in &found {
            prop_assert!(b.name.to_lowercase().contains(&q));
        }
        for b in benefits.iter().filter(|b| !found.iter().any(|f| f.id == b.id)) {
            prop_assert!(!b.name.to_lowercase().contains(&q));
        }
        // stable: relative order follows the source list
        let positions: Vec<usize> = found
            .iter()
            .map(|f| benefits.iter().position(|b| b.id == f.id).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn totals_are_additive(rows in prop::collection::vec(benefit_strategy(), 1..12)) {
        let benefits = build(rows);
        let totals = portfolio_totals(&benefits);
        let total: u64 = benefits.iter().map(|b| b.total.cents()).sum();
        let remaining: u64 = benefits.iter().map(|b| b.remaining.cents()).sum();
        prop_assert_eq!(totals.total.cents(), total);
        prop_assert_eq!(totals.remaining.cents(), remaining);
        prop_assert_eq!(totals.used.cents(), total - remaining);
        prop_assert_eq!(totals.active, benefits.len());
    }

    #[test]
    fn per_benefit_percent_stays_in_range(rows in prop::collection::vec(benefit_strategy(), 1..12)) {
        for b in build(rows) {
            let pct = b.usage().pct_used;
            prop_assert!(pct.is_finite());
            prop_assert!((0.0..=100.0).contains(&pct));
        }
    }
}

#[test]
fn totals_do_not_depend_on_search() {
    let benefits = seed_benefits();
    let full = portfolio_totals(&benefits);
    let _narrowed = filter_benefits(&benefits, "phys");
    assert_eq!(portfolio_totals(&benefits), full);
    assert_eq!(full.total, CadAmount::from_dollars(3300));
    assert_eq!(full.remaining, CadAmount::from_dollars(1920));
    assert_eq!(full.used, CadAmount::from_dollars(1380));
}
