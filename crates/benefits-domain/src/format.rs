//! Display formatting shared by the terminal and command-line surfaces.

use chrono::NaiveDate;

use crate::amount::CadAmount;

/// Placeholder for a missing note or a percentage that cannot be shown.
pub const PLACEHOLDER: &str = "—";

pub fn fmt_currency(amount: CadAmount) -> String {
    amount.to_currency_string()
}

/// `Jan 1, 2026`.
pub fn fmt_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Rounded integer percent, or the placeholder when not finite.
pub fn fmt_percent(pct: f64) -> String {
    if pct.is_finite() {
        format!("{}%", pct.round() as i64)
    } else {
        PLACEHOLDER.to_string()
    }
}

/// Percent as a gauge ratio in `0.0..=1.0`. Non-finite maps to empty.
pub fn gauge_ratio(pct: f64) -> f64 {
    if pct.is_finite() {
        (pct / 100.0).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Fixed-width text progress bar, e.g. `████░░░░░░`.
pub fn usage_bar(pct: f64, width: usize) -> String {
    let filled = (gauge_ratio(pct) * width as f64).round() as usize;
    let mut bar = "█".repeat(filled.min(width));
    bar.push_str(&"░".repeat(width.saturating_sub(filled)));
    bar
}

pub fn notes_or_placeholder(notes: Option<&str>) -> &str {
    notes.unwrap_or(PLACEHOLDER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_render_month_day_year() {
        let d = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        assert_eq!(fmt_date(d), "Jan 1, 2026");
        let d = NaiveDate::from_ymd_opt(2025, 9, 21).unwrap();
        assert_eq!(fmt_date(d), "Sep 21, 2025");
    }

    #[test]
    fn percent_rounding_and_non_finite() {
        assert_eq!(fmt_percent(76.0), "76%");
        assert_eq!(fmt_percent(58.18), "58%");
        assert_eq!(fmt_percent(0.5), "1%");
        assert_eq!(fmt_percent(f64::NAN), PLACEHOLDER);
        assert_eq!(fmt_percent(f64::INFINITY), PLACEHOLDER);
    }

    #[test]
    fn gauge_ratio_is_clamped() {
        assert_eq!(gauge_ratio(40.0), 0.4);
        assert_eq!(gauge_ratio(150.0), 1.0);
        assert_eq!(gauge_ratio(-3.0), 0.0);
        assert_eq!(gauge_ratio(f64::NAN), 0.0);
    }

    #[test]
    fn usage_bar_width_is_fixed() {
        assert_eq!(usage_bar(40.0, 10), "████░░░░░░");
        assert_eq!(usage_bar(0.0, 4), "░░░░");
        assert_eq!(usage_bar(100.0, 4), "████");
        assert_eq!(usage_bar(f64::NAN, 3).chars().count(), 3);
    }

    #[test]
    fn notes_placeholder() {
        assert_eq!(notes_or_placeholder(Some("Ankle")), "Ankle");
        assert_eq!(notes_or_placeholder(None), "—");
    }

    #[test]
    fn currency_delegates_to_amount() {
        assert_eq!(fmt_currency(CadAmount::from_dollars(1920)), "CA$1,920");
    }
}
