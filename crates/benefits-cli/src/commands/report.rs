//! Report commands - print the dashboard views as text

use benefits_domain::format::{fmt_currency, fmt_date, fmt_percent, notes_or_placeholder, usage_bar};
use benefits_domain::{claim_summary, Benefit, PortfolioTotals, Renewal};
use chrono::NaiveDate;

use crate::display;

const BAR_WIDTH: usize = 12;

/// Summary cards: coverage remaining, used this year, active benefits
pub fn render_summary(totals: &PortfolioTotals) -> String {
    [
        display::section("Benefits Summary"),
        display::labeled(
            "Coverage Remaining",
            &format!(
                "{} of {} ({})",
                fmt_currency(totals.remaining),
                fmt_currency(totals.total),
                fmt_percent(totals.pct_remaining)
            ),
        ),
        format!("  [{}]", usage_bar(totals.pct_remaining, 30)),
        display::labeled("Used This Year", &fmt_currency(totals.used)),
        display::muted("Across all benefits"),
        display::labeled("Benefits", &format!("{} active", totals.active)),
    ]
    .join("\n")
}

/// Benefit table, already filtered by `query`
pub fn render_list(rows: &[&Benefit], query: &str) -> String {
    let mut out = vec![display::section("Your Benefits")];
    if !query.trim().is_empty() {
        out.push(display::info(&format!("Filtered by \"{}\"", query)));
    }
    if rows.is_empty() {
        out.push(display::muted(&format!("No benefits match \"{}\".", query)));
        return out.join("\n");
    }
    out.push(format!(
        "  {:<4} {:<16} {:>10} {:>10}  {:<17}  {}",
        "ID", "Benefit", "Total", "Remaining", "Progress", "Renews"
    ));
    for benefit in rows {
        let usage = benefit.usage();
        out.push(format!(
            "  {:<4} {:<16} {:>10} {:>10}  {} {:>4}  {}",
            benefit.id,
            benefit.name,
            fmt_currency(benefit.total),
            fmt_currency(benefit.remaining),
            usage_bar(usage.pct_used, BAR_WIDTH),
            fmt_percent(usage.pct_used),
            fmt_date(benefit.renew_date)
        ));
    }
    out.join("\n")
}

/// One benefit's claims in stored order, or the empty-state message
pub fn render_history(benefit: &Benefit) -> String {
    let summary = claim_summary(benefit);
    let mut out = vec![
        display::section(&format!("{} — Claim History", benefit.name)),
        display::muted(&summary.summary_line()),
    ];
    if summary.is_empty() {
        return out.join("\n");
    }
    out.push(format!("  {:<13} {:<20} {:>9}  {}", "Date", "Provider", "Amount", "Notes"));
    for charge in &benefit.charges {
        out.push(format!(
            "  {:<13} {:<20} {:>9}  {}",
            fmt_date(charge.date),
            charge.provider,
            fmt_currency(charge.amount),
            notes_or_placeholder(charge.notes.as_deref())
        ));
    }
    out.join("\n")
}

fn countdown(days: i64) -> String {
    match days {
        0 => "today".to_string(),
        1 => "in 1 day".to_string(),
        -1 => "1 day ago".to_string(),
        d if d > 0 => format!("in {} days", d),
        d => format!("{} days ago", -d),
    }
}

/// Every renewal date, with a countdown when `today` is known
pub fn render_renewals(renewals: &[Renewal], today: Option<NaiveDate>) -> String {
    let mut out = vec![display::section("Upcoming renewals")];
    for renewal in renewals {
        let mut line = format!("  {:<16} {}", renewal.name, fmt_date(renewal.renew_date));
        if let Some(today) = today {
            line.push_str(&format!("  ({})", countdown(renewal.days_until(today))));
        }
        out.push(line);
    }
    out.join("\n")
}

/// Active fixture set as pretty JSON
pub fn render_fixtures(benefits: &[Benefit]) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(benefits)?)
}
