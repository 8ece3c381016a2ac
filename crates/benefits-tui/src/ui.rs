//! Rendering. Every function here reads `AppState` and nothing else.

use benefits_domain::format::{
    fmt_currency, fmt_date, fmt_percent, gauge_ratio, notes_or_placeholder, usage_bar,
};
use benefits_domain::{Benefit, ClaimSummary, PortfolioTotals};
use benefits_state::{AppState, Focus, LoginField, Overlay};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::block::Title;
use ratatui::widgets::{
    Block, Borders, Cell, Clear, Gauge, List, ListItem, Paragraph, Row, Table, TableState, Wrap,
};
use ratatui::Frame;

pub(crate) const APP_TITLE: &str = "Benefits Tracker";
pub(crate) const LOGIN_HINT: &str = "Demo login — any credentials will work for now.";
pub(crate) const ADD_BENEFIT_LABEL: &str = " + Add benefit (placeholder) ";

const USERNAME_PLACEHOLDER: &str = "you@example.com";
const PASSWORD_PLACEHOLDER: &str = "••••••••";
const BAR_WIDTH: usize = 12;

fn accent() -> Style {
    Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD)
}

fn muted() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn draw(frame: &mut Frame<'_>, app: &AppState) {
    if app.session().is_logged_in() {
        draw_dashboard(frame, app);
    } else {
        draw_login(frame, app);
    }
}

// ── Login ─────────────────────────────────────────────────────────────────────

fn draw_login(frame: &mut Frame<'_>, app: &AppState) {
    let area = centered_rect(frame.area(), 60, 14);
    let session = app.session();

    let field_line = |label: &str, value: String, placeholder: &str, focused: bool| {
        let marker = if focused { "> " } else { "  " };
        let (text, style) = if value.is_empty() {
            (placeholder.to_string(), muted())
        } else {
            (value, Style::default())
        };
        let style = if focused { style.add_modifier(Modifier::UNDERLINED) } else { style };
        vec![
            Line::from(Span::styled(format!("{}{}", marker, label), Style::default().add_modifier(Modifier::BOLD))),
            Line::from(Span::styled(format!("  {}", text), style)),
        ]
    };

    let mut lines = Vec::new();
    lines.push(Line::from(""));
    lines.extend(field_line(
        "Username",
        session.username.clone(),
        USERNAME_PLACEHOLDER,
        app.login_field() == LoginField::Username,
    ));
    lines.push(Line::from(""));
    lines.extend(field_line(
        "Password",
        "•".repeat(session.password.chars().count()),
        PASSWORD_PLACEHOLDER,
        app.login_field() == LoginField::Password,
    ));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("[ Sign in ]", accent())).alignment(Alignment::Center));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(LOGIN_HINT, muted())).alignment(Alignment::Center));

    let card = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Title::from(format!(" Welcome to your {} ", APP_TITLE)).alignment(Alignment::Center)),
    );
    frame.render_widget(Clear, area);
    frame.render_widget(card, area);

    let footer_area = Rect { y: area.y.saturating_add(area.height), height: 1, ..area };
    if footer_area.bottom() <= frame.area().bottom() {
        frame.render_widget(
            Paragraph::new("Tab switch field | Enter sign in | Esc quit").style(muted()),
            footer_area,
        );
    }
}

// ── Dashboard ─────────────────────────────────────────────────────────────────

fn draw_dashboard(frame: &mut Frame<'_>, app: &AppState) {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Min(6),
            Constraint::Length(3),
        ])
        .split(frame.area());

    render_header(frame, vertical[0], app);
    render_cards(frame, vertical[1], &app.totals());
    render_table(frame, vertical[2], app);
    render_footer(frame, vertical[3], app);

    match app.overlay() {
        Overlay::None => {}
        Overlay::Renewals => render_renewals(frame, app),
        Overlay::History(_) => {
            if let Some((benefit, summary)) = app.history_benefit() {
                render_history(frame, benefit, &summary);
            }
        }
    }
}

fn render_header(frame: &mut Frame<'_>, area: Rect, app: &AppState) {
    let split = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let title = Paragraph::new(Line::from(vec![
        Span::styled(" BT ", accent()),
        Span::styled(format!(" {}", APP_TITLE), Style::default().add_modifier(Modifier::BOLD)),
    ]))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, split[0]);

    let searching = app.focus() == Focus::Search;
    let query = &app.session().query;
    let search_text = if query.is_empty() && !searching {
        Span::styled("Search benefits...", muted())
    } else if searching {
        Span::raw(format!("{}_", query))
    } else {
        Span::raw(query.clone())
    };
    let border = if searching { Style::default().fg(Color::Yellow) } else { Style::default() };
    let search = Paragraph::new(Line::from(search_text)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(" / Search "),
    );
    frame.render_widget(search, split[1]);
}

fn render_cards(frame: &mut Frame<'_>, area: Rect, totals: &PortfolioTotals) {
    let split = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let coverage = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" Coverage Remaining "))
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Black))
        .ratio(gauge_ratio(totals.pct_remaining))
        .label(format!(
            "{} of {} · {}",
            fmt_currency(totals.remaining),
            fmt_currency(totals.total),
            fmt_percent(totals.pct_remaining)
        ));
    frame.render_widget(coverage, split[0]);

    let used = Paragraph::new(vec![
        Line::from(Span::styled(fmt_currency(totals.used), Style::default().add_modifier(Modifier::BOLD))),
        Line::from(Span::styled("Across all benefits", muted())),
    ])
    .block(Block::default().borders(Borders::ALL).title(" Used This Year "));
    frame.render_widget(used, split[1]);

    let count = Paragraph::new(vec![
        Line::from(Span::styled(totals.active.to_string(), Style::default().add_modifier(Modifier::BOLD))),
        Line::from(Span::styled("Active", muted())),
    ])
    .block(Block::default().borders(Borders::ALL).title(" Benefits "));
    frame.render_widget(count, split[2]);
}

fn benefit_row(benefit: &Benefit) -> Row<'static> {
    let usage = benefit.usage();
    Row::new(vec![
        Cell::from(benefit.name.clone()),
        Cell::from(Line::from(fmt_currency(benefit.total)).alignment(Alignment::Right)),
        Cell::from(Line::from(fmt_currency(benefit.remaining)).alignment(Alignment::Right)),
        Cell::from(format!(
            "{} {:>4}",
            usage_bar(usage.pct_used, BAR_WIDTH),
            fmt_percent(usage.pct_used)
        )),
        Cell::from(fmt_date(benefit.renew_date)),
        Cell::from(Line::from("View").alignment(Alignment::Right)),
    ])
}

fn render_table(frame: &mut Frame<'_>, area: Rect, app: &AppState) {
    let visible = app.visible_benefits();
    let rows: Vec<Row<'_>> = visible.iter().map(|b| benefit_row(b)).collect();

    let header = Row::new(vec![
        Cell::from("Benefit"),
        Cell::from(Line::from("Total").alignment(Alignment::Right)),
        Cell::from(Line::from("Remaining").alignment(Alignment::Right)),
        Cell::from("Progress"),
        Cell::from("Renews"),
        Cell::from(Line::from("History").alignment(Alignment::Right)),
    ])
    .style(Style::default().add_modifier(Modifier::BOLD));

    let widths = [
        Constraint::Min(14),
        Constraint::Length(10),
        Constraint::Length(10),
        Constraint::Length(BAR_WIDTH as u16 + 5),
        Constraint::Length(12),
        Constraint::Length(7),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Your Benefits ")
        .title(Title::from(ADD_BENEFIT_LABEL).alignment(Alignment::Right));

    if rows.is_empty() {
        let empty = Paragraph::new(format!("No benefits match \"{}\".", app.session().query))
            .style(muted())
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");
    let mut state = TableState::default().with_selected(Some(app.selected()));
    frame.render_stateful_widget(table, area, &mut state);
}

fn render_footer(frame: &mut Frame<'_>, area: Rect, app: &AppState) {
    let keys = match (app.overlay(), app.focus()) {
        (Overlay::None, Focus::Table) => {
            "/ search | Up/Down select | Enter history | R renewals | O sign out | Q quit"
        }
        (Overlay::None, Focus::Search) => "type to filter | Enter/Esc done | Up/Down select",
        _ => "Esc close",
    };
    let footer = Paragraph::new(Line::from(vec![
        Span::raw(keys),
        Span::styled(format!("   signed in as {}", app.session().username.trim()), muted()),
    ]))
    .block(Block::default().borders(Borders::ALL).title("Hotkeys"));
    frame.render_widget(footer, area);
}

// ── Overlays ──────────────────────────────────────────────────────────────────

fn render_renewals(frame: &mut Frame<'_>, app: &AppState) {
    let renewals = app.renewals();
    let height = (renewals.len() as u16).saturating_add(4);
    let area = centered_rect(frame.area(), 44, height);

    let items: Vec<ListItem<'_>> = renewals
        .iter()
        .map(|r| {
            ListItem::new(Line::from(vec![
                Span::raw(format!("{:<24}", r.name)),
                Span::styled(fmt_date(r.renew_date), muted()),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Upcoming renewals ")
            .title(Title::from(" Esc ").alignment(Alignment::Right)),
    );
    frame.render_widget(Clear, area);
    frame.render_widget(list, area);
}

fn render_history(frame: &mut Frame<'_>, benefit: &Benefit, summary: &ClaimSummary) {
    let full = frame.area();
    let width = full.width.saturating_mul(4) / 5;
    let height = (benefit.charges.len() as u16).saturating_add(7).max(7);
    let area = centered_rect(full, width, height);

    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} — Claim History ", benefit.name))
        .title(Title::from(" Esc ").alignment(Alignment::Right));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let split = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .split(inner);

    frame.render_widget(
        Paragraph::new(summary.summary_line()).style(muted()).wrap(Wrap { trim: true }),
        split[0],
    );

    if summary.is_empty() {
        return;
    }

    let rows: Vec<Row<'_>> = benefit
        .charges
        .iter()
        .map(|c| {
            Row::new(vec![
                Cell::from(fmt_date(c.date)),
                Cell::from(c.provider.clone()),
                Cell::from(Line::from(fmt_currency(c.amount)).alignment(Alignment::Right)),
                Cell::from(notes_or_placeholder(c.notes.as_deref()).to_string()),
            ])
        })
        .collect();
    let header = Row::new(vec![
        Cell::from("Date"),
        Cell::from("Provider"),
        Cell::from(Line::from("Amount").alignment(Alignment::Right)),
        Cell::from("Notes"),
    ])
    .style(Style::default().add_modifier(Modifier::BOLD));
    let table = Table::new(
        rows,
        [
            Constraint::Length(13),
            Constraint::Min(16),
            Constraint::Length(9),
            Constraint::Min(10),
        ],
    )
    .header(header);
    frame.render_widget(table, split[1]);
}

/// A `width` x `height` rect centered in `area`, shrunk to fit.
pub(crate) fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
