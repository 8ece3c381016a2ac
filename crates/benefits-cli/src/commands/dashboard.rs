//! Interactive dashboard command

use benefits_domain::Benefit;
use benefits_state::AppState;
use benefits_tui::{run_dashboard, TuiConfig};

use crate::config::UiConfig;
use crate::display;

pub fn tui_config(ui: &UiConfig) -> TuiConfig {
    TuiConfig { tick: ui.tick() }
}

/// Run the terminal dashboard until the user quits
pub fn run(benefits: Vec<Benefit>, ui: &UiConfig) -> anyhow::Result<()> {
    let app = AppState::new(benefits);
    let outcome = run_dashboard(app, &tui_config(ui))?;

    let status = if outcome.session.is_logged_in() { "signed in" } else { "signed out" };
    println!("{}", display::info(&format!("Dashboard closed ({})", status)));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn tick_follows_ui_config() {
        let config = tui_config(&UiConfig { tick_ms: 40 });
        assert_eq!(config.tick, Duration::from_millis(40));
    }
}
