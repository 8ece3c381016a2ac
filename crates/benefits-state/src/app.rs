//! Top-level application state
//!
//! `AppState` owns the benefit list and the session record. Every derived
//! view (filtered rows, portfolio totals, renewals) is recomputed from them
//! on demand, so rendering is a pure function of this struct.

use benefits_domain::{
    claim_summary, filter_benefits, portfolio_totals, renewals, Benefit, BenefitId, ClaimSummary,
    PortfolioTotals, Renewal,
};

use crate::events::AppEvent;
use crate::session::{SessionState, SignInOutcome};

/// Login form field with keyboard focus
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoginField {
    #[default]
    Username,
    Password,
}

/// Dashboard element with keyboard focus
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Table,
    Search,
}

/// Popover or modal drawn above the dashboard
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Overlay {
    #[default]
    None,
    Renewals,
    History(BenefitId),
}

/// Everything the dashboard renders from
#[derive(Debug, Clone)]
pub struct AppState {
    benefits: Vec<Benefit>,
    session: SessionState,
    login_field: LoginField,
    focus: Focus,
    overlay: Overlay,
    selected: usize,
    should_quit: bool,
}

impl AppState {
    /// Create a logged-out app over a fixed benefit list
    pub fn new(benefits: Vec<Benefit>) -> Self {
        Self {
            benefits,
            session: SessionState::new(),
            login_field: LoginField::default(),
            focus: Focus::default(),
            overlay: Overlay::default(),
            selected: 0,
            should_quit: false,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn benefits(&self) -> &[Benefit] {
        &self.benefits
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn login_field(&self) -> LoginField {
        self.login_field
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    /// Row index into [`AppState::visible_benefits`]
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    // ========================================================================
    // Derived views
    // ========================================================================

    /// Rows matching the current search query
    pub fn visible_benefits(&self) -> Vec<&Benefit> {
        filter_benefits(&self.benefits, &self.session.query)
    }

    /// Summary-card totals over the full list, whatever the query is
    pub fn totals(&self) -> PortfolioTotals {
        portfolio_totals(&self.benefits)
    }

    /// Renewals popover content, unaffected by search
    pub fn renewals(&self) -> Vec<Renewal> {
        renewals(&self.benefits)
    }

    pub fn selected_benefit(&self) -> Option<&Benefit> {
        self.visible_benefits().get(self.selected).copied()
    }

    /// Benefit shown by the open history modal, if any
    pub fn history_benefit(&self) -> Option<(&Benefit, ClaimSummary)> {
        match &self.overlay {
            Overlay::History(id) => self
                .benefits
                .iter()
                .find(|b| &b.id == id)
                .map(|b| (b, claim_summary(b))),
            _ => None,
        }
    }

    // ========================================================================
    // Event handling
    // ========================================================================

    /// Apply one input event
    pub fn apply(&mut self, event: AppEvent) {
        if event == AppEvent::Quit {
            self.should_quit = true;
            return;
        }
        if self.session.is_logged_in() {
            self.apply_dashboard(event);
        } else {
            self.apply_login(event);
        }
    }

    fn apply_login(&mut self, event: AppEvent) {
        match event {
            AppEvent::TypeChar(c) => self.login_buffer().push(c),
            AppEvent::Backspace => {
                self.login_buffer().pop();
            }
            AppEvent::NextLoginField => {
                self.login_field = match self.login_field {
                    LoginField::Username => LoginField::Password,
                    LoginField::Password => LoginField::Username,
                };
            }
            AppEvent::SubmitLogin => {
                if self.session.sign_in() == SignInOutcome::SignedIn {
                    self.focus = Focus::Table;
                    self.overlay = Overlay::None;
                    self.clamp_selection();
                }
            }
            _ => {}
        }
    }

    fn apply_dashboard(&mut self, event: AppEvent) {
        if self.overlay != Overlay::None {
            self.apply_overlay(event);
            return;
        }
        match (self.focus, event) {
            (_, AppEvent::SelectNext) => {
                let len = self.visible_benefits().len();
                if self.selected + 1 < len {
                    self.selected += 1;
                }
            }
            (_, AppEvent::SelectPrevious) => {
                self.selected = self.selected.saturating_sub(1);
            }
            (Focus::Search, AppEvent::TypeChar(c)) => {
                self.session.query.push(c);
                self.clamp_selection();
            }
            (Focus::Search, AppEvent::Backspace) => {
                self.session.query.pop();
                self.clamp_selection();
            }
            (Focus::Search, AppEvent::LeaveSearch | AppEvent::CloseOverlay) => {
                self.focus = Focus::Table;
            }
            (Focus::Table, AppEvent::FocusSearch) => {
                self.focus = Focus::Search;
            }
            (Focus::Table, AppEvent::OpenHistory) => {
                if let Some(benefit) = self.selected_benefit() {
                    let id = benefit.id.clone();
                    tracing::debug!(benefit = %id, "opened claim history");
                    self.overlay = Overlay::History(id);
                }
            }
            (Focus::Table, AppEvent::ToggleRenewals) => {
                tracing::debug!("opened renewals");
                self.overlay = Overlay::Renewals;
            }
            (Focus::Table, AppEvent::SignOut) => {
                self.session.sign_out();
                self.focus = Focus::Table;
            }
            _ => {}
        }
    }

    fn apply_overlay(&mut self, event: AppEvent) {
        let close = match event {
            AppEvent::CloseOverlay => true,
            AppEvent::ToggleRenewals => self.overlay == Overlay::Renewals,
            _ => false,
        };
        if close {
            tracing::debug!(overlay = ?self.overlay, "closed overlay");
            self.overlay = Overlay::None;
        }
    }

    fn login_buffer(&mut self) -> &mut String {
        match self.login_field {
            LoginField::Username => &mut self.session.username,
            LoginField::Password => &mut self.session.password,
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.visible_benefits().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }
}
