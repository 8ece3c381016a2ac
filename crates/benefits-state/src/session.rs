//! Session gate
//!
//! Two states, `LoggedOut` (initial) and `LoggedIn`. Signing in only checks
//! that both credentials are non-blank; nothing is verified against a store.
//! Signing out keeps the typed credentials and the search query.

use serde::{Deserialize, Serialize};

/// Which side of the login gate the user is on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    #[default]
    LoggedOut,
    LoggedIn,
}

/// Result of a sign-in attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignInOutcome {
    /// Transitioned to `LoggedIn`
    SignedIn,
    /// Blank username or password; state unchanged
    Declined,
    /// Already signed in; state unchanged
    AlreadySignedIn,
}

/// Session record owned by the top-level view
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub phase: SessionPhase,
    pub username: String,
    pub password: String,
    pub query: String,
}

impl std::fmt::Debug for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionState")
            .field("phase", &self.phase)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("query", &self.query)
            .finish()
    }
}

/// The only guard on the login form
pub fn credentials_present(username: &str, password: &str) -> bool {
    !username.trim().is_empty() && !password.trim().is_empty()
}

impl SessionState {
    /// Create a logged-out session with empty fields
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_logged_in(&self) -> bool {
        self.phase == SessionPhase::LoggedIn
    }

    /// Attempt the `LoggedOut -> LoggedIn` transition
    pub fn sign_in(&mut self) -> SignInOutcome {
        if self.is_logged_in() {
            return SignInOutcome::AlreadySignedIn;
        }
        if !credentials_present(&self.username, &self.password) {
            tracing::debug!(
                username_len = self.username.trim().len(),
                "sign-in declined: blank credentials"
            );
            return SignInOutcome::Declined;
        }
        self.phase = SessionPhase::LoggedIn;
        tracing::info!(username = %self.username.trim(), "signed in");
        SignInOutcome::SignedIn
    }

    /// Unconditional `LoggedIn -> LoggedOut`. Credentials are retained.
    pub fn sign_out(&mut self) {
        if self.is_logged_in() {
            tracing::info!(username = %self.username.trim(), "signed out");
        }
        self.phase = SessionPhase::LoggedOut;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_credentials(username: &str, password: &str) -> SessionState {
        SessionState {
            username: username.to_string(),
            password: password.to_string(),
            ..SessionState::new()
        }
    }

    #[test]
    fn starts_logged_out() {
        assert_eq!(SessionState::new().phase, SessionPhase::LoggedOut);
    }

    #[test]
    fn blank_username_is_declined() {
        let mut s = with_credentials("", "x");
        assert_eq!(s.sign_in(), SignInOutcome::Declined);
        assert_eq!(s.phase, SessionPhase::LoggedOut);

        let mut s = with_credentials("   ", "x");
        assert_eq!(s.sign_in(), SignInOutcome::Declined);

        let mut s = with_credentials("a", " \t");
        assert_eq!(s.sign_in(), SignInOutcome::Declined);
        assert!(!s.is_logged_in());
    }

    #[test]
    fn any_non_blank_pair_signs_in() {
        let mut s = with_credentials("a", "b");
        assert_eq!(s.sign_in(), SignInOutcome::SignedIn);
        assert_eq!(s.phase, SessionPhase::LoggedIn);
        assert_eq!(s.sign_in(), SignInOutcome::AlreadySignedIn);
    }

    #[test]
    fn sign_out_keeps_credentials_and_query() {
        let mut s = with_credentials("you@example.com", "hunter2");
        s.query = "dent".to_string();
        s.sign_in();
        s.sign_out();
        assert_eq!(s.phase, SessionPhase::LoggedOut);
        assert_eq!(s.username, "you@example.com");
        assert_eq!(s.password, "hunter2");
        assert_eq!(s.query, "dent");

        // and the machine cycles
        assert_eq!(s.sign_in(), SignInOutcome::SignedIn);
    }

    #[test]
    fn sign_out_when_logged_out_is_harmless() {
        let mut s = SessionState::new();
        s.sign_out();
        assert_eq!(s.phase, SessionPhase::LoggedOut);
    }

    #[test]
    fn debug_redacts_password() {
        let s = with_credentials("a", "secret");
        let rendered = format!("{:?}", s);
        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn serializes_as_plain_record() {
        let mut s = with_credentials("a", "b");
        s.sign_in();
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["phase"], "logged_in");
        let back: SessionState = serde_json::from_value(json).unwrap();
        assert_eq!(back, s);
    }
}
