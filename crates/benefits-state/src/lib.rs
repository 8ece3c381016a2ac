//! Benefits Tracker State - explicit state container for the dashboard
//!
//! The session flag, credentials, search query and overlay selection live in
//! one record owned by the top-level view and changed only through
//! [`AppEvent`]s. That keeps every transition testable without a terminal.
//!
//! ```text
//! key press ──→ AppEvent ──→ AppState::apply ──→ derived views ──→ render
//! ```

pub mod app;
pub mod events;
pub mod session;

pub use app::{AppState, Focus, LoginField, Overlay};
pub use events::AppEvent;
pub use session::{credentials_present, SessionPhase, SessionState, SignInOutcome};
