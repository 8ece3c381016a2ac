//! Input events applied to [`crate::AppState`]
//!
//! Events are semantic, not key codes: the terminal layer decides which
//! event a key press means given the current focus.

/// A discrete user action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// Append a character to the focused text field (login field or search)
    TypeChar(char),
    /// Delete the last character of the focused text field
    Backspace,
    /// Move focus between username and password
    NextLoginField,
    /// Press "Sign in"
    SubmitLogin,
    /// Press "Sign out"
    SignOut,
    /// Move focus into the search box
    FocusSearch,
    /// Move focus from the search box back to the table
    LeaveSearch,
    /// Move the row selection down
    SelectNext,
    /// Move the row selection up
    SelectPrevious,
    /// Open the claim history of the selected row
    OpenHistory,
    /// Show or hide the renewals popover
    ToggleRenewals,
    /// Close whichever overlay is open
    CloseOverlay,
    /// Leave the application
    Quit,
}
