//! Display utilities for the CLI

use colored::*;

/// A section header
pub fn section(title: &str) -> String {
    format!(
        "\n{}\n {}\n{}",
        "━".repeat(60).bright_black(),
        title.bright_white().bold(),
        "━".repeat(60).bright_black()
    )
}

/// An error message
pub fn error(message: &str) -> String {
    format!("  {} {}", "✗".bright_red(), message.bright_red())
}

/// An info message
pub fn info(message: &str) -> String {
    format!("  {} {}", "→".bright_blue(), message)
}

/// A labeled value
pub fn labeled(label: &str, value: &str) -> String {
    format!("  {}: {}", label.bright_white(), value.bright_cyan())
}

/// A dimmed line
pub fn muted(message: &str) -> String {
    format!("  {}", message.bright_black())
}
