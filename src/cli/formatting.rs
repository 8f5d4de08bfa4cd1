//! Formatting utilities for CLI output.
//!
//! Provides the ANSI styling shared by the command output, the wizard frames,
//! and the banner printed before a registered command runs.

/// ANSI color codes for terminal output
pub struct Colors;

impl Colors {
    /// Reset all formatting
    pub const RESET: &'static str = "\x1b[0m";
    /// Bold text
    pub const BOLD: &'static str = "\x1b[1m";
    /// Dim text
    pub const DIM: &'static str = "\x1b[2m";

    /// Red color
    pub const RED: &'static str = "\x1b[31m";
    /// Green color
    pub const GREEN: &'static str = "\x1b[32m";
    /// Cyan color
    pub const CYAN: &'static str = "\x1b[36m";

    /// Bright green color
    pub const BRIGHT_GREEN: &'static str = "\x1b[92m";
}

/// Marker printed in front of a command line about to run.
pub const RUNNING_MARKER: &str = "⌛";

/// Formats section headers with styling
pub fn format_header(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::CYAN, text, Colors::RESET)
}

/// Formats command names with styling
pub fn format_command(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::GREEN, text, Colors::RESET)
}

/// Formats descriptions with muted styling
pub fn format_description(text: &str) -> String {
    format!("{}{}{}", Colors::DIM, text, Colors::RESET)
}

/// Formats error messages with red styling
pub fn format_error(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::RED, text, Colors::RESET)
}

/// Formats the line announcing the command about to be launched.
///
/// # Examples
///
/// ```
/// use lotta::cli::formatting::format_running;
///
/// let line = format_running("echo hi");
/// assert!(line.contains("⌛  echo hi"));
/// ```
pub fn format_running(command_line: &str) -> String {
    format!(
        "{}{}{RUNNING_MARKER}  {command_line}{}",
        Colors::BOLD,
        Colors::BRIGHT_GREEN,
        Colors::RESET
    )
}
