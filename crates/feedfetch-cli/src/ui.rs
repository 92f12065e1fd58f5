//! UI helpers for CLI display.

use console::style;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// Style a heading line.
#[must_use]
pub fn heading(text: &str) -> String {
    if is_color_disabled() {
        text.to_string()
    } else {
        style(text).bold().cyan().to_string()
    }
}

/// Style a post title.
#[must_use]
pub fn title(text: &str) -> String {
    if is_color_disabled() {
        text.to_string()
    } else {
        style(text).bold().to_string()
    }
}

/// Style a status tag: `[OK]` in green, anything else in red.
#[must_use]
pub fn status(ok: bool) -> String {
    let tag = if ok { "[OK]" } else { "[ERROR]" };
    if is_color_disabled() {
        tag.to_string()
    } else if ok {
        style(tag).green().bold().to_string()
    } else {
        style(tag).red().bold().to_string()
    }
}

/// Print an error message.
pub fn print_error(text: &str) {
    eprintln!("{} {text}", status(false));
}
