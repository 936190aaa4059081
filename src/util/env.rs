//! Terminal detection for color decisions.

use std::io::IsTerminal;

/// Check if stdout is a TTY.
#[must_use]
pub fn stdout_is_tty() -> bool {
    std::io::stdout().is_terminal()
}

/// Check if color should be enabled.
///
/// `no_color` is the already-resolved setting from flags, env and config.
/// Dumb terminals and non-TTY stdout also disable color.
#[must_use]
pub fn should_use_color(no_color: bool) -> bool {
    if no_color {
        return false;
    }

    if std::env::var("TERM").is_ok_and(|t| t == "dumb") {
        return false;
    }

    stdout_is_tty()
}
