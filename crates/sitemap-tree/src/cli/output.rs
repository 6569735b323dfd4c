//! Styling for diagnostics written to stderr.

use std::io::IsTerminal;

const RED: &str = "\x1b[31m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Check if color output is enabled for stderr.
pub fn color_enabled() -> bool {
    // https://no-color.org/
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    std::io::stderr().is_terminal()
}

/// Colored string builder.
pub struct Styled {
    use_color: bool,
}

impl Styled {
    pub fn new() -> Self {
        Self {
            use_color: color_enabled(),
        }
    }

    pub fn plain() -> Self {
        Self { use_color: false }
    }

    /// Red X symbol, or nothing without color.
    pub fn fail_sym(&self) -> &str {
        if self.use_color {
            "\x1b[31m\u{2717}\x1b[0m "
        } else {
            ""
        }
    }

    pub fn red(&self, s: &str) -> String {
        if self.use_color {
            format!("{RED}{s}{RESET}")
        } else {
            s.to_string()
        }
    }

    pub fn bold(&self, s: &str) -> String {
        if self.use_color {
            format!("{BOLD}{s}{RESET}")
        } else {
            s.to_string()
        }
    }
}

/// Format a fatal error, including its cause chain.
pub fn format_error(s: &Styled, err: &anyhow::Error) -> String {
    format!("{}{} {err:#}", s.fail_sym(), s.bold(&s.red("error:")))
}

/// Print a fatal error to stderr.
pub fn print_error(s: &Styled, err: &anyhow::Error) {
    eprintln!("{}", format_error(s, err));
}
