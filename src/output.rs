//! Styled CLI output.
//!
//! Centralizes the ANSI colors used for command output. Color is disabled
//! when stdout is not a terminal or `NO_COLOR` is set.

/// Raw ANSI sequences.
pub mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const GREEN: &str = "\x1b[32m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[37m";
    pub const DARK_GRAY: &str = "\x1b[90m";
}

/// Output styling for CLI text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputStyle {
    /// Whether ANSI codes are emitted at all
    pub color: bool,
}

impl OutputStyle {
    pub fn colored() -> Self {
        Self { color: true }
    }

    pub fn plain() -> Self {
        Self { color: false }
    }

    /// Detect from the environment: a TTY on stdout and no `NO_COLOR`.
    pub fn detect() -> Self {
        let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        Self {
            color: !no_color && atty::is(atty::Stream::Stdout),
        }
    }

    fn wrap(&self, code: &str, text: &str) -> String {
        if self.color {
            format!("{}{}{}", code, text, ansi::RESET)
        } else {
            text.to_string()
        }
    }

    /// Regular content.
    pub fn primary_text(&self, text: &str) -> String {
        self.wrap(ansi::GRAY, text)
    }

    /// Dimmed hints and secondary details.
    pub fn secondary_text(&self, text: &str) -> String {
        self.wrap(ansi::DARK_GRAY, text)
    }

    /// Highlighted names and indices.
    pub fn accent_text(&self, text: &str) -> String {
        self.wrap(ansi::CYAN, text)
    }

    pub fn heading_text(&self, text: &str) -> String {
        self.wrap(ansi::BOLD, text)
    }

    pub fn success_text(&self, text: &str) -> String {
        self.wrap(ansi::GREEN, text)
    }
}

/// Style for the current process.
pub fn current_style() -> OutputStyle {
    OutputStyle::detect()
}
