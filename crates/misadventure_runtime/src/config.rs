//! REPL configuration.

use crate::say::terminal_width;

/// Settings for a [`Repl`](crate::Repl).
#[derive(Clone, Debug)]
pub struct ReplConfig {
    /// Printed before each line is read.
    pub prompt: String,
    /// Printed once when the loop starts.
    pub banner: Option<String>,
    /// Whether the built-in `help` command (and its `?` alias) is enabled.
    pub help: bool,
    /// Wrap width; `None` follows the terminal.
    pub width: Option<usize>,
    /// Shown for input nothing matched; `{line}` is replaced by the input.
    pub unmatched_message: String,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
            banner: None,
            help: true,
            width: None,
            unmatched_message: "I don't understand '{line}'.".to_string(),
        }
    }
}

impl ReplConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Builder method to set the banner.
    #[must_use]
    pub fn with_banner(mut self, banner: impl Into<String>) -> Self {
        self.banner = Some(banner.into());
        self
    }

    /// Builder method to drop the banner.
    #[must_use]
    pub fn without_banner(mut self) -> Self {
        self.banner = None;
        self
    }

    /// Builder method to enable or disable the built-in help.
    #[must_use]
    pub fn with_help(mut self, help: bool) -> Self {
        self.help = help;
        self
    }

    /// Builder method to fix the wrap width.
    #[must_use]
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    /// Builder method to set the unmatched-input message.
    #[must_use]
    pub fn with_unmatched_message(mut self, message: impl Into<String>) -> Self {
        self.unmatched_message = message.into();
        self
    }

    /// The configured width, or the terminal's.
    #[must_use]
    pub fn effective_width(&self) -> usize {
        self.width.unwrap_or_else(terminal_width)
    }

    /// The unmatched-input message for `line`.
    #[must_use]
    pub fn unmatched(&self, line: &str) -> String {
        self.unmatched_message.replace("{line}", line)
    }
}
