//! Emphasis
//!
//! Styling capability threaded through message builders and the writer.
//! Nothing in the renderer depends on how a span is styled, so a no-op
//! implementation gives plain, deterministic text.

/// ANSI color codes for terminal output.
mod colors {
    pub const BOLD: &str = "\x1b[1m";
    pub const POSITIVE: &str = "\x1b[92m"; // Bright green
    pub const NEGATIVE: &str = "\x1b[91m"; // Bright red
    pub const RESET: &str = "\x1b[0m";
}

/// Named styling operations used when building messages and annotations.
pub trait Emphasis {
    fn bold(&self, text: &str) -> String;

    /// Styling for suggestions and valid alternatives.
    fn positive(&self, text: &str) -> String;

    /// Styling for offending fields and underlines.
    fn negative(&self, text: &str) -> String;
}

/// Emphasis that leaves text untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlainEmphasis;

impl Emphasis for PlainEmphasis {
    fn bold(&self, text: &str) -> String {
        text.to_owned()
    }

    fn positive(&self, text: &str) -> String {
        text.to_owned()
    }

    fn negative(&self, text: &str) -> String {
        text.to_owned()
    }
}

/// Color output mode for terminal emphasis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Automatically detect based on terminal capabilities.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorMode {
    /// Resolve to a boolean based on terminal detection.
    ///
    /// `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }

    /// Parse a `--color` flag value.
    pub fn from_flag(value: &str) -> Option<Self> {
        match value {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// ANSI emphasis for terminals, falling back to plain text when colors are off.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TerminalEmphasis {
    colors: bool,
}

impl TerminalEmphasis {
    /// Create a terminal emphasis with explicit color mode.
    ///
    /// # Arguments
    ///
    /// * `mode` - Color mode selection
    /// * `is_tty` - Whether output is a TTY (used for `ColorMode::Auto`)
    pub fn with_color_mode(mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmphasis {
            colors: mode.should_use_colors(is_tty),
        }
    }

    pub fn uses_colors(self) -> bool {
        self.colors
    }

    fn paint(self, text: &str, color: &str) -> String {
        if self.colors {
            format!("{color}{text}{}", colors::RESET)
        } else {
            text.to_owned()
        }
    }
}

impl Emphasis for TerminalEmphasis {
    fn bold(&self, text: &str) -> String {
        self.paint(text, colors::BOLD)
    }

    fn positive(&self, text: &str) -> String {
        self.paint(text, colors::POSITIVE)
    }

    fn negative(&self, text: &str) -> String {
        self.paint(text, colors::NEGATIVE)
    }
}
