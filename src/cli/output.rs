use std::env;
use std::fmt;

use colored::Colorize;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Style {
    Header,
    Info,
    Success,
    Warning,
    Error,
}

/// Styled stdout helper. Plain mode (no color, text labels) is enabled by
/// setting `EXPENSE_CORE_PLAIN` for screen readers and scripted runs.
pub struct Formatter {
    plain_mode: bool,
}

impl Formatter {
    pub fn new() -> Self {
        Self {
            plain_mode: env::var_os("EXPENSE_CORE_PLAIN").is_some(),
        }
    }

    pub fn print_header(&self, title: impl fmt::Display) {
        println!("\n{}", self.apply_style(Style::Header, title));
    }

    pub fn print_info(&self, message: impl fmt::Display) {
        println!("{}", self.apply_style(Style::Info, message));
    }

    pub fn print_success(&self, message: impl fmt::Display) {
        println!("{}", self.apply_style(Style::Success, message));
    }

    pub fn print_warning(&self, message: impl fmt::Display) {
        println!("{}", self.apply_style(Style::Warning, message));
    }

    pub fn print_error(&self, message: impl fmt::Display) {
        println!("{}", self.apply_style(Style::Error, message));
    }

    fn apply_style(&self, style: Style, message: impl fmt::Display) -> String {
        match style {
            Style::Success => self.decorate("✔", "OK:", message, style),
            Style::Warning => self.decorate("⚠", "WARNING:", message, style),
            Style::Error => self.decorate("✖", "ERROR:", message, style),
            Style::Header => {
                let base = format!("=== {} ===", message);
                self.colorize(base, style)
            }
            Style::Info => message.to_string(),
        }
    }

    fn decorate(
        &self,
        icon: &str,
        plain_label: &str,
        message: impl fmt::Display,
        style: Style,
    ) -> String {
        if self.plain_mode {
            format!("{plain_label} {}", message)
        } else {
            let base = format!("{icon} {}", message);
            self.colorize(base, style)
        }
    }

    fn colorize(&self, text: String, style: Style) -> String {
        if self.plain_mode {
            return text;
        }

        match style {
            Style::Success => text.green().to_string(),
            Style::Warning => text.yellow().to_string(),
            Style::Error => text.red().to_string(),
            Style::Header => text.bold().to_string(),
            Style::Info => text,
        }
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}
