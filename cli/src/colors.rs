use colored::*;

pub struct ColorScheme;

impl ColorScheme {
    pub fn new(use_colors: bool) -> Self {
        if !use_colors {
            colored::control::set_override(false);
        }
        Self
    }

    pub fn label(&self, text: &str) -> ColoredString {
        text.yellow()
    }

    pub fn success(&self, text: &str) -> ColoredString {
        text.green()
    }

    pub fn error(&self, text: &str) -> ColoredString {
        text.red()
    }

    pub fn step_number(&self, text: &str) -> ColoredString {
        text.blue()
    }

    pub fn weight(&self, text: &str) -> ColoredString {
        text.cyan()
    }

    pub fn number(&self, text: &str) -> ColoredString {
        text.green()
    }

    pub fn muted(&self, text: &str) -> ColoredString {
        text.dimmed()
    }

    pub fn stats(&self, text: &str) -> ColoredString {
        text.blue()
    }
}
