// Rust guideline compliant 2026-02-06

//! Terminal UI utilities for the TrouveTonPro CLI.
//!
//! This module provides color detection, terminal width detection
//! and text wrapping.

use std::env;

/// Determines if colored output should be used.
///
/// Respects the NO_COLOR environment variable and terminal capabilities.
///
/// # Returns
/// `true` if colored output should be used, `false` otherwise
pub fn should_use_color() -> bool {
    if env::var("NO_COLOR").is_ok() {
        return false;
    }

    atty::is(atty::Stream::Stdout)
}

/// Gets the terminal width in columns.
///
/// # Returns
/// The terminal width, or 80 if it cannot be determined
pub fn get_terminal_width() -> usize {
    term_size::dimensions().map(|(w, _)| w).unwrap_or(80)
}

/// Wraps text to fit within the terminal width.
///
/// Widths are counted in characters so Arabic and accented text wraps at
/// the same column as ASCII.
///
/// # Arguments
/// * `text` - The text to wrap
/// * `indent` - The indentation of continuation lines (in spaces)
///
/// # Returns
/// The wrapped text
pub fn wrap_text(text: &str, indent: usize) -> String {
    wrap_to_width(text, indent, get_terminal_width())
}

fn wrap_to_width(text: &str, indent: usize, width: usize) -> String {
    let available_width = width.saturating_sub(indent);

    if available_width < 10 {
        return text.to_string();
    }

    let mut result = String::new();
    let indent_str = " ".repeat(indent);

    for (i, line) in text.lines().enumerate() {
        if i > 0 {
            result.push('\n');
            result.push_str(&indent_str);
        }

        if line.chars().count() <= available_width {
            result.push_str(line);
            continue;
        }

        let mut current_line = String::new();
        let mut current_width = 0;
        for word in line.split_whitespace() {
            let word_width = word.chars().count();
            if current_line.is_empty() {
                current_line.push_str(word);
                current_width = word_width;
            } else if current_width + 1 + word_width <= available_width {
                current_line.push(' ');
                current_line.push_str(word);
                current_width += 1 + word_width;
            } else {
                result.push_str(&current_line);
                result.push('\n');
                result.push_str(&indent_str);
                current_line = word.to_string();
                current_width = word_width;
            }
        }
        result.push_str(&current_line);
    }

    result
}
