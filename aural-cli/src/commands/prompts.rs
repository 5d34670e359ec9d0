//! Prompt and output helpers.
//!
//! These functions provide consistent output formatting across commands.
//! Each printer has a `_to` variant that writes to any writer (for testing).

use std::io::{self, Write};

use anyhow::Result;
use dialoguer::console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};

const HEADER_WIDTH: usize = 60;

/// Draws a boxed header with the given title.
pub fn print_header(title: &str) {
    let _ = print_header_to(&mut io::stdout(), title);
}

/// Draws a boxed header to a writer (for testing).
pub fn print_header_to<W: Write>(w: &mut W, title: &str) -> io::Result<()> {
    let border = "─".repeat(HEADER_WIDTH);
    writeln!(w, "┌{}┐", border)?;
    writeln!(w, "│ {:<width$} │", title, width = HEADER_WIDTH - 2)?;
    writeln!(w, "└{}┘", border)?;
    writeln!(w)?;
    Ok(())
}

/// Prints a success message with a green checkmark.
pub fn print_success(message: &str) {
    let _ = print_success_to(&mut io::stdout(), message);
}

/// Prints a success message to a writer (for testing).
pub fn print_success_to<W: Write>(w: &mut W, message: &str) -> io::Result<()> {
    writeln!(
        w,
        "\n{} {}",
        style("✓").green().bold(),
        style(message).green()
    )
}

/// Prints a warning with a yellow marker.
pub fn print_warning(message: &str) {
    let _ = print_warning_to(&mut io::stdout(), message);
}

/// Prints a warning to a writer (for testing).
pub fn print_warning_to<W: Write>(w: &mut W, message: &str) -> io::Result<()> {
    writeln!(
        w,
        "{} {}",
        style("⚠").yellow().bold(),
        style(message).yellow()
    )
}

/// Prints an error message with a red X.
pub fn print_error(message: &str) {
    let _ = print_error_to(&mut io::stdout(), message);
}

/// Prints an error message to a writer (for testing).
pub fn print_error_to<W: Write>(w: &mut W, message: &str) -> io::Result<()> {
    writeln!(w, "\n{} {}", style("✗").red().bold(), style(message).red())
}

/// Ask for a non-empty line of text.
pub fn ask_required(prompt: &str) -> Result<String> {
    let value: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .validate_with(|input: &String| -> Result<(), &str> {
            if input.trim().is_empty() {
                Err("a value is required")
            } else {
                Ok(())
            }
        })
        .interact_text()?;
    Ok(value.trim().to_string())
}

/// Ask for an optional line of text; empty input is `None`.
pub fn ask_optional(prompt: &str) -> Result<Option<String>> {
    let value: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    Ok(non_empty(value))
}

/// Pick one of `items`, returning its index.
pub fn choose(prompt: &str, items: &[&str]) -> Result<usize> {
    let index = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact()?;
    Ok(index)
}

/// Trimmed `value`, or `None` when blank.
pub fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn print_header_draws_box_with_title() {
        let mut output = Vec::new();
        print_header_to(&mut output, "Create Component").unwrap();
        let result = String::from_utf8(output).unwrap();

        assert!(result.contains("┌"), "Missing top-left corner");
        assert!(result.contains("┘"), "Missing bottom-right corner");
        assert!(result.contains("Create Component"), "Missing title");
    }

    #[test]
    fn print_header_pads_title_to_width() {
        let mut output = Vec::new();
        print_header_to(&mut output, "Short").unwrap();
        let result = String::from_utf8(output).unwrap();

        let lines: Vec<&str> = result.lines().collect();
        assert!(lines.len() >= 3, "Header should have at least 3 lines");
        assert_eq!(
            lines[0].chars().filter(|&c| c == '─').count(),
            HEADER_WIDTH
        );
    }

    #[test]
    fn print_success_shows_checkmark() {
        let mut output = Vec::new();
        print_success_to(&mut output, "Report written").unwrap();
        let result = String::from_utf8(output).unwrap();

        assert!(result.contains('✓'));
        assert!(result.contains("Report written"));
        assert!(result.ends_with('\n'));
    }

    #[test]
    fn print_warning_shows_marker() {
        let mut output = Vec::new();
        print_warning_to(&mut output, "Model missing").unwrap();
        let result = String::from_utf8(output).unwrap();

        assert!(result.contains('⚠'));
        assert!(result.contains("Model missing"));
    }

    #[test]
    fn print_error_shows_red_x() {
        let mut output = Vec::new();
        print_error_to(&mut output, "Failed!").unwrap();
        let result = String::from_utf8(output).unwrap();

        assert!(result.contains('✗'));
        assert!(result.contains("Failed!"));
        assert!(result.ends_with('\n'));
    }

    #[test]
    fn non_empty_trims_and_drops_blank() {
        assert_eq!(non_empty("  Button ".into()), Some("Button".into()));
        assert_eq!(non_empty("   ".into()), None);
    }
}
