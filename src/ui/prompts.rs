//! Confirmation prompt helpers built on dialoguer.
//!
//! Confirmations are read as free-form text rather than through
//! `dialoguer::Confirm`: the widget re-asks until it sees a key it knows,
//! but the rule here is that anything other than an accept declines, so
//! unrecognized input has to reach the caller as given.

use console::Term;
use dialoguer::Input;

use crate::error::{OutfitterError, Result};

use super::Prompt;

/// Whether a typed answer accepts a yes-defaulting question.
///
/// Empty input takes the default and accepts; so does `y` in any case.
/// Everything else declines, including `yes`.
pub fn is_affirmative(input: &str) -> bool {
    let trimmed = input.trim();
    trimmed.is_empty() || trimmed.eq_ignore_ascii_case("y")
}

/// Ask a yes/no question on the terminal.
pub fn ask_confirm(prompt: &Prompt, term: &Term) -> Result<bool> {
    let answer: String = Input::new()
        .with_prompt(format!("{} [Y/n]", prompt.question))
        .allow_empty(true)
        .interact_on(term)
        .map_err(map_dialoguer_err)?;
    Ok(is_affirmative(&answer))
}

/// Convert dialoguer errors to OutfitterError.
fn map_dialoguer_err(e: dialoguer::Error) -> OutfitterError {
    OutfitterError::Io(e.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_accepts() {
        assert!(is_affirmative(""));
        assert!(is_affirmative("   "));
    }

    #[test]
    fn y_accepts_in_any_case() {
        assert!(is_affirmative("y"));
        assert!(is_affirmative("Y"));
        assert!(is_affirmative("  y  "));
    }

    #[test]
    fn anything_else_declines() {
        assert!(!is_affirmative("n"));
        assert!(!is_affirmative("no"));
        assert!(!is_affirmative("yes"));
        assert!(!is_affirmative("yeah"));
        assert!(!is_affirmative("ok"));
        assert!(!is_affirmative("quit"));
    }
}
