//! Non-interactive UI for CI/headless environments.

use std::collections::HashMap;

use crate::error::Result;

use super::theme::OutfitterTheme;
use super::{is_affirmative, OutputMode, Prompt, SpinnerHandle, UserInterface};

const PROMPT_OVERRIDE_PREFIX: &str = "OUTFITTER_PROMPT_";

/// UI implementation for non-interactive mode.
///
/// Questions are answered with their default (yes) unless an
/// `OUTFITTER_PROMPT_<KEY>` environment variable supplies an answer, which
/// is judged by the same rule as typed input. Setting
/// `OUTFITTER_PROMPT_INSTALL_CLANG=no` declines that one install.
pub struct NonInteractiveUI {
    mode: OutputMode,
    env_overrides: HashMap<String, String>,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        // Collect OUTFITTER_PROMPT_* env vars
        let env_overrides: HashMap<String, String> = std::env::vars()
            .filter(|(k, _)| k.starts_with(PROMPT_OVERRIDE_PREFIX))
            .collect();

        Self {
            mode,
            env_overrides,
        }
    }

    /// Create with explicit overrides (for testing).
    pub fn with_overrides(mode: OutputMode, overrides: HashMap<String, String>) -> Self {
        Self {
            mode,
            env_overrides: overrides,
        }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn detail(&mut self, msg: &str) {
        if self.mode.shows_detail() {
            println!("  {}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_warnings() {
            eprintln!("⚠ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn confirm(&mut self, prompt: &Prompt) -> Result<bool> {
        let env_key = format!("{}{}", PROMPT_OVERRIDE_PREFIX, prompt.key.to_uppercase());
        if let Some(value) = self.env_overrides.get(&env_key) {
            return Ok(is_affirmative(value));
        }
        // No override: take the default, which is always yes.
        Ok(true)
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_status() {
            println!("  {}", message);
        }
        Box::new(NoopSpinner {
            quiet: !self.mode.shows_status(),
        })
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("\n{}\n", title);
        }
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

/// Spinner that prints finish lines instead of animating.
struct NoopSpinner {
    quiet: bool,
}

impl SpinnerHandle for NoopSpinner {
    fn finish_success(&mut self, msg: &str) {
        if !self.quiet {
            let theme = OutfitterTheme::new();
            println!("{}", theme.format_success(msg));
        }
    }

    fn finish_error(&mut self, msg: &str) {
        let theme = OutfitterTheme::new();
        eprintln!("{}", theme.format_error(msg));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_interactive_is_not_interactive() {
        let ui = NonInteractiveUI::new(OutputMode::Normal);
        assert!(!ui.is_interactive());
    }

    #[test]
    fn confirm_defaults_to_yes() {
        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Normal, HashMap::new());
        let prompt = Prompt::new("install_ninja", "Install ninja 1.12.1?");
        assert!(ui.confirm(&prompt).unwrap());
    }

    #[test]
    fn confirm_honors_decline_override() {
        let mut overrides = HashMap::new();
        overrides.insert(
            "OUTFITTER_PROMPT_INSTALL_NINJA".to_string(),
            "no".to_string(),
        );

        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Normal, overrides);
        let prompt = Prompt::new("install_ninja", "Install ninja 1.12.1?");
        assert!(!ui.confirm(&prompt).unwrap());
    }

    #[test]
    fn confirm_honors_accept_override() {
        let mut overrides = HashMap::new();
        overrides.insert(
            "OUTFITTER_PROMPT_INSTALL_CLANG".to_string(),
            "Y".to_string(),
        );

        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Normal, overrides);
        let prompt = Prompt::new("install_clang", "Install clang 19.1.4?");
        assert!(ui.confirm(&prompt).unwrap());
    }

    #[test]
    fn override_key_is_uppercased_prompt_key() {
        let mut overrides = HashMap::new();
        overrides.insert(
            "OUTFITTER_PROMPT_INSTALL_VULKAN".to_string(),
            "nah".to_string(),
        );

        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Normal, overrides);
        assert!(!ui
            .confirm(&Prompt::new("install_vulkan", "Install vulkan?"))
            .unwrap());
        assert!(ui
            .confirm(&Prompt::new("install_cmake", "Install cmake?"))
            .unwrap());
    }

    #[test]
    fn output_mode_preserved() {
        let ui = NonInteractiveUI::new(OutputMode::Quiet);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }

    #[test]
    fn noop_spinner_methods() {
        let mut spinner = NoopSpinner { quiet: false };
        spinner.finish_success("done");
        spinner.finish_error("failed");
    }
}
