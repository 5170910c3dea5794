//! Provision command implementation.
//!
//! The `outfitter provision` command brings every requested tool up to its
//! requirement, asking before each install. Declining a prompt stops the
//! run with a non-zero exit and nothing changed.

use crate::catalog::ToolCatalog;
use crate::cli::args::ProvisionArgs;
use crate::error::{OutfitterError, Result};
use crate::provision::{default_context, provision_tool, Provisioned};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The provision command implementation.
pub struct ProvisionCommand {
    args: ProvisionArgs,
}

impl ProvisionCommand {
    /// Create a new provision command.
    pub fn new(args: ProvisionArgs) -> Self {
        Self { args }
    }
}

impl Command for ProvisionCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let catalog = ToolCatalog::new();
        let tools = catalog.select(&self.args.tools)?;

        ui.show_header("Provisioning build tools");

        let ctx = default_context();
        let mut unverified = 0;
        for tool in tools {
            match provision_tool(tool, ui, &ctx, self.args.yes) {
                Ok(Provisioned::Installed { verified: false }) => unverified += 1,
                Ok(_) => {}
                Err(OutfitterError::InstallDeclined { .. }) => {
                    return Ok(CommandResult::failure(1));
                }
                Err(e) => return Err(e),
            }
        }

        if unverified == 0 {
            ui.success("All build tools are ready");
        } else {
            ui.message("Provisioning finished; open a fresh shell to pick up PATH changes");
        }
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;

    #[test]
    fn unknown_tool_fails_before_any_download() {
        let cmd = ProvisionCommand::new(ProvisionArgs {
            tools: vec!["gadget".to_string()],
            yes: false,
        });
        let mut ui = MockUI::new();

        let err = cmd.execute(&mut ui).unwrap_err();
        match err {
            OutfitterError::UnknownTool { name } => assert_eq!(name, "gadget"),
            other => panic!("expected UnknownTool, got {other:?}"),
        }
        assert!(ui.prompts_shown().is_empty());
    }
}
