//! List command implementation.
//!
//! The `outfitter list` command shows the managed tools with their minimum
//! and pinned install versions.

use anyhow::Context;
use serde_json::json;

use crate::catalog::{InstallProcedure, ToolCatalog};
use crate::cli::args::ListArgs;
use crate::error::Result;
use crate::ui::{OutfitterTheme, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(args: ListArgs) -> Self {
        Self { args }
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let catalog = ToolCatalog::new();

        if self.args.json {
            let tools: Vec<_> = catalog.tools().iter().map(tool_record).collect();
            let rendered =
                serde_json::to_string_pretty(&tools).context("serializing tool list")?;
            // Machine output bypasses the UI so it survives --quiet.
            println!("{rendered}");
            return Ok(CommandResult::success());
        }

        let theme = OutfitterTheme::new();
        for tool in catalog.tools() {
            let requirement = match tool.minimum_version {
                Some(minimum) => format!("{minimum} or newer"),
                None => "any edition with the C++ workload".to_string(),
            };
            ui.message(&format!(
                "  {} {}",
                theme.highlight.apply_to(tool.name),
                theme.dim.apply_to(format!("({})", tool.summary))
            ));
            ui.message(&format!(
                "      requires {}, installs {}",
                requirement, tool.install_version
            ));
            ui.detail(&format!("from {}", tool.source.url));
        }

        Ok(CommandResult::success())
    }
}

fn tool_record(tool: &crate::catalog::ToolRequirement) -> serde_json::Value {
    let strategy = match tool.install {
        InstallProcedure::Archive { .. } => "archive",
        InstallProcedure::Installer { .. } => "installer",
    };
    json!({
        "name": tool.name,
        "summary": tool.summary,
        "minimum_version": tool.minimum_version.map(|v| v.to_string()),
        "install_version": tool.install_version,
        "strategy": strategy,
        "url": tool.source.url,
    })
}
