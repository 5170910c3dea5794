//! Check command implementation.
//!
//! The `outfitter check` command reports where every tool stands without
//! touching the machine. It exits non-zero when anything needs attention
//! so scripts can gate on it.

use crate::catalog::{ToolCatalog, ToolRequirement};
use crate::cli::args::CheckArgs;
use crate::error::Result;
use crate::provision::{gate, ToolStatus};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(args: CheckArgs) -> Self {
        Self { args }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let catalog = ToolCatalog::new();
        let tools = catalog.select(&self.args.tools)?;

        ui.show_header("Checking build tools");

        let mut unmet = 0;
        for tool in tools {
            let status = gate::evaluate(tool)?;
            report_status(tool, &status, ui);
            if !status.is_satisfied() {
                unmet += 1;
            }
        }

        if unmet == 0 {
            Ok(CommandResult::success())
        } else {
            ui.message(&format!(
                "{unmet} tool(s) need attention; run `outfitter provision` to fix them"
            ));
            Ok(CommandResult::failure(1))
        }
    }
}

fn report_status(tool: &ToolRequirement, status: &ToolStatus, ui: &mut dyn UserInterface) {
    match status {
        ToolStatus::Satisfied { version } => match version {
            Some(v) => ui.success(&format!("{} {} is installed", tool.name, v)),
            None => ui.success(&format!("{} is installed", tool.summary)),
        },
        ToolStatus::Missing => ui.warning(&format!("{} is not installed", tool.name)),
        ToolStatus::Outdated { installed } => match tool.minimum_version {
            Some(minimum) => ui.warning(&format!(
                "{} {} is installed but {} or newer is required",
                tool.name, installed, minimum
            )),
            None => ui.warning(&format!("{} {} is outdated", tool.name, installed)),
        },
        ToolStatus::MissingWorkload { product } => ui.warning(&format!(
            "{product} is installed without the C++ workload"
        )),
        ToolStatus::Unparseable { output } => ui.error(&format!(
            "Could not parse a version for '{}' from: {}",
            tool.name, output
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OutfitterError;
    use crate::ui::MockUI;

    #[test]
    fn unknown_tool_fails_before_any_probe() {
        let cmd = CheckCommand::new(CheckArgs {
            tools: vec!["gadget".to_string()],
        });
        let mut ui = MockUI::new();

        let err = cmd.execute(&mut ui).unwrap_err();
        match err {
            OutfitterError::UnknownTool { name } => assert_eq!(name, "gadget"),
            other => panic!("expected UnknownTool, got {other:?}"),
        }
    }

    #[test]
    fn satisfied_status_reports_version() {
        let catalog = ToolCatalog::new();
        let ninja = catalog.get("ninja").unwrap();
        let mut ui = MockUI::new();

        report_status(
            ninja,
            &ToolStatus::Satisfied {
                version: Some(crate::version::Version::new(1, 12, 1)),
            },
            &mut ui,
        );
        assert!(ui.has_success("ninja 1.12.1 is installed"));
    }

    #[test]
    fn outdated_status_names_the_minimum() {
        let catalog = ToolCatalog::new();
        let cmake = catalog.get("cmake").unwrap();
        let mut ui = MockUI::new();

        report_status(
            cmake,
            &ToolStatus::Outdated {
                installed: crate::version::Version::new(3, 10, 2),
            },
            &mut ui,
        );
        assert!(ui.has_warning("cmake 3.10.2 is installed but 3.22.0 or newer is required"));
    }

    #[test]
    fn workload_gap_names_the_product() {
        let catalog = ToolCatalog::new();
        let vs = catalog.get("vs2022").unwrap();
        let mut ui = MockUI::new();

        report_status(
            vs,
            &ToolStatus::MissingWorkload {
                product: "Visual Studio 2022 Build Tools".to_string(),
            },
            &mut ui,
        );
        assert!(
            ui.has_warning("Visual Studio 2022 Build Tools is installed without the C++ workload")
        );
    }
}
