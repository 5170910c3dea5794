//! The check-prompt-remediate flow for a single tool.

use tracing::{debug, info};

use crate::catalog::{Detect, ToolRequirement};
use crate::error::{OutfitterError, Result};
use crate::ui::{Prompt, UserInterface};
use crate::version::Version;

use super::gate;
use super::installer::{install_tool, InstallContext};
use super::status::ToolStatus;

/// What provisioning one tool amounted to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Provisioned {
    /// Nothing needed doing.
    AlreadySatisfied { version: Option<Version> },
    /// An install ran. `verified` says whether a follow-up check could see
    /// the tool; machine PATH edits do not reach the current process, so
    /// false usually just means a fresh shell is needed.
    Installed { verified: bool },
}

/// Checks one tool and, with the user's consent, brings it up to its
/// requirement.
pub fn provision_tool(
    req: &ToolRequirement,
    ui: &mut dyn UserInterface,
    ctx: &InstallContext<'_>,
    assume_yes: bool,
) -> Result<Provisioned> {
    ui.message(&format!("Checking {}", req.name));
    let status = gate::evaluate(req)?;
    remediate(req, &status, ui, ctx, assume_yes)
}

/// Applies the remedy for an already-evaluated status.
pub fn remediate(
    req: &ToolRequirement,
    status: &ToolStatus,
    ui: &mut dyn UserInterface,
    ctx: &InstallContext<'_>,
    assume_yes: bool,
) -> Result<Provisioned> {
    match status {
        ToolStatus::Satisfied { version } => {
            report_satisfied(req, *version, ui);
            Ok(Provisioned::AlreadySatisfied { version: *version })
        }
        ToolStatus::Unparseable { output } => Err(OutfitterError::VersionUnparseable {
            tool: req.name.to_string(),
            output: output.clone(),
        }),
        ToolStatus::Missing => {
            let question = match req.detect {
                Detect::Workload { .. } => format!("Install {}?", req.summary),
                _ => format!("Install {} {}?", req.name, req.install_version),
            };
            confirm_and_install(req, &question, ui, ctx, assume_yes)
        }
        ToolStatus::Outdated { installed } => {
            if let Some(minimum) = req.minimum_version {
                ui.warning(&format!(
                    "{} {} is installed but {} or newer is required",
                    req.name, installed, minimum
                ));
            }
            let question = format!("Install {} {}?", req.name, req.install_version);
            confirm_and_install(req, &question, ui, ctx, assume_yes)
        }
        ToolStatus::MissingWorkload { product } => {
            let question = format!("Add the C++ workload to the existing {product} installation?");
            confirm_and_install(req, &question, ui, ctx, assume_yes)
        }
    }
}

fn report_satisfied(req: &ToolRequirement, version: Option<Version>, ui: &mut dyn UserInterface) {
    match version {
        Some(v) => ui.success(&format!("{} {} is installed", req.name, v)),
        None => ui.success(&format!("{} is installed", req.summary)),
    }
}

fn confirm_and_install(
    req: &ToolRequirement,
    question: &str,
    ui: &mut dyn UserInterface,
    ctx: &InstallContext<'_>,
    assume_yes: bool,
) -> Result<Provisioned> {
    if !assume_yes {
        let prompt = Prompt::new(format!("install_{}", req.name), question);
        if !ui.confirm(&prompt)? {
            ui.warning(&format!("Skipping {}", req.name));
            return Err(OutfitterError::InstallDeclined {
                tool: req.name.to_string(),
            });
        }
    }

    install_tool(req, ui, ctx)?;
    info!(tool = req.name, "install completed");
    Ok(verify_after_install(req, ui))
}

/// Re-runs the gate after an install. A clean read upgrades the outcome to
/// verified; anything else leaves a reminder that the current shell does
/// not see fresh PATH or environment edits.
fn verify_after_install(req: &ToolRequirement, ui: &mut dyn UserInterface) -> Provisioned {
    match gate::evaluate(req) {
        Ok(ToolStatus::Satisfied { version }) => {
            report_satisfied(req, version, ui);
            Provisioned::Installed { verified: true }
        }
        Ok(_) => {
            remind_fresh_shell(req, ui);
            Provisioned::Installed { verified: false }
        }
        Err(err) => {
            debug!(tool = req.name, %err, "post-install verification failed");
            remind_fresh_shell(req, ui);
            Provisioned::Installed { verified: false }
        }
    }
}

fn remind_fresh_shell(req: &ToolRequirement, ui: &mut dyn UserInterface) {
    ui.warning(&format!(
        "{} installed, but is not visible to this shell yet; open a fresh shell and run `outfitter check`",
        req.name
    ));
}
