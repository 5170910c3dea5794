//! Read-only evaluation of a tool's installed state.
//!
//! Each detection style maps to one probe: run a version command and read
//! its banner, read a version out of an environment variable's directory
//! name, or ask the Visual Studio locator about workloads. Nothing in here
//! mutates the machine.

use std::process::Command;

use tracing::debug;

use crate::catalog::{Detect, ToolRequirement};
use crate::discovery::{self, DiscoveryOutcome};
use crate::error::Result;
use crate::version::Version;

use super::status::ToolStatus;

/// Determines where `req` stands on this machine.
///
/// Probe failures that mean "the tool is not there" (command not found,
/// non-zero exit, unset variable) come back as `Missing`; only
/// infrastructure failures such as an unlocatable vswhere are errors.
pub fn evaluate(req: &ToolRequirement) -> Result<ToolStatus> {
    match req.detect {
        Detect::VersionCommand { program, args } => Ok(probe_version_command(req, program, args)),
        Detect::EnvDirVersion { var } => Ok(probe_env_version(req, var)),
        Detect::Workload {
            ide_workload,
            build_tools_workload,
        } => probe_workloads(ide_workload, build_tools_workload),
    }
}

fn probe_version_command(req: &ToolRequirement, program: &str, args: &[&str]) -> ToolStatus {
    let output = match Command::new(program).args(args).output() {
        Ok(output) => output,
        Err(err) => {
            debug!(tool = req.name, %err, "version command did not start");
            return ToolStatus::Missing;
        }
    };
    if !output.status.success() {
        debug!(
            tool = req.name,
            code = ?output.status.code(),
            "version command exited non-zero"
        );
        return ToolStatus::Missing;
    }
    judge_version_output(req, &String::from_utf8_lossy(&output.stdout))
}

fn judge_version_output(req: &ToolRequirement, stdout: &str) -> ToolStatus {
    match Version::parse(stdout) {
        Some(installed) => judge_installed(req, installed),
        None => ToolStatus::Unparseable {
            output: stdout.lines().next().unwrap_or_default().trim().to_string(),
        },
    }
}

fn probe_env_version(req: &ToolRequirement, var: &str) -> ToolStatus {
    match std::env::var(var) {
        Ok(value) if !value.trim().is_empty() => judge_env_value(req, &value),
        _ => ToolStatus::Missing,
    }
}

/// The SDK installer points the variable at a directory named after the
/// version (`C:\VulkanSDK\1.3.296.0`), so the last path segment is the
/// installed version.
fn judge_env_value(req: &ToolRequirement, value: &str) -> ToolStatus {
    let trimmed = value.trim().trim_end_matches(['\\', '/']);
    let leaf = trimmed.rsplit(['\\', '/']).next().unwrap_or_default();
    match Version::parse(leaf) {
        Some(installed) => judge_installed(req, installed),
        None => ToolStatus::Unparseable {
            output: leaf.to_string(),
        },
    }
}

fn judge_installed(req: &ToolRequirement, installed: Version) -> ToolStatus {
    match req.minimum_version {
        Some(minimum) if installed < minimum => ToolStatus::Outdated { installed },
        _ => ToolStatus::Satisfied {
            version: Some(installed),
        },
    }
}

fn probe_workloads(ide_workload: &str, build_tools_workload: &str) -> Result<ToolStatus> {
    let vswhere = discovery::locate_vswhere()?;
    let presence = discovery::query_presence(&vswhere, ide_workload, build_tools_workload)?;
    Ok(match presence.classify() {
        DiscoveryOutcome::Satisfied => ToolStatus::Satisfied { version: None },
        DiscoveryOutcome::WorkloadMissing { product } => ToolStatus::MissingWorkload { product },
        DiscoveryOutcome::NotInstalled => ToolStatus::Missing,
    })
}
