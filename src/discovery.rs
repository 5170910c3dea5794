//! Visual Studio prerequisite discovery.
//!
//! vs2022 is not gated on a version number: what matters is whether any
//! edition carries the required C++ workload. Discovery first locates the
//! component locator (`vswhere.exe`) in a fixed list of conventional spots,
//! then queries it four ways to classify the install state.

use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{anyhow, Context};
use serde::Deserialize;
use tracing::debug;

use crate::error::{OutfitterError, Result};

const IDE_PRODUCTS: &str = "Microsoft.VisualStudio.Product.Enterprise,\
Microsoft.VisualStudio.Product.Professional,\
Microsoft.VisualStudio.Product.Community";
const BUILD_TOOLS_PRODUCT: &str = "Microsoft.VisualStudio.Product.BuildTools";

/// What discovery concluded about the Visual Studio install state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiscoveryOutcome {
    /// Some edition carries the required workload.
    Satisfied,
    /// An edition is installed but lacks the workload; the bootstrapper can
    /// add it to the named product.
    WorkloadMissing { product: String },
    /// No edition is installed at all.
    NotInstalled,
}

/// The four answers the locator queries produce.
#[derive(Debug, Clone, Copy, Default)]
pub struct WorkloadPresence {
    pub ide_with_workload: bool,
    pub build_tools_with_workload: bool,
    pub ide_any: bool,
    pub build_tools_any: bool,
}

impl WorkloadPresence {
    /// Collapses the four booleans into a remediation branch. A workload on
    /// either product satisfies; a product without it gets the
    /// add-a-workload prompt; nothing installed gets the full install.
    pub fn classify(&self) -> DiscoveryOutcome {
        if self.ide_with_workload || self.build_tools_with_workload {
            return DiscoveryOutcome::Satisfied;
        }
        if self.ide_any {
            return DiscoveryOutcome::WorkloadMissing {
                product: "Visual Studio 2022".to_string(),
            };
        }
        if self.build_tools_any {
            return DiscoveryOutcome::WorkloadMissing {
                product: "Visual Studio 2022 Build Tools".to_string(),
            };
        }
        DiscoveryOutcome::NotInstalled
    }
}

/// One installation record from vswhere's JSON output. Only the fields used
/// for logging are modeled; presence is judged by array length.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VsInstallation {
    #[serde(default)]
    display_name: String,
    #[serde(default)]
    installation_version: String,
}

/// Finds `vswhere.exe`, trying each conventional location in order. The
/// list is fixed; exhausting it is fatal, with no registry fallback.
pub fn locate_vswhere() -> Result<PathBuf> {
    locate_in(&vswhere_candidates()).ok_or_else(|| OutfitterError::LocatorNotFound {
        name: "vswhere.exe".to_string(),
    })
}

/// The ordered candidate list: the Visual Studio installer directory, then
/// chocolatey, then nuget, then scoop.
pub fn vswhere_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Ok(pf86) = std::env::var("ProgramFiles(x86)") {
        candidates.push(
            PathBuf::from(pf86)
                .join("Microsoft Visual Studio")
                .join("Installer")
                .join("vswhere.exe"),
        );
    }
    candidates.push(PathBuf::from(
        "C:\\ProgramData\\chocolatey\\lib\\vswhere\\tools\\vswhere.exe",
    ));
    if let Ok(profile) = std::env::var("USERPROFILE") {
        let profile = PathBuf::from(profile);
        candidates.push(
            profile
                .join(".nuget")
                .join("packages")
                .join("vswhere.exe"),
        );
        candidates.push(
            profile
                .join("scoop")
                .join("apps")
                .join("vswhere")
                .join("current")
                .join("vswhere.exe"),
        );
    }
    candidates
}

fn locate_in(candidates: &[PathBuf]) -> Option<PathBuf> {
    candidates.iter().find(|p| p.is_file()).cloned()
}

/// Runs the four locator queries for the given workload pair.
///
/// IDE editions and Build Tools are separate products and have to be asked
/// for separately; every query is pinned to the 2022 product line.
pub fn query_presence(
    vswhere: &Path,
    ide_workload: &str,
    build_tools_workload: &str,
) -> Result<WorkloadPresence> {
    Ok(WorkloadPresence {
        ide_with_workload: query_has_installation(
            vswhere,
            &["-products", IDE_PRODUCTS, "-requires", ide_workload],
        )?,
        build_tools_with_workload: query_has_installation(
            vswhere,
            &[
                "-products",
                BUILD_TOOLS_PRODUCT,
                "-requires",
                build_tools_workload,
            ],
        )?,
        ide_any: query_has_installation(vswhere, &["-products", IDE_PRODUCTS])?,
        build_tools_any: query_has_installation(vswhere, &["-products", BUILD_TOOLS_PRODUCT])?,
    })
}

fn query_has_installation(vswhere: &Path, filter: &[&str]) -> Result<bool> {
    let output = Command::new(vswhere)
        .args(["-version", "17"])
        .args(filter)
        .args(["-format", "json"])
        .output()?;
    if !output.status.success() {
        return Err(anyhow!("vswhere exited with code {:?}", output.status.code()).into());
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    let installations = parse_installations(&stdout)?;
    for installation in &installations {
        debug!(
            name = %installation.display_name,
            version = %installation.installation_version,
            "locator reported installation"
        );
    }
    Ok(!installations.is_empty())
}

fn parse_installations(json: &str) -> Result<Vec<VsInstallation>> {
    let trimmed = json.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }
    let installations =
        serde_json::from_str(trimmed).context("parsing vswhere JSON output")?;
    Ok(installations)
}
