//! Built-in catalog of provisionable tools.
//!
//! Every tool outfitter can set up is described by a [`ToolRequirement`]
//! data record: how to detect the installed version, the minimum accepted
//! version, where the artifact lives, and how to install it. The records
//! are plain data so one generic provisioner can drive all of them; adding
//! a tool means adding a record, not code.
//!
//! Requirements carry no state between runs. The catalog is rebuilt fresh
//! on every invocation and discarded afterwards.

mod builtin;

use std::path::PathBuf;

use crate::error::{OutfitterError, Result};
use crate::version::Version;

/// How to discover the currently installed version of a tool.
#[derive(Debug, Clone, Copy)]
pub enum Detect {
    /// Run a command and extract the version from the first line it prints.
    VersionCommand {
        program: &'static str,
        args: &'static [&'static str],
    },
    /// Read an environment variable naming an install directory whose final
    /// path segment carries the version (`VULKAN_SDK=C:\VulkanSDK\1.3.296.0`).
    EnvDirVersion { var: &'static str },
    /// Query the Visual Studio component locator for products carrying a
    /// required workload. IDE editions and Build Tools declare different
    /// workload ids for the same capability.
    Workload {
        ide_workload: &'static str,
        build_tools_workload: &'static str,
    },
}

/// Where a tool's install artifact is downloaded from and the file name it
/// is saved under in the system temporary directory.
#[derive(Debug, Clone, Copy)]
pub struct ArtifactSource {
    pub url: &'static str,
    pub file_name: &'static str,
}

/// A native installer invocation with a fixed silent argument set.
///
/// The artifact path is only known after download, so the record stores the
/// arguments around it: `resolve` splices the path in between.
#[derive(Debug, Clone, Copy)]
pub struct InstallerCommand {
    /// Program to run. `None` runs the downloaded artifact itself.
    pub program: Option<&'static str>,
    /// Arguments placed before the artifact path (msiexec's `/i`).
    pub pre_args: &'static [&'static str],
    /// Arguments appended after the artifact path.
    pub post_args: &'static [&'static str],
}

impl InstallerCommand {
    /// Produces the concrete `(program, args)` pair for a downloaded
    /// artifact.
    pub fn resolve(&self, artifact: &std::path::Path) -> (String, Vec<String>) {
        let artifact = artifact.display().to_string();
        match self.program {
            Some(program) => {
                let mut args: Vec<String> =
                    self.pre_args.iter().map(|a| a.to_string()).collect();
                args.push(artifact);
                args.extend(self.post_args.iter().map(|a| a.to_string()));
                (program.to_string(), args)
            }
            None => (
                artifact,
                self.post_args.iter().map(|a| a.to_string()).collect(),
            ),
        }
    }
}

/// The install procedure for a tool.
#[derive(Debug, Clone, Copy)]
pub enum InstallProcedure {
    /// Download a zip archive, extract it under `dest`, flatten a single
    /// top-level directory, grant read-and-execute to all users, and append
    /// the executable directory to the machine search path.
    Archive {
        /// Fixed destination root, e.g. `C:\Program Files\Ninja`.
        dest: &'static str,
        /// Subdirectory under `dest` holding the executables. `None` means
        /// `dest` itself goes on the search path.
        bin_dir: Option<&'static str>,
    },
    /// Download an installer package and run it unattended.
    Installer { command: InstallerCommand },
}

impl InstallProcedure {
    /// The directory that must end up on the machine search path, for
    /// archive installs.
    pub fn path_entry(&self) -> Option<PathBuf> {
        match self {
            InstallProcedure::Archive { dest, bin_dir } => {
                let mut entry = PathBuf::from(dest);
                if let Some(sub) = bin_dir {
                    entry.push(sub);
                }
                Some(entry)
            }
            InstallProcedure::Installer { .. } => None,
        }
    }
}

/// A single provisionable tool: detection, minimum version, artifact, and
/// install procedure, all fixed at definition time.
#[derive(Debug, Clone)]
pub struct ToolRequirement {
    /// Catalog name, as accepted on the command line ("clang", "vs2022").
    pub name: &'static str,
    /// One-line description for `outfitter list`.
    pub summary: &'static str,
    /// How the installed version is discovered.
    pub detect: Detect,
    /// Minimum accepted version. `None` for tools gated on workloads
    /// rather than versions.
    pub minimum_version: Option<Version>,
    /// The version the bundled artifact installs, for phrasing the prompt.
    pub install_version: &'static str,
    /// Where the artifact comes from.
    pub source: ArtifactSource,
    /// How the artifact is installed.
    pub install: InstallProcedure,
}

/// The ordered collection of built-in tool requirements.
pub struct ToolCatalog {
    tools: Vec<ToolRequirement>,
}

impl ToolCatalog {
    /// Creates the catalog with all built-in tools, in provisioning order.
    pub fn new() -> Self {
        ToolCatalog {
            tools: builtin::builtins(),
        }
    }

    /// Looks up a tool by catalog name.
    pub fn get(&self, name: &str) -> Option<&ToolRequirement> {
        self.tools.iter().find(|t| t.name == name)
    }

    /// All tools in provisioning order.
    pub fn tools(&self) -> &[ToolRequirement] {
        &self.tools
    }

    /// The catalog names, in provisioning order.
    pub fn known_names(&self) -> Vec<&'static str> {
        self.tools.iter().map(|t| t.name).collect()
    }

    /// Resolves requested names to tool records, or every tool in
    /// provisioning order when no names are given. An unknown name fails
    /// the whole selection before anything runs.
    pub fn select(&self, names: &[String]) -> Result<Vec<&ToolRequirement>> {
        if names.is_empty() {
            return Ok(self.tools.iter().collect());
        }
        names
            .iter()
            .map(|name| {
                self.get(name)
                    .ok_or_else(|| OutfitterError::UnknownTool { name: name.clone() })
            })
            .collect()
    }
}

impl Default for ToolCatalog {
    fn default() -> Self {
        Self::new()
    }
}
