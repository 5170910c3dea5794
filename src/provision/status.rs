//! The verdicts a tool check can reach.

use crate::version::Version;

/// Where a tool stands relative to its requirement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolStatus {
    /// Installed and meeting the minimum. Version-gated tools carry the
    /// detected number; workload-gated tools have none to report.
    Satisfied { version: Option<Version> },
    /// Not installed at all.
    Missing,
    /// Installed, but older than the required minimum.
    Outdated { installed: Version },
    /// A Visual Studio product is installed but lacks the C++ workload.
    /// The bootstrapper can add the workload without a full reinstall.
    MissingWorkload { product: String },
    /// The tool responded to its probe with output no version could be read
    /// from. Never auto-remedied: installing over a toolchain in an unknown
    /// state is worse than stopping.
    Unparseable { output: String },
}

impl ToolStatus {
    pub fn is_satisfied(&self) -> bool {
        matches!(self, ToolStatus::Satisfied { .. })
    }

    /// Whether running the tool's installer is an appropriate remedy.
    pub fn is_installable(&self) -> bool {
        matches!(
            self,
            ToolStatus::Missing | ToolStatus::Outdated { .. } | ToolStatus::MissingWorkload { .. }
        )
    }
}
