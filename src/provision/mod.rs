//! Checking and installing the required build tools.

pub mod gate;
pub mod installer;
pub mod provisioner;
pub mod status;

pub use installer::{default_context, InstallContext};
pub use provisioner::{provision_tool, remediate, Provisioned};
pub use status::ToolStatus;
