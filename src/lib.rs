//! Outfitter - C and C++ build toolchain provisioning.
//!
//! Outfitter replaces a drawer of per-tool setup scripts with one CLI that
//! checks a Windows build toolchain (clang, cmake, ninja, Visual Studio
//! 2022, the Vulkan SDK) against pinned requirements and installs whatever
//! is missing or outdated, with a yes/no prompt guarding every install.
//!
//! # Modules
//!
//! - [`archive`] - Zip extraction and layout normalization
//! - [`catalog`] - Tool records: versions, URLs, install strategies
//! - [`cli`] - Command-line interface and argument parsing
//! - [`discovery`] - Visual Studio locator search and workload queries
//! - [`error`] - Error types and result aliases
//! - [`fetch`] - Artifact downloads
//! - [`provision`] - Check, prompt, and install flows
//! - [`syspath`] - Machine search path updates
//! - [`ui`] - Interactive prompts, spinners, and terminal output
//! - [`version`] - Version parsing and comparison
//!
//! # Example
//!
//! ```
//! use outfitter::catalog::ToolCatalog;
//! use outfitter::version::Version;
//!
//! let catalog = ToolCatalog::new();
//! let cmake = catalog.get("cmake").unwrap();
//! assert_eq!(cmake.minimum_version, Some(Version::new(3, 22, 0)));
//! ```

pub mod archive;
pub mod catalog;
pub mod cli;
pub mod discovery;
pub mod error;
pub mod fetch;
pub mod provision;
pub mod syspath;
pub mod ui;
pub mod version;

pub use error::{OutfitterError, Result};
