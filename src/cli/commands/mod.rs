//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. This allows:
//! - Single binary with subcommands (`outfitter provision`, `outfitter check`)
//! - Consistent global flag handling
//! - A default action (check) when no subcommand is given

pub mod check;
pub mod completions;
pub mod dispatcher;
pub mod list;
pub mod provision;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
