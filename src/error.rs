//! Error types for outfitter.
//!
//! Every fatal condition gets its own variant so callers can report exactly
//! what went wrong (and tests can assert on it) without string matching.

use thiserror::Error;

/// All errors that can occur in outfitter.
#[derive(Error, Debug)]
pub enum OutfitterError {
    /// A tool's version output did not contain anything resembling a version.
    /// This is never auto-remedied: reinstalling over an unreadable install
    /// could clobber a working toolchain.
    #[error("Could not parse a version for '{tool}' from: {output}")]
    VersionUnparseable { tool: String, output: String },

    /// The user declined an install prompt. Nothing was changed.
    #[error("Installation of '{tool}' declined")]
    InstallDeclined { tool: String },

    /// A download did not complete, either at the HTTP layer (non-success
    /// status) or mid-stream.
    #[error("Download failed ({status}): {url}")]
    DownloadFailed { url: String, status: String },

    /// An installer process ran and exited non-zero.
    #[error("Installer '{installer}' failed with exit code {code:?}")]
    InstallCommandFailed {
        installer: String,
        code: Option<i32>,
    },

    /// Broadening filesystem permissions on the install directory failed.
    /// The tool is on disk but may be unusable for non-privileged users.
    #[error("Could not grant access to {path}: {detail}")]
    PermissionGrantFailed { path: String, detail: String },

    /// The machine search path could not be read or written. The tool is on
    /// disk but will not be found by a fresh shell.
    #[error("Could not update the system PATH: {detail}")]
    PathUpdateFailed { detail: String },

    /// A locator executable (vswhere) was not found in any known location.
    #[error("'{name}' was not found in any known location")]
    LocatorNotFound { name: String },

    /// The CLI was asked to provision a tool the catalog does not know.
    #[error("Unknown tool '{name}'. Run `outfitter list` to see available tools.")]
    UnknownTool { name: String },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP transport errors (connection refused, TLS, timeouts).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Zip archive errors (corrupt central directory, bad entries).
    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// Generic errors from anyhow
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, OutfitterError>;
