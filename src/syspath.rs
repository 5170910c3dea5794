//! Machine-wide search path updates.
//!
//! The machine PATH lives in the registry under the session-manager
//! environment key. Updating it is a read-modify-write with no transaction:
//! read the current value with `reg query`, merge the new entry if absent,
//! write back with `setx /M`. `setx` broadcasts the settings-change
//! notification as part of the write, so newly opened shells see the entry.
//!
//! The merge itself is a pure function so the dedup rules are testable on
//! any platform.

use std::path::Path;
use std::process::Command;

use tracing::{debug, info};

use crate::error::{OutfitterError, Result};

const ENVIRONMENT_KEY: &str =
    "HKLM\\System\\CurrentControlSet\\Control\\Session Manager\\Environment";

/// Appends `entry` to the machine search path when it is not already
/// present. Presence is judged per entry, case-insensitively.
pub fn append_machine_path(entry: &Path) -> Result<()> {
    let entry = entry.display().to_string();
    let current = read_machine_path()?;
    match merge_path_entry(&current, &entry) {
        Some(merged) => write_machine_path(&merged),
        None => {
            debug!(%entry, "already on the machine PATH");
            Ok(())
        }
    }
}

/// Computes the merged PATH value, or `None` when `entry` is already one of
/// its entries. Entries compare case-insensitively with surrounding
/// whitespace and trailing separators ignored, so `C:\Ninja\` matches
/// `c:\ninja` but not `C:\NinjaTools`.
pub fn merge_path_entry(current: &str, entry: &str) -> Option<String> {
    let wanted = normalize_entry(entry);
    let present = current
        .split(';')
        .any(|existing| normalize_entry(existing) == wanted);
    if present {
        return None;
    }
    if current.trim().is_empty() {
        Some(entry.to_string())
    } else if current.ends_with(';') {
        Some(format!("{current}{entry}"))
    } else {
        Some(format!("{current};{entry}"))
    }
}

fn normalize_entry(entry: &str) -> String {
    entry.trim().trim_end_matches(['\\', '/']).to_lowercase()
}

fn read_machine_path() -> Result<String> {
    let output = Command::new("reg")
        .args(["query", ENVIRONMENT_KEY, "/v", "Path"])
        .output()
        .map_err(|e| OutfitterError::PathUpdateFailed {
            detail: format!("could not run reg query: {e}"),
        })?;
    if !output.status.success() {
        return Err(OutfitterError::PathUpdateFailed {
            detail: format!("reg query exited with code {:?}", output.status.code()),
        });
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    parse_reg_value(&stdout).ok_or_else(|| OutfitterError::PathUpdateFailed {
        detail: "reg query output did not contain a Path value".to_string(),
    })
}

fn write_machine_path(merged: &str) -> Result<()> {
    info!("writing the machine PATH");
    let output = Command::new("setx")
        .args(["/M", "PATH", merged])
        .output()
        .map_err(|e| OutfitterError::PathUpdateFailed {
            detail: format!("could not run setx: {e}"),
        })?;
    if !output.status.success() {
        return Err(OutfitterError::PathUpdateFailed {
            detail: format!("setx exited with code {:?}", output.status.code()),
        });
    }
    Ok(())
}

/// Pulls the value out of `reg query` output, which looks like
///
/// ```text
/// HKEY_LOCAL_MACHINE\System\...\Environment
///     Path    REG_EXPAND_SZ    C:\Windows;C:\Program Files\Tools
/// ```
///
/// The value may contain spaces, so everything after the type token counts.
fn parse_reg_value(output: &str) -> Option<String> {
    for line in output.lines() {
        let trimmed = line.trim_start();
        if !trimmed.starts_with("Path") {
            continue;
        }
        let type_start = match trimmed.find("REG_") {
            Some(pos) => pos,
            None => continue,
        };
        let rest = &trimmed[type_start..];
        return match rest.find(char::is_whitespace) {
            Some(ws) => Some(rest[ws..].trim().to_string()),
            None => Some(String::new()),
        };
    }
    None
}
