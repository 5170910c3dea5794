//! Download-and-install execution for both install strategies.
//!
//! Archives are streamed to a temp file, extracted under their destination,
//! normalized, granted read+execute for all users, and put on the machine
//! search path. Native installers are downloaded whole and run with their
//! fixed unattended arguments. Every machine mutation goes through
//! [`InstallContext`] so tests can stub and observe it.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, warn};

use crate::archive::{extract_zip, flatten_single_dir};
use crate::catalog::{InstallProcedure, InstallerCommand, ToolRequirement};
use crate::error::{OutfitterError, Result};
use crate::fetch::ArtifactFetcher;
use crate::syspath;
use crate::ui::UserInterface;

/// The side-effect surface of an install.
pub struct InstallContext<'a> {
    /// Where downloaded artifacts land before use.
    pub temp_dir: PathBuf,
    /// Streams `url` to the given path.
    pub download: &'a dyn Fn(&str, &Path) -> Result<()>,
    /// Downloads `url` fully into memory before writing it out.
    pub download_buffered: &'a dyn Fn(&str, &Path) -> Result<()>,
    /// Runs an installer to completion and reports its exit code.
    pub run_installer: &'a dyn Fn(&str, &[String]) -> Result<Option<i32>>,
    /// Grants read and execute over a directory tree to all users.
    pub grant_access: &'a dyn Fn(&Path) -> Result<()>,
    /// Appends a directory to the machine search path.
    pub append_search_path: &'a dyn Fn(&Path) -> Result<()>,
}

/// The production wiring: real downloads, real process spawns, real ACL
/// and search-path edits.
pub fn default_context() -> InstallContext<'static> {
    InstallContext {
        temp_dir: std::env::temp_dir(),
        download: &|url, dest| ArtifactFetcher::new().download_to(url, dest),
        download_buffered: &|url, dest| ArtifactFetcher::new().download_buffered(url, dest),
        run_installer: &|program, args| {
            let status = Command::new(program).args(args).status()?;
            Ok(status.code())
        },
        grant_access: &|dir| grant_access_everyone(dir),
        append_search_path: &|dir| syspath::append_machine_path(dir),
    }
}

/// Installs `req` using its declared strategy.
///
/// The downloaded artifact is removed afterwards whether the install
/// succeeded or not, and a cleanup failure never displaces the install
/// result.
pub fn install_tool(
    req: &ToolRequirement,
    ui: &mut dyn UserInterface,
    ctx: &InstallContext<'_>,
) -> Result<()> {
    let artifact = ctx.temp_dir.join(req.source.file_name);
    let result = match req.install {
        InstallProcedure::Archive { dest, .. } => {
            install_archive(req, &artifact, Path::new(dest), ui, ctx)
        }
        InstallProcedure::Installer { command } => {
            install_native(req, &artifact, command, ui, ctx)
        }
    };
    cleanup_artifact(&artifact, ui);
    result
}

fn install_archive(
    req: &ToolRequirement,
    artifact: &Path,
    dest: &Path,
    ui: &mut dyn UserInterface,
    ctx: &InstallContext<'_>,
) -> Result<()> {
    let mut spinner = ui.start_spinner(&format!("Downloading {}", req.source.file_name));
    match (ctx.download)(req.source.url, artifact) {
        Ok(()) => spinner.finish_success(&format!("Downloaded {}", req.source.file_name)),
        Err(err) => {
            spinner.finish_error(&format!("Download of {} failed", req.source.file_name));
            return Err(err);
        }
    }

    let mut spinner = ui.start_spinner(&format!("Extracting to {}", dest.display()));
    match extract_and_normalize(artifact, dest) {
        Ok(()) => spinner.finish_success(&format!("Extracted to {}", dest.display())),
        Err(err) => {
            spinner.finish_error(&format!("Extraction into {} failed", dest.display()));
            return Err(err);
        }
    }

    let exec_dir = req
        .install
        .path_entry()
        .unwrap_or_else(|| dest.to_path_buf());
    (ctx.grant_access)(&exec_dir)?;
    ui.detail(&format!("Granted read and execute on {}", exec_dir.display()));
    (ctx.append_search_path)(&exec_dir)?;
    ui.detail(&format!("Put {} on the machine PATH", exec_dir.display()));
    Ok(())
}

fn extract_and_normalize(artifact: &Path, dest: &Path) -> Result<()> {
    extract_zip(artifact, dest)?;
    if flatten_single_dir(dest)? {
        debug!(dest = %dest.display(), "flattened archive wrapper directory");
    }
    Ok(())
}

fn install_native(
    req: &ToolRequirement,
    artifact: &Path,
    command: InstallerCommand,
    ui: &mut dyn UserInterface,
    ctx: &InstallContext<'_>,
) -> Result<()> {
    let mut spinner = ui.start_spinner(&format!("Downloading {}", req.source.file_name));
    match (ctx.download_buffered)(req.source.url, artifact) {
        Ok(()) => spinner.finish_success(&format!("Downloaded {}", req.source.file_name)),
        Err(err) => {
            spinner.finish_error(&format!("Download of {} failed", req.source.file_name));
            return Err(err);
        }
    }

    let (program, args) = command.resolve(artifact);
    ui.message(&format!(
        "Running the {} installer, this can take a while",
        req.name
    ));
    ui.detail(&format!("{} {}", program, args.join(" ")));
    let code = (ctx.run_installer)(&program, &args)?;
    if code != Some(0) {
        return Err(OutfitterError::InstallCommandFailed {
            installer: program,
            code,
        });
    }
    Ok(())
}

/// Removes the downloaded artifact if it is still there. Failures are
/// reported and swallowed.
fn cleanup_artifact(artifact: &Path, ui: &mut dyn UserInterface) {
    if !artifact.exists() {
        return;
    }
    if let Err(err) = fs::remove_file(artifact) {
        warn!(path = %artifact.display(), %err, "could not remove downloaded artifact");
        ui.warning(&format!("Could not remove {}: {}", artifact.display(), err));
    }
}

/// Grants read and execute to all users over `dir`, recursively, through
/// `icacls`. Without this, archives unpacked by an elevated shell can be
/// unreadable to regular users.
pub fn grant_access_everyone(dir: &Path) -> Result<()> {
    let output = Command::new("icacls")
        .arg(dir)
        .args(["/grant", "Everyone:(RX)", "/T", "/C", "/Q"])
        .output()
        .map_err(|err| OutfitterError::PermissionGrantFailed {
            path: dir.display().to_string(),
            detail: err.to_string(),
        })?;
    if !output.status.success() {
        return Err(OutfitterError::PermissionGrantFailed {
            path: dir.display().to_string(),
            detail: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }
    Ok(())
}
