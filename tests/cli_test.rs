//! Integration tests for the CLI surface.
//!
//! Network and machine mutation never happen here: the vulkan tool is
//! driven entirely through the VULKAN_SDK variable, and install prompts are
//! declined through the non-interactive override before anything downloads.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;

fn outfitter() -> Command {
    let mut cmd = Command::new(cargo_bin("outfitter"));
    cmd.env_remove("VULKAN_SDK");
    cmd.env_remove("OUTFITTER_PROMPT_INSTALL_VULKAN");
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = outfitter();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("build toolchain"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = outfitter();
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_no_args_runs_check() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = outfitter();
    cmd.assert()
        .stdout(predicate::str::contains("Checking build tools"));
    Ok(())
}

#[test]
fn cli_check_satisfied_tool_reports_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = outfitter();
    cmd.env("VULKAN_SDK", "C:\\VulkanSDK\\1.3.296.0");
    cmd.args(["check", "vulkan"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("vulkan 1.3.296 is installed"));
    Ok(())
}

#[test]
fn cli_check_missing_tool_exits_nonzero() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = outfitter();
    cmd.args(["check", "vulkan"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("vulkan is not installed"))
        .stdout(predicate::str::contains("need attention"));
    Ok(())
}

#[test]
fn cli_check_outdated_tool_names_minimum() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = outfitter();
    cmd.env("VULKAN_SDK", "C:\\VulkanSDK\\1.2.198.1");
    cmd.args(["check", "vulkan"]);
    cmd.assert().failure().stderr(predicate::str::contains(
        "vulkan 1.2.198 is installed but 1.3.204 or newer is required",
    ));
    Ok(())
}

#[test]
fn cli_check_unreadable_version_is_reported() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = outfitter();
    cmd.env("VULKAN_SDK", "C:\\VulkanSDK\\current");
    cmd.args(["check", "vulkan"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Could not parse a version"));
    Ok(())
}

#[test]
fn cli_check_unknown_tool_fails() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = outfitter();
    cmd.args(["check", "gadget"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown tool 'gadget'"));
    Ok(())
}

// vswhere.exe cannot exist on unix, so locator exhaustion is guaranteed.
#[cfg(unix)]
#[test]
fn cli_check_without_locator_is_fatal() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = outfitter();
    cmd.args(["check", "vs2022"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("vswhere.exe"));
    Ok(())
}

#[test]
fn cli_quiet_check_prints_no_status() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = outfitter();
    cmd.env("VULKAN_SDK", "C:\\VulkanSDK\\1.3.296.0");
    cmd.args(["--quiet", "check", "vulkan"]);
    cmd.assert().success().stdout(predicate::str::is_empty());
    Ok(())
}

#[test]
fn cli_provision_satisfied_tool_installs_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = outfitter();
    cmd.env("VULKAN_SDK", "C:\\VulkanSDK\\1.3.296.0");
    cmd.args(["provision", "vulkan"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("vulkan 1.3.296 is installed"))
        .stdout(predicate::str::contains("All build tools are ready"));
    Ok(())
}

#[test]
fn cli_provision_decline_aborts_without_changes() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = outfitter();
    cmd.env("OUTFITTER_PROMPT_INSTALL_VULKAN", "n");
    cmd.args(["--non-interactive", "provision", "vulkan"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Skipping vulkan"));
    Ok(())
}

#[test]
fn cli_provision_unknown_tool_fails() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = outfitter();
    cmd.args(["provision", "gadget"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown tool"));
    Ok(())
}

#[test]
fn cli_list_names_every_tool() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = outfitter();
    cmd.arg("list");
    let assert = cmd.assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone())?;
    for name in ["clang", "cmake", "ninja", "vs2022", "vulkan"] {
        assert!(stdout.contains(name), "list output missing {name}");
    }
    Ok(())
}

#[test]
fn cli_list_json_is_parseable() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = outfitter();
    cmd.args(["list", "--json"]);
    let assert = cmd.assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone())?;
    let tools: serde_json::Value = serde_json::from_str(&stdout)?;
    let tools = tools.as_array().expect("expected a JSON array");
    assert_eq!(tools.len(), 5);
    assert!(tools.iter().any(|t| t["name"] == "ninja"));
    assert!(tools
        .iter()
        .any(|t| t["name"] == "cmake" && t["strategy"] == "installer"));
    Ok(())
}

#[test]
fn cli_completions_generate() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = outfitter();
    cmd.args(["completions", "bash"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("outfitter"));
    Ok(())
}

#[test]
fn cli_debug_flag_accepted() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = outfitter();
    cmd.args(["--debug", "list"]);
    cmd.assert().success();
    Ok(())
}

#[test]
fn cli_invalid_command_fails() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = outfitter();
    cmd.arg("invalid-command");
    cmd.assert().failure();
    Ok(())
}
