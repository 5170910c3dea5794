//! The built-in tool records.
//!
//! Versions, URLs, and installer argument sets are pinned here and nowhere
//! else. Bumping a tool means editing its record.

use super::{ArtifactSource, Detect, InstallProcedure, InstallerCommand, ToolRequirement};
use crate::version::Version;

pub(crate) fn builtins() -> Vec<ToolRequirement> {
    vec![
        // clang via the llvm-mingw toolchain. The archive wraps everything
        // in a single versioned directory that gets flattened away.
        ToolRequirement {
            name: "clang",
            summary: "C/C++ compiler (LLVM-MinGW toolchain)",
            detect: Detect::VersionCommand {
                program: "clang",
                args: &["--version"],
            },
            minimum_version: Some(Version::new(11, 0, 0)),
            install_version: "19.1.4",
            source: ArtifactSource {
                url: "https://github.com/mstorsjo/llvm-mingw/releases/download/20241119/llvm-mingw-20241119-ucrt-x86_64.zip",
                file_name: "llvm-mingw.zip",
            },
            install: InstallProcedure::Archive {
                dest: "C:\\Program Files\\MinGW-LLVM",
                bin_dir: Some("bin"),
            },
        },
        ToolRequirement {
            name: "cmake",
            summary: "Cross-platform build system generator",
            detect: Detect::VersionCommand {
                program: "cmake",
                args: &["--version"],
            },
            minimum_version: Some(Version::new(3, 22, 0)),
            install_version: "3.31.1",
            source: ArtifactSource {
                url: "https://github.com/Kitware/CMake/releases/download/v3.31.1/cmake-3.31.1-windows-x86_64.msi",
                file_name: "cmake-3.31.1-windows-x86_64.msi",
            },
            install: InstallProcedure::Installer {
                command: InstallerCommand {
                    program: Some("msiexec.exe"),
                    pre_args: &["/i"],
                    post_args: &["ALLUSERS=1", "ADD_CMAKE_TO_PATH=System", "/qn"],
                },
            },
        },
        // ninja-win.zip is flat: ninja.exe sits at the archive root, so the
        // destination itself is the search-path entry.
        ToolRequirement {
            name: "ninja",
            summary: "Small, fast build executor",
            detect: Detect::VersionCommand {
                program: "ninja",
                args: &["--version"],
            },
            minimum_version: Some(Version::new(1, 12, 1)),
            install_version: "1.12.1",
            source: ArtifactSource {
                url: "https://github.com/ninja-build/ninja/releases/download/v1.12.1/ninja-win.zip",
                file_name: "ninja-win.zip",
            },
            install: InstallProcedure::Archive {
                dest: "C:\\Program Files\\Ninja",
                bin_dir: None,
            },
        },
        // Gated on MSVC workloads rather than a version number. The Build
        // Tools bootstrapper can both add a workload to an existing install
        // and perform a fresh one, so one command covers both remediations.
        ToolRequirement {
            name: "vs2022",
            summary: "Visual Studio 2022 C++ build tools",
            detect: Detect::Workload {
                ide_workload: "Microsoft.VisualStudio.Workload.NativeDesktop",
                build_tools_workload: "Microsoft.VisualStudio.Workload.VCTools",
            },
            minimum_version: None,
            install_version: "2022",
            source: ArtifactSource {
                url: "https://aka.ms/vs/17/release/vs_BuildTools.exe",
                file_name: "vs_BuildTools.exe",
            },
            install: InstallProcedure::Installer {
                command: InstallerCommand {
                    program: None,
                    pre_args: &[],
                    post_args: &[
                        "--passive",
                        "--wait",
                        "--norestart",
                        "--add",
                        "Microsoft.VisualStudio.Workload.VCTools",
                        "--add",
                        "Microsoft.VisualStudio.Workload.NativeDesktop",
                        "--includeRecommended",
                    ],
                },
            },
        },
        // The SDK installer exports VULKAN_SDK pointing at a versioned
        // directory; that variable is the detection source.
        ToolRequirement {
            name: "vulkan",
            summary: "Vulkan SDK (volk, VMA, debug layers)",
            detect: Detect::EnvDirVersion { var: "VULKAN_SDK" },
            minimum_version: Some(Version::new(1, 3, 204)),
            install_version: "1.3.296.0",
            source: ArtifactSource {
                url: "https://sdk.lunarg.com/sdk/download/1.3.296.0/windows/VulkanSDK-1.3.296.0-Installer.exe",
                file_name: "VulkanSDK-Installer.exe",
            },
            install: InstallProcedure::Installer {
                command: InstallerCommand {
                    program: None,
                    pre_args: &[],
                    post_args: &[
                        "install",
                        "--accept-licenses",
                        "--confirm-command",
                        "--default-answer",
                        "--no-force-installations",
                        "--install-components",
                        "com.lunarg.vulkan.volk",
                        "com.lunarg.vulkan.vma",
                        "com.lunarg.vulkan.debug",
                    ],
                },
            },
        },
    ]
}
