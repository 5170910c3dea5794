//! Zip extraction and layout normalization for archive installs.
//!
//! Release archives come in two layouts: flat (ninja-win.zip carries
//! ninja.exe at the root) and wrapped (llvm-mingw wraps everything in a
//! single versioned directory). Extraction handles both; flattening
//! removes the wrapper so executables always land directly under the
//! destination root.

use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::Path;

use tracing::warn;
use zip::ZipArchive;

use crate::error::Result;

/// Extracts `archive` under `dest`, creating `dest` if needed.
///
/// Entries whose names would escape `dest` (absolute paths, `..`) are
/// skipped with a warning rather than written.
pub fn extract_zip(archive: &Path, dest: &Path) -> Result<()> {
    let file = File::open(archive)?;
    let mut zip = ZipArchive::new(BufReader::new(file))?;
    fs::create_dir_all(dest)?;

    for i in 0..zip.len() {
        let mut entry = zip.by_index(i)?;
        let relative = match entry.enclosed_name() {
            Some(path) => path,
            None => {
                warn!(name = entry.name(), "skipping archive entry with unsafe path");
                continue;
            }
        };
        let out = dest.join(relative);

        if entry.is_dir() {
            fs::create_dir_all(&out)?;
            continue;
        }
        if let Some(parent) = out.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut target = File::create(&out)?;
        io::copy(&mut entry, &mut target)?;

        #[cfg(unix)]
        if let Some(mode) = entry.unix_mode() {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&out, fs::Permissions::from_mode(mode))?;
        }
    }
    Ok(())
}

/// Flattens a wrapper directory: when `dest` contains exactly one
/// subdirectory, its children move up one level and the now-empty directory
/// is removed. Loose files beside the wrapper stay where they are; any
/// other layout is left untouched.
///
/// Returns whether flattening happened.
pub fn flatten_single_dir(dest: &Path) -> Result<bool> {
    let entries = fs::read_dir(dest)?.collect::<io::Result<Vec<_>>>()?;
    let mut subdirs = Vec::new();
    for entry in &entries {
        if entry.file_type()?.is_dir() {
            subdirs.push(entry.path());
        }
    }
    let [wrapper] = subdirs.as_slice() else {
        return Ok(false);
    };

    for child in fs::read_dir(wrapper)? {
        let child = child?;
        fs::rename(child.path(), dest.join(child.file_name()))?;
    }
    fs::remove_dir(wrapper)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    fn write_zip(path: &Path, entries: &[(&str, &[u8])]) {
        let mut writer = ZipWriter::new(File::create(path).unwrap());
        for (name, body) in entries {
            if name.ends_with('/') {
                writer
                    .add_directory(name.trim_end_matches('/'), SimpleFileOptions::default())
                    .unwrap();
            } else {
                writer.start_file(*name, SimpleFileOptions::default()).unwrap();
                writer.write_all(body).unwrap();
            }
        }
        writer.finish().unwrap();
    }

    #[test]
    fn extract_zip_writes_nested_entries() {
        let temp = TempDir::new().unwrap();
        let archive = temp.path().join("toolchain.zip");
        write_zip(
            &archive,
            &[
                ("bin/", b""),
                ("bin/clang.exe", b"compiler"),
                ("README", b"docs"),
            ],
        );

        let dest = temp.path().join("out");
        extract_zip(&archive, &dest).unwrap();

        assert_eq!(fs::read(dest.join("bin/clang.exe")).unwrap(), b"compiler");
        assert_eq!(fs::read(dest.join("README")).unwrap(), b"docs");
    }

    #[test]
    fn extract_zip_creates_missing_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let archive = temp.path().join("deep.zip");
        write_zip(&archive, &[("a/b/c/tool.exe", b"x")]);

        let dest = temp.path().join("out");
        extract_zip(&archive, &dest).unwrap();
        assert!(dest.join("a/b/c/tool.exe").exists());
    }

    #[test]
    fn extract_zip_skips_escaping_entries() {
        let temp = TempDir::new().unwrap();
        let archive = temp.path().join("evil.zip");
        write_zip(&archive, &[("../evil.txt", b"nope"), ("ok.txt", b"fine")]);

        let dest = temp.path().join("sandbox");
        fs::create_dir_all(&dest).unwrap();
        extract_zip(&archive, &dest).unwrap();

        assert!(dest.join("ok.txt").exists());
        assert!(!temp.path().join("evil.txt").exists());
    }

    #[test]
    fn flatten_moves_children_up_and_removes_wrapper() {
        let temp = TempDir::new().unwrap();
        let wrapper = temp.path().join("llvm-mingw-20241119");
        fs::create_dir_all(wrapper.join("bin")).unwrap();
        fs::write(wrapper.join("bin/clang.exe"), b"compiler").unwrap();
        fs::write(wrapper.join("NOTICE"), b"legal").unwrap();

        assert!(flatten_single_dir(temp.path()).unwrap());
        assert!(temp.path().join("bin/clang.exe").exists());
        assert!(temp.path().join("NOTICE").exists());
        assert!(!wrapper.exists());
    }

    #[test]
    fn flatten_ignores_loose_files_beside_wrapper() {
        let temp = TempDir::new().unwrap();
        let wrapper = temp.path().join("cmake-3.31.1");
        fs::create_dir_all(wrapper.join("bin")).unwrap();
        fs::write(temp.path().join("stray.txt"), b"left behind").unwrap();

        assert!(flatten_single_dir(temp.path()).unwrap());
        assert!(temp.path().join("bin").exists());
        assert!(temp.path().join("stray.txt").exists());
        assert!(!wrapper.exists());
    }

    #[test]
    fn flatten_leaves_multiple_dirs_alone() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("bin")).unwrap();
        fs::create_dir_all(temp.path().join("lib")).unwrap();

        assert!(!flatten_single_dir(temp.path()).unwrap());
        assert!(temp.path().join("bin").exists());
        assert!(temp.path().join("lib").exists());
    }

    #[test]
    fn flatten_leaves_single_file_alone() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("ninja.exe"), b"build").unwrap();

        assert!(!flatten_single_dir(temp.path()).unwrap());
        assert!(temp.path().join("ninja.exe").exists());
    }

    #[test]
    fn flatten_leaves_empty_dir_alone() {
        let temp = TempDir::new().unwrap();
        assert!(!flatten_single_dir(temp.path()).unwrap());
    }
}
