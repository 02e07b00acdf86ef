// Copyright 2025 The ACP Codex Authors
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! Platform package binary location
//!
//! The platform packages are installed as sibling directories of the
//! launcher package, each providing `bin/<binary-name>`. Starting from
//! the directory containing the launcher executable, every ancestor is
//! probed for `<package>/bin/<binary>`; the first hit wins. Absence of
//! the binary is diagnosed distinctly from absence of platform support.

use crate::error::LaunchError;
use crate::platform::Platform;
use std::env;
use std::path::{Path, PathBuf};

/// Locate the platform package binary for this invocation, searching
/// from the directory of the running executable.
pub fn locate_binary(platform: &Platform) -> Result<PathBuf, LaunchError> {
    match env::current_exe() {
        Ok(exe) => {
            if let Some(dir) = exe.parent() {
                return locate_binary_from(platform, dir);
            }
            log::debug!("launcher path {} has no parent directory", exe.display());
        }
        Err(err) => {
            log::debug!("could not determine launcher path: {}", err);
        }
    }
    Err(not_found(platform))
}

/// Locate the platform package binary searching `start` and each of
/// its ancestors for `<package>/bin/<binary>`.
pub fn locate_binary_from(platform: &Platform, start: &Path) -> Result<PathBuf, LaunchError> {
    let package = platform.package_name();
    let binary = platform.binary_name();

    for dir in start.ancestors() {
        let candidate = dir.join(&package).join("bin").join(binary);
        log::debug!("probing {}", candidate.display());
        if candidate.is_file() {
            return Ok(candidate);
        }
    }

    Err(not_found(platform))
}

fn not_found(platform: &Platform) -> LaunchError {
    LaunchError::BinaryNotFound {
        package: platform.package_name(),
        os: platform.os.name().to_string(),
        arch: platform.arch.name().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn plant_binary(root: &Path, platform: &Platform) -> PathBuf {
        let bin_dir = root.join(platform.package_name()).join("bin");
        fs::create_dir_all(&bin_dir).unwrap();
        let path = bin_dir.join(platform.binary_name());
        fs::write(&path, b"#!/bin/sh\n").unwrap();
        path
    }

    #[test]
    fn finds_sibling_package_in_start_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let platform = Platform::from_host("linux", "x86_64").unwrap();
        let expected = plant_binary(tmp.path(), &platform);

        let found = locate_binary_from(&platform, tmp.path()).unwrap();
        assert_eq!(found, expected);
    }

    #[test]
    fn finds_package_in_ancestor_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let platform = Platform::from_host("darwin", "arm64").unwrap();
        let expected = plant_binary(tmp.path(), &platform);

        let nested = tmp.path().join("node_modules").join(".bin");
        fs::create_dir_all(&nested).unwrap();

        let found = locate_binary_from(&platform, &nested).unwrap();
        assert_eq!(found, expected);
    }

    #[test]
    fn missing_package_names_package_os_and_arch() {
        let tmp = tempfile::tempdir().unwrap();
        let platform = Platform::from_host("darwin", "arm64").unwrap();

        let err = locate_binary_from(&platform, tmp.path()).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("acp-extension-codex-darwin-arm64"));
        assert!(msg.contains("darwin"));
        assert!(msg.contains("arm64"));
    }

    #[test]
    fn package_dir_without_binary_is_not_found() {
        let tmp = tempfile::tempdir().unwrap();
        let platform = Platform::from_host("linux", "aarch64").unwrap();
        fs::create_dir_all(tmp.path().join(platform.package_name()).join("bin")).unwrap();

        assert!(locate_binary_from(&platform, tmp.path()).is_err());
    }
}
