// Copyright 2025 The ACP Codex Authors
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! Launcher error taxonomy
//!
//! Every variant is fatal for the invocation; the binaries print the
//! message to stderr and exit with status 1. The executable-bit repair
//! in [`crate::perms`] is deliberately infallible and has no variant
//! here.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("Unsupported platform: {os}")]
    UnsupportedPlatform { os: String },

    #[error("Unsupported architecture: {arch} on {os}")]
    UnsupportedArch { arch: String, os: String },

    #[error(
        "Failed to locate {package} binary (platform: {os}, architecture: {arch}). \
         This usually means the optional dependency was not installed."
    )]
    BinaryNotFound {
        package: String,
        os: String,
        arch: String,
    },

    #[error("Failed to execute {path}: {source}")]
    Spawn { path: PathBuf, source: io::Error },
}
