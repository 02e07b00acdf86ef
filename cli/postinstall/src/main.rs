// Copyright 2025 The ACP Codex Authors
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! acp-extension-codex-postinstall - Install-Time Permission Fixer
//!
//! Runs once after the platform package is installed and restores the
//! execute bits on the bundled binary in case packaging or transport
//! stripped them. Best-effort by design: it never fails the install,
//! and it is a silent no-op when the binary is absent (wrong-platform
//! package or dev checkout).

use clap::Parser;
use launchlib::fix_package_binary;
use std::env;
use std::path::PathBuf;

/// Install-time permission fixer for the acp-extension-codex binary
#[derive(Parser, Debug)]
#[command(name = "acp-extension-codex-postinstall")]
#[command(author = "The ACP Codex Authors")]
#[command(version = "0.1.0")]
#[command(about = "Restores the execute bits on the bundled extension binary", long_about = None)]
struct Args {
    /// Package directory to fix (defaults to this executable's own
    /// package root)
    dir: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    let root = args.dir.or_else(own_package_root);
    if let Some(root) = root {
        fix_package_binary(&root);
    }
}

/// Package root of the running fixer. The fixer ships in the platform
/// package's `bin/` directory, so the root is that directory's parent;
/// if the executable lives elsewhere, its own directory is taken as
/// the root.
fn own_package_root() -> Option<PathBuf> {
    let exe = env::current_exe().ok()?;
    let dir = exe.parent()?;
    if dir.file_name().is_some_and(|name| name == "bin") {
        dir.parent().map(PathBuf::from)
    } else {
        Some(dir.to_path_buf())
    }
}
