// Copyright 2025 The ACP Codex Authors
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! acp-extension-codex - Extension Binary Launcher
//!
//! Thin dispatcher for the real acp-extension-codex binary, which is
//! shipped in a platform-specific sibling package. Resolves the
//! package for the host platform, repairs the binary's execute bits if
//! needed, and runs it with all arguments forwarded verbatim and stdio
//! inherited, exiting with the child's own status.

use anyhow::Result;
use launchlib::{ensure_executable, locate_binary, run, Platform};
use std::env;
use std::ffi::OsString;

fn main() -> Result<()> {
    // No flag parsing of our own: everything after the program name
    // belongs to the extension binary.
    let args: Vec<OsString> = env::args_os().skip(1).collect();

    let platform = Platform::detect()?;
    let binary = locate_binary(&platform)?;
    ensure_executable(&binary);

    let code = run(&binary, &args)?;
    std::process::exit(code);
}
