// Copyright 2025 The ACP Codex Authors
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! launchlib - ACP Codex Launcher Library
//!
//! Shared logic for the acp-extension-codex launcher and its
//! install-time permission fixer: host platform resolution, sibling
//! package binary location, executable-bit repair, and child spawning.

pub mod error;
pub mod locate;
pub mod perms;
pub mod platform;
pub mod spawn;

pub use error::LaunchError;
pub use locate::{locate_binary, locate_binary_from};
pub use perms::{ensure_executable, fix_package_binary};
pub use platform::{Arch, Os, Platform, BASE_NAME};
pub use spawn::run;
