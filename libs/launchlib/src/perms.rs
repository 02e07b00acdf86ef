// Copyright 2025 The ACP Codex Authors
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! Executable-bit repair
//!
//! Packaging and transport can strip the execute bits from the bundled
//! binary. Both the launcher and the install-time fixer restore them
//! here, best-effort: a failed stat or chmod is swallowed, since the
//! spawn that follows surfaces any real problem with a clearer error.

use std::path::Path;

/// Ensure `path` carries the owner/group/other execute bits,
/// preserving every other mode bit. No-op on Windows, no-op when the
/// file is already executable, and never reports an error.
#[cfg(unix)]
pub fn ensure_executable(path: &Path) {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    let Ok(meta) = fs::metadata(path) else {
        return;
    };
    let mode = meta.permissions().mode();
    if mode & 0o111 == 0 {
        let mut perms = meta.permissions();
        perms.set_mode(mode | 0o111);
        if let Err(err) = fs::set_permissions(path, perms) {
            log::debug!("chmod {} failed: {}", path.display(), err);
        }
    }
}

#[cfg(not(unix))]
pub fn ensure_executable(_path: &Path) {}

/// Install-time variant: repair `<package_root>/bin/acp-extension-codex`
/// if it exists. Silent no-op when the binary is absent, which is
/// normal for a wrong-platform package or a dev checkout.
pub fn fix_package_binary(package_root: &Path) {
    let binary = package_root.join("bin").join(crate::platform::BASE_NAME);
    if binary.exists() {
        ensure_executable(&binary);
    }
}
