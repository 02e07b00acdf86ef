// Copyright 2025 The ACP Codex Authors
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! Host platform resolution
//!
//! Maps the running process's operating system and CPU architecture to
//! the name of the platform-specific package that bundles the real
//! extension binary. The mapping is a static table over six supported
//! pairs; anything else is a fatal error.

use crate::error::LaunchError;
use std::env;

/// Base name shared by the launcher and every platform package.
pub const BASE_NAME: &str = "acp-extension-codex";

/// Supported operating systems, named as the platform packages are
/// published.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Os {
    Darwin,
    Linux,
    Win32,
}

impl Os {
    pub fn from_host(os: &str) -> Result<Self, LaunchError> {
        match os {
            "macos" | "darwin" => Ok(Os::Darwin),
            "linux" => Ok(Os::Linux),
            "windows" | "win32" => Ok(Os::Win32),
            _ => Err(LaunchError::UnsupportedPlatform { os: os.to_string() }),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Os::Darwin => "darwin",
            Os::Linux => "linux",
            Os::Win32 => "win32",
        }
    }
}

/// Supported CPU architectures (64-bit only).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arch {
    Arm64,
    X64,
}

impl Arch {
    pub fn from_host(arch: &str, os: Os) -> Result<Self, LaunchError> {
        match arch {
            "aarch64" | "arm64" => Ok(Arch::Arm64),
            "x86_64" | "x64" => Ok(Arch::X64),
            _ => Err(LaunchError::UnsupportedArch {
                arch: arch.to_string(),
                os: os.name().to_string(),
            }),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Arch::Arm64 => "arm64",
            Arch::X64 => "x64",
        }
    }
}

/// The (OS, architecture) pair resolved for one invocation.
///
/// Recomputed on every call; nothing is cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Platform {
    pub os: Os,
    pub arch: Arch,
}

impl Platform {
    /// Resolve the platform this process is running on.
    pub fn detect() -> Result<Self, LaunchError> {
        Self::from_host(env::consts::OS, env::consts::ARCH)
    }

    /// Resolve from explicit identifier strings. The OS is checked
    /// first: an unknown OS fails before the architecture is looked at.
    pub fn from_host(os: &str, arch: &str) -> Result<Self, LaunchError> {
        let os = Os::from_host(os)?;
        let arch = Arch::from_host(arch, os)?;
        Ok(Self { os, arch })
    }

    /// Name of the platform package expected to carry the binary,
    /// e.g. `acp-extension-codex-darwin-arm64`.
    pub fn package_name(&self) -> String {
        format!("{}-{}-{}", BASE_NAME, self.os.name(), self.arch.name())
    }

    /// File name of the bundled binary inside the platform package.
    pub fn binary_name(&self) -> &'static str {
        match self.os {
            Os::Win32 => "acp-extension-codex.exe",
            _ => BASE_NAME,
        }
    }
}
