// Copyright 2025 The ACP Codex Authors
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! Child process execution
//!
//! Runs the resolved binary synchronously with inherited stdio and
//! reports the exit code the launcher should terminate with. On
//! Windows the child gets no visible console window.

use crate::error::LaunchError;
use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, ExitStatus};

#[cfg(windows)]
const CREATE_NO_WINDOW: u32 = 0x0800_0000;

/// Spawn `path` with `args`, block until it exits, and return the exit
/// code to propagate. Stdin, stdout, and stderr are inherited from the
/// parent.
pub fn run(path: &Path, args: &[OsString]) -> Result<i32, LaunchError> {
    let mut cmd = Command::new(path);
    cmd.args(args);

    #[cfg(windows)]
    {
        use std::os::windows::process::CommandExt;
        cmd.creation_flags(CREATE_NO_WINDOW);
    }

    let status = cmd.status().map_err(|source| LaunchError::Spawn {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(exit_code(status))
}

/// Exit code for a child status. A child killed by a signal maps to
/// the conventional `128 + signal` rather than reporting success.
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::perms::ensure_executable;
    use std::fs;

    fn args(list: &[&str]) -> Vec<OsString> {
        list.iter().map(OsString::from).collect()
    }

    #[test]
    fn propagates_child_exit_code() {
        let code = run(Path::new("/bin/sh"), &args(&["-c", "exit 7"])).unwrap();
        assert_eq!(code, 7);
    }

    #[test]
    fn zero_on_success() {
        let code = run(Path::new("/bin/sh"), &args(&["-c", "true"])).unwrap();
        assert_eq!(code, 0);
    }

    #[test]
    fn signal_death_maps_to_128_plus_signal() {
        let code = run(Path::new("/bin/sh"), &args(&["-c", "kill -TERM $$"])).unwrap();
        assert_eq!(code, 128 + 15);
    }

    #[test]
    fn spawn_failure_names_the_path() {
        let err = run(Path::new("/no/such/binary"), &[]).unwrap_err();
        assert!(err.to_string().contains("/no/such/binary"));
    }

    #[test]
    fn forwards_arguments_verbatim() {
        let tmp = tempfile::tempdir().unwrap();
        let script = tmp.path().join("echo-args");
        fs::write(&script, "#!/bin/sh\ntest \"$1\" = \"--version\" && test \"$2\" = \"two words\"\n").unwrap();
        ensure_executable(&script);

        let code = run(&script, &args(&["--version", "two words"])).unwrap();
        assert_eq!(code, 0);
    }
}
