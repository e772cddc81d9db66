use std::ffi::OsString;
use std::process::Command;

use log::debug;
use snafu::ResultExt;

use super::{DispatchError, LaunchSnafu};

pub trait Launcher {
    /// Runs `program` with `args` and reports the exit code the dispatcher
    /// should leave with.
    fn launch(&self, program: &str, args: &[OsString]) -> Result<i32, DispatchError>;
}

/// Takes over the calling process.
///
/// - Unix: `execvp`, the compiler replaces the dispatcher and owns its exit
///   status
/// - Otherwise: spawn, wait and hand back the child's exit code
#[derive(Debug, Default, Clone, Copy)]
pub struct ExecLauncher;

impl Launcher for ExecLauncher {
    #[cfg(unix)]
    fn launch(&self, program: &str, args: &[OsString]) -> Result<i32, DispatchError> {
        use std::os::unix::process::CommandExt;

        debug!("exec {program} {args:?}");
        // exec only returns if the image could not be replaced
        let source = Command::new(program).args(args).exec();
        Err(source).context(LaunchSnafu { program })
    }

    #[cfg(not(unix))]
    fn launch(&self, program: &str, args: &[OsString]) -> Result<i32, DispatchError> {
        debug!("spawn {program} {args:?}");
        let status = Command::new(program)
            .args(args)
            .status()
            .context(LaunchSnafu { program })?;
        // no code means the child was killed
        Ok(status.code().unwrap_or(1))
    }
}
