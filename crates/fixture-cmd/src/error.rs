//! Errors from starting, watching and stopping commands.

use std::io;
use std::process::ExitStatus;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CmdError {
    #[error("no program given")]
    EmptyArgs,

    #[error("failed to start '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("timed out after {timeout:?} waiting for output matching '{matcher}'")]
    WaitTimeout { matcher: String, timeout: Duration },

    #[error("'{command}' did not exit within {timeout:?} of being killed")]
    StopTimeout { command: String, timeout: Duration },

    #[error("'{command}' failed with {status}:\n{stderr}")]
    Failed {
        command: String,
        status: ExitStatus,
        stderr: String,
    },
}
