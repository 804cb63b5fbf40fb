//! Starting, stopping and running commands with scanned output.

use crate::args::Args;
use crate::error::CmdError;
use crate::watcher::{Stream, Watcher};
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::{Child, Command};
use tokio::task::JoinHandle;
use tracing::debug;

/// Starts commands in one working directory with a shared environment.
#[derive(Debug, Clone)]
pub struct Runner {
    dir: PathBuf,
    env: Vec<(String, String)>,
}

/// A command started by [`Runner::start`].
///
/// The process is killed if this is dropped without calling
/// [`Runner::stop`].
#[derive(Debug)]
pub struct RunningCmd {
    args: Args,
    child: Child,
    scanners: Vec<JoinHandle<()>>,
}

impl RunningCmd {
    pub fn args(&self) -> &Args {
        &self.args
    }

    /// OS process id, unless the process has already been reaped.
    pub fn id(&self) -> Option<u32> {
        self.child.id()
    }
}

impl Runner {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            env: Vec::new(),
        }
    }

    /// Set an environment variable for every command started afterwards.
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Start `args` with piped output, signaling `watchers` as lines match.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(&self, args: &Args, watchers: &[Watcher]) -> Result<RunningCmd, CmdError> {
        let mut command = self.command(args)?;
        command
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let mut child = command.spawn().map_err(|source| CmdError::Spawn {
            command: args.to_string(),
            source,
        })?;
        debug!(command = %args, pid = ?child.id(), "started command");

        let mut scanners = Vec::with_capacity(2);
        if let Some(stdout) = child.stdout.take() {
            scanners.push(tokio::spawn(scan_lines(stdout, Stream::Stdout, watchers.to_vec())));
        }
        if let Some(stderr) = child.stderr.take() {
            scanners.push(tokio::spawn(scan_lines(stderr, Stream::Stderr, watchers.to_vec())));
        }

        Ok(RunningCmd {
            args: args.clone(),
            child,
            scanners,
        })
    }

    /// Kill a started command and wait up to `timeout` for it to exit.
    pub async fn stop(&self, cmd: RunningCmd, timeout: Duration) -> Result<ExitStatus, CmdError> {
        let RunningCmd {
            args,
            mut child,
            scanners,
        } = cmd;

        if let Err(err) = child.start_kill() {
            debug!(command = %args, %err, "kill failed, command may have exited");
        }
        let waited = tokio::time::timeout(timeout, child.wait()).await;
        for scanner in scanners {
            scanner.abort();
        }

        let status = waited.map_err(|_| CmdError::StopTimeout {
            command: args.to_string(),
            timeout,
        })??;
        debug!(command = %args, %status, "stopped command");
        Ok(status)
    }

    /// Run `args` to completion and return its stdout.
    pub async fn run(&self, args: &Args) -> Result<String, CmdError> {
        let output = self
            .command(args)?
            .output()
            .await
            .map_err(|source| CmdError::Spawn {
                command: args.to_string(),
                source,
            })?;

        if !output.status.success() {
            return Err(CmdError::Failed {
                command: args.to_string(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn command(&self, args: &Args) -> Result<Command, CmdError> {
        let program = args.program().ok_or(CmdError::EmptyArgs)?;
        let mut command = Command::new(program);
        command
            .args(args.args())
            .current_dir(&self.dir)
            .envs(self.env.iter().map(|(k, v)| (k, v)))
            .stdin(Stdio::null());
        Ok(command)
    }
}

async fn scan_lines<R>(reader: R, stream: Stream, watchers: Vec<Watcher>)
where
    R: AsyncRead + Unpin,
{
    let mut lines = BufReader::new(reader).lines();
    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                for watcher in watchers.iter().filter(|w| w.matches(stream, &line)) {
                    debug!(?stream, matcher = watcher.matcher(), "watcher matched");
                    watcher.signal();
                }
            }
            Ok(None) => break,
            Err(err) => {
                debug!(?stream, %err, "stopped reading command output");
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_args_rejected() {
        let runner = Runner::new(".");
        assert!(matches!(
            runner.command(&Args::default()),
            Err(CmdError::EmptyArgs)
        ));
    }

    #[tokio::test]
    async fn test_missing_program_fails_to_spawn() {
        let runner = Runner::new(".");
        let err = runner
            .run(&Args::new(["fixture-cmd-no-such-program"]))
            .await
            .unwrap_err();
        assert!(matches!(err, CmdError::Spawn { .. }));
    }
}
