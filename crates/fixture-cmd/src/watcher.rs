//! Watchers signaled by matching lines of command output.

use crate::error::CmdError;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;

/// Which output stream a line was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Stream {
    Stdout,
    Stderr,
}

/// Waits for a line of command output containing a match string.
///
/// Clones share one signal, so a clone can be handed to
/// [`Runner::start`](crate::Runner::start) while this one is awaited. A
/// signal raised before anyone waits is kept for the next
/// [`wait`](Self::wait).
#[derive(Debug, Clone)]
pub struct Watcher {
    matcher: String,
    stdout: bool,
    stderr: bool,
    signal: Arc<Notify>,
}

impl Watcher {
    /// Watch both stdout and stderr.
    pub fn new(matcher: impl Into<String>) -> Self {
        Self::watching(matcher.into(), true, true)
    }

    /// Watch stdout only.
    pub fn stdout(matcher: impl Into<String>) -> Self {
        Self::watching(matcher.into(), true, false)
    }

    /// Watch stderr only.
    pub fn stderr(matcher: impl Into<String>) -> Self {
        Self::watching(matcher.into(), false, true)
    }

    fn watching(matcher: String, stdout: bool, stderr: bool) -> Self {
        Self {
            matcher,
            stdout,
            stderr,
            signal: Arc::new(Notify::new()),
        }
    }

    pub fn matcher(&self) -> &str {
        &self.matcher
    }

    /// Wait until a matching line is seen, or fail after `timeout`.
    pub async fn wait(&self, timeout: Duration) -> Result<(), CmdError> {
        tokio::time::timeout(timeout, self.signal.notified())
            .await
            .map_err(|_| CmdError::WaitTimeout {
                matcher: self.matcher.clone(),
                timeout,
            })
    }

    pub(crate) fn matches(&self, stream: Stream, line: &str) -> bool {
        let watched = match stream {
            Stream::Stdout => self.stdout,
            Stream::Stderr => self.stderr,
        };
        watched && line.contains(&self.matcher)
    }

    pub(crate) fn signal(&self) {
        self.signal.notify_one();
    }
}
