//! Run commands from tests and watch their output.
//!
//! A [`Runner`] starts commands in a fixed working directory. Each started
//! command has its stdout and stderr scanned line by line; any [`Watcher`]
//! whose match string appears in a watched stream is signaled, so a test can
//! wait until a server reports that it is ready before talking to it.
//!
//! ```no_run
//! use fixture_cmd::{Args, Runner, Watcher};
//! use std::time::Duration;
//!
//! # async fn example() -> Result<(), fixture_cmd::CmdError> {
//! let runner = Runner::new("/tmp");
//! let ready = Watcher::stderr("listening on");
//! let cmd = runner.start(&Args::new(["my-server", "--port", "0"]), &[ready.clone()])?;
//!
//! ready.wait(Duration::from_secs(5)).await?;
//! runner.stop(cmd, Duration::from_secs(1)).await?;
//! # Ok(())
//! # }
//! ```

mod args;
mod error;
mod runner;
mod watcher;

pub use args::Args;
pub use error::CmdError;
pub use runner::{RunningCmd, Runner};
pub use watcher::Watcher;
