//! Shared setup for the fixture command line tools.

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::process;
use tracing_subscriber::EnvFilter;

/// Install a stderr log subscriber, filtered by `RUST_LOG` (default `warn`).
///
/// Logs never go to stdout, which carries the tools' data.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Parse the command line, exiting with status 1 on bad arguments.
///
/// `--help` and `--version` still exit successfully.
pub fn parse_or_exit<P: Parser>() -> P {
    match P::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            let _ = err.print();
            process::exit(1)
        }
    }
}

/// Print `error: <err>` to stderr, followed by the full help when
/// `with_help` is set.
pub fn report_error<P: CommandFactory>(err: &dyn std::fmt::Display, with_help: bool) {
    eprintln!("error: {err}");
    if with_help {
        eprintln!();
        eprintln!("{}", P::command().render_help());
    }
}
