use anyhow::{Context, Result};
use base64::engine::general_purpose::STANDARD;
use base64::write::EncoderWriter;
use clap::Parser;
use fixture_cli::{init_tracing, parse_or_exit, report_error};
use fixture_random::rng;
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;
use tracing::debug;

/// Write random data to stdout
#[derive(Parser, Debug)]
#[command(name = "random-data", version)]
struct Cli {
    /// Number of bytes to generate
    #[arg(long, allow_negative_numbers = true)]
    size: Option<i64>,

    /// Random seed, 0 or unset for current time
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Base-64 encode output
    #[arg(long)]
    b64: bool,
}

fn main() -> ExitCode {
    init_tracing();
    let cli: Cli = parse_or_exit();

    let size = match cli.size {
        Some(size) if size >= 1 => size as u64,
        _ => {
            report_error::<Cli>(&"missing value for size", true);
            return ExitCode::FAILURE;
        }
    };

    match write_data(cli.seed, size, cli.b64) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error::<Cli>(&format!("{err:#}"), false);
            ExitCode::FAILURE
        }
    }
}

fn write_data(seed: u64, size: u64, b64: bool) -> Result<()> {
    let mut rng = if seed == 0 {
        rng::from_time()
    } else {
        rng::seeded(seed)
    };

    debug!(seed, size, b64, "writing random data");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    if b64 {
        let mut encoder = EncoderWriter::new(&mut out, &STANDARD);
        rng::write_random(&mut rng, &mut encoder, size).context("failed to write data")?;
        encoder.finish().context("failed to write data")?;
        drop(encoder);
        writeln!(out).context("failed to write data")?;
    } else {
        rng::write_random(&mut rng, &mut out, size).context("failed to write data")?;
    }
    out.flush().context("failed to write data")
}
