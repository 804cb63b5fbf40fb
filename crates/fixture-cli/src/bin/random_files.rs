use anyhow::{Context, Result};
use clap::Parser;
use fixture_cli::{init_tracing, parse_or_exit, report_error};
use fixture_random::files::{self, HierarchyBuilder, HierarchyConfig};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

/// Write a random filesystem hierarchy to each <path>
#[derive(Parser, Debug)]
#[command(name = "random-files", version)]
struct Cli {
    /// Do not print files and directories
    #[arg(short = 'q')]
    quiet: bool,

    /// YAML file with base settings; flags override its values
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Depth of the directory tree including the root directory [default: 2]
    #[arg(long, allow_negative_numbers = true)]
    depth: Option<i32>,

    /// Number of subdirectories at each depth [default: 5]
    #[arg(long, allow_negative_numbers = true)]
    dirs: Option<i32>,

    /// Number of files at each depth [default: 10]
    #[arg(long, allow_negative_numbers = true)]
    files: Option<i32>,

    /// Bytes of random data in each file [default: 4096]
    #[arg(long = "filesize", allow_negative_numbers = true)]
    file_size: Option<i64>,

    /// Randomize number of subdirectories, from 1 to --dirs
    #[arg(
        long,
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    random_dirs: Option<bool>,

    /// Randomize number of files, from 1 to --files
    #[arg(
        long,
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    random_files: Option<bool>,

    /// Randomize file size, from 1 to --filesize [default: true]
    #[arg(
        long,
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    random_size: Option<bool>,

    /// Random seed, 0 for current time
    #[arg(long)]
    seed: Option<u64>,

    /// Minimum length of file and directory names [default: 4]
    #[arg(long)]
    name_min: Option<usize>,

    /// Maximum length of file and directory names [default: 16]
    #[arg(long)]
    name_max: Option<usize>,

    /// Root directories to fill
    paths: Vec<PathBuf>,
}

impl Cli {
    /// Settings from `--config` (or the defaults), overridden by explicit flags.
    fn hierarchy_config(&self) -> Result<HierarchyConfig> {
        let base = match &self.config {
            Some(path) => HierarchyConfig::from_yaml_file(path)?,
            None => HierarchyConfig::default(),
        };
        let mut builder = HierarchyBuilder::from(base);

        if let Some(depth) = self.depth {
            builder = builder.depth(depth);
        }
        if let Some(dirs) = self.dirs {
            builder = builder.dirs(dirs);
        }
        if let Some(files) = self.files {
            builder = builder.files(files);
        }
        if let Some(file_size) = self.file_size {
            builder = builder.file_size(file_size);
        }
        if let Some(enabled) = self.random_dirs {
            builder = builder.random_dirs(enabled);
        }
        if let Some(enabled) = self.random_files {
            builder = builder.random_files(enabled);
        }
        if let Some(enabled) = self.random_size {
            builder = builder.random_size(enabled);
        }
        if let Some(seed) = self.seed {
            builder = builder.seed(seed);
        }
        if let Some(min) = self.name_min {
            builder = builder.name_min_size(min);
        }
        if let Some(max) = self.name_max {
            builder = builder.name_max_size(max);
        }
        Ok(builder.build())
    }
}

fn main() -> ExitCode {
    init_tracing();
    let cli: Cli = parse_or_exit();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error::<Cli>(&format!("{err:#}"), cli.paths.is_empty());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.hierarchy_config()?;
    debug!(?config, roots = cli.paths.len(), "resolved hierarchy config");

    if cli.quiet {
        files::create(&config, &cli.paths)?;
        return Ok(());
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    files::create_with_output(&config, &cli.paths, &mut out)?;
    out.flush().context("failed to write listing")
}
