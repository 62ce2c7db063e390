use anyhow::Context;
use chrono::{Local, NaiveDate};
use std::fs::File;
use std::path::PathBuf;
use structopt::StructOpt;
use tracing_subscriber::EnvFilter;

mod assemble_notes;
mod error;
mod merge_notes;
mod parse_notes;
mod utils;

use assemble_notes::ReleaseUrls;
use merge_notes::{merge_notes, write_output, MergeInputs};

/// Merges the binary list and the extra release notes into the version
/// section of the output file together with the upcoming version notes.
#[derive(StructOpt, Debug)]
#[structopt(name = "merge-notes")]
pub struct Cli {
    #[structopt(short = "b", long = "binary", parse(from_os_str))]
    binary: PathBuf,

    #[structopt(short = "e", long = "extra-notes", parse(from_os_str))]
    extra_notes: PathBuf,

    #[structopt(short = "o", long = "output", parse(from_os_str))]
    output: PathBuf,

    /// File whose last line is the version being released.
    #[structopt(long = "version-file", parse(from_os_str), default_value = "version.txt")]
    version_file: PathBuf,

    /// Where the merged document is written.
    #[structopt(short = "w", long = "write-to", parse(from_os_str), default_value = "README.md")]
    write_to: PathBuf,

    /// Source download link, `{version}` is replaced by the version.
    #[structopt(long = "source-url")]
    source_url: Option<String>,

    /// Binaries download link, `{version}` is replaced by the version.
    #[structopt(long = "binary-url")]
    binary_url: Option<String>,

    /// Release date as YYYY-MM-DD, defaults to today.
    #[structopt(long = "date")]
    date: Option<NaiveDate>,

    /// Print the merged document instead of writing it.
    #[structopt(short = "d", long = "dry")]
    dry: bool,

    #[structopt(short = "v", long = "verbose")]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::from_args();

    let level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut version_file = File::open(&cli.version_file)
        .with_context(|| format!("cannot open version file {}", cli.version_file.display()))?;
    let version = utils::read_version_string(&mut version_file, &cli.version_file)?;

    let inputs = MergeInputs {
        output: cli.output,
        binary_notes: cli.binary,
        extra_notes: cli.extra_notes,
    };
    let mut urls = ReleaseUrls::default();
    if let Some(source) = cli.source_url {
        urls.source = source;
    }
    if let Some(binaries) = cli.binary_url {
        urls.binaries = binaries;
    }
    let date = cli.date.unwrap_or_else(|| Local::now().date_naive());

    let document = merge_notes(&inputs, &version, date, &urls)
        .with_context(|| format!("cannot merge release notes for version {}", version))?;

    if cli.dry {
        print!("{}", document);
    } else {
        write_output(&cli.write_to, &document)?;
    }

    Ok(())
}
