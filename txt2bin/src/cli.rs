use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use symbol_pack::{PackerConfig, SanitizePolicy};

use crate::logging::LogFormat;

const USAGE_HINT: &str = "Please provide a path to a source file and an output file\n\
E.g. use as ./txt2bin {path to source file} {path to output file}";

/// Packs whitespace-separated numbers into fixed-width bit fields,
/// appending the bytes to the output file.
#[derive(Debug, Parser)]
#[command(name = "txt2bin", version)]
pub struct Cli {
    /// Text file of whitespace-separated numbers
    pub source: PathBuf,

    /// Binary file the packed bytes are appended to
    pub output: PathBuf,

    /// Bits per symbol
    #[arg(
        short,
        long,
        env = "TXT2BIN_BITS",
        default_value_t = 5,
        value_parser = clap::value_parser!(u32).range(1..=32)
    )]
    pub bits: u32,

    /// What to do with numbers outside 1..=2^bits (wrap or skip)
    #[arg(short, long, env = "TXT2BIN_POLICY", default_value_t = SanitizePolicy::Wrap)]
    pub policy: SanitizePolicy,

    /// Zero-pad and write the final partial byte instead of dropping it
    #[arg(short, long, env = "TXT2BIN_FLUSH")]
    pub flush: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,

    /// Filter directives used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Cli {
    pub fn config(&self) -> PackerConfig {
        PackerConfig::new(self.bits, self.policy).with_flush_on_finish(self.flush)
    }
}

/// How a failed parse should be reported.
#[derive(Debug)]
pub enum ParseOutcome {
    /// `--help` / `--version`: print and exit 0.
    Info(String),
    /// Bad or missing arguments: print to stdout and exit 1.
    Usage(String),
}

pub fn parse_from<I, T>(args: I) -> Result<Cli, ParseOutcome>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args).map_err(|err| match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ParseOutcome::Info(err.to_string()),
        ErrorKind::MissingRequiredArgument => ParseOutcome::Usage(format!(
            "{}\n\n{}",
            USAGE_HINT,
            Cli::command().render_usage()
        )),
        _ => ParseOutcome::Usage(err.to_string()),
    })
}
