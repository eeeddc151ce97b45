//! Source file in, packed bytes appended to the output file.

use std::fs::{self, OpenOptions};
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

use symbol_pack::{BitPacker, ByteSink, IoSink, PackError, PackerConfig, Sanitizer};
use thiserror::Error;

use crate::source::Numbers;

#[derive(Debug, Error)]
pub enum RunError {
    #[error("Could not open source file {}: {source}", path.display())]
    Source {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not open output file {}: {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Pack(#[from] PackError),
}

/// Counters for one packing run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub tokens: usize,
    pub malformed: usize,
    pub retained: usize,
    pub discarded: usize,
    pub bytes_written: usize,
    /// Bits left in the accumulator at end of input.
    pub leftover_bits: u32,
    pub tail_flushed: bool,
}

/// Packs every number in `text` into `sink`.
pub fn pack_text<S: ByteSink>(
    config: PackerConfig,
    text: &[u8],
    sink: S,
) -> Result<(RunSummary, S), PackError> {
    let mut packer = BitPacker::with_sink(config, sink)?;
    let mut sanitizer = Sanitizer::new(config.sanitize, config.bits_per_symbol);
    let mut numbers = Numbers::new(text);

    for raw in numbers.by_ref() {
        if let Some(symbol) = sanitizer.sanitize(raw) {
            packer.push(symbol)?;
        }
    }

    let leftover_bits = packer.valid_bits();
    let tail = packer.finish()?;

    let summary = RunSummary {
        tokens: numbers.tokens_seen(),
        malformed: numbers.malformed(),
        retained: sanitizer.retained(),
        discarded: sanitizer.discarded(),
        bytes_written: packer.bytes_emitted(),
        leftover_bits,
        tail_flushed: tail.is_some(),
    };
    Ok((summary, packer.into_sink()))
}

/// Reads `source`, then appends the packed stream to `output`, creating it
/// if needed.
#[tracing::instrument(skip(config), fields(bits = config.bits_per_symbol, policy = %config.sanitize))]
pub fn run(config: PackerConfig, source: &Path, output: &Path) -> Result<RunSummary, RunError> {
    let text = fs::read(source).map_err(|source_err| RunError::Source {
        path: source.to_path_buf(),
        source: source_err,
    })?;
    tracing::debug!(bytes = text.len(), "read source file");

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(output)
        .map_err(|source_err| RunError::Output {
            path: output.to_path_buf(),
            source: source_err,
        })?;

    let (summary, mut sink) = pack_text(config, &text, IoSink::new(BufWriter::new(file)))?;
    sink.flush()?;

    if summary.discarded > 0 {
        tracing::warn!(discarded = summary.discarded, "dropped out-of-range numbers");
    }
    if summary.malformed > 0 {
        tracing::warn!(malformed = summary.malformed, "dropped malformed tokens");
    }
    if summary.leftover_bits > 0 && !summary.tail_flushed {
        tracing::debug!(bits = summary.leftover_bits, "trailing bits not written");
    }

    Ok(summary)
}
