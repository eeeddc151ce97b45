//! Thin file wrapper around [`symbol_pack`]: numbers from a text file in,
//! packed bytes appended to a binary file.

pub mod cli;
pub mod logging;
pub mod run;
pub mod source;

pub use run::{RunError, RunSummary, pack_text, run};
