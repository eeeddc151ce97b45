//! # symbol_pack
//!
//! A `no_std` compatible packer for streams of small fixed-width symbols.
//!
//! ```rust
//! use symbol_pack::{pack, unpack, PackerConfig};
//!
//! // Raw values 1..=64 stored as 6-bit symbols 0..=63
//! let config = PackerConfig::skip6().with_flush_on_finish(true);
//! let bytes = pack(config, [4, 11, 63]).unwrap();
//! assert_eq!(bytes, vec![0xC4, 0xF2, 0x03]);
//!
//! assert_eq!(unpack(&bytes, 6, 3).unwrap(), vec![4, 11, 63]);
//! ```
//!
//! ## Dropped tail
//!
//! ```rust
//! use symbol_pack::{pack, PackerConfig};
//!
//! // 3 × 5 bits = 15 bits: one whole byte, 7 bits left over and dropped
//! let bytes = pack(PackerConfig::wrap5(), [1, 2, 3]).unwrap();
//! assert_eq!(bytes.len(), 1);
//! ```
//!

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod error;
pub use error::PackError;

mod bit_ops;

pub mod config;
pub mod packer;
pub mod reader;
pub mod sanitize;
pub mod sink;

pub use config::{MAX_BITS_PER_SYMBOL, PackerConfig};
pub use packer::{BitPacker, pack};
pub use reader::{SymbolReader, unpack};
pub use sanitize::{SanitizePolicy, Sanitizer, restore_raw};
pub use sink::ByteSink;

#[cfg(feature = "std")]
pub use sink::IoSink;
